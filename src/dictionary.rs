use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::data;
use crate::entry::Entry;
use crate::error::Result;
use crate::lexicon::EntryRepository;
use crate::suffix::SuffixTable;

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}+").expect("word pattern is valid"));

/// Resolver settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Particles that may be attached to the end of a word, tried in order.
    pub enclitics: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            enclitics: vec!["ne".to_string(), "que".to_string()],
        }
    }
}

impl ResolverConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Resolves inflected surface forms against a loaded dictionary.
///
/// Both tables are read-only once the dictionary is built, so a
/// `LatinDictionary` can be shared across threads freely.
#[derive(Debug)]
pub struct LatinDictionary {
    entries: EntryRepository,
    suffixes: SuffixTable,
    enclitics: Vec<String>,
}

impl LatinDictionary {
    pub fn new(entries: EntryRepository, suffixes: SuffixTable) -> Self {
        Self::with_config(entries, suffixes, ResolverConfig::default())
    }

    pub fn with_config(
        entries: EntryRepository,
        suffixes: SuffixTable,
        config: ResolverConfig,
    ) -> Self {
        let enclitics = config
            .enclitics
            .iter()
            .map(|e| e.to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self {
            entries,
            suffixes,
            enclitics,
        }
    }

    /// Builds a dictionary from the text of a dictionary feed and a suffix feed.
    pub fn from_sources(dictionary: &str, suffixes: &str) -> Result<Self> {
        Ok(Self::new(
            data::parse_dictionary(dictionary)?,
            data::parse_suffixes(suffixes)?,
        ))
    }

    pub fn open(dictionary: impl AsRef<Path>, suffixes: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(
            data::load_dictionary(dictionary)?,
            data::load_suffixes(suffixes)?,
        ))
    }

    pub fn entries(&self) -> &EntryRepository {
        &self.entries
    }

    pub fn suffixes(&self) -> &SuffixTable {
        &self.suffixes
    }

    pub fn enclitics(&self) -> &[String] {
        &self.enclitics
    }

    /// Entries matching `word`, or an empty vec when nothing matches.
    ///
    /// A plain hit yields one entry. A word carrying an enclitic yields the
    /// entries of the bare word followed by the entries of the enclitic.
    /// When several root candidates are in the dictionary the first one wins.
    pub fn resolve(&self, word: &str) -> Vec<&Entry> {
        self.resolve_at(&word.to_lowercase(), 0)
    }

    /// Splits `text` into words and resolves each of them.
    pub fn resolve_text<'a>(&'a self, text: &'a str) -> Vec<(&'a str, Vec<&'a Entry>)> {
        WORD_PATTERN
            .find_iter(text)
            .map(|m| (m.as_str(), self.resolve(m.as_str())))
            .collect()
    }

    /// The word itself, then every suffix-table rewrite of it.
    fn root_candidates<'a>(&'a self, word: &'a str) -> impl Iterator<Item = String> + 'a {
        std::iter::once(word.to_string()).chain(self.suffixes.candidates(word))
    }

    // Depth counts enclitic strips and is capped at the number of enclitics.
    fn resolve_at(&self, word: &str, depth: usize) -> Vec<&Entry> {
        if let Some((root, entry)) = self
            .root_candidates(word)
            .find_map(|root| self.entries.get(&root).map(|entry| (root, entry)))
        {
            trace!(word, root = %root, "resolved root");
            return vec![entry];
        }

        if depth >= self.enclitics.len() {
            return Vec::new();
        }

        for enclitic in &self.enclitics {
            let Some(remainder) = word.strip_suffix(enclitic.as_str()) else {
                continue;
            };
            if remainder.is_empty() {
                continue;
            }
            let particle = self.resolve_at(enclitic, depth + 1);
            if particle.is_empty() {
                continue;
            }
            let mut resolved = self.resolve_at(remainder, depth + 1);
            if !resolved.is_empty() {
                trace!(word, enclitic = %enclitic, "stripped enclitic");
                resolved.extend(particle);
                return resolved;
            }
        }

        trace!(word, "unresolved");
        Vec::new()
    }
}
