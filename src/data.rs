use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::entry::Entry;
use crate::error::{LexiconError, Result};
use crate::lexicon::EntryRepository;
use crate::suffix::SuffixTable;

// #headword  POS ... [AGFQS] :: definition
//           ^^ exactly two spaces before the part of speech
static RECORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(.*)  ([A-Z].*)\[(.....)\] :: (.*)$").expect("record pattern is valid")
});

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a suffix feed. Blank lines and `#` comments are skipped; every
/// other line is `SUFFIX|R1,R2,...` and repeated suffixes merge.
pub fn parse_suffixes(text: &str) -> Result<SuffixTable> {
    let mut table = SuffixTable::new();
    for (i, line) in text.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        table.add_line(i + 1, line)?;
    }
    debug!(suffixes = table.len(), "loaded suffix table");
    Ok(table)
}

/// Parses a dictionary feed into a repository keyed by lookup key.
///
/// Stops at the first line that is neither blank nor a well-formed record.
pub fn parse_dictionary(text: &str) -> Result<EntryRepository> {
    let mut repository = EntryRepository::new();
    let mut records = 0usize;
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let captures = RECORD_PATTERN
            .captures(line)
            .ok_or_else(|| LexiconError::MalformedRecord {
                line: i + 1,
                text: line.to_string(),
            })?;
        let entry = Entry::from_record(
            captures[1].trim(),
            captures[2].trim(),
            captures[3].trim(),
            captures[4].trim(),
        );
        repository.insert(entry);
        records += 1;
    }
    debug!(records, entries = repository.len(), "loaded dictionary");
    Ok(repository)
}

pub fn load_suffixes(path: impl AsRef<Path>) -> Result<SuffixTable> {
    parse_suffixes(&read(path.as_ref())?)
}

pub fn load_dictionary(path: impl AsRef<Path>) -> Result<EntryRepository> {
    parse_dictionary(&read(path.as_ref())?)
}
