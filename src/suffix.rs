use std::collections::{BTreeMap, BTreeSet};

use crate::error::{LexiconError, Result};

/// Maps an apparent ending to the endings it may stand for once the
/// contraction is undone, e.g. `"ae"` -> `{"a"}`.
///
/// Append-only: keys are never removed and repeated keys merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixTable {
    replacements: BTreeMap<String, BTreeSet<String>>,
}

impl SuffixTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `replacements` into the set for `suffix`, creating it if absent.
    pub fn add<I, S>(&mut self, suffix: impl Into<String>, replacements: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.replacements
            .entry(suffix.into())
            .or_default()
            .extend(replacements.into_iter().map(Into::into));
    }

    pub fn get(&self, suffix: &str) -> Option<&BTreeSet<String>> {
        self.replacements.get(suffix)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.replacements.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Every rewrite of `word` obtained by swapping a matching suffix key
    /// for one of its replacements. `word` itself is not included.
    pub fn candidates<'a>(&'a self, word: &'a str) -> impl Iterator<Item = String> + 'a {
        self.iter()
            .filter_map(move |(suffix, replacements)| {
                word.strip_suffix(suffix).map(|stem| (stem, replacements))
            })
            .flat_map(|(stem, replacements)| {
                replacements.iter().map(move |r| format!("{stem}{r}"))
            })
    }

    /// Parses one `SUFFIX|R1,R2,...` line and merges it into the table.
    /// `line_no` is only used for error reporting.
    pub(crate) fn add_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        let malformed = || LexiconError::MalformedSuffix {
            line: line_no,
            text: line.to_string(),
        };
        let (suffix, rest) = line.split_once('|').ok_or_else(malformed)?;
        if suffix.is_empty() {
            return Err(malformed());
        }
        self.add(suffix, rest.split(','));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_merges_repeated_keys() {
        let mut table = SuffixTable::new();
        table.add("ae", ["a"]);
        table.add("ae", ["as", "a"]);
        let set = table.get("ae").unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("a"));
        assert!(set.contains("as"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_candidates_replace_matching_suffix() {
        let mut table = SuffixTable::new();
        table.add("ae", ["a"]);
        table.add("is", ["us", "um"]);
        let found: Vec<String> = table.candidates("aquae").collect();
        assert_eq!(found, vec!["aqua".to_string()]);

        let found: Vec<String> = table.candidates("dominis").collect();
        assert_eq!(found, vec!["dominum".to_string(), "dominus".to_string()]);
    }

    #[test]
    fn test_candidates_empty_when_nothing_matches() {
        let mut table = SuffixTable::new();
        table.add("ae", ["a"]);
        assert_eq!(table.candidates("rex").count(), 0);
    }

    #[test]
    fn test_add_line_empty_replacement() {
        let mut table = SuffixTable::new();
        table.add_line(1, "um|").unwrap();
        assert!(table.get("um").unwrap().contains(""));
    }

    #[test]
    fn test_add_line_rejects_missing_separator() {
        let mut table = SuffixTable::new();
        let err = table.add_line(7, "ae a").unwrap_err();
        assert!(matches!(err, LexiconError::MalformedSuffix { line: 7, .. }));
        assert!(table.add_line(8, "|a").is_err());
    }
}
