use std::collections::HashMap;

use tracing::debug;

use crate::entry::Entry;

/// Normalized join key for a headword: its leading run of letters, lower-cased.
///
/// `"amo, amare, amavi, amatum"` -> `"amo"`. A headword that starts with a
/// non-letter yields the empty string.
pub fn lookup_key(headword: &str) -> String {
    let end = headword
        .char_indices()
        .find(|(_, c)| !c.is_alphabetic())
        .map_or(headword.len(), |(i, _)| i);
    headword[..end].to_lowercase()
}

/// Dictionary entries keyed by [`lookup_key`], one entry per key.
///
/// Keys are lossy, so two headwords with the same leading letters collide and
/// the later `put` replaces the earlier one.
#[derive(Debug, Default)]
pub struct EntryRepository {
    entries: HashMap<String, Entry>,
}

impl EntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: impl Into<String>, entry: Entry) {
        let key = key.into();
        if let Some(previous) = self.entries.insert(key.clone(), entry) {
            debug!(
                key = %key,
                replaced = previous.headword(),
                "duplicate lookup key, keeping last entry"
            );
        }
    }

    /// Stores `entry` under the lookup key of its own headword.
    pub fn insert(&mut self, entry: Entry) {
        self.put(lookup_key(entry.headword()), entry);
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<Entry> for EntryRepository {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        let mut repository = Self::new();
        for entry in iter {
            repository.insert(entry);
        }
        repository
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(headword: &str, pos: &str) -> Entry {
        Entry::from_record(headword, pos, "XXXAO", "test")
    }

    #[test]
    fn test_lookup_key_principal_parts() {
        assert_eq!(lookup_key("amo, amare, amavi, amatum"), "amo");
        assert_eq!(lookup_key("et"), "et");
        assert_eq!(lookup_key("Roma, Romae"), "roma");
    }

    #[test]
    fn test_lookup_key_leading_non_letter() {
        assert_eq!(lookup_key("-que"), "");
        assert_eq!(lookup_key(""), "");
    }

    #[test]
    fn test_put_last_write_wins() {
        let mut repo = EntryRepository::new();
        repo.put("est", word("est", "ADV"));
        repo.put("est", word("est, esse", "CONJ"));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get("est").unwrap().headword(), "est, esse");
    }

    #[test]
    fn test_collect_uses_lookup_key() {
        let repo: EntryRepository = [word("aqua, aquae", "N (1st) F"), word("et", "CONJ")]
            .into_iter()
            .collect();
        assert!(repo.contains("aqua"));
        assert!(repo.contains("et"));
        assert!(repo.get("aquae").is_none());
    }
}
