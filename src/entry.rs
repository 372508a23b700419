use serde::Serialize;

use crate::error::{LexiconError, Result};
use crate::verb::{GeneratedForm, VerbEntry};

/// Broad grammatical category of a dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Pronoun,
    Interjection,
    Numeral,
    Unknown,
}

impl PartOfSpeech {
    /// Category of a non-verb descriptor such as `"N (1st) F"` or `"PREP ABL"`,
    /// taken from its leading token. Verbs are recognized by
    /// [`VerbEntry::try_parse`], so a bare `"V"` lands in `Unknown`.
    pub fn from_descriptor(pos: &str) -> Self {
        match pos.split_whitespace().next().unwrap_or_default() {
            "N" => PartOfSpeech::Noun,
            "ADJ" => PartOfSpeech::Adjective,
            "ADV" => PartOfSpeech::Adverb,
            "PREP" => PartOfSpeech::Preposition,
            "CONJ" => PartOfSpeech::Conjunction,
            "PRON" => PartOfSpeech::Pronoun,
            "INTERJ" => PartOfSpeech::Interjection,
            "NUM" => PartOfSpeech::Numeral,
            _ => PartOfSpeech::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Age {
    Unknown,
    Archaic,
    Early,
    Classical,
    Late,
    Later,
    Medieval,
    Scholar,
    Modern,
}

impl Age {
    pub fn from_code(code: char) -> Option<Self> {
        Some(match code {
            'X' => Age::Unknown,
            'A' => Age::Archaic,
            'B' => Age::Early,
            'C' => Age::Classical,
            'D' => Age::Late,
            'E' => Age::Later,
            'F' => Age::Medieval,
            'G' => Age::Scholar,
            'H' => Age::Modern,
            _ => return None,
        })
    }
}

/// Subject area a word belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Area {
    General,
    Agriculture,
    Biological,
    Drama,
    Ecclesiastic,
    Grammar,
    Legal,
    Poetic,
    Science,
    Technical,
    War,
    Mythology,
}

impl Area {
    pub fn from_code(code: char) -> Option<Self> {
        Some(match code {
            'X' => Area::General,
            'A' => Area::Agriculture,
            'B' => Area::Biological,
            'D' => Area::Drama,
            'E' => Area::Ecclesiastic,
            'G' => Area::Grammar,
            'L' => Area::Legal,
            'P' => Area::Poetic,
            'S' => Area::Science,
            'T' => Area::Technical,
            'W' => Area::War,
            'Y' => Area::Mythology,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Geography {
    General,
    Africa,
    Britain,
    China,
    Scandinavia,
    Egypt,
    Gaul,
    Germany,
    Greece,
    Italy,
    India,
    Balkans,
    Netherlands,
    Persia,
    NearEast,
    Russia,
    Iberia,
    EasternEurope,
}

impl Geography {
    pub fn from_code(code: char) -> Option<Self> {
        Some(match code {
            'X' => Geography::General,
            'A' => Geography::Africa,
            'B' => Geography::Britain,
            'C' => Geography::China,
            'D' => Geography::Scandinavia,
            'E' => Geography::Egypt,
            'F' => Geography::Gaul,
            'G' => Geography::Germany,
            'H' => Geography::Greece,
            'I' => Geography::Italy,
            'J' => Geography::India,
            'K' => Geography::Balkans,
            'N' => Geography::Netherlands,
            'P' => Geography::Persia,
            'Q' => Geography::NearEast,
            'R' => Geography::Russia,
            'S' => Geography::Iberia,
            'U' => Geography::EasternEurope,
            _ => return None,
        })
    }
}

/// How often a word is attested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Frequency {
    Unspecified,
    /// Top 1000 words.
    VeryFrequent,
    /// Next 2000 words.
    Frequent,
    /// Top 10000 words.
    Common,
    /// Top 20000 words.
    Lesser,
    /// 2-3 citations.
    Uncommon,
    /// A single citation.
    VeryRare,
    Inscription,
    Graffiti,
    Pliny,
}

impl Frequency {
    pub fn from_code(code: char) -> Option<Self> {
        Some(match code {
            'X' => Frequency::Unspecified,
            'A' => Frequency::VeryFrequent,
            'B' => Frequency::Frequent,
            'C' => Frequency::Common,
            'D' => Frequency::Lesser,
            'E' => Frequency::Uncommon,
            'F' => Frequency::VeryRare,
            'I' => Frequency::Inscription,
            'M' => Frequency::Graffiti,
            'N' => Frequency::Pliny,
            _ => return None,
        })
    }
}

/// The five-letter `[XXXXX]` code of a dictionary record: age, area,
/// geography, frequency and source dictionary, in that order.
///
/// Stored verbatim; decoding is best effort and never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Flags(String);

impl Flags {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn code(&self, column: usize) -> Option<char> {
        self.0.chars().nth(column)
    }

    pub fn age(&self) -> Option<Age> {
        self.code(0).and_then(Age::from_code)
    }

    pub fn area(&self) -> Option<Area> {
        self.code(1).and_then(Area::from_code)
    }

    pub fn geography(&self) -> Option<Geography> {
        self.code(2).and_then(Geography::from_code)
    }

    pub fn frequency(&self) -> Option<Frequency> {
        self.code(3).and_then(Frequency::from_code)
    }

    /// Letter of the source dictionary (`'S'` is Lewis and Short, `'O'` the OLD, ...).
    pub fn source(&self) -> Option<char> {
        self.code(4)
    }
}

/// Attributes shared by every dictionary entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DictionaryEntry {
    /// Full headword; for verbs the comma-separated principal parts.
    pub headword: String,
    pub definition: String,
    /// Raw part-of-speech descriptor, e.g. `"V (1st)"`.
    pub pos: String,
    pub flags: Flags,
    pub part_of_speech: PartOfSpeech,
}

impl DictionaryEntry {
    pub fn new(headword: &str, pos: &str, flags: &str, definition: &str) -> Self {
        Self {
            headword: headword.to_string(),
            definition: definition.to_string(),
            pos: pos.to_string(),
            flags: Flags::new(flags),
            part_of_speech: PartOfSpeech::from_descriptor(pos),
        }
    }
}

/// A dictionary entry, specialized when its descriptor names a conjugation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Verb(VerbEntry),
    Word(DictionaryEntry),
}

impl Entry {
    /// Builds an entry from the four fields of a parsed dictionary record.
    pub fn from_record(headword: &str, pos: &str, flags: &str, definition: &str) -> Self {
        match VerbEntry::try_parse(headword, pos, flags, definition) {
            Some(verb) => Entry::Verb(verb),
            None => Entry::Word(DictionaryEntry::new(headword, pos, flags, definition)),
        }
    }

    pub fn base(&self) -> &DictionaryEntry {
        match self {
            Entry::Verb(verb) => verb.base(),
            Entry::Word(word) => word,
        }
    }

    pub fn headword(&self) -> &str {
        &self.base().headword
    }

    pub fn definition(&self) -> &str {
        &self.base().definition
    }

    pub fn flags(&self) -> &Flags {
        &self.base().flags
    }

    pub fn part_of_speech(&self) -> PartOfSpeech {
        self.base().part_of_speech
    }

    pub fn as_verb(&self) -> Option<&VerbEntry> {
        match self {
            Entry::Verb(verb) => Some(verb),
            Entry::Word(_) => None,
        }
    }

    /// The verb paradigm of this entry, or [`LexiconError::NotAVerb`].
    pub fn generated_forms(&self) -> Result<impl Iterator<Item = GeneratedForm<'_>>> {
        match self {
            Entry::Verb(verb) => Ok(verb.generated_forms()),
            Entry::Word(word) => Err(LexiconError::NotAVerb {
                headword: word.headword.clone(),
                part_of_speech: word.part_of_speech,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_of_speech_from_descriptor() {
        assert_eq!(PartOfSpeech::from_descriptor("N (1st) F"), PartOfSpeech::Noun);
        assert_eq!(PartOfSpeech::from_descriptor("PREP ABL"), PartOfSpeech::Preposition);
        assert_eq!(PartOfSpeech::from_descriptor("CONJ"), PartOfSpeech::Conjunction);
        assert_eq!(PartOfSpeech::from_descriptor("V"), PartOfSpeech::Unknown);
        assert_eq!(PartOfSpeech::from_descriptor(""), PartOfSpeech::Unknown);
    }

    #[test]
    fn test_from_record_verb() {
        let entry = Entry::from_record("amo, amare, amavi, amatus", "V (1st)", "XXXAO", "love");
        assert_eq!(entry.part_of_speech(), PartOfSpeech::Verb);
        assert!(entry.as_verb().is_some());
        assert_eq!(entry.definition(), "love");
    }

    #[test]
    fn test_from_record_noun() {
        let entry = Entry::from_record("aqua, aquae", "N (1st) F", "XXXAO", "water");
        assert_eq!(entry.part_of_speech(), PartOfSpeech::Noun);
        assert!(entry.as_verb().is_none());
    }

    #[test]
    fn test_generated_forms_rejects_non_verb() {
        let entry = Entry::from_record("et", "CONJ", "XXXAX", "and");
        let err = entry.generated_forms().err().unwrap();
        assert!(matches!(
            err,
            LexiconError::NotAVerb { part_of_speech: PartOfSpeech::Conjunction, .. }
        ));
    }

    #[test]
    fn test_flags_decoding() {
        let flags = Flags::new("CWIBS");
        assert_eq!(flags.age(), Some(Age::Classical));
        assert_eq!(flags.area(), Some(Area::War));
        assert_eq!(flags.geography(), Some(Geography::Italy));
        assert_eq!(flags.frequency(), Some(Frequency::Frequent));
        assert_eq!(flags.source(), Some('S'));
    }

    #[test]
    fn test_flags_unknown_codes() {
        let flags = Flags::new("Z");
        assert_eq!(flags.age(), None);
        assert_eq!(flags.area(), None);
        assert_eq!(flags.source(), None);
    }
}
