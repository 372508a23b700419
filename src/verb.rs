use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::entry::{DictionaryEntry, PartOfSpeech};

static VERB_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"V \(([12345])..\)").expect("verb pattern is valid"));

/// Marker stripped from the infinitive to obtain the present stem.
const INFINITIVE_ENDING: &str = "re";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Conjugation {
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
    Fifth = 5,
}

impl Conjugation {
    pub fn from_number(n: u8) -> Option<Self> {
        Some(match n {
            1 => Conjugation::First,
            2 => Conjugation::Second,
            3 => Conjugation::Third,
            4 => Conjugation::Fourth,
            5 => Conjugation::Fifth,
            _ => return None,
        })
    }

    pub fn number(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    First,
    Second,
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Number {
    Singular,
    Plural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Indicative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Present,
    Imperfect,
    Future,
}

/// Person, number, mood, voice and tense of one verb form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Inflection {
    pub person: Person,
    pub number: Number,
    pub mood: Mood,
    pub voice: Voice,
    pub tense: Tense,
}

impl Inflection {
    pub const fn indicative_active(person: Person, number: Number, tense: Tense) -> Self {
        Self {
            person,
            number,
            mood: Mood::Indicative,
            voice: Voice::Active,
            tense,
        }
    }
}

const fn ia(person: Person, number: Number, tense: Tense) -> Inflection {
    Inflection::indicative_active(person, number, tense)
}

const PRESENT: [Inflection; 5] = [
    ia(Person::Second, Number::Singular, Tense::Present),
    ia(Person::Third, Number::Singular, Tense::Present),
    ia(Person::First, Number::Plural, Tense::Present),
    ia(Person::Second, Number::Plural, Tense::Present),
    ia(Person::Third, Number::Plural, Tense::Present),
];

const IMPERFECT: [Inflection; 6] = [
    ia(Person::First, Number::Singular, Tense::Imperfect),
    ia(Person::Second, Number::Singular, Tense::Imperfect),
    ia(Person::Third, Number::Singular, Tense::Imperfect),
    ia(Person::First, Number::Plural, Tense::Imperfect),
    ia(Person::Second, Number::Plural, Tense::Imperfect),
    ia(Person::Third, Number::Plural, Tense::Imperfect),
];

// Future "-bi-" forms, tagged Imperfect. Known mistag, kept as is.
const FUTURE_BI: [Inflection; 4] = [
    ia(Person::Second, Number::Singular, Tense::Imperfect),
    ia(Person::Third, Number::Singular, Tense::Imperfect),
    ia(Person::First, Number::Plural, Tense::Imperfect),
    ia(Person::Second, Number::Plural, Tense::Imperfect),
];

/// One surface string tagged with its grammatical features.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedForm<'a> {
    pub form: String,
    pub conjugation: Conjugation,
    #[serde(flatten)]
    pub inflection: Inflection,
    #[serde(skip)]
    pub entry: &'a VerbEntry,
}

/// A unit of the paradigm: either one explicit form, or a stem shared by
/// several inflections.
///
/// Generated stems are not phonetically complete words: each inflection
/// receives the stem itself as its surface string.
#[derive(Debug, Clone, PartialEq)]
pub enum Stem<'a> {
    Specific {
        form: String,
        inflection: Inflection,
        entry: &'a VerbEntry,
    },
    Generated {
        stem: String,
        inflections: Vec<Inflection>,
        entry: &'a VerbEntry,
    },
}

impl<'a> Stem<'a> {
    fn specific(entry: &'a VerbEntry, form: String, inflection: Inflection) -> Self {
        Stem::Specific {
            form,
            inflection,
            entry,
        }
    }

    fn generated(entry: &'a VerbEntry, stem: String, inflections: &[Inflection]) -> Self {
        Stem::Generated {
            stem,
            inflections: inflections.to_vec(),
            entry,
        }
    }

    pub fn entry(&self) -> &'a VerbEntry {
        match self {
            Stem::Specific { entry, .. } | Stem::Generated { entry, .. } => entry,
        }
    }

    /// One [`GeneratedForm`] per inflection, in insertion order.
    pub fn forms(&self) -> Vec<GeneratedForm<'a>> {
        let entry = self.entry();
        let make = |form: &str, inflection: Inflection| GeneratedForm {
            form: form.to_string(),
            conjugation: entry.conjugation,
            inflection,
            entry,
        };
        match self {
            Stem::Specific {
                form, inflection, ..
            } => vec![make(form.as_str(), *inflection)],
            Stem::Generated {
                stem, inflections, ..
            } => inflections.iter().map(|i| make(stem.as_str(), *i)).collect(),
        }
    }
}

/// A dictionary entry whose descriptor names a conjugation class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerbEntry {
    #[serde(flatten)]
    base: DictionaryEntry,
    conjugation: Conjugation,
}

impl VerbEntry {
    /// Returns `None` unless `pos` contains a descriptor like `V (1st)`.
    pub fn try_parse(headword: &str, pos: &str, flags: &str, definition: &str) -> Option<Self> {
        let captures = VERB_PATTERN.captures(pos)?;
        let n = captures[1].parse::<u8>().ok()?;
        let conjugation = Conjugation::from_number(n)?;
        let mut base = DictionaryEntry::new(headword, pos, flags, definition);
        base.part_of_speech = PartOfSpeech::Verb;
        Some(Self { base, conjugation })
    }

    pub fn base(&self) -> &DictionaryEntry {
        &self.base
    }

    pub fn headword(&self) -> &str {
        &self.base.headword
    }

    pub fn conjugation(&self) -> Conjugation {
        self.conjugation
    }

    /// The first comma-separated segment of the headword, trimmed.
    pub fn first_principal_part(&self) -> &str {
        self.base
            .headword
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
    }

    /// The second principal part with one trailing `"re"` removed.
    ///
    /// `None` when there is no second part or it does not end in `"re"`
    /// (deponents, irregulars such as `esse`).
    pub fn present_stem(&self) -> Option<&str> {
        self.base
            .headword
            .split(',')
            .nth(1)
            .map(str::trim)
            .and_then(|part| part.strip_suffix(INFINITIVE_ENDING))
    }

    /// The paradigm as a lazy sequence of stems. Calling it again restarts
    /// from the beginning.
    pub fn stems(&self) -> impl Iterator<Item = Stem<'_>> {
        let first = Stem::specific(
            self,
            self.first_principal_part().to_string(),
            ia(Person::First, Number::Singular, Tense::Present),
        );
        std::iter::once(first).chain(
            self.present_stem()
                .into_iter()
                .flat_map(move |stem| self.regular_stems(stem)),
        )
    }

    fn regular_stems(&self, stem: &str) -> [Stem<'_>; 5] {
        [
            Stem::generated(self, stem.to_string(), &PRESENT),
            Stem::generated(self, format!("{stem}ba"), &IMPERFECT),
            Stem::specific(
                self,
                format!("{stem}bo"),
                ia(Person::First, Number::Singular, Tense::Future),
            ),
            Stem::generated(self, format!("{stem}bi"), &FUTURE_BI),
            Stem::specific(
                self,
                format!("{stem}bunt"),
                ia(Person::Third, Number::Plural, Tense::Future),
            ),
        ]
    }

    /// Every form of [`VerbEntry::stems`], flattened.
    pub fn generated_forms(&self) -> impl Iterator<Item = GeneratedForm<'_>> {
        self.stems().flat_map(|stem| stem.forms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verb(headword: &str) -> VerbEntry {
        VerbEntry::try_parse(headword, "V (1st)", "XXXAO", "test").unwrap()
    }

    #[test]
    fn test_try_parse_conjugation() {
        let v = VerbEntry::try_parse("rego, regere, rexi, rectus", "V (3rd)", "XXXAX", "rule")
            .unwrap();
        assert_eq!(v.conjugation(), Conjugation::Third);
        assert_eq!(v.conjugation().number(), 3);
        assert_eq!(v.base().part_of_speech, PartOfSpeech::Verb);
    }

    #[test]
    fn test_try_parse_rejects_non_verb() {
        assert!(VerbEntry::try_parse("aqua, aquae", "N (1st) F", "XXXAO", "water").is_none());
        assert!(VerbEntry::try_parse("sum, esse", "V", "XXXAO", "be").is_none());
        assert!(VerbEntry::try_parse("x, xre", "V (6th)", "XXXAO", "x").is_none());
    }

    #[test]
    fn test_principal_parts() {
        let v = verb("amo, amare, amavi, amatus");
        assert_eq!(v.first_principal_part(), "amo");
        assert_eq!(v.present_stem(), Some("ama"));
    }

    #[test]
    fn test_present_stem_strips_once() {
        assert_eq!(verb("gero, gerere, gessi, gestus").present_stem(), Some("gere"));
        assert_eq!(verb("sum, esse, fui, futurus").present_stem(), None);
        assert_eq!(verb("inquam").present_stem(), None);
    }

    #[test]
    fn test_stems_shape() {
        let v = verb("amo, amare");
        let stems: Vec<Stem> = v.stems().collect();
        assert_eq!(stems.len(), 6);
        match &stems[2] {
            Stem::Generated {
                stem, inflections, ..
            } => {
                assert_eq!(stem, "amaba");
                assert_eq!(inflections.len(), 6);
            }
            other => panic!("expected generated stem, got {other:?}"),
        }
    }

    #[test]
    fn test_undecomposable_yields_only_first_part() {
        let v = verb("sum, esse");
        let forms: Vec<GeneratedForm> = v.generated_forms().collect();
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].form, "sum");
        assert!(std::ptr::eq(forms[0].entry, &v));
    }

    #[test]
    fn test_generated_forms_restartable() {
        let v = verb("amo, amare");
        let first: Vec<GeneratedForm> = v.generated_forms().collect();
        let second: Vec<GeneratedForm> = v.generated_forms().collect();
        assert_eq!(first.len(), 1 + 5 + 6 + 1 + 4 + 1);
        assert_eq!(first, second);
    }
}
