pub mod error;
pub mod suffix;
pub mod lexicon;
pub mod entry;
pub mod verb;
pub mod data;
pub mod dictionary;

pub use dictionary::{LatinDictionary, ResolverConfig};
pub use entry::{DictionaryEntry, Entry, Flags, PartOfSpeech};
pub use error::{LexiconError, Result};
pub use lexicon::{EntryRepository, lookup_key};
pub use suffix::SuffixTable;
pub use verb::{Conjugation, GeneratedForm, Inflection, Stem, VerbEntry};
