use std::path::PathBuf;

use thiserror::Error;

use crate::entry::PartOfSpeech;

pub type Result<T, E = LexiconError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum LexiconError {
    /// A suffix feed line that is not `SUFFIX|REPLACEMENT,...`.
    #[error("malformed suffix record on line {line}: {text:?}")]
    MalformedSuffix { line: usize, text: String },

    /// A dictionary feed line that does not match the record layout.
    #[error("malformed dictionary record on line {line}: {text:?}")]
    MalformedRecord { line: usize, text: String },

    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid resolver configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Paradigm generation was requested for an entry that is not a verb.
    #[error("'{headword}' is a {part_of_speech:?}, not a verb")]
    NotAVerb {
        headword: String,
        part_of_speech: PartOfSpeech,
    },
}
