//! Shared types for per-letter morpheme tagging of Russian word forms.
//!
//! # Architecture
//!
//! - [`letter`] -- Letter units, uppercasing, vowel/consonant classes
//! - [`frequency`] -- Process-wide letter-frequency table
//! - [`morph`] -- Morphological readings supplied by the analyzer
//! - [`word_form`] -- Word forms and per-letter [`PhemTag`]s
//! - [`morpheme`] -- Grouping tags into morphemes, parse notation

pub mod frequency;
pub mod letter;
pub mod morph;
pub mod morpheme;
pub mod word_form;

pub use letter::{Letter, LetterClass, UniString};
pub use morph::MorphInfo;
pub use word_form::{PhemTag, WordForm};

/// Error type shared by the tagging pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PhemError {
    /// The letter has no entry in the frequency table.
    #[error("letter {0:?} has no frequency weight")]
    UnknownLetter(String),
    /// The letter is outside the vowel/consonant classification.
    #[error("letter {0:?} is not in the alphabet")]
    UnclassifiedLetter(String),
    /// A per-letter sequence does not have one entry per letter.
    #[error("sequence length mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("letter index {index} out of range for word of {len} letters")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("word form {0:?} has no morphological readings")]
    NoReadings(String),
    #[error("invalid morphemic parse: {0}")]
    InvalidParse(String),
}
