//! Per-letter morpheme tagging with an external sequence classifier.
//!
//! A word form is turned into one numeric and one categorical feature vector
//! per letter, the whole sequence is handed to a trained classifier, and the
//! returned class indices become [`PhemTag`](phem_core::PhemTag)s on the
//! word form.
//!
//! - [`dictionary`] -- Corpus prefix/suffix statistics
//! - [`features`] -- Letter feature extraction and word feature sequences
//! - [`classifier`] -- The sequence classifier interface
//! - [`tagger`] -- End-to-end classification of a word form
//! - [`evaluate`] -- Segmentation quality against gold parses

pub mod classifier;
pub mod dictionary;
pub mod evaluate;
pub mod features;
pub mod tagger;

pub use classifier::SequenceClassifier;
pub use dictionary::{AffixDictionary, AffixLookup, DictionaryError};
pub use features::{CatFeatures, FeatureExtractor, FeatureSequence, NumFeatures};
pub use tagger::PhemTagger;
