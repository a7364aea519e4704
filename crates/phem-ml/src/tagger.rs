// Morpheme tagger: features -> classifier -> per-letter tags.

use phem_core::{PhemError, PhemTag, WordForm};

use crate::classifier::SequenceClassifier;
use crate::dictionary::AffixLookup;
use crate::features::{FeatureExtractor, FeatureSequence, dump_features};

/// Tags every letter of a word form with its morpheme role.
///
/// Holds no per-word state; one tagger can classify any number of word
/// forms, from several threads at once.
pub struct PhemTagger<'a> {
    extractor: FeatureExtractor<'a>,
    classifier: &'a dyn SequenceClassifier,
}

impl<'a> PhemTagger<'a> {
    pub fn new(dictionary: &'a dyn AffixLookup, classifier: &'a dyn SequenceClassifier) -> Self {
        Self {
            extractor: FeatureExtractor::new(dictionary),
            classifier,
        }
    }

    /// Feature sequence of a word form.
    pub fn features(&self, wf: &WordForm) -> Result<FeatureSequence, PhemError> {
        self.extractor.word_features(wf)
    }

    /// Run the classifier and return one tag per letter without touching
    /// the word form.
    pub fn predict(&self, wf: &WordForm) -> Result<Vec<PhemTag>, PhemError> {
        let features = self.features(wf)?;
        let (num, cat) = features.to_arrays();

        if tracing::enabled!(target: "phem_ml::features", tracing::Level::DEBUG) {
            for (n, c) in num.iter().zip(&cat) {
                dump_features(n, c);
            }
        }

        let classes = self.classifier.predict_sequence(&num, &cat);
        if classes.len() != features.len() {
            return Err(PhemError::ShapeMismatch {
                expected: features.len(),
                actual: classes.len(),
            });
        }

        Ok(classes.into_iter().map(PhemTag::from_class).collect())
    }

    /// Classify `wf` and replace its tags.
    ///
    /// On error the word form keeps whatever tags it had before.
    pub fn classify(&self, wf: &mut WordForm) -> Result<(), PhemError> {
        let tags = self.predict(wf)?;
        wf.set_phem_info(tags);
        Ok(())
    }
}
