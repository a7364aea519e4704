// Word form and per-letter morpheme tags.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PhemError;
use crate::letter::UniString;
use crate::morph::MorphInfo;
use crate::morpheme::{Morpheme, MorphemeLabel, segment};

/// Morpheme role of a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PhemTag {
    Prefix,
    Root,
    Suffix,
    Ending,
    Unknown,
}

impl PhemTag {
    /// Map a classifier class index to a tag.
    ///
    /// Total: every index outside `0..=3` is `Unknown`.
    pub fn from_class(class: usize) -> Self {
        match class {
            0 => PhemTag::Prefix,
            1 => PhemTag::Root,
            2 => PhemTag::Suffix,
            3 => PhemTag::Ending,
            _ => PhemTag::Unknown,
        }
    }

    /// Short label used in morphemic parses (`ко:ROOT/т:END`).
    pub fn label(self) -> &'static str {
        MorphemeLabel::from(self).as_str()
    }
}

impl fmt::Display for PhemTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhemTag::Prefix => "PREFIX",
            PhemTag::Root => "ROOT",
            PhemTag::Suffix => "SUFFIX",
            PhemTag::Ending => "ENDING",
            PhemTag::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// A single inflected occurrence of a lexeme.
///
/// Owns its letters, its morphological readings (at least one) and, once a
/// tagger has run, one [`PhemTag`] per letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordForm {
    word: UniString,
    morph_info: Vec<MorphInfo>,
    phem_info: Option<Vec<PhemTag>>,
}

impl WordForm {
    /// Create a word form. Fails with `PhemError::NoReadings` when
    /// `morph_info` is empty.
    pub fn new(word: &str, morph_info: Vec<MorphInfo>) -> Result<Self, PhemError> {
        if morph_info.is_empty() {
            return Err(PhemError::NoReadings(word.to_string()));
        }
        Ok(Self {
            word: UniString::new(word),
            morph_info,
            phem_info: None,
        })
    }

    pub fn word_form(&self) -> &UniString {
        &self.word
    }

    pub fn morph_info(&self) -> &[MorphInfo] {
        &self.morph_info
    }

    /// The reading used for classification.
    pub fn first_morph_info(&self) -> &MorphInfo {
        // non-empty by construction
        &self.morph_info[0]
    }

    /// Assigned tags, `None` until tagged.
    pub fn phem_info(&self) -> Option<&[PhemTag]> {
        self.phem_info.as_deref()
    }

    /// Replace the tag sequence as a whole.
    pub fn set_phem_info(&mut self, tags: Vec<PhemTag>) {
        self.phem_info = Some(tags);
    }

    /// Morpheme runs of the assigned tags, `None` until tagged.
    pub fn morphemes(&self) -> Option<Result<Vec<Morpheme>, PhemError>> {
        self.phem_info.as_deref().map(|tags| segment(&self.word, tags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::SpeechPart;

    #[test]
    fn class_mapping_is_total() {
        assert_eq!(PhemTag::from_class(0), PhemTag::Prefix);
        assert_eq!(PhemTag::from_class(1), PhemTag::Root);
        assert_eq!(PhemTag::from_class(2), PhemTag::Suffix);
        assert_eq!(PhemTag::from_class(3), PhemTag::Ending);
        assert_eq!(PhemTag::from_class(4), PhemTag::Unknown);
        assert_eq!(PhemTag::from_class(7), PhemTag::Unknown);
        assert_eq!(PhemTag::from_class(usize::MAX), PhemTag::Unknown);
    }

    #[test]
    fn labels_round_trip() {
        for tag in [
            PhemTag::Prefix,
            PhemTag::Root,
            PhemTag::Suffix,
            PhemTag::Ending,
            PhemTag::Unknown,
        ] {
            let label = MorphemeLabel::from_name(tag.label()).unwrap();
            assert_eq!(label.tag(), tag);
            assert_eq!(MorphemeLabel::from(tag), label);
        }
        assert_eq!(MorphemeLabel::from_name("LINK").unwrap().tag(), PhemTag::Unknown);
        assert_eq!(MorphemeLabel::from_name("ROOTS"), None);
    }

    #[test]
    fn display_uses_full_names() {
        assert_eq!(PhemTag::Ending.to_string(), "ENDING");
        assert_eq!(PhemTag::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn word_form_requires_a_reading() {
        assert!(matches!(
            WordForm::new("кот", Vec::new()),
            Err(PhemError::NoReadings(_))
        ));
    }

    #[test]
    fn tags_start_unset_and_are_replaced_whole() {
        let mut wf = WordForm::new("кот", vec![MorphInfo::new(SpeechPart::NOUN, 3)]).unwrap();
        assert_eq!(wf.phem_info(), None);
        assert!(wf.morphemes().is_none());

        wf.set_phem_info(vec![PhemTag::Root; 3]);
        wf.set_phem_info(vec![PhemTag::Root, PhemTag::Root, PhemTag::Ending]);
        assert_eq!(
            wf.phem_info(),
            Some(&[PhemTag::Root, PhemTag::Root, PhemTag::Ending][..])
        );

        let morphemes = wf.morphemes().unwrap().unwrap();
        assert_eq!(morphemes.len(), 2);
        assert_eq!(morphemes[0].text, "ко");
        assert_eq!(morphemes[1].tag, PhemTag::Ending);
    }

    #[test]
    fn only_first_reading_is_exposed_for_classification() {
        let wf = WordForm::new(
            "стали",
            vec![
                MorphInfo::new(SpeechPart::VERB, 3),
                MorphInfo::new(SpeechPart::NOUN, 4),
            ],
        )
        .unwrap();
        assert_eq!(wf.morph_info().len(), 2);
        assert_eq!(wf.first_morph_info().speech_part, SpeechPart::VERB);
    }

    #[test]
    fn tag_serializes_uppercase() {
        let json = serde_json::to_string(&PhemTag::Suffix).unwrap();
        assert_eq!(json, "\"SUFFIX\"");
    }
}
