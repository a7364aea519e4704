// Morphological reading of a word form, as produced by the analyzer.
//
// Only the attributes that feed the morpheme classifier are modelled. The
// textual forms are the Universal Dependencies feature strings used in the
// training corpus (`Case=Nom`, `Number=Sing`, ...).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Universal part-of-speech tag.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpeechPart {
    #[default]
    X,
    ADJ,
    ADV,
    INTJ,
    NOUN,
    PROPN,
    VERB,
    ADP,
    AUX,
    CONJ,
    SCONJ,
    DET,
    NUM,
    PART,
    PRON,
    PUNCT,
    H,
    R,
    Q,
    SYM,
}

impl SpeechPart {
    pub fn as_str(self) -> &'static str {
        match self {
            SpeechPart::X => "X",
            SpeechPart::ADJ => "ADJ",
            SpeechPart::ADV => "ADV",
            SpeechPart::INTJ => "INTJ",
            SpeechPart::NOUN => "NOUN",
            SpeechPart::PROPN => "PROPN",
            SpeechPart::VERB => "VERB",
            SpeechPart::ADP => "ADP",
            SpeechPart::AUX => "AUX",
            SpeechPart::CONJ => "CONJ",
            SpeechPart::SCONJ => "SCONJ",
            SpeechPart::DET => "DET",
            SpeechPart::NUM => "NUM",
            SpeechPart::PART => "PART",
            SpeechPart::PRON => "PRON",
            SpeechPart::PUNCT => "PUNCT",
            SpeechPart::H => "H",
            SpeechPart::R => "R",
            SpeechPart::Q => "Q",
            SpeechPart::SYM => "SYM",
        }
    }
}

impl fmt::Display for SpeechPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grammatical case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Case {
    /// Nominative.
    Nom,
    /// Genitive.
    Gen,
    /// Dative.
    Dat,
    /// Accusative.
    Acc,
    /// Instrumental.
    Ins,
    /// Locative (prepositional).
    Loc,
    /// Vocative.
    Voc,
}

impl Case {
    pub fn as_str(self) -> &'static str {
        match self {
            Case::Nom => "Case=Nom",
            Case::Gen => "Case=Gen",
            Case::Dat => "Case=Dat",
            Case::Acc => "Case=Acc",
            Case::Ins => "Case=Ins",
            Case::Loc => "Case=Loc",
            Case::Voc => "Case=Voc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Masc,
    Fem,
    Neut,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Masc => "Gender=Masc",
            Gender::Fem => "Gender=Fem",
            Gender::Neut => "Gender=Neut",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Number {
    Sing,
    Plur,
}

impl Number {
    pub fn as_str(self) -> &'static str {
        match self {
            Number::Sing => "Number=Sing",
            Number::Plur => "Number=Plur",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tense {
    Fut,
    Past,
    Pres,
    /// Non-past (present or future) for verbs where the two coincide.
    Notpast,
}

impl Tense {
    pub fn as_str(self) -> &'static str {
        match self {
            Tense::Fut => "Tense=Fut",
            Tense::Past => "Tense=Past",
            Tense::Pres => "Tense=Pres",
            Tense::Notpast => "Tense=Notpast",
        }
    }
}

/// One candidate morphological analysis of a word form.
///
/// Attributes the analyzer could not determine are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MorphInfo {
    #[serde(default)]
    pub speech_part: SpeechPart,
    #[serde(default)]
    pub case: Option<Case>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub number: Option<Number>,
    #[serde(default)]
    pub tense: Option<Tense>,
    /// Letter count of the lexeme's stem.
    #[serde(default)]
    pub stem_len: usize,
}

impl MorphInfo {
    pub fn new(speech_part: SpeechPart, stem_len: usize) -> Self {
        Self {
            speech_part,
            stem_len,
            ..Self::default()
        }
    }

    pub fn with_case(mut self, case: Case) -> Self {
        self.case = Some(case);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_number(mut self, number: Number) -> Self {
        self.number = Some(number);
        self
    }

    pub fn with_tense(mut self, tense: Tense) -> Self {
        self.tense = Some(tense);
        self
    }

    /// Case feature string, empty when unknown.
    pub fn case_str(&self) -> &'static str {
        self.case.map_or("", Case::as_str)
    }

    pub fn gender_str(&self) -> &'static str {
        self.gender.map_or("", Gender::as_str)
    }

    pub fn number_str(&self) -> &'static str {
        self.number.map_or("", Number::as_str)
    }

    pub fn tense_str(&self) -> &'static str {
        self.tense.map_or("", Tense::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_attributes_are_empty_strings() {
        let mi = MorphInfo::new(SpeechPart::NOUN, 3);
        assert_eq!(mi.case_str(), "");
        assert_eq!(mi.gender_str(), "");
        assert_eq!(mi.number_str(), "");
        assert_eq!(mi.tense_str(), "");
    }

    #[test]
    fn known_attributes_use_feature_strings() {
        let mi = MorphInfo::new(SpeechPart::VERB, 4)
            .with_gender(Gender::Fem)
            .with_number(Number::Sing)
            .with_tense(Tense::Past);
        assert_eq!(mi.speech_part.to_string(), "VERB");
        assert_eq!(mi.case_str(), "");
        assert_eq!(mi.gender_str(), "Gender=Fem");
        assert_eq!(mi.number_str(), "Number=Sing");
        assert_eq!(mi.tense_str(), "Tense=Past");
    }

    #[test]
    fn deserializes_with_missing_attributes() {
        let mi: MorphInfo =
            serde_json::from_str(r#"{"speech_part": "ADJ", "case": "Gen", "stem_len": 5}"#)
                .unwrap();
        assert_eq!(mi.speech_part, SpeechPart::ADJ);
        assert_eq!(mi.case, Some(Case::Gen));
        assert_eq!(mi.gender, None);
        assert_eq!(mi.stem_len, 5);
    }

    #[test]
    fn default_speech_part_is_x() {
        let mi: MorphInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(mi.speech_part, SpeechPart::X);
        assert_eq!(mi.stem_len, 0);
    }
}
