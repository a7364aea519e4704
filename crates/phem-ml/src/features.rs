// Per-letter feature extraction for the morpheme classifier.
//
// Every letter of a word gets 6 numeric and 14 categorical features. The
// order produced by `to_array` is the column order the model was trained on.

use phem_core::frequency::letter_frequency;
use phem_core::{PhemError, UniString, WordForm};

use crate::dictionary::AffixLookup;

/// Number of numeric features per letter.
pub const NUM_FEATURES: usize = 6;

/// Number of categorical features per letter.
pub const CAT_FEATURES: usize = 14;

/// Offsets of the neighbouring letters in the context window.
pub const WINDOW_OFFSETS: [isize; 6] = [-3, -2, -1, 1, 2, 3];

/// Positional numeric vector, as passed to the classifier.
pub type NumVector = [f64; NUM_FEATURES];

/// Positional categorical vector, as passed to the classifier.
pub type CatVector = [String; CAT_FEATURES];

/// Numeric features of one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumFeatures {
    /// Zero-based letter index.
    pub position: usize,
    pub letter_frequency: u64,
    /// Corpus words sharing the prefix before this letter; 0 at index 0.
    pub prefix_count: u64,
    /// Corpus words sharing the suffix from this letter on; 0 at the last letter.
    pub suffix_count: u64,
    pub word_length: usize,
    pub stem_length: usize,
}

impl NumFeatures {
    pub fn to_array(&self) -> NumVector {
        [
            self.position as f64,
            self.letter_frequency as f64,
            self.prefix_count as f64,
            self.suffix_count as f64,
            self.word_length as f64,
            self.stem_length as f64,
        ]
    }
}

/// Categorical features of one letter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatFeatures {
    pub letter: String,
    /// `VOWEL` or `CONSONANT`.
    pub vowel_class: &'static str,
    /// `"1"` when the prefix before this letter is a known prefix.
    pub prefix_in_dictionary: &'static str,
    /// Letters at [`WINDOW_OFFSETS`], empty outside the word.
    pub window: [String; 6],
    pub speech_part: &'static str,
    pub case: &'static str,
    pub gender: &'static str,
    pub number: &'static str,
    pub tense: &'static str,
}

impl CatFeatures {
    pub fn to_array(&self) -> CatVector {
        let [w0, w1, w2, w3, w4, w5] = self.window.clone();
        [
            self.letter.clone(),
            self.vowel_class.to_string(),
            self.prefix_in_dictionary.to_string(),
            w0,
            w1,
            w2,
            w3,
            w4,
            w5,
            self.speech_part.to_string(),
            self.case.to_string(),
            self.gender.to_string(),
            self.number.to_string(),
            self.tense.to_string(),
        ]
    }
}

/// Index-aligned feature vectors of a whole word.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureSequence {
    pub num: Vec<NumFeatures>,
    pub cat: Vec<CatFeatures>,
}

impl FeatureSequence {
    pub fn len(&self) -> usize {
        self.num.len()
    }

    pub fn is_empty(&self) -> bool {
        self.num.is_empty()
    }

    /// Positional form of the sequence for the classifier.
    pub fn to_arrays(&self) -> (Vec<NumVector>, Vec<CatVector>) {
        (
            self.num.iter().map(NumFeatures::to_array).collect(),
            self.cat.iter().map(CatFeatures::to_array).collect(),
        )
    }
}

/// Computes letter features against a prefix/suffix dictionary.
pub struct FeatureExtractor<'a> {
    dictionary: &'a dyn AffixLookup,
}

impl<'a> FeatureExtractor<'a> {
    pub fn new(dictionary: &'a dyn AffixLookup) -> Self {
        Self { dictionary }
    }

    /// Features of the letter at `letter_index` of `upper_word`, the
    /// uppercased letters of `wf`.
    pub fn letter_features(
        &self,
        wf: &WordForm,
        upper_word: &UniString,
        letter_index: usize,
    ) -> Result<(NumFeatures, CatFeatures), PhemError> {
        let size = upper_word.len();
        let letter = upper_word.get(letter_index).ok_or(PhemError::IndexOutOfRange {
            index: letter_index,
            len: size,
        })?;
        let mi = wf.first_morph_info();
        let word_prefix = upper_word.sub_string(0, letter_index);

        let letter_frequency = letter_frequency(letter)?;
        let vowel_class = letter.class()?.as_str();

        let window = WINDOW_OFFSETS.map(|offset| {
            letter_index
                .checked_add_signed(offset)
                .and_then(|i| upper_word.get(i))
                .map(|l| l.as_str().to_string())
                .unwrap_or_default()
        });

        let cat = CatFeatures {
            letter: letter.as_str().to_string(),
            vowel_class,
            prefix_in_dictionary: if self.dictionary.contains_prefix(&word_prefix) {
                "1"
            } else {
                "0"
            },
            window,
            speech_part: mi.speech_part.as_str(),
            case: mi.case_str(),
            gender: mi.gender_str(),
            number: mi.number_str(),
            tense: mi.tense_str(),
        };

        let num = NumFeatures {
            position: letter_index,
            letter_frequency,
            prefix_count: if letter_index == 0 {
                0
            } else {
                self.dictionary.count_prefix(&word_prefix)
            },
            suffix_count: if letter_index == size - 1 {
                0
            } else {
                self.dictionary
                    .count_suffix(&upper_word.rcut(size - letter_index))
            },
            word_length: size,
            stem_length: mi.stem_len,
        };

        Ok((num, cat))
    }

    /// Features of every letter of `wf`, left to right.
    pub fn word_features(&self, wf: &WordForm) -> Result<FeatureSequence, PhemError> {
        let upper_word = wf.word_form().to_upper_case();
        let mut result = FeatureSequence {
            num: Vec::with_capacity(upper_word.len()),
            cat: Vec::with_capacity(upper_word.len()),
        };
        for i in 0..upper_word.len() {
            let (num, cat) = self.letter_features(wf, &upper_word, i)?;
            result.num.push(num);
            result.cat.push(cat);
        }
        Ok(result)
    }
}

/// Log one letter's features on a single line (debug level).
pub fn dump_features(num: &NumVector, cat: &CatVector) {
    tracing::debug!(target: "phem_ml::features", "{}", format_features(num, cat));
}

/// One letter's features as a space-separated line.
///
/// Column order: sizes, cat 0-1, num 0-3, cat 2-13, num 4-5.
pub fn format_features(num: &NumVector, cat: &CatVector) -> String {
    let mut line = format!("NumFeatures:{} CatFeatures:{}", num.len(), cat.len());
    let columns = cat[..2]
        .iter()
        .cloned()
        .chain(num[..4].iter().map(f64::to_string))
        .chain(cat[2..].iter().cloned())
        .chain(num[4..].iter().map(f64::to_string));
    for column in columns {
        line.push(' ');
        line.push_str(&column);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::AffixDictionary;
    use phem_core::morph::{Case, Gender, MorphInfo, Number, SpeechPart, Tense};

    fn kot() -> WordForm {
        WordForm::new(
            "кот",
            vec![
                MorphInfo::new(SpeechPart::NOUN, 3)
                    .with_case(Case::Nom)
                    .with_gender(Gender::Masc)
                    .with_number(Number::Sing),
            ],
        )
        .unwrap()
    }

    fn dictionary() -> AffixDictionary {
        let mut dict = AffixDictionary::new();
        dict.add_prefix("");
        dict.set_prefix_count("К", 90);
        dict.set_prefix_count("КО", 40);
        dict.set_suffix_count("КОТ", 2);
        dict.set_suffix_count("ОТ", 11);
        dict.set_suffix_count("Т", 500);
        dict
    }

    #[test]
    fn first_letter_of_kot() {
        let dict = dictionary();
        let extractor = FeatureExtractor::new(&dict);
        let wf = kot();
        let upper = wf.word_form().to_upper_case();
        let (num, cat) = extractor.letter_features(&wf, &upper, 0).unwrap();

        assert_eq!(num.to_array(), [0.0, 34860.0, 0.0, 2.0, 3.0, 3.0]);
        assert_eq!(
            cat.to_array(),
            [
                "К",
                "CONSONANT",
                "1",
                "",
                "",
                "",
                "О",
                "Т",
                "",
                "NOUN",
                "Case=Nom",
                "Gender=Masc",
                "Number=Sing",
                ""
            ]
            .map(String::from)
        );
    }

    #[test]
    fn formatted_line_interleaves_columns() {
        let dict = dictionary();
        let extractor = FeatureExtractor::new(&dict);
        let wf = kot();
        let upper = wf.word_form().to_upper_case();
        let (num, cat) = extractor.letter_features(&wf, &upper, 0).unwrap();

        let line = format_features(&num.to_array(), &cat.to_array());
        let columns: Vec<&str> = line.split(' ').collect();
        assert_eq!(
            columns,
            [
                "NumFeatures:6",
                "CatFeatures:14",
                "К",
                "CONSONANT",
                "0",
                "34860",
                "0",
                "2",
                "1",
                "",
                "",
                "",
                "О",
                "Т",
                "",
                "NOUN",
                "Case=Nom",
                "Gender=Masc",
                "Number=Sing",
                "",
                "3",
                "3"
            ]
        );
    }

    #[test]
    fn last_letter_has_zero_suffix_count() {
        let dict = dictionary();
        let extractor = FeatureExtractor::new(&dict);
        let wf = kot();
        let upper = wf.word_form().to_upper_case();
        let (num, cat) = extractor.letter_features(&wf, &upper, 2).unwrap();

        // "Т" has a count of 500, but the last letter never looks it up
        assert_eq!(num.suffix_count, 0);
        assert_eq!(num.prefix_count, 40);
        assert_eq!(cat.prefix_in_dictionary, "0");
        assert_eq!(cat.window, ["", "К", "О", "", "", ""].map(String::from));
    }

    #[test]
    fn middle_letter_queries_both_sides() {
        let dict = dictionary();
        let extractor = FeatureExtractor::new(&dict);
        let wf = kot();
        let upper = wf.word_form().to_upper_case();
        let (num, cat) = extractor.letter_features(&wf, &upper, 1).unwrap();

        assert_eq!(num.position, 1);
        assert_eq!(num.letter_frequency, 109830);
        assert_eq!(num.prefix_count, 90);
        assert_eq!(num.suffix_count, 11);
        assert_eq!(cat.vowel_class, "VOWEL");
    }

    #[test]
    fn index_zero_flag_reflects_empty_prefix_lookup() {
        let empty = AffixDictionary::new();
        let extractor = FeatureExtractor::new(&empty);
        let wf = kot();
        let upper = wf.word_form().to_upper_case();
        let (_, cat) = extractor.letter_features(&wf, &upper, 0).unwrap();
        assert_eq!(cat.prefix_in_dictionary, "0");
    }

    #[test]
    fn single_letter_word_has_zero_counts() {
        let dict = dictionary();
        let extractor = FeatureExtractor::new(&dict);
        let wf = WordForm::new("к", vec![MorphInfo::new(SpeechPart::ADP, 1)]).unwrap();
        let seq = extractor.word_features(&wf).unwrap();
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.num[0].prefix_count, 0);
        assert_eq!(seq.num[0].suffix_count, 0);
        assert!(seq.cat[0].window.iter().all(String::is_empty));
    }

    #[test]
    fn window_stays_within_bounds() {
        let dict = AffixDictionary::new();
        let extractor = FeatureExtractor::new(&dict);
        let wf = WordForm::new("подводный", vec![MorphInfo::new(SpeechPart::ADJ, 6)]).unwrap();
        let seq = extractor.word_features(&wf).unwrap();
        let upper = wf.word_form().to_upper_case();

        for (i, cat) in seq.cat.iter().enumerate() {
            for (slot, offset) in WINDOW_OFFSETS.iter().enumerate() {
                let target = i as isize + offset;
                let expected = if target < 0 || target >= upper.len() as isize {
                    ""
                } else {
                    upper[target as usize].as_str()
                };
                assert_eq!(cat.window[slot], expected, "letter {i} offset {offset}");
            }
        }
    }

    #[test]
    fn sequences_are_index_aligned() {
        let dict = dictionary();
        let extractor = FeatureExtractor::new(&dict);
        let wf = WordForm::new("Переход", vec![MorphInfo::new(SpeechPart::NOUN, 7)]).unwrap();
        let seq = extractor.word_features(&wf).unwrap();
        assert_eq!(seq.num.len(), 7);
        assert_eq!(seq.cat.len(), 7);
        for (i, (num, cat)) in seq.num.iter().zip(&seq.cat).enumerate() {
            assert_eq!(num.position, i);
            assert_eq!(num.word_length, 7);
            assert_eq!(cat.letter, wf.word_form()[i].to_upper_case().as_str());
        }
    }

    #[test]
    fn extraction_is_deterministic() {
        let dict = dictionary();
        let extractor = FeatureExtractor::new(&dict);
        let wf = kot();
        assert_eq!(
            extractor.word_features(&wf).unwrap(),
            extractor.word_features(&wf).unwrap()
        );
    }

    #[test]
    fn empty_word_yields_empty_sequences() {
        let dict = dictionary();
        let extractor = FeatureExtractor::new(&dict);
        let wf = WordForm::new("", vec![MorphInfo::default()]).unwrap();
        let seq = extractor.word_features(&wf).unwrap();
        assert!(seq.is_empty());
        assert!(seq.cat.is_empty());
    }

    #[test]
    fn unknown_letter_propagates() {
        let dict = dictionary();
        let extractor = FeatureExtractor::new(&dict);
        let wf = WordForm::new("кот-2", vec![MorphInfo::default()]).unwrap();
        assert!(matches!(
            extractor.word_features(&wf),
            Err(PhemError::UnknownLetter(ref l)) if l == "-"
        ));
    }

    #[test]
    fn index_out_of_range_is_reported() {
        let dict = dictionary();
        let extractor = FeatureExtractor::new(&dict);
        let wf = kot();
        let upper = wf.word_form().to_upper_case();
        assert!(matches!(
            extractor.letter_features(&wf, &upper, 3),
            Err(PhemError::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn only_first_reading_is_used() {
        let dict = dictionary();
        let extractor = FeatureExtractor::new(&dict);
        let wf = WordForm::new(
            "кот",
            vec![
                MorphInfo::new(SpeechPart::NOUN, 3),
                MorphInfo::new(SpeechPart::VERB, 2).with_tense(Tense::Past),
            ],
        )
        .unwrap();
        let seq = extractor.word_features(&wf).unwrap();
        for (num, cat) in seq.num.iter().zip(&seq.cat) {
            assert_eq!(num.stem_length, 3);
            assert_eq!(cat.speech_part, "NOUN");
            assert_eq!(cat.tense, "");
        }
    }
}
