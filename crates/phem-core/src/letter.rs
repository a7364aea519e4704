// Letter units, uppercasing and vowel/consonant classification.
//
// A `Letter` is one atomic unit of the alphabet. Most letters are a single
// code point, but a base character followed by combining marks is kept as one
// unit so that the letter count of a word matches what a reader sees.

use std::fmt;
use std::ops::Index;

use crate::PhemError;

/// Russian uppercase alphabet: every letter that may appear in a tagged word.
pub const ALPHABET: [&str; 33] = [
    "А", "Б", "В", "Г", "Д", "Е", "Ё", "Ж", "З", "И", "Й", "К", "Л", "М", "Н", "О", "П", "Р", "С",
    "Т", "У", "Ф", "Х", "Ц", "Ч", "Ш", "Щ", "Ъ", "Ы", "Ь", "Э", "Ю", "Я",
];

/// Russian vowels (uppercase).
pub const VOWELS: [&str; 10] = ["А", "Е", "Ё", "И", "О", "У", "Ы", "Э", "Ю", "Я"];

/// COMBINING BREVE, as in decomposed `Й`.
const COMBINING_BREVE: char = '\u{0306}';
/// COMBINING DIAERESIS, as in decomposed `Ё`.
const COMBINING_DIAERESIS: char = '\u{0308}';

/// Vowel/consonant class of a letter, emitted as a categorical feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    Vowel,
    Consonant,
}

impl LetterClass {
    /// Feature string used by the trained model.
    pub fn as_str(self) -> &'static str {
        match self {
            LetterClass::Vowel => "VOWEL",
            LetterClass::Consonant => "CONSONANT",
        }
    }
}

/// An atomic alphabet unit in its canonical (composed) string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(String);

impl Letter {
    /// Build a letter from a grapheme string, composing the two Cyrillic
    /// letters that are commonly typed in decomposed form.
    pub fn new(grapheme: &str) -> Self {
        let mut chars = grapheme.chars();
        let composed = match (chars.next(), chars.next(), chars.next()) {
            (Some('И'), Some(COMBINING_BREVE), None) => "Й".to_string(),
            (Some('и'), Some(COMBINING_BREVE), None) => "й".to_string(),
            (Some('Е'), Some(COMBINING_DIAERESIS), None) => "Ё".to_string(),
            (Some('е'), Some(COMBINING_DIAERESIS), None) => "ё".to_string(),
            _ => grapheme.to_string(),
        };
        Self(composed)
    }

    /// Canonical string representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Uppercase every character of the unit (combining marks are unaffected).
    pub fn to_upper_case(&self) -> Self {
        Self(self.0.chars().map(simple_upper).collect())
    }

    /// Whether the letter belongs to the preconfigured alphabet.
    pub fn is_in_alphabet(&self) -> bool {
        ALPHABET.contains(&self.0.as_str())
    }

    /// Vowel or consonant.
    ///
    /// Letters outside the alphabet have no class and yield
    /// `PhemError::UnclassifiedLetter`.
    pub fn class(&self) -> Result<LetterClass, PhemError> {
        if !self.is_in_alphabet() {
            return Err(PhemError::UnclassifiedLetter(self.0.clone()));
        }
        if VOWELS.contains(&self.0.as_str()) {
            Ok(LetterClass::Vowel)
        } else {
            Ok(LetterClass::Consonant)
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Convert a character to its simple uppercase equivalent.
///
/// Characters whose uppercase form expands to several characters keep only
/// the first one, so the letter count never changes.
pub fn simple_upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Whether `c` is a combining mark that attaches to the preceding letter.
fn is_combining_mark(c: char) -> bool {
    matches!(c as u32, 0x0300..=0x036F)
}

/// A word as an ordered sequence of letters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UniString {
    letters: Vec<Letter>,
}

impl UniString {
    /// Segment a string into letter units.
    pub fn new(text: &str) -> Self {
        let mut letters = Vec::new();
        let mut current = String::new();
        for c in text.chars() {
            if is_combining_mark(c) && !current.is_empty() {
                current.push(c);
                continue;
            }
            if !current.is_empty() {
                letters.push(Letter::new(&current));
                current.clear();
            }
            current.push(c);
        }
        if !current.is_empty() {
            letters.push(Letter::new(&current));
        }
        Self { letters }
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn get(&self, index: usize) -> Option<&Letter> {
        self.letters.get(index)
    }

    /// Uppercased copy.
    pub fn to_upper_case(&self) -> Self {
        Self {
            letters: self.letters.iter().map(Letter::to_upper_case).collect(),
        }
    }

    /// `len` letters starting at `start`, joined into a string.
    /// The range is clamped to the word.
    pub fn sub_string(&self, start: usize, len: usize) -> String {
        let start = start.min(self.letters.len());
        let end = start.saturating_add(len).min(self.letters.len());
        self.letters[start..end].iter().map(Letter::as_str).collect()
    }

    /// The last `n` letters, joined into a string.
    pub fn rcut(&self, n: usize) -> String {
        let n = n.min(self.letters.len());
        self.sub_string(self.letters.len() - n, n)
    }
}

impl Index<usize> for UniString {
    type Output = Letter;

    fn index(&self, index: usize) -> &Letter {
        &self.letters[index]
    }
}

impl fmt::Display for UniString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            f.write_str(letter.as_str())?;
        }
        Ok(())
    }
}

impl From<&str> for UniString {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
