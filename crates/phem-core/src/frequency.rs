// Letter-frequency weights of the Russian alphabet.
//
// Weights are occurrences per million letters of running text. The table is
// part of the feature contract of the trained model and must not be edited
// without retraining.

use std::sync::LazyLock;

use hashbrown::HashMap;

use crate::PhemError;
use crate::letter::Letter;

/// Frequency weight of every uppercase letter, most frequent first.
pub const LETTER_FREQUENCIES: [(&str, u64); 33] = [
    ("О", 109830),
    ("Е", 84830),
    ("А", 79980),
    ("И", 73670),
    ("Н", 67000),
    ("Т", 63180),
    ("С", 54730),
    ("Р", 47460),
    ("В", 45330),
    ("Л", 43430),
    ("К", 34860),
    ("М", 32030),
    ("Д", 29770),
    ("П", 28040),
    ("У", 26150),
    ("Я", 20010),
    ("Ы", 18980),
    ("Ь", 17350),
    ("Г", 16870),
    ("З", 16410),
    ("Б", 15920),
    ("Ч", 14500),
    ("Й", 12080),
    ("Х", 9660),
    ("Ж", 9400),
    ("Ш", 7180),
    ("Ю", 6390),
    ("Ц", 4860),
    ("Щ", 3610),
    ("Э", 3310),
    ("Ф", 2670),
    ("Ъ", 370),
    ("Ё", 130),
];

static FREQUENCY_TABLE: LazyLock<HashMap<&'static str, u64>> =
    LazyLock::new(|| LETTER_FREQUENCIES.iter().copied().collect());

/// Look up the frequency weight of an uppercase letter.
///
/// A miss means the input alphabet and the table disagree and is reported
/// as `PhemError::UnknownLetter`.
pub fn letter_frequency(letter: &Letter) -> Result<u64, PhemError> {
    FREQUENCY_TABLE
        .get(letter.as_str())
        .copied()
        .ok_or_else(|| PhemError::UnknownLetter(letter.as_str().to_string()))
}
