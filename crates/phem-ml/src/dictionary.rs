// Prefix/suffix statistics collected from the segmentation corpus.

use std::io::Read;
use std::path::Path;

use hashbrown::{HashMap, HashSet};
use phem_core::UniString;
use serde::Deserialize;

/// Error type for dictionary loading.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dictionary: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only lookup of corpus prefix/suffix statistics.
///
/// Queried with substrings of the uppercased word. Implementations are
/// shared between threads and never mutated while tagging.
pub trait AffixLookup: Sync {
    /// Whether `prefix` was observed as a word prefix in the corpus.
    fn contains_prefix(&self, prefix: &str) -> bool;

    /// Number of corpus words starting with `prefix`.
    fn count_prefix(&self, prefix: &str) -> u64;

    /// Number of corpus words ending with `suffix`.
    fn count_suffix(&self, suffix: &str) -> u64;
}

/// On-disk layout of a dictionary file.
#[derive(Debug, Default, Deserialize)]
struct DictionaryFile {
    #[serde(default)]
    prefixes: HashSet<String>,
    #[serde(default)]
    prefix_counts: HashMap<String, u64>,
    #[serde(default)]
    suffix_counts: HashMap<String, u64>,
}

/// In-memory [`AffixLookup`] backed by hash maps.
///
/// Keys are stored uppercased. Unknown keys count as zero.
#[derive(Debug, Clone, Default)]
pub struct AffixDictionary {
    prefixes: HashSet<String>,
    prefix_counts: HashMap<String, u64>,
    suffix_counts: HashMap<String, u64>,
}

fn upper(key: &str) -> String {
    UniString::new(key).to_upper_case().to_string()
}

impl AffixDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from JSON:
    /// `{"prefixes": [..], "prefix_counts": {..}, "suffix_counts": {..}}`.
    /// Every field is optional.
    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let file: DictionaryFile = serde_json::from_str(json)?;
        Ok(Self::from_file(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DictionaryError> {
        let file: DictionaryFile = serde_json::from_reader(reader)?;
        Ok(Self::from_file(file))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let file = std::fs::File::open(path.as_ref())?;
        let dict = Self::from_reader(std::io::BufReader::new(file))?;
        tracing::debug!(
            path = %path.as_ref().display(),
            prefixes = dict.prefixes.len(),
            prefix_counts = dict.prefix_counts.len(),
            suffix_counts = dict.suffix_counts.len(),
            "loaded affix dictionary"
        );
        Ok(dict)
    }

    fn from_file(file: DictionaryFile) -> Self {
        let mut dict = Self::new();
        for prefix in &file.prefixes {
            dict.add_prefix(prefix);
        }
        for (prefix, &count) in &file.prefix_counts {
            dict.set_prefix_count(prefix, count);
        }
        for (suffix, &count) in &file.suffix_counts {
            dict.set_suffix_count(suffix, count);
        }
        dict
    }

    /// Mark `prefix` as observed.
    pub fn add_prefix(&mut self, prefix: &str) {
        self.prefixes.insert(upper(prefix));
    }

    pub fn set_prefix_count(&mut self, prefix: &str, count: u64) {
        self.prefix_counts.insert(upper(prefix), count);
    }

    pub fn set_suffix_count(&mut self, suffix: &str, count: u64) {
        self.suffix_counts.insert(upper(suffix), count);
    }
}

impl AffixLookup for AffixDictionary {
    fn contains_prefix(&self, prefix: &str) -> bool {
        self.prefixes.contains(prefix)
    }

    fn count_prefix(&self, prefix: &str) -> u64 {
        self.prefix_counts.get(prefix).copied().unwrap_or(0)
    }

    fn count_suffix(&self, suffix: &str) -> u64 {
        self.suffix_counts.get(suffix).copied().unwrap_or(0)
    }
}
