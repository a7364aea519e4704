// phem-cli: shared utilities for CLI tools.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process;

use phem_core::morpheme::parse_morphemic;
use phem_core::{MorphInfo, PhemError, WordForm};
use phem_ml::AffixDictionary;
use phem_ml::evaluate::QualityReport;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Dictionary file name looked up inside search directories.
const DICT_FILE: &str = "affixes.json";

/// Environment variable naming a dictionary file or directory.
const DICT_ENV: &str = "PHEM_DICT_PATH";

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the tracing subscriber, writing to stderr.
///
/// `RUST_LOG=phem_ml::features=debug` enables the per-letter feature dump.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();
}

/// One input line of the feature tools.
#[derive(Debug, Deserialize)]
pub struct WordFormRecord {
    pub word: String,
    pub readings: Vec<MorphInfo>,
}

impl WordFormRecord {
    pub fn into_word_form(self) -> Result<WordForm, PhemError> {
        WordForm::new(&self.word, self.readings)
    }
}

/// Search for the affix dictionary and load it.
///
/// Search order:
/// 1. `dict_path` argument (file, or directory containing `affixes.json`)
/// 2. `PHEM_DICT_PATH` environment variable (same rules)
/// 3. `~/.phem/affixes.json`
/// 4. `affixes.json` in the current working directory
///
/// When nothing is found an empty dictionary is returned and a warning is
/// logged; every prefix/suffix count is then 0.
pub fn load_dictionary(dict_path: Option<&str>) -> Result<AffixDictionary, String> {
    for path in build_search_paths(dict_path) {
        if path.is_file() {
            return AffixDictionary::from_path(&path)
                .map_err(|e| format!("failed to load {}: {e}", path.display()));
        }
    }

    if let Some(p) = dict_path {
        return Err(format!("dictionary not found: {p}"));
    }
    tracing::warn!("no {DICT_FILE} found, using an empty affix dictionary");
    Ok(AffixDictionary::new())
}

/// Build the list of candidate dictionary files.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    if let Some(p) = dict_path {
        // an explicit path is never silently replaced by another dictionary
        return vec![dict_file(PathBuf::from(p))];
    }

    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(DICT_ENV) {
        paths.push(dict_file(PathBuf::from(env_path)));
    }

    if let Some(home) = std::env::var_os("HOME") {
        paths.push(PathBuf::from(home).join(".phem").join(DICT_FILE));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DICT_FILE));
    }

    paths
}

/// A directory stands for the `affixes.json` inside it.
fn dict_file(path: PathBuf) -> PathBuf {
    if path.is_dir() {
        path.join(DICT_FILE)
    } else {
        path
    }
}

/// Split `-d PATH`, `--dict-path PATH` or `--dict-path=PATH` off the
/// arguments. The last occurrence wins.
pub fn parse_dict_path(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(value) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(value.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            let value = iter.next().ok_or_else(|| format!("{arg} requires a value"))?;
            dict_path = Some(value.clone());
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((dict_path, remaining))
}

/// Score `GOLD<TAB>PREDICTED` parse lines.
///
/// Lines without a tab, with an unreadable parse, or whose two parses spell
/// different words are skipped with a warning.
pub fn evaluate_parses(input: Box<dyn BufRead>) -> QualityReport {
    let mut report = QualityReport::new();

    for (line_no, line) in input.lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::error!("error reading input: {e}");
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((gold, predicted)) = line.split_once('\t') else {
            tracing::warn!(line = line_no + 1, "skipping line without a tab");
            continue;
        };
        let parsed = parse_morphemic(gold).and_then(|g| parse_morphemic(predicted).map(|p| (g, p)));
        let (gold, predicted) = match parsed {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(line = line_no + 1, "skipping line: {e}");
                continue;
            }
        };

        let gold_text: String = gold.iter().map(|m| m.text.as_str()).collect();
        let predicted_text: String = predicted.iter().map(|m| m.text.as_str()).collect();
        if gold_text.to_lowercase() != predicted_text.to_lowercase() {
            tracing::warn!(
                line = line_no + 1,
                gold = %gold_text,
                predicted = %predicted_text,
                "skipping line: parses spell different words"
            );
            continue;
        }

        report.add_parses(&gold, &predicted);
    }

    report
}

/// Open the first positional argument as input, or stdin when there is none.
pub fn open_input(args: &[String]) -> Result<Box<dyn BufRead>, String> {
    match args.iter().find(|a| !a.starts_with('-')) {
        Some(path) => {
            let file = File::open(path).map_err(|e| format!("failed to open {path}: {e}"))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
