// phem-features: Per-letter classifier features for word forms.
//
// Reads word forms as JSON lines and prints one JSON line per word with the
// numeric and categorical feature vectors of every letter, in the column
// order the morpheme classifier consumes.
//
// Usage:
//   phem-features [-d DICT_PATH] [FILE]
//
// Input line:
//   {"word": "кот", "readings": [{"speech_part": "NOUN", "case": "Nom", "stem_len": 3}]}
//
// Options:
//   -d, --dict-path PATH   Affix dictionary (affixes.json or its directory)
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

use phem_ml::FeatureExtractor;
use phem_ml::features::{CatVector, NumVector};
use serde::Serialize;

#[derive(Serialize)]
struct FeatureRow<'a> {
    word: &'a str,
    num: Vec<NumVector>,
    cat: Vec<CatVector>,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) =
        phem_cli::parse_dict_path(&args).unwrap_or_else(|e| phem_cli::fatal(&e));

    if phem_cli::wants_help(&args) {
        println!("phem-features: Per-letter classifier features for word forms.");
        println!();
        println!("Usage: phem-features [-d DICT_PATH] [FILE]");
        println!();
        println!("Reads JSON lines {{\"word\": ..., \"readings\": [...]}} from FILE or stdin");
        println!("and prints {{\"word\": ..., \"num\": [...], \"cat\": [...]}} per word.");
        println!("Set RUST_LOG=phem_ml::features=debug for a human-readable dump.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Affix dictionary (affixes.json or its directory)");
        println!("  -h, --help              Print this help");
        return;
    }

    phem_cli::init_logging();

    let dictionary =
        phem_cli::load_dictionary(dict_path.as_deref()).unwrap_or_else(|e| phem_cli::fatal(&e));
    let extractor = FeatureExtractor::new(&dictionary);
    let input = phem_cli::open_input(&args).unwrap_or_else(|e| phem_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut skipped = 0usize;

    for (line_no, line) in input.lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading input: {e}");
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let record: phem_cli::WordFormRecord = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(line = line_no + 1, "skipping malformed record: {e}");
                skipped += 1;
                continue;
            }
        };
        let word = record.word.clone();
        let features = record
            .into_word_form()
            .and_then(|wf| extractor.word_features(&wf));
        let features = match features {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(line = line_no + 1, word = %word, "skipping word: {e}");
                skipped += 1;
                continue;
            }
        };

        let (num, cat) = features.to_arrays();
        if tracing::enabled!(target: "phem_ml::features", tracing::Level::DEBUG) {
            for (n, c) in num.iter().zip(&cat) {
                phem_ml::features::dump_features(n, c);
            }
        }

        let row = FeatureRow {
            word: &word,
            num,
            cat,
        };
        match serde_json::to_string(&row) {
            Ok(json) => {
                let _ = writeln!(out, "{json}");
            }
            Err(e) => phem_cli::fatal(&format!("failed to serialize features: {e}")),
        }
    }

    if skipped > 0 {
        tracing::warn!(skipped, "some input lines were skipped");
    }
}
