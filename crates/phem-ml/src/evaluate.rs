// Segmentation quality against gold parses.
//
// A morpheme boundary is the last letter of each morpheme. Letter accuracy
// compares boundary-aware labels, so a letter only counts as correct when
// both its morpheme label and its place inside the morpheme (single, begin,
// middle, end) agree.

use phem_core::PhemTag;
use phem_core::morpheme::{Morpheme, MorphemeLabel};

/// Place of a letter inside its morpheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Place {
    Single,
    Begin,
    Middle,
    End,
}

/// Morphemes as `(label, letter count)`, from maximal runs of equal tags.
fn tag_runs(tags: &[PhemTag]) -> Vec<(MorphemeLabel, usize)> {
    let mut runs: Vec<(MorphemeLabel, usize)> = Vec::new();
    for &tag in tags {
        let label = MorphemeLabel::from(tag);
        match runs.last_mut() {
            Some((last, len)) if *last == label => *len += 1,
            _ => runs.push((label, 1)),
        }
    }
    runs
}

fn parse_runs(morphemes: &[Morpheme]) -> Vec<(MorphemeLabel, usize)> {
    morphemes.iter().map(|m| (m.label, m.len)).collect()
}

/// Boundary-aware label of every letter.
fn labels(runs: &[(MorphemeLabel, usize)]) -> Vec<(Place, MorphemeLabel)> {
    let mut result = Vec::new();
    for &(label, len) in runs {
        match len {
            0 => {}
            1 => result.push((Place::Single, label)),
            _ => {
                result.push((Place::Begin, label));
                result.extend(std::iter::repeat_n((Place::Middle, label), len - 2));
                result.push((Place::End, label));
            }
        }
    }
    result
}

/// Letter indices that close a morpheme.
fn boundaries(labels: &[(Place, MorphemeLabel)]) -> Vec<usize> {
    labels
        .iter()
        .enumerate()
        .filter(|(_, (place, _))| matches!(place, Place::Single | Place::End))
        .map(|(i, _)| i)
        .collect()
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Accumulated boundary and accuracy statistics over a set of words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QualityReport {
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub equal_letters: usize,
    pub total_letters: usize,
    pub correct_words: usize,
    pub total_words: usize,
}

impl QualityReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one word given per-letter tags, e.g. tagger output.
    ///
    /// Morphemes are recovered as maximal runs, so two adjacent morphemes
    /// with the same tag count as one.
    pub fn add(&mut self, gold: &[PhemTag], predicted: &[PhemTag]) {
        self.add_runs(&tag_runs(gold), &tag_runs(predicted));
    }

    /// Add one word given parsed morphemes, keeping every morpheme boundary
    /// and the full label set.
    pub fn add_parses(&mut self, gold: &[Morpheme], predicted: &[Morpheme]) {
        self.add_runs(&parse_runs(gold), &parse_runs(predicted));
    }

    // Sequences of different length are compared over the common prefix and
    // never count as a correct word.
    fn add_runs(&mut self, gold: &[(MorphemeLabel, usize)], predicted: &[(MorphemeLabel, usize)]) {
        let gold_labels = labels(gold);
        let pred_labels = labels(predicted);
        let gold_bounds = boundaries(&gold_labels);
        let pred_bounds = boundaries(&pred_labels);
        let common = gold_bounds
            .iter()
            .filter(|b| pred_bounds.contains(b))
            .count();

        self.true_positives += common;
        self.false_negatives += gold_bounds.len() - common;
        self.false_positives += pred_bounds.len() - common;
        self.equal_letters += gold_labels
            .iter()
            .zip(&pred_labels)
            .filter(|(g, p)| g == p)
            .count();
        self.total_letters += gold_labels.len();
        if gold_labels == pred_labels {
            self.correct_words += 1;
        }
        self.total_words += 1;
    }

    pub fn precision(&self) -> f64 {
        ratio(
            self.true_positives as f64,
            (self.true_positives + self.false_positives) as f64,
        )
    }

    pub fn recall(&self) -> f64 {
        ratio(
            self.true_positives as f64,
            (self.true_positives + self.false_negatives) as f64,
        )
    }

    pub fn f1(&self) -> f64 {
        ratio(
            self.true_positives as f64,
            self.true_positives as f64
                + 0.5 * (self.false_positives + self.false_negatives) as f64,
        )
    }

    /// Share of letters whose boundary-aware label matches.
    pub fn accuracy(&self) -> f64 {
        ratio(self.equal_letters as f64, self.total_letters as f64)
    }

    pub fn word_accuracy(&self) -> f64 {
        ratio(self.correct_words as f64, self.total_words as f64)
    }

    /// Metric names and values in report order.
    pub fn metrics(&self) -> [(&'static str, f64); 5] {
        [
            ("Precision", self.precision()),
            ("Recall", self.recall()),
            ("F1", self.f1()),
            ("Accuracy", self.accuracy()),
            ("Word accuracy", self.word_accuracy()),
        ]
    }
}
