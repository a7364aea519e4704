// Sequence classifier interface.

use crate::features::{CatVector, NumVector};

/// A trained model assigning one class index to every letter of a word.
///
/// The input vectors are positional, in the column order the model was
/// trained on. The output must contain exactly one class per input vector;
/// callers treat any other length as a fatal integration error.
pub trait SequenceClassifier: Sync {
    fn predict_sequence(&self, num: &[NumVector], cat: &[CatVector]) -> Vec<usize>;
}

impl<F> SequenceClassifier for F
where
    F: Fn(&[NumVector], &[CatVector]) -> Vec<usize> + Sync,
{
    fn predict_sequence(&self, num: &[NumVector], cat: &[CatVector]) -> Vec<usize> {
        self(num, cat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_classifiers() {
        let constant = |num: &[NumVector], _: &[CatVector]| vec![1usize; num.len()];
        let classifier: &dyn SequenceClassifier = &constant;
        let num = [[0.0; 6]; 4];
        let cat: Vec<CatVector> = (0..4).map(|_| Default::default()).collect();
        assert_eq!(classifier.predict_sequence(&num, &cat), vec![1, 1, 1, 1]);
    }
}
