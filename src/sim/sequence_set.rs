use super::{MotifPlacement, SimResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    /// 0/1 encoding expected by downstream trainers.
    pub fn as_f32(&self) -> f32 {
        match self {
            Label::Positive => 1.0,
            Label::Negative => 0.0,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Positive => write!(f, "positive"),
            Label::Negative => write!(f, "negative"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Train,
    Validation,
    Test,
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Split::Train => write!(f, "train"),
            Split::Validation => write!(f, "validation"),
            Split::Test => write!(f, "test"),
        }
    }
}

/// One simulated sequence with its label, split assignment, and the motif
/// instances that were embedded into it.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSequence {
    pub bases: Vec<u8>,
    pub label: Label,
    pub split: Split,
    pub placements: Vec<MotifPlacement>,
}

/// The full simulated dataset. Immutable once built; all sequences share the
/// same length.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSet {
    seq_len: usize,
    sequences: Vec<LabeledSequence>,
}

impl SequenceSet {
    pub(crate) fn new(seq_len: usize, sequences: Vec<LabeledSequence>) -> Self {
        debug_assert!(sequences.iter().all(|s| s.bases.len() == seq_len));
        SequenceSet { seq_len, sequences }
    }

    pub fn seq_len(&self) -> usize {
        self.seq_len
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabeledSequence> {
        self.sequences.iter()
    }

    pub fn split(&self, split: Split) -> impl Iterator<Item = &LabeledSequence> {
        self.sequences.iter().filter(move |s| s.split == split)
    }

    pub fn split_len(&self, split: Split) -> usize {
        self.split(split).count()
    }

    /// One-hot tensors and labels for one split, flattened row-major as
    /// `[sequence][position][base]`, the layout a convolutional trainer
    /// consumes.
    pub fn tensors(&self, split: Split) -> SimResult<(Vec<f32>, Vec<f32>)> {
        let mut features = Vec::new();
        let mut labels = Vec::new();
        for seq in self.split(split) {
            for row in super::one_hot(&seq.bases)? {
                features.extend_from_slice(&row);
            }
            labels.push(seq.label.as_f32());
        }
        Ok((features, labels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_set() -> SequenceSet {
        SequenceSet::new(
            4,
            vec![
                LabeledSequence {
                    bases: b"ACGT".to_vec(),
                    label: Label::Positive,
                    split: Split::Train,
                    placements: vec![],
                },
                LabeledSequence {
                    bases: b"TTTT".to_vec(),
                    label: Label::Negative,
                    split: Split::Test,
                    placements: vec![],
                },
            ],
        )
    }

    #[test]
    fn split_filters_sequences() {
        let set = toy_set();
        assert_eq!(set.split_len(Split::Train), 1);
        assert_eq!(set.split_len(Split::Validation), 0);
        assert_eq!(set.split_len(Split::Test), 1);
    }

    #[test]
    fn tensors_have_expected_shape_and_labels() {
        let set = toy_set();
        let (features, labels) = set.tensors(Split::Train).unwrap();
        assert_eq!(features.len(), 4 * 4);
        assert_eq!(labels, vec![1.0]);
        // ACGT one-hot is the identity matrix
        for (pos, chunk) in features.chunks(4).enumerate() {
            let mut expected = [0.0; 4];
            expected[pos] = 1.0;
            assert_eq!(chunk, expected);
        }
    }
}
