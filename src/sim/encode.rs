use super::{SimError, SimResult};
use crate::motifs::{base_index, BASES};

/// One-hot encode a DNA sequence: one `[A, C, G, T]` indicator row per
/// position. The encoding is a bijection; see [`decode_one_hot`].
pub fn one_hot(seq: &[u8]) -> SimResult<Vec<[f32; 4]>> {
    seq.iter()
        .enumerate()
        .map(|(pos, &base)| {
            let index = base_index(base).ok_or_else(|| {
                SimError::InvalidConfiguration(format!(
                    "Cannot encode non-ACGT base {:?} at position {}",
                    base as char, pos
                ))
            })?;
            let mut row = [0.0; 4];
            row[index] = 1.0;
            Ok(row)
        })
        .collect()
}

/// Invert [`one_hot`]. Each row must have exactly one active entry.
pub fn decode_one_hot(rows: &[[f32; 4]]) -> SimResult<Vec<u8>> {
    rows.iter()
        .enumerate()
        .map(|(pos, row)| {
            let mut active = None;
            for (j, &value) in row.iter().enumerate() {
                match value {
                    v if v == 1.0 => {
                        if active.replace(j).is_some() {
                            return Err(SimError::InvalidConfiguration(format!(
                                "One-hot row at position {} has multiple active entries",
                                pos
                            )));
                        }
                    }
                    v if v == 0.0 => {}
                    _ => {
                        return Err(SimError::InvalidConfiguration(format!(
                            "One-hot row at position {} is not binary",
                            pos
                        )))
                    }
                }
            }
            let index = active.ok_or_else(|| {
                SimError::InvalidConfiguration(format!(
                    "One-hot row at position {} has no active entry",
                    pos
                ))
            })?;
            Ok(BASES[index])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_position_has_one_active_row() {
        let rows = one_hot(b"ACGTTGCA").unwrap();
        assert_eq!(rows.len(), 8);
        for row in &rows {
            assert_eq!(row.iter().filter(|&&v| v == 1.0).count(), 1);
            assert_eq!(row.iter().filter(|&&v| v == 0.0).count(), 3);
        }
    }

    #[test]
    fn encoding_round_trips() {
        let seq = b"GATTACAGATTACA";
        let decoded = decode_one_hot(&one_hot(seq).unwrap()).unwrap();
        assert_eq!(decoded, seq);
    }

    #[test]
    fn ambiguous_base_is_rejected() {
        assert!(one_hot(b"ACGN").is_err());
    }

    #[test]
    fn malformed_rows_are_rejected() {
        assert!(decode_one_hot(&[[0.0, 0.0, 0.0, 0.0]]).is_err());
        assert!(decode_one_hot(&[[1.0, 1.0, 0.0, 0.0]]).is_err());
        assert!(decode_one_hot(&[[0.5, 0.5, 0.0, 0.0]]).is_err());
    }
}
