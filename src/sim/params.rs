use super::{SimError, SimResult};
use crate::motifs::{get_motif, motif_names, Pwm};

/// Validated simulation parameters. The central window is centered within
/// the sequence: it starts at `(seq_len - center_size) / 2`.
#[derive(Debug, Clone)]
pub struct SimParams {
    pub motif: String,
    pub seq_len: usize,
    pub gc_frac: f64,
    pub center_size: usize,
    pub min_motifs: usize,
    pub max_motifs: usize,
    pub num_pos: usize,
    pub num_neg: usize,
    pub test_size: usize,
    pub validation_size: usize,
    pub seed: u64,
}

impl SimParams {
    pub fn center_start(&self) -> usize {
        (self.seq_len - self.center_size) / 2
    }

    pub fn total(&self) -> usize {
        self.num_pos + self.num_neg
    }

    /// Check every parameter and resolve the motif identifier.
    pub fn validate(&self) -> SimResult<&'static Pwm> {
        if self.seq_len == 0 {
            return Err(SimError::InvalidConfiguration(
                "Sequence length must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.gc_frac) {
            return Err(SimError::InvalidConfiguration(format!(
                "GC fraction must be in [0, 1], got {}",
                self.gc_frac
            )));
        }
        if self.center_size > self.seq_len {
            return Err(SimError::InvalidConfiguration(format!(
                "Central window ({} bp) exceeds sequence length ({} bp)",
                self.center_size, self.seq_len
            )));
        }
        if self.min_motifs > self.max_motifs {
            return Err(SimError::InvalidConfiguration(format!(
                "Minimum motif count {} exceeds maximum {}",
                self.min_motifs, self.max_motifs
            )));
        }
        let pwm = get_motif(&self.motif).ok_or_else(|| {
            SimError::InvalidConfiguration(format!(
                "Unknown motif {:?}; known motifs: {}",
                self.motif,
                motif_names().join(", ")
            ))
        })?;
        if self.max_motifs * pwm.len() > self.center_size {
            return Err(SimError::InvalidConfiguration(format!(
                "Central window of {} bp cannot fit {} non-overlapping instances of {} ({} bp)",
                self.center_size,
                self.max_motifs,
                pwm.name(),
                pwm.len()
            )));
        }
        if self.test_size + self.validation_size > self.total() {
            return Err(SimError::InvalidConfiguration(format!(
                "Test ({}) and validation ({}) sizes exceed the {} requested sequences",
                self.test_size,
                self.validation_size,
                self.total()
            )));
        }
        Ok(pwm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimError;

    fn params() -> SimParams {
        SimParams {
            motif: "TAL1".to_string(),
            seq_len: 500,
            gc_frac: 0.4,
            center_size: 150,
            min_motifs: 2,
            max_motifs: 4,
            num_pos: 10,
            num_neg: 10,
            test_size: 4,
            validation_size: 2,
            seed: 0,
        }
    }

    #[test]
    fn valid_params_resolve_motif() {
        assert_eq!(params().validate().unwrap().name(), "TAL1");
    }

    #[test]
    fn window_larger_than_sequence_err() {
        let mut p = params();
        p.center_size = 501;
        assert!(matches!(
            p.validate(),
            Err(SimError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn min_above_max_err() {
        let mut p = params();
        p.min_motifs = 5;
        p.max_motifs = 3;
        assert!(p.validate().is_err());
    }

    #[test]
    fn gc_outside_unit_interval_err() {
        let mut p = params();
        p.gc_frac = 1.2;
        assert!(p.validate().is_err());
    }

    #[test]
    fn unknown_motif_err() {
        let mut p = params();
        p.motif = "NRF1".to_string();
        assert!(p.validate().is_err());
    }

    #[test]
    fn window_too_small_for_max_count_err() {
        let mut p = params();
        p.center_size = 39; // 4 instances of the 10 bp motif need 40 bp
        assert!(p.validate().is_err());
    }

    #[test]
    fn oversized_partitions_err() {
        let mut p = params();
        p.test_size = 15;
        p.validation_size = 6;
        assert!(p.validate().is_err());
    }

    #[test]
    fn center_start_is_centered() {
        assert_eq!(params().center_start(), 175);
    }
}
