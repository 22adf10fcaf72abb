use super::{SimError, SimResult};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Retry budget per motif instance before the placement fails.
pub const PLACEMENT_ATTEMPTS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    Forward,
    Reverse,
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
        }
    }
}

impl FromStr for Strand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Forward),
            "-" => Ok(Strand::Reverse),
            _ => Err(format!("Invalid strand encoding: {}", s)),
        }
    }
}

/// One embedded motif instance: start offset within the sequence and the
/// strand the instance was drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotifPlacement {
    pub start: usize,
    pub strand: Strand,
}

/// Draw `num` non-overlapping start positions for a motif of `motif_len` bp
/// with starts uniform in `[window_start, window_start + window_len - motif_len]`.
/// Overlapping candidates are rejected and redrawn; the budget is
/// [`PLACEMENT_ATTEMPTS`] per instance. Returned placements are sorted by
/// start position.
pub fn place_instances(
    num: usize,
    motif_len: usize,
    window_start: usize,
    window_len: usize,
    rng: &mut impl Rng,
) -> SimResult<Vec<MotifPlacement>> {
    if num == 0 {
        return Ok(Vec::new());
    }
    if motif_len == 0 || motif_len > window_len {
        return Err(SimError::PlacementExhausted {
            num_instances: num,
            window: window_len,
        });
    }

    let last_start = window_start + window_len - motif_len;
    let mut placements: Vec<MotifPlacement> = Vec::with_capacity(num);
    for _ in 0..num {
        let mut placed = false;
        for _ in 0..PLACEMENT_ATTEMPTS {
            let start = rng.random_range(window_start..=last_start);
            let overlaps = placements
                .iter()
                .any(|p| start < p.start + motif_len && p.start < start + motif_len);
            if !overlaps {
                let strand = if rng.random_bool(0.5) {
                    Strand::Forward
                } else {
                    Strand::Reverse
                };
                placements.push(MotifPlacement { start, strand });
                placed = true;
                break;
            }
        }
        if !placed {
            return Err(SimError::PlacementExhausted {
                num_instances: num,
                window: window_len,
            });
        }
    }
    placements.sort_by_key(|p| p.start);
    Ok(placements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn placements_stay_inside_window() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let placements = place_instances(3, 8, 40, 60, &mut rng).unwrap();
            assert_eq!(placements.len(), 3);
            for p in &placements {
                assert!(p.start >= 40);
                assert!(p.start + 8 <= 100);
            }
        }
    }

    #[test]
    fn placements_do_not_overlap() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..200 {
            let placements = place_instances(4, 6, 0, 40, &mut rng).unwrap();
            for pair in placements.windows(2) {
                assert!(pair[0].start + 6 <= pair[1].start);
            }
        }
    }

    #[test]
    fn placements_are_sorted() {
        let mut rng = StdRng::seed_from_u64(7);
        let placements = place_instances(5, 4, 10, 100, &mut rng).unwrap();
        assert!(placements.windows(2).all(|p| p[0].start < p[1].start));
    }

    #[test]
    fn impossible_packing_exhausts_budget() {
        let mut rng = StdRng::seed_from_u64(8);
        let err = place_instances(3, 5, 0, 12, &mut rng).unwrap_err();
        assert_eq!(
            err,
            SimError::PlacementExhausted {
                num_instances: 3,
                window: 12
            }
        );
    }

    #[test]
    fn motif_longer_than_window_exhausts() {
        let mut rng = StdRng::seed_from_u64(9);
        assert!(place_instances(1, 20, 0, 10, &mut rng).is_err());
    }

    #[test]
    fn zero_instances_is_empty() {
        let mut rng = StdRng::seed_from_u64(10);
        assert!(place_instances(0, 10, 0, 5, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn strand_round_trips_through_display() {
        for strand in [Strand::Forward, Strand::Reverse] {
            assert_eq!(strand.to_string().parse::<Strand>().unwrap(), strand);
        }
        assert!("*".parse::<Strand>().is_err());
    }
}
