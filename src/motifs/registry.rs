use super::Pwm;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

const PSEUDOCOUNT: f64 = 0.5;

/// Built-in transcription-factor motifs, keyed by identifier. Count matrices
/// are curated approximations of the published binding preferences; rows are
/// [A, C, G, T].
pub static MOTIF_REGISTRY: Lazy<BTreeMap<&'static str, Pwm>> = Lazy::new(|| {
    let tables: [(&str, &[[u32; 4]]); 5] = [
        (
            "CTCF",
            &[
                [20, 24, 16, 60],
                [12, 10, 80, 18],
                [8, 6, 95, 11],
                [10, 88, 8, 14],
                [14, 80, 10, 16],
                [68, 16, 20, 16],
                [12, 75, 13, 20],
                [10, 82, 12, 16],
                [60, 14, 30, 16],
                [10, 12, 85, 13],
                [6, 8, 98, 8],
                [8, 10, 90, 12],
                [12, 14, 76, 18],
                [10, 16, 78, 16],
                [14, 70, 16, 20],
                [18, 14, 68, 20],
                [16, 66, 16, 22],
                [22, 18, 20, 60],
                [55, 20, 25, 20],
            ],
        ),
        (
            "GATA1",
            &[
                [98, 6, 10, 6],
                [4, 3, 108, 5],
                [110, 2, 3, 5],
                [2, 4, 2, 112],
                [100, 8, 4, 8],
                [85, 10, 9, 16],
            ],
        ),
        (
            "MYC",
            &[
                [5, 102, 8, 5],
                [105, 4, 6, 5],
                [3, 110, 4, 3],
                [3, 4, 110, 3],
                [5, 6, 4, 105],
                [5, 8, 102, 5],
            ],
        ),
        (
            "SPI1",
            &[
                [85, 10, 15, 10],
                [12, 8, 90, 10],
                [95, 5, 12, 8],
                [6, 4, 104, 6],
                [5, 3, 108, 4],
                [108, 4, 4, 4],
                [106, 5, 4, 5],
                [8, 6, 98, 8],
                [10, 12, 8, 90],
                [15, 10, 80, 15],
            ],
        ),
        (
            "TAL1",
            &[
                [90, 10, 12, 8],
                [88, 6, 14, 12],
                [8, 95, 9, 8],
                [100, 6, 8, 6],
                [4, 5, 105, 6],
                [98, 8, 6, 8],
                [6, 4, 6, 104],
                [7, 6, 100, 7],
                [10, 12, 88, 10],
                [14, 10, 10, 86],
            ],
        ),
    ];

    tables
        .into_iter()
        .map(|(name, counts)| {
            let pwm = Pwm::from_counts(name, counts, PSEUDOCOUNT)
                .expect("invalid built-in motif table");
            (name, pwm)
        })
        .collect()
});

pub fn get_motif(name: &str) -> Option<&'static Pwm> {
    MOTIF_REGISTRY.get(name)
}

pub fn motif_names() -> Vec<&'static str> {
    MOTIF_REGISTRY.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_of_known_motif_ok() {
        let pwm = get_motif("GATA1").unwrap();
        assert_eq!(pwm.len(), 6);
        assert_eq!(pwm.consensus(), "AGATAA");
    }

    #[test]
    fn lookup_of_unknown_motif_fails() {
        assert!(get_motif("NOT_A_MOTIF").is_none());
    }

    #[test]
    fn names_are_sorted_and_complete() {
        assert_eq!(motif_names(), vec!["CTCF", "GATA1", "MYC", "SPI1", "TAL1"]);
    }

    #[test]
    fn all_rows_are_probability_distributions() {
        for pwm in MOTIF_REGISTRY.values() {
            for pos in 0..pwm.len() {
                let total: f64 = pwm.row(pos).iter().sum();
                assert!((total - 1.0).abs() < 1e-9, "{} position {}", pwm.name(), pos);
            }
        }
    }

    #[test]
    fn ebox_motif_is_its_own_reverse_complement() {
        let myc = get_motif("MYC").unwrap();
        assert_eq!(myc.reverse_complement().consensus(), myc.consensus());
    }
}
