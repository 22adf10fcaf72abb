use rand::Rng;

/// Alphabet order used throughout the crate: matrix column i holds the
/// probability of BASES[i].
pub const BASES: [u8; 4] = *b"ACGT";

pub fn base_index(base: u8) -> Option<usize> {
    match base.to_ascii_uppercase() {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'C' => b'G',
        b'G' => b'C',
        b'T' => b'A',
        b'a' => b't',
        b'c' => b'g',
        b'g' => b'c',
        b't' => b'a',
        _ => b'N',
    }
}

/// A position weight matrix: `matrix[pos] = [p_A, p_C, p_G, p_T]` with each
/// row summing to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Pwm {
    name: String,
    matrix: Vec<[f64; 4]>,
}

impl Pwm {
    /// Build a PWM from a count matrix, adding `pseudocount` to every cell
    /// before normalizing each row.
    pub fn from_counts(
        name: &str,
        counts: &[[u32; 4]],
        pseudocount: f64,
    ) -> Result<Self, String> {
        if counts.is_empty() {
            return Err(format!("Motif {} has an empty count matrix", name));
        }
        if pseudocount < 0.0 {
            return Err(format!("Motif {} has a negative pseudocount", name));
        }
        let mut matrix = Vec::with_capacity(counts.len());
        for (pos, row) in counts.iter().enumerate() {
            let total = row.iter().sum::<u32>() as f64 + 4.0 * pseudocount;
            if total == 0.0 {
                return Err(format!("Motif {} has an all-zero row at position {}", name, pos));
            }
            let mut probs = [0.0; 4];
            for (j, &count) in row.iter().enumerate() {
                probs[j] = (count as f64 + pseudocount) / total;
            }
            matrix.push(probs);
        }
        Ok(Pwm {
            name: name.to_string(),
            matrix,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    pub fn row(&self, pos: usize) -> &[f64; 4] {
        &self.matrix[pos]
    }

    /// Highest-probability base at each position.
    pub fn consensus(&self) -> String {
        self.matrix
            .iter()
            .map(|row| {
                let best = (0..4)
                    .max_by(|&i, &j| row[i].partial_cmp(&row[j]).unwrap())
                    .unwrap();
                BASES[best] as char
            })
            .collect()
    }

    pub fn reverse_complement(&self) -> Pwm {
        let matrix = self
            .matrix
            .iter()
            .rev()
            .map(|row| [row[3], row[2], row[1], row[0]])
            .collect();
        Pwm {
            name: self.name.clone(),
            matrix,
        }
    }

    /// Draw one realization of the motif, sampling each position
    /// independently from its probability row.
    pub fn sample(&self, rng: &mut impl Rng) -> Vec<u8> {
        self.matrix
            .iter()
            .map(|row| {
                let r: f64 = rng.random();
                let mut acc = 0.0;
                for (j, &p) in row.iter().enumerate() {
                    acc += p;
                    if r < acc {
                        return BASES[j];
                    }
                }
                // Rounding can leave acc marginally below 1
                BASES[3]
            })
            .collect()
    }

    /// Per-position information content in bits, split by base
    /// (`height[pos][j] = p_j * (2 + sum_k p_k log2 p_k)`), the quantity a
    /// sequence logo draws.
    pub fn information_content(&self) -> Vec<[f64; 4]> {
        self.matrix
            .iter()
            .map(|row| {
                let entropy: f64 = row
                    .iter()
                    .filter(|&&p| p > 0.0)
                    .map(|&p| -p * p.log2())
                    .sum();
                let ic = 2.0 - entropy;
                [row[0] * ic, row[1] * ic, row[2] * ic, row[3] * ic]
            })
            .collect()
    }
}
