use rand::Rng;

/// Sample background bases i.i.d. with G and C at `gc_frac / 2` each and
/// A and T at `(1 - gc_frac) / 2` each.
pub fn sample_background(len: usize, gc_frac: f64, rng: &mut impl Rng) -> Vec<u8> {
    (0..len)
        .map(|_| {
            let r: f64 = rng.random();
            if r < gc_frac / 2.0 {
                b'G'
            } else if r < gc_frac {
                b'C'
            } else if r < gc_frac + (1.0 - gc_frac) / 2.0 {
                b'A'
            } else {
                b'T'
            }
        })
        .collect()
}

pub fn gc_fraction(seq: &[u8]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc = seq
        .iter()
        .filter(|&&b| matches!(b, b'G' | b'C' | b'g' | b'c'))
        .count();
    gc as f64 / seq.len() as f64
}
