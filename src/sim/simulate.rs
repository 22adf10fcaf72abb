use super::{
    assign_splits, place_instances, sample_background, Label, LabeledSequence, SequenceSet,
    SimParams, SimResult, Split, Strand,
};
use crate::motifs::{complement, Pwm};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Run the full simulation: positives carry `[min, max]` motif instances
/// confined to the central window, negatives carry instances placed uniformly
/// over the whole sequence. Deterministic for a fixed `params.seed`; fails
/// atomically without partial results.
pub fn simulate(params: &SimParams) -> SimResult<SequenceSet> {
    let pwm = params.validate()?;
    let mut rng = StdRng::seed_from_u64(params.seed);

    log::info!(
        "Simulating {} positive and {} negative sequences of {} bp ({} motif, GC {:.2})",
        params.num_pos,
        params.num_neg,
        params.seq_len,
        pwm.name(),
        params.gc_frac
    );

    let mut sequences = Vec::with_capacity(params.total());
    for _ in 0..params.num_pos {
        sequences.push(generate_sequence(
            pwm,
            params,
            params.center_start(),
            params.center_size,
            Label::Positive,
            &mut rng,
        )?);
    }
    for _ in 0..params.num_neg {
        sequences.push(generate_sequence(
            pwm,
            params,
            0,
            params.seq_len,
            Label::Negative,
            &mut rng,
        )?);
    }

    let labels: Vec<Label> = sequences.iter().map(|s| s.label).collect();
    let splits = assign_splits(&labels, params.test_size, params.validation_size, &mut rng)?;
    for (sequence, split) in sequences.iter_mut().zip(splits) {
        sequence.split = split;
    }

    let set = SequenceSet::new(params.seq_len, sequences);
    log::info!(
        "Split sizes: train={}, validation={}, test={}",
        set.split_len(Split::Train),
        set.split_len(Split::Validation),
        set.split_len(Split::Test)
    );
    Ok(set)
}

fn generate_sequence(
    pwm: &Pwm,
    params: &SimParams,
    window_start: usize,
    window_len: usize,
    label: Label,
    rng: &mut impl Rng,
) -> SimResult<LabeledSequence> {
    let mut bases = sample_background(params.seq_len, params.gc_frac, rng);
    let num_instances = rng.random_range(params.min_motifs..=params.max_motifs);
    let placements = place_instances(num_instances, pwm.len(), window_start, window_len, rng)?;
    for placement in &placements {
        let mut instance = pwm.sample(rng);
        if placement.strand == Strand::Reverse {
            instance.reverse();
            for base in &mut instance {
                *base = complement(*base);
            }
        }
        bases[placement.start..placement.start + pwm.len()].copy_from_slice(&instance);
    }
    log::debug!(
        "Generated {} sequence with {} motif instances",
        label,
        placements.len()
    );
    Ok(LabeledSequence {
        bases,
        label,
        split: Split::Train,
        placements,
    })
}
