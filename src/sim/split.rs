use super::{Label, SimError, SimResult, Split};
use rand::seq::SliceRandom;
use rand::Rng;

/// Assign each sequence to train/validation/test. Test and validation
/// partitions have exactly the requested sizes and are stratified so each
/// preserves the positive/negative ratio of the whole set (up to rounding);
/// the remainder is the training partition.
pub fn assign_splits(
    labels: &[Label],
    test_size: usize,
    validation_size: usize,
    rng: &mut impl Rng,
) -> SimResult<Vec<Split>> {
    let total = labels.len();
    if test_size + validation_size > total {
        return Err(SimError::InvalidConfiguration(format!(
            "Cannot draw {} test and {} validation sequences from {}",
            test_size, validation_size, total
        )));
    }

    let mut groups: [Vec<usize>; 2] = [Vec::new(), Vec::new()];
    for (index, label) in labels.iter().enumerate() {
        match label {
            Label::Positive => groups[0].push(index),
            Label::Negative => groups[1].push(index),
        }
    }
    for group in &mut groups {
        group.shuffle(rng);
    }

    let group_sizes = [groups[0].len(), groups[1].len()];
    let test_quotas = apportion(test_size, &group_sizes);
    let remaining = [
        group_sizes[0] - test_quotas[0],
        group_sizes[1] - test_quotas[1],
    ];
    let validation_quotas = apportion(validation_size, &remaining);

    let mut splits = vec![Split::Train; total];
    for (group, (&test_quota, &validation_quota)) in groups
        .iter()
        .zip(test_quotas.iter().zip(validation_quotas.iter()))
    {
        for (rank, &index) in group.iter().enumerate() {
            splits[index] = if rank < test_quota {
                Split::Test
            } else if rank < test_quota + validation_quota {
                Split::Validation
            } else {
                Split::Train
            };
        }
    }
    Ok(splits)
}

/// Largest-remainder apportionment of `total` slots across groups, capped by
/// each group's size. Assumes `total <= sum(group_sizes)`.
fn apportion(total: usize, group_sizes: &[usize; 2]) -> [usize; 2] {
    let pool: usize = group_sizes.iter().sum();
    if pool == 0 {
        return [0, 0];
    }
    let mut quotas = [0usize; 2];
    let mut fractions = [0.0f64; 2];
    let mut assigned = 0;
    for (j, &size) in group_sizes.iter().enumerate() {
        let ideal = total as f64 * size as f64 / pool as f64;
        quotas[j] = (ideal.floor() as usize).min(size);
        fractions[j] = ideal - quotas[j] as f64;
        assigned += quotas[j];
    }
    while assigned < total {
        let next = if fractions[0] >= fractions[1] && quotas[0] < group_sizes[0] {
            0
        } else {
            1
        };
        quotas[next] += 1;
        fractions[next] = -1.0;
        assigned += 1;
    }
    quotas
}
