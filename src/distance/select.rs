use crate::Energy;
use crate::Error;
use crate::Result;
use std::collections::BTreeSet;

/// Index of the smallest distance outside `excluded`.
///
/// Excluded indices behave as `+inf`: they lose to every legal candidate no
/// matter their raw value. NaN distances count as excluded. Ties go to the
/// lowest index.
pub fn masked_argmin(distances: &[Energy], excluded: &BTreeSet<usize>) -> Result<usize> {
    select(distances, excluded, |challenger, incumbent| challenger < incumbent)
}

/// Index of the largest distance outside `excluded`.
///
/// Excluded indices behave as `-inf`, as do NaN distances. Ties go to the
/// lowest index.
pub fn masked_argmax(distances: &[Energy], excluded: &BTreeSet<usize>) -> Result<usize> {
    select(distances, excluded, |challenger, incumbent| challenger > incumbent)
}

/// Strict comparison keeps the first index among equals.
fn select<F>(distances: &[Energy], excluded: &BTreeSet<usize>, beats: F) -> Result<usize>
where
    F: Fn(Energy, Energy) -> bool,
{
    let masked = |&(i, d): &(usize, Energy)| excluded.contains(&i) || d.is_nan();
    distances
        .iter()
        .copied()
        .enumerate()
        .filter(|pair| !masked(pair))
        .fold(None, |best: Option<(usize, Energy)>, (i, d)| match best {
            Some((_, incumbent)) if !beats(d, incumbent) => best,
            _ => Some((i, d)),
        })
        .map(|(i, _)| i)
        .ok_or_else(|| Error::NoCandidate {
            excluded: distances.iter().copied().enumerate().filter(masked).count(),
            total: distances.len(),
        })
}
