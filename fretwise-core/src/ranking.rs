//! Cutoff, ordering and de-duplication of classified candidates.

use std::collections::HashSet;

use crate::chord::Chord;
use crate::scoring::CutoffStaircase;

/// Keep the candidates that clear the staircase cutoff, best first.
///
/// Ties keep their input order, and only the first candidate of each name survives.
pub fn rank<'a>(candidates: &'a [Chord], stairs: &CutoffStaircase) -> Vec<&'a Chord> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let max_probability = candidates
        .iter()
        .map(Chord::probability)
        .fold(f64::NEG_INFINITY, f64::max);
    let cutoff = stairs.cutoff(max_probability);
    log::debug!(
        target: "ranking",
        "{} candidates, best {} -> cutoff {}",
        candidates.len(),
        max_probability,
        cutoff
    );

    let mut kept: Vec<&Chord> = candidates
        .iter()
        .filter(|chord| chord.probability() >= cutoff)
        .collect();
    kept.sort_by(|a, b| b.probability().total_cmp(&a.probability()));

    let mut seen = HashSet::new();
    kept.retain(|chord| seen.insert(chord.name()));
    kept
}
