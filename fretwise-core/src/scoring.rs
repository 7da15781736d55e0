//! Heuristic weights for ranking root hypotheses.
//!
//! These are hand-tuned, not derived. Every value can be overridden from the
//! `[scoring]` and `[cutoffs]` config sections.

use serde::Serialize;

pub const TRIAD_SCORE: f64 = 4.0;
pub const DIMINISHED_SCORE: f64 = 4.0;
pub const AUGMENTED_SCORE: f64 = 4.0;
pub const SUSPENDED_SCORE: f64 = 3.0;
pub const POWER_SCORE: f64 = 2.0;
pub const DYAD_SCORE: f64 = 1.0;
pub const NO_CHORD_SCORE: f64 = 0.0;
pub const SEVENTH_BONUS: f64 = 0.25;
pub const FLAT_FIFTH_PENALTY: f64 = 0.75;
pub const SLASH_PENALTY: f64 = 0.5;
/// Below every real reading, so the ranker always drops it.
pub const EXCLUDED_SCORE: f64 = -1.0;

/// (trigger, keep): the first step whose trigger the best score exceeds
/// sets the minimum score kept.
pub const CUTOFF_STEPS: [(f64, f64); 4] = [(3.8, 3.7), (2.9, 2.9), (0.9, 0.9), (0.0, 0.1)];
pub const CUTOFF_DEFAULT: f64 = 0.0;

/// Base score per reading plus adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scoring {
    pub triad: f64,
    pub diminished: f64,
    pub augmented: f64,
    pub suspended: f64,
    pub power: f64,
    pub dyad: f64,
    pub no_chord: f64,
    pub seventh_bonus: f64,
    pub flat_fifth_penalty: f64,
    pub slash_penalty: f64,
    pub excluded: f64,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            triad: TRIAD_SCORE,
            diminished: DIMINISHED_SCORE,
            augmented: AUGMENTED_SCORE,
            suspended: SUSPENDED_SCORE,
            power: POWER_SCORE,
            dyad: DYAD_SCORE,
            no_chord: NO_CHORD_SCORE,
            seventh_bonus: SEVENTH_BONUS,
            flat_fifth_penalty: FLAT_FIFTH_PENALTY,
            slash_penalty: SLASH_PENALTY,
            excluded: EXCLUDED_SCORE,
        }
    }
}

/// Descending staircase mapping the best candidate score to a retention cutoff.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutoffStaircase {
    pub steps: Vec<(f64, f64)>,
    pub default: f64,
}

impl CutoffStaircase {
    pub fn cutoff(&self, max_probability: f64) -> f64 {
        self.steps
            .iter()
            .find(|(trigger, _)| max_probability > *trigger)
            .map(|&(_, keep)| keep)
            .unwrap_or(self.default)
    }
}

impl Default for CutoffStaircase {
    fn default() -> Self {
        Self {
            steps: CUTOFF_STEPS.to_vec(),
            default: CUTOFF_DEFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_step_wins() {
        let stairs = CutoffStaircase::default();
        assert_eq!(stairs.cutoff(4.25), 3.7);
        assert_eq!(stairs.cutoff(3.8), 2.9);
        assert_eq!(stairs.cutoff(3.0), 2.9);
        assert_eq!(stairs.cutoff(2.0), 0.9);
        assert_eq!(stairs.cutoff(0.5), 0.1);
    }

    #[test]
    fn falls_back_to_default() {
        let stairs = CutoffStaircase::default();
        assert_eq!(stairs.cutoff(0.0), 0.0);
        assert_eq!(stairs.cutoff(-1.5), 0.0);
    }

    #[test]
    fn excluded_is_below_every_real_reading() {
        let s = Scoring::default();
        let worst_real = s.no_chord - s.slash_penalty;
        assert!(s.excluded < worst_real);
    }
}
