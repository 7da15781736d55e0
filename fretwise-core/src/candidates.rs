//! One chord candidate per played note taken as the root.

use fretwise_types::{Interval, IntervalSet, Note};

use crate::chord::Chord;
use crate::error::{ChordError, ChordResult};
use crate::scoring::Scoring;

/// The explicit bass if given, else the lowest played note (first one on ties).
pub fn resolve_bass(notes: &[Note], explicit: Option<Note>) -> ChordResult<Note> {
    match explicit {
        Some(bass) => Ok(bass),
        None => notes
            .iter()
            .copied()
            .min_by_key(Note::semitone_value)
            .ok_or(ChordError::BassUnresolved),
    }
}

/// Intervals from `root` up to every other played note. Unisons never enter the set.
pub fn intervals_from(root: &Note, notes: &[Note]) -> IntervalSet {
    notes
        .iter()
        .filter(|note| *note != root)
        .map(|note| root.interval_to(note))
        .filter(|&interval| interval != Interval::Unison)
        .collect()
}

/// Classify every root hypothesis, in played-note order.
pub fn generate(notes: &[Note], bass: Note, scoring: &Scoring) -> ChordResult<Vec<Chord>> {
    notes
        .iter()
        .map(|root| Chord::classify(*root, bass, intervals_from(root, notes), scoring))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes(names: &[&str]) -> Vec<Note> {
        names.iter().map(|n| n.parse().unwrap()).collect()
    }

    #[test]
    fn bass_defaults_to_lowest() {
        let played = notes(&["G3", "C3", "E3"]);
        assert_eq!(resolve_bass(&played, None).unwrap(), "C3".parse().unwrap());
    }

    #[test]
    fn explicit_bass_wins() {
        let played = notes(&["C3", "E3", "G3"]);
        let bass: Note = "G2".parse().unwrap();
        assert_eq!(resolve_bass(&played, Some(bass)).unwrap(), bass);
    }

    #[test]
    fn bass_of_nothing_is_an_error() {
        assert_eq!(resolve_bass(&[], None), Err(ChordError::BassUnresolved));
    }

    #[test]
    fn intervals_exclude_root_and_unisons() {
        let played = notes(&["C3", "E3", "G3", "C4", "E4"]);
        let set = intervals_from(&played[0], &played);
        assert_eq!(set.len(), 2);
        assert!(!set.contains(Interval::Unison));
        assert!(set.contains(Interval::MajorThird));
        assert!(set.contains(Interval::PerfectFifth));
    }

    #[test]
    fn one_candidate_per_note() {
        let played = notes(&["C3", "E3", "G3"]);
        let bass = resolve_bass(&played, None).unwrap();
        let chords = generate(&played, bass, &Scoring::default()).unwrap();
        assert_eq!(chords.len(), 3);
        for chord in &chords {
            assert!(chord.intervals().len() < played.len());
            assert_eq!(chord.bass(), bass);
        }
        assert_eq!(chords[0].name(), "C");
    }
}
