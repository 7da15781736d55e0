#![allow(dead_code)]
//! Shared helpers for fretwise-core integration tests.

use fretwise_core::{identify_chords_from_notes, Note, NoteInput, PitchClass};

/// Note inputs from names like "C3".
pub fn inputs(names: &[&str]) -> Vec<NoteInput> {
    names.iter().map(|&n| NoteInput::from(n)).collect()
}

/// Ranked names for the given note names, panicking on errors.
pub fn chords(names: &[&str]) -> Vec<String> {
    identify_chords_from_notes(&inputs(names), None).unwrap()
}

/// Notes for a set of pitch classes, stacked upwards from octave 3.
pub fn stacked(pitches: &[PitchClass]) -> Vec<Note> {
    pitches.iter().map(|&p| Note::new(p, 3)).collect()
}

/// Every combination of `size` distinct pitch classes, in ascending order.
pub fn pitch_class_sets(size: usize) -> Vec<Vec<PitchClass>> {
    fn extend(start: usize, size: usize, current: &mut Vec<PitchClass>, out: &mut Vec<Vec<PitchClass>>) {
        if current.len() == size {
            out.push(current.clone());
            return;
        }
        for idx in start..PitchClass::ALL.len() {
            current.push(PitchClass::ALL[idx]);
            extend(idx + 1, size, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    extend(0, size, &mut Vec::new(), &mut out);
    out
}
