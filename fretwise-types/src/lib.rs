//! # fretwise-types
//!
//! Shared data model for the fretwise chord identifier.
//! Pitch classes, notes, intervals, note-name parsing and the fretboard
//! mapping live here; classification and ranking live in `fretwise-core`.

pub mod fretboard;
pub mod interval;
pub mod note;
pub mod pitch;

pub use fretboard::{
    map_fret, played_notes, FretError, Frets, Tuning, MAX_FRET, MAX_OFFSET, MIN_OFFSET,
    STRING_COUNT,
};
pub use interval::{Interval, IntervalSet};
pub use note::{Note, NoteInput, NoteParseError, DEFAULT_OCTAVE, MAX_OCTAVE};
pub use pitch::PitchClass;
