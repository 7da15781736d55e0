//! # fretwise-core
//!
//! Chord recognition: turns a set of sounded notes (or a fretting) into a
//! ranked list of plausible chord names.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fretwise_core::{identify_chords_from_frets, identify_chords_from_notes, NoteInput};
//!
//! let notes: Vec<NoteInput> = ["C3", "E3", "G3"].into_iter().map(NoteInput::from).collect();
//! assert_eq!(identify_chords_from_notes(&notes, None)?[0], "C");
//!
//! let frets = [None, Some(3), Some(2), Some(0), Some(1), Some(0)];
//! assert_eq!(identify_chords_from_frets("standard", &frets, 0)?[0], "C");
//! ```
//!
//! ## Module Overview
//!
//! - [`candidates`]: bass selection and one root hypothesis per played note
//! - [`chord`]: classification of a hypothesis into a named, scored `Chord`
//! - [`ranking`]: probability cutoff, ordering and de-duplication
//! - [`identify`]: `ChordIdentifier` and the `identify_*` entry points
//! - [`config`]: TOML configuration (weights, cutoffs, custom tunings)
//! - [`scoring`]: heuristic weights and the cutoff staircase

pub mod candidates;
pub mod chord;
pub mod config;
pub mod error;
pub mod identify;
pub mod ranking;
pub mod scoring;
pub mod tunings;

pub use chord::{Chord, Reading};
pub use config::Config;
pub use error::{ChordError, ChordResult};
pub use identify::{
    identify_chords_from_frets, identify_chords_from_notes, parse_frets, ChordIdentifier,
    ScoredChord,
};
pub use scoring::{CutoffStaircase, Scoring};
pub use tunings::TuningTable;

pub use fretwise_types::{Frets, Interval, IntervalSet, Note, NoteInput, PitchClass, Tuning};
