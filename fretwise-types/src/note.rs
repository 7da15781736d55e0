use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::interval::Interval;
use crate::pitch::PitchClass;

/// Highest octave a note name may carry.
pub const MAX_OCTAVE: u8 = 8;

/// Octave assumed when a note name has no octave digits ("E" means E4).
pub const DEFAULT_OCTAVE: u8 = 4;

static NOTE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-G])([#b]?)(\d*)$").expect("note name pattern is valid")
});

/// A pitch class in a specific octave.
///
/// Ordering is by semitone value (`12 * octave + pitch`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub pitch: PitchClass,
    pub octave: u8,
}

impl Note {
    pub fn new(pitch: PitchClass, octave: u8) -> Self {
        Self { pitch, octave }
    }

    pub fn semitone_value(&self) -> u16 {
        12 * self.octave as u16 + self.pitch.semitone() as u16
    }

    /// Directed pitch-class distance from this note up to `other`, ignoring octaves.
    pub fn interval_to(&self, other: &Note) -> Interval {
        Interval::from_semitones(other.pitch.semitone() as i32 - self.pitch.semitone() as i32)
    }
}

impl Ord for Note {
    fn cmp(&self, other: &Self) -> Ordering {
        self.semitone_value().cmp(&other.semitone_value())
    }
}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.pitch.sharp_name(), self.octave)
    }
}

/// A note name that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteParseError {
    pub input: String,
    pub reason: &'static str,
}

impl std::fmt::Display for NoteParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cannot read note '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for NoteParseError {}

impl FromStr for Note {
    type Err = NoteParseError;

    /// Parse names like `E2`, `C#4`, `Bb3` or `G` (octave defaults to 4).
    /// Accidentals wrap within the octave: `Cb4` is `B4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let fail = |reason| NoteParseError {
            input: trimmed.to_string(),
            reason,
        };

        let caps = NOTE_NAME
            .captures(trimmed)
            .ok_or_else(|| fail("expected a letter A-G, an optional # or b, then an octave"))?;

        let letter = caps[1].chars().next().ok_or_else(|| fail("missing note letter"))?;
        let natural = PitchClass::from_letter(letter).ok_or_else(|| fail("unknown note letter"))?;
        let shift = match &caps[2] {
            "#" => 1,
            "b" => -1,
            _ => 0,
        };

        let octave = match &caps[3] {
            "" => DEFAULT_OCTAVE,
            digits => digits
                .parse::<u8>()
                .ok()
                .filter(|&o| o <= MAX_OCTAVE)
                .ok_or_else(|| fail("octave must be between 0 and 8"))?,
        };

        Ok(Note::new(natural.transpose(shift), octave))
    }
}

/// A note given either directly or by name.
///
/// Resolved once at the API boundary, before any chord logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteInput {
    Note(Note),
    Name(String),
}

impl NoteInput {
    pub fn resolve(&self) -> Result<Note, NoteParseError> {
        match self {
            NoteInput::Note(note) => Ok(*note),
            NoteInput::Name(name) => name.parse(),
        }
    }
}

impl From<Note> for NoteInput {
    fn from(note: Note) -> Self {
        NoteInput::Note(note)
    }
}

impl From<&str> for NoteInput {
    fn from(name: &str) -> Self {
        NoteInput::Name(name.to_string())
    }
}

impl From<String> for NoteInput {
    fn from(name: String) -> Self {
        NoteInput::Name(name)
    }
}
