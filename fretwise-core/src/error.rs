use std::fmt;

use fretwise_types::{FretError, NoteParseError};

pub type ChordResult<T> = Result<T, ChordError>;

/// Everything that can stop a recognition call. No partial results are returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ChordError {
    NoteParse(NoteParseError),
    Fret(FretError),
    UnknownTuning(String),
    /// Fret notation that is not six frets or mutes.
    InvalidFrets(String),
    /// No bass note could be chosen for a non-empty note set.
    BassUnresolved,
    /// Two extension labels of the same degree with the same accidental rank.
    LabelOrder {
        first: &'static str,
        second: &'static str,
    },
    Config(String),
}

impl fmt::Display for ChordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoteParse(e) => write!(f, "{}", e),
            Self::Fret(e) => write!(f, "{}", e),
            Self::UnknownTuning(id) => write!(f, "unknown tuning '{}'", id),
            Self::InvalidFrets(input) => write!(
                f,
                "invalid frets '{}': expected six frets or x for muted strings",
                input
            ),
            Self::BassUnresolved => write!(f, "bass note cannot be determined"),
            Self::LabelOrder { first, second } => write!(
                f,
                "extension labels '{}' and '{}' have no defined order",
                first, second
            ),
            Self::Config(msg) => write!(f, "config error: {}", msg),
        }
    }
}

impl std::error::Error for ChordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoteParse(e) => Some(e),
            Self::Fret(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NoteParseError> for ChordError {
    fn from(e: NoteParseError) -> Self {
        Self::NoteParse(e)
    }
}

impl From<FretError> for ChordError {
    fn from(e: FretError) -> Self {
        Self::Fret(e)
    }
}
