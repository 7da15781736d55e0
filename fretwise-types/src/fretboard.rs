//! Six-string fretboard: built-in tunings and fret-to-note mapping.

use serde::{Deserialize, Serialize};

use crate::note::Note;
use crate::pitch::PitchClass;

pub const STRING_COUNT: usize = 6;
pub const MAX_FRET: u8 = 24;
pub const MIN_OFFSET: i8 = -4;
pub const MAX_OFFSET: i8 = 4;

/// Fret per string, lowest string first. `None` is a muted string.
pub type Frets = [Option<u8>; STRING_COUNT];

/// Built-in guitar tunings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tuning {
    Standard,
    DropD,
    DoubleDropD,
    OpenG,
}

impl Tuning {
    pub const ALL: [Tuning; 4] = [
        Tuning::Standard,
        Tuning::DropD,
        Tuning::DoubleDropD,
        Tuning::OpenG,
    ];

    /// Identifier used in config files and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Tuning::Standard => "standard",
            Tuning::DropD => "drop_d",
            Tuning::DoubleDropD => "double_drop_d",
            Tuning::OpenG => "open_g",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tuning::Standard => "Standard",
            Tuning::DropD => "Drop D",
            Tuning::DoubleDropD => "Double Drop D",
            Tuning::OpenG => "Open G",
        }
    }

    pub fn from_id(id: &str) -> Option<Tuning> {
        match id.trim().to_lowercase().replace('-', "_").as_str() {
            "standard" => Some(Tuning::Standard),
            "drop_d" => Some(Tuning::DropD),
            "double_drop_d" => Some(Tuning::DoubleDropD),
            "open_g" => Some(Tuning::OpenG),
            _ => None,
        }
    }

    /// Open-string notes, lowest string first.
    pub fn open_strings(&self) -> [Note; STRING_COUNT] {
        use PitchClass::*;
        let n = Note::new;
        match self {
            Tuning::Standard => [n(E, 2), n(A, 2), n(D, 3), n(G, 3), n(B, 3), n(E, 4)],
            Tuning::DropD => [n(D, 2), n(A, 2), n(D, 3), n(G, 3), n(B, 3), n(E, 4)],
            // both E strings down a tone; some tables list E4 on top, which is plain drop D
            Tuning::DoubleDropD => [n(D, 2), n(A, 2), n(D, 3), n(G, 3), n(B, 3), n(D, 4)],
            Tuning::OpenG => [n(D, 2), n(G, 2), n(D, 3), n(G, 3), n(B, 3), n(D, 4)],
        }
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::Standard
    }
}

/// Fret or transposition outside the playable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FretError {
    FretOutOfRange(u8),
    OffsetOutOfRange(i8),
}

impl std::fmt::Display for FretError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FretOutOfRange(fret) => write!(f, "fret {} is beyond fret {}", fret, MAX_FRET),
            Self::OffsetOutOfRange(offset) => write!(
                f,
                "transposition offset {} is outside {}..={}",
                offset, MIN_OFFSET, MAX_OFFSET
            ),
        }
    }
}

impl std::error::Error for FretError {}

/// Note sounded by fretting `open` at `fret`, shifted by `offset` semitones.
///
/// A negative sum wraps up by an octave before the carry is taken, so the
/// octave never drops below the open string's.
pub fn map_fret(open: Note, fret: u8, offset: i8) -> Result<Note, FretError> {
    if fret > MAX_FRET {
        return Err(FretError::FretOutOfRange(fret));
    }
    if !(MIN_OFFSET..=MAX_OFFSET).contains(&offset) {
        return Err(FretError::OffsetOutOfRange(offset));
    }

    let mut resultant = open.pitch.semitone() as i32 + fret as i32 + offset as i32;
    if resultant < 0 {
        resultant += 12;
    }

    let octave_carry = (resultant / 12) as u8;
    Ok(Note::new(
        PitchClass::from_semitone(resultant),
        open.octave + octave_carry,
    ))
}

/// Notes sounded by a fretting, skipping muted strings. Order follows the strings.
pub fn played_notes(
    open_strings: &[Note; STRING_COUNT],
    frets: &Frets,
    offset: i8,
) -> Result<Vec<Note>, FretError> {
    open_strings
        .iter()
        .zip(frets.iter())
        .filter_map(|(&open, fret)| fret.map(|f| map_fret(open, f, offset)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(name: &str) -> Note {
        name.parse().unwrap()
    }

    #[test]
    fn open_string_is_unchanged() {
        assert_eq!(map_fret(n("E2"), 0, 0).unwrap(), n("E2"));
    }

    #[test]
    fn fret_carries_octave() {
        assert_eq!(map_fret(n("B3"), 1, 0).unwrap(), n("C4"));
        assert_eq!(map_fret(n("E4"), 12, 0).unwrap(), n("E5"));
        assert_eq!(map_fret(n("B3"), 20, 0).unwrap(), n("G5"));
    }

    #[test]
    fn positive_offset_acts_like_capo() {
        assert_eq!(map_fret(n("E2"), 0, 2).unwrap(), n("F#2"));
    }

    #[test]
    fn negative_offset_wraps_within_octave() {
        // C + (-4) = -4, wrapped to 8 without lowering the octave
        assert_eq!(map_fret(n("C3"), 0, -4).unwrap(), n("G#3"));
        assert_eq!(map_fret(n("E2"), 0, -2).unwrap(), n("D2"));
    }

    #[test]
    fn out_of_range_rejected() {
        assert_eq!(map_fret(n("E2"), 25, 0), Err(FretError::FretOutOfRange(25)));
        assert_eq!(map_fret(n("E2"), 0, 5), Err(FretError::OffsetOutOfRange(5)));
        assert_eq!(map_fret(n("E2"), 0, -5), Err(FretError::OffsetOutOfRange(-5)));
    }

    #[test]
    fn open_c_shape_in_standard() {
        let frets: Frets = [None, Some(3), Some(2), Some(0), Some(1), Some(0)];
        let notes = played_notes(&Tuning::Standard.open_strings(), &frets, 0).unwrap();
        assert_eq!(notes, vec![n("C3"), n("E3"), n("G3"), n("C4"), n("E4")]);
    }

    #[test]
    fn all_muted_is_empty() {
        let notes = played_notes(&Tuning::OpenG.open_strings(), &[None; 6], 0).unwrap();
        assert!(notes.is_empty());
    }

    #[test]
    fn tuning_ids_round_trip() {
        for tuning in Tuning::ALL {
            assert_eq!(Tuning::from_id(tuning.id()), Some(tuning));
        }
        assert_eq!(Tuning::from_id("Drop-D"), Some(Tuning::DropD));
        assert_eq!(Tuning::from_id("nashville"), None);
    }

    #[test]
    fn drop_tunings_lower_the_low_string() {
        assert_eq!(Tuning::DropD.open_strings()[0], n("D2"));
        assert_eq!(Tuning::DoubleDropD.open_strings()[5], n("D4"));
        assert_eq!(Tuning::default(), Tuning::Standard);
    }
}
