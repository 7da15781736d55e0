use serde::{Deserialize, Serialize};

/// One of the twelve pitch classes, named with sharps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

impl PitchClass {
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Semitone offset above C (0-11)
    pub fn semitone(self) -> u8 {
        self as u8
    }

    /// Pitch class for any semitone count, normalized into 0-11.
    pub fn from_semitone(semitone: i32) -> Self {
        Self::ALL[semitone.rem_euclid(12) as usize]
    }

    /// The pitch class `semitones` above this one.
    pub fn transpose(self, semitones: i32) -> Self {
        Self::from_semitone(self.semitone() as i32 + semitones)
    }

    pub fn is_accidental(self) -> bool {
        matches!(
            self,
            PitchClass::Cs | PitchClass::Ds | PitchClass::Fs | PitchClass::Gs | PitchClass::As
        )
    }

    pub fn sharp_name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }

    /// Flat spelling, borrowed from the next pitch class up (C# -> Db).
    /// Natural pitch classes keep their plain name.
    pub fn flat_name(self) -> &'static str {
        match self {
            PitchClass::Cs => "Db",
            PitchClass::Ds => "Eb",
            PitchClass::Fs => "Gb",
            PitchClass::Gs => "Ab",
            PitchClass::As => "Bb",
            natural => natural.sharp_name(),
        }
    }

    /// Natural pitch class for a note letter, if it is one.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'C' => Some(PitchClass::C),
            'D' => Some(PitchClass::D),
            'E' => Some(PitchClass::E),
            'F' => Some(PitchClass::F),
            'G' => Some(PitchClass::G),
            'A' => Some(PitchClass::A),
            'B' => Some(PitchClass::B),
            _ => None,
        }
    }
}

impl std::fmt::Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.sharp_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn pitch_all_has_12() {
        assert_eq!(PitchClass::ALL.len(), 12);
    }

    #[test]
    fn sharp_names_unique() {
        let names: HashSet<&str> = PitchClass::ALL.iter().map(|p| p.sharp_name()).collect();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn semitones_0_to_11() {
        let semitones: Vec<u8> = PitchClass::ALL.iter().map(|p| p.semitone()).collect();
        assert_eq!(semitones, (0..12).collect::<Vec<u8>>());
    }

    #[test]
    fn from_semitone_wraps_both_ways() {
        assert_eq!(PitchClass::from_semitone(12), PitchClass::C);
        assert_eq!(PitchClass::from_semitone(-1), PitchClass::B);
        assert_eq!(PitchClass::from_semitone(-13), PitchClass::B);
        assert_eq!(PitchClass::from_semitone(25), PitchClass::Cs);
    }

    #[test]
    fn transpose_up_and_down() {
        assert_eq!(PitchClass::A.transpose(3), PitchClass::C);
        assert_eq!(PitchClass::C.transpose(-4), PitchClass::Gs);
    }

    #[test]
    fn flat_names_borrow_next_letter() {
        assert_eq!(PitchClass::Cs.flat_name(), "Db");
        assert_eq!(PitchClass::As.flat_name(), "Bb");
        assert_eq!(PitchClass::E.flat_name(), "E");
    }

    #[test]
    fn accidentals_are_the_black_keys() {
        let count = PitchClass::ALL.iter().filter(|p| p.is_accidental()).count();
        assert_eq!(count, 5);
        assert!(!PitchClass::B.is_accidental());
    }
}
