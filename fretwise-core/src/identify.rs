//! Public recognition entry points.

use fretwise_types::{played_notes, Frets, Note, NoteInput, STRING_COUNT};
use serde::Serialize;

use crate::candidates;
use crate::chord::{Chord, Reading};
use crate::error::{ChordError, ChordResult};
use crate::ranking::rank;
use crate::scoring::{CutoffStaircase, Scoring};
use crate::tunings::TuningTable;

/// A ranked chord name together with the hypothesis that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredChord {
    pub name: String,
    pub root: Note,
    pub bass: Note,
    pub reading: Reading,
    pub probability: f64,
}

impl From<&Chord> for ScoredChord {
    fn from(chord: &Chord) -> Self {
        Self {
            name: chord.name().to_string(),
            root: chord.root(),
            bass: chord.bass(),
            reading: chord.reading(),
            probability: chord.probability(),
        }
    }
}

/// Chord recognition with a fixed set of weights and tunings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChordIdentifier {
    pub scoring: Scoring,
    pub cutoffs: CutoffStaircase,
    pub tunings: TuningTable,
}

impl ChordIdentifier {
    pub fn new(scoring: Scoring, cutoffs: CutoffStaircase, tunings: TuningTable) -> Self {
        Self {
            scoring,
            cutoffs,
            tunings,
        }
    }

    /// Ranked, de-duplicated chord names for the played notes.
    pub fn from_notes(&self, notes: &[NoteInput], bass: Option<NoteInput>) -> ChordResult<Vec<String>> {
        Ok(names(self.scored_from_notes(notes, bass)?))
    }

    pub fn scored_from_notes(
        &self,
        notes: &[NoteInput],
        bass: Option<NoteInput>,
    ) -> ChordResult<Vec<ScoredChord>> {
        let resolved = notes
            .iter()
            .map(NoteInput::resolve)
            .collect::<Result<Vec<Note>, _>>()?;
        let bass = bass.map(|b| b.resolve()).transpose()?;
        self.scored_from_resolved(&resolved, bass)
    }

    /// Ranked chord names for a fretting in the given tuning.
    pub fn from_frets(&self, tuning: &str, frets: &Frets, offset: i8) -> ChordResult<Vec<String>> {
        Ok(names(self.scored_from_frets(tuning, frets, offset)?))
    }

    pub fn scored_from_frets(
        &self,
        tuning: &str,
        frets: &Frets,
        offset: i8,
    ) -> ChordResult<Vec<ScoredChord>> {
        let open_strings = self.tunings.lookup(tuning)?;
        let notes = played_notes(&open_strings, frets, offset)?;
        log::debug!(
            target: "identify",
            "{} {:?} offset {} -> {:?}",
            tuning,
            frets,
            offset,
            notes.iter().map(Note::to_string).collect::<Vec<_>>()
        );
        self.scored_from_resolved(&notes, None)
    }

    fn scored_from_resolved(&self, notes: &[Note], bass: Option<Note>) -> ChordResult<Vec<ScoredChord>> {
        if notes.is_empty() {
            return Ok(Vec::new());
        }
        let bass = candidates::resolve_bass(notes, bass)?;
        let chords = candidates::generate(notes, bass, &self.scoring)?;
        Ok(rank(&chords, &self.cutoffs)
            .into_iter()
            .map(ScoredChord::from)
            .collect())
    }
}

fn names(scored: Vec<ScoredChord>) -> Vec<String> {
    scored.into_iter().map(|chord| chord.name).collect()
}

/// Ranked chord names for notes given directly or by name, with default weights.
pub fn identify_chords_from_notes(
    notes: &[NoteInput],
    bass: Option<NoteInput>,
) -> ChordResult<Vec<String>> {
    ChordIdentifier::default().from_notes(notes, bass)
}

/// Ranked chord names for a fretting in a built-in tuning, with default weights.
pub fn identify_chords_from_frets(tuning: &str, frets: &Frets, offset: i8) -> ChordResult<Vec<String>> {
    ChordIdentifier::default().from_frets(tuning, frets, offset)
}

/// Parse `x32010` or `x,3,2,0,1,0` (needed once a fret reaches 10).
/// `x`, `X` and `-` mark muted strings.
pub fn parse_frets(input: &str) -> ChordResult<Frets> {
    let invalid = || ChordError::InvalidFrets(input.to_string());
    let trimmed = input.trim();

    let tokens: Vec<String> = if trimmed.contains(',') {
        trimmed.split(',').map(|t| t.trim().to_string()).collect()
    } else {
        trimmed.chars().map(String::from).collect()
    };
    if tokens.len() != STRING_COUNT {
        return Err(invalid());
    }

    let mut frets: Frets = [None; STRING_COUNT];
    for (slot, token) in frets.iter_mut().zip(&tokens) {
        *slot = match token.as_str() {
            "x" | "X" | "-" => None,
            digits => Some(digits.parse::<u8>().map_err(|_| invalid())?),
        };
    }
    Ok(frets)
}
