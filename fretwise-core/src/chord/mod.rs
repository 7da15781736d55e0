//! Chord classification and naming for a single root hypothesis.

mod extensions;

use fretwise_types::{Interval, IntervalSet, Note, PitchClass};
use serde::Serialize;

use crate::error::ChordResult;
use crate::scoring::Scoring;
use extensions::{fold_extensions, FoldMode};

/// How a candidate's intervals were read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Reading {
    Triad,
    Diminished,
    Augmented,
    Suspended,
    Power,
    Dyad,
    NoChord,
    /// The intervals contradict this root (e.g. a diminished seventh heard from
    /// the wrong note). Kept in the list but always below the cutoff.
    Excluded,
}

/// A classified chord candidate: one root hypothesis over the played notes.
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    root: Note,
    bass: Note,
    intervals: IntervalSet,
    reading: Reading,
    name: String,
    probability: f64,
}

impl Chord {
    /// Classify `intervals` (measured up from `root`) and derive name and score.
    pub fn classify(
        root: Note,
        bass: Note,
        intervals: IntervalSet,
        scoring: &Scoring,
    ) -> ChordResult<Self> {
        let mut name = vec![root_spelling(root.pitch, intervals).to_string()];
        let (reading, mut probability) = read_body(intervals, &mut name, scoring)?;

        if bass.pitch != root.pitch {
            name.push(format!("/{}", bass.pitch.sharp_name()));
            probability -= scoring.slash_penalty;
        }

        let chord = Self {
            root,
            bass,
            intervals,
            reading,
            name: name.concat(),
            probability,
        };
        log::trace!(
            target: "chord",
            "root {} intervals {} -> {:?} '{}' ({})",
            root,
            intervals,
            reading,
            chord.name,
            probability
        );
        Ok(chord)
    }

    pub fn root(&self) -> Note {
        self.root
    }

    pub fn bass(&self) -> Note {
        self.bass
    }

    pub fn intervals(&self) -> IntervalSet {
        self.intervals
    }

    pub fn reading(&self) -> Reading {
        self.reading
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl std::fmt::Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Accidental roots read sharp under a minor third and flat otherwise (C#m, Db).
fn root_spelling(pitch: PitchClass, intervals: IntervalSet) -> &'static str {
    if !pitch.is_accidental() {
        return pitch.sharp_name();
    }
    let minor = intervals.contains(Interval::MinorThird) && !intervals.contains(Interval::MajorThird);
    if minor {
        pitch.sharp_name()
    } else {
        pitch.flat_name()
    }
}

fn read_body(
    intervals: IntervalSet,
    name: &mut Vec<String>,
    scoring: &Scoring,
) -> ChordResult<(Reading, f64)> {
    use Interval::*;

    let has = |i| intervals.contains(i);
    let has_third = intervals.contains_any(&[MinorThird, MajorThird]);
    let has_fifth = has(PerfectFifth);

    if has_third && has_fifth {
        read_triad(intervals, name, scoring)
    } else if has(MinorThird) && has(Tritone) {
        read_diminished(intervals, name, scoring)
    } else if has(MajorThird) && has(MinorSixth) {
        read_augmented(intervals, name, scoring)
    } else if has_fifth || has(Tritone) {
        read_suspended_or_power(intervals, name, scoring)
    } else if has_third {
        read_dyad(intervals, name, scoring)
    } else {
        let folded = fold_extensions(intervals, false, FoldMode::Plain)?;
        name.extend(folded.segments);
        name.push("(N/C)".to_string());
        Ok((Reading::NoChord, scoring.no_chord))
    }
}

fn read_triad(
    intervals: IntervalSet,
    name: &mut Vec<String>,
    scoring: &Scoring,
) -> ChordResult<(Reading, f64)> {
    let major = intervals.contains(Interval::MajorThird);
    if !major {
        name.push("m".to_string());
    }

    let folded = fold_extensions(intervals, major, FoldMode::Plain)?;
    let mut probability = scoring.triad;
    if folded.has_seventh {
        probability += scoring.seventh_bonus;
    }
    name.extend(folded.segments);
    Ok((Reading::Triad, probability))
}

fn read_diminished(
    intervals: IntervalSet,
    name: &mut Vec<String>,
    scoring: &Scoring,
) -> ChordResult<(Reading, f64)> {
    use Interval::*;

    let has = |i| intervals.contains(i);
    let both_sevenths = has(MinorSeventh) && has(MajorSeventh);
    let sixth_with_seventh = has(MajorSixth) && (has(MinorSeventh) || has(MajorSeventh));
    if both_sevenths || sixth_with_seventh {
        return Ok((Reading::Excluded, scoring.excluded));
    }

    let body = intervals.without(Tritone);
    if has(MajorSixth) {
        name.push("°7".to_string());
        let folded = fold_extensions(body.without(MajorSixth), false, FoldMode::Diminished)?;
        name.extend(folded.segments);
    } else if has(MinorSeventh) {
        // half-diminished: m7(b5)
        name.push("m".to_string());
        let folded = fold_extensions(body, false, FoldMode::Diminished)?;
        name.extend(folded.segments);
        name.push("(b5)".to_string());
    } else {
        name.push("°".to_string());
        let folded = fold_extensions(body, false, FoldMode::Diminished)?;
        name.extend(folded.segments);
    }
    Ok((Reading::Diminished, scoring.diminished))
}

fn read_augmented(
    intervals: IntervalSet,
    name: &mut Vec<String>,
    scoring: &Scoring,
) -> ChordResult<(Reading, f64)> {
    name.push("+".to_string());
    let folded = fold_extensions(intervals.without(Interval::MinorSixth), false, FoldMode::Plain)?;
    name.extend(folded.segments);
    Ok((Reading::Augmented, scoring.augmented))
}

fn read_suspended_or_power(
    intervals: IntervalSet,
    name: &mut Vec<String>,
    scoring: &Scoring,
) -> ChordResult<(Reading, f64)> {
    use Interval::*;

    let flat_fifth = !intervals.contains(PerfectFifth) && intervals.contains(Tritone);
    let body = if flat_fifth {
        intervals.without(Tritone)
    } else {
        intervals
    };

    let second = [MajorSecond, MinorSecond]
        .into_iter()
        .find(|&i| body.contains(i));
    let fourth = [PerfectFourth, Tritone]
        .into_iter()
        .find(|&i| body.contains(i));

    let (reading, mut probability) = if second.is_some() || fourth.is_some() {
        let reduced = second
            .into_iter()
            .chain(fourth)
            .fold(body, IntervalSet::without);
        let folded = fold_extensions(reduced, false, FoldMode::Plain)?;
        name.extend(folded.segments);

        match second {
            Some(MinorSecond) => name.push("sus2(b2)".to_string()),
            Some(_) => name.push("sus2".to_string()),
            None => {}
        }
        match fourth {
            Some(Tritone) => name.push("sus(#4)".to_string()),
            Some(_) => name.push("sus4".to_string()),
            None => {}
        }
        (Reading::Suspended, scoring.suspended)
    } else {
        name.push("5".to_string());
        let folded = fold_extensions(body, false, FoldMode::Power)?;
        name.extend(folded.segments);
        (Reading::Power, scoring.power)
    };

    if flat_fifth {
        name.push("(b5)".to_string());
        probability -= scoring.flat_fifth_penalty;
    }
    Ok((reading, probability))
}

fn read_dyad(
    intervals: IntervalSet,
    name: &mut Vec<String>,
    scoring: &Scoring,
) -> ChordResult<(Reading, f64)> {
    if intervals.contains(Interval::MinorThird) {
        name.push("m".to_string());
    }
    let folded = fold_extensions(intervals, intervals.contains(Interval::MajorThird), FoldMode::Plain)?;
    name.extend(folded.segments);
    name.push("(no5)".to_string());
    Ok((Reading::Dyad, scoring.dyad))
}
