//! Folding leftover intervals into extension labels (7ths, 9ths, 11ths, 13ths).

use std::collections::BTreeMap;

use fretwise_types::{Interval, IntervalSet};

use crate::error::{ChordError, ChordResult};

/// Scale degree an interval is named as once it is not part of the chord body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Degree {
    Seventh,
    Ninth,
    Eleventh,
    Thirteenth,
}

// (interval, degree, label), in ascending label order within each degree
const EXTENSION_LABELS: [(Interval, Degree, &str); 9] = [
    (Interval::MinorSeventh, Degree::Seventh, "7"),
    (Interval::MajorSeventh, Degree::Seventh, "maj7"),
    (Interval::MinorSecond, Degree::Ninth, "b9"),
    (Interval::MajorSecond, Degree::Ninth, "9"),
    (Interval::MinorThird, Degree::Ninth, "#9"),
    (Interval::PerfectFourth, Degree::Eleventh, "11"),
    (Interval::Tritone, Degree::Eleventh, "#11"),
    (Interval::MinorSixth, Degree::Thirteenth, "b13"),
    (Interval::MajorSixth, Degree::Thirteenth, "13"),
];

/// How the chord body around the extensions reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FoldMode {
    Plain,
    /// Bare fifth: extensions are written as `add(...)`.
    Power,
    /// Diminished bodies write a lone major seventh unbracketed: `C°maj7`.
    Diminished,
}

#[derive(Debug, Default)]
pub(crate) struct Folded {
    pub segments: Vec<String>,
    pub has_seventh: bool,
}

impl Folded {
    fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }
}

/// Name the intervals left over after the chord body was recognised.
///
/// `major` decides whether a minor third is a #9 (major reading) or part of the
/// body and skipped.
pub(crate) fn fold_extensions(
    intervals: IntervalSet,
    major: bool,
    mode: FoldMode,
) -> ChordResult<Folded> {
    let mut degrees = group_by_degree(intervals, major);
    let mut folded = Folded::default();

    if let Some(sevenths) = degrees.remove(&Degree::Seventh) {
        folded.has_seventh = true;
        if mode == FoldMode::Power {
            folded.push("add");
        }

        if sevenths.len() > 1 {
            folded.push("(7, maj7)");
            fold_generic(&mut folded, degrees)?;
            return Ok(folded);
        }

        let seventh = sevenths[0];
        let mut rest = degrees.into_iter();
        match rest.next() {
            Some((_, labels)) => {
                // the 7 is implied by the higher extension: C9, Cmaj9
                if seventh == "maj7" {
                    folded.push("maj");
                }
                folded.push(inline_labels(&labels, mode == FoldMode::Power)?);
                fold_generic(&mut folded, rest)?;
            }
            None => {
                let minor_major_seventh = seventh == "maj7"
                    && !major
                    && mode != FoldMode::Diminished
                    && intervals.contains(Interval::MinorThird);
                if minor_major_seventh || mode == FoldMode::Power {
                    folded.push(format!("({})", seventh));
                } else {
                    folded.push(seventh);
                }
            }
        }
        return Ok(folded);
    }

    if let Some(sixths) = degrees.remove(&Degree::Thirteenth) {
        if mode == FoldMode::Power {
            folded.push("add");
        }
        let sixth = match sixths.as_slice() {
            [single] if *single == "b13" => "(min6)",
            [_] => "6",
            _ => "(min6, 6)",
        };
        folded.push(sixth);
    }

    fold_generic(&mut folded, degrees)?;
    Ok(folded)
}

fn group_by_degree(intervals: IntervalSet, major: bool) -> BTreeMap<Degree, Vec<&'static str>> {
    let mut degrees: BTreeMap<Degree, Vec<&'static str>> = BTreeMap::new();
    for (interval, degree, label) in EXTENSION_LABELS {
        if !intervals.contains(interval) {
            continue;
        }
        if interval == Interval::MinorThird && !major {
            continue;
        }
        degrees.entry(degree).or_default().push(label);
    }
    degrees
}

/// Append every remaining degree, lowest first, as `add` extensions.
fn fold_generic(
    folded: &mut Folded,
    degrees: impl IntoIterator<Item = (Degree, Vec<&'static str>)>,
) -> ChordResult<()> {
    for (_, labels) in degrees {
        match labels.as_slice() {
            [] => {}
            [label] if has_accidental(label) => folded.push(format!("add({})", label)),
            [label] => folded.push(format!("add{}", label)),
            _ => folded.push(format!("add({})", ordered_labels(&labels)?.join(","))),
        }
    }
    Ok(())
}

/// Labels written straight after the seventh: `9`, `b9`, `(b9,9)`.
/// Power chords bracket even a single label.
fn inline_labels(labels: &[&'static str], bracket: bool) -> ChordResult<String> {
    match labels {
        [label] if bracket => Ok(format!("({})", label)),
        [label] => Ok(label.to_string()),
        _ => Ok(format!("({})", ordered_labels(labels)?.join(","))),
    }
}

fn has_accidental(label: &str) -> bool {
    label.starts_with('b') || label.starts_with('#')
}

// flats, then naturals (and the minor 7), then sharps (and the major 7)
fn accidental_rank(label: &str) -> u8 {
    if label.starts_with('b') {
        0
    } else if label.starts_with('#') || label == "maj7" {
        2
    } else {
        1
    }
}

/// Order labels of one degree flat-first. Two labels of equal rank cannot
/// come out of the label table, so they are reported as an invariant violation.
fn ordered_labels(labels: &[&'static str]) -> ChordResult<Vec<&'static str>> {
    let mut ordered = labels.to_vec();
    ordered.sort_by_key(|label| accidental_rank(label));
    for pair in ordered.windows(2) {
        if accidental_rank(pair[0]) == accidental_rank(pair[1]) {
            return Err(ChordError::LabelOrder {
                first: pair[0],
                second: pair[1],
            });
        }
    }
    Ok(ordered)
}
