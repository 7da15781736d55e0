//! Interval classes and order-independent sets of them.

use serde::{Deserialize, Serialize};

/// Directed pitch-class distance, in semitones (0-11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Interval {
    Unison,
    MinorSecond,
    MajorSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    Tritone,
    PerfectFifth,
    MinorSixth,
    MajorSixth,
    MinorSeventh,
    MajorSeventh,
}

impl Interval {
    pub const ALL: [Interval; 12] = [
        Interval::Unison,
        Interval::MinorSecond,
        Interval::MajorSecond,
        Interval::MinorThird,
        Interval::MajorThird,
        Interval::PerfectFourth,
        Interval::Tritone,
        Interval::PerfectFifth,
        Interval::MinorSixth,
        Interval::MajorSixth,
        Interval::MinorSeventh,
        Interval::MajorSeventh,
    ];

    pub fn semitones(self) -> u8 {
        self as u8
    }

    /// Interval class for any semitone distance, normalized into 0-11.
    pub fn from_semitones(semitones: i32) -> Self {
        Self::ALL[semitones.rem_euclid(12) as usize]
    }
}

/// Set of interval classes, stored as a 12-bit mask.
///
/// Iteration is always ascending by semitone, so nothing built on top of it
/// depends on insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntervalSet(u16);

impl IntervalSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn contains(self, interval: Interval) -> bool {
        self.0 & Self::bit(interval) != 0
    }

    pub fn contains_any(self, intervals: &[Interval]) -> bool {
        intervals.iter().any(|&i| self.contains(i))
    }

    /// A copy of this set with `interval` added.
    #[must_use]
    pub fn with(self, interval: Interval) -> Self {
        Self(self.0 | Self::bit(interval))
    }

    /// A copy of this set with `interval` removed.
    #[must_use]
    pub fn without(self, interval: Interval) -> Self {
        Self(self.0 & !Self::bit(interval))
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Interval> {
        Interval::ALL.into_iter().filter(move |&i| self.contains(i))
    }

    fn bit(interval: Interval) -> u16 {
        1 << interval.semitones()
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), IntervalSet::with)
    }
}

impl std::fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let semitones: Vec<String> = self.iter().map(|i| i.semitones().to_string()).collect();
        write!(f, "{{{}}}", semitones.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_semitones_never_negative() {
        assert_eq!(Interval::from_semitones(-3), Interval::MajorSixth);
        assert_eq!(Interval::from_semitones(12), Interval::Unison);
        assert_eq!(Interval::from_semitones(19), Interval::PerfectFifth);
    }

    #[test]
    fn with_and_without_leave_original_untouched() {
        let base: IntervalSet = [Interval::MajorThird, Interval::PerfectFifth]
            .into_iter()
            .collect();
        let added = base.with(Interval::MinorSeventh);
        let removed = base.without(Interval::MajorThird);

        assert_eq!(base.len(), 2);
        assert!(added.contains(Interval::MinorSeventh));
        assert!(!removed.contains(Interval::MajorThird));
        assert!(base.contains(Interval::MajorThird));
    }

    #[test]
    fn duplicates_collapse() {
        let set: IntervalSet = [Interval::MinorThird, Interval::MinorThird]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn iteration_is_ascending_regardless_of_insertion() {
        let set: IntervalSet = [
            Interval::MajorSeventh,
            Interval::MinorSecond,
            Interval::PerfectFifth,
        ]
        .into_iter()
        .collect();
        let order: Vec<Interval> = set.iter().collect();
        assert_eq!(
            order,
            vec![
                Interval::MinorSecond,
                Interval::PerfectFifth,
                Interval::MajorSeventh
            ]
        );
        assert_eq!(set.to_string(), "{1,7,11}");
    }

    #[test]
    fn contains_any_checks_each() {
        let set = IntervalSet::empty().with(Interval::Tritone);
        assert!(set.contains_any(&[Interval::PerfectFourth, Interval::Tritone]));
        assert!(!set.contains_any(&[Interval::MinorSecond, Interval::MajorSecond]));
        assert!(IntervalSet::empty().is_empty());
    }
}
