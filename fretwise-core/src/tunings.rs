use std::collections::BTreeMap;

use fretwise_types::{Note, Tuning, STRING_COUNT};

use crate::error::{ChordError, ChordResult};

/// Resolves tuning ids to open strings: custom tunings first, then the built-ins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TuningTable {
    custom: BTreeMap<String, [Note; STRING_COUNT]>,
}

impl TuningTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a custom tuning. Ids are case-insensitive.
    pub fn insert(&mut self, id: &str, open_strings: [Note; STRING_COUNT]) {
        self.custom.insert(normalize_id(id), open_strings);
    }

    pub fn lookup(&self, id: &str) -> ChordResult<[Note; STRING_COUNT]> {
        if let Some(strings) = self.custom.get(&normalize_id(id)) {
            return Ok(*strings);
        }
        Tuning::from_id(id)
            .map(|tuning| tuning.open_strings())
            .ok_or_else(|| ChordError::UnknownTuning(id.to_string()))
    }

    /// Every id this table answers to, built-ins first.
    pub fn entries(&self) -> Vec<(String, [Note; STRING_COUNT])> {
        let builtin = Tuning::ALL
            .iter()
            .filter(|t| !self.custom.contains_key(t.id()))
            .map(|t| (t.id().to_string(), t.open_strings()));
        let custom = self.custom.iter().map(|(id, strings)| (id.clone(), *strings));
        builtin.chain(custom).collect()
    }
}

/// Parse six note names (lowest string first) into open strings.
pub fn parse_open_strings(id: &str, names: &[String]) -> ChordResult<[Note; STRING_COUNT]> {
    if names.len() != STRING_COUNT {
        return Err(ChordError::Config(format!(
            "tuning '{}' needs {} strings, got {}",
            id,
            STRING_COUNT,
            names.len()
        )));
    }
    let mut strings = [Note::new(fretwise_types::PitchClass::C, 0); STRING_COUNT];
    for (slot, name) in strings.iter_mut().zip(names) {
        *slot = name.parse()?;
    }
    Ok(strings)
}

fn normalize_id(id: &str) -> String {
    id.trim().to_lowercase().replace('-', "_")
}
