use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use fretwise_types::{MAX_OFFSET, MIN_OFFSET};
use serde::Deserialize;

use crate::error::{ChordError, ChordResult};
use crate::identify::ChordIdentifier;
use crate::scoring::{CutoffStaircase, Scoring};
use crate::tunings::{parse_open_strings, TuningTable};

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    scoring: ScoringConfig,
    #[serde(default)]
    cutoffs: CutoffConfig,
    #[serde(default)]
    fretboard: FretboardConfig,
    #[serde(default)]
    tunings: BTreeMap<String, Vec<String>>,
}

#[derive(Deserialize, Default)]
struct ScoringConfig {
    triad: Option<f64>,
    diminished: Option<f64>,
    augmented: Option<f64>,
    suspended: Option<f64>,
    power: Option<f64>,
    dyad: Option<f64>,
    no_chord: Option<f64>,
    seventh_bonus: Option<f64>,
    flat_fifth_penalty: Option<f64>,
    slash_penalty: Option<f64>,
    excluded: Option<f64>,
}

#[derive(Deserialize, Default)]
struct CutoffConfig {
    steps: Option<Vec<[f64; 2]>>,
    default: Option<f64>,
}

#[derive(Deserialize, Default)]
struct FretboardConfig {
    tuning: Option<String>,
    offset: Option<i8>,
}

pub struct Config {
    scoring: ScoringConfig,
    cutoffs: CutoffConfig,
    fretboard: FretboardConfig,
    tunings: BTreeMap<String, Vec<String>>,
}

impl Config {
    /// Embedded defaults overlaid with the user's config file, if any.
    /// A broken user file is logged and ignored.
    pub fn load() -> Self {
        let mut base = embedded();

        if let Some(path) = user_config_path() {
            if path.exists() {
                match std::fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                        Ok(user) => merge(&mut base, user),
                        Err(e) => {
                            log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                        }
                    },
                    Err(e) => {
                        log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
                    }
                }
            }
        }

        Config::from_file(base)
    }

    /// Embedded defaults overlaid with an explicitly chosen file. Unlike
    /// [`Config::load`], problems with the file are errors.
    pub fn load_from(path: &Path) -> ChordResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ChordError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let user: ConfigFile = toml::from_str(&contents)
            .map_err(|e| ChordError::Config(format!("malformed {}: {}", path.display(), e)))?;
        for (id, names) in &user.tunings {
            parse_open_strings(id, names)?;
        }

        let mut base = embedded();
        merge(&mut base, user);
        Ok(Config::from_file(base))
    }

    pub fn scoring(&self) -> Scoring {
        let fallback = Scoring::default();
        let s = &self.scoring;
        Scoring {
            triad: s.triad.unwrap_or(fallback.triad),
            diminished: s.diminished.unwrap_or(fallback.diminished),
            augmented: s.augmented.unwrap_or(fallback.augmented),
            suspended: s.suspended.unwrap_or(fallback.suspended),
            power: s.power.unwrap_or(fallback.power),
            dyad: s.dyad.unwrap_or(fallback.dyad),
            no_chord: s.no_chord.unwrap_or(fallback.no_chord),
            seventh_bonus: s.seventh_bonus.unwrap_or(fallback.seventh_bonus),
            flat_fifth_penalty: s.flat_fifth_penalty.unwrap_or(fallback.flat_fifth_penalty),
            slash_penalty: s.slash_penalty.unwrap_or(fallback.slash_penalty),
            excluded: s.excluded.unwrap_or(fallback.excluded),
        }
    }

    pub fn cutoffs(&self) -> CutoffStaircase {
        let fallback = CutoffStaircase::default();
        CutoffStaircase {
            steps: self
                .cutoffs
                .steps
                .as_ref()
                .map(|steps| steps.iter().map(|s| (s[0], s[1])).collect())
                .unwrap_or(fallback.steps),
            default: self.cutoffs.default.unwrap_or(fallback.default),
        }
    }

    /// Tuning id used when none is given on the command line.
    pub fn default_tuning(&self) -> &str {
        self.fretboard.tuning.as_deref().unwrap_or("standard")
    }

    /// Transposition offset (clamped to -4..=4).
    pub fn default_offset(&self) -> i8 {
        self.fretboard
            .offset
            .unwrap_or(0)
            .clamp(MIN_OFFSET, MAX_OFFSET)
    }

    /// Custom tunings plus built-ins. Entries that do not parse are skipped.
    pub fn tuning_table(&self) -> TuningTable {
        let mut table = TuningTable::new();
        for (id, names) in &self.tunings {
            match parse_open_strings(id, names) {
                Ok(strings) => table.insert(id, strings),
                Err(e) => log::warn!(target: "config", "skipping tuning '{}': {}", id, e),
            }
        }
        table
    }

    pub fn identifier(&self) -> ChordIdentifier {
        ChordIdentifier::new(self.scoring(), self.cutoffs(), self.tuning_table())
    }

    fn from_file(file: ConfigFile) -> Self {
        Config {
            scoring: file.scoring,
            cutoffs: file.cutoffs,
            fretboard: file.fretboard,
            tunings: file.tunings,
        }
    }
}

fn embedded() -> ConfigFile {
    toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml")
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fretwise").join("config.toml"))
}

fn overlay<T>(base: &mut Option<T>, user: Option<T>) {
    if user.is_some() {
        *base = user;
    }
}

fn merge(base: &mut ConfigFile, user: ConfigFile) {
    let (b, u) = (&mut base.scoring, user.scoring);
    overlay(&mut b.triad, u.triad);
    overlay(&mut b.diminished, u.diminished);
    overlay(&mut b.augmented, u.augmented);
    overlay(&mut b.suspended, u.suspended);
    overlay(&mut b.power, u.power);
    overlay(&mut b.dyad, u.dyad);
    overlay(&mut b.no_chord, u.no_chord);
    overlay(&mut b.seventh_bonus, u.seventh_bonus);
    overlay(&mut b.flat_fifth_penalty, u.flat_fifth_penalty);
    overlay(&mut b.slash_penalty, u.slash_penalty);
    overlay(&mut b.excluded, u.excluded);

    overlay(&mut base.cutoffs.steps, user.cutoffs.steps);
    overlay(&mut base.cutoffs.default, user.cutoffs.default);

    overlay(&mut base.fretboard.tuning, user.fretboard.tuning);
    overlay(&mut base.fretboard.offset, user.fretboard.offset);

    base.tunings.extend(user.tunings);
}
