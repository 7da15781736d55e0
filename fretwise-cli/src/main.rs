mod args;

use std::process::ExitCode;

use fretwise_core::{parse_frets, ChordIdentifier, Config, NoteInput, ScoredChord};
use serde::Serialize;

use args::{Command, Invocation};

fn init_logging(verbose: bool) {
    use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    if let Err(e) = TermLogger::init(
        log_level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("fretwise: logger unavailable: {}", e);
    }

    log::debug!("fretwise starting (log level: {:?})", log_level);
}

#[derive(Serialize)]
struct TuningEntry {
    id: String,
    strings: Vec<String>,
}

fn print_chords(scored: &[ScoredChord], inv: &Invocation) -> Result<(), String> {
    if inv.json {
        let out = if inv.scores {
            serde_json::to_string_pretty(scored)
        } else {
            let names: Vec<&str> = scored.iter().map(|c| c.name.as_str()).collect();
            serde_json::to_string_pretty(&names)
        };
        println!("{}", out.map_err(|e| e.to_string())?);
        return Ok(());
    }

    for chord in scored {
        if inv.scores {
            println!("{}\t{:.2}", chord.name, chord.probability);
        } else {
            println!("{}", chord.name);
        }
    }
    Ok(())
}

fn print_tunings(config: &Config, json: bool) -> Result<(), String> {
    let entries: Vec<TuningEntry> = config
        .tuning_table()
        .entries()
        .into_iter()
        .map(|(id, strings)| TuningEntry {
            id,
            strings: strings.iter().map(|n| n.to_string()).collect(),
        })
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&entries).map_err(|e| e.to_string())?;
        println!("{}", out);
    } else {
        for entry in &entries {
            println!("{}\t{}", entry.id, entry.strings.join(" "));
        }
    }
    Ok(())
}

fn run(inv: &Invocation) -> Result<(), String> {
    let config = match &inv.config {
        Some(path) => Config::load_from(path).map_err(|e| e.to_string())?,
        None => Config::load(),
    };
    let identifier: ChordIdentifier = config.identifier();

    match &inv.command {
        Command::Help => {
            println!("{}", args::USAGE);
            Ok(())
        }
        Command::Tunings => print_tunings(&config, inv.json),
        Command::Notes { notes, bass } => {
            let inputs: Vec<NoteInput> = notes.iter().map(|n| NoteInput::from(n.as_str())).collect();
            let bass = bass.as_deref().map(NoteInput::from);
            let scored = identifier
                .scored_from_notes(&inputs, bass)
                .map_err(|e| e.to_string())?;
            print_chords(&scored, inv)
        }
        Command::Frets { frets, tuning, offset } => {
            let frets = parse_frets(frets).map_err(|e| e.to_string())?;
            let tuning = tuning.as_deref().unwrap_or(config.default_tuning());
            let offset = offset.unwrap_or(config.default_offset());
            let scored = identifier
                .scored_from_frets(tuning, &frets, offset)
                .map_err(|e| e.to_string())?;
            print_chords(&scored, inv)
        }
    }
}

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().collect();
    let inv = match args::parse(&argv) {
        Ok(inv) => inv,
        Err(e) => {
            eprintln!("fretwise: {}\n\n{}", e, args::USAGE);
            return ExitCode::FAILURE;
        }
    };
    init_logging(inv.verbose);

    match run(&inv) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fretwise: {}", e);
            ExitCode::FAILURE
        }
    }
}
