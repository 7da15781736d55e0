//! Command-line scanning over `std::env::args`.

use std::path::PathBuf;

/// Flags that consume the following argument.
const VALUE_FLAGS: [&str; 4] = ["--bass", "--tuning", "--offset", "--config"];
const SWITCHES: [&str; 5] = ["--scores", "--json", "--verbose", "-v", "--help"];

pub const USAGE: &str = "\
usage: fretwise notes <NOTE>... [--bass NOTE]
       fretwise frets <FRETS> [--tuning ID] [--offset N]
       fretwise tunings

options:
  --scores       print probabilities next to names
  --json         print JSON instead of plain lines
  --config PATH  read settings from PATH instead of the user config
  -v, --verbose  debug logging on stderr";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Notes { notes: Vec<String>, bass: Option<String> },
    Frets { frets: String, tuning: Option<String>, offset: Option<i8> },
    Tunings,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub command: Command,
    pub scores: bool,
    pub json: bool,
    pub verbose: bool,
    pub config: Option<PathBuf>,
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

/// Arguments that are neither flags nor flag values. `args[0]` is the program.
fn positionals(args: &[String]) -> Result<Vec<&str>, String> {
    let mut out = Vec::new();
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        if VALUE_FLAGS.contains(&arg.as_str()) {
            if rest.next().is_none() {
                return Err(format!("{} needs a value", arg));
            }
        } else if SWITCHES.contains(&arg.as_str()) {
            continue;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{}'", arg));
        } else {
            out.push(arg.as_str());
        }
    }
    Ok(out)
}

pub fn parse(args: &[String]) -> Result<Invocation, String> {
    let positional = positionals(args)?;
    let help = args.iter().any(|a| a == "--help");

    let command = match positional.split_first() {
        _ if help => Command::Help,
        None => Command::Help,
        Some((&"notes", notes)) => {
            if notes.is_empty() {
                return Err("notes: expected at least one note".to_string());
            }
            Command::Notes {
                notes: notes.iter().map(|n| n.to_string()).collect(),
                bass: flag_value(args, "--bass").map(str::to_string),
            }
        }
        Some((&"frets", frets)) => {
            if frets.is_empty() {
                return Err("frets: expected a fretting such as x32010".to_string());
            }
            let offset = flag_value(args, "--offset")
                .map(|s| s.parse::<i8>().map_err(|_| format!("invalid offset '{}'", s)))
                .transpose()?;
            Command::Frets {
                // "x 3 2 0 1 0" is accepted as well as "x32010"
                frets: frets.join(","),
                tuning: flag_value(args, "--tuning").map(str::to_string),
                offset,
            }
        }
        Some((&"tunings", _)) => Command::Tunings,
        Some((other, _)) => return Err(format!("unknown command '{}'", other)),
    };

    Ok(Invocation {
        command,
        scores: args.iter().any(|a| a == "--scores"),
        json: args.iter().any(|a| a == "--json"),
        verbose: args.iter().any(|a| a == "--verbose" || a == "-v"),
        config: flag_value(args, "--config").map(PathBuf::from),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(line: &str) -> Vec<String> {
        std::iter::once("fretwise")
            .chain(line.split_whitespace())
            .map(String::from)
            .collect()
    }

    #[test]
    fn notes_with_bass() {
        let inv = parse(&argv("notes C3 E3 G3 --bass G2 --scores")).unwrap();
        assert_eq!(
            inv.command,
            Command::Notes {
                notes: vec!["C3".into(), "E3".into(), "G3".into()],
                bass: Some("G2".into()),
            }
        );
        assert!(inv.scores);
        assert!(!inv.json);
    }

    #[test]
    fn negative_offset_is_a_value_not_a_flag() {
        let inv = parse(&argv("frets x32010 --offset -2 --tuning drop_d")).unwrap();
        assert_eq!(
            inv.command,
            Command::Frets {
                frets: "x32010".into(),
                tuning: Some("drop_d".into()),
                offset: Some(-2),
            }
        );
    }

    #[test]
    fn split_frets_are_joined() {
        let inv = parse(&argv("frets x 3 2 0 1 0")).unwrap();
        match inv.command {
            Command::Frets { frets, .. } => assert_eq!(frets, "x,3,2,0,1,0"),
            other => panic!("Expected Frets, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_anywhere() {
        let inv = parse(&argv("-v --json tunings --config /tmp/f.toml")).unwrap();
        assert_eq!(inv.command, Command::Tunings);
        assert!(inv.verbose);
        assert!(inv.json);
        assert_eq!(inv.config, Some(PathBuf::from("/tmp/f.toml")));
    }

    #[test]
    fn bad_input_is_reported() {
        assert!(parse(&argv("strum C3")).is_err());
        assert!(parse(&argv("notes")).is_err());
        assert!(parse(&argv("notes C3 --bass")).is_err());
        assert!(parse(&argv("frets x32010 --offset up")).is_err());
        assert!(parse(&argv("notes C3 --loud")).is_err());
    }

    #[test]
    fn no_command_is_help() {
        assert_eq!(parse(&argv("")).unwrap().command, Command::Help);
        assert_eq!(parse(&argv("notes C3 --help")).unwrap().command, Command::Help);
    }
}
