mod common;

use std::io::Write;

use fretwise_core::{identify_chords_from_frets, parse_frets, ChordError, Config};
use fretwise_types::FretError;

fn frets_in(tuning: &str, frets: &str) -> Vec<String> {
    identify_chords_from_frets(tuning, &parse_frets(frets).unwrap(), 0).unwrap()
}

#[test]
fn open_c_shape() {
    let frets = [None, Some(3), Some(2), Some(0), Some(1), Some(0)];
    let names = identify_chords_from_frets("standard", &frets, 0).unwrap();
    assert_eq!(names[0], "C");
}

#[test]
fn common_open_shapes() {
    assert_eq!(frets_in("standard", "x02210")[0], "Am");
    assert_eq!(frets_in("standard", "320001")[0], "G7");
    assert_eq!(frets_in("standard", "022100")[0], "E");
    assert_eq!(frets_in("standard", "xx0231")[0], "Dm");
}

#[test]
fn capo_offset_transposes() {
    let frets = parse_frets("x32010").unwrap();
    let names = identify_chords_from_frets("standard", &frets, 2).unwrap();
    assert_eq!(names[0], "D");
}

#[test]
fn drop_d_power_chord() {
    assert_eq!(frets_in("drop_d", "000xxx"), vec!["D5"]);
}

#[test]
fn open_g_strummed_open() {
    assert_eq!(frets_in("open_g", "000000"), vec!["G/D"]);
}

#[test]
fn high_frets_with_commas() {
    // A-shape barre at the 12th fret: A major an octave up
    assert_eq!(frets_in("standard", "x,12,14,14,14,12")[0], "A");
}

#[test]
fn all_muted_is_empty() {
    assert!(frets_in("standard", "xxxxxx").is_empty());
}

#[test]
fn unknown_tuning_is_fatal() {
    let frets = parse_frets("x32010").unwrap();
    assert_eq!(
        identify_chords_from_frets("lute", &frets, 0),
        Err(ChordError::UnknownTuning("lute".to_string()))
    );
}

#[test]
fn out_of_range_input_is_fatal() {
    let too_high = [Some(30), None, None, None, None, None];
    assert_eq!(
        identify_chords_from_frets("standard", &too_high, 0),
        Err(ChordError::Fret(FretError::FretOutOfRange(30)))
    );

    let frets = parse_frets("x32010").unwrap();
    assert_eq!(
        identify_chords_from_frets("standard", &frets, 7),
        Err(ChordError::Fret(FretError::OffsetOutOfRange(7)))
    );
}

#[test]
fn configured_tuning_and_weights() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[tunings]\nopen_e = [\"E2\", \"B2\", \"E3\", \"G#3\", \"B3\", \"E4\"]\n\n[scoring]\nslash_penalty = 0.0"
    )
    .unwrap();

    let config = Config::load_from(file.path()).unwrap();
    let id = config.identifier();

    let frets = parse_frets("000000").unwrap();
    assert_eq!(id.from_frets("open_e", &frets, 0).unwrap()[0], "E");

    // with no slash penalty the inversion ties with root position
    let scored = id
        .scored_from_notes(&common::inputs(&["E2", "C3", "G3"]), None)
        .unwrap();
    assert_eq!(scored[0].name, "C/E");
    assert_eq!(scored[0].probability, 4.0);
}
