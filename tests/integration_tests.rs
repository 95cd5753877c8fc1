//! Integration tests for the chord engine
//!
//! Exercises the public API from chord names through to keyboard data.

use chordbook::{
    build_displayed_chords, build_keyboard_mapping, note_indices, note_indices_or_empty,
    parse_chord, recompute, transpose_chord_name, Catalog, ChordError, EnharmonicPreference,
    ProgressionView, BLACK_KEY_POSITIONS,
};

const NAMES: &[&str] = &[
    "C", "C#", "Db", "Dm", "D#m7", "Ebmaj7", "E7", "Fm6", "F#dim", "Gbaug", "G7sus4", "Ab9",
    "Am7b5", "Bbm9", "B13", "Cadd9", "Dsus2", "E5", "F69", "G/B", "Am/G", "Bdim7", "CmM7",
];

fn strings(chords: &[&str]) -> Vec<String> {
    chords.iter().map(|c| c.to_string()).collect()
}

#[test]
fn test_cmaj7_scenario() {
    let chord = parse_chord("Cmaj7").unwrap();
    assert_eq!(chord.root.value(), 0);
    assert_eq!(note_indices(&chord), vec![0, 4, 7, 11]);

    let moved = chord.transpose(2, EnharmonicPreference::Sharp);
    assert_eq!(moved.root.value(), 2);
    assert_eq!(note_indices(&moved), vec![1, 2, 6, 9]);
}

#[test]
fn test_note_indices_sorted_unique_in_range() {
    for name in NAMES {
        let notes = note_indices(&parse_chord(name).unwrap());
        assert!(!notes.is_empty(), "{}", name);
        assert!(notes.windows(2).all(|w| w[0] < w[1]), "{}: {:?}", name, notes);
        assert!(notes.iter().all(|&n| n < 12), "{}: {:?}", name, notes);
    }
}

#[test]
fn test_unparseable_names_give_no_notes() {
    for name in ["", "H", "c", "Cxyz", "C/", "Cmm", "7"] {
        assert!(note_indices_or_empty(name).is_empty(), "{:?}", name);
        assert!(parse_chord(name).is_err(), "{:?}", name);
    }
}

#[test]
fn test_inverse_transposition_restores_harmony() {
    for name in NAMES {
        let chord = parse_chord(name).unwrap();
        for p in 0..12 {
            let back = chord
                .transpose(p, EnharmonicPreference::Flat)
                .transpose(-p, EnharmonicPreference::Sharp);
            assert_eq!(back.root, chord.root, "{} by {}", name, p);
            assert_eq!(back.qualities, chord.qualities, "{} by {}", name, p);
        }
    }
}

#[test]
fn test_octave_transposition_is_identity() {
    for name in NAMES {
        let chord = parse_chord(name).unwrap();
        let moved = chord.transpose(12, EnharmonicPreference::Sharp);
        assert!(moved.same_harmony(&chord), "{}", name);
    }
}

#[test]
fn test_transpose_down_from_c_never_goes_negative() {
    let chord = parse_chord("C").unwrap().transpose(-1, EnharmonicPreference::Sharp);
    assert_eq!(chord.root.value(), 11);
    assert_eq!(transpose_chord_name("C", -1).unwrap(), "B");
}

#[test]
fn test_c_major_keyboard_mapping() {
    let chords = strings(&["C", "Dm", "Em", "F", "G", "Am", "Bdim", "C", "Dm", "Em", "F", "G"]);
    let mapping = build_keyboard_mapping(&chords).unwrap();
    assert_eq!(mapping.keys.len(), 13);
    assert_eq!(mapping.keys[0].chord_name, "C");
    assert_eq!(mapping.keys[12].chord_name, "C");
    for key in &mapping.keys {
        let expected = BLACK_KEY_POSITIONS.contains(&(key.key_index % 12));
        assert_eq!(key.is_black_key, expected, "key {}", key.key_index);
    }
}

#[test]
fn test_mapping_always_has_thirteen_keys() {
    for len in 1..=20 {
        let chords: Vec<String> = (0..len)
            .map(|i| if i % 2 == 0 { "C" } else { "Cm" }.to_string())
            .collect();
        let mapping = build_keyboard_mapping(&chords).unwrap();
        assert_eq!(mapping.keys.len(), 13);
        assert_eq!(mapping.keys[12].chord_name, chords[12 % len]);
    }
    assert_eq!(build_keyboard_mapping(&[]), Err(ChordError::EmptyProgression));
}

#[test]
fn test_displayed_chords_for_every_builtin_set() {
    let catalog = Catalog::builtin().unwrap();
    for set in catalog.iter() {
        for t in -11..=11 {
            let shown = build_displayed_chords(&set.chords, t, EnharmonicPreference::Flat).unwrap();
            assert_eq!(shown.len(), set.chords.len());
            let back = build_displayed_chords(&shown, -t, EnharmonicPreference::Flat).unwrap();
            for (original, restored) in set.chords.iter().zip(&back) {
                let a = parse_chord(original).unwrap();
                let b = parse_chord(restored).unwrap();
                assert!(a.same_harmony(&b), "{} vs {}", original, restored);
            }
        }
    }
}

#[test]
fn test_recompute_json_shape() {
    let catalog = Catalog::builtin().unwrap();
    let set = catalog.get(1).unwrap();
    let result = recompute(set, 5, EnharmonicPreference::Flat).unwrap();
    assert_eq!(result.displayed_chords[0], "F");
    assert_eq!(result.displayed_chords[6], "Edim");

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["displayedChords"][3], "Bb");
    assert_eq!(json["keyboardMapping"]["keys"][1]["isBlackKey"], true);
    assert_eq!(json["keyboardMapping"]["keys"][12]["chordName"], "F");
    assert!(json["displayText"].as_str().unwrap().starts_with("1: Major Diatonic +5: F, [Gm]"));
}

#[test]
fn test_progression_view_follows_transposition() {
    let catalog = Catalog::builtin().unwrap();
    let set = catalog.get(2).unwrap().clone();
    let mut view = ProgressionView::new(set, EnharmonicPreference::Sharp).unwrap();
    assert_eq!(view.current().displayed_chords[0], "Cmaj7");

    let shown = view.set_transposition(7).unwrap().displayed_chords.clone();
    assert_eq!(shown[0], "Gmaj7");
    assert_eq!(shown[4], "D7");
    assert_eq!(view.current().keyboard_mapping.keys[12].chord_name, "Gmaj7");
}

#[test]
fn test_unknown_progression() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.get(9999), Err(ChordError::UnknownProgression(9999)));
}
