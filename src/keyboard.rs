//! Keyboard data for a 13-key chord surface.
//!
//! A 12-chord progression is laid out on 13 keys (C to C), the last key
//! repeating the first chord. Nothing here draws anything: these types are
//! what a front end reads to colour and label its keys.

use serde::Serialize;

use crate::api::note_indices_or_empty;
use crate::error::ChordError;

/// Positions within an octave that sit on black keys (C#, D#, F#, G#, A#).
///
/// Shared by the key mapping, the mini keyboard and the display text.
pub const BLACK_KEY_POSITIONS: [usize; 5] = [1, 3, 6, 8, 10];

/// Number of keys on the chord surface: one octave plus the upper C.
pub const KEYBOARD_SIZE: usize = 13;

/// True when key `index` (counted from C) is a black key.
pub fn is_black_position(index: usize) -> bool {
    BLACK_KEY_POSITIONS.contains(&(index % 12))
}

/// One key of the chord surface and the chord it triggers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardKey {
    pub key_index: usize,
    pub chord_name: String,
    pub is_black_key: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardMapping {
    pub keys: Vec<KeyboardKey>,
}

impl KeyboardMapping {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn key(&self, index: usize) -> Result<&KeyboardKey, ChordError> {
        self.keys.get(index).ok_or(ChordError::InvalidIndex {
            index,
            len: self.keys.len(),
        })
    }

    /// Mini keyboard data for the chord on every key.
    pub fn chord_keyboards(&self) -> Vec<ChordKeyboard> {
        self.keys
            .iter()
            .map(|key| ChordKeyboard::new(&key.chord_name))
            .collect()
    }
}

/// Lay `chords` out on `size` keys, repeating the list as needed.
///
/// # Examples
/// ```
/// use chordbook::build_key_mapping;
///
/// let chords: Vec<String> = ["C", "Dm", "Em"].iter().map(|c| c.to_string()).collect();
/// let mapping = build_key_mapping(&chords, 4).unwrap();
/// assert_eq!(mapping.keys[3].chord_name, "C");
/// assert!(mapping.keys[1].is_black_key);
/// ```
pub fn build_key_mapping(chords: &[String], size: usize) -> Result<KeyboardMapping, ChordError> {
    if chords.is_empty() {
        return Err(ChordError::EmptyProgression);
    }
    let keys = (0..size)
        .map(|i| KeyboardKey {
            key_index: i,
            chord_name: chords[i % chords.len()].clone(),
            is_black_key: is_black_position(i),
        })
        .collect();
    Ok(KeyboardMapping { keys })
}

/// A chord name with the notes its mini keyboard highlights.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordKeyboard {
    pub chord_name: String,
    pub note_indices: Vec<u8>,
}

impl ChordKeyboard {
    /// Unparseable names get an empty note list.
    pub fn new(chord_name: &str) -> Self {
        ChordKeyboard {
            chord_name: chord_name.to_string(),
            note_indices: note_indices_or_empty(chord_name),
        }
    }

    pub fn key_states(&self) -> [KeyState; KEYBOARD_SIZE] {
        mini_keyboard_states(&self.note_indices)
    }
}

/// How one key of a mini keyboard should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyState {
    /// Sounded by the chord
    Active,
    Black,
    White,
}

/// Per-key states of a 13-key mini keyboard for a set of note indices.
///
/// Indices are folded into one octave first, so the top key lights up
/// together with the bottom one.
pub fn mini_keyboard_states(note_indices: &[u8]) -> [KeyState; KEYBOARD_SIZE] {
    let mut active = [false; 12];
    for &index in note_indices {
        active[index as usize % 12] = true;
    }
    std::array::from_fn(|i| {
        if active[i % 12] {
            KeyState::Active
        } else if is_black_position(i) {
            KeyState::Black
        } else {
            KeyState::White
        }
    })
}
