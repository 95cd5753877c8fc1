pub mod api;
pub mod catalog;
pub mod chord;
pub mod error;
pub mod keyboard;
pub mod pitch;
pub mod progression;
pub mod quality;

pub use api::*;
pub use catalog::Catalog;
pub use chord::Chord;
pub use error::*;
pub use keyboard::{
    build_key_mapping, is_black_position, mini_keyboard_states, ChordKeyboard, KeyState,
    KeyboardKey, KeyboardMapping, BLACK_KEY_POSITIONS, KEYBOARD_SIZE,
};
pub use pitch::{EnharmonicPreference, PitchClass};
pub use progression::{
    build_displayed_chords, display_text, displayed_chords, recompute, ChordSet, ProgressionView,
    Recomputed,
};
pub use quality::{Quality, QualityKind};
