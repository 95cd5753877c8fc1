//! # Public API
//!
//! Entry points a presentation layer calls. Everything is a pure function of
//! its arguments.
//!
//! ## Functions
//! - [`parse_chord()`] - Chord name to [`Chord`]
//! - [`note_indices()`] / [`note_indices_or_empty()`] / [`try_note_indices()`] - Notes to highlight
//! - [`transpose_chord_name()`] / [`transpose_chord_name_with()`] - Transpose one name
//! - [`build_keyboard_mapping()`] - 13-key chord surface
//!
//! ## Typical Usage
//!
//! ```rust
//! use chordbook::{build_keyboard_mapping, transpose_chord_name};
//!
//! let progression: Vec<String> = ["C", "Am", "F", "G"].iter().map(|c| c.to_string()).collect();
//! let moved: Vec<String> = progression
//!     .iter()
//!     .map(|name| transpose_chord_name(name, 2))
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(moved, vec!["D", "Bm", "G", "A"]);
//!
//! let mapping = build_keyboard_mapping(&moved)?;
//! assert_eq!(mapping.keys.len(), 13);
//! # Ok::<(), chordbook::ChordError>(())
//! ```

use crate::chord::Chord;
use crate::error::ChordError;
use crate::keyboard::{build_key_mapping, KeyboardMapping, KEYBOARD_SIZE};
use crate::pitch::EnharmonicPreference;

/// Parse a chord name.
///
/// # Errors
/// Returns [`ChordError::Parse`] when the name is not a root note followed
/// by known quality tokens.
pub fn parse_chord(name: &str) -> Result<Chord, ChordError> {
    Chord::parse(name)
}

/// Sorted, unique note indices (0 = C) sounded by `chord`.
pub fn note_indices(chord: &Chord) -> Vec<u8> {
    chord.note_indices()
}

/// Note indices for a chord name, or an empty list if it does not parse.
///
/// ```
/// use chordbook::note_indices_or_empty;
///
/// assert_eq!(note_indices_or_empty("Cmaj7"), vec![0, 4, 7, 11]);
/// assert!(note_indices_or_empty("???").is_empty());
/// ```
pub fn note_indices_or_empty(name: &str) -> Vec<u8> {
    try_note_indices(name).unwrap_or_default()
}

/// Note indices for a chord name, propagating the parse error.
pub fn try_note_indices(name: &str) -> Result<Vec<u8>, ChordError> {
    Ok(Chord::parse(name)?.note_indices())
}

/// Transpose a chord name, spelling the result with sharps.
pub fn transpose_chord_name(name: &str, semitones: i32) -> Result<String, ChordError> {
    transpose_chord_name_with(name, semitones, EnharmonicPreference::default())
}

/// Transpose a chord name with an explicit enharmonic preference.
///
/// ```
/// use chordbook::{transpose_chord_name_with, EnharmonicPreference};
///
/// let name = transpose_chord_name_with("Am7", 1, EnharmonicPreference::Flat)?;
/// assert_eq!(name, "Bbm7");
/// # Ok::<(), chordbook::ChordError>(())
/// ```
pub fn transpose_chord_name_with(
    name: &str,
    semitones: i32,
    preference: EnharmonicPreference,
) -> Result<String, ChordError> {
    Ok(Chord::parse(name)?.transpose(semitones, preference).name)
}

/// Lay chords out on the 13-key surface.
///
/// # Errors
/// Returns [`ChordError::EmptyProgression`] for an empty list.
pub fn build_keyboard_mapping(chords: &[String]) -> Result<KeyboardMapping, ChordError> {
    build_key_mapping(chords, KEYBOARD_SIZE)
}
