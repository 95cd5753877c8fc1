//! # Error Types
//!
//! This module defines the error type shared by the whole chord engine.
//!
//! ## Error Types
//! - `Parse` - A chord name that does not match the root/quality grammar
//! - `InvalidPitchClass` / `InvalidIndex` - Range guards for raw numbers
//! - `InvalidPreference` - A sharp/flat choice that names neither
//! - `EmptyProgression` - A key mapping requested for no chords
//! - `UnknownProgression` / `Catalog` - Catalog lookup and load failures
//!
//! ## Usage
//! ```rust
//! use chordbook::{parse_chord, ChordError};
//!
//! match parse_chord("Hm7") {
//!     Ok(chord) => println!("root {}", chord.root),
//!     Err(ChordError::Parse { name, position, message }) => {
//!         eprintln!("'{}' at {}: {}", name, position, message);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChordError {
    /// The chord name does not match a recognized root followed by
    /// recognized quality tokens.
    ///
    /// `position` is the character offset where parsing stopped.
    ///
    /// # Example
    /// ```
    /// # use chordbook::ChordError;
    /// let err = ChordError::Parse {
    ///     name: "Cxyz".to_string(),
    ///     position: 1,
    ///     message: "Unknown chord quality 'xyz'".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Cannot parse chord 'Cxyz' at position 1: Unknown chord quality 'xyz'"
    /// );
    /// ```
    #[error("Cannot parse chord '{name}' at position {position}: {message}")]
    Parse {
        name: String,
        position: usize,
        message: String,
    },

    /// A raw pitch class outside 0..=11.
    #[error("Invalid pitch class {0}: must be in 0..=11")]
    InvalidPitchClass(u8),

    /// A key index outside the keyboard mapping.
    #[error("Invalid key index {index}: keyboard has {len} keys")]
    InvalidIndex { index: usize, len: usize },

    /// A keyboard mapping was requested for an empty chord list.
    #[error("Cannot map an empty chord progression to keys")]
    EmptyProgression,

    /// No chord set with this number exists in the catalog.
    #[error("Unknown progression number {0}")]
    UnknownProgression(u32),

    /// A preference string that is neither `sharp`/`flat` nor a key name.
    #[error("Unknown enharmonic preference '{0}'")]
    InvalidPreference(String),

    /// The catalog data is malformed or contains invalid chord names.
    #[error("Invalid catalog: {0}")]
    Catalog(String),
}

impl ChordError {
    pub(crate) fn parse(name: &str, position: usize, message: impl Into<String>) -> Self {
        ChordError::Parse {
            name: name.to_string(),
            position,
            message: message.into(),
        }
    }
}
