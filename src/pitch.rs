//! Pitch classes, note spellings and enharmonic preference.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ChordError;

/// Number of pitch classes in an octave.
pub const SEMITONES: u8 = 12;

/// One of the 12 pitch classes, 0 = C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Build a pitch class from a raw value, rejecting anything >= 12.
    pub fn new(value: u8) -> Result<Self, ChordError> {
        if value < SEMITONES {
            Ok(PitchClass(value))
        } else {
            Err(ChordError::InvalidPitchClass(value))
        }
    }

    /// Reduce any semitone count into 0..=11. Negative counts wrap upward.
    pub fn from_semitones(semitones: i32) -> Self {
        PitchClass(semitones.rem_euclid(SEMITONES as i32) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Move by `semitones`, wrapping around the octave.
    pub fn transpose(self, semitones: i32) -> Self {
        Self::from_semitones(self.0 as i32 + semitones)
    }

    /// Upward distance from `self` to `other`, in 0..=11.
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.0 as i32 - self.0 as i32).rem_euclid(SEMITONES as i32) as u8
    }

    /// Spell this pitch class as a note name.
    pub fn spell(self, preference: EnharmonicPreference) -> &'static str {
        let flat = preference == EnharmonicPreference::Flat;
        // 0=C, 1=C#/Db, 2=D, 3=D#/Eb, 4=E, 5=F, 6=F#/Gb, 7=G, 8=G#/Ab, 9=A, 10=A#/Bb, 11=B
        match self.0 {
            0 => "C",
            1 => if flat { "Db" } else { "C#" },
            2 => "D",
            3 => if flat { "Eb" } else { "D#" },
            4 => "E",
            5 => "F",
            6 => if flat { "Gb" } else { "F#" },
            7 => "G",
            8 => if flat { "Ab" } else { "G#" },
            9 => "A",
            10 => if flat { "Bb" } else { "A#" },
            _ => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Note letters A through G
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteName {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            _ => None,
        }
    }

    /// Semitone offset of the natural note from C
    fn semitone(self) -> i32 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Accidental::Sharp),
            'b' => Some(Accidental::Flat),
            _ => None,
        }
    }

    fn offset(self) -> i32 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }
}

/// Pitch class of a spelled note. `E#`, `Cb` and friends fold onto their
/// enharmonic equivalents.
pub fn note_to_pitch_class(name: NoteName, accidental: Accidental) -> PitchClass {
    PitchClass::from_semitones(name.semitone() + accidental.offset())
}

/// Read a note name (letter plus optional `#`/`b`) from the start of `s`.
///
/// Returns the pitch class and the number of bytes consumed.
pub fn parse_note_prefix(s: &str) -> Option<(PitchClass, usize)> {
    let mut chars = s.chars();
    let name = NoteName::from_char(chars.next()?)?;
    match chars.next().and_then(Accidental::from_char) {
        Some(accidental) => Some((note_to_pitch_class(name, accidental), 2)),
        None => Some((note_to_pitch_class(name, Accidental::Natural), 1)),
    }
}

/// Which spelling to use for pitch classes that have both a sharp and a
/// flat name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnharmonicPreference {
    #[default]
    Sharp,
    Flat,
}

impl EnharmonicPreference {
    /// Preference implied by a key name such as "C#", "Bb", "F" or "Dm".
    ///
    /// A spelled accidental decides directly. Natural keys follow the
    /// circle of fifths: the key (or, for minor keys, its relative major)
    /// spells with flats when it sits on the flat side (F, Bb, Eb, Ab).
    pub fn for_key(key: &str) -> Option<Self> {
        let key = key.trim();
        let (pitch, consumed) = parse_note_prefix(key)?;
        let minor = match &key[consumed..] {
            "" => false,
            "m" => true,
            _ => return None,
        };
        let spelled = &key[..consumed];
        if spelled.ends_with('#') {
            return Some(EnharmonicPreference::Sharp);
        }
        if spelled.ends_with('b') {
            return Some(EnharmonicPreference::Flat);
        }
        let major = if minor { pitch.transpose(3) } else { pitch };
        if FLAT_SIDE_MAJORS.contains(&major.value()) {
            Some(EnharmonicPreference::Flat)
        } else {
            Some(EnharmonicPreference::Sharp)
        }
    }
}

/// Pitch classes of F, Bb, Eb and Ab major.
const FLAT_SIDE_MAJORS: [u8; 4] = [3, 5, 8, 10];

impl FromStr for EnharmonicPreference {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "#" => return Ok(EnharmonicPreference::Sharp),
            "b" => return Ok(EnharmonicPreference::Flat),
            word => match word.to_lowercase().as_str() {
                "sharp" | "sharps" => return Ok(EnharmonicPreference::Sharp),
                "flat" | "flats" => return Ok(EnharmonicPreference::Flat),
                _ => {}
            },
        }
        Self::for_key(s).ok_or_else(|| ChordError::InvalidPreference(s.to_string()))
    }
}
