//! Chord name parsing, rendering and transposition.
//!
//! A chord name is a root note followed by quality tokens:
//!
//! ```text
//! F#m7b5/C
//! ^^ ^^^^ ^^
//! |  |    slash bass (optional, last)
//! |  base shape (optional, defaults to major)
//! root: letter A-G plus optional # or b
//! ```
//!
//! Additions such as `add9` may follow the base shape.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ChordError;
use crate::pitch::{parse_note_prefix, EnharmonicPreference, PitchClass};
use crate::quality::{Quality, QualityKind};

/// A parsed chord: a root, its ordered qualities, and the name it displays as.
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    pub root: PitchClass,
    pub qualities: Vec<Quality>,
    pub name: String,
}

impl Chord {
    /// Parse a chord name like `Cmaj7`, `F#m` or `G/B`.
    ///
    /// # Examples
    /// ```
    /// use chordbook::Chord;
    ///
    /// let chord = Chord::parse("Cmaj7").unwrap();
    /// assert_eq!(chord.root.value(), 0);
    /// assert_eq!(chord.note_indices(), vec![0, 4, 7, 11]);
    /// ```
    pub fn parse(name: &str) -> Result<Chord, ChordError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ChordError::parse(name, 0, "Empty chord name"));
        }

        let (root, mut idx) = parse_note_prefix(trimmed).ok_or_else(|| {
            ChordError::parse(trimmed, 0, "Chord must start with a root note A-G")
        })?;

        let mut qualities: Vec<Quality> = Vec::new();
        while idx < trimmed.len() {
            let rest = &trimmed[idx..];
            let position = char_offset(trimmed, idx);

            // A slash that is not part of a token ("6/9") introduces the bass
            if rest.starts_with('/') && Quality::match_token(rest).is_none() {
                let (bass, consumed) = parse_note_prefix(&rest[1..]).ok_or_else(|| {
                    ChordError::parse(trimmed, position + 1, "Expected a bass note after '/'")
                })?;
                if qualities.is_empty() {
                    qualities.push(Quality::Major);
                }
                qualities.push(Quality::Bass(root.interval_to(bass)));
                idx += 1 + consumed;
                if idx < trimmed.len() {
                    return Err(ChordError::parse(
                        trimmed,
                        char_offset(trimmed, idx),
                        "Unexpected text after slash bass",
                    ));
                }
                break;
            }

            let (quality, consumed) = Quality::match_token(rest).ok_or_else(|| {
                ChordError::parse(trimmed, position, format!("Unknown chord quality '{}'", rest))
            })?;

            match quality.kind() {
                QualityKind::Base if !qualities.is_empty() => {
                    return Err(ChordError::parse(
                        trimmed,
                        position,
                        format!(
                            "Chord already has a base quality, found '{}'",
                            &rest[..consumed]
                        ),
                    ));
                }
                QualityKind::Addition if qualities.is_empty() => {
                    qualities.push(Quality::Major);
                }
                _ => {}
            }
            qualities.push(quality);
            idx += consumed;
        }

        if qualities.is_empty() {
            qualities.push(Quality::Major);
        }

        Ok(Chord {
            root,
            qualities,
            name: trimmed.to_string(),
        })
    }

    /// Render the canonical name for `root` and `qualities`.
    ///
    /// The same inputs always produce the same string, and the string
    /// parses back to the same root and qualities.
    pub fn render(
        root: PitchClass,
        qualities: &[Quality],
        preference: EnharmonicPreference,
    ) -> String {
        let root_name = root.spell(preference);
        let mut name = String::from(root_name);
        for quality in qualities {
            let symbol = quality.symbol();
            // `C` + `#11` would read back as root `C#`
            if name.len() == root_name.len() && symbol.starts_with(|c| c == '#' || c == 'b') {
                name.push_str("add");
            }
            name.push_str(symbol);
            if let Quality::Bass(interval) = quality {
                name.push_str(root.transpose(*interval as i32).spell(preference));
            }
        }
        name
    }

    /// Transpose by `semitones`, keeping every quality.
    ///
    /// The new name is re-rendered with `preference`, so a transposition by
    /// zero can still change the spelling (`Bb` becomes `A#` when
    /// preferring sharps).
    pub fn transpose(&self, semitones: i32, preference: EnharmonicPreference) -> Chord {
        let root = self.root.transpose(semitones);
        Chord {
            root,
            name: Chord::render(root, &self.qualities, preference),
            qualities: self.qualities.clone(),
        }
    }

    /// Every pitch class the chord sounds, sorted and de-duplicated.
    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        let notes: BTreeSet<PitchClass> = self
            .qualities
            .iter()
            .flat_map(|quality| quality.components(self.root))
            .collect();
        notes.into_iter().collect()
    }

    /// Note indices (0 = C) for a keyboard display: ascending, unique, 0..=11.
    pub fn note_indices(&self) -> Vec<u8> {
        self.pitch_classes().into_iter().map(PitchClass::value).collect()
    }

    /// Pitch class of the slash bass, or the root when there is none.
    pub fn bass(&self) -> PitchClass {
        self.qualities
            .iter()
            .find_map(|quality| match quality {
                Quality::Bass(interval) => Some(self.root.transpose(*interval as i32)),
                _ => None,
            })
            .unwrap_or(self.root)
    }

    /// True when both chords have the same root and qualities, whatever
    /// their spelling.
    pub fn same_harmony(&self, other: &Chord) -> bool {
        self.root == other.root && self.qualities == other.qualities
    }
}

impl FromStr for Chord {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chord::parse(s)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn char_offset(s: &str, byte_idx: usize) -> usize {
    s[..byte_idx].chars().count()
}
