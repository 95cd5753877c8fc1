//! Chord sets and their transposed, keyboard-ready views.
//!
//! Everything a display needs is recomputed in full from
//! `(progression, transposition, preference)` by [`recompute`].
//! [`ProgressionView`] holds the current transposition and calls it
//! whenever the value changes.

use serde::{Deserialize, Serialize};

use crate::chord::Chord;
use crate::error::ChordError;
use crate::keyboard::{build_key_mapping, is_black_position, KeyboardMapping, KEYBOARD_SIZE};
use crate::pitch::EnharmonicPreference;

/// A numbered, named chord progression as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChordSet {
    pub number: u32,
    pub name: String,
    pub chords: Vec<String>,
}

/// Transpose every chord name in `chords` by `semitones`.
pub fn build_displayed_chords(
    chords: &[String],
    semitones: i32,
    preference: EnharmonicPreference,
) -> Result<Vec<String>, ChordError> {
    chords
        .iter()
        .map(|name| Chord::parse(name).map(|chord| chord.transpose(semitones, preference).name))
        .collect()
}

/// The chord names to show for `progression` at `transposition`.
///
/// Every name is parsed and re-rendered, zero included, so the spelling
/// always follows `preference`.
pub fn displayed_chords(
    progression: &ChordSet,
    transposition: i32,
    preference: EnharmonicPreference,
) -> Result<Vec<String>, ChordError> {
    build_displayed_chords(&progression.chords, transposition, preference)
}

/// One-line summary, e.g. `"7: Pop Basics +2: D, [Em], F#m, ..."`.
///
/// Chords on black-key positions are bracketed.
pub fn display_text(progression: &ChordSet, transposition: i32, displayed: &[String]) -> String {
    let chords: Vec<String> = displayed
        .iter()
        .enumerate()
        .map(|(i, chord)| {
            if is_black_position(i) {
                format!("[{}]", chord)
            } else {
                chord.clone()
            }
        })
        .collect();
    format!(
        "{}: {} {:+}: {}",
        progression.number,
        progression.name,
        transposition,
        chords.join(", ")
    )
}

/// Display state derived from a progression and a transposition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recomputed {
    pub displayed_chords: Vec<String>,
    pub keyboard_mapping: KeyboardMapping,
    pub display_text: String,
}

/// Rebuild all display state for `progression` at `transposition`.
pub fn recompute(
    progression: &ChordSet,
    transposition: i32,
    preference: EnharmonicPreference,
) -> Result<Recomputed, ChordError> {
    let displayed = displayed_chords(progression, transposition, preference)?;
    let keyboard_mapping = build_key_mapping(&displayed, KEYBOARD_SIZE)?;
    let display_text = display_text(progression, transposition, &displayed);
    Ok(Recomputed {
        displayed_chords: displayed,
        keyboard_mapping,
        display_text,
    })
}

/// A progression being viewed at some transposition.
#[derive(Debug, Clone)]
pub struct ProgressionView {
    progression: ChordSet,
    preference: EnharmonicPreference,
    transposition: i32,
    current: Recomputed,
}

impl ProgressionView {
    /// Fails when any chord name in `progression` does not parse.
    pub fn new(
        progression: ChordSet,
        preference: EnharmonicPreference,
    ) -> Result<Self, ChordError> {
        let current = recompute(&progression, 0, preference)?;
        Ok(ProgressionView {
            progression,
            preference,
            transposition: 0,
            current,
        })
    }

    pub fn progression(&self) -> &ChordSet {
        &self.progression
    }

    pub fn transposition(&self) -> i32 {
        self.transposition
    }

    pub fn current(&self) -> &Recomputed {
        &self.current
    }

    /// Change the transposition, recomputing before returning.
    ///
    /// Setting the current value again does nothing.
    pub fn set_transposition(
        &mut self,
        transposition: i32,
    ) -> Result<&Recomputed, ChordError> {
        if transposition != self.transposition {
            self.current = recompute(&self.progression, transposition, self.preference)?;
            self.transposition = transposition;
        }
        Ok(&self.current)
    }

    pub fn set_preference(
        &mut self,
        preference: EnharmonicPreference,
    ) -> Result<&Recomputed, ChordError> {
        if preference != self.preference {
            self.current = recompute(&self.progression, self.transposition, preference)?;
            self.preference = preference;
        }
        Ok(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pop() -> ChordSet {
        ChordSet {
            number: 1,
            name: "Pop".to_string(),
            chords: ["C", "Dm", "Em", "F", "G", "Am", "Bdim", "C", "Dm", "Em", "F", "G"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }

    #[test]
    fn test_build_displayed_chords() {
        let chords = vec!["C".to_string(), "Am7".to_string(), "Bb".to_string()];
        let up = build_displayed_chords(&chords, 2, EnharmonicPreference::Sharp).unwrap();
        assert_eq!(up, vec!["D", "Bm7", "C"]);
        let down = build_displayed_chords(&chords, -1, EnharmonicPreference::Flat).unwrap();
        assert_eq!(down, vec!["B", "Abm7", "A"]);
    }

    #[test]
    fn test_build_displayed_chords_propagates_parse_error() {
        let chords = vec!["C".to_string(), "Q".to_string()];
        assert!(matches!(
            build_displayed_chords(&chords, 1, EnharmonicPreference::Sharp),
            Err(ChordError::Parse { .. })
        ));
    }

    #[test]
    fn test_zero_transposition_renders_with_preference() {
        let set = ChordSet {
            number: 2,
            name: "Flats".to_string(),
            chords: vec!["Bb".to_string(), "Ebmaj7".to_string()],
        };
        let shown = displayed_chords(&set, 0, EnharmonicPreference::Sharp).unwrap();
        assert_eq!(shown, vec!["A#", "D#maj7"]);
        let shown = displayed_chords(&set, 0, EnharmonicPreference::Flat).unwrap();
        assert_eq!(shown, vec!["Bb", "Ebmaj7"]);
        let shown = displayed_chords(&set, 12, EnharmonicPreference::Sharp).unwrap();
        assert_eq!(shown, vec!["A#", "D#maj7"]);
    }

    #[test]
    fn test_display_text_brackets_black_positions() {
        let set = pop();
        let text = display_text(&set, 0, &set.chords);
        assert_eq!(
            text,
            "1: Pop +0: C, [Dm], Em, [F], G, Am, [Bdim], C, [Dm], Em, [F], G"
        );
        assert!(display_text(&set, -3, &set.chords).starts_with("1: Pop -3: "));
    }

    #[test]
    fn test_recompute() {
        let result = recompute(&pop(), 2, EnharmonicPreference::Sharp).unwrap();
        assert_eq!(result.displayed_chords[0], "D");
        assert_eq!(result.displayed_chords[6], "C#dim");
        assert_eq!(result.keyboard_mapping.len(), 13);
        assert_eq!(result.keyboard_mapping.keys[12].chord_name, "D");
        assert!(result.display_text.starts_with("1: Pop +2: D, [Em], F#m"));
    }

    #[test]
    fn test_view_recomputes_on_change() {
        let mut view = ProgressionView::new(pop(), EnharmonicPreference::Sharp).unwrap();
        assert_eq!(view.current().displayed_chords[0], "C");

        let updated = view.set_transposition(-1).unwrap();
        assert_eq!(updated.displayed_chords[0], "B");
        assert_eq!(view.transposition(), -1);

        view.set_preference(EnharmonicPreference::Flat).unwrap();
        assert_eq!(view.current().displayed_chords[1], "Dbm");

        let before = view.current().clone();
        view.set_transposition(-1).unwrap();
        assert_eq!(view.current(), &before);
    }

    #[test]
    fn test_zero_transposition_validates_names() {
        let set = ChordSet {
            number: 3,
            name: "Broken".to_string(),
            chords: vec!["C".to_string(), "Zz".to_string()],
        };
        assert!(matches!(
            recompute(&set, 0, EnharmonicPreference::Sharp),
            Err(ChordError::Parse { .. })
        ));
        assert!(ProgressionView::new(set, EnharmonicPreference::Sharp).is_err());
    }

    #[test]
    fn test_view_returning_to_zero_re_renders() {
        let set = ChordSet {
            number: 4,
            name: "Flats".to_string(),
            chords: vec!["Bb".to_string(), "Eb".to_string()],
        };
        let mut view = ProgressionView::new(set, EnharmonicPreference::Sharp).unwrap();
        assert_eq!(view.current().displayed_chords, vec!["A#", "D#"]);
        assert_eq!(view.set_transposition(2).unwrap().displayed_chords, vec!["C", "F"]);
        assert_eq!(view.set_transposition(0).unwrap().displayed_chords, vec!["A#", "D#"]);
    }
}
