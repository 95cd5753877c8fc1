//! Chord qualities and their interval patterns.
//!
//! A chord is one base shape (major, minor, seventh, ...), followed by zero
//! or more additions (`add9`, ...) and an optional slash bass.
//!
//! # Intervals
//! - minor 3rd = +3, major 3rd = +4, perfect 5th = +7, minor 7th = +10, major 7th = +11
//! - 9th = +14, 11th = +17, 13th = +21 (reduced mod 12 when sounding)

use crate::pitch::PitchClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Major,
    Minor,
    Diminished,
    Augmented,
    SuspendedSecond,
    SuspendedFourth,
    Power,
    Sixth,
    MinorSixth,
    SixNine,
    DominantSeventh,
    MajorSeventh,
    MinorSeventh,
    MinorMajorSeventh,
    HalfDiminished,
    DiminishedSeventh,
    AugmentedSeventh,
    SeventhFlatFive,
    SeventhSuspendedFourth,
    DominantNinth,
    MajorNinth,
    MinorNinth,
    NinthSuspendedFourth,
    DominantEleventh,
    MinorEleventh,
    DominantThirteenth,
    MajorThirteenth,
    MinorThirteenth,
    AddNine,
    AddEleven,
    AddThirteen,
    FlatNinth,
    SharpNinth,
    SharpEleventh,
    FlatThirteenth,
    /// Slash bass, stored as the interval above the chord root (0..=11).
    Bass(u8),
}

/// Where a quality may appear in a chord name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityKind {
    /// Exactly one per chord, first.
    Base,
    /// Any number, after the base shape.
    Addition,
    /// At most one, last.
    Bass,
}

/// Tokens accepted after the root, canonical symbols and aliases alike.
/// Canonical symbols are the ones returned by [`Quality::symbol`].
const VOCABULARY: &[(&str, Quality)] = &[
    // Major triads
    ("maj", Quality::Major),
    ("major", Quality::Major),
    ("M", Quality::Major),
    // Minor triads
    ("m", Quality::Minor),
    ("min", Quality::Minor),
    ("minor", Quality::Minor),
    ("-", Quality::Minor),
    // Diminished / augmented
    ("dim", Quality::Diminished),
    ("°", Quality::Diminished),
    ("o", Quality::Diminished),
    ("aug", Quality::Augmented),
    ("+", Quality::Augmented),
    // Sus chords
    ("sus2", Quality::SuspendedSecond),
    ("sus4", Quality::SuspendedFourth),
    ("sus", Quality::SuspendedFourth),
    ("5", Quality::Power),
    // Sixths
    ("6", Quality::Sixth),
    ("m6", Quality::MinorSixth),
    ("min6", Quality::MinorSixth),
    ("-6", Quality::MinorSixth),
    ("69", Quality::SixNine),
    ("6/9", Quality::SixNine),
    // Sevenths
    ("7", Quality::DominantSeventh),
    ("dom7", Quality::DominantSeventh),
    ("maj7", Quality::MajorSeventh),
    ("Maj7", Quality::MajorSeventh),
    ("M7", Quality::MajorSeventh),
    ("ma7", Quality::MajorSeventh),
    ("Δ", Quality::MajorSeventh),
    ("Δ7", Quality::MajorSeventh),
    ("m7", Quality::MinorSeventh),
    ("min7", Quality::MinorSeventh),
    ("-7", Quality::MinorSeventh),
    ("mM7", Quality::MinorMajorSeventh),
    ("mMaj7", Quality::MinorMajorSeventh),
    ("mmaj7", Quality::MinorMajorSeventh),
    ("minmaj7", Quality::MinorMajorSeventh),
    ("m7b5", Quality::HalfDiminished),
    ("m7-5", Quality::HalfDiminished),
    ("min7b5", Quality::HalfDiminished),
    ("ø", Quality::HalfDiminished),
    ("ø7", Quality::HalfDiminished),
    ("dim7", Quality::DiminishedSeventh),
    ("°7", Quality::DiminishedSeventh),
    ("o7", Quality::DiminishedSeventh),
    ("7#5", Quality::AugmentedSeventh),
    ("aug7", Quality::AugmentedSeventh),
    ("+7", Quality::AugmentedSeventh),
    ("7b5", Quality::SeventhFlatFive),
    ("7sus4", Quality::SeventhSuspendedFourth),
    ("7sus", Quality::SeventhSuspendedFourth),
    // Extended chords
    ("9", Quality::DominantNinth),
    ("maj9", Quality::MajorNinth),
    ("Maj9", Quality::MajorNinth),
    ("M9", Quality::MajorNinth),
    ("m9", Quality::MinorNinth),
    ("min9", Quality::MinorNinth),
    ("-9", Quality::MinorNinth),
    ("9sus4", Quality::NinthSuspendedFourth),
    ("9sus", Quality::NinthSuspendedFourth),
    ("11", Quality::DominantEleventh),
    ("m11", Quality::MinorEleventh),
    ("min11", Quality::MinorEleventh),
    ("13", Quality::DominantThirteenth),
    ("maj13", Quality::MajorThirteenth),
    ("M13", Quality::MajorThirteenth),
    ("m13", Quality::MinorThirteenth),
    ("min13", Quality::MinorThirteenth),
    // Additions
    ("add9", Quality::AddNine),
    ("add2", Quality::AddNine),
    ("add11", Quality::AddEleven),
    ("add4", Quality::AddEleven),
    ("add13", Quality::AddThirteen),
    // Alterations; `add` forms are written when nothing precedes them
    ("b9", Quality::FlatNinth),
    ("addb9", Quality::FlatNinth),
    ("#9", Quality::SharpNinth),
    ("add#9", Quality::SharpNinth),
    ("#11", Quality::SharpEleventh),
    ("add#11", Quality::SharpEleventh),
    ("b13", Quality::FlatThirteenth),
    ("addb13", Quality::FlatThirteenth),
];

impl Quality {
    pub fn kind(&self) -> QualityKind {
        match self {
            Quality::AddNine
            | Quality::AddEleven
            | Quality::AddThirteen
            | Quality::FlatNinth
            | Quality::SharpNinth
            | Quality::SharpEleventh
            | Quality::FlatThirteenth => QualityKind::Addition,
            Quality::Bass(_) => QualityKind::Bass,
            _ => QualityKind::Base,
        }
    }

    /// Canonical symbol written after the root when rendering a name.
    ///
    /// The slash bass renders as `/` followed by the spelled bass note, so
    /// only the separator is returned here.
    pub fn symbol(&self) -> &'static str {
        match self {
            Quality::Major => "",
            Quality::Minor => "m",
            Quality::Diminished => "dim",
            Quality::Augmented => "aug",
            Quality::SuspendedSecond => "sus2",
            Quality::SuspendedFourth => "sus4",
            Quality::Power => "5",
            Quality::Sixth => "6",
            Quality::MinorSixth => "m6",
            Quality::SixNine => "69",
            Quality::DominantSeventh => "7",
            Quality::MajorSeventh => "maj7",
            Quality::MinorSeventh => "m7",
            Quality::MinorMajorSeventh => "mM7",
            Quality::HalfDiminished => "m7b5",
            Quality::DiminishedSeventh => "dim7",
            Quality::AugmentedSeventh => "7#5",
            Quality::SeventhFlatFive => "7b5",
            Quality::SeventhSuspendedFourth => "7sus4",
            Quality::DominantNinth => "9",
            Quality::MajorNinth => "maj9",
            Quality::MinorNinth => "m9",
            Quality::NinthSuspendedFourth => "9sus4",
            Quality::DominantEleventh => "11",
            Quality::MinorEleventh => "m11",
            Quality::DominantThirteenth => "13",
            Quality::MajorThirteenth => "maj13",
            Quality::MinorThirteenth => "m13",
            Quality::AddNine => "add9",
            Quality::AddEleven => "add11",
            Quality::AddThirteen => "add13",
            Quality::FlatNinth => "b9",
            Quality::SharpNinth => "#9",
            Quality::SharpEleventh => "#11",
            Quality::FlatThirteenth => "b13",
            Quality::Bass(_) => "/",
        }
    }

    /// Semitone offsets from the root, in chord-tone order.
    pub fn intervals(&self) -> &[u8] {
        match self {
            Quality::Major => &[0, 4, 7],
            Quality::Minor => &[0, 3, 7],
            Quality::Diminished => &[0, 3, 6],
            Quality::Augmented => &[0, 4, 8],
            Quality::SuspendedSecond => &[0, 2, 7],
            Quality::SuspendedFourth => &[0, 5, 7],
            Quality::Power => &[0, 7],
            Quality::Sixth => &[0, 4, 7, 9],
            Quality::MinorSixth => &[0, 3, 7, 9],
            Quality::SixNine => &[0, 4, 7, 9, 14],
            Quality::DominantSeventh => &[0, 4, 7, 10],
            Quality::MajorSeventh => &[0, 4, 7, 11],
            Quality::MinorSeventh => &[0, 3, 7, 10],
            Quality::MinorMajorSeventh => &[0, 3, 7, 11],
            Quality::HalfDiminished => &[0, 3, 6, 10],
            Quality::DiminishedSeventh => &[0, 3, 6, 9],
            Quality::AugmentedSeventh => &[0, 4, 8, 10],
            Quality::SeventhFlatFive => &[0, 4, 6, 10],
            Quality::SeventhSuspendedFourth => &[0, 5, 7, 10],
            Quality::DominantNinth => &[0, 4, 7, 10, 14],
            Quality::MajorNinth => &[0, 4, 7, 11, 14],
            Quality::MinorNinth => &[0, 3, 7, 10, 14],
            Quality::NinthSuspendedFourth => &[0, 5, 7, 10, 14],
            Quality::DominantEleventh => &[0, 4, 7, 10, 14, 17],
            Quality::MinorEleventh => &[0, 3, 7, 10, 14, 17],
            Quality::DominantThirteenth => &[0, 4, 7, 10, 14, 21],
            Quality::MajorThirteenth => &[0, 4, 7, 11, 14, 21],
            Quality::MinorThirteenth => &[0, 3, 7, 10, 14, 21],
            Quality::AddNine => &[14],
            Quality::AddEleven => &[17],
            Quality::AddThirteen => &[21],
            Quality::FlatNinth => &[13],
            Quality::SharpNinth => &[15],
            Quality::SharpEleventh => &[18],
            Quality::FlatThirteenth => &[20],
            Quality::Bass(interval) => std::slice::from_ref(interval),
        }
    }

    /// Pitch classes this quality contributes above `root`.
    pub fn components(&self, root: PitchClass) -> Vec<PitchClass> {
        self.intervals()
            .iter()
            .map(|&offset| root.transpose(offset as i32))
            .collect()
    }

    /// Longest vocabulary token at the start of `s`.
    ///
    /// Returns the quality and the number of bytes the token occupies.
    pub(crate) fn match_token(s: &str) -> Option<(Quality, usize)> {
        VOCABULARY
            .iter()
            .filter(|(token, _)| s.starts_with(token))
            .max_by_key(|(token, _)| token.len())
            .map(|(token, quality)| (*quality, token.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pcs(values: &[u8]) -> Vec<PitchClass> {
        values.iter().map(|&v| PitchClass::new(v).unwrap()).collect()
    }

    #[test]
    fn test_major_triad_components() {
        let d = PitchClass::new(2).unwrap();
        assert_eq!(Quality::Major.components(d), pcs(&[2, 6, 9]));
    }

    #[test]
    fn test_components_wrap_into_octave() {
        let b = PitchClass::new(11).unwrap();
        // B7: B D# F# A
        assert_eq!(Quality::DominantSeventh.components(b), pcs(&[11, 3, 6, 9]));
        // Cadd9 contributes D
        assert_eq!(Quality::AddNine.components(PitchClass::C), pcs(&[2]));
        for quality in [Quality::MinorThirteenth, Quality::SixNine, Quality::Bass(11)] {
            for root in 0..12 {
                let root = PitchClass::new(root).unwrap();
                assert!(quality.components(root).iter().all(|pc| pc.value() < 12));
            }
        }
    }

    #[test]
    fn test_longest_token_wins() {
        assert_eq!(Quality::match_token("maj7"), Some((Quality::MajorSeventh, 4)));
        assert_eq!(Quality::match_token("m7b5"), Some((Quality::HalfDiminished, 4)));
        assert_eq!(Quality::match_token("m7"), Some((Quality::MinorSeventh, 2)));
        assert_eq!(Quality::match_token("madd9"), Some((Quality::Minor, 1)));
        assert_eq!(Quality::match_token("°7"), Some((Quality::DiminishedSeventh, "°7".len())));
        assert_eq!(Quality::match_token("xyz"), None);
    }

    #[test]
    fn test_canonical_symbols_match_themselves() {
        for (_, quality) in VOCABULARY {
            let symbol = quality.symbol();
            if symbol.is_empty() {
                continue;
            }
            assert_eq!(
                Quality::match_token(symbol),
                Some((*quality, symbol.len())),
                "symbol {:?} does not round-trip",
                symbol
            );
        }
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Quality::Minor.kind(), QualityKind::Base);
        assert_eq!(Quality::AddEleven.kind(), QualityKind::Addition);
        assert_eq!(Quality::Bass(4).kind(), QualityKind::Bass);
    }
}
