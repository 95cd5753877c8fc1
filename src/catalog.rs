//! # Progression Catalog
//!
//! Chord sets are stored as YAML, either one set per document:
//!
//! ```yaml
//! number: 1
//! name: Pop Basics
//! chords: [C, Dm, Em, F, G, Am, Bdim, C, Dm, Em, F, G]
//! ```
//!
//! or a list of them. Every chord name is parsed at load time so a bad
//! name fails the load instead of a later transposition.
//!
//! The built-in sets come from the `chordbook-progressions` package.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::chord::Chord;
use crate::error::ChordError;
use crate::progression::ChordSet;

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Many(Vec<ChordSet>),
    One(ChordSet),
}

/// Chord sets keyed and ordered by number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    sets: BTreeMap<u32, ChordSet>,
}

impl Catalog {
    /// Parse a YAML catalog document.
    ///
    /// # Errors
    /// Returns [`ChordError::Catalog`] for malformed YAML, duplicate
    /// numbers, empty chord lists or unparseable chord names.
    pub fn from_yaml(text: &str) -> Result<Catalog, ChordError> {
        let document: CatalogDocument =
            serde_yaml::from_str(text).map_err(|e| ChordError::Catalog(e.to_string()))?;
        let sets = match document {
            CatalogDocument::Many(sets) => sets,
            CatalogDocument::One(set) => vec![set],
        };

        let mut catalog = Catalog::default();
        for set in sets {
            validate_set(&set)?;
            if catalog.sets.contains_key(&set.number) {
                return Err(ChordError::Catalog(format!(
                    "Duplicate progression number {}",
                    set.number
                )));
            }
            catalog.sets.insert(set.number, set);
        }
        Ok(catalog)
    }

    /// All chord sets embedded in the binary.
    pub fn builtin() -> Result<Catalog, ChordError> {
        let mut catalog = Catalog::default();
        for source in chordbook_progressions::list_sources() {
            let text = chordbook_progressions::get_source(source)
                .ok_or_else(|| ChordError::Catalog(format!("{}: missing source", source)))?;
            let part = Catalog::from_yaml(text).map_err(|e| match e {
                ChordError::Catalog(message) => {
                    ChordError::Catalog(format!("{}: {}", source, message))
                }
                other => other,
            })?;
            for number in part.sets.keys() {
                if catalog.sets.contains_key(number) {
                    return Err(ChordError::Catalog(format!(
                        "{}: duplicate progression number {}",
                        source, number
                    )));
                }
            }
            catalog.merge(part);
        }
        Ok(catalog)
    }

    /// Add every set of `other`, replacing sets with the same number.
    pub fn merge(&mut self, other: Catalog) {
        self.sets.extend(other.sets);
    }

    pub fn get(&self, number: u32) -> Result<&ChordSet, ChordError> {
        self.sets
            .get(&number)
            .ok_or(ChordError::UnknownProgression(number))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChordSet> {
        self.sets.values()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

fn validate_set(set: &ChordSet) -> Result<(), ChordError> {
    if set.chords.is_empty() {
        return Err(ChordError::Catalog(format!(
            "Progression {} has no chords",
            set.number
        )));
    }
    for name in &set.chords {
        Chord::parse(name)
            .map_err(|e| ChordError::Catalog(format!("Progression {}: {}", set.number, e)))?;
    }
    Ok(())
}
