//! The resolved analysis record

use crate::chord::Chord;
use crate::key::Key;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A fully resolved harmalysis entry.
///
/// `main_key` is the key the entry was read against; `reference_key` is
/// set when the line annotated its key as tentative. When the chord is
/// tonicized, `secondary_key` is the innermost key of the chain, the one
/// the written chord actually lives in, and `tonicized_keys` holds the
/// whole chain in the order it was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Harmalysis {
    /// The key the entry resolves against
    pub main_key: Key,

    /// Tentative key annotation, when the line carried a `?` marker
    pub reference_key: Option<Key>,

    /// Innermost key of the tonicization chain
    pub secondary_key: Option<Key>,

    /// The tonicization chain in written order
    pub tonicized_keys: SmallVec<[Key; 2]>,

    /// The resolved chord
    pub chord: Chord,
}

impl Harmalysis {
    /// Create a resolved record for a chord in a key.
    pub fn new(main_key: Key, chord: Chord) -> Self {
        Self {
            main_key,
            reference_key: None,
            secondary_key: None,
            tonicized_keys: SmallVec::new(),
            chord,
        }
    }

    /// The key the chord is actually read in: the end of the tonicization
    /// chain when present, the main key otherwise.
    pub fn enclosing_key(&self) -> &Key {
        self.secondary_key.as_ref().unwrap_or(&self.main_key)
    }
}
