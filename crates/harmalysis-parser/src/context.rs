//! Analyzer context
//!
//! The established key persists across entries that omit a key prefix and
//! is rebound by the `=>` marker. Library callers thread their own
//! [`AnalysisContext`] through `parse_with_context` to isolate sessions;
//! the convenience `parse` shares one process-wide context behind a
//! read-write lock.

use harmalysis_config::DEFAULTS;
use harmalysis_core::{Key, NoteLetter, PitchClass, ScaleKind};
use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// Mutable analyzer state: the established key.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisContext {
    established_key: Key,
}

impl AnalysisContext {
    /// A fresh context with the default established key (C major).
    pub fn new() -> Self {
        let letter =
            NoteLetter::from_char(DEFAULTS.established_key_letter).unwrap_or(NoteLetter::C);
        let scale = ScaleKind::from_name(DEFAULTS.established_key_scale).unwrap_or(ScaleKind::Major);
        Self {
            established_key: Key::new(PitchClass::natural(letter), scale),
        }
    }

    /// The currently established key.
    pub fn established_key(&self) -> &Key {
        &self.established_key
    }

    /// Rebind the established key.
    pub fn set_established_key(&mut self, key: Key) {
        self.established_key = key;
    }
}

impl Default for AnalysisContext {
    fn default() -> Self {
        Self::new()
    }
}

static SHARED: Lazy<RwLock<AnalysisContext>> = Lazy::new(|| RwLock::new(AnalysisContext::new()));

/// The process-wide context used by the convenience entry points.
pub fn shared_context() -> &'static RwLock<AnalysisContext> {
    &SHARED
}
