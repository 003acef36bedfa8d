//! Error types for tonal algebra and chord operations

use thiserror::Error;

/// Error types for tonal algebra and chord operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HarmalysisError {
    #[error("note letter '{letter}' is not supported")]
    UnsupportedNoteLetter { letter: char },

    #[error("alteration '{alteration}' is not supported")]
    UnsupportedAlteration { alteration: String },

    #[error("scale '{scale}' is not supported")]
    UnsupportedScale { scale: String },

    #[error("triad quality '{quality}' is not supported")]
    UnsupportedTriadQuality { quality: String },

    #[error("inversion '{inversion}' is not supported")]
    UnsupportedInversion { inversion: String },

    #[error("interval quality '{quality}' is not supported over a diatonic {diatonic_interval}")]
    UnsupportedIntervalQuality {
        quality: String,
        diatonic_interval: u8,
    },

    #[error("diatonic class {class} is out of bounds")]
    DiatonicClassOutOfBounds { class: u8 },

    #[error("chromatic class {class} is out of bounds")]
    ChromaticClassOutOfBounds { class: u8 },

    #[error("chromatic class {chromatic_class} is unreachable from diatonic class {diatonic_class}")]
    UnreachableSpelling {
        diatonic_class: u8,
        chromatic_class: u8,
    },

    #[error("scale degree {degree} is out of range; must be within 1 and 7")]
    ScaleDegreeOutOfRange { degree: u8 },

    #[error("interval position {position} is out of bounds; must be within 2 and 15")]
    IntervalIndexOutOfBounds { position: u8 },

    #[error("parse error at position {position}: {message}")]
    ParseError { message: String, position: usize },
}

/// Result type for tonal algebra and chord operations
pub type HarmalysisResult<T> = Result<T, HarmalysisError>;
