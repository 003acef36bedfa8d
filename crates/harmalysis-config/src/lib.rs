//! Configuration constants and analyzer defaults for Harmalysis
//!
//! This crate centralizes the numeric bounds of the tonal system and the
//! defaults used by the analyzer when an input line carries no key prefix.

use serde::{Deserialize, Serialize};

/// Bounds of the tonal system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicalConstants {
    /// Number of diatonic classes (note letters C through B)
    pub diatonic_classes: u8,
    /// Number of chromatic classes (semitones per octave)
    pub chromatic_classes: u8,
    /// Scale degrees per key
    pub scale_degrees: u8,
    /// Lowest diatonic position a chord interval may occupy
    pub min_interval_position: u8,
    /// Highest diatonic position a chord interval may occupy (double octave)
    pub max_interval_position: u8,
    /// Highest inversion index expressible by the letter notation (a..g)
    pub max_inversion: u8,
}

/// Default musical constants
pub const MUSICAL: MusicalConstants = MusicalConstants {
    diatonic_classes: 7,
    chromatic_classes: 12,
    scale_degrees: 7,
    min_interval_position: 2,
    max_interval_position: 15,
    max_inversion: 6,
};

/// Defaults applied by the analyzer when the input leaves them implicit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisDefaults {
    /// Note letter of the initial established key
    pub established_key_letter: char,
    /// Scale name of the initial established key
    pub established_key_scale: &'static str,
    /// Message printed by interactive drivers when a line fails to parse
    pub invalid_entry_message: &'static str,
}

/// Default analysis parameters
pub const DEFAULTS: AnalysisDefaults = AnalysisDefaults {
    established_key_letter: 'C',
    established_key_scale: "major",
    invalid_entry_message: "Invalid entry. Try again.",
};

/// Error type for configuration validation
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value: {field} = {value}")]
    InvalidValue { field: String, value: String },

    #[error("Configuration value out of range: {field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },
}

/// Validation trait for configuration structures
pub trait Validate {
    /// Validate the configuration values
    fn validate(&self) -> Result<(), ConfigError>;
}

impl Validate for MusicalConstants {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.diatonic_classes != 7 {
            return Err(ConfigError::InvalidValue {
                field: "diatonic_classes".to_string(),
                value: self.diatonic_classes.to_string(),
            });
        }

        if self.chromatic_classes != 12 {
            return Err(ConfigError::InvalidValue {
                field: "chromatic_classes".to_string(),
                value: self.chromatic_classes.to_string(),
            });
        }

        if self.scale_degrees != self.diatonic_classes {
            return Err(ConfigError::InvalidValue {
                field: "scale_degrees".to_string(),
                value: self.scale_degrees.to_string(),
            });
        }

        if self.min_interval_position >= self.max_interval_position {
            return Err(ConfigError::OutOfRange {
                field: "interval_position".to_string(),
                min: self.min_interval_position.to_string(),
                max: self.max_interval_position.to_string(),
            });
        }

        // One inversion index per letter of the a..g notation
        if self.max_inversion != self.scale_degrees - 1 {
            return Err(ConfigError::OutOfRange {
                field: "max_inversion".to_string(),
                min: "0".to_string(),
                max: (self.scale_degrees - 1).to_string(),
            });
        }

        Ok(())
    }
}

impl Validate for AnalysisDefaults {
    fn validate(&self) -> Result<(), ConfigError> {
        if !('A'..='G').contains(&self.established_key_letter) {
            return Err(ConfigError::InvalidValue {
                field: "established_key_letter".to_string(),
                value: self.established_key_letter.to_string(),
            });
        }

        Ok(())
    }
}
