//! Scale families
//!
//! Each [`ScaleKind`] carries two literal tables indexed by (rotation,
//! step): the interval quality and the semitone span from the rotation's
//! tonic up to the step. Rotations let a chord whose root sits on degree N
//! of the enclosing key derive its sevenths and ninths from the right
//! segment of the scale; that is how a leading-tone seventh in a minor key
//! comes out diminished without any special casing.

use crate::error::{HarmalysisError, HarmalysisResult};
use crate::interval::{Interval, IntervalQuality};
use harmalysis_config::MUSICAL;
use serde::{Deserialize, Serialize};
use std::fmt;

const P: IntervalQuality = IntervalQuality::Perfect;
const M: IntervalQuality = IntervalQuality::Major;
const N: IntervalQuality = IntervalQuality::Minor;
const A: IntervalQuality = IntervalQuality::Augmented;
const D: IntervalQuality = IntervalQuality::Diminished;

const MAJOR_QUALITIES: [[IntervalQuality; 7]; 7] = [
    // Starting from I
    [P, M, M, P, P, M, M],
    // Starting from II
    [P, M, N, P, P, M, N],
    // Starting from III
    [P, N, N, P, P, N, N],
    // Starting from IV
    [P, M, M, A, P, M, M],
    // Starting from V
    [P, M, M, P, P, M, N],
    // Starting from VI
    [P, M, N, P, P, N, N],
    // Starting from VII
    [P, N, N, P, D, N, N],
];

const MAJOR_SEMITONES: [[u8; 7]; 7] = [
    [0, 2, 4, 5, 7, 9, 11],
    [0, 2, 3, 5, 7, 9, 10],
    [0, 1, 3, 5, 7, 8, 10],
    [0, 2, 4, 6, 7, 9, 11],
    [0, 2, 4, 5, 7, 9, 10],
    [0, 2, 3, 5, 7, 8, 10],
    [0, 1, 3, 5, 6, 8, 10],
];

const NATURAL_MINOR_QUALITIES: [[IntervalQuality; 7]; 7] = [
    [P, M, N, P, P, N, N],
    [P, N, N, P, D, N, N],
    [P, M, M, P, P, M, M],
    [P, M, N, P, P, M, N],
    [P, N, N, P, P, N, N],
    [P, M, M, A, P, M, M],
    [P, M, M, P, P, M, N],
];

const NATURAL_MINOR_SEMITONES: [[u8; 7]; 7] = [
    [0, 2, 3, 5, 7, 8, 10],
    [0, 1, 3, 5, 6, 8, 10],
    [0, 2, 4, 5, 7, 9, 11],
    [0, 2, 3, 5, 7, 9, 10],
    [0, 1, 3, 5, 7, 8, 10],
    [0, 2, 4, 6, 7, 9, 11],
    [0, 2, 4, 5, 7, 9, 10],
];

const HARMONIC_MINOR_QUALITIES: [[IntervalQuality; 7]; 7] = [
    [P, M, N, P, P, N, M],
    [P, N, N, P, D, M, N],
    [P, M, M, P, A, M, M],
    [P, M, N, A, P, M, N],
    [P, N, M, P, P, N, N],
    [P, A, M, A, P, M, M],
    [P, N, N, D, D, N, D],
];

const HARMONIC_MINOR_SEMITONES: [[u8; 7]; 7] = [
    [0, 2, 3, 5, 7, 8, 11],
    [0, 1, 3, 5, 6, 9, 10],
    [0, 2, 4, 5, 8, 9, 11],
    [0, 2, 3, 6, 7, 9, 10],
    [0, 1, 4, 5, 7, 8, 10],
    [0, 3, 4, 6, 7, 9, 11],
    [0, 1, 3, 4, 6, 8, 9],
];

const ASCENDING_MELODIC_MINOR_QUALITIES: [[IntervalQuality; 7]; 7] = [
    [P, M, N, P, P, M, M],
    [P, N, N, P, P, M, N],
    [P, M, M, A, A, M, M],
    [P, M, M, A, P, M, N],
    [P, M, M, P, P, N, N],
    [P, M, N, P, D, N, N],
    [P, N, N, D, D, N, N],
];

const ASCENDING_MELODIC_MINOR_SEMITONES: [[u8; 7]; 7] = [
    [0, 2, 3, 5, 7, 9, 11],
    [0, 1, 3, 5, 7, 9, 10],
    [0, 2, 4, 6, 8, 9, 11],
    [0, 2, 4, 6, 7, 9, 10],
    [0, 2, 4, 5, 7, 8, 10],
    [0, 2, 3, 5, 6, 8, 10],
    [0, 1, 3, 4, 6, 8, 10],
];

/// The scale families of the notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleKind {
    Major,
    NaturalMinor,
    HarmonicMinor,
    AscendingMelodicMinor,
}

impl ScaleKind {
    /// Parse a scale name; `minor` selects the harmonic-minor family, the
    /// default reading of an unqualified minor key.
    pub fn from_name(name: &str) -> HarmalysisResult<Self> {
        match name {
            "major" => Ok(ScaleKind::Major),
            "natural_minor" => Ok(ScaleKind::NaturalMinor),
            "harmonic_minor" | "minor" => Ok(ScaleKind::HarmonicMinor),
            "ascending_melodic_minor" => Ok(ScaleKind::AscendingMelodicMinor),
            _ => Err(HarmalysisError::UnsupportedScale {
                scale: name.to_string(),
            }),
        }
    }

    /// The canonical scale name.
    pub fn name(self) -> &'static str {
        match self {
            ScaleKind::Major => "major",
            ScaleKind::NaturalMinor => "natural_minor",
            ScaleKind::HarmonicMinor => "harmonic_minor",
            ScaleKind::AscendingMelodicMinor => "ascending_melodic_minor",
        }
    }

    /// Whether this is one of the minor families.
    pub fn is_minor(self) -> bool {
        !matches!(self, ScaleKind::Major)
    }

    fn qualities(self) -> &'static [[IntervalQuality; 7]; 7] {
        match self {
            ScaleKind::Major => &MAJOR_QUALITIES,
            ScaleKind::NaturalMinor => &NATURAL_MINOR_QUALITIES,
            ScaleKind::HarmonicMinor => &HARMONIC_MINOR_QUALITIES,
            ScaleKind::AscendingMelodicMinor => &ASCENDING_MELODIC_MINOR_QUALITIES,
        }
    }

    fn semitone_rows(self) -> &'static [[u8; 7]; 7] {
        match self {
            ScaleKind::Major => &MAJOR_SEMITONES,
            ScaleKind::NaturalMinor => &NATURAL_MINOR_SEMITONES,
            ScaleKind::HarmonicMinor => &HARMONIC_MINOR_SEMITONES,
            ScaleKind::AscendingMelodicMinor => &ASCENDING_MELODIC_MINOR_SEMITONES,
        }
    }

    /// The interval from the tonic of `rotation` up to `step` above it.
    ///
    /// `rotation` selects which scale degree is treated as tonic; `step`
    /// may exceed 7 for compound intervals.
    pub fn step_to_interval(self, step: u8, rotation: u8) -> HarmalysisResult<Interval> {
        if rotation == 0 || rotation > MUSICAL.scale_degrees {
            return Err(HarmalysisError::ScaleDegreeOutOfRange { degree: rotation });
        }
        if step == 0 {
            return Err(HarmalysisError::IntervalIndexOutOfBounds { position: step });
        }
        let row = &self.qualities()[(rotation - 1) as usize];
        let quality = row[((step - 1) % 7) as usize];
        Interval::new(quality, step)
    }

    /// The semitone span from the tonic of `rotation` up to `step`,
    /// folding compound steps across octaves.
    pub fn step_to_semitones(self, step: u8, rotation: u8) -> HarmalysisResult<i8> {
        if rotation == 0 || rotation > MUSICAL.scale_degrees {
            return Err(HarmalysisError::ScaleDegreeOutOfRange { degree: rotation });
        }
        if step == 0 || step > MUSICAL.max_interval_position {
            return Err(HarmalysisError::IntervalIndexOutOfBounds { position: step });
        }
        let row = &self.semitone_rows()[(rotation - 1) as usize];
        let octaves = (step - 1) / 7;
        Ok((12 * octaves + row[((step - 1) % 7) as usize]) as i8)
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [ScaleKind; 4] = [
        ScaleKind::Major,
        ScaleKind::NaturalMinor,
        ScaleKind::HarmonicMinor,
        ScaleKind::AscendingMelodicMinor,
    ];

    #[test]
    fn test_from_name() {
        assert_eq!(ScaleKind::from_name("major").unwrap(), ScaleKind::Major);
        assert_eq!(ScaleKind::from_name("minor").unwrap(), ScaleKind::HarmonicMinor);
        assert_eq!(
            ScaleKind::from_name("natural_minor").unwrap(),
            ScaleKind::NaturalMinor
        );
        assert_eq!(
            ScaleKind::from_name("ascending_melodic_minor").unwrap(),
            ScaleKind::AscendingMelodicMinor
        );
        assert!(ScaleKind::from_name("dorian").is_err());
    }

    #[test]
    fn test_major_steps() {
        let major = ScaleKind::Major;
        assert_eq!(major.step_to_interval(3, 1).unwrap().to_string(), "M3");
        assert_eq!(major.step_to_interval(7, 1).unwrap().to_string(), "M7");
        assert_eq!(major.step_to_interval(7, 5).unwrap().to_string(), "m7");
        assert_eq!(major.step_to_interval(5, 7).unwrap().to_string(), "D5");
        assert_eq!(major.step_to_interval(4, 4).unwrap().to_string(), "A4");
    }

    #[test]
    fn test_harmonic_minor_steps() {
        let harmonic = ScaleKind::HarmonicMinor;
        assert_eq!(harmonic.step_to_interval(7, 1).unwrap().to_string(), "M7");
        assert_eq!(harmonic.step_to_interval(3, 1).unwrap().to_string(), "m3");
        // The leading-tone rotation stacks diminished intervals
        assert_eq!(harmonic.step_to_interval(5, 7).unwrap().to_string(), "D5");
        assert_eq!(harmonic.step_to_interval(7, 7).unwrap().to_string(), "D7");
        assert_eq!(harmonic.step_to_interval(2, 6).unwrap().to_string(), "A2");
    }

    #[test]
    fn test_compound_steps() {
        let major = ScaleKind::Major;
        assert_eq!(major.step_to_semitones(8, 1).unwrap(), 12);
        assert_eq!(major.step_to_semitones(9, 1).unwrap(), 14);
        assert_eq!(major.step_to_semitones(15, 1).unwrap(), 24);
        assert_eq!(major.step_to_interval(9, 1).unwrap().semitones(), 14);
        assert_eq!(major.step_to_interval(13, 1).unwrap().semitones(), 21);
    }

    #[test]
    fn test_octave_folding_invariant() {
        for kind in ALL_KINDS {
            for step in 1..=15u8 {
                let folded = kind.step_to_semitones(step, 1).unwrap();
                let base = kind.step_to_semitones(((step - 1) % 7) + 1, 1).unwrap();
                assert_eq!(folded, 12 * i8::try_from((step - 1) / 7).unwrap() + base);
            }
        }
    }

    #[test]
    fn test_quality_and_semitone_tables_agree() {
        for kind in ALL_KINDS {
            for rotation in 1..=7u8 {
                for step in 1..=14u8 {
                    let interval = kind.step_to_interval(step, rotation).unwrap();
                    let semitones = kind.step_to_semitones(step, rotation).unwrap();
                    assert_eq!(
                        interval.semitones(),
                        semitones,
                        "{} rotation {} step {}",
                        kind,
                        rotation,
                        step
                    );
                }
            }
        }
    }

    #[test]
    fn test_bounds() {
        assert!(ScaleKind::Major.step_to_interval(3, 0).is_err());
        assert!(ScaleKind::Major.step_to_interval(3, 8).is_err());
        assert!(ScaleKind::Major.step_to_interval(0, 1).is_err());
        assert!(ScaleKind::Major.step_to_semitones(0, 1).is_err());
    }
}
