//! Keys and scale degrees
//!
//! A [`Key`] is a spelled tonic plus a scale family. Its one non-trivial
//! operation, [`Key::degree`], walks the scale from the tonic and respells
//! the result, so scale-degree spelling is driven by the diatonic step and
//! never by chromatic coincidence: degree 7 of Ab major is G, not F##.

use crate::constants::{LOWER_CASE_NUMERALS, ROMAN_DEGREES, UPPER_CASE_NUMERALS};
use crate::error::{HarmalysisError, HarmalysisResult};
use crate::interval::{Interval, IntervalQuality};
use crate::pitch::{Alteration, PitchClass};
use crate::scale::ScaleKind;
use harmalysis_config::MUSICAL;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scale degree, 1 through 7, remembering the case it was written in.
///
/// Case carries no meaning at the key level; the chord layer reads it to
/// pick triad-quality defaults and to reproduce the input on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScaleDegree {
    number: u8,
    lowercase: bool,
}

impl ScaleDegree {
    /// Create a scale degree; the number must be within 1 and 7.
    pub fn new(number: u8, lowercase: bool) -> HarmalysisResult<Self> {
        if number == 0 || number > MUSICAL.scale_degrees {
            return Err(HarmalysisError::ScaleDegreeOutOfRange { degree: number });
        }
        Ok(Self { number, lowercase })
    }

    /// Parse a Roman numeral in either case.
    pub fn from_roman(numeral: &str) -> HarmalysisResult<Self> {
        let number = *ROMAN_DEGREES.get(numeral).ok_or_else(|| {
            HarmalysisError::ScaleDegreeOutOfRange { degree: 0 }
        })?;
        let lowercase = numeral
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase());
        Self::new(number, lowercase)
    }

    /// The degree number, 1 through 7.
    pub fn number(self) -> u8 {
        self.number
    }

    /// Whether the numeral was written in lowercase.
    pub fn is_lowercase(self) -> bool {
        self.lowercase
    }
}

impl fmt::Display for ScaleDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numerals = if self.lowercase {
            &LOWER_CASE_NUMERALS
        } else {
            &UPPER_CASE_NUMERALS
        };
        write!(f, "{}", numerals[(self.number - 1) as usize])
    }
}

/// The unison interval that displaces a scale degree by an alteration.
fn unison_alteration(alteration: Alteration) -> HarmalysisResult<Option<Interval>> {
    let quality = match alteration {
        Alteration::Natural => return Ok(None),
        Alteration::Flat => IntervalQuality::Diminished,
        Alteration::DoubleFlat => IntervalQuality::DoublyDiminished,
        Alteration::Sharp => IntervalQuality::Augmented,
        Alteration::DoubleSharp => IntervalQuality::DoublyAugmented,
    };
    Ok(Some(Interval::new(quality, 1)?))
}

/// A key: a spelled tonic and a scale family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    tonic: PitchClass,
    scale: ScaleKind,
}

impl Key {
    /// Create a key.
    pub fn new(tonic: PitchClass, scale: ScaleKind) -> Self {
        Self { tonic, scale }
    }

    /// The tonic pitch class.
    pub fn tonic(&self) -> PitchClass {
        self.tonic
    }

    /// The scale family.
    pub fn scale(&self) -> ScaleKind {
        self.scale
    }

    /// The absolute pitch class of a scale degree, optionally displaced by
    /// a unison alteration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use harmalysis_core::{Key, NoteLetter, PitchClass, ScaleKind};
    ///
    /// let key = Key::new(PitchClass::natural(NoteLetter::A), ScaleKind::HarmonicMinor);
    /// assert_eq!(key.degree(7, None)?.to_string(), "G#");
    /// # Ok::<(), harmalysis_core::HarmalysisError>(())
    /// ```
    pub fn degree(
        &self,
        degree: u8,
        alteration: Option<Alteration>,
    ) -> HarmalysisResult<PitchClass> {
        if degree == 0 || degree > MUSICAL.scale_degrees {
            return Err(HarmalysisError::ScaleDegreeOutOfRange { degree });
        }
        let interval = self.scale.step_to_interval(degree, 1)?;
        let mut pitch = self.tonic.transpose(&interval)?;
        if let Some(alteration) = alteration {
            if let Some(unison) = unison_alteration(alteration)? {
                pitch = pitch.transpose(&unison)?;
            }
        }
        Ok(pitch)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.scale)
    }
}
