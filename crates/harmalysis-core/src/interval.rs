//! Interval spellings
//!
//! An [`Interval`] pairs a quality with a diatonic interval number and
//! carries its semitone span, computed as a deviation from the major-scale
//! reference. Which qualities are legal depends on whether the diatonic
//! interval belongs to the perfect class (unisons, fourths, fifths, and
//! their compounds) or the non-perfect class.

use crate::error::{HarmalysisError, HarmalysisResult};
use crate::pitch::PitchClass;
use harmalysis_config::MUSICAL;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interval qualities, from doubly diminished to doubly augmented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntervalQuality {
    DoublyDiminished,
    Diminished,
    Minor,
    Major,
    Perfect,
    Augmented,
    DoublyAugmented,
}

impl IntervalQuality {
    /// All qualities, in the table order of the alteration maps.
    pub const ALL: [IntervalQuality; 7] = [
        IntervalQuality::DoublyDiminished,
        IntervalQuality::Diminished,
        IntervalQuality::Minor,
        IntervalQuality::Major,
        IntervalQuality::Perfect,
        IntervalQuality::Augmented,
        IntervalQuality::DoublyAugmented,
    ];

    /// The textual token for this quality (`DD`, `D`, `m`, `M`, `P`, `A`, `AA`).
    pub fn token(self) -> &'static str {
        match self {
            IntervalQuality::DoublyDiminished => "DD",
            IntervalQuality::Diminished => "D",
            IntervalQuality::Minor => "m",
            IntervalQuality::Major => "M",
            IntervalQuality::Perfect => "P",
            IntervalQuality::Augmented => "A",
            IntervalQuality::DoublyAugmented => "AA",
        }
    }

    /// Parse a quality token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "DD" => Some(IntervalQuality::DoublyDiminished),
            "D" => Some(IntervalQuality::Diminished),
            "m" => Some(IntervalQuality::Minor),
            "M" => Some(IntervalQuality::Major),
            "P" => Some(IntervalQuality::Perfect),
            "A" => Some(IntervalQuality::Augmented),
            "AA" => Some(IntervalQuality::DoublyAugmented),
            _ => None,
        }
    }

    /// Semitone deviation from the major-scale reference, or `None` when
    /// the quality does not exist over the given interval class.
    ///
    /// Perfect-class intervals admit `DD`, `D`, `P`, `A`, `AA`;
    /// non-perfect-class intervals admit `DD`, `D`, `m`, `M`, `A`, `AA`.
    pub fn alteration_effect(self, perfect_class: bool) -> Option<i8> {
        if perfect_class {
            match self {
                IntervalQuality::DoublyDiminished => Some(-2),
                IntervalQuality::Diminished => Some(-1),
                IntervalQuality::Perfect => Some(0),
                IntervalQuality::Augmented => Some(1),
                IntervalQuality::DoublyAugmented => Some(2),
                IntervalQuality::Minor | IntervalQuality::Major => None,
            }
        } else {
            match self {
                IntervalQuality::DoublyDiminished => Some(-3),
                IntervalQuality::Diminished => Some(-2),
                IntervalQuality::Minor => Some(-1),
                IntervalQuality::Major => Some(0),
                IntervalQuality::Augmented => Some(1),
                IntervalQuality::DoublyAugmented => Some(2),
                IntervalQuality::Perfect => None,
            }
        }
    }
}

impl fmt::Display for IntervalQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Whether a diatonic interval belongs to the perfect class.
///
/// Unisons, fourths, fifths, and their compound forms (octaves, elevenths,
/// twelfths, ...) take perfect qualities.
pub fn is_perfect_class(diatonic_interval: u8) -> bool {
    matches!((diatonic_interval.wrapping_sub(1)) % 7, 0 | 3 | 4)
}

/// Semitone spans of the major scale, the reference frame all interval
/// spellings deviate from.
const MAJOR_REFERENCE_SEMITONES: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Semitones of the major-scale step at `diatonic_interval`, folding
/// compound intervals across octaves.
pub(crate) fn major_reference_semitones(diatonic_interval: u8) -> i8 {
    let octaves = (diatonic_interval - 1) / 7;
    let step = MAJOR_REFERENCE_SEMITONES[((diatonic_interval - 1) % 7) as usize];
    (12 * octaves + step) as i8
}

/// An interval spelling: a quality over a diatonic interval number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    quality: IntervalQuality,
    diatonic_interval: u8,
    semitones: i8,
}

impl Interval {
    /// Create an interval, validating the quality against the interval class.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use harmalysis_core::{Interval, IntervalQuality};
    ///
    /// let minor_seventh = Interval::new(IntervalQuality::Minor, 7)?;
    /// assert_eq!(minor_seventh.semitones(), 10);
    ///
    /// // A "minor fifth" does not exist
    /// assert!(Interval::new(IntervalQuality::Minor, 5).is_err());
    /// # Ok::<(), harmalysis_core::HarmalysisError>(())
    /// ```
    pub fn new(quality: IntervalQuality, diatonic_interval: u8) -> HarmalysisResult<Self> {
        if diatonic_interval == 0 || diatonic_interval > MUSICAL.max_interval_position {
            return Err(HarmalysisError::IntervalIndexOutOfBounds {
                position: diatonic_interval,
            });
        }
        let effect = quality
            .alteration_effect(is_perfect_class(diatonic_interval))
            .ok_or_else(|| HarmalysisError::UnsupportedIntervalQuality {
                quality: quality.token().to_string(),
                diatonic_interval,
            })?;
        let semitones = major_reference_semitones(diatonic_interval) + effect;
        Ok(Self {
            quality,
            diatonic_interval,
            semitones,
        })
    }

    /// The interval spanning from one pitch class up to another.
    ///
    /// The diatonic and chromatic distances are measured independently and
    /// the quality is recovered from the alteration table; a distance pair
    /// no quality can express is an unreachable spelling.
    pub fn between(from: &PitchClass, to: &PitchClass) -> HarmalysisResult<Self> {
        let diatonic_distance = (MUSICAL.diatonic_classes + to.diatonic_class()
            - from.diatonic_class())
            % MUSICAL.diatonic_classes;
        let chromatic = i16::from(MUSICAL.chromatic_classes);
        let chromatic_distance =
            (chromatic + i16::from(to.chromatic_class()) - i16::from(from.chromatic_class()))
                % chromatic;
        let diatonic_interval = diatonic_distance + 1;
        let reference = i16::from(major_reference_semitones(diatonic_interval));
        let perfect = is_perfect_class(diatonic_interval);
        for quality in IntervalQuality::ALL {
            if let Some(effect) = quality.alteration_effect(perfect) {
                if reference + i16::from(effect) == chromatic_distance {
                    return Self::new(quality, diatonic_interval);
                }
            }
        }
        Err(HarmalysisError::UnreachableSpelling {
            diatonic_class: diatonic_distance,
            chromatic_class: chromatic_distance as u8,
        })
    }

    /// The quality.
    pub fn quality(&self) -> IntervalQuality {
        self.quality
    }

    /// The diatonic interval number, 1-based.
    pub fn diatonic_interval(&self) -> u8 {
        self.diatonic_interval
    }

    /// The semitone span, derived from the major-scale reference.
    pub fn semitones(&self) -> i8 {
        self.semitones
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.quality, self.diatonic_interval)
    }
}
