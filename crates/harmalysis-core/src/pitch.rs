//! Spelled pitch classes
//!
//! A [`PitchClass`] couples a note letter with an alteration, which keeps
//! enharmonically equivalent notes distinct: F# and Gb occupy the same
//! chromatic class but remain different values. Every operation in the
//! tonal algebra preserves that spelling discipline.

use crate::error::{HarmalysisError, HarmalysisResult};
use crate::interval::Interval;
use harmalysis_config::MUSICAL;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semitone position of each natural note letter within the octave.
pub(crate) const NATURAL_CHROMATIC_CLASSES: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// One of the seven note letters, C through B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteLetter {
    C = 0,
    D = 1,
    E = 2,
    F = 3,
    G = 4,
    A = 5,
    B = 6,
}

impl NoteLetter {
    /// All note letters in diatonic-class order.
    pub const ALL: [NoteLetter; 7] = [
        NoteLetter::C,
        NoteLetter::D,
        NoteLetter::E,
        NoteLetter::F,
        NoteLetter::G,
        NoteLetter::A,
        NoteLetter::B,
    ];

    /// Parse a note letter, accepting either case.
    pub fn from_char(letter: char) -> HarmalysisResult<Self> {
        match letter.to_ascii_uppercase() {
            'C' => Ok(NoteLetter::C),
            'D' => Ok(NoteLetter::D),
            'E' => Ok(NoteLetter::E),
            'F' => Ok(NoteLetter::F),
            'G' => Ok(NoteLetter::G),
            'A' => Ok(NoteLetter::A),
            'B' => Ok(NoteLetter::B),
            _ => Err(HarmalysisError::UnsupportedNoteLetter { letter }),
        }
    }

    /// Diatonic class of this letter, 0 (C) through 6 (B).
    pub fn diatonic_class(self) -> u8 {
        self as u8
    }

    /// Letter for a diatonic class in 0..7.
    pub fn from_diatonic_class(class: u8) -> HarmalysisResult<Self> {
        Self::ALL
            .get(class as usize)
            .copied()
            .ok_or(HarmalysisError::DiatonicClassOutOfBounds { class })
    }

    /// Chromatic class of the unaltered letter.
    pub fn natural_chromatic_class(self) -> u8 {
        NATURAL_CHROMATIC_CLASSES[self as usize]
    }
}

impl fmt::Display for NoteLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            NoteLetter::C => 'C',
            NoteLetter::D => 'D',
            NoteLetter::E => 'E',
            NoteLetter::F => 'F',
            NoteLetter::G => 'G',
            NoteLetter::A => 'A',
            NoteLetter::B => 'B',
        };
        write!(f, "{}", letter)
    }
}

/// A chromatic displacement of up to two semitones in either direction.
///
/// The surface syntax accepts `bb`, `--`, `b`, `-`, `#`, `##`, and `x`;
/// values render with the canonical symbols `bb`, `b`, `#`, and `x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alteration {
    DoubleFlat,
    Flat,
    #[default]
    Natural,
    Sharp,
    DoubleSharp,
}

impl Alteration {
    /// Parse an alteration symbol, accepting the `-`/`--`/`##` synonyms.
    pub fn from_symbol(symbol: &str) -> HarmalysisResult<Self> {
        match symbol {
            "" => Ok(Alteration::Natural),
            "b" | "-" => Ok(Alteration::Flat),
            "bb" | "--" => Ok(Alteration::DoubleFlat),
            "#" => Ok(Alteration::Sharp),
            "##" | "x" => Ok(Alteration::DoubleSharp),
            _ => Err(HarmalysisError::UnsupportedAlteration {
                alteration: symbol.to_string(),
            }),
        }
    }

    /// Alteration whose chromatic effect is `offset` semitones, if any.
    pub fn from_offset(offset: i8) -> Option<Self> {
        match offset {
            -2 => Some(Alteration::DoubleFlat),
            -1 => Some(Alteration::Flat),
            0 => Some(Alteration::Natural),
            1 => Some(Alteration::Sharp),
            2 => Some(Alteration::DoubleSharp),
            _ => None,
        }
    }

    /// Chromatic effect in semitones, -2 through +2.
    pub fn offset(self) -> i8 {
        match self {
            Alteration::DoubleFlat => -2,
            Alteration::Flat => -1,
            Alteration::Natural => 0,
            Alteration::Sharp => 1,
            Alteration::DoubleSharp => 2,
        }
    }

    /// Canonical symbol, empty for natural.
    pub fn symbol(self) -> &'static str {
        match self {
            Alteration::DoubleFlat => "bb",
            Alteration::Flat => "b",
            Alteration::Natural => "",
            Alteration::Sharp => "#",
            Alteration::DoubleSharp => "x",
        }
    }
}

impl fmt::Display for Alteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A spelled pitch class: a note letter plus an alteration.
///
/// # Examples
///
/// ```rust
/// use harmalysis_core::{Interval, IntervalQuality, NoteLetter, PitchClass};
///
/// let c = PitchClass::natural(NoteLetter::C);
/// let major_third = Interval::new(IntervalQuality::Major, 3)?;
/// assert_eq!(c.transpose(&major_third)?.to_string(), "E");
/// # Ok::<(), harmalysis_core::HarmalysisError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PitchClass {
    letter: NoteLetter,
    alteration: Alteration,
}

impl PitchClass {
    /// Create a pitch class from a letter and an alteration.
    pub fn new(letter: NoteLetter, alteration: Alteration) -> Self {
        Self { letter, alteration }
    }

    /// Create an unaltered pitch class.
    pub fn natural(letter: NoteLetter) -> Self {
        Self::new(letter, Alteration::Natural)
    }

    /// The note letter.
    pub fn letter(&self) -> NoteLetter {
        self.letter
    }

    /// The alteration.
    pub fn alteration(&self) -> Alteration {
        self.alteration
    }

    /// Diatonic class, 0 (C) through 6 (B).
    pub fn diatonic_class(&self) -> u8 {
        self.letter.diatonic_class()
    }

    /// Chromatic class, 0 through 11.
    pub fn chromatic_class(&self) -> u8 {
        let chromatic =
            i16::from(self.letter.natural_chromatic_class()) + i16::from(self.alteration.offset());
        chromatic.rem_euclid(i16::from(MUSICAL.chromatic_classes)) as u8
    }

    /// Reconstruct a spelled pitch class from its numeric pair.
    ///
    /// Fails with [`HarmalysisError::UnreachableSpelling`] when no
    /// alteration within two semitones makes the chromatic class agree
    /// with the letter.
    pub fn from_classes(diatonic_class: u8, chromatic_class: u8) -> HarmalysisResult<Self> {
        if diatonic_class >= MUSICAL.diatonic_classes {
            return Err(HarmalysisError::DiatonicClassOutOfBounds {
                class: diatonic_class,
            });
        }
        let letter = NoteLetter::from_diatonic_class(diatonic_class)?;
        if chromatic_class >= MUSICAL.chromatic_classes {
            return Err(HarmalysisError::ChromaticClassOutOfBounds {
                class: chromatic_class,
            });
        }
        let natural = letter.natural_chromatic_class();
        if natural == chromatic_class {
            return Ok(Self::natural(letter));
        }
        for offset in [-2i8, -1, 1, 2] {
            let candidate = (i16::from(natural) + i16::from(offset))
                .rem_euclid(i16::from(MUSICAL.chromatic_classes)) as u8;
            if candidate == chromatic_class {
                if let Some(alteration) = Alteration::from_offset(offset) {
                    return Ok(Self::new(letter, alteration));
                }
            }
        }
        Err(HarmalysisError::UnreachableSpelling {
            diatonic_class,
            chromatic_class,
        })
    }

    /// The pitch class lying at `interval` above this one.
    ///
    /// The diatonic and chromatic classes move independently and the
    /// resulting pair is respelled, so the result stays a legal spelled
    /// pitch: C transposed by an augmented fourth is F#, never Gb.
    pub fn transpose(&self, interval: &Interval) -> HarmalysisResult<Self> {
        let diatonic_steps = interval.diatonic_interval() - 1;
        let new_diatonic = (self.diatonic_class() + diatonic_steps) % MUSICAL.diatonic_classes;
        let new_chromatic = (i16::from(self.chromatic_class()) + i16::from(interval.semitones()))
            .rem_euclid(i16::from(MUSICAL.chromatic_classes)) as u8;
        Self::from_classes(new_diatonic, new_chromatic)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.alteration)
    }
}

impl FromStr for PitchClass {
    type Err = HarmalysisError;

    fn from_str(s: &str) -> HarmalysisResult<Self> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(HarmalysisError::UnsupportedNoteLetter {
            letter: ' ',
        })?;
        let letter = NoteLetter::from_char(letter)?;
        let alteration = Alteration::from_symbol(chars.as_str())?;
        Ok(Self::new(letter, alteration))
    }
}
