//! The chord model
//!
//! A single [`Chord`] value covers every chord shape of the notation:
//! descriptive skeletons, invertible and tertian chords, and the named
//! special chords. The variants of the old class hierarchy collapse into
//! optional fields; constructors enforce the field combinations that are
//! legal for each shape.
//!
//! A chord is assembled in two phases. Parsing fills the scale degree,
//! triad quality, inversion, and any explicitly spelled intervals; key
//! resolution later fills the absolute root and the mode-dependent
//! extensions (see the analyzer). After assembly a chord is not mutated.

use crate::constants::{FIGURED_BASS_INVERSIONS, INVERSION_LETTERS};
use crate::error::{HarmalysisError, HarmalysisResult};
use crate::interval::{Interval, IntervalQuality};
use crate::key::ScaleDegree;
use crate::pitch::{Alteration, PitchClass};
use harmalysis_config::MUSICAL;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Triad qualities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriadQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
}

impl TriadQuality {
    /// The canonical quality name.
    pub fn name(self) -> &'static str {
        match self {
            TriadQuality::Major => "major_triad",
            TriadQuality::Minor => "minor_triad",
            TriadQuality::Diminished => "diminished_triad",
            TriadQuality::Augmented => "augmented_triad",
        }
    }

    /// Parse a canonical quality name.
    pub fn from_name(name: &str) -> HarmalysisResult<Self> {
        match name {
            "major_triad" => Ok(TriadQuality::Major),
            "minor_triad" => Ok(TriadQuality::Minor),
            "diminished_triad" => Ok(TriadQuality::Diminished),
            "augmented_triad" => Ok(TriadQuality::Augmented),
            _ => Err(HarmalysisError::UnsupportedTriadQuality {
                quality: name.to_string(),
            }),
        }
    }

    /// The third and fifth qualities this triad stacks.
    fn member_qualities(self) -> (IntervalQuality, IntervalQuality) {
        match self {
            TriadQuality::Major => (IntervalQuality::Major, IntervalQuality::Perfect),
            TriadQuality::Minor => (IntervalQuality::Minor, IntervalQuality::Perfect),
            TriadQuality::Diminished => (IntervalQuality::Minor, IntervalQuality::Diminished),
            TriadQuality::Augmented => (IntervalQuality::Major, IntervalQuality::Augmented),
        }
    }
}

impl fmt::Display for TriadQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The national flavors of the augmented-sixth chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AugmentedSixthType {
    Italian,
    French,
    German,
}

impl AugmentedSixthType {
    /// The flavor name.
    pub fn name(self) -> &'static str {
        match self {
            AugmentedSixthType::Italian => "italian",
            AugmentedSixthType::French => "french",
            AugmentedSixthType::German => "german",
        }
    }
}

/// Harmonic function of a chord within its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmonicFunction {
    Tonic,
    Subdominant,
    Dominant,
}

impl HarmonicFunction {
    /// The function name.
    pub fn name(self) -> &'static str {
        match self {
            HarmonicFunction::Tonic => "tonic",
            HarmonicFunction::Subdominant => "subdominant",
            HarmonicFunction::Dominant => "dominant",
        }
    }

    /// Default function of a scale degree: the tonic family (1, 3, 6),
    /// the subdominant family (2, 4), and the dominant family (5, 7).
    pub fn of_degree(degree: u8) -> Option<Self> {
        match degree {
            1 | 3 | 6 => Some(HarmonicFunction::Tonic),
            2 | 4 => Some(HarmonicFunction::Subdominant),
            5 | 7 => Some(HarmonicFunction::Dominant),
            _ => None,
        }
    }
}

impl fmt::Display for HarmonicFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Tags for the named special chords of the notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialChord {
    AugmentedSixth(AugmentedSixthType),
    Neapolitan,
    HalfDiminishedSeventh,
    CadentialSixFour,
    CommonToneDiminished,
    Tristan,
}

/// Number of interval slots; positions 2 through 15 above the root.
const INTERVAL_SLOTS: usize = 14;

/// A chord: a root (or a scale degree awaiting resolution), an interval
/// skeleton, an inversion, and functional labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chord {
    /// Scale degree the chord was written on, if any
    pub scale_degree: Option<ScaleDegree>,

    /// Alteration prefixed to the scale degree
    pub scale_degree_alteration: Option<Alteration>,

    /// Absolute root, filled during key resolution
    pub root: Option<PitchClass>,

    /// Interval skeleton, positions 2..=15 above the root
    intervals: [Option<Interval>; INTERVAL_SLOTS],

    /// Scale degree of the bass when it differs from what the inversion
    /// implies (the cadential six-four keeps its dominant bass here)
    pub bass_degree: Option<u8>,

    /// Inversion index, 0 for root position
    pub inversion: u8,

    /// Triad quality, when the chord is tertian
    pub triad_quality: Option<TriadQuality>,

    /// Tag identifying a named special chord
    pub special: Option<SpecialChord>,

    /// Function implied by the scale degree
    pub default_function: Option<HarmonicFunction>,

    /// Caller-supplied override of the default function
    pub contextual_function: Option<HarmonicFunction>,
}

impl Default for Chord {
    fn default() -> Self {
        Self::new()
    }
}

impl Chord {
    /// Create an empty chord.
    pub fn new() -> Self {
        Self {
            scale_degree: None,
            scale_degree_alteration: None,
            root: None,
            intervals: [None; INTERVAL_SLOTS],
            bass_degree: None,
            inversion: 0,
            triad_quality: None,
            special: None,
            default_function: None,
            contextual_function: None,
        }
    }

    /// A descriptive chord anchored on an absolute root; intervals are
    /// spelled out one by one and no key is involved.
    pub fn descriptive(root: PitchClass) -> Self {
        Self {
            root: Some(root),
            ..Self::new()
        }
    }

    /// A tertian chord on a scale degree.
    pub fn tertian(
        quality: TriadQuality,
        degree: ScaleDegree,
        alteration: Option<Alteration>,
    ) -> HarmalysisResult<Self> {
        let mut chord = Self::new();
        chord.set_scale_degree(degree, alteration);
        chord.set_triad_quality(quality)?;
        Ok(chord)
    }

    /// An augmented-sixth chord, rooted on the raised fourth degree.
    ///
    /// The italian flavor carries only the diminished third and fifth;
    /// french adds a minor sixth, german a diminished seventh.
    pub fn augmented_sixth(kind: AugmentedSixthType) -> HarmalysisResult<Self> {
        let mut chord = Self::new();
        chord.set_scale_degree(ScaleDegree::new(4, true)?, Some(Alteration::Sharp));
        chord.add_interval(Interval::new(IntervalQuality::Diminished, 3)?)?;
        chord.add_interval(Interval::new(IntervalQuality::Diminished, 5)?)?;
        match kind {
            AugmentedSixthType::German => {
                chord.add_interval(Interval::new(IntervalQuality::Diminished, 7)?)?;
            }
            AugmentedSixthType::French => {
                chord.add_interval(Interval::new(IntervalQuality::Minor, 6)?)?;
            }
            AugmentedSixthType::Italian => {}
        }
        chord.special = Some(SpecialChord::AugmentedSixth(kind));
        Ok(chord)
    }

    /// The Neapolitan chord: a major triad on the flattened second degree.
    pub fn neapolitan() -> HarmalysisResult<Self> {
        let mut chord = Self::new();
        chord.set_scale_degree(ScaleDegree::new(2, false)?, Some(Alteration::Flat));
        chord.set_triad_quality(TriadQuality::Major)?;
        chord.special = Some(SpecialChord::Neapolitan);
        Ok(chord)
    }

    /// A half-diminished seventh chord on the given degree (vii in the
    /// surface notation).
    pub fn half_diminished_seventh(degree: ScaleDegree) -> HarmalysisResult<Self> {
        let mut chord = Self::new();
        chord.set_scale_degree(degree, None);
        chord.set_triad_quality(TriadQuality::Diminished)?;
        chord.add_interval(Interval::new(IntervalQuality::Minor, 7)?)?;
        chord.special = Some(SpecialChord::HalfDiminishedSeventh);
        Ok(chord)
    }

    /// The cadential six-four.
    ///
    /// The bass is the dominant degree and the function follows it; the
    /// root stays on the tonic, a fourth above, which the fixed 6-4
    /// inversion expresses. Whether the tonic triad is spelled major or
    /// minor is not known until the enclosing key is resolved, so the
    /// degree and quality are filled later by [`Chord::set_as_major_tonic`]
    /// or [`Chord::set_as_minor_tonic`].
    pub fn cadential_six_four() -> HarmalysisResult<Self> {
        let mut chord = Self::new();
        chord.set_inversion_by_number(64)?;
        chord.bass_degree = Some(5);
        chord.default_function = Some(HarmonicFunction::Dominant);
        chord.special = Some(SpecialChord::CadentialSixFour);
        Ok(chord)
    }

    /// Fill a deferred cadential six-four as a major tonic triad.
    pub fn set_as_major_tonic(&mut self) -> HarmalysisResult<()> {
        self.scale_degree = Some(ScaleDegree::new(1, false)?);
        self.set_triad_quality(TriadQuality::Major)
    }

    /// Fill a deferred cadential six-four as a minor tonic triad.
    pub fn set_as_minor_tonic(&mut self) -> HarmalysisResult<()> {
        self.scale_degree = Some(ScaleDegree::new(1, true)?);
        self.set_triad_quality(TriadQuality::Minor)
    }

    /// The common-tone diminished chord: a fully diminished seventh on
    /// the tonic degree with subdominant function.
    pub fn common_tone_diminished() -> HarmalysisResult<Self> {
        let mut chord = Self::new();
        chord.set_scale_degree(ScaleDegree::new(1, false)?, None);
        chord.set_triad_quality(TriadQuality::Diminished)?;
        chord.add_interval(Interval::new(IntervalQuality::Diminished, 7)?)?;
        chord.default_function = Some(HarmonicFunction::Subdominant);
        chord.special = Some(SpecialChord::CommonToneDiminished);
        Ok(chord)
    }

    /// The Tristan chord: recognized by name, no resolution defined.
    pub fn tristan() -> Self {
        Self {
            special: Some(SpecialChord::Tristan),
            ..Self::new()
        }
    }

    /// Set the scale degree and derive the default function from it.
    pub fn set_scale_degree(&mut self, degree: ScaleDegree, alteration: Option<Alteration>) {
        self.scale_degree = Some(degree);
        self.scale_degree_alteration = alteration;
        self.default_function = HarmonicFunction::of_degree(degree.number());
    }

    /// Place an interval in the skeleton at its diatonic position.
    pub fn add_interval(&mut self, interval: Interval) -> HarmalysisResult<()> {
        let position = interval.diatonic_interval();
        self.slot(position)?;
        self.intervals[(position - 2) as usize] = Some(interval);
        Ok(())
    }

    /// Clear the interval at a diatonic position.
    pub fn missing_interval(&mut self, position: u8) -> HarmalysisResult<()> {
        self.slot(position)?;
        self.intervals[(position - 2) as usize] = None;
        Ok(())
    }

    fn slot(&self, position: u8) -> HarmalysisResult<()> {
        if position < MUSICAL.min_interval_position || position > MUSICAL.max_interval_position {
            return Err(HarmalysisError::IntervalIndexOutOfBounds { position });
        }
        Ok(())
    }

    /// The interval at a diatonic position, if any.
    pub fn interval_at(&self, position: u8) -> Option<Interval> {
        if position < MUSICAL.min_interval_position || position > MUSICAL.max_interval_position {
            return None;
        }
        self.intervals[(position - 2) as usize]
    }

    /// The non-empty intervals, in ascending position order.
    pub fn intervals(&self) -> impl Iterator<Item = Interval> + '_ {
        self.intervals.iter().flatten().copied()
    }

    /// Set the triad quality and fill positions 3 and 5 accordingly.
    pub fn set_triad_quality(&mut self, quality: TriadQuality) -> HarmalysisResult<()> {
        self.triad_quality = Some(quality);
        let (third, fifth) = quality.member_qualities();
        self.add_interval(Interval::new(third, 3)?)?;
        self.add_interval(Interval::new(fifth, 5)?)?;
        Ok(())
    }

    /// Set the inversion from a figured-bass token (6, 64, 65, 43, 42, 2).
    pub fn set_inversion_by_number(&mut self, figure: u16) -> HarmalysisResult<()> {
        let inversion = FIGURED_BASS_INVERSIONS.get(&figure).ok_or_else(|| {
            HarmalysisError::UnsupportedInversion {
                inversion: figure.to_string(),
            }
        })?;
        self.inversion = *inversion;
        Ok(())
    }

    /// Set the inversion from a letter, a (root position) through g.
    pub fn set_inversion_by_letter(&mut self, letter: char) -> HarmalysisResult<()> {
        let index = INVERSION_LETTERS
            .iter()
            .position(|&candidate| candidate == letter)
            .ok_or_else(|| HarmalysisError::UnsupportedInversion {
                inversion: letter.to_string(),
            })?;
        let inversion = index as u8;
        if inversion > MUSICAL.max_inversion {
            return Err(HarmalysisError::UnsupportedInversion {
                inversion: letter.to_string(),
            });
        }
        self.inversion = inversion;
        Ok(())
    }

    /// Re-encode the interval skeleton as a canonical chord-label string,
    /// e.g. "G dominant seventh". Returns `None` when the chord has no
    /// resolved root or its skeleton matches no named quality.
    pub fn label(&self) -> Option<String> {
        use IntervalQuality::{Augmented, Diminished, Major, Minor, Perfect};
        let root = self.root?;
        let quality_at = |position: u8| self.interval_at(position).map(|i| i.quality());
        let quality = match (
            quality_at(3),
            quality_at(5),
            quality_at(6),
            quality_at(7),
        ) {
            (Some(Major), Some(Perfect), None, None) => "major",
            (Some(Minor), Some(Perfect), None, None) => "minor",
            (Some(Major), Some(Augmented), None, None) => "augmented",
            (Some(Minor), Some(Diminished), None, None) => "diminished",
            (Some(Major), Some(Perfect), None, Some(Major)) => "major seventh",
            (Some(Major), Some(Perfect), None, Some(Minor)) => "dominant seventh",
            (Some(Major), Some(Augmented), None, Some(Major)) => "augmented major seventh",
            (Some(Minor), Some(Perfect), None, Some(Minor)) => "minor seventh",
            (Some(Minor), Some(Perfect), None, Some(Major)) => "minor major seventh",
            (Some(Minor), Some(Diminished), None, Some(Minor)) => "half-diminished seventh",
            (Some(Minor), Some(Diminished), None, Some(Diminished)) => "fully-diminished seventh",
            (Some(Diminished), Some(Diminished), None, None) => "italian augmented sixth",
            (Some(Diminished), Some(Diminished), Some(Minor), None) => "french augmented sixth",
            (Some(Diminished), Some(Diminished), None, Some(Diminished)) => {
                "german augmented sixth"
            }
            _ => return None,
        };
        Some(format!("{} {}", root, quality))
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(root) = self.root {
            write!(f, "{}", root)?;
        } else if let Some(degree) = self.scale_degree {
            if let Some(alteration) = self.scale_degree_alteration {
                write!(f, "{}", alteration)?;
            }
            write!(f, "{}", degree)?;
        }
        for interval in self.intervals() {
            write!(f, "{}", interval)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::NoteLetter;

    #[test]
    fn test_triad_qualities() {
        let degree = ScaleDegree::new(5, false).unwrap();
        let chord = Chord::tertian(TriadQuality::Major, degree, None).unwrap();
        assert_eq!(chord.interval_at(3).unwrap().to_string(), "M3");
        assert_eq!(chord.interval_at(5).unwrap().to_string(), "P5");

        let degree = ScaleDegree::new(7, true).unwrap();
        let chord = Chord::tertian(TriadQuality::Diminished, degree, None).unwrap();
        assert_eq!(chord.interval_at(3).unwrap().to_string(), "m3");
        assert_eq!(chord.interval_at(5).unwrap().to_string(), "D5");

        let chord = Chord::tertian(TriadQuality::Augmented, degree, None).unwrap();
        assert_eq!(chord.interval_at(5).unwrap().to_string(), "A5");
    }

    #[test]
    fn test_triad_quality_names() {
        assert_eq!(TriadQuality::Minor.name(), "minor_triad");
        assert_eq!(
            TriadQuality::from_name("augmented_triad").unwrap(),
            TriadQuality::Augmented
        );
        assert!(TriadQuality::from_name("power_chord").is_err());
    }

    #[test]
    fn test_inversion_by_number() {
        let mut chord = Chord::new();
        for (figure, inversion) in [(6u16, 1u8), (64, 2), (65, 1), (43, 2), (42, 3), (2, 3)] {
            chord.set_inversion_by_number(figure).unwrap();
            assert_eq!(chord.inversion, inversion, "figure {}", figure);
        }
        assert_eq!(
            chord.set_inversion_by_number(63),
            Err(HarmalysisError::UnsupportedInversion {
                inversion: "63".to_string(),
            })
        );
    }

    #[test]
    fn test_inversion_by_letter() {
        let mut chord = Chord::new();
        chord.set_inversion_by_letter('a').unwrap();
        assert_eq!(chord.inversion, 0);
        chord.set_inversion_by_letter('c').unwrap();
        assert_eq!(chord.inversion, 2);
        chord.set_inversion_by_letter('g').unwrap();
        assert_eq!(chord.inversion, 6);
        assert!(chord.set_inversion_by_letter('h').is_err());
    }

    #[test]
    fn test_interval_bounds() {
        let mut chord = Chord::new();
        let ninth = Interval::new(IntervalQuality::Major, 9).unwrap();
        chord.add_interval(ninth).unwrap();
        assert_eq!(chord.interval_at(9), Some(ninth));

        chord.missing_interval(9).unwrap();
        assert_eq!(chord.interval_at(9), None);

        assert_eq!(
            chord.missing_interval(1),
            Err(HarmalysisError::IntervalIndexOutOfBounds { position: 1 })
        );
        assert_eq!(
            chord.missing_interval(16),
            Err(HarmalysisError::IntervalIndexOutOfBounds { position: 16 })
        );
    }

    #[test]
    fn test_default_function_from_degree() {
        for (number, function) in [
            (1, HarmonicFunction::Tonic),
            (2, HarmonicFunction::Subdominant),
            (3, HarmonicFunction::Tonic),
            (4, HarmonicFunction::Subdominant),
            (5, HarmonicFunction::Dominant),
            (6, HarmonicFunction::Tonic),
            (7, HarmonicFunction::Dominant),
        ] {
            let degree = ScaleDegree::new(number, false).unwrap();
            let chord = Chord::tertian(TriadQuality::Major, degree, None).unwrap();
            assert_eq!(chord.default_function, Some(function), "degree {}", number);
        }
    }

    #[test]
    fn test_augmented_sixth_skeletons() {
        let italian = Chord::augmented_sixth(AugmentedSixthType::Italian).unwrap();
        assert_eq!(italian.interval_at(3).unwrap().to_string(), "D3");
        assert_eq!(italian.interval_at(5).unwrap().to_string(), "D5");
        assert_eq!(italian.interval_at(6), None);
        assert_eq!(italian.interval_at(7), None);
        assert_eq!(italian.scale_degree.unwrap().to_string(), "iv");
        assert_eq!(italian.scale_degree_alteration, Some(Alteration::Sharp));
        assert_eq!(italian.default_function, Some(HarmonicFunction::Subdominant));

        let french = Chord::augmented_sixth(AugmentedSixthType::French).unwrap();
        assert_eq!(french.interval_at(6).unwrap().to_string(), "m6");

        let german = Chord::augmented_sixth(AugmentedSixthType::German).unwrap();
        assert_eq!(german.interval_at(7).unwrap().to_string(), "D7");
    }

    #[test]
    fn test_neapolitan() {
        let chord = Chord::neapolitan().unwrap();
        assert_eq!(chord.scale_degree.unwrap().number(), 2);
        assert_eq!(chord.scale_degree_alteration, Some(Alteration::Flat));
        assert_eq!(chord.triad_quality, Some(TriadQuality::Major));
        assert_eq!(chord.default_function, Some(HarmonicFunction::Subdominant));
    }

    #[test]
    fn test_half_diminished_seventh() {
        let degree = ScaleDegree::new(7, true).unwrap();
        let chord = Chord::half_diminished_seventh(degree).unwrap();
        assert_eq!(chord.interval_at(3).unwrap().to_string(), "m3");
        assert_eq!(chord.interval_at(5).unwrap().to_string(), "D5");
        assert_eq!(chord.interval_at(7).unwrap().to_string(), "m7");
        assert_eq!(chord.default_function, Some(HarmonicFunction::Dominant));
    }

    #[test]
    fn test_cadential_six_four() {
        let mut chord = Chord::cadential_six_four().unwrap();
        assert_eq!(chord.inversion, 2);
        assert_eq!(chord.bass_degree, Some(5));
        assert_eq!(chord.default_function, Some(HarmonicFunction::Dominant));
        assert_eq!(chord.scale_degree, None);

        chord.set_as_minor_tonic().unwrap();
        assert_eq!(chord.scale_degree.unwrap().to_string(), "i");
        assert_eq!(chord.triad_quality, Some(TriadQuality::Minor));
        // The function keeps following the bass
        assert_eq!(chord.default_function, Some(HarmonicFunction::Dominant));
    }

    #[test]
    fn test_common_tone_diminished() {
        let chord = Chord::common_tone_diminished().unwrap();
        assert_eq!(chord.interval_at(3).unwrap().to_string(), "m3");
        assert_eq!(chord.interval_at(5).unwrap().to_string(), "D5");
        assert_eq!(chord.interval_at(7).unwrap().to_string(), "D7");
        assert_eq!(chord.default_function, Some(HarmonicFunction::Subdominant));
    }

    #[test]
    fn test_display() {
        let mut chord = Chord::descriptive(PitchClass::natural(NoteLetter::G));
        chord.set_triad_quality(TriadQuality::Major).unwrap();
        chord
            .add_interval(Interval::new(IntervalQuality::Minor, 7).unwrap())
            .unwrap();
        assert_eq!(chord.to_string(), "GM3P5m7");

        let unresolved = Chord::neapolitan().unwrap();
        assert_eq!(unresolved.to_string(), "bIIM3P5");
    }

    #[test]
    fn test_label() {
        let mut chord = Chord::descriptive(PitchClass::natural(NoteLetter::G));
        chord.set_triad_quality(TriadQuality::Major).unwrap();
        chord
            .add_interval(Interval::new(IntervalQuality::Minor, 7).unwrap())
            .unwrap();
        assert_eq!(chord.label().unwrap(), "G dominant seventh");

        let mut chord = Chord::descriptive(PitchClass::natural(NoteLetter::B));
        chord.set_triad_quality(TriadQuality::Diminished).unwrap();
        chord
            .add_interval(Interval::new(IntervalQuality::Minor, 7).unwrap())
            .unwrap();
        assert_eq!(chord.label().unwrap(), "B half-diminished seventh");

        let mut chord = Chord::descriptive(PitchClass::natural(NoteLetter::F));
        chord.set_triad_quality(TriadQuality::Minor).unwrap();
        assert_eq!(chord.label().unwrap(), "F minor");

        // No root, no label
        assert_eq!(Chord::neapolitan().unwrap().label(), None);

        // Tristan has no skeleton at all
        assert_eq!(Chord::tristan().label(), None);
    }

    #[test]
    fn test_label_augmented_sixths() {
        let mut chord = Chord::augmented_sixth(AugmentedSixthType::German).unwrap();
        chord.root = Some(PitchClass::new(NoteLetter::D, Alteration::Sharp));
        assert_eq!(chord.label().unwrap(), "D# german augmented sixth");

        let mut chord = Chord::augmented_sixth(AugmentedSixthType::Italian).unwrap();
        chord.root = Some(PitchClass::new(NoteLetter::F, Alteration::Sharp));
        assert_eq!(chord.label().unwrap(), "F# italian augmented sixth");
    }
}
