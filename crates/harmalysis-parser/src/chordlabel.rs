//! Chord-label parser
//!
//! A small second grammar over strings of the form `<root> <quality>`,
//! e.g. "G dominant seventh". Parsing canonicalizes the root spelling
//! (letter uppercased, alteration in its canonical symbol) and validates
//! the quality against the fixed vocabulary. The analyzer feeds its own
//! chord labels through this parser to round-trip them.

use harmalysis_core::{HarmalysisError, HarmalysisResult, PitchClass};
use log::debug;

/// The chord-label quality vocabulary.
pub const QUALITIES: [&str; 14] = [
    "major",
    "minor",
    "augmented",
    "diminished",
    "major seventh",
    "dominant seventh",
    "augmented major seventh",
    "minor seventh",
    "minor major seventh",
    "half-diminished seventh",
    "fully-diminished seventh",
    "italian augmented sixth",
    "french augmented sixth",
    "german augmented sixth",
];

/// Parse a chord label and return its normalized form.
///
/// # Examples
///
/// ```rust
/// use harmalysis_parser::chordlabel;
///
/// assert_eq!(chordlabel::parse("g dominant seventh")?, "G dominant seventh");
/// assert_eq!(chordlabel::parse("E- minor")?, "Eb minor");
/// assert!(chordlabel::parse("G power chord").is_err());
/// # Ok::<(), harmalysis_core::HarmalysisError>(())
/// ```
pub fn parse(query: &str) -> HarmalysisResult<String> {
    debug!("parsing chord label {:?}", query);
    let (root_text, quality_text) =
        query
            .split_once(' ')
            .ok_or_else(|| HarmalysisError::ParseError {
                message: "expected '<root> <quality>'".to_string(),
                position: 0,
            })?;
    let root: PitchClass = root_text.parse()?;
    let quality = QUALITIES
        .iter()
        .find(|&&candidate| candidate == quality_text)
        .ok_or_else(|| HarmalysisError::ParseError {
            message: format!("unknown chord quality '{}'", quality_text),
            position: root_text.len() + 1,
        })?;
    Ok(format!("{} {}", root, quality))
}
