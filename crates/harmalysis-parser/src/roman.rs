//! Roman-numeral parser and semantic analyzer
//!
//! The surface syntax is parsed by a hand-written recursive-descent
//! walk over the line, producing intermediate specs; a semantic pass then
//! resolves them against the analyzer context into a [`Harmalysis`]
//! record with an absolute root and fully spelled intervals.
//!
//! The resolution order matters in two places. Tonicizations chain
//! right-to-left: the rightmost `/degree` applies to the main key and each
//! earlier one to the key just produced, so the leftmost tonicization
//! yields the innermost key, the one the written chord lives in. And a
//! tertian chord's bare extensions (`7`, `9`, ...) are only requested at
//! parse time; their qualities come from the enclosing key's scale rotated
//! to the chord's degree, which is what makes a leading-tone seventh in a
//! minor key come out diminished.

use crate::context::{shared_context, AnalysisContext};
use harmalysis_core::{
    Alteration, AugmentedSixthType, Chord, Harmalysis, HarmalysisError, HarmalysisResult,
    Interval, IntervalQuality, Key, NoteLetter, PitchClass, ScaleDegree, ScaleKind, SpecialChord,
    TriadQuality,
};
use log::debug;
use smallvec::SmallVec;

/// Parse a line against the process-wide analyzer context.
pub fn parse(query: &str) -> HarmalysisResult<Harmalysis> {
    let mut context = shared_context().write();
    parse_with_context(query, &mut context)
}

/// Parse a line against a caller-supplied analyzer context.
pub fn parse_with_context(
    query: &str,
    context: &mut AnalysisContext,
) -> HarmalysisResult<Harmalysis> {
    debug!("parsing roman entry {:?}", query);
    let mut cursor = Cursor::new(query);
    let entry = parse_entry(&mut cursor)?;
    cursor.expect_end()?;
    resolve_entry(entry, context)
}

// ---------------------------------------------------------------------------
// Lexical cursor

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input.as_bytes().get(self.pos).map(|&b| b as char)
    }

    fn bump(&mut self) -> Option<char> {
        let next = self.peek();
        if next.is_some() {
            self.pos += 1;
        }
        next
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, expected: &str) -> bool {
        if self.input.as_bytes()[self.pos..].starts_with(expected.as_bytes()) {
            self.pos += expected.len();
            true
        } else {
            false
        }
    }

    fn save(&self) -> usize {
        self.pos
    }

    /// The input consumed since `start`. The slice borrows the input, not
    /// the cursor, so it stays usable across later cursor moves.
    fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    fn restore(&mut self, pos: usize) {
        self.pos = pos;
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn error(&self, message: impl Into<String>) -> HarmalysisError {
        HarmalysisError::ParseError {
            message: message.into(),
            position: self.pos,
        }
    }

    fn expect_end(&self) -> HarmalysisResult<()> {
        if self.at_end() {
            Ok(())
        } else {
            Err(self.error("unexpected trailing input"))
        }
    }
}

// ---------------------------------------------------------------------------
// Intermediate records

#[derive(Debug)]
struct Entry {
    key: Option<(Key, KeyRole)>,
    chord: ChordSpec,
    tonicizations: Vec<Tonicization>,
    inline: Option<Box<Entry>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyRole {
    Main,
    Reference,
    Established,
}

#[derive(Debug)]
enum ChordSpec {
    Tertian(TertianSpec),
    Special(Chord),
    DescriptiveDegree(Chord),
    DescriptiveLetter(Chord),
}

#[derive(Debug)]
struct TertianSpec {
    chord: Chord,
    /// Diatonic extensions whose qualities await key resolution
    requested: SmallVec<[u8; 4]>,
}

#[derive(Debug, Clone, Copy)]
struct Tonicization {
    alteration: Option<Alteration>,
    degree: u8,
    scale: ScaleKind,
}

// ---------------------------------------------------------------------------
// Shared lexers

fn lex_alteration(cursor: &mut Cursor) -> Option<Alteration> {
    if cursor.eat_str("bb") || cursor.eat_str("--") {
        return Some(Alteration::DoubleFlat);
    }
    if cursor.eat_str("##") {
        return Some(Alteration::DoubleSharp);
    }
    match cursor.peek() {
        Some('b') | Some('-') => {
            cursor.bump();
            Some(Alteration::Flat)
        }
        Some('#') => {
            cursor.bump();
            Some(Alteration::Sharp)
        }
        Some('x') => {
            cursor.bump();
            Some(Alteration::DoubleSharp)
        }
        _ => None,
    }
}

fn lex_digit_run<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    let start = cursor.pos;
    while matches!(cursor.peek(), Some('0'..='9')) {
        cursor.bump();
    }
    if cursor.pos == start {
        None
    } else {
        Some(cursor.slice_from(start))
    }
}

fn lex_roman_degree(cursor: &mut Cursor) -> HarmalysisResult<ScaleDegree> {
    let start = cursor.pos;
    while matches!(cursor.peek(), Some('I' | 'V' | 'i' | 'v')) {
        cursor.bump();
    }
    let text = cursor.slice_from(start);
    if text.is_empty() {
        return Err(cursor.error("expected a roman numeral"));
    }
    ScaleDegree::from_roman(text).map_err(|_| HarmalysisError::ParseError {
        message: format!("'{}' is not a roman numeral", text),
        position: start,
    })
}

fn lex_inversion_letter(cursor: &mut Cursor) -> Option<char> {
    match cursor.peek() {
        Some(letter @ 'a'..='g') => {
            cursor.bump();
            Some(letter)
        }
        _ => None,
    }
}

/// An interval with an explicit quality token, e.g. `m7`, `AA11`.
fn try_lex_spelled_interval(cursor: &mut Cursor) -> HarmalysisResult<Option<Interval>> {
    let start = cursor.save();
    let quality = if cursor.eat_str("DD") {
        IntervalQuality::DoublyDiminished
    } else if cursor.eat_str("AA") {
        IntervalQuality::DoublyAugmented
    } else {
        match cursor.peek() {
            Some('D') => {
                cursor.bump();
                IntervalQuality::Diminished
            }
            Some('m') => {
                cursor.bump();
                IntervalQuality::Minor
            }
            Some('M') => {
                cursor.bump();
                IntervalQuality::Major
            }
            Some('P') => {
                cursor.bump();
                IntervalQuality::Perfect
            }
            Some('A') => {
                cursor.bump();
                IntervalQuality::Augmented
            }
            _ => return Ok(None),
        }
    };
    let Some(digits) = lex_digit_run(cursor) else {
        cursor.restore(start);
        return Ok(None);
    };
    let position: u8 = digits
        .parse()
        .map_err(|_| cursor.error("interval position out of range"))?;
    Ok(Some(Interval::new(quality, position)?))
}

// ---------------------------------------------------------------------------
// Entry and key parsing

fn parse_entry(cursor: &mut Cursor) -> HarmalysisResult<Entry> {
    let key = try_parse_key(cursor)?;
    let chord = parse_chord_spec(cursor)?;
    let mut tonicizations = Vec::new();
    while cursor.eat('/') {
        tonicizations.push(parse_tonicization(cursor)?);
    }
    let inline = if cursor.eat('[') {
        let inner = parse_entry(cursor)?;
        if !cursor.eat(']') {
            return Err(cursor.error("expected ']'"));
        }
        Some(Box::new(inner))
    } else {
        None
    };
    Ok(Entry {
        key,
        chord,
        tonicizations,
        inline,
    })
}

fn try_parse_key(cursor: &mut Cursor) -> HarmalysisResult<Option<(Key, KeyRole)>> {
    let start = cursor.save();
    let letter_char = match cursor.peek() {
        Some(c) if c.is_ascii_alphabetic() && matches!(c.to_ascii_uppercase(), 'A'..='G') => c,
        _ => return Ok(None),
    };
    cursor.bump();
    let alteration = lex_alteration(cursor);
    let scale_tag = if cursor.eat('_') {
        if cursor.eat_str("nat") {
            Some(ScaleKind::NaturalMinor)
        } else if cursor.eat_str("har") {
            Some(ScaleKind::HarmonicMinor)
        } else if cursor.eat_str("mel") {
            Some(ScaleKind::AscendingMelodicMinor)
        } else {
            cursor.restore(start);
            return Ok(None);
        }
    } else {
        None
    };
    let role = if cursor.eat_str("=>") {
        KeyRole::Established
    } else if cursor.eat('?') {
        KeyRole::Reference
    } else {
        KeyRole::Main
    };
    if !cursor.eat(':') {
        cursor.restore(start);
        return Ok(None);
    }
    let scale = if letter_char.is_ascii_uppercase() {
        if scale_tag.is_some() {
            return Err(cursor.error("minor scale tag on a major key"));
        }
        ScaleKind::Major
    } else {
        scale_tag.unwrap_or(ScaleKind::HarmonicMinor)
    };
    let letter = NoteLetter::from_char(letter_char)?;
    let tonic = PitchClass::new(letter, alteration.unwrap_or_default());
    Ok(Some((Key::new(tonic, scale), role)))
}

// ---------------------------------------------------------------------------
// Chord parsing

fn parse_chord_spec(cursor: &mut Cursor) -> HarmalysisResult<ChordSpec> {
    if let Some(chord) = try_parse_special(cursor)? {
        return Ok(ChordSpec::Special(chord));
    }
    let start = cursor.save();
    let tertian_error = match parse_tertian(cursor) {
        Ok(spec) => return Ok(ChordSpec::Tertian(spec)),
        Err(error) => {
            cursor.restore(start);
            error
        }
    };
    if let Some(chord) = try_parse_descriptive_degree(cursor)? {
        return Ok(ChordSpec::DescriptiveDegree(chord));
    }
    if let Some(chord) = try_parse_descriptive_letter(cursor)? {
        return Ok(ChordSpec::DescriptiveLetter(chord));
    }
    // Neither descriptive form matched; the tertian failure is the most
    // informative one to surface
    Err(tertian_error)
}

fn try_parse_special(cursor: &mut Cursor) -> HarmalysisResult<Option<Chord>> {
    let mut chord = if cursor.eat_str("Cad64") || cursor.eat_str("Cad") {
        return Ok(Some(Chord::cadential_six_four()?));
    } else if cursor.eat_str("CTo7") || cursor.eat_str("CTo") {
        Chord::common_tone_diminished()?
    } else if cursor.eat_str("Ger") || cursor.eat_str("Gn") {
        Chord::augmented_sixth(AugmentedSixthType::German)?
    } else if cursor.eat_str("Fr") {
        Chord::augmented_sixth(AugmentedSixthType::French)?
    } else if cursor.eat_str("It") || cursor.eat_str("Lt") {
        Chord::augmented_sixth(AugmentedSixthType::Italian)?
    } else if cursor.eat_str("Tr") {
        return Ok(Some(Chord::tristan()));
    } else if cursor.eat_str("vii0") {
        Chord::half_diminished_seventh(ScaleDegree::new(7, true)?)?
    } else if cursor.eat('N') {
        Chord::neapolitan()?
    } else {
        return Ok(None);
    };
    if let Some(digits) = lex_digit_run(cursor) {
        let figure: u16 = digits
            .parse()
            .map_err(|_| cursor.error("inversion figure out of range"))?;
        chord.set_inversion_by_number(figure)?;
    } else if let Some(letter) = lex_inversion_letter(cursor) {
        chord.set_inversion_by_letter(letter)?;
    }
    Ok(Some(chord))
}

fn parse_tertian(cursor: &mut Cursor) -> HarmalysisResult<TertianSpec> {
    let alteration = lex_alteration(cursor);
    let degree = lex_roman_degree(cursor)?;
    let quality = if cursor.eat('o') {
        TriadQuality::Diminished
    } else if cursor.eat('+') {
        TriadQuality::Augmented
    } else if degree.is_lowercase() {
        TriadQuality::Minor
    } else {
        TriadQuality::Major
    };
    let mut chord = Chord::tertian(quality, degree, alteration)?;
    let mut requested: SmallVec<[u8; 4]> = SmallVec::new();
    if let Some(interval) = try_lex_spelled_interval(cursor)? {
        if !matches!(interval.diatonic_interval(), 7 | 9 | 11 | 13) {
            return Err(cursor.error(
                "an added interval must be a seventh, ninth, eleventh, or thirteenth",
            ));
        }
        chord.add_interval(interval)?;
    } else if let Some(digits) = lex_digit_run(cursor) {
        match digits {
            "6" => chord.set_inversion_by_number(6)?,
            "64" => chord.set_inversion_by_number(64)?,
            "65" | "43" | "42" | "2" => {
                let figure: u16 = digits
                    .parse()
                    .map_err(|_| cursor.error("inversion figure out of range"))?;
                chord.set_inversion_by_number(figure)?;
                requested.push(7);
            }
            "7" => requested.push(7),
            "9" => requested.extend([7, 9]),
            "11" => requested.extend([7, 9, 11]),
            "13" => requested.extend([7, 9, 11, 13]),
            _ => return Err(cursor.error(format!("unknown figure '{}'", digits))),
        }
    }
    if chord.inversion == 0 {
        if let Some(letter) = lex_inversion_letter(cursor) {
            chord.set_inversion_by_letter(letter)?;
        }
    }
    while cursor.eat('x') {
        let digits = lex_digit_run(cursor)
            .ok_or_else(|| cursor.error("expected an interval position after 'x'"))?;
        let position: u8 = digits
            .parse()
            .map_err(|_| cursor.error("interval position out of range"))?;
        chord.missing_interval(position)?;
    }
    Ok(TertianSpec { chord, requested })
}

fn try_parse_descriptive_degree(cursor: &mut Cursor) -> HarmalysisResult<Option<Chord>> {
    let start = cursor.save();
    let alteration = lex_alteration(cursor);
    let Ok(degree) = lex_roman_degree(cursor) else {
        cursor.restore(start);
        return Ok(None);
    };
    let mut chord = Chord::new();
    chord.set_scale_degree(degree, alteration);
    if !parse_spelled_intervals(cursor, &mut chord)? {
        cursor.restore(start);
        return Ok(None);
    }
    Ok(Some(chord))
}

fn try_parse_descriptive_letter(cursor: &mut Cursor) -> HarmalysisResult<Option<Chord>> {
    let start = cursor.save();
    let letter_char = match cursor.peek() {
        Some(c) if c.is_ascii_alphabetic() && matches!(c.to_ascii_uppercase(), 'A'..='G') => c,
        _ => return Ok(None),
    };
    cursor.bump();
    let alteration = lex_alteration(cursor);
    let letter = NoteLetter::from_char(letter_char)?;
    let root = PitchClass::new(letter, alteration.unwrap_or_default());
    let mut chord = Chord::descriptive(root);
    if !parse_spelled_intervals(cursor, &mut chord)? {
        cursor.restore(start);
        return Ok(None);
    }
    Ok(Some(chord))
}

/// Add explicitly spelled quality-step pairs; true when at least one was read.
fn parse_spelled_intervals(cursor: &mut Cursor, chord: &mut Chord) -> HarmalysisResult<bool> {
    let mut any = false;
    while let Some(interval) = try_lex_spelled_interval(cursor)? {
        chord.add_interval(interval)?;
        any = true;
    }
    Ok(any)
}

fn parse_tonicization(cursor: &mut Cursor) -> HarmalysisResult<Tonicization> {
    if cursor.eat('N') {
        // The Neapolitan shorthand tonicizes the flattened second degree
        return Ok(Tonicization {
            alteration: Some(Alteration::Flat),
            degree: 2,
            scale: ScaleKind::Major,
        });
    }
    let alteration = lex_alteration(cursor);
    let degree = lex_roman_degree(cursor)?;
    let scale = if degree.is_lowercase() {
        ScaleKind::HarmonicMinor
    } else {
        ScaleKind::Major
    };
    Ok(Tonicization {
        alteration,
        degree: degree.number(),
        scale,
    })
}

// ---------------------------------------------------------------------------
// Semantic resolution

fn resolve_entry(entry: Entry, context: &mut AnalysisContext) -> HarmalysisResult<Harmalysis> {
    let resolved = resolve_single(entry.key, entry.chord, &entry.tonicizations, context)?;
    if let Some(inner) = entry.inline {
        // A bracketed entry is resolved for its established-key effect
        resolve_entry(*inner, context)?;
    }
    Ok(resolved)
}

fn resolve_single(
    key: Option<(Key, KeyRole)>,
    chord_spec: ChordSpec,
    tonicizations: &[Tonicization],
    context: &mut AnalysisContext,
) -> HarmalysisResult<Harmalysis> {
    let mut reference_key = None;
    let main_key = match key {
        Some((key, KeyRole::Established)) => {
            debug!("establishing key {}", key);
            context.set_established_key(key.clone());
            key
        }
        Some((key, KeyRole::Reference)) => {
            reference_key = Some(key.clone());
            key
        }
        Some((key, KeyRole::Main)) => key,
        None => context.established_key().clone(),
    };

    // Walk the tonicization chain right-to-left so the leftmost
    // tonicization produces the innermost key
    let mut tonicized_keys: SmallVec<[Key; 2]> = SmallVec::new();
    let mut secondary_key: Option<Key> = None;
    if !tonicizations.is_empty() {
        let mut enclosing = main_key.clone();
        for tonicization in tonicizations.iter().rev() {
            let tonic = enclosing.degree(tonicization.degree, tonicization.alteration)?;
            let key = Key::new(tonic, tonicization.scale);
            tonicized_keys.insert(0, key.clone());
            enclosing = key;
        }
        secondary_key = Some(enclosing);
    }
    let enclosing = secondary_key.clone().unwrap_or_else(|| main_key.clone());

    let chord = match chord_spec {
        ChordSpec::Tertian(TertianSpec {
            mut chord,
            requested,
        }) => {
            if let Some(degree) = chord.scale_degree {
                let rotation = degree.number();
                chord.root = Some(enclosing.degree(rotation, chord.scale_degree_alteration)?);
                for position in requested {
                    let interval = enclosing.scale().step_to_interval(position, rotation)?;
                    chord.add_interval(interval)?;
                }
            }
            chord
        }
        ChordSpec::Special(mut chord) => {
            if chord.special == Some(SpecialChord::CadentialSixFour) {
                // The tonic spelling depends on the enclosing key's mode
                if enclosing.scale().is_minor() {
                    chord.set_as_minor_tonic()?;
                } else {
                    chord.set_as_major_tonic()?;
                }
            }
            if let Some(degree) = chord.scale_degree {
                chord.root =
                    Some(enclosing.degree(degree.number(), chord.scale_degree_alteration)?);
            }
            chord
        }
        ChordSpec::DescriptiveDegree(mut chord) => {
            if let Some(degree) = chord.scale_degree {
                chord.root =
                    Some(main_key.degree(degree.number(), chord.scale_degree_alteration)?);
            }
            chord
        }
        ChordSpec::DescriptiveLetter(chord) => chord,
    };

    let mut resolved = Harmalysis::new(main_key, chord);
    resolved.reference_key = reference_key;
    resolved.secondary_key = secondary_key;
    resolved.tonicized_keys = tonicized_keys;
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(query: &str) -> Harmalysis {
        let mut context = AnalysisContext::new();
        parse_with_context(query, &mut context).unwrap()
    }

    #[test]
    fn test_plain_triads() {
        let result = parse_one("C:I");
        assert_eq!(result.main_key.to_string(), "C major");
        assert_eq!(result.chord.root.unwrap().to_string(), "C");
        assert_eq!(result.chord.triad_quality, Some(TriadQuality::Major));

        let result = parse_one("C:ii");
        assert_eq!(result.chord.root.unwrap().to_string(), "D");
        assert_eq!(result.chord.triad_quality, Some(TriadQuality::Minor));
    }

    #[test]
    fn test_quality_suffixes() {
        let result = parse_one("C:viio");
        assert_eq!(result.chord.triad_quality, Some(TriadQuality::Diminished));
        assert_eq!(result.chord.root.unwrap().to_string(), "B");

        let result = parse_one("C:III+");
        assert_eq!(result.chord.triad_quality, Some(TriadQuality::Augmented));
    }

    #[test]
    fn test_degree_alterations() {
        let result = parse_one("C:bII");
        assert_eq!(result.chord.root.unwrap().to_string(), "Db");

        let result = parse_one("C:#iv");
        assert_eq!(result.chord.root.unwrap().to_string(), "F#");
    }

    #[test]
    fn test_key_prefixes() {
        assert_eq!(parse_one("Eb:I").main_key.to_string(), "Eb major");
        assert_eq!(parse_one("f#:i").main_key.to_string(), "F# harmonic_minor");
        assert_eq!(
            parse_one("f#_nat:i").main_key.to_string(),
            "F# natural_minor"
        );
        assert_eq!(
            parse_one("c_mel:i").main_key.to_string(),
            "C ascending_melodic_minor"
        );
        assert_eq!(parse_one("bb:i").main_key.to_string(), "Bb harmonic_minor");
    }

    #[test]
    fn test_reference_key() {
        let result = parse_one("G?:V");
        assert_eq!(result.reference_key.as_ref().unwrap().to_string(), "G major");
        assert_eq!(result.main_key.to_string(), "G major");
        assert_eq!(result.chord.root.unwrap().to_string(), "D");
    }

    #[test]
    fn test_established_key_persists() {
        let mut context = AnalysisContext::new();
        parse_with_context("D=>:I", &mut context).unwrap();
        assert_eq!(context.established_key().to_string(), "D major");

        let result = parse_with_context("V", &mut context).unwrap();
        assert_eq!(result.main_key.to_string(), "D major");
        assert_eq!(result.chord.root.unwrap().to_string(), "A");
    }

    #[test]
    fn test_inversions() {
        assert_eq!(parse_one("C:V6").chord.inversion, 1);
        assert_eq!(parse_one("C:V64").chord.inversion, 2);
        assert_eq!(parse_one("C:V65").chord.inversion, 1);
        assert_eq!(parse_one("C:V43").chord.inversion, 2);
        assert_eq!(parse_one("C:V42").chord.inversion, 3);
        assert_eq!(parse_one("C:V2").chord.inversion, 3);
        assert_eq!(parse_one("C:Vb").chord.inversion, 1);
        assert_eq!(parse_one("C:V7c").chord.inversion, 2);
    }

    #[test]
    fn test_seventh_figures_request_the_seventh() {
        let result = parse_one("C:V65");
        assert_eq!(result.chord.interval_at(7).unwrap().to_string(), "m7");

        let result = parse_one("C:V6");
        assert_eq!(result.chord.interval_at(7), None);
    }

    #[test]
    fn test_added_intervals() {
        let result = parse_one("C:V9");
        assert_eq!(result.chord.interval_at(7).unwrap().to_string(), "m7");
        assert_eq!(result.chord.interval_at(9).unwrap().to_string(), "M9");

        let result = parse_one("C:I13");
        assert_eq!(result.chord.interval_at(7).unwrap().to_string(), "M7");
        assert_eq!(result.chord.interval_at(9).unwrap().to_string(), "M9");
        assert_eq!(result.chord.interval_at(11).unwrap().to_string(), "P11");
        assert_eq!(result.chord.interval_at(13).unwrap().to_string(), "M13");
    }

    #[test]
    fn test_qualified_added_interval() {
        let result = parse_one("C:IM7");
        assert_eq!(result.chord.interval_at(7).unwrap().to_string(), "M7");

        let result = parse_one("C:viiom7");
        assert_eq!(result.chord.interval_at(3).unwrap().to_string(), "m3");
        assert_eq!(result.chord.interval_at(5).unwrap().to_string(), "D5");
        assert_eq!(result.chord.interval_at(7).unwrap().to_string(), "m7");
    }

    #[test]
    fn test_missing_intervals() {
        let result = parse_one("C:V7x5");
        assert_eq!(result.chord.interval_at(5), None);
        assert_eq!(result.chord.interval_at(3).unwrap().to_string(), "M3");
        assert_eq!(result.chord.interval_at(7).unwrap().to_string(), "m7");
    }

    #[test]
    fn test_tonicization_modes() {
        let result = parse_one("C:V/ii");
        let secondary = result.secondary_key.as_ref().unwrap();
        assert_eq!(secondary.to_string(), "D harmonic_minor");
        assert_eq!(result.chord.root.unwrap().to_string(), "A");

        let result = parse_one("C:V/V");
        assert_eq!(
            result.secondary_key.as_ref().unwrap().to_string(),
            "G major"
        );
        assert_eq!(result.chord.root.unwrap().to_string(), "D");
    }

    #[test]
    fn test_chained_tonicization() {
        // V of (V of ii): the rightmost tonicization applies first
        let result = parse_one("C:V/V/ii");
        assert_eq!(result.tonicized_keys.len(), 2);
        assert_eq!(result.tonicized_keys[1].to_string(), "D harmonic_minor");
        assert_eq!(result.tonicized_keys[0].to_string(), "A major");
        assert_eq!(
            result.secondary_key.as_ref().unwrap().to_string(),
            "A major"
        );
        assert_eq!(result.chord.root.unwrap().to_string(), "E");
    }

    #[test]
    fn test_neapolitan_tonicization() {
        let result = parse_one("C:V/N");
        assert_eq!(
            result.secondary_key.as_ref().unwrap().to_string(),
            "Db major"
        );
        assert_eq!(result.chord.root.unwrap().to_string(), "Ab");
    }

    #[test]
    fn test_special_chords() {
        let result = parse_one("a:Ger");
        assert_eq!(result.chord.root.unwrap().to_string(), "D#");
        assert_eq!(result.chord.interval_at(7).unwrap().to_string(), "D7");

        let result = parse_one("a:Fr");
        assert_eq!(result.chord.interval_at(6).unwrap().to_string(), "m6");

        let result = parse_one("a:It");
        assert_eq!(result.chord.interval_at(6), None);
        assert_eq!(result.chord.interval_at(7), None);

        let result = parse_one("C:N6");
        assert_eq!(result.chord.root.unwrap().to_string(), "Db");
        assert_eq!(result.chord.inversion, 1);

        let result = parse_one("C:vii065");
        assert_eq!(result.chord.root.unwrap().to_string(), "B");
        assert_eq!(result.chord.inversion, 1);
        assert_eq!(result.chord.interval_at(7).unwrap().to_string(), "m7");
    }

    #[test]
    fn test_cadential_six_four_follows_mode() {
        let result = parse_one("C:Cad64");
        assert_eq!(result.chord.root.unwrap().to_string(), "C");
        assert_eq!(result.chord.triad_quality, Some(TriadQuality::Major));
        assert_eq!(result.chord.inversion, 2);
        assert_eq!(result.chord.bass_degree, Some(5));

        let result = parse_one("a:Cad");
        assert_eq!(result.chord.root.unwrap().to_string(), "A");
        assert_eq!(result.chord.triad_quality, Some(TriadQuality::Minor));
    }

    #[test]
    fn test_common_tone_diminished() {
        let result = parse_one("C:CTo7");
        assert_eq!(result.chord.root.unwrap().to_string(), "C");
        assert_eq!(result.chord.interval_at(7).unwrap().to_string(), "D7");
        assert_eq!(
            result.chord.default_function.unwrap().to_string(),
            "subdominant"
        );
    }

    #[test]
    fn test_tristan_is_name_only() {
        let result = parse_one("C:Tr");
        assert_eq!(result.chord.special, Some(SpecialChord::Tristan));
        assert_eq!(result.chord.root, None);
        assert_eq!(result.chord.intervals().count(), 0);
    }

    #[test]
    fn test_descriptive_by_letter() {
        let result = parse_one("e#m3D5m7");
        let chord = &result.chord;
        assert_eq!(chord.root.unwrap().to_string(), "E#");
        assert_eq!(chord.interval_at(3).unwrap().to_string(), "m3");
        assert_eq!(chord.interval_at(5).unwrap().to_string(), "D5");
        assert_eq!(chord.interval_at(7).unwrap().to_string(), "m7");
        assert_eq!(chord.scale_degree, None);
    }

    #[test]
    fn test_descriptive_by_degree() {
        let result = parse_one("iiM3P5");
        assert_eq!(result.chord.root.unwrap().to_string(), "D");
        assert_eq!(result.chord.interval_at(3).unwrap().to_string(), "M3");
        assert_eq!(result.chord.triad_quality, None);
    }

    #[test]
    fn test_inline_established_key() {
        let mut context = AnalysisContext::new();
        let result = parse_with_context("f:i[d=>:i]", &mut context).unwrap();
        assert_eq!(result.main_key.to_string(), "F harmonic_minor");
        assert_eq!(context.established_key().to_string(), "D harmonic_minor");
    }

    #[test]
    fn test_parse_errors() {
        let mut context = AnalysisContext::new();
        for query in [
            "", "C:", "C:VIII", "H:I", "C:I99", "C:V7/", "C:###I", "C:Iq", "x", "C:V7 ",
        ] {
            assert!(
                parse_with_context(query, &mut context).is_err(),
                "expected {:?} to fail",
                query
            );
        }
    }

    #[test]
    fn test_boundary_errors() {
        let mut context = AnalysisContext::new();
        // Removing an out-of-bounds interval position
        let result = parse_with_context("C:V7x16", &mut context);
        assert_eq!(
            result,
            Err(HarmalysisError::IntervalIndexOutOfBounds { position: 16 })
        );
        let result = parse_with_context("C:V7x1", &mut context);
        assert_eq!(
            result,
            Err(HarmalysisError::IntervalIndexOutOfBounds { position: 1 })
        );
    }
}
