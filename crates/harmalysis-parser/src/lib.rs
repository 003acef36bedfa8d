//! Parsers and public facade for Harmalysis
//!
//! Two grammars live here: the full Roman-numeral language and the small
//! chord-label sublanguage the analyzer round-trips its own output
//! through. [`parse`] dispatches between them.

pub mod chordlabel;
pub mod context;
pub mod roman;

pub use context::{shared_context, AnalysisContext};

use harmalysis_core::{Harmalysis, HarmalysisResult};

/// Which grammar to parse a query with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// The Roman-numeral harmonic-analysis language
    Roman,
    /// The `<root> <quality>` chord-label sublanguage
    ChordLabel,
}

/// A parsed query: a resolved analysis or a normalized chord label.
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    Roman(Harmalysis),
    ChordLabel(String),
}

/// Parse a query with the selected grammar.
///
/// Roman queries resolve against the process-wide analyzer context; use
/// [`roman::parse_with_context`] to isolate sessions.
pub fn parse(query: &str, syntax: Syntax) -> HarmalysisResult<Analysis> {
    match syntax {
        Syntax::Roman => Ok(Analysis::Roman(roman::parse(query)?)),
        Syntax::ChordLabel => Ok(Analysis::ChordLabel(chordlabel::parse(query)?)),
    }
}
