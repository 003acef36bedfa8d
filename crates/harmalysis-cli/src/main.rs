//! Interactive Roman-numeral analysis REPL
//!
//! Reads harmalysis lines from standard input until EOF and prints the
//! resolved fields of each. Parse and resolution failures of any kind
//! collapse into a single retry message; structured errors are for
//! library callers.

use std::io::{self, BufRead, Write};

use harmalysis_config::DEFAULTS;
use harmalysis_core::Harmalysis;
use harmalysis_parser::{chordlabel, roman};
use log::debug;

fn main() {
    env_logger::init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(_)) | None => break,
        };
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        match roman::parse(query) {
            Ok(resolved) => print_resolved(&resolved),
            Err(error) => {
                debug!("rejected {:?}: {}", query, error);
                println!("{}", DEFAULTS.invalid_entry_message);
            }
        }
    }
}

fn print_resolved(resolved: &Harmalysis) {
    println!("\tMain key: {}", resolved.main_key);
    match &resolved.secondary_key {
        Some(key) => println!("\tSecondary key: {}", key),
        None => println!("\tSecondary key: -"),
    }
    println!("\tIntervallic construction: {}", resolved.chord);
    println!("\tInversion: {}", resolved.chord.inversion);
    println!("\tChord label: {}", chord_label(resolved));
    match resolved.chord.default_function {
        Some(function) => println!("\tDefault function: {}", function),
        None => println!("\tDefault function: -"),
    }
    match resolved.chord.contextual_function {
        Some(function) => println!("\tContextual function: {}", function),
        None => println!("\tContextual function: -"),
    }
}

/// The chord label, round-tripped through the chord-label grammar.
fn chord_label(resolved: &Harmalysis) -> String {
    let Some(label) = resolved.chord.label() else {
        return "-".to_string();
    };
    match chordlabel::parse(&label) {
        Ok(normalized) => normalized,
        Err(error) => {
            debug!("label {:?} failed to round-trip: {}", label, error);
            label
        }
    }
}
