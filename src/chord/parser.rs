// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord name parsing.
//!
//! Grammar: an optional root letter `A`-`G`, an optional accidental
//! (`#`, `b`, `♯`, `♭`), then a quality suffix. Parsing is best-effort:
//! anything that is not blank yields a chord.
//!
//! ```
//! use fretgen::{parse_chord_name, Note};
//!
//! let chord = parse_chord_name("Bb7sus4").unwrap();
//! assert_eq!(chord.root, Note::As);
//! assert_eq!(chord.quality, "7sus4");
//! assert_eq!(chord.display, "Bb7sus4");
//! ```

use serde::Serialize;

use crate::music::{normalize_quality, Note};

/// Root and quality read from a chord name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedChord {
    /// Root, sharp-spelled
    pub root: Note,
    /// Canonical quality name (a key of the formula table)
    pub quality: String,
    /// The name as the user spelled it, trimmed
    pub display: String,
}

/// Parse a chord name. Returns `None` only for blank input.
pub fn parse_chord_name(input: &str) -> Option<ParsedChord> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let mut chars = input.char_indices().peekable();
    let mut root = Note::C;
    let mut root_text = String::new();
    let mut suffix_start = 0;

    if let Some(&(_, letter)) = chars.peek() {
        if let Some(natural) = root_letter(letter) {
            chars.next();
            root = natural;
            root_text.push(letter.to_ascii_uppercase());
            suffix_start = letter.len_utf8();

            if let Some(&(idx, accidental)) = chars.peek() {
                let shift = match accidental {
                    '#' | '♯' => Some(1),
                    'b' | '♭' => Some(-1),
                    _ => None,
                };
                if let Some(shift) = shift {
                    root = root.transpose(shift);
                    root_text.push(if shift > 0 { '#' } else { 'b' });
                    suffix_start = idx + accidental.len_utf8();
                }
            }
        }
    }

    // Without a root letter the root stays C and everything is the quality
    let suffix = input[suffix_start..].trim();
    let display = if root_text.is_empty() {
        input.to_string()
    } else {
        format!("{}{}", root_text, suffix)
    };

    Some(ParsedChord {
        root,
        quality: resolve_quality(suffix).to_string(),
        display,
    })
}

fn root_letter(c: char) -> Option<Note> {
    match c.to_ascii_uppercase() {
        'C' => Some(Note::C),
        'D' => Some(Note::D),
        'E' => Some(Note::E),
        'F' => Some(Note::F),
        'G' => Some(Note::G),
        'A' => Some(Note::A),
        'B' => Some(Note::B),
        _ => None,
    }
}

/// Map a quality suffix to a known formula name, falling back to
/// major/minor when nothing matches.
fn resolve_quality(suffix: &str) -> &'static str {
    if let Some(name) = normalize_quality(suffix) {
        return name;
    }

    // Slash chords: the bass note does not change the formula
    let without_bass = suffix.split('/').next().unwrap_or(suffix);
    if let Some(name) = normalize_quality(without_bass) {
        return name;
    }

    let compact: String = without_bass
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | ' '))
        .collect();
    if let Some(name) = normalize_quality(&compact) {
        return name;
    }

    if compact.contains('m') && !compact.to_ascii_lowercase().contains("maj") {
        "minor"
    } else {
        "major"
    }
}
