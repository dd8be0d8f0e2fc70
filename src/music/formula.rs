// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord formulas and quality aliases.
//!
//! A chord quality is a fixed list of semitone offsets from the root. Quality
//! spellings ("m", "min", "-") resolve to a canonical formula name through a
//! single alias table, so adding a quality never touches lookup code.

use std::fmt;

use super::note::{Note, Semitones};

/// Interval sizes used to classify chord tones
pub const MINOR_THIRD: u8 = 3;
pub const MAJOR_THIRD: u8 = 4;
pub const PERFECT_FIFTH: u8 = 7;

/// A named chord quality and its intervals (semitones from root)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordFormula {
    /// Canonical quality name
    pub name: &'static str,
    /// Offsets from the root, root (0) first
    pub intervals: &'static [u8],
}

impl ChordFormula {
    /// Look up a formula by any known quality spelling
    pub fn lookup(quality: &str) -> Option<&'static ChordFormula> {
        let name = normalize_quality(quality)?;
        FORMULAS.iter().find(|f| f.name == name)
    }

    /// Whether the formula contains a minor or major third
    pub fn has_third(&self) -> bool {
        self.intervals
            .iter()
            .any(|&i| is_third(i % 12))
    }

    /// Notes of this chord built on `root`, duplicates removed
    pub fn notes(&self, root: Note) -> Vec<Note> {
        let mut notes: Vec<Note> = Vec::with_capacity(self.intervals.len());
        for &interval in self.intervals {
            let note = root.transpose(interval as Semitones);
            if !notes.contains(&note) {
                notes.push(note);
            }
        }
        notes
    }
}

impl fmt::Display for ChordFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Whether an interval (already reduced modulo 12) is a third
pub fn is_third(interval: u8) -> bool {
    interval == MINOR_THIRD || interval == MAJOR_THIRD
}

/// Built-in chord formulas
pub static FORMULAS: &[ChordFormula] = &[
    // Triads
    ChordFormula {
        name: "major",
        intervals: &[0, 4, 7],
    },
    ChordFormula {
        name: "minor",
        intervals: &[0, 3, 7],
    },
    ChordFormula {
        name: "5",
        intervals: &[0, 7],
    },
    ChordFormula {
        name: "dim",
        intervals: &[0, 3, 6],
    },
    ChordFormula {
        name: "aug",
        intervals: &[0, 4, 8],
    },
    ChordFormula {
        name: "sus2",
        intervals: &[0, 2, 7],
    },
    ChordFormula {
        name: "sus4",
        intervals: &[0, 5, 7],
    },
    // Sixths
    ChordFormula {
        name: "6",
        intervals: &[0, 4, 7, 9],
    },
    ChordFormula {
        name: "m6",
        intervals: &[0, 3, 7, 9],
    },
    // Sevenths
    ChordFormula {
        name: "7",
        intervals: &[0, 4, 7, 10],
    },
    ChordFormula {
        name: "maj7",
        intervals: &[0, 4, 7, 11],
    },
    ChordFormula {
        name: "m7",
        intervals: &[0, 3, 7, 10],
    },
    ChordFormula {
        name: "mmaj7",
        intervals: &[0, 3, 7, 11],
    },
    ChordFormula {
        name: "dim7",
        intervals: &[0, 3, 6, 9],
    },
    ChordFormula {
        name: "m7b5",
        intervals: &[0, 3, 6, 10],
    },
    ChordFormula {
        name: "aug7",
        intervals: &[0, 4, 8, 10],
    },
    ChordFormula {
        name: "7sus4",
        intervals: &[0, 5, 7, 10],
    },
    // Extended
    ChordFormula {
        name: "add9",
        intervals: &[0, 4, 7, 14],
    },
    ChordFormula {
        name: "9",
        intervals: &[0, 4, 7, 10, 14],
    },
    ChordFormula {
        name: "maj9",
        intervals: &[0, 4, 7, 11, 14],
    },
    ChordFormula {
        name: "m9",
        intervals: &[0, 3, 7, 10, 14],
    },
    ChordFormula {
        name: "11",
        intervals: &[0, 4, 7, 10, 14, 17],
    },
    ChordFormula {
        name: "13",
        intervals: &[0, 4, 7, 10, 14, 21],
    },
];

/// Quality spellings mapped to canonical formula names
static ALIASES: &[(&str, &str)] = &[
    ("", "major"),
    ("M", "major"),
    ("maj", "major"),
    ("major", "major"),
    ("m", "minor"),
    ("min", "minor"),
    ("minor", "minor"),
    ("-", "minor"),
    ("5", "5"),
    ("dim", "dim"),
    ("o", "dim"),
    ("°", "dim"),
    ("aug", "aug"),
    ("+", "aug"),
    ("sus2", "sus2"),
    ("sus", "sus4"),
    ("sus4", "sus4"),
    ("6", "6"),
    ("m6", "m6"),
    ("min6", "m6"),
    ("7", "7"),
    ("dom7", "7"),
    ("maj7", "maj7"),
    ("M7", "maj7"),
    ("ma7", "maj7"),
    ("Δ", "maj7"),
    ("Δ7", "maj7"),
    ("m7", "m7"),
    ("min7", "m7"),
    ("-7", "m7"),
    ("mmaj7", "mmaj7"),
    ("mM7", "mmaj7"),
    ("m(maj7)", "mmaj7"),
    ("minmaj7", "mmaj7"),
    ("dim7", "dim7"),
    ("o7", "dim7"),
    ("°7", "dim7"),
    ("m7b5", "m7b5"),
    ("min7b5", "m7b5"),
    ("-7b5", "m7b5"),
    ("ø", "m7b5"),
    ("ø7", "m7b5"),
    ("aug7", "aug7"),
    ("+7", "aug7"),
    ("7#5", "aug7"),
    ("7sus4", "7sus4"),
    ("7sus", "7sus4"),
    ("add9", "add9"),
    ("add2", "add9"),
    ("9", "9"),
    ("maj9", "maj9"),
    ("M9", "maj9"),
    ("m9", "m9"),
    ("min9", "m9"),
    ("11", "11"),
    ("13", "13"),
];

/// Resolve a quality spelling to its canonical formula name.
///
/// Exact matches win. Aliases of three or more characters also match
/// case-insensitively ("Maj7", "MIN"), which keeps "M" and "m" distinct.
pub fn normalize_quality(quality: &str) -> Option<&'static str> {
    let quality = quality.trim();
    if let Some((_, name)) = ALIASES.iter().find(|(alias, _)| *alias == quality) {
        return Some(*name);
    }
    ALIASES
        .iter()
        .find(|(alias, _)| alias.chars().count() >= 3 && alias.eq_ignore_ascii_case(quality))
        .map(|(_, name)| *name)
}

/// Notes of a chord, root first. Empty if the quality is unknown.
pub fn chord_notes(root: Note, quality: &str) -> Vec<Note> {
    ChordFormula::lookup(quality)
        .map(|formula| formula.notes(root))
        .unwrap_or_default()
}
