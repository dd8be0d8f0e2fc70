// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Voicing search.
//!
//! This module provides the candidate voicing type, the constraint-driven
//! backtracking generator with its relaxation ladder, and barre detection
//! over finished fret assignments.

pub mod barre;
pub mod generator;

pub use barre::{detect_barres, BarrePosition};
pub use generator::{
    generate_voicings, generate_voicings_with_fallback, FallbackOutcome, GeneratorConstraints,
    Relaxation, VoicingGenerator,
};

use serde::Serialize;

use crate::fretboard::{self, Fretboard, Frets};
use crate::music::formula::{is_third, PERFECT_FIFTH};
use crate::music::Note;

/// A complete six-string assignment with its derived attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoicingCandidate {
    /// Fret per string, low string first (`None` = muted)
    pub frets: Frets,
    /// Sounding pitch classes, low string first
    pub notes_played: Vec<Note>,
    /// Note of the lowest sounding string
    pub bass_note: Option<Note>,
    /// Distance between lowest and highest fretted positions
    pub fret_span: u8,
    /// Lowest fretted position, 1 if all sounding strings are open
    pub base_fret: u8,
    pub played_strings: usize,
    pub muted_strings: usize,
    pub has_root: bool,
    pub has_third: bool,
    pub has_fifth: bool,
}

impl VoicingCandidate {
    /// Derive a candidate from a finished fret assignment
    pub fn new(fretboard: &Fretboard, frets: Frets, root: Note) -> Self {
        let notes_played = fretboard.notes_played(&frets);
        let has_root = notes_played.contains(&root);
        let has_third = notes_played.iter().any(|&n| is_third(root.interval_to(n)));
        let has_fifth = notes_played
            .iter()
            .any(|&n| root.interval_to(n) == PERFECT_FIFTH);

        Self {
            bass_note: fretboard.bass_note(&frets),
            fret_span: fretboard::fret_span(&frets),
            base_fret: fretboard::base_fret(&frets),
            played_strings: fretboard::count_played_strings(&frets),
            muted_strings: fretboard::count_muted_strings(&frets),
            frets,
            notes_played,
            has_root,
            has_third,
            has_fifth,
        }
    }

    /// Number of strings played open
    pub fn open_strings(&self) -> usize {
        self.frets.iter().filter(|f| **f == Some(0)).count()
    }

    /// Index of the lowest sounding string
    pub fn first_played_string(&self) -> Option<usize> {
        self.frets.iter().position(Option::is_some)
    }

    /// Index of the highest sounding string
    pub fn last_played_string(&self) -> Option<usize> {
        self.frets.iter().rposition(Option::is_some)
    }

    /// Compact text form of the frets, e.g. `x02210`
    pub fn shape(&self) -> String {
        fretboard::format_frets(&self.frets)
    }
}
