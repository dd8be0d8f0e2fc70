// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Fretboard model for a tuned six-string instrument.
//!
//! Maps the pitch-class model onto strings and frets:
//! - note lookup at a position, and the reverse (all positions of a note)
//! - per-string chord-tone positions used by the voicing search
//! - derived queries over a complete fret assignment (span, bass note,
//!   base fret, played and muted string counts)
//!
//! String 0 is the lowest-pitched string. A fret assignment is a
//! [`Frets`] array where `None` marks a muted string and `Some(0)` an
//! open one.

pub mod cache;

pub use cache::{standard_positions, PositionMap};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::music::{Note, Semitones};

/// Number of strings on the instrument
pub const STRING_COUNT: usize = 6;

/// Highest fret on the instrument
pub const MAX_FRET: u8 = 24;

/// Default largest playable stretch between fretted positions
pub const DEFAULT_MAX_SPAN: u8 = 4;

/// One fret per string, low string first. `None` is a muted string.
pub type Frets = [Option<u8>; STRING_COUNT];

/// Open-string notes, low string first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tuning {
    strings: [Note; STRING_COUNT],
}

impl Tuning {
    /// Standard tuning, E-A-D-G-B-E
    pub const STANDARD: Tuning = Tuning {
        strings: [Note::E, Note::A, Note::D, Note::G, Note::B, Note::E],
    };

    /// Create a tuning from open-string notes
    pub fn new(strings: [Note; STRING_COUNT]) -> Self {
        Self { strings }
    }

    /// Create a tuning from a slice, which must have one note per string
    pub fn from_notes(notes: &[Note]) -> Result<Self, ConfigError> {
        let strings: [Note; STRING_COUNT] =
            notes.try_into().map_err(|_| ConfigError::InvalidTuning {
                expected: STRING_COUNT,
                got: notes.len(),
            })?;
        Ok(Self { strings })
    }

    /// Parse a tuning from note names (e.g., `["D", "A", "D", "G", "A", "D"]`)
    pub fn parse(names: &[&str]) -> Result<Self, ConfigError> {
        let notes = names
            .iter()
            .map(|name| Note::parse(name).ok_or_else(|| ConfigError::UnknownNote(name.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_notes(&notes)
    }

    /// Open note of a string
    pub fn open_note(&self, string: usize) -> Note {
        self.strings[string]
    }

    /// All open-string notes
    pub fn strings(&self) -> &[Note; STRING_COUNT] {
        &self.strings
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::STANDARD
    }
}

impl fmt::Display for Tuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.strings.iter().map(|n| n.name()).collect();
        write!(f, "{}", names.join(" "))
    }
}

/// A physical location on the fretboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FretPosition {
    /// String index (0 = lowest)
    pub string: usize,
    /// Fret number (0 = open)
    pub fret: u8,
    /// Note sounded at this position
    pub note: Note,
}

/// A tuned fretboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fretboard {
    tuning: Tuning,
}

impl Fretboard {
    /// Create a fretboard with the given tuning
    pub fn new(tuning: Tuning) -> Self {
        Self { tuning }
    }

    /// Fretboard in standard tuning
    pub fn standard() -> Self {
        Self::new(Tuning::STANDARD)
    }

    /// Get the tuning
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Note sounded by `string` stopped at `fret`
    pub fn note_at(&self, string: usize, fret: u8) -> Note {
        self.tuning.open_note(string).transpose(fret as Semitones)
    }

    /// Every position up to `max_fret` that sounds `note`, string by string.
    ///
    /// Standard tuning is answered from the shared position cache.
    pub fn find_note_positions(&self, note: Note, max_fret: u8) -> Vec<FretPosition> {
        if self.tuning == Tuning::STANDARD && max_fret <= MAX_FRET {
            return standard_positions()
                .positions(note)
                .iter()
                .filter(|pos| pos.fret <= max_fret)
                .copied()
                .collect();
        }

        let mut positions = Vec::new();
        for string in 0..STRING_COUNT {
            for fret in 0..=max_fret {
                if self.note_at(string, fret) == note {
                    positions.push(FretPosition { string, fret, note });
                }
            }
        }
        positions
    }

    /// Positions on one string, frets ascending, that sound a chord tone
    pub fn chord_positions_on_string(
        &self,
        string: usize,
        chord_notes: &[Note],
        max_fret: u8,
    ) -> Vec<FretPosition> {
        (0..=max_fret)
            .filter_map(|fret| {
                let note = self.note_at(string, fret);
                chord_notes
                    .contains(&note)
                    .then_some(FretPosition { string, fret, note })
            })
            .collect()
    }

    /// Whether the open string already sounds a chord tone
    pub fn is_open_string_chord_tone(&self, string: usize, chord_notes: &[Note]) -> bool {
        chord_notes.contains(&self.tuning.open_note(string))
    }

    /// Note of the lowest sounding string
    pub fn bass_note(&self, frets: &Frets) -> Option<Note> {
        frets
            .iter()
            .enumerate()
            .find_map(|(string, fret)| fret.map(|f| self.note_at(string, f)))
    }

    /// Sounding notes, low string first (duplicates kept)
    pub fn notes_played(&self, frets: &Frets) -> Vec<Note> {
        frets
            .iter()
            .enumerate()
            .filter_map(|(string, fret)| fret.map(|f| self.note_at(string, f)))
            .collect()
    }
}

/// Distance between the lowest and highest fretted positions.
///
/// Open and muted strings are ignored, so fewer than two fretted
/// positions gives 0.
pub fn fret_span(frets: &Frets) -> u8 {
    let mut fretted = frets.iter().flatten().copied().filter(|&f| f > 0);
    let Some(first) = fretted.next() else {
        return 0;
    };
    let (min, max) = fretted.fold((first, first), |(lo, hi), f| (lo.min(f), hi.max(f)));
    max - min
}

/// Whether the fretted positions fit within `max_span` frets
pub fn is_playable(frets: &Frets, max_span: u8) -> bool {
    fret_span(frets) <= max_span
}

pub fn count_played_strings(frets: &Frets) -> usize {
    frets.iter().filter(|f| f.is_some()).count()
}

pub fn count_muted_strings(frets: &Frets) -> usize {
    frets.iter().filter(|f| f.is_none()).count()
}

/// Lowest fretted position, or 1 when every sounding string is open
pub fn base_fret(frets: &Frets) -> u8 {
    frets
        .iter()
        .flatten()
        .copied()
        .filter(|&f| f > 0)
        .min()
        .unwrap_or(1)
}

/// Compact text form, low string first: `x02210`.
///
/// Uses dashes between strings when any fret has two digits: `x-10-12-12-11-x`.
pub fn format_frets(frets: &Frets) -> String {
    let parts: Vec<String> = frets
        .iter()
        .map(|f| match f {
            Some(fret) => fret.to_string(),
            None => "x".to_string(),
        })
        .collect();
    if frets.iter().flatten().any(|&f| f >= 10) {
        parts.join("-")
    } else {
        parts.concat()
    }
}
