// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note-to-position lookup table.
//!
//! The standard-tuning table is built once per process on first use and is
//! read-only afterwards. Other tables can be built on demand.

use std::sync::OnceLock;

use tracing::debug;

use super::{FretPosition, Fretboard, MAX_FRET, STRING_COUNT};
use crate::music::Note;

static STANDARD_POSITIONS: OnceLock<PositionMap> = OnceLock::new();

/// Shared position table for standard tuning, frets 0 through [`MAX_FRET`]
pub fn standard_positions() -> &'static PositionMap {
    STANDARD_POSITIONS.get_or_init(|| {
        let map = PositionMap::build(&Fretboard::standard(), MAX_FRET);
        debug!(positions = map.len(), "built standard fretboard position map");
        map
    })
}

/// Every position of every note on a fretboard, grouped by pitch class
#[derive(Debug, Clone, PartialEq)]
pub struct PositionMap {
    max_fret: u8,
    by_note: [Vec<FretPosition>; 12],
}

impl PositionMap {
    /// Scan every string and fret up to `max_fret`
    pub fn build(fretboard: &Fretboard, max_fret: u8) -> Self {
        let mut by_note: [Vec<FretPosition>; 12] = Default::default();
        for string in 0..STRING_COUNT {
            for fret in 0..=max_fret {
                let note = fretboard.note_at(string, fret);
                by_note[note.pitch_class() as usize].push(FretPosition { string, fret, note });
            }
        }
        Self { max_fret, by_note }
    }

    /// Positions of a note, ordered by string then fret
    pub fn positions(&self, note: Note) -> &[FretPosition] {
        &self.by_note[note.pitch_class() as usize]
    }

    /// Highest fret covered
    pub fn max_fret(&self) -> u8 {
        self.max_fret
    }

    /// Total number of positions in the table
    pub fn len(&self) -> usize {
        self.by_note.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
