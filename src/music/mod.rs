// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory utilities for fretgen.
//!
//! This module provides pitch-class arithmetic and the chord formula table
//! that the fretboard and voicing layers are built on.

pub mod formula;
pub mod note;

pub use formula::{chord_notes, normalize_quality, ChordFormula};
pub use note::{note_index, transpose_note, Note, Semitones};
