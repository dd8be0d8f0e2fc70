// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Canonical open-position chord shapes.
//!
//! Shapes are compared by what each string does (muted, open or fretted),
//! not by absolute fret, so a voicing that moves like a familiar open
//! chord scores as familiar.

use crate::fretboard::{Frets, STRING_COUNT};

/// What a single string does in a voicing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringRole {
    Muted,
    Open,
    Fretted,
}

impl StringRole {
    fn of(fret: Option<u8>) -> Self {
        match fret {
            None => StringRole::Muted,
            Some(0) => StringRole::Open,
            Some(_) => StringRole::Fretted,
        }
    }
}

/// A well-known chord shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalShape {
    pub name: &'static str,
    pub frets: Frets,
}

impl CanonicalShape {
    /// Number of strings whose role matches `frets`
    pub fn matching_strings(&self, frets: &Frets) -> usize {
        string_roles(&self.frets)
            .iter()
            .zip(string_roles(frets).iter())
            .filter(|(a, b)| a == b)
            .count()
    }
}

pub static CANONICAL_SHAPES: [CanonicalShape; 8] = [
    CanonicalShape {
        name: "E",
        frets: [Some(0), Some(2), Some(2), Some(1), Some(0), Some(0)],
    },
    CanonicalShape {
        name: "A",
        frets: [None, Some(0), Some(2), Some(2), Some(2), Some(0)],
    },
    CanonicalShape {
        name: "C",
        frets: [None, Some(3), Some(2), Some(0), Some(1), Some(0)],
    },
    CanonicalShape {
        name: "G",
        frets: [Some(3), Some(2), Some(0), Some(0), Some(0), Some(3)],
    },
    CanonicalShape {
        name: "D",
        frets: [None, None, Some(0), Some(2), Some(3), Some(2)],
    },
    CanonicalShape {
        name: "Am",
        frets: [None, Some(0), Some(2), Some(2), Some(1), Some(0)],
    },
    CanonicalShape {
        name: "Em",
        frets: [Some(0), Some(2), Some(2), Some(0), Some(0), Some(0)],
    },
    CanonicalShape {
        name: "Dm",
        frets: [None, None, Some(0), Some(2), Some(3), Some(1)],
    },
];

/// Role of every string
pub fn string_roles(frets: &Frets) -> [StringRole; STRING_COUNT] {
    frets.map(StringRole::of)
}

/// The canonical shape sharing the most string roles with `frets`.
/// Ties go to the shape listed first.
pub fn closest_shape(frets: &Frets) -> (&'static CanonicalShape, usize) {
    let mut best = (&CANONICAL_SHAPES[0], CANONICAL_SHAPES[0].matching_strings(frets));
    for shape in CANONICAL_SHAPES.iter().skip(1) {
        let matches = shape.matching_strings(frets);
        if matches > best.1 {
            best = (shape, matches);
        }
    }
    best
}
