// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Voicing scorer and ranker.
//!
//! A voicing is scored on five independent components:
//! - playability (0-30): compact span, open strings, low position, no awkward stretches
//! - voice leading (-15 to 30): root in the bass, third present, fifth present
//! - ergonomics (0-20): resemblance to familiar shapes, clean muting
//! - completeness (2-25): share of the chord's pitch classes that sound
//! - sonority (0-10): how many strings sound and how widely they spread
//!
//! The total is always the sum of the components.

pub mod rank;
pub mod shapes;

pub use rank::{best_voicing, rank_voicings, ScoredVoicing, DEFAULT_RANK_LIMIT};
pub use shapes::{closest_shape, CanonicalShape, StringRole, CANONICAL_SHAPES};

use std::fmt;

use serde::Serialize;

use crate::fretboard::{Frets, STRING_COUNT};
use crate::music::Note;
use crate::voicing::VoicingCandidate;

/// Per-component scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScoreBreakdown {
    pub playability: i32,
    pub voice_leading: i32,
    pub ergonomics: i32,
    pub completeness: i32,
    pub sonority: i32,
}

impl ScoreBreakdown {
    /// Sum of all components
    pub fn sum(&self) -> i32 {
        self.playability + self.voice_leading + self.ergonomics + self.completeness + self.sonority
    }
}

/// A voicing's score. The total is derived from the breakdown and cannot
/// drift from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoicingScore {
    total: i32,
    breakdown: ScoreBreakdown,
}

impl VoicingScore {
    pub fn new(breakdown: ScoreBreakdown) -> Self {
        Self {
            total: breakdown.sum(),
            breakdown,
        }
    }

    pub fn total(&self) -> i32 {
        self.total
    }

    pub fn breakdown(&self) -> &ScoreBreakdown {
        &self.breakdown
    }
}

impl fmt::Display for VoicingScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.breakdown;
        write!(
            f,
            "{} (play {}, lead {}, ergo {}, complete {}, sonority {})",
            self.total, b.playability, b.voice_leading, b.ergonomics, b.completeness, b.sonority
        )
    }
}

/// Score a voicing of `chord_notes`. The first chord note is the root.
pub fn score_voicing(candidate: &VoicingCandidate, chord_notes: &[Note]) -> VoicingScore {
    VoicingScore::new(ScoreBreakdown {
        playability: playability_score(candidate),
        voice_leading: voice_leading_score(candidate, chord_notes.first().copied()),
        ergonomics: ergonomics_score(&candidate.frets),
        completeness: completeness_score(candidate, chord_notes),
        sonority: sonority_score(candidate),
    })
}

/// Span, open strings and low position, less stretch difficulty. 0-30.
pub fn playability_score(candidate: &VoicingCandidate) -> i32 {
    let span = match candidate.fret_span {
        0..=2 => 15,
        3 => 10,
        4 => 5,
        _ => 0,
    };
    let open = (candidate.open_strings() as i32 * 2).min(6);
    let position = match candidate.base_fret {
        0..=3 => 6,
        4..=5 => 4,
        6..=7 => 2,
        _ => 0,
    };

    (span + open + position - stretch_penalty(&candidate.frets)).clamp(0, 30)
}

/// Penalty for large fret jumps between nearby fretted strings. 0-6.
pub fn stretch_penalty(frets: &Frets) -> i32 {
    let mut penalty = 0;
    for low in 0..STRING_COUNT {
        let Some(low_fret) = frets[low].filter(|&f| f > 0) else {
            continue;
        };
        for high in (low + 1)..STRING_COUNT.min(low + 3) {
            let Some(high_fret) = frets[high].filter(|&f| f > 0) else {
                continue;
            };
            let delta = low_fret.abs_diff(high_fret);
            penalty += match high - low {
                1 if delta >= 3 => 2,
                2 if delta >= 4 => 1,
                _ => 0,
            };
        }
    }
    penalty.min(6)
}

/// Root placement, third and fifth
pub fn voice_leading_score(candidate: &VoicingCandidate, root: Option<Note>) -> i32 {
    let root_score = if candidate.has_root && root.is_some() && candidate.bass_note == root {
        15
    } else if candidate.has_root {
        8
    } else {
        0
    };
    let third = if candidate.has_third { 10 } else { -15 };
    let fifth = if candidate.has_fifth { 5 } else { 0 };

    root_score + third + fifth
}

/// Familiar shape, no skipped strings, muting confined to the bass. 0-20.
pub fn ergonomics_score(frets: &Frets) -> i32 {
    let (_, matches) = closest_shape(frets);
    let shape = (matches as i32 * 2).min(12);

    let skip = if has_string_skip(frets) { 0 } else { 5 };

    let muted: Vec<usize> = (0..STRING_COUNT).filter(|&s| frets[s].is_none()).collect();
    let bass_muting = !muted.is_empty()
        && muted.iter().all(|&s| s < 2)
        && frets[2..4].iter().all(Option::is_some);
    let muting = if bass_muting { 3 } else { 0 };

    (shape + skip + muting).clamp(0, 20)
}

/// Whether a muted string sits directly between two sounding strings
pub fn has_string_skip(frets: &Frets) -> bool {
    frets
        .windows(3)
        .any(|w| w[0].is_some() && w[1].is_none() && w[2].is_some())
}

/// Tiered share of the chord's pitch classes that sound
pub fn completeness_score(candidate: &VoicingCandidate, chord_notes: &[Note]) -> i32 {
    let mut distinct: Vec<Note> = chord_notes.to_vec();
    distinct.sort();
    distinct.dedup();

    let total = distinct.len();
    let covered = distinct
        .iter()
        .filter(|n| candidate.notes_played.contains(*n))
        .count();

    if covered == total {
        25
    } else if covered * 5 >= total * 4 {
        15
    } else if covered * 5 >= total * 3 {
        8
    } else {
        2
    }
}

/// Sounding strings and their spread across the neck. 0-10.
pub fn sonority_score(candidate: &VoicingCandidate) -> i32 {
    let played = match candidate.played_strings {
        0..=2 => 0,
        3 => 2,
        4 => 4,
        _ => 5,
    };

    let spread = match (candidate.first_played_string(), candidate.last_played_string()) {
        (Some(first), Some(last)) => last - first + 1,
        _ => 0,
    };
    let spread = match spread {
        0..=2 => 0,
        3 => 2,
        4 => 3,
        _ => 5,
    };

    played + spread
}
