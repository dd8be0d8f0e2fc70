// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord definitions from chord names.
//!
//! The top of the pipeline: a chord name is parsed, spelled into notes,
//! voiced on the fretboard (relaxing constraints if needed), ranked, and
//! projected into display-ready fingerings.
//!
//! ```
//! use fretgen::generate_chord;
//!
//! let am = generate_chord("Am", 5).unwrap();
//! assert_eq!(am.fingerings[0].to_string(), "x02210");
//! ```

pub mod parser;

pub use parser::{parse_chord_name, ParsedChord};

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::fretboard::{format_frets, Fretboard, Frets};
use crate::music::{chord_notes, Note};
use crate::scoring::{rank_voicings, ScoredVoicing, DEFAULT_RANK_LIMIT};
use crate::voicing::{
    detect_barres, BarrePosition, GeneratorConstraints, VoicingCandidate, VoicingGenerator,
};

/// How hard a fingering is to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Classify a voicing.
    ///
    /// Wide stretches and high positions are advanced; open-position shapes
    /// with a small span and at least one open string are beginner.
    pub fn of(candidate: &VoicingCandidate) -> Self {
        if candidate.fret_span >= 5 || candidate.base_fret >= 8 {
            Difficulty::Advanced
        } else if candidate.open_strings() > 0
            && candidate.base_fret <= 3
            && candidate.fret_span <= 3
        {
            Difficulty::Beginner
        } else {
            Difficulty::Intermediate
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ranked voicing ready for a chord diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordFingering {
    /// Fret per string, low string first (`None` = muted)
    pub frets: Frets,
    pub barres: Vec<BarrePosition>,
    /// Set when the diagram starts above the nut
    pub base_fret: Option<u8>,
    pub difficulty: Difficulty,
    /// Total score the ranking used
    pub score: i32,
}

impl ChordFingering {
    pub fn from_scored(scored: &ScoredVoicing) -> Self {
        let candidate = &scored.candidate;
        Self {
            frets: candidate.frets,
            barres: detect_barres(&candidate.frets),
            base_fret: (candidate.base_fret > 1).then_some(candidate.base_fret),
            difficulty: Difficulty::of(candidate),
            score: scored.score.total(),
        }
    }
}

impl fmt::Display for ChordFingering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_frets(&self.frets))
    }
}

/// A chord with its notes and best fingerings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordDefinition {
    /// Name as the user spelled it
    pub name: String,
    pub root: Note,
    /// Canonical quality name
    pub quality: String,
    /// Chord tones, root first
    pub notes: Vec<Note>,
    /// Best first
    pub fingerings: Vec<ChordFingering>,
}

/// The chord pipeline bound to a fretboard and constraint set
#[derive(Debug, Clone)]
pub struct ChordEngine {
    generator: VoicingGenerator,
    constraints: GeneratorConstraints,
    max_voicings: usize,
}

impl Default for ChordEngine {
    fn default() -> Self {
        Self::new(
            Fretboard::standard(),
            GeneratorConstraints::default(),
            DEFAULT_RANK_LIMIT,
        )
    }
}

impl ChordEngine {
    pub fn new(
        fretboard: Fretboard,
        constraints: GeneratorConstraints,
        max_voicings: usize,
    ) -> Self {
        Self {
            generator: VoicingGenerator::new(fretboard),
            constraints,
            max_voicings,
        }
    }

    /// Build an engine from a validated configuration
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            Fretboard::new(config.tuning),
            config.constraints,
            config.max_voicings,
        ))
    }

    pub fn fretboard(&self) -> &Fretboard {
        self.generator.fretboard()
    }

    pub fn constraints(&self) -> &GeneratorConstraints {
        &self.constraints
    }

    /// Fingerings kept by [`ChordEngine::define`]
    pub fn max_voicings(&self) -> usize {
        self.max_voicings
    }

    /// Define a chord with the engine's own voicing count
    pub fn define(&self, name: &str) -> Option<ChordDefinition> {
        self.generate(name, self.max_voicings)
    }

    /// Parse `name`, voice it and keep the best `max_voicings` fingerings.
    ///
    /// Returns `None` for blank names, unknown formulas, or when no voicing
    /// exists even with every constraint relaxed.
    pub fn generate(&self, name: &str, max_voicings: usize) -> Option<ChordDefinition> {
        let parsed = parse_chord_name(name)?;
        let notes = chord_notes(parsed.root, &parsed.quality);
        if notes.is_empty() {
            debug!(chord = name, quality = %parsed.quality, "no formula for quality");
            return None;
        }

        let outcome = self
            .generator
            .generate_with_fallback(&notes, parsed.root, &self.constraints);
        if outcome.voicings.is_empty() {
            warn!(
                chord = %parsed.display,
                "no playable voicing after relaxing every constraint"
            );
            return None;
        }
        if let Some(step) = outcome.relaxation {
            debug!(chord = %parsed.display, ?step, "voiced with relaxed constraints");
        }

        let fingerings = rank_voicings(&outcome.voicings, &notes, max_voicings)
            .iter()
            .map(ChordFingering::from_scored)
            .collect();

        Some(ChordDefinition {
            name: parsed.display,
            root: parsed.root,
            quality: parsed.quality,
            notes,
            fingerings,
        })
    }

    /// Whether `name` parses to a chord with a known formula.
    ///
    /// No voicing search is run, so a chord this engine's constraints
    /// cannot voice still counts.
    pub fn can_generate(&self, name: &str) -> bool {
        can_generate_chord(name)
    }
}

/// Define a chord on a standard-tuned guitar with default constraints
pub fn generate_chord(name: &str, max_voicings: usize) -> Option<ChordDefinition> {
    ChordEngine::default().generate(name, max_voicings)
}

/// Whether `name` parses to a chord with a known formula
pub fn can_generate_chord(name: &str) -> bool {
    parse_chord_name(name).map_or(false, |parsed| {
        !chord_notes(parsed.root, &parsed.quality).is_empty()
    })
}
