// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Guitar chord voicing engine.
//!
//! Turns a chord name into ranked, playable fingerings for a six-string
//! guitar:
//!
//! - [`music`]: pitch classes, chord formulas and quality aliases
//! - [`fretboard`]: tunings, note positions and fret-assignment queries
//! - [`voicing`]: constraint-driven voicing search with a relaxation ladder
//! - [`scoring`]: multi-factor voicing scores and top-N ranking
//! - [`chord`]: name parsing and the [`generate_chord`] facade
//! - [`config`]: YAML/TOML engine configuration
//!
//! ```
//! use fretgen::generate_chord;
//!
//! let e = generate_chord("E", 3).unwrap();
//! assert_eq!(e.fingerings[0].to_string(), "022100");
//! ```

pub mod chord;
pub mod config;
pub mod error;
pub mod fretboard;
pub mod music;
pub mod scoring;
pub mod voicing;

pub use chord::{
    can_generate_chord, generate_chord, parse_chord_name, ChordDefinition, ChordEngine,
    ChordFingering, Difficulty, ParsedChord,
};
pub use config::EngineConfig;
pub use error::ConfigError;
pub use fretboard::{Fretboard, Frets, Tuning};
pub use music::{chord_notes, note_index, transpose_note, Note};
pub use scoring::{best_voicing, rank_voicings, score_voicing, ScoredVoicing, VoicingScore};
pub use voicing::{
    detect_barres, generate_voicings, generate_voicings_with_fallback, BarrePosition,
    GeneratorConstraints, VoicingCandidate,
};
