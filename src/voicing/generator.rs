// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Constraint-driven voicing generator.
//!
//! Searches every string/fret assignment depth-first, low string to high.
//! Each string is tried muted first, then at each chord-tone fret in
//! ascending order, so the output order is deterministic. Branches that
//! would exceed the fret-span limit are cut as soon as the offending fret
//! is chosen; everything else is checked once all six strings are assigned.
//!
//! When a constraint set produces nothing, [`Relaxation::LADDER`] loosens it
//! one step at a time until something is found.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::VoicingCandidate;
use crate::fretboard::{Fretboard, Frets, DEFAULT_MAX_SPAN, STRING_COUNT};
use crate::music::Note;

/// Limits a voicing must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConstraints {
    /// Largest distance between fretted (non-open) positions
    pub max_fret_span: u8,
    /// Lowest sounding string must play the root
    pub require_root: bool,
    /// Fewest strings that must sound
    pub min_strings: usize,
    /// Most strings that may be muted
    pub max_muted_strings: usize,
    /// Highest fret the search may use
    pub max_fret: u8,
    /// A minor or major third above the root must sound
    pub require_third: bool,
}

impl Default for GeneratorConstraints {
    fn default() -> Self {
        Self {
            max_fret_span: DEFAULT_MAX_SPAN,
            require_root: true,
            min_strings: 4,
            max_muted_strings: 2,
            max_fret: 12,
            require_third: true,
        }
    }
}

/// One step of the relaxation ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relaxation {
    /// Allow inversions (any chord tone in the bass)
    DropRoot,
    /// Allow up to 3 muted strings and as few as 3 sounding
    AllowMoreMutes,
    /// Allow a 5-fret stretch
    WidenSpan,
    /// Allow voicings without a third
    DropThird,
}

impl Relaxation {
    /// Steps in the order they are applied. Each keeps the previous ones.
    pub const LADDER: [Relaxation; 4] = [
        Relaxation::DropRoot,
        Relaxation::AllowMoreMutes,
        Relaxation::WidenSpan,
        Relaxation::DropThird,
    ];

    /// Loosen a constraint set. Never tightens a limit that is already looser.
    pub fn apply(self, constraints: GeneratorConstraints) -> GeneratorConstraints {
        let mut relaxed = constraints;
        match self {
            Relaxation::DropRoot => relaxed.require_root = false,
            Relaxation::AllowMoreMutes => {
                relaxed.max_muted_strings = relaxed.max_muted_strings.max(3);
                relaxed.min_strings = relaxed.min_strings.min(3);
            }
            Relaxation::WidenSpan => relaxed.max_fret_span = relaxed.max_fret_span.max(5),
            Relaxation::DropThird => relaxed.require_third = false,
        }
        relaxed
    }

    /// Constraints after applying the ladder up to and including `self`
    pub fn cumulative(self, base: GeneratorConstraints) -> GeneratorConstraints {
        Relaxation::LADDER
            .iter()
            .take_while(|&&step| step != self)
            .chain(std::iter::once(&self))
            .fold(base, |constraints, step| step.apply(constraints))
    }
}

/// Voicings found by a fallback search and the ladder step that found them
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackOutcome {
    pub voicings: Vec<VoicingCandidate>,
    /// `None` when the caller's constraints were enough, otherwise the
    /// last step tried
    pub relaxation: Option<Relaxation>,
}

/// Fixed inputs for one search
struct Search<'a> {
    chord_notes: &'a [Note],
    root: Note,
    constraints: &'a GeneratorConstraints,
}

/// Voicing generator bound to a fretboard
#[derive(Debug, Clone, Copy, Default)]
pub struct VoicingGenerator {
    fretboard: Fretboard,
}

impl VoicingGenerator {
    /// Create a generator for the given fretboard
    pub fn new(fretboard: Fretboard) -> Self {
        Self { fretboard }
    }

    /// Get the fretboard
    pub fn fretboard(&self) -> &Fretboard {
        &self.fretboard
    }

    /// Every voicing of `chord_notes` that satisfies `constraints`, in
    /// search order.
    ///
    /// With `require_third` set, sus and power chords yield nothing: they
    /// are only voiced once the ladder drops the third requirement.
    pub fn generate(
        &self,
        chord_notes: &[Note],
        root: Note,
        constraints: &GeneratorConstraints,
    ) -> Vec<VoicingCandidate> {
        if chord_notes.is_empty() {
            return Vec::new();
        }

        let search = Search {
            chord_notes,
            root,
            constraints,
        };

        let mut frets: Frets = [None; STRING_COUNT];
        let mut voicings = Vec::new();
        self.assign_string(&search, 0, &mut frets, 0, &mut voicings);

        trace!(count = voicings.len(), ?constraints, "generated voicings");
        voicings
    }

    /// Generate with `constraints`, then walk the relaxation ladder until
    /// some step yields voicings.
    pub fn generate_with_fallback(
        &self,
        chord_notes: &[Note],
        root: Note,
        constraints: &GeneratorConstraints,
    ) -> FallbackOutcome {
        let voicings = self.generate(chord_notes, root, constraints);
        if !voicings.is_empty() || chord_notes.is_empty() {
            return FallbackOutcome {
                voicings,
                relaxation: None,
            };
        }

        let mut relaxed = *constraints;
        for step in Relaxation::LADDER {
            relaxed = step.apply(relaxed);
            debug!(?step, "no voicings found, relaxing constraints");

            let voicings = self.generate(chord_notes, root, &relaxed);
            if !voicings.is_empty() {
                return FallbackOutcome {
                    voicings,
                    relaxation: Some(step),
                };
            }
        }

        FallbackOutcome {
            voicings: Vec::new(),
            relaxation: Relaxation::LADDER.last().copied(),
        }
    }

    fn assign_string(
        &self,
        search: &Search<'_>,
        string: usize,
        frets: &mut Frets,
        muted: usize,
        out: &mut Vec<VoicingCandidate>,
    ) {
        if string == STRING_COUNT {
            if let Some(candidate) = self.accept(search, frets, muted) {
                out.push(candidate);
            }
            return;
        }

        let constraints = search.constraints;

        if muted < constraints.max_muted_strings {
            frets[string] = None;
            self.assign_string(search, string + 1, frets, muted + 1, out);
        }

        let positions = self.fretboard.chord_positions_on_string(
            string,
            search.chord_notes,
            constraints.max_fret,
        );
        for position in &positions {
            if !within_span(&frets[..string], position.fret, constraints.max_fret_span) {
                continue;
            }
            frets[string] = Some(position.fret);
            self.assign_string(search, string + 1, frets, muted, out);
        }

        // Open chord tones are always reachable, even if the position list skipped fret 0
        if self
            .fretboard
            .is_open_string_chord_tone(string, search.chord_notes)
            && !positions.iter().any(|p| p.fret == 0)
        {
            frets[string] = Some(0);
            self.assign_string(search, string + 1, frets, muted, out);
        }

        frets[string] = None;
    }

    /// Validate a complete assignment
    fn accept(&self, search: &Search<'_>, frets: &Frets, muted: usize) -> Option<VoicingCandidate> {
        let constraints = search.constraints;
        let played = STRING_COUNT - muted;
        if played < constraints.min_strings || muted > constraints.max_muted_strings {
            return None;
        }

        let candidate = VoicingCandidate::new(&self.fretboard, *frets, search.root);
        if constraints.require_root && candidate.bass_note != Some(search.root) {
            return None;
        }
        if constraints.require_third && !candidate.has_third {
            return None;
        }
        Some(candidate)
    }
}

/// Whether adding `fret` keeps the fretted positions within `max_span`
fn within_span(chosen: &[Option<u8>], fret: u8, max_span: u8) -> bool {
    if fret == 0 {
        return true;
    }
    let (lo, hi) = chosen
        .iter()
        .flatten()
        .copied()
        .filter(|&f| f > 0)
        .fold((fret, fret), |(lo, hi), f| (lo.min(f), hi.max(f)));
    hi - lo <= max_span
}

/// [`VoicingGenerator::generate`] on a standard-tuned fretboard
pub fn generate_voicings(
    chord_notes: &[Note],
    root: Note,
    constraints: &GeneratorConstraints,
) -> Vec<VoicingCandidate> {
    VoicingGenerator::default().generate(chord_notes, root, constraints)
}

/// [`VoicingGenerator::generate_with_fallback`] on a standard-tuned fretboard
pub fn generate_voicings_with_fallback(
    chord_notes: &[Note],
    root: Note,
    constraints: &GeneratorConstraints,
) -> Vec<VoicingCandidate> {
    VoicingGenerator::default()
        .generate_with_fallback(chord_notes, root, constraints)
        .voicings
}
