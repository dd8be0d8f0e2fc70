// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for fretgen
//!
//! These tests drive the public API end to end: chord names in,
//! ranked fingerings out.

use std::thread;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fretgen::fretboard::{
    fret_span, is_playable, standard_positions, PositionMap, MAX_FRET, STRING_COUNT,
};
use fretgen::voicing::{Relaxation, VoicingGenerator};
use fretgen::{
    best_voicing, can_generate_chord, chord_notes, detect_barres, generate_chord,
    generate_voicings, generate_voicings_with_fallback, rank_voicings, score_voicing,
    transpose_note, ChordEngine, EngineConfig, Fretboard, Frets, GeneratorConstraints, Note,
};

const ROOTS: [Note; 12] = Note::ALL;
const QUALITIES: [&str; 8] = ["major", "minor", "7", "m7", "maj7", "sus4", "dim", "5"];

fn contains(frets_list: &[Frets], frets: Frets) -> bool {
    frets_list.iter().any(|f| *f == frets)
}

/// Every fret on every string agrees with the pitch an octave up
#[test]
fn test_octave_equivalence() {
    let board = Fretboard::standard();
    for string in 0..STRING_COUNT {
        for fret in 0..=12 {
            assert_eq!(board.note_at(string, fret), board.note_at(string, fret + 12));
        }
    }
}

/// Every position is found again when searching for its own note
#[test]
fn test_position_round_trip() {
    let board = Fretboard::standard();
    for string in 0..STRING_COUNT {
        for fret in 0..=MAX_FRET {
            let note = board.note_at(string, fret);
            let positions = board.find_note_positions(note, MAX_FRET);
            assert!(
                positions.iter().any(|p| p.string == string && p.fret == fret),
                "({}, {}) missing from positions of {}",
                string,
                fret,
                note
            );
        }
    }
}

#[test]
fn test_cache_agrees_with_scan() {
    let board = Fretboard::standard();
    let fresh = PositionMap::build(&board, MAX_FRET);
    for note in Note::ALL {
        assert_eq!(standard_positions().positions(note), fresh.positions(note));
        let low = fresh.positions(note).iter().filter(|p| p.fret <= 5).count();
        assert_eq!(board.find_note_positions(note, 5).len(), low);
    }
}

#[test]
fn test_cache_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| standard_positions() as *const PositionMap as usize))
        .collect();
    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_fret_span_examples() {
    assert_eq!(fret_span(&[Some(0); 6]), 0);
    assert_eq!(fret_span(&[None, None, Some(2), None, Some(5), None]), 3);
    assert_eq!(fret_span(&[Some(0), Some(7), Some(0), Some(9), Some(0), Some(0)]), 2);
}

#[test]
fn test_playability_boundary() {
    let span_four = [Some(1), Some(5), None, None, None, None];
    let span_five = [Some(1), Some(6), None, None, None, None];
    assert!(is_playable(&span_four, 4));
    assert!(!is_playable(&span_five, 4));
    assert!(is_playable(&span_five, 5));
    assert!(!is_playable(&span_four, 3));
}

#[test]
fn test_canonical_chords_are_generated() {
    let a_minor = chord_notes(Note::A, "minor");
    let e_major = chord_notes(Note::E, "major");
    let am: Vec<Frets> = generate_voicings(&a_minor, Note::A, &GeneratorConstraints::default())
        .into_iter()
        .map(|v| v.frets)
        .collect();
    let e: Vec<Frets> = generate_voicings(&e_major, Note::E, &GeneratorConstraints::default())
        .into_iter()
        .map(|v| v.frets)
        .collect();

    assert!(contains(&am, [None, Some(0), Some(2), Some(2), Some(1), Some(0)]));
    assert!(contains(&e, [Some(0), Some(2), Some(2), Some(1), Some(0), Some(0)]));
}

/// Random constraint sets never produce a voicing that breaks them
#[test]
fn test_constraints_hold_under_random_inputs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let generator = VoicingGenerator::default();

    for _ in 0..60 {
        let root = ROOTS[rng.gen_range(0..ROOTS.len())];
        let quality = QUALITIES[rng.gen_range(0..QUALITIES.len())];
        let notes = chord_notes(root, quality);

        let constraints = GeneratorConstraints {
            max_fret_span: rng.gen_range(1..=5),
            require_root: rng.gen_bool(0.5),
            min_strings: rng.gen_range(2..=6),
            max_muted_strings: rng.gen_range(0..=3),
            max_fret: rng.gen_range(3..=12),
            require_third: rng.gen_bool(0.5),
        };

        for v in generator.generate(&notes, root, &constraints) {
            let context = format!("{}{} {:?} -> {}", root, quality, constraints, v.shape());
            assert!(v.fret_span <= constraints.max_fret_span, "{}", context);
            assert!(v.played_strings >= constraints.min_strings, "{}", context);
            assert!(v.muted_strings <= constraints.max_muted_strings, "{}", context);
            assert!(v.frets.iter().flatten().all(|&f| f <= constraints.max_fret), "{}", context);
            assert!(v.notes_played.iter().all(|n| notes.contains(n)), "{}", context);
            if constraints.require_root {
                assert_eq!(v.bass_note, Some(root), "{}", context);
            }
            if constraints.require_third {
                assert!(v.has_third, "{}", context);
            }
        }
    }
}

#[test]
fn test_score_is_sum_of_components() {
    let chords = [
        (Note::C, "major"),
        (Note::Fs, "m7"),
        (Note::As, "7sus4"),
        (Note::G, "5"),
    ];
    for (root, quality) in chords {
        let notes = chord_notes(root, quality);
        let constraints = GeneratorConstraints::default();
        for v in generate_voicings_with_fallback(&notes, root, &constraints) {
            let score = score_voicing(&v, &notes);
            let b = score.breakdown();
            assert_eq!(
                score.total(),
                b.playability + b.voice_leading + b.ergonomics + b.completeness + b.sonority
            );
            assert!((0..=30).contains(&b.playability));
            assert!((0..=20).contains(&b.ergonomics));
            assert!((0..=10).contains(&b.sonority));
        }
    }
}

#[test]
fn test_ranking_order() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10 {
        let root = ROOTS[rng.gen_range(0..ROOTS.len())];
        let notes = chord_notes(root, QUALITIES[rng.gen_range(0..QUALITIES.len())]);
        let constraints = GeneratorConstraints::default();
        let candidates = generate_voicings_with_fallback(&notes, root, &constraints);
        let ranked = rank_voicings(&candidates, &notes, 5);
        assert!(ranked.len() <= 5);
        assert!(ranked.windows(2).all(|w| w[0].score.total() >= w[1].score.total()));
        if let Some(best) = best_voicing(&candidates, &notes) {
            assert_eq!(best.score, ranked[0].score);
        }
    }
}

#[test]
fn test_barre_detection() {
    let f_major = detect_barres(&[Some(1), Some(3), Some(3), Some(2), Some(1), Some(1)]);
    assert!(f_major.iter().any(|b| b.fret == 1));
    assert!(detect_barres(&[None, Some(3), None, Some(3), None, None]).is_empty());
}

#[test]
fn test_fallback_relaxes_until_found() {
    // Every string below fret 3: the A string has no C# chord tone there,
    // so a six-string requirement only gives way once mutes are allowed
    let c_sharp = chord_notes(Note::Cs, "major");
    let strict = GeneratorConstraints {
        min_strings: 6,
        max_muted_strings: 0,
        max_fret: 2,
        ..Default::default()
    };
    let generator = VoicingGenerator::default();
    assert!(generator.generate(&c_sharp, Note::Cs, &strict).is_empty());

    let outcome = generator.generate_with_fallback(&c_sharp, Note::Cs, &strict);
    assert!(!outcome.voicings.is_empty());
    assert_eq!(outcome.relaxation, Some(Relaxation::AllowMoreMutes));
}

#[test]
fn test_power_and_sus_chords_reach_the_last_step() {
    let base = GeneratorConstraints::default();
    let relaxed = Relaxation::DropThird.cumulative(base);
    assert!(!relaxed.require_root);
    assert!(!relaxed.require_third);
    assert_eq!(relaxed.min_strings, 3);
    assert_eq!(relaxed.max_muted_strings, 3);
    assert_eq!(relaxed.max_fret_span, 5);

    let generator = VoicingGenerator::default();
    for (root, quality) in [(Note::G, "5"), (Note::A, "sus2"), (Note::E, "7sus4")] {
        let notes = chord_notes(root, quality);
        assert!(generator.generate(&notes, root, &base).is_empty());

        let outcome = generator.generate_with_fallback(&notes, root, &base);
        assert_eq!(outcome.relaxation, Some(Relaxation::DropThird), "{}{}", root, quality);
        assert!(!outcome.voicings.is_empty(), "{}{}", root, quality);
        assert_eq!(outcome.voicings, generator.generate(&notes, root, &relaxed));
        for v in &outcome.voicings {
            assert!(v.played_strings >= 3);
            assert!(v.muted_strings <= 3);
            assert!(v.fret_span <= 5);
        }
    }

    let g5 = generate_chord("G5", 5).unwrap();
    assert_eq!(g5.quality, "5");
    assert!(!g5.fingerings.is_empty());
}

#[test]
fn test_fallback_exhausted() {
    // Below fret 2 only the A and D strings reach a D major tone, which is
    // fewer than the three strings the last step still demands
    let d_major = chord_notes(Note::D, "major");
    let strict = GeneratorConstraints {
        min_strings: 6,
        max_muted_strings: 0,
        max_fret: 1,
        ..Default::default()
    };
    let outcome = VoicingGenerator::default().generate_with_fallback(&d_major, Note::D, &strict);
    assert!(outcome.voicings.is_empty());
    assert_eq!(outcome.relaxation, Some(Relaxation::DropThird));

    let engine = ChordEngine::new(Fretboard::standard(), strict, 5);
    assert!(engine.generate("D", 5).is_none());
    // Still a known chord, even though this engine cannot voice it
    assert!(engine.can_generate("D"));
}

#[test]
fn test_generate_chord_names() {
    let cmaj7 = generate_chord("Cmaj7", 5).unwrap();
    assert_eq!(cmaj7.quality, "maj7");
    assert_eq!(cmaj7.notes, vec![Note::C, Note::E, Note::G, Note::B]);
    assert!(!cmaj7.fingerings.is_empty() && cmaj7.fingerings.len() <= 5);

    let bb = generate_chord("Bb7sus4", 5).unwrap();
    assert_eq!(bb.root, Note::As);
    assert_eq!(bb.notes[0], transpose_note(Note::C, -2));

    let am = generate_chord("Am", 5).unwrap();
    assert_eq!(am.fingerings[0].to_string(), "x02210");

    assert!(generate_chord("", 5).is_none());
    assert!(!can_generate_chord(""));
}

#[test]
fn test_every_root_and_quality_voices() {
    for root in ["C", "C#", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B"] {
        for quality in ["", "m", "7", "m7", "maj7", "sus2", "sus4", "dim7", "9"] {
            let name = format!("{}{}", root, quality);
            assert!(generate_chord(&name, 1).is_some(), "{} has no voicing", name);
        }
    }
}

#[test]
fn test_engine_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fretgen.yaml");
    std::fs::write(
        &path,
        "max_voicings: 2\ntuning: [D, A, D, G, B, E]\nconstraints:\n  max_fret: 5\n",
    )
    .unwrap();

    let config = EngineConfig::load(&path).unwrap();
    let engine = ChordEngine::from_config(&config).unwrap();
    assert_eq!(engine.fretboard().tuning().open_note(0), Note::D);

    let d = engine.define("D").unwrap();
    assert_eq!(d.fingerings.len(), 2);
    for fingering in &d.fingerings {
        assert!(fingering.frets.iter().flatten().all(|&f| f <= 5));
    }
}
