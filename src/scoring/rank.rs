// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Top-N ranking of scored voicings.

use serde::Serialize;

use super::{score_voicing, VoicingScore};
use crate::music::Note;
use crate::voicing::VoicingCandidate;

/// How many voicings a ranking keeps unless told otherwise
pub const DEFAULT_RANK_LIMIT: usize = 5;

/// A candidate paired with its score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredVoicing {
    pub candidate: VoicingCandidate,
    pub score: VoicingScore,
}

/// Score every candidate and keep the best `limit`, highest total first.
///
/// Equal totals keep their generation order.
pub fn rank_voicings(
    candidates: &[VoicingCandidate],
    chord_notes: &[Note],
    limit: usize,
) -> Vec<ScoredVoicing> {
    let mut scored: Vec<ScoredVoicing> = candidates
        .iter()
        .map(|candidate| ScoredVoicing {
            score: score_voicing(candidate, chord_notes),
            candidate: candidate.clone(),
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.score.total().cmp(&a.score.total()));
    scored.truncate(limit);
    scored
}

/// Highest-scoring candidate, if any
pub fn best_voicing(
    candidates: &[VoicingCandidate],
    chord_notes: &[Note],
) -> Option<ScoredVoicing> {
    rank_voicings(candidates, chord_notes, 1).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fretboard::Fretboard;
    use crate::voicing::{generate_voicings, GeneratorConstraints};

    const A_MINOR: [Note; 3] = [Note::A, Note::C, Note::E];

    #[test]
    fn test_rank_is_non_increasing() {
        let candidates = generate_voicings(&A_MINOR, Note::A, &GeneratorConstraints::default());
        let ranked = rank_voicings(&candidates, &A_MINOR, candidates.len());
        assert_eq!(ranked.len(), candidates.len());
        for pair in ranked.windows(2) {
            assert!(pair[0].score.total() >= pair[1].score.total());
        }
    }

    #[test]
    fn test_rank_truncates() {
        let candidates = generate_voicings(&A_MINOR, Note::A, &GeneratorConstraints::default());
        assert!(candidates.len() > DEFAULT_RANK_LIMIT);
        let ranked = rank_voicings(&candidates, &A_MINOR, DEFAULT_RANK_LIMIT);
        assert_eq!(ranked.len(), DEFAULT_RANK_LIMIT);
        assert!(rank_voicings(&candidates, &A_MINOR, 0).is_empty());
    }

    #[test]
    fn test_open_a_minor_ranks_first() {
        let candidates = generate_voicings(&A_MINOR, Note::A, &GeneratorConstraints::default());
        let best = best_voicing(&candidates, &A_MINOR).unwrap();
        assert_eq!(best.candidate.frets, [None, Some(0), Some(2), Some(2), Some(1), Some(0)]);
    }

    #[test]
    fn test_ties_keep_generation_order() {
        let board = Fretboard::standard();
        // The same C minor barre twelve frets apart scores identically
        let c_minor = [Note::C, Note::Ds, Note::G];
        let low = VoicingCandidate::new(
            &board,
            [Some(8), Some(10), Some(10), Some(8), Some(8), Some(8)],
            Note::C,
        );
        let high = VoicingCandidate::new(
            &board,
            [Some(20), Some(22), Some(22), Some(20), Some(20), Some(20)],
            Note::C,
        );
        assert_ne!(low.frets, high.frets);
        assert_eq!(score_voicing(&low, &c_minor), score_voicing(&high, &c_minor));

        let ranked = rank_voicings(&[high.clone(), low.clone()], &c_minor, 2);
        assert_eq!(ranked[0].candidate, high);
        assert_eq!(ranked[1].candidate, low);

        let ranked = rank_voicings(&[low.clone(), high.clone()], &c_minor, 2);
        assert_eq!(ranked[0].candidate, low);
        assert_eq!(ranked[1].candidate, high);
    }

    #[test]
    fn test_best_voicing_of_nothing() {
        assert!(best_voicing(&[], &A_MINOR).is_none());
    }
}
