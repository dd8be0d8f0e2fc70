// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Barre detection over finished fret assignments.

use serde::Serialize;

use crate::fretboard::{Frets, STRING_COUNT};

/// One finger across a run of adjacent strings at the same fret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BarrePosition {
    pub fret: u8,
    /// Lowest string of the run
    pub from_string: usize,
    /// Highest string of the run (inclusive)
    pub to_string: usize,
}

impl BarrePosition {
    /// Number of strings covered
    pub fn width(&self) -> usize {
        self.to_string - self.from_string + 1
    }
}

/// Find every run of two or more adjacent strings fretted at the same
/// non-zero fret. Disjoint runs are all reported, lowest string first.
pub fn detect_barres(frets: &Frets) -> Vec<BarrePosition> {
    let mut barres = Vec::new();
    let mut start = 0;

    while start < STRING_COUNT {
        let Some(fret) = frets[start].filter(|&f| f > 0) else {
            start += 1;
            continue;
        };

        let mut end = start;
        while end + 1 < STRING_COUNT && frets[end + 1] == Some(fret) {
            end += 1;
        }

        if end > start {
            barres.push(BarrePosition {
                fret,
                from_string: start,
                to_string: end,
            });
        }
        start = end + 1;
    }

    barres
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f_major_barre() {
        let barres = detect_barres(&[Some(1), Some(3), Some(3), Some(2), Some(1), Some(1)]);
        assert!(barres
            .iter()
            .any(|b| b.fret == 1 && b.from_string == 4 && b.to_string == 5));
        assert!(barres
            .iter()
            .any(|b| b.fret == 3 && b.from_string == 1 && b.to_string == 2));
        assert_eq!(barres.len(), 2);
    }

    #[test]
    fn test_b_minor_barre() {
        let barres = detect_barres(&[None, Some(2), Some(4), Some(4), Some(3), Some(2)]);
        assert_eq!(
            barres,
            vec![BarrePosition { fret: 4, from_string: 2, to_string: 3 }]
        );
    }

    #[test]
    fn test_non_adjacent_frets_are_not_a_barre() {
        assert!(detect_barres(&[None, Some(3), None, Some(3), None, None]).is_empty());
    }

    #[test]
    fn test_open_strings_never_barre() {
        assert!(detect_barres(&[Some(0); 6]).is_empty());
    }

    #[test]
    fn test_full_width_barre() {
        let barres = detect_barres(&[Some(5); 6]);
        assert_eq!(
            barres,
            vec![BarrePosition { fret: 5, from_string: 0, to_string: 5 }]
        );
        assert_eq!(barres[0].width(), 6);
    }

    #[test]
    fn test_every_run_length_and_offset() {
        for len in 2..=STRING_COUNT {
            for from in 0..=(STRING_COUNT - len) {
                let mut frets: Frets = [None; STRING_COUNT];
                for fret in frets.iter_mut().skip(from).take(len) {
                    *fret = Some(7);
                }
                let barres = detect_barres(&frets);
                assert_eq!(
                    barres,
                    vec![BarrePosition { fret: 7, from_string: from, to_string: from + len - 1 }],
                    "run of {} from string {}",
                    len,
                    from
                );
            }
        }
    }

    #[test]
    fn test_adjacent_runs_at_different_frets() {
        let barres = detect_barres(&[Some(2), Some(2), Some(2), Some(4), Some(4), Some(4)]);
        assert_eq!(barres.len(), 2);
        assert_eq!(barres[0], BarrePosition { fret: 2, from_string: 0, to_string: 2 });
        assert_eq!(barres[1], BarrePosition { fret: 4, from_string: 3, to_string: 5 });
    }
}
