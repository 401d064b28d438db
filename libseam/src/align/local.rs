use crate::align::scoring::{substitution_score, LOCAL_GAP_PENALTY};
use crate::align::structs::{AlignmentBuilder, Grid, LocalAlignment, Position, Trace};
use crate::align::traceback::traceback_local;
use crate::max_isize;
use crate::structs::Sequence;

use anyhow::Result;

/// Fill the Smith-Waterman matrix for a pair of sequences.
///
/// The boundary row and column are all zero, and every interior cell
/// is floored at zero. The maximum cell seen during the fill is
/// tracked alongside the grid; on ties, the first occurrence wins.
///
/// Returns the grid, the maximum value, and the maximum cell.
pub fn build_local_matrix(seq_1: &Sequence, seq_2: &Sequence) -> (Grid<isize>, isize, Position) {
    let mut grid: Grid<isize> = Grid::new(seq_1.length + 1, seq_2.length + 1);

    let mut max_value: isize = 0;
    let mut max_position = Position::default();

    for seq_1_idx in 1..=seq_1.length {
        let seq_1_residue = seq_1.utf8_bytes[seq_1_idx];

        for seq_2_idx in 1..=seq_2.length {
            let seq_2_residue = seq_2.utf8_bytes[seq_2_idx];

            let diag_score = grid.get(seq_1_idx - 1, seq_2_idx - 1)
                + substitution_score(seq_1_residue, seq_2_residue);
            let up_score = grid.get(seq_1_idx - 1, seq_2_idx) - LOCAL_GAP_PENALTY;
            let left_score = grid.get(seq_1_idx, seq_2_idx - 1) - LOCAL_GAP_PENALTY;

            let value = max_isize!(0, diag_score, up_score, left_score);
            grid.set(seq_1_idx, seq_2_idx, value);

            // strictly greater: the first occurrence of a maximum wins
            if value > max_value {
                max_value = value;
                max_position = Position {
                    row: seq_1_idx,
                    col: seq_2_idx,
                };
            }
        }
    }

    (grid, max_value, max_position)
}

/// Align the highest-scoring matching region of two sequences.
///
/// If no positive-scoring region exists, the result is an empty
/// alignment at the origin with a score of zero.
pub fn local_align(seq_1: &Sequence, seq_2: &Sequence) -> Result<LocalAlignment> {
    seq_1.validate()?;
    seq_2.validate()?;

    let (grid, max_value, max_position) = build_local_matrix(seq_1, seq_2);

    if max_value == 0 {
        let trace: Trace = vec![];
        return AlignmentBuilder::new(&trace)
            .with_seq_1(seq_1)
            .with_seq_2(seq_2)
            .with_score(0)
            .build_local(Position::default());
    }

    let (trace, stop_position) = traceback_local(&grid, seq_1, seq_2, max_position);

    AlignmentBuilder::new(&trace)
        .with_seq_1(seq_1)
        .with_seq_2(seq_2)
        .with_score(max_value)
        .with_start(stop_position)
        .build_local(max_position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::assert;

    #[test]
    fn test_local_matrix_boundary_is_zero() {
        let seq_1 = Sequence::from_utf8(b"ACGT");
        let seq_2 = Sequence::from_utf8(b"CGA");

        let (grid, _, _) = build_local_matrix(&seq_1, &seq_2);

        for col in 0..grid.col_count {
            assert!(grid.get(0, col) == 0);
        }
        for row in 0..grid.row_count {
            assert!(grid.get(row, 0) == 0);
        }
    }

    #[test]
    fn test_local_matrix_tracks_first_maximum() {
        // "AA" vs "A" produces tied maxima at (1, 1) and (2, 1);
        // the earlier cell must win
        let seq_1 = Sequence::from_utf8(b"AA");
        let seq_2 = Sequence::from_utf8(b"A");

        let (_, max_value, max_position) = build_local_matrix(&seq_1, &seq_2);

        assert!(max_value == 1);
        assert!(max_position == Position::new(1, 1));
    }

    #[test]
    fn test_local_align_shared_suffix() {
        let seq_1 = Sequence::from_utf8(b"AAAGGG");
        let seq_2 = Sequence::from_utf8(b"GGG");

        let alignment = local_align(&seq_1, &seq_2).unwrap();

        assert!(alignment.score == 3);
        assert!(alignment.aligned_seq_1 == "GGG");
        assert!(alignment.aligned_seq_2 == "GGG");
        assert!(alignment.start == Position::new(3, 0));
        assert!(alignment.end == Position::new(6, 3));
    }

    #[test]
    fn test_local_align_internal_gap() {
        let seq_1 = Sequence::from_utf8(b"GGTGG");
        let seq_2 = Sequence::from_utf8(b"GGGG");

        let alignment = local_align(&seq_1, &seq_2).unwrap();

        assert!(alignment.score == 3);
        assert!(alignment.aligned_seq_1 == "GGTGG");
        assert!(alignment.aligned_seq_2 == "GG-GG");
        assert!(alignment.start == Position::new(0, 0));
        assert!(alignment.end == Position::new(5, 4));
    }

    #[test]
    fn test_local_align_no_positive_region() {
        let seq_1 = Sequence::from_utf8(b"AAA");
        let seq_2 = Sequence::from_utf8(b"TTT");

        let alignment = local_align(&seq_1, &seq_2).unwrap();

        assert!(alignment.score == 0);
        assert!(alignment.aligned_seq_1.is_empty());
        assert!(alignment.aligned_seq_2.is_empty());
        assert!(alignment.start == Position::new(0, 0));
        assert!(alignment.end == Position::new(0, 0));
    }

    #[test]
    fn test_local_align_empty_inputs() {
        let seq_1 = Sequence::from_utf8(b"");
        let seq_2 = Sequence::from_utf8(b"ACGT");

        let alignment = local_align(&seq_1, &seq_2).unwrap();

        assert!(alignment.score == 0);
        assert!(alignment.length == 0);
        assert!(alignment.start == Position::new(0, 0));
        assert!(alignment.end == Position::new(0, 0));
    }

    #[test]
    fn test_local_align_ignores_flanking_mismatch() {
        // the dissimilar prefix and suffix must not drag the score down
        let seq_1 = Sequence::from_utf8(b"TTTTACGTACGTTTTT");
        let seq_2 = Sequence::from_utf8(b"CCACGTACGTCC");

        let alignment = local_align(&seq_1, &seq_2).unwrap();

        assert!(alignment.score == 8);
        assert!(alignment.aligned_seq_1 == "ACGTACGT");
        assert!(alignment.aligned_seq_2 == "ACGTACGT");
    }

    #[test]
    fn test_local_align_deterministic() {
        let seq_1 = Sequence::from_utf8(b"GATTACA");
        let seq_2 = Sequence::from_utf8(b"TACAGATT");

        let first = local_align(&seq_1, &seq_2).unwrap();
        let second = local_align(&seq_1, &seq_2).unwrap();

        assert!(first.score == second.score);
        assert!(first.aligned_seq_1 == second.aligned_seq_1);
        assert!(first.aligned_seq_2 == second.aligned_seq_2);
        assert!(first.start == second.start);
        assert!(first.end == second.end);
    }

    #[test]
    fn test_local_align_rejects_invalid_sequence() {
        let seq_1 = Sequence::from_utf8(b"ACGT");
        let mut seq_2 = Sequence::from_utf8(b"ACGT");
        seq_2.utf8_bytes.push(b'T');

        assert!(local_align(&seq_1, &seq_2).is_err());
    }
}
