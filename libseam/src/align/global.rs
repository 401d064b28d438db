use crate::align::scoring::{substitution_score, GLOBAL_GAP_PENALTY};
use crate::align::structs::{AlignmentBuilder, Cell, Direction, GlobalAlignment, Grid};
use crate::align::traceback::traceback_global;
use crate::structs::Sequence;

use anyhow::Result;

/// Fill the Needleman-Wunsch matrix for a pair of sequences.
///
/// The boundary row and column are initialized first: the origin is
/// `(None, 0)`, row 0 steps Horizontal and column 0 steps Vertical,
/// each dropping by the gap penalty. The interior is then filled with
/// the three-candidate recurrence, recording the winning direction in
/// each cell.
pub fn build_global_matrix(seq_1: &Sequence, seq_2: &Sequence) -> Grid<Cell> {
    let mut grid: Grid<Cell> = Grid::new(seq_1.length + 1, seq_2.length + 1);

    // the default cell is (None, 0), which is exactly the origin
    for seq_2_idx in 1..=seq_2.length {
        let value = grid.get(0, seq_2_idx - 1).value - GLOBAL_GAP_PENALTY;
        grid.set(
            0,
            seq_2_idx,
            Cell {
                direction: Direction::Horizontal,
                value,
            },
        );
    }

    for seq_1_idx in 1..=seq_1.length {
        let value = grid.get(seq_1_idx - 1, 0).value - GLOBAL_GAP_PENALTY;
        grid.set(
            seq_1_idx,
            0,
            Cell {
                direction: Direction::Vertical,
                value,
            },
        );
    }

    for seq_1_idx in 1..=seq_1.length {
        let seq_1_residue = seq_1.utf8_bytes[seq_1_idx];

        for seq_2_idx in 1..=seq_2.length {
            let seq_2_residue = seq_2.utf8_bytes[seq_2_idx];

            let diag_score = grid.get(seq_1_idx - 1, seq_2_idx - 1).value
                + substitution_score(seq_1_residue, seq_2_residue);
            let up_score = grid.get(seq_1_idx - 1, seq_2_idx).value - GLOBAL_GAP_PENALTY;
            let left_score = grid.get(seq_1_idx, seq_2_idx - 1).value - GLOBAL_GAP_PENALTY;

            // a single ordered comparison chain settles ties:
            // Diagonal beats Vertical beats Horizontal
            let cell = if diag_score >= up_score && diag_score >= left_score {
                Cell {
                    direction: Direction::Diagonal,
                    value: diag_score,
                }
            } else if up_score >= left_score {
                Cell {
                    direction: Direction::Vertical,
                    value: up_score,
                }
            } else {
                Cell {
                    direction: Direction::Horizontal,
                    value: left_score,
                }
            };

            grid.set(seq_1_idx, seq_2_idx, cell);
        }
    }

    grid
}

/// Align two sequences end-to-end.
pub fn global_align(seq_1: &Sequence, seq_2: &Sequence) -> Result<GlobalAlignment> {
    seq_1.validate()?;
    seq_2.validate()?;

    let grid = build_global_matrix(seq_1, seq_2);
    let score = grid.get(seq_1.length, seq_2.length).value;
    let trace = traceback_global(&grid);

    AlignmentBuilder::new(&trace)
        .with_seq_1(seq_1)
        .with_seq_2(seq_2)
        .with_score(score)
        .build_global()
}
