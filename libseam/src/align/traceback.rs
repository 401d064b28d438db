use crate::align::scoring::{substitution_score, LOCAL_GAP_PENALTY};
use crate::align::structs::{Cell, Direction, Grid, Position, Trace, TraceStep};
use crate::structs::Sequence;

/// Walk a filled global matrix backward from `(n, m)` to the origin,
/// following the direction stored in each cell.
pub fn traceback_global(grid: &Grid<Cell>) -> Trace {
    let mut trace: Trace = vec![];
    let mut row = grid.row_count - 1;
    let mut col = grid.col_count - 1;

    // the stop test must be a conjunction: boundary cells away from
    // the origin still carry a direction that has to be followed
    while !(row == 0 && col == 0) {
        match grid.get(row, col).direction {
            Direction::Diagonal => {
                row -= 1;
                col -= 1;
                trace.push(TraceStep::Diagonal);
            }
            Direction::Vertical => {
                row -= 1;
                trace.push(TraceStep::Up);
            }
            Direction::Horizontal => {
                col -= 1;
                trace.push(TraceStep::Left);
            }
            Direction::None => {
                panic!("global traceback read a direction of None at ({row}, {col})")
            }
        }
    }

    trace.reverse();

    trace
}

/// Walk a filled local matrix backward from `start` until a zero-score
/// cell or a grid edge is reached.
///
/// The local matrix stores plain scores, so the move that produced each
/// cell is recomputed from its neighbors, with the same tie-break order
/// the fill used: Diagonal, then Vertical, then Horizontal.
///
/// Returns the trace along with the cell the walk stopped at.
pub fn traceback_local(
    grid: &Grid<isize>,
    seq_1: &Sequence,
    seq_2: &Sequence,
    start: Position,
) -> (Trace, Position) {
    let mut trace: Trace = vec![];
    let mut row = start.row;
    let mut col = start.col;

    while row > 0 && col > 0 && grid.get(row, col) > 0 {
        let current_score = grid.get(row, col);

        let diag_score = grid.get(row - 1, col - 1)
            + substitution_score(seq_1.utf8_bytes[row], seq_2.utf8_bytes[col]);
        let up_score = grid.get(row - 1, col) - LOCAL_GAP_PENALTY;
        let left_score = grid.get(row, col - 1) - LOCAL_GAP_PENALTY;

        if current_score == diag_score {
            row -= 1;
            col -= 1;
            trace.push(TraceStep::Diagonal);
        } else if current_score == up_score {
            row -= 1;
            trace.push(TraceStep::Up);
        } else if current_score == left_score {
            col -= 1;
            trace.push(TraceStep::Left);
        } else {
            panic!("local traceback failed at ({row}, {col})")
        }
    }

    trace.reverse();

    (trace, Position { row, col })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traceback_global_follows_directions() {
        // hand-built 3x3 grid describing the path D, V from (2, 2)
        let mut grid: Grid<Cell> = Grid::new(3, 3);
        grid.set(
            2,
            2,
            Cell {
                direction: Direction::Vertical,
                value: 0,
            },
        );
        grid.set(
            1,
            2,
            Cell {
                direction: Direction::Diagonal,
                value: 0,
            },
        );
        grid.set(
            0,
            1,
            Cell {
                direction: Direction::Horizontal,
                value: 0,
            },
        );

        let trace = traceback_global(&grid);

        assert!(trace == vec![TraceStep::Left, TraceStep::Diagonal, TraceStep::Up]);
    }

    #[test]
    fn test_traceback_global_empty_grid() {
        let grid: Grid<Cell> = Grid::new(1, 1);

        let trace = traceback_global(&grid);

        assert!(trace.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_traceback_global_panics_on_none() {
        // a None direction off the origin is an invariant violation
        let grid: Grid<Cell> = Grid::new(2, 2);

        traceback_global(&grid);
    }

    #[test]
    fn test_traceback_local_stops_at_zero() {
        let seq_1 = Sequence::from_utf8(b"AAAGGG");
        let seq_2 = Sequence::from_utf8(b"GGG");

        // the filled local matrix for these sequences has a diagonal
        // run of 1, 2, 3 ending at (6, 3)
        let mut grid: Grid<isize> = Grid::new(7, 4);
        grid.set(4, 1, 1);
        grid.set(4, 2, 1);
        grid.set(4, 3, 1);
        grid.set(5, 1, 1);
        grid.set(5, 2, 2);
        grid.set(5, 3, 2);
        grid.set(6, 1, 1);
        grid.set(6, 2, 2);
        grid.set(6, 3, 3);

        let (trace, stop) = traceback_local(&grid, &seq_1, &seq_2, Position::new(6, 3));

        assert!(
            trace
                == vec![
                    TraceStep::Diagonal,
                    TraceStep::Diagonal,
                    TraceStep::Diagonal
                ]
        );
        assert!(stop == Position::new(3, 0));
    }
}
