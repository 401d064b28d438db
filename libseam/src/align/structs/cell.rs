/// The move that produced a cell's score during the global matrix fill.
///
/// `None` is only valid at the origin cell.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    Diagonal,
    Vertical,
    Horizontal,
}

impl std::fmt::Debug for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::None => write!(f, "N"),
            Direction::Diagonal => write!(f, "D"),
            Direction::Vertical => write!(f, "V"),
            Direction::Horizontal => write!(f, "H"),
        }
    }
}

/// A single entry of the global alignment matrix.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub direction: Direction,
    pub value: isize,
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}{}", self.direction, self.value)
    }
}
