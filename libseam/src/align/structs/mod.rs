mod alignment;
pub use alignment::{AlignmentBuilder, GlobalAlignment, LocalAlignment};

mod cell;
pub use cell::{Cell, Direction};

mod grid;
pub use grid::{Grid, Position};

mod trace;
pub use trace::{print_trace, Trace, TraceStep};
