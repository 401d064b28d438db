mod sequence;
pub use sequence::{InvalidSequenceError, Sequence};
