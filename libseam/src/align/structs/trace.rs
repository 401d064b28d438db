/// A single traceback step.
///
/// `Diagonal` consumes a symbol from both sequences, `Up` consumes
/// from sequence 1 only, and `Left` consumes from sequence 2 only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceStep {
    Diagonal,
    Up,
    Left,
}

pub type Trace = Vec<TraceStep>;

#[allow(dead_code)]
pub fn print_trace(trace: &Trace) {
    for step in trace {
        match step {
            TraceStep::Diagonal => print!("D"),
            TraceStep::Up => print!("U"),
            TraceStep::Left => print!("L"),
        }
    }
    println!();
}
