use std::cmp::{max, min};

use crate::align::structs::{Position, Trace, TraceStep};
use crate::alphabet::{UTF8_DASH, UTF8_PIPE, UTF8_SPACE};
use crate::structs::Sequence;

use anyhow::{anyhow, Result};
use serde::Serialize;

/// The result of aligning two sequences end-to-end.
///
/// The two aligned strings always have equal length; stripping the gap
/// characters from either one reconstructs the corresponding input.
#[derive(Debug, Serialize)]
pub struct GlobalAlignment {
    /// The length of the alignment
    pub length: usize,
    /// The alignment score
    pub score: isize,
    /// The name of the first sequence
    pub seq_1_name: Option<String>,
    /// The name of the second sequence
    pub seq_2_name: Option<String>,
    /// The gapped display string for the first sequence
    pub aligned_seq_1: String,
    /// The gapped display string for the second sequence
    pub aligned_seq_2: String,
    /// The display in between the two aligned sequences
    pub middle_string: String,
}

/// The result of aligning the highest-scoring region of two sequences.
///
/// The aligned strings cover only the aligned region; internal gaps
/// are permitted, but there are no gaps at either end.
#[derive(Debug, Serialize)]
pub struct LocalAlignment {
    /// The length of the alignment
    pub length: usize,
    /// The alignment score
    pub score: isize,
    /// The name of the first sequence
    pub seq_1_name: Option<String>,
    /// The name of the second sequence
    pub seq_2_name: Option<String>,
    /// The display string for the aligned region of the first sequence
    pub aligned_seq_1: String,
    /// The display string for the aligned region of the second sequence
    pub aligned_seq_2: String,
    /// The display in between the two aligned sequences
    pub middle_string: String,
    /// The grid cell at which the traceback stopped; the first aligned
    /// pair of symbols sits one step past this cell
    pub start: Position,
    /// The grid cell that held the maximum score
    pub end: Position,
}

#[derive(Default)]
pub struct AlignmentBuilder<'a> {
    trace: &'a [TraceStep],
    seq_1: Option<&'a Sequence>,
    seq_2: Option<&'a Sequence>,
    score: Option<isize>,
    start: Position,
}

impl<'a> AlignmentBuilder<'a> {
    pub fn new(trace: &'a Trace) -> Self {
        Self {
            trace,
            ..Default::default()
        }
    }

    pub fn with_seq_1(mut self, seq: &'a Sequence) -> Self {
        self.seq_1 = Some(seq);
        self
    }

    pub fn with_seq_2(mut self, seq: &'a Sequence) -> Self {
        self.seq_2 = Some(seq);
        self
    }

    pub fn with_score(mut self, score: isize) -> Self {
        self.score = Some(score);
        self
    }

    /// Set the grid cell the trace walks away from. Defaults to the
    /// origin, which is where every global trace begins.
    pub fn with_start(mut self, start: Position) -> Self {
        self.start = start;
        self
    }

    /// Walk the trace, building the two gapped display strings and the
    /// middle line that sits between them.
    fn render(&self) -> Result<(String, String, String)> {
        let seq_1 = self.seq_1.ok_or(anyhow!("alignment builder: seq 1 unset"))?;
        let seq_2 = self.seq_2.ok_or(anyhow!("alignment builder: seq 2 unset"))?;

        let mut top_bytes: Vec<u8> = vec![];
        let mut middle_bytes: Vec<u8> = vec![];
        let mut bottom_bytes: Vec<u8> = vec![];

        let mut seq_1_idx = self.start.row;
        let mut seq_2_idx = self.start.col;

        for step in self.trace {
            match step {
                TraceStep::Diagonal => {
                    seq_1_idx += 1;
                    seq_2_idx += 1;
                    top_bytes.push(seq_1.utf8_bytes[seq_1_idx]);
                    bottom_bytes.push(seq_2.utf8_bytes[seq_2_idx]);
                    if seq_1.utf8_bytes[seq_1_idx] == seq_2.utf8_bytes[seq_2_idx] {
                        middle_bytes.push(UTF8_PIPE);
                    } else {
                        middle_bytes.push(UTF8_SPACE);
                    }
                }
                TraceStep::Up => {
                    seq_1_idx += 1;
                    top_bytes.push(seq_1.utf8_bytes[seq_1_idx]);
                    bottom_bytes.push(UTF8_DASH);
                    middle_bytes.push(UTF8_SPACE);
                }
                TraceStep::Left => {
                    seq_2_idx += 1;
                    top_bytes.push(UTF8_DASH);
                    bottom_bytes.push(seq_2.utf8_bytes[seq_2_idx]);
                    middle_bytes.push(UTF8_SPACE);
                }
            }
        }

        Ok((
            String::from_utf8(top_bytes)?,
            String::from_utf8(middle_bytes)?,
            String::from_utf8(bottom_bytes)?,
        ))
    }

    fn name_of(seq: Option<&Sequence>) -> Option<String> {
        seq.map(|s| s.name.clone()).filter(|n| !n.is_empty())
    }

    pub fn build_global(self) -> Result<GlobalAlignment> {
        let (aligned_seq_1, middle_string, aligned_seq_2) = self.render()?;

        Ok(GlobalAlignment {
            length: self.trace.len(),
            score: self.score.ok_or(anyhow!("alignment builder: score unset"))?,
            seq_1_name: Self::name_of(self.seq_1),
            seq_2_name: Self::name_of(self.seq_2),
            aligned_seq_1,
            aligned_seq_2,
            middle_string,
        })
    }

    pub fn build_local(self, end: Position) -> Result<LocalAlignment> {
        let (aligned_seq_1, middle_string, aligned_seq_2) = self.render()?;

        Ok(LocalAlignment {
            length: self.trace.len(),
            score: self.score.ok_or(anyhow!("alignment builder: score unset"))?,
            seq_1_name: Self::name_of(self.seq_1),
            seq_2_name: Self::name_of(self.seq_2),
            aligned_seq_1,
            aligned_seq_2,
            middle_string,
            start: self.start,
            end,
        })
    }
}

const ALI_BLOCK_WIDTH: usize = 80;

/// Render the score header plus 80-column alignment blocks with
/// 1-based sequence coordinates.
fn ali_string(
    score: isize,
    seq_1_name: Option<&str>,
    seq_2_name: Option<&str>,
    aligned_seq_1: &str,
    middle_string: &str,
    aligned_seq_2: &str,
    seq_1_start: usize,
    seq_2_start: usize,
) -> String {
    let length = aligned_seq_1.len();
    let name_1 = seq_1_name.unwrap_or("seq1");
    let name_2 = seq_2_name.unwrap_or("seq2");
    let name_width = max(name_1.len(), name_2.len());

    let mut ali = format!("==  score: {}\n", score);

    let mut start_offset: usize = 0;
    while start_offset < length {
        let end_offset = min(start_offset + ALI_BLOCK_WIDTH, length);

        // first sequence
        ali.push_str(&format!(
            "{:>W$} {:5} {} {:<5}\n",
            name_1,
            seq_1_start + start_offset + 1,
            &aligned_seq_1[start_offset..end_offset],
            seq_1_start + end_offset,
            W = name_width
        ));

        // middle line
        ali.push_str(&format!(
            "{:W$} {:5} {}\n",
            "",
            "",
            &middle_string[start_offset..end_offset],
            W = name_width
        ));

        // second sequence
        ali.push_str(&format!(
            "{:>W$} {:5} {} {:<5}\n",
            name_2,
            seq_2_start + start_offset + 1,
            &aligned_seq_2[start_offset..end_offset],
            seq_2_start + end_offset,
            W = name_width
        ));

        start_offset += ALI_BLOCK_WIDTH;
    }

    ali
}

impl GlobalAlignment {
    pub fn ali_string(&self) -> String {
        ali_string(
            self.score,
            self.seq_1_name.as_deref(),
            self.seq_2_name.as_deref(),
            &self.aligned_seq_1,
            &self.middle_string,
            &self.aligned_seq_2,
            0,
            0,
        )
    }
}

impl LocalAlignment {
    pub fn ali_string(&self) -> String {
        ali_string(
            self.score,
            self.seq_1_name.as_deref(),
            self.seq_2_name.as_deref(),
            &self.aligned_seq_1,
            &self.middle_string,
            &self.aligned_seq_2,
            self.start.row,
            self.start.col,
        )
    }
}
