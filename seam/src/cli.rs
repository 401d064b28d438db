use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Args, Debug, Clone)]
pub struct AlignArgs {
    /// The fasta file holding the first set of sequences
    #[arg(value_name = "SEQ1.fasta")]
    pub seq_1_path: PathBuf,
    /// The fasta file holding the second set of sequences
    #[arg(value_name = "SEQ2.fasta")]
    pub seq_2_path: PathBuf,
    /// Where to write the alignments; stdout if omitted
    #[arg(short = 'o', long = "output", value_name = "path")]
    pub output_path: Option<PathBuf>,
    /// Write the alignments as a JSON array instead of text blocks
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum SubCommands {
    #[command(about = "Align each pair of sequences end-to-end (Needleman-Wunsch)")]
    Global(AlignArgs),
    #[command(about = "Align the best-matching region of each pair of sequences (Smith-Waterman)")]
    Local(AlignArgs),
}

#[derive(Parser)]
#[command(name = "seam")]
#[command(about = "Perform pairwise global or local sequence alignment")]
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
}
