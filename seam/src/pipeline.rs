use std::fs::File;
use std::io::{stdout, BufWriter, Write};

use crate::cli::AlignArgs;

use anyhow::{Context, Result};
use libseam::align::{global_align, local_align};
use libseam::structs::Sequence;

fn output_writer(args: &AlignArgs) -> Result<Box<dyn Write>> {
    match &args.output_path {
        Some(path) => {
            let file = File::create(path).with_context(|| {
                format!("failed to create output file: {}", path.to_string_lossy())
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(stdout())),
    }
}

fn read_sequence_pairs(args: &AlignArgs) -> Result<(Vec<Sequence>, Vec<Sequence>)> {
    let seqs_1 = Sequence::from_fasta(&args.seq_1_path)?;
    let seqs_2 = Sequence::from_fasta(&args.seq_2_path)?;
    Ok((seqs_1, seqs_2))
}

pub fn run_global(args: &AlignArgs) -> Result<()> {
    let (seqs_1, seqs_2) = read_sequence_pairs(args)?;
    let mut out = output_writer(args)?;

    let mut alignments = vec![];
    for seq_1 in &seqs_1 {
        for seq_2 in &seqs_2 {
            alignments.push(global_align(seq_1, seq_2)?);
        }
    }

    if args.json {
        serde_json::to_writer_pretty(&mut out, &alignments)?;
        writeln!(out)?;
    } else {
        for alignment in &alignments {
            writeln!(out, "{}", alignment.ali_string())?;
        }
    }

    Ok(())
}

pub fn run_local(args: &AlignArgs) -> Result<()> {
    let (seqs_1, seqs_2) = read_sequence_pairs(args)?;
    let mut out = output_writer(args)?;

    let mut alignments = vec![];
    for seq_1 in &seqs_1 {
        for seq_2 in &seqs_2 {
            alignments.push(local_align(seq_1, seq_2)?);
        }
    }

    if args.json {
        serde_json::to_writer_pretty(&mut out, &alignments)?;
        writeln!(out)?;
    } else {
        for alignment in &alignments {
            writeln!(out, "{}", alignment.ali_string())?;
        }
    }

    Ok(())
}
