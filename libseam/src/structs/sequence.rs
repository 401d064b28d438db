use seq_io::fasta::{Reader, Record};
use std::fmt::{Debug, Display, Formatter};
use std::path::Path;

use crate::alphabet::{UTF8_PAD, UTF8_SPACE};
use anyhow::{Context, Result};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvalidSequenceError {
    #[error("sequence byte count {byte_count} does not match sequence length {length} + 1")]
    LengthMismatch { length: usize, byte_count: usize },
    #[error("sequence byte buffer is missing its padding byte")]
    MissingPadByte,
}

/// An ordered sequence of symbols, stored as raw UTF8 bytes.
pub struct Sequence {
    /// The name of the sequence
    pub name: String,
    /// The sequence details. If the sequence comes from a fasta, this
    /// is the information following the sequence name in the header
    pub details: Option<String>,
    /// The length of the sequence
    pub length: usize,
    /// The UTF8 bytes that make up the sequence. Position 1 of the
    /// sequence is at index 1; index 0 holds a padding byte
    pub utf8_bytes: Vec<u8>,
}

impl Sequence {
    pub fn from_utf8(bytes: &[u8]) -> Self {
        let mut utf8_bytes: Vec<u8> = vec![UTF8_PAD; bytes.len() + 1];
        utf8_bytes[1..].copy_from_slice(bytes);

        Sequence {
            name: "".to_string(),
            details: None,
            length: utf8_bytes.len() - 1,
            utf8_bytes,
        }
    }

    pub fn from_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let mut seqs: Vec<Self> = vec![];

        let mut reader = Reader::from_path(&path).with_context(|| {
            format!("failed to open fasta file: {}", path.as_ref().to_string_lossy())
        })?;

        while let Some(record) = reader.next() {
            let record = record.with_context(|| "failed to read fasta record")?;
            let mut header_bytes = record.head().to_vec();
            let first_space_idx = header_bytes.iter().position(|&b| b == UTF8_SPACE);

            let error_context: fn() -> &'static str =
                || "failed to create String from fasta header bytes";

            let (name, details) = match first_space_idx {
                Some(idx) => {
                    let details_bytes = header_bytes.split_off(idx + 1);
                    header_bytes.pop();
                    (
                        String::from_utf8(header_bytes).with_context(error_context)?,
                        Some(String::from_utf8(details_bytes).with_context(error_context)?),
                    )
                }
                None => (
                    String::from_utf8(header_bytes).with_context(error_context)?,
                    None,
                ),
            };

            // We want position 1 of the sequence to be at index 1,
            // so we'll buffer with a padding byte
            let mut utf8_bytes: Vec<u8> = vec![UTF8_PAD];
            for line in record.seq_lines() {
                utf8_bytes.extend_from_slice(line);
            }

            seqs.push(Sequence {
                name,
                details,
                length: utf8_bytes.len() - 1,
                utf8_bytes,
            });
        }
        Ok(seqs)
    }

    /// Check the internal consistency of the sequence.
    ///
    /// A sequence built with the provided constructors is always
    /// consistent; this guards hand-constructed values before any
    /// alignment grid is allocated.
    pub fn validate(&self) -> std::result::Result<(), InvalidSequenceError> {
        if self.utf8_bytes.len() != self.length + 1 {
            return Err(InvalidSequenceError::LengthMismatch {
                length: self.length,
                byte_count: self.utf8_bytes.len(),
            });
        }

        if self.utf8_bytes[0] != UTF8_PAD {
            return Err(InvalidSequenceError::MissingPadByte);
        }

        Ok(())
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;

        if let Some(ref details) = self.details {
            write!(f, " {details}")?
        };

        writeln!(f)?;

        // note: the utf8 bytes start with a padding byte, which
        //       we skip over here
        let mut iter = self.utf8_bytes[1..].chunks(80).peekable();

        while let Some(byte_chunk) = iter.next() {
            match std::str::from_utf8(byte_chunk) {
                Ok(seq_line) => {
                    write!(f, "{}", seq_line)?;
                    if iter.peek().is_some() {
                        // if we're not on the last
                        // line, add a linebreak
                        writeln!(f)?;
                    }
                }
                Err(_) => return Err(std::fmt::Error),
            }
        }
        Ok(())
    }
}

impl Debug for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", std::str::from_utf8(&self.utf8_bytes[1..]).unwrap())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_utf8() {
        let seq = Sequence::from_utf8(b"ACGT");

        assert!(seq.length == 4);
        assert!(seq.utf8_bytes == vec![UTF8_PAD, b'A', b'C', b'G', b'T']);
        assert!(seq.validate().is_ok());
    }

    #[test]
    fn test_from_utf8_empty() {
        let seq = Sequence::from_utf8(b"");

        assert!(seq.length == 0);
        assert!(seq.utf8_bytes == vec![UTF8_PAD]);
        assert!(seq.validate().is_ok());
    }

    #[test]
    fn test_validate_length_mismatch() {
        let mut seq = Sequence::from_utf8(b"ACGT");
        seq.length = 7;

        assert!(matches!(
            seq.validate(),
            Err(InvalidSequenceError::LengthMismatch {
                length: 7,
                byte_count: 5
            })
        ));
    }

    #[test]
    fn test_validate_missing_pad_byte() {
        let mut seq = Sequence::from_utf8(b"ACGT");
        seq.utf8_bytes[0] = b'A';

        assert!(matches!(
            seq.validate(),
            Err(InvalidSequenceError::MissingPadByte)
        ));
    }
}
