use std::{io::BufRead, path::Path};

use anyhow::{ensure, Context, Result};
use fgoxide::io::Io;
use itertools::Itertools;
use seq_io::fasta::{Reader as FastaReader, Record as FastaRecord};

pub const BUFFER_SIZE: usize = 1024 * 1024;

/// A named sequence read from a FASTA file.  The sequence is upper-cased.
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct NamedSequence {
    pub name: String,
    pub seq: Vec<u8>,
}

/// Converts the FASTA header (which may contain whitespaces) to a sequence name.
fn header_to_name(header: &[u8]) -> Result<String> {
    let header: std::borrow::Cow<str> = String::from_utf8_lossy(header);
    header
        .split_whitespace()
        .next()
        .map(std::string::ToString::to_string)
        .context("empty sequence name")
}

/// Reads every record of the FASTA, which may be GZIP compressed.
pub fn from_fasta<P: AsRef<Path>>(file: &P) -> Result<Vec<NamedSequence>> {
    let fg_io: Io = Io::new(5, BUFFER_SIZE);
    let source: FastaReader<Box<dyn BufRead + Send>> =
        FastaReader::with_capacity(fg_io.new_reader(file)?, BUFFER_SIZE);

    let records = source
        .into_records()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Error reading FASTA: {}", file.as_ref().display()))?;

    ensure!(!records.is_empty(), "Found no sequences in the FASTA");

    records
        .iter()
        .map(|record| {
            let seq = record
                .seq()
                .iter()
                .map(u8::to_ascii_uppercase)
                .collect_vec();
            let name = header_to_name(record.head())?;
            Ok(NamedSequence { name, seq })
        })
        .collect()
}

/// Reads the first two records of the FASTA, to be aligned against each other.
pub fn pair_from_fasta<P: AsRef<Path>>(file: &P) -> Result<(NamedSequence, NamedSequence)> {
    let sequences = from_fasta(file)?;
    ensure!(
        sequences.len() >= 2,
        "Expected at least two sequences in the FASTA, found {}",
        sequences.len()
    );
    sequences
        .into_iter()
        .next_tuple()
        .context("Expected at least two sequences in the FASTA")
}
