use super::command::{Command, ValueEnum};
use anyhow::{Context, Result};
use clap::{
    builder::{PossibleValuesParser, TypedValueParser as _},
    Parser,
};
use log::info;
use pairwise::{
    align::{AlignmentMode, AlignmentOutcome, Builder},
    util::{
        fasta::{pair_from_fasta, NamedSequence},
        version::built_info,
    },
};
use std::{
    io::{self, Write},
    path::PathBuf,
};

/// Aligns two sequences under a linear gap score.
///
/// The sequences are given either inline with `--x` and `--y`, or as the first two records of a
/// FASTA with `--fasta`.  Sequences read from a FASTA are upper-cased; inline sequences are used
/// as given.  The gap symbol `-` may not appear in either sequence.
///
/// The output is a summary line (mode, spans, score, and CIGAR using `=`, `X`, `I` and `D`)
/// followed by the two aligned strings.  With `--json` the alignment and, for the quadratic
/// modes, the full dynamic programming matrix are written as JSON instead.
#[derive(Parser, Debug, Clone)]
#[clap(version = built_info::VERSION.as_str(), term_width=0)]
pub struct Align {
    /// The first sequence.
    #[clap(long, short = 'x', requires = "y", display_order = 1)]
    x: Option<String>,

    /// The second sequence.
    #[clap(long, short = 'y', requires = "x", display_order = 2)]
    y: Option<String>,

    /// The path to a FASTA whose first two records are aligned.
    #[clap(
        long,
        short = 'f',
        conflicts_with_all = ["x", "y"],
        required_unless_present = "x",
        display_order = 3
    )]
    fasta: Option<PathBuf>,

    /// Score for a sequence match
    #[clap(
        long,
        short = 'A',
        default_value = "1",
        allow_hyphen_values = true,
        display_order = 4
    )]
    match_score: i32,

    /// Score for a sequence mismatch
    #[clap(
        long,
        short = 'B',
        default_value = "-1",
        allow_hyphen_values = true,
        display_order = 5
    )]
    mismatch_score: i32,

    /// Score for a symbol aligned to a gap, zero or negative; a gap of size k scores '{G}*k'
    #[clap(
        long,
        short = 'G',
        default_value = "-1",
        allow_hyphen_values = true,
        display_order = 6
    )]
    gap_score: i32,

    /// The alignment mode:
    /// - global: aligns the full x versus the full y.
    /// - local: aligns a sub-sequence of x versus a sub-sequence of y.
    /// - semi-global: aligns x versus y without penalizing leading overhangs.
    /// - global-linear-space: global, in linear space (Hirschberg).
    /// - local-linear-space: local, in linear space.
    #[clap(
        long,
        short = 'm',
        value_parser = PossibleValuesParser::new(AlignmentMode::possible_values())
            .try_map(|s| s.parse::<AlignmentMode>()),
        default_value_t = AlignmentMode::Global,
        ignore_case = true,
        display_order = 7,
        verbatim_doc_comment
    )]
    mode: AlignmentMode,

    /// Write the alignment as JSON.
    #[clap(long, short = 'j', default_value = "false", display_order = 8)]
    json: bool,
}

impl Align {
    /// The two sequences to align, named `x` and `y` when given inline.
    fn sequences(&self) -> Result<(NamedSequence, NamedSequence)> {
        match (&self.x, &self.y, &self.fasta) {
            (Some(x), Some(y), None) => Ok((
                NamedSequence {
                    name: "x".to_string(),
                    seq: x.as_bytes().to_vec(),
                },
                NamedSequence {
                    name: "y".to_string(),
                    seq: y.as_bytes().to_vec(),
                },
            )),
            (None, None, Some(fasta)) => {
                info!("Reading sequences from {}", fasta.display());
                pair_from_fasta(fasta)
            }
            _ => anyhow::bail!("Specify either both --x and --y, or --fasta"),
        }
    }

    fn align(&self, x: &NamedSequence, y: &NamedSequence) -> Result<AlignmentOutcome> {
        let mut aligners = Builder::default()
            .mode(self.mode)
            .match_score(self.match_score)
            .mismatch_score(self.mismatch_score)
            .gap_score(self.gap_score)
            .build_aligners()?;
        let outcome = aligners
            .align(&x.seq, &y.seq)
            .with_context(|| format!("Could not align {} versus {}", x.name, y.name))?;
        Ok(outcome)
    }

    fn write<W: Write>(&self, out: &mut W, outcome: &AlignmentOutcome) -> Result<()> {
        if self.json {
            serde_json::to_writer_pretty(&mut *out, outcome)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", outcome.alignment())?;
            writeln!(out, "{}", outcome.alignment().aligned)?;
        }
        Ok(())
    }
}

impl Command for Align {
    /// Executes the align command
    fn execute(&self) -> Result<()> {
        let (x, y) = self.sequences()?;
        info!(
            "Aligning {} ({} symbols) versus {} ({} symbols) in {} mode",
            x.name,
            x.seq.len(),
            y.name,
            y.seq.len(),
            self.mode
        );
        let outcome = self.align(&x, &y)?;
        info!("Alignment score: {}", outcome.alignment().score);
        self.write(&mut io::stdout().lock(), &outcome)
    }
}
