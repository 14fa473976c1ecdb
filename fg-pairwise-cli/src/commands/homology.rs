use super::command::Command;
use anyhow::Result;
use clap::Parser;
use log::info;
use pairwise::{
    align::homology::{sum_of_homology, HomologyProbabilities},
    util::version::built_info,
};
use std::io::{self, Write};

/// Computes the total probability of all alignments of two sequences.
///
/// Every alignment column is scored as an independent event with the given probability: two
/// equal symbols, two different symbols, or a symbol against a gap.  The natural log of the sum of
/// the probabilities of every possible alignment is written to standard output.
#[derive(Parser, Debug, Clone)]
#[clap(version = built_info::VERSION.as_str(), term_width=0)]
pub struct Homology {
    /// The first sequence.
    #[clap(long, short = 'x', display_order = 1)]
    x: String,

    /// The second sequence.
    #[clap(long, short = 'y', display_order = 2)]
    y: String,

    /// Probability of a column with two equal symbols, in (0, 1]
    #[clap(long, short = 'M', default_value = "0.9", display_order = 3)]
    match_probability: f64,

    /// Probability of a column with two different symbols, in (0, 1]
    #[clap(long, short = 'X', default_value = "0.05", display_order = 4)]
    mismatch_probability: f64,

    /// Probability of a column with a symbol against a gap, in (0, 1]
    #[clap(long, short = 'G', default_value = "0.05", display_order = 5)]
    gap_probability: f64,
}

impl Homology {
    fn log_probability(&self) -> Result<f64> {
        let probabilities = HomologyProbabilities::new(
            self.match_probability,
            self.mismatch_probability,
            self.gap_probability,
        )?;
        let matrix = sum_of_homology(self.x.as_bytes(), self.y.as_bytes(), &probabilities);
        Ok(matrix.log_probability())
    }
}

impl Command for Homology {
    fn execute(&self) -> Result<()> {
        info!(
            "Summing over all alignments of {} versus {} symbols",
            self.x.len(),
            self.y.len()
        );
        let log_probability = self.log_probability()?;
        writeln!(io::stdout().lock(), "{log_probability}")?;
        Ok(())
    }
}

#[cfg(test)]
pub mod tests {
    use clap::Parser;
    use rstest::rstest;

    use super::Homology;

    #[rstest]
    fn test_log_probability() {
        let homology = Homology::try_parse_from([
            "homology", "-x", "A", "-y", "A", "-M", "0.5", "-X", "0.2", "-G", "0.1",
        ])
        .unwrap();
        let expected = (0.5f64 + 2.0 * 0.1 * 0.1).ln();
        assert!((homology.log_probability().unwrap() - expected).abs() < 1e-9);
    }

    #[rstest]
    fn test_invalid_probability() {
        let homology =
            Homology::try_parse_from(["homology", "-x", "A", "-y", "A", "-G", "1.5"]).unwrap();
        assert!(homology.log_probability().is_err());
    }
}
