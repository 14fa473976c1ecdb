use anyhow::Result;
use clap::builder::PossibleValue;
use enum_dispatch::enum_dispatch;
use pairwise::align::AlignmentMode;
use std::{fmt::Display, str::FromStr};

/// A sub-command of the `pairwise` tool.
#[enum_dispatch]
pub trait Command {
    /// Runs the command, writing its report to standard output.
    #[allow(clippy::missing_errors_doc)]
    fn execute(&self) -> Result<()>;
}

/// An enum whose variants, as displayed, are the possible values of a command line option.
pub trait ValueEnum: Display + FromStr + Sized + 'static {
    fn variants() -> &'static [Self];

    fn possible_values() -> Vec<PossibleValue> {
        Self::variants()
            .iter()
            .map(|variant| PossibleValue::new(variant.to_string()))
            .collect()
    }
}

impl ValueEnum for AlignmentMode {
    fn variants() -> &'static [Self] {
        &[
            Self::Global,
            Self::Local,
            Self::SemiGlobal,
            Self::GlobalLinearSpace,
            Self::LocalLinearSpace,
        ]
    }
}

#[cfg(test)]
pub mod tests {
    use pairwise::align::AlignmentMode;
    use rstest::rstest;

    use super::ValueEnum;

    #[rstest]
    fn test_possible_values_parse_back() {
        let values = AlignmentMode::possible_values();
        assert_eq!(values.len(), AlignmentMode::variants().len());
        for (value, mode) in values.iter().zip(AlignmentMode::variants()) {
            assert_eq!(value.get_name().parse::<AlignmentMode>().unwrap(), *mode);
        }
    }
}
