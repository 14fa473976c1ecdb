pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{align::Align, command::Command, homology::Homology};
use enum_dispatch::enum_dispatch;
use env_logger::Env;
use pairwise::util::version::built_info;

/// Optimal pairwise alignment of two sequences under a linear gap score.
#[derive(Parser, Debug)]
#[command(name = "pairwise", version = built_info::VERSION.as_str())]
struct Args {
    #[clap(subcommand)]
    subcommand: Subcommand,
}

#[enum_dispatch(Command)]
#[derive(Parser, Debug)]
enum Subcommand {
    Align(Align),
    Homology(Homology),
}

fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args: Args = Args::parse();
    args.subcommand.execute()
}

#[cfg(test)]
pub mod tests {
    use clap::Parser;
    use rstest::rstest;

    use super::{Args, Subcommand};

    #[rstest]
    fn test_subcommands() {
        let args = Args::try_parse_from(["pairwise", "align", "-x", "AC", "-y", "AG"]).unwrap();
        assert!(matches!(args.subcommand, Subcommand::Align(_)));
        let args = Args::try_parse_from(["pairwise", "homology", "-x", "AC", "-y", "AG"]).unwrap();
        assert!(matches!(args.subcommand, Subcommand::Homology(_)));
    }
}
