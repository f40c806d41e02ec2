use clap::Parser;

/// The binary takes no options of its own; clap still provides `--help` and
/// `--version` and rejects anything else.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "nix-and-poetry")]
#[command(version, about = "Print a greeting and the versions of the linked dependencies")]
pub struct CliConfig {}
