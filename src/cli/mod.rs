// CLI module
// Command-line interface, argument parsing and command execution

mod args;
mod commands;

pub use args::{CardCommand, CliArgs, Command, FilterArgs, TxCommand};
pub use commands::{execute, run};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints the message and exits.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
