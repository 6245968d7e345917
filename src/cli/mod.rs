//! Command-line build integration.
//!
//! Loads configuration, reads the translation source, runs the conversion engine
//! and writes or reports the resulting catalog.

mod args;
mod commands;
mod exit_status;
mod logging;
mod report;

use anyhow::Result;

pub use args::{Arguments, BuildCommand, CheckCommand, Command, CommonArgs};
pub use exit_status::ExitStatus;
pub use logging::init_logging;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Some(Command::Build(cmd)) => commands::build::build(cmd),
        Some(Command::Check(cmd)) => commands::check::check(cmd),
        Some(Command::Languages) => Ok(commands::languages::languages()),
        Some(Command::Init) => commands::init::init(),
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    }
}
