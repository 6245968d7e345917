//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `build`: Convert the translation source and write `_locales/<lang>/messages.json`
//! - `check`: Convert without writing and print a per-language summary
//! - `languages`: List the locale codes accepted by the Chrome Web Store
//! - `init`: Create a `.yamllocalesrc.json` with default settings

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Build(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Languages) | Some(Command::Init) | None => false,
        }
    }
}

/// Arguments shared by commands that run a conversion.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Translation source file (overrides config file)
    #[arg(long, env = "YAML_LOCALES_SOURCE")]
    pub source: Option<PathBuf>,

    /// Default language code (overrides config file)
    #[arg(long)]
    pub default_language: Option<String>,

    /// Fail on language codes the Chrome Web Store does not accept
    #[arg(long)]
    pub enforce_supported_languages: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output root for `<lang>/messages.json` (overrides config file)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Report what would be written without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert the translation source into _locales/<lang>/messages.json files
    Build(BuildCommand),
    /// Convert the translation source and report languages and backfilled entries
    Check(CheckCommand),
    /// List locale codes accepted by the Chrome Web Store
    Languages,
    /// Initialize a new .yamllocalesrc.json configuration file
    Init,
}
