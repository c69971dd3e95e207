//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Example helper script for a Claude Code skill
#[derive(Parser, Debug)]
#[command(name = "helper")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the example lines
    Run,

    /// View or create the helper configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Print the config file location (`--config` if given, else the default)
    Path,

    /// Write the default configuration to `--config`, or to the default location
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The command to execute, with `run` filled in when none was given
    pub fn effective_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }
}
