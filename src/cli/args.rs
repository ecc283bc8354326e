//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Scan Python sources and write the messages catalog
//! - `init`: Initialize msgcat configuration file

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

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Parser)]
pub struct GenerateArgs {
    /// Directory to start config discovery from
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Package root to scan (overrides config file)
    #[arg(long)]
    pub package_root: Option<PathBuf>,

    /// Directory of non-library plugins (overrides config file)
    #[arg(long)]
    pub non_library_dir: Option<PathBuf>,

    /// Requirements file listing installed plugins (overrides config file)
    #[arg(long)]
    pub plugins_manifest: Option<PathBuf>,

    /// Extra directory to search for installed plugins, may be repeated
    #[arg(long = "plugin-path", env = "MSGCAT_PLUGIN_PATH", value_delimiter = ':')]
    pub plugin_paths: Vec<PathBuf>,

    /// Output directory, relative to the package root (overrides config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan sources and write the messages catalog and its schema
    Generate(GenerateCommand),
    /// Initialize a new .msgcatrc.json configuration file
    Init,
}
