//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

use crate::cli::migrate::SYNOPSIS as MIGRATE_SYNOPSIS;

/// Provider documentation tooling
#[derive(Parser, Debug)]
#[command(name = "tfplugindocs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Debug logging to stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = MIGRATE_SYNOPSIS, disable_help_flag = true)]
    Migrate {
        /// Arguments for migrate (see `tfplugindocs migrate --help`)
        #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
