//! # CLI Argument Definitions
//!
//! Subcommands take a profile file holding the environment and the named variants.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "resconf")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Pick the best resource variant for a device configuration")]
pub struct Cli {
    /// Log at debug level regardless of the profile's `[logging]` section
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct ProfileArg {
    /// Profile file (TOML, JSON or YAML); `RESCONF__` variables override its values
    pub profile: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the variant that best fits the environment
    Select {
        #[command(flatten)]
        profile: ProfileArg,
    },
    /// Print every legal variant, best first
    Rank {
        #[command(flatten)]
        profile: ProfileArg,
    },
    /// Print each variant with its match verdict
    #[command(name = "match")]
    Match {
        #[command(flatten)]
        profile: ProfileArg,
    },
    /// Print the axis groups on which two variants differ
    Diff {
        #[command(flatten)]
        profile: ProfileArg,
        /// Variant name, or `environment`
        a: String,
        /// Variant name, or `environment`
        b: String,
    },
}

impl Command {
    /// The profile path shared by every subcommand.
    pub fn profile(&self) -> &Path {
        match self {
            Self::Select { profile }
            | Self::Rank { profile }
            | Self::Match { profile }
            | Self::Diff { profile, .. } => &profile.profile,
        }
    }
}
