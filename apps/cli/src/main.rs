#![allow(clippy::print_stdout)]

mod args;
mod handlers;
mod models;

use crate::args::{Cli, Command};
use crate::handlers::{diff, matching, rank, select};
use anyhow::Result;
use clap::Parser;
use resconf::prelude::load_profile;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let profile = load_profile(cli.command.profile())?;
    let _logger = resconf::init_logging(env!("CARGO_BIN_NAME"), &profile.logging, cli.verbose)?;

    let output = match &cli.command {
        Command::Select { .. } => select::select(&profile, cli.json)?,
        Command::Rank { .. } => rank::rank_variants(&profile, cli.json)?,
        Command::Match { .. } => matching::match_variants(&profile, cli.json)?,
        Command::Diff { a, b, .. } => diff::diff_variants(&profile, a, b, cli.json)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
