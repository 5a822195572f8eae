//! Print the contents of a project's scenes folder
#![forbid(unsafe_code)]

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;

mod config;
mod fs;
mod lister;

use config::Config;
use fs::RealFileSystem;

/// List the immediate contents of `assets/scenes` in the current directory
#[derive(clap::Parser, Debug)]
#[command(version, about)]
struct Args {}

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();
    env_logger::init();

    let working_dir = std::env::current_dir().context("failed to read the current directory")?;
    let config = Config::load(&working_dir)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    lister::list_scenes(&RealFileSystem, &working_dir, &config, &mut out)?;
    out.flush().context("failed to write listing")?;

    Ok(())
}
