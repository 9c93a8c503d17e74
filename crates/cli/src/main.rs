//! Cascade CLI - query colon-delimited hierarchical configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load the configuration file into a store and dispatch subcommands.
//!
//! Does NOT handle:
//! - Parsing or typed-value semantics (see `cascade-store`).
//!
//! Invariants:
//! - Store-level misses never produce a nonzero exit; only real failures
//!   (file I/O, invalid usage) do.

mod args;
mod commands;
mod error;

use args::{Cli, Commands};
use cascade_store::{FileSource, Store};
use clap::Parser;
use error::ExitCodeExt;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut store = Store::new();
    store.load_from(FileSource::new(&cli.file))?;
    debug!(vars = store.len(), "configuration loaded");

    match cli.command {
        Commands::Dump { output } => commands::dump::run(&store, &output),
        Commands::Get { path, kind } => commands::get::run(&mut store, &path, kind),
        Commands::Names { path } => commands::names::run(&mut store, path.as_deref()),
    }
}
