//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see the `commands` module).
//! - Does not load or query the store.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cascade")]
#[command(about = "Cascade - query colon-delimited hierarchical configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  cascade dump\n  cascade --file settings.txt dump --output json\n  cascade get window:width --as int\n  cascade get pt --as floats\n  cascade names window\n"
)]
pub struct Cli {
    /// Path to the configuration file to load
    #[arg(
        short,
        long,
        global = true,
        env = "CASCADE_CONFIG",
        default_value = "config.txt"
    )]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the configuration tree
    Dump {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },

    /// Look up a value by colon-delimited path
    Get {
        /// Path to the variable, e.g. window:width
        path: String,

        /// Interpretation to read the value as
        #[arg(long = "as", value_enum, default_value = "string")]
        kind: ValueKind,
    },

    /// List the variable names registered in a scope
    Names {
        /// Path to the scope; the top level when omitted
        path: Option<String>,
    },
}

/// The typed interpretations a value can be read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    /// The raw text of the variable
    String,
    /// Integer interpretation (zero when never coerced)
    Int,
    /// Float interpretation (zero when never coerced)
    Float,
    /// Boolean interpretation (false when never coerced)
    Bool,
    /// Float interpretations of the variable's children, in order
    Floats,
}
