//! Defines the command-line arguments and subcommands for the Stackbind CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "stackbind",
    version,
    about = "Inspect, document and call the formatted built-in functions of a stack engine."
)]
pub struct StackbindArgs {
    /// YAML settings file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all registered functions.
    List,
    /// Print the metadata record of a function.
    Info {
        /// The function name, e.g. ATAN2.
        #[arg(required = true)]
        name: String,
        /// Print JSON instead of a script literal.
        #[arg(long)]
        json: bool,
    },
    /// Print the doc macro of a function.
    Doc {
        /// The function name, e.g. ATAN2.
        #[arg(required = true)]
        name: String,
    },
    /// Push values, call a function, and print the resulting stack.
    Call {
        /// The function name, e.g. ATAN2.
        #[arg(required = true)]
        name: String,
        /// Values pushed in order, the last ending on top. Each is parsed as
        /// JSON; anything else is pushed as a string.
        values: Vec<String>,
    },
}
