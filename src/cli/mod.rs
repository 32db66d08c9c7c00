//! The Stackbind Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Command, StackbindArgs};
use crate::config::{LogSettings, Settings};
use crate::doc::DocGenerator;
use crate::registry::{build_default_registry, FunctionRegistry};
use crate::snapshot;
use crate::stack::{OperandStack, Stack};
use crate::value::Value;
use crate::StackError;

pub mod args;
pub mod output;

/// Environment variable holding `EnvFilter` directives.
pub const LOG_ENV: &str = "STACKBIND_LOG";

/// The main entry point for the CLI.
pub fn run() {
    let args = StackbindArgs::parse();

    let settings = match &args.config {
        Some(path) => Settings::load(path),
        None => Ok(Settings::default()),
    };
    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            output::print_error(e);
            process::exit(2);
        }
    };
    init_tracing(&settings.log);

    let result = build_default_registry()
        .and_then(|registry| dispatch(args.command, &registry, &settings));

    if let Err(e) = result {
        output::print_error(e);
        process::exit(1);
    }
}

/// Installs a stderr subscriber when `STACKBIND_LOG` or the settings ask for one.
fn init_tracing(log: &LogSettings) {
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => match log.filter.as_deref().map(EnvFilter::try_new) {
            Some(Ok(filter)) => filter,
            _ => return,
        },
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("tracing initialized");
}

fn dispatch(
    command: Command,
    registry: &FunctionRegistry,
    settings: &Settings,
) -> Result<(), StackError> {
    match command {
        Command::List => {
            output::print_lines(registry.names());
            Ok(())
        }
        Command::Info { name, json } => handle_info(registry, settings, &name, json),
        Command::Doc { name } => {
            let function = lookup(registry, &name)?;
            let generator = DocGenerator::new(settings.doc.clone());
            print!("{}", generator.mc2(function.as_ref()));
            Ok(())
        }
        Command::Call { name, values } => handle_call(registry, &name, &values),
    }
}

fn lookup<'r>(
    registry: &'r FunctionRegistry,
    name: &str,
) -> Result<&'r std::sync::Arc<dyn crate::function::FormattedFunction>, StackError> {
    registry.get(name).ok_or_else(|| StackError::UnknownFunction {
        name: name.to_string(),
    })
}

/// Handles the `info` subcommand.
fn handle_info(
    registry: &FunctionRegistry,
    settings: &Settings,
    name: &str,
    json: bool,
) -> Result<(), StackError> {
    let function = lookup(registry, name)?;
    let info = DocGenerator::new(settings.doc.clone()).info(function.as_ref());
    if json {
        let text = serde_json::to_string_pretty(&info.to_json())
            .map_err(|e| crate::err_msg!(Internal, "cannot render JSON: {}", e))?;
        println!("{}", text);
    } else {
        println!("{}", snapshot::snapshot(&info));
    }
    Ok(())
}

/// Handles the `call` subcommand.
fn handle_call(
    registry: &FunctionRegistry,
    name: &str,
    values: &[String],
) -> Result<(), StackError> {
    let mut stack = OperandStack::from_values(values.iter().map(|raw| parse_operand(raw)));
    tracing::debug!(function = name, depth = stack.depth(), "calling");
    registry.call(name, &mut stack)?;
    output::print_stack(&stack);
    Ok(())
}

/// JSON when it parses, otherwise the raw text as a string.
pub fn parse_operand(raw: &str) -> Value {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(Value::from)
        .unwrap_or_else(|_| Value::from(raw))
}
