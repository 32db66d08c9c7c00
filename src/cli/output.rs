//! Handles all user-facing output for the CLI.
//!
//! Colored stack listings go through `termcolor`, errors through `miette`
//! reports, so every command renders results the same way.

use std::io::{IsTerminal, Write};

use miette::Report;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::diagnostics::StackError;
use crate::stack::OperandStack;

/// Prints the stack one level per line, the top last, with colored level numbers.
pub fn print_stack(stack: &OperandStack) {
    let choice = if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    let values: Vec<_> = stack.iter_from_top().collect();
    for (level, value) in values.iter().enumerate().rev() {
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true));
        let _ = write!(stdout, "{}:", level + 1);
        let _ = stdout.reset();
        let _ = writeln!(stdout, " {}", value);
    }
}

/// Prints plain lines to stdout.
pub fn print_lines<I, S>(lines: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        println!("{}", line.as_ref());
    }
}

/// Prints a StackError with full miette diagnostics to stderr.
pub fn print_error(error: StackError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}
