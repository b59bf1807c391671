//! Terminal output used by the config manager and command interpreter.
//!
//! The core only ever talks to the [`Terminal`] trait: leveled messages, a
//! help renderer, and a JSON pretty printer. None of it feeds back into the
//! stored configuration, so callers are free to swap in their own
//! implementation (a GUI log pane, a test recorder, `/dev/null`).
//!
//! [`ConsoleTerminal`] is the stock implementation: colored messages on
//! stdout/stderr, with `debug` routed to `tracing` instead of the console.

use std::fmt;

use crate::persist;
use crate::store::Section;

/// Message severity, lowest to highest.
///
/// `Fatal` is only the loudest level. It never exits the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Success,
    Warning,
    Alert,
    Error,
    Fatal,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Success => "success",
            Level::Warning => "warning",
            Level::Alert => "alert",
            Level::Error => "error",
            Level::Fatal => "fatal",
        };
        f.write_str(name)
    }
}

/// Output sink for user-facing messages.
pub trait Terminal {
    /// Emit one message at `level`.
    fn message(&self, level: Level, text: &str);

    /// Render a block of help lines, optionally under a `[section]` heading.
    /// `newline` adds a blank line after the block.
    fn help(&self, lines: &[&str], section: Option<&str>, newline: bool);

    /// Pretty-print a config tree.
    fn json_print(&self, tree: &Section);

    fn debug(&self, text: &str) {
        self.message(Level::Debug, text);
    }

    fn info(&self, text: &str) {
        self.message(Level::Info, text);
    }

    fn success(&self, text: &str) {
        self.message(Level::Success, text);
    }

    fn warning(&self, text: &str) {
        self.message(Level::Warning, text);
    }

    fn alert(&self, text: &str) {
        self.message(Level::Alert, text);
    }

    fn error(&self, text: &str) {
        self.message(Level::Error, text);
    }

    fn fatal(&self, text: &str) {
        self.message(Level::Fatal, text);
    }
}

// ---------------------------------------------------------------------------
// ANSI color helpers
// ---------------------------------------------------------------------------

fn ansi_color_code(level: Level) -> &'static str {
    match level {
        Level::Debug => "\x1b[90m",
        Level::Info => "\x1b[0m",
        Level::Success => "\x1b[32m",
        Level::Warning => "\x1b[33m",
        Level::Alert => "\x1b[35m",
        Level::Error => "\x1b[31m",
        Level::Fatal => "\x1b[1;31m",
    }
}

const RESET: &str = "\x1b[0m";
const HEADING: &str = "\x1b[36m";

/// Writes to the process's stdout/stderr.
#[derive(Debug, Clone)]
pub struct ConsoleTerminal {
    color: bool,
}

impl ConsoleTerminal {
    pub fn new() -> Self {
        Self { color: true }
    }

    /// No ANSI escapes, for piping or dumb terminals.
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

impl Default for ConsoleTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for ConsoleTerminal {
    fn message(&self, level: Level, text: &str) {
        match level {
            Level::Debug => tracing::debug!("{text}"),
            Level::Info | Level::Success => {
                println!("{}", self.paint(ansi_color_code(level), text));
            }
            _ => {
                let label = self.paint(ansi_color_code(level), &format!("[{level}]"));
                eprintln!("{label} {text}");
            }
        }
    }

    fn help(&self, lines: &[&str], section: Option<&str>, newline: bool) {
        if let Some(section) = section {
            println!("{}", self.paint(HEADING, &format!("[{section}]")));
        }
        for line in lines {
            println!("{line}");
        }
        if newline {
            println!();
        }
    }

    fn json_print(&self, tree: &Section) {
        match persist::to_pretty_json(tree) {
            Ok(text) => print!("{text}"),
            Err(e) => self.error(&e.to_string()),
        }
    }
}
