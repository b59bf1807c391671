//! Per-project JSON configuration with dotted-path access.
//!
//! nkconf keeps a small configuration tree for a named project in
//! `~/.nk/<project>/config.json`, reads and writes it through dotted keys,
//! and ships a tiny command grammar for editing it from a command line.
//!
//! ```ignore
//! let mut cfg = ConfigFile::new("myapp")?;
//! cfg.load()?;
//! let port = cfg.store().as_int("server.port", 8080)?;
//! cfg.set("server.host", "0.0.0.0")?;
//! cfg.save()?;
//! ```
//!
//! # Dotted paths
//!
//! A key like `server.http.port` names the leaf `port` inside the section
//! `http` inside the section `server`. A key without dots lives at the root.
//! The [`Store`] implements three operations on top of that:
//!
//! - **get** walks the sections and returns the leaf, or the caller's
//!   default when the leaf or any section on the way is missing. A missing
//!   section is logged, never an error.
//! - **set** walks the sections and creates any that don't exist yet
//!   (auto-vivification), then overwrites the leaf. `set("a.b.c", 1)` on an
//!   empty store produces `{"a": {"b": {"c": 1}}}`.
//! - **remove** walks without creating anything and deletes the leaf,
//!   reporting `false` if it wasn't there.
//!
//! Values are `serde_json::Value`, a closed sum of null, bool, number,
//! string, list and section. A section is a [`Section`]
//! (`serde_json::Map`), which keeps keys sorted.
//!
//! # Typed reads
//!
//! `as_bool`, `as_int`, `as_float`, `as_string` and `as_list` read a value
//! (or the default) and convert it. Conversion is lenient in the usual
//! scripting sense: `"42"` reads as the integer 42, an empty list is false,
//! a number reads as the string `"8080"`. Conversions that make no sense
//! (`as_int` on `"forty-two"`) return [`NkconfError::Conversion`] rather than
//! falling back to the default. For richer types use
//! [`Store::get_as`], which deserializes with serde.
//!
//! # File location
//!
//! ```text
//! ~/.nk/<project>/<file>.json     read first, always written by save()
//! ./<file>.json                   read only if the home file is missing
//! ```
//!
//! The home location is resolved once per [`ConfigFile`], creating the
//! directories as needed, and cached. The file is written with sorted keys
//! and four-space indentation. Writes truncate and rewrite the file in
//! place: there is no locking and no atomic rename, so concurrent writers
//! are not supported.
//!
//! # Commands
//!
//! [`ConfigFile::execute_command`] understands one action string at a time:
//!
//! | Action                | Effect                                  |
//! |-----------------------|-----------------------------------------|
//! | `help`                | print the command list                  |
//! | `list`                | print the whole configuration           |
//! | `section.name=value`  | set (as a string), save, print          |
//! | `section.name-`       | remove, save, print                     |
//!
//! Anything else is reported and returns `Ok(false)`. The same actions are
//! available as [`ConfigAction`] values for code that doesn't start from a
//! string, and (with the `clap` feature) as clap subcommands via
//! [`ConfigArgs`].
//!
//! # Output
//!
//! Messages, help text and listings go through the [`Terminal`] trait.
//! [`ConsoleTerminal`] prints colored output and routes debug messages to
//! `tracing`; swap it out with
//! [`ConfigFileBuilder::terminal`](ConfigFileBuilder::terminal).
//! Diagnostics from the store itself are emitted as `tracing` events.
//!
//! # Error handling
//!
//! All fallible operations return [`NkconfError`]. Missing keys and
//! sections are recovered where they happen (defaults, `false`); malformed
//! JSON, I/O failures and conversion failures propagate. With the
//! `rich-errors` feature the error type also implements
//! `miette::Diagnostic`.

pub mod error;
pub mod terminal;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod coerce;
mod file;
mod manager;
mod ops;
mod path;
mod persist;
mod store;

#[cfg(test)]
mod fixtures;

pub use builder::ConfigFileBuilder;
#[cfg(feature = "clap")]
pub use cli::{ConfigArgs, ConfigSubcommand};
pub use error::NkconfError;
pub use manager::ConfigFile;
pub use ops::HELP_LINES;
pub use path::DottedPath;
pub use persist::to_pretty_json;
pub use serde_json::Value;
pub use store::{Section, Store};
pub use terminal::{ConsoleTerminal, Level, Terminal};
pub use types::{ConfigAction, FileSource};
