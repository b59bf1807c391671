//! Clap adapter for nkconf.
//!
//! Optional, behind the `clap` Cargo feature (on by default). Provides
//! [`ConfigArgs`] to embed in an application's clap derive, giving it
//! `config list|set|unset|run` subcommands.
//!
//! The only bridge to the core is [`ConfigArgs::into_action()`], which turns
//! the parsed arguments into a [`ConfigAction`](crate::ConfigAction). From
//! there everything goes through
//! [`ConfigFile::handle()`](crate::ConfigFile::handle). Applications that
//! already receive the raw action string can skip this module and call
//! [`ConfigFile::execute_command()`](crate::ConfigFile::execute_command).

use clap::{Args, Subcommand};

use crate::error::NkconfError;
use crate::types::ConfigAction;

/// Clap-derived args for the `config` subcommand group.
///
/// ```ignore
/// #[derive(Subcommand)]
/// enum Commands {
///     Config(ConfigArgs),
/// }
/// ```
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: Option<ConfigSubcommand>,
}

/// Available config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show the whole configuration.
    List,
    /// Set a parameter. The value is stored as a string.
    Set {
        /// Dotted key path (e.g. "server.port").
        key: String,
        /// Value to set.
        value: String,
    },
    /// Remove a parameter.
    Unset {
        /// Dotted key path (e.g. "server.port").
        key: String,
    },
    /// Run a raw action: `list`, `help`, `section.name=value`, `section.name-`.
    Run {
        action: String,
    },
}

impl ConfigArgs {
    /// Convert clap-parsed args into a framework-agnostic `ConfigAction`.
    ///
    /// Bare `config` maps to `Help`, since clap owns the `help` subcommand.
    /// `run` parses its argument with [`ConfigAction::parse`] and can fail
    /// the same ways.
    pub fn into_action(self) -> Result<ConfigAction, NkconfError> {
        match self.action {
            None => Ok(ConfigAction::Help),
            Some(ConfigSubcommand::List) => Ok(ConfigAction::List),
            Some(ConfigSubcommand::Set { key, value }) => Ok(ConfigAction::Set { key, value }),
            Some(ConfigSubcommand::Unset { key }) => Ok(ConfigAction::Unset { key }),
            Some(ConfigSubcommand::Run { action }) => ConfigAction::parse(&action),
        }
    }
}
