//! Framework-independent command types.
//!
//! A [`ConfigAction`] is what every front end boils down to: the raw action
//! grammar (`ConfigAction::parse`), the clap adapter, or code building one
//! by hand. [`ConfigFile::handle`](crate::ConfigFile::handle) executes it.
//!
//! # Action grammar
//!
//! Checked in this order:
//!
//! | Input                 | Action                         |
//! |-----------------------|--------------------------------|
//! | `help` (any case)     | [`ConfigAction::Help`]         |
//! | `list` (any case)     | [`ConfigAction::List`]         |
//! | `section.name=value`  | [`ConfigAction::Set`]          |
//! | `a=b=c`               | [`NkconfError::InvalidFormat`] |
//! | `section.name-`       | [`ConfigAction::Unset`]        |
//! | anything else         | [`NkconfError::UnknownAction`] |
//!
//! Values are taken verbatim. `port=8080` stores the string `"8080"`; use the
//! typed accessors to read it back as a number.

use serde::{Deserialize, Serialize};

use crate::error::NkconfError;

/// A config operation, independent of any CLI framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ConfigAction {
    Help,
    List,
    Set { key: String, value: String },
    Unset { key: String },
}

impl ConfigAction {
    /// Parse a single action string.
    pub fn parse(action: &str) -> Result<Self, NkconfError> {
        if action.eq_ignore_ascii_case("help") {
            return Ok(ConfigAction::Help);
        }
        if action.eq_ignore_ascii_case("list") {
            return Ok(ConfigAction::List);
        }
        if action.contains('=') {
            return match action.split_once('=') {
                Some((key, value)) if !value.contains('=') => Ok(ConfigAction::Set {
                    key: key.into(),
                    value: value.into(),
                }),
                _ => Err(NkconfError::InvalidFormat(action.into())),
            };
        }
        if let Some(key) = action.strip_suffix('-') {
            return Ok(ConfigAction::Unset { key: key.into() });
        }
        Err(NkconfError::UnknownAction(action.into()))
    }
}

/// Which candidate file the last successful load read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSource {
    /// `<home>/.nk/<project>/<file>.json`
    Home,
    /// `<file>.json` in the local directory.
    Local,
}
