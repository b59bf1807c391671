//! Command execution: the logic behind `help`, `list`, `key=value` and
//! `key-`.
//!
//! Every recoverable problem (bad grammar, unknown action, missing key) is
//! reported through the terminal and comes back as `Ok(false)` with nothing
//! changed. Only failures writing the file surface as `Err`.

use crate::error::NkconfError;
use crate::manager::ConfigFile;
use crate::terminal::Terminal;
use crate::types::ConfigAction;

const SECTION: &str = "Config";

/// The static listing printed by `help`.
pub const HELP_LINES: &[&str] = &[
    "list of commands:",
    "",
    "  help               : Show this help",
    "  list               : List of configuration",
    "  section.name=value : Set a parameter",
    "  section.name-      : Remove a parameter",
];

const HELP_HINT: &[&str] = &["use the command { help } for more information"];

impl<T: Terminal> ConfigFile<T> {
    /// Parse and run one action string. See [`ConfigAction`] for the grammar.
    pub fn execute_command(&mut self, action: &str) -> Result<bool, NkconfError> {
        match ConfigAction::parse(action) {
            Ok(parsed) => self.handle(&parsed),
            Err(NkconfError::UnknownAction(_)) => {
                self.terminal
                    .alert(&format!("[{SECTION}] Unknown action: {action}"));
                self.terminal.help(HELP_HINT, Some(SECTION), true);
                Ok(false)
            }
            Err(err) => {
                self.terminal.error(&format!("[{SECTION}] Error: {err}"));
                Ok(false)
            }
        }
    }

    /// Run a parsed action.
    ///
    /// `Set` and a successful `Unset` save the file and display the result.
    pub fn handle(&mut self, action: &ConfigAction) -> Result<bool, NkconfError> {
        match action {
            ConfigAction::Help => {
                self.terminal.help(HELP_LINES, Some(SECTION), false);
                Ok(true)
            }
            ConfigAction::List => {
                self.terminal.info("Show config file:");
                self.display();
                Ok(true)
            }
            ConfigAction::Set { key, value } => {
                self.terminal.debug(&format!(
                    "Update parameter [ {key} ] with value \"{value}\""
                ));
                if let Err(err) = self.store.set(key, value.as_str()) {
                    self.terminal.error(&format!("[{SECTION}] {err}"));
                    return Ok(false);
                }
                self.terminal
                    .success(&format!("Parameter updated {{ {key} }}"));
                self.persist_and_show()?;
                Ok(true)
            }
            ConfigAction::Unset { key } => {
                self.terminal.debug(&format!("Remove key {{ {key} }}"));
                if let Err(err) = self.store.try_remove(key) {
                    self.terminal.fatal(&format!("[{SECTION}] {err}"));
                    return Ok(false);
                }
                self.terminal
                    .success(&format!("Parameter removed {{ {key} }}"));
                self.persist_and_show()?;
                Ok(true)
            }
        }
    }

    fn persist_and_show(&mut self) -> Result<(), NkconfError> {
        self.save()?;
        self.terminal.success("Config file updated");
        self.display();
        Ok(())
    }
}
