use std::path::PathBuf;

use crate::error::NkconfError;
use crate::file;
use crate::manager::ConfigFile;
use crate::store::Store;
use crate::terminal::{ConsoleTerminal, Terminal};

/// Builder for a [`ConfigFile`].
///
/// Only [`project()`](Self::project) is required. Everything else derives a
/// default:
///
/// - `file_name` → `"config"` (stored as `config.json`)
/// - `home_dir` → the user's home directory, looked up on first use
/// - `local_dir` → the working directory
/// - `terminal` → [`ConsoleTerminal`]
pub struct ConfigFileBuilder<T: Terminal = ConsoleTerminal> {
    project: Option<String>,
    file_name: Option<String>,
    home_dir: Option<PathBuf>,
    local_dir: Option<PathBuf>,
    terminal: T,
}

impl ConfigFileBuilder<ConsoleTerminal> {
    pub(crate) fn new() -> Self {
        Self {
            project: None,
            file_name: None,
            home_dir: None,
            local_dir: None,
            terminal: ConsoleTerminal::new(),
        }
    }
}

impl<T: Terminal> ConfigFileBuilder<T> {
    /// Project name. Selects the `<home>/.nk/<project>/` directory.
    pub fn project(mut self, name: &str) -> Self {
        self.project = Some(name.to_string());
        self
    }

    /// Config file name without the `.json` extension (default: `"config"`).
    pub fn file_name(mut self, name: &str) -> Self {
        self.file_name = Some(name.to_string());
        self
    }

    /// Use `dir` instead of the user's home directory.
    pub fn home_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(dir.into());
        self
    }

    /// Look for the fallback file in `dir` instead of the working directory.
    pub fn local_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.local_dir = Some(dir.into());
        self
    }

    /// Replace the terminal that receives messages and listings.
    pub fn terminal<U: Terminal>(self, terminal: U) -> ConfigFileBuilder<U> {
        ConfigFileBuilder {
            project: self.project,
            file_name: self.file_name,
            home_dir: self.home_dir,
            local_dir: self.local_dir,
            terminal,
        }
    }

    fn effective_project(&self) -> Result<&str, NkconfError> {
        self.project
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or(NkconfError::ProjectRequired)
    }

    fn effective_file_name(&self) -> String {
        let name = self.file_name.as_deref().unwrap_or(file::DEFAULT_FILE_NAME);
        file::json_file_name(name)
    }

    /// Build an empty, not yet loaded [`ConfigFile`].
    ///
    /// No filesystem access happens here; see
    /// [`ConfigFile::resolve_location`].
    pub fn build(self) -> Result<ConfigFile<T>, NkconfError> {
        let project = self.effective_project()?.to_string();
        let file_name = self.effective_file_name();
        Ok(ConfigFile {
            project,
            file_name,
            home_dir: self.home_dir,
            local_dir: self.local_dir,
            path: None,
            loaded_from: None,
            store: Store::new(),
            terminal: self.terminal,
        })
    }
}
