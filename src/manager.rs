//! The config file lifecycle: locate, load, save, display.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::builder::ConfigFileBuilder;
use crate::error::NkconfError;
use crate::file;
use crate::persist;
use crate::store::Store;
use crate::terminal::{ConsoleTerminal, Terminal};
use crate::types::FileSource;

/// A [`Store`] tied to its JSON file on disk.
///
/// The on-disk location is resolved once, on the first
/// [`load`](Self::load), [`save`](Self::save), or explicit
/// [`resolve_location`](Self::resolve_location), and reused afterwards even
/// if the filesystem changes underneath.
pub struct ConfigFile<T: Terminal = ConsoleTerminal> {
    pub(crate) project: String,
    pub(crate) file_name: String,
    pub(crate) home_dir: Option<PathBuf>,
    pub(crate) local_dir: Option<PathBuf>,
    pub(crate) path: Option<PathBuf>,
    pub(crate) loaded_from: Option<FileSource>,
    pub(crate) store: Store,
    pub(crate) terminal: T,
}

impl ConfigFile<ConsoleTerminal> {
    pub fn builder() -> ConfigFileBuilder<ConsoleTerminal> {
        ConfigFileBuilder::new()
    }

    /// All defaults: `config.json`, the user's home, the console terminal.
    pub fn new(project: &str) -> Result<Self, NkconfError> {
        Self::builder().project(project).build()
    }
}

impl<T: Terminal> ConfigFile<T> {
    pub fn project(&self) -> &str {
        &self.project
    }

    /// File name including the `.json` extension.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The resolved home location, if resolution has happened.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Where the last successful load read from.
    pub fn loaded_from(&self) -> Option<FileSource> {
        self.loaded_from
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Value at `key`, or `default`. A missing section or a malformed key is
    /// reported through the terminal at fatal level.
    pub fn get(&self, key: &str, default: impl Into<Value>) -> Value {
        match self.store.try_get(key) {
            Ok(Some(value)) => value.clone(),
            Ok(None) => default.into(),
            Err(err) => {
                self.terminal.fatal(&format!("[Config] {err}"));
                default.into()
            }
        }
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<(), NkconfError> {
        self.store.set(key, value)
    }

    /// Remove `key`. Returns `false` and reports through the terminal when
    /// it does not exist.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.store.try_remove(key) {
            Ok(_) => true,
            Err(err) => {
                self.terminal.fatal(&format!("[Config] {err}"));
                false
            }
        }
    }

    /// Resolve `<home>/.nk/<project>/<file>.json`, creating the directories
    /// on the way. Later calls return the cached path.
    pub fn resolve_location(&mut self) -> Result<&Path, NkconfError> {
        let path = match self.path.take() {
            Some(path) => path,
            None => self.locate()?,
        };
        Ok(self.path.insert(path).as_path())
    }

    fn locate(&self) -> Result<PathBuf, NkconfError> {
        let home = match &self.home_dir {
            Some(home) => home.clone(),
            None => file::default_home_dir().ok_or(NkconfError::NoHomeDirectory)?,
        };
        let dir = file::ensure_project_dir(&home, &self.project)?;
        Ok(dir.join(&self.file_name))
    }

    /// Load the home file, or the local fallback if the home file is absent.
    ///
    /// Returns `Ok(false)` when neither exists; the tree is left untouched
    /// and the caller decides whether that is fatal. Unreadable or malformed
    /// files are errors.
    pub fn load(&mut self) -> Result<bool, NkconfError> {
        let home_path = self.resolve_location()?.to_path_buf();

        self.terminal.debug(&format!(
            "[Config] Search config file {}",
            home_path.display()
        ));
        if home_path.is_file() {
            self.terminal
                .debug(&format!("[Config] load config: {}", home_path.display()));
            self.store.replace(persist::read_tree(&home_path)?);
            self.loaded_from = Some(FileSource::Home);
            return Ok(true);
        }

        self.terminal.warning(&format!(
            "[Config] Configuration file not found: {}",
            self.file_name
        ));
        let local = file::local_path(self.local_dir.as_deref(), &self.file_name);
        self.terminal.debug(&format!(
            "[Config] load local configuration: {}",
            local.display()
        ));
        if local.is_file() {
            self.store.replace(persist::read_tree(&local)?);
            self.loaded_from = Some(FileSource::Local);
            return Ok(true);
        }

        self.terminal.fatal("[Config] Configuration file not found");
        Ok(false)
    }

    /// [`load`](Self::load), treating a missing file as an error.
    pub fn load_required(&mut self) -> Result<(), NkconfError> {
        if self.load()? {
            Ok(())
        } else {
            Err(NkconfError::ConfigFileNotFound {
                file_name: self.file_name.clone(),
            })
        }
    }

    /// Overwrite the home file with the current tree.
    ///
    /// Always targets the home location, even when the tree was loaded from
    /// the local fallback.
    pub fn save(&mut self) -> Result<(), NkconfError> {
        let path = self.resolve_location()?.to_path_buf();
        persist::write_tree(&path, self.store.tree())?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Print the whole tree through the terminal.
    pub fn display(&self) {
        self.terminal.json_print(self.store.tree());
    }
}
