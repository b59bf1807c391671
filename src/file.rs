//! Config file discovery.
//!
//! Two candidates, in precedence order:
//!
//! 1. **Home**: `<home>/.nk/<project>/<file>.json`. This is also the only
//!    place saves ever go. Resolving it creates `.nk/` and `<project>/` if
//!    they are missing.
//! 2. **Local**: `<file>.json` in the local directory (the process working
//!    directory unless one was set explicitly). Only read, and only when the
//!    home file is absent at load time.
//!
//! Directory creation checks for existence first and is not guarded against
//! another process creating the same directory in between.

use std::path::{Path, PathBuf};

use crate::error::NkconfError;

/// Directory under the user's home holding one subdirectory per project.
pub const PROJECTS_DIR: &str = ".nk";

/// File name default when the builder doesn't set one.
pub const DEFAULT_FILE_NAME: &str = "config";

/// `"config"` → `"config.json"`.
pub fn json_file_name(name: &str) -> String {
    format!("{name}.json")
}

/// The user's home directory, if the platform reports one.
pub fn default_home_dir() -> Option<PathBuf> {
    let user = directories::UserDirs::new()?;
    Some(user.home_dir().to_path_buf())
}

/// `<home>/.nk/<project>`, without touching the filesystem.
pub fn project_dir(home: &Path, project: &str) -> PathBuf {
    home.join(PROJECTS_DIR).join(project)
}

/// Create `<home>/.nk` and `<home>/.nk/<project>` as needed and return the
/// project directory.
pub fn ensure_project_dir(home: &Path, project: &str) -> Result<PathBuf, NkconfError> {
    create_missing_dir(&home.join(PROJECTS_DIR))?;
    let dir = project_dir(home, project);
    create_missing_dir(&dir)?;
    Ok(dir)
}

fn create_missing_dir(dir: &Path) -> Result<(), NkconfError> {
    if dir.exists() {
        return Ok(());
    }
    std::fs::create_dir(dir).map_err(|e| NkconfError::IoError {
        path: dir.to_path_buf(),
        source: e,
    })?;
    tracing::debug!("[Config] create folder {}", dir.display());
    Ok(())
}

/// Local fallback path. `None` means relative to the working directory.
pub fn local_path(local_dir: Option<&Path>, file_name: &str) -> PathBuf {
    match local_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(".").join(file_name),
    }
}
