//! Unified path management for digestdesk files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/digestdesk/        # Config directory (dirs::config_dir)
//! ├── config.toml              # Site configuration (repository, branch, ...)
//! └── settings.toml            # Credential and generation inputs (0600)
//! ```

use std::path::{Path, PathBuf};

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Path resolver rooted either at the platform config directory or at an
/// explicit base (tests, `--config-dir`).
#[derive(Debug, Clone)]
pub struct DeskPaths {
    base: Option<PathBuf>,
}

impl DeskPaths {
    const APP_DIR: &'static str = "digestdesk";
    const CONFIG_FILE: &'static str = "config.toml";
    const SETTINGS_FILE: &'static str = "settings.toml";

    /// Creates a resolver. `None` means the platform default.
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Returns the digestdesk configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(Self::APP_DIR))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    /// Returns the path to `config.toml`.
    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(Self::CONFIG_FILE))
    }

    /// Returns the path to `settings.toml`.
    ///
    /// # Security Note
    ///
    /// This file holds the access token; it is written with mode 600 on Unix.
    pub fn settings_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(Self::SETTINGS_FILE))
    }
}

impl Default for DeskPaths {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base() {
        let paths = DeskPaths::new(Some(Path::new("/tmp/desk")));
        assert_eq!(paths.config_dir().unwrap(), PathBuf::from("/tmp/desk"));
        assert_eq!(
            paths.settings_file().unwrap(),
            PathBuf::from("/tmp/desk/settings.toml")
        );
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/desk/config.toml")
        );
    }

    #[test]
    fn test_default_dir_ends_with_app_name() {
        if let Ok(dir) = DeskPaths::default().config_dir() {
            assert!(dir.ends_with("digestdesk"));
        }
    }
}
