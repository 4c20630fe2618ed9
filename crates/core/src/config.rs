//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! command loop, so command handling never reads process-wide environment variables.

use crate::constants::DEFAULT_DATA_FILE;
use crate::{HubError, HubResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_file: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::InvalidInput`] if `data_file` is empty or names an existing
    /// directory.
    pub fn new(data_file: PathBuf) -> HubResult<Self> {
        if data_file.as_os_str().is_empty() {
            return Err(HubError::InvalidInput("data file path cannot be empty".into()));
        }
        if data_file.is_dir() {
            return Err(HubError::InvalidInput(format!(
                "data file path is a directory: {}",
                data_file.display()
            )));
        }

        Ok(Self { data_file })
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

/// Resolve the data file path without reading environment variables.
///
/// `override_path` (from the command line) wins over `env_value`, which wins over
/// [`DEFAULT_DATA_FILE`]. Blank environment values are ignored.
pub fn resolve_data_file(override_path: Option<PathBuf>, env_value: Option<String>) -> PathBuf {
    if let Some(path) = override_path {
        return path;
    }

    env_value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}
