//! Project root resolution for static network templates.

use std::path::{Path, PathBuf};

/// Environment variable overriding the project root.
pub const PROJECT_PATH_ENV: &str = "FLOW_PROJECT_PATH";

/// Resolves template paths relative to a fixed project root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root from `$FLOW_PROJECT_PATH`, falling back to the working directory.
    pub fn from_env() -> Self {
        match std::env::var_os(PROJECT_PATH_ENV) {
            Some(root) if !root.is_empty() => Self::new(root),
            _ => Self::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join `relative` onto the project root.  The file is not checked for
    /// existence; the simulator reads it at start-up.
    pub fn template(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}
