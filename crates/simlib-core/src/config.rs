//! Copier Configuration
//!
//! Resolves where libraries are read from and written to. The environment is
//! only consulted by [`Config::from_env`]; everything else takes explicit values.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CopyError, Result};

/// Environment variable naming the tool installation root
pub const ROOT_ENV_VAR: &str = "QUARTUS_ROOTDIR";

/// Manifest filename, relative to the working directory
pub const MANIFEST_FILE: &str = "lib_list.txt";

/// Library directory, relative to the installation root
pub const SIM_LIB_SUBDIR: [&str; 2] = ["eda", "sim_lib"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source_root: PathBuf,
    pub manifest_path: PathBuf,
    pub destination: PathBuf,
}

impl Config {
    /// Configuration for the given installation root, reading `./lib_list.txt`
    /// and copying into the working directory.
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            manifest_path: Path::new(".").join(MANIFEST_FILE),
            destination: PathBuf::from("."),
        }
    }

    /// Build from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let root = lookup(ROOT_ENV_VAR).ok_or(CopyError::Config { var: ROOT_ENV_VAR })?;
        let config = Self::new(root);
        debug!("Library source directory: {:?}", config.source_dir());
        Ok(config)
    }

    pub fn with_manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = path.into();
        self
    }

    pub fn with_destination(mut self, dir: impl Into<PathBuf>) -> Self {
        self.destination = dir.into();
        self
    }

    /// `<source_root>/eda/sim_lib`
    pub fn source_dir(&self) -> PathBuf {
        SIM_LIB_SUBDIR
            .iter()
            .fold(self.source_root.clone(), |dir, segment| dir.join(segment))
    }
}
