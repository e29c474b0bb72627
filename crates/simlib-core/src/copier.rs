//! Library Copier
//!
//! Walks the manifest in order and copies each listed library from the
//! installation's `eda/sim_lib` directory into the destination. The first
//! failure aborts the run; files copied before it are left in place.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{CopyError, Result};
use crate::manifest::Manifest;

/// Single-file copy primitive.
pub trait FileCopy {
    /// Copy `from` to `to`, returning the number of bytes written.
    fn copy(&mut self, from: &Path, to: &Path) -> io::Result<u64>;
}

/// `std::fs::copy`: overwrites the target and carries permission bits over.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileCopy;

impl FileCopy for StdFileCopy {
    fn copy(&mut self, from: &Path, to: &Path) -> io::Result<u64> {
        fs::copy(from, to)
    }
}

/// Outcome of a completed run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CopyReport {
    /// Filenames in the order they were copied
    pub files: Vec<String>,
    pub bytes: u64,
}

pub struct LibraryCopier<C = StdFileCopy> {
    config: Config,
    copier: C,
}

impl LibraryCopier<StdFileCopy> {
    pub fn new(config: Config) -> Self {
        Self::with_copier(config, StdFileCopy)
    }
}

impl<C: FileCopy> LibraryCopier<C> {
    pub fn with_copier(config: Config, copier: C) -> Self {
        Self { config, copier }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Copy every library named in the manifest, echoing each name to `out`
    /// before it is copied.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<CopyReport> {
        let source_dir = self.config.source_dir();
        let manifest = Manifest::open(&self.config.manifest_path)?;
        let mut report = CopyReport::default();

        for entry in manifest {
            let name = entry?;

            writeln!(out, "{}", name)
                .and_then(|_| out.flush())
                .map_err(CopyError::Output)?;

            match self.copy_one(&source_dir, &name) {
                Ok(bytes) => {
                    report.bytes += bytes;
                    report.files.push(name);
                }
                Err(e) => {
                    warn!(
                        "Aborting after {} of the listed libraries: {}",
                        report.files.len(),
                        e
                    );
                    return Err(e);
                }
            }
        }

        info!(
            "Copied {} libraries ({} bytes) from {:?} to {:?}",
            report.files.len(),
            report.bytes,
            source_dir,
            self.config.destination
        );
        Ok(report)
    }

    fn copy_one(&mut self, source_dir: &Path, name: &str) -> Result<u64> {
        // Blank manifest lines are rejected, not skipped.
        if name.is_empty() {
            return Err(CopyError::copy(
                name,
                io::Error::new(io::ErrorKind::InvalidInput, "empty library filename"),
            ));
        }

        let from = source_dir.join(name);
        let Some(file_name) = from.file_name() else {
            return Err(CopyError::copy(
                name,
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "library filename has no final path component",
                ),
            ));
        };
        let to = self.config.destination.join(file_name);

        debug!("Copying {:?} -> {:?}", from, to);
        self.copier
            .copy(&from, &to)
            .map_err(|e| CopyError::copy(name, e))
    }
}
