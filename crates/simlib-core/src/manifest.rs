//! Manifest Reader
//!
//! Lazily yields library filenames from a line-delimited list. The reader is
//! single-pass; reopen the file to iterate again.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CopyError, Result};

pub struct Manifest {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
}

impl Manifest {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| CopyError::manifest(path, e))?;
        debug!("Opened manifest {:?}", path);
        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Iterator for Manifest {
    type Item = Result<String>;

    /// Next filename with its line terminator stripped. Blank lines come
    /// through as empty strings.
    fn next(&mut self) -> Option<Self::Item> {
        self.lines
            .next()
            .map(|line| line.map_err(|e| CopyError::manifest(&self.path, e)))
    }
}
