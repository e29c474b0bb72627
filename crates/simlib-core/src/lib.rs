//! Copies HDL simulation libraries out of a Quartus installation.
//!
//! ```no_run
//! use simlib_core::{Config, LibraryCopier};
//!
//! let config = Config::from_env()?;
//! LibraryCopier::new(config).run(&mut std::io::stdout())?;
//! # Ok::<(), simlib_core::CopyError>(())
//! ```

pub mod config;
pub mod copier;
pub mod error;
pub mod manifest;

pub use config::{Config, MANIFEST_FILE, ROOT_ENV_VAR, SIM_LIB_SUBDIR};
pub use copier::{CopyReport, FileCopy, LibraryCopier, StdFileCopy};
pub use error::{CopyError, ErrorKind, Result};
pub use manifest::Manifest;
