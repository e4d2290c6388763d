//! Hands a list of parsed values from one invocation to the next through a small JSON file.
//!
//! `generate` stores the values, `show`/`traverse` load them and rebuild the tree. A missing file
//! is an ordinary error the caller reports, not a crash.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, instrument};

/// Problems reading or writing a handoff file.
#[derive(Debug, Error)]
pub enum HandoffError {
    /// Nothing was handed off yet.
    #[error("no tree data found at {}; run `generate` first", path.display())]
    Missing {
        /// Where the data was expected.
        path: PathBuf,
    },
    /// The file exists but doesn't hold a list of integers.
    #[error("tree data at {} is malformed: {source}", path.display())]
    Malformed {
        /// The file that failed to parse.
        path: PathBuf,
        /// What serde_json objected to.
        #[source]
        source: serde_json::Error,
    },
    /// Any other I/O failure.
    #[error("cannot access tree data at {}: {source}", path.display())]
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

/// A handoff slot backed by a file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Handoff {
    path: PathBuf,
}

impl Handoff {
    /// A slot stored at `path`. Nothing is touched until [`Handoff::store`] or
    /// [`Handoff::load`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where the values live.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `values`, replacing whatever was handed off before. Parent directories are
    /// created as needed.
    #[instrument(level = "debug", skip(self, values), fields(path = %self.path.display()))]
    pub fn store(&self, values: &[i64]) -> Result<(), HandoffError> {
        let io_err = |source| HandoffError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let mut out = io::BufWriter::new(fs::File::create(&self.path).map_err(io_err)?);
        serde_json::to_writer(&mut out, values).map_err(|e| io_err(e.into()))?;
        out.flush().map_err(io_err)?;

        debug!(count = values.len(), "Stored tree data");
        Ok(())
    }

    /// Reads the values handed off by [`Handoff::store`].
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Vec<i64>, HandoffError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(HandoffError::Missing {
                    path: self.path.clone(),
                })
            }
            Err(source) => {
                return Err(HandoffError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let values: Vec<i64> =
            serde_json::from_str(&json).map_err(|source| HandoffError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        debug!(count = values.len(), "Loaded tree data");
        Ok(values)
    }

    /// Removes the stored values. Clearing an empty slot is fine.
    pub fn clear(&self) -> Result<(), HandoffError> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(HandoffError::Io {
                path: self.path.clone(),
                source: e,
            }),
            _ => Ok(()),
        }
    }
}
