//! Error types for the generation pipeline

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that abort a generation run.
///
/// Every variant is fatal: the pipeline stops at the first failure and nothing
/// is written to the destination.
#[derive(Debug)]
pub enum Error {
    /// The source directory could not be listed or walked
    ReadDir { path: PathBuf, source: io::Error },
    /// A collected markdown file could not be read
    ReadFile { path: PathBuf, source: io::Error },
    /// The file named by `--license` could not be read
    ReadLicense { path: PathBuf, source: io::Error },
    /// The generated file could not be written
    WriteFile { path: PathBuf, source: io::Error },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ReadDir { path, source } => {
                write!(f, "failed to read directory {}: {}", path.display(), source)
            }
            Error::ReadFile { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            Error::ReadLicense { path, source } => {
                write!(f, "failed to read license file {}: {}", path.display(), source)
            }
            Error::WriteFile { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ReadDir { source, .. }
            | Error::ReadFile { source, .. }
            | Error::ReadLicense { source, .. }
            | Error::WriteFile { source, .. } => Some(source),
        }
    }
}
