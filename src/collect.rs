//! File collector
//!
//! Produces the ordered list of markdown files a run will read. Collection
//! order is emission order, so both modes sort by file name to keep re-runs
//! byte-identical.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::Error;

/// List `.md` files under `source`, descending into subdirectories when
/// `recursive` is set.
pub fn collect_files(source: &Path, recursive: bool) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();

    if recursive {
        for entry in WalkDir::new(source).sort_by_file_name() {
            let entry = entry.map_err(|err| Error::ReadDir {
                path: source.to_path_buf(),
                source: err.into(),
            })?;
            if has_md_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }
    } else {
        let mut entries = Vec::new();
        for entry in fs::read_dir(source).map_err(|err| Error::ReadDir {
            path: source.to_path_buf(),
            source: err,
        })? {
            entries.push(entry.map_err(|err| Error::ReadDir {
                path: source.to_path_buf(),
                source: err,
            })?);
        }
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            if has_md_extension(&path) {
                files.push(path);
            }
        }
    }

    debug!(count = files.len(), source = %source.display(), "collected markdown files");
    Ok(files)
}

fn has_md_extension(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "md")
}
