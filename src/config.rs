//! Run configuration
//!
//! All knobs are collected into [`Config`] once at startup and passed down by
//! reference; nothing in the pipeline reads process arguments or globals.

use std::fs;
use std::path::PathBuf;

use crate::error::Error;

/// Header used when `--license` is not given.
const DEFAULT_LICENSE: &str =
    "// Copyright 2019 The Kubernetes Authors.\n// SPDX-License-Identifier: Apache-2.0";

/// Settings for one generation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the markdown files are read from
    pub source_dir: PathBuf,
    /// Directory the generated file is written to
    pub dest_dir: PathBuf,
    /// Descend into subdirectories when collecting files
    pub recursive: bool,
    /// Where the license header comes from
    pub license: LicenseSource,
}

/// Where the generated file's license header comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LicenseSource {
    /// The built-in header
    #[default]
    Default,
    /// No header at all (`--license=none`); one may be added by another tool
    None,
    /// Header read from a file (`--license=PATH`)
    File(PathBuf),
}

impl LicenseSource {
    /// Interpret the raw `--license` flag value.
    pub fn from_flag(value: Option<&str>) -> Self {
        match value {
            None => LicenseSource::Default,
            Some("none") => LicenseSource::None,
            Some(path) => LicenseSource::File(PathBuf::from(path)),
        }
    }

    /// Resolve to the header text placed at the top of the generated file.
    ///
    /// `None` resolves to the empty string so the emitter can treat the
    /// header segment uniformly.
    pub fn text(&self) -> Result<String, Error> {
        match self {
            LicenseSource::Default => Ok(DEFAULT_LICENSE.to_string()),
            LicenseSource::None => Ok(String::new()),
            LicenseSource::File(path) => {
                fs::read_to_string(path).map_err(|source| Error::ReadLicense {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}
