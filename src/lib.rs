//! # mdtogo
//!
//! Generates Go variables containing documentation read from markdown files,
//! for embedding as command-line help text.
//!
//! Usage: mdtogo SOURCE_MD_DIR DEST_GO_DIR [--recursive=true] [--license=license.txt|none]
//!
//! A single `docs.go` is written under DEST_GO_DIR containing string
//! variables for use by CLI commands. Variable names derive from the
//! directory each markdown file sits in, word-cased with `-` removed. All
//! `.md` files are read from SOURCE_MD_DIR, including subdirectories when
//! `--recursive=true`.
//!
//! Up to three variables are created per directory, selected by an HTML
//! comment in one of two forms:
//!
//!     <!--mdtogo:<FIELD>-->
//!     ..some content..
//!     <!--mdtogo-->
//!
//! or
//!
//!     <!--mdtogo:<FIELD>
//!     ..some content..
//!     -->
//!
//! The first form is for content that should also show up in the rendered
//! HTML, the second for content that should stay hidden there. `<FIELD>`
//! must be one of `Short`, `Long` or `Examples`.

pub mod collect;
pub mod config;
pub mod emit;
pub mod error;
pub mod extract;
pub mod normalize;

use std::fs;

use tracing::info;

pub use crate::config::{Config, LicenseSource};
pub use crate::error::Error;
use crate::extract::ExtractedDoc;

/// Run one generation pass: collect, extract, emit.
///
/// All input files are read before anything is written, so a failing read
/// never leaves a partial `docs.go` behind.
pub fn run(config: &Config) -> Result<(), Error> {
    let files = collect::collect_files(&config.source_dir, config.recursive)?;

    let mut docs: Vec<ExtractedDoc> = Vec::new();
    for path in &files {
        let text = fs::read_to_string(path).map_err(|err| Error::ReadFile {
            path: path.clone(),
            source: err,
        })?;
        let doc = extract::parse(path, &text);

        // A directory seen again (several .md files in it) replaces the
        // earlier record in place, keeping its position in emission order.
        match docs.iter_mut().find(|existing| existing.name == doc.name) {
            Some(existing) => *existing = doc,
            None => docs.push(doc),
        }
    }

    let license = config.license.text()?;
    let package = emit::package_name(&config.dest_dir);
    let content = emit::render_file(&docs, &license, &package);
    let path = emit::write_docs(&config.dest_dir, &content)?;
    info!(path = %path.display(), records = docs.len(), "generated help text");

    Ok(())
}
