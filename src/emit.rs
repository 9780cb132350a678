//! Go source emitter
//!
//! Serializes extracted records into a single `docs.go` under the destination
//! directory: license header, generated-file banner, a package declaration
//! named after the destination's final path segment, then one block of `var`
//! declarations per record.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Error;
use crate::extract::ExtractedDoc;

/// Name of the generated file inside the destination directory.
pub const OUTPUT_FILE: &str = "docs.go";

/// Render the complete generated file.
///
/// `license` may be the empty string (`--license=none`); it still occupies
/// the first segment so the banner placement stays stable.
pub fn render_file(docs: &[ExtractedDoc], license: &str, package: &str) -> String {
    let mut out = vec![
        license.to_string(),
        format!("\n// Code generated by \"mdtogo\"; DO NOT EDIT.\npackage {package}\n"),
    ];

    for doc in docs {
        out.push(render_doc(doc));
    }

    out.join("\n")
}

/// Render one record: up to three `var` declarations holding Go raw string
/// literals, one per non-empty field.
fn render_doc(doc: &ExtractedDoc) -> String {
    let mut parts = Vec::new();

    if !doc.short.is_empty() {
        parts.push(format!("var {}Short = `{}`", doc.name, doc.short));
    }
    if !doc.long.is_empty() {
        parts.push(format!("var {}Long = `{}`", doc.name, doc.long));
    }
    if !doc.examples.is_empty() {
        parts.push(format!("var {}Examples = `{}`", doc.name, doc.examples));
    }

    format!("{}\n", parts.join("\n"))
}

/// The Go package name is the destination directory's final path segment.
pub fn package_name(dest: &Path) -> String {
    dest.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dest.display().to_string())
}

/// Write the rendered file into `dest`, creating the directory if missing.
///
/// Directory creation is single-level and best-effort; when it fails, the
/// write below surfaces the real error. An existing file is overwritten.
pub fn write_docs(dest: &Path, content: &str) -> Result<PathBuf, Error> {
    if !dest.exists() {
        let _ = create_dest_dir(dest);
    }

    let path = dest.join(OUTPUT_FILE);
    write_generated(&path, content).map_err(|err| Error::WriteFile {
        path: path.clone(),
        source: err,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "wrote generated file");

    Ok(path)
}

#[cfg(unix)]
fn create_dest_dir(dest: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().mode(0o700).create(dest)
}

#[cfg(not(unix))]
fn create_dest_dir(dest: &Path) -> std::io::Result<()> {
    fs::DirBuilder::new().create(dest)
}

#[cfg(unix)]
fn write_generated(path: &Path, content: &str) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(content.as_bytes())
}

#[cfg(not(unix))]
fn write_generated(path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(name: &str, short: &str, long: &str, examples: &str) -> ExtractedDoc {
        ExtractedDoc {
            name: name.to_string(),
            short: short.to_string(),
            long: long.to_string(),
            examples: examples.to_string(),
        }
    }

    #[test]
    fn empty_fields_produce_no_declarations() {
        let doc = record("Get", "Fetch a package", "", "");
        let rendered = render_doc(&doc);
        assert_eq!(rendered, "var GetShort = `Fetch a package`\n");
        assert!(!rendered.contains("GetLong"));
        assert!(!rendered.contains("GetExamples"));
    }

    #[test]
    fn fields_render_in_short_long_examples_order() {
        let doc = record("Get", "s", "\nl\n", "\ne\n");
        assert_eq!(
            render_doc(&doc),
            "var GetShort = `s`\nvar GetLong = `\nl\n`\nvar GetExamples = `\ne\n`\n"
        );
    }

    #[test]
    fn renders_complete_file() {
        let docs = vec![
            record("Get", "Fetch a package", "\nFetches a package from git.\n", ""),
            record("Apply", "Apply a package", "", ""),
        ];
        let license = "// Copyright 2025 Example\n// SPDX-License-Identifier: MIT";
        let out = render_file(&docs, license, "generated");
        insta::assert_snapshot!(out, @r###"
        // Copyright 2025 Example
        // SPDX-License-Identifier: MIT

        // Code generated by "mdtogo"; DO NOT EDIT.
        package generated

        var GetShort = `Fetch a package`
        var GetLong = `
        Fetches a package from git.
        `

        var ApplyShort = `Apply a package`
        "###);
    }

    #[test]
    fn empty_license_still_reserves_header_segment() {
        let out = render_file(&[], "", "out");
        assert!(out.starts_with("\n\n// Code generated"));
        assert!(out.contains("package out\n"));
    }

    #[rstest]
    #[case("out", "out")]
    #[case("generated/docs", "docs")]
    #[case("out/", "out")]
    fn package_name_is_final_path_segment(#[case] dest: &str, #[case] expected: &str) {
        assert_eq!(package_name(Path::new(dest)), expected);
    }
}
