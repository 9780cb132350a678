//! Tag extractor
//!
//! Finds `<!--mdtogo ...-->` regions in a markdown file and collects their
//! content into an [`ExtractedDoc`]. Two tag forms are recognized, both keyed
//! by a field identifier that must be exactly `Short`, `Long` or `Examples`.
//!
//! Visible form, for content that should also show up in rendered HTML:
//!
//!     <!--mdtogo:Short-->
//!     ..some content..
//!     <!--mdtogo-->
//!
//! Hidden form, where the whole region is one HTML comment and stays
//! invisible when the markdown is rendered:
//!
//!     <!--mdtogo:Short
//!     ..some content..
//!     -->
//!
//! Matching is non-greedy: a region ends at the nearest closing marker.
//! Regions must not be nested; with overlapping markers the scan simply
//! takes whatever it finds first.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::clean_up_content;

/// Visible-form regions: an opening marker carrying the field name, content,
/// and a bare closing marker.
static DOC_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<!--mdtogo:(Short|Long|Examples)-->([\s\S]*?)<!--mdtogo-->").unwrap()
});

/// Hidden-form regions: field name, whitespace, inline content, comment close.
static HIDDEN_DOC_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<!--mdtogo:(Short|Long|Examples)\s+?([\s\S]*?)-->").unwrap());

/// One markdown file's extracted help text.
///
/// `name` prefixes every variable emitted for this record. The three content
/// fields hold the empty string when no matching region was found; empty
/// fields produce no output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedDoc {
    pub name: String,
    pub short: String,
    pub long: String,
    pub examples: String,
}

/// Extract tagged regions from one file's text.
///
/// All visible-form matches are processed first, then all hidden-form
/// matches; when several regions target the same field the last one processed
/// wins. `Short` content is only whitespace-trimmed, `Long` and `Examples`
/// go through the normalizer.
pub fn parse(path: &Path, text: &str) -> ExtractedDoc {
    let mut doc = ExtractedDoc {
        name: variable_name(path),
        ..ExtractedDoc::default()
    };

    let matches = DOC_TAG
        .captures_iter(text)
        .chain(HIDDEN_DOC_TAG.captures_iter(text));

    for caps in matches {
        let content = &caps[2];
        match &caps[1] {
            "Short" => doc.short = content.trim().to_string(),
            "Long" => doc.long = clean_up_content(content),
            "Examples" => doc.examples = clean_up_content(content),
            _ => {}
        }
    }

    doc
}

/// Derive the variable-name prefix from the file's parent directory: the
/// directory name is word-cased and `-` separators are removed, so a file
/// under `get-started/` yields the prefix `GetStarted`.
fn variable_name(path: &Path) -> String {
    let dir = path
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    title_case(&dir).replace('-', "")
}

/// Word-case a directory name: a letter that starts the string or follows a
/// separator is uppercased, everything else is left alone.
fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_sep = true;

    for c in name.chars() {
        if prev_sep && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_sep = is_separator(c);
    }

    out
}

/// Word boundary for title-casing: alphanumerics and `_` are part of a word,
/// everything else separates words.
fn is_separator(c: char) -> bool {
    !(c.is_alphanumeric() || c == '_')
}
