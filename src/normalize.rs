//! Content normalizer for `Long` and `Examples` regions
//!
//! The generated file stores help text in backtick-delimited Go raw string
//! literals, so region content gets two line-level rewrites before it can be
//! embedded:
//!
//! 1. Markdown code fences toggle an indentation state. The fence lines
//!    themselves are dropped, and every line between a pair of fences is
//!    prefixed with two spaces, which is how the consuming CLI framework
//!    marks preformatted help text.
//! 2. A raw string literal cannot contain a backtick, so each literal
//!    backtick is rewritten to close the literal, splice in an escaped
//!    backtick, and reopen it.

/// Replacement for a literal backtick inside a Go raw string literal.
const BACKTICK_ESCAPE: &str = "` + \"`\" + `";

/// Normalize extracted region content for embedding.
///
/// Leading and trailing newlines are trimmed first, and the result is wrapped
/// in exactly one leading and one trailing newline. A fence line is anything
/// starting with three backticks, language tag or not.
///
/// An unmatched fence leaves the indentation toggle on through the end of the
/// region; that mirrors the markdown source and is not corrected here.
pub fn clean_up_content(text: &str) -> String {
    let mut lines = Vec::new();
    let mut indent = false;

    for line in text.trim_matches('\n').lines() {
        if line.starts_with("```") {
            indent = !indent;
            continue;
        }

        let line = if indent {
            format!("  {line}")
        } else {
            line.to_string()
        };

        lines.push(line.replace('`', BACKTICK_ESCAPE));
    }

    format!("\n{}\n", lines.join("\n"))
}
