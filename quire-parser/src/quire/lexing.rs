//! Line level analysis
//!
//!     quire is parsed one line at a time. Before the tree builder decides anything, each
//!     line is given a [LineTag](line_classification::LineTag): blank, fence, attribute line,
//!     heading, block title, comment or plain content. The tag only depends on the line itself
//!     and a small [LineContext](line_classification::LineContext), never on the lines around
//!     it. The one exception, two-line headings, needs a single line of look-ahead and is
//!     exposed separately as [classify_underline](line_classification::classify_underline).
//!
//! Modules
//!
//!     - delimiters: the fence table (which character opens which block kind)
//!     - line_classification: the per-line classifier
//!     - attribute_line: `[style, positional, key=value]` parsing
//!     - comments: line and block comment handling
//!
//!     Everything in here is read-only and shared: the delimiter table, the admonition labels
//!     and the compiled patterns are statics built once per process.

pub mod attribute_line;
pub mod comments;
pub mod delimiters;
pub mod line_classification;

pub use attribute_line::{parse_attributes, MalformedAttributes};
pub use delimiters::{ContentModel, Delimiter, Fence};
pub use line_classification::{classify, classify_underline, LineContext, LineTag};

/// Split source text into lines, accepting both `\n` and `\r\n` endings.
pub fn split_lines(source: &str) -> Vec<&str> {
    source.lines().collect()
}

/// Count of leading space and tab characters
pub fn indentation(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Remove the indentation shared by all non-blank lines, keeping relative differences.
pub fn strip_common_indentation<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let common = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !is_blank(line))
        .map(indentation)
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(AsRef::as_ref)
        .map(|line| {
            if is_blank(line) {
                String::new()
            } else {
                line.chars().skip(common).collect::<String>().trim_end().to_string()
            }
        })
        .collect()
}

/// Drop blank lines at the start and end of a block body.
pub fn trim_blank_edges<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let start = lines.iter().position(|l| !is_blank(l));
    let end = lines.iter().rposition(|l| !is_blank(l));
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].to_vec(),
        _ => Vec::new(),
    }
}
