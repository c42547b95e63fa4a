//! Line Classification
//!
//!     Core classification logic for deciding what a single line is. Order matters, since a
//!     line can look like more than one thing (`////` is both four slashes and a comment
//!     marker, `====` both a fence and a heading underline):
//!
//!         1. Blank
//!         2. Fence (comment fences get their own tag)
//!         3. Comment line
//!         4. Heading (leading `=` markers), when headings are enabled
//!         5. Attribute line
//!         6. Block title, unless the line continues a paragraph
//!         7. Content
//!
//!     Two-line headings (`Title` followed by `=====`) cannot be decided from one line; the
//!     parser checks the following line with [classify_underline] when a content line starts
//!     a block.

use super::attribute_line::parse_attributes;
use super::comments::is_comment_line;
use super::delimiters::Fence;
use crate::quire::ast::AttributeSet;
use once_cell::sync::Lazy;
use regex::Regex;

/// Admonition labels, usable as `LABEL: text` or as the `[LABEL]` style
pub const ADMONITION_LABELS: [&str; 5] = ["NOTE", "TIP", "IMPORTANT", "WARNING", "CAUTION"];

/// Maximum number of `=` in a leading-marker heading
pub const MAX_HEADING_MARKERS: usize = 6;

static HEADING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(=+)[ \t]+(\S.*?)[ \t]*$").expect("heading pattern is valid"));

static BLOCK_TITLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.([^\s.].*?)[ \t]*$").expect("block title pattern is valid"));

static ADMONITION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(NOTE|TIP|IMPORTANT|WARNING|CAUTION):[ \t]+(\S.*)$")
        .expect("admonition pattern is valid")
});

/// Underline characters of two-line headings, in level order
const UNDERLINE_CHARS: [char; 5] = ['=', '-', '~', '^', '+'];

/// The classification of a single line
#[derive(Debug, Clone, PartialEq)]
pub enum LineTag<'a> {
    /// Empty or whitespace only
    Blank,
    /// Fence of a listing, literal, quote, sidebar or example block
    Fence(Fence),
    /// `////` fence opening or closing a comment block; which one is decided by the parser
    CommentFence(Fence),
    /// `[style, positional, key=value]`
    AttributeLine(AttributeSet),
    /// `== Title`; level is the number of markers minus one
    Heading { level: usize, text: &'a str },
    /// `.Title`
    BlockTitle(&'a str),
    /// `// text`
    CommentLine,
    /// Anything else
    Content,
}

/// What the classifier needs to know about the position of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineContext {
    /// Headings are structural here (false inside delimited blocks)
    pub headings: bool,
    /// The line would continue an open paragraph
    pub in_paragraph: bool,
}

impl LineContext {
    pub fn block_start(headings: bool) -> Self {
        Self {
            headings,
            in_paragraph: false,
        }
    }

    pub fn paragraph(headings: bool) -> Self {
        Self {
            headings,
            in_paragraph: true,
        }
    }
}

/// Classify one line.
pub fn classify(line: &str, context: LineContext) -> LineTag<'_> {
    if line.trim().is_empty() {
        return LineTag::Blank;
    }
    if let Some(fence) = Fence::parse(line) {
        return if fence.is_comment() {
            LineTag::CommentFence(fence)
        } else {
            LineTag::Fence(fence)
        };
    }
    if is_comment_line(line) {
        return LineTag::CommentLine;
    }
    if context.headings {
        if let Some((level, text)) = heading(line) {
            return LineTag::Heading { level, text };
        }
    }
    if line.starts_with('[') {
        match parse_attributes(line) {
            Ok(attributes) => return LineTag::AttributeLine(attributes),
            Err(err) => {
                tracing::debug!(line, error = %err, "attribute line read as content");
                return LineTag::Content;
            }
        }
    }
    if !context.in_paragraph {
        if let Some(title) = block_title(line) {
            return LineTag::BlockTitle(title);
        }
    }
    LineTag::Content
}

/// `== Title` form. Returns the level (markers minus one) and the title text.
pub fn heading(line: &str) -> Option<(usize, &str)> {
    let captures = HEADING_REGEX.captures(line)?;
    let markers = captures.get(1)?.as_str().len();
    if markers > MAX_HEADING_MARKERS {
        return None;
    }
    Some((markers - 1, captures.get(2)?.as_str()))
}

/// `.Title` form
pub fn block_title(line: &str) -> Option<&str> {
    BLOCK_TITLE_REGEX
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Level of a two-line heading underline, if `line` is one.
///
/// `title` is the text line above it; the underline must be at least as long.
pub fn classify_underline(title: &str, line: &str) -> Option<usize> {
    let underline = line.trim_end();
    let marker = underline.chars().next()?;
    let level = UNDERLINE_CHARS.iter().position(|c| *c == marker)?;
    let length = underline.chars().count();
    if length < 2 || !underline.chars().all(|c| c == marker) {
        return None;
    }
    if length < title.trim().chars().count() {
        return None;
    }
    Some(level)
}

/// Inline admonition trigger: `NOTE: text`. Returns the label and the remaining text.
pub fn admonition_label(line: &str) -> Option<(&str, &str)> {
    let captures = ADMONITION_REGEX.captures(line)?;
    Some((captures.get(1)?.as_str(), captures.get(2)?.as_str()))
}

/// Whether `style` names one of the admonition labels
pub fn is_admonition_style(style: &str) -> bool {
    ADMONITION_LABELS.contains(&style)
}

/// Line starts with whitespace and has content (literal paragraph line)
pub fn is_indented(line: &str) -> bool {
    line.starts_with([' ', '\t']) && !line.trim().is_empty()
}
