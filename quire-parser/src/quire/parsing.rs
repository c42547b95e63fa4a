//! Block parser and tree builder
//!
//!     Turns a sequence of lines into a Document [Block]. The parser walks the lines with a
//!     cursor, classifies each one (see [lexing](crate::quire::lexing)) and decides what to do
//!     with it:
//!
//!         - Attribute lines and `.Title` lines go into a pending metadata buffer that the
//!           next block consumes.
//!         - Content lines start a paragraph run, which ends on a blank line, a fence, an
//!           attribute line, a heading or the end of input. The pending style decides what
//!           the run becomes (paragraph, quote, verse, admonition, listing, literal...).
//!         - Fences open delimited blocks. The matching closing fence is found first, then
//!           the enclosed range is either kept verbatim or parsed again with the same entry
//!           point, one nesting level deeper.
//!         - Headings close every open section of the same or a deeper level and open a new
//!           one under the nearest shallower section.
//!         - Comments are skipped and never end a paragraph run.
//!
//! Failure
//!
//!     Structural problems are absorbed: a fence that is never closed runs to the end of its
//!     enclosing range, a malformed attribute line is text. The only error is nesting deeper
//!     than [ParseOptions::max_nesting_depth], which aborts the whole call so callers never
//!     see a partial tree.

mod builders;
mod engine;
mod fences;
mod metadata;
mod sections;

use crate::quire::ast::{Block, ParseResult};
use crate::quire::lexing::split_lines;
use engine::BlockParser;

/// Default limit for nested delimited blocks
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 64;

/// Parser knobs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest allowed nesting of delimited blocks; deeper input fails with
    /// [ParseError::NestingTooDeep](crate::quire::ast::ParseError::NestingTooDeep)
    pub max_nesting_depth: usize,
    /// Generate `id` attributes for sections that do not declare one
    pub section_ids: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            section_ids: true,
        }
    }
}

/// Parse source text with default options.
pub fn parse_document(source: &str) -> ParseResult<Block> {
    parse_with_options(source, &ParseOptions::default())
}

/// Parse source text.
pub fn parse_with_options(source: &str, options: &ParseOptions) -> ParseResult<Block> {
    let lines = split_lines(source);
    parse_lines(&lines, options)
}

/// Parse already split lines with default options.
pub fn parse(lines: &[&str]) -> ParseResult<Block> {
    parse_lines(lines, &ParseOptions::default())
}

/// Parse already split lines.
pub fn parse_lines(lines: &[&str], options: &ParseOptions) -> ParseResult<Block> {
    BlockParser::new(options).parse_document(lines)
}
