//! Error types for parsing
//!
//!     Almost every irregularity in the input is absorbed by the parser: unterminated fences
//!     close at the end of their enclosing range and malformed attribute lines are read as
//!     text. Only conditions that would make the tree unbounded abort a conversion.

use thiserror::Error;

/// Errors that abort a single conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Delimited blocks nested deeper than the configured limit
    #[error("delimited blocks nested more than {limit} levels deep (line {line})")]
    NestingTooDeep { limit: usize, line: usize },
}

impl ParseError {
    /// 1-based source line the error points at
    pub fn line(&self) -> usize {
        match self {
            ParseError::NestingTooDeep { line, .. } => *line,
        }
    }

    /// Error message followed by the numbered source lines around it
    pub fn report(&self, source: &str) -> String {
        format!("Error: {}\n\n{}", self, format_source_context(source, self.line()))
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Format source context around an error line
///
/// Shows 2 lines before the error, the error line with >> marker, and 2 lines after.
/// `line` is 1-based, the output is numbered the same way.
pub fn format_source_context(source: &str, line: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let error_line = line.saturating_sub(1);

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();
    for (offset, text) in lines[start_line.min(end_line)..end_line].iter().enumerate() {
        let line_num = start_line + offset;
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, line_num + 1, text));
    }
    context
}
