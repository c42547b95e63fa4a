//! Comments
//!
//!     Two forms, both removed before anything reaches the tree:
//!
//!         - Line comments: `//` at column 0, not followed by another `/`.
//!         - Comment blocks: everything between two `////` fences.
//!
//!     Comments are filtered while lines are classified, not in a separate pass. Dropping a
//!     comment line never ends the paragraph it sits in, only a blank line does that.
//!     Listing and literal bodies are verbatim, so their `//` lines are content.

/// `//` line comment (but not `///` or a `////` fence)
pub fn is_comment_line(line: &str) -> bool {
    line.strip_prefix("//")
        .is_some_and(|rest| !rest.starts_with('/'))
}

/// Drop line comments from a run of lines
pub fn strip_line_comments<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    lines
        .iter()
        .copied()
        .filter(|line| !is_comment_line(line))
        .collect()
}
