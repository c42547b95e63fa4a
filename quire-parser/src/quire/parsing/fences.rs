//! Closing fence search
//!
//!     Runs before a delimited block's body is looked at, so the body range is fixed once and
//!     then either kept verbatim or handed back to the parser. Fences inside a compound body
//!     open frames of their own; a fence equal to the innermost open one closes it. Verbatim
//!     and raw bodies only ever see their own closing fence.
//!
//!     A nested frame takes its content model from the kind the fence resolves to under the
//!     style of the attribute line above it, so `[verse]` over `____` opens a verbatim frame.

use std::ops::Range;

use crate::quire::lexing::delimiters::{content_model_of, ContentModel, Fence};
use crate::quire::lexing::{classify, LineContext, LineTag};

/// Where a delimited block's body lies
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct FenceSpan {
    /// Body lines, fences excluded
    pub body: Range<usize>,
    /// First line after the closing fence
    pub next: usize,
    /// False when the input ended first
    pub closed: bool,
}

/// Find the fence closing `fence`, which sits on line index `open`.
pub(super) fn match_fence(
    lines: &[&str],
    open: usize,
    fence: Fence,
    model: ContentModel,
) -> FenceSpan {
    let mut frames: Vec<(Fence, ContentModel)> = vec![(fence, model)];
    // Style of the attribute line waiting for the next block in a compound frame
    let mut style: Option<String> = None;

    for (index, line) in lines.iter().enumerate().skip(open + 1) {
        let Some((innermost, innermost_model)) = frames.last().copied() else {
            break;
        };

        let Some(found) = Fence::parse(line) else {
            if innermost_model == ContentModel::Compound {
                track_style(&mut style, line);
            }
            continue;
        };

        if innermost.is_closed_by(&found) {
            frames.pop();
            style = None;
            if frames.is_empty() {
                return FenceSpan {
                    body: open + 1..index,
                    next: index + 1,
                    closed: true,
                };
            }
        } else if innermost_model == ContentModel::Compound {
            let kind = found.delimiter.resolve_kind(style.take().as_deref());
            frames.push((found, content_model_of(kind)));
        }
    }

    FenceSpan {
        body: open + 1..lines.len(),
        next: lines.len(),
        closed: false,
    }
}

/// Metadata lines keep the pending style alive, anything else that starts a block drops it.
fn track_style(style: &mut Option<String>, line: &str) {
    match classify(line, LineContext::block_start(false)) {
        LineTag::AttributeLine(attrs) => {
            if let Some(value) = attrs.style() {
                *style = Some(value.to_string());
            }
        }
        LineTag::Blank | LineTag::BlockTitle(_) | LineTag::CommentLine => {}
        _ => *style = None,
    }
}
