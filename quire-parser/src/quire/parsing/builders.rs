//! Block construction
//!
//!     Everything that turns a run of lines plus pending metadata into a finished [Block]:
//!     the styled paragraph shorthands, the kind-specific trimming of verbatim bodies and the
//!     reading of positional attributes.
//!
//!         | Style                   | Paragraph becomes                          |
//!         |-------------------------|--------------------------------------------|
//!         | (none, unknown)         | Paragraph                                  |
//!         | `quote`                 | Quote, text in `raw_lines`, no children    |
//!         | `verse`                 | Verse                                      |
//!         | `NOTE`, `TIP`, ...      | Admonition with one Paragraph child        |
//!         | `source`, `listing`     | Listing                                    |
//!         | `literal`               | Literal                                    |
//!         | `sidebar`, `example`    | Sidebar / Example with one Paragraph child |

use super::metadata::PendingMetadata;
use crate::quire::ast::{attributes, Block, BlockKind};
use crate::quire::lexing::comments::strip_line_comments;
use crate::quire::lexing::line_classification::{admonition_label, ADMONITION_LABELS};
use crate::quire::lexing::{strip_common_indentation, trim_blank_edges};

/// What a paragraph run turns into, decided by the pending style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ParagraphStyle {
    Plain,
    Quote,
    Verse,
    Admonition(&'static str),
    Listing,
    Literal,
    Sidebar,
    Example,
}

impl ParagraphStyle {
    pub fn from_style(style: Option<&str>) -> Self {
        let Some(style) = style else {
            return ParagraphStyle::Plain;
        };
        if let Some(label) = ADMONITION_LABELS.iter().find(|label| **label == style) {
            return ParagraphStyle::Admonition(*label);
        }
        match style {
            "quote" => ParagraphStyle::Quote,
            "verse" => ParagraphStyle::Verse,
            "source" | "listing" => ParagraphStyle::Listing,
            "literal" => ParagraphStyle::Literal,
            "sidebar" => ParagraphStyle::Sidebar,
            "example" => ParagraphStyle::Example,
            _ => ParagraphStyle::Plain,
        }
    }

    /// Verbatim styles keep `//` lines as content
    pub fn keeps_comments(self) -> bool {
        matches!(self, ParagraphStyle::Listing | ParagraphStyle::Literal)
    }
}

/// Build the block for a paragraph run. `None` when nothing is left after trimming.
pub(super) fn styled_paragraph(
    style: ParagraphStyle,
    run: &[&str],
    line_no: usize,
    meta: PendingMetadata,
) -> Option<Block> {
    if run.iter().all(|line| line.trim().is_empty()) {
        tracing::debug!(line = line_no, "empty paragraph discarded");
        return None;
    }

    let mut block = match style {
        ParagraphStyle::Plain => paragraph(run, line_no),
        ParagraphStyle::Quote => Block::new(BlockKind::Quote, line_no).with_lines(prose(run)),
        ParagraphStyle::Verse => verbatim(BlockKind::Verse, run, line_no),
        ParagraphStyle::Listing => verbatim(BlockKind::Listing, run, line_no),
        ParagraphStyle::Literal => verbatim(BlockKind::Literal, run, line_no),
        ParagraphStyle::Admonition(_) => wrapped(BlockKind::Admonition, run, line_no),
        ParagraphStyle::Sidebar => wrapped(BlockKind::Sidebar, run, line_no),
        ParagraphStyle::Example => wrapped(BlockKind::Example, run, line_no),
    };

    meta.apply_to(&mut block);
    interpret_positional(&mut block);
    tracing::trace!(line = line_no, kind = %block.kind, "paragraph closed");
    Some(block)
}

/// `NOTE: text` paragraph: an Admonition whose single Paragraph child starts after the label.
pub(super) fn inline_admonition(
    label: &str,
    run: &[&str],
    line_no: usize,
    meta: PendingMetadata,
) -> Option<Block> {
    let (first, rest) = run.split_first()?;
    let first = admonition_label(first).map_or(*first, |(_, text)| text);
    let mut lines = vec![first];
    lines.extend_from_slice(rest);

    let mut block = wrapped(BlockKind::Admonition, &lines, line_no);
    block.attributes.insert(attributes::STYLE, label);
    meta.apply_to(&mut block);
    tracing::trace!(line = line_no, label, "inline admonition");
    Some(block)
}

/// Kind-specific trimming of a verbatim body
///
///     Listing: untouched
///     Literal: blank edges dropped, common indentation stripped
///     Verse: line comments dropped, blank edges dropped, trailing whitespace trimmed
pub(super) fn verbatim_lines(kind: BlockKind, body: &[&str]) -> Vec<String> {
    match kind {
        BlockKind::Listing => body.iter().map(|line| line.to_string()).collect(),
        BlockKind::Literal => strip_common_indentation(&trim_blank_edges(body)),
        BlockKind::Verse => trim_blank_edges(&strip_line_comments(body))
            .into_iter()
            .map(|line| line.trim_end().to_string())
            .collect(),
        BlockKind::Comment => Vec::new(),
        _ => prose(body),
    }
}

/// Give positional attributes their meaning for the block kind.
pub(super) fn interpret_positional(block: &mut Block) {
    match block.kind {
        BlockKind::Quote | BlockKind::Verse => {
            block
                .attributes
                .promote_positional(1, attributes::ATTRIBUTION);
            block.attributes.promote_positional(2, attributes::CITETITLE);
        }
        BlockKind::Listing if block.style() == Some("source") => {
            block.attributes.promote_positional(1, attributes::LANGUAGE);
        }
        _ => {}
    }
}

fn prose(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.trim().to_string()).collect()
}

fn paragraph(run: &[&str], line_no: usize) -> Block {
    Block::new(BlockKind::Paragraph, line_no).with_lines(prose(run))
}

fn verbatim(kind: BlockKind, run: &[&str], line_no: usize) -> Block {
    Block::new(kind, line_no).with_lines(verbatim_lines(kind, run))
}

fn wrapped(kind: BlockKind, run: &[&str], line_no: usize) -> Block {
    Block::new(kind, line_no).with_children(vec![paragraph(run, line_no)])
}
