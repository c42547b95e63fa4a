//! Treeviz formatter for block trees
//!
//! Treeviz is a visual representation of the tree, one line per block, which makes it quick to
//! scan and easy to diff. Nesting is drawn with box characters:
//!
//! <prefix><connector> <icon> <label> (label truncated to 30 characters)
//!
//!     ⧉ Document Title
//!     ├─ ¶ Preamble text
//!     └─ § First Section
//!       ├─ " Famous quote.
//!       └─ ⚠ NOTE
//!         └─ ¶ Keep calm.
//!
//! Icons
//!     Document: ⧉
//!     Section: §
//!     Paragraph: ¶
//!     Literal: 𝒱
//!     Listing: ƒ
//!     Quote: "
//!     Verse: ℣
//!     Sidebar: ➔
//!     Example: Ψ
//!     Admonition: ⚠
//!     Comment: ○
//!
//! Labels
//!     The block title when there is one, otherwise the first content line. Admonitions show
//!     their label, listings their language. Containers without either show the child count.

use crate::quire::ast::{Block, BlockKind};
use std::collections::HashMap;

const LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Document => "⧉",
        BlockKind::Section => "§",
        BlockKind::Paragraph => "¶",
        BlockKind::Literal => "𝒱",
        BlockKind::Listing => "ƒ",
        BlockKind::Quote => "\"",
        BlockKind::Verse => "℣",
        BlockKind::Sidebar => "➔",
        BlockKind::Example => "Ψ",
        BlockKind::Admonition => "⚠",
        BlockKind::Comment => "○",
    }
}

fn label(block: &Block) -> String {
    if let Some(title) = &block.title {
        return title.clone();
    }
    match block.kind {
        BlockKind::Document => return "Document".to_string(),
        BlockKind::Admonition => {
            return block.style().unwrap_or(block.kind.name()).to_string();
        }
        BlockKind::Listing => {
            if let Some(language) = block.language() {
                return format!("[{}] {}", language, first_line(block));
            }
        }
        _ => {}
    }
    match (block.raw_lines.is_empty(), block.children.len()) {
        (true, 1) => "1 block".to_string(),
        (true, n) => format!("{} blocks", n),
        (false, _) => first_line(block).to_string(),
    }
}

fn first_line(block: &Block) -> &str {
    block.raw_lines.first().map_or("", String::as_str)
}

fn format_block(
    block: &Block,
    prefix: &str,
    child_index: usize,
    child_count: usize,
    show_linum: bool,
) -> String {
    let mut output = String::new();

    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };
    let linum_prefix = if show_linum {
        format!("{:02} ", block.line)
    } else {
        String::new()
    };

    output.push_str(&format!(
        "{}{}{} {} {}\n",
        linum_prefix,
        prefix,
        connector,
        get_icon(block.kind),
        truncate(&label(block), LABEL_WIDTH)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = block.children.len();
    for (i, child) in block.children.iter().enumerate() {
        output.push_str(&format_block(
            child,
            &child_prefix,
            i,
            child_count,
            show_linum,
        ));
    }

    output
}

pub fn to_treeviz_str(doc: &Block) -> String {
    to_treeviz_str_with_params(doc, &HashMap::new())
}

/// Supported params: `show-linum` prefixes every line with the block's source line.
pub fn to_treeviz_str_with_params(doc: &Block, params: &HashMap<String, String>) -> String {
    let show_linum = params
        .get("show-linum")
        .map(|v| v != "false")
        .unwrap_or(false);

    let mut output = format!(
        "{} {}\n",
        get_icon(doc.kind),
        truncate(&label(doc), LABEL_WIDTH)
    );
    let child_count = doc.children.len();
    for (i, child) in doc.children.iter().enumerate() {
        output.push_str(&format_block(child, "", i, child_count, show_linum));
    }
    output
}
