//! Block node
//!
//!     A single node type covers every element of the dialect. The [BlockKind] tag tells
//!     consumers which fields are meaningful; see the [ast](super) module docs for the
//!     kind/field matrix.
//!
//!     Blocks are built bottom-up: the parser finishes a block (closing fence, end of a
//!     paragraph run, next heading) before handing it to its parent, and never touches it
//!     again afterwards.

use super::attributes::{self, AttributeSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of block kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Document,
    Section,
    Paragraph,
    Literal,
    Listing,
    Quote,
    Verse,
    Sidebar,
    Example,
    Admonition,
    Comment,
}

impl BlockKind {
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Document => "Document",
            BlockKind::Section => "Section",
            BlockKind::Paragraph => "Paragraph",
            BlockKind::Literal => "Literal",
            BlockKind::Listing => "Listing",
            BlockKind::Quote => "Quote",
            BlockKind::Verse => "Verse",
            BlockKind::Sidebar => "Sidebar",
            BlockKind::Example => "Example",
            BlockKind::Admonition => "Admonition",
            BlockKind::Comment => "Comment",
        }
    }

    /// Kinds whose content is kept as lines and never parsed into children
    pub fn is_verbatim(self) -> bool {
        matches!(
            self,
            BlockKind::Literal | BlockKind::Listing | BlockKind::Verse | BlockKind::Comment
        )
    }

    /// Kinds that can hold arbitrary nested blocks
    pub fn is_container(self) -> bool {
        matches!(
            self,
            BlockKind::Document
                | BlockKind::Section
                | BlockKind::Quote
                | BlockKind::Sidebar
                | BlockKind::Example
                | BlockKind::Admonition
        )
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "AttributeSet::is_empty")]
    pub attributes: AttributeSet,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,

    /// Content lines of leaf kinds, after kind-specific trimming
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub raw_lines: Vec<String>,

    /// Heading depth; only meaningful for sections (0 = document title level)
    #[serde(default)]
    pub level: usize,

    /// 1-based source line where the block's content starts (0 for the document)
    #[serde(default)]
    pub line: usize,
}

impl Block {
    pub fn new(kind: BlockKind, line: usize) -> Self {
        Self {
            kind,
            title: None,
            attributes: AttributeSet::new(),
            children: Vec::new(),
            raw_lines: Vec::new(),
            level: 0,
            line,
        }
    }

    pub fn document() -> Self {
        Self::new(BlockKind::Document, 0)
    }

    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.children = children;
        self
    }

    pub fn is(&self, kind: BlockKind) -> bool {
        self.kind == kind
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    pub fn style(&self) -> Option<&str> {
        self.attributes.style()
    }

    pub fn id(&self) -> Option<&str> {
        self.attributes.get(attributes::ID)
    }

    pub fn role(&self) -> Option<&str> {
        self.attributes.get(attributes::ROLE)
    }

    /// Author of a quote or verse
    pub fn attribution(&self) -> Option<&str> {
        self.attributes.get(attributes::ATTRIBUTION)
    }

    /// Title of the work a quote or verse is cited from
    pub fn citation(&self) -> Option<&str> {
        self.attributes.get(attributes::CITETITLE)
    }

    pub fn language(&self) -> Option<&str> {
        self.attributes.get(attributes::LANGUAGE)
    }

    /// Raw lines joined with newlines
    pub fn text(&self) -> String {
        self.raw_lines.join("\n")
    }

    /// Pre-order iterator over this block and all of its descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// All descendants (excluding `self`) of the given kind, in document order
    pub fn descendants_of(&self, kind: BlockKind) -> Vec<&Block> {
        self.walk().skip(1).filter(|b| b.kind == kind).collect()
    }

    pub fn count_of(&self, kind: BlockKind) -> usize {
        self.descendants_of(kind).len()
    }
}

/// Depth-first iterator returned by [Block::walk]
pub struct Walk<'a> {
    stack: Vec<&'a Block>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        let block = self.stack.pop()?;
        self.stack.extend(block.children.iter().rev());
        Some(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Block {
        let quote = Block::new(BlockKind::Quote, 3).with_children(vec![
            Block::new(BlockKind::Paragraph, 4).with_lines(["inside"]),
        ]);
        Block::document().with_children(vec![
            Block::new(BlockKind::Paragraph, 1).with_lines(["first"]),
            quote,
            Block::new(BlockKind::Paragraph, 7).with_lines(["last"]),
        ])
    }

    #[test]
    fn test_walk_is_preorder() {
        let doc = sample_tree();
        let kinds: Vec<_> = doc.walk().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Document,
                BlockKind::Paragraph,
                BlockKind::Quote,
                BlockKind::Paragraph,
                BlockKind::Paragraph,
            ]
        );
    }

    #[test]
    fn test_descendants_of_excludes_self() {
        let doc = sample_tree();
        let texts: Vec<_> = doc
            .descendants_of(BlockKind::Paragraph)
            .iter()
            .map(|b| b.text())
            .collect();
        assert_eq!(texts, vec!["first", "inside", "last"]);
        assert_eq!(doc.count_of(BlockKind::Document), 0);
    }

    #[test]
    fn test_leaf_fields_skipped_when_empty() {
        let json = serde_json::to_value(Block::new(BlockKind::Sidebar, 2)).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object["kind"], "sidebar");
        assert!(!object.contains_key("raw_lines"));
        assert!(!object.contains_key("children"));
        assert!(!object.contains_key("title"));
    }
}
