//! Fluent assertion API for block trees

use super::matchers::TextMatch;
use crate::quire::ast::{Block, BlockKind};

/// Create an assertion builder for a parsed document
pub fn assert_tree(doc: &Block) -> DocumentAssertion<'_> {
    assert_eq!(
        doc.kind,
        BlockKind::Document,
        "assert_tree expects a Document root, found {}",
        doc.kind
    );
    DocumentAssertion { doc }
}

/// One-line summary of a block list, used in failure messages
fn summarize(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| match &block.title {
            Some(title) => format!("{}({})", block.kind, title),
            None => block.kind.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn assert_index(index: usize, blocks: &[Block], context: &str) {
    assert!(
        index < blocks.len(),
        "{}: index {} out of bounds ({} blocks: [{}])",
        context,
        index,
        blocks.len(),
        summarize(blocks)
    );
}

// ============================================================================
// Document
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Block,
}

impl<'a> DocumentAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.doc.title.as_deref(),
            Some(expected),
            "document: Expected title {:?}",
            expected
        );
        self
    }

    pub fn no_title(self) -> Self {
        assert!(
            self.doc.title.is_none(),
            "document: Expected no title, found {:?}",
            self.doc.title
        );
        self
    }

    /// Assert the number of top level blocks
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.doc.children.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} items, found {} items: [{}]",
            expected,
            actual,
            summarize(&self.doc.children)
        );
        self
    }

    /// Assert on a top level block by index
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assert_index(index, &self.doc.children, "document");
        assertion(BlockAssertion {
            block: &self.doc.children[index],
            context: format!("items[{}]", index),
        });
        self
    }

    pub fn items<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ChildrenAssertion<'a>),
    {
        assertion(ChildrenAssertion {
            children: &self.doc.children,
            context: "items".to_string(),
        });
        self
    }

    /// Number of blocks of `kind` anywhere in the tree
    pub fn count_of(self, kind: BlockKind, expected: usize) -> Self {
        let actual = self.doc.count_of(kind);
        assert_eq!(
            actual, expected,
            "document: Expected {} {} blocks in the tree, found {}",
            expected, kind, actual
        );
        self
    }

    /// No title or content line anywhere in the tree contains `needle`
    pub fn text_absent(self, needle: &str) -> Self {
        for block in self.doc.walk() {
            let title_hit = block.title.as_deref().is_some_and(|t| t.contains(needle));
            let line_hit = block.raw_lines.iter().any(|line| line.contains(needle));
            assert!(
                !title_hit && !line_hit,
                "document: Expected no trace of {:?}, found it in a {} at line {}",
                needle,
                block.kind,
                block.line
            );
        }
        self
    }
}

// ============================================================================
// Single block
// ============================================================================

pub struct BlockAssertion<'a> {
    block: &'a Block,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    pub fn kind(self, expected: BlockKind) -> Self {
        assert_eq!(
            self.block.kind, expected,
            "{}: Expected {}, found {}",
            self.context, expected, self.block.kind
        );
        self
    }

    pub fn assert_paragraph(self) -> Self {
        self.kind(BlockKind::Paragraph)
    }

    pub fn assert_section(self) -> Self {
        self.kind(BlockKind::Section)
    }

    pub fn assert_quote(self) -> Self {
        self.kind(BlockKind::Quote)
    }

    pub fn assert_verse(self) -> Self {
        self.kind(BlockKind::Verse)
    }

    pub fn assert_listing(self) -> Self {
        self.kind(BlockKind::Listing)
    }

    pub fn assert_literal(self) -> Self {
        self.kind(BlockKind::Literal)
    }

    pub fn assert_sidebar(self) -> Self {
        self.kind(BlockKind::Sidebar)
    }

    pub fn assert_example(self) -> Self {
        self.kind(BlockKind::Example)
    }

    pub fn assert_admonition(self) -> Self {
        self.kind(BlockKind::Admonition)
    }

    pub fn title(self, expected: &str) -> Self {
        let actual = self.block.title.as_deref().unwrap_or_else(|| {
            panic!(
                "{}: Expected title {:?}, found none",
                self.context, expected
            )
        });
        TextMatch::Exact(expected.to_string()).assert(actual, &self.context);
        self
    }

    pub fn no_title(self) -> Self {
        assert!(
            self.block.title.is_none(),
            "{}: Expected no title, found {:?}",
            self.context,
            self.block.title
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.block.text(), &self.context);
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(&self.block.text(), &self.context);
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(&self.block.text(), &self.context);
        self
    }

    /// Exact `raw_lines`
    pub fn lines(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.block.raw_lines, expected,
            "{}: raw lines differ",
            self.context
        );
        self
    }

    pub fn line_count(self, expected: usize) -> Self {
        let actual = self.block.raw_lines.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} lines, found {} lines",
            self.context, expected, actual
        );
        self
    }

    pub fn attribute(self, key: &str, expected: &str) -> Self {
        assert_eq!(
            self.block.attribute(key),
            Some(expected),
            "{}: attribute {:?}",
            self.context,
            key
        );
        self
    }

    pub fn no_attribute(self, key: &str) -> Self {
        assert_eq!(
            self.block.attribute(key),
            None,
            "{}: Expected no attribute {:?}",
            self.context,
            key
        );
        self
    }

    pub fn style(self, expected: &str) -> Self {
        self.attribute("style", expected)
    }

    pub fn id(self, expected: &str) -> Self {
        self.attribute("id", expected)
    }

    pub fn attribution(self, expected: &str) -> Self {
        self.attribute("attribution", expected)
    }

    pub fn citation(self, expected: &str) -> Self {
        self.attribute("citetitle", expected)
    }

    pub fn language(self, expected: &str) -> Self {
        self.attribute("language", expected)
    }

    pub fn level(self, expected: usize) -> Self {
        assert_eq!(
            self.block.level, expected,
            "{}: Expected level {}, found {}",
            self.context, expected, self.block.level
        );
        self
    }

    /// 1-based line where the block starts
    pub fn source_line(self, expected: usize) -> Self {
        assert_eq!(
            self.block.line, expected,
            "{}: Expected block to start on line {}, found {}",
            self.context, expected, self.block.line
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.block.children.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(&self.block.children)
        );
        self
    }

    pub fn no_children(self) -> Self {
        self.child_count(0)
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assert_index(index, &self.block.children, &self.context);
        assertion(BlockAssertion {
            block: &self.block.children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }

    pub fn children<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ChildrenAssertion<'a>),
    {
        assertion(ChildrenAssertion {
            children: &self.block.children,
            context: format!("{}.children", self.context),
        });
        self
    }

    /// Number of blocks of `kind` below this one
    pub fn descendant_count(self, kind: BlockKind, expected: usize) -> Self {
        let actual = self.block.count_of(kind);
        assert_eq!(
            actual, expected,
            "{}: Expected {} {} descendants, found {}",
            self.context, expected, kind, actual
        );
        self
    }
}

// ============================================================================
// Block lists
// ============================================================================

pub struct ChildrenAssertion<'a> {
    children: &'a [Block],
    context: String,
}

impl<'a> ChildrenAssertion<'a> {
    pub fn count(self, expected: usize) -> Self {
        assert_eq!(
            self.children.len(),
            expected,
            "{}: Expected {} blocks, found [{}]",
            self.context,
            expected,
            summarize(self.children)
        );
        self
    }

    /// Kinds of the blocks, in order
    pub fn kinds(self, expected: &[BlockKind]) -> Self {
        let actual: Vec<BlockKind> = self.children.iter().map(|b| b.kind).collect();
        assert_eq!(actual, expected, "{}: block kinds differ", self.context);
        self
    }

    pub fn all(self, kind: BlockKind) -> Self {
        for (index, block) in self.children.iter().enumerate() {
            assert_eq!(
                block.kind, kind,
                "{}[{}]: Expected every block to be {}, found {}",
                self.context, index, kind, block.kind
            );
        }
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assert_index(index, self.children, &self.context);
        assertion(BlockAssertion {
            block: &self.children[index],
            context: format!("{}[{}]", self.context, index),
        });
        self
    }
}
