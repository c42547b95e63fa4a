//! Block delimiter table
//!
//!     A fence is a line made of four or more repeats of a single delimiter character and
//!     nothing else. The character decides the block kind and the content model:
//!
//!         | Fence  | Kind                     | Content model |
//!         |--------|--------------------------|---------------|
//!         | `----` | Listing                  | Verbatim      |
//!         | `....` | Literal                  | Verbatim      |
//!         | `____` | Quote (Verse if styled)  | Compound      |
//!         | `****` | Sidebar                  | Compound      |
//!         | `====` | Example (or Admonition)  | Compound      |
//!         | `////` | Comment                  | Raw           |
//!
//!     The style from a preceding attribute line can refine the kind, see
//!     [Delimiter::resolve_kind]. A fence closes the innermost open fence of the same
//!     character and length; see the parser's fence matching for the nesting rules.

use super::line_classification::is_admonition_style;
use crate::quire::ast::BlockKind;

/// Minimum number of repeated characters forming a fence
pub const MIN_FENCE_LENGTH: usize = 4;

/// How the lines between an opening and closing fence are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentModel {
    /// Parsed recursively into child blocks
    Compound,
    /// Kept as raw lines
    Verbatim,
    /// Discarded
    Raw,
}

/// One entry of the delimiter table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub marker: char,
    pub kind: BlockKind,
    pub content_model: ContentModel,
}

pub static DELIMITERS: [Delimiter; 6] = [
    Delimiter {
        marker: '-',
        kind: BlockKind::Listing,
        content_model: ContentModel::Verbatim,
    },
    Delimiter {
        marker: '.',
        kind: BlockKind::Literal,
        content_model: ContentModel::Verbatim,
    },
    Delimiter {
        marker: '_',
        kind: BlockKind::Quote,
        content_model: ContentModel::Compound,
    },
    Delimiter {
        marker: '*',
        kind: BlockKind::Sidebar,
        content_model: ContentModel::Compound,
    },
    Delimiter {
        marker: '=',
        kind: BlockKind::Example,
        content_model: ContentModel::Compound,
    },
    Delimiter {
        marker: '/',
        kind: BlockKind::Comment,
        content_model: ContentModel::Raw,
    },
];

/// Look up the table entry for a fence character
pub fn lookup(marker: char) -> Option<&'static Delimiter> {
    DELIMITERS.iter().find(|d| d.marker == marker)
}

impl Delimiter {
    /// The block kind this fence opens once the pending style is known.
    pub fn resolve_kind(&self, style: Option<&str>) -> BlockKind {
        match (self.kind, style) {
            (BlockKind::Quote, Some("verse")) => BlockKind::Verse,
            (BlockKind::Example, Some(style)) if is_admonition_style(style) => {
                BlockKind::Admonition
            }
            (BlockKind::Literal, Some("source" | "listing")) => BlockKind::Listing,
            (BlockKind::Listing, Some("literal")) => BlockKind::Literal,
            (kind, _) => kind,
        }
    }
}

/// Content model of a block kind once it has been resolved
pub fn content_model_of(kind: BlockKind) -> ContentModel {
    match kind {
        BlockKind::Comment => ContentModel::Raw,
        kind if kind.is_verbatim() => ContentModel::Verbatim,
        _ => ContentModel::Compound,
    }
}

/// A fence line: its table entry and how many characters it spans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence {
    pub delimiter: &'static Delimiter,
    pub length: usize,
}

impl Fence {
    /// Recognise a fence line. Leading whitespace disqualifies, trailing whitespace is ignored.
    pub fn parse(line: &str) -> Option<Fence> {
        let line = line.trim_end();
        let marker = line.chars().next()?;
        let delimiter = lookup(marker)?;
        let length = line.chars().count();
        if length < MIN_FENCE_LENGTH || !line.chars().all(|c| c == marker) {
            return None;
        }
        Some(Fence { delimiter, length })
    }

    /// Whether `other` is the closing fence for `self`
    pub fn is_closed_by(&self, other: &Fence) -> bool {
        self.delimiter.marker == other.delimiter.marker && self.length == other.length
    }

    pub fn kind(&self) -> BlockKind {
        self.delimiter.kind
    }

    pub fn is_comment(&self) -> bool {
        self.delimiter.kind == BlockKind::Comment
    }
}
