//! Block tree definitions for the quire dialect
//!
//!     The parser produces a single tree of [Block] nodes rooted at a Document block. Every
//!     node has the same shape: a [BlockKind] tag, an optional title, an ordered
//!     [AttributeSet], child blocks and raw content lines. Which of those fields carry data
//!     depends on the kind:
//!
//!         - Document, Section, Quote, Sidebar, Example, Admonition: children.
//!         - Paragraph, Literal, Listing, Verse: raw lines, never children.
//!         - Quote written as a styled paragraph (`[quote]` with no fence): raw lines and no
//!           children.
//!
//! Nesting
//!
//!     Quote, Sidebar, Example and Admonition may hold any other kind, themselves included.
//!     Sections only ever appear under the Document or under a shallower Section. Comment
//!     blocks are dropped before the tree is built, so the Comment kind exists for
//!     completeness of the classification and never shows up in a parsed tree.
//!
//!     Renderers dispatch on `kind` first and on the `style` attribute second. The parser
//!     stays unaware of how a kind is presented.

pub mod attributes;
pub mod block;
pub mod error;

pub use attributes::AttributeSet;
pub use block::{Block, BlockKind};
pub use error::{ParseError, ParseResult};
