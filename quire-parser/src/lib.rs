//! # quire
//!
//! Block structure parser for the quire markup dialect.
//!
//! File Layout
//!
//!     The parser is line based. Each stage works on whole lines and never needs a character
//!     level token stream, so the layout follows the stages a line goes through:
//!
//! src/quire
//!   ├── lexing     Line classification, delimiter table, attribute lines, comments
//!   ├── parsing    Tree builder: paragraphs, delimited blocks, sections
//!   ├── ast        The Block tree handed to renderers
//!   ├── formats    Debug views of the tree (treeviz)
//!   └── testing    Fluent assertions over the tree
//!
//! For testing guidelines, see the [testing module](quire::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod quire;

pub use quire::ast::{AttributeSet, Block, BlockKind, ParseError, ParseResult};
pub use quire::parsing::{parse, parse_document, parse_with_options, ParseOptions};
