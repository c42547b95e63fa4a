//! Testing utilities for block trees
//!
//!     Parser tests follow two rules.
//!
//!         1. Prefer the curated documents in [samples] over source strings made up on the
//!            spot. A single element under test can be written inline, but anything that
//!            mixes several elements belongs in a sample file.
//!         2. Check trees with [assert_tree] rather than by indexing into `children` and
//!            matching on kinds by hand.
//!
//! The fluent API
//!
//!     Asserting on a nested quote by hand:
//!
//!     ```rust-example
//!     let section = &doc.children[0];
//!     assert_eq!(section.kind, BlockKind::Section);
//!     assert_eq!(section.title.as_deref(), Some("Introduction"));
//!     let quote = &section.children[0];
//!     assert_eq!(quote.kind, BlockKind::Quote);
//!     assert_eq!(quote.attribution(), Some("Someone"));
//!     ```
//!
//!     The same with [assert_tree]:
//!
//!     ```rust-example
//!     assert_tree(&doc).item(0, |section| {
//!         section
//!             .assert_section()
//!             .title("Introduction")
//!             .child(0, |quote| {
//!                 quote.assert_quote().attribution("Someone");
//!             });
//!     });
//!     ```
//!
//!     Every failure message carries the path to the block (`items[0].children[1]`) and a
//!     summary of its siblings, which is usually enough to see what went wrong without a
//!     debugger.

pub mod samples;

mod matchers;
mod tree_assertions;

pub use matchers::TextMatch;
pub use samples::Sample;
pub use tree_assertions::{assert_tree, BlockAssertion, ChildrenAssertion, DocumentAssertion};
