//! Section nesting and ids
//!
//!     Sections are not delimited, they run until the next heading of the same or a shallower
//!     level. [SectionFrames] keeps the chain of currently open sections; a new heading pops
//!     every frame at its level or deeper (folding each into its parent) and is pushed on top.
//!     Finishing pops everything. A level can be skipped: `==== Deep` directly under `== Top`
//!     simply nests one frame down.

use std::collections::HashSet;

use crate::quire::ast::{AttributeSet, Block};
use once_cell::sync::Lazy;
use regex::Regex;

static INVALID_ID_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s.-]+").expect("id filter pattern is valid"));

static ID_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s.-]+").expect("id separator pattern is valid"));

/// Level 0 heading at the very top of the document
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Header {
    pub title: String,
    pub attributes: AttributeSet,
}

#[derive(Debug, Default)]
pub(super) struct SectionFrames {
    blocks: Vec<Block>,
    open: Vec<Block>,
    header: Option<Header>,
}

impl SectionFrames {
    /// Add a block to the innermost open section, or to the top level.
    pub fn push(&mut self, block: Block) {
        match self.open.last_mut() {
            Some(section) => section.children.push(block),
            None => self.blocks.push(block),
        }
    }

    pub fn push_some(&mut self, block: Option<Block>) {
        if let Some(block) = block {
            self.push(block);
        }
    }

    pub fn open(&mut self, section: Block) {
        self.close_to(section.level);
        self.open.push(section);
    }

    /// Close every open section at `level` or deeper.
    fn close_to(&mut self, level: usize) {
        while self.open.last().is_some_and(|s| s.level >= level) {
            if let Some(section) = self.open.pop() {
                self.push(section);
            }
        }
    }

    /// Nothing has been seen yet; a level 0 heading here is the document title.
    pub fn is_pristine(&self) -> bool {
        self.blocks.is_empty() && self.open.is_empty() && self.header.is_none()
    }

    pub fn set_header(&mut self, title: &str, attributes: AttributeSet) {
        self.header = Some(Header {
            title: title.to_string(),
            attributes,
        });
    }

    pub fn finish(mut self) -> (Option<Header>, Vec<Block>) {
        self.close_to(0);
        (self.header, self.blocks)
    }
}

/// Hands out section ids, keeping them unique within one document
#[derive(Debug, Default)]
pub(super) struct IdRegistry {
    taken: HashSet<String>,
}

impl IdRegistry {
    /// Claim an id given explicitly in the source.
    pub fn reserve(&mut self, id: &str) {
        if !self.taken.insert(id.to_string()) {
            tracing::debug!(id, "duplicate explicit id");
        }
    }

    /// `_first_section` from "First Section", suffixed `_2`, `_3`, ... when taken.
    pub fn generate(&mut self, title: &str) -> String {
        let base = section_id_base(title);
        let mut candidate = base.clone();
        let mut counter = 2;
        while self.taken.contains(&candidate) {
            candidate = format!("{}_{}", base, counter);
            counter += 1;
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}

fn section_id_base(title: &str) -> String {
    let lowered = title.to_lowercase();
    let cleaned = INVALID_ID_CHARS.replace_all(&lowered, "");
    let joined = ID_SEPARATORS.replace_all(cleaned.trim(), "_");
    let joined = joined.trim_matches('_');
    if joined.is_empty() {
        "_section".to_string()
    } else {
        format!("_{}", joined)
    }
}
