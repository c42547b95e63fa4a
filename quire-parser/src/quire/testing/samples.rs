//! Curated sample documents
//!
//!     Samples live in `quire-parser/samples/` and are compiled in, so tests never depend on
//!     the working directory. Each one was checked against the expected tree once; tests that
//!     need a whole document should load one from here instead of inventing source text.
//!
//!         - sections: document title, preamble, nested sections, a titled paragraph
//!         - blocks: one of every delimited and styled block kind
//!         - comments: line and block comments between and inside paragraphs

use crate::quire::ast::{Block, ParseResult};
use crate::quire::lexing::split_lines;
use crate::quire::parsing::parse_document;

static SAMPLES: [(&str, &str); 3] = [
    ("sections", include_str!("../../../samples/sections.adoc")),
    ("blocks", include_str!("../../../samples/blocks.adoc")),
    ("comments", include_str!("../../../samples/comments.adoc")),
];

/// A named sample document
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub name: &'static str,
    source: &'static str,
}

impl Sample {
    /// Look a sample up by name. Panics on unknown names, this is test support.
    pub fn load(name: &str) -> Sample {
        Self::all()
            .find(|sample| sample.name == name)
            .unwrap_or_else(|| panic!("no sample named {:?}", name))
    }

    pub fn all() -> impl Iterator<Item = Sample> {
        SAMPLES
            .iter()
            .map(|&(name, source)| Sample { name, source })
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn lines(&self) -> Vec<&'static str> {
        split_lines(self.source)
    }

    pub fn parse(&self) -> ParseResult<Block> {
        parse_document(self.source)
    }
}
