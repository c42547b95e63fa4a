//! Treeviz format
//!
//! Wraps the parser's treeviz renderer, one line per block. See
//! [quire_parser::quire::formats::treeviz] for icons and labels.

use crate::error::FormatError;
use crate::format::Format;
use quire_parser::quire::formats::to_treeviz_str;
use quire_parser::Block;

pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree, one line per block"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Block) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }
}
