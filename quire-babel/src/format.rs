//! Format trait definition
//!
//! Every output format implements [Format]. Formats only go one way: a parsed [Block] tree in,
//! a string out.

use crate::error::FormatError;
use quire_parser::{parse_document, Block};

/// Trait for output formats
///
/// ```ignore
/// struct Outline;
///
/// impl Format for Outline {
///     fn name(&self) -> &str {
///         "outline"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, doc: &Block) -> Result<String, FormatError> {
///         Ok(doc.title.clone().unwrap_or_default())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name the format is registered under (e.g. "html", "json")
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the dot
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    fn supports_serialization(&self) -> bool {
        false
    }

    /// Serialize a document tree
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _doc: &Block) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Parse `source` and serialize the resulting tree
    fn render(&self, source: &str) -> Result<String, FormatError> {
        let doc = parse_document(source)?;
        self.serialize(&doc)
    }
}
