//! JSON format
//!
//! Pretty-printed serde representation of the block tree. Empty optional fields are omitted,
//! see [Block](quire_parser::Block).

use crate::error::FormatError;
use crate::format::Format;
use quire_parser::Block;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Block tree as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Block) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trips_the_tree() {
        let doc = quire_parser::parse_document("= T\n\n[quote, Someone]\nQuoted.").unwrap();
        let json = JsonFormat.serialize(&doc).unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_json_uses_snake_case_kinds() {
        let json = JsonFormat.render("Hello.").unwrap();
        assert!(json.contains("\"kind\": \"paragraph\""));
    }
}
