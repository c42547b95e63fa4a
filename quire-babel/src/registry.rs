//! Format registry for format discovery and selection
//!
//! Formats are registered and looked up by name. [FormatRegistry::with_defaults] carries every
//! built-in output format.

use crate::error::FormatError;
use crate::format::Format;
use quire_parser::Block;
use std::collections::HashMap;

/// Registry of output formats
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let html = registry.serialize(&doc, "html")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// Find the format claiming a file extension (without the dot, case-insensitive)
    pub fn for_extension(&self, extension: &str) -> Option<&dyn Format> {
        let extension = extension.to_ascii_lowercase();
        let mut names = self.list_formats();
        names.retain(|name| {
            self.formats[name]
                .file_extensions()
                .iter()
                .any(|ext| *ext == extension)
        });
        names.first().map(|name| self.formats[name].as_ref())
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Serialize a document using the specified format
    pub fn serialize(&self, doc: &Block, format: &str) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support serialization",
                format
            )));
        }
        fmt.serialize(doc)
    }

    /// Parse `source` and serialize it with the specified format
    pub fn render(&self, source: &str, format: &str) -> Result<String, FormatError> {
        let doc = quire_parser::parse_document(source)?;
        self.serialize(&doc, format)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::html::HtmlFormat::default());
        registry.register(crate::formats::json::JsonFormat);
        registry.register(crate::formats::treeviz::TreevizFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
