//! HTML format implementation
//!
//! One-way: Block tree → HTML. The tree is turned into an html5ever `RcDom` and serialized, see
//! [serializer].
//!
//! # Data Model
//!
//! | Block      | HTML                                                              |
//! |------------|-------------------------------------------------------------------|
//! | Document   | `div#header > h1` when titled, `div#preamble` before sections     |
//! | Section    | `div.sectN > hN+1#id + div.sectionbody` (level 0: `h1.sect0`)     |
//! | Paragraph  | `div.paragraph > p`                                               |
//! | Quote      | `div.quoteblock > div.content + div.attribution > em`             |
//! | Verse      | `div.verseblock > pre.content + div.attribution`                  |
//! | Listing    | `div.listingblock > div.content > div.highlight > pre > code`     |
//! | Literal    | `div.literalblock > div.content > pre > tt`                       |
//! | Sidebar    | `div.sidebarblock > div.content`                                  |
//! | Example    | `div.exampleblock > div.content`                                  |
//! | Admonition | `div.admonitionblock > table > tr > td.icon + td.content`         |
//! | Comment    | nothing                                                           |
//!
//! Block titles render as `div.title`. A `role` attribute is appended to the outer class list
//! and an `id` attribute becomes the element id.

pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use quire_parser::Block;

pub use serializer::serialize_to_html;

/// Output options for [HtmlFormat]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Wrap the fragment in a complete HTML5 page
    pub standalone: bool,
    /// Page title; falls back to the document title
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment or standalone page"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Block) -> Result<String, FormatError> {
        serialize_to_html(doc, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_format_properties() {
        let format = HtmlFormat::default();
        assert_eq!(format.name(), "html");
        assert!(format.supports_serialization());
        assert_eq!(format.file_extensions(), &["html", "htm"]);
    }

    #[test]
    fn test_html_format_standalone_option() {
        let format = HtmlFormat::new(HtmlOptions {
            standalone: true,
            title: Some("Custom".to_string()),
        });
        let html = format.render("Body.").unwrap();
        assert!(html.contains("<title>Custom</title>"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
