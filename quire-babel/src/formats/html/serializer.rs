//! HTML serialization
//!
//! Pipeline: Block tree → RcDom → HTML string (→ optional standalone page)
//!
//! Every block kind maps to a fixed `div` skeleton whose class names downstream stylesheets
//! rely on. Text is inserted as DOM text nodes, so escaping is left to html5ever's serializer.

use super::HtmlOptions;
use crate::error::FormatError;
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use quire_parser::{Block, BlockKind};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Serialize a document tree to HTML
pub fn serialize_to_html(doc: &Block, options: &HtmlOptions) -> Result<String, FormatError> {
    let dom = build_html_dom(doc);
    let body = serialize_dom(&dom)?;

    if !options.standalone {
        return Ok(body);
    }
    let title = options
        .title
        .as_deref()
        .or(doc.title.as_deref())
        .unwrap_or("Untitled");
    Ok(wrap_in_document(&body, title))
}

/// Build the DOM for a document. The fragment lives under a single container node that is
/// not itself serialized.
fn build_html_dom(doc: &Block) -> RcDom {
    let dom = RcDom::default();
    let container = create_element("div", vec![]);

    if let Some(title) = &doc.title {
        let header = create_element("div", vec![("id", "header")]);
        append(&header, text_element("h1", vec![], title));
        append(&container, header);
    }

    let first_section = doc
        .children
        .iter()
        .position(|child| child.is(BlockKind::Section));
    match first_section {
        Some(split) if split > 0 => {
            let preamble = create_element("div", vec![("id", "preamble")]);
            let body = create_element("div", vec![("class", "sectionbody")]);
            render_children(&doc.children[..split], &body);
            append(&preamble, body);
            append(&container, preamble);
            render_children(&doc.children[split..], &container);
        }
        _ => render_children(&doc.children, &container),
    }

    dom.document.children.borrow_mut().push(container);
    dom
}

fn render_children(blocks: &[Block], parent: &Handle) {
    for block in blocks {
        render_block(block, parent);
    }
}

fn render_block(block: &Block, parent: &Handle) {
    tracing::trace!(kind = %block.kind, line = block.line, "rendering block");
    match block.kind {
        BlockKind::Comment => {}
        BlockKind::Document => render_children(&block.children, parent),
        BlockKind::Section => render_section(block, parent),
        BlockKind::Paragraph => {
            let div = wrapper("paragraph", block);
            push_title(&div, block);
            append(&div, text_element("p", vec![], &block.text()));
            append(parent, div);
        }
        BlockKind::Quote => {
            let div = wrapper("quoteblock", block);
            push_title(&div, block);
            let content = create_element("div", vec![("class", "content")]);
            if block.children.is_empty() {
                append(&content, create_text(&block.text()));
            } else {
                render_children(&block.children, &content);
            }
            append(&div, content);
            push_attribution(&div, block);
            append(parent, div);
        }
        BlockKind::Verse => {
            let div = wrapper("verseblock", block);
            push_title(&div, block);
            append(
                &div,
                text_element("pre", vec![("class", "content")], &block.text()),
            );
            push_attribution(&div, block);
            append(parent, div);
        }
        BlockKind::Listing => {
            let div = wrapper("listingblock", block);
            push_title(&div, block);
            let content = create_element("div", vec![("class", "content")]);
            let highlight = create_element("div", vec![("class", "highlight")]);
            let pre = create_element("pre", vec![]);
            let code = match block.language() {
                Some(language) => {
                    let class = format!("language-{}", language);
                    text_element(
                        "code",
                        vec![("class", class.as_str()), ("data-lang", language)],
                        &block.text(),
                    )
                }
                None => text_element("code", vec![], &block.text()),
            };
            append(&pre, code);
            append(&highlight, pre);
            append(&content, highlight);
            append(&div, content);
            append(parent, div);
        }
        BlockKind::Literal => {
            let div = wrapper("literalblock", block);
            push_title(&div, block);
            let content = create_element("div", vec![("class", "content")]);
            let pre = create_element("pre", vec![]);
            append(&pre, text_element("tt", vec![], &block.text()));
            append(&content, pre);
            append(&div, content);
            append(parent, div);
        }
        BlockKind::Sidebar => {
            let div = wrapper("sidebarblock", block);
            let content = create_element("div", vec![("class", "content")]);
            push_title(&content, block);
            render_children(&block.children, &content);
            append(&div, content);
            append(parent, div);
        }
        BlockKind::Example => {
            let div = wrapper("exampleblock", block);
            push_title(&div, block);
            let content = create_element("div", vec![("class", "content")]);
            render_children(&block.children, &content);
            append(&div, content);
            append(parent, div);
        }
        BlockKind::Admonition => render_admonition(block, parent),
    }
}

fn render_section(block: &Block, parent: &Handle) {
    let title = block.title.as_deref().unwrap_or_default();
    let tag = format!("h{}", (block.level + 1).min(6));
    let mut heading_attrs = Vec::new();
    if let Some(id) = block.id() {
        heading_attrs.push(("id", id));
    }

    // Level 0 sections (parts) have no wrapper; their content follows the heading directly.
    if block.level == 0 {
        heading_attrs.push(("class", "sect0"));
        append(parent, text_element(&tag, heading_attrs, title));
        render_children(&block.children, parent);
        return;
    }

    let class = class_list(&format!("sect{}", block.level), block);
    let div = create_element("div", vec![("class", class.as_str())]);
    append(&div, text_element(&tag, heading_attrs, title));
    let body = create_element("div", vec![("class", "sectionbody")]);
    render_children(&block.children, &body);
    append(&div, body);
    append(parent, div);
}

fn render_admonition(block: &Block, parent: &Handle) {
    let label = block.style().unwrap_or("NOTE");
    let div = wrapper("admonitionblock", block);
    let table = create_element("table", vec![]);
    let row = create_element("tr", vec![]);

    let icon = create_element("td", vec![("class", "icon")]);
    append(&icon, text_element("div", vec![("class", "title")], label));

    let content = create_element("td", vec![("class", "content")]);
    push_title(&content, block);
    render_children(&block.children, &content);

    append(&row, icon);
    append(&row, content);
    append(&table, row);
    append(&div, table);
    append(parent, div);
}

/// `div.attribution` for quotes and verses; skipped when both values are absent or empty
fn push_attribution(parent: &Handle, block: &Block) {
    let attribution = block.attribution().filter(|s| !s.is_empty());
    let citation = block.citation().filter(|s| !s.is_empty());
    if attribution.is_none() && citation.is_none() {
        return;
    }

    let div = create_element("div", vec![("class", "attribution")]);
    if let Some(citation) = citation {
        append(&div, text_element("em", vec![], citation));
    }
    if let Some(attribution) = attribution {
        append(&div, create_text(&format!("\u{2014} {}", attribution)));
    }
    append(parent, div);
}

fn push_title(parent: &Handle, block: &Block) {
    if let Some(title) = &block.title {
        append(parent, text_element("div", vec![("class", "title")], title));
    }
}

/// Outer `div` of a block: base class plus any role, and the block id
fn wrapper(base: &str, block: &Block) -> Handle {
    let class = class_list(base, block);
    let mut attrs = vec![("class", class.as_str())];
    if let Some(id) = block.id() {
        attrs.push(("id", id));
    }
    create_element("div", attrs)
}

fn class_list(base: &str, block: &Block) -> String {
    match block.role() {
        Some(role) if !role.trim().is_empty() => format!("{} {}", base, role.trim()),
        _ => base.to_string(),
    }
}

fn append(parent: &Handle, child: Handle) {
    parent.children.borrow_mut().push(child);
}

fn text_element(tag: &str, attrs: Vec<(&str, &str)>, text: &str) -> Handle {
    let element = create_element(tag, attrs);
    append(&element, create_text(text));
    element
}

/// Create an HTML element with attributes
fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Serialize the children of the fragment container
fn serialize_dom(dom: &RcDom) -> Result<String, FormatError> {
    let mut output = Vec::new();

    let container = dom
        .document
        .children
        .borrow()
        .first()
        .ok_or_else(|| FormatError::SerializationError("Empty document".to_string()))?
        .clone();

    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for child in container.children.borrow().iter() {
        let serializable = SerializableHandle::from(child.clone());
        serialize(&mut output, &serializable, opts.clone()).map_err(|e| {
            FormatError::SerializationError(format!("HTML serialization failed: {}", e))
        })?;
        output.push(b'\n');
    }

    String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {}", e)))
}

fn wrap_in_document(body_html: &str, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="quire">
  <title>{}</title>
</head>
<body>
<div id="content">
{}</div>
</body>
</html>
"#,
        escape_text(title),
        body_html
    )
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
