//! Attribute line parsing
//!
//!     An attribute line is bracketed metadata on its own line, attached to the block that
//!     follows it:
//!
//!         [quote, A famous person, A famous book]
//!         [source, rust]
//!         [NOTE]
//!         [verse, attribution="Anon, probably"]
//!         [[anchor-id]]
//!
//!     Tokens are separated by commas outside double quotes and trimmed. Then:
//!
//!         - The first token, unless quoted or `key=value`, is the style. It may carry `#id`
//!           and `.role` shorthands (`[quote#intro.lead]`).
//!         - `key=value` tokens are stored under `key`.
//!         - Every other token is positional and stored as `attr_1`, `attr_2`, ... in order.
//!           A quoted first token is positional too.
//!
//!     A line starting with `[` that is not closed, or has an unbalanced quote, is malformed.
//!     Malformed lines are never fatal: the classifier reads them as content.

use crate::quire::ast::attributes::{self, positional_key, AttributeSet};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static NAMED_KEY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][\w-]*$").expect("attribute name pattern is valid"));

/// Why an attribute line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedAttributes {
    #[error("attribute line does not start with '['")]
    MissingOpenBracket,
    #[error("attribute line is missing its closing ']'")]
    Unterminated,
    #[error("attribute value has an unterminated quote")]
    UnterminatedQuote,
    #[error("anchor has no id")]
    EmptyAnchor,
}

/// A comma separated token, before interpretation
#[derive(Debug, PartialEq)]
struct Token {
    text: String,
    quoted: bool,
}

/// Parse a complete attribute line, brackets included.
pub fn parse_attributes(line: &str) -> Result<AttributeSet, MalformedAttributes> {
    let line = line.trim_end();
    let inner = line
        .strip_prefix('[')
        .ok_or(MalformedAttributes::MissingOpenBracket)?
        .strip_suffix(']')
        .ok_or(MalformedAttributes::Unterminated)?;

    if let Some(anchor) = inner.strip_prefix('[') {
        return parse_anchor(anchor);
    }

    let mut attrs = AttributeSet::new();
    let mut positional = 0;
    for (index, token) in split_tokens(inner)?.into_iter().enumerate() {
        if !token.quoted {
            if let Some((key, value)) = split_named(&token.text) {
                attrs.insert(key, unquote(value));
                continue;
            }
            if index == 0 {
                apply_style(&mut attrs, &token.text);
                continue;
            }
        }
        positional += 1;
        attrs.insert(positional_key(positional), token.text);
    }
    Ok(attrs)
}

/// `[[id]]` or `[[id, reftext]]`; `anchor` is the text after the second `[`
fn parse_anchor(anchor: &str) -> Result<AttributeSet, MalformedAttributes> {
    let body = anchor
        .strip_suffix(']')
        .ok_or(MalformedAttributes::Unterminated)?;
    let mut parts = body.splitn(2, ',');
    let id = parts.next().unwrap_or_default().trim();
    if id.is_empty() {
        return Err(MalformedAttributes::EmptyAnchor);
    }
    let mut attrs = AttributeSet::new();
    attrs.insert(attributes::ID, id);
    if let Some(reftext) = parts.next().map(str::trim).filter(|s| !s.is_empty()) {
        attrs.insert("reftext", unquote(reftext));
    }
    Ok(attrs)
}

fn split_tokens(inner: &str) -> Result<Vec<Token>, MalformedAttributes> {
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escaped = false;

    for c in inner.chars() {
        match c {
            _ if escaped => {
                current.push(c);
                escaped = false;
            }
            '\\' if in_quotes => escaped = true,
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            ',' if !in_quotes => tokens.push(finish_token(&mut current)),
            _ => current.push(c),
        }
    }
    if in_quotes {
        return Err(MalformedAttributes::UnterminatedQuote);
    }
    tokens.push(finish_token(&mut current));
    Ok(tokens)
}

fn finish_token(current: &mut String) -> Token {
    let raw = std::mem::take(current);
    let trimmed = raw.trim();
    let quoted = is_quoted(trimmed);
    Token {
        text: unquote(trimmed),
        quoted,
    }
}

fn is_quoted(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('"') && text.ends_with('"')
}

fn unquote(text: &str) -> String {
    let text = text.trim();
    if is_quoted(text) {
        text[1..text.len() - 1].to_string()
    } else {
        text.to_string()
    }
}

fn split_named(token: &str) -> Option<(&str, &str)> {
    let (key, value) = token.split_once('=')?;
    let key = key.trim();
    NAMED_KEY_REGEX.is_match(key).then_some((key, value))
}

/// Style token with optional `#id` and `.role` shorthands
fn apply_style(attrs: &mut AttributeSet, token: &str) {
    let split = token.find(['#', '.']).unwrap_or(token.len());
    let (style, mut rest) = token.split_at(split);
    if !style.is_empty() {
        attrs.insert(attributes::STYLE, style);
    }

    let mut roles = Vec::new();
    while let Some(marker) = rest.chars().next() {
        let body = &rest[1..];
        let end = body.find(['#', '.']).unwrap_or(body.len());
        let value = &body[..end];
        if !value.is_empty() {
            match marker {
                '#' => attrs.insert(attributes::ID, value),
                _ => roles.push(value),
            }
        }
        rest = &body[end..];
    }
    if !roles.is_empty() {
        attrs.insert(attributes::ROLE, roles.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> AttributeSet {
        parse_attributes(line).unwrap_or_else(|e| panic!("{} should parse: {}", line, e))
    }

    #[test]
    fn test_style_and_positionals() {
        let attrs = parse("[quote, A famous person, A famous book]");
        assert_eq!(attrs.style(), Some("quote"));
        assert_eq!(attrs.positional(1), Some("A famous person"));
        assert_eq!(attrs.positional(2), Some("A famous book"));
        assert_eq!(attrs.len(), 3);
    }

    #[test]
    fn test_source_language() {
        let attrs = parse("[source, perl]");
        assert_eq!(attrs.style(), Some("source"));
        assert_eq!(attrs.positional(1), Some("perl"));
    }

    #[test]
    fn test_quoted_values_keep_commas() {
        let attrs = parse(r#"[quote, "Doe, Jane", "Book \"One\""]"#);
        assert_eq!(attrs.positional(1), Some("Doe, Jane"));
        assert_eq!(attrs.positional(2), Some(r#"Book "One""#));
    }

    #[test]
    fn test_quoted_first_token_is_positional() {
        let attrs = parse(r#"["Not a style", second]"#);
        assert_eq!(attrs.style(), None);
        assert_eq!(attrs.positional(1), Some("Not a style"));
        assert_eq!(attrs.positional(2), Some("second"));
    }

    #[test]
    fn test_named_attributes() {
        let attrs = parse(r#"[verse, attribution="Anon, probably", citetitle=Poems]"#);
        assert_eq!(attrs.style(), Some("verse"));
        assert_eq!(attrs.get("attribution"), Some("Anon, probably"));
        assert_eq!(attrs.get("citetitle"), Some("Poems"));
        assert_eq!(attrs.positional(1), None);
    }

    #[test]
    fn test_style_shorthands() {
        let attrs = parse("[quote#intro.lead.wide]");
        assert_eq!(attrs.style(), Some("quote"));
        assert_eq!(attrs.get("id"), Some("intro"));
        assert_eq!(attrs.get("role"), Some("lead wide"));

        let attrs = parse("[.lead]");
        assert_eq!(attrs.style(), None);
        assert_eq!(attrs.get("role"), Some("lead"));
    }

    #[test]
    fn test_empty_style_slot() {
        let attrs = parse("[, Someone]");
        assert_eq!(attrs.style(), None);
        assert_eq!(attrs.positional(1), Some("Someone"));
        assert!(parse("[]").is_empty());
    }

    #[test]
    fn test_anchor() {
        let attrs = parse("[[install]]");
        assert_eq!(attrs.get("id"), Some("install"));
        let attrs = parse("[[install, Installing]]");
        assert_eq!(attrs.get("reftext"), Some("Installing"));
        assert_eq!(
            parse_attributes("[[ ]]"),
            Err(MalformedAttributes::EmptyAnchor)
        );
    }

    #[test]
    fn test_malformed_lines() {
        assert_eq!(
            parse_attributes("[quote, Someone"),
            Err(MalformedAttributes::Unterminated)
        );
        assert_eq!(
            parse_attributes(r#"[quote, "Someone]"#),
            Err(MalformedAttributes::UnterminatedQuote)
        );
        assert_eq!(
            parse_attributes("quote]"),
            Err(MalformedAttributes::MissingOpenBracket)
        );
    }
}
