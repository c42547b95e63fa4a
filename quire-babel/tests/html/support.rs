//! Helpers shared by the HTML tests

use once_cell::sync::Lazy;
use quire_babel::{Format, HtmlFormat};
use regex::Regex;

static CLASS_ATTR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"class="([^"]*)""#).unwrap());

/// Render `source` as an HTML fragment
pub fn render(source: &str) -> String {
    HtmlFormat::default().render(source).unwrap()
}

/// Number of elements carrying `class` in their class list
pub fn count_class(html: &str, class: &str) -> usize {
    CLASS_ATTR
        .captures_iter(html)
        .filter(|caps| caps[1].split_whitespace().any(|c| c == class))
        .count()
}

/// The outer HTML of the first element with `class`, up to the end of the fragment
pub fn from_class<'a>(html: &'a str, class: &str) -> &'a str {
    let needle = format!("class=\"{}", class);
    let start = html
        .find(&needle)
        .unwrap_or_else(|| panic!("no element with class {:?} in {}", class, html));
    let open = html[..start].rfind('<').unwrap();
    &html[open..]
}
