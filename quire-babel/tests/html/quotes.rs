use super::support::{count_class, from_class, render};

#[test]
fn test_quote_block() {
    let html = render("____\nFamous quote.\n____");
    assert_eq!(count_class(&html, "quoteblock"), 1);
    assert!(from_class(&html, "quoteblock").contains("<p>Famous quote.</p>"));
    assert_eq!(count_class(&html, "attribution"), 0);
}

#[test]
fn test_quote_block_with_attribution() {
    let html = render("[quote, A famous person, A famous book]\n____\nFamous quote.\n____");
    assert_eq!(
        html,
        "<div class=\"quoteblock\"><div class=\"content\"><div class=\"paragraph\"><p>Famous quote.</p></div></div><div class=\"attribution\"><em>A famous book</em>\u{2014} A famous person</div></div>\n"
    );
}

#[test]
fn test_quote_block_with_section_body() {
    let html = render("____\nFamous quote.\n\nNOTE: That was inspiring.\n____");
    let quote = from_class(&html, "quoteblock");
    assert_eq!(count_class(quote, "admonitionblock"), 1);
}

#[test]
fn test_single_line_quote_paragraph_has_no_paragraph() {
    let html = render("[quote]\nFamous quote.");
    assert_eq!(
        html,
        "<div class=\"quoteblock\"><div class=\"content\">Famous quote.</div></div>\n"
    );
}

#[test]
fn test_empty_attribution_is_skipped() {
    let html = render("[quote, , A famous book]\nFamous quote.");
    assert!(html.contains("<div class=\"attribution\"><em>A famous book</em></div>"));
}

#[test]
fn test_verse_paragraph() {
    let html = render("[verse]\nFamous verse.");
    assert_eq!(
        html,
        "<div class=\"verseblock\"><pre class=\"content\">Famous verse.</pre></div>\n"
    );
}

#[test]
fn test_multi_line_verse_block() {
    let html = render("[verse, Anon]\n____\nFamous verse.\n\nStanza two.\n____");
    let verse = from_class(&html, "verseblock");
    assert!(verse.contains("<pre class=\"content\">Famous verse.\n\nStanza two.</pre>"));
    assert!(verse.contains("<div class=\"attribution\">\u{2014} Anon</div>"));
    assert!(!verse.contains("<p>"));
}

#[test]
fn test_verse_block_does_not_contain_block_elements() {
    let html = render("[verse]\n____\nFamous verse.\n\n....\nnot a literal\n....\n____");
    assert_eq!(count_class(&html, "verseblock"), 1);
    assert_eq!(count_class(&html, "literalblock"), 0);
    assert!(!html.contains("<p>"));
}
