use super::support::{count_class, from_class, render};

#[test]
fn test_paragraphs() {
    let html = render("Plain text for the win.\n\nYes, plainly.");
    assert_eq!(html.matches("<p>").count(), 2);
    assert_eq!(count_class(&html, "paragraph"), 2);
}

#[test]
fn test_paragraph_with_title() {
    let html = render(".Titled\nParagraph.\n\nWinning");
    assert!(html.starts_with(
        "<div class=\"paragraph\"><div class=\"title\">Titled</div><p>Paragraph.</p></div>"
    ));
    assert_eq!(html.matches("<p>").count(), 2);
}

#[test]
fn test_multi_line_paragraph_keeps_line_breaks() {
    let html = render("one\ntwo");
    assert!(html.contains("<p>one\ntwo</p>"));
}

#[test]
fn test_single_line_literal_paragraphs() {
    let html = render("    LITERALS\n\n    ARE LITERALLY\n\n    AWESOMMMME.");
    assert_eq!(html.matches("<pre><tt>").count(), 3);
    assert!(html.contains("<pre><tt>LITERALS</tt></pre>"));
}

#[test]
fn test_multi_line_literal_paragraph_is_trimmed() {
    let source = "Install instructions:\n\n yum install ruby rubygems\n gem install bundler\n\nYou're good to go!\n";
    let html = render(source);
    assert_eq!(count_class(&html, "literalblock"), 1);
    assert!(html.contains("<tt>yum install ruby rubygems\ngem install bundler</tt>"));
}

#[test]
fn test_listing_block() {
    let html = render("----\nblah blah blah\n----");
    assert_eq!(
        html,
        "<div class=\"listingblock\"><div class=\"content\"><div class=\"highlight\"><pre><code>blah blah blah</code></pre></div></div></div>\n"
    );
}

#[test]
fn test_source_paragraph_sets_language() {
    let html = render("[source, perl]\ndie 'zomg perl sucks';");
    assert_eq!(count_class(&html, "highlight"), 1);
    assert!(html.contains("<code class=\"language-perl\" data-lang=\"perl\">die 'zomg perl sucks';</code>"));
}

#[test]
fn test_listing_content_is_escaped() {
    let html = render("----\n<b>&</b>\n----");
    assert!(html.contains("<code>&lt;b&gt;&amp;&lt;/b&gt;</code>"));
}

#[test]
fn test_sidebar_block_under_section() {
    let html = render("== Section\n\n.Sidebar\n****\nContent goes here\n****\n");
    let sidebar = from_class(&html, "sidebarblock");
    assert!(sidebar.starts_with(
        "<div class=\"sidebarblock\"><div class=\"content\"><div class=\"title\">Sidebar</div>"
    ));
    assert_eq!(sidebar.matches("<p>").count(), 1);
}

#[test]
fn test_example_block() {
    let html = render(".Demo\n====\nShown.\n====");
    assert_eq!(
        html,
        "<div class=\"exampleblock\"><div class=\"title\">Demo</div><div class=\"content\"><div class=\"paragraph\"><p>Shown.</p></div></div></div>\n"
    );
}

#[test]
fn test_role_is_appended_to_class_list() {
    let html = render("[literal.terminal]\n$ ls");
    assert!(html.contains("<div class=\"literalblock terminal\">"));
    assert_eq!(count_class(&html, "literalblock"), 1);
}
