use super::support::{count_class, render};

#[test]
fn test_no_duplicate_block_before_next_section() {
    let source = "Title\n=====\n\nPreamble.\n\n== First Section\n\nParagraph 1\n\nParagraph 2\n\n\n== Second Section\n\nLast words";
    let html = render(source);
    assert_eq!(html.matches("<p>Paragraph 2</p>").count(), 1);
    assert_eq!(count_class(&html, "sect1"), 2);
}

#[test]
fn test_header_and_preamble() {
    let html = render("= Guide\n\nIntro.\n\n== Usage\n\nUse it.");
    assert_eq!(
        html,
        "<div id=\"header\"><h1>Guide</h1></div>\n\
         <div id=\"preamble\"><div class=\"sectionbody\"><div class=\"paragraph\"><p>Intro.</p></div></div></div>\n\
         <div class=\"sect1\"><h2 id=\"_usage\">Usage</h2><div class=\"sectionbody\"><div class=\"paragraph\"><p>Use it.</p></div></div></div>\n"
    );
}

#[test]
fn test_no_preamble_without_sections() {
    let html = render("= Guide\n\nJust text.");
    assert!(!html.contains("preamble"));
    assert!(html.contains("<div class=\"paragraph\"><p>Just text.</p></div>"));
}

#[test]
fn test_nested_section_heading_levels() {
    let html = render("== One\n\n=== Two\n\n==== Three\n\nDeep.");
    assert_eq!(count_class(&html, "sect1"), 1);
    assert_eq!(count_class(&html, "sect2"), 1);
    assert_eq!(count_class(&html, "sect3"), 1);
    assert!(html.contains("<h3 id=\"_two\">Two</h3>"));
    assert!(html.contains("<h4 id=\"_three\">Three</h4>"));
}

#[test]
fn test_duplicate_titles_get_unique_ids() {
    let html = render("== Intro\n\nA.\n\n== Intro\n\nB.");
    assert!(html.contains("id=\"_intro\""));
    assert!(html.contains("id=\"_intro_2\""));
}

#[test]
fn test_explicit_section_id() {
    let html = render("[[start]]\n== Getting Started\n\nGo.");
    assert!(html.contains("<h2 id=\"start\">Getting Started</h2>"));
}
