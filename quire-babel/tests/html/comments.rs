use super::support::{count_class, render};

#[test]
fn test_line_comment_leaves_no_trace() {
    let html = render("first paragraph\n\n//comment\n\nsecond paragraph");
    assert_eq!(count_class(&html, "paragraph"), 2);
    assert!(!html.contains("comment"));
    assert!(!html.contains("<!--"));
}

#[test]
fn test_block_comment_leaves_no_trace() {
    let html = render("visible\n\n////\nhidden\n\n== hidden heading\n////\n\nalso visible");
    assert!(!html.contains("hidden"));
    assert_eq!(count_class(&html, "sect1"), 0);
    assert_eq!(count_class(&html, "paragraph"), 2);
}

#[test]
fn test_comments_inside_listing_are_kept() {
    let html = render("----\ncode\n// kept\n----");
    assert!(html.contains("<code>code\n// kept</code>"));
}
