//! Tests for sidebar and example blocks, and for nesting in general

use quire_parser::quire::testing::assert_tree;
use quire_parser::{parse_document, parse_with_options, BlockKind, ParseError, ParseOptions};

#[test]
fn test_sidebar_under_section_keeps_its_paragraphs() {
    let source = "== Section\n\n.Aside\n****\nOne.\n\nTwo.\n\nThree.\n****\n\nAfter.";
    let doc = parse_document(source).unwrap();

    assert_tree(&doc).item_count(1).item(0, |section| {
        section
            .assert_section()
            .child_count(2)
            .child(0, |sidebar| {
                sidebar
                    .assert_sidebar()
                    .title("Aside")
                    .descendant_count(BlockKind::Paragraph, 3)
                    .children(|children| {
                        children.count(3).all(BlockKind::Paragraph);
                    });
            })
            .child(1, |p| {
                p.assert_paragraph().text("After.");
            });
    });
}

#[test]
fn test_example_block() {
    let doc = parse_document(".An example\n====\nExample content.\n====").unwrap();

    assert_tree(&doc).item(0, |example| {
        example
            .assert_example()
            .title("An example")
            .child_count(1)
            .child(0, |p| {
                p.assert_paragraph().text("Example content.");
            });
    });
}

#[test]
fn test_sidebar_and_example_paragraph_styles() {
    let doc = parse_document("[sidebar]\nA side note.\n\n[example]\nAn example.").unwrap();

    assert_tree(&doc)
        .item(0, |sidebar| {
            sidebar.assert_sidebar().child_count(1).child(0, |p| {
                p.assert_paragraph().text("A side note.");
            });
        })
        .item(1, |example| {
            example.assert_example().child_count(1).child(0, |p| {
                p.assert_paragraph().text("An example.");
            });
        });
}

#[test]
fn test_same_kind_nesting_with_longer_fence() {
    let doc = parse_document("*****\nouter\n\n****\ninner\n****\n*****").unwrap();

    assert_tree(&doc).item_count(1).item(0, |outer| {
        outer
            .assert_sidebar()
            .child_count(2)
            .child(1, |inner| {
                inner.assert_sidebar().child(0, |p| {
                    p.text("inner");
                });
            });
    });
}

#[test]
fn test_deep_mixed_nesting() {
    let source = "\
****
[quote, Someone]
____
[WARNING]
====
Deep.
====
____
****";
    let doc = parse_document(source).unwrap();

    assert_tree(&doc).item(0, |sidebar| {
        sidebar.assert_sidebar().child(0, |quote| {
            quote
                .assert_quote()
                .attribution("Someone")
                .child(0, |admonition| {
                    admonition.assert_admonition().child(0, |p| {
                        p.assert_paragraph().text("Deep.");
                    });
                });
        });
    });
}

#[test]
fn test_nesting_limit() {
    let mut source = String::new();
    for depth in 0..5 {
        source.push_str(&"_".repeat(4 + depth));
        source.push('\n');
    }
    source.push_str("deepest\n");
    for depth in (0..5).rev() {
        source.push_str(&"_".repeat(4 + depth));
        source.push('\n');
    }

    let doc = parse_document(&source).unwrap();
    assert_tree(&doc).count_of(BlockKind::Quote, 5);

    let options = ParseOptions {
        max_nesting_depth: 4,
        ..ParseOptions::default()
    };
    let err = parse_with_options(&source, &options).unwrap_err();
    assert_eq!(err, ParseError::NestingTooDeep { limit: 4, line: 5 });
    assert!(err.report(&source).contains(">>"));
}
