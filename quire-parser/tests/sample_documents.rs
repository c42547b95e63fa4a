//! Whole-document tests over the curated samples

use quire_parser::quire::formats::to_treeviz_str;
use quire_parser::quire::testing::{assert_tree, Sample};
use quire_parser::BlockKind;

#[test]
fn test_blocks_sample() {
    let doc = Sample::load("blocks").parse().unwrap();

    assert_tree(&doc)
        .title("Block Gallery")
        .text_absent("hidden")
        .items(|items| {
            items.kinds(&[
                BlockKind::Quote,
                BlockKind::Verse,
                BlockKind::Listing,
                BlockKind::Literal,
                BlockKind::Literal,
                BlockKind::Sidebar,
                BlockKind::Example,
                BlockKind::Admonition,
                BlockKind::Admonition,
                BlockKind::Admonition,
                BlockKind::Paragraph,
            ]);
        })
        .item(0, |quote| {
            quote
                .attribution("A famous person")
                .citation("A famous book")
                .child(0, |p| {
                    p.assert_paragraph().text("Famous quote.");
                });
        })
        .item(1, |verse| {
            verse
                .attribution("Anon")
                .lines(&["Roses are red,", "....", "Violets are blue."]);
        })
        .item(2, |listing| {
            listing
                .language("perl")
                .lines(&["my $x = 1;", "// kept"]);
        })
        .item(3, |literal| {
            literal.lines(&["literal text", "  indented more"]);
        })
        .item(4, |literal| {
            literal.lines(&["indented literal", "paragraph"]);
        })
        .item(5, |sidebar| {
            sidebar.title("Sidebar title").child_count(2);
        })
        .item(7, |admonition| {
            admonition.style("WARNING");
        })
        .item(8, |admonition| {
            admonition.style("TIP").child(0, |p| {
                p.text("Inline tip.");
            });
        })
        .item(9, |admonition| {
            admonition.style("CAUTION");
        })
        .item(10, |p| {
            p.text("Last paragraph.");
        });
}

#[test]
fn test_blocks_sample_treeviz() {
    let doc = Sample::load("blocks").parse().unwrap();
    insta::assert_snapshot!(to_treeviz_str(&doc), @r###"
    ⧉ Block Gallery
    ├─ " 1 block
    │ └─ ¶ Famous quote.
    ├─ ℣ Roses are red,
    ├─ ƒ [perl] my $x = 1;
    ├─ 𝒱 literal text
    ├─ 𝒱 indented literal
    ├─ ➔ Sidebar title
    │ ├─ ¶ Sidebar paragraph one.
    │ └─ ¶ Sidebar paragraph two.
    ├─ Ψ 1 block
    │ └─ ¶ Example content.
    ├─ ⚠ WARNING
    │ └─ ¶ Fenced warning.
    ├─ ⚠ TIP
    │ └─ ¶ Inline tip.
    ├─ ⚠ CAUTION
    │ └─ ¶ Styled caution.
    └─ ¶ Last paragraph.
    "###);
}

#[test]
fn test_samples_serialize_to_json() {
    for sample in Sample::all() {
        let doc = sample.parse().unwrap();
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["kind"], "document", "{}", sample.name);
        assert!(json["children"].is_array(), "{}", sample.name);
    }
}
