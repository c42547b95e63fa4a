use super::support::{count_class, render};
use rstest::rstest;

#[derive(Debug, Clone, Copy)]
enum Trigger {
    Inline,
    Styled,
    Fenced,
}

fn source(label: &str, trigger: Trigger) -> String {
    match trigger {
        Trigger::Inline => format!("{}: This is important, fool!", label),
        Trigger::Styled => format!("[{}]\nThis is a winner.", label),
        Trigger::Fenced => format!("[{}]\n====\nThis is a winner.\n====", label),
    }
}

#[rstest]
fn test_admonition_renders_one_block(
    #[values("NOTE", "TIP", "IMPORTANT", "WARNING", "CAUTION")] label: &str,
    #[values(Trigger::Inline, Trigger::Styled, Trigger::Fenced)] trigger: Trigger,
) {
    let html = render(&source(label, trigger));

    assert_eq!(count_class(&html, "admonitionblock"), 1, "{}", html);
    assert!(
        html.contains(&format!(
            "<td class=\"icon\"><div class=\"title\">{}</div></td>",
            label
        )),
        "{}",
        html
    );
    assert_eq!(html.matches("<p>").count(), 1, "{}", html);
}

#[test]
fn test_inline_admonition_markup() {
    let html = render("NOTE: Keep calm.");
    assert_eq!(
        html,
        "<div class=\"admonitionblock\"><table><tr><td class=\"icon\"><div class=\"title\">NOTE</div></td><td class=\"content\"><div class=\"paragraph\"><p>Keep calm.</p></div></td></tr></table></div>\n"
    );
}

#[test]
fn test_admonition_title_goes_in_content_cell() {
    let html = render(".Heads up\n[WARNING]\n====\nHot.\n====");
    assert!(html.contains("<td class=\"content\"><div class=\"title\">Heads up</div>"));
}
