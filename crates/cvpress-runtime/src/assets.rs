//! Embedded page template and stylesheet for the HTML artifact.

/// HTML page shell with `{{title}}`, `{{style}}`, and `{{body}}` slots.
pub const PAGE_TEMPLATE: &str = include_str!("../assets/template.html");

/// Print stylesheet applied to every generated page.
pub const STYLESHEET: &str = include_str!("../assets/resume.css");

/// File name the stylesheet is written under when linked externally.
pub const STYLESHEET_FILE: &str = "resume.css";

/// How the stylesheet lands in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleMode {
    /// Embed the stylesheet in a `<style>` element.
    Inline,
    /// Reference `resume.css` next to the page with a `<link>` element.
    External,
}

/// Builds the head element that carries the stylesheet.
pub fn style_element(mode: StyleMode) -> String {
    match mode {
        StyleMode::Inline => format!(
            "<style>\n{}\n</style>",
            STYLESHEET.trim_end_matches(['\n', '\r'])
        ),
        StyleMode::External => {
            format!("<link rel=\"stylesheet\" href=\"{}\" />", STYLESHEET_FILE)
        }
    }
}

/// Fills the page template slots in order: title, style, body.
///
/// The template is consumed in a single left-to-right pass, so slot
/// markers appearing inside substituted values are kept literally.
pub fn wrap_html(title: &str, style: &str, body: &str) -> String {
    let mut page =
        String::with_capacity(PAGE_TEMPLATE.len() + title.len() + style.len() + body.len());
    let mut rest = PAGE_TEMPLATE;
    for (slot, value) in [("{{title}}", title), ("{{style}}", style), ("{{body}}", body)] {
        if let Some((head, tail)) = rest.split_once(slot) {
            page.push_str(head);
            page.push_str(value);
            rest = tail;
        }
    }
    page.push_str(rest);
    page
}
