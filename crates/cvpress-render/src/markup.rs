/// Inline decoration styles used by the section drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Bold,
    Italic,
    BoldItalic,
}

/// Decoration capability for one output variant.
///
/// The section drivers in [`crate::sections`] decide what appears and in
/// which order; a `Markup` implementation decides how each fragment is
/// dressed for its format. The plain variant carries the same content
/// with every decoration reduced to identity.
pub trait Markup {
    /// A heading at the given level.
    fn heading(&self, level: usize, text: &str) -> String;

    /// An inline span in the given style.
    fn span(&self, style: Span, text: &str) -> String;

    /// A link with display text.
    fn link(&self, label: &str, target: &str) -> String;

    /// A block-quoted line.
    fn quote(&self, line: &str) -> String;

    /// Suffix forcing a line break within a block.
    fn hard_break(&self) -> &'static str;
}

/// Markdown decorations.
pub struct MarkdownMarkup;

impl Markup for MarkdownMarkup {
    fn heading(&self, level: usize, text: &str) -> String {
        format!("{} {}", "#".repeat(level), text)
    }

    fn span(&self, style: Span, text: &str) -> String {
        match style {
            Span::Bold => format!("**{}**", text),
            Span::Italic => format!("_{}_", text),
            Span::BoldItalic => format!("_**{}**_", text),
        }
    }

    fn link(&self, label: &str, target: &str) -> String {
        format!("[{}]({})", label, target)
    }

    fn quote(&self, line: &str) -> String {
        format!("> {}", line)
    }

    fn hard_break(&self) -> &'static str {
        "  "
    }
}

/// Plain text: all decorations collapse to their content.
pub struct PlainMarkup;

impl Markup for PlainMarkup {
    fn heading(&self, _level: usize, text: &str) -> String {
        text.to_string()
    }

    fn span(&self, _style: Span, text: &str) -> String {
        text.to_string()
    }

    fn link(&self, label: &str, _target: &str) -> String {
        label.to_string()
    }

    fn quote(&self, line: &str) -> String {
        line.to_string()
    }

    fn hard_break(&self) -> &'static str {
        ""
    }
}
