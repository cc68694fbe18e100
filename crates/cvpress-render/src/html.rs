use pulldown_cmark::{Parser, html};

use crate::error::{Error, Result};

/// Converts CommonMark markdown to an HTML fragment.
///
/// Trailing line endings are trimmed so the fragment embeds cleanly
/// inside a page template. Empty input is an error.
pub fn to_html(markdown: &str) -> Result<String> {
    if markdown.is_empty() {
        return Err(Error::EmptyMarkdown);
    }

    let parser = Parser::new(markdown);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    let trimmed = html_output.trim_end_matches(['\n', '\r']).len();
    html_output.truncate(trimmed);
    Ok(html_output)
}
