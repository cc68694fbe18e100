/// Append-only buffer for one rendered document.
///
/// `append` and `append_line` ignore empty input so callers can pass
/// optional fields straight through; `blank_line` always emits a break.
/// One builder is constructed per render call, so rendering the same
/// record twice yields byte-identical output.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    buf: String,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends text without a line break. Empty input is ignored.
    pub fn append(&mut self, text: &str) {
        if !text.is_empty() {
            self.buf.push_str(text);
        }
    }

    /// Appends a line followed by a break. Empty input is ignored.
    pub fn append_line(&mut self, line: &str) {
        if !line.is_empty() {
            self.buf.push_str(line);
            self.buf.push('\n');
        }
    }

    /// Appends a line break unconditionally.
    pub fn blank_line(&mut self) {
        self.buf.push('\n');
    }

    /// Discards everything built so far.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Consumes the builder and returns the finished document.
    pub fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_empty_input() {
        let mut doc = DocumentBuilder::new();
        doc.append("");
        doc.append_line("");
        assert_eq!(doc.finish(), "");
    }

    #[test]
    fn blank_line_always_emits() {
        let mut doc = DocumentBuilder::new();
        doc.append_line("first");
        doc.blank_line();
        doc.append_line("second");
        assert_eq!(doc.finish(), "first\n\nsecond\n");
    }

    #[test]
    fn append_does_not_break_lines() {
        let mut doc = DocumentBuilder::new();
        doc.append("- Rust");
        doc.append(" – serde");
        doc.blank_line();
        assert_eq!(doc.finish(), "- Rust – serde\n");
    }

    #[test]
    fn clear_resets_the_document() {
        let mut doc = DocumentBuilder::new();
        doc.append_line("stale");
        doc.clear();
        doc.append_line("fresh");
        assert_eq!(doc.finish(), "fresh\n");
    }
}
