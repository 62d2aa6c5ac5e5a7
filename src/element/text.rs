use super::Element;
use crate::style::{FontStyle, ParagraphStyle, StyleRef};

/// A paragraph holding a single run of text.
#[derive(Debug, Clone, Default)]
pub struct Text {
    text: String,
    pub(crate) font_style: Option<StyleRef<FontStyle>>,
    pub(crate) paragraph_style: Option<StyleRef<ParagraphStyle>>,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }
}

/// An empty paragraph.
#[derive(Debug, Clone, Default)]
pub struct TextBreak {
    pub(crate) font_style: Option<StyleRef<FontStyle>>,
    pub(crate) paragraph_style: Option<StyleRef<ParagraphStyle>>,
}

impl TextBreak {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when either style is set and the paragraph needs a properties node.
    pub fn has_style(&self) -> bool {
        self.font_style.is_some() || self.paragraph_style.is_some()
    }
}

/// A paragraph whose inline children share one set of paragraph properties.
#[derive(Debug, Clone, Default)]
pub struct TextRun {
    pub(crate) paragraph_style: Option<StyleRef<ParagraphStyle>>,
    pub(crate) elements: Vec<Element>,
}

impl TextRun {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Container;
    use crate::style_map;

    #[test]
    fn test_text_new() {
        let mut text = Text::new("hello");
        assert_eq!(text.text(), "hello");
        text.set_text("world");
        assert_eq!(text.text(), "world");
        assert!(text.font_style().is_none());
    }

    #[test]
    fn test_text_break_style() {
        let mut br = TextBreak::new();
        assert!(!br.has_style());
        br.set_font_style(style_map! { "bold" => true });
        assert!(br.has_style());
    }

    #[test]
    fn test_text_run_children() {
        let mut run = TextRun::new();
        run.add_text("a");
        run.add_text_break();
        run.add_checkbox("check", "label");
        assert_eq!(run.elements().len(), 3);
        run.set_paragraph_style("Quote");
        assert_eq!(run.paragraph_style().and_then(|s| s.name()), Some("Quote"));
    }
}
