use crate::style::{FontStyle, ParagraphStyle, StyleRef};

/// An external hyperlink.
#[derive(Debug, Clone, Default)]
pub struct Link {
    source: String,
    text: Option<String>,
    pub(crate) font_style: Option<StyleRef<FontStyle>>,
    pub(crate) paragraph_style: Option<StyleRef<ParagraphStyle>>,
}

impl Link {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Display text; the link target when none was given.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or(&self.source)
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }
}
