use crate::style::{FontStyle, StyleArg, StyleDefinition, StyleRef, TocStyle};

/// A heading. Its depth selects the `Heading_{depth}` registry style.
#[derive(Debug, Clone)]
pub struct Title {
    text: String,
    depth: u32,
}

impl Title {
    pub fn new(text: impl Into<String>, depth: u32) -> Self {
        Self {
            text: text.into(),
            depth: depth.max(1),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

/// Table of contents built from the document's titles.
#[derive(Debug, Clone)]
pub struct Toc {
    font_style: Option<StyleRef<FontStyle>>,
    style: TocStyle,
    min_depth: u32,
    max_depth: u32,
}

impl Default for Toc {
    fn default() -> Self {
        Self {
            font_style: None,
            style: TocStyle::default(),
            min_depth: 1,
            max_depth: 9,
        }
    }
}

impl Toc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_style(&self) -> Option<&StyleRef<FontStyle>> {
        self.font_style.as_ref()
    }

    pub fn set_font_style(&mut self, style: impl Into<StyleArg<FontStyle>>) -> &mut Self {
        self.font_style = Some(style.into().into_ref());
        self
    }

    pub fn style(&self) -> &TocStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: impl Into<StyleDefinition<TocStyle>>) -> &mut Self {
        self.style = style.into().build();
        self
    }

    pub fn style_mut(&mut self) -> &mut TocStyle {
        &mut self.style
    }

    pub fn min_depth(&self) -> u32 {
        self.min_depth
    }

    pub fn set_min_depth(&mut self, depth: u32) -> &mut Self {
        self.min_depth = depth.max(1);
        self
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn set_max_depth(&mut self, depth: u32) -> &mut Self {
        self.max_depth = depth.max(1);
        self
    }

    /// Whether a title of `depth` is listed.
    #[inline]
    pub fn includes(&self, depth: u32) -> bool {
        (self.min_depth..=self.max_depth).contains(&depth)
    }
}
