use super::Element;
use crate::style::{HeaderFooterType, SectionStyle, StyleDefinition};

/// A run of pages sharing one page setup, with its own headers and footers.
#[derive(Debug, Clone, Default)]
pub struct Section {
    index: usize,
    settings: SectionStyle,
    pub(crate) elements: Vec<Element>,
    headers: Vec<Header>,
    footers: Vec<Footer>,
}

impl Section {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    /// One-based position in the document.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn settings(&self) -> &SectionStyle {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SectionStyle {
        &mut self.settings
    }

    pub fn set_settings(&mut self, settings: impl Into<StyleDefinition<SectionStyle>>) -> &mut Self {
        self.settings = settings.into().build();
        self
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    pub fn footers(&self) -> &[Footer] {
        &self.footers
    }

    pub fn add_header(&mut self) -> &mut Header {
        self.add_header_of(HeaderFooterType::Default)
    }

    pub fn add_header_of(&mut self, kind: HeaderFooterType) -> &mut Header {
        self.headers.push(Header::new(kind));
        let last = self.headers.len() - 1;
        &mut self.headers[last]
    }

    pub fn add_footer(&mut self) -> &mut Footer {
        self.add_footer_of(HeaderFooterType::Default)
    }

    pub fn add_footer_of(&mut self, kind: HeaderFooterType) -> &mut Footer {
        self.footers.push(Footer::new(kind));
        let last = self.footers.len() - 1;
        &mut self.footers[last]
    }

    /// Whether a first-page header or footer exists, which turns on a distinct title page.
    pub fn has_different_first_page(&self) -> bool {
        self.headers.iter().any(|h| h.kind == HeaderFooterType::First)
            || self.footers.iter().any(|f| f.kind == HeaderFooterType::First)
    }
}

/// Page header content.
#[derive(Debug, Clone, Default)]
pub struct Header {
    kind: HeaderFooterType,
    pub(crate) elements: Vec<Element>,
}

impl Header {
    pub fn new(kind: HeaderFooterType) -> Self {
        Self {
            kind,
            elements: Vec::new(),
        }
    }

    pub fn kind(&self) -> HeaderFooterType {
        self.kind
    }
}

/// Page footer content.
#[derive(Debug, Clone, Default)]
pub struct Footer {
    kind: HeaderFooterType,
    pub(crate) elements: Vec<Element>,
}

impl Footer {
    pub fn new(kind: HeaderFooterType) -> Self {
        Self {
            kind,
            elements: Vec::new(),
        }
    }

    pub fn kind(&self) -> HeaderFooterType {
        self.kind
    }
}
