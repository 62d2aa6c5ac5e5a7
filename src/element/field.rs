use memchr::memchr;

use crate::style::{FontStyle, ParagraphStyle, StyleRef};

/// A legacy form checkbox followed by its label.
#[derive(Debug, Clone, Default)]
pub struct CheckBox {
    name: String,
    text: String,
    checked: bool,
    pub(crate) font_style: Option<StyleRef<FontStyle>>,
    pub(crate) paragraph_style: Option<StyleRef<ParagraphStyle>>,
}

impl CheckBox {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) -> &mut Self {
        self.checked = checked;
        self
    }
}

/// Text with embedded `{FIELD}` instructions kept as live fields.
#[derive(Debug, Clone, Default)]
pub struct PreserveText {
    text: String,
    pub(crate) font_style: Option<StyleRef<FontStyle>>,
    pub(crate) paragraph_style: Option<StyleRef<ParagraphStyle>>,
}

/// One piece of a [`PreserveText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Field(&'a str),
}

impl PreserveText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Split into literal text and field instructions. An unclosed brace is literal text.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut out = Vec::new();
        let bytes = self.text.as_bytes();
        let mut pos = 0;
        while pos < bytes.len() {
            let Some(open) = memchr(b'{', &bytes[pos..]).map(|i| pos + i) else {
                break;
            };
            let Some(close) = memchr(b'}', &bytes[open..]).map(|i| open + i) else {
                break;
            };
            if open > pos {
                out.push(Segment::Text(&self.text[pos..open]));
            }
            let instr = self.text[open + 1..close].trim();
            if !instr.is_empty() {
                out.push(Segment::Field(instr));
            }
            pos = close + 1;
        }
        if pos < bytes.len() {
            out.push(Segment::Text(&self.text[pos..]));
        }
        out
    }
}
