//! Font (run) style.
use super::enums::{FontHint, FontKind, Highlight, Underline};
use super::paragraph::ParagraphStyle;
use super::value::{
    StyleValue, bool_val, color_val, opt_numeric_val, opt_xml_enum_val, string_val, xml_enum_val,
};
use super::{StyleDefinition, StyleMeta, StyleProperties, setter_table};

/// Character formatting. Size is in points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FontStyle {
    pub(crate) meta: StyleMeta,
    kind: FontKind,
    name: Option<String>,
    hint: Option<FontHint>,
    size: Option<f64>,
    color: Option<String>,
    bold: bool,
    italic: bool,
    underline: Option<Underline>,
    super_script: bool,
    sub_script: bool,
    strikethrough: bool,
    double_strikethrough: bool,
    small_caps: bool,
    all_caps: bool,
    fg_color: Option<Highlight>,
    bg_color: Option<String>,
    paragraph: Option<ParagraphStyle>,
}

/// Set a toggle and clear its partner when the toggle turns on.
fn exclusive(value: &StyleValue, this: &mut bool, partner: &mut bool) {
    *this = bool_val(value, *this);
    if *this {
        *partner = false;
    }
}

impl FontStyle {
    pub fn new(kind: FontKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// A font style that carries paragraph formatting along.
    pub fn with_paragraph(kind: FontKind, paragraph: impl Into<StyleDefinition<ParagraphStyle>>) -> Self {
        let mut style = Self::new(kind);
        style.paragraph = Some(paragraph.into().build());
        style
    }

    pub fn kind(&self) -> FontKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn hint(&self) -> Option<FontHint> {
        self.hint
    }

    pub fn size(&self) -> Option<f64> {
        self.size
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn bold(&self) -> bool {
        self.bold
    }

    pub fn italic(&self) -> bool {
        self.italic
    }

    pub fn underline(&self) -> Option<Underline> {
        self.underline
    }

    pub fn super_script(&self) -> bool {
        self.super_script
    }

    pub fn sub_script(&self) -> bool {
        self.sub_script
    }

    pub fn strikethrough(&self) -> bool {
        self.strikethrough
    }

    pub fn double_strikethrough(&self) -> bool {
        self.double_strikethrough
    }

    pub fn small_caps(&self) -> bool {
        self.small_caps
    }

    pub fn all_caps(&self) -> bool {
        self.all_caps
    }

    /// Highlight color.
    pub fn fg_color(&self) -> Option<Highlight> {
        self.fg_color
    }

    /// Shading fill.
    pub fn bg_color(&self) -> Option<&str> {
        self.bg_color.as_deref()
    }

    pub fn paragraph(&self) -> Option<&ParagraphStyle> {
        self.paragraph.as_ref()
    }

    pub fn paragraph_mut(&mut self) -> &mut ParagraphStyle {
        self.paragraph.get_or_insert_with(ParagraphStyle::default)
    }

    /// Whether the run properties would be empty.
    pub fn is_plain(&self) -> bool {
        self.name.is_none()
            && self.hint.is_none()
            && self.size.is_none()
            && self.color.is_none()
            && !self.bold
            && !self.italic
            && self.underline.is_none()
            && !self.super_script
            && !self.sub_script
            && !self.strikethrough
            && !self.double_strikethrough
            && !self.small_caps
            && !self.all_caps
            && self.fg_color.is_none()
            && self.bg_color.is_none()
    }

    pub fn set_kind(&mut self, kind: FontKind) -> &mut Self {
        self.kind = kind;
        self
    }

    pub fn set_type(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.kind = xml_enum_val(&value.into(), self.kind);
        self
    }

    pub fn set_name(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.name = string_val(&value.into(), self.name.take());
        self
    }

    pub fn set_hint(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.hint = opt_xml_enum_val(&value.into(), self.hint);
        self
    }

    pub fn set_size(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        match opt_numeric_val(&value.into(), self.size) {
            Some(size) if size <= 0.0 => {},
            size => self.size = size,
        }
        self
    }

    pub fn set_color(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.color = color_val(&value.into(), self.color.take());
        self
    }

    pub fn set_bold(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.bold = bool_val(&value.into(), self.bold);
        self
    }

    pub fn set_italic(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.italic = bool_val(&value.into(), self.italic);
        self
    }

    pub fn set_underline(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.underline = opt_xml_enum_val(&value.into(), self.underline);
        self
    }

    pub fn set_super_script(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        exclusive(&value.into(), &mut self.super_script, &mut self.sub_script);
        self
    }

    pub fn set_sub_script(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        exclusive(&value.into(), &mut self.sub_script, &mut self.super_script);
        self
    }

    pub fn set_strikethrough(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        exclusive(&value.into(), &mut self.strikethrough, &mut self.double_strikethrough);
        self
    }

    pub fn set_double_strikethrough(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        exclusive(&value.into(), &mut self.double_strikethrough, &mut self.strikethrough);
        self
    }

    pub fn set_small_caps(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        exclusive(&value.into(), &mut self.small_caps, &mut self.all_caps);
        self
    }

    pub fn set_all_caps(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        exclusive(&value.into(), &mut self.all_caps, &mut self.small_caps);
        self
    }

    pub fn set_fg_color(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.fg_color = opt_xml_enum_val(&value.into(), self.fg_color);
        self
    }

    pub fn set_bg_color(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.bg_color = color_val(&value.into(), self.bg_color.take());
        self
    }

    /// Line height of the owned paragraph style.
    pub fn set_line_height(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.paragraph_mut().set_line_height(value);
        self
    }

    /// Paragraph formatting from a map; anything else is ignored.
    pub fn set_paragraph(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        if let StyleValue::Map(map) = value.into() {
            self.paragraph_mut().set_style_by_array(&map);
        }
        self
    }
}

setter_table!(FONT_SETTERS: FontStyle {
    "index" => set_index,
    "type" => set_type,
    "name" => set_name,
    "hint" => set_hint,
    "size" => set_size,
    "color" => set_color,
    "bold" => set_bold,
    "italic" => set_italic,
    "underline" => set_underline,
    "superScript" => set_super_script,
    "subScript" => set_sub_script,
    "strikethrough" => set_strikethrough,
    "doubleStrikethrough" => set_double_strikethrough,
    "smallCaps" => set_small_caps,
    "allCaps" => set_all_caps,
    "fgColor" => set_fg_color,
    "bgColor" => set_bg_color,
    "lineHeight" => set_line_height,
    "paragraph" => set_paragraph,
});
