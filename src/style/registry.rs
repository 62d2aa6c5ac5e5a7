//! Named style registry.
//!
//! A registry belongs to one generation session. It is populated explicitly, queried by
//! the part writer when it resolves named references, and can be cleared and refilled
//! without affecting any other registry.
use indexmap::IndexMap;
use indexmap::map::Entry;

use super::enums::FontKind;
use super::font::FontStyle;
use super::paragraph::ParagraphStyle;
use super::table::TableStyle;
use super::StyleDefinition;

/// Name under which the default paragraph style is stored.
pub const DEFAULT_PARAGRAPH_STYLE: &str = "Normal";

/// A registered style.
#[derive(Debug, Clone, PartialEq)]
pub enum Style {
    Paragraph(ParagraphStyle),
    Font(FontStyle),
    Table(TableStyle),
}

impl Style {
    pub fn as_paragraph(&self) -> Option<&ParagraphStyle> {
        match self {
            Self::Paragraph(style) => Some(style),
            _ => None,
        }
    }

    pub fn as_font(&self) -> Option<&FontStyle> {
        match self {
            Self::Font(style) => Some(style),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&TableStyle> {
        match self {
            Self::Table(style) => Some(style),
            _ => None,
        }
    }

    fn set_meta(&mut self, name: &str, index: i64) {
        match self {
            Self::Paragraph(style) => {
                style.set_style_name(name).set_index(index);
            },
            Self::Font(style) => {
                style.set_style_name(name).set_index(index);
            },
            Self::Table(style) => {
                style.set_style_name(name).set_index(index);
            },
        }
    }
}

/// Registry name of the title style for `level`.
pub fn title_style_name(level: u32) -> String {
    format!("Heading_{level}")
}

/// Style id written to the document for a registry name.
///
/// Title styles drop the underscore (`Heading_1` → `Heading1`); other names are used as is.
pub fn style_id(name: &str) -> String {
    match name.strip_prefix("Heading_") {
        Some(level) if !level.is_empty() && level.bytes().all(|b| b.is_ascii_digit()) => {
            format!("Heading{level}")
        },
        _ => name.to_string(),
    }
}

/// Insertion-ordered map of style name → style.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: IndexMap<String, Style>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `style` under `name`, replacing any previous entry in place.
    fn store(&mut self, name: String, mut style: Style) -> &mut Style {
        let next_index = self.styles.len() as i64 + 1;
        match self.styles.entry(name) {
            Entry::Occupied(mut entry) => {
                style.set_meta(entry.key(), entry.index() as i64 + 1);
                entry.insert(style);
                entry.into_mut()
            },
            Entry::Vacant(entry) => {
                style.set_meta(entry.key(), next_index);
                entry.insert(style)
            },
        }
    }

    fn store_paragraph(&mut self, name: String, style: ParagraphStyle) -> &mut ParagraphStyle {
        match self.store(name, Style::Paragraph(style)) {
            Style::Paragraph(style) => style,
            _ => unreachable!(),
        }
    }

    fn store_font(&mut self, name: String, style: FontStyle) -> &mut FontStyle {
        match self.store(name, Style::Font(style)) {
            Style::Font(style) => style,
            _ => unreachable!(),
        }
    }

    fn store_table(&mut self, name: String, style: TableStyle) -> &mut TableStyle {
        match self.store(name, Style::Table(style)) {
            Style::Table(style) => style,
            _ => unreachable!(),
        }
    }

    pub fn add_paragraph_style(
        &mut self,
        name: impl Into<String>,
        style: impl Into<StyleDefinition<ParagraphStyle>>,
    ) -> &mut ParagraphStyle {
        self.store_paragraph(name.into(), style.into().build())
    }

    pub fn add_font_style(
        &mut self,
        name: impl Into<String>,
        font: impl Into<StyleDefinition<FontStyle>>,
    ) -> &mut FontStyle {
        let mut font = font.into().build();
        font.set_kind(FontKind::Text);
        self.store_font(name.into(), font)
    }

    /// A font style that also carries paragraph formatting.
    pub fn add_font_style_with_paragraph(
        &mut self,
        name: impl Into<String>,
        font: impl Into<StyleDefinition<FontStyle>>,
        paragraph: impl Into<StyleDefinition<ParagraphStyle>>,
    ) -> &mut FontStyle {
        let style = self.add_font_style(name, font);
        *style.paragraph_mut() = paragraph.into().build();
        style
    }

    pub fn add_link_style(
        &mut self,
        name: impl Into<String>,
        font: impl Into<StyleDefinition<FontStyle>>,
    ) -> &mut FontStyle {
        let mut font = font.into().build();
        font.set_kind(FontKind::Link);
        self.store_font(name.into(), font)
    }

    pub fn add_table_style(
        &mut self,
        name: impl Into<String>,
        table: impl Into<StyleDefinition<TableStyle>>,
    ) -> &mut TableStyle {
        self.store_table(name.into(), table.into().build())
    }

    /// A table style with a distinct first row.
    pub fn add_table_style_with_first_row(
        &mut self,
        name: impl Into<String>,
        table: impl Into<StyleDefinition<TableStyle>>,
        first_row: impl Into<StyleDefinition<TableStyle>>,
    ) -> &mut TableStyle {
        self.store_table(name.into(), TableStyle::with_first_row(table, first_row))
    }

    /// Title style for heading `level`, stored as `Heading_{level}`.
    pub fn add_title_style(
        &mut self,
        level: u32,
        font: impl Into<StyleDefinition<FontStyle>>,
    ) -> &mut FontStyle {
        let mut font = font.into().build();
        font.set_kind(FontKind::Title);
        self.store_font(title_style_name(level), font)
    }

    pub fn add_title_style_with_paragraph(
        &mut self,
        level: u32,
        font: impl Into<StyleDefinition<FontStyle>>,
        paragraph: impl Into<StyleDefinition<ParagraphStyle>>,
    ) -> &mut FontStyle {
        let style = self.add_title_style(level, font);
        *style.paragraph_mut() = paragraph.into().build();
        style
    }

    /// Paragraph style every other paragraph style is based on, stored as `Normal`.
    pub fn set_default_paragraph_style(
        &mut self,
        style: impl Into<StyleDefinition<ParagraphStyle>>,
    ) -> &mut ParagraphStyle {
        self.store_paragraph(DEFAULT_PARAGRAPH_STYLE.to_string(), style.into().build())
    }

    pub fn get_style(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    pub fn get_styles(&self) -> &IndexMap<String, Style> {
        &self.styles
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn count(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn reset_styles(&mut self) {
        self.styles.clear();
    }

    /// Run `f` against this registry and clear it afterwards.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let result = f(self);
        self.reset_styles();
        result
    }
}
