//! YAML style sheets.
//!
//! ```yaml
//! default_paragraph: { spaceAfter: 120 }
//! paragraph:
//!   Quote: { align: center, indent: 720 }
//! font:
//!   Strong: { bold: true, paragraph: { keepNext: true } }
//! link:
//!   Hyperlink: { color: "0000FF", underline: single }
//! table:
//!   Grid:
//!     style: { borderSize: 6 }
//!     first_row: { bgColor: "CCCCCC" }
//! title:
//!   1: { font: { size: 16, bold: true }, paragraph: { spaceAfter: 240 } }
//! ```
use indexmap::IndexMap;
use serde::Deserialize;

use super::registry::StyleRegistry;
use super::value::StyleMap;
use crate::common::{Error, Result};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TableEntry {
    style: StyleMap,
    first_row: Option<StyleMap>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TitleEntry {
    font: StyleMap,
    paragraph: Option<StyleMap>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleSheet {
    default_paragraph: Option<StyleMap>,
    paragraph: IndexMap<String, StyleMap>,
    font: IndexMap<String, StyleMap>,
    link: IndexMap<String, StyleMap>,
    table: IndexMap<String, TableEntry>,
    title: IndexMap<u32, TitleEntry>,
}

impl StyleRegistry {
    /// Register every style of a YAML style sheet.
    ///
    /// Property values go through the same coercing setters as code; only a document
    /// that is not a style sheet at all is an error.
    pub fn load_yaml(&mut self, text: &str) -> Result<()> {
        let sheet: StyleSheet = serde_saphyr::from_str(text)
            .map_err(|e| Error::Config(format!("invalid style sheet: {}", e)))?;

        if let Some(map) = sheet.default_paragraph {
            self.set_default_paragraph_style(map);
        }
        for (name, map) in sheet.paragraph {
            self.add_paragraph_style(name, map);
        }
        for (name, map) in sheet.font {
            self.add_font_style(name, map);
        }
        for (name, map) in sheet.link {
            self.add_link_style(name, map);
        }
        for (name, entry) in sheet.table {
            match entry.first_row {
                Some(first_row) => self.add_table_style_with_first_row(name, entry.style, first_row),
                None => self.add_table_style(name, entry.style),
            };
        }
        for (level, entry) in sheet.title {
            match entry.paragraph {
                Some(paragraph) => self.add_title_style_with_paragraph(level, entry.font, paragraph),
                None => self.add_title_style(level, entry.font),
            };
        }
        log::debug!("style sheet loaded, {} styles registered", self.count());
        Ok(())
    }
}
