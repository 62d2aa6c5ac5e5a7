//! Table of contents entry style.
use super::enums::TabLeader;
use super::value::{StyleValue, numeric_val, xml_enum_val};
use super::{StyleMeta, setter_table};

/// Tab leader, tab position and per-level indent of TOC entries. Measures are in twips.
#[derive(Debug, Clone, PartialEq)]
pub struct TocStyle {
    pub(crate) meta: StyleMeta,
    tab_leader: TabLeader,
    tab_pos: f64,
    indent: f64,
}

impl Default for TocStyle {
    fn default() -> Self {
        Self {
            meta: StyleMeta::default(),
            tab_leader: TabLeader::Dot,
            tab_pos: 9062.0,
            indent: 200.0,
        }
    }
}

impl TocStyle {
    pub fn tab_leader(&self) -> TabLeader {
        self.tab_leader
    }

    pub fn tab_pos(&self) -> f64 {
        self.tab_pos
    }

    pub fn indent(&self) -> f64 {
        self.indent
    }

    pub fn set_tab_leader(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.tab_leader = xml_enum_val(&value.into(), self.tab_leader);
        self
    }

    pub fn set_tab_pos(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.tab_pos = numeric_val(&value.into(), self.tab_pos);
        self
    }

    pub fn set_indent(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.indent = numeric_val(&value.into(), self.indent);
        self
    }
}

setter_table!(TOC_SETTERS: TocStyle {
    "index" => set_index,
    "tabLeader" => set_tab_leader,
    "tabPos" => set_tab_pos,
    "indent" => set_indent,
});
