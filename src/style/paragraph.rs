//! Paragraph style.
use smallvec::SmallVec;

use super::enums::{Alignment, LineSpacingRule};
use super::tab::{Indentation, Tab};
use super::value::{
    StyleValue, bool_val, int_val, opt_numeric_val, opt_xml_enum_val, string_val,
};
use super::{StyleMeta, StyleProperties, setter_table};

/// Paragraph formatting. Measures are in twips.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphStyle {
    pub(crate) meta: StyleMeta,
    align: Option<Alignment>,
    space_before: Option<f64>,
    space_after: Option<f64>,
    spacing: Option<f64>,
    line_rule: Option<LineSpacingRule>,
    line_height: Option<f64>,
    indentation: Indentation,
    based_on: String,
    next: Option<String>,
    widow_control: bool,
    keep_next: bool,
    keep_lines: bool,
    page_break_before: bool,
    tabs: SmallVec<[Tab; 4]>,
    num_style: Option<String>,
    num_level: i64,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            meta: StyleMeta::default(),
            align: None,
            space_before: None,
            space_after: None,
            spacing: None,
            line_rule: None,
            line_height: None,
            indentation: Indentation::default(),
            based_on: "Normal".to_string(),
            next: None,
            widow_control: true,
            keep_next: false,
            keep_lines: false,
            page_break_before: false,
            tabs: SmallVec::new(),
            num_style: None,
            num_level: 0,
        }
    }
}

impl ParagraphStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align(&self) -> Option<Alignment> {
        self.align
    }

    pub fn space_before(&self) -> Option<f64> {
        self.space_before
    }

    pub fn space_after(&self) -> Option<f64> {
        self.space_after
    }

    /// Line spacing in twips, or derived from the line height multiplier.
    pub fn spacing(&self) -> Option<f64> {
        match self.line_height {
            Some(multiplier) => Some(crate::common::unit::line_height_to_line(multiplier)),
            None => self.spacing,
        }
    }

    /// Line spacing rule; a line height multiplier implies `auto`.
    pub fn line_rule(&self) -> Option<LineSpacingRule> {
        match self.line_height {
            Some(_) => Some(LineSpacingRule::Auto),
            None => self.line_rule,
        }
    }

    pub fn line_height(&self) -> Option<f64> {
        self.line_height
    }

    pub fn indentation(&self) -> &Indentation {
        &self.indentation
    }

    pub fn indent(&self) -> Option<f64> {
        self.indentation.left()
    }

    pub fn hanging(&self) -> Option<f64> {
        self.indentation.hanging()
    }

    pub fn based_on(&self) -> &str {
        &self.based_on
    }

    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn widow_control(&self) -> bool {
        self.widow_control
    }

    pub fn keep_next(&self) -> bool {
        self.keep_next
    }

    pub fn keep_lines(&self) -> bool {
        self.keep_lines
    }

    pub fn page_break_before(&self) -> bool {
        self.page_break_before
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn num_style(&self) -> Option<&str> {
        self.num_style.as_deref()
    }

    pub fn num_level(&self) -> i64 {
        self.num_level
    }

    pub fn set_align(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.align = opt_xml_enum_val(&value.into(), self.align);
        self
    }

    pub fn set_space_before(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.space_before = opt_numeric_val(&value.into(), self.space_before);
        self
    }

    pub fn set_space_after(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.space_after = opt_numeric_val(&value.into(), self.space_after);
        self
    }

    pub fn set_spacing(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.spacing = opt_numeric_val(&value.into(), self.spacing);
        self
    }

    pub fn set_line_rule(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.line_rule = opt_xml_enum_val(&value.into(), self.line_rule);
        self
    }

    /// Line height as a multiple of single spacing; only positive values are kept.
    pub fn set_line_height(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.line_height = opt_numeric_val(&value.into(), self.line_height).filter(|h| *h > 0.0);
        self
    }

    pub fn set_indent(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.indentation.set_left(value);
        self
    }

    pub fn set_hanging(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.indentation.set_hanging(value);
        self
    }

    /// Indentation from a map of `left`, `right`, `firstLine`, `hanging`.
    pub fn set_indentation(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        if let StyleValue::Map(map) = value.into() {
            self.indentation.set_style_by_array(&map);
        }
        self
    }

    pub fn set_based_on(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.based_on = string_val(&value.into(), Some(self.based_on.clone()))
            .unwrap_or_else(|| "Normal".to_string());
        self
    }

    pub fn set_next(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.next = string_val(&value.into(), self.next.take());
        self
    }

    pub fn set_widow_control(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.widow_control = bool_val(&value.into(), self.widow_control);
        self
    }

    pub fn set_keep_next(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.keep_next = bool_val(&value.into(), self.keep_next);
        self
    }

    pub fn set_keep_lines(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.keep_lines = bool_val(&value.into(), self.keep_lines);
        self
    }

    pub fn set_page_break_before(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.page_break_before = bool_val(&value.into(), self.page_break_before);
        self
    }

    /// Replace the tab stops from a list of tab maps; entries that are not maps are skipped.
    pub fn set_tabs(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        if let StyleValue::List(items) = value.into() {
            self.tabs = items
                .iter()
                .filter_map(StyleValue::as_map)
                .map(Tab::from_map)
                .collect();
        }
        self
    }

    pub fn add_tab(&mut self, tab: Tab) -> &mut Self {
        self.tabs.push(tab);
        self
    }

    pub fn set_num_style(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.num_style = string_val(&value.into(), self.num_style.take());
        self
    }

    pub fn set_num_level(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.num_level = int_val(&value.into(), self.num_level);
        self
    }
}

setter_table!(PARAGRAPH_SETTERS: ParagraphStyle {
    "index" => set_index,
    "align" => set_align,
    "spaceBefore" => set_space_before,
    "spaceAfter" => set_space_after,
    "spacing" => set_spacing,
    "spacingLineRule" => set_line_rule,
    "lineHeight" => set_line_height,
    "indent" => set_indent,
    "hanging" => set_hanging,
    "indentation" => set_indentation,
    "basedOn" => set_based_on,
    "next" => set_next,
    "widowControl" => set_widow_control,
    "keepNext" => set_keep_next,
    "keepLines" => set_keep_lines,
    "pageBreakBefore" => set_page_break_before,
    "tabs" => set_tabs,
    "numStyle" => set_num_style,
    "numLevel" => set_num_level,
});
