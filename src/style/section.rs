//! Section (page setup) style.
use super::border::{Borders, border_setters};
use super::enums::{Orientation, SectionBreak};
use super::line_numbering::LineNumbering;
use super::value::{StyleValue, int_val, numeric_val, opt_int_val, opt_xml_enum_val, xml_enum_val};
use super::{StyleMeta, StyleProperties, setter_table};

/// Page geometry and layout of a section. Measures are in twips.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionStyle {
    pub(crate) meta: StyleMeta,
    orientation: Orientation,
    page_size_w: f64,
    page_size_h: f64,
    margin_top: f64,
    margin_left: f64,
    margin_right: f64,
    margin_bottom: f64,
    gutter: f64,
    header_height: f64,
    footer_height: f64,
    page_numbering_start: Option<i64>,
    cols_num: i64,
    cols_space: f64,
    break_type: Option<SectionBreak>,
    line_numbering: Option<LineNumbering>,
    pub(crate) borders: Borders,
}

impl SectionStyle {
    /// A4 width.
    pub const DEFAULT_WIDTH: f64 = 11906.0;
    /// A4 height.
    pub const DEFAULT_HEIGHT: f64 = 16838.0;
    pub const DEFAULT_MARGIN: f64 = 1440.0;
    pub const DEFAULT_GUTTER: f64 = 0.0;
    pub const DEFAULT_HEADER_HEIGHT: f64 = 720.0;
    pub const DEFAULT_FOOTER_HEIGHT: f64 = 720.0;
    pub const DEFAULT_COLUMN_COUNT: i64 = 1;
    pub const DEFAULT_COLUMN_SPACING: f64 = 720.0;
}

impl Default for SectionStyle {
    fn default() -> Self {
        Self {
            meta: StyleMeta::default(),
            orientation: Orientation::Portrait,
            page_size_w: Self::DEFAULT_WIDTH,
            page_size_h: Self::DEFAULT_HEIGHT,
            margin_top: Self::DEFAULT_MARGIN,
            margin_left: Self::DEFAULT_MARGIN,
            margin_right: Self::DEFAULT_MARGIN,
            margin_bottom: Self::DEFAULT_MARGIN,
            gutter: Self::DEFAULT_GUTTER,
            header_height: Self::DEFAULT_HEADER_HEIGHT,
            footer_height: Self::DEFAULT_FOOTER_HEIGHT,
            page_numbering_start: None,
            cols_num: Self::DEFAULT_COLUMN_COUNT,
            cols_space: Self::DEFAULT_COLUMN_SPACING,
            break_type: None,
            line_numbering: None,
            borders: Borders::default(),
        }
    }
}

impl SectionStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Set the orientation and lay the page out to match it.
    ///
    /// The longer side becomes the height in portrait and the width in landscape, so
    /// applying the same orientation again changes nothing.
    pub fn set_orientation(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.orientation = xml_enum_val(&value.into(), self.orientation);
        let long = self.page_size_w.max(self.page_size_h);
        let short = self.page_size_w.min(self.page_size_h);
        match self.orientation {
            Orientation::Portrait => {
                self.page_size_w = short;
                self.page_size_h = long;
            },
            Orientation::Landscape => {
                self.page_size_w = long;
                self.page_size_h = short;
            },
        }
        self
    }

    pub fn set_portrait(&mut self) -> &mut Self {
        self.set_orientation("portrait")
    }

    pub fn set_landscape(&mut self) -> &mut Self {
        self.set_orientation("landscape")
    }

    pub fn page_size_w(&self) -> f64 {
        self.page_size_w
    }

    pub fn page_size_h(&self) -> f64 {
        self.page_size_h
    }

    pub fn margin_top(&self) -> f64 {
        self.margin_top
    }

    pub fn margin_left(&self) -> f64 {
        self.margin_left
    }

    pub fn margin_right(&self) -> f64 {
        self.margin_right
    }

    pub fn margin_bottom(&self) -> f64 {
        self.margin_bottom
    }

    pub fn gutter(&self) -> f64 {
        self.gutter
    }

    pub fn header_height(&self) -> f64 {
        self.header_height
    }

    pub fn footer_height(&self) -> f64 {
        self.footer_height
    }

    pub fn page_numbering_start(&self) -> Option<i64> {
        self.page_numbering_start
    }

    pub fn cols_num(&self) -> i64 {
        self.cols_num
    }

    pub fn cols_space(&self) -> f64 {
        self.cols_space
    }

    pub fn break_type(&self) -> Option<SectionBreak> {
        self.break_type
    }

    pub fn line_numbering(&self) -> Option<&LineNumbering> {
        self.line_numbering.as_ref()
    }

    pub fn set_page_size_w(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.page_size_w = numeric_val(&value.into(), Self::DEFAULT_WIDTH);
        self
    }

    pub fn set_page_size_h(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.page_size_h = numeric_val(&value.into(), Self::DEFAULT_HEIGHT);
        self
    }

    pub fn set_margin_top(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.margin_top = numeric_val(&value.into(), Self::DEFAULT_MARGIN);
        self
    }

    pub fn set_margin_left(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.margin_left = numeric_val(&value.into(), Self::DEFAULT_MARGIN);
        self
    }

    pub fn set_margin_right(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.margin_right = numeric_val(&value.into(), Self::DEFAULT_MARGIN);
        self
    }

    pub fn set_margin_bottom(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.margin_bottom = numeric_val(&value.into(), Self::DEFAULT_MARGIN);
        self
    }

    pub fn set_gutter(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.gutter = numeric_val(&value.into(), Self::DEFAULT_GUTTER);
        self
    }

    pub fn set_header_height(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.header_height = numeric_val(&value.into(), Self::DEFAULT_HEADER_HEIGHT);
        self
    }

    pub fn set_footer_height(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.footer_height = numeric_val(&value.into(), Self::DEFAULT_FOOTER_HEIGHT);
        self
    }

    /// First page number of the section; null restores continuous numbering.
    pub fn set_page_numbering_start(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.page_numbering_start = opt_int_val(&value.into(), self.page_numbering_start);
        self
    }

    pub fn set_cols_num(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.cols_num = int_val(&value.into(), Self::DEFAULT_COLUMN_COUNT);
        self
    }

    pub fn set_cols_space(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.cols_space = numeric_val(&value.into(), Self::DEFAULT_COLUMN_SPACING);
        self
    }

    pub fn set_break_type(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.break_type = opt_xml_enum_val(&value.into(), self.break_type);
        self
    }

    /// Line numbering from a map, merged into any existing settings; any other value removes it.
    pub fn set_line_numbering(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        match value.into() {
            StyleValue::Map(map) => {
                self.line_numbering
                    .get_or_insert_with(LineNumbering::default)
                    .set_style_by_array(&map);
            },
            _ => self.line_numbering = None,
        }
        self
    }
}

border_setters!(SectionStyle);

setter_table!(SECTION_SETTERS: SectionStyle {
    "index" => set_index,
    "orientation" => set_orientation,
    "pageSizeW" => set_page_size_w,
    "pageSizeH" => set_page_size_h,
    "marginTop" => set_margin_top,
    "marginLeft" => set_margin_left,
    "marginRight" => set_margin_right,
    "marginBottom" => set_margin_bottom,
    "gutter" => set_gutter,
    "headerHeight" => set_header_height,
    "footerHeight" => set_footer_height,
    "pageNumberingStart" => set_page_numbering_start,
    "colsNum" => set_cols_num,
    "colsSpace" => set_cols_space,
    "breakType" => set_break_type,
    "lineNumbering" => set_line_numbering,
    "borderSize" => set_border_size,
    "borderColor" => set_border_color,
    "borderTopSize" => set_border_top_size,
    "borderTopColor" => set_border_top_color,
    "borderLeftSize" => set_border_left_size,
    "borderLeftColor" => set_border_left_color,
    "borderRightSize" => set_border_right_size,
    "borderRightColor" => set_border_right_color,
    "borderBottomSize" => set_border_bottom_size,
    "borderBottomColor" => set_border_bottom_color,
});
