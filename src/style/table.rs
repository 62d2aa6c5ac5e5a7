//! Table, row and cell styles.
use super::border::{Borders, border_setters};
use super::enums::{CellVerticalAlign, TableAlignment, TextDirection, VerticalMerge, WidthUnit};
use super::value::{
    StyleValue, bool_val, color_val, opt_int_val, opt_numeric_val, opt_xml_enum_val, xml_enum_val,
};
use super::{StyleDefinition, StyleMeta, setter_table};

/// Table formatting. Measures are in twips unless the unit says otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    pub(crate) meta: StyleMeta,
    bg_color: Option<String>,
    cell_margin_top: Option<f64>,
    cell_margin_left: Option<f64>,
    cell_margin_right: Option<f64>,
    cell_margin_bottom: Option<f64>,
    width: Option<f64>,
    unit: WidthUnit,
    align: Option<TableAlignment>,
    pub(crate) borders: Borders,
    first_row: Option<Box<TableStyle>>,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            meta: StyleMeta::default(),
            bg_color: None,
            cell_margin_top: None,
            cell_margin_left: None,
            cell_margin_right: None,
            cell_margin_bottom: None,
            width: None,
            unit: WidthUnit::Auto,
            align: None,
            borders: Borders::default(),
            first_row: None,
        }
    }
}

impl TableStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table style whose first row is formatted differently.
    pub fn with_first_row(
        table: impl Into<StyleDefinition<TableStyle>>,
        first_row: impl Into<StyleDefinition<TableStyle>>,
    ) -> Self {
        let mut style = table.into().build();
        style.first_row = Some(Box::new(first_row.into().build()));
        style
    }

    pub fn bg_color(&self) -> Option<&str> {
        self.bg_color.as_deref()
    }

    /// Cell margins in schema order: top, left, bottom, right.
    pub fn cell_margins(&self) -> [(&'static str, Option<f64>); 4] {
        [
            ("top", self.cell_margin_top),
            ("left", self.cell_margin_left),
            ("bottom", self.cell_margin_bottom),
            ("right", self.cell_margin_right),
        ]
    }

    pub fn has_cell_margins(&self) -> bool {
        self.cell_margins().iter().any(|(_, m)| m.is_some())
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn unit(&self) -> WidthUnit {
        self.unit
    }

    pub fn align(&self) -> Option<TableAlignment> {
        self.align
    }

    pub fn first_row(&self) -> Option<&TableStyle> {
        self.first_row.as_deref()
    }

    pub fn set_bg_color(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.bg_color = color_val(&value.into(), self.bg_color.take());
        self
    }

    /// Margin on all four sides of every cell.
    pub fn set_cell_margin(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        let value = value.into();
        for margin in [
            &mut self.cell_margin_top,
            &mut self.cell_margin_left,
            &mut self.cell_margin_right,
            &mut self.cell_margin_bottom,
        ] {
            *margin = opt_numeric_val(&value, *margin);
        }
        self
    }

    pub fn set_cell_margin_top(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.cell_margin_top = opt_numeric_val(&value.into(), self.cell_margin_top);
        self
    }

    pub fn set_cell_margin_left(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.cell_margin_left = opt_numeric_val(&value.into(), self.cell_margin_left);
        self
    }

    pub fn set_cell_margin_right(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.cell_margin_right = opt_numeric_val(&value.into(), self.cell_margin_right);
        self
    }

    pub fn set_cell_margin_bottom(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.cell_margin_bottom = opt_numeric_val(&value.into(), self.cell_margin_bottom);
        self
    }

    pub fn set_width(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.width = opt_numeric_val(&value.into(), self.width);
        self
    }

    pub fn set_unit(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.unit = xml_enum_val(&value.into(), self.unit);
        self
    }

    pub fn set_align(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.align = opt_xml_enum_val(&value.into(), self.align);
        self
    }

    pub fn set_border_inside_h_size(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        let side = &mut self.borders.inside_h;
        side.size = opt_numeric_val(&value.into(), side.size);
        self
    }

    pub fn set_border_inside_h_color(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        let side = &mut self.borders.inside_h;
        side.color = color_val(&value.into(), side.color.take());
        self
    }

    pub fn set_border_inside_v_size(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        let side = &mut self.borders.inside_v;
        side.size = opt_numeric_val(&value.into(), side.size);
        self
    }

    pub fn set_border_inside_v_color(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        let side = &mut self.borders.inside_v;
        side.color = color_val(&value.into(), side.color.take());
        self
    }
}

border_setters!(TableStyle, CellStyle);

setter_table!(TABLE_SETTERS: TableStyle {
    "index" => set_index,
    "bgColor" => set_bg_color,
    "cellMargin" => set_cell_margin,
    "cellMarginTop" => set_cell_margin_top,
    "cellMarginLeft" => set_cell_margin_left,
    "cellMarginRight" => set_cell_margin_right,
    "cellMarginBottom" => set_cell_margin_bottom,
    "width" => set_width,
    "unit" => set_unit,
    "align" => set_align,
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
    "borderInsideHSize" => set_border_inside_h_size,
    "borderInsideHColor" => set_border_inside_h_color,
    "borderInsideVSize" => set_border_inside_v_size,
    "borderInsideVColor" => set_border_inside_v_color,
});

/// Table row formatting.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowStyle {
    pub(crate) meta: StyleMeta,
    tbl_header: bool,
    cant_split: bool,
    exact_height: bool,
}

impl RowStyle {
    /// Repeat the row at the top of every page.
    pub fn tbl_header(&self) -> bool {
        self.tbl_header
    }

    pub fn cant_split(&self) -> bool {
        self.cant_split
    }

    pub fn exact_height(&self) -> bool {
        self.exact_height
    }

    pub fn set_tbl_header(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.tbl_header = bool_val(&value.into(), self.tbl_header);
        self
    }

    pub fn set_cant_split(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.cant_split = bool_val(&value.into(), self.cant_split);
        self
    }

    pub fn set_exact_height(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.exact_height = bool_val(&value.into(), self.exact_height);
        self
    }
}

setter_table!(ROW_SETTERS: RowStyle {
    "index" => set_index,
    "tblHeader" => set_tbl_header,
    "cantSplit" => set_cant_split,
    "exactHeight" => set_exact_height,
});

/// Table cell formatting.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellStyle {
    pub(crate) meta: StyleMeta,
    width: Option<f64>,
    valign: Option<CellVerticalAlign>,
    text_direction: Option<TextDirection>,
    bg_color: Option<String>,
    grid_span: Option<i64>,
    v_merge: Option<VerticalMerge>,
    pub(crate) borders: Borders,
}

impl CellStyle {
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn valign(&self) -> Option<CellVerticalAlign> {
        self.valign
    }

    pub fn text_direction(&self) -> Option<TextDirection> {
        self.text_direction
    }

    pub fn bg_color(&self) -> Option<&str> {
        self.bg_color.as_deref()
    }

    pub fn grid_span(&self) -> Option<i64> {
        self.grid_span
    }

    pub fn v_merge(&self) -> Option<VerticalMerge> {
        self.v_merge
    }

    pub fn set_width(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.width = opt_numeric_val(&value.into(), self.width);
        self
    }

    pub fn set_valign(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.valign = opt_xml_enum_val(&value.into(), self.valign);
        self
    }

    pub fn set_text_direction(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.text_direction = opt_xml_enum_val(&value.into(), self.text_direction);
        self
    }

    pub fn set_bg_color(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.bg_color = color_val(&value.into(), self.bg_color.take());
        self
    }

    /// Number of grid columns spanned; spans below 1 are rejected.
    pub fn set_grid_span(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.grid_span = opt_int_val(&value.into(), self.grid_span)
            .filter(|span| *span >= 1)
            .or(self.grid_span);
        self
    }

    pub fn set_v_merge(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.v_merge = opt_xml_enum_val(&value.into(), self.v_merge);
        self
    }
}

setter_table!(CELL_SETTERS: CellStyle {
    "index" => set_index,
    "width" => set_width,
    "valign" => set_valign,
    "textDirection" => set_text_direction,
    "bgColor" => set_bg_color,
    "gridSpan" => set_grid_span,
    "vMerge" => set_v_merge,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleProperties;
    use crate::style_map;

    #[test]
    fn test_table_margins_and_width() {
        let table = TableStyle::from_map(&style_map! {
            "width" => 50,
            "cellMarginTop" => 120,
            "cellMarginRight" => 120,
            "cellMarginBottom" => 120,
            "cellMarginLeft" => 120,
            "unit" => "pct",
            "align" => "center",
        });
        assert_eq!(table.width(), Some(50.0));
        assert!(table.has_cell_margins());
        assert_eq!(table.cell_margins()[3], ("right", Some(120.0)));
        assert_eq!(table.unit(), WidthUnit::Percent);
        assert_eq!(table.align(), Some(TableAlignment::Center));
    }

    #[test]
    fn test_table_borders() {
        let table = TableStyle::from_map(&style_map! {
            "borderSize" => 6,
            "borderColor" => "006699",
            "borderInsideHSize" => 4,
        });
        assert_eq!(table.borders().left.size, Some(6.0));
        assert_eq!(table.borders().right.color.as_deref(), Some("006699"));
        assert_eq!(table.borders().inside_h.size, Some(4.0));
        assert!(!table.borders().inside_v.is_set());
    }

    #[test]
    fn test_first_row() {
        let style = TableStyle::with_first_row(
            style_map! { "borderSize" => 6 },
            style_map! { "bgColor" => "66BBFF" },
        );
        assert_eq!(style.first_row().and_then(TableStyle::bg_color), Some("66BBFF"));
    }

    #[test]
    fn test_row_style() {
        let row = RowStyle::from_map(&style_map! { "tblHeader" => true, "cantSplit" => true, "exactHeight" => "no" });
        assert!(row.tbl_header());
        assert!(row.cant_split());
        assert!(!row.exact_height());
    }

    #[test]
    fn test_cell_style() {
        let cell = CellStyle::from_map(&style_map! {
            "valign" => "top",
            "textDirection" => "btLr",
            "bgColor" => "FF0000",
            "borderTopSize" => 120,
            "borderTopColor" => "FF0000",
            "vMerge" => "restart",
            "gridSpan" => 0,
        });
        assert_eq!(cell.valign(), Some(CellVerticalAlign::Top));
        assert_eq!(cell.text_direction(), Some(TextDirection::BtLr));
        assert_eq!(cell.bg_color(), Some("FF0000"));
        assert_eq!(cell.borders().top.size, Some(120.0));
        assert_eq!(cell.v_merge(), Some(VerticalMerge::Restart));
        assert_eq!(cell.grid_span(), None);
    }
}
