//! Tables: `w:tblPr`, `w:tblGrid`, rows and cells.
use std::fmt::Write;

use super::body::write_elements;
use super::context::PartContext;
use super::ends_with_paragraph;
use crate::common::Result;
use crate::common::xml::{escape_xml, write_whole_attr};
use crate::element::{Cell, Container, ContainerKind, Row, Table};
use crate::style::{BorderSide, Borders, CellStyle, StyleRef, TableStyle, WidthUnit, XmlEnum};

/// Write bordered edges as `<w:{side} w:val="single" .../>`; unset edges are skipped.
pub(crate) fn write_border_sides(xml: &mut String, sides: &[(&str, &BorderSide)], space: u32) -> Result<()> {
    for (name, side) in sides {
        let Some(size) = side.size else {
            continue;
        };
        write!(xml, r#"<w:{} w:val="single""#, name)?;
        write_whole_attr(xml, "w:sz", size)?;
        write!(
            xml,
            r#" w:space="{}" w:color="{}"/>"#,
            space,
            escape_xml(side.color_or_default())
        )?;
    }
    Ok(())
}

fn table_border_sides(borders: &Borders) -> Vec<(&'static str, &BorderSide)> {
    let mut sides = borders.outer().to_vec();
    sides.push(("insideH", &borders.inside_h));
    sides.push(("insideV", &borders.inside_v));
    sides
}

fn write_shading(xml: &mut String, fill: &str) -> Result<()> {
    write!(xml, r#"<w:shd w:val="clear" w:color="auto" w:fill="{}"/>"#, escape_xml(fill))?;
    Ok(())
}

/// Write `w:tblPr`. In the styles part `with_width` is off and only formatting is written.
pub(crate) fn write_table_props(
    xml: &mut String,
    style_id: Option<&str>,
    style: Option<&TableStyle>,
    with_width: bool,
) -> Result<()> {
    xml.push_str("<w:tblPr>");
    if let Some(id) = style_id {
        write!(xml, r#"<w:tblStyle w:val="{}"/>"#, escape_xml(id))?;
    }
    if with_width {
        match style.and_then(|s| s.width().map(|w| (w, s.unit()))) {
            Some((width, unit)) => {
                xml.push_str("<w:tblW");
                write_whole_attr(xml, "w:w", width)?;
                write!(xml, r#" w:type="{}"/>"#, unit.to_xml())?;
            },
            None => write!(xml, r#"<w:tblW w:w="0" w:type="{}"/>"#, WidthUnit::Auto.to_xml())?,
        }
    }
    if let Some(style) = style {
        if let Some(align) = style.align() {
            write!(xml, r#"<w:jc w:val="{}"/>"#, align.to_xml())?;
        }
        if style.borders().has_any() {
            xml.push_str("<w:tblBorders>");
            write_border_sides(xml, &table_border_sides(style.borders()), 0)?;
            xml.push_str("</w:tblBorders>");
        }
        if let Some(fill) = style.bg_color() {
            write_shading(xml, fill)?;
        }
        if style.has_cell_margins() {
            xml.push_str("<w:tblCellMar>");
            for (side, margin) in style.cell_margins() {
                if let Some(margin) = margin {
                    write!(xml, "<w:{}", side)?;
                    write_whole_attr(xml, "w:w", margin)?;
                    xml.push_str(r#" w:type="dxa"/>"#);
                }
            }
            xml.push_str("</w:tblCellMar>");
        }
    }
    xml.push_str("</w:tblPr>");
    Ok(())
}

/// Write `w:tcPr` children for a cell style; `width` comes from the cell.
pub(crate) fn write_cell_props(xml: &mut String, width: Option<f64>, style: &CellStyle) -> Result<()> {
    xml.push_str("<w:tcPr>");
    match width {
        Some(width) => {
            xml.push_str("<w:tcW");
            write_whole_attr(xml, "w:w", width)?;
            xml.push_str(r#" w:type="dxa"/>"#);
        },
        None => xml.push_str(r#"<w:tcW w:w="0" w:type="auto"/>"#),
    }
    if let Some(span) = style.grid_span() {
        write!(xml, r#"<w:gridSpan w:val="{}"/>"#, span)?;
    }
    if let Some(merge) = style.v_merge() {
        write!(xml, r#"<w:vMerge w:val="{}"/>"#, merge.to_xml())?;
    }
    if style.borders().has_outer() {
        xml.push_str("<w:tcBorders>");
        write_border_sides(xml, &style.borders().outer(), 0)?;
        xml.push_str("</w:tcBorders>");
    }
    if let Some(fill) = style.bg_color() {
        write_shading(xml, fill)?;
    }
    if let Some(direction) = style.text_direction() {
        write!(xml, r#"<w:textDirection w:val="{}"/>"#, direction.to_xml())?;
    }
    if let Some(valign) = style.valign() {
        write!(xml, r#"<w:vAlign w:val="{}"/>"#, valign.to_xml())?;
    }
    xml.push_str("</w:tcPr>");
    Ok(())
}

/// A table. Tables without rows are not written.
pub(crate) fn write_table(ctx: &mut PartContext<'_>, table: &Table) -> Result<()> {
    if table.is_empty() {
        return Ok(());
    }

    let (style_id, inline) = match table.style() {
        Some(StyleRef::Named(name)) => (ctx.named_style(name), None),
        Some(StyleRef::Inline(style)) => (None, Some(style)),
        None => (None, None),
    };

    ctx.xml.push_str("<w:tbl>");
    write_table_props(&mut ctx.xml, style_id.as_deref(), inline, true)?;

    ctx.xml.push_str("<w:tblGrid>");
    for width in table.grid_widths() {
        match width {
            Some(width) => {
                ctx.xml.push_str("<w:gridCol");
                write_whole_attr(&mut ctx.xml, "w:w", width)?;
                ctx.xml.push_str("/>");
            },
            None => ctx.xml.push_str("<w:gridCol/>"),
        }
    }
    ctx.xml.push_str("</w:tblGrid>");

    for row in table.rows() {
        write_row(ctx, row)?;
    }
    ctx.xml.push_str("</w:tbl>");
    Ok(())
}

fn write_row(ctx: &mut PartContext<'_>, row: &Row) -> Result<()> {
    ctx.xml.push_str("<w:tr>");
    let style = row.style();
    if style.cant_split() || style.tbl_header() || row.height().is_some() {
        ctx.xml.push_str("<w:trPr>");
        if style.cant_split() {
            ctx.xml.push_str(r#"<w:cantSplit w:val="1"/>"#);
        }
        if let Some(height) = row.height() {
            ctx.xml.push_str("<w:trHeight");
            write_whole_attr(&mut ctx.xml, "w:val", height)?;
            if style.exact_height() {
                ctx.xml.push_str(r#" w:hRule="exact""#);
            }
            ctx.xml.push_str("/>");
        }
        if style.tbl_header() {
            ctx.xml.push_str(r#"<w:tblHeader w:val="1"/>"#);
        }
        ctx.xml.push_str("</w:trPr>");
    }
    for cell in row.cells() {
        write_cell(ctx, cell)?;
    }
    ctx.xml.push_str("</w:tr>");
    Ok(())
}

fn write_cell(ctx: &mut PartContext<'_>, cell: &Cell) -> Result<()> {
    ctx.xml.push_str("<w:tc>");
    write_cell_props(&mut ctx.xml, cell.width(), cell.style())?;
    write_elements(ctx, cell.elements(), ContainerKind::Cell)?;
    if !ends_with_paragraph(&ctx.xml) {
        ctx.xml.push_str("<w:p/>");
    }
    ctx.xml.push_str("</w:tc>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleProperties;
    use crate::style_map;

    #[test]
    fn test_default_table_props() {
        let mut xml = String::new();
        write_table_props(&mut xml, None, None, true).unwrap();
        assert_eq!(xml, r#"<w:tblPr><w:tblW w:w="0" w:type="auto"/></w:tblPr>"#);
    }

    #[test]
    fn test_table_props_order() {
        let style = TableStyle::from_map(&style_map! {
            "cellMarginTop" => 120,
            "bgColor" => "EEEEEE",
            "borderSize" => 6,
            "borderInsideHSize" => 4,
            "align" => "center",
            "width" => 5000,
            "unit" => "pct",
        });
        let mut xml = String::new();
        write_table_props(&mut xml, Some("Grid"), Some(&style), true).unwrap();
        let order = ["<w:tblStyle", "<w:tblW w:w=\"5000\" w:type=\"pct\"/>", "<w:jc", "<w:tblBorders>", "<w:insideH", "<w:shd", "<w:tblCellMar><w:top w:w=\"120\" w:type=\"dxa\"/>"];
        let positions: Vec<_> = order.iter().map(|tag| xml.find(tag).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", xml);
        assert!(!xml.contains("<w:insideV"));
    }

    #[test]
    fn test_cell_props() {
        let style = CellStyle::from_map(&style_map! {
            "valign" => "top",
            "textDirection" => "btLr",
            "bgColor" => "FF0000",
            "borderTopSize" => 120,
            "borderTopColor" => "FF0000",
            "vMerge" => "restart",
            "gridSpan" => 2,
        });
        let mut xml = String::new();
        write_cell_props(&mut xml, Some(120.0), &style).unwrap();
        assert_eq!(
            xml,
            concat!(
                r#"<w:tcPr><w:tcW w:w="120" w:type="dxa"/><w:gridSpan w:val="2"/><w:vMerge w:val="restart"/>"#,
                r#"<w:tcBorders><w:top w:val="single" w:sz="120" w:space="0" w:color="FF0000"/></w:tcBorders>"#,
                r#"<w:shd w:val="clear" w:color="auto" w:fill="FF0000"/><w:textDirection w:val="btLr"/>"#,
                r#"<w:vAlign w:val="top"/></w:tcPr>"#,
            )
        );
    }
}
