//! Paragraphs: `w:pPr` and the elements that write one paragraph each.
use std::fmt::Write;

use super::body::write_elements;
use super::context::{PartContext, ParagraphProps, TOC_BOOKMARK_BASE};
use super::run::{write_run_props, write_text_run};
use crate::common::Result;
use crate::common::xml::{escape_xml, write_whole_attr};
use crate::element::{Container, ContainerKind, ListItem, Text, TextBreak, TextRun, Title};
use crate::style::{LineSpacingRule, ParagraphStyle, XmlEnum, style_id, title_style_name};

/// Write `w:pPr`, or nothing when every property is unset.
pub(crate) fn write_paragraph_props(xml: &mut String, props: &ParagraphProps<'_>) -> Result<()> {
    let start = xml.len();
    xml.push_str("<w:pPr>");
    let body = xml.len();

    if let Some(id) = &props.style_id {
        write!(xml, r#"<w:pStyle w:val="{}"/>"#, escape_xml(id))?;
    }
    if let Some(style) = props.style {
        write_flow(xml, style);
    }
    if let Some((level, num_id)) = props.numbering {
        write!(
            xml,
            r#"<w:numPr><w:ilvl w:val="{}"/><w:numId w:val="{}"/></w:numPr>"#,
            level, num_id
        )?;
    }
    if let Some(style) = props.style {
        write_layout(xml, style)?;
    }
    if let Some(level) = props.outline_level {
        write!(xml, r#"<w:outlineLvl w:val="{}"/>"#, level)?;
    }
    write_run_props(xml, props.mark)?;

    if xml.len() == body {
        xml.truncate(start);
    } else {
        xml.push_str("</w:pPr>");
    }
    Ok(())
}

/// Pagination toggles. Widow control is on by default, so only its absence is written.
fn write_flow(xml: &mut String, style: &ParagraphStyle) {
    if style.keep_next() {
        xml.push_str(r#"<w:keepNext w:val="1"/>"#);
    }
    if style.keep_lines() {
        xml.push_str(r#"<w:keepLines w:val="1"/>"#);
    }
    if style.page_break_before() {
        xml.push_str(r#"<w:pageBreakBefore w:val="1"/>"#);
    }
    if !style.widow_control() {
        xml.push_str(r#"<w:widowControl w:val="0"/>"#);
    }
}

/// Tabs, spacing, indentation and alignment.
fn write_layout(xml: &mut String, style: &ParagraphStyle) -> Result<()> {
    if !style.tabs().is_empty() {
        xml.push_str("<w:tabs>");
        for tab in style.tabs() {
            write!(xml, r#"<w:tab w:val="{}""#, tab.kind().to_xml())?;
            if let Some(leader) = tab.leader() {
                write!(xml, r#" w:leader="{}""#, leader.to_xml())?;
            }
            write_whole_attr(xml, "w:pos", tab.position())?;
            xml.push_str("/>");
        }
        xml.push_str("</w:tabs>");
    }

    let line = style.spacing();
    if style.space_before().is_some() || style.space_after().is_some() || line.is_some() {
        xml.push_str("<w:spacing");
        if let Some(before) = style.space_before() {
            write_whole_attr(xml, "w:before", before)?;
        }
        if let Some(after) = style.space_after() {
            write_whole_attr(xml, "w:after", after)?;
        }
        if let Some(line) = line {
            write_whole_attr(xml, "w:line", line)?;
            let rule = style.line_rule().unwrap_or(LineSpacingRule::Auto);
            write!(xml, r#" w:lineRule="{}""#, rule.to_xml())?;
        }
        xml.push_str("/>");
    }

    let ind = style.indentation();
    if !ind.is_empty() {
        xml.push_str("<w:ind");
        if let Some(left) = ind.left() {
            write_whole_attr(xml, "w:left", left)?;
        }
        if let Some(right) = ind.right() {
            write_whole_attr(xml, "w:right", right)?;
        }
        if let Some(hanging) = ind.hanging() {
            write_whole_attr(xml, "w:hanging", hanging)?;
        } else if let Some(first_line) = ind.first_line() {
            write_whole_attr(xml, "w:firstLine", first_line)?;
        }
        xml.push_str("/>");
    }

    if let Some(align) = style.align() {
        write!(xml, r#"<w:jc w:val="{}"/>"#, align.to_xml())?;
    }
    Ok(())
}

pub(crate) fn open_paragraph(ctx: &mut PartContext<'_>, props: &ParagraphProps<'_>) -> Result<()> {
    ctx.xml.push_str("<w:p>");
    write_paragraph_props(&mut ctx.xml, props)
}

pub(crate) fn close_paragraph(ctx: &mut PartContext<'_>) {
    ctx.xml.push_str("</w:p>");
}

pub(crate) fn write_text(ctx: &mut PartContext<'_>, text: &Text, inline: bool) -> Result<()> {
    let run = ctx.run_props(text.font_style());
    if inline {
        return write_text_run(&mut ctx.xml, text.text(), run);
    }
    let props = ctx.paragraph_props(text.paragraph_style(), text.font_style());
    open_paragraph(ctx, &props)?;
    write_text_run(&mut ctx.xml, text.text(), run)?;
    close_paragraph(ctx);
    Ok(())
}

/// One paragraph; the run's children write their runs into it.
pub(crate) fn write_text_run_element(ctx: &mut PartContext<'_>, run: &TextRun) -> Result<()> {
    let props = ctx.paragraph_props(run.paragraph_style(), None);
    open_paragraph(ctx, &props)?;
    write_elements(ctx, run.elements(), ContainerKind::TextRun)?;
    close_paragraph(ctx);
    Ok(())
}

/// An empty paragraph, or a line break inside a run. The font applies to the paragraph mark.
pub(crate) fn write_text_break(ctx: &mut PartContext<'_>, text_break: &TextBreak, inline: bool) -> Result<()> {
    if inline {
        ctx.xml.push_str("<w:r><w:br/></w:r>");
        return Ok(());
    }
    if !text_break.has_style() {
        ctx.xml.push_str("<w:p/>");
        return Ok(());
    }
    let mut props = ctx.paragraph_props(text_break.paragraph_style(), text_break.font_style());
    props.mark = ctx.run_props(text_break.font_style());
    open_paragraph(ctx, &props)?;
    close_paragraph(ctx);
    Ok(())
}

pub(crate) fn write_page_break(ctx: &mut PartContext<'_>) {
    ctx.xml.push_str(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#);
}

/// A heading paragraph wrapped in the bookmark the table of contents links to.
pub(crate) fn write_title(ctx: &mut PartContext<'_>, title: &Title) -> Result<()> {
    let name = title_style_name(title.depth());
    let props = ParagraphProps {
        style_id: ctx.registry.contains(&name).then(|| style_id(&name)),
        ..ParagraphProps::default()
    };
    let id = ctx.next_title_bookmark();

    open_paragraph(ctx, &props)?;
    write!(
        ctx.xml,
        r#"<w:bookmarkStart w:id="{}" w:name="_Toc{}"/>"#,
        id,
        TOC_BOOKMARK_BASE + id
    )?;
    write_text_run(&mut ctx.xml, title.text(), None)?;
    write!(ctx.xml, r#"<w:bookmarkEnd w:id="{}"/>"#, id)?;
    ctx.xml.push_str(r#"<w:r><w:fldChar w:fldCharType="end"/></w:r>"#);
    close_paragraph(ctx);
    Ok(())
}

pub(crate) fn write_list_item(ctx: &mut PartContext<'_>, item: &ListItem) -> Result<()> {
    let mut props = ctx.paragraph_props(item.paragraph_style(), item.font_style());
    let num_id = ctx.list_num_id(item.list_style());
    props.numbering = Some((item.depth(), num_id));
    let run = ctx.run_props(item.font_style());

    open_paragraph(ctx, &props)?;
    write_text_run(&mut ctx.xml, item.text(), run)?;
    close_paragraph(ctx);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{StyleProperties, Tab, TabType};
    use crate::style_map;

    fn ppr(style: &ParagraphStyle) -> String {
        let mut xml = String::new();
        let props = ParagraphProps {
            style: Some(style),
            ..ParagraphProps::default()
        };
        write_paragraph_props(&mut xml, &props).unwrap();
        xml
    }

    #[test]
    fn test_empty_props_write_nothing() {
        assert_eq!(ppr(&ParagraphStyle::default()), "");
    }

    #[test]
    fn test_booleans() {
        let style = ParagraphStyle::from_map(&style_map! { "widowControl" => false, "keepNext" => true });
        assert_eq!(
            ppr(&style),
            r#"<w:pPr><w:keepNext w:val="1"/><w:widowControl w:val="0"/></w:pPr>"#
        );
    }

    #[test]
    fn test_layout_order() {
        let mut style = ParagraphStyle::from_map(&style_map! {
            "align" => "justify",
            "indent" => 120,
            "hanging" => 60,
            "spaceAfter" => 240,
            "lineHeight" => 1.5,
        });
        style.add_tab(Tab::new(TabType::Right, 9062.0));
        assert_eq!(
            ppr(&style),
            concat!(
                r#"<w:pPr><w:tabs><w:tab w:val="right" w:pos="9062"/></w:tabs>"#,
                r#"<w:spacing w:after="240" w:line="360" w:lineRule="auto"/>"#,
                r#"<w:ind w:left="120" w:hanging="60"/><w:jc w:val="both"/></w:pPr>"#,
            )
        );
    }

    #[test]
    fn test_style_id_and_numbering_first() {
        let style = ParagraphStyle::from_map(&style_map! { "keepLines" => true });
        let props = ParagraphProps {
            style_id: Some("Quote".into()),
            style: Some(&style),
            numbering: Some((1, 7)),
            ..ParagraphProps::default()
        };
        let mut xml = String::new();
        write_paragraph_props(&mut xml, &props).unwrap();
        assert_eq!(
            xml,
            concat!(
                r#"<w:pPr><w:pStyle w:val="Quote"/><w:keepLines w:val="1"/>"#,
                r#"<w:numPr><w:ilvl w:val="1"/><w:numId w:val="7"/></w:numPr></w:pPr>"#,
            )
        );
    }
}
