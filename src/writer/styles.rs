//! The styles part: document defaults and the registry's named styles.
use std::fmt::Write;

use super::context::{PartContext, ParagraphProps};
use super::paragraph::write_paragraph_props;
use super::run::write_font_props;
use super::table::write_table_props;
use super::{ROOT_NAMESPACES, WriterOptions, XML_DECLARATION};
use crate::common::Result;
use crate::common::unit::point_to_half_point;
use crate::common::xml::{escape_xml, write_whole};
use crate::style::{
    DEFAULT_PARAGRAPH_STYLE, FontKind, FontStyle, ParagraphStyle, Style, TableStyle, style_id,
};

pub(crate) fn write_styles_part(ctx: &mut PartContext<'_>, options: &WriterOptions) -> Result<()> {
    ctx.xml.push_str(XML_DECLARATION);
    write!(ctx.xml, "<w:styles{}>", ROOT_NAMESPACES)?;
    write_doc_defaults(&mut ctx.xml, options)?;

    let normal = ctx
        .registry
        .get_style(DEFAULT_PARAGRAPH_STYLE)
        .and_then(Style::as_paragraph);
    ctx.xml.push_str(r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/>"#);
    if let Some(normal) = normal {
        write_paragraph_style_props(ctx, normal, None)?;
    }
    ctx.xml.push_str("</w:style>");

    let registry = ctx.registry;
    for (name, style) in registry.get_styles() {
        if name == DEFAULT_PARAGRAPH_STYLE {
            continue;
        }
        match style {
            Style::Paragraph(paragraph) => write_paragraph_style(ctx, name, paragraph)?,
            Style::Font(font) => write_font_style(ctx, name, font)?,
            Style::Table(table) => write_table_style(&mut ctx.xml, name, table)?,
        }
    }

    ctx.xml.push_str("</w:styles>");
    Ok(())
}

fn write_doc_defaults(xml: &mut String, options: &WriterOptions) -> Result<()> {
    let font = escape_xml(&options.default_font_name);
    write!(
        xml,
        r#"<w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:eastAsia="{0}" w:cs="{0}"/>"#,
        font
    )?;
    let half_points = point_to_half_point(options.default_font_size);
    xml.push_str(r#"<w:sz w:val=""#);
    write_whole(xml, half_points);
    xml.push_str(r#""/><w:szCs w:val=""#);
    write_whole(xml, half_points);
    xml.push_str(r#""/></w:rPr></w:rPrDefault></w:docDefaults>"#);
    Ok(())
}

fn write_paragraph_style_props(
    ctx: &mut PartContext<'_>,
    style: &ParagraphStyle,
    outline_level: Option<u32>,
) -> Result<()> {
    let props = ParagraphProps {
        style: Some(style),
        numbering: ctx.paragraph_numbering(style),
        outline_level,
        ..ParagraphProps::default()
    };
    write_paragraph_props(&mut ctx.xml, &props)
}

fn open_style(xml: &mut String, kind: &str, name: &str, display_name: &str) -> Result<()> {
    write!(
        xml,
        r#"<w:style w:type="{}" w:customStyle="1" w:styleId="{}"><w:name w:val="{}"/>"#,
        kind,
        escape_xml(&style_id(name)),
        escape_xml(display_name)
    )?;
    Ok(())
}

fn write_paragraph_style(ctx: &mut PartContext<'_>, name: &str, style: &ParagraphStyle) -> Result<()> {
    open_style(&mut ctx.xml, "paragraph", name, name)?;
    if style.based_on() != name {
        write!(ctx.xml, r#"<w:basedOn w:val="{}"/>"#, escape_xml(&style_id(style.based_on())))?;
    }
    if let Some(next) = style.next() {
        write!(ctx.xml, r#"<w:next w:val="{}"/>"#, escape_xml(&style_id(next)))?;
    }
    ctx.xml.push_str("<w:qFormat/>");
    write_paragraph_style_props(ctx, style, None)?;
    ctx.xml.push_str("</w:style>");
    Ok(())
}

/// Title level of a `Heading_{n}` name.
fn title_level(name: &str) -> Option<u32> {
    name.strip_prefix("Heading_")?.parse().ok()
}

/// Character style, or a paragraph style when the font carries paragraph formatting or
/// styles a title.
fn write_font_style(ctx: &mut PartContext<'_>, name: &str, font: &FontStyle) -> Result<()> {
    let level = (font.kind() == FontKind::Title).then(|| title_level(name)).flatten();
    let is_paragraph = level.is_some() || font.paragraph().is_some();

    if is_paragraph {
        let display = name.replace('_', " ");
        open_style(&mut ctx.xml, "paragraph", name, &display)?;
        write!(
            ctx.xml,
            r#"<w:basedOn w:val="{0}"/><w:next w:val="{0}"/><w:qFormat/>"#,
            DEFAULT_PARAGRAPH_STYLE
        )?;
        let outline = level.map(|l| l.saturating_sub(1));
        match font.paragraph() {
            Some(paragraph) => write_paragraph_style_props(ctx, paragraph, outline)?,
            None => {
                let props = ParagraphProps {
                    outline_level: outline,
                    ..ParagraphProps::default()
                };
                write_paragraph_props(&mut ctx.xml, &props)?;
            },
        }
    } else {
        open_style(&mut ctx.xml, "character", name, name)?;
        ctx.xml.push_str("<w:qFormat/>");
    }

    if !font.is_plain() {
        ctx.xml.push_str("<w:rPr>");
        write_font_props(&mut ctx.xml, font)?;
        ctx.xml.push_str("</w:rPr>");
    }
    ctx.xml.push_str("</w:style>");
    Ok(())
}

fn write_table_style(xml: &mut String, name: &str, table: &TableStyle) -> Result<()> {
    open_style(xml, "table", name, name)?;
    xml.push_str(r#"<w:uiPriority w:val="99"/>"#);
    write_table_props(xml, None, Some(table), false)?;
    if let Some(first_row) = table.first_row() {
        xml.push_str(r#"<w:tblStylePr w:type="firstRow">"#);
        write_table_props(xml, None, Some(first_row), false)?;
        if let Some(fill) = first_row.bg_color() {
            write!(
                xml,
                r#"<w:tcPr><w:shd w:val="clear" w:color="auto" w:fill="{}"/></w:tcPr>"#,
                escape_xml(fill)
            )?;
        }
        xml.push_str("</w:tblStylePr>");
    }
    xml.push_str("</w:style>");
    Ok(())
}
