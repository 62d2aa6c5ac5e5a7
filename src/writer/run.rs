//! Runs: character properties, text runs and hyperlinks.
use std::fmt::Write;

use super::RelationshipKind;
use super::context::{PartContext, RunProps};
use super::paragraph::{close_paragraph, open_paragraph};
use crate::common::Result;
use crate::common::unit::point_to_half_point;
use crate::common::xml::{escape_text, escape_xml, write_whole};
use crate::element::Link;
use crate::style::{FontStyle, XmlEnum, style_id};

/// Write `w:rPr` for a run; nothing when there is nothing to say.
pub(crate) fn write_run_props(xml: &mut String, props: Option<RunProps<'_>>) -> Result<()> {
    match props {
        Some(RunProps::Named(name)) => {
            write!(xml, r#"<w:rPr><w:rStyle w:val="{}"/></w:rPr>"#, escape_xml(&style_id(name)))?;
        },
        Some(RunProps::Inline(font)) if !font.is_plain() => {
            xml.push_str("<w:rPr>");
            write_font_props(xml, font)?;
            xml.push_str("</w:rPr>");
        },
        _ => {},
    }
    Ok(())
}

/// Children of `w:rPr` for a font, in schema order.
pub(crate) fn write_font_props(xml: &mut String, font: &FontStyle) -> Result<()> {
    if font.name().is_some() || font.hint().is_some() {
        xml.push_str("<w:rFonts");
        if let Some(name) = font.name() {
            let name = escape_xml(name);
            write!(
                xml,
                r#" w:ascii="{0}" w:hAnsi="{0}" w:eastAsia="{0}" w:cs="{0}""#,
                name
            )?;
        }
        if let Some(hint) = font.hint() {
            write!(xml, r#" w:hint="{}""#, hint.to_xml())?;
        }
        xml.push_str("/>");
    }
    if font.bold() {
        xml.push_str("<w:b/><w:bCs/>");
    }
    if font.italic() {
        xml.push_str("<w:i/><w:iCs/>");
    }
    if font.all_caps() {
        xml.push_str("<w:caps/>");
    }
    if font.small_caps() {
        xml.push_str("<w:smallCaps/>");
    }
    if font.strikethrough() {
        xml.push_str("<w:strike/>");
    }
    if font.double_strikethrough() {
        xml.push_str("<w:dstrike/>");
    }
    if let Some(color) = font.color() {
        write!(xml, r#"<w:color w:val="{}"/>"#, escape_xml(color))?;
    }
    if let Some(size) = font.size() {
        let half_points = point_to_half_point(size);
        xml.push_str(r#"<w:sz w:val=""#);
        write_whole(xml, half_points);
        xml.push_str(r#""/><w:szCs w:val=""#);
        write_whole(xml, half_points);
        xml.push_str(r#""/>"#);
    }
    if let Some(highlight) = font.fg_color() {
        write!(xml, r#"<w:highlight w:val="{}"/>"#, highlight.to_xml())?;
    }
    if let Some(underline) = font.underline() {
        write!(xml, r#"<w:u w:val="{}"/>"#, underline.to_xml())?;
    }
    if let Some(fill) = font.bg_color() {
        write!(xml, r#"<w:shd w:val="clear" w:color="auto" w:fill="{}"/>"#, escape_xml(fill))?;
    }
    if font.super_script() {
        xml.push_str(r#"<w:vertAlign w:val="superscript"/>"#);
    } else if font.sub_script() {
        xml.push_str(r#"<w:vertAlign w:val="subscript"/>"#);
    }
    Ok(())
}

/// `<w:r>` holding `text`.
pub(crate) fn write_text_run(xml: &mut String, text: &str, props: Option<RunProps<'_>>) -> Result<()> {
    xml.push_str("<w:r>");
    write_run_props(xml, props)?;
    write!(xml, r#"<w:t xml:space="preserve">{}</w:t></w:r>"#, escape_text(text))?;
    Ok(())
}

/// A run holding only a field character of `kind` (`begin`, `separate`, `end`).
pub(crate) fn write_field_char(xml: &mut String, kind: &str, props: Option<RunProps<'_>>) -> Result<()> {
    xml.push_str("<w:r>");
    write_run_props(xml, props)?;
    write!(xml, r#"<w:fldChar w:fldCharType="{}"/></w:r>"#, kind)?;
    Ok(())
}

/// A run holding a field instruction.
pub(crate) fn write_instr_text(xml: &mut String, instr: &str, props: Option<RunProps<'_>>) -> Result<()> {
    xml.push_str("<w:r>");
    write_run_props(xml, props)?;
    write!(xml, r#"<w:instrText xml:space="preserve">{}</w:instrText></w:r>"#, escape_text(instr))?;
    Ok(())
}

pub(crate) fn write_link(ctx: &mut PartContext<'_>, link: &Link, inline: bool) -> Result<()> {
    if !inline {
        let props = ctx.paragraph_props(link.paragraph_style(), link.font_style());
        open_paragraph(ctx, &props)?;
    }
    let rel_id = ctx.add_relationship(RelationshipKind::Hyperlink, link.source());
    write!(ctx.xml, r#"<w:hyperlink r:id="{}" w:history="1">"#, rel_id)?;
    let run = ctx.run_props(link.font_style());
    write_text_run(&mut ctx.xml, link.text(), run)?;
    ctx.xml.push_str("</w:hyperlink>");
    if !inline {
        close_paragraph(ctx);
    }
    Ok(())
}
