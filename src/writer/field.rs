//! Field-based elements: table of contents, form checkboxes and preserved field text.
use std::fmt::Write;

use super::context::{PartContext, ParagraphProps, TOC_BOOKMARK_BASE};
use super::paragraph::{close_paragraph, open_paragraph};
use super::run::{write_field_char, write_instr_text, write_run_props, write_text_run};
use crate::common::Result;
use crate::common::xml::escape_xml;
use crate::element::{CheckBox, PreserveText, Segment, Toc};
use crate::style::{FontStyle, Tab, TabType, XmlEnum};

/// One paragraph per listed title, each linking to the title's bookmark with its page number.
/// The first paragraph opens the TOC field and a trailing paragraph closes it.
pub(crate) fn write_toc(ctx: &mut PartContext<'_>, toc: &Toc) -> Result<()> {
    let entries: Vec<_> = ctx
        .titles()
        .iter()
        .enumerate()
        .filter(|(_, title)| toc.includes(title.depth()))
        .collect();
    let run = ctx.run_props(toc.font_style());
    let base = toc.font_style().and_then(|f| f.inline()).and_then(FontStyle::paragraph);
    let instr = format!(r#"TOC \o "{}-{}" \h \z \u"#, toc.min_depth(), toc.max_depth());
    let settings = toc.style();

    if entries.is_empty() {
        ctx.xml.push_str("<w:p>");
        write_field_char(&mut ctx.xml, "begin", None)?;
        write_instr_text(&mut ctx.xml, &instr, None)?;
        write_field_char(&mut ctx.xml, "separate", None)?;
        write_field_char(&mut ctx.xml, "end", None)?;
        ctx.xml.push_str("</w:p>");
        return Ok(());
    }

    for (i, (id, title)) in entries.into_iter().enumerate() {
        let mut style = base.cloned().unwrap_or_default();
        let mut tab = Tab::new(TabType::Right, settings.tab_pos());
        tab.set_leader(settings.tab_leader().to_xml());
        style.add_tab(tab);
        style.set_indent(f64::from(title.depth() - 1) * settings.indent());
        let props = ParagraphProps {
            style: Some(&style),
            ..ParagraphProps::default()
        };

        open_paragraph(ctx, &props)?;
        if i == 0 {
            write_field_char(&mut ctx.xml, "begin", None)?;
            write_instr_text(&mut ctx.xml, &instr, None)?;
            write_field_char(&mut ctx.xml, "separate", None)?;
        }
        let anchor = format!("_Toc{}", TOC_BOOKMARK_BASE + id);
        write!(ctx.xml, r#"<w:hyperlink w:anchor="{}" w:history="1">"#, anchor)?;
        write_text_run(&mut ctx.xml, title.text(), run)?;
        ctx.xml.push_str("<w:r>");
        write_run_props(&mut ctx.xml, run)?;
        ctx.xml.push_str("<w:tab/></w:r>");
        write_field_char(&mut ctx.xml, "begin", run)?;
        write_instr_text(&mut ctx.xml, &format!(r#"PAGEREF {} \h"#, anchor), run)?;
        write_field_char(&mut ctx.xml, "end", run)?;
        ctx.xml.push_str("</w:hyperlink>");
        close_paragraph(ctx);
    }

    ctx.xml.push_str("<w:p>");
    write_field_char(&mut ctx.xml, "end", None)?;
    ctx.xml.push_str("</w:p>");
    Ok(())
}

/// A FORMCHECKBOX field followed by the label text.
pub(crate) fn write_checkbox(ctx: &mut PartContext<'_>, checkbox: &CheckBox, inline: bool) -> Result<()> {
    let run = ctx.run_props(checkbox.font_style());
    if !inline {
        let props = ctx.paragraph_props(checkbox.paragraph_style(), checkbox.font_style());
        open_paragraph(ctx, &props)?;
    }

    ctx.xml.push_str("<w:r>");
    write_run_props(&mut ctx.xml, run)?;
    write!(
        ctx.xml,
        concat!(
            r#"<w:fldChar w:fldCharType="begin"><w:ffData><w:name w:val="{}"/><w:enabled/>"#,
            r#"<w:calcOnExit w:val="0"/><w:checkBox><w:sizeAuto/><w:default w:val="{}"/></w:checkBox>"#,
            r#"</w:ffData></w:fldChar></w:r>"#,
        ),
        escape_xml(checkbox.name()),
        u8::from(checkbox.checked())
    )?;
    write_instr_text(&mut ctx.xml, " FORMCHECKBOX ", run)?;
    write_field_char(&mut ctx.xml, "separate", run)?;
    write_field_char(&mut ctx.xml, "end", run)?;
    write_text_run(&mut ctx.xml, checkbox.text(), run)?;

    if !inline {
        close_paragraph(ctx);
    }
    Ok(())
}

/// Literal text runs with each `{FIELD}` written as a live field.
pub(crate) fn write_preserve_text(ctx: &mut PartContext<'_>, text: &PreserveText) -> Result<()> {
    let run = ctx.run_props(text.font_style());
    let props = ctx.paragraph_props(text.paragraph_style(), text.font_style());
    open_paragraph(ctx, &props)?;
    for segment in text.segments() {
        match segment {
            Segment::Text(literal) => write_text_run(&mut ctx.xml, literal, run)?,
            Segment::Field(instr) => {
                write_field_char(&mut ctx.xml, "begin", run)?;
                write_instr_text(&mut ctx.xml, instr, run)?;
                write_field_char(&mut ctx.xml, "separate", run)?;
                write_field_char(&mut ctx.xml, "end", run)?;
            },
        }
    }
    close_paragraph(ctx);
    Ok(())
}
