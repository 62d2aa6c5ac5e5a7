//! Images, watermarks and embedded objects, drawn as VML shapes.
use std::fmt::Write;

use super::RelationshipKind;
use super::context::PartContext;
use crate::common::Result;
use crate::common::xml::{escape_xml, write_int, write_num};
use crate::element::{Image, Object};
use crate::style::{ImageStyle, WrappingStyle, XmlEnum};

/// Shapes behind the text sit below this z-index.
const BEHIND_Z_INDEX: i64 = -251658752;
const FRONT_Z_INDEX: i64 = 251659264;
/// Shape ids of embedded objects count up from here.
const OBJECT_SHAPE_BASE: u32 = 1024;
const OBJECT_ID_BASE: u32 = 1325353440;

fn push_px(css: &mut String, property: &str, px: f64) {
    css.push_str(property);
    css.push(':');
    write_num(css, px);
    css.push_str("px;");
}

fn push_z_index(css: &mut String, z_index: i64) {
    css.push_str("z-index:");
    write_int(css, z_index);
    css.push(';');
}

/// CSS-like `style` attribute of an image shape.
fn shape_style(style: &ImageStyle) -> String {
    let mut css = String::new();
    if let Some(width) = style.width() {
        push_px(&mut css, "width", width);
    }
    if let Some(height) = style.height() {
        push_px(&mut css, "height", height);
    }
    if let Some(top) = style.margin_top() {
        push_px(&mut css, "margin-top", top);
    }
    if let Some(left) = style.margin_left() {
        push_px(&mut css, "margin-left", left);
    }
    match style.wrapping_style() {
        WrappingStyle::Inline => {},
        WrappingStyle::Behind => {
            css.push_str("position:absolute;");
            push_z_index(&mut css, BEHIND_Z_INDEX);
        },
        WrappingStyle::InFront | WrappingStyle::Square | WrappingStyle::Tight => {
            css.push_str("position:absolute;");
            push_z_index(&mut css, FRONT_Z_INDEX);
            css.push_str("mso-position-horizontal-relative:text;mso-position-vertical-relative:text;");
        },
    }
    if css.ends_with(';') {
        css.pop();
    }
    css
}

fn write_alignment(xml: &mut String, style: &ImageStyle) -> Result<()> {
    if let Some(align) = style.align() {
        write!(xml, r#"<w:pPr><w:jc w:val="{}"/></w:pPr>"#, align.to_xml())?;
    }
    Ok(())
}

pub(crate) fn write_image(ctx: &mut PartContext<'_>, image: &Image, inline: bool) -> Result<()> {
    if image.is_watermark() {
        return write_watermark(ctx, image);
    }
    let rel_id = ctx.add_relationship(RelationshipKind::Image, image.source());
    let style = image.style();

    if !inline {
        ctx.xml.push_str("<w:p>");
        write_alignment(&mut ctx.xml, style)?;
    }
    write!(
        ctx.xml,
        r##"<w:r><w:pict><v:shape type="#_x0000_t75" style="{}"><v:imagedata r:id="{}" o:title=""/>"##,
        shape_style(style),
        rel_id
    )?;
    match style.wrapping_style() {
        wrap @ (WrappingStyle::Square | WrappingStyle::Tight) => {
            write!(ctx.xml, r#"<w10:wrap type="{}"/>"#, wrap.to_xml())?;
        },
        _ => {},
    }
    ctx.xml.push_str("</v:shape></w:pict></w:r>");
    if !inline {
        ctx.xml.push_str("</w:p>");
    }
    Ok(())
}

/// A page-relative shape behind the text.
fn write_watermark(ctx: &mut PartContext<'_>, image: &Image) -> Result<()> {
    let rel_id = ctx.add_relationship(RelationshipKind::Image, image.source());
    let style = image.style();

    let mut css = String::from("position:absolute;");
    if let Some(width) = style.width() {
        push_px(&mut css, "width", width);
    }
    if let Some(height) = style.height() {
        push_px(&mut css, "height", height);
    }
    push_px(&mut css, "margin-left", style.margin_left().unwrap_or(0.0));
    push_px(&mut css, "margin-top", style.margin_top().unwrap_or(0.0));
    push_z_index(&mut css, BEHIND_Z_INDEX);
    css.push_str("mso-position-horizontal-relative:page;mso-position-vertical-relative:page");

    write!(
        ctx.xml,
        r##"<w:p><w:r><w:pict><v:shape type="#_x0000_t75" style="{}"><v:imagedata r:id="{}" o:title=""/></v:shape></w:pict></w:r></w:p>"##,
        css, rel_id
    )?;
    Ok(())
}

/// An OLE object shown as its icon. Unsupported file types are skipped.
pub(crate) fn write_object(ctx: &mut PartContext<'_>, object: &Object, inline: bool) -> Result<()> {
    let Some(prog_id) = object.prog_id() else {
        log::warn!("object '{}' is not an embeddable type; skipped", object.source());
        return Ok(());
    };
    let n = ctx.next_object();
    let icon_id = ctx.add_relationship(RelationshipKind::Image, &object.icon());
    let object_id = ctx.add_relationship(RelationshipKind::OleObject, object.source());
    let shape_id = format!("_x0000_i{}", OBJECT_SHAPE_BASE + n);
    let style = object.style();

    if !inline {
        ctx.xml.push_str("<w:p>");
        write_alignment(&mut ctx.xml, style)?;
    }
    write!(ctx.xml, r##"<w:r><w:object><v:shape id="{}" type="#_x0000_t75""##, shape_id)?;
    let css = shape_style(style);
    if !css.is_empty() {
        write!(ctx.xml, r#" style="{}""#, css)?;
    }
    write!(
        ctx.xml,
        r#" o:ole=""><v:imagedata r:id="{}" o:title=""/></v:shape>"#,
        icon_id
    )?;
    write!(
        ctx.xml,
        r#"<o:OLEObject Type="Embed" ProgID="{}" ShapeID="{}" DrawAspect="Icon" ObjectID="_{}" r:id="{}"/>"#,
        escape_xml(prog_id),
        shape_id,
        OBJECT_ID_BASE + n,
        object_id
    )?;
    ctx.xml.push_str("</w:object></w:r>");
    if !inline {
        ctx.xml.push_str("</w:p>");
    }
    Ok(())
}
