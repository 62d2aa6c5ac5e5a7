//! Footnote and endnote references and the notes parts.
use std::fmt::Write;

use super::body::write_elements;
use super::context::PartContext;
use super::paragraph::{close_paragraph, open_paragraph};
use super::{PartScope, ROOT_NAMESPACES, XML_DECLARATION};
use crate::common::Result;
use crate::element::{Container, Note, NoteKind};

/// The reference mark in the main body. Notes can only be numbered there; elsewhere they are
/// dropped.
pub(crate) fn write_reference(ctx: &mut PartContext<'_>, note: &Note, inline: bool) -> Result<()> {
    if ctx.scope != PartScope::Document {
        log::warn!("{} outside the document body cannot be referenced; skipped", note.kind().tag());
        return Ok(());
    }
    let id = ctx.next_note_id(note.kind());
    if !inline {
        ctx.xml.push_str("<w:p>");
    }
    write!(
        ctx.xml,
        r#"<w:r><w:rPr><w:rStyle w:val="{}"/></w:rPr><w:{}Reference w:id="{}"/></w:r>"#,
        note.kind().reference_style(),
        note.kind().tag(),
        id
    )?;
    if !inline {
        ctx.xml.push_str("</w:p>");
    }
    Ok(())
}

/// `w:footnotes` / `w:endnotes`: the two separators, then every note in reference order.
pub(crate) fn write_notes_part(ctx: &mut PartContext<'_>, kind: NoteKind, notes: &[&Note]) -> Result<()> {
    let tag = kind.tag();
    ctx.xml.push_str(XML_DECLARATION);
    write!(ctx.xml, "<w:{}s{}>", tag, ROOT_NAMESPACES)?;
    write!(
        ctx.xml,
        concat!(
            r#"<w:{0} w:type="separator" w:id="-1"><w:p><w:pPr><w:spacing w:after="0" w:line="240" w:lineRule="auto"/></w:pPr>"#,
            r#"<w:r><w:separator/></w:r></w:p></w:{0}>"#,
            r#"<w:{0} w:type="continuationSeparator" w:id="0"><w:p><w:pPr><w:spacing w:after="0" w:line="240" w:lineRule="auto"/></w:pPr>"#,
            r#"<w:r><w:continuationSeparator/></w:r></w:p></w:{0}>"#,
        ),
        tag
    )?;

    for (i, note) in notes.iter().enumerate() {
        write!(ctx.xml, r#"<w:{} w:id="{}">"#, tag, i + 1)?;
        let props = ctx.paragraph_props(note.paragraph_style(), None);
        open_paragraph(ctx, &props)?;
        write!(
            ctx.xml,
            r#"<w:r><w:rPr><w:rStyle w:val="{}"/></w:rPr><w:{}Ref/></w:r>"#,
            kind.reference_style(),
            tag
        )?;
        ctx.xml.push_str(r#"<w:r><w:t xml:space="preserve"> </w:t></w:r>"#);
        write_elements(ctx, note.elements(), note.container_kind())?;
        close_paragraph(ctx);
        write!(ctx.xml, "</w:{}>", tag)?;
    }

    write!(ctx.xml, "</w:{}s>", tag)?;
    Ok(())
}
