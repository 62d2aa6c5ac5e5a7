//! Element dispatch.
use super::context::PartContext;
use super::{field, media, note, paragraph, run, table};
use crate::common::Result;
use crate::element::{ContainerKind, Element};

/// Write `elements` of a container of `kind`. Children of text runs and notes write runs
/// into the enclosing paragraph; everything else writes whole blocks.
pub(crate) fn write_elements(ctx: &mut PartContext<'_>, elements: &[Element], kind: ContainerKind) -> Result<()> {
    let inline = kind.is_inline();
    for element in elements {
        match element {
            Element::Text(text) => paragraph::write_text(ctx, text, inline)?,
            Element::TextRun(text_run) => paragraph::write_text_run_element(ctx, text_run)?,
            Element::Title(title) => paragraph::write_title(ctx, title)?,
            Element::Table(tbl) => table::write_table(ctx, tbl)?,
            Element::Image(image) => media::write_image(ctx, image, inline)?,
            Element::Object(object) => media::write_object(ctx, object, inline)?,
            Element::ListItem(item) => paragraph::write_list_item(ctx, item)?,
            Element::Toc(toc) => field::write_toc(ctx, toc)?,
            Element::PageBreak => paragraph::write_page_break(ctx),
            Element::TextBreak(text_break) => paragraph::write_text_break(ctx, text_break, inline)?,
            Element::CheckBox(checkbox) => field::write_checkbox(ctx, checkbox, inline)?,
            Element::Link(link) => run::write_link(ctx, link, inline)?,
            Element::PreserveText(text) => field::write_preserve_text(ctx, text)?,
            Element::Note(n) => note::write_reference(ctx, n, inline)?,
        }
    }
    Ok(())
}
