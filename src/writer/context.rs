//! Per-part writing state.
use super::numbering::NumberingAllocator;
use super::relmap::RelationshipMapper;
use super::{PartScope, RelationshipKind};
use crate::element::{Container, Element, Note, NoteKind, Section, Title};
use crate::style::{FontStyle, ListItemStyle, ParagraphStyle, StyleRef, StyleRegistry, style_id};

/// Bookmark ids of titles are offset by this in their names.
pub(crate) const TOC_BOOKMARK_BASE: usize = 252634154;

/// Paragraph properties gathered for one `w:pPr`.
#[derive(Debug, Default)]
pub(crate) struct ParagraphProps<'s> {
    pub style_id: Option<String>,
    pub style: Option<&'s ParagraphStyle>,
    pub numbering: Option<(u32, u32)>,
    pub outline_level: Option<u32>,
    pub mark: Option<RunProps<'s>>,
}

/// Run properties for one `w:rPr`: a character style id or inline font properties.
#[derive(Debug, Clone, Copy)]
pub(crate) enum RunProps<'s> {
    Named(&'s str),
    Inline(&'s FontStyle),
}

pub(crate) struct PartContext<'a> {
    pub xml: String,
    pub registry: &'a StyleRegistry,
    pub scope: PartScope,
    rels: RelationshipMapper,
    numbering: &'a mut dyn NumberingAllocator,
    titles: &'a [&'a Title],
    title_cursor: usize,
    footnotes: u32,
    endnotes: u32,
    objects: u32,
    pub headers: u32,
    pub footers: u32,
}

impl<'a> PartContext<'a> {
    pub fn new(
        scope: PartScope,
        registry: &'a StyleRegistry,
        numbering: &'a mut dyn NumberingAllocator,
        titles: &'a [&'a Title],
        relationship_offset: u32,
    ) -> Self {
        Self {
            xml: String::with_capacity(4096),
            registry,
            scope,
            rels: RelationshipMapper::new(relationship_offset),
            numbering,
            titles,
            title_cursor: 0,
            footnotes: 0,
            endnotes: 0,
            objects: 0,
            headers: 0,
            footers: 0,
        }
    }

    pub fn add_relationship(&mut self, kind: RelationshipKind, target: &str) -> String {
        self.rels.add(kind, target)
    }

    pub fn into_parts(self) -> (String, RelationshipMapper) {
        (self.xml, self.rels)
    }

    /// Style id for a registry name, `None` when the name is not registered.
    pub fn named_style(&self, name: &str) -> Option<String> {
        if self.registry.contains(name) {
            Some(style_id(name))
        } else {
            log::debug!("style '{}' is not registered; reference dropped", name);
            None
        }
    }

    pub fn run_props<'s>(&self, font: Option<&'s StyleRef<FontStyle>>) -> Option<RunProps<'s>> {
        match font? {
            StyleRef::Inline(style) => Some(RunProps::Inline(style)),
            StyleRef::Named(name) => {
                if self.registry.contains(name) {
                    Some(RunProps::Named(name))
                } else {
                    log::debug!("font style '{}' is not registered; reference dropped", name);
                    None
                }
            },
        }
    }

    /// Paragraph properties of an element. Without its own paragraph style, an inline font's
    /// paragraph style applies.
    pub fn paragraph_props<'s>(
        &mut self,
        paragraph: Option<&'s StyleRef<ParagraphStyle>>,
        font: Option<&'s StyleRef<FontStyle>>,
    ) -> ParagraphProps<'s> {
        let mut props = ParagraphProps::default();
        match paragraph {
            Some(StyleRef::Inline(style)) => props.style = Some(style),
            Some(StyleRef::Named(name)) => props.style_id = self.named_style(name),
            None => props.style = font.and_then(|f| f.inline()).and_then(FontStyle::paragraph),
        }
        if let Some(style) = props.style {
            props.numbering = self.paragraph_numbering(style);
        }
        props
    }

    /// Numbering of a paragraph style bound to a numbering style.
    pub fn paragraph_numbering(&mut self, style: &ParagraphStyle) -> Option<(u32, u32)> {
        let name = style.num_style()?;
        let level = style.num_level().max(0) as u32;
        Some((level, self.numbering.num_id(&ListItemStyle::numbering(name))))
    }

    pub fn list_num_id(&mut self, style: &ListItemStyle) -> u32 {
        self.numbering.num_id(style)
    }

    pub fn titles(&self) -> &'a [&'a Title] {
        self.titles
    }

    /// Bookmark id for the next title written.
    pub fn next_title_bookmark(&mut self) -> usize {
        let id = self.title_cursor;
        self.title_cursor += 1;
        id
    }

    /// Next note id of `kind`. Ids start at 1; 0 and -1 are the separators.
    pub fn next_note_id(&mut self, kind: NoteKind) -> u32 {
        let counter = match kind {
            NoteKind::Footnote => &mut self.footnotes,
            NoteKind::Endnote => &mut self.endnotes,
        };
        *counter += 1;
        *counter
    }

    /// Next embedded object number within this part.
    pub fn next_object(&mut self) -> u32 {
        self.objects += 1;
        self.objects
    }
}

/// Titles of the document in writing order.
pub(crate) fn collect_titles(sections: &[Section]) -> Vec<&Title> {
    sections
        .iter()
        .flat_map(|section| section.elements())
        .filter_map(|element| match element {
            Element::Title(title) => Some(title),
            _ => None,
        })
        .collect()
}

/// Notes of `kind` reachable from section bodies, in the order their references are written.
pub(crate) fn collect_notes(sections: &[Section], kind: NoteKind) -> Vec<&Note> {
    fn walk<'d>(elements: &'d [Element], kind: NoteKind, out: &mut Vec<&'d Note>) {
        for element in elements {
            match element {
                Element::Note(note) if note.kind() == kind => out.push(note),
                Element::TextRun(run) => walk(run.elements(), kind, out),
                Element::Table(table) => {
                    for row in table.rows() {
                        for cell in row.cells() {
                            walk(cell.elements(), kind, out);
                        }
                    }
                },
                _ => {},
            }
        }
    }

    let mut out = Vec::new();
    for section in sections {
        walk(section.elements(), kind, &mut out);
    }
    out
}
