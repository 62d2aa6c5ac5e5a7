use super::Element;
use crate::style::{ParagraphStyle, StyleRef};

/// Which notes part a [`Note`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteKind {
    Footnote,
    Endnote,
}

impl NoteKind {
    /// Schema element name, also the part's local name stem.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Footnote => "footnote",
            Self::Endnote => "endnote",
        }
    }

    /// Character style of the reference mark.
    pub const fn reference_style(self) -> &'static str {
        match self {
            Self::Footnote => "FootnoteReference",
            Self::Endnote => "EndnoteReference",
        }
    }
}

/// A footnote or endnote: a paragraph of inline elements.
#[derive(Debug, Clone)]
pub struct Note {
    kind: NoteKind,
    pub(crate) paragraph_style: Option<StyleRef<ParagraphStyle>>,
    pub(crate) elements: Vec<Element>,
}

impl Note {
    pub fn new(kind: NoteKind) -> Self {
        Self {
            kind,
            paragraph_style: None,
            elements: Vec::new(),
        }
    }

    pub fn kind(&self) -> NoteKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Container;

    #[test]
    fn test_kind_tags() {
        assert_eq!(NoteKind::Footnote.tag(), "footnote");
        assert_eq!(NoteKind::Endnote.reference_style(), "EndnoteReference");
    }

    #[test]
    fn test_note_children() {
        let mut note = Note::new(NoteKind::Footnote);
        note.add_text("Source: ");
        note.add_link("https://example.com").set_text("example");
        note.set_paragraph_style("FootnoteText");
        assert_eq!(note.elements().len(), 2);
        assert_eq!(note.paragraph_style().and_then(|s| s.name()), Some("FootnoteText"));
    }
}
