//! Document model.
//!
//! A [`Document`] owns ordered [`Section`]s; sections own block elements plus their
//! headers and footers. Text runs, table cells and notes are containers of further
//! elements. Which element a container accepts is decided by the methods it offers.

mod document;
mod field;
mod link;
mod list_item;
mod media;
mod note;
mod section;
mod table;
mod text;
mod title;

pub use document::Document;
pub use field::{CheckBox, PreserveText, Segment};
pub use link::Link;
pub use list_item::ListItem;
pub use media::{Image, Object};
pub use note::{Note, NoteKind};
pub use section::{Footer, Header, Section};
pub use table::{Cell, Row, Table};
pub use text::{Text, TextBreak, TextRun};
pub use title::{Title, Toc};

/// A node of the document tree.
#[derive(Debug, Clone)]
pub enum Element {
    Text(Text),
    TextRun(TextRun),
    Title(Title),
    Table(Table),
    Image(Image),
    Object(Object),
    ListItem(ListItem),
    Toc(Toc),
    PageBreak,
    TextBreak(TextBreak),
    CheckBox(CheckBox),
    Link(Link),
    PreserveText(PreserveText),
    Note(Note),
}

/// Where an element lives; decides how the writer frames it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Section,
    Header,
    Footer,
    Cell,
    TextRun,
    Footnote,
    Endnote,
}

impl ContainerKind {
    /// Children of text runs and notes are inline: they share the container's paragraph.
    #[inline]
    pub fn is_inline(self) -> bool {
        matches!(self, Self::TextRun | Self::Footnote | Self::Endnote)
    }
}

/// Read access shared by every container.
pub trait Container {
    fn container_kind(&self) -> ContainerKind;

    fn elements(&self) -> &[Element];

    fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }
}

/// Push an element and hand back a reference to it.
macro_rules! push_element {
    ($self:ident, $variant:ident, $value:expr) => {{
        $self.elements.push($crate::element::Element::$variant($value));
        match $self.elements.last_mut() {
            Some($crate::element::Element::$variant(element)) => element,
            _ => unreachable!(),
        }
    }};
}

/// Generate the `add_*` methods a container accepts.
macro_rules! container {
    (@text) => {
        pub fn add_text(&mut self, text: impl Into<String>) -> &mut $crate::element::Text {
            push_element!(self, Text, $crate::element::Text::new(text))
        }
    };
    (@text_break) => {
        pub fn add_text_break(&mut self) -> &mut $crate::element::TextBreak {
            push_element!(self, TextBreak, $crate::element::TextBreak::default())
        }
    };
    (@text_run) => {
        pub fn add_text_run(&mut self) -> &mut $crate::element::TextRun {
            push_element!(self, TextRun, $crate::element::TextRun::default())
        }
    };
    (@link) => {
        /// Hyperlink to `source`; the link text defaults to the target itself.
        pub fn add_link(&mut self, source: impl Into<String>) -> &mut $crate::element::Link {
            push_element!(self, Link, $crate::element::Link::new(source))
        }
    };
    (@title) => {
        pub fn add_title(&mut self, text: impl Into<String>, depth: u32) -> &mut $crate::element::Title {
            push_element!(self, Title, $crate::element::Title::new(text, depth))
        }
    };
    (@page_break) => {
        pub fn add_page_break(&mut self) {
            self.elements.push($crate::element::Element::PageBreak);
        }
    };
    (@list_item) => {
        pub fn add_list_item(&mut self, text: impl Into<String>, depth: u32) -> &mut $crate::element::ListItem {
            push_element!(self, ListItem, $crate::element::ListItem::new(text, depth))
        }
    };
    (@table) => {
        pub fn add_table(&mut self) -> &mut $crate::element::Table {
            push_element!(self, Table, $crate::element::Table::default())
        }
    };
    (@image) => {
        pub fn add_image(&mut self, source: impl Into<String>) -> &mut $crate::element::Image {
            push_element!(self, Image, $crate::element::Image::new(source))
        }
    };
    (@watermark) => {
        /// Image placed behind the page content.
        pub fn add_watermark(&mut self, source: impl Into<String>) -> &mut $crate::element::Image {
            push_element!(self, Image, $crate::element::Image::watermark(source))
        }
    };
    (@object) => {
        /// Embedded OLE object (spreadsheet, document or presentation file).
        pub fn add_object(&mut self, source: impl Into<String>) -> &mut $crate::element::Object {
            push_element!(self, Object, $crate::element::Object::new(source))
        }
    };
    (@toc) => {
        pub fn add_toc(&mut self) -> &mut $crate::element::Toc {
            push_element!(self, Toc, $crate::element::Toc::default())
        }
    };
    (@notes) => {
        pub fn add_footnote(&mut self) -> &mut $crate::element::Note {
            push_element!(self, Note, $crate::element::Note::new($crate::element::NoteKind::Footnote))
        }

        pub fn add_endnote(&mut self) -> &mut $crate::element::Note {
            push_element!(self, Note, $crate::element::Note::new($crate::element::NoteKind::Endnote))
        }
    };
    (@checkbox) => {
        pub fn add_checkbox(&mut self, name: impl Into<String>, text: impl Into<String>) -> &mut $crate::element::CheckBox {
            push_element!(self, CheckBox, $crate::element::CheckBox::new(name, text))
        }
    };
    (@preserve_text) => {
        /// Text with `{FIELD}` placeholders such as `{PAGE}` or `{NUMPAGES}`.
        pub fn add_preserve_text(&mut self, text: impl Into<String>) -> &mut $crate::element::PreserveText {
            push_element!(self, PreserveText, $crate::element::PreserveText::new(text))
        }
    };
    ($ty:ty => $kind:expr, { $($adder:ident),+ $(,)? }) => {
        impl $ty {
            $(container!(@$adder);)+
        }

        impl $crate::element::Container for $ty {
            fn container_kind(&self) -> $crate::element::ContainerKind {
                $kind
            }

            fn elements(&self) -> &[$crate::element::Element] {
                &self.elements
            }
        }
    };
}

/// Font and paragraph style accessors for elements carrying both.
macro_rules! styled {
    ($($ty:ty),+ $(,)?) => {
        $(impl $ty {
            pub fn font_style(&self) -> Option<&$crate::style::StyleRef<$crate::style::FontStyle>> {
                self.font_style.as_ref()
            }

            pub fn set_font_style(
                &mut self,
                style: impl Into<$crate::style::StyleArg<$crate::style::FontStyle>>,
            ) -> &mut Self {
                self.font_style = Some(style.into().into_ref());
                self
            }

            pub fn paragraph_style(&self) -> Option<&$crate::style::StyleRef<$crate::style::ParagraphStyle>> {
                self.paragraph_style.as_ref()
            }

            pub fn set_paragraph_style(
                &mut self,
                style: impl Into<$crate::style::StyleArg<$crate::style::ParagraphStyle>>,
            ) -> &mut Self {
                self.paragraph_style = Some(style.into().into_ref());
                self
            }
        })+
    };
}

/// Paragraph style accessors for containers that frame their own paragraph.
macro_rules! paragraph_styled {
    ($($ty:ty),+ $(,)?) => {
        $(impl $ty {
            pub fn paragraph_style(&self) -> Option<&$crate::style::StyleRef<$crate::style::ParagraphStyle>> {
                self.paragraph_style.as_ref()
            }

            pub fn set_paragraph_style(
                &mut self,
                style: impl Into<$crate::style::StyleArg<$crate::style::ParagraphStyle>>,
            ) -> &mut Self {
                self.paragraph_style = Some(style.into().into_ref());
                self
            }
        })+
    };
}

container!(Section => ContainerKind::Section, {
    text, text_run, link, title, text_break, page_break, list_item, table, image, object, toc, notes, checkbox,
});
container!(Header => ContainerKind::Header, {
    text, text_run, link, text_break, list_item, table, image, watermark, checkbox, preserve_text,
});
container!(Footer => ContainerKind::Footer, {
    text, text_run, link, text_break, list_item, table, image, checkbox, preserve_text,
});
container!(Cell => ContainerKind::Cell, {
    text, text_run, link, text_break, list_item, image, object, notes, checkbox, preserve_text,
});
container!(TextRun => ContainerKind::TextRun, {
    text, link, text_break, image, object, notes, checkbox,
});

impl Container for Note {
    fn container_kind(&self) -> ContainerKind {
        match self.kind() {
            NoteKind::Footnote => ContainerKind::Footnote,
            NoteKind::Endnote => ContainerKind::Endnote,
        }
    }

    fn elements(&self) -> &[Element] {
        &self.elements
    }
}

impl Note {
    container!(@text);
    container!(@link);
    container!(@text_break);
    container!(@image);
    container!(@object);
}

styled!(Text, TextBreak, Link, PreserveText, CheckBox, ListItem);
paragraph_styled!(TextRun, Note);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style_map;

    #[test]
    fn test_container_kinds() {
        let mut section = Section::new(1);
        assert_eq!(section.container_kind(), ContainerKind::Section);
        let run = section.add_text_run();
        run.add_text("inline");
        assert_eq!(run.container_kind(), ContainerKind::TextRun);
        assert!(ContainerKind::TextRun.is_inline());
        assert!(!ContainerKind::Cell.is_inline());
    }

    #[test]
    fn test_elements_keep_insertion_order() {
        let mut section = Section::new(1);
        section.add_text("a");
        section.add_page_break();
        section.add_title("b", 1);
        section.add_footnote().add_text("note");
        let kinds: Vec<_> = section
            .elements()
            .iter()
            .map(|e| match e {
                Element::Text(_) => "text",
                Element::PageBreak => "page-break",
                Element::Title(_) => "title",
                Element::Note(_) => "note",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, ["text", "page-break", "title", "note"]);
    }

    #[test]
    fn test_style_attachment_forms() {
        let mut section = Section::new(1);
        let text = section.add_text("styled");
        text.set_font_style("Strong").set_paragraph_style(style_map! { "align" => "center" });
        assert_eq!(text.font_style().and_then(|s| s.name()), Some("Strong"));
        assert!(text.paragraph_style().and_then(|s| s.inline()).is_some());
    }

    #[test]
    fn test_note_container() {
        let mut section = Section::new(1);
        let note = section.add_endnote();
        note.add_text("see also");
        note.add_link("https://example.com");
        assert_eq!(note.container_kind(), ContainerKind::Endnote);
        assert_eq!(note.elements().len(), 2);
    }
}
