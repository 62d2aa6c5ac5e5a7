//! Part writer: serializes a [`Document`] and a [`StyleRegistry`] into the XML parts of a
//! word-processing package.
//!
//! Each `write_*` call produces one or more [`PartXml`] values. The writer does no I/O;
//! packaging the parts (zip, content types, relationship parts) is left to the caller.

mod body;
mod context;
mod field;
mod media;
mod note;
pub mod numbering;
mod paragraph;
mod relmap;
mod run;
mod section;
mod styles;
mod table;

use serde::Deserialize;

use self::context::{PartContext, collect_notes, collect_titles};
use crate::common::{Error, Result};
use crate::element::{Container, Document, NoteKind};
use crate::style::StyleRegistry;

pub use numbering::{DefaultNumbering, NumberingAllocator};

pub(crate) const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Namespace declarations carried by every part's root element.
pub(crate) const ROOT_NAMESPACES: &str = concat!(
    r#" xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main""#,
    r#" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships""#,
    r#" xmlns:o="urn:schemas-microsoft-com:office:office""#,
    r#" xmlns:v="urn:schemas-microsoft-com:vml""#,
    r#" xmlns:w10="urn:schemas-microsoft-com:office:word""#,
    r#" xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing""#,
    r#" xmlns:m="http://schemas.openxmlformats.org/officeDocument/2006/math""#,
);

/// Which part a context is writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PartScope {
    Document,
    Header,
    Footer,
    Notes,
    Styles,
}

/// What a relationship points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    Image,
    Hyperlink,
    OleObject,
    Header,
    Footer,
}

impl RelationshipKind {
    pub fn type_uri(self) -> &'static str {
        match self {
            Self::Image => "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image",
            Self::Hyperlink => "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink",
            Self::OleObject => "http://schemas.openxmlformats.org/officeDocument/2006/relationships/oleObject",
            Self::Header => "http://schemas.openxmlformats.org/officeDocument/2006/relationships/header",
            Self::Footer => "http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer",
        }
    }

    /// Hyperlink targets live outside the package.
    pub fn is_external(self) -> bool {
        matches!(self, Self::Hyperlink)
    }
}

/// A relationship from a part to a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id: String,
    pub kind: RelationshipKind,
    pub target: String,
}

/// One serialized part.
#[derive(Debug, Clone)]
pub struct PartXml {
    /// Package path, e.g. `word/document.xml`.
    pub path: String,
    pub xml: String,
    /// Relationships referenced from this part, ids starting at 1.
    pub relationships: Vec<Relationship>,
}

/// Writer configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Font of the document defaults in the styles part.
    pub default_font_name: String,
    /// Font size in points of the document defaults.
    pub default_font_size: f64,
    /// Added to every relationship number, for packagers that reserve the first ids.
    pub relationship_offset: u32,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            default_font_name: "Arial".to_string(),
            default_font_size: 10.0,
            relationship_offset: 0,
        }
    }
}

impl WriterOptions {
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_saphyr::from_str(text).map_err(|e| Error::Config(format!("invalid writer options: {}", e)))
    }
}

/// Writes the parts of one document.
///
/// # Examples
///
/// ```
/// use docweave::element::Document;
/// use docweave::style::StyleRegistry;
/// use docweave::writer::PartWriter;
///
/// let registry = StyleRegistry::new();
/// let mut doc = Document::new();
/// doc.add_section().add_text("Hello");
///
/// let mut writer = PartWriter::new(&registry).with_document(&doc);
/// let part = writer.write_document().unwrap();
/// assert_eq!(part.path, "word/document.xml");
/// assert!(part.xml.contains("<w:t xml:space=\"preserve\">Hello</w:t>"));
/// ```
pub struct PartWriter<'a> {
    registry: &'a StyleRegistry,
    document: Option<&'a Document>,
    numbering: Box<dyn NumberingAllocator>,
    options: WriterOptions,
}

impl<'a> PartWriter<'a> {
    pub fn new(registry: &'a StyleRegistry) -> Self {
        Self {
            registry,
            document: None,
            numbering: Box::new(DefaultNumbering::new()),
            options: WriterOptions::default(),
        }
    }

    pub fn with_document(mut self, document: &'a Document) -> Self {
        self.document = Some(document);
        self
    }

    pub fn set_document(&mut self, document: &'a Document) {
        self.document = Some(document);
    }

    pub fn with_numbering(mut self, numbering: impl NumberingAllocator + 'static) -> Self {
        self.numbering = Box::new(numbering);
        self
    }

    pub fn with_options(mut self, options: WriterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    fn document(&self) -> Result<&'a Document> {
        self.document.ok_or(Error::NoDocumentAssigned)
    }

    /// The main body part, `word/document.xml`.
    pub fn write_document(&mut self) -> Result<PartXml> {
        let document = self.document()?;
        let titles = collect_titles(document.sections());
        let mut ctx = PartContext::new(
            PartScope::Document,
            self.registry,
            &mut *self.numbering,
            &titles,
            self.options.relationship_offset,
        );

        ctx.xml.push_str(XML_DECLARATION);
        ctx.xml.push_str("<w:document");
        ctx.xml.push_str(ROOT_NAMESPACES);
        ctx.xml.push_str("><w:body>");
        section::write_sections(&mut ctx, document.sections())?;
        ctx.xml.push_str("</w:body></w:document>");

        Ok(finish(ctx, "word/document.xml"))
    }

    /// One part per header, `word/header{n}.xml`, numbered in document order.
    pub fn write_headers(&mut self) -> Result<Vec<PartXml>> {
        let document = self.document()?;
        let mut parts = Vec::new();
        for header in document.sections().iter().flat_map(|s| s.headers()) {
            let n = parts.len() + 1;
            let part = self.write_header_footer(PartScope::Header, header, &format!("word/header{}.xml", n))?;
            parts.push(part);
        }
        Ok(parts)
    }

    /// One part per footer, `word/footer{n}.xml`, numbered in document order.
    pub fn write_footers(&mut self) -> Result<Vec<PartXml>> {
        let document = self.document()?;
        let mut parts = Vec::new();
        for footer in document.sections().iter().flat_map(|s| s.footers()) {
            let n = parts.len() + 1;
            let part = self.write_header_footer(PartScope::Footer, footer, &format!("word/footer{}.xml", n))?;
            parts.push(part);
        }
        Ok(parts)
    }

    fn write_header_footer(&mut self, scope: PartScope, container: &dyn Container, path: &str) -> Result<PartXml> {
        let root = match scope {
            PartScope::Header => "w:hdr",
            _ => "w:ftr",
        };
        let mut ctx = PartContext::new(
            scope,
            self.registry,
            &mut *self.numbering,
            &[],
            self.options.relationship_offset,
        );

        ctx.xml.push_str(XML_DECLARATION);
        ctx.xml.push('<');
        ctx.xml.push_str(root);
        ctx.xml.push_str(ROOT_NAMESPACES);
        ctx.xml.push('>');
        body::write_elements(&mut ctx, container.elements(), container.container_kind())?;
        if !ends_with_paragraph(&ctx.xml) {
            ctx.xml.push_str("<w:p/>");
        }
        ctx.xml.push_str("</");
        ctx.xml.push_str(root);
        ctx.xml.push('>');

        Ok(finish(ctx, path))
    }

    /// `word/footnotes.xml`.
    pub fn write_footnotes(&mut self) -> Result<PartXml> {
        self.write_notes(NoteKind::Footnote)
    }

    /// `word/endnotes.xml`.
    pub fn write_endnotes(&mut self) -> Result<PartXml> {
        self.write_notes(NoteKind::Endnote)
    }

    fn write_notes(&mut self, kind: NoteKind) -> Result<PartXml> {
        let document = self.document()?;
        let notes = collect_notes(document.sections(), kind);
        let mut ctx = PartContext::new(
            PartScope::Notes,
            self.registry,
            &mut *self.numbering,
            &[],
            self.options.relationship_offset,
        );
        note::write_notes_part(&mut ctx, kind, &notes)?;
        Ok(finish(ctx, &format!("word/{}s.xml", kind.tag())))
    }

    /// `word/styles.xml`: document defaults followed by every registered style.
    pub fn write_styles(&mut self) -> Result<PartXml> {
        self.document()?;
        let mut ctx = PartContext::new(
            PartScope::Styles,
            self.registry,
            &mut *self.numbering,
            &[],
            self.options.relationship_offset,
        );
        styles::write_styles_part(&mut ctx, &self.options)?;
        Ok(finish(ctx, "word/styles.xml"))
    }

    /// Every part: document, headers, footers, the notes parts that have notes, styles.
    pub fn write_all(&mut self) -> Result<Vec<PartXml>> {
        let document = self.document()?;
        let mut parts = vec![self.write_document()?];
        parts.extend(self.write_headers()?);
        parts.extend(self.write_footers()?);
        for kind in [NoteKind::Footnote, NoteKind::Endnote] {
            if !collect_notes(document.sections(), kind).is_empty() {
                parts.push(self.write_notes(kind)?);
            }
        }
        parts.push(self.write_styles()?);
        Ok(parts)
    }
}

fn finish(ctx: PartContext<'_>, path: &str) -> PartXml {
    let (xml, rels) = ctx.into_parts();
    PartXml {
        path: path.to_string(),
        xml,
        relationships: rels.into_relationships(),
    }
}

/// Whether the last block written is a paragraph, as a header, footer or cell must end with one.
pub(crate) fn ends_with_paragraph(xml: &str) -> bool {
    xml.ends_with("</w:p>") || xml.ends_with("<w:p/>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Document;

    #[test]
    fn test_no_document_assigned() {
        let registry = StyleRegistry::new();
        let mut writer = PartWriter::new(&registry);
        let err = writer.write_document().unwrap_err();
        assert!(matches!(err, Error::NoDocumentAssigned));
        assert_eq!(err.to_string(), "No document assigned.");
        assert!(matches!(writer.write_headers(), Err(Error::NoDocumentAssigned)));
        assert!(matches!(writer.write_footnotes(), Err(Error::NoDocumentAssigned)));
        assert!(matches!(writer.write_styles(), Err(Error::NoDocumentAssigned)));
        assert!(matches!(writer.write_all(), Err(Error::NoDocumentAssigned)));
    }

    #[test]
    fn test_set_document_later() {
        let registry = StyleRegistry::new();
        let doc = Document::new();
        let mut writer = PartWriter::new(&registry);
        writer.set_document(&doc);
        let part = writer.write_document().unwrap();
        assert!(part.xml.starts_with(XML_DECLARATION));
        assert!(part.xml.contains("<w:body><w:sectPr>"));
        assert!(part.relationships.is_empty());
    }

    #[test]
    fn test_write_all_part_paths() {
        let registry = StyleRegistry::new();
        let mut doc = Document::new();
        let section = doc.add_section();
        section.add_header().add_text("h");
        section.add_footer().add_text("f");
        section.add_footnote().add_text("n");
        let mut writer = PartWriter::new(&registry).with_document(&doc);
        let paths: Vec<_> = writer.write_all().unwrap().into_iter().map(|p| p.path).collect();
        assert_eq!(
            paths,
            [
                "word/document.xml",
                "word/header1.xml",
                "word/footer1.xml",
                "word/footnotes.xml",
                "word/styles.xml",
            ]
        );
    }

    #[test]
    fn test_empty_header_gets_paragraph() {
        let registry = StyleRegistry::new();
        let mut doc = Document::new();
        doc.add_section().add_header();
        let mut writer = PartWriter::new(&registry).with_document(&doc);
        let headers = writer.write_headers().unwrap();
        assert!(headers[0].xml.ends_with("<w:p/></w:hdr>"));
    }

    #[test]
    fn test_options_from_yaml() {
        let opts = WriterOptions::from_yaml("default_font_name: Calibri\nrelationship_offset: 3\n").unwrap();
        assert_eq!(opts.default_font_name, "Calibri");
        assert_eq!(opts.default_font_size, 10.0);
        assert_eq!(opts.relationship_offset, 3);
        assert!(matches!(WriterOptions::from_yaml("unknown: [1"), Err(Error::Config(_))));
    }

    #[test]
    fn test_relationship_kinds() {
        assert!(RelationshipKind::Hyperlink.is_external());
        assert!(!RelationshipKind::Image.is_external());
        assert!(RelationshipKind::Footer.type_uri().ends_with("/footer"));
    }
}
