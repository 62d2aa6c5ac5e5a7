//! Docweave - a word-processing document model with a WordprocessingML part writer
//!
//! This library builds documents in memory and serializes them into the XML parts of a
//! `.docx` package. It does not read documents and does not zip packages.
//!
//! # Features
//!
//! - **Style objects**: Font, paragraph, table, section, image and list styles built from
//!   loosely typed property maps, where invalid values fall back to defaults
//! - **Style registry**: Named styles shared across a document, loadable from YAML
//! - **Element tree**: Sections, headers, footers, table cells, runs and notes, each
//!   accepting only the elements valid in that container
//! - **Part writer**: Schema-ordered XML for the document, header, footer, note and styles
//!   parts, with per-part relationship ids
//!
//! # Example
//!
//! ```
//! use docweave::element::Document;
//! use docweave::style::StyleRegistry;
//! use docweave::style_map;
//! use docweave::writer::PartWriter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = StyleRegistry::new();
//! registry.add_title_style(1, style_map! { "size" => 16, "bold" => true });
//! registry.add_font_style("Strong", style_map! { "bold" => true });
//!
//! let mut doc = Document::new();
//! let section = doc.add_section();
//! section.add_title("Introduction", 1);
//! section.add_text("Body text").set_font_style("Strong");
//! section.add_link("https://example.com").set_text("Example");
//!
//! let mut writer = PartWriter::new(&registry).with_document(&doc);
//! let document = writer.write_document()?;
//! assert!(document.xml.contains(r#"<w:pStyle w:val="Heading1"/>"#));
//! assert_eq!(document.relationships[0].id, "rId1");
//! # Ok(())
//! # }
//! ```

/// Error type and XML text helpers shared by every layer
pub mod common;

/// Document model: sections, headers, footers, tables and the elements they hold
pub mod element;

/// Style objects, value coercion and the named style registry
pub mod style;

/// Serialization of a document into WordprocessingML parts
pub mod writer;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use element::{Document, Element, Section};
pub use style::{StyleRegistry, StyleValue};
pub use writer::{PartWriter, PartXml, WriterOptions};
