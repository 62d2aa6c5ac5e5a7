mod common;

use common::{init_logger, parse};
use docweave::element::Document;
use docweave::style::{StyleProperties, StyleRegistry, StyleValue};
use docweave::style_map;
use docweave::writer::{PartWriter, RelationshipKind};
use docweave::Error;

fn body_of(registry: &StyleRegistry, doc: &Document) -> common::Node {
    init_logger();
    let part = PartWriter::new(registry)
        .with_document(doc)
        .write_document()
        .unwrap();
    assert_eq!(part.path, "word/document.xml");
    let root = parse(&part.xml);
    assert_eq!(root.name, "w:document");
    root.children.into_iter().next().unwrap()
}

#[test]
fn test_write_without_document() {
    let registry = StyleRegistry::new();
    let err = PartWriter::new(&registry).write_document().unwrap_err();
    assert!(matches!(err, Error::NoDocumentAssigned));
    assert_eq!(err.to_string(), "No document assigned.");
}

#[test]
fn test_end_section_page_numbering() {
    let registry = StyleRegistry::new();
    let mut doc = Document::new();
    let settings = doc.add_section().settings_mut();
    settings.set_landscape();
    settings.set_page_numbering_start(2);
    settings.set_style_value("borderSize", 240);
    settings.set_break_type("nextPage");

    let body = body_of(&registry, &doc);
    assert_eq!(body.attr_at("w:sectPr/w:pgNumType", "w:start"), Some("2"));
    assert_eq!(body.attr_at("w:sectPr/w:type", "w:val"), Some("nextPage"));
    assert_eq!(body.attr_at("w:sectPr/w:pgSz", "w:orient"), Some("landscape"));
    assert_eq!(body.attr_at("w:sectPr/w:pgSz", "w:w"), Some("16838"));
    assert_eq!(body.attr_at("w:sectPr/w:pgBorders/w:top", "w:sz"), Some("240"));
}

#[test]
fn test_elements_across_sections() {
    let mut registry = StyleRegistry::new();
    registry.add_title_style(1, style_map! { "color" => "333333", "bold" => true });
    registry.add_title_style(2, style_map! { "color" => "666666" });

    let mut doc = Document::new();
    let section = doc.add_section();
    section.add_toc();
    section.add_page_break();
    section.add_title("Title 1", 1);
    section.add_list_item("List Item 1", 0);
    section.add_list_item("List Item 2", 0);
    section.add_list_item("List Item 3", 0);
    let section = doc.add_section();
    section.add_title("Title 2", 2);
    section.add_object("documents/sheet.xls");

    let body = body_of(&registry, &doc);

    let tab = body.find("w:p[1]/w:pPr/w:tabs/w:tab").unwrap();
    assert_eq!(tab.attr("w:val"), Some("right"));
    assert_eq!(tab.attr("w:leader"), Some("dot"));
    assert_eq!(tab.attr("w:pos"), Some("9062"));

    assert_eq!(body.attr_at("w:p[4]/w:r/w:br", "w:type"), Some("page"));
    assert_eq!(body.attr_at("w:p[5]/w:pPr/w:pStyle", "w:val"), Some("Heading1"));
    assert_eq!(body.attr_at("w:p[6]/w:pPr/w:numPr/w:numId", "w:val"), Some("3"));
    assert_eq!(body.attr_at("w:p[6]/w:pPr/w:numPr/w:ilvl", "w:val"), Some("0"));
    assert_eq!(body.attr_at("w:p[10]/w:pPr/w:pStyle", "w:val"), Some("Heading2"));
    assert_eq!(body.attr_at("w:p[11]/w:r/w:object/o:OLEObject", "Type"), Some("Embed"));
    assert_eq!(
        body.attr_at("w:p[11]/w:r/w:object/o:OLEObject", "ProgID"),
        Some("Excel.Sheet.8")
    );

    // The first section closes inside a paragraph, the last one directly in the body.
    assert!(body.exists("w:p[9]/w:pPr/w:sectPr"));
    assert!(matches!(body.children.last(), Some(node) if node.name == "w:sectPr"));
}

#[test]
fn test_toc_links_title_bookmarks() {
    let registry = StyleRegistry::new();
    let mut doc = Document::new();
    let section = doc.add_section();
    section.add_toc().set_max_depth(1);
    section.add_title("Kept", 1);
    section.add_title("Skipped", 2);

    let body = body_of(&registry, &doc);
    let anchors: Vec<_> = body
        .descendants("w:hyperlink")
        .into_iter()
        .filter_map(|h| h.attr("w:anchor"))
        .collect();
    assert_eq!(anchors, ["_Toc252634154"]);

    let bookmarks: Vec<_> = body
        .descendants("w:bookmarkStart")
        .into_iter()
        .filter_map(|b| b.attr("w:name"))
        .collect();
    assert_eq!(bookmarks, ["_Toc252634154", "_Toc252634155"]);

    let instr = body.find("w:p[1]/w:r/w:instrText").unwrap();
    assert_eq!(instr.text, r#"TOC \o "1-1" \h \z \u"#);
    assert_eq!(body.attr_at("w:p[2]/w:r/w:fldChar", "w:fldCharType"), Some("end"));
}

#[test]
fn test_toc_with_inline_font_paragraph() {
    let registry = StyleRegistry::new();
    let mut doc = Document::new();
    let section = doc.add_section();
    let font = style_map! { "bold" => true };
    section.add_toc().set_font_style(font);
    section.add_title("Title 1", 1);

    let body = body_of(&registry, &doc);
    assert!(body.exists("w:p[1]/w:pPr/w:tabs/w:tab"));
    assert!(body.exists("w:p[1]/w:hyperlink/w:r/w:rPr/w:b"));
}

#[test]
fn test_write_text_with_named_styles() {
    let mut registry = StyleRegistry::new();
    registry.add_font_style("rStyle", style_map! { "bold" => true });
    registry.add_paragraph_style("pStyle", style_map! { "hanging" => 120, "indent" => 120 });

    let mut doc = Document::new();
    doc.add_section()
        .add_text("Test")
        .set_font_style("rStyle")
        .set_paragraph_style("pStyle");

    let body = body_of(&registry, &doc);
    assert_eq!(body.attr_at("w:p/w:r/w:rPr/w:rStyle", "w:val"), Some("rStyle"));
    assert_eq!(body.attr_at("w:p/w:pPr/w:pStyle", "w:val"), Some("pStyle"));
    assert_eq!(body.find("w:p/w:r/w:t").unwrap().text, "Test");
}

#[test]
fn test_unregistered_names_are_dropped() {
    let registry = StyleRegistry::new();
    let mut doc = Document::new();
    doc.add_section()
        .add_text("Test")
        .set_font_style("Missing")
        .set_paragraph_style("AlsoMissing");

    let body = body_of(&registry, &doc);
    assert!(!body.exists("w:p/w:pPr"));
    assert!(!body.exists("w:p/w:r/w:rPr"));
    assert!(body.exists("w:p/w:r/w:t"));
}

#[test]
fn test_write_text_run() {
    let mut registry = StyleRegistry::new();
    let inline = style_map! { "align" => "justify", "spaceBefore" => 120, "spaceAfter" => 120 };
    registry.add_paragraph_style("pStyle", inline.clone());

    let mut doc = Document::new();
    let section = doc.add_section();
    let run = section.add_text_run();
    run.set_paragraph_style("pStyle");
    run.add_text("Test");
    run.add_text_break();
    let run = section.add_text_run();
    run.set_paragraph_style(inline);
    run.add_link("http://test.com");
    run.add_image("media/earth.jpg").set_style(style_map! { "align" => "top" });
    run.add_footnote().add_text("Note");

    let body = body_of(&registry, &doc);
    assert_eq!(body.attr_at("w:p[1]/w:pPr/w:pStyle", "w:val"), Some("pStyle"));
    assert!(body.exists("w:p[1]/w:r/w:br"));
    assert_eq!(body.attr_at("w:p[2]/w:pPr/w:jc", "w:val"), Some("both"));
    assert_eq!(body.attr_at("w:p[2]/w:pPr/w:spacing", "w:before"), Some("120"));
    assert!(body.exists("w:p[2]/w:hyperlink/w:r/w:t"));
    assert!(body.exists("w:p[2]/w:r/w:pict/v:shape"));
    assert_eq!(body.attr_at("w:p[2]/w:r/w:footnoteReference", "w:id"), Some("1"));
    assert_eq!(
        body.attr_at("w:p[2]/w:r/w:rPr/w:rStyle", "w:val"),
        Some("FootnoteReference")
    );
}

#[test]
fn test_write_link() {
    let mut registry = StyleRegistry::new();
    registry.add_font_style("Font Style", style_map! { "bold" => true });
    registry.add_paragraph_style("Paragraph Style", style_map! { "align" => "center" });

    let mut doc = Document::new();
    let section = doc.add_section();
    section.add_link("http://github.com/docweave").set_text("Docweave");
    section
        .add_link("http://github.com/docweave")
        .set_text("Test")
        .set_font_style(style_map! { "bold" => true })
        .set_paragraph_style(style_map! { "align" => "center" });
    section
        .add_link("http://github.com/docweave")
        .set_text("Test")
        .set_font_style("Font Style")
        .set_paragraph_style("Paragraph Style");
    section.add_link("http://example.com");

    let mut writer = PartWriter::new(&registry).with_document(&doc);
    let part = writer.write_document().unwrap();
    let body = parse(&part.xml).children.into_iter().next().unwrap();

    assert_eq!(body.find("w:p/w:hyperlink/w:r/w:t").unwrap().text, "Docweave");
    assert_eq!(body.attr_at("w:p[3]/w:pPr/w:pStyle", "w:val"), Some("Paragraph Style"));
    assert_eq!(body.attr_at("w:p[3]/w:hyperlink/w:r/w:rPr/w:rStyle", "w:val"), Some("Font Style"));
    assert_eq!(body.find("w:p[4]/w:hyperlink/w:r/w:t").unwrap().text, "http://example.com");

    // Every link gets the next id, even when the target repeats.
    let ids: Vec<_> = part.relationships.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["rId1", "rId2", "rId3", "rId4"]);
    assert!(part.relationships.iter().all(|r| r.kind == RelationshipKind::Hyperlink));
    assert_eq!(part.relationships[2].target, "http://github.com/docweave");
    assert_eq!(body.attr_at("w:p[2]/w:hyperlink", "r:id"), Some("rId2"));
    assert_eq!(body.attr_at("w:p[4]/w:hyperlink", "r:id"), Some("rId4"));
}

#[test]
fn test_write_text_break() {
    let mut registry = StyleRegistry::new();
    registry.add_font_style("fStyle", style_map! { "size" => 12 });
    registry.add_paragraph_style("pStyle", style_map! { "spacing" => 240 });

    let mut doc = Document::new();
    let section = doc.add_section();
    section.add_text_break();
    section
        .add_text_break()
        .set_font_style(style_map! { "size" => 12 })
        .set_paragraph_style(style_map! { "spacing" => 240 });
    section
        .add_text_break()
        .set_font_style("fStyle")
        .set_paragraph_style("pStyle");

    let body = body_of(&registry, &doc);
    assert!(body.find("w:p[1]").unwrap().children.is_empty());
    assert_eq!(body.attr_at("w:p[2]/w:pPr/w:spacing", "w:line"), Some("240"));
    assert_eq!(body.attr_at("w:p[2]/w:pPr/w:rPr/w:sz", "w:val"), Some("24"));
    assert_eq!(body.attr_at("w:p/w:pPr/w:rPr/w:rStyle", "w:val"), Some("fStyle"));
    assert_eq!(body.attr_at("w:p/w:pPr/w:pStyle", "w:val"), Some("pStyle"));
}

#[test]
fn test_write_image_wrapping() {
    let registry = StyleRegistry::new();
    let mut doc = Document::new();
    let section = doc.add_section();
    for wrap in ["inline", "behind", "infront", "square", "tight"] {
        section.add_image("media/earth.jpg").set_style(style_map! {
            "align" => "left",
            "width" => 40,
            "height" => 40,
            "marginTop" => -1,
            "marginLeft" => -1,
            "wrappingStyle" => wrap,
        });
    }
    section.add_image("media/image1.jpeg");

    let mut writer = PartWriter::new(&registry).with_document(&doc);
    let part = writer.write_document().unwrap();
    let body = parse(&part.xml).children.into_iter().next().unwrap();

    let behind = body.attr_at("w:p[2]/w:r/w:pict/v:shape", "style").unwrap();
    assert!(behind.contains("z-index:-"), "{behind}");
    let front = body.attr_at("w:p[3]/w:r/w:pict/v:shape", "style").unwrap();
    assert!(front.contains("z-index:2"), "{front}");
    assert_eq!(body.attr_at("w:p[4]/w:r/w:pict/v:shape/w10:wrap", "type"), Some("square"));
    assert_eq!(body.attr_at("w:p[5]/w:r/w:pict/v:shape/w10:wrap", "type"), Some("tight"));
    assert!(!body.exists("w:p[1]/w:r/w:pict/v:shape/w10:wrap"));
    assert_eq!(body.attr_at("w:p[1]/w:pPr/w:jc", "w:val"), Some("left"));

    // The same image source shares one relationship.
    assert_eq!(part.relationships.len(), 2);
    assert_eq!(body.attr_at("w:p[6]/w:r/w:pict/v:shape/v:imagedata", "r:id"), Some("rId2"));
}

#[test]
fn test_write_watermark_header_reference() {
    let registry = StyleRegistry::new();
    let mut doc = Document::new();
    doc.add_section().add_header().add_watermark("media/earth.jpg");

    let body = body_of(&registry, &doc);
    let id = body.attr_at("w:sectPr/w:headerReference", "r:id").unwrap();
    assert!(id.starts_with("rId"));
    assert_eq!(body.attr_at("w:sectPr/w:headerReference", "w:type"), Some("default"));
}

#[test]
fn test_write_title() {
    let mut registry = StyleRegistry::new();
    registry.add_title_style_with_paragraph(1, style_map! { "bold" => true }, style_map! { "spaceAfter" => 240 });
    let mut doc = Document::new();
    doc.add_section().add_title("Test", 1);
    doc.add_section().add_title("Unstyled", 3);

    let body = body_of(&registry, &doc);
    assert_eq!(body.attr_at("w:p/w:pPr/w:pStyle", "w:val"), Some("Heading1"));
    assert_eq!(body.find("w:p/w:r/w:t").unwrap().text, "Test");
    assert_eq!(body.attr_at("w:p/w:bookmarkStart", "w:name"), Some("_Toc252634154"));
    assert!(body.exists("w:p/w:bookmarkEnd"));
    assert_eq!(body.attr_at("w:p/w:r/w:fldChar", "w:fldCharType"), Some("end"));
    assert!(!body.exists("w:p[3]/w:pPr/w:pStyle"));
}

#[test]
fn test_write_checkbox() {
    let mut registry = StyleRegistry::new();
    registry.add_font_style("rStyle", style_map! { "bold" => true });
    registry.add_paragraph_style("pStyle", style_map! { "hanging" => 120, "indent" => 120 });
    let mut doc = Document::new();
    doc.add_section()
        .add_checkbox("Check1", "Test")
        .set_font_style("rStyle")
        .set_paragraph_style("pStyle");

    let body = body_of(&registry, &doc);
    assert_eq!(body.attr_at("w:p/w:r/w:fldChar/w:ffData/w:name", "w:val"), Some("Check1"));
    assert_eq!(body.attr_at("w:p/w:pPr/w:ind", "w:hanging"), None);
    let instr = body.find("w:p/w:r/w:instrText").unwrap();
    assert_eq!(instr.text, " FORMCHECKBOX ");
}

#[test]
fn test_paragraph_boolean_properties() {
    let registry = StyleRegistry::new();
    let attributes: [(&str, StyleValue, &str, &str); 5] = [
        ("align", "right".into(), "jc", "right"),
        ("widowControl", false.into(), "widowControl", "0"),
        ("keepNext", true.into(), "keepNext", "1"),
        ("keepLines", true.into(), "keepLines", "1"),
        ("pageBreakBefore", true.into(), "pageBreakBefore", "1"),
    ];
    let mut doc = Document::new();
    let section = doc.add_section();
    for (key, value, _, _) in &attributes {
        section.add_text("Test").set_paragraph_style(style_map! { *key => value });
    }

    let body = body_of(&registry, &doc);
    for (i, (_, _, node, expected)) in attributes.iter().enumerate() {
        let path = format!("w:p[{}]/w:pPr/w:{}", i + 1, node);
        assert_eq!(body.attr_at(&path, "w:val"), Some(*expected), "{path}");
    }
}

#[test]
fn test_write_font_style() {
    let registry = StyleRegistry::new();
    let mut doc = Document::new();
    doc.add_section().add_text("Test").set_font_style(style_map! {
        "name" => "Verdana",
        "size" => 14,
        "bold" => true,
        "italic" => true,
        "underline" => "dash",
        "strikethrough" => true,
        "superScript" => true,
        "color" => "FF0000",
        "fgColor" => "yellow",
        "bgColor" => "FFFF00",
        "hint" => "eastAsia",
        "smallCaps" => true,
    });

    let body = body_of(&registry, &doc);
    let rpr = body.find("w:p/w:r/w:rPr").unwrap();
    assert_eq!(rpr.attr_at("w:rFonts", "w:ascii"), Some("Verdana"));
    assert_eq!(rpr.attr_at("w:rFonts", "w:hint"), Some("eastAsia"));
    assert_eq!(rpr.attr_at("w:sz", "w:val"), Some("28"));
    assert!(rpr.exists("w:b"));
    assert!(rpr.exists("w:i"));
    assert_eq!(rpr.attr_at("w:u", "w:val"), Some("dash"));
    assert!(rpr.exists("w:strike"));
    assert_eq!(rpr.attr_at("w:vertAlign", "w:val"), Some("superscript"));
    assert_eq!(rpr.attr_at("w:color", "w:val"), Some("FF0000"));
    assert_eq!(rpr.attr_at("w:highlight", "w:val"), Some("yellow"));
    assert_eq!(rpr.attr_at("w:shd", "w:fill"), Some("FFFF00"));
    assert!(rpr.exists("w:smallCaps"));

    let order: Vec<_> = rpr.children.iter().map(|c| c.name.as_str()).collect();
    let position = |name: &str| order.iter().position(|n| *n == name).unwrap();
    assert!(position("w:rFonts") < position("w:b"));
    assert!(position("w:b") < position("w:i"));
    assert!(position("w:sz") < position("w:u"));
    assert!(position("w:u") < position("w:vertAlign"));
}

#[test]
fn test_write_table_style() {
    let registry = StyleRegistry::new();
    let mut doc = Document::new();
    let table = doc.add_section().add_table();
    table.set_style(style_map! {
        "width" => 50,
        "cellMarginTop" => 120,
        "cellMarginRight" => 120,
        "cellMarginBottom" => 120,
        "cellMarginLeft" => 120,
    });
    let row = table.add_row();
    row.set_height(120.0)
        .set_style(style_map! { "tblHeader" => true, "cantSplit" => true });
    let cell = row.add_cell();
    cell.set_width(120.0).set_style(style_map! {
        "valign" => "top",
        "textDirection" => "btLr",
        "bgColor" => "FF0000",
        "borderTopSize" => 120,
        "borderBottomSize" => 120,
        "borderLeftSize" => 120,
        "borderRightSize" => 120,
        "borderTopColor" => "FF0000",
        "borderBottomColor" => "FF0000",
        "borderLeftColor" => "FF0000",
        "borderRightColor" => "FF0000",
        "vMerge" => "restart",
    });
    cell.add_text("Test");
    cell.add_text_break();
    cell.add_link("http://google.com");
    cell.add_list_item("Test", 0);
    cell.add_image("media/earth.jpg");
    cell.add_object("documents/sheet.xls");
    cell.add_text_run().add_text("Test");

    let body = body_of(&registry, &doc);
    let tbl_pr = body.find("w:tbl/w:tblPr").unwrap();
    assert_eq!(tbl_pr.attr_at("w:tblCellMar/w:top", "w:w"), Some("120"));
    assert_eq!(tbl_pr.attr_at("w:tblCellMar/w:left", "w:w"), Some("120"));

    let tr_pr = body.find("w:tbl/w:tr/w:trPr").unwrap();
    assert_eq!(tr_pr.attr_at("w:trHeight", "w:val"), Some("120"));
    assert_eq!(tr_pr.attr_at("w:tblHeader", "w:val"), Some("1"));
    assert_eq!(tr_pr.attr_at("w:cantSplit", "w:val"), Some("1"));

    let tc_pr = body.find("w:tbl/w:tr/w:tc/w:tcPr").unwrap();
    assert_eq!(tc_pr.attr_at("w:tcW", "w:w"), Some("120"));
    assert_eq!(tc_pr.attr_at("w:vAlign", "w:val"), Some("top"));
    assert_eq!(tc_pr.attr_at("w:textDirection", "w:val"), Some("btLr"));
    assert_eq!(tc_pr.attr_at("w:vMerge", "w:val"), Some("restart"));
    assert_eq!(tc_pr.attr_at("w:tcBorders/w:top", "w:color"), Some("FF0000"));
    assert_eq!(tc_pr.attr_at("w:shd", "w:fill"), Some("FF0000"));

    let tc = body.find("w:tbl/w:tr/w:tc").unwrap();
    assert!(tc.exists("w:p/w:r/w:object/o:OLEObject"));
    assert!(tc.exists("w:p/w:pPr/w:numPr/w:numId"));
    assert!(matches!(tc.children.last(), Some(node) if node.name == "w:p"));
}

#[test]
fn test_cell_grid_span() {
    let registry = StyleRegistry::new();
    let mut doc = Document::new();
    let table = doc.add_section().add_table();
    table.add_row();
    let cell = table.add_cell();
    cell.set_width(200.0).set_style(style_map! { "gridSpan" => 5 });
    table.add_row();
    for _ in 0..5 {
        table.add_cell().set_width(40.0);
    }

    let body = body_of(&registry, &doc);
    assert_eq!(body.attr_at("w:tbl/w:tr/w:tc/w:tcPr/w:gridSpan", "w:val"), Some("5"));
    assert_eq!(body.find("w:tbl/w:tblGrid").unwrap().children_named("w:gridCol").len(), 5);
}

#[test]
fn test_gutter_and_line_numbering() {
    let registry = StyleRegistry::new();
    let mut doc = Document::new();
    doc.add_section_with(style_map! { "gutter" => 240, "lineNumbering" => style_map! {} });

    let body = body_of(&registry, &doc);
    assert_eq!(body.attr_at("w:sectPr/w:pgMar", "w:gutter"), Some("240"));
    assert!(body.exists("w:sectPr/w:lnNumType"));
    assert_eq!(body.attr_at("w:sectPr/w:lnNumType", "w:start"), Some("0"));
}

#[test]
fn test_empty_document_has_default_section() {
    let registry = StyleRegistry::new();
    let doc = Document::new();
    let body = body_of(&registry, &doc);
    assert_eq!(body.children.len(), 1);
    assert_eq!(body.attr_at("w:sectPr/w:pgSz", "w:w"), Some("11906"));
    assert_eq!(body.attr_at("w:sectPr/w:pgMar", "w:top"), Some("1440"));
}
