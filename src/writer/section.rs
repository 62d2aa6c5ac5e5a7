//! Section bodies and `w:sectPr`.
use std::fmt::Write;

use super::RelationshipKind;
use super::body::write_elements;
use super::context::PartContext;
use super::table::write_border_sides;
use crate::common::Result;
use crate::common::xml::{write_whole, write_whole_attr};
use crate::element::{Container, ContainerKind, Section};
use crate::style::{Orientation, SectionStyle, XmlEnum};

/// Write every section. A section's properties close it: inside a trailing paragraph for all
/// but the last, as the final child of the body for the last.
pub(crate) fn write_sections(ctx: &mut PartContext<'_>, sections: &[Section]) -> Result<()> {
    let Some((last, rest)) = sections.split_last() else {
        return write_section_props(ctx, &SectionStyle::default(), None);
    };
    for section in rest {
        write_elements(ctx, section.elements(), ContainerKind::Section)?;
        ctx.xml.push_str("<w:p><w:pPr>");
        write_section_props(ctx, section.settings(), Some(section))?;
        ctx.xml.push_str("</w:pPr></w:p>");
    }
    write_elements(ctx, last.elements(), ContainerKind::Section)?;
    write_section_props(ctx, last.settings(), Some(last))
}

fn write_section_props(ctx: &mut PartContext<'_>, settings: &SectionStyle, section: Option<&Section>) -> Result<()> {
    ctx.xml.push_str("<w:sectPr>");

    if let Some(section) = section {
        for header in section.headers() {
            ctx.headers += 1;
            let target = format!("header{}.xml", ctx.headers);
            let rel_id = ctx.add_relationship(RelationshipKind::Header, &target);
            write!(
                ctx.xml,
                r#"<w:headerReference w:type="{}" r:id="{}"/>"#,
                header.kind().to_xml(),
                rel_id
            )?;
        }
        for footer in section.footers() {
            ctx.footers += 1;
            let target = format!("footer{}.xml", ctx.footers);
            let rel_id = ctx.add_relationship(RelationshipKind::Footer, &target);
            write!(
                ctx.xml,
                r#"<w:footerReference w:type="{}" r:id="{}"/>"#,
                footer.kind().to_xml(),
                rel_id
            )?;
        }
    }

    write_page_setup(&mut ctx.xml, settings)?;

    if section.is_some_and(Section::has_different_first_page) {
        ctx.xml.push_str("<w:titlePg/>");
    }
    ctx.xml.push_str("</w:sectPr>");
    Ok(())
}

/// `w:type` through `w:cols`.
fn write_page_setup(xml: &mut String, settings: &SectionStyle) -> Result<()> {
    if let Some(break_type) = settings.break_type() {
        write!(xml, r#"<w:type w:val="{}"/>"#, break_type.to_xml())?;
    }

    xml.push_str("<w:pgSz");
    write_whole_attr(xml, "w:w", settings.page_size_w())?;
    write_whole_attr(xml, "w:h", settings.page_size_h())?;
    if settings.orientation() == Orientation::Landscape {
        xml.push_str(r#" w:orient="landscape""#);
    }
    xml.push_str("/>");

    xml.push_str("<w:pgMar");
    write_whole_attr(xml, "w:top", settings.margin_top())?;
    write_whole_attr(xml, "w:right", settings.margin_right())?;
    write_whole_attr(xml, "w:bottom", settings.margin_bottom())?;
    write_whole_attr(xml, "w:left", settings.margin_left())?;
    write_whole_attr(xml, "w:header", settings.header_height())?;
    write_whole_attr(xml, "w:footer", settings.footer_height())?;
    write_whole_attr(xml, "w:gutter", settings.gutter())?;
    xml.push_str("/>");

    if settings.borders().has_outer() {
        xml.push_str(r#"<w:pgBorders w:offsetFrom="page">"#);
        write_border_sides(xml, &settings.borders().outer(), 24)?;
        xml.push_str("</w:pgBorders>");
    }

    if let Some(numbering) = settings.line_numbering() {
        write!(
            xml,
            r#"<w:lnNumType w:countBy="{}" w:start="{}""#,
            numbering.increment(),
            numbering.start().saturating_sub(1)
        )?;
        if let Some(distance) = numbering.distance() {
            write_whole_attr(xml, "w:distance", distance)?;
        }
        if let Some(restart) = numbering.restart() {
            write!(xml, r#" w:restart="{}""#, restart.to_xml())?;
        }
        xml.push_str("/>");
    }

    if let Some(start) = settings.page_numbering_start() {
        write!(xml, r#"<w:pgNumType w:start="{}"/>"#, start)?;
    }

    write!(xml, r#"<w:cols w:num="{}" w:space=""#, settings.cols_num())?;
    write_whole(xml, settings.cols_space());
    xml.push_str(r#""/>"#);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleProperties;
    use crate::style_map;

    fn setup(map: crate::style::StyleMap) -> String {
        let mut xml = String::new();
        write_page_setup(&mut xml, &SectionStyle::from_map(&map)).unwrap();
        xml
    }

    #[test]
    fn test_default_page_setup() {
        assert_eq!(
            setup(style_map! {}),
            concat!(
                r#"<w:pgSz w:w="11906" w:h="16838"/>"#,
                r#"<w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/>"#,
                r#"<w:cols w:num="1" w:space="720"/>"#,
            )
        );
    }

    #[test]
    fn test_landscape_numbering_and_borders() {
        let xml = setup(style_map! {
            "orientation" => "landscape",
            "pageNumberingStart" => 2,
            "borderSize" => 240,
            "breakType" => "nextPage",
            "lineNumbering" => style_map! { "start" => 5, "restart" => "newPage" },
        });
        assert!(xml.starts_with(r#"<w:type w:val="nextPage"/><w:pgSz w:w="16838" w:h="11906" w:orient="landscape"/>"#));
        assert!(xml.contains(r#"<w:pgBorders w:offsetFrom="page"><w:top w:val="single" w:sz="240" w:space="24" w:color="000000"/>"#));
        assert!(xml.contains(r#"<w:lnNumType w:countBy="1" w:start="4" w:restart="newPage"/>"#));
        assert!(xml.contains(r#"<w:pgNumType w:start="2"/>"#));
        let borders = xml.find("<w:pgBorders").unwrap();
        let ln = xml.find("<w:lnNumType").unwrap();
        let pg = xml.find("<w:pgNumType").unwrap();
        let cols = xml.find("<w:cols").unwrap();
        assert!(borders < ln && ln < pg && pg < cols);
    }

    #[test]
    fn test_line_numbering_start_stays_valid() {
        let xml = setup(style_map! {
            "lineNumbering" => style_map! { "start" => i64::MIN, "increment" => 0 },
        });
        assert!(xml.contains(r#"<w:lnNumType w:countBy="1" w:start="0"/>"#));
    }
}
