use super::Section;
use crate::style::{SectionStyle, StyleDefinition};

/// Root of the document tree.
#[derive(Debug, Clone, Default)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section with default page setup.
    pub fn add_section(&mut self) -> &mut Section {
        let index = self.sections.len() + 1;
        self.sections.push(Section::new(index));
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    /// Append a section configured from a property map or a built [`SectionStyle`].
    pub fn add_section_with(&mut self, settings: impl Into<StyleDefinition<SectionStyle>>) -> &mut Section {
        let section = self.add_section();
        section.set_settings(settings);
        section
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}
