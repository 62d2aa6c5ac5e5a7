use crate::style::{ImageStyle, StyleDefinition};

/// An image or watermark. The source is the relationship target; bytes are resolved elsewhere.
#[derive(Debug, Clone, Default)]
pub struct Image {
    source: String,
    style: ImageStyle,
    is_watermark: bool,
}

impl Image {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub fn watermark(source: impl Into<String>) -> Self {
        Self {
            is_watermark: true,
            ..Self::new(source)
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn style(&self) -> &ImageStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut ImageStyle {
        &mut self.style
    }

    pub fn set_style(&mut self, style: impl Into<StyleDefinition<ImageStyle>>) -> &mut Self {
        self.style = style.into().build();
        self
    }

    pub fn is_watermark(&self) -> bool {
        self.is_watermark
    }
}

/// An embedded OLE object shown as an icon.
#[derive(Debug, Clone, Default)]
pub struct Object {
    source: String,
    icon: Option<String>,
    style: ImageStyle,
}

impl Object {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Lower-cased file extension of the source.
    pub fn extension(&self) -> Option<String> {
        let name = self.source.rsplit(['/', '\\']).next()?;
        let (_, ext) = name.rsplit_once('.')?;
        Some(ext.to_ascii_lowercase())
    }

    /// OLE program id for the source's file type, `None` when the type is not embeddable.
    pub fn prog_id(&self) -> Option<&'static str> {
        let prog_id = match self.extension()?.as_str() {
            "xls" => "Excel.Sheet.8",
            "xlsx" => "Excel.Sheet.12",
            "doc" => "Word.Document.8",
            "docx" => "Word.Document.12",
            "ppt" => "PowerPoint.Show.8",
            "pptx" => "PowerPoint.Show.12",
            _ => return None,
        };
        Some(prog_id)
    }

    /// Icon image target; defaults to `media/{extension}.png`.
    pub fn icon(&self) -> String {
        match (&self.icon, self.extension()) {
            (Some(icon), _) => icon.clone(),
            (None, Some(ext)) => format!("media/{ext}.png"),
            (None, None) => "media/object.png".to_string(),
        }
    }

    pub fn set_icon(&mut self, icon: impl Into<String>) -> &mut Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn style(&self) -> &ImageStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: impl Into<StyleDefinition<ImageStyle>>) -> &mut Self {
        self.style = style.into().build();
        self
    }
}
