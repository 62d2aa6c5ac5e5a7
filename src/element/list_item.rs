use crate::style::{FontStyle, ListItemStyle, ParagraphStyle, StyleDefinition, StyleRef};

/// A numbered or bulleted paragraph. `depth` is the list level, starting at 0.
#[derive(Debug, Clone, Default)]
pub struct ListItem {
    text: String,
    depth: u32,
    list_style: ListItemStyle,
    pub(crate) font_style: Option<StyleRef<FontStyle>>,
    pub(crate) paragraph_style: Option<StyleRef<ParagraphStyle>>,
}

impl ListItem {
    pub fn new(text: impl Into<String>, depth: u32) -> Self {
        Self {
            text: text.into(),
            depth,
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn list_style(&self) -> &ListItemStyle {
        &self.list_style
    }

    pub fn set_list_style(&mut self, style: impl Into<StyleDefinition<ListItemStyle>>) -> &mut Self {
        self.list_style = style.into().build();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ListType;
    use crate::style_map;

    #[test]
    fn test_default_list_type() {
        let item = ListItem::new("first", 0);
        assert_eq!(item.list_style().list_type(), ListType::default());
        assert_eq!(item.depth(), 0);
    }

    #[test]
    fn test_list_style_from_map() {
        let mut item = ListItem::new("first", 1);
        item.set_list_style(style_map! { "listType" => 7, "numStyle" => "steps" });
        assert_eq!(item.list_style().list_type().code(), 7);
        assert_eq!(item.list_style().num_style(), Some("steps"));
    }
}
