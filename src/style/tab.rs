//! Tab stops and paragraph indentation.
use super::enums::{TabLeader, TabType};
use super::value::{StyleValue, opt_numeric_val, opt_xml_enum_val, xml_enum_val};
use super::{StyleMeta, setter_table};

/// A tab stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub(crate) meta: StyleMeta,
    kind: TabType,
    leader: Option<TabLeader>,
    position: f64,
}

impl Default for Tab {
    fn default() -> Self {
        Self {
            meta: StyleMeta::default(),
            kind: TabType::Clear,
            leader: None,
            position: 0.0,
        }
    }
}

impl Tab {
    /// A tab stop of `kind` at `position` twips.
    pub fn new(kind: TabType, position: f64) -> Self {
        Self {
            kind,
            position,
            ..Self::default()
        }
    }

    pub fn kind(&self) -> TabType {
        self.kind
    }

    pub fn leader(&self) -> Option<TabLeader> {
        self.leader
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn set_type(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.kind = xml_enum_val(&value.into(), self.kind);
        self
    }

    pub fn set_leader(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.leader = opt_xml_enum_val(&value.into(), self.leader);
        self
    }

    pub fn set_position(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.position = super::value::numeric_val(&value.into(), self.position);
        self
    }
}

setter_table!(TAB_SETTERS: Tab {
    "index" => set_index,
    "type" => set_type,
    "leader" => set_leader,
    "position" => set_position,
});

/// Paragraph indentation in twips.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Indentation {
    pub(crate) meta: StyleMeta,
    left: Option<f64>,
    right: Option<f64>,
    first_line: Option<f64>,
    hanging: Option<f64>,
}

impl Indentation {
    pub fn left(&self) -> Option<f64> {
        self.left
    }

    pub fn right(&self) -> Option<f64> {
        self.right
    }

    pub fn first_line(&self) -> Option<f64> {
        self.first_line
    }

    pub fn hanging(&self) -> Option<f64> {
        self.hanging
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none() && self.first_line.is_none() && self.hanging.is_none()
    }

    pub fn set_left(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.left = opt_numeric_val(&value.into(), self.left);
        self
    }

    pub fn set_right(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.right = opt_numeric_val(&value.into(), self.right);
        self
    }

    pub fn set_first_line(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.first_line = opt_numeric_val(&value.into(), self.first_line);
        self
    }

    pub fn set_hanging(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.hanging = opt_numeric_val(&value.into(), self.hanging);
        self
    }
}

setter_table!(INDENTATION_SETTERS: Indentation {
    "index" => set_index,
    "left" => set_left,
    "right" => set_right,
    "firstLine" => set_first_line,
    "hanging" => set_hanging,
});
