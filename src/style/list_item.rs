//! List item style.
use super::value::{StyleValue, int_val, string_val};
use super::{StyleMeta, setter_table};

/// Built-in list kinds. The discriminants are the stable configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ListType {
    SquareFilled = 1,
    #[default]
    BulletFilled = 3,
    BulletEmpty = 5,
    Number = 7,
    NumberNested = 8,
    Alphanum = 9,
}

impl ListType {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::SquareFilled),
            3 => Some(Self::BulletFilled),
            5 => Some(Self::BulletEmpty),
            7 => Some(Self::Number),
            8 => Some(Self::NumberNested),
            9 => Some(Self::Alphanum),
            _ => None,
        }
    }

    #[inline]
    pub const fn code(self) -> i64 {
        self as i64
    }
}

/// Which list a list item belongs to: a built-in list type or a named numbering style.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListItemStyle {
    pub(crate) meta: StyleMeta,
    list_type: ListType,
    num_style: Option<String>,
}

impl ListItemStyle {
    pub fn new(list_type: ListType) -> Self {
        Self {
            list_type,
            ..Self::default()
        }
    }

    /// A list item style bound to a named numbering style.
    pub fn numbering(name: impl Into<String>) -> Self {
        Self {
            num_style: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn list_type(&self) -> ListType {
        self.list_type
    }

    pub fn num_style(&self) -> Option<&str> {
        self.num_style.as_deref()
    }

    pub fn set_list_type(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        let code = int_val(&value.into(), self.list_type.code());
        self.list_type = ListType::from_code(code).unwrap_or(self.list_type);
        self
    }

    pub fn set_num_style(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.num_style = string_val(&value.into(), self.num_style.take());
        self
    }
}

setter_table!(LIST_ITEM_SETTERS: ListItemStyle {
    "index" => set_index,
    "listType" => set_list_type,
    "numStyle" => set_num_style,
});
