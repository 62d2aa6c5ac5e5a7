//! Style value objects.
//!
//! Every style variant holds typed properties with declared defaults. Setters accept a
//! loosely typed [`StyleValue`] and coerce it; input that does not fit leaves the
//! default (or the current value) in place. Bulk configuration goes through a static
//! key → setter table per variant, so an unknown key is simply skipped.

pub mod enums;
pub mod value;

mod border;
mod font;
mod image;
mod line_numbering;
mod list_item;
mod paragraph;
mod registry;
mod section;
mod sheet;
mod tab;
mod table;
mod toc;

pub use border::{BorderSide, Borders};
pub use enums::*;
pub use font::FontStyle;
pub use image::ImageStyle;
pub use line_numbering::LineNumbering;
pub use list_item::{ListItemStyle, ListType};
pub use paragraph::ParagraphStyle;
pub use registry::{DEFAULT_PARAGRAPH_STYLE, Style, StyleRegistry, style_id, title_style_name};
pub use section::SectionStyle;
pub use tab::{Indentation, Tab};
pub use table::{CellStyle, RowStyle, TableStyle};
pub use toc::TocStyle;
pub use value::{StyleMap, StyleValue, XmlEnum};

/// Static key → setter table of one style variant.
pub type SetterTable<S> = phf::Map<&'static str, fn(&mut S, &StyleValue)>;

/// Bulk configuration shared by every style variant.
pub trait StyleProperties: Default + Sized + 'static {
    /// The variant's key → setter table.
    fn setters() -> &'static SetterTable<Self>;

    /// Apply one property. A leading underscore on the key is ignored.
    fn apply_value(&mut self, key: &str, value: &StyleValue) -> bool {
        let key = key.strip_prefix('_').unwrap_or(key);
        match Self::setters().get(key) {
            Some(setter) => {
                setter(self, value);
                true
            },
            None => {
                log::trace!("ignoring unknown style key {key:?}");
                false
            },
        }
    }

    /// Set one property by its configuration key.
    fn set_style_value(&mut self, key: &str, value: impl Into<StyleValue>) -> &mut Self {
        self.apply_value(key, &value.into());
        self
    }

    /// Set every recognized property in `map`, in map order.
    fn set_style_by_array(&mut self, map: &StyleMap) -> &mut Self {
        for (key, value) in map {
            self.apply_value(key, value);
        }
        self
    }

    /// Build a style from a property map.
    fn from_map(map: &StyleMap) -> Self {
        let mut style = Self::default();
        style.set_style_by_array(map);
        style
    }
}

/// Declare the static setter table of a style variant.
///
/// Each entry forwards the raw value to the named public setter.
macro_rules! setter_table {
    ($table:ident: $ty:ty { $($key:tt => $method:ident),+ $(,)? }) => {
        static $table: $crate::style::SetterTable<$ty> = phf::phf_map! {
            $($key => {
                fn apply(style: &mut $ty, value: &$crate::style::StyleValue) {
                    style.$method(value);
                }
                apply
            }),+
        };

        impl $crate::style::StyleProperties for $ty {
            #[inline]
            fn setters() -> &'static $crate::style::SetterTable<Self> {
                &$table
            }
        }
    };
}

pub(crate) use setter_table;

/// Name and index shared by every style variant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleMeta {
    pub(crate) name: Option<String>,
    pub(crate) index: Option<i64>,
}

/// Accessors for [`StyleMeta`] on each style variant.
macro_rules! style_meta {
    ($($ty:ty),+ $(,)?) => {
        $(impl $ty {
            /// Registry name, when the style was registered.
            pub fn style_name(&self) -> Option<&str> {
                self.meta.name.as_deref()
            }

            pub fn set_style_name(&mut self, name: impl Into<String>) -> &mut Self {
                self.meta.name = Some(name.into());
                self
            }

            /// Position of the style in its registry (1 when unset).
            pub fn index(&self) -> i64 {
                self.meta.index.unwrap_or(1)
            }

            pub fn set_index(&mut self, value: impl Into<$crate::style::StyleValue>) -> &mut Self {
                let value = value.into();
                self.meta.index = Some($crate::style::value::int_val(&value, self.index()));
                self
            }
        })+
    };
}

pub(crate) use style_meta;

/// A style attached to an element: either inline properties or a registry name.
///
/// Named references resolve at write time; an unknown name writes no style node.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleRef<T> {
    Inline(T),
    Named(String),
}

impl<T> StyleRef<T> {
    /// Registry name, for a named reference.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Inline(_) => None,
        }
    }

    /// Inline properties, for an inline style.
    pub fn inline(&self) -> Option<&T> {
        match self {
            Self::Inline(style) => Some(style),
            Self::Named(_) => None,
        }
    }
}

/// Anything accepted where an element takes a style: a property map, a built style or a name.
#[derive(Debug, Clone)]
pub enum StyleArg<T> {
    Map(StyleMap),
    Style(T),
    Name(String),
}

impl<T: StyleProperties> StyleArg<T> {
    pub fn into_ref(self) -> StyleRef<T> {
        match self {
            Self::Map(map) => StyleRef::Inline(T::from_map(&map)),
            Self::Style(style) => StyleRef::Inline(style),
            Self::Name(name) => StyleRef::Named(name),
        }
    }
}

impl<T> From<StyleMap> for StyleArg<T> {
    fn from(map: StyleMap) -> Self {
        Self::Map(map)
    }
}

impl<T> From<&StyleMap> for StyleArg<T> {
    fn from(map: &StyleMap) -> Self {
        Self::Map(map.clone())
    }
}

impl<T> From<&str> for StyleArg<T> {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl<T> From<String> for StyleArg<T> {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// A style definition for registration: a property map or a built style.
#[derive(Debug, Clone)]
pub enum StyleDefinition<T> {
    Map(StyleMap),
    Built(T),
}

impl<T: StyleProperties> StyleDefinition<T> {
    pub fn build(self) -> T {
        match self {
            Self::Map(map) => T::from_map(&map),
            Self::Built(style) => style,
        }
    }
}

impl<T> From<StyleMap> for StyleDefinition<T> {
    fn from(map: StyleMap) -> Self {
        Self::Map(map)
    }
}

impl<T> From<&StyleMap> for StyleDefinition<T> {
    fn from(map: &StyleMap) -> Self {
        Self::Map(map.clone())
    }
}

macro_rules! built_style_from {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for StyleArg<$ty> {
                fn from(style: $ty) -> Self {
                    Self::Style(style)
                }
            }

            impl From<$ty> for StyleDefinition<$ty> {
                fn from(style: $ty) -> Self {
                    Self::Built(style)
                }
            }
        )+
    };
}

built_style_from!(
    ParagraphStyle,
    FontStyle,
    TableStyle,
    RowStyle,
    CellStyle,
    SectionStyle,
    ImageStyle,
    TocStyle,
    ListItemStyle,
    LineNumbering,
);

style_meta!(
    ParagraphStyle,
    FontStyle,
    TableStyle,
    RowStyle,
    CellStyle,
    SectionStyle,
    ImageStyle,
    TocStyle,
    ListItemStyle,
    LineNumbering,
    Tab,
    Indentation,
);
