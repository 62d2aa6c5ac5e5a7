//! Property values and the coercion primitives behind every style setter.
//!
//! Each primitive returns the normalized value when the input satisfies the type or
//! membership constraint, otherwise the supplied default. None of them fail.
use indexmap::IndexMap;
use serde::Deserialize;

/// Flat property-name → value mapping accepted wherever a style is accepted.
pub type StyleMap = IndexMap<String, StyleValue>;

/// A loosely typed property value, as found in style maps and YAML style sheets.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<StyleValue>),
    Map(StyleMap),
}

impl StyleValue {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// String content, if this is a string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&StyleMap> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<bool> for StyleValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

macro_rules! int_from {
    ($($ty:ty),*) => {
        $(impl From<$ty> for StyleValue {
            fn from(v: $ty) -> Self {
                Self::Int(v as i64)
            }
        })*
    };
}

int_from!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for StyleValue {
    fn from(v: usize) -> Self {
        i64::try_from(v).map_or(Self::Float(v as f64), Self::Int)
    }
}

impl From<f32> for StyleValue {
    fn from(v: f32) -> Self {
        Self::Float(v as f64)
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for StyleValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&String> for StyleValue {
    fn from(v: &String) -> Self {
        Self::Str(v.clone())
    }
}

impl From<&StyleValue> for StyleValue {
    fn from(v: &StyleValue) -> Self {
        v.clone()
    }
}

impl From<Vec<StyleValue>> for StyleValue {
    fn from(v: Vec<StyleValue>) -> Self {
        Self::List(v)
    }
}

impl From<StyleMap> for StyleValue {
    fn from(v: StyleMap) -> Self {
        Self::Map(v)
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Build a [`StyleMap`] from `key => value` pairs.
///
/// ```
/// use docweave::style_map;
///
/// let map = style_map! { "bold" => true, "size" => 12 };
/// assert_eq!(map.len(), 2);
/// ```
#[macro_export]
macro_rules! style_map {
    () => { $crate::style::StyleMap::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::style::StyleMap::new();
        $(map.insert(::std::string::String::from($key), $crate::style::StyleValue::from($value));)+
        map
    }};
}

/// Boolean coercion: only a real boolean passes.
#[inline]
pub fn bool_val(value: &StyleValue, default: bool) -> bool {
    match value {
        StyleValue::Bool(b) => *b,
        _ => default,
    }
}

/// Integer coercion: integers and integral numeric strings pass.
pub fn int_val(value: &StyleValue, default: i64) -> i64 {
    match value {
        StyleValue::Int(i) => *i,
        StyleValue::Str(s) => s.trim().parse::<i64>().unwrap_or(default),
        _ => default,
    }
}

fn parse_float(value: &StyleValue) -> Option<f64> {
    let parsed = match value {
        StyleValue::Float(f) => Some(*f),
        StyleValue::Int(i) => Some(*i as f64),
        StyleValue::Str(s) => {
            let parsed: Result<f64, _> = fast_float2::parse(s.trim());
            parsed.ok()
        },
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}

/// Float coercion: floats, integers and numeric strings pass.
#[inline]
pub fn float_val(value: &StyleValue, default: f64) -> f64 {
    parse_float(value).unwrap_or(default)
}

/// Numeric coercion for measures that may be whole or fractional.
#[inline]
pub fn numeric_val(value: &StyleValue, default: f64) -> f64 {
    float_val(value, default)
}

/// Optional numeric coercion: null clears, invalid input keeps `current`.
pub fn opt_numeric_val(value: &StyleValue, current: Option<f64>) -> Option<f64> {
    match value {
        StyleValue::Null => None,
        _ => parse_float(value).or(current),
    }
}

/// Optional integer coercion: null clears, invalid input keeps `current`.
pub fn opt_int_val(value: &StyleValue, current: Option<i64>) -> Option<i64> {
    match value {
        StyleValue::Null => None,
        StyleValue::Int(i) => Some(*i),
        StyleValue::Str(s) => s.trim().parse::<i64>().ok().or(current),
        _ => current,
    }
}

/// Membership coercion over a set of string tokens.
pub fn enum_val<'a>(value: &'a StyleValue, allowed: &[&str], default: &'a str) -> &'a str {
    match value {
        StyleValue::Str(s) if allowed.contains(&s.as_str()) => s,
        _ => default,
    }
}

/// Optional string: null clears, non-strings keep `current`.
pub fn string_val(value: &StyleValue, current: Option<String>) -> Option<String> {
    match value {
        StyleValue::Null => None,
        StyleValue::Str(s) if s.is_empty() => None,
        StyleValue::Str(s) => Some(s.clone()),
        StyleValue::Int(i) => Some(i.to_string()),
        _ => current,
    }
}

/// Hex color (`RRGGBB`) or `auto`, passed through unchanged when valid.
pub fn color_val(value: &StyleValue, current: Option<String>) -> Option<String> {
    match value {
        StyleValue::Null => None,
        StyleValue::Str(s) if is_color(s) => Some(s.clone()),
        _ => current,
    }
}

fn is_color(s: &str) -> bool {
    s == "auto" || (s.len() == 6 && s.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// A schema enumeration with a fixed set of tokens.
pub trait XmlEnum: Sized + Copy {
    /// Token written to the XML attribute.
    fn to_xml(self) -> &'static str;
    /// Parse a token; `None` when it is not a member.
    fn from_xml(s: &str) -> Option<Self>;
}

/// Membership coercion for a typed schema enumeration.
pub fn xml_enum_val<T: XmlEnum>(value: &StyleValue, default: T) -> T {
    value.as_str().and_then(T::from_xml).unwrap_or(default)
}

/// Optional typed enumeration: null clears, non-members keep `current`.
pub fn opt_xml_enum_val<T: XmlEnum>(value: &StyleValue, current: Option<T>) -> Option<T> {
    match value {
        StyleValue::Null => None,
        _ => value.as_str().and_then(T::from_xml).or(current),
    }
}

/// Declare a schema enumeration together with its [`XmlEnum`] implementation.
macro_rules! xml_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $crate::style::value::XmlEnum for $name {
            #[inline]
            fn to_xml(self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }

            #[inline]
            fn from_xml(s: &str) -> Option<Self> {
                match s {
                    $($token $(| $alias)* => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use xml_enum;
