//! Border sizes and colors, composed into section, table and cell styles.
use super::value::{StyleValue, color_val, opt_numeric_val};

/// One border edge. Size is in eighths of a point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BorderSide {
    pub size: Option<f64>,
    pub color: Option<String>,
}

impl BorderSide {
    /// An edge is written once it has a size.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.size.is_some()
    }

    /// Color to write, black when none was given.
    pub fn color_or_default(&self) -> &str {
        self.color.as_deref().unwrap_or("000000")
    }
}

/// The border edges of a box. Inside edges only apply to tables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Borders {
    pub top: BorderSide,
    pub left: BorderSide,
    pub right: BorderSide,
    pub bottom: BorderSide,
    pub inside_h: BorderSide,
    pub inside_v: BorderSide,
}

impl Borders {
    /// Outer edges in schema order.
    pub fn outer(&self) -> [(&'static str, &BorderSide); 4] {
        [
            ("top", &self.top),
            ("left", &self.left),
            ("bottom", &self.bottom),
            ("right", &self.right),
        ]
    }

    pub fn has_outer(&self) -> bool {
        self.outer().iter().any(|(_, side)| side.is_set())
    }

    pub fn has_any(&self) -> bool {
        self.has_outer() || self.inside_h.is_set() || self.inside_v.is_set()
    }

    pub(crate) fn set_outer_size(&mut self, value: &StyleValue) {
        for side in [&mut self.top, &mut self.left, &mut self.right, &mut self.bottom] {
            side.size = opt_numeric_val(value, side.size);
        }
    }

    pub(crate) fn set_outer_color(&mut self, value: &StyleValue) {
        for side in [&mut self.top, &mut self.left, &mut self.right, &mut self.bottom] {
            side.color = color_val(value, side.color.take());
        }
    }
}

/// Border setters for a style that owns a `borders: Borders` field.
macro_rules! border_setters {
    ($($ty:ty),+ $(,)?) => {
        $(impl $ty {
            pub fn borders(&self) -> &$crate::style::Borders {
                &self.borders
            }

            /// Size of all four outer edges.
            pub fn set_border_size(&mut self, value: impl Into<$crate::style::StyleValue>) -> &mut Self {
                self.borders.set_outer_size(&value.into());
                self
            }

            /// Color of all four outer edges.
            pub fn set_border_color(&mut self, value: impl Into<$crate::style::StyleValue>) -> &mut Self {
                self.borders.set_outer_color(&value.into());
                self
            }

            pub fn set_border_top_size(&mut self, value: impl Into<$crate::style::StyleValue>) -> &mut Self {
                let side = &mut self.borders.top;
                side.size = $crate::style::value::opt_numeric_val(&value.into(), side.size);
                self
            }

            pub fn set_border_top_color(&mut self, value: impl Into<$crate::style::StyleValue>) -> &mut Self {
                let side = &mut self.borders.top;
                side.color = $crate::style::value::color_val(&value.into(), side.color.take());
                self
            }

            pub fn set_border_left_size(&mut self, value: impl Into<$crate::style::StyleValue>) -> &mut Self {
                let side = &mut self.borders.left;
                side.size = $crate::style::value::opt_numeric_val(&value.into(), side.size);
                self
            }

            pub fn set_border_left_color(&mut self, value: impl Into<$crate::style::StyleValue>) -> &mut Self {
                let side = &mut self.borders.left;
                side.color = $crate::style::value::color_val(&value.into(), side.color.take());
                self
            }

            pub fn set_border_right_size(&mut self, value: impl Into<$crate::style::StyleValue>) -> &mut Self {
                let side = &mut self.borders.right;
                side.size = $crate::style::value::opt_numeric_val(&value.into(), side.size);
                self
            }

            pub fn set_border_right_color(&mut self, value: impl Into<$crate::style::StyleValue>) -> &mut Self {
                let side = &mut self.borders.right;
                side.color = $crate::style::value::color_val(&value.into(), side.color.take());
                self
            }

            pub fn set_border_bottom_size(&mut self, value: impl Into<$crate::style::StyleValue>) -> &mut Self {
                let side = &mut self.borders.bottom;
                side.size = $crate::style::value::opt_numeric_val(&value.into(), side.size);
                self
            }

            pub fn set_border_bottom_color(&mut self, value: impl Into<$crate::style::StyleValue>) -> &mut Self {
                let side = &mut self.borders.bottom;
                side.color = $crate::style::value::color_val(&value.into(), side.color.take());
                self
            }
        })+
    };
}

pub(crate) use border_setters;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outer_size_applies_to_all_edges() {
        let mut borders = Borders::default();
        borders.set_outer_size(&StyleValue::Int(6));
        assert!(borders.outer().iter().all(|(_, side)| side.size == Some(6.0)));
        assert!(!borders.inside_h.is_set());
    }

    #[test]
    fn test_invalid_color_keeps_current() {
        let mut borders = Borders::default();
        borders.set_outer_color(&StyleValue::from("FF0000"));
        borders.set_outer_color(&StyleValue::from("not a color"));
        assert_eq!(borders.top.color.as_deref(), Some("FF0000"));
        assert_eq!(borders.bottom.color_or_default(), "FF0000");
        assert_eq!(BorderSide::default().color_or_default(), "000000");
    }
}
