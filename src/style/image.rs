//! Image placement style.
use super::enums::{Alignment, WrappingStyle};
use super::value::{StyleValue, opt_numeric_val, opt_xml_enum_val, xml_enum_val};
use super::{StyleMeta, setter_table};

/// Size, alignment and wrapping of an image, object or watermark. Sizes are in pixels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageStyle {
    pub(crate) meta: StyleMeta,
    width: Option<f64>,
    height: Option<f64>,
    align: Option<Alignment>,
    margin_top: Option<f64>,
    margin_left: Option<f64>,
    wrapping_style: WrappingStyle,
}

impl ImageStyle {
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn height(&self) -> Option<f64> {
        self.height
    }

    pub fn align(&self) -> Option<Alignment> {
        self.align
    }

    pub fn margin_top(&self) -> Option<f64> {
        self.margin_top
    }

    pub fn margin_left(&self) -> Option<f64> {
        self.margin_left
    }

    pub fn wrapping_style(&self) -> WrappingStyle {
        self.wrapping_style
    }

    pub fn set_width(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.width = opt_numeric_val(&value.into(), self.width);
        self
    }

    pub fn set_height(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.height = opt_numeric_val(&value.into(), self.height);
        self
    }

    pub fn set_align(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.align = opt_xml_enum_val(&value.into(), self.align);
        self
    }

    pub fn set_margin_top(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.margin_top = opt_numeric_val(&value.into(), self.margin_top);
        self
    }

    pub fn set_margin_left(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.margin_left = opt_numeric_val(&value.into(), self.margin_left);
        self
    }

    pub fn set_wrapping_style(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.wrapping_style = xml_enum_val(&value.into(), self.wrapping_style);
        self
    }
}

setter_table!(IMAGE_SETTERS: ImageStyle {
    "index" => set_index,
    "width" => set_width,
    "height" => set_height,
    "align" => set_align,
    "marginTop" => set_margin_top,
    "marginLeft" => set_margin_left,
    "wrappingStyle" => set_wrapping_style,
});
