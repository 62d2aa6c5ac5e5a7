//! Unit conversion utilities.
//!
//! Page, margin, spacing and indentation values are kept in twips (twentieths of a
//! point). Font sizes are declared in points and written in half-points. Image sizes
//! are declared in CSS pixels for the VML shape style.

pub const TWIPS_PER_POINT: f64 = 20.0;
pub const TWIPS_PER_INCH: f64 = 1440.0;
pub const TWIPS_PER_CM: f64 = 1440.0 / 2.54;
pub const TWIPS_PER_MM: f64 = 1440.0 / 25.4;
pub const TWIPS_PER_PIXEL: f64 = 15.0;

#[inline]
pub fn point_to_twip(pt: f64) -> f64 {
    pt * TWIPS_PER_POINT
}

#[inline]
pub fn inch_to_twip(inches: f64) -> f64 {
    inches * TWIPS_PER_INCH
}

#[inline]
pub fn cm_to_twip(cm: f64) -> f64 {
    cm * TWIPS_PER_CM
}

#[inline]
pub fn mm_to_twip(mm: f64) -> f64 {
    mm * TWIPS_PER_MM
}

/// Pixels at 96 dpi.
#[inline]
pub fn pixel_to_twip(px: f64) -> f64 {
    px * TWIPS_PER_PIXEL
}

#[inline]
pub fn twip_to_point(twips: f64) -> f64 {
    twips / TWIPS_PER_POINT
}

/// Font size in points to the half-point value stored in `w:sz`.
#[inline]
pub fn point_to_half_point(pt: f64) -> f64 {
    pt * 2.0
}

/// Line height multiplier to the `w:line` value used with `w:lineRule="auto"`.
#[inline]
pub fn line_height_to_line(multiplier: f64) -> f64 {
    multiplier * 240.0
}
