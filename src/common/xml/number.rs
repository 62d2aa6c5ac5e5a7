//! Number formatting for attribute values.
use std::fmt::Write as FmtWrite;

/// Write a number with at most two decimals and no trailing zeros.
///
/// # Examples
///
/// ```
/// use docweave::common::xml::write_num;
///
/// let mut buf = String::new();
/// write_num(&mut buf, 10.0);
/// assert_eq!(buf, "10");
/// buf.clear();
/// write_num(&mut buf, 10.123);
/// assert_eq!(buf, "10.12");
/// ```
#[inline]
pub fn write_num(buf: &mut String, n: f64) {
    // Fast path: if it's an integer, use direct formatting
    if n.fract() == 0.0 && n.abs() < 1e10 {
        write_int(buf, n as i64);
    } else {
        // Round to 2 decimal places
        let rounded = (n * 100.0).round() / 100.0;

        let mut buffer = ryu::Buffer::new();
        let s = buffer.format(rounded);

        // Remove trailing zeros and decimal point if needed
        if s.contains('.') {
            let trimmed = s.trim_end_matches('0').trim_end_matches('.');
            buf.push_str(trimmed);
        } else {
            buf.push_str(s);
        }
    }
}

/// Write an integer.
#[inline]
pub fn write_int(buf: &mut String, n: i64) {
    let mut buffer = itoa::Buffer::new();
    buf.push_str(buffer.format(n));
}

/// Write a measure that the schema types as a whole number (twips, half-points, eighths).
#[inline]
pub fn write_whole(buf: &mut String, n: f64) {
    write_int(buf, n.round() as i64);
}

/// Write ` name="value"` for a whole-number attribute.
pub fn write_whole_attr(buf: &mut String, name: &str, n: f64) -> std::fmt::Result {
    write!(buf, " {}=\"", name)?;
    write_whole(buf, n);
    buf.push('"');
    Ok(())
}
