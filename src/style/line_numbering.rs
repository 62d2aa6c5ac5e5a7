//! Line numbering settings of a section.
use super::enums::LineNumberRestart;
use super::value::{StyleValue, int_val, opt_numeric_val, opt_xml_enum_val};
use super::{StyleMeta, setter_table};

/// Line numbering. `start` is one-based here and written zero-based.
///
/// `start` and `increment` are at least 1; smaller values keep the current setting.
#[derive(Debug, Clone, PartialEq)]
pub struct LineNumbering {
    pub(crate) meta: StyleMeta,
    start: i64,
    increment: i64,
    distance: Option<f64>,
    restart: Option<LineNumberRestart>,
}

impl Default for LineNumbering {
    fn default() -> Self {
        Self {
            meta: StyleMeta::default(),
            start: 1,
            increment: 1,
            distance: None,
            restart: None,
        }
    }
}

impl LineNumbering {
    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn increment(&self) -> i64 {
        self.increment
    }

    /// Distance from text in twips.
    pub fn distance(&self) -> Option<f64> {
        self.distance
    }

    pub fn restart(&self) -> Option<LineNumberRestart> {
        self.restart
    }

    pub fn set_start(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.start = Some(int_val(&value.into(), self.start))
            .filter(|n| *n >= 1)
            .unwrap_or(self.start);
        self
    }

    pub fn set_increment(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.increment = Some(int_val(&value.into(), self.increment))
            .filter(|n| *n >= 1)
            .unwrap_or(self.increment);
        self
    }

    pub fn set_distance(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.distance = opt_numeric_val(&value.into(), self.distance);
        self
    }

    pub fn set_restart(&mut self, value: impl Into<StyleValue>) -> &mut Self {
        self.restart = opt_xml_enum_val(&value.into(), self.restart);
        self
    }
}

setter_table!(LINE_NUMBERING_SETTERS: LineNumbering {
    "index" => set_index,
    "start" => set_start,
    "increment" => set_increment,
    "distance" => set_distance,
    "restart" => set_restart,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleProperties;
    use crate::style_map;

    #[test]
    fn test_defaults() {
        let ln = LineNumbering::default();
        assert_eq!(ln.start(), 1);
        assert_eq!(ln.increment(), 1);
        assert_eq!(ln.distance(), None);
        assert_eq!(ln.restart(), None);
    }

    #[test]
    fn test_from_map() {
        let ln = LineNumbering::from_map(&style_map! {
            "start" => 5,
            "increment" => "2",
            "distance" => 360,
            "restart" => "newPage",
        });
        assert_eq!(ln.start(), 5);
        assert_eq!(ln.increment(), 2);
        assert_eq!(ln.distance(), Some(360.0));
        assert_eq!(ln.restart(), Some(LineNumberRestart::NewPage));
    }

    #[test]
    fn test_start_below_one_is_ignored() {
        for bad in [0, -5, i64::MIN] {
            let mut ln = LineNumbering::from_map(&style_map! { "start" => 4 });
            ln.set_start(bad).set_increment(bad);
            assert_eq!(ln.start(), 4);
            assert_eq!(ln.increment(), 1);
        }
    }
}
