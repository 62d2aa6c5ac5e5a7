//! Numbering id allocation for list items.
//!
//! The numbering part itself is written by the package assembler; the writer only needs a
//! `w:numId` per list in use.
use indexmap::IndexMap;

use crate::style::ListItemStyle;

/// Hands out the `w:numId` a list item refers to.
pub trait NumberingAllocator {
    fn num_id(&mut self, style: &ListItemStyle) -> u32;
}

/// Built-in list types keep their type code as numbering id. Named numbering styles get
/// ids after the built-in range, in first-use order.
#[derive(Debug, Default)]
pub struct DefaultNumbering {
    named: IndexMap<String, u32>,
}

impl DefaultNumbering {
    /// First id given to a named numbering style.
    pub const FIRST_NAMED_ID: u32 = 10;

    pub fn new() -> Self {
        Self::default()
    }

    /// Named numbering styles seen so far with their ids, in first-use order.
    pub fn named(&self) -> impl Iterator<Item = (&str, u32)> {
        self.named.iter().map(|(name, id)| (name.as_str(), *id))
    }
}

impl NumberingAllocator for DefaultNumbering {
    fn num_id(&mut self, style: &ListItemStyle) -> u32 {
        match style.num_style() {
            Some(name) => {
                let next = Self::FIRST_NAMED_ID + self.named.len() as u32;
                *self.named.entry(name.to_string()).or_insert(next)
            },
            None => style.list_type().code() as u32,
        }
    }
}
