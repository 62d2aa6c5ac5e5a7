//! XML text helpers shared by the part writers.

mod escape;
mod number;

pub use escape::{escape_text, escape_xml};
pub use number::{write_int, write_num, write_whole, write_whole_attr};
