//! XSRC (rule-definition XML) format module

mod document;
mod reader;

pub use document::{EntityAttribute, GLOBAL_REF, XsrcDocument, XsrcRecord};
pub use reader::{parse_xsrc, read_xsrc};
