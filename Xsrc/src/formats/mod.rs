//! File format support

pub mod xsrc;
