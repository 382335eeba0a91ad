//! Error types for `xsrc`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for XSRC loading operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// The XSRC input file does not exist or could not be opened.
    #[error("XSRC file not found: {}", .path.display())]
    FileNotFound {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying open error.
        #[source]
        source: std::io::Error,
    },

    // ==================== Parsing Errors ====================
    /// The file is not well-formed XML or does not match the XSRC record shape.
    #[error("XSRC parse error: {0}")]
    Parse(#[from] quick_xml::de::DeError),

    // ==================== Tree Building Errors ====================
    /// No record carries `ref="global"`.
    #[error("no entity with ref \"global\" found")]
    RootNotFound,

    /// More than one record carries `ref="global"`.
    #[error("expected exactly one entity with ref \"global\", found {count}")]
    AmbiguousRoot {
        /// Number of records claiming to be the global entity.
        count: usize,
    },
}

/// A specialized Result type for XSRC operations.
pub type Result<T> = std::result::Result<T, Error>;
