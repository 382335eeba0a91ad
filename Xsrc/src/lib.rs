//! # xsrc
//!
//! Loader for XSRC rule-definition files. An XSRC file is a flat list of entity
//! records, each pointing at its containing parent; this crate reads that list
//! and rebuilds the nested entity tree rooted at the `global` entity.
//!
//! ## Quick Start
//!
//! ```no_run
//! use xsrc::prelude::*;
//!
//! let global = xsrc::build_tree("Rulebase/Inputs.xsrc")?;
//! for child in &global.global_entity.children {
//!     println!("{} ({} attributes)", child.name, child.attributes.len());
//! }
//! # Ok::<(), xsrc::Error>(())
//! ```
//!
//! ### Step by step
//!
//! ```no_run
//! use xsrc::prelude::*;
//!
//! let builder = XsrcEntityBuilder::new();
//! let document = builder.deserialize("Rulebase/Inputs.xsrc".as_ref())?;
//! let customers = builder.resolve_children("global", &document);
//! let global = builder.resolve_root(&document)?;
//! # Ok::<(), xsrc::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `xsrc` inspection binary

pub mod entity;
pub mod error;
pub mod formats;

// Re-exports for convenience
pub use entity::{EntityBuilder, XsrcEntityBuilder, XsrcFile, build_tree};
pub use error::{Error, Result};
pub use formats::xsrc::{parse_xsrc, read_xsrc};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::entity::{
        BuilderOptions, ChildIndex, ChildResolution, EntityBuilder, XsrcAttribute, XsrcEntity,
        XsrcEntityBuilder, XsrcFile, XsrcGlobal,
    };
    pub use crate::error::{Error, Result};
    pub use crate::formats::xsrc::{
        EntityAttribute, GLOBAL_REF, XsrcDocument, XsrcRecord, parse_xsrc, read_xsrc,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
