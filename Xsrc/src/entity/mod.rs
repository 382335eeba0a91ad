//! Entity tree model
//!
//! Builds the nested entity tree of a rulebase from the flat records of an
//! XSRC document.
//!
//! # Overview
//!
//! - **`XsrcGlobal`**: wrapper around the single `global` root entity
//! - **`XsrcEntity`**: a tree node with its attributes and owned children
//! - **`EntityBuilder`**: deserialize / resolve operations, implemented by
//!   `XsrcEntityBuilder`
//!
//! # Usage
//!
//! ```no_run
//! use xsrc::entity::{EntityBuilder, XsrcEntityBuilder};
//!
//! let builder = XsrcEntityBuilder::new();
//! let global = builder.build_tree("Rulebase/Inputs.xsrc".as_ref())?;
//! if let Some(customer) = global.entity("customer") {
//!     println!("{} attributes", customer.attributes.len());
//! }
//! # Ok::<(), xsrc::Error>(())
//! ```

mod builder;
mod index;
mod options;
mod types;

pub use builder::{EntityBuilder, XsrcEntityBuilder, XsrcFile, build_tree};
pub use index::ChildIndex;
pub use options::{BuilderOptions, ChildResolution};
pub use types::{DepthFirst, XsrcAttribute, XsrcEntity, XsrcGlobal};
