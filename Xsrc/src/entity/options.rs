//! Tree builder options
//!
//! This module provides configuration for how [`XsrcEntityBuilder`] turns the
//! flat record list into a tree.
//!
//! [`XsrcEntityBuilder`]: super::XsrcEntityBuilder

/// How child records are located for each entity.
///
/// Both strategies produce identical trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChildResolution {
    /// Index records by parent key once, then recurse over the index.
    #[default]
    Indexed,
    /// Scan the full record list for every entity.
    Scan,
}

impl ChildResolution {
    /// Short label used in logs and CLI output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Indexed => "indexed",
            Self::Scan => "scan",
        }
    }
}

/// Options for building an entity tree.
///
/// # Example
///
/// ```
/// use xsrc::prelude::*;
///
/// let options = BuilderOptions::new().with_resolution(ChildResolution::Scan);
/// let builder = XsrcEntityBuilder::with_options(options);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuilderOptions {
    /// Child lookup strategy
    /// Default: [`ChildResolution::Indexed`]
    pub resolution: ChildResolution,
}

impl BuilderOptions {
    /// Create options with the default resolution strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the child lookup strategy.
    #[must_use]
    pub fn with_resolution(mut self, resolution: ChildResolution) -> Self {
        self.resolution = resolution;
        self
    }
}
