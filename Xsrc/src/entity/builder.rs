//! Entity tree builder
//!
//! Turns the flat, parent-referencing record list of an XSRC document into a
//! nested tree. Each record points at its container through
//! `containmentParentId`; starting from the `global` record, children are
//! resolved recursively by matching that key against each entity's `id`.
//!
//! Containment chains are assumed acyclic. A cycle reachable from the key
//! being resolved recurses without bound; cycles that never hang off the
//! global entity are simply left out of the tree.
//!
//! Resolution recurses once per containment level, so nesting depth is bounded
//! by the thread's stack. Chains tens of thousands of levels deep overflow a
//! default-sized stack; rulebases nest a handful of levels.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::formats::xsrc::{GLOBAL_REF, XsrcDocument, read_xsrc};

use super::index::ChildIndex;
use super::options::{BuilderOptions, ChildResolution};
use super::types::{XsrcEntity, XsrcGlobal};

/// Operations for loading an XSRC rulebase into an entity tree.
pub trait EntityBuilder {
    /// Read and parse an XSRC file into its flat record list.
    ///
    /// # Errors
    /// Returns [`Error::FileNotFound`] or [`Error::Parse`].
    fn deserialize(&self, path: &Path) -> Result<XsrcDocument>;

    /// Build the tree hanging off the single `ref="global"` record.
    ///
    /// # Errors
    /// Returns [`Error::RootNotFound`] if no record is global and
    /// [`Error::AmbiguousRoot`] if several are.
    fn resolve_root(&self, document: &XsrcDocument) -> Result<XsrcGlobal>;

    /// Resolve every entity contained by `parent_key`, recursively.
    ///
    /// Returns an empty list when nothing is contained by `parent_key`.
    fn resolve_children(&self, parent_key: &str, document: &XsrcDocument) -> Vec<XsrcEntity>;

    /// Deserialize `path` and resolve its global entity.
    ///
    /// # Errors
    /// Returns whatever [`EntityBuilder::deserialize`] or
    /// [`EntityBuilder::resolve_root`] report.
    fn build_tree(&self, path: &Path) -> Result<XsrcGlobal> {
        let document = self.deserialize(path)?;
        self.resolve_root(&document)
    }
}

/// The XSRC entity builder.
///
/// Stateless apart from its options; every call builds a fresh tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct XsrcEntityBuilder {
    options: BuilderOptions,
}

impl XsrcEntityBuilder {
    /// Create a builder with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with the given options.
    #[must_use]
    pub fn with_options(options: BuilderOptions) -> Self {
        Self { options }
    }

    /// The options this builder was created with.
    #[must_use]
    pub fn options(&self) -> &BuilderOptions {
        &self.options
    }
}

impl EntityBuilder for XsrcEntityBuilder {
    fn deserialize(&self, path: &Path) -> Result<XsrcDocument> {
        read_xsrc(path)
    }

    fn resolve_root(&self, document: &XsrcDocument) -> Result<XsrcGlobal> {
        let mut globals = document.global_records();
        let record = globals.next().ok_or(Error::RootNotFound)?;
        let extra = globals.count();
        if extra > 0 {
            return Err(Error::AmbiguousRoot { count: extra + 1 });
        }

        tracing::debug!(
            "Resolving entity tree from {} records ({} lookup)",
            document.len(),
            self.options.resolution.as_str()
        );

        let reference = record.reference.as_deref().unwrap_or(GLOBAL_REF);
        let children = self.resolve_children(reference, document);
        let global = XsrcGlobal {
            global_entity: XsrcEntity::global(record, reference, children),
        };

        tracing::info!("Built entity tree with {} entities", global.entity_count());
        Ok(global)
    }

    fn resolve_children(&self, parent_key: &str, document: &XsrcDocument) -> Vec<XsrcEntity> {
        match self.options.resolution {
            ChildResolution::Indexed => resolve_indexed(&ChildIndex::new(document), parent_key),
            ChildResolution::Scan => resolve_scanned(document, parent_key),
        }
    }
}

fn resolve_indexed(index: &ChildIndex<'_>, parent_key: &str) -> Vec<XsrcEntity> {
    index
        .children_of(parent_key)
        .iter()
        .map(|record| {
            let children = record
                .id
                .as_deref()
                .map(|id| resolve_indexed(index, id))
                .unwrap_or_default();
            XsrcEntity::contained(record, parent_key, children)
        })
        .collect()
}

fn resolve_scanned(document: &XsrcDocument, parent_key: &str) -> Vec<XsrcEntity> {
    document
        .records()
        .filter(|record| record.is_child_of(parent_key))
        .map(|record| {
            let children = record
                .id
                .as_deref()
                .map(|id| resolve_scanned(document, id))
                .unwrap_or_default();
            XsrcEntity::contained(record, parent_key, children)
        })
        .collect()
}

/// An XSRC file bound to a builder.
///
/// # Example
///
/// ```no_run
/// use xsrc::XsrcFile;
///
/// let rulebase = XsrcFile::new("Rulebase/Inputs.xsrc");
/// let global = rulebase.build()?;
/// println!("{} entities", global.entity_count());
/// # Ok::<(), xsrc::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct XsrcFile {
    path: PathBuf,
    builder: XsrcEntityBuilder,
}

impl XsrcFile {
    /// Bind `path` to a default builder.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            builder: XsrcEntityBuilder::new(),
        }
    }

    /// Replace the builder options.
    #[must_use]
    pub fn with_options(mut self, options: BuilderOptions) -> Self {
        self.builder = XsrcEntityBuilder::with_options(options);
        self
    }

    /// Path of the bound file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the flat record list.
    ///
    /// # Errors
    /// See [`EntityBuilder::deserialize`].
    pub fn read(&self) -> Result<XsrcDocument> {
        self.builder.deserialize(&self.path)
    }

    /// Build the entity tree.
    ///
    /// # Errors
    /// See [`EntityBuilder::build_tree`].
    pub fn build(&self) -> Result<XsrcGlobal> {
        self.builder.build_tree(&self.path)
    }
}

/// Build the entity tree for an XSRC file with default options.
///
/// # Errors
/// See [`EntityBuilder::build_tree`].
pub fn build_tree<P: AsRef<Path>>(path: P) -> Result<XsrcGlobal> {
    XsrcEntityBuilder::new().build_tree(path.as_ref())
}
