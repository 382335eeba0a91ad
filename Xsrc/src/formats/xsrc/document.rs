//! XSRC document structures
//!
//! These mirror the XML shape one-to-one. Containment is only expressed through
//! `containmentParentId`, so the document is a flat record list; the nested
//! tree lives in [`crate::entity`].

use serde::Deserialize;

/// `ref` value that marks the root record of every rulebase.
pub const GLOBAL_REF: &str = "global";

/// A parsed XSRC file: every `<entity>` record in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct XsrcDocument {
    /// Entity records, in the order they appear in the file.
    #[serde(rename = "entity", default)]
    pub entities: Vec<XsrcRecord>,
}

/// A single `<entity>` record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct XsrcRecord {
    /// Record identifier. The global record has none.
    #[serde(rename = "@id")]
    pub id: Option<String>,
    /// Reference name, `"global"` for the root record.
    #[serde(rename = "@ref")]
    pub reference: Option<String>,
    /// `id` of the record that contains this one.
    #[serde(rename = "@containmentParentId")]
    pub containment_parent_id: Option<String>,
    /// Display name.
    #[serde(rename = "@publicId")]
    pub public_id: Option<String>,
    /// Attributes declared on the record, in source order.
    #[serde(rename = "attribute", default)]
    pub attributes: Vec<EntityAttribute>,
}

/// An `<attribute>` declared on an entity record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntityAttribute {
    /// Public attribute name (e.g., "`CustomerDOB`").
    #[serde(rename = "@publicName")]
    pub public_name: String,
    /// Declared type (e.g., "`date`", "`boolean`").
    #[serde(rename = "@type")]
    pub type_name: String,
}

impl XsrcDocument {
    /// Creates a document from already-parsed records.
    #[must_use]
    pub fn new(entities: Vec<XsrcRecord>) -> Self {
        Self { entities }
    }

    /// Number of records in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the document holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over all records in source order.
    pub fn records(&self) -> impl Iterator<Item = &XsrcRecord> {
        self.entities.iter()
    }

    /// Iterate over the records whose `ref` is `"global"`.
    pub fn global_records(&self) -> impl Iterator<Item = &XsrcRecord> {
        self.entities.iter().filter(|r| r.is_global())
    }
}

impl XsrcRecord {
    /// Returns `true` if this is the global root record.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.reference.as_deref() == Some(GLOBAL_REF)
    }

    /// Returns `true` if this record is contained by `parent_key`.
    #[must_use]
    pub fn is_child_of(&self, parent_key: &str) -> bool {
        self.containment_parent_id.as_deref() == Some(parent_key)
    }
}

impl EntityAttribute {
    /// Creates a new attribute declaration.
    #[must_use]
    pub fn new(public_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            public_name: public_name.into(),
            type_name: type_name.into(),
        }
    }
}
