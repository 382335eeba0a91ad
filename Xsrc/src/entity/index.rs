//! Parent-key index over a flat record list

use std::collections::HashMap;

use crate::formats::xsrc::{XsrcDocument, XsrcRecord};

/// Maps each `containmentParentId` to the records it contains.
///
/// Built in one pass; each child list keeps the document's record order.
#[derive(Debug, Default)]
pub struct ChildIndex<'a> {
    children_by_parent: HashMap<&'a str, Vec<&'a XsrcRecord>>,
}

impl<'a> ChildIndex<'a> {
    /// Index every record that names a containment parent.
    #[must_use]
    pub fn new(document: &'a XsrcDocument) -> Self {
        let mut children_by_parent: HashMap<&'a str, Vec<&'a XsrcRecord>> = HashMap::new();
        for record in document.records() {
            if let Some(parent) = record.containment_parent_id.as_deref() {
                children_by_parent.entry(parent).or_default().push(record);
            }
        }
        Self { children_by_parent }
    }

    /// Records directly contained by `parent_key`, in source order.
    #[must_use]
    pub fn children_of(&self, parent_key: &str) -> &[&'a XsrcRecord] {
        self.children_by_parent
            .get(parent_key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct parent keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children_by_parent.len()
    }

    /// Returns `true` if no record names a containment parent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children_by_parent.is_empty()
    }
}
