//! Entity tree types

use serde::Serialize;

use crate::formats::xsrc::{EntityAttribute, XsrcRecord};

/// The resolved rulebase: a wrapper around the single `global` entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XsrcGlobal {
    /// Root of the entity tree.
    pub global_entity: XsrcEntity,
}

/// A node in the entity tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XsrcEntity {
    /// Internal identifier (record `id`, or `ref` for the global entity).
    pub name: String,
    /// Display identifier (record `publicId`).
    pub public_name: String,
    /// Name of the containing entity. `None` for the global entity.
    pub parent: Option<String>,
    /// Attributes, in source order.
    pub attributes: Vec<XsrcAttribute>,
    /// Contained entities, in source order.
    pub children: Vec<XsrcEntity>,
}

/// A typed attribute on an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XsrcAttribute {
    /// Public attribute name.
    pub public_name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub type_name: String,
}

impl From<&EntityAttribute> for XsrcAttribute {
    fn from(attr: &EntityAttribute) -> Self {
        Self {
            public_name: attr.public_name.clone(),
            type_name: attr.type_name.clone(),
        }
    }
}

impl XsrcEntity {
    /// Build the global entity from its record. `reference` doubles as both names.
    pub(crate) fn global(record: &XsrcRecord, reference: &str, children: Vec<Self>) -> Self {
        Self {
            name: reference.to_string(),
            public_name: reference.to_string(),
            parent: None,
            attributes: map_attributes(record),
            children,
        }
    }

    /// Build a contained entity from its record.
    pub(crate) fn contained(record: &XsrcRecord, parent_key: &str, children: Vec<Self>) -> Self {
        Self {
            name: record.id.clone().unwrap_or_default(),
            public_name: record.public_id.clone().unwrap_or_default(),
            parent: Some(parent_key.to_string()),
            attributes: map_attributes(record),
            children,
        }
    }

    /// Find an entity by `name` in this subtree (depth-first, self included).
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Self> {
        self.depth_first().find(|e| e.name == name)
    }

    /// Look up an attribute by public name.
    #[must_use]
    pub fn attribute(&self, public_name: &str) -> Option<&XsrcAttribute> {
        self.attributes.iter().find(|a| a.public_name == public_name)
    }

    /// Number of entities below this one.
    #[must_use]
    pub fn descendant_count(&self) -> usize {
        self.children.iter().map(|c| 1 + c.descendant_count()).sum()
    }

    /// Pre-order iterator over this entity and all of its descendants.
    #[must_use]
    pub fn depth_first(&self) -> DepthFirst<'_> {
        DepthFirst { stack: vec![self] }
    }
}

impl XsrcGlobal {
    /// Find an entity anywhere in the tree by `name`.
    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&XsrcEntity> {
        self.global_entity.find(name)
    }

    /// Total number of entities in the tree, the global entity included.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        1 + self.global_entity.descendant_count()
    }
}

/// Pre-order traversal over an entity subtree.
pub struct DepthFirst<'a> {
    stack: Vec<&'a XsrcEntity>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = &'a XsrcEntity;

    fn next(&mut self) -> Option<Self::Item> {
        let entity = self.stack.pop()?;
        self.stack.extend(entity.children.iter().rev());
        Some(entity)
    }
}

fn map_attributes(record: &XsrcRecord) -> Vec<XsrcAttribute> {
    record.attributes.iter().map(XsrcAttribute::from).collect()
}
