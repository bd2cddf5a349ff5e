//! Node representation in the relation graph

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Create a new random NodeId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a NodeId from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Typed field values
///
/// Equality is plain `PartialEq`: floats follow IEEE rules, so `NaN` never
/// equals anything, itself included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<PropertyValue>),
    Object(HashMap<String, PropertyValue>),
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Field collection
pub type Properties = HashMap<String, PropertyValue>;

/// A caller-owned record participating in the graph.
///
/// `fields` is the free-form record. `relations` holds the reserved relation
/// lists, keyed by relation key name ("parents" / "children" by default).
/// A list may contain the same id more than once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier
    pub id: NodeId,
    /// Caller-defined fields
    #[serde(default)]
    pub fields: Properties,
    /// Related node ids per relation key
    #[serde(default)]
    pub relations: HashMap<String, Vec<NodeId>>,
}

impl Node {
    /// Create a new node with no fields and no relations
    pub fn new() -> Self {
        Self {
            id: NodeId::new(),
            fields: HashMap::new(),
            relations: HashMap::new(),
        }
    }

    /// Add a field to the node
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Look up a field
    pub fn field(&self, key: &str) -> Option<&PropertyValue> {
        self.fields.get(key)
    }

    /// The relation list stored under `key`, empty when the list was never created
    pub fn relation(&self, key: &str) -> &[NodeId] {
        self.relations.get(key).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Mutable relation list under `key`, created empty on first use
    pub(crate) fn relation_mut(&mut self, key: &str) -> &mut Vec<NodeId> {
        self.relations.entry(key.to_string()).or_default()
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_missing_key_is_empty() {
        let node = Node::new();
        assert!(node.relation("children").is_empty());
        assert!(node.relations.is_empty());
    }

    #[test]
    fn test_relation_mut_creates_list() {
        let mut node = Node::new();
        let other = NodeId::new();
        node.relation_mut("children").push(other);
        assert_eq!(node.relation("children"), &[other]);
    }

    #[test]
    fn test_with_field_converts_values() {
        let node = Node::new()
            .with_field("name", "alice")
            .with_field("age", 31_i64)
            .with_field("active", true);

        assert_eq!(node.field("name"), Some(&PropertyValue::String("alice".into())));
        assert_eq!(node.field("age"), Some(&PropertyValue::Int(31)));
        assert_eq!(node.field("active"), Some(&PropertyValue::Bool(true)));
        assert_eq!(node.field("missing"), None);
    }

    #[test]
    fn test_nan_never_equal() {
        assert_ne!(PropertyValue::Float(f64::NAN), PropertyValue::Float(f64::NAN));
    }
}
