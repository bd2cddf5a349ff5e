//! Graph fixtures for integration tests

use lineage::{Graph, Lineage, Node, NodeId, PropertyValue, RelationKeys};
use std::collections::HashMap;

/// A graph plus a label -> id lookup
#[derive(Debug, Default)]
pub struct Fixture {
    pub graph: Graph,
    ids: HashMap<String, NodeId>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node carrying `label` in its "label" field
    pub fn node(&mut self, label: &str) -> NodeId {
        let id = self.graph.add_node(labelled(label));
        self.ids.insert(label.to_string(), id);
        id
    }

    /// Id of a previously added label
    pub fn id(&self, label: &str) -> NodeId {
        *self
            .ids
            .get(label)
            .unwrap_or_else(|| panic!("no node labelled {label}"))
    }

    /// Labels of `ids`, in order
    pub fn names(&self, ids: &[NodeId]) -> Vec<String> {
        names(&self.graph, ids)
    }
}

/// A node with a "label" field
pub fn labelled(label: &str) -> Node {
    Node::new().with_field("label", label)
}

/// Labels of `ids` in order; ids without a string label are skipped
pub fn names(graph: &Graph, ids: &[NodeId]) -> Vec<String> {
    graph
        .resolve(ids)
        .into_iter()
        .filter_map(|node| match node.field("label") {
            Some(PropertyValue::String(s)) => Some(s.clone()),
            _ => None,
        })
        .collect()
}

/// Add one node per label and link each to the next as parent -> child
/// using the built-in key names
pub fn chain(fixture: &mut Fixture, labels: &[&str]) -> Vec<NodeId> {
    let ids: Vec<NodeId> = labels.iter().map(|label| fixture.node(label)).collect();
    for pair in ids.windows(2) {
        Lineage::with_relation_keys(pair[0], RelationKeys::default())
            .add_children(&mut fixture.graph, pair[1])
            .expect("chain nodes exist");
    }
    ids
}
