//! Graph: the store that owns every node record

use super::error::{GraphError, GraphResult};
use super::node::{Node, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Owner of the node records.
///
/// Relation data lives on the nodes themselves, so any number of handles
/// over overlapping node ids observe the same lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    /// Nodes in this graph
    pub nodes: HashMap<NodeId, Node>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Add a node, replacing any node with the same id
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id;
        self.nodes.insert(id, node);
        id
    }

    /// Remove a node.
    ///
    /// Other nodes keep whatever references they hold to it; queries skip
    /// ids that are no longer present.
    pub fn remove_node(&mut self, id: &NodeId) -> Option<Node> {
        self.nodes.remove(id)
    }

    /// Get a node by ID
    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get a mutable reference to a node
    pub fn get_node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Check if a node exists
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Get all nodes
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Relation list of `id` under `key`; empty for unknown nodes
    pub fn relation(&self, id: &NodeId, key: &str) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|node| node.relation(key))
            .unwrap_or(&[])
    }

    /// Look up every id, keeping order and skipping ids not in the graph
    pub fn resolve<'a>(&'a self, ids: &[NodeId]) -> Vec<&'a Node> {
        ids.iter().filter_map(|id| self.nodes.get(id)).collect()
    }

    /// Fail with `NodeNotFound` on the first id missing from the graph
    pub fn ensure_nodes(&self, ids: &[NodeId]) -> GraphResult<()> {
        match ids.iter().find(|id| !self.nodes.contains_key(*id)) {
            Some(missing) => Err(GraphError::NodeNotFound(*missing)),
            None => Ok(()),
        }
    }

    /// Serialize the whole graph to a JSON string
    pub fn to_json(&self) -> GraphResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rebuild a graph from a JSON snapshot produced by [`Graph::to_json`]
    pub fn from_json(json: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::PropertyValue;

    #[test]
    fn test_add_and_get_node() {
        let mut graph = Graph::new();
        let id = graph.add_node(Node::new().with_field("name", "a"));

        assert!(graph.contains(&id));
        assert_eq!(graph.node_count(), 1);
        assert_eq!(
            graph.get_node(&id).and_then(|n| n.field("name")),
            Some(&PropertyValue::String("a".into()))
        );
    }

    #[test]
    fn test_get_node_mut_edits_in_place() {
        let mut graph = Graph::new();
        let id = graph.add_node(Node::new().with_field("name", "a"));

        if let Some(node) = graph.get_node_mut(&id) {
            node.fields.insert("name".into(), "b".into());
        }

        assert_eq!(
            graph.get_node(&id).and_then(|n| n.field("name")),
            Some(&PropertyValue::String("b".into()))
        );
        assert!(graph.get_node_mut(&NodeId::new()).is_none());
    }

    #[test]
    fn test_remove_node_leaves_references() {
        let mut graph = Graph::new();
        let a = graph.add_node(Node::new());
        let b = graph.add_node(Node::new());
        graph.add_relations(&[a], "children", &[b]).unwrap();

        assert!(graph.remove_node(&b).is_some());
        assert_eq!(graph.relation(&a, "children"), &[b]);
        assert!(graph.resolve(&[b]).is_empty());
    }

    #[test]
    fn test_relation_unknown_node_is_empty() {
        let graph = Graph::new();
        assert!(graph.relation(&NodeId::new(), "children").is_empty());
    }

    #[test]
    fn test_resolve_keeps_order() {
        let mut graph = Graph::new();
        let a = graph.add_node(Node::new().with_field("n", 1_i64));
        let b = graph.add_node(Node::new().with_field("n", 2_i64));

        let resolved: Vec<NodeId> = graph.resolve(&[b, a, b]).iter().map(|n| n.id).collect();
        assert_eq!(resolved, vec![b, a, b]);
    }

    #[test]
    fn test_ensure_nodes_reports_first_missing() {
        let mut graph = Graph::new();
        let a = graph.add_node(Node::new());
        let ghost = NodeId::new();

        assert!(graph.ensure_nodes(&[a]).is_ok());
        match graph.ensure_nodes(&[a, ghost]) {
            Err(GraphError::NodeNotFound(id)) => assert_eq!(id, ghost),
            other => panic!("expected NodeNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Graph::from_json("not json"),
            Err(GraphError::Serialization(_))
        ));
    }
}
