//! NodeSet: one node or a sequence of nodes, normalized to a list

use std::ops::Deref;

use crate::graph::NodeId;

/// Ordered list of node ids; a single id becomes a one-element list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeSet(Vec<NodeId>);

impl NodeSet {
    /// Borrow the ids
    pub fn as_slice(&self) -> &[NodeId] {
        &self.0
    }

    /// Take the ids
    pub fn into_vec(self) -> Vec<NodeId> {
        self.0
    }
}

impl Deref for NodeSet {
    type Target = [NodeId];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<NodeId> for NodeSet {
    fn from(id: NodeId) -> Self {
        Self(vec![id])
    }
}

impl From<Vec<NodeId>> for NodeSet {
    fn from(ids: Vec<NodeId>) -> Self {
        Self(ids)
    }
}

impl From<&[NodeId]> for NodeSet {
    fn from(ids: &[NodeId]) -> Self {
        Self(ids.to_vec())
    }
}

impl From<&Vec<NodeId>> for NodeSet {
    fn from(ids: &Vec<NodeId>) -> Self {
        Self(ids.clone())
    }
}

impl<const N: usize> From<[NodeId; N]> for NodeSet {
    fn from(ids: [NodeId; N]) -> Self {
        Self(ids.to_vec())
    }
}

impl FromIterator<NodeId> for NodeSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
