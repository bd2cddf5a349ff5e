//! Lineage: a handle binding a node set to a pair of relation keys

use crate::graph::{Graph, GraphResult, NodeId};
use crate::query::{Direction, Filter, RelationQuery};

use super::keys::RelationKeys;
use super::set::NodeSet;

/// View over a set of nodes and the relation keys fixed at construction.
///
/// The handle holds no relation data: every operation reads or writes the
/// lists stored on the nodes in the [`Graph`] passed to it, so handles over
/// overlapping nodes see each other's changes immediately.
#[derive(Debug, Clone)]
pub struct Lineage {
    nodes: NodeSet,
    keys: RelationKeys,
}

impl Lineage {
    /// Bind `nodes` using the process-wide default keys
    pub fn new(nodes: impl Into<NodeSet>) -> Self {
        Self::with_relation_keys(nodes, RelationKeys::process_default())
    }

    /// Bind `nodes`, overriding the process-wide default keys.
    ///
    /// Every supplied (non-empty) name replaces the process-wide default and
    /// stays in effect for later handles built without names. Omitted names
    /// come from the current default.
    pub fn with_keys(
        nodes: impl Into<NodeSet>,
        parents_key: Option<&str>,
        children_key: Option<&str>,
    ) -> Self {
        let keys = RelationKeys::override_process_default(parents_key, children_key);
        Self::with_relation_keys(nodes, keys)
    }

    /// Bind `nodes` with explicit keys, leaving the process-wide default alone
    pub fn with_relation_keys(nodes: impl Into<NodeSet>, keys: RelationKeys) -> Self {
        Self {
            nodes: nodes.into(),
            keys,
        }
    }

    /// The bound node ids
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// The relation keys this handle uses
    pub fn keys(&self) -> &RelationKeys {
        &self.keys
    }

    /// A query along `direction`, matching everything, unbounded
    pub fn query(&self, direction: Direction) -> RelationQuery {
        RelationQuery::along(self.keys.key(direction))
    }

    /// Parents of the bound nodes passing `filter`, up to `generations`
    /// further generations (`None` = unbounded)
    pub fn parents(&self, graph: &Graph, filter: &Filter, generations: Option<usize>) -> Vec<NodeId> {
        self.related(graph, Direction::Parents, filter, generations)
    }

    /// Children of the bound nodes passing `filter`, up to `generations`
    /// further generations (`None` = unbounded)
    pub fn children(&self, graph: &Graph, filter: &Filter, generations: Option<usize>) -> Vec<NodeId> {
        self.related(graph, Direction::Children, filter, generations)
    }

    /// Make every node in `parents` a parent of every bound node, and every
    /// bound node a child of each of them
    pub fn add_parents(&self, graph: &mut Graph, parents: impl Into<NodeSet>) -> GraphResult<&[NodeId]> {
        let parents: NodeSet = parents.into();
        self.link(graph, Direction::Parents, &parents)?;
        Ok(self.nodes())
    }

    /// Make every node in `children` a child of every bound node, and every
    /// bound node a parent of each of them
    pub fn add_children(&self, graph: &mut Graph, children: impl Into<NodeSet>) -> GraphResult<&[NodeId]> {
        let children: NodeSet = children.into();
        self.link(graph, Direction::Children, &children)?;
        Ok(self.nodes())
    }

    /// Undo [`Lineage::add_parents`] once per listed parent. Unknown relations are ignored.
    pub fn remove_parents(&self, graph: &mut Graph, parents: impl Into<NodeSet>) -> GraphResult<&[NodeId]> {
        let parents: NodeSet = parents.into();
        self.unlink(graph, Direction::Parents, &parents)?;
        Ok(self.nodes())
    }

    /// Undo [`Lineage::add_children`] once per listed child. Unknown relations are ignored.
    pub fn remove_children(&self, graph: &mut Graph, children: impl Into<NodeSet>) -> GraphResult<&[NodeId]> {
        let children: NodeSet = children.into();
        self.unlink(graph, Direction::Children, &children)?;
        Ok(self.nodes())
    }

    fn related(
        &self,
        graph: &Graph,
        direction: Direction,
        filter: &Filter,
        generations: Option<usize>,
    ) -> Vec<NodeId> {
        self.query(direction)
            .filter(filter.clone())
            .max_generations(generations)
            .execute(graph, &self.nodes)
    }

    // Both sides are checked up front so a failed call leaves the graph as it was.
    fn link(&self, graph: &mut Graph, direction: Direction, others: &[NodeId]) -> GraphResult<()> {
        graph.ensure_nodes(&self.nodes)?;
        graph.ensure_nodes(others)?;

        graph.add_relations(others, self.keys.key(direction.opposite()), &self.nodes)?;
        graph.add_relations(&self.nodes, self.keys.key(direction), others)
    }

    // Related ids already removed from the graph have no list to clean up,
    // but the bound nodes may still point at them.
    fn unlink(&self, graph: &mut Graph, direction: Direction, others: &[NodeId]) -> GraphResult<()> {
        graph.ensure_nodes(&self.nodes)?;

        let present: Vec<NodeId> = others.iter().copied().filter(|id| graph.contains(id)).collect();
        graph.remove_relations(&present, self.keys.key(direction.opposite()), &self.nodes)?;
        graph.remove_relations(&self.nodes, self.keys.key(direction), others)
    }
}
