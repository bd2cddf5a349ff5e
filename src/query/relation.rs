//! Generation-bounded relation traversal

use crate::graph::{Graph, NodeId};

use super::filter::Filter;

/// Query collecting nodes reachable along one relation key.
///
/// For every start node, in order, the query emits the entries of its
/// relation list that pass the filter, then the results of the same query
/// run on that whole (unfiltered) list with one generation less. Filtering
/// never prunes the walk: a relative that fails the filter still leads to
/// its own relatives.
///
/// There is no cycle guard. With `generations` left unbounded, a cycle in
/// the relation lists makes `execute` run forever; bound the depth when the
/// graph may be cyclic.
#[derive(Debug, Clone)]
pub struct RelationQuery {
    /// Relation key to follow
    pub relation: String,
    /// Which relatives to emit
    pub filter: Filter,
    /// Extra generations beyond the direct relatives (`None` = unbounded)
    pub generations: Option<usize>,
}

impl RelationQuery {
    /// Create a query following `relation`, matching all nodes, unbounded
    pub fn along(relation: impl Into<String>) -> Self {
        Self {
            relation: relation.into(),
            filter: Filter::all(),
            generations: None,
        }
    }

    /// Set the filter applied to each generation's relatives
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Bound the depth: 0 returns direct relatives only
    pub fn generations(mut self, generations: usize) -> Self {
        self.generations = Some(generations);
        self
    }

    /// Set the depth bound from an optional value
    pub fn max_generations(mut self, generations: Option<usize>) -> Self {
        self.generations = generations;
        self
    }

    /// Execute the query from `nodes` against a graph
    ///
    /// Start ids missing from the graph contribute nothing, as do dangling
    /// entries met along the way.
    pub fn execute(&self, graph: &Graph, nodes: &[NodeId]) -> Vec<NodeId> {
        let mut result = Vec::new();

        // Each entry is a node whose relation list is still to be emitted,
        // with the generations left below it.
        let mut stack: Vec<(NodeId, Option<usize>)> =
            nodes.iter().rev().map(|id| (*id, self.generations)).collect();

        while let Some((id, remaining)) = stack.pop() {
            let relatives = graph.relation(&id, &self.relation);

            result.extend(relatives.iter().copied().filter(|relative| {
                graph
                    .get_node(relative)
                    .is_some_and(|node| self.filter.matches(node))
            }));

            let next = match remaining {
                Some(0) => continue,
                Some(n) => Some(n - 1),
                None => None,
            };
            stack.extend(relatives.iter().rev().map(|relative| (*relative, next)));
        }

        tracing::trace!(
            relation = %self.relation,
            start = nodes.len(),
            found = result.len(),
            "relation query"
        );
        result
    }
}
