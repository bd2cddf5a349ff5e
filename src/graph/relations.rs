//! Relation list mutation: the primitives behind every link and unlink

use super::error::GraphResult;
use super::node::NodeId;
use super::store::Graph;

impl Graph {
    /// Append every id in `related` to the `key` list of each node in `nodes`.
    ///
    /// Prior entries and order are kept and duplicates are not filtered.
    /// Every id in `nodes` must exist; this is checked before anything is
    /// touched. Entries of `related` are appended as-is. Lists that do not
    /// exist yet are created empty.
    pub fn add_relations(
        &mut self,
        nodes: &[NodeId],
        key: &str,
        related: &[NodeId],
    ) -> GraphResult<()> {
        self.ensure_nodes(nodes)?;

        // Every id in `nodes` exists past this point.
        for id in nodes {
            if let Some(node) = self.get_node_mut(id) {
                node.relation_mut(key).extend_from_slice(related);
            }
        }

        tracing::debug!(
            nodes = nodes.len(),
            related = related.len(),
            key,
            "added relations"
        );
        Ok(())
    }

    /// Remove the first occurrence of each id in `related` from the `key`
    /// list of each node in `nodes`.
    ///
    /// An id listed twice in `related` triggers two independent removals.
    /// Entries that are not present are skipped silently. Every id in
    /// `nodes` must exist.
    pub fn remove_relations(
        &mut self,
        nodes: &[NodeId],
        key: &str,
        related: &[NodeId],
    ) -> GraphResult<()> {
        self.ensure_nodes(nodes)?;

        let mut removed = 0usize;
        for id in nodes {
            let Some(list) = self.nodes.get_mut(id).and_then(|n| n.relations.get_mut(key)) else {
                continue;
            };
            for target in related {
                if let Some(pos) = list.iter().position(|entry| entry == target) {
                    list.remove(pos);
                    removed += 1;
                }
            }
        }

        tracing::debug!(nodes = nodes.len(), removed, key, "removed relations");
        Ok(())
    }
}
