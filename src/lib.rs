//! Lineage: In-Memory Parent/Child Relation Engine
//!
//! Links caller-owned records with bidirectional parent/child relations and
//! walks those relations across a bounded or unbounded number of
//! generations, filtering by partial record or by predicate.
//!
//! # Core Concepts
//!
//! - **Nodes**: Records with free-form fields plus relation lists keyed by name
//! - **Graph**: The store owning the nodes; all relation data lives on them
//! - **Lineage**: A handle over a node set and a pair of relation keys,
//!   exposing the six relation operations
//!
//! # Example
//!
//! ```
//! use lineage::{Filter, Graph, Lineage, Node, RelationKeys};
//!
//! let mut graph = Graph::new();
//! let root = graph.add_node(Node::new().with_field("name", "root"));
//! let leaf = graph.add_node(Node::new().with_field("name", "leaf"));
//!
//! let family = Lineage::with_relation_keys(root, RelationKeys::default());
//! family.add_children(&mut graph, leaf).unwrap();
//!
//! assert_eq!(family.children(&graph, &Filter::field("name", "leaf"), None), vec![leaf]);
//! ```
//!
//! # Cycles
//!
//! Traversal has no cycle guard. Querying a cyclic graph without a
//! generation bound never returns.

mod graph;
pub mod handle;
pub mod query;

pub use graph::{Graph, GraphError, GraphResult, Node, NodeId, Properties, PropertyValue};
pub use handle::{Lineage, NodeSet, RelationKeys};
pub use query::{resembles, Direction, Filter, RelationQuery};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
