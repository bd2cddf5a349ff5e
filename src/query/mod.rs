//! Query system for relation graphs
//!
//! Provides node filters and generation-bounded traversal along a
//! relation key.

mod filter;
mod relation;
mod types;

pub use filter::{resembles, Filter, NodePredicate};
pub use relation::RelationQuery;
pub use types::Direction;
