//! Core graph data structures

mod error;
mod node;
mod relations;
mod store;


pub use error::{GraphError, GraphResult};
pub use node::{Node, NodeId, Properties, PropertyValue};
pub use store::Graph;
