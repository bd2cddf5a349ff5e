//! Handles binding node sets to relation keys

mod lineage;
mod keys;
mod set;

pub use lineage::Lineage;
pub use keys::{RelationKeys, DEFAULT_CHILDREN_KEY, DEFAULT_PARENTS_KEY};
pub use set::NodeSet;
