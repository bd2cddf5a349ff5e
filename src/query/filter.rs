//! Node filters: structural match or predicate

use std::fmt;
use std::sync::Arc;

use crate::graph::{Node, Properties, PropertyValue};

/// Test whether `candidate` carries, for every key in `filter`, an equal value.
///
/// The empty filter matches every node. A key the candidate lacks never
/// matches, whatever the filter holds for it.
pub fn resembles(filter: &Properties, candidate: &Node) -> bool {
    filter
        .iter()
        .all(|(key, expected)| candidate.fields.get(key) == Some(expected))
}

/// Predicate signature accepted by [`Filter::predicate`]
pub type NodePredicate = dyn Fn(&Node) -> bool + Send + Sync;

/// Selects which related nodes a query returns
#[derive(Clone)]
pub enum Filter {
    /// Partial record; see [`resembles`]
    Structural(Properties),
    /// Arbitrary test on the node
    Predicate(Arc<NodePredicate>),
}

impl Filter {
    /// Filter that accepts every node
    pub fn all() -> Self {
        Self::Structural(Properties::new())
    }

    /// Structural filter on a single field
    pub fn field(key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self::all().and_field(key, value)
    }

    /// Add another required field.
    ///
    /// On a predicate filter the field check is combined with the predicate.
    pub fn and_field(self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        let key = key.into();
        let value = value.into();
        match self {
            Self::Structural(mut fields) => {
                fields.insert(key, value);
                Self::Structural(fields)
            }
            Self::Predicate(predicate) => Self::predicate(move |node| {
                node.fields.get(&key) == Some(&value) && predicate(node)
            }),
        }
    }

    /// Wrap a closure as a filter
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Node) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(f))
    }

    /// Whether `node` passes this filter
    pub fn matches(&self, node: &Node) -> bool {
        match self {
            Self::Structural(fields) => resembles(fields, node),
            Self::Predicate(predicate) => predicate(node),
        }
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::all()
    }
}

impl From<Properties> for Filter {
    fn from(fields: Properties) -> Self {
        Self::Structural(fields)
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structural(fields) => f.debug_tuple("Structural").field(fields).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}
