//! Relation key names and the process-wide default

use serde::{Deserialize, Serialize};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::query::Direction;

/// Key used for the parents list unless configured otherwise
pub const DEFAULT_PARENTS_KEY: &str = "parents";
/// Key used for the children list unless configured otherwise
pub const DEFAULT_CHILDREN_KEY: &str = "children";

/// Process-wide default keys. `None` until the first explicit write, which
/// means the built-in names are in effect.
static PROCESS_DEFAULT: RwLock<Option<RelationKeys>> = RwLock::new(None);

/// The pair of relation key names a handle reads and writes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationKeys {
    /// Key of the parents list
    #[serde(default = "default_parents")]
    pub parents: String,
    /// Key of the children list
    #[serde(default = "default_children")]
    pub children: String,
}

fn default_parents() -> String {
    DEFAULT_PARENTS_KEY.to_string()
}

fn default_children() -> String {
    DEFAULT_CHILDREN_KEY.to_string()
}

impl Default for RelationKeys {
    fn default() -> Self {
        Self {
            parents: default_parents(),
            children: default_children(),
        }
    }
}

impl RelationKeys {
    /// Create a key pair
    pub fn new(parents: impl Into<String>, children: impl Into<String>) -> Self {
        Self {
            parents: parents.into(),
            children: children.into(),
        }
    }

    /// Key for one direction
    pub fn key(&self, direction: Direction) -> &str {
        match direction {
            Direction::Parents => &self.parents,
            Direction::Children => &self.children,
        }
    }

    /// Keys currently in effect for handles built without explicit names
    pub fn process_default() -> Self {
        read_default().clone().unwrap_or_default()
    }

    /// Replace the process-wide default. Handles created before keep their keys.
    pub fn set_process_default(keys: RelationKeys) {
        tracing::debug!(parents = %keys.parents, children = %keys.children, "process default relation keys set");
        *write_default() = Some(keys);
    }

    /// Go back to the built-in `"parents"` / `"children"` names
    pub fn reset_process_default() {
        tracing::debug!("process default relation keys reset");
        *write_default() = None;
    }

    /// Overwrite the default fields that are supplied and return the result.
    ///
    /// Empty names count as not supplied. Runs under a single write lock so
    /// concurrent overrides of different fields are not lost.
    pub(crate) fn override_process_default(parents: Option<&str>, children: Option<&str>) -> Self {
        let parents = parents.filter(|name| !name.is_empty());
        let children = children.filter(|name| !name.is_empty());

        let mut guard = write_default();
        let mut keys = guard.clone().unwrap_or_default();
        if parents.is_none() && children.is_none() {
            return keys;
        }

        if let Some(name) = parents {
            keys.parents = name.to_string();
        }
        if let Some(name) = children {
            keys.children = name.to_string();
        }
        tracing::debug!(parents = %keys.parents, children = %keys.children, "process default relation keys overridden");
        *guard = Some(keys.clone());
        keys
    }
}

// Writers only ever assign a whole value, so a poisoned lock still holds a
// valid one.
fn read_default() -> RwLockReadGuard<'static, Option<RelationKeys>> {
    PROCESS_DEFAULT
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_default() -> RwLockWriteGuard<'static, Option<RelationKeys>> {
    PROCESS_DEFAULT
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The process default itself is exercised in tests/process_default.rs,
    // which runs in its own binary.

    #[test]
    fn test_default_names() {
        let keys = RelationKeys::default();
        assert_eq!(keys.parents, "parents");
        assert_eq!(keys.children, "children");
    }

    #[test]
    fn test_key_by_direction() {
        let keys = RelationKeys::new("up", "down");
        assert_eq!(keys.key(Direction::Parents), "up");
        assert_eq!(keys.key(Direction::Children), "down");
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let keys: RelationKeys = serde_json::from_str(r#"{"children": "kids"}"#).unwrap();
        assert_eq!(keys, RelationKeys::new("parents", "kids"));
    }
}
