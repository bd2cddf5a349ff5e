//! Query types

/// Which relation list a traversal or link follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward parents
    Parents,
    /// Toward children
    Children,
}

impl Direction {
    /// The paired direction: a child's parent link mirrors a parent's child link
    pub fn opposite(self) -> Self {
        match self {
            Direction::Parents => Direction::Children,
            Direction::Children => Direction::Parents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        assert_eq!(Direction::Parents.opposite(), Direction::Children);
        assert_eq!(Direction::Children.opposite().opposite(), Direction::Children);
    }
}
