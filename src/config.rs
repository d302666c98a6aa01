use crate::error::QuadtreeError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_CAPACITY: usize = 5;
/// Bounds the recursion on piles of coincident points.
pub const DEFAULT_MAX_DEPTH: u32 = 32;

/// Tuning knobs shared by every node of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuadtreeConfig {
    /// Number of points a leaf holds before it splits
    pub capacity: usize,
    /// Nodes at this depth never split (the root is at depth 0).
    /// Such leaves keep accepting points past `capacity`.
    pub max_depth: u32,
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl QuadtreeConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn validate(&self) -> Result<(), QuadtreeError> {
        if self.capacity == 0 {
            return Err(QuadtreeError::ZeroCapacity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_five() {
        let config = QuadtreeConfig::default();

        assert_eq!(config.capacity, 5);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn zero_capacity_fails_validation() {
        let config = QuadtreeConfig::default().with_capacity(0).with_max_depth(4);

        assert_eq!(config.max_depth, 4);
        assert_eq!(config.validate(), Err(QuadtreeError::ZeroCapacity));
    }
}
