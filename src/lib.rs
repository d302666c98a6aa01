//! Region Quadtree.
//!
//! A point quadtree answering "which entities lie in (or near) this region" queries.
//! Leaves hold up to `capacity` points, then split into four equal quadrants.
//!
//! # Contracts:
//! - Coordinates grow to the right and downwards (screen space), so _north_ is the top half.
//! - All geometric tests are boundary inclusive.
//! - Points outside of the root boundary are rejected, never clamped.
//!
pub mod config;
pub mod error;
pub mod quadtree;
pub mod region;

pub use config::QuadtreeConfig;
pub use error::QuadtreeError;
pub use quadtree::{Quadrant, Quadtree};
pub use region::Region;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position tagged with caller data.
///
/// The tree owns the `Point` itself, but `data` is whatever handle the caller chooses to store:
/// a borrow, an `Rc`, an entity id...
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<T> {
    x: f64,
    y: f64,
    data: T,
}

impl<T> Point<T> {
    pub fn new(x: f64, y: f64, data: T) -> Self {
        Self { x, y, data }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn position(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn into_data(self) -> T {
        self.data
    }

    /// Squared euclidean distance to `[x, y]`
    pub fn dist_sq(&self, [x, y]: [f64; 2]) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }
}
