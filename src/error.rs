//! Construction time errors.
//!
//! Inserting and querying never fail, only `Quadtree::try_with_config` reports these.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadtreeError {
    #[error("Capacity must be at least 1")]
    ZeroCapacity,

    #[error("Malformed boundary: from {from:?} to {to:?}")]
    MalformedBoundary { from: [f64; 2], to: [f64; 2] },
}
