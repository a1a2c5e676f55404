//! Remaining pieces per shape for one player.

use serde::{Deserialize, Serialize};

use super::piece::Shape;

/// Remaining-piece counts for one style, keyed by shape.
///
/// Counts never go negative: taking from an exhausted shape is an engine
/// bug and panics. Legality checks must consult `remaining` first.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Inventory {
    counts: [u8; Shape::COUNT],
}

impl Inventory {
    /// Create an inventory holding `per_shape` pieces of every shape.
    #[must_use]
    pub const fn full(per_shape: u8) -> Self {
        Self {
            counts: [per_shape; Shape::COUNT],
        }
    }

    /// Pieces of `shape` still available.
    #[must_use]
    pub fn remaining(&self, shape: Shape) -> u8 {
        self.counts[shape.index()]
    }

    /// Check whether at least one piece of `shape` is available.
    #[must_use]
    pub fn has(&self, shape: Shape) -> bool {
        self.remaining(shape) > 0
    }

    /// Total pieces left across all shapes.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| u32::from(c)).sum()
    }

    /// Check if every shape is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterate over (Shape, count) pairs in `Shape::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Shape, u8)> + '_ {
        Shape::ALL.into_iter().map(move |s| (s, self.remaining(s)))
    }

    /// Remove one piece of `shape`.
    ///
    /// Panics if none are left.
    pub fn take(&mut self, shape: Shape) {
        let count = &mut self.counts[shape.index()];
        assert!(*count > 0, "Inventory for {} is already exhausted", shape);
        *count -= 1;
    }
}
