//! Angular sectors and ring arithmetic for candidate placement.
//!
//! Screen coordinates are y-down throughout, so "up" is angle -π/2.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_6, PI};

use crate::api::types::Category;

/// Angular width shared by all four sectors. The centers below leave at
/// least this much room between neighbors, so sectors never overlap.
pub const SECTOR_WIDTH: f32 = 1.25;

/// An angular region around the current word reserved for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    /// Center bearing in radians, y-down.
    pub center: f32,
    /// Full angular width in radians.
    pub width: f32,
}

impl Sector {
    /// Bearing for slot `slot` of a ring holding `count` nodes, spread
    /// evenly across the sector with a half-slot margin at each edge.
    pub fn slot_angle(&self, slot: usize, count: usize) -> f32 {
        let count = count.max(1);
        self.center - self.width / 2.0 + self.width * (slot as f32 + 0.5) / count as f32
    }
}

/// Sector reserved for a category: synonyms up, antonyms lower-right,
/// related left, everything else lower-left.
pub fn sector_for(category: Category) -> Sector {
    let center = match category {
        Category::Synonym => -FRAC_PI_2,
        Category::Antonym => FRAC_PI_6,
        Category::Other => 7.0 * PI / 12.0,
        Category::Related => PI,
    };
    Sector {
        center,
        width: SECTOR_WIDTH,
    }
}

/// Ring (layer) index for the `index`-th candidate of a sector.
pub fn ring_of(index: usize, capacity: usize) -> usize {
    index / capacity.max(1)
}

/// Slot within the ring for the `index`-th candidate of a sector.
pub fn slot_of(index: usize, capacity: usize) -> usize {
    index % capacity.max(1)
}

/// How many nodes the given ring actually holds for `total` candidates.
pub fn ring_len(total: usize, ring: usize, capacity: usize) -> usize {
    let capacity = capacity.max(1);
    total.saturating_sub(ring * capacity).min(capacity)
}
