//! Polarity of a skyline line
//!
//! North and south lines share one algorithm; they differ only in which
//! height counts as "more extreme" and in the sentinel used where nothing
//! has been inserted.

use serde::{Deserialize, Serialize};

use crate::models::Rect;

/// Sentinel height of an unconstrained north segment
pub const MAXIMUM_Y: f64 = 1_000_000.0;

/// Sentinel height of an unconstrained south segment
pub const MINIMUM_Y: f64 = -1_000_000.0;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Upper envelope: smallest y (closest to the top) wins
    North,
    /// Lower envelope: largest y wins
    South,
}

impl Side {
    pub fn is_north(self) -> bool {
        matches!(self, Side::North)
    }

    /// Height standing in for "no constraint"
    pub fn sentinel(self) -> f64 {
        match self {
            Side::North => MAXIMUM_Y,
            Side::South => MINIMUM_Y,
        }
    }

    /// True when `current` is at least as extreme as `candidate`, meaning
    /// an insertion of `candidate` changes nothing
    pub fn dominates(self, current: f64, candidate: f64) -> bool {
        match self {
            Side::North => current <= candidate,
            Side::South => current >= candidate,
        }
    }

    /// The more extreme of two heights
    pub fn extreme(self, a: f64, b: f64) -> f64 {
        match self {
            Side::North => a.min(b),
            Side::South => a.max(b),
        }
    }

    /// The rectangle edge this side tracks
    pub fn edge_of(self, rect: &Rect) -> f64 {
        match self {
            Side::North => rect.top(),
            Side::South => rect.bottom(),
        }
    }
}
