//! One constant-height run of a skyline line

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SkylineSegment {
    /// Horizontal start offset
    pub x: f64,

    /// Height over the whole run
    pub y: f64,

    /// Width of the run
    pub w: f64,
}

impl SkylineSegment {
    pub fn new(x: f64, y: f64, w: f64) -> Self {
        Self { x, y, w }
    }

    /// Exclusive right end
    pub fn end(&self) -> f64 {
        self.x + self.w
    }
}
