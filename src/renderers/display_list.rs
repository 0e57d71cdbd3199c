//! Display list for skyline debug rendering
//!
//! Developer tooling draws skylines over the score to check collision
//! handling. The display list carries pre-computed line strokes so the
//! JavaScript side only has to draw them.

use serde::{Deserialize, Serialize};

use crate::config::SkylineConfig;
use crate::skyline::{Side, Skyline};

/// One straight stroke from (x1, y1) to (x2, y2)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RenderStroke {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl RenderStroke {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }
}

/// All strokes of one skyline line, with their style
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderPath {
    /// Which line the strokes trace
    pub side: Side,

    /// Stroke colour
    pub color: String,

    /// Stroke width
    pub line_width: f64,

    /// Connected strokes, left to right
    pub strokes: Vec<RenderStroke>,
}

/// Top-level display list for one skyline
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SkylineDisplayList {
    pub north: RenderPath,
    pub south: RenderPath,
}

impl SkylineDisplayList {
    /// Trace both lines of `skyline`, north in `config.north_color` and
    /// south in `config.south_color`
    pub fn from_skyline(skyline: &Skyline, config: &SkylineConfig) -> Self {
        Self {
            north: RenderPath {
                side: Side::North,
                color: config.north_color.clone(),
                line_width: config.line_width,
                strokes: skyline.north().paint(),
            },
            south: RenderPath {
                side: Side::South,
                color: config.south_color.clone(),
                line_width: config.line_width,
                strokes: skyline.south().paint(),
            },
        }
    }

    pub fn stroke_count(&self) -> usize {
        self.north.strokes.len() + self.south.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stroke_count() == 0
    }

    /// Bounding box of every stroke as (left, top, right, bottom)
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.north
            .strokes
            .iter()
            .chain(self.south.strokes.iter())
            .fold(None, |acc, s| {
                let (l, t, r, b) = acc.unwrap_or((s.x1, s.y1, s.x1, s.y1));
                Some((
                    l.min(s.x1).min(s.x2),
                    t.min(s.y1).min(s.y2),
                    r.max(s.x1).max(s.x2),
                    b.max(s.y1).max(s.y2),
                ))
            })
    }
}
