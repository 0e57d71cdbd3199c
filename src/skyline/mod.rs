//! Skyline collision envelopes
//!
//! A `Skyline` summarizes a set of already placed rectangles as two
//! piecewise-constant envelopes over the horizontal axis: the north line
//! (topmost extent) and the south line (bottommost extent). The layout
//! engine uses it to work out how far apart two blocks of content must be
//! stacked so that nothing overlaps.
//!
//! The summary is lossy on purpose: segments keep no reference to the
//! elements that produced them.
//!
//! A skyline is not synchronized. Mutate it from one owner only; read-only
//! queries may be shared.

pub mod line;
pub mod segment;
pub mod side;

pub use line::{SkylineLine, SPLIT_EPSILON};
pub use segment::SkylineSegment;
pub use side::{Side, MAXIMUM_Y, MINIMUM_Y};

use crate::config::SkylineConfig;
use crate::models::{Rect, Shape};
use crate::renderers::display_list::SkylineDisplayList;

#[derive(Clone, Debug, PartialEq)]
pub struct Skyline {
    north: SkylineLine,
    south: SkylineLine,
}

impl Skyline {
    pub fn new() -> Self {
        Self {
            north: SkylineLine::north(),
            south: SkylineLine::south(),
        }
    }

    /// Create an empty skyline whose lines use a custom split tolerance
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self {
            north: SkylineLine::with_epsilon(Side::North, epsilon),
            south: SkylineLine::with_epsilon(Side::South, epsilon),
        }
    }

    /// Create an empty skyline configured from `config`
    pub fn from_config(config: &SkylineConfig) -> Self {
        Self::with_epsilon(config.split_epsilon)
    }

    pub fn clear(&mut self) {
        self.north.clear();
        self.south.clear();
    }

    /// Insert the top edge of `rect` into north and its bottom edge into south
    pub fn add_rect(&mut self, rect: &Rect) {
        self.north.add(rect.x, rect.top(), rect.width);
        self.south.add(rect.x, rect.bottom(), rect.width);
    }

    pub fn add_shape(&mut self, shape: &Shape) {
        for rect in shape {
            self.add_rect(rect);
        }
    }

    /// Vertical distance needed to place `other` directly below `self`
    /// without any overlap
    ///
    /// Compares this skyline's south line against the other's north line.
    pub fn min_distance(&self, other: &Skyline) -> f64 {
        self.south.min_distance(&other.north)
    }

    pub fn north(&self) -> &SkylineLine {
        &self.north
    }

    pub fn south(&self) -> &SkylineLine {
        &self.south
    }

    pub fn north_mut(&mut self) -> &mut SkylineLine {
        &mut self.north
    }

    pub fn south_mut(&mut self) -> &mut SkylineLine {
        &mut self.south
    }

    /// Labelled dump of one side (north when `north` is true)
    ///
    /// The text is also written to the debug log.
    pub fn dump(&self, label: &str, north: bool) -> String {
        let line = if north { &self.north } else { &self.south };
        let text = format!("Skyline dump: {} ({:?})\n{}", label, line.side(), line);
        log::debug!("{}", text);
        text
    }

    /// Debug rendering of both lines, styled by `config`
    pub fn paint(&self, config: &SkylineConfig) -> SkylineDisplayList {
        SkylineDisplayList::from_skyline(self, config)
    }
}

impl Default for Skyline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_skyline_reports_sentinels() {
        let skyline = Skyline::new();
        assert_eq!(skyline.north().max(), MAXIMUM_Y);
        assert_eq!(skyline.south().max(), MINIMUM_Y);
    }

    #[test]
    fn test_add_rect_routes_edges() {
        let mut skyline = Skyline::new();
        skyline.add_rect(&Rect::new(0.0, 10.0, 5.0, 10.0));
        assert_eq!(skyline.north().segments(), &[SkylineSegment::new(0.0, 10.0, 5.0)]);
        assert_eq!(skyline.south().segments(), &[SkylineSegment::new(0.0, 20.0, 5.0)]);
    }

    #[test]
    fn test_add_shape_matches_per_rect_inserts() {
        let shape: Shape = vec![
            Rect::new(0.0, 10.0, 4.0, 2.0),
            Rect::new(2.0, 6.0, 4.0, 10.0),
        ]
        .into();

        let mut by_shape = Skyline::new();
        by_shape.add_shape(&shape);

        let mut by_rect = Skyline::new();
        for rect in &shape {
            by_rect.add_rect(rect);
        }
        assert_eq!(by_shape, by_rect);

        // a single line fed the same shape tracks the matching edge
        let mut north = SkylineLine::north();
        north.add_shape(&shape);
        assert_eq!(&north, by_shape.north());
    }

    #[test]
    fn test_clear_resets_both_lines() {
        let mut skyline = Skyline::new();
        skyline.add_rect(&Rect::new(1.0, 1.0, 1.0, 1.0));
        skyline.clear();
        assert!(skyline.north().is_empty());
        assert!(skyline.south().is_empty());
    }

    #[test]
    fn test_min_distance_stacks_below() {
        let mut upper = Skyline::new();
        upper.add_rect(&Rect::new(0.0, 0.0, 10.0, 20.0));
        let mut lower = Skyline::new();
        lower.add_rect(&Rect::new(0.0, 0.0, 10.0, 5.0));
        assert_eq!(upper.min_distance(&lower), 20.0);
        // the other way round only lower's bottom (5) meets upper's top (0)
        assert_eq!(lower.min_distance(&upper), 5.0);
    }

    #[test]
    fn test_dump_has_label_and_side() {
        let mut skyline = Skyline::new();
        skyline.add_rect(&Rect::new(0.0, 10.0, 5.0, 10.0));
        let text = skyline.dump("staff 1", true);
        assert!(text.starts_with("Skyline dump: staff 1 (North)\n"));
        assert!(text.contains("y 10.000000"));
        assert!(skyline.dump("staff 1", false).contains("y 20.000000"));
    }

    #[test]
    fn test_from_config_uses_epsilon() {
        let config = SkylineConfig {
            split_epsilon: 0.5,
            ..SkylineConfig::default()
        };
        let skyline = Skyline::from_config(&config);
        assert_eq!(skyline.north().epsilon(), 0.5);
        assert_eq!(skyline.south().epsilon(), 0.5);
    }
}
