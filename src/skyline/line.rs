//! Single-sided skyline envelope
//!
//! A `SkylineLine` records the most extreme height seen so far along a
//! horizontal axis that starts at x = 0. Segments stay sorted and contiguous:
//! each one starts where the previous one ends. Past the last segment the
//! line is unconstrained; gaps in front of an insertion are filled with a
//! segment at the side's sentinel height.

use std::fmt;

use super::segment::SkylineSegment;
use super::side::{Side, MINIMUM_Y};
use crate::models::{Rect, Shape};
use crate::renderers::display_list::RenderStroke;
use crate::utils::float::real_is_equal;

/// Split remainders at or below this width are folded into their neighbour
pub const SPLIT_EPSILON: f64 = 1e-7;

/// How an inserted span relates to one existing segment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Overlap {
    /// Segment starts at or after the end of the span
    After,
    /// Segment ends at or before the start of the span
    Before,
    /// Segment height already wins over the inserted height
    Dominated,
    /// Span lies strictly inside the segment
    Nested,
    /// Span covers the segment or overlaps one of its edges
    Partial,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkylineLine {
    side: Side,
    segments: Vec<SkylineSegment>,
    epsilon: f64,
}

impl SkylineLine {
    pub fn new(side: Side) -> Self {
        Self::with_epsilon(side, SPLIT_EPSILON)
    }

    /// Create an empty line with a custom split tolerance
    ///
    /// Negative tolerances are clamped to 0. NaN and infinity fall back to
    /// `SPLIT_EPSILON`, since an infinite tolerance would swallow every insert.
    pub fn with_epsilon(side: Side, epsilon: f64) -> Self {
        let epsilon = if epsilon.is_finite() {
            epsilon.max(0.0)
        } else {
            log::warn!("skyline {:?}: non-finite split tolerance {}, using default", side, epsilon);
            SPLIT_EPSILON
        };
        Self {
            side,
            segments: Vec::new(),
            epsilon,
        }
    }

    pub fn north() -> Self {
        Self::new(Side::North)
    }

    pub fn south() -> Self {
        Self::new(Side::South)
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn is_north(&self) -> bool {
        self.side.is_north()
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn segments(&self) -> &[SkylineSegment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SkylineSegment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True once anything has been inserted
    pub fn is_valid(&self) -> bool {
        !self.segments.is_empty()
    }

    /// True when the segment carries a real height rather than the sentinel
    pub fn is_valid_segment(&self, segment: &SkylineSegment) -> bool {
        segment.y != self.side.sentinel()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Right end of the last segment (0 for an empty line)
    pub fn extent(&self) -> f64 {
        self.segments.last().map_or(0.0, |s| s.end())
    }

    /// Envelope height at `x`, or None where the line has no segment
    pub fn height_at(&self, x: f64) -> Option<f64> {
        let idx = self.segments.partition_point(|s| s.end() <= x);
        self.segments
            .get(idx)
            .filter(|s| s.x <= x)
            .map(|s| s.y)
    }

    pub fn add_shape(&mut self, shape: &Shape) {
        for rect in shape {
            self.add_rect(rect);
        }
    }

    /// Insert the edge of `rect` this line tracks (top for north, bottom for south)
    pub fn add_rect(&mut self, rect: &Rect) {
        self.add(rect.x, self.side.edge_of(rect), rect.width);
    }

    /// Merge height `y` over `[x, x + width)` into the envelope
    ///
    /// The part of the span left of 0 is clipped away. Spans that end up
    /// with no positive width are ignored.
    pub fn add(&mut self, x: f64, y: f64, width: f64) {
        if !(x.is_finite() && y.is_finite() && width.is_finite()) {
            log::warn!(
                "skyline {:?}: ignoring non-finite span x={} y={} w={}",
                self.side, x, y, width
            );
            return;
        }

        let (mut x, mut width) = (x, width);
        if x < 0.0 {
            width += x;
            x = 0.0;
        }
        if width <= 0.0 {
            log::trace!("skyline {:?}: empty span at x={}, skipped", self.side, x);
            return;
        }

        log::trace!("skyline {:?}: add x={} y={} w={}", self.side, x, y, width);

        let end = x + width;
        self.overlay(x, end, y);
        self.extend(x, end, y);
    }

    /// Merge the span into the segments that already exist
    fn overlay(&mut self, x: f64, end: f64, y: f64) {
        // Segments are sorted, so their starts and ends are both monotonic
        let first = self.segments.partition_point(|s| s.end() <= x);
        let last = self.segments.partition_point(|s| s.x < end);
        if first >= last {
            return;
        }

        // Take one untouched neighbour on each side so equal heights coalesce
        let start = first.saturating_sub(1);
        let stop = (last + 1).min(self.segments.len());

        let mut replacement = Vec::with_capacity(stop - start + 2);
        for seg in &self.segments[start..stop] {
            match self.classify(seg, x, end, y) {
                Overlap::After | Overlap::Before | Overlap::Dominated => {
                    push_merged(&mut replacement, *seg)
                }
                Overlap::Nested | Overlap::Partial => self.split(seg, x, end, y, &mut replacement),
            }
        }
        self.segments.splice(start..stop, replacement);
    }

    fn classify(&self, seg: &SkylineSegment, x: f64, end: f64, y: f64) -> Overlap {
        if end <= seg.x + self.epsilon {
            Overlap::After
        } else if x >= seg.end() - self.epsilon {
            Overlap::Before
        } else if self.side.dominates(seg.y, y) {
            Overlap::Dominated
        } else if x > seg.x && end < seg.end() {
            Overlap::Nested
        } else {
            Overlap::Partial
        }
    }

    /// Overwrite the overlapping part of `seg` with height `y`
    ///
    /// Produces up to three pieces: untouched left remainder, overwritten
    /// middle, untouched right remainder. Remainders no wider than the
    /// tolerance are absorbed by the middle piece.
    fn split(&self, seg: &SkylineSegment, x: f64, end: f64, y: f64, out: &mut Vec<SkylineSegment>) {
        let lo = x.max(seg.x);
        let hi = end.min(seg.end());
        let left = lo - seg.x;
        let right = seg.end() - hi;

        let mid_start = if left > self.epsilon {
            push_merged(out, SkylineSegment::new(seg.x, seg.y, left));
            lo
        } else {
            seg.x
        };
        let mid_end = if right > self.epsilon { hi } else { seg.end() };
        push_merged(out, SkylineSegment::new(mid_start, y, mid_end - mid_start));

        if right > self.epsilon {
            push_merged(out, SkylineSegment::new(hi, seg.y, right));
        }
    }

    /// Append whatever part of the span lies past the current end of the line
    fn extend(&mut self, x: f64, end: f64, y: f64) {
        let extent = self.extent();
        if end - extent <= self.epsilon {
            return;
        }

        let mut start = x.max(extent);
        if start - extent > self.epsilon {
            let filler = SkylineSegment::new(extent, self.side.sentinel(), start - extent);
            push_merged(&mut self.segments, filler);
        } else {
            start = extent;
        }
        push_merged(&mut self.segments, SkylineSegment::new(start, y, end - start));
    }

    /// Largest `self[x] - other[x]` over every x both lines cover
    ///
    /// Both lines are walked once in step, so the cost is linear in the
    /// total segment count. Returns `MINIMUM_Y` when the lines share no
    /// coverage.
    pub fn min_distance(&self, other: &SkylineLine) -> f64 {
        let mut dist = MINIMUM_Y;
        let (mut i, mut k) = (0, 0);

        while let (Some(a), Some(b)) = (self.segments.get(i), other.segments.get(k)) {
            let overlap = a.end().min(b.end()) - a.x.max(b.x);
            if overlap > self.epsilon {
                dist = dist.max(a.y - b.y);
            }
            if a.end() <= b.end() {
                i += 1;
            }
            if b.end() <= a.end() {
                k += 1;
            }
        }
        dist
    }

    /// Most extreme height on the line, or the sentinel when it is empty
    pub fn max(&self) -> f64 {
        self.segments
            .iter()
            .fold(self.side.sentinel(), |acc, s| self.side.extreme(acc, s.y))
    }

    /// Line-drawing instructions tracing the visible steps of the envelope
    ///
    /// Sentinel segments are skipped and break the outline.
    pub fn paint(&self) -> Vec<RenderStroke> {
        let mut strokes = Vec::new();
        let mut prev_y: Option<f64> = None;

        for seg in &self.segments {
            if !self.is_valid_segment(seg) {
                prev_y = None;
                continue;
            }
            if let Some(py) = prev_y {
                if !real_is_equal(py, seg.y) {
                    strokes.push(RenderStroke::new(seg.x, py, seg.x, seg.y));
                }
            }
            if !real_is_equal(seg.x, seg.end()) {
                strokes.push(RenderStroke::new(seg.x, seg.y, seg.end(), seg.y));
            }
            prev_y = Some(seg.y);
        }
        strokes
    }

    /// Segment-by-segment listing, one line per segment
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SkylineLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seg in &self.segments {
            writeln!(f, "   x {:.6} y {:.6} w {:.6}", seg.x, seg.y, seg.w)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SkylineLine {
    type Item = &'a SkylineSegment;
    type IntoIter = std::slice::Iter<'a, SkylineSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Push `seg`, extending the previous segment instead when heights match
fn push_merged(out: &mut Vec<SkylineSegment>, seg: SkylineSegment) {
    if let Some(last) = out.last_mut() {
        if last.y == seg.y {
            last.w = seg.end() - last.x;
            return;
        }
    }
    out.push(seg);
}
