//! Input geometry for skyline construction
//!
//! Rectangles are supplied by the layout engine in its own coordinate space.
//! The skyline only reads their scalar values; it never keeps a reference.

use serde::{Deserialize, Serialize};

use crate::errors::SkylineError;

/// Axis-aligned rectangle (y grows downward, so `top() <= bottom()` for
/// non-negative heights)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    /// Left edge
    pub x: f64,

    /// Top edge
    pub y: f64,

    pub width: f64,

    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Build a rectangle from its four edges
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Like `new`, but rejects NaN and infinite values
    ///
    /// Used at the JavaScript boundary where values arrive unchecked.
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, SkylineError> {
        let rect = Self::new(x, y, width, height);
        if rect.is_finite() {
            Ok(rect)
        } else {
            Err(SkylineError::InvalidRect(format!(
                "non-finite rectangle x={} y={} w={} h={}",
                x, y, width, height
            )))
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Copy of this rectangle moved by (dx, dy)
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Smallest rectangle containing both
    pub fn united(&self, other: &Rect) -> Self {
        Self::from_edges(
            self.left().min(other.left()),
            self.top().min(other.top()),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }
}

/// Ordered collection of rectangles making up one layout element (or a group)
///
/// Iteration order is insertion order. The skyline folds rectangles in that
/// order, though the resulting envelope does not depend on it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(transparent)]
pub struct Shape {
    rects: Vec<Rect>,
}

impl Shape {
    pub fn new() -> Self {
        Self { rects: Vec::new() }
    }

    pub fn add(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rect> {
        self.rects.iter()
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Move every rectangle by (dx, dy)
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for rect in &mut self.rects {
            *rect = rect.translated(dx, dy);
        }
    }

    /// Bounding box of all rectangles, or None for an empty shape
    pub fn bbox(&self) -> Option<Rect> {
        let mut iter = self.rects.iter();
        let first = *iter.next()?;
        Some(iter.fold(first, |acc, r| acc.united(r)))
    }
}

impl From<Vec<Rect>> for Shape {
    fn from(rects: Vec<Rect>) -> Self {
        Self { rects }
    }
}

impl FromIterator<Rect> for Shape {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        Self {
            rects: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Shape {
    type Item = &'a Rect;
    type IntoIter = std::slice::Iter<'a, Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(2.0, 10.0, 5.0, 10.0);
        assert_eq!(r.left(), 2.0);
        assert_eq!(r.right(), 7.0);
        assert_eq!(r.top(), 10.0);
        assert_eq!(r.bottom(), 20.0);
        assert_eq!(Rect::from_edges(2.0, 10.0, 7.0, 20.0), r);
    }

    #[test]
    fn test_try_new_rejects_nan() {
        assert!(Rect::try_new(0.0, f64::NAN, 1.0, 1.0).is_err());
        assert!(Rect::try_new(0.0, 0.0, f64::INFINITY, 1.0).is_err());
        assert!(Rect::try_new(0.0, 0.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn test_shape_bbox_and_translate() {
        let mut shape: Shape = vec![
            Rect::new(0.0, 0.0, 2.0, 2.0),
            Rect::new(5.0, -3.0, 1.0, 1.0),
        ]
        .into();
        assert_eq!(shape.bbox(), Some(Rect::from_edges(0.0, -3.0, 6.0, 2.0)));

        shape.translate(1.0, 1.0);
        assert_eq!(shape.rects()[0], Rect::new(1.0, 1.0, 2.0, 2.0));
        assert_eq!(shape.bbox(), Some(Rect::from_edges(1.0, -2.0, 7.0, 3.0)));
    }

    #[test]
    fn test_empty_shape_has_no_bbox() {
        assert!(Shape::new().bbox().is_none());
    }

    #[test]
    fn test_shape_deserializes_from_plain_array() {
        let shape: Shape = serde_json::from_str(
            r#"[{"x":0,"y":1,"width":2,"height":3}]"#,
        )
        .unwrap();
        assert_eq!(shape.len(), 1);
        assert_eq!(shape.rects()[0].bottom(), 4.0);
    }
}
