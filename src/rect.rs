// Copyright 2026 the Topopath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle.

use std::fmt;

use crate::{DecodeError, Point};

/// An axis-aligned rectangle, used for topology and geometry bounds.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "[f64; 4]")
)]
pub struct Rect {
    /// The minimum x coordinate.
    pub x0: f64,
    /// The minimum y coordinate.
    pub y0: f64,
    /// The maximum x coordinate.
    pub x1: f64,
    /// The maximum y coordinate.
    pub y1: f64,
}

impl Rect {
    /// A new rectangle from minimum and maximum coordinates.
    #[inline]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect { x0, y0, x1, y1 }
    }

    /// A rectangle containing exactly one point.
    #[inline]
    pub fn from_point(p: Point) -> Rect {
        Rect::new(p.x, p.y, p.x, p.y)
    }

    /// The width of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// The height of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// The smallest rectangle enclosing two rectangles.
    #[inline]
    #[must_use]
    pub fn union(&self, other: Rect) -> Rect {
        Rect::new(
            self.x0.min(other.x0),
            self.y0.min(other.y0),
            self.x1.max(other.x1),
            self.y1.max(other.y1),
        )
    }

    /// Compute the union with one point.
    #[inline]
    #[must_use]
    pub fn union_pt(&self, pt: Point) -> Rect {
        self.union(Rect::from_point(pt))
    }

    /// The bounds of a sequence of points, or `None` if it is empty.
    pub fn from_points_iter(points: impl IntoIterator<Item = Point>) -> Option<Rect> {
        let mut points = points.into_iter();
        let first = Rect::from_point(points.next()?);
        Some(points.fold(first, |r, p| r.union_pt(p)))
    }

    /// Replace negative coordinates with zero.
    ///
    /// Bounds of projected datasets can dip slightly below the origin; a
    /// drawing surface wants a viewport that starts at or after it.
    #[inline]
    #[must_use]
    pub fn clamp_non_negative(&self) -> Rect {
        Rect::new(
            self.x0.max(0.0),
            self.y0.max(0.0),
            self.x1.max(0.0),
            self.y1.max(0.0),
        )
    }

    /// The four coordinates, space separated, in `x0 y0 x1 y1` order.
    ///
    /// This is the form an SVG `viewBox` attribute takes when the bounds
    /// come straight from a topology's `bbox`.
    pub fn view_box(&self) -> String {
        format!("{} {} {} {}", self.x0, self.y0, self.x1, self.y1)
    }
}

impl From<[f64; 4]> for Rect {
    #[inline]
    fn from(v: [f64; 4]) -> Rect {
        Rect::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Rect> for [f64; 4] {
    #[inline]
    fn from(r: Rect) -> [f64; 4] {
        [r.x0, r.y0, r.x1, r.y1]
    }
}

impl TryFrom<Vec<f64>> for Rect {
    type Error = DecodeError;

    fn try_from(v: Vec<f64>) -> Result<Rect, DecodeError> {
        let coords: [f64; 4] = v
            .try_into()
            .map_err(|_| DecodeError::MalformedGeometry("bbox must have four components".into()))?;
        Ok(coords.into())
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.x0, self.y0, self.x1, self.y1)
    }
}
