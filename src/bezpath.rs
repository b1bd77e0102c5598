// Copyright 2026 the Topopath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polyline paths made of closed subpaths.

use crate::{Point, Rect, RingSet};

/// A path of straight segments, possibly with multiple subpaths.
///
/// This is the structured counterpart of the path command string: renderers
/// that take drawing commands rather than SVG path data can walk
/// [`BezPath::elements`] directly.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct BezPath(Vec<PathEl>);

/// The element of a path.
///
/// A valid path has `MoveTo` at the beginning of each subpath.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathEl {
    /// Start a new subpath at the given point.
    MoveTo(Point),
    /// Draw a line from the current location to the point.
    LineTo(Point),
    /// Close the current subpath.
    ClosePath,
}

impl BezPath {
    /// Create a new path.
    pub fn new() -> BezPath {
        BezPath::default()
    }

    /// Create a path from a vector of path elements.
    pub fn from_vec(v: Vec<PathEl>) -> BezPath {
        BezPath(v)
    }

    /// Push a generic path element onto the path.
    pub fn push(&mut self, el: PathEl) {
        self.0.push(el);
    }

    /// Push a "move to" element onto the path.
    pub fn move_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::MoveTo(p.into()));
    }

    /// Push a "line to" element onto the path.
    pub fn line_to<P: Into<Point>>(&mut self, p: P) {
        self.push(PathEl::LineTo(p.into()));
    }

    /// Push a "close path" element onto the path.
    pub fn close_path(&mut self) {
        self.push(PathEl::ClosePath);
    }

    /// Append a closed polyline as its own subpath.
    ///
    /// Nothing is added for an empty slice.
    pub fn push_ring(&mut self, points: &[Point]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.move_to(*first);
        for &p in rest {
            self.line_to(p);
        }
        self.close_path();
    }

    /// Get the path elements.
    pub fn elements(&self) -> &[PathEl] {
        &self.0
    }

    /// Returns `true` if the path contains no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of subpaths, counted by their `MoveTo` elements.
    pub fn subpath_count(&self) -> usize {
        self.0
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count()
    }

    /// The smallest rectangle enclosing every point of the path.
    pub fn bounding_box(&self) -> Option<Rect> {
        Rect::from_points_iter(self.0.iter().filter_map(|el| match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(p),
            PathEl::ClosePath => None,
        }))
    }
}

impl<'a> IntoIterator for &'a BezPath {
    type Item = PathEl;
    type IntoIter = std::iter::Cloned<std::slice::Iter<'a, PathEl>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements().iter().cloned()
    }
}

impl IntoIterator for BezPath {
    type Item = PathEl;
    type IntoIter = std::vec::IntoIter<PathEl>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Extend<PathEl> for BezPath {
    fn extend<I: IntoIterator<Item = PathEl>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<PathEl> for BezPath {
    fn from_iter<T: IntoIterator<Item = PathEl>>(iter: T) -> BezPath {
        BezPath(iter.into_iter().collect())
    }
}

impl RingSet {
    /// Convert the rings to a path, one closed subpath per non-empty ring.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for ring in self.rings() {
            path.push_ring(ring.points());
        }
        path
    }
}
