// Copyright 2026 the Topopath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rings: chains of arcs that bound a polygon or a hole.

use smallvec::SmallVec;

use crate::{ArcRef, DecodeError, Point, Topology};

/// A closed boundary, as an ordered list of directed arc references.
///
/// Consecutive arcs share an endpoint, and the last arc ends where the first
/// one starts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Ring(SmallVec<[ArcRef; 4]>);

impl Ring {
    /// Create a ring from directed arc references.
    pub fn new(arcs: impl IntoIterator<Item = ArcRef>) -> Ring {
        Ring(arcs.into_iter().collect())
    }

    /// Create a ring from signed arc indices.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::ArcNotFound`] for an index that cannot
    /// address an arc.
    pub fn from_signed(indices: &[i64]) -> Result<Ring, DecodeError> {
        indices.iter().map(|&i| ArcRef::from_signed(i)).collect()
    }

    /// The arc references, in traversal order.
    #[inline]
    pub fn arcs(&self) -> &[ArcRef] {
        &self.0
    }

    /// Returns `true` if the ring references no arcs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ArcRef> for Ring {
    fn from_iter<T: IntoIterator<Item = ArcRef>>(iter: T) -> Ring {
        Ring::new(iter)
    }
}

/// The absolute positions of a ring.
///
/// The ring is implicitly closed: the first position is not repeated at the
/// end, and the path encoder closes the subpath instead.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecodedRing(Vec<Point>);

impl DecodedRing {
    /// Wrap already decoded positions.
    pub fn from_points(points: Vec<Point>) -> DecodedRing {
        DecodedRing(points)
    }

    /// The positions of the ring.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// The number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the ring decoded to no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unwrap the positions.
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }
}

impl<'a> IntoIterator for &'a DecodedRing {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Topology {
    /// Decode a ring into absolute positions.
    ///
    /// Every resolved arc loses its last position before it is appended,
    /// because that position is the first one of the next arc (or, for the
    /// last arc, the first one of the ring). A degenerate ring that decodes
    /// to fewer than three positions is returned as is.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::EmptyRing`] for a ring without arcs, and any
    /// error from [`Topology::resolve`].
    pub fn assemble(&self, ring: &Ring) -> Result<DecodedRing, DecodeError> {
        if ring.is_empty() {
            return Err(DecodeError::EmptyRing);
        }
        let mut points = Vec::new();
        for &arc in ring.arcs() {
            let mut resolved = self.resolve(arc)?;
            resolved.pop();
            points.append(&mut resolved);
        }
        if points.len() < 3 {
            tracing::trace!(arcs = ring.arcs().len(), points = points.len(), "degenerate ring");
        }
        Ok(DecodedRing(points))
    }
}
