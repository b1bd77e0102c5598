// Copyright 2026 the Topopath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delta-encoded arcs and directed references to them.

use crate::{DecodeError, Point, TranslateScale};

/// A boundary segment stored once and shared by every ring that follows it.
///
/// Positions are quantized and delta-encoded: the first position is relative
/// to the origin and each following one is relative to its predecessor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Arc(Vec<[i64; 2]>);

impl Arc {
    /// Create an arc from delta-encoded positions.
    pub fn from_deltas(deltas: Vec<[i64; 2]>) -> Arc {
        Arc(deltas)
    }

    /// The delta-encoded positions, as stored.
    #[inline]
    pub fn deltas(&self) -> &[[i64; 2]] {
        &self.0
    }

    /// The number of positions in the arc.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the arc has no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the absolute positions of the arc.
    ///
    /// Each call starts its running sums from the origin, so iterators over
    /// the same arc are independent of each other. Iteration ends early at
    /// the first position whose running sum does not fit in an `i64`.
    pub fn decode(&self, transform: TranslateScale) -> DecodeArc<'_> {
        DecodeArc {
            deltas: self.0.iter(),
            x: 0,
            y: 0,
            transform,
        }
    }
}

/// Iterator over the absolute positions of an [`Arc`].
///
/// Created by [`Arc::decode`].
#[derive(Clone, Debug)]
pub struct DecodeArc<'a> {
    deltas: std::slice::Iter<'a, [i64; 2]>,
    x: i64,
    y: i64,
    transform: TranslateScale,
}

impl Iterator for DecodeArc<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let [dx, dy] = *self.deltas.next()?;
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => {
                self.x = x;
                self.y = y;
                Some(self.transform.apply(x, y))
            }
            _ => {
                // Fuse, so no later delta is summed onto a truncated total.
                let rest: &[[i64; 2]] = &[];
                self.deltas = rest.iter();
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.deltas.size_hint().1)
    }
}

/// A directed reference to an arc.
///
/// In a document this is a signed integer: a non-negative value walks the
/// arc at that index as stored, and a negative value walks the arc at its
/// one's complement (`!index`) backwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i64", into = "i64")
)]
pub enum ArcRef {
    /// Walk the arc in stored order.
    Forward(usize),
    /// Walk the arc from its last position to its first.
    Reverse(usize),
}

impl ArcRef {
    /// Parse a signed arc index.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::ArcNotFound`] if the index cannot address any
    /// arc on this platform.
    pub fn from_signed(index: i64) -> Result<ArcRef, DecodeError> {
        let not_found = |_| DecodeError::ArcNotFound(index);
        if index >= 0 {
            usize::try_from(index).map(ArcRef::Forward).map_err(not_found)
        } else {
            usize::try_from(!index).map(ArcRef::Reverse).map_err(not_found)
        }
    }

    /// The signed integer form, as written in a document.
    ///
    /// An index beyond `i64::MAX` saturates, keeping its direction; no such
    /// arc can exist, and lookups report it as not found.
    pub fn to_signed(self) -> i64 {
        match self {
            ArcRef::Forward(i) => i64::try_from(i).unwrap_or(i64::MAX),
            ArcRef::Reverse(i) => !i64::try_from(i).unwrap_or(i64::MAX),
        }
    }

    /// The index of the referenced arc.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            ArcRef::Forward(i) | ArcRef::Reverse(i) => i,
        }
    }

    /// Returns `true` if the arc is walked backwards.
    #[inline]
    pub fn is_reversed(self) -> bool {
        matches!(self, ArcRef::Reverse(_))
    }
}

impl TryFrom<i64> for ArcRef {
    type Error = DecodeError;

    #[inline]
    fn try_from(index: i64) -> Result<ArcRef, DecodeError> {
        ArcRef::from_signed(index)
    }
}

impl From<ArcRef> for i64 {
    #[inline]
    fn from(arc: ArcRef) -> i64 {
        arc.to_signed()
    }
}
