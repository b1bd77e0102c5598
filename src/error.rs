// Copyright 2026 the Topopath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors produced while decoding a topology.

use std::fmt;

/// An error which can be returned when decoding geometry from a [`Topology`].
///
/// Decoding never recovers locally: every variant is handed to the caller,
/// which decides whether to skip the offending geometry or abort.
///
/// [`Topology`]: crate::Topology
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// A signed arc index refers outside the topology's arc list.
    ///
    /// Holds the index as written in the ring, so reversed references keep
    /// their negative form.
    ArcNotFound(i64),
    /// The arc at this index has no positions.
    EmptyArc(usize),
    /// The running sums of the arc at this index leave the `i64` range.
    CoordinateOverflow(usize),
    /// A ring references no arcs.
    EmptyRing,
    /// The geometry decodes to no positions at all, so there is no path to
    /// draw.
    EmptyGeometry,
    /// The geometry type is neither `Polygon` nor `MultiPolygon`.
    UnsupportedGeometry(String),
    /// The transform's scale or translate is missing or not a pair.
    MalformedTransform(&'static str),
    /// The geometry's arc nesting does not match its type.
    MalformedGeometry(String),
    /// The topology has no object with this name.
    ObjectNotFound(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::ArcNotFound(index) => write!(f, "arc {index} not found"),
            DecodeError::EmptyArc(index) => write!(f, "arc {index} has no positions"),
            DecodeError::CoordinateOverflow(index) => {
                write!(f, "arc {index} overflows the coordinate range")
            }
            DecodeError::EmptyRing => write!(f, "ring references no arcs"),
            DecodeError::EmptyGeometry => write!(f, "geometry has no positions"),
            DecodeError::UnsupportedGeometry(kind) => {
                write!(f, "unsupported geometry type \"{kind}\"")
            }
            DecodeError::MalformedTransform(reason) => write!(f, "malformed transform: {reason}"),
            DecodeError::MalformedGeometry(reason) => write!(f, "malformed geometry: {reason}"),
            DecodeError::ObjectNotFound(name) => write!(f, "object \"{name}\" not found"),
        }
    }
}

impl std::error::Error for DecodeError {}
