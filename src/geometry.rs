// Copyright 2026 the Topopath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polygon and multipolygon geometries, and their decoded rings.

use std::fmt;

use crate::{DecodeError, DecodedRing, Rect, Ring, Topology};

/// A geometry whose boundaries are stored as arc references.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Geometry {
    /// One outer ring optionally followed by holes.
    Polygon(Vec<Ring>),
    /// Independent polygons, each an outer ring optionally followed by holes.
    MultiPolygon(Vec<Vec<Ring>>),
    /// Any other geometry type, by name. Decoding it is an error.
    Unsupported(String),
    /// A record without geometry, written with a `null` type.
    Null,
    /// A record whose arcs do not match its type. Decoding it returns the
    /// error.
    Malformed(DecodeError),
}

impl Geometry {
    /// The geometry type, as named in a document, or `None` for a null or
    /// malformed geometry.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Geometry::Polygon(_) => Some("Polygon"),
            Geometry::MultiPolygon(_) => Some("MultiPolygon"),
            Geometry::Unsupported(kind) => Some(kind),
            Geometry::Null | Geometry::Malformed(_) => None,
        }
    }
}

/// The identifier of a geometry, used by callers to look up attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum GeometryId {
    /// A numeric identifier.
    Num(i64),
    /// A string identifier, such as a region code.
    Str(String),
}

impl fmt::Display for GeometryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryId::Num(n) => write!(f, "{n}"),
            GeometryId::Str(s) => f.write_str(s),
        }
    }
}

/// One record of a geometry collection.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(from = "RawGeometry")
)]
pub struct GeometryObject {
    /// The identifier, if the record has one.
    pub id: Option<GeometryId>,
    /// The geometry itself.
    pub geometry: Geometry,
}

impl GeometryObject {
    /// A record without an identifier.
    pub fn new(geometry: Geometry) -> GeometryObject {
        GeometryObject { id: None, geometry }
    }

    /// A record with an identifier.
    pub fn with_id(id: GeometryId, geometry: Geometry) -> GeometryObject {
        GeometryObject {
            id: Some(id),
            geometry,
        }
    }
}

/// A named list of geometries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryCollection {
    /// The geometries, in document order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub geometries: Vec<GeometryObject>,
}

impl FromIterator<GeometryObject> for GeometryCollection {
    fn from_iter<T: IntoIterator<Item = GeometryObject>>(iter: T) -> GeometryCollection {
        GeometryCollection {
            geometries: iter.into_iter().collect(),
        }
    }
}

/// The decoded rings of one geometry.
#[derive(Clone, Debug, PartialEq)]
pub enum RingSet {
    /// The rings of a polygon.
    Polygon(Vec<DecodedRing>),
    /// The rings of each polygon of a multipolygon.
    MultiPolygon(Vec<Vec<DecodedRing>>),
}

impl RingSet {
    /// Iterate over every ring, polygon by polygon.
    pub fn rings(&self) -> impl Iterator<Item = &DecodedRing> + '_ {
        let (single, multi) = match self {
            RingSet::Polygon(rings) => (Some(rings.iter()), None),
            RingSet::MultiPolygon(polys) => (None, Some(polys.iter().flatten())),
        };
        single.into_iter().flatten().chain(multi.into_iter().flatten())
    }

    /// The bounds of all decoded positions, or `None` if there are none.
    pub fn bounding_box(&self) -> Option<Rect> {
        Rect::from_points_iter(self.rings().flat_map(|r| r.points().iter().copied()))
    }
}

impl Topology {
    /// Decode the rings of a geometry.
    ///
    /// Ring order, and polygon order for a multipolygon, follow the
    /// geometry.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnsupportedGeometry`] for anything but a
    /// polygon or multipolygon, the recorded error of a malformed geometry,
    /// and any error from [`Topology::assemble`]. A null geometry, or one
    /// whose rings are all without positions, is
    /// [`DecodeError::EmptyGeometry`].
    pub fn decode(&self, geometry: &Geometry) -> Result<RingSet, DecodeError> {
        let rings = match geometry {
            Geometry::Polygon(rings) => RingSet::Polygon(self.decode_polygon(rings)?),
            Geometry::MultiPolygon(polys) => RingSet::MultiPolygon(
                polys
                    .iter()
                    .map(|rings| self.decode_polygon(rings))
                    .collect::<Result<_, _>>()?,
            ),
            Geometry::Unsupported(kind) => {
                return Err(DecodeError::UnsupportedGeometry(kind.clone()))
            }
            Geometry::Null => return Err(DecodeError::EmptyGeometry),
            Geometry::Malformed(err) => return Err(err.clone()),
        };
        if rings.rings().all(DecodedRing::is_empty) {
            return Err(DecodeError::EmptyGeometry);
        }
        Ok(rings)
    }

    fn decode_polygon(&self, rings: &[Ring]) -> Result<Vec<DecodedRing>, DecodeError> {
        rings.iter().map(|ring| self.assemble(ring)).collect()
    }
}

/// Arc references nested to any depth, before the geometry type fixes it.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum NestedArcs {
    Index(i64),
    List(Vec<NestedArcs>),
    #[serde(skip_serializing)]
    Invalid(serde::de::IgnoredAny),
}

#[cfg(feature = "serde")]
impl NestedArcs {
    fn into_list(self, what: &str) -> Result<Vec<NestedArcs>, DecodeError> {
        match self {
            NestedArcs::List(list) => Ok(list),
            NestedArcs::Index(_) => Err(DecodeError::MalformedGeometry(format!(
                "expected a list of {what}, found an arc index"
            ))),
            NestedArcs::Invalid(_) => Err(DecodeError::MalformedGeometry(format!(
                "expected a list of {what}"
            ))),
        }
    }

    fn into_ring(self) -> Result<Ring, DecodeError> {
        self.into_list("arc indices")?
            .into_iter()
            .map(|arc| match arc {
                NestedArcs::Index(i) => crate::ArcRef::from_signed(i),
                NestedArcs::List(_) => Err(DecodeError::MalformedGeometry(
                    "expected an arc index, found a list".into(),
                )),
                NestedArcs::Invalid(_) => Err(DecodeError::MalformedGeometry(
                    "expected an arc index".into(),
                )),
            })
            .collect()
    }

    fn into_polygon(self) -> Result<Vec<Ring>, DecodeError> {
        self.into_list("rings")?
            .into_iter()
            .map(NestedArcs::into_ring)
            .collect()
    }

    fn from_polygon(rings: &[Ring]) -> NestedArcs {
        NestedArcs::List(
            rings
                .iter()
                .map(|ring| {
                    NestedArcs::List(
                        ring.arcs()
                            .iter()
                            .map(|arc| NestedArcs::Index(arc.to_signed()))
                            .collect(),
                    )
                })
                .collect(),
        )
    }
}

/// The wire shape of a geometry record.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawGeometry {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<GeometryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    arcs: Option<NestedArcs>,
}

/// A record that cannot be read as its type keeps the error, so the rest of
/// its collection still loads.
#[cfg(feature = "serde")]
impl From<RawGeometry> for GeometryObject {
    fn from(raw: RawGeometry) -> GeometryObject {
        let geometry = match raw.kind {
            Some(kind) => read_geometry(kind, raw.arcs).unwrap_or_else(Geometry::Malformed),
            None => Geometry::Null,
        };
        GeometryObject { id: raw.id, geometry }
    }
}

#[cfg(feature = "serde")]
fn read_geometry(kind: String, arcs: Option<NestedArcs>) -> Result<Geometry, DecodeError> {
    let arcs = match kind.as_str() {
        "Polygon" | "MultiPolygon" => arcs
            .ok_or_else(|| DecodeError::MalformedGeometry(format!("{kind} without arcs")))?,
        _ => return Ok(Geometry::Unsupported(kind)),
    };
    if kind == "Polygon" {
        return Ok(Geometry::Polygon(arcs.into_polygon()?));
    }
    let polys = arcs
        .into_list("polygons")?
        .into_iter()
        .map(NestedArcs::into_polygon)
        .collect::<Result<_, _>>()?;
    Ok(Geometry::MultiPolygon(polys))
}

/// Serializing a malformed record fails with its error.
#[cfg(feature = "serde")]
impl serde::Serialize for GeometryObject {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (kind, arcs) = match &self.geometry {
            Geometry::Polygon(rings) => (
                Some("Polygon".into()),
                Some(NestedArcs::from_polygon(rings)),
            ),
            Geometry::MultiPolygon(polys) => (
                Some("MultiPolygon".into()),
                Some(NestedArcs::List(
                    polys.iter().map(|rings| NestedArcs::from_polygon(rings)).collect(),
                )),
            ),
            Geometry::Unsupported(kind) => (Some(kind.clone()), None),
            Geometry::Null => (None, None),
            Geometry::Malformed(err) => return Err(serde::ser::Error::custom(err)),
        };
        let raw = RawGeometry {
            kind,
            id: self.id.clone(),
            arcs,
        };
        serde::Serialize::serialize(&raw, serializer)
    }
}
