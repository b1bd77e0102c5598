// Copyright 2026 the Topopath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path representation.

use std::fmt::Write;

use crate::{
    BezPath, DecodeError, DecodedRing, Geometry, GeometryId, PathEl, Point, RingSet, Topology,
};

/// The command that closes a subpath.
pub const CLOSE_COMMAND: char = 'Z';

/// Writes one ring as "move to the first point, line to each of the rest".
///
/// The encoder appends the close command itself, so implementations must
/// not. Any `FnMut(&[Point]) -> String` closure is a `LineGenerator`.
pub trait LineGenerator {
    /// Append the commands for `points` to `out`.
    fn line(&mut self, points: &[Point], out: &mut String);
}

impl<F> LineGenerator for F
where
    F: FnMut(&[Point]) -> String,
{
    fn line(&mut self, points: &[Point], out: &mut String) {
        out.push_str(&(self)(points));
    }
}

/// Line generator producing compact SVG path data, such as `M0,0L1,0L1,1`.
///
/// By default coordinates are written with full precision.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SvgLine {
    scale: Option<f64>,
}

impl SvgLine {
    /// A generator writing coordinates with full precision.
    pub fn new() -> SvgLine {
        SvgLine::default()
    }

    /// A generator rounding coordinates to `digits` fractional digits.
    ///
    /// Trailing zeros are not written, so `1.5` at two digits stays `1.5`.
    pub fn with_precision(digits: u8) -> SvgLine {
        SvgLine {
            scale: Some(10f64.powi(i32::from(digits))),
        }
    }

    fn round(&self, v: f64) -> f64 {
        let v = match self.scale {
            Some(k) => (v * k).round() / k,
            None => v,
        };
        // Avoid writing "-0".
        if v == 0.0 {
            0.0
        } else {
            v
        }
    }
}

impl LineGenerator for SvgLine {
    fn line(&mut self, points: &[Point], out: &mut String) {
        for (i, p) in points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            // Writing to a `String` cannot fail.
            let _ = write!(out, "{cmd}{},{}", self.round(p.x), self.round(p.y));
        }
    }
}

/// Encode decoded rings as a path command string.
///
/// Every ring becomes its own subpath: the generator's commands followed by
/// [`CLOSE_COMMAND`]. Rings of a multipolygon are written polygon by
/// polygon. A ring without positions has nothing to draw and is left out.
pub fn encode_path<L>(rings: &RingSet, line: &mut L) -> String
where
    L: LineGenerator + ?Sized,
{
    let mut out = String::new();
    match rings {
        RingSet::Polygon(rings) => encode_polygon(rings, line, &mut out),
        RingSet::MultiPolygon(polys) => {
            for rings in polys {
                encode_polygon(rings, &mut *line, &mut out);
            }
        }
    }
    out
}

fn encode_polygon<L>(rings: &[DecodedRing], line: &mut L, out: &mut String)
where
    L: LineGenerator + ?Sized,
{
    for ring in rings {
        if ring.is_empty() {
            tracing::trace!("skipping ring without positions");
            continue;
        }
        line.line(ring.points(), out);
        out.push(CLOSE_COMMAND);
    }
}

impl RingSet {
    /// Encode the rings with the default [`SvgLine`] generator.
    pub fn to_svg(&self) -> String {
        encode_path(self, &mut SvgLine::new())
    }
}

impl BezPath {
    /// Convert the path to an SVG path string representation.
    ///
    /// The current implementation doesn't take any special care to produce a
    /// short string (reducing precision, using relative movement).
    pub fn to_svg(&self) -> String {
        let mut result = String::new();
        for el in self.elements() {
            // Writing to a `String` cannot fail.
            let _ = match *el {
                PathEl::MoveTo(p) => write!(result, "M{} {}", p.x, p.y),
                PathEl::LineTo(p) => write!(result, "L{} {}", p.x, p.y),
                PathEl::ClosePath => write!(result, "{CLOSE_COMMAND}"),
            };
        }
        result
    }
}

/// The outcome of encoding one geometry of a collection.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodedGeometry<'a> {
    /// The geometry's identifier, for attribute lookup.
    pub id: Option<&'a GeometryId>,
    /// The path command string, or why the geometry could not be decoded.
    pub path: Result<String, DecodeError>,
}

impl Topology {
    /// Decode a geometry and encode it as a path command string.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Topology::decode`], including
    /// [`DecodeError::EmptyGeometry`] when there would be nothing to draw.
    pub fn path<L>(&self, geometry: &Geometry, line: &mut L) -> Result<String, DecodeError>
    where
        L: LineGenerator + ?Sized,
    {
        self.decode(geometry).map(|rings| encode_path(&rings, line))
    }

    /// Encode every geometry of the named collection, in document order.
    ///
    /// A geometry that fails to decode does not stop the others; its entry
    /// carries the error and the caller decides whether to skip it.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::ObjectNotFound`] if there is no such
    /// collection.
    pub fn paths<L>(&self, name: &str, line: &mut L) -> Result<Vec<EncodedGeometry<'_>>, DecodeError>
    where
        L: LineGenerator + ?Sized,
    {
        let collection = self
            .object(name)
            .ok_or_else(|| DecodeError::ObjectNotFound(name.into()))?;
        let encoded = collection
            .geometries
            .iter()
            .map(|object| {
                let path = self.path(&object.geometry, &mut *line);
                if let Err(err) = &path {
                    tracing::debug!(
                        object = name,
                        id = ?object.id,
                        error = %err,
                        "geometry failed to decode"
                    );
                }
                EncodedGeometry {
                    id: object.id.as_ref(),
                    path,
                }
            })
            .collect();
        Ok(encoded)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        encode_path, Arc, BezPath, DecodeError, DecodedRing, Geometry, GeometryCollection,
        GeometryId, GeometryObject, Point, Ring, RingSet, SvgLine, Topology, TranslateScale,
    };

    fn ring(pts: &[(f64, f64)]) -> DecodedRing {
        DecodedRing::from_points(pts.iter().map(|&p| p.into()).collect())
    }

    #[test]
    fn single_ring_closes_once() {
        let rings = RingSet::Polygon(vec![ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)])]);
        let path = rings.to_svg();
        assert_eq!(path, "M0,0L1,0L1,1Z");
        assert!(path.ends_with('Z'));
        assert_eq!(path.matches('Z').count(), 1);
    }

    #[test]
    fn closure_generator() {
        let rings = RingSet::Polygon(vec![
            ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)]),
            ring(&[(0.5, 0.5), (1.0, 0.5), (1.0, 1.0)]),
        ]);
        let mut calls = 0;
        let mut line = |pts: &[Point]| {
            calls += 1;
            format!("<{}>", pts.len())
        };
        assert_eq!(encode_path(&rings, &mut line), "<3>Z<3>Z");
        assert_eq!(calls, 2);
    }

    #[test]
    fn multipolygon_concatenates() {
        let rings = RingSet::MultiPolygon(vec![
            vec![ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)])],
            vec![ring(&[(-2.5, 3.0), (4.0, 3.0), (4.0, -1.25)])],
        ]);
        assert_eq!(rings.to_svg(), "M0,0L1,0L1,1ZM-2.5,3L4,3L4,-1.25Z");
    }

    #[test]
    fn empty_rings_are_left_out() {
        let rings = RingSet::Polygon(vec![ring(&[]), ring(&[(1.0, 1.0)])]);
        assert_eq!(rings.to_svg(), "M1,1Z");
    }

    #[test]
    fn precision() {
        let rings = RingSet::Polygon(vec![ring(&[(0.123456, 1.5), (-0.0001, 2.0)])]);
        assert_eq!(
            encode_path(&rings, &mut SvgLine::with_precision(2)),
            "M0.12,1.5L0,2Z"
        );
    }

    #[test]
    fn bez_path_svg() {
        let rings = RingSet::Polygon(vec![ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)])]);
        assert_eq!(rings.to_bez_path().to_svg(), "M0 0L1 0L1 1Z");
        assert_eq!(BezPath::new().to_svg(), "");
    }

    #[test]
    fn blank_path_is_an_error() {
        let topo = Topology::new(
            vec![Arc::from_deltas(vec![[4, 4]])],
            TranslateScale::IDENTITY,
        );
        let mut line = SvgLine::new();
        assert_eq!(
            topo.path(&Geometry::Polygon(vec![]), &mut line),
            Err(DecodeError::EmptyGeometry)
        );
        assert_eq!(
            topo.path(&Geometry::MultiPolygon(vec![]), &mut line),
            Err(DecodeError::EmptyGeometry)
        );
        let degenerate = Geometry::Polygon(vec![Ring::from_signed(&[0]).unwrap()]);
        assert_eq!(
            topo.path(&degenerate, &mut line),
            Err(DecodeError::EmptyGeometry)
        );
    }

    #[test]
    fn collection_paths_keep_going() {
        let polygon = |indices: &[i64]| Geometry::Polygon(vec![Ring::from_signed(indices).unwrap()]);
        let topo = Topology::new(
            vec![Arc::from_deltas(vec![[0, 0], [4, 0], [0, 4], [-4, -4]])],
            TranslateScale::scale(0.5, 0.5),
        )
        .with_object(
            "regions",
            GeometryCollection::from_iter([
                GeometryObject::with_id(GeometryId::Str("a".into()), polygon(&[0])),
                GeometryObject::with_id(GeometryId::Num(2), polygon(&[3])),
                GeometryObject::new(Geometry::Unsupported("Point".into())),
                GeometryObject::new(polygon(&[-1])),
            ]),
        );

        let paths = topo.paths("regions", &mut SvgLine::new()).unwrap();
        assert_eq!(paths.len(), 4);
        assert_eq!(paths[0].id, Some(&GeometryId::Str("a".into())));
        assert_eq!(paths[0].path.as_deref(), Ok("M0,0L2,0L2,2Z"));
        assert_eq!(paths[1].path, Err(DecodeError::ArcNotFound(3)));
        assert_eq!(
            paths[2].path,
            Err(DecodeError::UnsupportedGeometry("Point".into()))
        );
        assert_eq!(paths[3].path.as_deref(), Ok("M0,0L2,2L2,0Z"));

        assert_eq!(
            topo.paths("nation", &mut SvgLine::new()),
            Err(DecodeError::ObjectNotFound("nation".into()))
        );
    }
}
