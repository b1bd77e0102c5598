// Copyright 2026 the Topopath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The arc store: shared arcs, their transform, and named geometry
//! collections.

use std::collections::BTreeMap;

use crate::{Arc, ArcRef, DecodeError, GeometryCollection, Point, Rect, TranslateScale};

/// A quantized topology.
///
/// Arcs are only ever handed out by shared reference and every decode
/// method writes into a fresh buffer, so one `Topology` can serve any number
/// of decoders, on any number of threads.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTopology", into = "RawTopology")
)]
pub struct Topology {
    arcs: Vec<Arc>,
    transform: TranslateScale,
    objects: BTreeMap<String, GeometryCollection>,
    bbox: Option<Rect>,
}

impl Topology {
    /// Create a topology from its arcs and transform, with no objects.
    pub fn new(arcs: Vec<Arc>, transform: TranslateScale) -> Topology {
        Topology {
            arcs,
            transform,
            objects: BTreeMap::new(),
            bbox: None,
        }
    }

    /// Add a named geometry collection, replacing any previous one.
    #[must_use]
    pub fn with_object(mut self, name: impl Into<String>, collection: GeometryCollection) -> Self {
        self.objects.insert(name.into(), collection);
        self
    }

    /// Set the stored bounding box.
    #[must_use]
    pub fn with_bbox(mut self, bbox: Rect) -> Self {
        self.bbox = Some(bbox);
        self
    }

    /// All arcs, in index order.
    #[inline]
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// The arc at `index`, if there is one.
    #[inline]
    pub fn arc(&self, index: usize) -> Option<&Arc> {
        self.arcs.get(index)
    }

    /// The dataset-wide transform.
    #[inline]
    pub fn transform(&self) -> TranslateScale {
        self.transform
    }

    /// The bounding box stored with the topology, if any.
    #[inline]
    pub fn bbox(&self) -> Option<Rect> {
        self.bbox
    }

    /// The named geometry collection, if present.
    pub fn object(&self, name: &str) -> Option<&GeometryCollection> {
        self.objects.get(name)
    }

    /// All named geometry collections, sorted by name.
    pub fn objects(&self) -> impl Iterator<Item = (&str, &GeometryCollection)> + '_ {
        self.objects.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Decode the arc at `index` into absolute positions, in stored order.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::ArcNotFound`] if there is no such arc,
    /// [`DecodeError::EmptyArc`] if it has no positions, and
    /// [`DecodeError::CoordinateOverflow`] if its running sums leave the
    /// `i64` range.
    pub fn decode_arc(&self, index: usize) -> Result<Vec<Point>, DecodeError> {
        self.decode_arc_for(ArcRef::Forward(index))
    }

    /// Decode a directed arc reference.
    ///
    /// A reversed reference yields the positions of the arc last to first.
    /// The reversal happens on the returned buffer only.
    ///
    /// # Errors
    ///
    /// As for [`Topology::decode_arc`]; a missing arc is reported with the
    /// signed index of `arc`.
    pub fn resolve(&self, arc: ArcRef) -> Result<Vec<Point>, DecodeError> {
        let mut points = self.decode_arc_for(arc)?;
        if arc.is_reversed() {
            points.reverse();
        }
        Ok(points)
    }

    fn decode_arc_for(&self, arc: ArcRef) -> Result<Vec<Point>, DecodeError> {
        let index = arc.index();
        let stored = self
            .arcs
            .get(index)
            .ok_or(DecodeError::ArcNotFound(arc.to_signed()))?;
        if stored.is_empty() {
            return Err(DecodeError::EmptyArc(index));
        }
        let points: Vec<Point> = stored.decode(self.transform).collect();
        if points.len() != stored.len() {
            return Err(DecodeError::CoordinateOverflow(index));
        }
        Ok(points)
    }
}

/// The wire shape of a topology document.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawTopology {
    #[serde(rename = "type", default = "topology_type")]
    kind: String,
    #[serde(default)]
    arcs: Vec<Arc>,
    #[serde(default)]
    transform: Option<TranslateScale>,
    #[serde(default)]
    objects: BTreeMap<String, GeometryCollection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bbox: Option<Rect>,
}

#[cfg(feature = "serde")]
fn topology_type() -> String {
    "Topology".into()
}

#[cfg(feature = "serde")]
impl TryFrom<RawTopology> for Topology {
    type Error = DecodeError;

    fn try_from(raw: RawTopology) -> Result<Topology, DecodeError> {
        if raw.kind != "Topology" {
            return Err(DecodeError::MalformedGeometry(format!(
                "expected a Topology, found \"{}\"",
                raw.kind
            )));
        }
        let transform = raw
            .transform
            .ok_or(DecodeError::MalformedTransform("missing transform"))?;
        Ok(Topology {
            arcs: raw.arcs,
            transform,
            objects: raw.objects,
            bbox: raw.bbox,
        })
    }
}

#[cfg(feature = "serde")]
impl From<Topology> for RawTopology {
    fn from(topo: Topology) -> RawTopology {
        RawTopology {
            kind: topology_type(),
            arcs: topo.arcs,
            transform: Some(topo.transform),
            objects: topo.objects,
            bbox: topo.bbox,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use crate::{Arc, ArcRef, DecodeError, Point, Topology, TranslateScale};

    fn sample() -> Topology {
        Topology::new(
            vec![Arc::from_deltas(vec![[2, 3], [1, -1], [0, 2]]), Arc::default()],
            TranslateScale::IDENTITY,
        )
    }

    #[test]
    fn decode_arc() {
        assert_eq!(
            sample().decode_arc(0),
            Ok(vec![
                Point::new(2.0, 3.0),
                Point::new(3.0, 2.0),
                Point::new(3.0, 4.0)
            ])
        );
    }

    #[test]
    fn resolve_reversed() {
        let topo = sample();
        assert_eq!(
            topo.resolve(ArcRef::from_signed(-1).unwrap()),
            Ok(vec![
                Point::new(3.0, 4.0),
                Point::new(3.0, 2.0),
                Point::new(2.0, 3.0)
            ])
        );
        // Reversal must not leak into later forward reads.
        assert_eq!(topo.resolve(ArcRef::Forward(0)), topo.decode_arc(0));
    }

    #[test]
    fn errors() {
        let topo = sample();
        assert_eq!(topo.decode_arc(2), Err(DecodeError::ArcNotFound(2)));
        assert_eq!(
            topo.resolve(ArcRef::Reverse(2)),
            Err(DecodeError::ArcNotFound(-3))
        );
        assert_eq!(topo.decode_arc(1), Err(DecodeError::EmptyArc(1)));
        assert_eq!(
            topo.resolve(ArcRef::Forward(usize::MAX)),
            Err(DecodeError::ArcNotFound(i64::MAX))
        );
    }

    #[test]
    fn overflowing_arc_is_an_error() {
        let topo = Topology::new(
            vec![
                Arc::from_deltas(vec![[0, 0], [1, 1]]),
                Arc::from_deltas(vec![[i64::MAX, 0], [1, 0], [-2, 0]]),
            ],
            TranslateScale::IDENTITY,
        );
        assert_eq!(topo.decode_arc(1), Err(DecodeError::CoordinateOverflow(1)));
        assert_eq!(
            topo.resolve(ArcRef::Reverse(1)),
            Err(DecodeError::CoordinateOverflow(1))
        );
        assert!(topo.decode_arc(0).is_ok());
    }

    #[test]
    fn random_arcs_reverse_and_repeat() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let n = rng.random_range(1..40);
            let deltas = (0..n)
                .map(|_| [rng.random_range(-500..500), rng.random_range(-500..500)])
                .collect();
            let ts = TranslateScale::new(
                [rng.random_range(0.001..1.0), rng.random_range(0.001..1.0)],
                [rng.random_range(-180.0..180.0), rng.random_range(-90.0..90.0)],
            );
            let topo = Topology::new(vec![Arc::from_deltas(deltas)], ts);

            let forward = topo.resolve(ArcRef::Forward(0)).unwrap();
            let mut reversed = topo.resolve(ArcRef::Reverse(0)).unwrap();
            assert_eq!(forward.len(), n);
            reversed.reverse();
            assert_eq!(forward, reversed);
            assert_eq!(forward, topo.decode_arc(0).unwrap());
        }
    }

    #[test]
    fn concurrent_opposite_directions() {
        let deltas = (0..1000).map(|i| [i % 7 - 3, i % 5 - 2]).collect();
        let topo = Topology::new(vec![Arc::from_deltas(deltas)], TranslateScale::IDENTITY);
        let expected = topo.decode_arc(0).unwrap();

        std::thread::scope(|s| {
            let fwd = s.spawn(|| {
                (0..20)
                    .map(|_| topo.resolve(ArcRef::Forward(0)).unwrap())
                    .collect::<Vec<_>>()
            });
            let rev = s.spawn(|| {
                (0..20)
                    .map(|_| topo.resolve(ArcRef::Reverse(0)).unwrap())
                    .collect::<Vec<_>>()
            });
            for pts in fwd.join().unwrap() {
                assert_eq!(pts, expected);
            }
            for mut pts in rev.join().unwrap() {
                pts.reverse();
                assert_eq!(pts, expected);
            }
        });
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_requires_transform() {
        let err = serde_json::from_str::<Topology>(r#"{"type":"Topology","arcs":[[[0,0]]]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("missing transform"), "{err}");

        let topo: Topology = serde_json::from_str(
            r#"{"type":"Topology","arcs":[[[1,2],[3,4]]],
                "transform":{"scale":[2,2],"translate":[1,1]},
                "bbox":[-1,0,10,10]}"#,
        )
        .unwrap();
        assert_eq!(
            topo.decode_arc(0),
            Ok(vec![Point::new(3.0, 5.0), Point::new(9.0, 13.0)])
        );
        assert_eq!(topo.bbox().unwrap().x0, -1.0);
    }
}
