// Copyright 2026 the Topopath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoding of shared-arc topologies into rings and vector paths.
//!
//! A topology stores every boundary segment ("arc") once, as quantized,
//! delta-encoded positions, together with one scale and translate for the
//! whole dataset. Polygons refer to arcs by signed index, so the border
//! between two neighbouring regions is stored a single time and walked
//! forwards by one region and backwards by the other.
//!
//! The pipeline runs leaf first:
//!
//! - [`Arc::decode`] sums the deltas and applies the [`TranslateScale`].
//! - [`Topology::resolve`] decodes an [`ArcRef`], reversing it if needed.
//! - [`Topology::assemble`] chains the arcs of a [`Ring`], dropping the
//!   endpoint each arc shares with the next.
//! - [`Topology::decode`] turns a [`Geometry`] into a [`RingSet`].
//! - [`encode_path`] writes a [`RingSet`] as path commands, one closed
//!   subpath per ring.
//!
//! # Examples
//!
//! ```
//! use topopath::{Arc, Geometry, Ring, Topology, TranslateScale};
//!
//! let topology = Topology::new(
//!     vec![
//!         Arc::from_deltas(vec![[0, 0], [10, 0], [0, 10]]),
//!         Arc::from_deltas(vec![[10, 10], [-10, 0], [0, -10]]),
//!     ],
//!     TranslateScale::new([0.5, 0.5], [100.0, 200.0]),
//! );
//! let square = Geometry::Polygon(vec![Ring::from_signed(&[0, 1])?]);
//! let rings = topology.decode(&square)?;
//! assert_eq!(rings.to_svg(), "M100,200L105,200L105,205L100,205Z");
//! # Ok::<(), topopath::DecodeError>(())
//! ```
//!
//! # Features
//!
//! - `serde` (default): deserialize [`Topology`] and [`GeometryObject`] from
//!   TopoJSON documents.
//! - `mint`: conversions between [`Point`] and `mint::Point2<f64>`.
//!
//! Decoding emits [`tracing`] events for degenerate rings and for geometries
//! that fail inside [`Topology::paths`]; no subscriber is installed.

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod arc;
mod bezpath;
mod error;
mod geometry;
mod point;
mod rect;
mod ring;
mod svg;
mod topology;
mod translate_scale;

pub use crate::arc::*;
pub use crate::bezpath::*;
pub use crate::error::*;
pub use crate::geometry::*;
pub use crate::point::*;
pub use crate::rect::*;
pub use crate::ring::*;
pub use crate::svg::*;
pub use crate::topology::*;
pub use crate::translate_scale::*;
