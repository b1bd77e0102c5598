// Copyright 2026 the Topopath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of ring assembly and path encoding.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use topopath::{encode_path, Arc, Geometry, Ring, SvgLine, Topology, TranslateScale};

/// A strip of `n` cells; cell `i` is bounded by shared edges `i` and `i + 1`
/// and its own top and bottom arcs.
fn strip(n: i64) -> (Topology, Vec<Geometry>) {
    let mut arcs = Vec::new();
    // Vertical edges, each with a few intermediate positions.
    for i in 0..=n {
        arcs.push(Arc::from_deltas(vec![[i * 16, 0], [1, 4], [-1, 4], [1, 4], [-1, 4]]));
    }
    // Bottom then top of each cell.
    for i in 0..n {
        arcs.push(Arc::from_deltas(vec![[(i + 1) * 16, 0], [-8, -1], [-8, 1]]));
        arcs.push(Arc::from_deltas(vec![[i * 16, 16], [8, 1], [8, -1]]));
    }
    let topo = Topology::new(arcs, TranslateScale::new([0.01, 0.01], [-120.0, 30.0]));

    let edges = n + 1;
    let geometries = (0..n)
        .map(|i| {
            let bottom = edges + 2 * i;
            let top = bottom + 1;
            // Up the left edge, along the top, down the right edge, back
            // along the bottom.
            let ring = Ring::from_signed(&[i, top, !(i + 1), bottom]).unwrap();
            Geometry::Polygon(vec![ring])
        })
        .collect();
    (topo, geometries)
}

fn bench_decode(c: &mut Criterion) {
    let (topo, geometries) = strip(500);

    c.bench_function("decode strip", |b| {
        b.iter(|| {
            for g in &geometries {
                black_box(topo.decode(black_box(g)).unwrap());
            }
        });
    });

    let decoded: Vec<_> = geometries.iter().map(|g| topo.decode(g).unwrap()).collect();
    c.bench_function("encode strip", |b| {
        b.iter(|| {
            for rings in &decoded {
                black_box(encode_path(black_box(rings), &mut SvgLine::new()));
            }
        });
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
