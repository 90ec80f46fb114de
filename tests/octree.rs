// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use rand::Rng;

use submesh::geometry::bounding::{BoundingBox, BoundingSphere};
use submesh::geometry::octree::Octree;
use submesh::geometry::point::Point;
use submesh::numeric::float64::F64;

fn p3(x: f64, y: f64, z: f64) -> Point<F64, 3> {
    Point::from_vals([x, y, z])
}

fn sphere_at(x: f64, y: f64, z: f64, r: f64) -> BoundingSphere<F64, 3> {
    BoundingSphere {
        center: p3(x, y, z),
        radius: F64(r),
    }
}

#[test]
#[should_panic(expected = "zero bounding volumes")]
fn empty_build_panics() {
    let _ = Octree::<F64, 3>::build(Vec::new());
}

#[test]
fn grid_query_is_conservative() {
    let mut spheres = Vec::new();
    for x in 0..10 {
        for y in 0..10 {
            spheres.push(sphere_at(x as f64, y as f64, 0.0, 0.4));
        }
    }
    let tree = Octree::build(spheres.clone());
    assert_eq!(tree.len(), 100);

    let qbox = BoundingBox {
        center: p3(2.0, 2.0, 0.0),
        halfsize: F64(0.5),
    };
    let mut hits = Vec::new();
    tree.query(|c, h| qbox.overlaps_cube(c, h), &mut hits);

    // every sphere the query cube really reaches must be among the hits
    for (id, s) in spheres.iter().enumerate() {
        if s.overlaps_cube(&qbox.center, &qbox.halfsize) {
            assert!(hits.contains(&id), "octree missed sphere {}", id);
        }
    }
    assert!(hits.contains(&(2 * 10 + 2)));
}

#[test]
fn randomized_queries_never_miss() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = rand::rng();

    let spheres: Vec<_> = (0..300)
        .map(|_| {
            sphere_at(
                rng.random_range(0.0..10.0),
                rng.random_range(0.0..10.0),
                rng.random_range(0.0..10.0),
                rng.random_range(0.0..0.5),
            )
        })
        .collect();
    let tree = Octree::build(spheres.clone());

    for _ in 0..20 {
        let qbox = BoundingBox {
            center: p3(
                rng.random_range(0.0..10.0),
                rng.random_range(0.0..10.0),
                rng.random_range(0.0..10.0),
            ),
            halfsize: F64(rng.random_range(0.1..1.0)),
        };
        let mut hits = Vec::new();
        tree.query(|c, h| qbox.overlaps_cube(c, h), &mut hits);

        for (id, s) in spheres.iter().enumerate() {
            if s.overlaps_cube(&qbox.center, &qbox.halfsize) {
                assert!(hits.contains(&id));
            }
        }
    }
}

#[test]
fn coincident_centers_terminate() {
    // identical centers cannot be separated by subdivision; the depth cap
    // must stop the recursion
    let spheres: Vec<_> = (0..50).map(|_| sphere_at(1.0, 1.0, 1.0, 0.25)).collect();
    let tree = Octree::build(spheres);

    let qbox = BoundingBox {
        center: p3(1.0, 1.0, 1.0),
        halfsize: F64(0.1),
    };
    let mut hits = Vec::new();
    tree.query(|c, h| qbox.overlaps_cube(c, h), &mut hits);
    assert_eq!(hits.len(), 50);
}

#[test]
fn rejecting_region_test_yields_nothing() {
    let spheres = vec![sphere_at(0.0, 0.0, 0.0, 1.0), sphere_at(5.0, 0.0, 0.0, 1.0)];
    let tree = Octree::build(spheres);

    let mut hits = Vec::new();
    tree.query(|_, _| false, &mut hits);
    assert!(hits.is_empty());
}
