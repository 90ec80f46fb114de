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

use approx::assert_relative_eq;

use submesh::geometry::bounding::{BoundingBox, BoundingSphere};
use submesh::geometry::point::Point;
use submesh::numeric::float64::F64;

fn p2(x: f64, y: f64) -> Point<F64, 2> {
    Point::from_vals([x, y])
}

#[test]
fn single_point_sphere_has_zero_radius() {
    let s = BoundingSphere::of_points(&[p2(3.0, -1.0)]);
    assert_eq!(s.radius, F64(0.0));
    assert_eq!(s.center, p2(3.0, -1.0));
}

#[test]
fn sphere_encloses_every_vertex() {
    let pts = [p2(0.0, 0.0), p2(2.0, 0.0), p2(0.0, 2.0)];
    let s = BoundingSphere::of_points(&pts);

    assert_relative_eq!(s.center[0].0, 2.0 / 3.0, epsilon = 1e-12);
    // the radius is allowed to sit a hair above the exact value, never below
    assert_relative_eq!(s.radius.0, (20.0f64 / 9.0).sqrt(), epsilon = 1e-6);
    assert!(s.radius.0 >= (20.0f64 / 9.0).sqrt() * (1.0 - 1e-12));
    for p in &pts {
        assert!(s.center.distance_to(p).0 <= s.radius.0 + 1e-12);
    }
}

#[test]
fn touching_spheres_overlap() {
    let a = BoundingSphere::of_points(&[p2(0.0, 0.0), p2(2.0, 0.0)]);
    let b = BoundingSphere::of_points(&[p2(2.0, 0.0), p2(4.0, 0.0)]);
    let c = BoundingSphere::of_points(&[p2(10.0, 0.0), p2(12.0, 0.0)]);

    assert!(a.overlaps(&b)); // tangent contact counts
    assert!(!a.overlaps(&c));
}

#[test]
fn sphere_against_cube() {
    let s = BoundingSphere::of_points(&[p2(-1.0, 0.0), p2(1.0, 0.0)]); // center origin, r=1

    assert!(s.overlaps_cube(&p2(2.0, 0.0), &F64(1.0))); // face contact
    assert!(!s.overlaps_cube(&p2(2.0, 2.0), &F64(1.0))); // corner gap is sqrt(2)-1
    assert!(s.overlaps_cube(&p2(0.0, 0.0), &F64(0.1))); // cube inside sphere
}

#[test]
fn box_covers_every_component() {
    let pts = [p2(0.0, 0.0), p2(2.0, 0.0), p2(0.0, 2.0)];
    let b = BoundingBox::of_points(&pts);

    assert_relative_eq!(b.halfsize.0, 4.0 / 3.0, epsilon = 1e-12);
    for p in &pts {
        for i in 0..2 {
            assert!((p[i].0 - b.center[i].0).abs() <= b.halfsize.0 + 1e-12);
        }
    }
}

#[test]
fn boxes_touch_and_miss() {
    let a = BoundingBox {
        center: p2(0.0, 0.0),
        halfsize: F64(1.0),
    };

    assert!(a.overlaps_cube(&p2(2.0, 0.0), &F64(1.0)));
    assert!(!a.overlaps_cube(&p2(2.5, 0.0), &F64(0.4)));
    assert!(a.overlaps(&BoundingBox {
        center: p2(1.0, 1.0),
        halfsize: F64(0.5),
    }));
}
