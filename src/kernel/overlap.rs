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

//! Boolean overlap between closed simplices.
//!
//! Inputs of ambient dimension 2 are lifted into the z=0 plane, so every
//! test runs in 3-D coordinates. Only sign tests of polynomial expressions
//! are performed; no intersection geometry is ever constructed.

use smallvec::SmallVec;

use crate::{geometry::point::Point, kernel::orientation::orient3d, numeric::scalar::Scalar};

use std::{
    array,
    ops::{Mul, Sub},
};

/// Embed an N-dimensional point (N <= 3) into 3-D coordinates.
pub(crate) fn lift<T: Scalar, const N: usize>(p: &Point<T, N>) -> Point<T, 3> {
    assert!(N <= 3, "ambient dimension above 3 is not supported");
    Point::new(array::from_fn(|i| {
        if i < N { p.coords[i].clone() } else { T::zero() }
    }))
}

pub fn points_coincide<T: Scalar>(a: &Point<T, 3>, b: &Point<T, 3>) -> bool
where
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    (0..3).all(|i| (&a[i] - &b[i]).is_zero())
}

/// Is `p` on the closed segment `[a, b]`?
pub fn point_on_segment<T: Scalar>(p: &Point<T, 3>, a: &Point<T, 3>, b: &Point<T, 3>) -> bool
where
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let u = a.vector_to(b);
    if u.is_zero() {
        return points_coincide(p, a);
    }
    let w = a.vector_to(p);
    if !u.cross(&w).is_zero() {
        return false;
    }
    let t = u.dot(&w);
    if t.is_negative() {
        return false;
    }
    let len2 = u.dot(&u);
    !(&t - &len2).is_positive()
}

/// Is `p` in the closed triangle `(a, b, c)`?
pub fn point_in_triangle<T: Scalar>(
    p: &Point<T, 3>,
    a: &Point<T, 3>,
    b: &Point<T, 3>,
    c: &Point<T, 3>,
) -> bool
where
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let ab = a.vector_to(b);
    let ac = a.vector_to(c);
    let n = ab.cross(&ac);
    if n.is_zero() {
        // zero-area triangle: its closure is the union of its edges
        return point_on_segment(p, a, b)
            || point_on_segment(p, b, c)
            || point_on_segment(p, a, c);
    }
    let ap = a.vector_to(p);
    if !n.dot(&ap).is_zero() {
        return false;
    }
    let s1 = ab.cross(&ap).dot(&n).sign();
    let s2 = b.vector_to(c).cross(&b.vector_to(p)).dot(&n).sign();
    let s3 = c.vector_to(a).cross(&c.vector_to(p)).dot(&n).sign();
    s1 >= 0 && s2 >= 0 && s3 >= 0
}

/// Do the closed segments `[p0, p1]` and `[q0, q1]` meet?
pub fn segments_overlap<T: Scalar>(
    p0: &Point<T, 3>,
    p1: &Point<T, 3>,
    q0: &Point<T, 3>,
    q1: &Point<T, 3>,
) -> bool
where
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let u = p0.vector_to(p1);
    let v = q0.vector_to(q1);
    let n = u.cross(&v);
    if n.is_zero() {
        // parallel or degenerate: only collinear segments can touch
        return point_on_segment(q0, p0, p1)
            || point_on_segment(q1, p0, p1)
            || point_on_segment(p0, q0, q1)
            || point_on_segment(p1, q0, q1);
    }
    if !n.dot(&p0.vector_to(q0)).is_zero() {
        return false; // skew lines
    }
    // coplanar, non-parallel: each segment must straddle the other's line
    let s1 = u.cross(&p0.vector_to(q0)).dot(&n).sign();
    let s2 = u.cross(&p0.vector_to(q1)).dot(&n).sign();
    if s1 * s2 > 0 {
        return false;
    }
    let s3 = v.cross(&q0.vector_to(p0)).dot(&n).sign();
    let s4 = v.cross(&q0.vector_to(p1)).dot(&n).sign();
    s3 * s4 <= 0
}

/// Does the closed segment `[r0, r1]` meet the closed triangle `(a, b, c)`?
pub fn segment_triangle_overlap<T: Scalar>(
    r0: &Point<T, 3>,
    r1: &Point<T, 3>,
    a: &Point<T, 3>,
    b: &Point<T, 3>,
    c: &Point<T, 3>,
) -> bool
where
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    let n = a.vector_to(b).cross(&a.vector_to(c));
    if n.is_zero() {
        return segments_overlap(r0, r1, a, b)
            || segments_overlap(r0, r1, b, c)
            || segments_overlap(r0, r1, a, c);
    }
    let s0 = n.dot(&a.vector_to(r0)).sign();
    let s1 = n.dot(&a.vector_to(r1)).sign();
    if s0 * s1 > 0 {
        return false; // both endpoints strictly on one side of the plane
    }
    if s0 == 0 && s1 == 0 {
        // coplanar
        return point_in_triangle(r0, a, b, c)
            || point_in_triangle(r1, a, b, c)
            || segments_overlap(r0, r1, a, b)
            || segments_overlap(r0, r1, b, c)
            || segments_overlap(r0, r1, a, c);
    }
    // the segment spans the plane; the crossing lies in the triangle iff the
    // three tetrahedra around the edges agree in sign
    let u = orient3d(r0, r1, a, b).sign();
    let v = orient3d(r0, r1, b, c).sign();
    let w = orient3d(r0, r1, c, a).sign();
    (u >= 0 && v >= 0 && w >= 0) || (u <= 0 && v <= 0 && w <= 0)
}

/// Do two closed triangles meet?
pub fn triangles_overlap<T: Scalar>(p: [&Point<T, 3>; 3], q: [&Point<T, 3>; 3]) -> bool
where
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    // Two convex closed sets meet iff some edge of one meets the other.
    segment_triangle_overlap(p[0], p[1], q[0], q[1], q[2])
        || segment_triangle_overlap(p[1], p[2], q[0], q[1], q[2])
        || segment_triangle_overlap(p[0], p[2], q[0], q[1], q[2])
        || segment_triangle_overlap(q[0], q[1], p[0], p[1], p[2])
        || segment_triangle_overlap(q[1], q[2], p[0], p[1], p[2])
        || segment_triangle_overlap(q[0], q[2], p[0], p[1], p[2])
}

/// Exact overlap between two closed simplices given by their vertices.
///
/// Supports simplex dimensions 0..=2 in ambient dimension 2 or 3; anything
/// larger is a precondition violation.
pub fn simplex_overlap<T: Scalar, const N: usize>(a: &[Point<T, N>], b: &[Point<T, N>]) -> bool
where
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    assert!(
        (1..=3).contains(&a.len()) && (1..=3).contains(&b.len()),
        "cells above dimension 2 are not supported"
    );
    let (lo, hi) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let s: SmallVec<[Point<T, 3>; 3]> = lo.iter().map(|p| lift(p)).collect();
    let t: SmallVec<[Point<T, 3>; 3]> = hi.iter().map(|p| lift(p)).collect();
    match (s.len(), t.len()) {
        (1, 1) => points_coincide(&s[0], &t[0]),
        (1, 2) => point_on_segment(&s[0], &t[0], &t[1]),
        (1, 3) => point_in_triangle(&s[0], &t[0], &t[1], &t[2]),
        (2, 2) => segments_overlap(&s[0], &s[1], &t[0], &t[1]),
        (2, 3) => segment_triangle_overlap(&s[0], &s[1], &t[0], &t[1], &t[2]),
        (3, 3) => triangles_overlap([&s[0], &s[1], &s[2]], [&t[0], &t[1], &t[2]]),
        _ => unreachable!(),
    }
}
