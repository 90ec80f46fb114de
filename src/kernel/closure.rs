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

use smallvec::SmallVec;

use crate::{
    geometry::point::Point,
    kernel::overlap::{lift, point_in_triangle, point_on_segment, points_coincide},
    numeric::scalar::Scalar,
};

use std::ops::{Mul, Sub};

/// Is every vertex of `inner` contained in the closure of the simplex
/// `outer`? Boundary points count as contained, so a vertex sitting exactly
/// on a vertex or edge of `outer` is inside.
///
/// `outer` must be a simplex of dimension 0..=2; convexity makes vertex
/// containment equivalent to containment of all of `inner`.
pub fn simplex_in_closure<T: Scalar, const N: usize>(
    inner: &[Point<T, N>],
    outer: &[Point<T, N>],
) -> bool
where
    for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    assert!(
        !inner.is_empty() && (1..=3).contains(&outer.len()),
        "cells above dimension 2 are not supported"
    );
    let o: SmallVec<[Point<T, 3>; 3]> = outer.iter().map(|p| lift(p)).collect();
    inner.iter().all(|p| {
        let p3 = lift(p);
        match o.len() {
            1 => points_coincide(&p3, &o[0]),
            2 => point_on_segment(&p3, &o[0], &o[1]),
            3 => point_in_triangle(&p3, &o[0], &o[1], &o[2]),
            _ => unreachable!(),
        }
    })
}
