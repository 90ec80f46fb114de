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

//! Conservative bounding volumes for broad-phase pruning.
//!
//! Both forms are centered on the vertex centroid and may over-approximate
//! the cell they enclose. The broad phase only prunes; a loose fit can cost
//! narrow-phase work but never a wrong answer.

use crate::{geometry::point::Point, numeric::scalar::Scalar, operations::Abs};

use std::ops::{Add, Div, Mul, Sub};

/// Sphere around a cell: vertex centroid plus maximum vertex distance.
#[derive(Clone, Debug)]
pub struct BoundingSphere<T: Scalar, const N: usize> {
    pub center: Point<T, N>,
    pub radius: T,
}

impl<T: Scalar, const N: usize> BoundingSphere<T, N>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    /// Enclosing sphere of a non-empty vertex set. A single point gets
    /// radius zero.
    pub fn of_points(points: &[Point<T, N>]) -> Self {
        let center = Point::centroid(points);
        let mut max_d2 = T::zero();
        for p in points {
            let d2 = center.distance_squared_to(p);
            if d2 > max_d2 {
                max_d2 = d2;
            }
        }
        // sqrt may round below the true root; widen until the square covers
        // the farthest vertex again
        let mut radius = max_d2.sqrt();
        if radius.is_zero() && !max_d2.is_zero() {
            radius = T::one();
        }
        let bump = T::from_num_den(16_777_217, 16_777_216);
        while (&(&radius * &radius) - &max_d2).is_negative() {
            radius = &radius * &bump;
        }
        BoundingSphere { radius, center }
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        let rr = &self.radius + &other.radius;
        let rr2 = &rr * &rr;
        let d2 = self.center.distance_squared_to(&other.center);
        !(&d2 - &rr2).is_positive()
    }

    /// Does this sphere reach the cube `(box_center, halfsize)`?
    /// Exact for the cube: per-axis clamped distance, compared squared.
    pub fn overlaps_cube(&self, box_center: &Point<T, N>, halfsize: &T) -> bool {
        let mut d2 = T::zero();
        for i in 0..N {
            let gap = &(&self.center[i] - &box_center[i]).abs() - halfsize;
            if gap.is_positive() {
                d2 += &(&gap * &gap);
            }
        }
        let r2 = &self.radius * &self.radius;
        !(&d2 - &r2).is_positive()
    }
}

/// Cube around a cell: vertex centroid plus maximum per-component vertex
/// deviation.
#[derive(Clone, Debug)]
pub struct BoundingBox<T: Scalar, const N: usize> {
    pub center: Point<T, N>,
    pub halfsize: T,
}

impl<T: Scalar, const N: usize> BoundingBox<T, N>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    pub fn of_points(points: &[Point<T, N>]) -> Self {
        let center = Point::centroid(points);
        let mut halfsize = T::zero();
        for p in points {
            for i in 0..N {
                let d = (&p[i] - &center[i]).abs();
                if d > halfsize {
                    halfsize = d;
                }
            }
        }
        BoundingBox { center, halfsize }
    }

    pub fn overlaps_cube(&self, box_center: &Point<T, N>, halfsize: &T) -> bool {
        let reach = &self.halfsize + halfsize;
        for i in 0..N {
            let gap = &(&self.center[i] - &box_center[i]).abs() - &reach;
            if gap.is_positive() {
                return false;
            }
        }
        true
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.overlaps_cube(&other.center, &other.halfsize)
    }
}
