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

use crate::{geometry::vector::Vector, numeric::scalar::Scalar, operations::Sqrt};

use std::{
    array,
    ops::{Div, Index, Mul, Sub},
};

/// A point in N-dimensional space.
#[derive(Clone, Debug, PartialEq)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

impl<T: Scalar, const N: usize> Point<T, N> {
    pub fn new(coords: [T; N]) -> Self {
        Point { coords }
    }

    pub fn from_vals<V>(vals: [V; N]) -> Self
    where
        V: Into<T>,
    {
        Point {
            coords: vals.map(|v| v.into()),
        }
    }

    /// Vector from `self` to `other`.
    pub fn vector_to(&self, other: &Self) -> Vector<T, N>
    where
        for<'a> &'a T: Sub<&'a T, Output = T>,
    {
        Vector::new(array::from_fn(|i| &other.coords[i] - &self.coords[i]))
    }

    pub fn distance_squared_to(&self, other: &Self) -> T
    where
        for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
    {
        let mut acc = T::zero();
        for i in 0..N {
            let d = &other.coords[i] - &self.coords[i];
            acc += &(&d * &d);
        }
        acc
    }

    pub fn distance_to(&self, other: &Self) -> T
    where
        for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
    {
        self.distance_squared_to(other).sqrt()
    }

    /// Arithmetic mean of a non-empty point set.
    pub fn centroid(points: &[Self]) -> Self
    where
        for<'a> &'a T: Div<&'a T, Output = T>,
    {
        assert!(!points.is_empty(), "centroid of an empty point set");
        let mut acc: [T; N] = array::from_fn(|_| T::zero());
        for p in points {
            for i in 0..N {
                acc[i] += &p.coords[i];
            }
        }
        let k = T::from(points.len() as i32);
        Point::new(array::from_fn(|i| &acc[i] / &k))
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.coords[i]
    }
}
