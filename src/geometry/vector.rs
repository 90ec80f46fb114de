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

use crate::numeric::scalar::Scalar;

use std::ops::{Index, Mul, Sub};

#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T: Scalar, const N: usize> {
    pub comps: [T; N],
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn new(comps: [T; N]) -> Self {
        Vector { comps }
    }

    pub fn dot(&self, other: &Self) -> T
    where
        for<'a> &'a T: Mul<&'a T, Output = T>,
    {
        let mut acc = T::zero();
        for i in 0..N {
            acc += &(&self.comps[i] * &other.comps[i]);
        }
        acc
    }

    pub fn is_zero(&self) -> bool {
        self.comps.iter().all(|c| c.is_zero())
    }
}

impl<T: Scalar> Vector<T, 2> {
    /// Scalar cross product (signed parallelogram area).
    pub fn perp_dot(&self, other: &Self) -> T
    where
        for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
    {
        &(&self.comps[0] * &other.comps[1]) - &(&self.comps[1] * &other.comps[0])
    }
}

impl<T: Scalar> Vector<T, 3> {
    pub fn cross(&self, other: &Self) -> Self
    where
        for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
    {
        let [x, y, z] = &self.comps;
        let [ox, oy, oz] = &other.comps;
        Vector::new([
            &(y * oz) - &(z * oy),
            &(z * ox) - &(x * oz),
            &(x * oy) - &(y * ox),
        ])
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.comps[i]
    }
}
