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

use num_traits::ToPrimitive;

use crate::{
    numeric::scalar::Scalar,
    operations::{Abs, One, Sqrt, Zero},
};

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Plain `f64` coordinates. Sign tests are as reliable as the arithmetic
/// that produced the value; use [`crate::numeric::exact::Exact`] where
/// boundary cases must classify exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct F64(pub f64);

impl Scalar for F64 {
    fn from_num_den(num: i32, den: i32) -> Self {
        F64(num as f64 / den as f64)
    }
}

macro_rules! impl_f64_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for F64 {
            type Output = F64;
            fn $method(self, rhs: F64) -> F64 {
                F64(self.0 $op rhs.0)
            }
        }

        impl<'a, 'b> $trait<&'b F64> for &'a F64 {
            type Output = F64;
            fn $method(self, rhs: &'b F64) -> F64 {
                F64(self.0 $op rhs.0)
            }
        }
    };
}

impl_f64_binop!(Add, add, +);
impl_f64_binop!(Sub, sub, -);
impl_f64_binop!(Mul, mul, *);
impl_f64_binop!(Div, div, /);

impl Neg for F64 {
    type Output = F64;
    fn neg(self) -> F64 {
        F64(-self.0)
    }
}

impl<'a> AddAssign<&'a F64> for F64 {
    fn add_assign(&mut self, rhs: &'a F64) {
        self.0 += rhs.0;
    }
}

impl<'a> SubAssign<&'a F64> for F64 {
    fn sub_assign(&mut self, rhs: &'a F64) {
        self.0 -= rhs.0;
    }
}

impl Zero for F64 {
    fn zero() -> Self {
        F64(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl One for F64 {
    fn one() -> Self {
        F64(1.0)
    }
}

impl Abs for F64 {
    fn abs(&self) -> Self {
        F64(self.0.abs())
    }
}

impl Sqrt for F64 {
    fn sqrt(&self) -> Self {
        F64(self.0.sqrt())
    }
}

impl ToPrimitive for F64 {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0)
    }
}

impl From<f64> for F64 {
    fn from(v: f64) -> Self {
        F64(v)
    }
}

impl From<i32> for F64 {
    fn from(v: i32) -> Self {
        F64(v as f64)
    }
}
