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
use rug::Rational;

use crate::{
    numeric::scalar::Scalar,
    operations::{Abs, One, Sqrt, Zero},
};

use std::{
    cmp::Ordering,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// Arbitrary-precision rational coordinates. Every ring operation and every
/// sign test is exact, which makes the narrow-phase predicates exact.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Exact(pub Rational);

impl Scalar for Exact {
    fn from_num_den(num: i32, den: i32) -> Self {
        Exact(Rational::from((num, den)))
    }
}

macro_rules! impl_exact_binop {
    ($trait:ident, $method:ident, $assign:tt) => {
        impl $trait for Exact {
            type Output = Exact;
            fn $method(self, rhs: Exact) -> Exact {
                let mut result = self.0;
                result $assign &rhs.0;
                Exact(result)
            }
        }

        impl<'a, 'b> $trait<&'b Exact> for &'a Exact {
            type Output = Exact;
            fn $method(self, rhs: &'b Exact) -> Exact {
                // in-place API on rug::Rational: result = self op rhs
                let mut result = self.0.clone();
                result $assign &rhs.0;
                Exact(result)
            }
        }
    };
}

impl_exact_binop!(Add, add, +=);
impl_exact_binop!(Sub, sub, -=);
impl_exact_binop!(Mul, mul, *=);
impl_exact_binop!(Div, div, /=);

impl Neg for Exact {
    type Output = Exact;
    fn neg(self) -> Exact {
        Exact(-self.0)
    }
}

impl<'a> AddAssign<&'a Exact> for Exact {
    fn add_assign(&mut self, rhs: &'a Exact) {
        self.0 += &rhs.0;
    }
}

impl<'a> SubAssign<&'a Exact> for Exact {
    fn sub_assign(&mut self, rhs: &'a Exact) {
        self.0 -= &rhs.0;
    }
}

impl Zero for Exact {
    fn zero() -> Self {
        Exact(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }
}

impl One for Exact {
    fn one() -> Self {
        Exact(Rational::from(1))
    }
}

impl Abs for Exact {
    fn abs(&self) -> Self {
        Exact(self.0.clone().abs())
    }
}

impl Sqrt for Exact {
    /// Rationals have no exact square root; the f64 estimate is rounded up
    /// so enclosure radii computed from it stay conservative.
    fn sqrt(&self) -> Self {
        let est = self.0.to_f64().sqrt();
        if est == 0.0 {
            return Exact(Rational::new());
        }
        let up = (est * (1.0 + 1e-9)).max(est + f64::MIN_POSITIVE);
        Exact(Rational::from_f64(up).unwrap_or_default())
    }
}

impl ToPrimitive for Exact {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_f64().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.to_f64().to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

impl From<f64> for Exact {
    fn from(v: f64) -> Self {
        Exact(Rational::from_f64(v).expect("coordinate must be finite"))
    }
}

impl From<i32> for Exact {
    fn from(v: i32) -> Self {
        Exact(Rational::from(v))
    }
}
