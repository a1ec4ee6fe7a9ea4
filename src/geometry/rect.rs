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

use std::ops::{Div, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::point_2::Point2;
use crate::geometry::size_2::Size2;
use crate::geometry::vector_2::Vector2;
use crate::numeric::scalar::Scalar;

/// An axis-aligned rectangle given by its origin corner and extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect<T: Scalar> {
    pub origin: Point2<T>,
    pub size: Size2<T>,
}

impl<T: Scalar> Rect<T> {
    pub fn new(origin: Point2<T>, size: Size2<T>) -> Self {
        Self { origin, size }
    }

    /// The smallest axis-aligned rectangle that contains both points.
    pub fn spanning(p1: Point2<T>, p2: Point2<T>) -> Self {
        let origin = Point2::new(p1.x.min(p2.x), p1.y.min(p2.y));
        let size = Size2::new((p1.x - p2.x).abs(), (p1.y - p2.y).abs());
        Self::new(origin, size)
    }

    /// The rectangle translated by `vector`, same size.
    pub fn offset_by(&self, vector: Vector2<T>) -> Self {
        Self::new(self.origin + vector, self.size)
    }
}

// Uniform scaling of origin and size by a scalar.
impl<T: Scalar> Mul<T> for Rect<T> {
    type Output = Rect<T>;
    fn mul(self, scale: T) -> Rect<T> {
        Rect {
            origin: self.origin * scale,
            size: self.size * scale,
        }
    }
}

// Component-wise scaling of origin and size by a size.
impl<T: Scalar> Mul<Size2<T>> for Rect<T> {
    type Output = Rect<T>;
    fn mul(self, size: Size2<T>) -> Rect<T> {
        Rect {
            origin: size * self.origin,
            size: size * self.size,
        }
    }
}

// Component-wise division of origin and size by a size.
impl<T: Scalar> Div<Size2<T>> for Rect<T> {
    type Output = Rect<T>;
    fn div(self, size: Size2<T>) -> Rect<T> {
        let inv = Size2::new(T::one() / size.width, T::one() / size.height);
        self * inv
    }
}

impl Mul<Rect<f32>> for f32 {
    type Output = Rect<f32>;
    fn mul(self, rect: Rect<f32>) -> Rect<f32> {
        rect * self
    }
}

impl Mul<Rect<f64>> for f64 {
    type Output = Rect<f64>;
    fn mul(self, rect: Rect<f64>) -> Rect<f64> {
        rect * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanning_is_order_independent() {
        let p1 = Point2::new(2.0, -1.0);
        let p2 = Point2::new(-1.0, 3.0);

        let r = Rect::spanning(p1, p2);
        assert_eq!(r, Rect::spanning(p2, p1));
        assert_eq!(r.origin, Point2::new(-1.0, -1.0));
        assert_eq!(r.size, Size2::new(3.0, 4.0));
    }

    #[test]
    fn offset() {
        let r = Rect::new(Point2::new(1.0, 1.0), Size2::new(2.0, 2.0));
        let moved = r.offset_by(Vector2::new(-1.0, 2.0));
        assert_eq!(moved.origin, Point2::new(0.0, 3.0));
        assert_eq!(moved.size, r.size);
    }

    #[test]
    fn scalar_and_size_scaling() {
        let r: Rect<f64> = Rect::new(Point2::new(1.0, 2.0), Size2::new(3.0, 4.0));

        let doubled = 2.0 * r;
        assert_eq!(doubled.origin, Point2::new(2.0, 4.0));
        assert_eq!(doubled.size, Size2::new(6.0, 8.0));

        let by_size = r * Size2::new(2.0, 0.5);
        assert_eq!(by_size.origin, Point2::new(2.0, 1.0));
        assert_eq!(by_size.size, Size2::new(6.0, 2.0));

        let back = by_size / Size2::new(2.0, 0.5);
        assert_eq!(back, r);
    }
}
