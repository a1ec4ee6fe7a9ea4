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
use crate::numeric::scalar::Scalar;

/// A width/height extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size2<T: Scalar> {
    pub width: T,
    pub height: T,
}

impl<T: Scalar> Size2<T> {
    pub fn new(width: T, height: T) -> Self {
        Self { width, height }
    }

    /// Shortcut for `width` divided by `height`.
    pub fn aspect_ratio(&self) -> T {
        self.width / self.height
    }

    /// The same components, swapped (i.e. "rotated 90 degrees").
    pub fn flipped(&self) -> Self {
        Self::new(self.height, self.width)
    }
}

impl<T: Scalar> Mul<T> for Size2<T> {
    type Output = Size2<T>;
    fn mul(self, scale: T) -> Size2<T> {
        Size2 {
            width: scale * self.width,
            height: scale * self.height,
        }
    }
}

impl<T: Scalar> Div<T> for Size2<T> {
    type Output = Size2<T>;
    fn div(self, fraction: T) -> Size2<T> {
        Size2 {
            width: self.width / fraction,
            height: self.height / fraction,
        }
    }
}

// Component-wise scaling of a point by a size.
impl<T: Scalar> Mul<Point2<T>> for Size2<T> {
    type Output = Point2<T>;
    fn mul(self, point: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.width * point.x,
            y: self.height * point.y,
        }
    }
}

// Component-wise product of two sizes.
impl<T: Scalar> Mul for Size2<T> {
    type Output = Size2<T>;
    fn mul(self, rhs: Size2<T>) -> Size2<T> {
        Size2 {
            width: self.width * rhs.width,
            height: self.height * rhs.height,
        }
    }
}

impl Mul<Size2<f32>> for f32 {
    type Output = Size2<f32>;
    fn mul(self, size: Size2<f32>) -> Size2<f32> {
        size * self
    }
}

impl Mul<Size2<f64>> for f64 {
    type Output = Size2<f64>;
    fn mul(self, size: Size2<f64>) -> Size2<f64> {
        size * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio() {
        let s = Size2::new(16.0, 9.0);
        assert_eq!(s.aspect_ratio(), 16.0 / 9.0);
        assert_eq!(s.flipped(), Size2::new(9.0, 16.0));
    }

    #[test]
    fn scaling() {
        let s = Size2::new(4.0, 2.0);
        assert_eq!(s * 0.5, Size2::new(2.0, 1.0));
        assert_eq!(s / 2.0, Size2::new(2.0, 1.0));
        assert_eq!(2.0 * s, Size2::new(8.0, 4.0));
    }

    #[test]
    fn point_scaling_is_component_wise() {
        let s = Size2::new(2.0, 3.0);
        let p = Point2::new(1.0, -1.0);
        assert_eq!(s * p, Point2::new(2.0, -3.0));
    }
}
