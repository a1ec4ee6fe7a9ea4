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

use std::ops::{Add, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::projection::distance_to_segment;
use crate::geometry::segment_2::Segment2;
use crate::geometry::vector_2::Vector2;
use crate::numeric::scalar::Scalar;

/// An (x, y) coordinate pair. Plain value type; equality is coordinate
/// equality, with the usual floating-point caveats.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2<T: Scalar> {
    pub x: T,
    pub y: T,
}

/// One of the two coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl<T: Scalar> Point2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Self) -> T {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Minimum Euclidean distance to any point of `segment`.
    pub fn distance_to_segment(&self, segment: &Segment2<T>) -> T {
        distance_to_segment(*self, segment)
    }

    /// Squared distance from the origin, treating the point as a vector.
    pub fn squared_length(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// The absolute value of the `x` component.
    pub fn x_magnitude(&self) -> T {
        self.x.abs()
    }

    /// The absolute value of the `y` component.
    pub fn y_magnitude(&self) -> T {
        self.y.abs()
    }

    /// The axis with the larger absolute value. Ties go to `Axis::Y`.
    pub fn predominant_axis(&self) -> Axis {
        if self.x_magnitude() > self.y_magnitude() {
            Axis::X
        } else {
            Axis::Y
        }
    }

    /// The largest absolute-value component.
    pub fn predominant_axis_magnitude(&self) -> T {
        self.x.abs().max(self.y.abs())
    }

    /// Difference of two points, as a displacement.
    pub fn vector_to(&self, other: &Self) -> Vector2<T> {
        Vector2::new(other.x - self.x, other.y - self.y)
    }
}

/// Euclidean distance between two points.
pub fn distance<T: Scalar>(p1: Point2<T>, p2: Point2<T>) -> T {
    p1.distance_to(&p2)
}

impl<T: Scalar> Add for Point2<T> {
    type Output = Point2<T>;
    fn add(self, rhs: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Scalar> Sub for Point2<T> {
    type Output = Point2<T>;
    fn sub(self, rhs: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Scalar> Add<Vector2<T>> for Point2<T> {
    type Output = Point2<T>;
    fn add(self, rhs: Vector2<T>) -> Point2<T> {
        Point2 {
            x: self.x + rhs.dx,
            y: self.y + rhs.dy,
        }
    }
}

impl<T: Scalar> Mul<T> for Point2<T> {
    type Output = Point2<T>;
    fn mul(self, scale: T) -> Point2<T> {
        Point2 {
            x: scale * self.x,
            y: scale * self.y,
        }
    }
}

impl Mul<Point2<f32>> for f32 {
    type Output = Point2<f32>;
    fn mul(self, point: Point2<f32>) -> Point2<f32> {
        point * self
    }
}

impl Mul<Point2<f64>> for f64 {
    type Output = Point2<f64>;
    fn mul(self, point: Point2<f64>) -> Point2<f64> {
        point * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_wise_ops() {
        let p = Point2::new(1.0, 2.0);
        let q = Point2::new(-3.0, 0.5);

        assert_eq!(p + q, Point2::new(-2.0, 2.5));
        assert_eq!(p - q, Point2::new(4.0, 1.5));
        assert_eq!(2.0 * p, Point2::new(2.0, 4.0));
        assert_eq!(p * 2.0, 2.0 * p);
    }

    #[test]
    fn distance_3_4_5() {
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(3.0, 4.0);
        assert_eq!(p1.distance_to(&p2), 5.0);
    }

    #[test]
    fn predominant_axis() {
        assert_eq!(Point2::new(3.0, -1.0).predominant_axis(), Axis::X);
        assert_eq!(Point2::new(-1.0, 3.0).predominant_axis(), Axis::Y);
        assert_eq!(Point2::new(2.0, -2.0).predominant_axis(), Axis::Y);
        assert_eq!(Point2::new(-3.0, 1.0).predominant_axis_magnitude(), 3.0);
    }

    #[test]
    fn squared_length() {
        assert_eq!(Point2::new(3.0, 4.0).squared_length(), 25.0);
    }
}
