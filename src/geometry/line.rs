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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::point_2::Point2;
use crate::geometry::segment_2::Segment2;
use crate::numeric::scalar::Scalar;

/// Coefficients of the implicit line equation `ax + by + c = 0`.
///
/// The representation is not normalized; two equal lines may carry
/// different coefficient triples.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineEquation<T: Scalar> {
    /// The coefficient of x.
    pub a: T,
    /// The coefficient of y.
    pub b: T,
    /// The constant term.
    pub c: T,
}

impl<T: Scalar> LineEquation<T> {
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    /// The line through `segment`, extended indefinitely in both directions.
    ///
    /// A vertical segment `x = x0` maps to `(1, 0, -x0)`; any other segment
    /// maps to `(-m, 1, -b0)` for the slope/intercept form `y = m*x + b0`.
    /// A degenerate segment falls into the vertical branch and yields a
    /// valid, if non-unique, line through its point.
    pub fn of(segment: &Segment2<T>) -> Self {
        if segment.is_vertical() {
            // x = x0  =>  1*x + 0*y - x0 = 0
            return Self::new(T::one(), T::zero(), -segment.start.x);
        }

        let start = segment.start;
        let end = segment.end;

        let m = (end.y - start.y) / (end.x - start.x);
        let b0 = start.y - m * start.x;

        // y = m*x + b0  =>  -m*x + 1*y - b0 = 0
        Self::new(-m, T::one(), -b0)
    }

    /// Where this line meets `other`, or `None` for parallel lines.
    ///
    /// In homogeneous coordinates the two lines meet at
    /// `(b1*c2 - b2*c1, a2*c1 - a1*c2, a1*b2 - a2*b1)`; a zero last
    /// component is the point at infinity, i.e. the lines are parallel.
    /// Coincident lines are parallel with every point shared, and also
    /// yield `None`; the caller cannot tell the two cases apart here.
    /// The zero test is exact, with no epsilon.
    pub fn intersection(&self, other: &Self) -> Option<Point2<T>> {
        let w = self.a * other.b - other.a * self.b;

        if w == T::zero() {
            return None;
        }

        let x = self.b * other.c - other.b * self.c;
        let y = other.a * self.c - self.a * other.c;

        Some(Point2::new(x / w, y / w))
    }
}
