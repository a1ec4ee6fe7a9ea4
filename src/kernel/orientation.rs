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

use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    Counterclockwise,
    Collinear,
}

/// Returns the signed turn value of the triple (a, b, c):
/// - >0 if clockwise
/// - <0 if counter-clockwise
/// - =0 if collinear
///
/// This is the negated cross product of the vectors (b - a) and (c - b),
/// with clockwise/counter-clockwise read in standard y-up axes.
pub fn orient2d<T: Scalar>(a: Point2<T>, b: Point2<T>, c: Point2<T>) -> T {
    (b.y - a.y) * (c.x - b.x) - (b.x - a.x) * (c.y - b.y)
}

/// Classifies the turn a -> b -> c. Uses an exact zero test, so coincident
/// or nearly collinear points classify as `Collinear` only when the cross
/// product is exactly zero.
pub fn orientation<T: Scalar>(a: Point2<T>, b: Point2<T>, c: Point2<T>) -> Orientation {
    let value = orient2d(a, b, c);
    if value > T::zero() {
        Orientation::Clockwise
    } else if value < T::zero() {
        Orientation::Counterclockwise
    } else {
        Orientation::Collinear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cw_test() {
        let a = Point2 { x: 0.0, y: 0.0 };
        let b = Point2 { x: 0.0, y: 1.0 };
        let c = Point2 { x: 1.0, y: 0.0 };

        assert!(orient2d(a, b, c) > 0.0);
        assert_eq!(orientation(a, b, c), Orientation::Clockwise);
    }

    #[test]
    fn ccw_test() {
        let a = Point2 { x: 0.0, y: 0.0 };
        let b = Point2 { x: 1.0, y: 0.0 };
        let c = Point2 { x: 0.0, y: 1.0 };

        assert!(orient2d(a, b, c) < 0.0);
        assert_eq!(orientation(a, b, c), Orientation::Counterclockwise);
    }

    #[test]
    fn collinear_test() {
        let a = Point2 { x: 0.0, y: 0.0 };
        let b = Point2 { x: 1.0, y: 1.0 };
        let c = Point2 { x: 2.0, y: 2.0 };

        assert_eq!(orientation(a, b, c), Orientation::Collinear);
    }

    #[test]
    fn coincident_points_are_collinear() {
        let p = Point2 { x: 3.5, y: -1.25 };
        assert_eq!(orientation(p, p, p), Orientation::Collinear);
    }
}
