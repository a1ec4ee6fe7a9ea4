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

use cg2d::geometry::{LineEquation, Point2, Rect, Segment2, Size2, Vector2, distance};

#[test]
fn distance_between_points() {
    let p1 = Point2::new(1.0, 2.0);
    let p2 = Point2::new(4.0, 6.0);

    assert_eq!(distance(p1, p2), 5.0);
    assert_eq!(distance(p1, p1), 0.0);
}

#[test]
fn distance_is_symmetric() {
    let p1 = Point2::new(-2.5, 0.75);
    let p2 = Point2::new(3.25, -4.5);
    assert_eq!(distance(p1, p2), distance(p2, p1));
}

#[test]
fn point_arithmetic() {
    let p = Point2::new(1.0, -2.0);
    let q = Point2::new(0.5, 0.5);

    assert_eq!(p + q, Point2::new(1.5, -1.5));
    assert_eq!((p + q) - q, p);
    assert_eq!(p * 3.0, Point2::new(3.0, -6.0));
}

#[test]
fn point_plus_vector() {
    let p = Point2::new(1.0, 1.0);
    let v = Vector2::new(2.0, -3.0);
    assert_eq!(p + v, Point2::new(3.0, -2.0));
}

#[test]
fn size_aspect_and_flip() {
    let s = Size2::new(4.0, 2.0);
    assert_eq!(s.aspect_ratio(), 2.0);
    assert_eq!(s.flipped().aspect_ratio(), 0.5);
}

#[test]
fn rect_spanning_and_scaling() {
    let r = Rect::spanning(Point2::new(0.0, 4.0), Point2::new(2.0, 0.0));
    assert_eq!(r.origin, Point2::new(0.0, 0.0));
    assert_eq!(r.size, Size2::new(2.0, 4.0));

    let scaled = r * 2.0;
    assert_eq!(scaled.size, Size2::new(4.0, 8.0));

    let shifted = r.offset_by(Vector2::new(1.0, 1.0));
    assert_eq!(shifted.origin, Point2::new(1.0, 1.0));
    assert_eq!(shifted.size, r.size);
}

#[test]
fn segment_properties() {
    let s = Segment2::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
    assert_eq!(s.length(), 5.0);
    assert_eq!(s.midpoint(), Point2::new(1.5, 2.0));
    assert!(!s.is_vertical());
    assert!(!s.is_horizontal());
    assert!(!s.is_degenerate());
}

#[test]
fn line_equation_shapes() {
    // Vertical: x = 5.
    let v = LineEquation::of(&Segment2::new(Point2::new(5.0, 1.0), Point2::new(5.0, 9.0)));
    assert_eq!((v.a, v.b, v.c), (1.0, 0.0, -5.0));

    // y = 2x + 1  =>  (-2, 1, -1).
    let s = LineEquation::of(&Segment2::new(Point2::new(0.0, 1.0), Point2::new(1.0, 3.0)));
    assert_eq!((s.a, s.b, s.c), (-2.0, 1.0, -1.0));
}
