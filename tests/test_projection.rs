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

use cg2d::geometry::{Point2, Segment2, closest_point_on_segment, distance_to_segment};

#[test]
fn degenerate_segment_projects_to_its_point() {
    let a = Point2::new(-1.0, 4.0);
    let s = Segment2::new(a, a);

    for p in [
        Point2::new(0.0, 0.0),
        Point2::new(100.0, -100.0),
        a,
    ] {
        assert_eq!(closest_point_on_segment(p, &s), a);
    }
    assert_eq!(distance_to_segment(Point2::new(-1.0, 0.0), &s), 4.0);
}

#[test]
fn foot_within_a_sloped_segment() {
    // Line y = x from (0,0) to (4,4); the foot of (4,0) is (2,2).
    let s: Segment2<f64> = Segment2::new(Point2::new(0.0, 0.0), Point2::new(4.0, 4.0));
    let foot = closest_point_on_segment(Point2::new(4.0, 0.0), &s);

    assert!((foot.x - 2.0).abs() < 1e-12);
    assert!((foot.y - 2.0).abs() < 1e-12);

    let d = distance_to_segment(Point2::new(4.0, 0.0), &s);
    assert!((d - 8.0f64.sqrt()).abs() < 1e-12);
}

#[test]
fn clamping_before_start_and_past_end() {
    let s = Segment2::new(Point2::new(1.0, 1.0), Point2::new(3.0, 2.0));

    // Perpendicular foot falls before the start:
    assert_eq!(closest_point_on_segment(Point2::new(-2.0, 0.0), &s), s.start);
    // ...and past the end:
    assert_eq!(closest_point_on_segment(Point2::new(6.0, 3.0), &s), s.end);
}

#[test]
fn vertical_and_horizontal_segments() {
    let v = Segment2::new(Point2::new(2.0, 0.0), Point2::new(2.0, 10.0));
    assert_eq!(
        closest_point_on_segment(Point2::new(-3.0, 4.0), &v),
        Point2::new(2.0, 4.0)
    );
    assert_eq!(distance_to_segment(Point2::new(-3.0, 4.0), &v), 5.0);

    let h = Segment2::new(Point2::new(0.0, -1.0), Point2::new(6.0, -1.0));
    assert_eq!(
        closest_point_on_segment(Point2::new(2.0, 7.0), &h),
        Point2::new(2.0, -1.0)
    );
    assert_eq!(distance_to_segment(Point2::new(2.0, 7.0), &h), 8.0);
}

#[test]
fn endpoints_project_to_themselves() {
    let s = Segment2::new(Point2::new(1.0, 2.0), Point2::new(5.0, 4.0));
    assert_eq!(closest_point_on_segment(s.start, &s), s.start);
    assert_eq!(closest_point_on_segment(s.end, &s), s.end);
}

#[test]
fn method_mirrors_free_function() {
    let s = Segment2::new(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0));
    let p = Point2::new(1.0, 3.0);

    assert_eq!(s.closest_point_to(p), closest_point_on_segment(p, &s));
    assert_eq!(s.distance_to(p), distance_to_segment(p, &s));
    assert_eq!(p.distance_to_segment(&s), 3.0);
}
