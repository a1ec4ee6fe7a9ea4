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

use crate::geometry::point_2::{Point2, distance};
use crate::geometry::segment_2::Segment2;
use crate::numeric::scalar::Scalar;

/// Returns the point within `segment` that minimizes distance to `point`.
///
/// The foot of the perpendicular from `point` onto the segment's line is
/// computed algebraically, then clamped to the segment: a parameter value
/// below 0 snaps to `start`, above 1 snaps to `end`. Degenerate segments
/// return their single point.
pub fn closest_point_on_segment<T: Scalar>(point: Point2<T>, segment: &Segment2<T>) -> Point2<T> {
    let p1 = segment.start;
    let p2 = segment.end;

    if segment.is_degenerate() {
        // Either endpoint will do.
        return p1;
    }

    if segment.is_vertical() {
        // All points on the segment share x; the perpendicular is
        // horizontal, so the foot keeps the outside point's y:
        let foot = Point2::new(p1.x, point.y);

        // Parameter value of the foot along y = p1.y + t*(p2.y - p1.y):
        let t = (point.y - p1.y) / (p2.y - p1.y);
        return clamp_to_segment(t, foot, segment);
    }

    if segment.is_horizontal() {
        // Mirror image of the vertical case; handled separately because
        // the slope form below would divide by a zero slope:
        let foot = Point2::new(point.x, p1.y);

        let t = (point.x - p1.x) / (p2.x - p1.x);
        return clamp_to_segment(t, foot, segment);
    }

    // Sloped segment; line through it is y = m1*x + b1:
    let m1 = (p2.y - p1.y) / (p2.x - p1.x);
    let b1 = p2.y - m1 * p2.x;

    // The perpendicular through `point` has the negative inverse slope:
    let m2 = -T::one() / m1;
    let b2 = point.y - m2 * point.x;

    // Intersect both lines:
    //   m1*x + b1 = m2*x + b2  =>  x = (b2 - b1)/(m1 - m2)
    let ix = (b2 - b1) / (m1 - m2);
    let iy = m1 * ix + b1;

    // Parameter value at the intersection point along
    //   p1.x + t*(p2.x - p1.x) = ix:
    let t = (ix - p1.x) / (p2.x - p1.x);
    clamp_to_segment(t, Point2::new(ix, iy), segment)
}

fn clamp_to_segment<T: Scalar>(t: T, foot: Point2<T>, segment: &Segment2<T>) -> Point2<T> {
    if t < T::zero() {
        // Foot falls outside the segment, on the side of start:
        segment.start
    } else if t > T::one() {
        // Foot falls outside the segment, on the side of end:
        segment.end
    } else {
        foot
    }
}

/// Returns the minimum distance between `point` and any point of `segment`.
///
/// Delegates to [`closest_point_on_segment`] and measures the straight-line
/// distance to the result; there is no separate algorithm.
pub fn distance_to_segment<T: Scalar>(point: Point2<T>, segment: &Segment2<T>) -> T {
    let on_segment = closest_point_on_segment(point, segment);
    distance(point, on_segment)
}
