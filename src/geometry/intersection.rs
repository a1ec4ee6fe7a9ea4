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

use crate::geometry::line::LineEquation;
use crate::geometry::point_2::Point2;
use crate::geometry::segment_2::Segment2;
use crate::kernel::orientation::{Orientation, orientation};
use crate::numeric::scalar::Scalar;

/// Result of the full segment-segment intersection classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection<T: Scalar> {
    None,
    Point(Point2<T>),
    Overlapping(Segment2<T>),
}

/// Returns `true` if both segments share at least one point, touching at an
/// endpoint included.
///
/// Classic double orientation test: if both endpoints of one segment lie
/// strictly on the same side of the line through the other, the segments
/// cannot meet; if neither side test rules the crossing out, they do.
///
/// Tie-break: any collinear triple counts as contact, *without* checking
/// that the collinear point falls within the finite overlap. For disjoint
/// collinear segments this over-approximates; use
/// [`segment_intersection`] when that distinction matters.
pub fn segments_intersect<T: Scalar>(segment1: &Segment2<T>, segment2: &Segment2<T>) -> bool {
    let p1 = segment1.start;
    let p2 = segment1.end;

    let q1 = segment2.start;
    let q2 = segment2.end;

    // Side of the line through segment 1 on which each endpoint of
    // segment 2 falls. A degenerate (collinear) triple means contact at
    // one point; two equal orientations mean no crossing is possible.
    let orientation1 = orientation(p1, p2, q1);
    let orientation2 = orientation(p1, p2, q2);

    if orientation1 == Orientation::Collinear || orientation2 == Orientation::Collinear {
        return true;
    }
    if orientation1 == orientation2 {
        return false;
    }

    // Same test with the roles of the segments swapped.
    let orientation3 = orientation(q1, q2, p1);
    let orientation4 = orientation(q1, q2, p2);

    if orientation3 == Orientation::Collinear || orientation4 == Orientation::Collinear {
        return true;
    }
    if orientation3 == orientation4 {
        return false;
    }

    // Each segment separates the other's endpoints: a proper crossing.
    true
}

/// Parameter `t` of `point` along `segment`, so that
/// `point = start + t*(end - start)` when the point lies on the segment's
/// line. Measured along the dominant axis (y for vertical segments, x
/// otherwise) to avoid dividing by a zero span.
pub fn parameter<T: Scalar>(point: Point2<T>, segment: &Segment2<T>) -> T {
    let start = segment.start;
    let end = segment.end;

    if segment.is_vertical() {
        (point.y - start.y) / (end.y - start.y)
    } else {
        (point.x - start.x) / (end.x - start.x)
    }
}

/// Calculates the intersection point of two finite segments.
///
/// Both segments are on equal footing: swapping the arguments does not
/// change the result beyond round-off. The lines through the segments are
/// intersected first; the crossing is accepted only when its parameter
/// along each segment lies within `[0 - tolerance, 1 + tolerance]`.
///
/// Parallel lines yield `None`. Overlapping collinear segments are
/// parallel too and also yield `None` here; [`segment_intersection`]
/// resolves that case.
pub fn segment_intersection_point<T: Scalar>(
    segment1: &Segment2<T>,
    segment2: &Segment2<T>,
    tolerance: T,
) -> Option<Point2<T>> {
    let eq1 = LineEquation::of(segment1);
    let eq2 = LineEquation::of(segment2);

    let ip = eq1.intersection(&eq2)?;

    let t1 = parameter(ip, segment1);
    let t2 = parameter(ip, segment2);

    let lower = T::zero() - tolerance;
    let upper = T::one() + tolerance;

    if t1 < lower || t1 > upper || t2 < lower || t2 > upper {
        return None;
    }
    Some(ip)
}

/// Full intersection classification of two finite segments.
///
/// Unlike [`segments_intersect`] (which over-approximates collinear
/// contact) and [`segment_intersection_point`] (which reports nothing for
/// parallel lines), this resolves the collinear case exactly: segments
/// sharing a sub-segment yield `Overlapping` with the shared extent,
/// segments touching at one point yield `Point`, disjoint segments yield
/// `None`. `tolerance` widens the acceptance window in parameter space,
/// the same way it does for [`segment_intersection_point`].
pub fn segment_intersection<T: Scalar>(
    segment1: &Segment2<T>,
    segment2: &Segment2<T>,
    tolerance: T,
) -> SegmentIntersection<T> {
    // Degenerate segments are single points; their lines are arbitrary, so
    // settle these cases before going through line equations.
    if segment1.is_degenerate() && segment2.is_degenerate() {
        if segment1.start == segment2.start {
            return SegmentIntersection::Point(segment1.start);
        }
        return SegmentIntersection::None;
    }
    if segment1.is_degenerate() {
        return point_contact(segment1.start, segment2, tolerance);
    }
    if segment2.is_degenerate() {
        return point_contact(segment2.start, segment1, tolerance);
    }

    if let Some(ip) = segment_intersection_point(segment1, segment2, tolerance) {
        return SegmentIntersection::Point(ip);
    }

    // The lines are parallel, or they cross outside the segments. Contact
    // is still possible if the segments lie on one line:
    if orientation(segment1.start, segment1.end, segment2.start) != Orientation::Collinear
        || orientation(segment1.start, segment1.end, segment2.end) != Orientation::Collinear
    {
        return SegmentIntersection::None;
    }

    // Collinear: express segment 2 in segment 1's parameter space and
    // intersect the intervals.
    let ta = parameter(segment2.start, segment1);
    let tb = parameter(segment2.end, segment1);
    let (lo, hi) = if ta <= tb { (ta, tb) } else { (tb, ta) };

    let lower = T::zero() - tolerance;
    let upper = T::one() + tolerance;

    if hi < lower || lo > upper {
        return SegmentIntersection::None;
    }

    let clip_lo = lo.max(T::zero());
    let clip_hi = hi.min(T::one());

    if clip_lo < clip_hi {
        return SegmentIntersection::Overlapping(Segment2::new(
            segment1.point_at(clip_lo),
            segment1.point_at(clip_hi),
        ));
    }

    // Contact at (or within tolerance of) a single point.
    SegmentIntersection::Point(segment1.point_at(clip_lo.min(T::one())))
}

// Contact between a single point and a non-degenerate segment.
fn point_contact<T: Scalar>(
    point: Point2<T>,
    segment: &Segment2<T>,
    tolerance: T,
) -> SegmentIntersection<T> {
    if orientation(segment.start, segment.end, point) != Orientation::Collinear {
        return SegmentIntersection::None;
    }

    let t = parameter(point, segment);
    if t < T::zero() - tolerance || t > T::one() + tolerance {
        return SegmentIntersection::None;
    }
    SegmentIntersection::Point(point)
}
