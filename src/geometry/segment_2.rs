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

use crate::geometry::intersection::{
    SegmentIntersection, segment_intersection, segment_intersection_point, segments_intersect,
};
use crate::geometry::point_2::Point2;
use crate::geometry::projection::{closest_point_on_segment, distance_to_segment};
use crate::numeric::scalar::Scalar;

/// A finite, directed line segment from `start` to `end`.
///
/// A segment whose endpoints coincide is *degenerate* (zero length); every
/// operation in the crate handles that case without dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment2<T: Scalar> {
    pub start: Point2<T>,
    pub end: Point2<T>,
}

impl<T: Scalar> Segment2<T> {
    pub fn new(start: Point2<T>, end: Point2<T>) -> Self {
        Self { start, end }
    }

    /// Exact comparison of the x coordinates.
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// Exact comparison of the y coordinates.
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    /// True when start and end coincide.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    pub fn length(&self) -> T {
        self.start.distance_to(&self.end)
    }

    pub fn midpoint(&self) -> Point2<T> {
        Point2::new(
            (self.start.x + self.end.x) / T::two(),
            (self.start.y + self.end.y) / T::two(),
        )
    }

    /// The same segment with start and end swapped.
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// The point `start + t * (end - start)`. Values of `t` outside [0, 1]
    /// land on the extended line, past the endpoints.
    pub fn point_at(&self, t: T) -> Point2<T> {
        Point2::new(
            self.start.x + t * (self.end.x - self.start.x),
            self.start.y + t * (self.end.y - self.start.y),
        )
    }

    /// The point within this segment that minimizes distance to `point`.
    pub fn closest_point_to(&self, point: Point2<T>) -> Point2<T> {
        closest_point_on_segment(point, self)
    }

    /// Minimum distance between `point` and any point of this segment.
    pub fn distance_to(&self, point: Point2<T>) -> T {
        distance_to_segment(point, self)
    }

    /// Boolean intersection test against `other`, touching included.
    pub fn intersects(&self, other: &Segment2<T>) -> bool {
        segments_intersect(self, other)
    }

    /// The point where this segment meets `other`, if any.
    pub fn intersection_point(&self, other: &Segment2<T>, tolerance: T) -> Option<Point2<T>> {
        segment_intersection_point(self, other, tolerance)
    }

    /// Full intersection classification against `other`, including the
    /// collinear-overlap case.
    pub fn intersection(&self, other: &Segment2<T>, tolerance: T) -> SegmentIntersection<T> {
        segment_intersection(self, other, tolerance)
    }
}
