pub mod intersection;
pub mod line;
pub mod point_2;
pub mod projection;
pub mod rect;
pub mod segment_2;
pub mod size_2;
pub mod triangle_2;
pub mod vector_2;

pub use intersection::{
    SegmentIntersection, parameter, segment_intersection, segment_intersection_point,
    segments_intersect,
};
pub use line::LineEquation;
pub use point_2::{Axis, Point2, distance};
pub use projection::{closest_point_on_segment, distance_to_segment};
pub use rect::Rect;
pub use segment_2::Segment2;
pub use size_2::Size2;
pub use triangle_2::Triangle2;
pub use vector_2::Vector2;
