// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-to-shape distance evaluators.
//!
//! Every function here is pure and returns a distance that is never
//! negative. Closed shapes (rectangles and circles) are treated as filled:
//! any point inside or on them is at distance `0`. Open shapes (lines and
//! curves) subtract half of their stroke width so a point on the painted
//! stroke is also at distance `0`.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Circle, CubicBez, Line, ParamCurveNearest, Point, Rect, Vec2};

use crate::PickConfig;
use crate::curve::CurveSampler;

/// Distance from `pt` to the closest point of the segment `line`.
///
/// The projection of `pt` onto the segment is clamped to the endpoints.
/// A zero-length segment degrades to the distance to its single point.
pub fn segment_distance(pt: Point, line: Line) -> f64 {
    line.nearest(pt, 0.).distance_sq.sqrt()
}

/// Distance from `pt` to a stroked segment of the given `width`.
pub fn line_distance(pt: Point, line: Line, width: f64) -> f64 {
    (segment_distance(pt, line) - width * 0.5).max(0.0)
}

/// Distance from `pt` to a filled, axis-aligned rectangle.
///
/// Points inside or on the boundary are at distance `0`. Outside, the gap is
/// measured per axis and combined, which yields the straight distance to an
/// edge or the Euclidean distance to a corner.
pub fn rect_distance(pt: Point, rect: Rect) -> f64 {
    let rect = rect.abs();
    let dx = (rect.x0 - pt.x).max(pt.x - rect.x1).max(0.0);
    let dy = (rect.y0 - pt.y).max(pt.y - rect.y1).max(0.0);
    Vec2::new(dx, dy).hypot()
}

/// Distance from `pt` to a filled disk.
pub fn circle_distance(pt: Point, circle: Circle) -> f64 {
    (pt.distance(circle.center) - circle.radius).max(0.0)
}

/// Approximate distance from `pt` to a stroked cubic Bézier.
///
/// See [`CurveSampler::distance`] for the error bound.
pub fn curve_distance(pt: Point, curve: CubicBez, width: f64, config: &PickConfig) -> f64 {
    let centerline = CurveSampler::with_config(curve, config).distance(pt);
    (centerline - width * 0.5).max(0.0)
}
