// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registered geometry: shapes, tolerances, and hit records.

use kurbo::{Circle, CubicBez, Line, Point, Rect, Shape as _};

use crate::distance::{circle_distance, curve_distance, line_distance, rect_distance};
use crate::{PickConfig, ToleranceError};

/// Geometry of a pickable item, in device units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// A straight segment.
    Line(Line),
    /// A filled, axis-aligned rectangle.
    Rect(Rect),
    /// A filled disk.
    Circle(Circle),
    /// A cubic Bézier curve.
    Curve(CubicBez),
}

impl Shape {
    /// Returns `true` for shapes that are stroked rather than filled.
    ///
    /// Open shapes widen their hit band by half the stroke width.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Line(_) | Self::Curve(_))
    }

    /// Distance from `pt` to this shape, never negative.
    ///
    /// `width` is the stroke width; it is ignored for closed shapes.
    pub fn distance(&self, pt: Point, width: f64, config: &PickConfig) -> f64 {
        match *self {
            Self::Line(line) => line_distance(pt, line, width),
            Self::Rect(rect) => rect_distance(pt, rect),
            Self::Circle(circle) => circle_distance(pt, circle),
            Self::Curve(curve) => curve_distance(pt, curve, width, config),
        }
    }

    /// Bounds of the shape's geometry (control points for curves).
    pub fn bounds(&self) -> Rect {
        match *self {
            Self::Line(line) => Rect::from_points(line.p0, line.p1),
            Self::Rect(rect) => rect.abs(),
            Self::Circle(circle) => circle.bounding_box(),
            Self::Curve(c) => Rect::from_points(c.p0, c.p1).union_pt(c.p2).union_pt(c.p3),
        }
    }
}

/// Non-negative hit range and stroke width for one record.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tolerance {
    range: f64,
    width: f64,
}

impl Tolerance {
    /// Creates a tolerance, clamping negative or NaN inputs to `0`.
    pub fn new(range: f64, width: f64) -> Self {
        let clamped = Self {
            range: clamp_non_negative(range),
            width: clamp_non_negative(width),
        };
        if clamped.range != range || clamped.width != width {
            tracing::debug!(range, width, "clamped invalid pick tolerance");
        }
        clamped
    }

    /// Creates a tolerance, rejecting negative or non-finite inputs.
    pub fn try_new(range: f64, width: f64) -> Result<Self, ToleranceError> {
        if !range.is_finite() || !width.is_finite() {
            return Err(ToleranceError::NonFinite);
        }
        if range < 0.0 {
            return Err(ToleranceError::NegativeRange(range));
        }
        if width < 0.0 {
            return Err(ToleranceError::NegativeWidth(width));
        }
        Ok(Self { range, width })
    }

    /// Tolerance with no stroke width.
    pub fn from_range(range: f64) -> Self {
        Self::new(range, 0.0)
    }

    /// The hit range.
    pub fn hit_range(&self) -> f64 {
        self.range
    }

    /// The stroke width.
    pub fn width(&self) -> f64 {
        self.width
    }
}

fn clamp_non_negative(v: f64) -> f64 {
    if v >= 0.0 { v } else { 0.0 }
}

/// One registered item: payload, tolerance, and geometry.
///
/// Records are immutable once registered.
#[derive(Clone, Debug)]
pub struct HitRecord<P> {
    payload: P,
    tolerance: Tolerance,
    shape: Shape,
    window: Rect,
}

impl<P> HitRecord<P> {
    /// Creates a record and caches its query window.
    pub fn new(payload: P, tolerance: Tolerance, shape: Shape) -> Self {
        // The evaluator already subtracts half the width for open shapes,
        // so a hit can sit up to a full width beyond the range.
        let reach = if shape.is_open() {
            tolerance.range + tolerance.width
        } else {
            tolerance.range
        };
        Self {
            payload,
            tolerance,
            shape,
            window: shape.bounds().inflate(reach, reach),
        }
    }

    /// The caller-owned payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// The record's tolerance.
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// The record's geometry.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Largest distance that still counts as a hit.
    ///
    /// This is the range, plus half the stroke width for open shapes.
    pub fn effective_range(&self) -> f64 {
        effective_range(&self.shape, &self.tolerance)
    }

    /// Shape bounds inflated by the reach of the record.
    ///
    /// Points outside this rectangle can never hit the record.
    pub fn window(&self) -> Rect {
        self.window
    }

    /// Distance from `pt` to this record's geometry.
    pub fn distance(&self, pt: Point, config: &PickConfig) -> f64 {
        self.shape.distance(pt, self.tolerance.width, config)
    }

    /// Returns the distance if `pt` hits this record.
    pub fn hit(&self, pt: Point, config: &PickConfig) -> Option<f64> {
        if !contains_closed(self.window, pt) {
            return None;
        }
        let d = self.distance(pt, config);
        (d <= self.effective_range()).then_some(d)
    }
}

fn effective_range(shape: &Shape, tolerance: &Tolerance) -> f64 {
    if shape.is_open() {
        tolerance.range + tolerance.width * 0.5
    } else {
        tolerance.range
    }
}

/// Like [`Rect::contains`], but including the right and bottom edges.
fn contains_closed(rect: Rect, pt: Point) -> bool {
    pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_clamps_and_validates() {
        let t = Tolerance::new(-3.0, f64::NAN);
        assert_eq!(t.hit_range(), 0.0);
        assert_eq!(t.width(), 0.0);

        assert_eq!(
            Tolerance::try_new(-1.0, 0.0),
            Err(ToleranceError::NegativeRange(-1.0))
        );
        assert_eq!(
            Tolerance::try_new(1.0, -2.0),
            Err(ToleranceError::NegativeWidth(-2.0))
        );
        assert_eq!(
            Tolerance::try_new(f64::INFINITY, 0.0),
            Err(ToleranceError::NonFinite)
        );
        assert_eq!(Tolerance::try_new(2.0, 4.0), Ok(Tolerance::new(2.0, 4.0)));
    }

    #[test]
    fn open_shapes_add_half_width() {
        let line = HitRecord::new(
            (),
            Tolerance::new(3.0, 4.0),
            Shape::Line(Line::new((0.0, 0.0), (10.0, 0.0))),
        );
        assert_eq!(line.effective_range(), 5.0);

        let rect = HitRecord::new(
            (),
            Tolerance::new(3.0, 4.0),
            Shape::Rect(Rect::new(0.0, 0.0, 10.0, 10.0)),
        );
        assert_eq!(rect.effective_range(), 3.0);
    }

    #[test]
    fn window_rejects_far_points_without_changing_hits() {
        let cfg = PickConfig::default();
        let rec = HitRecord::new(
            7_u32,
            Tolerance::from_range(2.0),
            Shape::Circle(Circle::new((0.0, 0.0), 5.0)),
        );
        assert_eq!(rec.window(), Rect::new(-7.0, -7.0, 7.0, 7.0));
        // On the inflated boundary: still a hit.
        assert_eq!(rec.hit(Point::new(7.0, 0.0), &cfg), Some(2.0));
        // Inside the window corner but outside the disk's reach.
        assert_eq!(rec.hit(Point::new(6.5, 6.5), &cfg), None);
        assert_eq!(rec.hit(Point::new(50.0, 0.0), &cfg), None);
    }
}
