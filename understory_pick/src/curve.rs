// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subdivision helper for picking cubic Bézier curves.
//!
//! There is no closed form for the distance between a point and a cubic
//! curve, so [`CurveSampler`] approximates it with straight pieces:
//!
//! 1. The parameter range `[0, 1]` is cut into [`PickConfig::curve_segments`]
//!    equal windows.
//! 2. A window whose control-polygon bounds are farther away than the best
//!    distance found so far is skipped ([`CurveSampler::in_range`]).
//! 3. Surviving windows are halved until each piece deviates from its chord
//!    by no more than [`PickConfig::curve_accuracy`], again skipping pieces
//!    that cannot beat the current best.
//! 4. The distance to a flat piece is the distance to its chord.
//!
//! Every point of a piece lies inside the convex hull of its control points,
//! so the chord and the piece are never farther apart than the piece's
//! flatness, and the reported distance differs from the true one by at most
//! the configured accuracy (unless the depth limit cuts refinement short).

use kurbo::{CubicBez, Line, ParamCurve, Point, Rect};
use smallvec::SmallVec;

use crate::PickConfig;
use crate::distance::{rect_distance, segment_distance};

/// Windowed polyline view of a cubic Bézier.
#[derive(Clone, Copy, Debug)]
pub struct CurveSampler {
    curve: CubicBez,
    segments: usize,
    accuracy: f64,
    max_depth: u32,
}

impl CurveSampler {
    /// Creates a sampler using [`PickConfig::default`].
    pub fn new(curve: CubicBez) -> Self {
        Self::with_config(curve, &PickConfig::default())
    }

    /// Creates a sampler with explicit subdivision settings.
    pub fn with_config(curve: CubicBez, config: &PickConfig) -> Self {
        let config = config.sanitized();
        Self {
            curve,
            segments: config.curve_segments,
            accuracy: config.curve_accuracy,
            max_depth: config.curve_max_depth,
        }
    }

    /// The sampled curve.
    pub fn curve(&self) -> CubicBez {
        self.curve
    }

    /// Position on the curve at parameter `t`, clamped to `[0, 1]`.
    pub fn eval(&self, t: f64) -> Point {
        self.curve.eval(t.clamp(0.0, 1.0))
    }

    /// X coordinate of [`CurveSampler::eval`].
    pub fn eval_x(&self, t: f64) -> f64 {
        self.eval(t).x
    }

    /// Y coordinate of [`CurveSampler::eval`].
    pub fn eval_y(&self, t: f64) -> f64 {
        self.eval(t).y
    }

    /// Number of parameter windows.
    pub fn segment_count(&self) -> usize {
        self.segments
    }

    /// Straight chord of window `index`.
    ///
    /// Indices past the last window are clamped to it.
    pub fn segment(&self, index: usize) -> Line {
        let (t0, t1) = self.params(index);
        Line::new(self.curve.eval(t0), self.curve.eval(t1))
    }

    /// Bounds of the control polygon of window `index`.
    ///
    /// The curve never leaves this rectangle between the window's endpoints.
    /// Indices past the last window are clamped to it.
    pub fn window(&self, index: usize) -> Rect {
        control_bounds(self.piece(index))
    }

    /// Returns `true` if `(x, y)` is within `slack` of window `index`.
    ///
    /// This is a conservative test: `false` guarantees that no point of the
    /// window's curve piece is within `slack`, while `true` only means the
    /// piece is worth refining. Out-of-range indices are never in range.
    pub fn in_range(&self, index: usize, x: f64, y: f64, slack: f64) -> bool {
        index < self.segments && rect_distance(Point::new(x, y), self.window(index)) <= slack
    }

    /// Approximate distance from `pt` to the curve centerline.
    pub fn distance(&self, pt: Point) -> f64 {
        let mut best = f64::INFINITY;
        let mut stack: SmallVec<[(CubicBez, u32); 24]> = SmallVec::new();
        for index in 0..self.segments {
            if !self.in_range(index, pt.x, pt.y, best) {
                continue;
            }
            stack.push((self.piece(index), 0));
            while let Some((piece, depth)) = stack.pop() {
                if rect_distance(pt, control_bounds(piece)) >= best {
                    continue;
                }
                if depth >= self.max_depth || flatness(piece) <= self.accuracy {
                    best = best.min(segment_distance(pt, Line::new(piece.p0, piece.p3)));
                    continue;
                }
                let (first, second) = piece.subdivide();
                // Depth first, nearest parameter half first.
                stack.push((second, depth + 1));
                stack.push((first, depth + 1));
            }
        }
        best
    }

    fn params(&self, index: usize) -> (f64, f64) {
        let n = self.segments as f64;
        let index = index.min(self.segments - 1);
        let t0 = index as f64 / n;
        let t1 = if index + 1 == self.segments {
            1.0
        } else {
            (index + 1) as f64 / n
        };
        (t0, t1)
    }

    fn piece(&self, index: usize) -> CubicBez {
        let (t0, t1) = self.params(index);
        self.curve.subsegment(t0..t1)
    }
}

fn control_bounds(c: CubicBez) -> Rect {
    Rect::from_points(c.p0, c.p1).union_pt(c.p2).union_pt(c.p3)
}

/// Largest distance from an inner control point to the chord.
fn flatness(c: CubicBez) -> f64 {
    let chord = Line::new(c.p0, c.p3);
    segment_distance(c.p1, chord).max(segment_distance(c.p2, chord))
}
