// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hit registry and query engine.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;

use kurbo::{Circle, CubicBez, Line, Point, Rect, Size};

use crate::{HitRecord, PickConfig, Shape, Tolerance};

/// A registered item that is close enough to a query point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitResult<P> {
    /// The payload the item was registered with.
    pub payload: P,
    /// Distance from the query point to the item, never negative.
    pub distance: f64,
}

/// Receives hits, in registration order, during a push-style query.
///
/// Implemented for every `FnMut(&P, f64)` closure.
pub trait HitListener<P> {
    /// Called once per hit with the record's payload and distance.
    fn on_hit(&mut self, payload: &P, distance: f64);
}

impl<P, F> HitListener<P> for F
where
    F: FnMut(&P, f64),
{
    fn on_hit(&mut self, payload: &P, distance: f64) {
        self(payload, distance);
    }
}

/// Listener that keeps only the nearest hit.
///
/// When two hits are equally near, the one registered later wins, matching
/// the usual painter's order where later items are drawn on top.
#[derive(Clone, Debug)]
pub struct ClosestHit<P> {
    best: Option<HitResult<P>>,
}

impl<P> ClosestHit<P> {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self { best: None }
    }

    /// The nearest hit seen so far.
    pub fn get(&self) -> Option<&HitResult<P>> {
        self.best.as_ref()
    }

    /// Consumes the tracker, returning the nearest hit.
    pub fn into_inner(self) -> Option<HitResult<P>> {
        self.best
    }

    /// Forgets the current best hit.
    pub fn clear(&mut self) {
        self.best = None;
    }
}

impl<P> Default for ClosestHit<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone> HitListener<P> for ClosestHit<P> {
    fn on_hit(&mut self, payload: &P, distance: f64) {
        let replace = match &self.best {
            None => true,
            Some(best) => distance <= best.distance,
        };
        if replace {
            self.best = Some(HitResult {
                payload: payload.clone(),
                distance,
            });
        }
    }
}

type BoxedListener<P> = Box<dyn FnMut(&P, f64)>;

/// A resettable registry of pickable shapes.
///
/// A `Picker` lives through repeated generations: the draw pass calls
/// [`Picker::reset`], registers one record per visible primitive with the
/// `add_*` methods, and pointer handling then queries it with
/// [`Picker::find`], [`Picker::visit`], or [`Picker::closest`] until the
/// next draw pass. Coordinates are in device units and are never
/// transformed by the picker.
///
/// Records are evaluated independently, in registration order. Every
/// record whose distance is within its tolerance is reported; overlapping
/// items are all hits and choosing among them is up to the caller.
///
/// A listener installed with [`Picker::set_listener`] is only called by
/// [`Picker::notify`]. [`Picker::find`], [`Picker::visit`], and
/// [`Picker::closest`] never invoke it, so pulling hits does not also
/// push them.
pub struct Picker<P> {
    records: Vec<HitRecord<P>>,
    config: PickConfig,
    listener: Option<BoxedListener<P>>,
}

impl<P> Debug for Picker<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Picker")
            .field("records", &self.records.len())
            .field("config", &self.config)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl<P> Default for Picker<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Picker<P> {
    /// Creates an empty picker with the default configuration.
    pub fn new() -> Self {
        Self::with_config(PickConfig::default())
    }

    /// Creates an empty picker with the given configuration.
    pub fn with_config(config: PickConfig) -> Self {
        Self {
            records: Vec::new(),
            config: config.sanitized(),
            listener: None,
        }
    }

    /// Creates an empty picker with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &PickConfig {
        &self.config
    }

    /// Replaces the configuration; applies to subsequent queries.
    pub fn set_config(&mut self, config: PickConfig) {
        self.config = config.sanitized();
    }

    /// Removes every record. The listener and configuration are kept.
    pub fn reset(&mut self) {
        tracing::trace!(records = self.records.len(), "reset picker");
        self.records.clear();
    }

    /// Number of registered records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Registered records, in registration order.
    pub fn records(&self) -> &[HitRecord<P>] {
        &self.records
    }

    /// Registers an arbitrary shape.
    pub fn add_shape(&mut self, payload: P, tolerance: Tolerance, shape: Shape) {
        self.records.push(HitRecord::new(payload, tolerance, shape));
    }

    /// Registers a segment from `(x1, y1)` to `(x2, y2)` stroked with `width`.
    pub fn add_line(
        &mut self,
        payload: P,
        range: f64,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: f64,
    ) {
        self.add_shape(
            payload,
            Tolerance::new(range, width),
            Shape::Line(Line::new((x1, y1), (x2, y2))),
        );
    }

    /// Registers a filled rectangle with top-left `(x, y)` and size `(w, h)`.
    pub fn add_rect(&mut self, payload: P, range: f64, x: f64, y: f64, w: f64, h: f64) {
        self.add_shape(
            payload,
            Tolerance::from_range(range),
            Shape::Rect(Rect::from_origin_size((x, y), Size::new(w, h))),
        );
    }

    /// Registers a filled circle.
    pub fn add_circle(&mut self, payload: P, range: f64, cx: f64, cy: f64, radius: f64) {
        self.add_shape(
            payload,
            Tolerance::from_range(range),
            Shape::Circle(Circle::new((cx, cy), radius)),
        );
    }

    /// Registers a cubic Bézier from `(x1, y1)` through the control points
    /// `(x2, y2)` and `(x3, y3)` to `(x4, y4)`, stroked with `width`.
    pub fn add_curve_to(
        &mut self,
        payload: P,
        range: f64,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
        x4: f64,
        y4: f64,
        width: f64,
    ) {
        self.add_shape(
            payload,
            Tolerance::new(range, width),
            Shape::Curve(CubicBez::new((x1, y1), (x2, y2), (x3, y3), (x4, y4))),
        );
    }

    /// Calls `listener` for every hit at `(x, y)`, returning the hit count.
    pub fn visit<L: HitListener<P>>(&self, x: f64, y: f64, listener: &mut L) -> usize {
        visit_records(&self.records, &self.config, Point::new(x, y), listener)
    }

    /// Installs the listener used by [`Picker::notify`].
    pub fn set_listener(&mut self, listener: impl FnMut(&P, f64) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the installed listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Reports every hit at `(x, y)` to the installed listener.
    ///
    /// Returns the number of hits, or `0` without evaluating anything when
    /// no listener is installed.
    pub fn notify(&mut self, x: f64, y: f64) -> usize {
        let Some(listener) = self.listener.as_mut() else {
            return 0;
        };
        visit_records(&self.records, &self.config, Point::new(x, y), listener)
    }
}

impl<P: Clone> Picker<P> {
    /// Lazily yields every hit at `(x, y)`, in registration order.
    ///
    /// The stored listener is not called; use [`Picker::notify`] for that.
    pub fn find(&self, x: f64, y: f64) -> Hits<'_, P> {
        tracing::trace!(x, y, records = self.records.len(), "pick query");
        Hits {
            records: self.records.iter(),
            pt: Point::new(x, y),
            config: &self.config,
        }
    }

    /// The nearest hit at `(x, y)`; ties go to the later-registered record.
    pub fn closest(&self, x: f64, y: f64) -> Option<HitResult<P>> {
        let mut closest = ClosestHit::new();
        self.visit(x, y, &mut closest);
        closest.into_inner()
    }
}

fn visit_records<P, L>(
    records: &[HitRecord<P>],
    config: &PickConfig,
    pt: Point,
    listener: &mut L,
) -> usize
where
    L: HitListener<P> + ?Sized,
{
    let mut hits = 0;
    for record in records {
        if let Some(distance) = record.hit(pt, config) {
            listener.on_hit(record.payload(), distance);
            hits += 1;
        }
    }
    tracing::trace!(x = pt.x, y = pt.y, records = records.len(), hits, "pick visit");
    hits
}

/// Iterator over the hits of one query. Created by [`Picker::find`].
pub struct Hits<'a, P> {
    records: core::slice::Iter<'a, HitRecord<P>>,
    pt: Point,
    config: &'a PickConfig,
}

impl<P> Debug for Hits<'_, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hits")
            .field("point", &self.pt)
            .field("remaining", &self.records.len())
            .finish_non_exhaustive()
    }
}

impl<P: Clone> Iterator for Hits<'_, P> {
    type Item = HitResult<P>;

    fn next(&mut self) -> Option<Self::Item> {
        for record in self.records.by_ref() {
            if let Some(distance) = record.hit(self.pt, self.config) {
                return Some(HitResult {
                    payload: record.payload().clone(),
                    distance,
                });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.records.len()))
    }
}

impl<P: Clone> FusedIterator for Hits<'_, P> {}
