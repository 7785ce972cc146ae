// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pick --heading-base-level=0

//! Understory Pick: distance-based picking for design surfaces.
//!
//! This crate answers "what is near this point?" for the graphical
//! primitives of an editor surface. It keeps a flat, resettable registry of
//! shapes, each tagged with a caller-owned payload, a tolerance range, and an
//! optional stroke width, and reports every shape whose distance to a query
//! point is within its tolerance.
//!
//! Supported geometry:
//! - **Lines**: point-to-segment distance, minus half the stroke width.
//! - **Rectangles**: filled and axis-aligned; the inside is at distance `0`.
//! - **Circles**: filled disks; the inside is at distance `0`.
//! - **Cubic Béziers**: approximated by adaptive subdivision, see
//!   [`CurveSampler`].
//!
//! It does **not** render, convert coordinates, or track selection.
//! Callers are expected to:
//! - Transform their primitives to device space before registering them.
//! - Rebuild the registry with [`Picker::reset`] and the `add_*` methods on
//!   every draw pass.
//! - Decide which of several hits wins (for example with
//!   [`Picker::closest`], or their own policy over [`Picker::find`]).
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_pick::Picker;
//!
//! // Payloads are usually small handles into the caller's own tables.
//! let mut picker = Picker::<u32>::new();
//!
//! picker.reset();
//! picker.add_rect(1, 10.0, 10.0, 10.0, 100.0, 100.0);
//! picker.add_line(2, 4.0, 0.0, 200.0, 300.0, 200.0, 2.0);
//! picker.add_curve_to(3, 4.0, 0.0, 300.0, 100.0, 250.0, 200.0, 350.0, 300.0, 300.0, 4.0);
//!
//! let hits: Vec<_> = picker.find(50.0, 50.0).collect();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].payload, 1);
//! assert_eq!(hits[0].distance, 0.0);
//!
//! // Near the line: within range, reported with its distance.
//! let best = picker.closest(150.0, 204.0).unwrap();
//! assert_eq!(best.payload, 2);
//! assert_eq!(best.distance, 3.0);
//! ```
//!
//! ## Push-style queries
//!
//! [`Picker::visit`] hands each hit to a [`HitListener`], which any
//! `FnMut(&P, f64)` closure implements:
//!
//! ```rust
//! use understory_pick::Picker;
//!
//! let mut picker = Picker::<&str>::new();
//! picker.add_circle("handle", 3.0, 0.0, 0.0, 4.0);
//! picker.add_circle("anchor", 3.0, 6.0, 0.0, 2.0);
//!
//! let mut names = Vec::new();
//! picker.visit(5.0, 0.0, &mut |name: &&'static str, _distance: f64| names.push(*name));
//! assert_eq!(names, ["handle", "anchor"]);
//! ```
//!
//! ## Tolerances
//!
//! A record is hit when its distance is at most its range, plus half the
//! stroke width for lines and curves. Negative or NaN ranges and widths are
//! clamped to `0` by the `add_*` methods; use [`Tolerance::try_new`] with
//! [`Picker::add_shape`] to reject them instead.
//!
//! ## Features
//!
//! - `std` *(default)*: forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` float math.
//!
//! ## Diagnostics
//!
//! Queries and resets emit `tracing` events at `trace` level; clamped
//! tolerances are reported at `debug` level. Nothing is logged unless the
//! application installs a subscriber.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod config;
mod curve;
pub mod distance;
mod error;
mod picker;
mod shape;

pub use config::PickConfig;
pub use curve::CurveSampler;
pub use error::ToleranceError;
pub use picker::{ClosestHit, HitListener, HitResult, Hits, Picker};
pub use shape::{HitRecord, Shape, Tolerance};
