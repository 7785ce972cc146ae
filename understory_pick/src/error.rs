// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation errors for caller-supplied tolerances.

/// Reasons a range/width pair can be rejected by [`Tolerance::try_new`].
///
/// The picking engine itself never fails; these errors only surface when a
/// caller opts into strict validation instead of the clamping performed by
/// [`Tolerance::new`].
///
/// [`Tolerance::try_new`]: crate::Tolerance::try_new
/// [`Tolerance::new`]: crate::Tolerance::new
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ToleranceError {
    /// The hit range was below zero.
    #[error("hit range must be non-negative, got {0}")]
    NegativeRange(f64),
    /// The stroke width was below zero.
    #[error("stroke width must be non-negative, got {0}")]
    NegativeWidth(f64),
    /// Range or width was NaN or infinite.
    #[error("tolerance values must be finite")]
    NonFinite,
}
