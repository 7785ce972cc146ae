// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tuning knobs for the approximate evaluators.
///
/// Only curve picking is approximate, so every field here controls how a
/// cubic Bézier is broken into straight pieces. The defaults keep the
/// distance error well under one device unit for curves of editor scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickConfig {
    /// Number of equal parameter windows a curve is split into before any
    /// refinement. Each window can be tested and pruned on its own.
    pub curve_segments: usize,
    /// Maximum allowed deviation between a refined piece and its chord,
    /// in device units.
    pub curve_accuracy: f64,
    /// Upper bound on the number of halvings applied inside one window.
    pub curve_max_depth: u32,
}

impl PickConfig {
    /// Smallest accuracy accepted by [`PickConfig::sanitized`].
    pub const MIN_ACCURACY: f64 = 1e-3;

    /// Returns a copy with out-of-range values pulled back to usable ones.
    ///
    /// A zero window count becomes one, and a non-positive or NaN accuracy
    /// becomes [`PickConfig::MIN_ACCURACY`].
    #[must_use]
    pub fn sanitized(self) -> Self {
        let curve_accuracy = if self.curve_accuracy >= Self::MIN_ACCURACY {
            self.curve_accuracy
        } else {
            Self::MIN_ACCURACY
        };
        Self {
            curve_segments: self.curve_segments.max(1),
            curve_accuracy,
            curve_max_depth: self.curve_max_depth,
        }
    }
}

impl Default for PickConfig {
    fn default() -> Self {
        Self {
            curve_segments: 8,
            curve_accuracy: 0.25,
            curve_max_depth: 16,
        }
    }
}
