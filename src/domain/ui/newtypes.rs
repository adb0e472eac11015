// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always positive and finite.

// =============================================================================
// ZoomLevel
// =============================================================================

/// Zoom multiplier applied on top of the fit-to-canvas scale.
///
/// `1.0` means the image exactly fits the canvas. The multiplier has no upper
/// or lower bound; it only refuses values that are not strictly positive and
/// finite, so repeated zooming can never produce `0`, `inf` or `NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLevel(f64);

impl ZoomLevel {
    /// The fit-to-canvas level every navigation resets to.
    pub const FIT: Self = Self(1.0);

    /// Creates a zoom level, falling back to [`ZoomLevel::FIT`] for values
    /// that are not strictly positive and finite.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self::checked(value).unwrap_or(Self::FIT)
    }

    fn checked(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns whether this is the fit-to-canvas level.
    #[must_use]
    pub fn is_fit(self) -> bool {
        self == Self::FIT
    }

    /// Multiplies the level by `factor`.
    ///
    /// Keeps the current level if the product is not representable.
    #[must_use]
    pub fn zoom_in(self, factor: f64) -> Self {
        Self::checked(self.0 * factor).unwrap_or(self)
    }

    /// Divides the level by `factor`.
    ///
    /// Keeps the current level if the quotient is not representable.
    #[must_use]
    pub fn zoom_out(self, factor: f64) -> Self {
        Self::checked(self.0 / factor).unwrap_or(self)
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self::FIT
    }
}
