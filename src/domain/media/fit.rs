// SPDX-License-Identifier: MPL-2.0
//! Fit-to-canvas scaling.

use super::types::Dimensions;

/// Scale that makes `image` fit entirely inside `canvas`, preserving its
/// aspect ratio. Returns `None` when either size has an empty edge.
#[must_use]
pub fn fit_scale(image: Dimensions, canvas: Dimensions) -> Option<f64> {
    if image.is_empty() || canvas.is_empty() {
        return None;
    }

    let scale_x = f64::from(canvas.width) / f64::from(image.width);
    let scale_y = f64::from(canvas.height) / f64::from(image.height);
    Some(scale_x.min(scale_y))
}

/// Target bitmap size for `image` on `canvas` at `zoom`.
///
/// Each edge is `round(edge * scale)` with `scale = fit_scale * zoom`. The
/// scale is capped so the longer edge never exceeds `max_edge`, which keeps
/// the aspect ratio at extreme zoom; edges are then clamped to at least 1.
/// Returns `None` when either size has an empty edge or the scale is not
/// finite.
#[must_use]
pub fn fit_dimensions(
    image: Dimensions,
    canvas: Dimensions,
    zoom: f64,
    max_edge: u32,
) -> Option<Dimensions> {
    let scale = fit_scale(image, canvas)? * zoom;
    if !scale.is_finite() || scale <= 0.0 {
        return None;
    }

    let max_edge = max_edge.max(1);
    let longest = image.width.max(image.height);
    let scale = scale.min(f64::from(max_edge) / f64::from(longest));

    Some(Dimensions::new(
        scaled_edge(image.width, scale, max_edge),
        scaled_edge(image.height, scale, max_edge),
    ))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled_edge(edge: u32, scale: f64, max_edge: u32) -> u32 {
    let scaled = (f64::from(edge) * scale).round();
    if scaled >= f64::from(max_edge) {
        max_edge
    } else {
        (scaled as u32).max(1)
    }
}
