// SPDX-License-Identifier: MPL-2.0
//! Resampling quality hints.

use std::fmt;

/// Resampling filter requested when scaling an image to the canvas.
///
/// Ordered from highest to lowest quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResampleFilter {
    #[default]
    Lanczos3,
    CatmullRom,
    Gaussian,
    Triangle,
    Nearest,
}

impl ResampleFilter {
    /// Lower quality filter used when the requested one is not available.
    pub const FALLBACK: Self = Self::Triangle;

    /// Parses a filter name, case-insensitively.
    ///
    /// `antialias` is accepted as an alias of Lanczos3. Returns `None` for
    /// names the image library has no filter for.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "lanczos" | "lanczos3" | "antialias" => Some(Self::Lanczos3),
            "catmull-rom" | "catmullrom" | "cubic" | "bicubic" => Some(Self::CatmullRom),
            "gaussian" => Some(Self::Gaussian),
            "triangle" | "bilinear" | "linear" => Some(Self::Triangle),
            "nearest" => Some(Self::Nearest),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Lanczos3 => "lanczos3",
            Self::CatmullRom => "catmull-rom",
            Self::Gaussian => "gaussian",
            Self::Triangle => "triangle",
            Self::Nearest => "nearest",
        }
    }
}

impl fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
