// Color scale - Linear magnitude to color mapping
use super::earthquake::MagnitudeRange;
use serde::{Serialize, Serializer};
use std::fmt;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `yellow`, assigned to the smallest observed magnitude.
    pub const YELLOW: Self = Self::new(255, 255, 0);
    /// CSS `darkgreen`, assigned to the largest observed magnitude.
    pub const DARK_GREEN: Self = Self::new(0, 100, 0);
    /// CSS `red`, used for plate boundaries.
    pub const RED: Self = Self::new(255, 0, 0);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Linear interpolation from `low` at `range.min` to `high` at `range.max`.
///
/// The domain is not clamped: values outside the range extrapolate and each
/// channel saturates at 0 or 255. A degenerate range maps every value to the
/// midpoint color. Built once per load and shared by marker rendering and the
/// legend so both read the same mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    range: MagnitudeRange,
    low: Rgb,
    high: Rgb,
}

impl ColorScale {
    pub fn new(range: MagnitudeRange, low: Rgb, high: Rgb) -> Self {
        Self { range, low, high }
    }

    /// Yellow to dark green over the given magnitude range.
    pub fn for_magnitudes(range: MagnitudeRange) -> Self {
        Self::new(range, Rgb::YELLOW, Rgb::DARK_GREEN)
    }

    pub fn range(&self) -> MagnitudeRange {
        self.range
    }

    pub fn color(&self, magnitude: f64) -> Rgb {
        let t = if self.range.is_degenerate() {
            0.5
        } else {
            (magnitude - self.range.min) / self.range.span()
        };

        Rgb::new(
            lerp_channel(self.low.r, self.high.r, t),
            lerp_channel(self.low.g, self.high.g, t),
            lerp_channel(self.low.b, self.high.b, t),
        )
    }
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let value = a as f64 + (b as f64 - a as f64) * t;
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}
