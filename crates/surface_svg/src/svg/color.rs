//! Height-to-color mapping.
//!
//! [`ColorScheme::Legacy`] reproduces the classic surface plot coloring bit for bit: the
//! height is amplified by [`LEGACY_HEIGHT_GAIN`], sign-flipped, rounded and wrapped into a
//! 24-bit RGB value. It is not a meaningful colormap, but documents rendered with it stay
//! byte-compatible with earlier output. [`ColorScheme::HeightRamp`] is the perceptual
//! alternative: valleys blue, peaks red.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Factor applied to `-z` before it is wrapped into 24 bits.
pub const LEGACY_HEIGHT_GAIN: f64 = 100_000.0;

/// Mask selecting the low 24 bits of a color code.
pub const COLOR_MASK: u32 = 0x00FF_FFFF;

/// A 24-bit RGB color, displayed as `#rrggbb`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HexColor(u32);

impl HexColor {
    pub const BLACK: HexColor = HexColor(0);

    /// Creates a color from a raw code, keeping only the low 24 bits.
    pub const fn from_code(code: u32) -> Self {
        Self(code & COLOR_MASK)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn code(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Legacy color code for height `z`: `round(-z * 100000)` wrapped modulo 2^24.
///
/// Negative and overflowing codes wrap like an unsigned 32-bit truncation followed by the
/// 24-bit mask. Codes beyond the `i64` range saturate before wrapping; NaN maps to zero.
#[inline]
pub fn legacy_color(z: f64) -> HexColor {
    let code = (-z * LEGACY_HEIGHT_GAIN).round() as i64;
    HexColor::from_code(code as u32)
}

/// Strategy for deriving a corner's fill color from its height.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ColorScheme {
    /// Bit-exact legacy mapping, see [`legacy_color`].
    #[default]
    Legacy,
    /// Linear blue-to-red ramp; heights at or below `min` are pure blue, at or above
    /// `max` pure red.
    HeightRamp { min: f64, max: f64 },
}

impl ColorScheme {
    /// Maps a height to a color.
    #[inline]
    pub fn color(&self, z: f64) -> HexColor {
        match *self {
            ColorScheme::Legacy => legacy_color(z),
            ColorScheme::HeightRamp { min, max } => {
                let t = ((z - min) / (max - min)).clamp(0.0, 1.0);
                let red = (t * 255.0).round() as u8;
                let blue = ((1.0 - t) * 255.0).round() as u8;
                HexColor::from_rgb(red, 0, blue)
            }
        }
    }

    /// Validates the scheme, returning an error if the ramp bounds are unusable.
    pub fn validate(&self) -> Result<()> {
        if let ColorScheme::HeightRamp { min, max } = *self {
            if !min.is_finite() || !max.is_finite() {
                return Err(Error::InvalidConfig(
                    "height ramp bounds must be finite".into(),
                ));
            }
            if min >= max {
                return Err(Error::InvalidConfig(
                    "height ramp requires min < max".into(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_height_is_black() {
        assert_eq!(legacy_color(0.0), HexColor::BLACK);
        assert_eq!(legacy_color(-0.0).to_string(), "#000000");
    }

    #[test]
    fn overflowing_codes_wrap_into_24_bits() {
        // 20_000_000 - 2^24 = 3_222_784 = 0x312d00
        let color = legacy_color(-200.0);
        assert_eq!(color.code(), 20_000_000 % (1 << 24));
        assert_eq!(color.to_string(), "#312d00");
    }

    #[test]
    fn negative_codes_wrap_like_unsigned_truncation() {
        // round(-0.1 * 100000) = -10000 -> 2^24 - 10000
        let color = legacy_color(0.1);
        assert_eq!(color.code(), (1 << 24) - 10_000);
        assert_eq!(color.to_string(), "#ffd8f0");
    }

    #[test]
    fn small_codes_are_zero_padded() {
        assert_eq!(legacy_color(-0.00255).to_string(), "#0000ff");
        assert_eq!(legacy_color(-0.00001).to_string(), "#000001");
    }

    #[test]
    fn codes_are_rounded_not_truncated() {
        // -z * 100000 = 1.6
        assert_eq!(legacy_color(-0.000016).code(), 2);
    }

    #[test]
    fn rgb_components_round_trip_through_code() {
        let c = HexColor::from_rgb(0x12, 0x34, 0x56);
        assert_eq!(c.code(), 0x123456);
        assert_eq!((c.r(), c.g(), c.b()), (0x12, 0x34, 0x56));
        assert_eq!(HexColor::from_code(0xAB12_3456).code(), 0x12_3456);
    }

    #[test]
    fn height_ramp_spans_blue_to_red() {
        let scheme = ColorScheme::HeightRamp {
            min: -1.0,
            max: 1.0,
        };
        assert_eq!(scheme.color(-5.0).to_string(), "#0000ff");
        assert_eq!(scheme.color(5.0).to_string(), "#ff0000");
        let mid = scheme.color(0.0);
        assert_eq!((mid.r(), mid.g(), mid.b()), (128, 0, 128));
    }

    #[test]
    fn validate_rejects_inverted_or_non_finite_ramps() {
        assert!(ColorScheme::Legacy.validate().is_ok());
        assert!(ColorScheme::HeightRamp { min: 0.0, max: 1.0 }
            .validate()
            .is_ok());
        assert!(ColorScheme::HeightRamp { min: 1.0, max: 1.0 }
            .validate()
            .is_err());
        assert!(ColorScheme::HeightRamp {
            min: f64::NEG_INFINITY,
            max: 1.0
        }
        .validate()
        .is_err());
    }
}
