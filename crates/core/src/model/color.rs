use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ColorError {
    #[error("hex color must start with '#': {0}")]
    MissingHash(String),
    #[error("hex color must have 3 or 6 digits: {0}")]
    InvalidLength(String),
    #[error("invalid hex digit in color: {0}")]
    InvalidDigit(String),
}

/// An sRGB color written as `#rgb` or `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// # Errors
    ///
    /// Returns `ColorError` if `raw` is not a `#rgb` / `#rrggbb` literal.
    pub fn parse(raw: &str) -> Result<Self, ColorError> {
        let trimmed = raw.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(raw.to_string()))?;
        if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(raw.to_string()));
        }

        let channel = |hex: &str| {
            u8::from_str_radix(hex, 16).map_err(|_| ColorError::InvalidDigit(raw.to_string()))
        };
        match digits.len() {
            3 => {
                let expand = |i: usize| channel(&digits[i..=i].repeat(2));
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(ColorError::InvalidLength(raw.to_string())),
        }
    }

    /// Converts to HSL with each component rounded to an integer.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        let (h, s) = if delta == 0.0 {
            (0.0, 0.0)
        } else {
            let s = delta / (1.0 - (2.0 * l - 1.0).abs());
            let h = if max == r {
                60.0 * ((g - b) / delta).rem_euclid(6.0)
            } else if max == g {
                60.0 * ((b - r) / delta + 2.0)
            } else {
                60.0 * ((r - g) / delta + 4.0)
            };
            (h, s)
        };

        // Rounded values stay inside 0..=360 / 0..=100, so the casts cannot truncate.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Hsl {
            h: (h.round() as u16) % 360,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Shifts lightness by `delta` percent, clamped to 0..=100.
    #[must_use]
    pub fn with_lightness_shift(self, delta: i16) -> Self {
        let shifted = (i16::from(self.l) + delta).clamp(0, 100);
        Self {
            l: u8::try_from(shifted).unwrap_or(100),
            ..self
        }
    }

    #[must_use]
    pub fn css(self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_forms() {
        assert_eq!(HexColor::parse("#FF8000"), Ok(HexColor::rgb(255, 128, 0)));
        assert_eq!(HexColor::parse("#0f8"), Ok(HexColor::rgb(0, 255, 136)));
        assert_eq!(HexColor::rgb(1, 2, 255).to_string(), "#0102ff");
    }

    #[test]
    fn rejects_malformed_literals() {
        assert!(matches!(HexColor::parse("ff0000"), Err(ColorError::MissingHash(_))));
        assert!(matches!(HexColor::parse("#ff00"), Err(ColorError::InvalidLength(_))));
        assert!(matches!(HexColor::parse("#gg0000"), Err(ColorError::InvalidDigit(_))));
        assert!(matches!(HexColor::parse("#ä1"), Err(ColorError::InvalidDigit(_))));
    }

    #[test]
    fn converts_known_colors_to_hsl() {
        assert_eq!(HexColor::rgb(255, 0, 0).to_hsl(), Hsl { h: 0, s: 100, l: 50 });
        assert_eq!(HexColor::rgb(0, 0, 255).to_hsl(), Hsl { h: 240, s: 100, l: 50 });
        assert_eq!(HexColor::rgb(255, 255, 255).to_hsl(), Hsl { h: 0, s: 0, l: 100 });
        assert_eq!(HexColor::rgb(0, 128, 0).to_hsl(), Hsl { h: 120, s: 100, l: 25 });
        assert_eq!(HexColor::rgb(255, 0, 128).to_hsl(), Hsl { h: 330, s: 100, l: 50 });
    }

    #[test]
    fn lightness_shift_clamps() {
        let hsl = Hsl { h: 10, s: 50, l: 95 };
        assert_eq!(hsl.with_lightness_shift(10).l, 100);
        assert_eq!(hsl.with_lightness_shift(-120).l, 0);
        assert_eq!(hsl.with_lightness_shift(-15).css(), "hsl(10, 50%, 80%)");
    }
}
