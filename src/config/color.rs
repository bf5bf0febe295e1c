//=========================================================================
// Color
//=========================================================================
//
// RGBA color parsed from CSS-style hex strings (`#rgb`, `#rrggbb`,
// `#rrggbbaa`). Used for the canvas background.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

//=== Internal Dependencies ===============================================

use crate::error::ColorParseError;

//=== Color ===============================================================

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Parses a hex color string.
    ///
    /// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }

        // All digits are ASCII hex past this point
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);

        match digits.len() {
            3 => {
                let nibble = |i: usize| {
                    let v = u8::from_str_radix(&digits[i..i + 1], 16).unwrap_or(0);
                    v << 4 | v
                };
                Ok(Self::rgb(nibble(0), nibble(1), nibble(2)))
            }
            6 => Ok(Self::rgb(byte(0), byte(2), byte(4))),
            8 => Ok(Self { r: byte(0), g: byte(2), b: byte(4), a: byte(6) }),
            _ => Err(ColorParseError::InvalidLength(s.to_string())),
        }
    }

    /// Channels as normalized floats, for renderer clear colors.
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 0xff {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        let color = Color::from_hex("#028af8").unwrap();
        assert_eq!(color, Color::rgb(0x02, 0x8a, 0xf8));
    }

    #[test]
    fn parses_short_and_alpha_forms() {
        assert_eq!(Color::from_hex("#fa0").unwrap(), Color::rgb(0xff, 0xaa, 0x00));
        assert_eq!(
            Color::from_hex("#10203040").unwrap(),
            Color { r: 0x10, g: 0x20, b: 0x30, a: 0x40 }
        );
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!(
            Color::from_hex("028af8"),
            Err(ColorParseError::MissingHash("028af8".into()))
        );
        assert_eq!(
            Color::from_hex("#028af"),
            Err(ColorParseError::InvalidLength("#028af".into()))
        );
        assert_eq!(
            Color::from_hex("#02zaf8"),
            Err(ColorParseError::InvalidDigit("#02zaf8".into()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        assert_eq!(Color::rgb(0x02, 0x8a, 0xf8).to_string(), "#028af8");
        assert_eq!(Color { r: 1, g: 2, b: 3, a: 4 }.to_string(), "#01020304");
    }

    #[test]
    fn normalized_channels() {
        let [r, _, _, a] = Color::rgb(255, 0, 0).to_f32_array();
        assert_eq!(r, 1.0);
        assert_eq!(a, 1.0);
    }
}
