/*
 * Color Module
 *
 * A plain 8-bit RGB color. The panel and the option table exchange colors as
 * hex strings, so this type parses and prints the `#RRGGBB` form.
 */

use std::fmt;
use std::str::FromStr;

use crate::error::ConstellationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_array([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }

    /// Linear blend towards `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl FromStr for Color {
    type Err = ConstellationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConstellationError::InvalidColor(s.to_string());
        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            6 => u32::from_str_radix(digits, 16)
                .map(Color::from_hex)
                .map_err(|_| invalid()),
            3 => {
                // #abc expands to #aabbcc
                let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
                u32::from_str_radix(&expanded, 16)
                    .map(Color::from_hex)
                    .map_err(|_| invalid())
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!("#BBE0EB".parse::<Color>().unwrap(), Color::new(0xbb, 0xe0, 0xeb));
        assert_eq!("#f0a".parse::<Color>().unwrap(), Color::new(0xff, 0x00, 0xaa));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["BBE0EB", "#BBE0E", "#GGGGGG", "", "#"] {
            assert!(bad.parse::<Color>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn displays_lowercase_hex() {
        assert_eq!(Color::from_hex(0x011936).to_string(), "#011936");
        assert_eq!(Color::new(0xff, 0xa7, 0x00).to_string(), "#ffa700");
    }

    #[test]
    fn lerp_hits_both_ends_and_midpoint() {
        let black = Color::new(0, 0, 0);
        let white = Color::new(255, 255, 255);
        assert_eq!(black.lerp(white, 0.0), black);
        assert_eq!(black.lerp(white, 1.0), white);
        assert_eq!(black.lerp(white, 0.5), Color::new(128, 128, 128));
        assert_eq!(black.lerp(white, 7.0), white);
    }
}
