//! RGBA color type for particle rendering.
//!
//! Colors are 8-bit per channel. Serde serializes to an `"#rrggbbaa"` hex
//! string for human-readable configuration files.

use crate::error::FlowError;
use crate::prng::Xorshift64;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Creates a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque white.
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    /// Opaque black.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    /// A color with uniformly random RGB channels and the given fixed
    /// alpha. Used for per-particle colors assigned once at construction.
    pub fn random_rgb(rng: &mut Xorshift64, alpha: u8) -> Self {
        Self {
            r: rng.next_u8(),
            g: rng.next_u8(),
            b: rng.next_u8(),
            a: alpha,
        }
    }

    /// Parses `"#rrggbbaa"` or `"rrggbbaa"` (case insensitive). A 6-digit
    /// form is accepted with alpha defaulting to 255.
    pub fn from_hex(hex: &str) -> Result<Rgba, FlowError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 && hex.len() != 8 {
            return Err(FlowError::InvalidParam {
                name: "color",
                reason: format!("expected 6 or 8 hex digits, got {}", hex.len()),
            });
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| FlowError::InvalidParam {
                name: "color",
                reason: format!("invalid hex digit: {e}"),
            })
        };
        let r = channel(0..2)?;
        let g = channel(2..4)?;
        let b = channel(4..6)?;
        let a = if hex.len() == 8 { channel(6..8)? } else { 255 };
        Ok(Rgba { r, g, b, a })
    }

    /// Formats the color as `"#rrggbbaa"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Hex parsing --

    #[test]
    fn from_hex_parses_eight_digits() {
        let c = Rgba::from_hex("#ff00aa64").unwrap();
        assert_eq!(c, Rgba::new(255, 0, 170, 100));
    }

    #[test]
    fn from_hex_six_digits_defaults_alpha_opaque() {
        let c = Rgba::from_hex("102030").unwrap();
        assert_eq!(c, Rgba::new(16, 32, 48, 255));
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(Rgba::from_hex("#fff").is_err());
        assert!(Rgba::from_hex("").is_err());
    }

    #[test]
    fn from_hex_rejects_non_hex_digits() {
        assert!(Rgba::from_hex("#zzzzzzzz").is_err());
    }

    #[test]
    fn hex_round_trip() {
        let c = Rgba::new(12, 250, 7, 100);
        assert_eq!(Rgba::from_hex(&c.to_hex()).unwrap(), c);
    }

    // -- Serde --

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgba::new(255, 0, 170, 100)).unwrap();
        assert_eq!(json, "\"#ff00aa64\"");
    }

    #[test]
    fn deserializes_from_hex_string() {
        let c: Rgba = serde_json::from_str("\"#01020304\"").unwrap();
        assert_eq!(c, Rgba::new(1, 2, 3, 4));
    }

    #[test]
    fn deserialize_invalid_hex_is_error() {
        assert!(serde_json::from_str::<Rgba>("\"#nothex!\"").is_err());
    }

    // -- random_rgb --

    #[test]
    fn random_rgb_uses_fixed_alpha() {
        let mut rng = Xorshift64::new(42);
        for _ in 0..100 {
            let c = Rgba::random_rgb(&mut rng, 100);
            assert_eq!(c.a, 100);
        }
    }

    #[test]
    fn random_rgb_is_deterministic_per_seed() {
        let mut a = Xorshift64::new(7);
        let mut b = Xorshift64::new(7);
        for _ in 0..20 {
            assert_eq!(Rgba::random_rgb(&mut a, 100), Rgba::random_rgb(&mut b, 100));
        }
    }

    #[test]
    fn random_rgb_varies_channels() {
        let mut rng = Xorshift64::new(1234);
        let first = Rgba::random_rgb(&mut rng, 100);
        let differs = (0..20).any(|_| Rgba::random_rgb(&mut rng, 100) != first);
        assert!(differs, "20 random colors were all identical");
    }
}
