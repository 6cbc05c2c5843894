use std::fmt;

use serde::{Deserialize, Serialize};

/// Packed 0xRRGGBB color, serialized as a CSS hex string (`#rrggbb`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u32);

pub const MAX_RGB: u32 = 0xFF_FF_FF;

impl Color {
    pub const BLUE: Color = Color(0x00_00_FF);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Masks anything above 24 bits.
    pub const fn from_u32(rgb: u32) -> Self {
        Color(rgb & MAX_RGB)
    }

    pub const fn to_u32(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 { (self.0 >> 16) as u8 }
    pub const fn g(self) -> u8 { (self.0 >> 8) as u8 }
    pub const fn b(self) -> u8 { self.0 as u8 }

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional)
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid color '{}': not a hex string", s));
        }

        match hex.len() {
            6 => u32::from_str_radix(hex, 16)
                .map(Color)
                .map_err(|e| format!("invalid color '{}': {}", s, e)),
            3 => {
                let mut rgb = 0u32;
                for c in hex.chars() {
                    let nibble = c.to_digit(16).unwrap_or(0);
                    rgb = (rgb << 8) | (nibble << 4) | nibble;
                }
                Ok(Color(rgb))
            }
            n => Err(format!("invalid color '{}': expected 3 or 6 hex digits, got {}", s, n)),
        }
    }

    /// CSS form, always six digits
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}
