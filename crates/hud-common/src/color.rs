use serde::{Deserialize, Serialize};

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Self = Self::from_rgba(255, 255, 255, 255);

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self { r, g, b, a: 255 })
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self { r, g, b, a })
            }
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Components as floats in [0, 1], the layout uniform buffers want.
    pub fn to_f32_array(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_six_digits() {
        let c = Rgba::from_hex("#2a2b2c").unwrap();
        assert_eq!(c, Rgba::from_rgba(0x2a, 0x2b, 0x2c, 255));
    }

    #[test]
    fn from_hex_eight_digits() {
        let c = Rgba::from_hex("ff000080").unwrap();
        assert_eq!(c, Rgba::from_rgba(255, 0, 0, 0x80));
    }

    #[test]
    fn from_hex_rejects_bad_input() {
        assert!(Rgba::from_hex("#abc").is_none());
        assert!(Rgba::from_hex("zzzzzz").is_none());
    }

    #[test]
    fn hex_round_trip() {
        let c = Rgba::from_rgba(16, 32, 64, 255);
        assert_eq!(Rgba::from_hex(&c.to_hex()).unwrap(), c);

        let translucent = Rgba::from_rgba(16, 32, 64, 128);
        assert_eq!(Rgba::from_hex(&translucent.to_hex()).unwrap(), translucent);
    }

    #[test]
    fn to_f32_array_normalizes() {
        let c = Rgba::from_rgba(255, 0, 255, 0);
        assert_eq!(c.to_f32_array(), [1.0, 0.0, 1.0, 0.0]);
    }
}
