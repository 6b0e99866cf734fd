//! Color types and utilities

/// Packed 32-bit ARGB color (`0xAARRGGBB`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const GREEN: Color = Color(0xFF00_FF00);
    pub const BLUE: Color = Color(0xFF00_00FF);
    pub const TRANSPARENT: Color = Color(0x0000_0000);

    /// Create from a packed `0xAARRGGBB` value
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Create from u8 components (0-255)
    pub const fn from_argb8(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Create an opaque color from u8 components
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb8(0xFF, r, g, b)
    }

    /// Create from hex value (0xRRGGBB is opaque, 0xAARRGGBB keeps its alpha)
    pub fn from_hex(hex: u32) -> Self {
        if hex > 0xFF_FFFF {
            Self(hex)
        } else {
            Self(0xFF00_0000 | hex)
        }
    }

    /// Packed `0xAARRGGBB` value
    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Set alpha and return new color
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | (alpha as u32) << 24)
    }

    /// Convert to u8 array [a, r, g, b]
    pub const fn to_argb8(self) -> [u8; 4] {
        [self.alpha(), self.red(), self.green(), self.blue()]
    }

    /// Channels as [a, r, g, b] in the 0.0 to 1.0 range
    pub fn to_unit(self) -> [f32; 4] {
        self.to_argb8().map(|c| c as f32 / 255.0)
    }

    /// Pack [a, r, g, b] unit channels, rounding half-up and clamping to 0-255
    pub fn from_unit(channels: [f32; 4]) -> Self {
        let [a, r, g, b] = channels.map(unit_to_byte);
        Self::from_argb8(a, r, g, b)
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

fn unit_to_byte(value: f32) -> u8 {
    // NaN maps to 0 through the saturating cast
    (value * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}
