use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// The four plane bits of a single pixel, in EGA `IRGB` order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PixelIndex: u8 {
        const BLUE = 0b0001;
        const GREEN = 0b0010;
        const RED = 0b0100;
        const INTENSITY = 0b1000;
    }
}

/// Contribution of a set red, green or blue bit to its own channel.
pub const COLOR_LEVEL: u8 = 0xAA;
/// Contribution of the intensity bit to every channel.
pub const INTENSITY_LEVEL: u8 = 0x55;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_array()
    }
}

fn channel(index: PixelIndex, color: PixelIndex) -> u8 {
    let base = if index.contains(color) { COLOR_LEVEL } else { 0 };
    let boost = if index.contains(PixelIndex::INTENSITY) {
        INTENSITY_LEVEL
    } else {
        0
    };
    // COLOR_LEVEL + INTENSITY_LEVEL == 0xFF
    base + boost
}

/// Maps a pixel index to its color with the fixed two-level EGA rule.
///
/// There is no brown special case: index 6 stays `(0xAA, 0xAA, 0x00)`.
pub fn ega_color(index: PixelIndex) -> Rgb {
    Rgb {
        r: channel(index, PixelIndex::RED),
        g: channel(index, PixelIndex::GREEN),
        b: channel(index, PixelIndex::BLUE),
    }
}

/// All sixteen colors, indexed by `PixelIndex::bits()`.
pub fn ega_palette() -> [Rgb; 16] {
    std::array::from_fn(|i| ega_color(PixelIndex::from_bits_truncate(i as u8)))
}
