use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{HEADER_SIZE, PIXELS_PER_BYTE, PLANE_COUNT};
use crate::planes::{Plane, Rgb};

pub const MAGIC_HEADER: [u8; 4] = *b"PIC\0";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("bad magic {found:02x?}, expected `PIC\\0`")]
    BadMagic { found: [u8; 4] },
    #[error("unsupported dimensions: {columns} byte-columns x {rows} rows")]
    UnsupportedDimensions { columns: u16, rows: u16 },
    #[error("truncated input at byte {offset}: {required} bytes required")]
    TruncatedInput {
        offset: usize,
        required: usize,
        /// The first plane that is not fully present, `None` inside the header
        plane: Option<Plane>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub magic: [u8; 4],
    /// Width in byte-columns, eight pixels each
    pub columns: u16,
    pub rows: u16,
}

impl Header {
    pub const MAGIC_SIZE: usize = 4;
    pub const DIMENSION_SIZE: usize = std::mem::size_of::<u16>();

    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            magic: MAGIC_HEADER,
            columns,
            rows,
        }
    }

    pub fn width(&self) -> u32 {
        u32::from(self.columns) * PIXELS_PER_BYTE as u32
    }

    pub fn height(&self) -> u32 {
        u32::from(self.rows)
    }

    /// Bytes in each of the four planes.
    pub fn plane_size(&self) -> usize {
        usize::from(self.columns) * usize::from(self.rows)
    }

    pub fn pixel_count(&self) -> usize {
        self.plane_size() * PIXELS_PER_BYTE
    }

    /// Bytes needed for the header plus all four planes.
    pub fn encoded_size(&self) -> usize {
        self.plane_size()
            .saturating_mul(PLANE_COUNT)
            .saturating_add(HEADER_SIZE)
    }
}

/// A fully decoded picture, one [`Rgb`] per pixel in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PicImage {
    pub header: Header,
    pub pixels: Vec<Rgb>,
}

impl PicImage {
    pub fn width(&self) -> u32 {
        self.header.width()
    }

    pub fn height(&self) -> u32 {
        self.header.height()
    }

    /// Packed `R, G, B` bytes without any header.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|pixel| pixel.to_array()).collect()
    }
}
