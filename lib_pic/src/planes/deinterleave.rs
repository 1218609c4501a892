use std::fmt;
use std::iter::FusedIterator;

use log::error;
use serde::{Deserialize, Serialize};

use super::palette::PixelIndex;
use crate::constants::{PIXELS_PER_BYTE, PLANE_COUNT};
use crate::image::format::FormatError;

/// One of the four bit-planes, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Plane {
    Blue,
    Green,
    Red,
    Intensity,
}

impl Plane {
    pub const ORDER: [Plane; PLANE_COUNT] =
        [Plane::Blue, Plane::Green, Plane::Red, Plane::Intensity];

    /// Position of the plane in the file, counted in planes.
    pub const fn position(self) -> usize {
        self as usize
    }

    /// The bit this plane sets in a [`PixelIndex`].
    pub const fn flag(self) -> PixelIndex {
        match self {
            Plane::Blue => PixelIndex::BLUE,
            Plane::Green => PixelIndex::GREEN,
            Plane::Red => PixelIndex::RED,
            Plane::Intensity => PixelIndex::INTENSITY,
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Plane::Blue => "blue",
            Plane::Green => "green",
            Plane::Red => "red",
            Plane::Intensity => "intensity",
        })
    }
}

/// Splits a flat pixel number into the plane byte holding it and the bit
/// shift inside that byte. Bit 7 is the leftmost pixel of the byte.
pub fn pixel_position(pixel: usize) -> (usize, u32) {
    let byte_index = pixel / PIXELS_PER_BYTE;
    let shift = (PIXELS_PER_BYTE - 1 - pixel % PIXELS_PER_BYTE) as u32;
    (byte_index, shift)
}

/// The four plane buffers of a picture, borrowed from the input.
#[derive(Debug, Clone, Copy)]
pub struct Planes<'a> {
    planes: [&'a [u8]; PLANE_COUNT],
}

impl<'a> Planes<'a> {
    /// Borrows four consecutive planes of `plane_size` bytes from `data`,
    /// the first one starting at `start`.
    ///
    /// # Errors
    /// Returns `FormatError::TruncatedInput` naming the first incomplete plane
    /// if `data` is too short to hold all four.
    pub fn split(data: &'a [u8], start: usize, plane_size: usize) -> Result<Self, FormatError> {
        let required = plane_size
            .saturating_mul(PLANE_COUNT)
            .saturating_add(start);

        let mut planes: [&'a [u8]; PLANE_COUNT] = [&[]; PLANE_COUNT];
        for (slot, plane) in planes.iter_mut().zip(Plane::ORDER) {
            let begin = plane_size
                .saturating_mul(plane.position())
                .saturating_add(start);
            let end = begin.saturating_add(plane_size);

            match data.get(begin..end) {
                Some(bytes) => *slot = bytes,
                None => {
                    error!(
                        "Input ends at byte {} inside the {} plane, {} bytes required",
                        data.len(),
                        plane,
                        required
                    );
                    return Err(FormatError::TruncatedInput {
                        offset: data.len(),
                        required,
                        plane: Some(plane),
                    });
                }
            }
        }

        Ok(Self { planes })
    }

    pub fn plane(&self, plane: Plane) -> &'a [u8] {
        self.planes[plane.position()]
    }

    /// Bytes per plane.
    pub fn plane_size(&self) -> usize {
        self.planes[0].len()
    }

    pub fn pixel_count(&self) -> usize {
        self.plane_size() * PIXELS_PER_BYTE
    }

    /// Combines the bits of all four planes for one pixel.
    pub fn index_at(&self, pixel: usize) -> Option<PixelIndex> {
        let (byte_index, shift) = pixel_position(pixel);
        if byte_index >= self.plane_size() {
            return None;
        }

        let mut index = PixelIndex::empty();
        for plane in Plane::ORDER {
            if (self.plane(plane)[byte_index] >> shift) & 0x01 == 1 {
                index |= plane.flag();
            }
        }
        Some(index)
    }

    /// Lazily yields every pixel index in row-major order.
    pub fn indices(&self) -> PixelIndices<'a> {
        PixelIndices {
            planes: *self,
            next: 0,
            end: self.pixel_count(),
        }
    }
}

/// Iterator over the pixel indices of [`Planes`], see [`Planes::indices`].
#[derive(Debug, Clone)]
pub struct PixelIndices<'a> {
    planes: Planes<'a>,
    next: usize,
    end: usize,
}

impl Iterator for PixelIndices<'_> {
    type Item = PixelIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let index = self.planes.index_at(self.next);
        self.next += 1;
        index
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PixelIndices<'_> {}

impl FusedIterator for PixelIndices<'_> {}
