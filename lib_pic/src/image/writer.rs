use std::io::{self, Write};

use crate::planes::Rgb;

/// Writes the packed `R, G, B` bytes of `pixels` in order, nothing else.
pub fn write_rgb<I, W>(pixels: I, out: &mut W) -> io::Result<()>
where
    I: IntoIterator<Item = Rgb>,
    W: Write + ?Sized,
{
    let bytes: Vec<u8> = pixels.into_iter().flat_map(Rgb::to_array).collect();
    out.write_all(&bytes)
}

/// Writes a binary (`P6`) netpbm image.
pub fn write_ppm<I, W>(width: u32, height: u32, pixels: I, out: &mut W) -> io::Result<()>
where
    I: IntoIterator<Item = Rgb>,
    W: Write + ?Sized,
{
    write!(out, "P6\n{} {}\n255\n", width, height)?;
    write_rgb(pixels, out)
}
