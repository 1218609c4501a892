pub mod deinterleave;
pub mod palette;

use log::{debug, info};

pub use deinterleave::{pixel_position, PixelIndices, Plane, Planes};
pub use palette::{ega_color, ega_palette, PixelIndex, Rgb};

/// Deinterleaves the planes and maps every pixel through the EGA palette.
pub fn planes_to_rgb(planes: &Planes<'_>) -> Vec<Rgb> {
    info!("Starting plane deinterleave");
    debug!(
        "Plane size: {} bytes, {} pixels",
        planes.plane_size(),
        planes.pixel_count()
    );

    let pixels: Vec<Rgb> = planes.indices().map(ega_color).collect();

    debug!("Mapped {} pixels to RGB", pixels.len());
    pixels
}
