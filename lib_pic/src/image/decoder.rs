use log::{debug, info, warn};

use super::config::DecoderConfig;
use super::format::{FormatError, PicImage};
use super::header::parse_header;
use crate::constants::HEADER_SIZE;
use crate::planes::{planes_to_rgb, Planes};

/// Decodes a complete `PIC` file with the default configuration.
pub fn decode(data: &[u8]) -> Result<PicImage, FormatError> {
    decode_with(data, &DecoderConfig::default())
}

/// Decodes a complete `PIC` file.
///
/// Either every pixel is decoded or an error is returned, there is no
/// partial result.
pub fn decode_with(data: &[u8], config: &DecoderConfig) -> Result<PicImage, FormatError> {
    info!("Starting decoding");
    debug!("Input data length: {}", data.len());

    // Step 1: Header
    let header = parse_header(data, &config.dimensions)?;
    debug!(
        "Header validated: {}x{} pixels, {} bytes per plane",
        header.width(),
        header.height(),
        header.plane_size()
    );

    // Step 2: Planes
    let planes = Planes::split(data, HEADER_SIZE, header.plane_size())?;
    let required = header.encoded_size();
    if data.len() > required {
        warn!(
            "Ignoring {} trailing bytes after the intensity plane",
            data.len() - required
        );
    }

    // Step 3: Deinterleave and map to RGB
    let pixels = planes_to_rgb(&planes);

    info!(
        "Decoding completed successfully: {}x{} pixels",
        header.width(),
        header.height()
    );
    Ok(PicImage { header, pixels })
}
