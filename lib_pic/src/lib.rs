pub mod constants;
pub mod image;
pub mod planes;

use log::*;
use std::io::Write;

pub use crate::image::format::{FormatError, Header, PicImage};
pub use crate::image::{decode, decode_with, DecoderConfig, DimensionPolicy};
pub use crate::planes::{PixelIndex, Rgb};

/// Installs the logger. Output goes to stderr so a raw pixel stream on
/// stdout stays intact.
pub fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter(Some("lib_pic"), level)
        .filter(Some("pic_convert"), level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
