pub mod config;
pub mod decoder;
pub mod format;
pub mod header;
pub mod writer;

pub use config::{DecoderConfig, DimensionPolicy};
pub use decoder::{decode, decode_with};
pub use header::parse_header;
pub use writer::{write_ppm, write_rgb};
