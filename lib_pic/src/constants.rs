pub const FORMAT_NAME: &str = "EGA Planar Picture";
pub const FILE_EXT: &str = "pic";

pub const HEADER_SIZE: usize = 8;
pub const PLANE_COUNT: usize = 4;
pub const PIXELS_PER_BYTE: usize = 8;

/// Size of the only sample the format was reverse engineered from (320x200).
pub const REFERENCE_COLUMNS: u16 = 40;
pub const REFERENCE_ROWS: u16 = 200;
