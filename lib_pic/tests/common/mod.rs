#![allow(dead_code)]

use lib_pic::Rgb;

/// Header of a 1x1 byte-column picture (8x1 pixels).
pub const HEADER_1X1: [u8; 8] = [0x50, 0x49, 0x43, 0x00, 0x01, 0x00, 0x01, 0x00];

pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
pub const RED: Rgb = Rgb::new(0xAA, 0x00, 0x00);
pub const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xAA);
pub const GRAY: Rgb = Rgb::new(0x55, 0x55, 0x55);

/// Builds a file from a header and the four planes in file order
/// (blue, green, red, intensity).
pub fn picture(columns: u16, rows: u16, planes: [&[u8]; 4]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(b"PIC\0");
    data.extend_from_slice(&columns.to_le_bytes());
    data.extend_from_slice(&rows.to_le_bytes());
    for plane in planes {
        data.extend_from_slice(plane);
    }
    data
}

/// A picture whose planes are each filled with one repeated byte.
pub fn filled_picture(columns: u16, rows: u16, fill: [u8; 4]) -> Vec<u8> {
    let size = usize::from(columns) * usize::from(rows);
    let planes = fill.map(|byte| vec![byte; size]);
    picture(
        columns,
        rows,
        [&planes[0], &planes[1], &planes[2], &planes[3]],
    )
}

/// Deterministic pseudo-random plane bytes (xorshift).
pub fn noise(len: usize, mut seed: u32) -> Vec<u8> {
    (0..len)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            (seed >> 24) as u8
        })
        .collect()
}
