use lib_pic::planes::palette::{COLOR_LEVEL, INTENSITY_LEVEL};
use lib_pic::planes::{ega_color, ega_palette};
use lib_pic::{PixelIndex, Rgb};

#[test]
fn test_levels_sum_to_full_channel() {
    assert_eq!(u16::from(COLOR_LEVEL) + u16::from(INTENSITY_LEVEL), 0xFF);
}

#[test]
fn test_palette_channels_are_ega_levels() {
    for (i, color) in ega_palette().iter().enumerate() {
        for channel in color.to_array() {
            assert!(
                [0x00, 0x55, 0xAA, 0xFF].contains(&channel),
                "color {} has channel {:#04x}",
                i,
                channel
            );
        }
    }
}

#[test]
fn test_palette_matches_mapper() {
    let palette = ega_palette();
    for bits in 0..16u8 {
        let index = PixelIndex::from_bits_truncate(bits);
        assert_eq!(palette[usize::from(bits)], ega_color(index));
    }
}

#[test]
fn test_known_colors() {
    assert_eq!(ega_color(PixelIndex::empty()), Rgb::BLACK);
    assert_eq!(ega_color(PixelIndex::BLUE), Rgb::new(0x00, 0x00, 0xAA));
    assert_eq!(ega_color(PixelIndex::GREEN), Rgb::new(0x00, 0xAA, 0x00));
    assert_eq!(ega_color(PixelIndex::RED), Rgb::new(0xAA, 0x00, 0x00));
    assert_eq!(ega_color(PixelIndex::INTENSITY), Rgb::new(0x55, 0x55, 0x55));
    assert_eq!(
        ega_color(PixelIndex::RED | PixelIndex::GREEN),
        Rgb::new(0xAA, 0xAA, 0x00)
    );
    assert_eq!(
        ega_color(PixelIndex::RED | PixelIndex::INTENSITY),
        Rgb::new(0xFF, 0x55, 0x55)
    );
    assert_eq!(ega_color(PixelIndex::all()), Rgb::new(0xFF, 0xFF, 0xFF));
}

#[test]
fn test_palette_colors_are_distinct() {
    let palette = ega_palette();
    for (i, a) in palette.iter().enumerate() {
        for b in &palette[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
