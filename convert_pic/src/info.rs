use color_eyre::eyre;
use lib_pic::constants::FORMAT_NAME;
use lib_pic::planes::ega_palette;
use lib_pic::{Header, PicImage, Rgb};
use ron::ser::PrettyConfig;
use serde::Serialize;

#[derive(Serialize)]
struct PictureInfo {
    format: &'static str,
    header: Header,
    width: u32,
    height: u32,
    plane_size: usize,
    file_size: usize,
    trailing_bytes: usize,
    palette: Vec<Rgb>,
}

pub fn print_info(image: &PicImage, file_size: usize) -> eyre::Result<()> {
    let header = image.header;
    let report = PictureInfo {
        format: FORMAT_NAME,
        header,
        width: header.width(),
        height: header.height(),
        plane_size: header.plane_size(),
        file_size,
        trailing_bytes: file_size.saturating_sub(header.encoded_size()),
        palette: ega_palette().to_vec(),
    };

    println!("{}", ron::ser::to_string_pretty(&report, PrettyConfig::default())?);
    Ok(())
}
