use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use color_eyre::eyre::{self, eyre, WrapErr};
use image::{ImageFormat, RgbImage};
use lib_pic::constants::{FILE_EXT, FORMAT_NAME};
use lib_pic::image::{write_ppm, write_rgb};
use lib_pic::PicImage;
use log::{info, warn};

use crate::Format;

pub fn load_picture(path: &Path) -> eyre::Result<Vec<u8>> {
    let is_pic = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case(FILE_EXT));
    if !is_pic {
        warn!(
            "'{}' does not have the .{} extension, trying as {} anyway",
            path.display(),
            FILE_EXT,
            FORMAT_NAME
        );
    }

    std::fs::read(path).wrap_err_with(|| format!("Failed to read '{}'", path.display()))
}

pub fn save_image(
    image: &PicImage,
    format: Format,
    out: Option<&Path>,
    file: &Path,
) -> eyre::Result<()> {
    match format {
        Format::Raw => match out {
            Some(out_path) => {
                let mut writer = BufWriter::new(File::create(out_path)?);
                write_rgb(image.pixels.iter().copied(), &mut writer)?;
                writer.flush()?;
                info!("Saved raw RGB as '{}'", out_path.display());
            }
            None => {
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                write_rgb(image.pixels.iter().copied(), &mut lock)?;
                lock.flush()?;
            }
        },
        Format::Ppm => {
            let out_path = out
                .map(Path::to_path_buf)
                .unwrap_or_else(|| file.with_extension("ppm"));
            let mut writer = BufWriter::new(File::create(&out_path)?);
            write_ppm(
                image.width(),
                image.height(),
                image.pixels.iter().copied(),
                &mut writer,
            )?;
            writer.flush()?;
            info!("Saved image as '{}'", out_path.display());
        }
        Format::Png => {
            let out_path = out
                .map(Path::to_path_buf)
                .unwrap_or_else(|| file.with_extension("png"));
            let buffer = RgbImage::from_raw(image.width(), image.height(), image.to_rgb_bytes())
                .ok_or_else(|| {
                    eyre!(
                        "Pixel buffer does not fit {}x{}",
                        image.width(),
                        image.height()
                    )
                })?;
            buffer.save_with_format(&out_path, ImageFormat::Png)?;
            info!("Saved image as '{}'", out_path.display());
        }
    }

    Ok(())
}
