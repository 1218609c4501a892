mod filemanager;
mod info;

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use color_eyre::eyre::{self, WrapErr};
use lib_pic::{decode_with, DecoderConfig};
use log::{info, LevelFilter};

/// The format to write the decoded picture in
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Packed 24-bit RGB triplets without a header
    #[default]
    Raw,
    /// Binary netpbm (P6)
    Ppm,
    /// Portable Network Graphics
    Png,
}

#[derive(Parser, Debug)]
#[command(version, about = "Convert EGA planar PIC images to RGB")]
pub struct Options {
    /// The PIC file to convert
    file: PathBuf,
    /// Where to store the output. Raw output goes to stdout if omitted
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Raw)]
    format: Format,
    /// Only accept the 320x200 reference size (40 byte-columns, 200 rows)
    #[arg(long)]
    strict: bool,
    /// Print header and palette instead of converting
    #[arg(long)]
    info: bool,
    /// More log output, repeat for debug messages
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let opt = Options::parse();

    lib_pic::init_logging(match opt.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    });

    let config = if opt.strict {
        DecoderConfig::strict()
    } else {
        DecoderConfig::default()
    };

    let buffer = filemanager::load_picture(&opt.file)?;
    let image = decode_with(&buffer, &config)
        .wrap_err_with(|| format!("Failed to decode '{}'", opt.file.display()))?;
    info!(
        "Decoded '{}' ({}x{})",
        opt.file.display(),
        image.width(),
        image.height()
    );

    if opt.info {
        return info::print_info(&image, buffer.len());
    }

    filemanager::save_image(&image, opt.format, opt.out.as_deref(), &opt.file)
}
