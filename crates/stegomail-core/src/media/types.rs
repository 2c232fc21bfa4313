use std::fs::File;
use std::io::{BufReader, BufWriter, Seek, Write};
use std::path::Path;

pub use image::RgbaImage;
use image::ImageFormat;
use log::{debug, error};

use crate::error::StegoError;
use crate::result::Result;

use super::Persist;

/// image formats a carrier can be read from
fn input_format(f: &Path) -> Result<ImageFormat> {
    let ext = f
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .ok_or(StegoError::UnsupportedMedia)?;

    match ext.as_str() {
        "png" => Ok(ImageFormat::Png),
        "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
        _ => Err(StegoError::UnsupportedMedia),
    }
}

/// Loads a PNG or JPEG carrier as RGBA raster
pub fn load_carrier(f: &Path) -> Result<RgbaImage> {
    let format = input_format(f)?;
    let file = File::open(f).map_err(|e| {
        error!("Error opening file {f:?}: {e}");
        StegoError::ReadError { source: e }
    })?;
    let img = image::load(BufReader::new(file), format).map_err(|e| {
        error!("Error decoding image {f:?}: {e}");
        StegoError::InvalidImageMedia
    })?
    .into_rgba8();
    debug!(
        "loaded {format:?} carrier {f:?} with {}x{} pixels",
        img.width(),
        img.height()
    );

    Ok(img)
}

/// Saves an image with a secret, only lossless PNG is supported as target
pub fn save_carrier(img: &RgbaImage, f: &Path) -> Result<()> {
    img.save_as(f)
}

impl Persist for RgbaImage {
    fn save_as(&self, f: &Path) -> Result<()> {
        let is_png = f
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if !is_png {
            error!("Refusing to save {f:?}, only PNG keeps the secret intact");
            return Err(StegoError::UnsupportedMedia);
        }

        let file = File::create(f).map_err(|e| {
            error!("Error creating file {f:?}: {e}");
            StegoError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(file);
        write_png(self, &mut writer)?;
        writer
            .flush()
            .map_err(|source| StegoError::WriteError { source })
    }
}

/// encodes `img` as PNG into any writer
pub fn write_png<W: Write + Seek>(img: &RgbaImage, writer: &mut W) -> Result<()> {
    img.write_to(writer, ImageFormat::Png).map_err(|e| {
        error!("Error saving image: {e}");
        StegoError::ImageEncodingError
    })
}
