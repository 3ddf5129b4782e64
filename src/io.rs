//! File path helpers (`std` feature).

use std::path::Path;

use enough::Stop;

use crate::error::BitmapError;
use crate::image::Image;

/// Read and decode a BMP file.
pub fn read_file(path: impl AsRef<Path>, stop: impl Stop) -> Result<Image, BitmapError> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    log::debug!("read {} bytes from {}", data.len(), path.display());
    crate::bmp::decode(&data, None, &stop)
}

/// Encode an image and write it to `path`, replacing any existing file.
pub fn write_file(
    path: impl AsRef<Path>,
    image: &Image,
    stop: impl Stop,
) -> Result<(), BitmapError> {
    let path = path.as_ref();
    let data = crate::bmp::encode(image, &stop)?;
    std::fs::write(path, &data)?;
    log::debug!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}
