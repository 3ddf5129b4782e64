use enough::Stop;

use crate::error::BitmapError;
use crate::image::Image;
use crate::limits::Limits;

/// Builder for a decode with optional resource limits.
///
/// ```no_run
/// use bmp24::{DecodeRequest, Limits, Unstoppable};
///
/// let data: &[u8] = &[]; // your BMP bytes
/// let limits = Limits { max_pixels: Some(16_000_000), ..Default::default() };
/// let image = DecodeRequest::new(data).with_limits(&limits).decode(Unstoppable)?;
/// # Ok::<(), bmp24::BitmapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode the whole file. No partial image is returned on failure.
    pub fn decode(self, stop: impl Stop) -> Result<Image, BitmapError> {
        crate::bmp::decode(self.data, self.limits, &stop)
    }
}

/// Decode a 24-bit BMP without limits.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<Image, BitmapError> {
    DecodeRequest::new(data).decode(stop)
}

/// Encode an image to BMP bytes.
///
/// Header fields are written back verbatim except the file size, which is
/// recomputed from the grid dimensions.
pub fn encode(image: &Image, stop: impl Stop) -> Result<alloc::vec::Vec<u8>, BitmapError> {
    crate::bmp::encode(image, &stop)
}
