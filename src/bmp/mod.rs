//! 24-bit uncompressed BMP decoder and encoder (internal).
//!
//! Use top-level [`crate::decode`], [`crate::encode`], or
//! [`crate::DecodeRequest`].

mod decode;
mod encode;

use crate::error::BitmapError;
use crate::image::Image;
use crate::limits::Limits;
use alloc::vec::Vec;
use enough::Stop;

/// Decode BMP data into an [`Image`] with rows in storage order.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, BitmapError> {
    decode::decode_bmp(data, limits, stop)
}

/// Encode to BMP.
pub(crate) fn encode(image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    encode::encode_bmp(image, stop)
}
