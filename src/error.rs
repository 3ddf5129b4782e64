use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding, encoding and image editing.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("unrecognized format magic bytes (expected \"BM\")")]
    UnsupportedFormat,

    #[error("unsupported BMP info header size {0} (only 40-byte BITMAPINFOHEADER is supported)")]
    UnsupportedVersion(u32),

    #[error("unsupported BMP compression method {0} (only uncompressed is supported)")]
    UnsupportedCompression(u32),

    #[error("unsupported BMP bit depth {0} (only 24 bits per pixel is supported)")]
    UnsupportedBitDepth(u16),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BitmapError {
    fn from(r: StopReason) -> Self {
        BitmapError::Cancelled(r)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for BitmapError {
    fn from(e: std::io::Error) -> Self {
        BitmapError::Io(e)
    }
}
