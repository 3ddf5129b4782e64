use imgref::{ImgRef, ImgVec};
use rgb::RGB8;

use crate::error::BitmapError;

/// Size of the file header plus the 40-byte info block.
pub const HEADER_LEN: usize = FILE_HEADER_LEN + INFO_HEADER_LEN as usize;
pub(crate) const FILE_HEADER_LEN: usize = 14;
/// BITMAPINFOHEADER size, the only supported info block.
pub const INFO_HEADER_LEN: u32 = 40;
/// Bits per pixel, the only supported depth.
pub const BITS_PER_PIXEL: u16 = 24;
/// Compression method 0 (BI_RGB).
pub const COMPRESSION_NONE: u32 = 0;

/// 72 DPI expressed in pixels per meter.
const DEFAULT_DENSITY: u32 = 2835;

/// The 14-byte BMP file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    /// Format tag, `b"BM"` (the byte-swapped `b"MB"` is also accepted on decode).
    pub magic: [u8; 2],
    /// Total file size in bytes. Recomputed on encode.
    pub size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Offset from the start of the file to the pixel rows.
    pub pixel_offset: u32,
}

/// The 40-byte BITMAPINFOHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub size: u32,
    pub width: i32,
    /// Positive for bottom-up storage, negative for top-down.
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    /// Advisory pixel payload size, carried through unchanged.
    pub image_size: u32,
    pub x_pixels_per_meter: u32,
    pub y_pixels_per_meter: u32,
    pub colors_used: u32,
    pub colors_important: u32,
}

/// Whether the first stored row is the visual bottom or top of the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowOrder {
    /// Positive height. Row 0 is the bottom scanline.
    BottomUp,
    /// Negative height. Row 0 is the top scanline.
    TopDown,
}

/// A decoded 24-bit bitmap: both header blocks plus the pixel grid.
///
/// Pixel rows are kept in storage order. `pixels().buf()[0..width]` is the
/// first row in the file regardless of [`RowOrder`]; orientation only
/// matters to whoever displays the image.
#[derive(Clone, Debug)]
pub struct Image {
    header: FileHeader,
    info: InfoHeader,
    pixels: ImgVec<RGB8>,
}

impl Image {
    /// Build an image with canonical headers around an existing pixel grid.
    pub fn new(pixels: ImgVec<RGB8>, order: RowOrder) -> Result<Self, BitmapError> {
        let too_large = || BitmapError::DimensionsTooLarge {
            width: pixels.width() as u32,
            height: pixels.height() as u32,
        };
        let width = i32::try_from(pixels.width()).map_err(|_| too_large())?;
        let rows = i32::try_from(pixels.height()).map_err(|_| too_large())?;
        let height = match order {
            RowOrder::BottomUp => rows,
            RowOrder::TopDown => -rows,
        };
        let image_size = u32::try_from(row_stride(pixels.width()) * pixels.height())
            .map_err(|_| too_large())?;
        let header = FileHeader {
            magic: *b"BM",
            size: 0,
            reserved1: 0,
            reserved2: 0,
            pixel_offset: HEADER_LEN as u32,
        };
        let info = InfoHeader {
            size: INFO_HEADER_LEN,
            width,
            height,
            planes: 1,
            bit_count: BITS_PER_PIXEL,
            compression: COMPRESSION_NONE,
            image_size,
            x_pixels_per_meter: DEFAULT_DENSITY,
            y_pixels_per_meter: DEFAULT_DENSITY,
            colors_used: 0,
            colors_important: 0,
        };
        let mut image = Self::from_parts(header, info, pixels)?;
        image.header.size = image.encoded_len()? as u32;
        Ok(image)
    }

    /// Assemble an image from already-parsed headers and a pixel grid.
    ///
    /// The headers must describe a file [`decode`](crate::decode) accepts,
    /// with the same errors in the same order. The grid must then measure
    /// `abs(height)` rows by `width` columns, or this fails with
    /// [`BitmapError::InvalidParameter`].
    pub fn from_parts(
        header: FileHeader,
        info: InfoHeader,
        pixels: ImgVec<RGB8>,
    ) -> Result<Self, BitmapError> {
        check_headers(&header, &info)?;
        let width = info.width as usize;
        let height = info.height.unsigned_abs() as usize;
        if pixels.width() != width || pixels.height() != height || pixels.stride() != width {
            return Err(BitmapError::InvalidParameter(alloc::format!(
                "pixel grid is {}x{}, header says {width}x{height}",
                pixels.width(),
                pixels.height()
            )));
        }
        Ok(Self {
            header,
            info,
            pixels,
        })
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    pub fn info(&self) -> &InfoHeader {
        &self.info
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    /// Number of rows, `abs(info.height)`.
    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    pub fn row_order(&self) -> RowOrder {
        if self.info.height < 0 {
            RowOrder::TopDown
        } else {
            RowOrder::BottomUp
        }
    }

    /// Zero bytes appended to each stored row.
    pub fn row_padding(&self) -> usize {
        row_stride(self.width()) - self.width() * 3
    }

    /// Bytes per stored row including padding.
    pub fn row_stride(&self) -> usize {
        row_stride(self.width())
    }

    /// Size of the encoded file: header plus every padded row.
    pub fn encoded_len(&self) -> Result<usize, BitmapError> {
        self.row_stride()
            .checked_mul(self.height())
            .and_then(|n| n.checked_add(HEADER_LEN))
            .filter(|&n| n <= u32::MAX as usize)
            .ok_or(BitmapError::DimensionsTooLarge {
                width: self.width() as u32,
                height: self.height() as u32,
            })
    }

    pub fn pixels(&self) -> ImgRef<'_, RGB8> {
        self.pixels.as_ref()
    }

    /// The flat pixel buffer, rows in storage order.
    pub fn buf(&self) -> &[RGB8] {
        self.pixels.buf()
    }

    /// Mutable access to the flat pixel buffer, rows in storage order.
    pub fn pixels_mut(&mut self) -> &mut [RGB8] {
        self.pixels.buf_mut()
    }

    /// Pixel at `(row, col)` in storage order.
    pub fn pixel(&self, row: usize, col: usize) -> Option<RGB8> {
        if row < self.height() && col < self.width() {
            Some(self.buf()[row * self.width() + col])
        } else {
            None
        }
    }

    pub fn into_pixels(self) -> ImgVec<RGB8> {
        self.pixels
    }

    /// Swap in a freshly computed grid of the same dimensions.
    pub(crate) fn replace_pixels(&mut self, pixels: ImgVec<RGB8>) {
        debug_assert_eq!(pixels.width(), self.width());
        debug_assert_eq!(pixels.height(), self.height());
        self.pixels = pixels;
    }
}

pub(crate) fn check_magic(magic: [u8; 2]) -> Result<(), BitmapError> {
    match &magic {
        b"BM" | b"MB" => Ok(()),
        _ => Err(BitmapError::UnsupportedFormat),
    }
}

pub(crate) fn check_info_size(size: u32) -> Result<(), BitmapError> {
    if size != INFO_HEADER_LEN {
        return Err(BitmapError::UnsupportedVersion(size));
    }
    Ok(())
}

/// Every header invariant, in reporting order: magic, info block size,
/// compression, bit depth, then dimensions.
pub(crate) fn check_headers(header: &FileHeader, info: &InfoHeader) -> Result<(), BitmapError> {
    check_magic(header.magic)?;
    check_info_size(info.size)?;
    if info.compression != COMPRESSION_NONE {
        return Err(BitmapError::UnsupportedCompression(info.compression));
    }
    if info.bit_count != BITS_PER_PIXEL {
        return Err(BitmapError::UnsupportedBitDepth(info.bit_count));
    }
    if info.width <= 0 {
        return Err(BitmapError::InvalidParameter(alloc::format!(
            "BMP width must be positive, got {}",
            info.width
        )));
    }
    if info.height == 0 {
        return Err(BitmapError::InvalidParameter("BMP height is zero".into()));
    }
    Ok(())
}

/// Row length in bytes rounded up to a multiple of 4.
pub(crate) fn row_stride(width: usize) -> usize {
    (width * 3 + 3) & !3
}
