//! 24-bit BITMAPINFOHEADER decoder.
//!
//! Reads the two header blocks field by field, validates that the file is
//! the one variant this crate edits, then unpacks padded BGR rows into an
//! RGB grid. Rows stay in storage order.

use alloc::vec::Vec;

use enough::Stop;
use imgref::ImgVec;
use rgb::RGB8;

use crate::error::BitmapError;
use crate::image::{
    FileHeader, HEADER_LEN, Image, InfoHeader, check_headers, check_info_size, check_magic,
    row_stride,
};
use crate::limits::Limits;

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BitmapError> {
        let end = self.pos.checked_add(N).ok_or(BitmapError::UnexpectedEof)?;
        let bytes = self
            .data
            .get(self.pos..end)
            .ok_or(BitmapError::UnexpectedEof)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        self.pos = end;
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, BitmapError> {
        self.read_fixed_bytes().map(u16::from_le_bytes)
    }

    fn get_u32_le(&mut self) -> Result<u32, BitmapError> {
        self.read_fixed_bytes().map(u32::from_le_bytes)
    }

    fn get_i32_le(&mut self) -> Result<i32, BitmapError> {
        self.read_fixed_bytes().map(i32::from_le_bytes)
    }

    /// Borrow the next `n` bytes and advance past them.
    fn take(&mut self, n: usize) -> Result<&'a [u8], BitmapError> {
        let end = self.pos.checked_add(n).ok_or(BitmapError::UnexpectedEof)?;
        let bytes = self
            .data
            .get(self.pos..end)
            .ok_or(BitmapError::UnexpectedEof)?;
        self.pos = end;
        Ok(bytes)
    }

    /// Advance up to `n` bytes, stopping at end of input.
    fn skip_lenient(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.data.len());
    }
}

// ── Header parsing ──────────────────────────────────────────────────

/// Parse and validate both header blocks.
///
/// Checks run in a fixed order so that each kind of unsupported file gets
/// its own error: magic, info block size, compression, bit depth, then
/// dimensions.
pub(crate) fn parse_headers(data: &[u8]) -> Result<(FileHeader, InfoHeader), BitmapError> {
    let mut cur = Cursor::new(data);

    let magic: [u8; 2] = cur.read_fixed_bytes()?;
    check_magic(magic)?;
    let header = FileHeader {
        magic,
        size: cur.get_u32_le()?,
        reserved1: cur.get_u16_le()?,
        reserved2: cur.get_u16_le()?,
        pixel_offset: cur.get_u32_le()?,
    };

    let info_size = cur.get_u32_le()?;
    check_info_size(info_size)?;
    let info = InfoHeader {
        size: info_size,
        width: cur.get_i32_le()?,
        height: cur.get_i32_le()?,
        planes: cur.get_u16_le()?,
        bit_count: cur.get_u16_le()?,
        compression: cur.get_u32_le()?,
        image_size: cur.get_u32_le()?,
        x_pixels_per_meter: cur.get_u32_le()?,
        y_pixels_per_meter: cur.get_u32_le()?,
        colors_used: cur.get_u32_le()?,
        colors_important: cur.get_u32_le()?,
    };
    debug_assert_eq!(cur.pos, HEADER_LEN);

    check_headers(&header, &info)?;
    Ok((header, info))
}

// ── Full decode ─────────────────────────────────────────────────────

pub(crate) fn decode_bmp(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, BitmapError> {
    let (header, info) = parse_headers(data)?;

    let width = info.width as u32;
    let height = info.height.unsigned_abs();
    let w = width as usize;
    let h = height as usize;
    let pixel_count = w
        .checked_mul(h)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;

    if let Some(limits) = limits {
        limits.check(width, height)?;
    }

    // Every row but the last must be complete including padding.
    let stride = row_stride(w);
    let payload = stride
        .checked_mul(h - 1)
        .and_then(|n| n.checked_add(w * 3))
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    if data.len().saturating_sub(HEADER_LEN) < payload {
        return Err(BitmapError::UnexpectedEof);
    }

    stop.check()?;

    let mut cur = Cursor::new(data);
    cur.pos = HEADER_LEN;
    let padding = stride - w * 3;
    let mut pixels = Vec::with_capacity(pixel_count);
    for row in 0..h {
        if row % 16 == 0 {
            stop.check()?;
        }
        let bytes = cur.take(w * 3)?;
        pixels.extend(
            bytes
                .chunks_exact(3)
                .map(|bgr| RGB8::new(bgr[2], bgr[1], bgr[0])),
        );
        cur.skip_lenient(padding);
    }

    log::debug!(
        "decoded {w}x{h} BMP ({} rows, {} bytes)",
        if info.height < 0 { "top-down" } else { "bottom-up" },
        data.len()
    );

    Image::from_parts(header, info, ImgVec::new(pixels, w, h))
}
