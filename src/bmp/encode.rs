//! BMP encoder: writes an [`Image`] back out as padded 24-bit BGR rows.

use alloc::vec::Vec;
use enough::Stop;

use crate::error::BitmapError;
use crate::image::{FileHeader, Image, InfoHeader};

/// Encode an image, preserving every header field except the file size.
pub(crate) fn encode_bmp(image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    let file_size = image.encoded_len()?;
    let w = image.width();
    let pad_bytes = image.row_padding();

    stop.check()?;

    let mut out = Vec::with_capacity(file_size);
    write_bmp_header(&mut out, image.header(), image.info(), file_size as u32);

    for (row_idx, row) in image.pixels().rows().enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for px in &row[..w] {
            out.push(px.b);
            out.push(px.g);
            out.push(px.r);
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    debug_assert_eq!(out.len(), file_size);
    log::debug!(
        "encoded {}x{} BMP ({file_size} bytes, {pad_bytes} pad bytes per row)",
        w,
        image.height()
    );
    Ok(out)
}

fn write_bmp_header(out: &mut Vec<u8>, header: &FileHeader, info: &InfoHeader, file_size: u32) {
    // File header (14 bytes)
    out.extend_from_slice(&header.magic);
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&header.reserved1.to_le_bytes());
    out.extend_from_slice(&header.reserved2.to_le_bytes());
    out.extend_from_slice(&header.pixel_offset.to_le_bytes());

    // DIB header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&info.size.to_le_bytes());
    out.extend_from_slice(&info.width.to_le_bytes());
    out.extend_from_slice(&info.height.to_le_bytes()); // sign carries row order
    out.extend_from_slice(&info.planes.to_le_bytes());
    out.extend_from_slice(&info.bit_count.to_le_bytes());
    out.extend_from_slice(&info.compression.to_le_bytes());
    out.extend_from_slice(&info.image_size.to_le_bytes());
    out.extend_from_slice(&info.x_pixels_per_meter.to_le_bytes());
    out.extend_from_slice(&info.y_pixels_per_meter.to_le_bytes());
    out.extend_from_slice(&info.colors_used.to_le_bytes());
    out.extend_from_slice(&info.colors_important.to_le_bytes());
}
