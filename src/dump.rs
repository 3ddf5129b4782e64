//! Hex rendering of the stored pixel rows, for debugging.

use alloc::string::String;
use core::fmt;

use crate::image::Image;

/// Displays every stored row as `B G R` hex triples plus its padding bytes.
///
/// ```text
///     B  G  R    B  G  R
/// 1:  00 00 FF   FF 00 00   00 00
/// ```
pub struct Dump<'a>(pub &'a Image);

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let image = self.0;
        f.write_str("    ")?;
        for _ in 0..image.width() {
            f.write_str("B  G  R    ")?;
        }
        f.write_str("\n")?;

        for (idx, row) in image.buf().chunks_exact(image.width()).enumerate() {
            write!(f, "{}:  ", idx + 1)?;
            for px in row {
                write!(f, "{:02X} {:02X} {:02X}   ", px.b, px.g, px.r)?;
            }
            for _ in 0..image.row_padding() {
                f.write_str("00 ")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Render [`Dump`] to a string.
pub fn dump(image: &Image) -> String {
    alloc::format!("{}", Dump(image))
}
