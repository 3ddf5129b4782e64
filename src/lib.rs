//! # bmp24
//!
//! Decoder, encoder and editor for uncompressed 24-bit BMP files.
//!
//! ## Byte-Exact Round Trips
//!
//! Decoding keeps both header blocks and the pixel rows in storage order.
//! Encoding an untouched [`Image`] reproduces the source file byte for byte
//! (the file size field is recomputed, which for a well-formed file is the
//! value it already had). Row order is never normalized: a bottom-up file
//! stays bottom-up, a top-down file stays top-down.
//!
//! ## Editing
//!
//! - [`adjust_brightness`] and [`adjust_contrast`]: per-channel point
//!   operations, clamped to `0..=255`.
//! - [`downsample`] / [`blur`]: 3x3 box blur that averages only in-bounds
//!   samples.
//! - [`spherize`]: bulge projection onto a hemisphere centered in the frame.
//! - [`Operation`] / [`apply_all`]: the same edits as values, validated up
//!   front.
//!
//! ## Non-Goals
//!
//! - Compressed (RLE, bitfields) or palette BMPs, and any bit depth but 24
//! - Info headers other than the 40-byte BITMAPINFOHEADER
//! - Streaming or partial decode
//!
//! ## Usage
//!
//! ```no_run
//! use bmp24::{Operation, Unstoppable};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//! let mut image = bmp24::decode(data, Unstoppable)?;
//! println!("{}x{} {:?}", image.width(), image.height(), image.row_order());
//!
//! bmp24::apply_all(
//!     &mut image,
//!     &[Operation::Brightness(30), Operation::Blur(2), Operation::Spherize],
//!     Unstoppable,
//! )?;
//! let encoded = bmp24::encode(&image, Unstoppable)?;
//! # Ok::<(), bmp24::BitmapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod adjust;
mod bmp;
mod codec;
mod dump;
mod error;
mod filter;
mod image;
mod limits;
mod ops;

#[cfg(feature = "std")]
mod io;

// Re-exports
pub use adjust::{adjust_brightness, adjust_contrast};
pub use codec::{DecodeRequest, decode, encode};
pub use dump::{Dump, dump};
pub use enough::{Stop, Unstoppable};
pub use error::BitmapError;
pub use filter::{blur, downsample, spherize};
pub use imgref::{ImgRef, ImgVec};
pub use image::{
    BITS_PER_PIXEL, COMPRESSION_NONE, FileHeader, HEADER_LEN, INFO_HEADER_LEN, Image, InfoHeader,
    RowOrder,
};
#[cfg(feature = "std")]
pub use io::{read_file, write_file};
pub use limits::Limits;
pub use ops::{Operation, apply_all};
pub use rgb::RGB8;
