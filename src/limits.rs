use crate::error::BitmapError;

/// Caps on what [`DecodeRequest`](crate::DecodeRequest) will accept.
///
/// `None` means unlimited. Checked once the headers are parsed, before any
/// pixel row is read.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Cap on `width * abs(height)`.
    pub max_pixels: Option<u64>,
    /// Cap on [`Limits::footprint`] of the decoded image.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Bytes needed to decode a `width` x `height` image and edit it.
    ///
    /// That is two RGB8 grids: the decoded one and the replacement grid
    /// that [`blur`](crate::blur) and [`spherize`](crate::spherize) fill
    /// before swapping it in.
    pub fn footprint(width: u32, height: u32) -> u64 {
        let grid = (u64::from(width) * u64::from(height))
            .saturating_mul(core::mem::size_of::<rgb::RGB8>() as u64);
        grid.saturating_mul(2)
    }

    /// Reject `width` x `height` if it breaks any cap, naming the first one
    /// broken.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), BitmapError> {
        let caps = [
            ("width", u64::from(width), self.max_width),
            ("height", u64::from(height), self.max_height),
            ("pixel count", u64::from(width) * u64::from(height), self.max_pixels),
            ("decode footprint", Self::footprint(width, height), self.max_memory_bytes),
        ];
        for (what, value, cap) in caps {
            if let Some(max) = cap.filter(|&max| value > max) {
                return Err(BitmapError::LimitExceeded(alloc::format!(
                    "{what} {value} exceeds limit {max}"
                )));
            }
        }
        Ok(())
    }
}
