//! Editing operations as values, for front ends that collect a sequence of
//! edits before running them.

use enough::Stop;

use crate::adjust::{adjust_brightness, adjust_contrast, contrast_factor};
use crate::error::BitmapError;
use crate::filter::{blur_passes, spherize};
use crate::image::Image;

/// One editing step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operation {
    /// Add to every channel. Nominal range `-255..=255`, saturating outside it.
    Brightness(i32),
    /// Contrast delta. Nominal range `-255..=255`; 259 is rejected.
    Contrast(f64),
    /// Number of 3x3 box-blur passes, at least 1.
    Blur(u32),
    Spherize,
}

impl Operation {
    /// Check parameters without touching any image.
    pub fn validate(&self) -> Result<(), BitmapError> {
        match *self {
            Operation::Contrast(delta) => contrast_factor(delta).map(|_| ()),
            Operation::Blur(0) => Err(BitmapError::InvalidParameter(
                "blur iteration count must be at least 1".into(),
            )),
            Operation::Brightness(_) | Operation::Blur(_) | Operation::Spherize => Ok(()),
        }
    }

    pub fn apply(&self, image: &mut Image, stop: impl Stop) -> Result<(), BitmapError> {
        self.apply_with(image, &stop)
    }

    fn apply_with(&self, image: &mut Image, stop: &dyn Stop) -> Result<(), BitmapError> {
        log::debug!("applying {self:?} to {}x{} image", image.width(), image.height());
        match *self {
            Operation::Brightness(delta) => adjust_brightness(image, delta),
            Operation::Contrast(delta) => adjust_contrast(image, delta)?,
            Operation::Blur(iterations) => blur_passes(image, iterations, stop)?,
            Operation::Spherize => spherize(image),
        }
        Ok(())
    }
}

/// Apply `ops` in order.
///
/// Every operation is validated first, so a bad parameter anywhere in the
/// list leaves the image unmodified. Cancellation between operations leaves
/// the edits made so far in place.
pub fn apply_all(image: &mut Image, ops: &[Operation], stop: impl Stop) -> Result<(), BitmapError> {
    for op in ops {
        op.validate()?;
    }
    for op in ops {
        stop.check()?;
        op.apply_with(image, &stop)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::RowOrder;
    use alloc::vec;
    use enough::Unstoppable;
    use imgref::ImgVec;
    use rgb::RGB8;

    fn gray(width: usize, height: usize, v: u8) -> Image {
        let grid = ImgVec::new(vec![RGB8::new(v, v, v); width * height], width, height);
        Image::new(grid, RowOrder::BottomUp).unwrap()
    }

    #[test]
    fn invalid_parameters_rejected() {
        assert!(Operation::Contrast(259.0).validate().is_err());
        assert!(Operation::Blur(0).validate().is_err());
        assert!(Operation::Brightness(-1000).validate().is_ok());
        assert!(Operation::Contrast(-255.0).validate().is_ok());
        assert!(Operation::Spherize.validate().is_ok());
    }

    #[test]
    fn bad_operation_late_in_list_changes_nothing() {
        let mut image = gray(3, 3, 40);
        let ops = [Operation::Brightness(50), Operation::Blur(0)];
        assert!(matches!(
            apply_all(&mut image, &ops, Unstoppable),
            Err(BitmapError::InvalidParameter(_))
        ));
        assert_eq!(image.pixel(1, 1), Some(RGB8::new(40, 40, 40)));
    }

    #[test]
    fn operations_apply_in_order() {
        let mut image = gray(4, 4, 0);
        let ops = [
            Operation::Brightness(100),
            Operation::Blur(2),
            Operation::Contrast(0.0),
        ];
        apply_all(&mut image, &ops, Unstoppable).unwrap();
        assert!(image.buf().iter().all(|&px| px == RGB8::new(100, 100, 100)));
    }
}
