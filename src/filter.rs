//! Neighborhood filters: box blur and spherize.
//!
//! Each filter reads the current grid and writes a fresh one of the same
//! dimensions, then swaps it into the image. No pixel is ever read after
//! being overwritten.

use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;
use imgref::ImgVec;
use rgb::RGB8;

use crate::error::BitmapError;
use crate::image::Image;

const WHITE: RGB8 = RGB8 {
    r: 255,
    g: 255,
    b: 255,
};

/// One 3x3 box-blur pass.
///
/// Every output pixel is the truncated mean of itself and its in-bounds
/// 8-neighbors. Edge pixels average 6 samples, corners 4.
pub fn downsample(image: &mut Image) {
    let (w, h) = (image.width(), image.height());
    let src = image.buf();
    let mut out = Vec::with_capacity(w * h);

    for row in 0..h {
        let rows = row.saturating_sub(1)..=(row + 1).min(h - 1);
        for col in 0..w {
            let cols = col.saturating_sub(1)..=(col + 1).min(w - 1);
            let (mut r, mut g, mut b, mut n) = (0u32, 0u32, 0u32, 0u32);
            for y in rows.clone() {
                for p in &src[y * w + *cols.start()..=y * w + *cols.end()] {
                    r += u32::from(p.r);
                    g += u32::from(p.g);
                    b += u32::from(p.b);
                    n += 1;
                }
            }
            out.push(RGB8::new((r / n) as u8, (g / n) as u8, (b / n) as u8));
        }
    }

    image.replace_pixels(ImgVec::new(out, w, h));
}

/// Run `iterations` independent [`downsample`] passes.
///
/// Zero iterations is an [`BitmapError::InvalidParameter`]. The stop token
/// is polled before every pass.
pub fn blur(image: &mut Image, iterations: u32, stop: impl Stop) -> Result<(), BitmapError> {
    blur_passes(image, iterations, &stop)
}

pub(crate) fn blur_passes(
    image: &mut Image,
    iterations: u32,
    stop: &dyn Stop,
) -> Result<(), BitmapError> {
    if iterations == 0 {
        return Err(BitmapError::InvalidParameter(
            "blur iteration count must be at least 1".into(),
        ));
    }
    for pass in 0..iterations {
        stop.check()?;
        log::trace!("blur pass {}/{iterations}", pass + 1);
        downsample(image);
    }
    Ok(())
}

/// Project the image onto a hemisphere centered in the frame.
///
/// With `R = min(width, height) / 2`, every destination offset `(x, y)`
/// inside the radius-`R` disk samples the source at
/// `(x * R / (z + R), y * R / (z + R))`, where `z` is the integer square
/// root of `R² - x² - y²` and divisions truncate toward zero. Everything
/// outside the disk becomes white.
pub fn spherize(image: &mut Image) {
    let (w, h) = (image.width() as i64, image.height() as i64);
    let src = image.buf();
    let mut out = vec![WHITE; src.len()];

    let radius = w.min(h) / 2;
    let (cx, cy) = (w / 2, h / 2);
    let index = |row: i64, col: i64| {
        ((0..h).contains(&row) && (0..w).contains(&col)).then(|| (row * w + col) as usize)
    };

    for x in -radius..radius {
        for y in -radius..radius {
            let dist2 = x * x + y * y;
            if dist2 >= radius * radius {
                continue;
            }
            let z = (radius * radius - dist2).unsigned_abs().isqrt() as i64;
            let x1 = x * radius / (z + radius);
            let y1 = y * radius / (z + radius);
            if let (Some(dst), Some(from)) = (index(cy + y, cx + x), index(cy + y1, cx + x1)) {
                out[dst] = src[from];
            }
        }
    }

    log::trace!("spherized {w}x{h} with radius {radius}");
    image.replace_pixels(ImgVec::new(out, w as usize, h as usize));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::RowOrder;
    use enough::Unstoppable;

    /// Grid where each pixel encodes its own coordinates.
    fn coordinate_image(w: usize, h: usize) -> Image {
        let pixels: Vec<RGB8> = (0..h)
            .flat_map(|row| (0..w).map(move |col| RGB8::new(row as u8, col as u8, 7)))
            .collect();
        Image::new(ImgVec::new(pixels, w, h), RowOrder::BottomUp).unwrap()
    }

    #[test]
    fn downsample_keeps_dimensions() {
        let mut image = coordinate_image(5, 3);
        downsample(&mut image);
        assert_eq!((image.width(), image.height()), (5, 3));
        assert_eq!(image.buf().len(), 15);
    }

    #[test]
    fn corner_divides_by_four() {
        let pixels = vec![
            RGB8::new(10, 0, 0),
            RGB8::new(20, 0, 0),
            RGB8::new(30, 0, 0),
            RGB8::new(41, 0, 0),
        ];
        let mut image = Image::new(ImgVec::new(pixels, 2, 2), RowOrder::BottomUp).unwrap();
        downsample(&mut image);
        // (10 + 20 + 30 + 41) / 4 = 25 (truncated)
        assert_eq!(image.pixel(0, 0), Some(RGB8::new(25, 0, 0)));
    }

    #[test]
    fn edges_and_center_use_in_bounds_counts() {
        let pixels: Vec<RGB8> = (1..=9u8).map(|v| RGB8::new(v * 10, 0, 0)).collect();
        let mut image = Image::new(ImgVec::new(pixels, 3, 3), RowOrder::BottomUp).unwrap();
        downsample(&mut image);
        // center: 450 / 9
        assert_eq!(image.pixel(1, 1).unwrap().r, 50);
        // top edge: (10+20+30+40+50+60) / 6
        assert_eq!(image.pixel(0, 1).unwrap().r, 35);
        // corner: (10+20+40+50) / 4
        assert_eq!(image.pixel(0, 0).unwrap().r, 30);
    }

    #[test]
    fn single_pixel_blur_is_identity() {
        let mut image =
            Image::new(ImgVec::new(vec![RGB8::new(9, 99, 199)], 1, 1), RowOrder::TopDown).unwrap();
        blur(&mut image, 3, Unstoppable).unwrap();
        assert_eq!(image.pixel(0, 0), Some(RGB8::new(9, 99, 199)));
    }

    #[test]
    fn blur_runs_independent_passes() {
        let mut once_twice = coordinate_image(6, 4);
        downsample(&mut once_twice);
        downsample(&mut once_twice);
        let mut blurred = coordinate_image(6, 4);
        blur(&mut blurred, 2, Unstoppable).unwrap();
        assert_eq!(blurred.buf(), once_twice.buf());
    }

    #[test]
    fn zero_blur_iterations_rejected() {
        let mut image = coordinate_image(2, 2);
        assert!(matches!(
            blur(&mut image, 0, Unstoppable),
            Err(BitmapError::InvalidParameter(_))
        ));
    }

    #[test]
    fn spherize_small_disk_samples_center() {
        // R = 2: every in-disk offset truncates back to the center sample.
        let mut image = coordinate_image(4, 4);
        spherize(&mut image);
        let center = RGB8::new(2, 2, 7);
        for row in 0..4 {
            for col in 0..4 {
                let expected = if row >= 1 && col >= 1 { center } else { WHITE };
                assert_eq!(image.pixel(row, col), Some(expected), "({row}, {col})");
            }
        }
    }

    #[test]
    fn spherize_pulls_edge_of_disk_inward() {
        // R = 4, offset (-3, 0): z = isqrt(7) = 2, x1 = -12 / 6 = -2.
        let mut image = coordinate_image(8, 8);
        spherize(&mut image);
        assert_eq!(image.pixel(4, 1), Some(RGB8::new(4, 2, 7)));
        assert_eq!(image.pixel(4, 4), Some(RGB8::new(4, 4, 7)));
        // (-4, -4) is outside the disk
        assert_eq!(image.pixel(0, 0), Some(WHITE));
    }

    #[test]
    fn spherize_uses_shorter_side_for_radius() {
        let mut image = coordinate_image(7, 2);
        spherize(&mut image);
        // R = 1, center (3, 1): only offset (0, 0) lies inside the disk.
        for row in 0..2 {
            for col in 0..7 {
                let expected = if (row, col) == (1, 3) {
                    RGB8::new(1, 3, 7)
                } else {
                    WHITE
                };
                assert_eq!(image.pixel(row, col), Some(expected));
            }
        }
    }

    #[test]
    fn single_pixel_spherize_is_white() {
        let mut image =
            Image::new(ImgVec::new(vec![RGB8::new(0, 0, 0)], 1, 1), RowOrder::BottomUp).unwrap();
        spherize(&mut image);
        assert_eq!(image.pixel(0, 0), Some(WHITE));
    }
}
