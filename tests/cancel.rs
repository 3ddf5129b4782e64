//! Every long-running entry point stops with `Cancelled` when its token fires.

use std::sync::atomic::{AtomicU32, Ordering};

use bmp24::*;
use enough::StopReason;

/// Lets `n` checks pass, then reports cancellation forever after.
struct Countdown(AtomicU32);

impl Countdown {
    fn after(n: u32) -> Self {
        Self(AtomicU32::new(n))
    }
}

impl Stop for Countdown {
    fn check(&self) -> Result<(), StopReason> {
        match self
            .0
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1))
        {
            Ok(_) => Ok(()),
            Err(_) => Err(StopReason::Cancelled),
        }
    }
}

fn gradient(width: usize, height: usize) -> Image {
    let pixels: Vec<RGB8> = (0..width * height)
        .map(|i| RGB8::new(i as u8, (i * 7) as u8, 255 - i as u8))
        .collect();
    Image::new(ImgVec::new(pixels, width, height), RowOrder::BottomUp).unwrap()
}

fn is_cancelled<T>(result: Result<T, BitmapError>) -> bool {
    matches!(result, Err(BitmapError::Cancelled(StopReason::Cancelled)))
}

#[test]
fn decode_cancels_before_and_between_rows() {
    let data = encode(&gradient(4, 20), Unstoppable).unwrap();
    assert!(is_cancelled(decode(&data, Countdown::after(0))));
    // First check passes, the one at row 0 fires.
    assert!(is_cancelled(decode(&data, Countdown::after(1))));
    // Rows 0 and 16 are the only row checks.
    assert!(is_cancelled(decode(&data, Countdown::after(2))));
    assert!(decode(&data, Countdown::after(3)).is_ok());
}

#[test]
fn encode_cancels_before_and_between_rows() {
    let image = gradient(4, 20);
    assert!(is_cancelled(encode(&image, Countdown::after(0))));
    assert!(is_cancelled(encode(&image, Countdown::after(2))));
    assert_eq!(
        encode(&image, Countdown::after(3)).unwrap(),
        encode(&image, Unstoppable).unwrap()
    );
}

#[test]
fn blur_keeps_completed_passes() {
    let mut one_pass = gradient(5, 5);
    downsample(&mut one_pass);

    let mut image = gradient(5, 5);
    assert!(is_cancelled(blur(&mut image, 3, Countdown::after(1))));
    assert_eq!(image.buf(), one_pass.buf());
}

#[test]
fn apply_all_cancelled_up_front_leaves_image_untouched() {
    let original = gradient(3, 3);
    let mut image = original.clone();
    let ops = [Operation::Brightness(10), Operation::Spherize];
    assert!(is_cancelled(apply_all(&mut image, &ops, Countdown::after(0))));
    assert_eq!(image.buf(), original.buf());
}

#[test]
fn apply_all_cancelled_midway_keeps_earlier_edits() {
    let mut expected = gradient(3, 3);
    adjust_brightness(&mut expected, 10);

    let mut image = gradient(3, 3);
    let ops = [Operation::Brightness(10), Operation::Brightness(10)];
    assert!(is_cancelled(apply_all(&mut image, &ops, Countdown::after(1))));
    assert_eq!(image.buf(), expected.buf());
}

#[test]
fn validation_errors_win_over_cancellation() {
    let mut image = gradient(2, 2);
    let ops = [Operation::Blur(0)];
    assert!(matches!(
        apply_all(&mut image, &ops, Countdown::after(0)),
        Err(BitmapError::InvalidParameter(_))
    ));
}
