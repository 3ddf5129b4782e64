#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the input
    let Ok(mut image) = bmp24::decode(data, enough::Unstoppable) else {
        return;
    };

    // Every filter must also be total over any decodable image
    bmp24::adjust_brightness(&mut image, i32::from(data[0]) - 128);
    let _ = bmp24::adjust_contrast(&mut image, f64::from(data[1]) * 2.0 - 255.0);
    bmp24::downsample(&mut image);
    bmp24::spherize(&mut image);
    let _ = bmp24::dump(&image);
});
