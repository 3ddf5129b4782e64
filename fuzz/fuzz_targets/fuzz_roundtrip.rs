#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding must keep every header field but the
    // file size, and decoding again must produce identical pixels.
    let Ok(decoded) = bmp24::decode(data, enough::Unstoppable) else {
        return;
    };
    let Ok(reencoded) = bmp24::encode(&decoded, enough::Unstoppable) else {
        return;
    };

    assert_eq!(&reencoded[..2], &data[..2], "magic mismatch");
    assert_eq!(&reencoded[6..54], &data[6..54], "header mismatch");

    let Ok(decoded2) = bmp24::decode(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };
    assert_eq!(decoded.buf(), decoded2.buf(), "roundtrip pixel mismatch");
    assert_eq!(decoded.info(), decoded2.info());

    // Zero padding makes the second encode byte-identical
    let again = bmp24::encode(&decoded2, enough::Unstoppable).unwrap();
    assert_eq!(again, reencoded);
});
