#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: i32, height: i32, fill: u8) -> Vec<u8> {
    let stride = (width.unsigned_abs() as usize * 3).div_ceil(4) * 4;
    let data_len = stride * height.unsigned_abs() as usize;
    let mut out = vec![0u8; 54 + data_len];
    out[0] = b'B'; out[1] = b'M';
    out[2..6].copy_from_slice(&((54 + data_len) as u32).to_le_bytes()); // file size
    out[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    out[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    out[18..22].copy_from_slice(&width.to_le_bytes());
    out[22..26].copy_from_slice(&height.to_le_bytes());
    out[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    out[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    out[34..38].copy_from_slice(&(data_len as u32).to_le_bytes());
    for row in out[54..].chunks_exact_mut(stride) {
        row[..width.unsigned_abs() as usize * 3].fill(fill);
    }
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp(1, 1, 0xff)).unwrap();
    fs::write(format!("{dir}/bmp_4x4.bmp"), bmp(4, 4, 0x80)).unwrap();
    fs::write(format!("{dir}/bmp_5x3_topdown.bmp"), bmp(5, -3, 0x10)).unwrap();
    fs::write(format!("{dir}/bmp_9x9.bmp"), bmp(9, 9, 0x42)).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut rle = bmp(2, 2, 0);
    rle[30..34].copy_from_slice(&1u32.to_le_bytes());
    fs::write(format!("{dir}/bmp_rle8.bin"), rle).unwrap();
    let mut truncated = bmp(3, 3, 0x7f);
    truncated.truncate(60);
    fs::write(format!("{dir}/bmp_truncated.bin"), truncated).unwrap();

    println!("Generated seed corpus in {dir}/");
}
