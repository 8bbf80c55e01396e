#![allow(dead_code)]

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

/// A smooth synthetic scene rendered at `size` x `size`.
///
/// Mixes several incommensurate spatial frequencies so the DCT coefficients
/// are spread well apart, which keeps hashes stable across re-renders at
/// different resolutions.
pub fn scene(size: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(size, size, |x, y| {
        let u = x as f64 / (size - 1) as f64;
        let w = y as f64 / (size - 1) as f64;
        let v = 127.5
            + 45.0 * (3.1 * u + 0.7).sin() * (2.3 * w + 0.2).cos()
            + 30.0 * (5.9 * u * w + 1.1).sin()
            + 18.0 * (7.3 * w - 0.4).cos()
            + 12.0 * (11.0 * u - 2.0 * w).sin()
            + 8.0 * (17.0 * u * w + 0.5).cos();
        let v = v.clamp(0.0, 255.0) as u8;
        Rgb([v, v, v])
    }))
}

/// Two images with identical luminance but different hue.
///
/// The channel offsets cancel under the grayscale weights, so both images
/// reduce to the same luminance plane.
pub fn luma_matched_pair(w: u32, h: u32) -> (DynamicImage, DynamicImage) {
    let value = |x: u32, y: u32| (30 + ((x * 97 + y * 53) % 150)) as u8;
    let gray = RgbImage::from_fn(w, h, |x, y| {
        let v = value(x, y);
        Rgb([v, v, v])
    });
    let tinted = RgbImage::from_fn(w, h, |x, y| {
        let v = value(x, y);
        Rgb([v + 57, v - 29, v])
    });
    (
        DynamicImage::ImageRgb8(gray),
        DynamicImage::ImageRgb8(tinted),
    )
}

/// Deterministic pseudo-random RGBA image (opaque alpha).
pub fn noise_rgba(w: u32, h: u32, seed: u32) -> RgbaImage {
    let mut state = seed | 1;
    let mut next = move || {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (state >> 24) as u8
    };
    RgbaImage::from_fn(w, h, |_, _| Rgba([next(), next(), next(), 255]))
}

/// An APP1 segment holding a little-endian TIFF with one orientation entry.
pub fn app1_orientation_segment(orientation: u16) -> Vec<u8> {
    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II");
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&8u32.to_le_bytes()); // IFD0 right after the header
    tiff.extend_from_slice(&1u16.to_le_bytes()); // one entry
    tiff.extend_from_slice(&0x0112u16.to_le_bytes());
    tiff.extend_from_slice(&3u16.to_le_bytes()); // SHORT
    tiff.extend_from_slice(&1u32.to_le_bytes());
    tiff.extend_from_slice(&orientation.to_le_bytes());
    tiff.extend_from_slice(&0u16.to_le_bytes()); // value field padding

    let mut seg = vec![0xFF, 0xE1];
    seg.extend_from_slice(&((2 + 6 + tiff.len()) as u16).to_be_bytes());
    seg.extend_from_slice(b"Exif\x00\x00");
    seg.extend_from_slice(&tiff);
    seg
}

/// Insert `segment` directly after the SOI marker of a JPEG payload.
pub fn splice_after_soi(jpeg: &[u8], segment: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(jpeg.len() + segment.len());
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(segment);
    out.extend_from_slice(&jpeg[2..]);
    out
}
