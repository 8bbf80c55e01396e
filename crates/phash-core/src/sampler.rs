//! Pixel sampling: quality-preserving resize strategy.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

/// Resize `src` to exactly (`dst_w`, `dst_h`).
///
/// - If `dst_w` or `dst_h` is 0, aspect ratio is preserved relative to the
///   other dimension.
/// - Downscale: progressive halving with Catmull-Rom, then a final
///   Catmull-Rom pass to the exact size.
/// - Upscale: a single bilinear pass (smoother, fewer halos).
pub fn resize(src: &DynamicImage, mut dst_w: u32, mut dst_h: u32) -> DynamicImage {
    let (src_w, src_h) = (src.width(), src.height());

    if src_w == 0 || src_h == 0 {
        return src.clone();
    }
    if (dst_w == 0 && dst_h == 0) || (dst_w == src_w && dst_h == src_h) {
        return src.clone();
    }

    // Preserve aspect ratio if one side is 0.
    if dst_w == 0 {
        dst_w = (dst_h as f64 * src_w as f64 / src_h as f64).round() as u32;
    }
    if dst_h == 0 {
        dst_h = (dst_w as f64 * src_h as f64 / src_w as f64).round() as u32;
    }

    if dst_w == 0 || dst_h == 0 {
        return src.clone();
    }

    // Upscale: smoother filter to avoid ringing/halos.
    if dst_w >= src_w && dst_h >= src_h {
        return src.resize_exact(dst_w, dst_h, FilterType::Triangle);
    }

    // Downscale: progressive halving for quality.
    let mut cur = src.clone();
    while cur.width() / 2 >= dst_w && cur.height() / 2 >= dst_h {
        let (nw, nh) = (cur.width() / 2, cur.height() / 2);
        cur = cur.resize_exact(nw, nh, FilterType::CatmullRom);
    }
    cur.resize_exact(dst_w, dst_h, FilterType::CatmullRom)
}

/// Scale the image down so the largest side is at most `max_side`,
/// preserving aspect ratio. Returns `src` unchanged when no downscale is
/// needed or `max_side` is 0.
pub fn downscale_by_largest_side(src: &DynamicImage, max_side: u32) -> DynamicImage {
    if max_side == 0 {
        return src.clone();
    }
    let (w, h) = (src.width(), src.height());
    if w == 0 || h == 0 {
        return src.clone();
    }

    let largest = w.max(h);
    if largest <= max_side {
        return src.clone();
    }

    let scale = max_side as f64 / largest as f64;
    let new_w = ((w as f64 * scale).round() as u32).max(1);
    let new_h = ((h as f64 * scale).round() as u32).max(1);
    resize(src, new_w, new_h)
}
