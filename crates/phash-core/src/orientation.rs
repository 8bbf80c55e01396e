//! EXIF orientation corrections.
//!
//! All corrected outputs are RGBA buffers anchored at (0, 0). Sources that
//! already carry a contiguous RGBA sample buffer take a direct sample-copy
//! path; everything else goes through a generic per-pixel path. Both paths
//! produce identical pixels.

use image::{DynamicImage, GenericImageView, RgbaImage};

/// The eight EXIF orientation codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// 1: normal
    Normal = 1,
    /// 2: mirror horizontal
    MirrorHorizontal = 2,
    /// 3: rotate 180
    Rotate180 = 3,
    /// 4: mirror vertical
    MirrorVertical = 4,
    /// 5: transpose (mirror across the main diagonal)
    Transpose = 5,
    /// 6: rotate 90 clockwise
    Rotate90 = 6,
    /// 7: transverse (mirror across the anti-diagonal)
    Transverse = 7,
    /// 8: rotate 270 clockwise
    Rotate270 = 8,
}

impl Orientation {
    /// Map a raw EXIF orientation value to an `Orientation`.
    ///
    /// Values outside 1..=8 are invalid and yield `None`.
    pub fn from_exif(value: u16) -> Option<Orientation> {
        match value {
            1 => Some(Orientation::Normal),
            2 => Some(Orientation::MirrorHorizontal),
            3 => Some(Orientation::Rotate180),
            4 => Some(Orientation::MirrorVertical),
            5 => Some(Orientation::Transpose),
            6 => Some(Orientation::Rotate90),
            7 => Some(Orientation::Transverse),
            8 => Some(Orientation::Rotate270),
            _ => None,
        }
    }

    /// The raw EXIF value of this orientation.
    pub fn exif_value(self) -> u16 {
        self as u16
    }

    /// Whether applying this orientation swaps image width and height.
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Transpose
                | Orientation::Rotate90
                | Orientation::Transverse
                | Orientation::Rotate270
        )
    }
}

/// Rearrange pixels so the image displays upright.
///
/// [`Orientation::Normal`] is a no-op; the other seven codes remap into a
/// fresh RGBA buffer, swapping width and height for the transpose,
/// transverse, and 90-degree family codes.
pub fn apply_orientation(img: &DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img.clone(),
        _ => DynamicImage::ImageRgba8(remap(img, orientation)),
    }
}

fn remap(img: &DynamicImage, orientation: Orientation) -> RgbaImage {
    let (w, h) = img.dimensions();
    let (dst_w, dst_h) = if orientation.swaps_dimensions() {
        (h, w)
    } else {
        (w, h)
    };
    let mut dst = RgbaImage::new(dst_w, dst_h);

    if let Some(src) = img.as_rgba8() {
        remap_rgba(&mut dst, src, orientation);
    } else {
        for y in 0..h {
            for x in 0..w {
                let (dx, dy) = dest_position(x, y, w, h, orientation);
                dst.put_pixel(dx, dy, img.get_pixel(x, y));
            }
        }
    }
    dst
}

// Fast path: both buffers are contiguous RGBA samples, so pixels move as
// 4-byte copies without any color conversion.
fn remap_rgba(dst: &mut RgbaImage, src: &RgbaImage, orientation: Orientation) {
    let (w, h) = src.dimensions();
    let dst_w = dst.width() as usize;
    let src_buf = src.as_raw();
    let dst_buf: &mut [u8] = dst;
    for y in 0..h {
        for x in 0..w {
            let (dx, dy) = dest_position(x, y, w, h, orientation);
            let so = 4 * (y as usize * w as usize + x as usize);
            let doff = 4 * (dy as usize * dst_w + dx as usize);
            dst_buf[doff..doff + 4].copy_from_slice(&src_buf[so..so + 4]);
        }
    }
}

/// Destination of source pixel (x, y) under `orientation`.
fn dest_position(x: u32, y: u32, w: u32, h: u32, orientation: Orientation) -> (u32, u32) {
    match orientation {
        Orientation::Normal => (x, y),
        Orientation::MirrorHorizontal => (w - 1 - x, y),
        Orientation::Rotate180 => (w - 1 - x, h - 1 - y),
        Orientation::MirrorVertical => (x, h - 1 - y),
        Orientation::Transpose => (y, x),
        Orientation::Rotate90 => (h - 1 - y, x),
        Orientation::Transverse => (h - 1 - y, w - 1 - x),
        Orientation::Rotate270 => (y, w - 1 - x),
    }
}
