//! Grayscale reduction.

use image::{DynamicImage, GenericImageView, GrayImage, Luma};

/// Convert any image to single-channel luminance, preserving dimensions.
///
/// Uses the standard display-referred (sRGB) channel weights. A zero-sized
/// input yields a zero-sized grayscale image. Downstream consumers read the
/// result through channel 0; all channels of a grayscale pixel are equal.
pub fn grayscale(img: &DynamicImage) -> DynamicImage {
    let (w, h) = img.dimensions();
    let mut out = GrayImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let [r, g, b, _] = img.get_pixel(x, y).0;
            out.put_pixel(x, y, Luma([luma(r, g, b)]));
        }
    }
    DynamicImage::ImageLuma8(out)
}

// BT.601 weights with round-half-up integer arithmetic; the hash pipeline
// depends on this exact rounding.
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32 + 500) / 1000) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn known_channel_weights() {
        assert_eq!(luma(255, 0, 0), 76);
        assert_eq!(luma(0, 255, 0), 150);
        assert_eq!(luma(0, 0, 255), 29);
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(255, 255, 255), 255);
    }

    #[test]
    fn preserves_dimensions() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(7, 13, Rgb([10, 20, 30])));
        let gray = grayscale(&img);
        assert_eq!((gray.width(), gray.height()), (7, 13));
    }

    #[test]
    fn output_is_single_channel() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 3, Rgb([200, 100, 50])));
        let gray = grayscale(&img);
        let [r, g, b, _] = gray.get_pixel(1, 1).0;
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(r, luma(200, 100, 50));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(0, 0));
        let gray = grayscale(&img);
        assert_eq!((gray.width(), gray.height()), (0, 0));
    }
}
