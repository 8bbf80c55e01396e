//! The 64-bit perceptual hash pipeline.

use std::fmt;
use std::path::Path;

use image::{DynamicImage, GenericImageView};
use serde::{Deserialize, Serialize};

use crate::dct::dct_8x8;
use crate::decode::decode_bytes;
use crate::grayscale::grayscale;
use crate::sampler::resize;
use crate::Result;

/// A perceptual hash represented as a 64-bit value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PHash(pub u64);

impl PHash {
    /// The all-zero hash, produced for zero-sized input images.
    pub const ZERO: PHash = PHash(0);

    /// Calculate the Hamming distance between two perceptual hashes
    pub fn distance(&self, other: &PHash) -> u32 {
        (self.0 ^ other.0).count_ones()
    }

    /// Check if two images are perceptually similar based on a threshold
    pub fn is_similar(&self, other: &PHash, threshold: u32) -> bool {
        self.distance(other) <= threshold
    }
}

impl fmt::Display for PHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Compute the classic 64-bit perceptual hash (pHash) of an image.
///
/// Pipeline:
///  1. Grayscale
///  2. Resize to 32x32
///  3. 2D DCT (N=32), keep the top-left 8x8 coefficients
///  4. Median of the low-band coefficients
///  5. Build the hash: bit=1 if coeff>median, with the DC bit forced to 0
///
/// A zero-sized image yields [`PHash::ZERO`].
pub fn phash(img: &DynamicImage) -> PHash {
    if img.width() == 0 || img.height() == 0 {
        return PHash::ZERO;
    }
    let gray = grayscale(img);
    let resized = resize(&gray, 32, 32);
    let grid = luminance_grid(&resized);
    let coeff = dct_8x8(&grid);
    let median = low_band_median(&coeff);
    PHash(bits_from_coefficients(&coeff, median))
}

/// Compute the perceptual hash of an image file.
///
/// Reads the file, decodes it, normalizes EXIF orientation, and hashes.
pub fn phash_from_file<P: AsRef<Path>>(path: P) -> Result<PHash> {
    let data = std::fs::read(path)?;
    let (img, _) = decode_bytes(&data)?;
    Ok(phash(&img))
}

/// Number of differing bits between two 64-bit hashes.
pub fn hamming_distance(a: u64, b: u64) -> u32 {
    (a ^ b).count_ones()
}

/// Sample the 32x32 luminance grid through channel 0 (values 0..255).
fn luminance_grid(img: &DynamicImage) -> [[f64; 32]; 32] {
    let mut out = [[0.0; 32]; 32];
    for (y, row) in out.iter_mut().enumerate() {
        for (x, p) in row.iter_mut().enumerate() {
            *p = img.get_pixel(x as u32, y as u32).0[0] as f64;
        }
    }
    out
}

/// Median of the 49 coefficients outside the first row and first column.
///
/// The window excludes the whole DC row and column, not just the single DC
/// cell; stored hashes depend on this exact choice.
fn low_band_median(c: &[[f64; 8]; 8]) -> f64 {
    let mut v = Vec::with_capacity(49);
    for row in &c[1..] {
        v.extend_from_slice(&row[1..]);
    }
    v.sort_by(f64::total_cmp);
    v[v.len() / 2]
}

/// Assemble the hash row-major, MSB-first, then clear the DC bit.
fn bits_from_coefficients(c: &[[f64; 8]; 8], median: f64) -> u64 {
    let mut h = 0u64;
    for row in c {
        for &coeff in row {
            h <<= 1;
            if coeff > median {
                h |= 1;
            }
        }
    }
    // The bit at position (0, 0) is cleared unconditionally.
    h & !(1 << 63)
}
