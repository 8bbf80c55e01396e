//! Two-dimensional DCT-II restricted to the low-frequency corner.

use once_cell::sync::Lazy;
use std::f64::consts::PI;

const N: usize = 32;

/// Cosine basis for the 32-point transform:
/// `COS32[k][n] = cos((2n + 1) * k * pi / 64)`, k in 0..8, n in 0..32.
///
/// Computed once per process and shared read-only across threads.
static COS32: Lazy<[[f64; N]; 8]> = Lazy::new(|| {
    let mut t = [[0.0; N]; 8];
    for (k, row) in t.iter_mut().enumerate() {
        for (n, v) in row.iter_mut().enumerate() {
            *v = ((2 * n + 1) as f64 * k as f64 * PI / (2.0 * N as f64)).cos();
        }
    }
    t
});

/// Compute the top-left 8x8 DCT-II coefficients of a 32x32 luminance grid.
///
/// The coefficient at `[v][u]` is the transform evaluated with `u` as the
/// horizontal frequency and `v` as the vertical frequency; the bit ordering
/// of the hash depends on that row/column convention, so it must not be
/// swapped.
pub fn dct_8x8(pix: &[[f64; N]; N]) -> [[f64; 8]; 8] {
    let inv_n = 1.0 / N as f64;
    let mut out = [[0.0; 8]; 8];
    for u in 0..8 {
        let au = if u == 0 { inv_n.sqrt() } else { (2.0 * inv_n).sqrt() };
        for v in 0..8 {
            let av = if v == 0 { inv_n.sqrt() } else { (2.0 * inv_n).sqrt() };
            let mut sum = 0.0;
            for y in 0..N {
                let cvy = COS32[v][y];
                for x in 0..N {
                    sum += pix[y][x] * COS32[u][x] * cvy;
                }
            }
            out[v][u] = au * av * sum;
        }
    }
    out
}
