//! Core functionality for computing 64-bit perceptual image hashes.
//!
//! This library provides the pieces of a classic DCT-based pHash pipeline:
//! - Quality-preserving resize and grayscale reduction
//! - 32-point DCT restricted to the low-frequency 8x8 corner
//! - Median-threshold bit extraction into a 64-bit hash
//! - EXIF orientation detection and correction for JPEG payloads
//! - Decode and fetch helpers that normalize orientation before hashing
//!
//! Visually similar images map to hashes with a small Hamming distance;
//! dissimilar images map to hashes with a large one. Every computation is
//! synchronous and side-effect-free, so hashes may be computed from any
//! number of threads concurrently.

// -- Internal Modules --
mod error;

// -- Public Re-exports --
pub use config::Config;
pub use error::{Error, Result};
pub use hash::{hamming_distance, phash, phash_from_file, PHash};
pub use orientation::{apply_orientation, Orientation};

// -- Public Modules --
pub mod config;
pub mod decode;
pub mod dct;
pub mod exif;
pub mod grayscale;
pub mod hash;
pub mod logging;
pub mod orientation;
pub mod sampler;
