//! Decoding and fetching images.
//!
//! Decoded images are normalized with EXIF orientation before they are
//! returned; orientation metadata lives in the compressed stream, so the
//! raw bytes are inspected again after the pixel decode. A missing or
//! malformed EXIF block never fails a decode.

use std::io::Read;

use image::{DynamicImage, ImageFormat};
use log::debug;

use crate::config::Config;
use crate::exif::jpeg_orientation;
use crate::orientation::{apply_orientation, Orientation};
use crate::{Error, Result};

/// Decode an image from raw bytes and normalize its orientation.
///
/// Returns the decoded image and the detected format.
pub fn decode_bytes(data: &[u8]) -> Result<(DynamicImage, ImageFormat)> {
    let format = image::guess_format(data)?;
    let img = image::load_from_memory_with_format(data, format)?;
    Ok((normalize_orientation(img, data), format))
}

/// Read all bytes from `r` (works with non-seekable readers) and decode.
pub fn decode_reader<R: Read>(mut r: R) -> Result<(DynamicImage, ImageFormat)> {
    let mut data = Vec::new();
    r.read_to_end(&mut data)?;
    decode_bytes(&data)
}

// Missing or invalid EXIF keeps the original image.
fn normalize_orientation(img: DynamicImage, payload: &[u8]) -> DynamicImage {
    match jpeg_orientation(payload) {
        None | Some(Orientation::Normal) => img,
        Some(orientation) => {
            debug!("applying EXIF orientation {:?}", orientation);
            apply_orientation(&img, orientation)
        }
    }
}

/// Fetch a remote image over HTTP with default settings and decode it.
pub fn fetch_and_decode(url: &str) -> Result<(DynamicImage, ImageFormat)> {
    fetch_and_decode_with(url, &Config::default())
}

/// Fetch a remote image over HTTP and decode it.
///
/// Non-2xx responses are rejected, and the body read is capped at
/// `config.max_fetch_bytes` when set.
pub fn fetch_and_decode_with(url: &str, config: &Config) -> Result<(DynamicImage, ImageFormat)> {
    let client = reqwest::blocking::Client::builder()
        .timeout(config.fetch_timeout)
        .build()
        .map_err(Error::Request)?;

    let mut response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "image/*,*/*;q=0.8")
        .send()
        .map_err(|e| {
            if e.is_builder() {
                Error::Request(e)
            } else {
                Error::Transport(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::BadStatus(status));
    }

    let mut data = Vec::new();
    if let Some(cap) = config.max_fetch_bytes {
        (&mut response).take(cap).read_to_end(&mut data)?;
    } else {
        response.read_to_end(&mut data)?;
    }
    debug!("fetched {} bytes from {}", data.len(), url);
    decode_bytes(&data)
}
