use std::time::Duration;

/// Configuration for hash comparison and remote image fetching
#[derive(Debug, Clone)]
pub struct Config {
    /// Hamming distance at or below which two hashes count as similar
    pub similarity_threshold: u32,

    /// Cap on the number of bytes read from a remote image, if any
    pub max_fetch_bytes: Option<u64>,

    /// Timeout for remote image fetches
    pub fetch_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            similarity_threshold: 6,
            max_fetch_bytes: Some(32 * 1024 * 1024),
            fetch_timeout: Duration::from_secs(30),
        }
    }
}
