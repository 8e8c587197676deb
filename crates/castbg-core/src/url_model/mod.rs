//! Entry keys and local file names derived from image URLs.
//!
//! The key of an entry is the percent-decoded last path segment of its URL.
//! The same key, made safe for the filesystem, names the downloaded file.

mod decode;
mod path;
mod sanitize;

pub use decode::percent_decode;
pub use path::last_path_segment;
pub use sanitize::sanitize_file_name;

/// File name used when the URL yields nothing usable.
pub const DEFAULT_FILENAME: &str = "download.bin";

/// Dedup key for an entry URL: `percent_decode(last_path_segment(url))`.
///
/// A URL ending in `/` has an empty key.
pub fn entry_key(url: &str) -> String {
    percent_decode(&last_path_segment(url))
}

/// Local file name for a downloaded image.
///
/// # Examples
///
/// - `"https://x/s1920/Lake%20Tahoe.jpg"` → `"Lake Tahoe.jpg"`
/// - `"https://x/s1920/a%2Fb.jpg"` → `"a_b.jpg"`
/// - `"https://x/"` → `"download.bin"`
pub fn download_file_name(url: &str) -> String {
    let sanitized = sanitize_file_name(&entry_key(url));
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}
