//! Size segment rewriting.
//!
//! Image URLs carry their requested resolution in a path segment such as
//! `/s1280/` or `/s1280-w1280-h720-p-k-no-nd-mv/`. Replacing that segment with
//! another size token (e.g. `s1920`) asks the image host for a different size.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::entry::BackgroundEntry;

static SIZE_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/s\d+[^/]*/").expect("size segment regex"));

/// Replaces the first size segment of `url` with `/<token>/`. Returns `url`
/// unchanged when it has no size segment.
pub fn resize_url(url: &str, token: &str) -> String {
    SIZE_SEGMENT
        .replace(url, NoExpand(&format!("/{token}/")))
        .into_owned()
}

/// Rewrites every entry URL in place.
pub fn apply_size(token: &str, entries: &mut [BackgroundEntry]) {
    for entry in entries.iter_mut() {
        let resized = resize_url(&entry.url, token);
        if resized != entry.url {
            tracing::trace!(from = %entry.url, to = %resized, "resized");
            entry.url = resized;
        }
    }
}

/// A usable size token is a single non-empty path segment (`s1920`, `w1920-h1080`).
///
/// Resizing twice is idempotent when the token itself looks like a size
/// segment (`s<digits>...`); other tokens replace the first segment once and
/// the next run rewrites the following one, if any.
pub fn is_valid_size_token(token: &str) -> bool {
    !token.is_empty() && !token.contains('/')
}
