//! Last path segment extraction.

/// Returns the raw (still percent-encoded) text after the final `/` of the URL path.
///
/// Query and fragment are not part of the segment. Strings that do not parse
/// as absolute URLs are split textually.
pub fn last_path_segment(url: &str) -> String {
    if let Ok(parsed) = url::Url::parse(url) {
        if let Some(segment) = parsed.path_segments().and_then(|mut s| s.next_back()) {
            return segment.to_string();
        }
        return String::new();
    }
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let path = &url[..end];
    path.rsplit('/').next().unwrap_or_default().to_string()
}
