//! Filesystem-safe file names.

/// Makes a decoded key safe to use as a single file name.
///
/// - Replaces NUL, `/`, `\` and control characters with `_`
/// - Trims leading/trailing whitespace and dots
/// - Limits length to 255 bytes (Linux NAME_MAX)
pub fn sanitize_file_name(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let replaced: String = name
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let trimmed = replaced.trim_matches(|c: char| c.is_whitespace() || c == '.');

    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_separators() {
        assert_eq!(sanitize_file_name("a/b\\c.jpg"), "a_b_c.jpg");
    }

    #[test]
    fn keeps_inner_spaces() {
        assert_eq!(sanitize_file_name("Lake Tahoe.jpg"), "Lake Tahoe.jpg");
    }

    #[test]
    fn trims_dots_and_spaces() {
        assert_eq!(sanitize_file_name("  ..photo.jpg.. "), "photo.jpg");
    }

    #[test]
    fn control_chars() {
        assert_eq!(sanitize_file_name("a\x00b\nc.jpg"), "a_b_c.jpg");
    }

    #[test]
    fn long_names_truncated_on_char_boundary() {
        let name = "é".repeat(200);
        let out = sanitize_file_name(&name);
        assert!(out.len() <= 255);
        assert!(out.chars().all(|c| c == 'é'));
    }
}
