pub const RESIZED_PREFIX: &str = "resized_";
pub const FALLBACK_FILENAME: &str = "image";

/// Replaces every character outside `[A-Za-z0-9._-]` with `_`, one for one.
pub fn sanitize(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Name the resized image is offered under.
pub fn resized(original_filename: &str) -> String {
    format!("{}{}", RESIZED_PREFIX, sanitize(original_filename))
}
