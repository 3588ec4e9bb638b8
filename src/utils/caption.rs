use regex::Regex;

/// Derive a figure caption from an image filename.
///
/// The trailing extension (a dot followed by one or more non-dot characters at
/// the very end) is removed, every underscore becomes a space, and a period is
/// appended. The result is never empty: degenerate names such as `""` or
/// `".png"` produce `"."`.
///
/// # Examples
///
/// ```
/// use figtag::utils::caption::caption_from_image_name;
///
/// assert_eq!(caption_from_image_name("my_test_image_123.png"), "my test image 123.");
/// assert_eq!(caption_from_image_name(".png"), ".");
/// ```
#[must_use]
pub fn caption_from_image_name(file_name: &str) -> String {
    static EXTENSION_RE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
        Regex::new(r"\.[^.]+$")
            .unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
    });

    let stem = match EXTENSION_RE.find(file_name) {
        Some(m) => &file_name[..m.start()],
        None => file_name,
    };

    let mut caption = stem.replace('_', " ");
    caption.push('.');
    caption
}
