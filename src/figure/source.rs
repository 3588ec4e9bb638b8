//! Resolution of the `src` attribute for an embedded image.

/// Compute the value of the `src` attribute for `file_name`.
///
/// Without a custom path the bare filename is used, so the image is looked up
/// next to the referencing document. With a custom path the trimmed path and
/// the filename are joined with `/`. Doubled slashes are collapsed unless the
/// custom path is explicitly relative (`./` or `../`), in which case the joined
/// value is kept exactly as written.
///
/// # Examples
///
/// ```
/// use figtag::figure::resolve_image_source;
///
/// assert_eq!(resolve_image_source("a.png", false, "assets"), "a.png");
/// assert_eq!(resolve_image_source("a.png", true, " assets/ "), "assets/a.png");
/// assert_eq!(resolve_image_source("a.png", true, "./assets/"), "./assets//a.png");
/// ```
#[must_use]
pub fn resolve_image_source(file_name: &str, use_custom_path: bool, custom_path: &str) -> String {
    if !use_custom_path {
        return file_name.to_string();
    }

    let path = custom_path.trim();
    let joined = format!("{path}/{file_name}");

    if is_explicitly_relative(path) {
        joined
    } else {
        joined.replace("//", "/")
    }
}

fn is_explicitly_relative(path: &str) -> bool {
    path.starts_with("./") || path.starts_with("../")
}
