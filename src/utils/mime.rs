//! MIME utilities shared across modules

use tracing::debug;

/// Extension used when a MIME type is not in the table.
pub const DEFAULT_IMAGE_EXTENSION: &str = "png";

const MIME_TO_EXTENSION: [(&str, &str); 7] = [
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("image/svg+xml", "svg"),
    ("image/webp", "webp"),
    ("image/bmp", "bmp"),
    ("image/tiff", "tiff"),
];

/// Returns the file extension a pasted image of the given MIME type is saved under.
///
/// Matching is exact and case-sensitive. Unknown, empty or malformed MIME types
/// map to [`DEFAULT_IMAGE_EXTENSION`].
///
/// # Examples
///
/// ```
/// use figtag::utils::mime::extension_for_mime_type;
///
/// assert_eq!(extension_for_mime_type("image/jpeg"), "jpg");
/// assert_eq!(extension_for_mime_type("image/unknown"), "png");
/// ```
#[must_use]
pub fn extension_for_mime_type(mime: &str) -> &'static str {
    lookup(mime).unwrap_or_else(|| {
        debug!(
            mime,
            fallback = DEFAULT_IMAGE_EXTENSION,
            "Unrecognized image MIME type, using default extension"
        );
        DEFAULT_IMAGE_EXTENSION
    })
}

/// Returns whether a given MIME type has its own entry in the extension table.
#[must_use]
pub fn is_recognized_image_mime(mime: &str) -> bool {
    lookup(mime).is_some()
}

fn lookup(mime: &str) -> Option<&'static str> {
    MIME_TO_EXTENSION
        .iter()
        .find(|(known, _)| *known == mime)
        .map(|(_, ext)| *ext)
}
