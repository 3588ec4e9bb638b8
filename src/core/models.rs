use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::mime::extension_for_mime_type;

/// An image taken from the clipboard, before it is written next to the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastedImage {
    pub mime_type: String,
    pub pasted_at: DateTime<Utc>,
}

impl PastedImage {
    #[must_use]
    pub fn new(mime_type: impl Into<String>) -> Self {
        Self::at(mime_type, Utc::now())
    }

    #[must_use]
    pub fn at(mime_type: impl Into<String>, pasted_at: DateTime<Utc>) -> Self {
        Self {
            mime_type: mime_type.into(),
            pasted_at,
        }
    }

    #[must_use]
    pub fn extension(&self) -> &'static str {
        extension_for_mime_type(&self.mime_type)
    }

    /// Filename the image is saved under, e.g. `image_1700000000000.png`.
    #[must_use]
    pub fn file_name(&self) -> String {
        image_file_name(&self.mime_type, self.pasted_at.timestamp_millis())
    }
}

/// Build the `image_<millis>.<ext>` filename for a pasted image.
///
/// # Examples
///
/// ```
/// use figtag::core::models::image_file_name;
///
/// assert_eq!(image_file_name("image/jpeg", 42), "image_42.jpg");
/// assert_eq!(image_file_name("application/octet-stream", 42), "image_42.png");
/// ```
#[must_use]
pub fn image_file_name(mime_type: &str, timestamp_millis: i64) -> String {
    format!(
        "image_{timestamp_millis}.{}",
        extension_for_mime_type(mime_type)
    )
}
