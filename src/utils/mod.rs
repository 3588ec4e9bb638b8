//! Pure string helpers for image embedding

pub mod caption;
pub mod mime;

pub use caption::caption_from_image_name;
pub use mime::{DEFAULT_IMAGE_EXTENSION, extension_for_mime_type, is_recognized_image_mime};
