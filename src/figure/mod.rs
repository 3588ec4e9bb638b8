//! Image figure markup

pub mod markup;
pub mod source;

// Re-export main types for convenience
pub use markup::{ImageMarkupRequest, build_image_markup};
pub use source::resolve_image_source;
