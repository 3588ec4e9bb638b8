//! figtag - helpers for embedding pasted images into generated markup.
//!
//! This crate turns a pasted image into an HTML figure snippet:
//! 1. The image's MIME type picks the file extension it is saved under
//! 2. The saved filename becomes a human-readable figure caption
//! 3. A centered `<img>` tag plus caption is assembled for the document
//!
//! # Architecture
//!
//! The crate is organized as:
//! - `utils` for the pure MIME and caption transforms
//! - `figure` for `src` resolution and the markup template
//! - `core` for user settings and pasted-image naming
//! - `errors` for the settings-loading error type
//!
//! # Example
//!
//! ```
//! use figtag::core::config::EmbedSettings;
//! use figtag::core::models::image_file_name;
//!
//! let settings = EmbedSettings::default();
//! let file_name = image_file_name("image/png", 1_234_567_890);
//!
//! let markup = settings.markup_for(&file_name);
//! assert!(markup.contains(r#"<img src="image_1234567890.png" width="80%">"#));
//! assert!(markup.contains("<b>Figure</b>.image 1234567890."));
//! ```

// Module declarations
pub mod core;
pub mod errors;
pub mod figure;
pub mod utils;

pub use figure::{ImageMarkupRequest, build_image_markup, resolve_image_source};
pub use utils::caption::caption_from_image_name;
pub use utils::mime::extension_for_mime_type;

/// Configure structured logging with JSON format.
///
/// This function sets up tracing-subscriber with a JSON formatter so that the
/// host application's log pipeline can ingest events from this crate. It is
/// safe to call more than once; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// // Initialize structured logging before rendering any markup
/// figtag::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    if tracing_subscriber::registry().with(fmt_layer).try_init().is_err() {
        tracing::debug!("Global tracing subscriber already installed");
    }
}
