//! Settings and pasted-image naming

pub mod config;
pub mod models;

pub use config::EmbedSettings;
pub use models::{PastedImage, image_file_name};
