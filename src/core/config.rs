use std::env;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::EmbedError;
use crate::figure::ImageMarkupRequest;

/// User preferences controlling how pasted images are embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedSettings {
    #[serde(alias = "imageDir")]
    pub image_dir: String,
    #[serde(alias = "useCustomPath")]
    pub use_custom_path: bool,
    #[serde(alias = "customPath")]
    pub custom_path: String,
    #[serde(alias = "imageWidth")]
    pub image_width: String,
    #[serde(alias = "includeAlt")]
    pub include_alt: bool,
}

impl Default for EmbedSettings {
    fn default() -> Self {
        Self {
            image_dir: String::new(),
            use_custom_path: false,
            custom_path: "./assets".to_string(),
            image_width: "80%".to_string(),
            include_alt: false,
        }
    }
}

impl EmbedSettings {
    /// Parse settings from a JSON document. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `EmbedError::ParseError` if the input is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, EmbedError> {
        let settings: Self = serde_json::from_str(raw)?;
        debug!(?settings, "Loaded embed settings from JSON");
        Ok(settings)
    }

    /// Read settings from `FIGTAG_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `EmbedError::ConfigError` if a boolean variable holds an
    /// unrecognized value.
    pub fn from_env() -> Result<Self, EmbedError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`EmbedSettings::from_env`], with variables supplied by `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `EmbedError::ConfigError` if a boolean variable holds an
    /// unrecognized value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EmbedError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let settings = Self {
            image_dir: lookup("FIGTAG_IMAGE_DIR").unwrap_or(defaults.image_dir),
            use_custom_path: parse_flag(&lookup, "FIGTAG_USE_CUSTOM_PATH")?
                .unwrap_or(defaults.use_custom_path),
            custom_path: lookup("FIGTAG_CUSTOM_PATH").unwrap_or(defaults.custom_path),
            image_width: lookup("FIGTAG_IMAGE_WIDTH").unwrap_or(defaults.image_width),
            include_alt: parse_flag(&lookup, "FIGTAG_INCLUDE_ALT")?
                .unwrap_or(defaults.include_alt),
        };
        debug!(?settings, "Loaded embed settings from environment");
        Ok(settings)
    }

    /// The resolved on-disk path of `file_name` inside the configured image directory.
    #[must_use]
    pub fn image_path_for(&self, file_name: &str) -> String {
        let dir = self.image_dir.trim().trim_end_matches('/');
        if dir.is_empty() {
            file_name.to_string()
        } else {
            format!("{dir}/{file_name}")
        }
    }

    #[must_use]
    pub fn request_for(&self, file_name: &str) -> ImageMarkupRequest {
        ImageMarkupRequest {
            file_name: file_name.to_string(),
            image_path: self.image_path_for(file_name),
            image_dir: self.image_dir.clone(),
            use_custom_path: self.use_custom_path,
            custom_path: self.custom_path.clone(),
            image_width: self.image_width.clone(),
            include_alt: self.include_alt,
        }
    }

    /// Render the figure markup for `file_name` with these settings.
    #[must_use]
    pub fn markup_for(&self, file_name: &str) -> String {
        self.request_for(file_name).render()
    }
}

fn parse_flag<F>(lookup: &F, key: &str) -> Result<Option<bool>, EmbedError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(Some(true)),
        "false" | "0" | "no" => Ok(Some(false)),
        other => Err(EmbedError::ConfigError(format!(
            "{key}: expected a boolean, got '{other}'"
        ))),
    }
}
