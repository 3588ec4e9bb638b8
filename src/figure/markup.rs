//! HTML figure markup for embedded images.
//!
//! This module assembles the centered `<img>` + caption fragment that is
//! inserted into a document after an image has been pasted.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::source::resolve_image_source;
use crate::utils::caption::caption_from_image_name;

/// Everything needed to render one embedded image.
///
/// `image_path` and `image_dir` are carried for call-site compatibility only;
/// the `src` attribute is always recomputed from `file_name`, `use_custom_path`
/// and `custom_path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMarkupRequest {
    pub file_name: String,
    pub image_path: String,
    pub image_dir: String,
    pub use_custom_path: bool,
    pub custom_path: String,
    pub image_width: String,
    pub include_alt: bool,
}

impl ImageMarkupRequest {
    /// The value the rendered `src` attribute will hold.
    #[must_use]
    pub fn source(&self) -> String {
        resolve_image_source(&self.file_name, self.use_custom_path, &self.custom_path)
    }

    /// Render the centered figure fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// use figtag::figure::ImageMarkupRequest;
    ///
    /// let request = ImageMarkupRequest {
    ///     file_name: "chart_q3.png".to_string(),
    ///     image_path: "chart_q3.png".to_string(),
    ///     image_dir: String::new(),
    ///     use_custom_path: false,
    ///     custom_path: String::new(),
    ///     image_width: "auto".to_string(),
    ///     include_alt: true,
    /// };
    ///
    /// assert_eq!(
    ///     request.render(),
    ///     "<center>\n  <img src=\"chart_q3.png\" width=\"auto\" alt=\"chart_q3.png\"><br>\n  <b>Figure</b>.chart q3.\n</center>"
    /// );
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let src = self.source();
        trace!(file_name = %self.file_name, src = %src, "Resolved image source");

        let img_tag = if self.include_alt {
            format!(
                r#"<img src="{src}" width="{}" alt="{}">"#,
                self.image_width, self.file_name
            )
        } else {
            format!(r#"<img src="{src}" width="{}">"#, self.image_width)
        };
        let caption = caption_from_image_name(&self.file_name);

        let markup = format!("<center>\n  {img_tag}<br>\n  <b>Figure</b>.{caption}\n</center>");

        #[cfg(feature = "debug-logs")]
        trace!("Rendered figure markup:\n{}", markup);

        #[cfg(not(feature = "debug-logs"))]
        trace!("Rendered figure markup ({} bytes)", markup.len());

        markup
    }
}

/// Build the centered figure fragment for an image.
///
/// Argument-list form of [`ImageMarkupRequest::render`]. `image_path` and
/// `image_dir` are accepted but do not influence the output.
///
/// # Examples
///
/// ```
/// use figtag::figure::build_image_markup;
///
/// let html = build_image_markup(
///     "image_1234567890.png",
///     "image_1234567890.png",
///     "",
///     true,
///     "assets",
///     "80%",
///     false,
/// );
/// assert!(html.contains(r#"src="assets/image_1234567890.png""#));
/// ```
#[must_use]
#[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
pub fn build_image_markup(
    file_name: &str,
    image_path: &str,
    image_dir: &str,
    use_custom_path: bool,
    custom_path: &str,
    image_width: &str,
    include_alt: bool,
) -> String {
    ImageMarkupRequest {
        file_name: file_name.to_string(),
        image_path: image_path.to_string(),
        image_dir: image_dir.to_string(),
        use_custom_path,
        custom_path: custom_path.to_string(),
        image_width: image_width.to_string(),
        include_alt,
    }
    .render()
}
