//! Rendering options.

use serde::{Deserialize, Serialize};

/// Options controlling how a document is rendered.
///
/// Defaults match the article pages: lazy images, links opening in a new tab,
/// hard line breaks inside paragraphs, and URL scheme checking on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Whether to add `loading="lazy"` to images.
    #[serde(default = "default_true")]
    pub enable_lazy_images: bool,
    /// Whether to wrap images in `<figure>` with the alt text as caption.
    #[serde(default)]
    pub enable_image_captions: bool,
    /// Whether links get `target="_blank" rel="noopener noreferrer"`.
    #[serde(default = "default_true")]
    pub open_links_in_new_tab: bool,
    /// Whether headings get an `id` attribute with their slug.
    #[serde(default)]
    pub enable_heading_ids: bool,
    /// Whether `---` and `--` outside code become em and en dashes.
    #[serde(default)]
    pub enable_smart_dashes: bool,
    /// Whether single newlines inside paragraphs become `<br />`.
    /// When disabled the lines are joined with a space.
    #[serde(default = "default_true")]
    pub hard_line_breaks: bool,
    /// Whether link and image URLs are emitted without scheme checking.
    #[serde(default)]
    pub allow_unsafe_urls: bool,
    /// Class of the scroll container wrapped around every table.
    #[serde(default = "default_table_wrapper_class")]
    pub table_wrapper_class: String,
}

fn default_true() -> bool {
    true
}

fn default_table_wrapper_class() -> String {
    "table-scroll".to_string()
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            enable_lazy_images: true,
            enable_image_captions: false,
            open_links_in_new_tab: true,
            enable_heading_ids: false,
            enable_smart_dashes: false,
            hard_line_breaks: true,
            allow_unsafe_urls: false,
            table_wrapper_class: default_table_wrapper_class(),
        }
    }
}
