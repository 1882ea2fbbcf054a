//! NAPI-exposed data structures.

use napi_derive::napi;
use serde_json::Value as JsonValue;

/// Parsed frontmatter document plus any parser errors.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct FrontmatterResult {
    /// Structured frontmatter data represented as JSON.
    pub frontmatter: JsonValue,
    /// Any syntax or parsing errors surfaced by the extractor.
    pub errors: Vec<String>,
}

/// Rendering options accepted from JavaScript. Unset fields use the defaults.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Adds `loading="lazy"` to images (default true).
    pub enable_lazy_images: Option<bool>,
    /// Wraps images in `<figure>` with a caption (default false).
    pub enable_image_captions: Option<bool>,
    /// Opens links in a new tab (default true).
    pub open_links_in_new_tab: Option<bool>,
    /// Adds slug ids to headings (default false).
    pub enable_heading_ids: Option<bool>,
    /// Turns `--`/`---` into en/em dashes (default false).
    pub enable_smart_dashes: Option<bool>,
    /// Joins paragraph lines with `<br />` (default true).
    pub hard_line_breaks: Option<bool>,
    /// Skips URL scheme checking (default false).
    pub allow_unsafe_urls: Option<bool>,
    /// Class of the table scroll container (default `table-scroll`).
    pub table_wrapper_class: Option<String>,
}

/// Heading metadata collected while rendering.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct HeadingEntry {
    /// Heading depth (1-6).
    pub depth: u8,
    /// Slugified identifier.
    pub slug: String,
    /// Visible heading text.
    pub text: String,
}

/// Render warning returned from Rust
#[napi(object)]
#[derive(Debug, Clone)]
pub struct WarningEntry {
    /// Warning type (`malformed_table`, `unsafe_url`)
    pub warning_type: String,
    /// Line number where warning occurred
    pub line: u32,
    /// Human-readable message
    pub message: String,
}

/// Rendered article body with its headings and warnings.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// HTML fragments joined with newlines.
    pub html: String,
    /// Headings in document order.
    pub headings: Vec<HeadingEntry>,
    /// Non-fatal warnings, ordered by line.
    pub warnings: Vec<WarningEntry>,
}

/// Article loaded from the content directory.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct ArticleRecord {
    /// File name without extension.
    pub slug: String,
    /// Article title.
    pub title: String,
    /// Short summary.
    pub description: String,
    /// Listing category.
    pub category: String,
    /// Reading time label, e.g. `5 min`.
    pub read_time: String,
    /// Cover image path.
    pub image: String,
    /// Raw markdown body.
    pub content: String,
    /// Publication date as written in the front matter.
    pub date: String,
    /// Publication date formatted as `Month D, YYYY`.
    pub display_date: String,
}

/// Fallback values for front matter fields an article omits.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct ArticleDefaults {
    /// Default title (`Untitled`).
    pub title: Option<String>,
    /// Default description (empty).
    pub description: Option<String>,
    /// Default category (`Articles`).
    pub category: Option<String>,
    /// Default reading time (`5 min`).
    pub read_time: Option<String>,
    /// Default cover image (`/open-book-knowledge.png`).
    pub image: Option<String>,
}
