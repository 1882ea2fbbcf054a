use quire_html::{RenderOptions, RenderedArticle};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Render Config
// ============================================================================

/// Configuration accepted by the WASM render functions.
/// Mirrors the NAPI `RenderConfig` for parity.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WasmRenderConfig {
    #[serde(default, alias = "enableLazyImages")]
    pub enable_lazy_images: Option<bool>,
    #[serde(default, alias = "enableImageCaptions")]
    pub enable_image_captions: Option<bool>,
    #[serde(default, alias = "openLinksInNewTab")]
    pub open_links_in_new_tab: Option<bool>,
    #[serde(default, alias = "enableHeadingIds")]
    pub enable_heading_ids: Option<bool>,
    #[serde(default, alias = "enableSmartDashes")]
    pub enable_smart_dashes: Option<bool>,
    #[serde(default, alias = "hardLineBreaks")]
    pub hard_line_breaks: Option<bool>,
    #[serde(default, alias = "allowUnsafeUrls")]
    pub allow_unsafe_urls: Option<bool>,
    #[serde(default, alias = "tableWrapperClass")]
    pub table_wrapper_class: Option<String>,
}

fn parse_config(config: JsValue) -> WasmRenderConfig {
    if config.is_undefined() || config.is_null() {
        return WasmRenderConfig::default();
    }
    serde_wasm_bindgen::from_value(config).unwrap_or_default()
}

fn build_render_options(cfg: WasmRenderConfig) -> RenderOptions {
    let defaults = RenderOptions::default();
    RenderOptions {
        enable_lazy_images: cfg.enable_lazy_images.unwrap_or(defaults.enable_lazy_images),
        enable_image_captions: cfg
            .enable_image_captions
            .unwrap_or(defaults.enable_image_captions),
        open_links_in_new_tab: cfg
            .open_links_in_new_tab
            .unwrap_or(defaults.open_links_in_new_tab),
        enable_heading_ids: cfg.enable_heading_ids.unwrap_or(defaults.enable_heading_ids),
        enable_smart_dashes: cfg
            .enable_smart_dashes
            .unwrap_or(defaults.enable_smart_dashes),
        hard_line_breaks: cfg.hard_line_breaks.unwrap_or(defaults.hard_line_breaks),
        allow_unsafe_urls: cfg.allow_unsafe_urls.unwrap_or(defaults.allow_unsafe_urls),
        table_wrapper_class: cfg
            .table_wrapper_class
            .unwrap_or(defaults.table_wrapper_class),
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ============================================================================
// Render API Types
// ============================================================================

/// Heading metadata extracted from the document.
#[derive(Debug, Clone, Serialize)]
pub struct HeadingEntry {
    /// Heading depth (1-6).
    pub depth: u8,
    /// Slugified identifier.
    pub slug: String,
    /// Visible heading text.
    pub text: String,
}

/// Non-fatal render warning.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningEntry {
    /// `malformed_table` or `unsafe_url`.
    pub warning_type: String,
    /// Source line of the warning.
    pub line: usize,
    /// Human-readable message.
    pub message: String,
}

/// Result of rendering an article body.
#[derive(Debug, Clone, Serialize)]
pub struct RenderResult {
    /// HTML fragments joined with newlines.
    pub html: String,
    /// Headings in document order.
    pub headings: Vec<HeadingEntry>,
    /// Warnings ordered by line.
    pub warnings: Vec<WarningEntry>,
}

impl From<RenderedArticle> for RenderResult {
    fn from(rendered: RenderedArticle) -> Self {
        Self {
            html: rendered.html,
            headings: rendered
                .headings
                .into_iter()
                .map(|h| HeadingEntry {
                    depth: h.depth,
                    slug: h.slug,
                    text: h.text,
                })
                .collect(),
            warnings: rendered
                .warnings
                .iter()
                .map(|w| WarningEntry {
                    warning_type: w.kind().to_string(),
                    line: w.location().line,
                    message: w.to_string(),
                })
                .collect(),
        }
    }
}

/// Parsed front matter plus any extraction errors.
#[derive(Debug, Clone, Serialize)]
pub struct FrontmatterResult {
    /// Front matter mapping (empty when absent or invalid).
    pub frontmatter: serde_json::Value,
    /// Extraction errors.
    pub errors: Vec<String>,
}

// ============================================================================
// Render API
// ============================================================================

/// Renders an article body to HTML.
///
/// `input` may be `undefined`/`null`, which renders as an empty string.
/// `config` is an optional object with camelCase or snake_case option names.
#[wasm_bindgen(js_name = renderArticleBody)]
pub fn render_article_body(input: Option<String>, config: JsValue) -> String {
    let options = build_render_options(parse_config(config));
    quire_html::render_article(input.as_deref().unwrap_or_default(), &options).html
}

/// Renders an article body and returns `{ html, headings, warnings }`.
#[wasm_bindgen(js_name = renderArticle)]
pub fn render_article(input: Option<String>, config: JsValue) -> Result<JsValue, JsError> {
    let options = build_render_options(parse_config(config));
    let rendered = quire_html::render_article(input.as_deref().unwrap_or_default(), &options);
    to_js(&RenderResult::from(rendered))
}

/// Extracts YAML front matter and returns `{ frontmatter, errors }`.
#[wasm_bindgen(js_name = parseFrontmatter)]
pub fn parse_frontmatter(content: &str) -> Result<JsValue, JsError> {
    let result = match quire_core::extract_frontmatter(content) {
        Ok(extraction) => FrontmatterResult {
            frontmatter: extraction.value,
            errors: Vec::new(),
        },
        Err(err) => FrontmatterResult {
            frontmatter: serde_json::Value::Object(Default::default()),
            errors: vec![err.to_string()],
        },
    };
    to_js(&result)
}

/// Formats a front matter date as `Month D, YYYY`; unparseable input is returned unchanged.
#[wasm_bindgen(js_name = formatDisplayDate)]
pub fn format_display_date(raw: &str) -> String {
    quire_core::format_display_date(raw)
}
