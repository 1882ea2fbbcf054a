#![deny(missing_docs)]
//! Node.js bindings that surface quire's Rust implementation.

use napi_derive::napi;
use quire_core::extract_frontmatter;
use rayon::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

/// Batch processing types.
pub mod batch;
/// Conversions between binding and library types.
mod convert;
/// File-backed article store.
pub mod store;
/// NAPI-exposed data structures.
pub mod types;
/// Utility helpers.
mod utils;
pub use batch::*;
pub use store::ArticleStore;
pub use types::*;
use convert::{convert_rendered, to_render_options};
use utils::{elapsed_ms, empty_frontmatter};

/// Renders an article body to HTML. A missing body renders as an empty string.
#[napi(js_name = "renderArticleBody")]
pub fn render_article_body(input: Option<String>, config: Option<RenderConfig>) -> String {
    let options = to_render_options(config);
    quire_html::render_article(input.as_deref().unwrap_or_default(), &options).html
}

/// Renders an article body and returns headings and warnings alongside the HTML.
#[napi(js_name = "renderArticle")]
pub fn render_article(input: Option<String>, config: Option<RenderConfig>) -> RenderResult {
    let options = to_render_options(config);
    convert_rendered(quire_html::render_article(
        input.as_deref().unwrap_or_default(),
        &options,
    ))
}

/// Extracts YAML front matter without rendering the document.
#[napi]
pub fn parse_frontmatter(content: String) -> napi::Result<FrontmatterResult> {
    match extract_frontmatter(&content) {
        Ok(result) => Ok(FrontmatterResult {
            frontmatter: result.value,
            errors: Vec::new(),
        }),
        Err(err) => Ok(FrontmatterResult {
            frontmatter: empty_frontmatter(),
            errors: vec![err.to_string()],
        }),
    }
}

/// Formats a front matter date as `Month D, YYYY`; unparseable dates come back unchanged.
#[napi(js_name = "formatDisplayDate")]
pub fn format_display_date(raw: String) -> String {
    quire_core::format_display_date(&raw)
}

/// Renders many article bodies in parallel.
///
/// Documents share nothing, so they are rendered on a rayon pool (sized by
/// `maxThreads` when given). Results keep the input order.
#[napi(js_name = "renderBatch")]
pub fn render_batch(
    inputs: Vec<BatchInput>,
    options: Option<BatchOptions>,
) -> napi::Result<BatchProcessingResult> {
    let start = Instant::now();
    let opts = options.unwrap_or_default();
    let render_options = to_render_options(opts.config);

    // Configure thread pool if max_threads is specified
    let pool = if let Some(max_threads) = opts.max_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads as usize)
            .build()
            .ok()
    } else {
        None
    };

    let total = inputs.len() as u32;
    let with_warnings = AtomicU32::new(0);

    let process_input = |input: BatchInput| -> BatchResult {
        let rendered = quire_html::render_article(&input.source, &render_options);
        if !rendered.warnings.is_empty() {
            with_warnings.fetch_add(1, Ordering::Relaxed);
        }
        BatchResult {
            id: input.id,
            result: convert_rendered(rendered),
        }
    };

    let results: Vec<BatchResult> = if let Some(pool) = pool {
        pool.install(|| inputs.into_par_iter().map(process_input).collect())
    } else {
        inputs.into_par_iter().map(process_input).collect()
    };

    Ok(BatchProcessingResult {
        results,
        stats: BatchStats {
            total,
            with_warnings: with_warnings.load(Ordering::Relaxed),
            processing_time_ms: elapsed_ms(start),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value as JsonValue;

    #[test]
    fn parses_yaml_frontmatter_block() {
        let input = "---\ntitle: Test\n---\nBody".to_string();
        let result = parse_frontmatter(input).unwrap();
        assert!(result.errors.is_empty());
        let title = result
            .frontmatter
            .get("title")
            .and_then(JsonValue::as_str)
            .unwrap();
        assert_eq!(title, "Test");
    }

    #[test]
    fn returns_empty_object_when_no_frontmatter() {
        let result = parse_frontmatter("# Heading".to_string()).unwrap();
        assert!(result.errors.is_empty());
        assert_eq!(result.frontmatter, empty_frontmatter());
    }

    #[test]
    fn reports_unterminated_frontmatter() {
        let result = parse_frontmatter("---\ntitle: Test\n".to_string()).unwrap();
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.frontmatter, empty_frontmatter());
    }

    #[test]
    fn missing_body_renders_empty() {
        assert_eq!(render_article_body(None, None), "");
    }

    #[test]
    fn config_reaches_renderer() {
        let config = RenderConfig {
            enable_heading_ids: Some(true),
            ..RenderConfig::default()
        };
        assert_eq!(
            render_article_body(Some("## Fees".to_string()), Some(config)),
            "<h2 id=\"fees\">Fees</h2>"
        );
    }

    #[test]
    fn render_article_reports_warnings() {
        let result = render_article(Some("[x](javascript:alert(1))".to_string()), None);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].warning_type, "unsafe_url");
        assert_eq!(result.warnings[0].line, 1);
    }

    #[test]
    fn batch_keeps_input_order() {
        let inputs: Vec<BatchInput> = (0..20)
            .map(|i| BatchInput {
                id: format!("doc-{i}"),
                source: format!("# Title {i}"),
            })
            .collect();
        let output = render_batch(
            inputs,
            Some(BatchOptions {
                max_threads: Some(2),
                config: None,
            }),
        )
        .unwrap();

        assert_eq!(output.stats.total, 20);
        assert_eq!(output.stats.with_warnings, 0);
        assert_eq!(output.results[7].id, "doc-7");
        assert_eq!(output.results[7].result.html, "<h1>Title 7</h1>");
    }

    #[test]
    fn display_date() {
        assert_eq!(format_display_date("2024-01-15".to_string()), "January 15, 2024");
        assert_eq!(format_display_date("soon".to_string()), "soon");
    }
}
