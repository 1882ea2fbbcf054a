#![deny(missing_docs)]
//! quire html: renders normalized markdown articles to HTML fragments.
//!
//! The pipeline is normalize → segment → render each block → join with `\n`.
//! Rendering never fails; malformed input falls back to paragraphs and is
//! reported through [`RenderedArticle::warnings`].

mod context;
/// HTML escaping and URL policy.
pub mod escape;
/// Inline formatting of a single line.
pub mod inline;
/// Rendering options.
pub mod options;
mod render;
/// Render result types.
pub mod types;
/// Arrow and dash substitutions.
pub mod typography;

pub use escape::{UrlContext, encode_attr, escape_html, is_safe_url, strip_tags};
pub use inline::format_inline;
pub use options::RenderOptions;
pub use types::{HeadingEntry, RenderedArticle};
pub use typography::apply_typography;

use context::RenderContext;
use quire_core::{normalize, segment};
use render::render_block;

/// Renders an article body with the default options.
///
/// ```
/// use quire_html::render_article_body;
///
/// assert_eq!(render_article_body("### Heading"), "<h3>Heading</h3>");
/// assert_eq!(render_article_body(""), "");
/// ```
pub fn render_article_body(input: &str) -> String {
    render_article(input, &RenderOptions::default()).html
}

/// Renders an article body and collects headings and warnings.
pub fn render_article(input: &str, options: &RenderOptions) -> RenderedArticle {
    let text = normalize(input);
    let mut blocks = segment(&text);
    let mut ctx = RenderContext::new(options);

    let fragments = blocks
        .by_ref()
        .fold(Vec::new(), |mut fragments, block| {
            let html = render_block(&block, &mut ctx);
            if !html.is_empty() {
                fragments.push(html);
            }
            fragments
        });

    ctx.finish(fragments.join("\n"), blocks.into_diagnostics())
}
