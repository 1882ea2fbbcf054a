use crate::types::{
    ArticleDefaults, ArticleRecord, HeadingEntry, RenderConfig, RenderResult, WarningEntry,
};
use napi::{Error, Status};
use quire_core::{Article, ContentDefaults, ContentError, RenderWarning};
use quire_html::{RenderOptions, RenderedArticle};

/// Converts `RenderConfig` to `RenderOptions`.
pub fn to_render_options(config: Option<RenderConfig>) -> RenderOptions {
    let defaults = RenderOptions::default();
    match config {
        Some(c) => RenderOptions {
            enable_lazy_images: c.enable_lazy_images.unwrap_or(defaults.enable_lazy_images),
            enable_image_captions: c
                .enable_image_captions
                .unwrap_or(defaults.enable_image_captions),
            open_links_in_new_tab: c
                .open_links_in_new_tab
                .unwrap_or(defaults.open_links_in_new_tab),
            enable_heading_ids: c.enable_heading_ids.unwrap_or(defaults.enable_heading_ids),
            enable_smart_dashes: c
                .enable_smart_dashes
                .unwrap_or(defaults.enable_smart_dashes),
            hard_line_breaks: c.hard_line_breaks.unwrap_or(defaults.hard_line_breaks),
            allow_unsafe_urls: c.allow_unsafe_urls.unwrap_or(defaults.allow_unsafe_urls),
            table_wrapper_class: c
                .table_wrapper_class
                .unwrap_or(defaults.table_wrapper_class),
        },
        None => defaults,
    }
}

/// Converts `ArticleDefaults` to `ContentDefaults`.
pub fn to_content_defaults(defaults: Option<ArticleDefaults>) -> ContentDefaults {
    let base = ContentDefaults::default();
    let Some(d) = defaults else {
        return base;
    };
    ContentDefaults {
        title: d.title.unwrap_or(base.title),
        description: d.description.unwrap_or(base.description),
        category: d.category.unwrap_or(base.category),
        read_time: d.read_time.unwrap_or(base.read_time),
        image: d.image.unwrap_or(base.image),
    }
}

fn convert_warning(warning: &RenderWarning) -> WarningEntry {
    WarningEntry {
        warning_type: warning.kind().to_string(),
        line: u32::try_from(warning.location().line).unwrap_or(u32::MAX),
        message: warning.to_string(),
    }
}

/// Converts a `RenderedArticle` to a `RenderResult`.
pub fn convert_rendered(rendered: RenderedArticle) -> RenderResult {
    RenderResult {
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
        warnings: rendered.warnings.iter().map(convert_warning).collect(),
    }
}

/// Converts an `Article` to an `ArticleRecord`.
pub fn convert_article(article: Article) -> ArticleRecord {
    let display_date = article.display_date();
    ArticleRecord {
        slug: article.slug,
        title: article.title,
        description: article.description,
        category: article.category,
        read_time: article.read_time,
        image: article.image,
        content: article.content,
        date: article.date,
        display_date,
    }
}

/// Maps repository errors to JS errors.
pub fn convert_error(err: ContentError) -> Error {
    match err {
        ContentError::Io { .. } => Error::from_reason(err.to_string()),
        ContentError::Frontmatter { .. } => Error::new(Status::InvalidArg, err.to_string()),
    }
}
