//! File-backed article store exposed to JavaScript.

use crate::convert::{
    convert_article, convert_error, convert_rendered, to_content_defaults, to_render_options,
};
use crate::types::{ArticleDefaults, ArticleRecord, RenderConfig, RenderResult};
use napi_derive::napi;
use quire_core::{ContentRepository, FsContentRepository};
use quire_html::{RenderOptions, render_article};

const DEFAULT_LATEST_COUNT: u32 = 3;

/// Articles stored as `<slug>.md` / `<slug>.mdx` files in one directory.
#[napi]
pub struct ArticleStore {
    repository: FsContentRepository,
    options: RenderOptions,
}

#[napi]
impl ArticleStore {
    /// Creates a store reading from `root`. The directory may not exist yet.
    #[napi(constructor)]
    pub fn new(
        root: String,
        defaults: Option<ArticleDefaults>,
        config: Option<RenderConfig>,
    ) -> Self {
        Self {
            repository: FsContentRepository::with_defaults(root, to_content_defaults(defaults)),
            options: to_render_options(config),
        }
    }

    /// Content directory this store reads from.
    #[napi(getter)]
    pub fn root(&self) -> String {
        self.repository.root().to_string_lossy().into_owned()
    }

    /// Loads one article, `null` when it does not exist.
    #[napi(js_name = "getArticle")]
    pub fn get_article(&self, slug: String) -> napi::Result<Option<ArticleRecord>> {
        let article = self.repository.get(&slug).map_err(convert_error)?;
        Ok(article.map(convert_article))
    }

    /// All articles, newest first.
    #[napi(js_name = "getAllArticles")]
    pub fn get_all_articles(&self) -> napi::Result<Vec<ArticleRecord>> {
        let articles = self.repository.all().map_err(convert_error)?;
        Ok(articles.into_iter().map(convert_article).collect())
    }

    /// The `count` newest articles (3 by default).
    #[napi(js_name = "getLatestArticles")]
    pub fn get_latest_articles(&self, count: Option<u32>) -> napi::Result<Vec<ArticleRecord>> {
        let count = count.unwrap_or(DEFAULT_LATEST_COUNT) as usize;
        let articles = self.repository.latest(count).map_err(convert_error)?;
        Ok(articles.into_iter().map(convert_article).collect())
    }

    /// Renders the body of one article, `null` when it does not exist.
    #[napi(js_name = "renderArticle")]
    pub fn render_article(&self, slug: String) -> napi::Result<Option<RenderResult>> {
        let article = self.repository.get(&slug).map_err(convert_error)?;
        Ok(article.map(|article| {
            convert_rendered(render_article(&article.content, &self.options))
        }))
    }
}
