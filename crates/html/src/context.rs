//! Per-render state: options, heading slugs and diagnostics.

use quire_core::{Diagnostics, Slugger};

use crate::escape::strip_tags;
use crate::inline;
use crate::options::RenderOptions;
use crate::types::{HeadingEntry, RenderedArticle};

/// State threaded through the block renderers of one render call.
pub(crate) struct RenderContext<'a> {
    options: &'a RenderOptions,
    slugger: Slugger,
    headings: Vec<HeadingEntry>,
    diagnostics: Diagnostics,
}

impl<'a> RenderContext<'a> {
    pub(crate) fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            slugger: Slugger::new(),
            headings: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    pub(crate) fn options(&self) -> &RenderOptions {
        self.options
    }

    /// Inline-formats one line of text found at `line`.
    pub(crate) fn format_inline(&mut self, text: &str, line: usize) -> String {
        inline::format(text, self.options, line, &mut self.diagnostics)
    }

    /// Records a rendered heading and returns its slug.
    pub(crate) fn record_heading(&mut self, depth: u8, html: &str) -> String {
        let text = strip_tags(html);
        let slug = self.slugger.next_slug(&text);
        self.headings.push(HeadingEntry {
            depth,
            slug: slug.clone(),
            text,
        });
        slug
    }

    /// Finishes the render, merging segmentation warnings with the ones
    /// recorded here.
    pub(crate) fn finish(self, html: String, segmentation: Diagnostics) -> RenderedArticle {
        let mut diagnostics = segmentation;
        diagnostics.extend(self.diagnostics);
        let mut warnings = diagnostics.warnings;
        warnings.sort_by_key(|warning| warning.location().line);

        RenderedArticle {
            html,
            headings: self.headings,
            warnings,
        }
    }
}
