//! Render results.

use quire_core::RenderWarning;
use serde::Serialize;

/// Heading metadata collected while rendering.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct HeadingEntry {
    /// Heading depth (1-6).
    pub depth: u8,
    /// Slug, unique within the document.
    pub slug: String,
    /// Visible heading text.
    pub text: String,
}

/// Output of [`render_article`](crate::render_article).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArticle {
    /// HTML fragments joined with newlines.
    pub html: String,
    /// Headings in document order.
    pub headings: Vec<HeadingEntry>,
    /// Non-fatal warnings, ordered by line.
    pub warnings: Vec<RenderWarning>,
}
