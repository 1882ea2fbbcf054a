#![deny(missing_docs)]
//! quire core: document normalization, block segmentation, front matter, and
//! the file-based article repository.

/// File-based article repository and date helpers.
pub mod content;
/// Content errors and render diagnostics.
pub mod error;
/// YAML front matter extraction.
pub mod frontmatter;
/// Line-ending, escape and arrow normalization.
pub mod normalize;
/// Block segmentation and classification.
pub mod segment;
/// Heading slug generation.
pub mod slug;

pub use content::{
    Article, ContentDefaults, ContentRepository, FsContentRepository, format_display_date,
    parse_date, sort_newest_first,
};
pub use error::{ContentError, Diagnostics, RenderWarning, SourceLocation};
pub use frontmatter::{Frontmatter, FrontmatterError, extract_frontmatter};
pub use normalize::normalize;
pub use segment::{
    Alignment, Block, BlockKind, Blocks, ListItem, ListModel, MarkerFamily, TableModel,
    heading_text, segment,
};
pub use slug::{Slugger, slugify};
