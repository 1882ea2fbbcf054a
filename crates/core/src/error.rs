use std::path::PathBuf;

use thiserror::Error;

use crate::frontmatter::FrontmatterError;

/// Position inside a source document (1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Location of the first column of a line.
    pub fn line(line: usize) -> Self {
        Self::new(line, 1)
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors raised while loading articles from a content repository.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Reading the content directory or an article file failed.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The article's front matter block was invalid.
    #[error("Invalid front matter in {}: {source}", path.display())]
    Frontmatter {
        /// Article file path.
        path: PathBuf,
        /// Front matter extraction error.
        #[source]
        source: FrontmatterError,
    },
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Non-fatal findings reported while rendering a document.
///
/// None of these stop rendering; the affected content falls back to a plainer
/// rendition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderWarning {
    /// A block looked like a table but its separator row was invalid, so it was
    /// rendered as a paragraph.
    MalformedTable {
        /// Location of the block's first line.
        location: SourceLocation,
        /// The offending separator line.
        separator: String,
    },
    /// A link or image URL used a disallowed scheme and was not emitted.
    UnsafeUrl {
        /// Location of the line containing the URL.
        location: SourceLocation,
        /// The rejected URL, as written.
        url: String,
    },
}

impl RenderWarning {
    /// Get the location of this warning
    pub fn location(&self) -> &SourceLocation {
        match self {
            RenderWarning::MalformedTable { location, .. } => location,
            RenderWarning::UnsafeUrl { location, .. } => location,
        }
    }

    /// Stable snake_case identifier for host bindings.
    pub fn kind(&self) -> &'static str {
        match self {
            RenderWarning::MalformedTable { .. } => "malformed_table",
            RenderWarning::UnsafeUrl { .. } => "unsafe_url",
        }
    }
}

impl std::fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderWarning::MalformedTable {
                location,
                separator,
            } => write!(
                f,
                "{}: table separator row '{}' is invalid, rendered as paragraph",
                location, separator
            ),
            RenderWarning::UnsafeUrl { location, url } => {
                write!(f, "{}: URL '{}' uses a disallowed scheme", location, url)
            }
        }
    }
}

/// Collection of render diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// List of non-fatal warnings, in the order they were found.
    pub warnings: Vec<RenderWarning>,
}

impl Diagnostics {
    /// Create a new empty diagnostics collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning to the diagnostics collection
    pub fn add_warning(&mut self, warning: RenderWarning) {
        self.warnings.push(warning);
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Moves all warnings of `other` into this collection.
    pub fn extend(&mut self, other: Diagnostics) {
        self.warnings.extend(other.warnings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_display_includes_location() {
        let warning = RenderWarning::UnsafeUrl {
            location: SourceLocation::line(4),
            url: "javascript:alert(1)".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "4:1: URL 'javascript:alert(1)' uses a disallowed scheme"
        );
        assert_eq!(warning.kind(), "unsafe_url");
    }

    #[test]
    fn diagnostics_collects_in_order() {
        let mut diagnostics = Diagnostics::new();
        assert!(!diagnostics.has_warnings());
        diagnostics.add_warning(RenderWarning::MalformedTable {
            location: SourceLocation::line(1),
            separator: "| a | b |".to_string(),
        });
        diagnostics.add_warning(RenderWarning::UnsafeUrl {
            location: SourceLocation::line(3),
            url: "vbscript:x".to_string(),
        });
        assert!(diagnostics.has_warnings());
        assert_eq!(diagnostics.warnings[0].location().line, 1);
        assert_eq!(diagnostics.warnings[1].location().line, 3);
    }
}
