//! Block segmentation.
//!
//! [`segment`] splits normalized text on blank lines, classifies every
//! candidate block, and merges adjacent list blocks of the same marker family.
//! The result is a lazy iterator; nothing is buffered beyond one block of
//! lookahead.

mod classify;
mod types;

pub use classify::heading_text;
pub use types::{Alignment, Block, BlockKind, ListItem, ListModel, MarkerFamily, TableModel};

use crate::error::{Diagnostics, RenderWarning, SourceLocation};
use classify::{Chunk, classify, rejected_table_separator};
use std::iter::Enumerate;
use std::str::Split;

/// Segments normalized text into typed blocks.
///
/// ```
/// use quire_core::segment::{segment, BlockKind};
///
/// let kinds: Vec<_> = segment("# Title\n\n- a\n\n- b\n\nText")
///     .map(|block| block.kind.name())
///     .collect();
/// assert_eq!(kinds, ["heading", "unordered_list", "paragraph"]);
/// ```
pub fn segment(text: &str) -> Blocks<'_> {
    Blocks {
        source: Classified {
            chunks: Chunks {
                lines: text.split('\n').enumerate(),
            },
            pending: None,
            diagnostics: Diagnostics::new(),
        },
        lookahead: None,
    }
}

/// Lazy sequence of blocks returned by [`segment`].
pub struct Blocks<'a> {
    source: Classified<'a>,
    lookahead: Option<Block>,
}

impl Blocks<'_> {
    /// Consumes the iterator and returns its warnings.
    pub fn into_diagnostics(self) -> Diagnostics {
        self.source.diagnostics
    }
}

impl Iterator for Blocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        let mut block = self.lookahead.take().or_else(|| self.source.next_block())?;
        if block.marker_family().is_none() {
            return Some(block);
        }

        while let Some(next) = self.source.next_block() {
            if let Err(other) = block.absorb(next) {
                self.lookahead = Some(other);
                break;
            }
        }
        Some(block)
    }
}

/// Classifies chunks one at a time. A multi-line heading chunk is split: the
/// heading keeps its first line and the rest is classified as its own chunk.
struct Classified<'a> {
    chunks: Chunks<'a>,
    pending: Option<Chunk>,
    diagnostics: Diagnostics,
}

impl Classified<'_> {
    fn next_block(&mut self) -> Option<Block> {
        let chunk = self.pending.take().or_else(|| self.chunks.next())?;
        let kind = classify(&chunk);

        match kind {
            BlockKind::Heading(_) => {
                if let Some((first, rest)) = chunk.text.split_once('\n') {
                    let rest = rest.trim();
                    if !rest.is_empty() {
                        self.pending = Some(Chunk {
                            line: chunk.line + 1,
                            text: rest.to_string(),
                        });
                    }
                    return Some(Block {
                        line: chunk.line,
                        raw: first.trim_end().to_string(),
                        kind,
                    });
                }
            }
            BlockKind::Paragraph => {
                if let Some(separator) = rejected_table_separator(&chunk) {
                    log::debug!(
                        "line {}: table separator '{}' rejected, rendering as paragraph",
                        chunk.line,
                        separator
                    );
                    self.diagnostics.add_warning(RenderWarning::MalformedTable {
                        location: SourceLocation::line(chunk.line),
                        separator: separator.to_string(),
                    });
                }
            }
            _ => {}
        }

        Some(Block {
            line: chunk.line,
            raw: chunk.text,
            kind,
        })
    }
}

/// Groups lines into trimmed, non-empty candidate blocks.
struct Chunks<'a> {
    lines: Enumerate<Split<'a, char>>,
}

impl Iterator for Chunks<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        let (index, first) = self.lines.by_ref().find(|(_, line)| !is_blank(line))?;
        let mut text = first.to_string();
        for (_, line) in self.lines.by_ref() {
            if is_blank(line) {
                break;
            }
            text.push('\n');
            text.push_str(line);
        }

        Some(Chunk {
            line: index + 1,
            text: text.trim().to_string(),
        })
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
