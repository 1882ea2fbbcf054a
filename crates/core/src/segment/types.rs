//! Block and block-model types produced by the segmenter.

/// A contiguous run of non-blank lines and its inferred kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Source line (1-indexed) of the block's first line.
    pub line: usize,
    /// Raw block text, trimmed. Merged lists join their parts with a blank line.
    pub raw: String,
    /// Inferred kind.
    pub kind: BlockKind,
}

/// Classification of a block by its leading syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// ATX heading with its level (1-6).
    Heading(u8),
    /// Horizontal rule (`---`, `***`, `___`).
    ThematicBreak,
    /// Block whose first line starts with `>`.
    Blockquote,
    /// Pipe table with a validated separator row.
    Table(TableModel),
    /// Bullet list (`-`, `*`, `•`).
    UnorderedList(ListModel),
    /// Numbered list (`1.`).
    OrderedList(ListModel),
    /// Anything else.
    Paragraph,
}

impl BlockKind {
    /// Short snake_case name of the kind, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Heading(_) => "heading",
            BlockKind::ThematicBreak => "thematic_break",
            BlockKind::Blockquote => "blockquote",
            BlockKind::Table(_) => "table",
            BlockKind::UnorderedList(_) => "unordered_list",
            BlockKind::OrderedList(_) => "ordered_list",
            BlockKind::Paragraph => "paragraph",
        }
    }
}

impl Block {
    /// Marker family of a list block, `None` for every other kind.
    pub fn marker_family(&self) -> Option<MarkerFamily> {
        match self.kind {
            BlockKind::UnorderedList(_) => Some(MarkerFamily::Bullet),
            BlockKind::OrderedList(_) => Some(MarkerFamily::Numbered),
            _ => None,
        }
    }

    /// Appends the items of a following list block of the same family.
    ///
    /// Returns the other block untouched when the families differ.
    pub(crate) fn absorb(&mut self, other: Block) -> Result<(), Block> {
        match (&mut self.kind, other.kind) {
            (BlockKind::UnorderedList(list), BlockKind::UnorderedList(next))
            | (BlockKind::OrderedList(list), BlockKind::OrderedList(next)) => {
                list.items.extend(next.items);
                self.raw.push_str("\n\n");
                self.raw.push_str(&other.raw);
                Ok(())
            }
            (_, kind) => Err(Block { kind, ..other }),
        }
    }
}

/// Class of list-item prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerFamily {
    /// `-`, `*` or `•` followed by whitespace.
    Bullet,
    /// Digits, a period, then whitespace.
    Numbered,
}

/// Items of one logical list, markers stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListModel {
    /// Items in source order.
    pub items: Vec<ListItem>,
    /// Number of the first item of a numbered list.
    pub start: Option<u64>,
}

/// One list item, continuation lines joined with a space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Source line (1-indexed) of the item's marker.
    pub line: usize,
    /// Item text without its marker.
    pub text: String,
}

/// Column alignment declared in a table separator row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    /// No colon.
    #[default]
    None,
    /// `:---`
    Left,
    /// `:---:`
    Center,
    /// `---:`
    Right,
}

impl Alignment {
    pub(crate) fn from_separator_cell(cell: &str) -> Self {
        match (cell.starts_with(':'), cell.ends_with(':') && cell.len() > 1) {
            (true, true) => Alignment::Center,
            (true, false) => Alignment::Left,
            (false, true) => Alignment::Right,
            (false, false) => Alignment::None,
        }
    }

    /// Value for an HTML `align` attribute, if any.
    pub fn as_attr(self) -> Option<&'static str> {
        match self {
            Alignment::None => None,
            Alignment::Left => Some("left"),
            Alignment::Center => Some("center"),
            Alignment::Right => Some("right"),
        }
    }
}

/// Header, alignments and body rows of a pipe table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableModel {
    /// Header cells; their count is the table's column count.
    pub header: Vec<String>,
    /// Alignment per separator cell.
    pub alignments: Vec<Alignment>,
    /// Body rows. Rows may be shorter or longer than the header.
    pub rows: Vec<Vec<String>>,
}

impl TableModel {
    /// Number of columns, taken from the header row.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Alignment of a column, `Alignment::None` past the separator's width.
    pub fn alignment(&self, column: usize) -> Alignment {
        self.alignments.get(column).copied().unwrap_or_default()
    }
}
