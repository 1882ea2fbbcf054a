//! Ordered block classification.
//!
//! Patterns overlap (a table row contains `|` and `-`, a rule is also a run of
//! list markers), so classifiers run in a fixed order and the first match wins.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{Alignment, BlockKind, ListItem, ListModel, TableModel};

static TABLE_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\|?[\s\-:|]+\|?$").expect("valid table separator pattern"));
static THEMATIC_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\*{3,}|-{3,}|_{3,})$").expect("valid thematic break pattern"));
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})[ \t]+\S").expect("valid heading pattern"));
static BULLET_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*•]\s+(.*)$").expect("valid bullet item pattern"));
static NUMBERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\.\s+(.*)$").expect("valid numbered item pattern"));

/// A candidate block: trimmed text plus the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Chunk {
    pub(crate) line: usize,
    pub(crate) text: String,
}

impl Chunk {
    pub(crate) fn first_line(&self) -> &str {
        self.text.lines().next().unwrap_or_default()
    }

    fn second_line(&self) -> Option<&str> {
        self.text.lines().nth(1)
    }

    fn is_single_line(&self) -> bool {
        !self.text.contains('\n')
    }
}

type Classifier = fn(&Chunk) -> Option<BlockKind>;

/// Classifiers in precedence order; `Paragraph` is the fallback.
const CLASSIFIERS: &[(&str, Classifier)] = &[
    ("table", table),
    ("thematic_break", thematic_break),
    ("heading", heading),
    ("blockquote", blockquote),
    ("unordered_list", unordered_list),
    ("ordered_list", ordered_list),
];

/// Classifies a chunk. Never fails: unmatched chunks are paragraphs.
pub(crate) fn classify(chunk: &Chunk) -> BlockKind {
    CLASSIFIERS
        .iter()
        .find_map(|(_, classifier)| classifier(chunk))
        .unwrap_or(BlockKind::Paragraph)
}

/// Returns the separator line when a chunk starts like a table (pipes on both
/// of its first two lines) but the separator row did not validate.
pub(crate) fn rejected_table_separator(chunk: &Chunk) -> Option<&str> {
    let separator = chunk.second_line()?;
    (chunk.first_line().contains('|') && separator.contains('|') && !is_separator(separator))
        .then_some(separator.trim())
}

fn is_separator(line: &str) -> bool {
    let line = line.trim();
    line.contains('-') && line.contains('|') && TABLE_SEPARATOR.is_match(line)
}

fn table(chunk: &Chunk) -> Option<BlockKind> {
    let mut lines = chunk.text.lines();
    let header = lines.next()?;
    let separator = lines.next()?;
    if !header.contains('|') || !is_separator(separator) {
        return None;
    }

    Some(BlockKind::Table(TableModel {
        header: split_cells(header),
        alignments: split_cells(separator)
            .iter()
            .map(|cell| Alignment::from_separator_cell(cell))
            .collect(),
        rows: lines
            .filter(|line| !line.trim().is_empty())
            .map(split_cells)
            .collect(),
    }))
}

/// Splits a table row into trimmed cells, ignoring one leading and one
/// trailing pipe.
pub(crate) fn split_cells(line: &str) -> Vec<String> {
    let mut row = line.trim();
    if let Some(stripped) = row.strip_prefix('|') {
        row = stripped;
    }
    if let Some(stripped) = row.strip_suffix('|') {
        row = stripped;
    }
    row.split('|').map(|cell| cell.trim().to_string()).collect()
}

fn thematic_break(chunk: &Chunk) -> Option<BlockKind> {
    (chunk.is_single_line() && THEMATIC_BREAK.is_match(&chunk.text))
        .then_some(BlockKind::ThematicBreak)
}

fn heading(chunk: &Chunk) -> Option<BlockKind> {
    let captures = HEADING.captures(chunk.first_line())?;
    Some(BlockKind::Heading(captures[1].len() as u8))
}

fn blockquote(chunk: &Chunk) -> Option<BlockKind> {
    chunk
        .text
        .starts_with('>')
        .then_some(BlockKind::Blockquote)
}

fn unordered_list(chunk: &Chunk) -> Option<BlockKind> {
    BULLET_ITEM.is_match(chunk.first_line()).then(|| {
        BlockKind::UnorderedList(ListModel {
            items: collect_items(chunk, |line| {
                BULLET_ITEM.captures(line).map(|c| c[1].to_string())
            }),
            start: None,
        })
    })
}

fn ordered_list(chunk: &Chunk) -> Option<BlockKind> {
    let first = NUMBERED_ITEM.captures(chunk.first_line())?;
    let start = first[1].parse::<u64>().ok();
    Some(BlockKind::OrderedList(ListModel {
        items: collect_items(chunk, |line| {
            NUMBERED_ITEM.captures(line).map(|c| c[2].to_string())
        }),
        start,
    }))
}

/// Groups lines into items: a line with a marker starts an item, any other
/// line continues the previous one.
fn collect_items(chunk: &Chunk, item_text: impl Fn(&str) -> Option<String>) -> Vec<ListItem> {
    let mut items: Vec<ListItem> = Vec::new();
    for (offset, line) in chunk.text.lines().map(str::trim).enumerate() {
        let line_number = chunk.line + offset;
        match (item_text(line), items.last_mut()) {
            (Some(text), _) => items.push(ListItem {
                line: line_number,
                text: text.trim().to_string(),
            }),
            (None, Some(current)) => {
                if !current.text.is_empty() {
                    current.text.push(' ');
                }
                current.text.push_str(line);
            }
            (None, None) => items.push(ListItem {
                line: line_number,
                text: line.to_string(),
            }),
        }
    }
    items
}

/// Strips the `#` run, surrounding whitespace and an optional closing `#`
/// sequence from a heading line.
pub fn heading_text(line: &str) -> &str {
    let text = line.trim_start_matches('#').trim();
    match text.trim_end_matches('#') {
        stripped
            if stripped.len() < text.len()
                && (stripped.is_empty() || stripped.ends_with([' ', '\t'])) =>
        {
            stripped.trim_end()
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_texts(list: &ListModel) -> Vec<&str> {
        list.items.iter().map(|item| item.text.as_str()).collect()
    }

    fn chunk(text: &str) -> Chunk {
        Chunk {
            line: 1,
            text: text.to_string(),
        }
    }

    #[test]
    fn table_wins_over_list_and_rule() {
        let kind = classify(&chunk("- a | b\n|---|---|"));
        assert!(matches!(kind, BlockKind::Table(_)), "{kind:?}");
    }

    #[test]
    fn table_model_keeps_ragged_rows() {
        let text = "| a | b |\n| :-- | --: |\n| 1 |\n| 2 | 3 | 4 |";
        let BlockKind::Table(table) = classify(&chunk(text)) else {
            panic!("expected table");
        };
        assert_eq!(table.header, vec!["a", "b"]);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.alignment(0), Alignment::Left);
        assert_eq!(table.alignment(1), Alignment::Right);
        assert_eq!(table.alignment(5), Alignment::None);
        assert_eq!(table.rows, vec![vec!["1"], vec!["2", "3", "4"]]);
    }

    #[test]
    fn separator_without_dashes_is_paragraph() {
        let input = chunk("| a | b |\n| : | : |");
        assert_eq!(classify(&input), BlockKind::Paragraph);
        assert_eq!(rejected_table_separator(&input), Some("| : | : |"));
    }

    #[test]
    fn single_pipe_line_is_not_a_rejected_table() {
        let input = chunk("a | b\nplain text");
        assert_eq!(classify(&input), BlockKind::Paragraph);
        assert_eq!(rejected_table_separator(&input), None);
    }

    #[test]
    fn thematic_breaks() {
        for rule in ["---", "***", "___", "-----"] {
            assert_eq!(classify(&chunk(rule)), BlockKind::ThematicBreak, "{rule}");
        }
        assert_eq!(classify(&chunk("--")), BlockKind::Paragraph);
        assert!(matches!(
            classify(&chunk("- - -")),
            BlockKind::UnorderedList(_)
        ));
    }

    #[test]
    fn heading_levels() {
        assert_eq!(classify(&chunk("# One")), BlockKind::Heading(1));
        assert_eq!(classify(&chunk("###### Six")), BlockKind::Heading(6));
        assert_eq!(classify(&chunk("####### Seven")), BlockKind::Paragraph);
        assert_eq!(classify(&chunk("#hashtag")), BlockKind::Paragraph);
    }

    #[test]
    fn heading_text_strips_markers() {
        assert_eq!(heading_text("### Title"), "Title");
        assert_eq!(heading_text("## Title ##"), "Title");
        assert_eq!(heading_text("# C#"), "C#");
        assert_eq!(heading_text("# Issue #42"), "Issue #42");
    }

    #[test]
    fn list_items_and_continuations() {
        let text = "- one\n  still one\n* two\n• three";
        let BlockKind::UnorderedList(list) = classify(&chunk(text)) else {
            panic!("expected list");
        };
        assert_eq!(item_texts(&list), ["one still one", "two", "three"]);
        let lines: Vec<_> = list.items.iter().map(|item| item.line).collect();
        assert_eq!(lines, [1, 3, 4]);
        assert_eq!(list.start, None);
    }

    #[test]
    fn ordered_list_start() {
        let BlockKind::OrderedList(list) = classify(&chunk("3. three\n4. four")) else {
            panic!("expected ordered list");
        };
        assert_eq!(item_texts(&list), ["three", "four"]);
        assert_eq!(list.start, Some(3));
    }

    #[test]
    fn blockquote_and_paragraph() {
        assert_eq!(classify(&chunk("> quoted")), BlockKind::Blockquote);
        assert_eq!(classify(&chunk("plain")), BlockKind::Paragraph);
        assert_eq!(
            classify(&chunk("2024. A year")),
            BlockKind::OrderedList(ListModel {
                items: vec![ListItem {
                    line: 1,
                    text: "A year".to_string(),
                }],
                start: Some(2024),
            })
        );
    }

    #[test]
    fn split_cells_handles_missing_outer_pipes() {
        assert_eq!(split_cells("a | b"), vec!["a", "b"]);
        assert_eq!(split_cells("| a | b |"), vec!["a", "b"]);
        assert_eq!(split_cells("| | b |"), vec!["", "b"]);
    }
}
