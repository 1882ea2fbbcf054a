//! Block renderers: one HTML fragment per segmented block.

use quire_core::{Block, BlockKind, ListModel, TableModel, heading_text};

use crate::context::RenderContext;
use crate::escape::encode_attr;

/// Renders one block. Returns an empty string for blocks with no content.
pub(crate) fn render_block(block: &Block, ctx: &mut RenderContext<'_>) -> String {
    log::trace!("rendering {} at line {}", block.kind.name(), block.line);

    match &block.kind {
        BlockKind::Heading(level) => render_heading(block, *level, ctx),
        BlockKind::ThematicBreak => "<hr />".to_string(),
        BlockKind::Blockquote => render_blockquote(block, ctx),
        BlockKind::Table(table) => render_table(table, block.line, ctx),
        BlockKind::UnorderedList(list) => render_list("ul", list, ctx),
        BlockKind::OrderedList(list) => render_list("ol", list, ctx),
        BlockKind::Paragraph => render_paragraph(block, ctx),
    }
}

fn render_heading(block: &Block, level: u8, ctx: &mut RenderContext<'_>) -> String {
    let html = ctx.format_inline(heading_text(&block.raw), block.line);
    let slug = ctx.record_heading(level, &html);

    if ctx.options().enable_heading_ids {
        format!("<h{level} id=\"{}\">{html}</h{level}>", encode_attr(&slug))
    } else {
        format!("<h{level}>{html}</h{level}>")
    }
}

fn render_blockquote(block: &Block, ctx: &mut RenderContext<'_>) -> String {
    let lines: Vec<String> = block
        .raw
        .lines()
        .enumerate()
        .map(|(offset, line)| {
            let line = line.trim_start();
            let text = line
                .strip_prefix('>')
                .map(|rest| rest.strip_prefix(' ').unwrap_or(rest))
                .unwrap_or(line);
            ctx.format_inline(text, block.line + offset)
        })
        .collect();

    format!("<blockquote>{}</blockquote>", lines.join("<br />"))
}

fn render_list(tag: &str, list: &ListModel, ctx: &mut RenderContext<'_>) -> String {
    let mut html = match list.start {
        Some(start) if tag == "ol" && start != 1 => format!("<ol start=\"{start}\">"),
        _ => format!("<{tag}>"),
    };
    for item in &list.items {
        html.push_str("<li>");
        html.push_str(&ctx.format_inline(&item.text, item.line));
        html.push_str("</li>");
    }
    html.push_str(&format!("</{tag}>"));
    html
}

fn render_table(table: &TableModel, line: usize, ctx: &mut RenderContext<'_>) -> String {
    let mut html = format!(
        "<div class=\"{}\"><table><thead><tr>",
        encode_attr(&ctx.options().table_wrapper_class)
    );
    for (column, cell) in table.header.iter().enumerate() {
        push_cell(&mut html, "th", table, column, cell, line, ctx);
    }
    html.push_str("</tr></thead><tbody>");

    for (offset, row) in table.rows.iter().enumerate() {
        html.push_str("<tr>");
        for (column, cell) in row.iter().enumerate() {
            // Body rows start after the header and separator lines.
            push_cell(&mut html, "td", table, column, cell, line + 2 + offset, ctx);
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table></div>");
    html
}

fn push_cell(
    html: &mut String,
    tag: &str,
    table: &TableModel,
    column: usize,
    cell: &str,
    line: usize,
    ctx: &mut RenderContext<'_>,
) {
    match table.alignment(column).as_attr() {
        Some(align) => html.push_str(&format!("<{tag} align=\"{align}\">")),
        None => html.push_str(&format!("<{tag}>")),
    }
    html.push_str(&ctx.format_inline(cell, line));
    html.push_str(&format!("</{tag}>"));
}

fn render_paragraph(block: &Block, ctx: &mut RenderContext<'_>) -> String {
    let lines: Vec<String> = block
        .raw
        .lines()
        .enumerate()
        .map(|(offset, line)| ctx.format_inline(line.trim(), block.line + offset))
        .filter(|html| !html.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return String::new();
    }

    let separator = if ctx.options().hard_line_breaks {
        "<br />"
    } else {
        " "
    };
    format!("<p>{}</p>", lines.join(separator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::RenderOptions;
    use quire_core::segment;

    fn render(text: &str, options: &RenderOptions) -> Vec<String> {
        let mut ctx = RenderContext::new(options);
        segment(text)
            .map(|block| render_block(&block, &mut ctx))
            .collect()
    }

    #[test]
    fn heading_ids_when_enabled() {
        let options = RenderOptions {
            enable_heading_ids: true,
            ..RenderOptions::default()
        };
        assert_eq!(
            render("## Rates & Fees", &options),
            vec!["<h2 id=\"rates--fees\">Rates &amp; Fees</h2>"]
        );
    }

    #[test]
    fn blockquote_joins_lines() {
        assert_eq!(
            render("> one\n>two\n> **three**", &RenderOptions::default()),
            vec!["<blockquote>one<br />two<br /><strong>three</strong></blockquote>"]
        );
    }

    #[test]
    fn ordered_list_start() {
        assert_eq!(
            render("3. c\n4. d", &RenderOptions::default()),
            vec!["<ol start=\"3\"><li>c</li><li>d</li></ol>"]
        );
        assert_eq!(
            render("1. a\n2. b", &RenderOptions::default()),
            vec!["<ol><li>a</li><li>b</li></ol>"]
        );
    }

    #[test]
    fn table_alignment_and_wrapper() {
        let options = RenderOptions {
            table_wrapper_class: "wide".to_string(),
            ..RenderOptions::default()
        };
        assert_eq!(
            render("| a | b |\n|:--|--:|\n| 1 | 2 |", &options),
            vec![
                "<div class=\"wide\"><table><thead><tr><th align=\"left\">a</th><th align=\"right\">b</th></tr></thead><tbody><tr><td align=\"left\">1</td><td align=\"right\">2</td></tr></tbody></table></div>"
            ]
        );
    }

    #[test]
    fn paragraph_soft_breaks() {
        let options = RenderOptions {
            hard_line_breaks: false,
            ..RenderOptions::default()
        };
        assert_eq!(render("one\ntwo", &options), vec!["<p>one two</p>"]);
        assert_eq!(
            render("one\ntwo", &RenderOptions::default()),
            vec!["<p>one<br />two</p>"]
        );
    }

    #[test]
    fn thematic_break() {
        assert_eq!(render("***", &RenderOptions::default()), vec!["<hr />"]);
    }
}
