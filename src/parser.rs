use crate::block::{Block, Document, Inlines, List, ListItem, Row, Table};
use crate::inline::resolve_inline;
use crate::token::{Token, TokenKind};

/// Build the document tree from line tokens.
///
/// Runs of list items and table rows are grouped into a single node; every
/// other token maps to at most one block. Blank lines only separate.
pub fn build_tree(tokens: Vec<Token>) -> Document {
    let mut children = Vec::new();
    let mut tokens = tokens.into_iter().map(|t| t.kind).peekable();

    while let Some(kind) = tokens.next() {
        let block = match kind {
            TokenKind::Blank => continue,
            TokenKind::Header { level, text } => Block::Header {
                level,
                content: inlines(text),
            },
            TokenKind::FencedCodeBlock { language, code } => Block::CodeBlock { language, code },
            TokenKind::ListItem(first) => {
                let mut items = vec![first];
                while let Some(TokenKind::ListItem(text)) =
                    tokens.next_if(|k| matches!(k, TokenKind::ListItem(_)))
                {
                    items.push(text);
                }
                list(false, items)
            }
            TokenKind::OrderedListItem(first) => {
                let mut items = vec![first];
                while let Some(TokenKind::OrderedListItem(text)) =
                    tokens.next_if(|k| matches!(k, TokenKind::OrderedListItem(_)))
                {
                    items.push(text);
                }
                list(true, items)
            }
            // Each quoted line is its own blockquote; consecutive lines are not merged.
            TokenKind::Blockquote(text) => Block::Blockquote(inlines(text)),
            TokenKind::HorizontalRule => Block::HorizontalRule,
            TokenKind::TableRow(first) => {
                let mut rows = vec![first];
                while let Some(TokenKind::TableRow(cells)) =
                    tokens.next_if(|k| matches!(k, TokenKind::TableRow(_)))
                {
                    rows.push(cells);
                }
                table(rows)
            }
            TokenKind::Paragraph(text) => Block::Paragraph(inlines(text)),
        };
        children.push(block);
    }

    tracing::trace!(blocks = children.len(), "Built document tree");
    Document { children }
}

fn inlines(raw: String) -> Inlines {
    let spans = resolve_inline(&raw);
    Inlines { raw, spans }
}

fn list(ordered: bool, items: Vec<String>) -> Block {
    let items = items
        .into_iter()
        .map(|text| ListItem {
            content: inlines(text),
        })
        .collect();
    Block::List(List { ordered, items })
}

fn table(mut rows: Vec<Vec<String>>) -> Block {
    // Only the line directly under the header row is a delimiter; dash-only
    // rows further down are data.
    if rows.len() > 1 && is_delimiter_row(&rows[1]) {
        rows.remove(1);
    }
    let rows = rows.into_iter().map(|cells| Row { cells }).collect();
    Block::Table(Table { rows })
}

/// `|---|:--:|` style rows that separate the header from the body.
fn is_delimiter_row(cells: &[String]) -> bool {
    !cells.is_empty()
        && cells.iter().all(|cell| {
            let dashes = cell.trim_start_matches(':').trim_end_matches(':');
            !dashes.is_empty() && dashes.chars().all(|c| c == '-')
        })
}
