use crate::block::{Block, Document, Inlines, List, Span, Table};
use crate::config::RenderOptions;
use crate::highlight::highlight;

const DEFAULT_TITLE: &str = "Document";

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize a document tree into a complete HTML page.
pub fn serialize(doc: &Document, options: &RenderOptions) -> String {
    let body = serialize_body(doc, options);

    let title = options
        .title
        .clone()
        .or_else(|| doc.title())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let mut out = String::with_capacity(body.len() + 512);
    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!(
        "<html lang=\"en\" class=\"{}\">\n",
        options.theme.class_name()
    ));
    out.push_str("<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(&title)));
    out.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"{}\">\n",
        escape_html(&options.stylesheet)
    ));
    out.push_str("</head>\n<body>\n<main class=\"markdown-body\">\n");
    out.push_str(&body);
    out.push_str("</main>\n</body>\n</html>\n");
    out
}

/// Serialize only the blocks of a document, without the page shell.
pub fn serialize_body(doc: &Document, options: &RenderOptions) -> String {
    let mut out = String::new();
    for block in &doc.children {
        emit_block(block, options, &mut out);
    }
    out
}

fn emit_block(block: &Block, options: &RenderOptions, out: &mut String) {
    match block {
        Block::Header { level, content } => {
            out.push_str(&format!("<h{level}>"));
            inlines_to_html(content, out);
            out.push_str(&format!("</h{level}>\n"));
        }
        Block::Paragraph(content) => {
            out.push_str("<p>");
            inlines_to_html(content, out);
            out.push_str("</p>\n");
        }
        Block::CodeBlock { language, code } => {
            code_block_to_html(language, code, options, out);
        }
        Block::List(list) => {
            list_to_html(list, out);
        }
        Block::Blockquote(content) => {
            out.push_str("<blockquote>");
            inlines_to_html(content, out);
            out.push_str("</blockquote>\n");
        }
        Block::HorizontalRule => {
            out.push_str("<hr>\n");
        }
        Block::Table(table) => {
            table_to_html(table, out);
        }
    }
}

fn code_block_to_html(language: &str, code: &str, options: &RenderOptions, out: &mut String) {
    if language.is_empty() {
        out.push_str("<pre><code>");
    } else {
        out.push_str(&format!(
            "<pre><code class=\"language-{}\">",
            escape_html(language)
        ));
    }

    let highlighted = if options.highlight && !language.is_empty() {
        match highlight(code, language, options.theme) {
            Ok(html) => Some(html),
            Err(e) => {
                tracing::debug!(language, error = %e, "Highlighting failed, emitting plain code");
                None
            }
        }
    } else {
        None
    };

    match highlighted {
        Some(html) => out.push_str(&html),
        None => out.push_str(&escape_html(code)),
    }
    out.push_str("</code></pre>\n");
}

/// Resolved spans when there are any, otherwise the escaped raw text.
fn inlines_to_html(content: &Inlines, out: &mut String) {
    if content.spans.is_empty() {
        out.push_str(&escape_html(&content.raw));
    } else {
        spans_to_html(&content.spans, out);
    }
}

fn spans_to_html(spans: &[Span], out: &mut String) {
    for span in spans {
        span_to_html(span, out);
    }
}

fn span_to_html(span: &Span, out: &mut String) {
    match span {
        Span::Text(text) => {
            out.push_str(&escape_html(text));
        }
        Span::Bold(inner) => {
            out.push_str("<strong>");
            spans_to_html(inner, out);
            out.push_str("</strong>");
        }
        Span::Italic(inner) => {
            out.push_str("<em>");
            spans_to_html(inner, out);
            out.push_str("</em>");
        }
        Span::Code(text) => {
            out.push_str("<code>");
            out.push_str(&escape_html(text));
            out.push_str("</code>");
        }
        Span::Link { content, url } => {
            out.push_str(&format!("<a href=\"{}\">", escape_html(url)));
            spans_to_html(content, out);
            out.push_str("</a>");
        }
        Span::Image { alt, src } => {
            out.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\">",
                escape_html(src),
                escape_html(alt)
            ));
        }
    }
}

fn list_to_html(list: &List, out: &mut String) {
    let tag = if list.ordered { "ol" } else { "ul" };

    out.push_str(&format!("<{tag}>\n"));
    for item in &list.items {
        out.push_str("<li>");
        inlines_to_html(&item.content, out);
        out.push_str("</li>\n");
    }
    out.push_str(&format!("</{tag}>\n"));
}

fn table_to_html(table: &Table, out: &mut String) {
    let Some((header, body)) = table.rows.split_first() else {
        return;
    };

    out.push_str("<table>\n<thead>\n<tr>");
    for cell in &header.cells {
        out.push_str(&format!("<th>{}</th>", escape_html(cell)));
    }
    out.push_str("</tr>\n</thead>\n");

    if !body.is_empty() {
        out.push_str("<tbody>\n");
        for row in body {
            out.push_str("<tr>");
            for cell in &row.cells {
                out.push_str(&format!("<td>{}</td>", escape_html(cell)));
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</tbody>\n");
    }

    out.push_str("</table>\n");
}
