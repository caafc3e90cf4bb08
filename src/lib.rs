mod block;
mod config;
mod error;
mod highlight;
mod html;
mod inline;
mod lexer;
mod parser;
mod token;

pub use block::{Block, Document, Inlines, List, ListItem, Row, Span, Table};
pub use config::{Config, ConfigError, OutputConfig, RenderOptions, Theme};
pub use error::ConvertError;
pub use html::{escape_html, serialize, serialize_body};
pub use inline::resolve_inline;
pub use lexer::tokenize;
pub use parser::build_tree;
pub use token::{LineSpan, Token, TokenKind};

/// Convert markdown text to a complete HTML document.
pub fn convert(markdown: &str, options: &RenderOptions) -> String {
    let tokens = tokenize(markdown);
    let token_count = tokens.len();
    let doc = build_tree(tokens);
    tracing::debug!(
        tokens = token_count,
        blocks = doc.children.len(),
        "Parsed markdown"
    );
    serialize(&doc, options)
}

/// Convert raw bytes to HTML, failing only if they are not UTF-8 text.
pub fn convert_bytes(input: &[u8], options: &RenderOptions) -> Result<String, ConvertError> {
    let markdown = std::str::from_utf8(input)?;
    Ok(convert(markdown, options))
}

/// Convert markdown to HTML using the compiled default config.
pub fn markdown_to_html(markdown: &str) -> String {
    convert(markdown, &Config::compiled_default().render)
}
