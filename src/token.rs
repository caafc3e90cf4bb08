/// Lines of the source covered by a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    /// Zero-based index of the first line.
    pub start: usize,
    /// Number of lines, including fence lines for code blocks.
    pub len: usize,
}

/// Line-level token kinds, each carrying its own payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Header { level: u8, text: String },
    /// `language` is empty when the opening fence has no tag.
    FencedCodeBlock { language: String, code: String },
    ListItem(String),
    OrderedListItem(String),
    Blockquote(String),
    HorizontalRule,
    TableRow(Vec<String>),
    Blank,
    Paragraph(String),
}

/// One classified input line, or one aggregated fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: LineSpan,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, start: usize, len: usize) -> Self {
        Self {
            kind,
            span: LineSpan { start, len },
        }
    }

    /// Token content with line markers stripped.
    ///
    /// Table rows have no single raw string and return an empty one, as do
    /// blank lines and rules.
    pub fn raw_text(&self) -> &str {
        match &self.kind {
            TokenKind::Header { text, .. } => text,
            TokenKind::FencedCodeBlock { code, .. } => code,
            TokenKind::ListItem(text)
            | TokenKind::OrderedListItem(text)
            | TokenKind::Blockquote(text)
            | TokenKind::Paragraph(text) => text,
            TokenKind::HorizontalRule | TokenKind::TableRow(_) | TokenKind::Blank => "",
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self.kind, TokenKind::Blank)
    }
}
