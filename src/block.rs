/// Inline text spans with formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Bold(Vec<Span>),
    Italic(Vec<Span>),
    Code(String),
    Link { content: Vec<Span>, url: String },
    Image { alt: String, src: String },
}

/// Text of an inline-bearing block: the flat source and its resolved spans.
///
/// The renderer uses `spans` when non-empty and falls back to the escaped
/// `raw` text otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inlines {
    pub raw: String,
    pub spans: Vec<Span>,
}

/// A single list item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub content: Inlines,
}

/// A list (ordered or unordered)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<String>,
}

/// Table rows in source order. The first row is the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Row>,
}

/// Block-level elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Header {
        level: u8,
        content: Inlines,
    },
    Paragraph(Inlines),
    CodeBlock {
        /// Empty when the fence had no tag.
        language: String,
        code: String,
    },
    List(List),
    Blockquote(Inlines),
    HorizontalRule,
    Table(Table),
}

/// Root of the document tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub children: Vec<Block>,
}

impl Span {
    /// Visible text of the span with all formatting removed.
    pub fn plain_text(&self) -> String {
        match self {
            Span::Text(text) | Span::Code(text) => text.clone(),
            Span::Bold(inner) | Span::Italic(inner) | Span::Link { content: inner, .. } => {
                inner.iter().map(Span::plain_text).collect()
            }
            Span::Image { alt, .. } => alt.clone(),
        }
    }
}

impl Inlines {
    /// Plain text of the resolved spans, or the raw text when there are none.
    pub fn plain_text(&self) -> String {
        if self.spans.is_empty() {
            self.raw.clone()
        } else {
            self.spans.iter().map(Span::plain_text).collect()
        }
    }
}

impl Document {
    /// Plain text of the first level-1 header, if any.
    pub fn title(&self) -> Option<String> {
        self.children.iter().find_map(|block| match block {
            Block::Header { level: 1, content } => Some(content.plain_text()),
            _ => None,
        })
    }
}
