use std::sync::LazyLock;

use regex::Regex;

use crate::token::{Token, TokenKind};

const FENCE: &str = "```";

static HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());
static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*+]\s+(.+)$").unwrap());
static NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+(.+)$").unwrap());
static RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:-{3,}|\*{3,}|_{3,})$").unwrap());

/// Split markdown text into line tokens.
///
/// Every line becomes exactly one token except fenced code blocks, which
/// swallow everything up to and including the closing fence. An unterminated
/// fence runs to the end of the input.
pub fn tokenize(text: &str) -> Vec<Token> {
    let lines: Vec<&str> = text.lines().collect();
    let mut tokens = Vec::with_capacity(lines.len());

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        // Blank and header lines can never start with a fence, so checking it
        // first keeps the classification order intact.
        if let Some(tag) = line.trim().strip_prefix(FENCE) {
            let (token, consumed) = fenced_block(&lines, i, tag);
            tokens.push(token);
            i += consumed;
            continue;
        }

        tokens.push(Token::new(classify_line(line), i, 1));
        i += 1;
    }

    tracing::trace!(lines = lines.len(), tokens = tokens.len(), "Tokenized input");
    tokens
}

/// Consume a fenced code block starting at `start`. Returns the token and the
/// number of lines it covers.
fn fenced_block(lines: &[&str], start: usize, tag: &str) -> (Token, usize) {
    let language = tag.split_whitespace().next().unwrap_or_default().to_string();

    let body_start = start + 1;
    let mut end = body_start;
    while end < lines.len() && !lines[end].trim().starts_with(FENCE) {
        end += 1;
    }
    let code = lines[body_start..end].join("\n");

    let consumed = if end < lines.len() {
        end - start + 1
    } else {
        tracing::debug!(line = start + 1, "Unterminated code fence runs to end of input");
        end - start
    };

    let kind = TokenKind::FencedCodeBlock { language, code };
    (Token::new(kind, start, consumed), consumed)
}

/// Classify a single non-fence line.
fn classify_line(line: &str) -> TokenKind {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return TokenKind::Blank;
    }
    if let Some(caps) = HEADER.captures(trimmed) {
        return TokenKind::Header {
            level: caps[1].len() as u8,
            text: caps[2].to_string(),
        };
    }
    if let Some(caps) = BULLET.captures(trimmed) {
        return TokenKind::ListItem(caps[1].to_string());
    }
    if let Some(caps) = NUMBERED.captures(trimmed) {
        return TokenKind::OrderedListItem(caps[1].to_string());
    }
    if let Some(quoted) = trimmed.strip_prefix('>') {
        return TokenKind::Blockquote(quoted.trim_start().to_string());
    }
    if RULE.is_match(trimmed) {
        return TokenKind::HorizontalRule;
    }
    if let Some(cells) = table_cells(trimmed) {
        return TokenKind::TableRow(cells);
    }
    TokenKind::Paragraph(line.to_string())
}

fn table_cells(trimmed: &str) -> Option<Vec<String>> {
    if trimmed.len() < 2 {
        return None;
    }
    let inner = trimmed.strip_prefix('|')?.strip_suffix('|')?;
    // `||` and `| |` have no cells, only the edge pipes.
    if inner.trim().is_empty() {
        return None;
    }
    Some(inner.split('|').map(|cell| cell.trim().to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::LineSpan;
    use pretty_assertions::assert_eq;

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize(text).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn whitespace_only_input_is_all_blank() {
        let tokens = tokenize("   \n\n   ");
        assert!(!tokens.is_empty());
        assert!(tokens.iter().all(Token::is_blank));
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        assert_eq!(kinds("hello\n"), vec![TokenKind::Paragraph("hello".into())]);
    }

    #[test]
    fn headers() {
        assert_eq!(
            kinds("# One\n###### Six\n####### Seven\n#NoSpace"),
            vec![
                TokenKind::Header {
                    level: 1,
                    text: "One".into()
                },
                TokenKind::Header {
                    level: 6,
                    text: "Six".into()
                },
                TokenKind::Paragraph("####### Seven".into()),
                TokenKind::Paragraph("#NoSpace".into()),
            ]
        );
    }

    #[test]
    fn fenced_code_block() {
        let tokens = tokenize("before\n```rust\nfn main() {\n    let x = 1;\n}\n```\nafter");
        assert_eq!(tokens.len(), 3);
        assert_eq!(
            tokens[1].kind,
            TokenKind::FencedCodeBlock {
                language: "rust".into(),
                code: "fn main() {\n    let x = 1;\n}".into(),
            }
        );
        assert_eq!(tokens[1].span, LineSpan { start: 1, len: 5 });
        assert_eq!(tokens[2].kind, TokenKind::Paragraph("after".into()));
        assert_eq!(tokens[2].span.start, 6);
    }

    #[test]
    fn fence_without_language() {
        assert_eq!(
            kinds("```\n# not a header\n```"),
            vec![TokenKind::FencedCodeBlock {
                language: String::new(),
                code: "# not a header".into(),
            }]
        );
    }

    #[test]
    fn unterminated_fence_runs_to_end() {
        let tokens = tokenize("```py\nprint(1)\n\n- still code");
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            tokens[0].kind,
            TokenKind::FencedCodeBlock {
                language: "py".into(),
                code: "print(1)\n\n- still code".into(),
            }
        );
        assert_eq!(tokens[0].span, LineSpan { start: 0, len: 4 });
    }

    #[test]
    fn lists() {
        assert_eq!(
            kinds("- dash\n* star\n+ plus\n12. twelve\n-nospace"),
            vec![
                TokenKind::ListItem("dash".into()),
                TokenKind::ListItem("star".into()),
                TokenKind::ListItem("plus".into()),
                TokenKind::OrderedListItem("twelve".into()),
                TokenKind::Paragraph("-nospace".into()),
            ]
        );
    }

    #[test]
    fn blockquote_strips_marker() {
        assert_eq!(
            kinds("> quoted text\n>tight"),
            vec![
                TokenKind::Blockquote("quoted text".into()),
                TokenKind::Blockquote("tight".into()),
            ]
        );
    }

    #[test]
    fn horizontal_rules() {
        assert_eq!(
            kinds("---\n*****\n___\n--*"),
            vec![
                TokenKind::HorizontalRule,
                TokenKind::HorizontalRule,
                TokenKind::HorizontalRule,
                TokenKind::Paragraph("--*".into()),
            ]
        );
    }

    #[test]
    fn table_rows() {
        assert_eq!(
            kinds("| A | B |\n|---|---|\n| 1 |  |\n| missing trailing"),
            vec![
                TokenKind::TableRow(vec!["A".into(), "B".into()]),
                TokenKind::TableRow(vec!["---".into(), "---".into()]),
                TokenKind::TableRow(vec!["1".into(), String::new()]),
                TokenKind::Paragraph("| missing trailing".into()),
            ]
        );
    }

    #[test]
    fn lone_pipe_is_paragraph() {
        assert_eq!(kinds("|"), vec![TokenKind::Paragraph("|".into())]);
    }

    #[test]
    fn empty_pipe_pair_is_paragraph() {
        assert_eq!(
            kinds("||\n|  |"),
            vec![
                TokenKind::Paragraph("||".into()),
                TokenKind::Paragraph("|  |".into()),
            ]
        );
    }

    #[test]
    fn paragraph_keeps_untrimmed_line() {
        assert_eq!(
            kinds("  indented text  "),
            vec![TokenKind::Paragraph("  indented text  ".into())]
        );
    }

    #[test]
    fn raw_text_strips_markers() {
        let tokens = tokenize("## Title\n- item\n> quote");
        let raw: Vec<&str> = tokens.iter().map(Token::raw_text).collect();
        assert_eq!(raw, vec!["Title", "item", "quote"]);
    }
}
