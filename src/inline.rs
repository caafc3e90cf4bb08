//! Inline span resolution.
//!
//! A single left-to-right scan. At each position the markers are tried in a
//! fixed order: bold, italic, inline code, image, link. A marker only counts
//! when its closing counterpart exists; the first closing occurrence wins,
//! so inputs like `**a*b**c*` nest the way the scan finds them rather than the
//! way a full grammar would. Anything else is accumulated as plain text.

use crate::block::Span;

/// Resolve inline formatting in `text` into a flat span sequence.
pub fn resolve_inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut pending = String::new();

    let mut i = 0;
    while i < text.len() {
        let rest = &text[i..];

        if let Some((span, consumed)) = match_marker(rest) {
            flush(&mut pending, &mut spans);
            spans.push(span);
            i += consumed;
            continue;
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        pending.push(ch);
        i += ch.len_utf8();
    }

    flush(&mut pending, &mut spans);
    spans
}

fn flush(pending: &mut String, spans: &mut Vec<Span>) {
    if !pending.is_empty() {
        spans.push(Span::Text(std::mem::take(pending)));
    }
}

/// Try every marker at the start of `rest`, returning the span and the number
/// of bytes it covers.
fn match_marker(rest: &str) -> Option<(Span, usize)> {
    bold(rest)
        .or_else(|| italic(rest))
        .or_else(|| code(rest))
        .or_else(|| image(rest))
        .or_else(|| link(rest))
}

fn bold(rest: &str) -> Option<(Span, usize)> {
    let body = rest.strip_prefix("**")?;
    let end = body.find("**")?;
    Some((Span::Bold(resolve_inline(&body[..end])), end + 4))
}

fn italic(rest: &str) -> Option<(Span, usize)> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'*') || bytes.get(1) == Some(&b'*') {
        return None;
    }
    // The closer must be a lone `*`, not half of a `**`.
    let end = (2..bytes.len()).find(|&j| {
        bytes[j] == b'*' && bytes[j - 1] != b'*' && bytes.get(j + 1) != Some(&b'*')
    })?;
    Some((Span::Italic(resolve_inline(&rest[1..end])), end + 1))
}

fn code(rest: &str) -> Option<(Span, usize)> {
    let body = rest.strip_prefix('`')?;
    let end = body.find('`')?;
    Some((Span::Code(body[..end].to_string()), end + 2))
}

fn image(rest: &str) -> Option<(Span, usize)> {
    let body = rest.strip_prefix("![")?;
    let (alt, src, consumed) = label_and_target(body)?;
    let span = Span::Image {
        alt: alt.to_string(),
        src: src.to_string(),
    };
    Some((span, consumed + 2))
}

fn link(rest: &str) -> Option<(Span, usize)> {
    let body = rest.strip_prefix('[')?;
    let (label, url, consumed) = label_and_target(body)?;
    // Link labels stay literal.
    let content = if label.is_empty() {
        Vec::new()
    } else {
        vec![Span::Text(label.to_string())]
    };
    let span = Span::Link {
        content,
        url: url.to_string(),
    };
    Some((span, consumed + 1))
}

/// Parse `label](target)` from just after the opening bracket.
fn label_and_target(body: &str) -> Option<(&str, &str, usize)> {
    let close = body.find(']')?;
    let after = body[close + 1..].strip_prefix('(')?;
    let end = after.find(')')?;
    Some((&body[..close], &after[..end], close + end + 3))
}
