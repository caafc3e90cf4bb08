//! Syntax highlighting for fenced code blocks.

use std::sync::LazyLock;

use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::html::{IncludeBackground, styled_line_to_highlighted_html};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::config::Theme;

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEMES: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    #[error("no syntax for language {0:?}")]
    UnknownLanguage(String),
    #[error("highlight theme {0} is not bundled")]
    MissingTheme(&'static str),
    #[error(transparent)]
    Syntect(#[from] syntect::Error),
}

fn theme_name(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "InspiredGitHub",
        Theme::Dark => "base16-ocean.dark",
    }
}

/// Highlight `code` as `language`, returning HTML spans with inline styles.
///
/// The output is already escaped and can be inserted verbatim.
pub fn highlight(code: &str, language: &str, theme: Theme) -> Result<String, HighlightError> {
    let syntax = SYNTAXES
        .find_syntax_by_token(language)
        .ok_or_else(|| HighlightError::UnknownLanguage(language.to_string()))?;
    let name = theme_name(theme);
    let theme = THEMES
        .themes
        .get(name)
        .ok_or(HighlightError::MissingTheme(name))?;

    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut out = String::with_capacity(code.len() * 2);
    for line in LinesWithEndings::from(code) {
        let regions = highlighter.highlight_line(line, &SYNTAXES)?;
        out.push_str(&styled_line_to_highlighted_html(
            &regions[..],
            IncludeBackground::No,
        )?);
    }
    Ok(out)
}
