use std::str::Utf8Error;

/// Conversion failures.
///
/// Malformed markdown never fails; it degrades to plain text. The only hard
/// failure is input that is not text at all.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("input is not valid UTF-8 text: {0}")]
    InvalidInput(#[from] Utf8Error),
}
