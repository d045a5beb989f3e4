//! Fragment file parsing.
//!
//! Fragment files hold each fragment between a pair of braces:
//!
//! ```text
//! {It was the best of times,}
//! {of times, it was the worst
//! of times}
//! ```
//!
//! A fragment may span several lines; line breaks inside it are kept.
//! Whitespace between fragments is ignored.

use std::path::Path;
use thiserror::Error;

const OPEN: char = '{';
const CLOSE: char = '}';

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line {line}: '{{' inside an unterminated fragment")]
    UnexpectedOpen { line: usize },
    #[error("Line {line}: '}}' without a matching '{{'")]
    UnexpectedClose { line: usize },
    #[error("Line {line}: fragment is never closed")]
    Unterminated { line: usize },
    #[error("Line {line}: text outside of a fragment: {text:?}")]
    StrayText { line: usize, text: char },
}

/// Load and parse a fragment file.
pub fn load_fragments_file(path: &Path) -> Result<Vec<String>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    let fragments = parse_fragments(&content)?;
    log::debug!("Loaded {} fragments from {}", fragments.len(), path.display());
    Ok(fragments)
}

/// Parse brace-delimited fragments from text.
///
/// Line numbers in errors are 1-based. An unterminated fragment reports the
/// line where it was opened.
pub fn parse_fragments(content: &str) -> Result<Vec<String>, ParseError> {
    let mut fragments = Vec::new();
    let mut current: Option<(usize, String)> = None; // (opening line, text so far)
    let mut line = 1;

    for ch in content.chars() {
        match ch {
            OPEN if current.is_some() => return Err(ParseError::UnexpectedOpen { line }),
            OPEN => current = Some((line, String::new())),
            CLOSE => match current.take() {
                Some((_, text)) => fragments.push(text),
                None => return Err(ParseError::UnexpectedClose { line }),
            },
            c => match current.as_mut() {
                Some((_, text)) => text.push(c),
                None if c.is_whitespace() => {}
                None => return Err(ParseError::StrayText { line, text: c }),
            },
        }

        if ch == '\n' {
            line += 1;
        }
    }

    if let Some((opened, _)) = current {
        return Err(ParseError::Unterminated { line: opened });
    }

    Ok(fragments)
}
