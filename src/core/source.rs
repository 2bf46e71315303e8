//! Parsers for literal and file source specifications.

use crate::error::{Result, SourceError};

const QUOTES: &[char] = &['"', '\''];

/// Parse a `key=value` literal source.
///
/// The split happens at the first `=`, so values may contain `=`. One quote
/// character (`"` or `'`) is stripped from each end of the value when
/// present; the two ends are treated independently.
///
/// # Errors
///
/// Returns `SourceError::InvalidLiteral` if the key is empty or there is no `=`.
pub fn parse_literal(source: &str) -> Result<(String, String)> {
    let (key, value) = match source.split_once('=') {
        Some((key, value)) if !key.is_empty() => (key, value),
        _ => return Err(SourceError::InvalidLiteral(source.to_string()).into()),
    };
    Ok((key.to_string(), unquote(value).to_string()))
}

fn unquote(value: &str) -> &str {
    let value = value.strip_prefix(QUOTES).unwrap_or(value);
    value.strip_suffix(QUOTES).unwrap_or(value)
}

/// Parse a `[key=]path` file source into `(key, path)`.
///
/// Without a key the basename of the path becomes the key.
///
/// # Errors
///
/// Returns `SourceError::MissingKeyName`, `SourceError::MissingFilePath` or
/// `SourceError::AmbiguousSeparators` for malformed specs.
pub fn parse_file_spec(source: &str) -> Result<(String, String)> {
    let separators = source.matches('=').count();
    match separators {
        0 => Ok((basename(source).to_string(), source.to_string())),
        1 if source.starts_with('=') => {
            Err(SourceError::MissingKeyName(source[1..].to_string()).into())
        }
        1 if source.ends_with('=') => {
            Err(SourceError::MissingFilePath(source[..source.len() - 1].to_string()).into())
        }
        1 => {
            let (key, path) = source.split_once('=').unwrap_or_default();
            Ok((key.to_string(), path.to_string()))
        }
        _ => Err(SourceError::AmbiguousSeparators(source.to_string()).into()),
    }
}

/// Last element of a slash-separated path, ignoring trailing slashes.
fn basename(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}
