//! Env-file parsing.
//!
//! Each line is either blank, a `#` comment, `KEY=VALUE`, or a bare `KEY`
//! whose value comes from the environment. There is no quoting, escaping or
//! continuation syntax: everything after the first `=` is the value.

use std::collections::HashMap;

use crate::core::constants::UTF8_BOM;
use crate::core::types::Pair;
use crate::core::validation::Validator;
use crate::error::{Result, SourceError};

/// Lookup for variables referenced by bare keys.
pub trait Environment {
    /// Value of `key`, or `None` if unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Parse one env-file line.
///
/// Returns a pair with an empty key for blank and comment lines. The BOM is
/// only stripped when `index` is 0.
///
/// # Errors
///
/// Returns `SourceError::InvalidLine` if the line is not UTF-8, or the
/// validator's error if the key is rejected.
pub fn parse_line(
    line: &[u8],
    index: usize,
    validator: &dyn Validator,
    env: &dyn Environment,
) -> Result<Pair> {
    let line = if index == 0 {
        line.strip_prefix(UTF8_BOM).unwrap_or(line)
    } else {
        line
    };

    let line = std::str::from_utf8(line).map_err(|_| SourceError::InvalidLine {
        line: index,
        content: String::from_utf8_lossy(line).into_owned(),
    })?;

    let line = line.trim_start();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Pair::default());
    }

    let (key, value) = match line.split_once('=') {
        Some((key, value)) => (key, Some(value)),
        None => (line, None),
    };
    validator.is_env_var_name(key)?;

    let value = match value {
        Some(value) => value.to_string(),
        None => env.var(key).unwrap_or_default(),
    };
    Ok(Pair::new(key, value))
}

/// Parse a whole env-file, dropping blank and comment lines.
///
/// Lines are split on `\n` with a trailing `\r` removed. The first failing
/// line aborts the parse and nothing from the file is returned.
///
/// # Errors
///
/// Propagates the first error from [`parse_line`].
pub fn parse_lines(
    content: &[u8],
    validator: &dyn Validator,
    env: &dyn Environment,
) -> Result<Vec<Pair>> {
    let mut pairs = Vec::new();
    for (index, line) in lines(content).enumerate() {
        let pair = parse_line(line, index, validator, env)?;
        if !pair.is_skip() {
            pairs.push(pair);
        }
    }
    Ok(pairs)
}

fn lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    let content = content.strip_suffix(b"\n").unwrap_or(content);
    content
        .split(|b| *b == b'\n')
        .filter(move |_| !content.is_empty())
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}
