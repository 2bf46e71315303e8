//! Inline decryption of armored age fragments inside YAML-shaped text.
//!
//! The document is never parsed. A fragment is a run of lines from an armor
//! header line to the next armor footer line; its indentation is taken from
//! the header line and reapplied to every plaintext line, so a fragment under
//! a block scalar (`password: |`) stays a block scalar.

use tracing::trace;

use super::Cipher;
use crate::core::constants::{ARMOR_FOOTER, ARMOR_HEADER};
use crate::core::identity::Identity;
use crate::error::{CipherError, Result};

const LINE_END: &[char] = &['\r', '\n'];

fn failed(origin: &str, reason: &str) -> crate::error::Error {
    CipherError::DecryptionFailed {
        origin: origin.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// Replace every armored fragment of `content` with its plaintext.
pub(super) fn decrypt(
    cipher: &dyn Cipher,
    content: &[u8],
    identities: &[Identity],
    origin: &str,
) -> Result<Vec<u8>> {
    let text = std::str::from_utf8(content)
        .map_err(|_| failed(origin, "inline content is not valid utf8"))?;

    let mut out = String::with_capacity(text.len());
    let mut lines = text.split_inclusive('\n');
    let mut fragments = 0usize;

    while let Some(line) = lines.next() {
        let body = line.trim_end_matches(LINE_END);
        let trimmed = body.trim_start();
        if trimmed != ARMOR_HEADER {
            out.push_str(line);
            continue;
        }

        let indent = &body[..body.len() - trimmed.len()];
        let separator = match &line[body.len()..] {
            "" => "\n",
            eol => eol,
        };

        let mut armored = String::from(ARMOR_HEADER);
        armored.push('\n');
        let mut last_eol = None;
        for next in lines.by_ref() {
            let next_body = next.trim_end_matches(LINE_END);
            let next_trimmed = next_body.trim();
            armored.push_str(next_trimmed);
            armored.push('\n');
            if next_trimmed == ARMOR_FOOTER {
                last_eol = Some(&next[next_body.len()..]);
                break;
            }
        }
        let Some(last_eol) = last_eol else {
            return Err(failed(origin, "armored fragment has no end marker"));
        };

        let plaintext = cipher.decrypt(armored.as_bytes(), identities, origin)?;
        let plaintext = String::from_utf8(plaintext)
            .map_err(|_| failed(origin, "decrypted fragment is not valid utf8"))?;
        let plaintext = plaintext.strip_suffix('\n').unwrap_or(&plaintext);

        let mut plain_lines = plaintext.split('\n').peekable();
        while let Some(plain) = plain_lines.next() {
            let plain = plain.strip_suffix('\r').unwrap_or(plain);
            out.push_str(indent);
            out.push_str(plain);
            if plain_lines.peek().is_some() {
                out.push_str(separator);
            } else {
                out.push_str(last_eol);
            }
        }
        fragments += 1;
    }

    trace!(fragments, "inline fragments decrypted");
    Ok(out.into_bytes())
}
