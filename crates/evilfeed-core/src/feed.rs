//! Typed structures for the risk getList payload, plus URL normalization.
//!
//! The payload is a JSON object with a `data` array of records carrying
//! `src_url` and `evilclass`. Decoding is fail-closed: a body that does not
//! match this shape is a parse error and aborts the run before any output
//! file is touched.

use anyhow::{Context, Result};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::fmt;

/// Root feed payload (top-level wrapper).
#[derive(Debug, Deserialize)]
pub struct FeedPayload {
    pub data: Vec<FeedRecord>,
}

/// One feed record. Records with an empty `src_url` are skipped downstream.
#[derive(Debug, Deserialize)]
pub struct FeedRecord {
    #[serde(default)]
    pub src_url: String,
    /// Threat category code. The feed has been seen sending this as a JSON
    /// number or a numeric string; both are accepted.
    #[serde(default, deserialize_with = "category_code")]
    pub evilclass: u32,
}

fn category_code<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    struct CodeVisitor;

    impl<'de> de::Visitor<'de> for CodeVisitor {
        type Value = u32;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer category code (number or numeric string)")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u32, E> {
            u32::try_from(v).map_err(E::custom)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u32, E> {
            u32::try_from(v).map_err(E::custom)
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<u32, E> {
            s.trim().parse::<u32>().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(CodeVisitor)
}

/// Decodes the raw feed body. Fails closed on anything that is not the
/// expected object-with-`data`-array shape (including an empty body).
pub fn parse_feed(body: &[u8]) -> Result<FeedPayload> {
    serde_json::from_slice(body).context("malformed feed payload")
}

/// Normalizes a feed URL: removes zero width spaces, trims whitespace,
/// strips trailing slashes, and strips a leading `http://` or `https://`
/// prefix (case-insensitive).
pub fn clean_url(raw: &str) -> String {
    let without_zero_width: String = raw
        .chars()
        .filter(|c| !matches!(c, '\u{200B}'..='\u{200D}' | '\u{FEFF}'))
        .collect();
    let trimmed = without_zero_width.trim().trim_end_matches('/');
    strip_scheme(trimmed).to_string()
}

fn strip_scheme(s: &str) -> &str {
    for prefix in ["https://", "http://"] {
        if s.len() >= prefix.len() && s[..prefix.len()].eq_ignore_ascii_case(prefix) {
            return &s[prefix.len()..];
        }
    }
    s
}
