//! Feed fetch: one HTTP GET of the risk endpoint, body into memory.
//!
//! Uses the curl crate (libcurl). The endpoint serves a JSON payload small
//! enough to buffer whole; the response is handed to the feed parser as-is.

use crate::config::EvilfeedConfig;
use crate::retry::{run_with_retry, FetchError, RetryPolicy};
use anyhow::{Context, Result};
use std::time::Duration;

/// Static request headers the feed endpoint expects.
const REQUEST_HEADERS: &[(&str, &str)] = &[
    ("Content-Type", "application/json"),
    ("Connection", "keep-alive"),
    ("Cache-Control", "no-cache"),
    ("Accept", "*/*"),
];

/// Fetches the feed payload from `endpoint`, retrying transient failures
/// per the configured policy. Non-2xx responses and curl errors that
/// survive the retry loop abort the run.
pub fn fetch_feed(cfg: &EvilfeedConfig, endpoint: &str) -> Result<Vec<u8>> {
    let policy = RetryPolicy::from_config(cfg.retry.as_ref());
    let body = run_with_retry(&policy, || fetch_once(endpoint, cfg))
        .with_context(|| format!("GET {} failed", endpoint))?;
    tracing::debug!("fetched {} bytes from {}", body.len(), endpoint);
    Ok(body)
}

/// One GET attempt. Returns the raw body on a 2xx response.
fn fetch_once(url: &str, cfg: &EvilfeedConfig) -> Result<Vec<u8>, FetchError> {
    let (code, body) = perform(url, cfg).map_err(FetchError::Curl)?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }
    Ok(body)
}

fn perform(url: &str, cfg: &EvilfeedConfig) -> Result<(u32, Vec<u8>), curl::Error> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(cfg.timeout_secs))?;

    let mut list = curl::easy::List::new();
    for (name, value) in REQUEST_HEADERS {
        list.append(&format!("{}: {}", name, value))?;
    }
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    Ok((code, body))
}
