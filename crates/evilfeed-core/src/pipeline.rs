//! One run of the pipeline: fetch, parse, dedupe, write.
//!
//! Strictly ordered so a fetch or parse failure aborts before any output
//! file is touched; the previous run's files stay in place.

use crate::blocklist::Blocklist;
use crate::config::EvilfeedConfig;
use crate::{feed, fetch, writer};
use anyhow::Result;
use std::path::Path;

pub fn run(cfg: &EvilfeedConfig, endpoint: &str, output_dir: &Path) -> Result<()> {
    let body = fetch::fetch_feed(cfg, endpoint)?;
    let payload = feed::parse_feed(&body)?;
    let list = Blocklist::from_records(&payload.data);

    if list.is_empty() {
        anyhow::bail!("feed contained no usable URLs; previous blocklists kept");
    }

    writer::write_blocklists(output_dir, &list)?;
    tracing::info!(
        "{} URLs written to {} at {}",
        list.len(),
        output_dir.display(),
        chrono::Utc::now().format("%d_%b_%Y_%H_%M_%S-UTC")
    );
    Ok(())
}
