//! Atomic output of the blocklist files.
//!
//! Each file is written to a temp path in the target directory and then
//! renamed over the final name, so a reader (or an interrupted run) never
//! observes a truncated list. All three files are fully regenerated each run.

use crate::blocklist::Blocklist;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

pub const PLAIN_FILENAME: &str = "blocklist.txt";
pub const ABP_FILENAME: &str = "blocklist_ABP.txt";
pub const UBO_FILENAME: &str = "blocklist_UBO.txt";

/// Writes all three blocklist dialects into `dir`.
pub fn write_blocklists(dir: &Path, list: &Blocklist) -> Result<()> {
    write_atomic(dir, PLAIN_FILENAME, &list.render_plain())?;
    write_atomic(dir, ABP_FILENAME, &list.render_abp())?;
    write_atomic(dir, UBO_FILENAME, &list.render_ubo())?;
    Ok(())
}

fn write_atomic(dir: &Path, name: &str, contents: &str) -> Result<()> {
    let final_path = dir.join(name);
    let temp_path = dir.join(format!("{}.tmp", name));

    let mut file = fs::File::create(&temp_path)
        .with_context(|| format!("failed to create {}", temp_path.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("failed to write {}", temp_path.display()))?;
    file.sync_all()
        .with_context(|| format!("failed to sync {}", temp_path.display()))?;
    drop(file);

    fs::rename(&temp_path, &final_path).with_context(|| {
        format!(
            "failed to rename {} to {}",
            temp_path.display(),
            final_path.display()
        )
    })?;
    Ok(())
}
