//! Blocklist model: deduplicated (url, category) entries and the three
//! output dialects.

use crate::feed::{clean_url, FeedRecord};
use std::collections::BTreeMap;

/// One blocklist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Normalized URL (scheme and trailing slashes stripped).
    pub url: String,
    /// Opaque threat category code, passed through from the feed.
    pub category: u32,
}

/// Deduplicated set of entries, keyed by normalized URL.
///
/// Backed by a BTreeMap so iteration (and therefore every rendered file) is
/// in lexicographic URL order, keeping diffs between runs minimal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Blocklist {
    entries: BTreeMap<String, u32>,
}

impl Blocklist {
    /// Builds a blocklist from raw feed records: URLs are normalized, empty
    /// ones skipped, and duplicates dropped with first occurrence winning.
    pub fn from_records(records: &[FeedRecord]) -> Self {
        let mut entries = BTreeMap::new();
        for record in records {
            let url = clean_url(&record.src_url);
            if url.is_empty() {
                continue;
            }
            // First occurrence wins.
            entries.entry(url).or_insert(record.evilclass);
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entry> + '_ {
        self.entries.iter().map(|(url, category)| Entry {
            url: url.clone(),
            category: *category,
        })
    }

    /// Primary list: `<url> #<category>` per line.
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for (url, category) in &self.entries {
            out.push_str(url);
            out.push_str(" #");
            out.push_str(&category.to_string());
            out.push('\n');
        }
        out
    }

    /// Adblock Plus dialect: `||<url>^` per line, no category comment.
    pub fn render_abp(&self) -> String {
        let mut out = String::new();
        for url in self.entries.keys() {
            out.push_str("||");
            out.push_str(url);
            out.push_str("^\n");
        }
        out
    }

    /// uBlock Origin dialect: `||<url>^$all` per line, no category comment.
    pub fn render_ubo(&self) -> String {
        let mut out = String::new();
        for url in self.entries.keys() {
            out.push_str("||");
            out.push_str(url);
            out.push_str("^$all\n");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str, category: u32) -> FeedRecord {
        let json = format!(r#"{{"src_url": {:?}, "evilclass": {}}}"#, url, category);
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn dedupes_by_url_counting_n_minus_d() {
        // 3 raw pairs, 1 duplicate url -> 2 entries.
        let records = vec![
            record("a.com/x", 1),
            record("a.com/x", 1),
            record("b.com/y", 5),
        ];
        let list = Blocklist::from_records(&records);
        assert_eq!(list.len(), 2);

        let entries: Vec<Entry> = list.iter().collect();
        assert_eq!(entries[0].url, "a.com/x");
        assert_eq!(entries[0].category, 1);
        assert_eq!(entries[1].url, "b.com/y");
        assert_eq!(entries[1].category, 5);
    }

    #[test]
    fn first_occurrence_wins() {
        let records = vec![record("a.com/x", 1), record("a.com/x", 9)];
        let list = Blocklist::from_records(&records);
        assert_eq!(list.render_plain(), "a.com/x #1\n");
    }

    #[test]
    fn dedupes_after_normalization() {
        // Same URL under different spellings collapses to one entry.
        let records = vec![
            record("https://a.com/x", 2),
            record("http://a.com/x/", 4),
            record("a.com/x", 8),
        ];
        let list = Blocklist::from_records(&records);
        assert_eq!(list.len(), 1);
        assert_eq!(list.render_plain(), "a.com/x #2\n");
    }

    #[test]
    fn skips_empty_urls() {
        let records = vec![record("", 1), record("a.com", 2)];
        let list = Blocklist::from_records(&records);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn renders_sorted_newline_terminated() {
        let records = vec![record("b.com/y", 5), record("a.com/x", 1)];
        let list = Blocklist::from_records(&records);
        assert_eq!(list.render_plain(), "a.com/x #1\nb.com/y #5\n");
        assert_eq!(list.render_abp(), "||a.com/x^\n||b.com/y^\n");
        assert_eq!(list.render_ubo(), "||a.com/x^$all\n||b.com/y^$all\n");
    }

    #[test]
    fn adblock_dialects_carry_no_category_comment() {
        let records = vec![record("a.com/x", 1)];
        let list = Blocklist::from_records(&records);
        assert!(!list.render_abp().contains('#'));
        assert!(!list.render_ubo().contains('#'));
    }

    #[test]
    fn rendering_is_deterministic() {
        let records = vec![record("b.com", 2), record("a.com", 1), record("c.com", 3)];
        let list = Blocklist::from_records(&records);
        let again = Blocklist::from_records(&records);
        assert_eq!(list.render_plain(), again.render_plain());
        assert_eq!(list.render_abp(), again.render_abp());
        assert_eq!(list.render_ubo(), again.render_ubo());
    }

    #[test]
    fn empty_records_give_empty_list() {
        let list = Blocklist::from_records(&[]);
        assert!(list.is_empty());
        assert_eq!(list.render_plain(), "");
    }
}
