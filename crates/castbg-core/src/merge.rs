//! Union-merge of freshly fetched and previously saved backgrounds.

use std::collections::HashSet;

use crate::entry::BackgroundEntry;

/// Result of [`merge`].
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// `fresh ++ saved` deduplicated by key, first occurrence kept.
    pub entries: Vec<BackgroundEntry>,
    /// Distinct keys of `fresh` that `saved` does not contain.
    pub new_count: usize,
}

/// Merges two lists by entry key. Saved entries missing from the fetch are kept,
/// and for duplicate keys the fresh entry wins.
pub fn merge(fresh: Vec<BackgroundEntry>, saved: Vec<BackgroundEntry>) -> MergeOutcome {
    let saved_keys: HashSet<String> = saved.iter().map(BackgroundEntry::key).collect();
    let mut seen: HashSet<String> = HashSet::with_capacity(fresh.len() + saved.len());
    let mut entries = Vec::with_capacity(fresh.len() + saved.len());
    let mut new_count = 0;

    for entry in fresh {
        let key = entry.key();
        if seen.contains(&key) {
            continue;
        }
        if !saved_keys.contains(&key) {
            new_count += 1;
        }
        seen.insert(key);
        entries.push(entry);
    }
    for entry in saved {
        if seen.insert(entry.key()) {
            entries.push(entry);
        }
    }

    MergeOutcome { entries, new_count }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(urls: &[&str]) -> Vec<BackgroundEntry> {
        urls.iter().map(|u| BackgroundEntry::new(*u)).collect()
    }

    fn keys(list: &[BackgroundEntry]) -> HashSet<String> {
        list.iter().map(BackgroundEntry::key).collect()
    }

    #[test]
    fn union_keeps_saved_only_entries() {
        let fresh = entries(&["https://x/s1920/a.jpg", "https://x/s1920/b.jpg"]);
        let saved = entries(&["https://x/s220/b.jpg", "https://x/s220/c.jpg"]);
        let out = merge(fresh, saved);
        let urls: Vec<&str> = out.entries.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(
            urls,
            [
                "https://x/s1920/a.jpg",
                "https://x/s1920/b.jpg",
                "https://x/s220/c.jpg"
            ]
        );
        assert_eq!(out.new_count, 1);
    }

    #[test]
    fn first_occurrence_wins() {
        let fresh = vec![BackgroundEntry::new("https://x/s1/a.jpg").with_author("new")];
        let saved = vec![BackgroundEntry::new("https://y/s2/a.jpg").with_author("old")];
        let out = merge(fresh, saved);
        assert_eq!(out.entries.len(), 1);
        assert_eq!(out.entries[0].author.as_deref(), Some("new"));
        assert_eq!(out.new_count, 0);
    }

    #[test]
    fn key_set_is_union_in_either_order() {
        let a = entries(&["https://x/s1/a.jpg", "https://x/s1/b.jpg", "https://x/s1/a.jpg"]);
        let b = entries(&["https://x/s2/b.jpg", "https://x/s2/c%20d.jpg"]);
        let expected: HashSet<String> = keys(&a).union(&keys(&b)).cloned().collect();

        let ab = merge(a.clone(), b.clone());
        let ba = merge(b, a);
        assert_eq!(keys(&ab.entries), expected);
        assert_eq!(keys(&ba.entries), expected);
        assert_eq!(ab.entries.len(), expected.len());
    }

    #[test]
    fn new_count_is_fresh_keys_not_saved() {
        let a = entries(&["https://x/s1/a.jpg", "https://x/s1/b.jpg", "https://x/s1/e.jpg"]);
        let b = entries(&["https://x/s2/b.jpg", "https://x/s2/c.jpg"]);
        let out = merge(a, b.clone());
        assert_eq!(out.new_count, 2);
        assert_eq!(out.new_count, out.entries.len() - b.len());
    }

    #[test]
    fn duplicate_of_saved_gives_zero_new() {
        let fresh = entries(&["https://x/s1920/a.jpg"]);
        let saved = entries(&["https://x/s220/a.jpg"]);
        assert_eq!(merge(fresh, saved).new_count, 0);
    }

    #[test]
    fn duplicates_in_saved_do_not_shrink_new_count() {
        let fresh = entries(&["https://x/s1/b.jpg"]);
        let saved = entries(&["https://x/s1/a.jpg", "https://x/s2/a.jpg"]);
        let out = merge(fresh, saved.clone());
        assert_eq!(out.new_count, 1);
        assert_eq!(
            out.entries.iter().map(BackgroundEntry::key).collect::<Vec<_>>(),
            ["b.jpg", "a.jpg"]
        );
        assert_eq!(out.entries[1].url, "https://x/s1/a.jpg");
        // a length difference would report zero new backgrounds here
        assert_eq!(out.entries.len(), saved.len());
    }

    #[test]
    fn empty_inputs() {
        let out = merge(Vec::new(), Vec::new());
        assert!(out.entries.is_empty());
        assert_eq!(out.new_count, 0);
        let out = merge(entries(&["https://x/s1/a.jpg"]), Vec::new());
        assert_eq!(out.new_count, 1);
    }
}
