//! In-memory status cache
//!
//! Latest [`WorkloadStatus`] per `namespace/name`. Every successful poll
//! replaces the whole map; there is no merge with the previous contents, so a
//! workload missing from the latest report set disappears immediately.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::models::WorkloadStatus;

#[derive(Debug, Default)]
pub struct StatusCache {
    entries: RwLock<HashMap<String, WorkloadStatus>>,
}

impl StatusCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly built map. The map is assembled before the write
    /// lock is taken, so readers are blocked only for the swap itself.
    pub fn replace_all<I>(&self, statuses: I)
    where
        I: IntoIterator<Item = (String, WorkloadStatus)>,
    {
        let fresh: HashMap<String, WorkloadStatus> = statuses.into_iter().collect();
        *self.entries.write() = fresh;
    }

    /// Exact-key lookup
    pub fn get(&self, key: &str) -> Option<WorkloadStatus> {
        self.entries.read().get(key).cloned()
    }

    /// Clone of every cached status, in no particular order
    pub fn snapshot(&self) -> Vec<WorkloadStatus> {
        self.entries.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttestationReport;
    use chrono::Utc;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn entry(namespace: &str, name: &str, attested: bool) -> (String, WorkloadStatus) {
        let report = AttestationReport {
            pod_name: name.to_string(),
            namespace: namespace.to_string(),
            attested,
            ..Default::default()
        };
        (report.key(), WorkloadStatus::from_report(&report, Utc::now()))
    }

    #[test]
    fn test_starts_empty() {
        let cache = StatusCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert!(cache.snapshot().is_empty());
        assert!(cache.get("ns/x").is_none());
    }

    #[test]
    fn test_replace_all_drops_previous_keys() {
        let cache = StatusCache::new();
        cache.replace_all(vec![entry("ns", "a", true), entry("ns", "b", true)]);
        assert_eq!(cache.len(), 2);

        cache.replace_all(vec![entry("ns", "b", false), entry("other", "c", true)]);

        let keys: HashSet<String> = cache
            .snapshot()
            .iter()
            .map(|s| format!("{}/{}", s.namespace, s.name))
            .collect();
        let expected: HashSet<String> = ["ns/b", "other/c"].iter().map(|k| k.to_string()).collect();
        assert_eq!(keys, expected);
        assert!(cache.get("ns/a").is_none());
        assert!(!cache.get("ns/b").unwrap().attested);
    }

    #[test]
    fn test_replace_with_nothing_empties_cache() {
        let cache = StatusCache::new();
        cache.replace_all(vec![entry("ns", "a", true)]);
        cache.replace_all(Vec::new());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let cache = StatusCache::new();
        cache.replace_all(vec![entry("ns", "a", true), entry("ns", "a", false)]);
        assert_eq!(cache.len(), 1);
        assert!(!cache.get("ns/a").unwrap().attested);
    }

    #[test]
    fn test_readers_never_see_partial_map() {
        let cache = Arc::new(StatusCache::new());
        let batch: Vec<_> = (0..50).map(|i| entry("ns", &format!("pod-{}", i), true)).collect();

        let writer = {
            let cache = Arc::clone(&cache);
            let batch = batch.clone();
            std::thread::spawn(move || {
                for round in 0..200 {
                    if round % 2 == 0 {
                        cache.replace_all(batch.clone());
                    } else {
                        cache.replace_all(Vec::new());
                    }
                }
            })
        };

        for _ in 0..200 {
            let seen = cache.snapshot().len();
            assert!(seen == 0 || seen == 50, "observed partial map of {} entries", seen);
        }

        writer.join().unwrap();
    }
}
