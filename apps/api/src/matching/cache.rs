//! Short-lived memo of match results keyed on the skill set.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use lru::LruCache;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;

use crate::matching::catalog::Role;
use crate::matching::matcher::{match_careers, Match};

const KEY_SEPARATOR: char = '\u{1f}';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

struct CachedMatches {
    computed_at: Instant,
    matches: Arc<Vec<Match>>,
}

/// LRU of match lists, each valid for `ttl`.
///
/// The key is order-insensitive: `[sql, python]` and `[Python, sql]` share an entry.
pub struct MatchCache {
    entries: Mutex<LruCache<String, CachedMatches>>,
    stats: Mutex<CacheStats>,
    ttl: Duration,
}

impl MatchCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            stats: Mutex::new(CacheStats::default()),
            ttl,
        }
    }

    /// Returns the cached matches for `skills`, recomputing when absent or expired.
    pub fn get_or_compute<S: AsRef<str>>(&self, skills: &[S], catalog: &[Role]) -> Arc<Vec<Match>> {
        let key = cache_key(skills);

        {
            let mut entries = self.entries.lock();
            if let Some(cached) = entries.get(&key) {
                if cached.computed_at.elapsed() < self.ttl {
                    self.stats.lock().hits += 1;
                    return Arc::clone(&cached.matches);
                }
                entries.pop(&key);
            }
        }

        self.stats.lock().misses += 1;
        debug!(skills = skills.len(), "match cache miss");
        let matches = Arc::new(match_careers(skills, catalog));

        self.entries.lock().put(
            key,
            CachedMatches {
                computed_at: Instant::now(),
                matches: Arc::clone(&matches),
            },
        );
        matches
    }

    pub fn stats(&self) -> CacheStats {
        *self.stats.lock()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

fn cache_key<S: AsRef<str>>(skills: &[S]) -> String {
    let mut normalized: Vec<String> = skills
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    normalized.sort();
    normalized.dedup();
    normalized.join(&KEY_SEPARATOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::catalog::CATALOG;

    #[test]
    fn test_permuted_skills_hit_the_same_entry() {
        let cache = MatchCache::new(8, Duration::from_secs(300));
        let first = cache.get_or_compute(&["sql", "python"], CATALOG);
        let second = cache.get_or_compute(&["Python ", "SQL", "sql"], CATALOG);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_expired_entries_are_recomputed() {
        let cache = MatchCache::new(8, Duration::ZERO);
        let first = cache.get_or_compute(&["python"], CATALOG);
        let second = cache.get_or_compute(&["python"], CATALOG);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn test_capacity_evicts_least_recent() {
        let cache = MatchCache::new(2, Duration::from_secs(300));
        cache.get_or_compute(&["a"], CATALOG);
        cache.get_or_compute(&["b"], CATALOG);
        cache.get_or_compute(&["c"], CATALOG);
        assert_eq!(cache.len(), 2);
        cache.get_or_compute(&["a"], CATALOG);
        assert_eq!(cache.stats().misses, 4);
    }

    #[test]
    fn test_cached_result_matches_direct_computation() {
        let cache = MatchCache::new(8, Duration::from_secs(300));
        let skills = ["python", "statistics"];
        assert_eq!(*cache.get_or_compute(&skills, CATALOG), match_careers(&skills, CATALOG));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let cache = MatchCache::new(0, Duration::from_secs(300));
        cache.get_or_compute(&["python"], CATALOG);
        assert_eq!(cache.len(), 1);
    }
}
