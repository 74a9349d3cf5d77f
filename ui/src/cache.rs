//! In-memory query cache shared by the fetch hooks.
//!
//! The cache is constructed once in [`crate::App`] and handed to hooks via
//! Yew context, so tests and independent app instances each get their own.
//! Entries are keyed by query-key string, judged fresh or stale only at read
//! time, and overwritten on refetch. Nothing is evicted proactively and
//! nothing survives a page reload.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use jiff::{SignedDuration, Timestamp};

/// Freshness window applied when a hook does not specify one.
pub const DEFAULT_CACHE_TIME: SignedDuration = SignedDuration::from_mins(5);

struct CacheEntry {
    value: Rc<dyn Any>,
    inserted_at: Timestamp,
    /// Sequence number of the fetch that produced this value, per key.
    /// Commits from older in-flight fetches are discarded so a slow
    /// response cannot clobber a newer one.
    seq: u64,
}

#[derive(Default)]
struct Inner {
    entries: HashMap<String, CacheEntry>,
    issued: HashMap<String, u64>,
}

/// Process-wide-per-app keyed cache with time-based freshness.
///
/// Values are type-erased; a downcast mismatch on read behaves like a miss.
/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct QueryCache {
    inner: Rc<RefCell<Inner>>,
}

// Entries are type-erased, so there is nothing meaningful to print beyond
// the identity of the shared map.
impl std::fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCache")
            .field("inner", &Rc::as_ptr(&self.inner))
            .finish()
    }
}

// Context equality: two handles are equal iff they share the same map.
impl PartialEq for QueryCache {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `key`, returning the cached value only if it is younger than
    /// `max_age`. Stale entries are left in place and simply ignored.
    pub fn get_fresh<T: Clone + 'static>(
        &self,
        key: &str,
        max_age: SignedDuration,
    ) -> Option<T> {
        let inner = self.inner.borrow();
        let entry = inner.entries.get(key)?;
        let age = Timestamp::now().duration_since(entry.inserted_at);
        if age >= max_age {
            return None;
        }
        entry.value.downcast_ref::<T>().cloned()
    }

    /// Register the start of a fetch for `key`, returning its sequence
    /// number. Sequence numbers increase monotonically per key.
    pub fn begin_fetch(&self, key: &str) -> u64 {
        let mut inner = self.inner.borrow_mut();
        let seq = inner.issued.entry(key.to_string()).or_insert(0);
        *seq += 1;
        *seq
    }

    /// Store a fetch result, timestamped now. Returns false (and stores
    /// nothing) when a fetch with a newer sequence number already committed
    /// for this key.
    pub fn commit<T: 'static>(&self, key: &str, seq: u64, value: T) -> bool {
        let mut inner = self.inner.borrow_mut();
        if let Some(existing) = inner.entries.get(key)
            && existing.seq > seq
        {
            return false;
        }
        inner.entries.insert(
            key.to_string(),
            CacheEntry {
                value: Rc::new(value),
                inserted_at: Timestamp::now(),
                seq,
            },
        );
        true
    }

    /// Drop a single entry. A missing key is not an error.
    pub fn remove(&self, key: &str) {
        self.inner.borrow_mut().entries.remove(key);
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.inner.borrow_mut().entries.clear();
    }

    #[cfg(test)]
    fn backdate(&self, key: &str, by: SignedDuration) {
        let mut inner = self.inner.borrow_mut();
        if let Some(entry) = inner.entries.get_mut(key) {
            entry.inserted_at = entry.inserted_at - by;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_entry_is_returned_without_a_new_fetch() {
        let cache = QueryCache::new();
        let seq = cache.begin_fetch("props:{}");
        assert!(cache.commit("props:{}", seq, vec![1, 2, 3]));

        let hit: Option<Vec<i32>> =
            cache.get_fresh("props:{}", DEFAULT_CACHE_TIME);
        assert_eq!(hit, Some(vec![1, 2, 3]));
    }

    #[test]
    fn stale_entry_is_ignored_on_read() {
        let cache = QueryCache::new();
        let seq = cache.begin_fetch("tags");
        cache.commit("tags", seq, "cached".to_string());
        cache.backdate("tags", SignedDuration::from_mins(6));

        let hit: Option<String> = cache.get_fresh("tags", DEFAULT_CACHE_TIME);
        assert_eq!(hit, None);

        // A refetch refreshes the timestamp and the entry is fresh again.
        let seq = cache.begin_fetch("tags");
        cache.commit("tags", seq, "refetched".to_string());
        let hit: Option<String> = cache.get_fresh("tags", DEFAULT_CACHE_TIME);
        assert_eq!(hit, Some("refetched".to_string()));
    }

    #[test]
    fn type_mismatch_reads_as_a_miss() {
        let cache = QueryCache::new();
        let seq = cache.begin_fetch("tags");
        cache.commit("tags", seq, 7u32);

        let hit: Option<String> = cache.get_fresh("tags", DEFAULT_CACHE_TIME);
        assert_eq!(hit, None);
    }

    #[test]
    fn out_of_order_resolution_does_not_clobber_newer_result() {
        let cache = QueryCache::new();
        let slow = cache.begin_fetch("movie:1");
        let fast = cache.begin_fetch("movie:1");

        assert!(cache.commit("movie:1", fast, "newer".to_string()));
        assert!(!cache.commit("movie:1", slow, "older".to_string()));

        let hit: Option<String> =
            cache.get_fresh("movie:1", DEFAULT_CACHE_TIME);
        assert_eq!(hit, Some("newer".to_string()));
    }

    #[test]
    fn remove_drops_only_the_named_key() {
        let cache = QueryCache::new();
        let seq = cache.begin_fetch("a");
        cache.commit("a", seq, 1i64);
        let seq = cache.begin_fetch("b");
        cache.commit("b", seq, 2i64);

        cache.remove("a");
        assert_eq!(cache.get_fresh::<i64>("a", DEFAULT_CACHE_TIME), None);
        assert_eq!(cache.get_fresh::<i64>("b", DEFAULT_CACHE_TIME), Some(2));
    }

    #[test]
    fn clear_drops_everything() {
        let cache = QueryCache::new();
        let seq = cache.begin_fetch("a");
        cache.commit("a", seq, 1i64);
        let seq = cache.begin_fetch("b");
        cache.commit("b", seq, 2i64);

        cache.clear();
        assert_eq!(cache.get_fresh::<i64>("a", DEFAULT_CACHE_TIME), None);
        assert_eq!(cache.get_fresh::<i64>("b", DEFAULT_CACHE_TIME), None);
    }

    #[test]
    fn clones_share_the_same_entries() {
        let cache = QueryCache::new();
        let handle = cache.clone();
        let seq = handle.begin_fetch("a");
        handle.commit("a", seq, 1i64);

        assert_eq!(cache.get_fresh::<i64>("a", DEFAULT_CACHE_TIME), Some(1));
        assert_eq!(cache, handle);
        assert_ne!(cache, QueryCache::new());
    }
}
