//! Two-queue cache with probationary admission.
//!
//! Keys enter an **admission** queue on first insert and move to a
//! **protected** queue only when they are looked up again. Sequence
//! membership is the only frequency signal: admission means "seen once",
//! protected means "seen at least twice". One-off scans therefore churn the
//! admission queue and leave the protected working set alone.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────────┐
//! │                        TwoQueueCache<K, V> Layout                        │
//! │                                                                          │
//! │   index: FxHashMap<K, SlotId>        arena: SlotArena<Node<K, V>>        │
//! │   ┌─────────┬────────┐               ┌────────┬────────────────────────┐ │
//! │   │ "page1" │ id_0   │──────────────►│ id_0   │ key,val,Admission,links│ │
//! │   │ "page2" │ id_1   │──────────────►│ id_1   │ key,val,Protected,links│ │
//! │   └─────────┴────────┘               └────────┴────────────────────────┘ │
//! │                                                                          │
//! │   ADMISSION (front = newest)           PROTECTED (front = MRU)           │
//! │   [id_0] ◄──► [..] ◄──► [tail]         [id_1] ◄──► [..] ◄──► [tail]      │
//! │                            │                                   │         │
//! │                          forget ◄──────── demote to admission front      │
//! └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Flows
//!
//! ```text
//!   put(k, v)      k resident?  ── yes ──► Err(DuplicateKey)
//!                      │ no
//!                      ▼
//!                  admission_insert(k)
//!
//!   lookup(k)      in protected ──► move to protected front        → true
//!                  in admission ──► unlink, protected_insert(k)    → true
//!                  otherwise                                        → false
//!
//!   protected_insert(k): push protected front;
//!                        |protected| > capacity ⇒ admission_insert(protected tail)
//!
//!   admission_insert(k): push admission front;
//!                        |admission| > capacity ⇒ forget(admission tail)
//! ```
//!
//! Each queue is capped at `capacity` on its own, so up to `2 × capacity`
//! keys can be resident at once: a full protected queue plus a full
//! admission queue. Demoted keys re-enter admission at the **front**, which
//! gives them the longest grace period before they are forgotten.
//!
//! ## Operations
//!
//! | Operation            | Time | Notes                                  |
//! |----------------------|------|----------------------------------------|
//! | `lookup`             | O(1) | Promotes or refreshes                  |
//! | `put`                | O(1) | May demote and/or forget               |
//! | `fetch` / `peek`     | O(1) | No reordering                          |
//! | `*_position`         | O(n) | Walks one queue                        |
//! | `check_invariants`   | O(n) | Full structural walk                   |
//!
//! ## Thread Safety
//!
//! Not synchronized. `lookup` mutates ordering, so even read-mostly callers
//! need exclusive access; wrap the cache in a single mutex to share it.

use std::fmt;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::ds::{Linked, SlotArena, SlotId, SegmentList};
use crate::error::{CacheError, ConfigError, InvariantError};
use crate::traits::ProbeCache;

#[cfg(feature = "metrics")]
use crate::metrics::{
    metrics_impl::TwoQueueMetrics,
    snapshot::TwoQueueMetricsSnapshot,
    traits::{MetricsSnapshotProvider, TwoQueueMetricsReadRecorder, TwoQueueMetricsRecorder},
};

/// Which queue a resident key currently belongs to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Segment {
    /// Probationary queue: seen once since admission.
    Admission,
    /// Main queue: looked up at least once after admission.
    Protected,
}

/// Arena node: the stored pair plus its queue links.
#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    segment: Segment,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

impl<K, V> Linked for Node<K, V> {
    #[inline]
    fn prev(&self) -> Option<SlotId> {
        self.prev
    }
    #[inline]
    fn next(&self) -> Option<SlotId> {
        self.next
    }
    #[inline]
    fn set_prev(&mut self, prev: Option<SlotId>) {
        self.prev = prev;
    }
    #[inline]
    fn set_next(&mut self, next: Option<SlotId>) {
        self.next = next;
    }
}

/// Fixed-capacity two-queue cache.
///
/// # Type Parameters
///
/// - `K`: Key type, must be `Clone + Eq + Hash`
/// - `V`: Value type
///
/// # Example
///
/// ```
/// use lrufreq::policy::two_queue::{Segment, TwoQueueCache};
///
/// let mut cache = TwoQueueCache::new(3).unwrap();
/// cache.put("a", 1).unwrap();
/// assert_eq!(cache.segment_of(&"a"), Some(Segment::Admission));
///
/// // Second touch promotes.
/// assert!(cache.lookup(&"a"));
/// assert_eq!(cache.segment_of(&"a"), Some(Segment::Protected));
/// assert_eq!(cache.fetch(&"a"), Ok(&1));
///
/// assert!(!cache.lookup(&"missing"));
/// ```
pub struct TwoQueueCache<K, V> {
    index: FxHashMap<K, SlotId>,
    arena: SlotArena<Node<K, V>>,
    /// Newest first; tail is forgotten on overflow.
    admission: SegmentList,
    /// Most recently touched first; tail is demoted on overflow.
    protected: SegmentList,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: TwoQueueMetrics,
}

impl<K, V> TwoQueueCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates an empty cache where each queue holds at most `capacity` keys.
    ///
    /// # Errors
    ///
    /// [`CacheError::InvalidConfiguration`] if `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use lrufreq::policy::two_queue::TwoQueueCache;
    ///
    /// let cache: TwoQueueCache<u64, String> = TwoQueueCache::new(100).unwrap();
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(cache.is_empty());
    ///
    /// assert!(TwoQueueCache::<u64, String>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        Self::with_reserve(capacity, 0)
    }

    /// Like [`new`](Self::new), reserving room for `reserve` entries up front.
    pub(crate) fn with_reserve(capacity: usize, reserve: usize) -> Result<Self, CacheError> {
        validate_capacity(capacity)?;
        Ok(Self {
            index: FxHashMap::with_capacity_and_hasher(reserve, Default::default()),
            arena: SlotArena::with_capacity(reserve),
            admission: SegmentList::new(),
            protected: SegmentList::new(),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: TwoQueueMetrics::default(),
        })
    }

    /// Probes `key`, updating recency and promotion state.
    ///
    /// - In protected: moved to the protected front.
    /// - In admission: unlinked and promoted to the protected front, which
    ///   may demote the protected tail back into admission.
    /// - Absent: `false`, nothing changes.
    ///
    /// # Example
    ///
    /// ```
    /// use lrufreq::policy::two_queue::TwoQueueCache;
    ///
    /// let mut cache = TwoQueueCache::new(3).unwrap();
    /// cache.put("a", ()).unwrap();
    /// cache.put("b", ()).unwrap();
    /// cache.lookup(&"a");
    /// cache.lookup(&"b");
    /// cache.lookup(&"a");
    /// assert_eq!(cache.protected_keys().collect::<Vec<_>>(), vec![&"a", &"b"]);
    /// ```
    pub fn lookup(&mut self, key: &K) -> bool {
        let Some(&id) = self.index.get(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_lookup_miss();
            return false;
        };
        let Some(segment) = self.arena.get(id).map(|node| node.segment) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_lookup_miss();
            return false;
        };

        match segment {
            Segment::Protected => {
                self.protected.move_to_front(&mut self.arena, id);
            },
            Segment::Admission => {
                self.admission.detach(&mut self.arena, id);
                #[cfg(feature = "metrics")]
                self.metrics.record_promotion();
                trace!(slot = id.index(), "promote admission -> protected");
                self.protected_insert(id);
            },
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_lookup_hit();
        self.debug_assert_bounds();
        true
    }

    /// Returns the value of a resident key without reordering anything.
    ///
    /// Meant to follow a [`lookup`](Self::lookup) that returned `true`.
    ///
    /// # Errors
    ///
    /// [`CacheError::KeyNotFound`] if `key` is not resident.
    pub fn fetch(&self, key: &K) -> Result<&V, CacheError> {
        match self.peek(key) {
            Some(value) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_fetch_hit();
                Ok(value)
            },
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_fetch_miss();
                Err(CacheError::KeyNotFound)
            },
        }
    }

    /// Inserts a new key at the admission front.
    ///
    /// Not an upsert: probe with [`lookup`](Self::lookup) first.
    ///
    /// # Errors
    ///
    /// [`CacheError::DuplicateKey`] if `key` is already in either queue.
    ///
    /// # Example
    ///
    /// ```
    /// use lrufreq::error::CacheError;
    /// use lrufreq::policy::two_queue::TwoQueueCache;
    ///
    /// let mut cache = TwoQueueCache::new(3).unwrap();
    /// for k in ["a", "b", "c", "d"] {
    ///     cache.put(k, k.len()).unwrap();
    /// }
    /// // "a" fell off the admission tail.
    /// assert!(!cache.lookup(&"a"));
    /// assert_eq!(cache.put("d", 0), Err(CacheError::DuplicateKey));
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Result<(), CacheError> {
        if self.index.contains_key(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_duplicate_put();
            return Err(CacheError::DuplicateKey);
        }

        let id = self.arena.insert(Node {
            key: key.clone(),
            value,
            segment: Segment::Admission,
            prev: None,
            next: None,
        });
        self.index.insert(key, id);
        #[cfg(feature = "metrics")]
        self.metrics.record_put();

        self.admission_insert(id);
        self.debug_assert_bounds();
        Ok(())
    }

    /// Links `id` at the protected front, demoting the tail on overflow.
    fn protected_insert(&mut self, id: SlotId) {
        self.set_segment(id, Segment::Protected);
        self.protected.push_front(&mut self.arena, id);

        if self.protected.len() > self.capacity {
            if let Some(demoted) = self.protected.pop_back(&mut self.arena) {
                #[cfg(feature = "metrics")]
                self.metrics.record_demotion();
                trace!(slot = demoted.index(), "demote protected -> admission");
                self.admission_insert(demoted);
            }
        }
    }

    /// Links `id` at the admission front, forgetting the tail on overflow.
    fn admission_insert(&mut self, id: SlotId) {
        self.set_segment(id, Segment::Admission);
        self.admission.push_front(&mut self.arena, id);

        if self.admission.len() > self.capacity {
            if let Some(evicted) = self.admission.pop_back(&mut self.arena) {
                // unlinked nodes belong to no queue, so this always forgets
                self.forget(evicted);
            }
        }
    }

    /// Drops an unlinked node from the arena and the index.
    fn forget(&mut self, id: SlotId) {
        if let Some(node) = self.arena.remove(id) {
            self.index.remove(&node.key);
            #[cfg(feature = "metrics")]
            self.metrics.record_forget();
            trace!(slot = id.index(), "forget admission tail");
        }
    }

    #[inline]
    fn set_segment(&mut self, id: SlotId, segment: Segment) {
        if let Some(node) = self.arena.get_mut(id) {
            node.segment = segment;
        }
    }

    #[inline]
    fn debug_assert_bounds(&self) {
        debug_assert_eq!(
            self.index.len(),
            self.admission.len() + self.protected.len(),
            "value store out of step with the queues"
        );
        debug_assert!(self.admission.len() <= self.capacity);
        debug_assert!(self.protected.len() <= self.capacity);
    }
}

impl<K, V> TwoQueueCache<K, V>
where
    K: Eq + Hash,
{
    /// Returns `true` if `key` is resident. Does not promote.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the value for `key` without touching queue order.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = self.index.get(key)?;
        self.arena.get(*id).map(|node| &node.value)
    }

    /// Which queue holds `key`, if any.
    pub fn segment_of(&self, key: &K) -> Option<Segment> {
        let id = self.index.get(key)?;
        self.arena.get(*id).map(|node| node.segment)
    }

    /// Zero-based position of `key` in the admission queue (front = 0).
    pub fn admission_position(&self, key: &K) -> Option<usize> {
        self.position_in(key, Segment::Admission)
    }

    /// Zero-based position of `key` in the protected queue (front = 0).
    ///
    /// # Example
    ///
    /// ```
    /// use lrufreq::policy::two_queue::TwoQueueCache;
    ///
    /// let mut cache = TwoQueueCache::new(3).unwrap();
    /// cache.put(1, "one").unwrap();
    /// assert_eq!(cache.protected_position(&1), None);
    /// cache.lookup(&1);
    /// assert_eq!(cache.protected_position(&1), Some(0));
    /// ```
    pub fn protected_position(&self, key: &K) -> Option<usize> {
        self.position_in(key, Segment::Protected)
    }

    fn position_in(&self, key: &K, segment: Segment) -> Option<usize> {
        let id = *self.index.get(key)?;
        if self.arena.get(id)?.segment != segment {
            return None;
        }
        self.list(segment).position(&self.arena, id)
    }

    fn list(&self, segment: Segment) -> &SegmentList {
        match segment {
            Segment::Admission => &self.admission,
            Segment::Protected => &self.protected,
        }
    }

    /// Admission keys from front (newest) to back (next to be forgotten).
    pub fn admission_keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.admission.iter(&self.arena).map(|(_, node)| &node.key)
    }

    /// Protected keys from front (most recent) to back (next to be demoted).
    pub fn protected_keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.protected.iter(&self.arena).map(|(_, node)| &node.key)
    }

    /// Resident keys across both queues.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Per-queue capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn admission_len(&self) -> usize {
        self.admission.len()
    }

    pub fn protected_len(&self) -> usize {
        self.protected.len()
    }

    /// Removes every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.index.clear();
        self.arena.clear();
        self.admission.clear();
        self.protected.clear();
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
    }

    /// Walks both queues and cross-checks them against the value store.
    ///
    /// Checks link symmetry, recorded lengths, per-queue caps, that every
    /// node's segment tag matches the queue it is linked into, that no key is
    /// linked twice, and that the index maps each key to its own node.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.admission.validate(&self.arena, "admission")?;
        self.protected.validate(&self.arena, "protected")?;

        for (segment, list) in [
            (Segment::Admission, &self.admission),
            (Segment::Protected, &self.protected),
        ] {
            if list.len() > self.capacity {
                return Err(InvariantError::new(format!(
                    "{:?} queue holds {} keys, capacity is {}",
                    segment,
                    list.len(),
                    self.capacity
                )));
            }
        }

        let linked = self.admission.len() + self.protected.len();
        if self.index.len() != linked || self.arena.len() != linked {
            return Err(InvariantError::new(format!(
                "index {} / arena {} entries, but {} keys linked",
                self.index.len(),
                self.arena.len(),
                linked
            )));
        }

        let mut seen: FxHashSet<SlotId> = FxHashSet::default();
        for (segment, list) in [
            (Segment::Admission, &self.admission),
            (Segment::Protected, &self.protected),
        ] {
            for (id, node) in list.iter(&self.arena) {
                if !seen.insert(id) {
                    return Err(InvariantError::new(format!(
                        "slot {} linked into more than one queue",
                        id.index()
                    )));
                }
                if node.segment != segment {
                    return Err(InvariantError::new(format!(
                        "slot {} tagged {:?} but linked into {:?}",
                        id.index(),
                        node.segment,
                        segment
                    )));
                }
                if self.index.get(&node.key) != Some(&id) {
                    return Err(InvariantError::new(format!(
                        "index does not map the key of slot {} back to it",
                        id.index()
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(feature = "metrics")]
impl<K, V> TwoQueueCache<K, V> {
    pub fn metrics(&self) -> &TwoQueueMetrics {
        &self.metrics
    }

    pub fn reset_metrics(&mut self) {
        self.metrics = TwoQueueMetrics::default();
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<TwoQueueMetricsSnapshot> for TwoQueueCache<K, V> {
    fn snapshot(&self) -> TwoQueueMetricsSnapshot {
        TwoQueueMetricsSnapshot::from_metrics(
            &self.metrics,
            self.admission.len(),
            self.protected.len(),
            self.capacity,
        )
    }
}

impl<K, V> fmt::Debug for TwoQueueCache<K, V>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let admission: Vec<&K> = self
            .admission
            .iter(&self.arena)
            .map(|(_, node)| &node.key)
            .collect();
        let protected: Vec<&K> = self
            .protected
            .iter(&self.arena)
            .map(|(_, node)| &node.key)
            .collect();
        f.debug_struct("TwoQueueCache")
            .field("capacity", &self.capacity)
            .field("admission", &admission)
            .field("protected", &protected)
            .finish()
    }
}

impl<K, V> ProbeCache<K, V> for TwoQueueCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn lookup(&mut self, key: &K) -> bool {
        TwoQueueCache::lookup(self, key)
    }

    fn fetch(&self, key: &K) -> Result<&V, CacheError> {
        TwoQueueCache::fetch(self, key)
    }

    fn put(&mut self, key: K, value: V) -> Result<(), CacheError> {
        TwoQueueCache::put(self, key, value)
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

pub(crate) fn validate_capacity(capacity: usize) -> Result<(), ConfigError> {
    if capacity == 0 {
        return Err(ConfigError::new("cache capacity must be greater than zero"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(capacity: usize) -> TwoQueueCache<&'static str, String> {
        TwoQueueCache::new(capacity).unwrap()
    }

    fn put(c: &mut TwoQueueCache<&'static str, String>, key: &'static str) {
        c.put(key, key.to_uppercase()).unwrap();
    }

    fn admission(c: &TwoQueueCache<&'static str, String>) -> Vec<&'static str> {
        c.admission_keys().copied().collect()
    }

    fn protected(c: &TwoQueueCache<&'static str, String>) -> Vec<&'static str> {
        c.protected_keys().copied().collect()
    }

    // ==============================================
    // Construction
    // ==============================================

    mod construction {
        use super::*;

        #[test]
        fn zero_capacity_is_rejected() {
            let err = TwoQueueCache::<u32, u32>::new(0).unwrap_err();
            assert!(matches!(err, CacheError::InvalidConfiguration(_)));
            assert!(err.to_string().contains("capacity"));
        }

        #[test]
        fn new_cache_is_empty() {
            let c = cache(4);
            assert_eq!(c.capacity(), 4);
            assert_eq!(c.len(), 0);
            assert!(c.is_empty());
            assert_eq!(c.admission_len(), 0);
            assert_eq!(c.protected_len(), 0);
            c.check_invariants().unwrap();
        }

        #[test]
        fn capacity_one_is_usable() {
            let mut c = cache(1);
            put(&mut c, "a");
            assert!(c.lookup(&"a"));
            put(&mut c, "b");
            assert_eq!(protected(&c), vec!["a"]);
            assert_eq!(admission(&c), vec!["b"]);
            c.check_invariants().unwrap();
        }
    }

    // ==============================================
    // Put
    // ==============================================

    mod put_behavior {
        use super::*;

        #[test]
        fn put_goes_to_admission_front() {
            let mut c = cache(3);
            put(&mut c, "a");
            put(&mut c, "b");
            assert_eq!(admission(&c), vec!["b", "a"]);
            assert_eq!(c.segment_of(&"a"), Some(Segment::Admission));
            assert!(protected(&c).is_empty());
        }

        #[test]
        fn duplicate_in_admission_is_rejected() {
            let mut c = cache(3);
            put(&mut c, "a");
            assert_eq!(c.put("a", "again".into()), Err(CacheError::DuplicateKey));
            assert_eq!(c.fetch(&"a").unwrap(), "A");
            assert_eq!(c.len(), 1);
        }

        #[test]
        fn duplicate_in_protected_is_rejected() {
            let mut c = cache(3);
            put(&mut c, "a");
            c.lookup(&"a");
            assert_eq!(c.put("a", "again".into()), Err(CacheError::DuplicateKey));
            assert_eq!(c.segment_of(&"a"), Some(Segment::Protected));
        }

        #[test]
        fn admission_overflow_forgets_oldest() {
            let mut c = cache(3);
            for k in ["a", "b", "c", "d"] {
                put(&mut c, k);
            }
            assert_eq!(admission(&c), vec!["d", "c", "b"]);
            assert!(!c.contains(&"a"));
            assert!(!c.lookup(&"a"));
            assert_eq!(c.fetch(&"a"), Err(CacheError::KeyNotFound));
            c.check_invariants().unwrap();
        }

        #[test]
        fn forgotten_key_can_be_put_again() {
            let mut c = cache(2);
            for k in ["a", "b", "c"] {
                put(&mut c, k);
            }
            assert!(!c.contains(&"a"));
            c.put("a", "fresh".into()).unwrap();
            assert_eq!(c.fetch(&"a").unwrap(), "fresh");
        }
    }

    // ==============================================
    // Lookup
    // ==============================================

    mod lookup_behavior {
        use super::*;

        #[test]
        fn miss_changes_nothing() {
            let mut c = cache(3);
            put(&mut c, "a");
            assert!(!c.lookup(&"zzz"));
            assert_eq!(admission(&c), vec!["a"]);
            assert!(protected(&c).is_empty());
        }

        #[test]
        fn hit_in_admission_promotes() {
            let mut c = cache(3);
            put(&mut c, "a");
            put(&mut c, "b");
            assert!(c.lookup(&"a"));
            assert_eq!(admission(&c), vec!["b"]);
            assert_eq!(protected(&c), vec!["a"]);
            assert_eq!(c.protected_position(&"a"), Some(0));
            assert_eq!(c.admission_position(&"a"), None);
        }

        #[test]
        fn hit_in_protected_moves_to_front() {
            let mut c = cache(3);
            put(&mut c, "a");
            put(&mut c, "b");
            c.lookup(&"a");
            c.lookup(&"b");
            assert_eq!(protected(&c), vec!["b", "a"]);
            c.lookup(&"a");
            assert_eq!(protected(&c), vec!["a", "b"]);
            assert!(admission(&c).is_empty());
        }

        #[test]
        fn protected_overflow_demotes_tail_to_admission_front() {
            let mut c = cache(2);
            for k in ["a", "b"] {
                put(&mut c, k);
            }
            c.lookup(&"a");
            c.lookup(&"b");
            put(&mut c, "c");
            // protected [b, a], admission [c]
            c.lookup(&"c");
            assert_eq!(protected(&c), vec!["c", "b"]);
            assert_eq!(admission(&c), vec!["a"]);
            assert_eq!(c.fetch(&"a").unwrap(), "A");
            c.check_invariants().unwrap();
        }

        #[test]
        fn demoted_key_goes_ahead_of_older_admissions() {
            let mut c = cache(2);
            put(&mut c, "a");
            c.lookup(&"a");
            put(&mut c, "b");
            c.lookup(&"b");
            put(&mut c, "x");
            put(&mut c, "c");
            // protected [b, a], admission [c, x]
            c.lookup(&"c");
            // c promoted, a demoted to admission front
            assert_eq!(protected(&c), vec!["c", "b"]);
            assert_eq!(admission(&c), vec!["a", "x"]);
        }

        #[test]
        fn demotion_can_cascade_into_forget() {
            let mut c = cache(2);
            put(&mut c, "a");
            c.lookup(&"a");
            put(&mut c, "b");
            c.lookup(&"b");
            put(&mut c, "x");
            put(&mut c, "y");
            put(&mut c, "z");
            // protected [b, a], admission [z, y]
            c.lookup(&"z");
            // a demoted into admission [a, y]: full, no forget yet
            assert_eq!(admission(&c), vec!["a", "y"]);
            put(&mut c, "w");
            assert_eq!(admission(&c), vec!["w", "a"]);
            assert!(!c.contains(&"y"));
            c.check_invariants().unwrap();
        }

        #[test]
        fn promoted_key_is_demoted_not_forgotten() {
            let mut c = cache(1);
            put(&mut c, "a");
            c.lookup(&"a");
            put(&mut c, "b");
            c.lookup(&"b");
            // protected [b], a demoted into admission
            assert_eq!(protected(&c), vec!["b"]);
            assert_eq!(admission(&c), vec!["a"]);
            assert!(c.lookup(&"a"));
            assert_eq!(protected(&c), vec!["a"]);
            assert_eq!(admission(&c), vec!["b"]);
        }
    }

    // ==============================================
    // Observers
    // ==============================================

    mod observers {
        use super::*;

        #[test]
        fn fetch_and_peek_do_not_reorder() {
            let mut c = cache(3);
            put(&mut c, "a");
            put(&mut c, "b");
            c.lookup(&"a");
            c.lookup(&"b");
            assert_eq!(c.fetch(&"a").unwrap(), "A");
            assert_eq!(c.peek(&"a").map(String::as_str), Some("A"));
            assert_eq!(protected(&c), vec!["b", "a"]);
        }

        #[test]
        fn contains_does_not_promote() {
            let mut c = cache(3);
            put(&mut c, "a");
            assert!(c.contains(&"a"));
            assert_eq!(c.segment_of(&"a"), Some(Segment::Admission));
        }

        #[test]
        fn positions_follow_queue_order() {
            let mut c = cache(4);
            for k in ["a", "b", "c"] {
                put(&mut c, k);
            }
            assert_eq!(c.admission_position(&"c"), Some(0));
            assert_eq!(c.admission_position(&"a"), Some(2));
            assert_eq!(c.admission_position(&"nope"), None);
            assert_eq!(c.protected_position(&"a"), None);
        }

        #[test]
        fn clear_resets_everything_but_capacity() {
            let mut c = cache(3);
            put(&mut c, "a");
            put(&mut c, "b");
            c.lookup(&"a");
            c.clear();
            assert!(c.is_empty());
            assert_eq!(c.capacity(), 3);
            assert!(!c.lookup(&"a"));
            put(&mut c, "a");
            assert_eq!(admission(&c), vec!["a"]);
            c.check_invariants().unwrap();
        }

        #[test]
        fn debug_lists_both_queues() {
            let mut c = cache(3);
            put(&mut c, "a");
            put(&mut c, "b");
            c.lookup(&"b");
            let dbg = format!("{:?}", c);
            assert!(dbg.contains("admission: [\"a\"]"));
            assert!(dbg.contains("protected: [\"b\"]"));
        }
    }

    // ==============================================
    // Residency bounds
    // ==============================================

    mod bounds {
        use super::*;

        #[test]
        fn each_queue_fills_to_full_capacity() {
            let mut c: TwoQueueCache<u32, u32> = TwoQueueCache::new(3).unwrap();
            for k in 0..3 {
                c.put(k, k).unwrap();
                c.lookup(&k);
            }
            for k in 10..13 {
                c.put(k, k).unwrap();
            }
            assert_eq!(c.protected_len(), 3);
            assert_eq!(c.admission_len(), 3);
            assert_eq!(c.len(), 6);
            c.check_invariants().unwrap();
        }

        #[test]
        fn scan_leaves_protected_set_intact() {
            let mut c: TwoQueueCache<u32, u32> = TwoQueueCache::new(8).unwrap();
            for k in 0..4 {
                c.put(k, k).unwrap();
                c.lookup(&k);
            }
            for k in 100..1_000 {
                c.put(k, k).unwrap();
            }
            for k in 0..4 {
                assert_eq!(c.segment_of(&k), Some(Segment::Protected));
            }
            assert_eq!(c.admission_len(), 8);
            c.check_invariants().unwrap();
        }
    }

    // ==============================================
    // Metrics
    // ==============================================

    #[cfg(feature = "metrics")]
    mod metrics {
        use super::*;

        #[test]
        fn counters_track_queue_movement() {
            let mut c = cache(1);
            put(&mut c, "a");
            c.lookup(&"a"); // promote
            put(&mut c, "b");
            c.lookup(&"b"); // promote b, demote a
            put(&mut c, "c"); // forget a
            c.lookup(&"zzz");
            let _ = c.put("c", "dup".into());
            let _ = c.fetch(&"b");
            let _ = c.fetch(&"a");

            let snap = c.snapshot();
            assert_eq!(snap.lookup_hits, 2);
            assert_eq!(snap.lookup_misses, 1);
            assert_eq!(snap.put_new, 3);
            assert_eq!(snap.put_duplicates, 1);
            assert_eq!(snap.promotions, 2);
            assert_eq!(snap.demotions, 1);
            assert_eq!(snap.forgets, 1);
            assert_eq!(snap.fetch_hits, 1);
            assert_eq!(snap.fetch_misses, 1);
            assert_eq!(snap.admission_len, 1);
            assert_eq!(snap.protected_len, 1);
        }

        #[test]
        fn reset_zeroes_counters() {
            let mut c = cache(2);
            put(&mut c, "a");
            c.lookup(&"a");
            c.reset_metrics();
            assert_eq!(c.metrics().lookup_calls, 0);
            assert_eq!(c.snapshot().protected_len, 1);
        }
    }
}
