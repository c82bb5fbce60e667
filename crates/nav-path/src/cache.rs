use std::collections::BTreeMap;

use nav_core::{CellIndex, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct CacheKey {
    epoch: u64,
    start: CellIndex,
    goal: CellIndex,
}

/// Cached value: the smoothed polyline plus the goal actually reported.
#[derive(Debug, Clone)]
pub(crate) struct CachedPath {
    pub waypoints: Vec<Vec2>,
    pub goal_cell: CellIndex,
    pub cost: u32,
}

#[derive(Debug)]
struct Entry {
    path: CachedPath,
    last_used: u64,
}

/// Bounded LRU of smoothed paths keyed by (start cell, goal cell, epoch).
///
/// Lookups always use the caller's current epoch, so entries from an older
/// epoch can never be returned; they are reaped first when the cache is over
/// capacity. A `BTreeMap` keeps eviction order deterministic.
#[derive(Debug)]
pub(crate) struct PathCache {
    capacity: usize,
    stamp: u64,
    entries: BTreeMap<CacheKey, Entry>,
}

impl PathCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            stamp: 0,
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&mut self, epoch: u64, start: CellIndex, goal: CellIndex) -> Option<&CachedPath> {
        let key = CacheKey { epoch, start, goal };
        self.stamp += 1;
        let stamp = self.stamp;
        let entry = self.entries.get_mut(&key)?;
        entry.last_used = stamp;
        Some(&entry.path)
    }

    pub fn insert(&mut self, epoch: u64, start: CellIndex, goal: CellIndex, path: CachedPath) {
        if self.capacity == 0 {
            return;
        }

        self.stamp += 1;
        let key = CacheKey { epoch, start, goal };
        self.entries.insert(
            key,
            Entry {
                path,
                last_used: self.stamp,
            },
        );

        while self.entries.len() > self.capacity {
            self.evict_one(epoch);
        }
    }

    /// Drop one entry: a stale-epoch one if any exist, otherwise the least
    /// recently used.
    fn evict_one(&mut self, current_epoch: u64) {
        let stale = self
            .entries
            .keys()
            .find(|key| key.epoch != current_epoch)
            .copied();
        let victim = stale.or_else(|| {
            self.entries
                .iter()
                .min_by_key(|(key, entry)| (entry.last_used, **key))
                .map(|(key, _)| *key)
        });
        if let Some(key) = victim {
            self.entries.remove(&key);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(tag: f32) -> CachedPath {
        CachedPath {
            waypoints: vec![Vec2::new(tag, tag)],
            goal_cell: CellIndex::new(0, 0),
            cost: 0,
        }
    }

    fn cell(x: i32, y: i32) -> CellIndex {
        CellIndex::new(x, y)
    }

    #[test]
    fn lru_evicts_the_least_recently_used() {
        let mut cache = PathCache::new(2);
        cache.insert(0, cell(0, 0), cell(1, 0), path(1.0));
        cache.insert(0, cell(0, 0), cell(2, 0), path(2.0));

        // Touch the first entry, then overflow; the second must go.
        assert!(cache.get(0, cell(0, 0), cell(1, 0)).is_some());
        cache.insert(0, cell(0, 0), cell(3, 0), path(3.0));

        assert_eq!(cache.len(), 2);
        assert!(cache.get(0, cell(0, 0), cell(1, 0)).is_some());
        assert!(cache.get(0, cell(0, 0), cell(2, 0)).is_none());
        assert!(cache.get(0, cell(0, 0), cell(3, 0)).is_some());
    }

    #[test]
    fn stale_epochs_are_never_returned_and_evicted_first() {
        let mut cache = PathCache::new(2);
        cache.insert(0, cell(0, 0), cell(1, 0), path(1.0));
        cache.insert(0, cell(0, 0), cell(2, 0), path(2.0));

        assert!(cache.get(1, cell(0, 0), cell(1, 0)).is_none());

        cache.insert(1, cell(0, 0), cell(1, 0), path(4.0));
        // One of the epoch-0 entries was reaped to make room.
        assert_eq!(cache.len(), 2);
        assert!(cache.get(1, cell(0, 0), cell(1, 0)).is_some());
    }

    #[test]
    fn zero_capacity_caches_nothing() {
        let mut cache = PathCache::new(0);
        cache.insert(0, cell(0, 0), cell(1, 0), path(1.0));
        assert!(cache.is_empty());
    }
}
