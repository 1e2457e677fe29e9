//! Memoizes built grids across render cycles. The key pairs a
//! host-supplied batch token with the batch shape, so a recycled token
//! never serves stale rows for a differently-shaped batch.

use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, Mutex},
};

use super::{EpochGrid, GridError};
use crate::frame::Frame;

const MAX_ENTRIES: usize = 8;

/// Bounded least-recently-used memo of built grids.
pub struct GridCache<V> {
    inner: Mutex<CacheInner<V>>,
}

impl<V> GridCache<V> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(CacheInner::new()),
        }
    }

    /// Return the grid cached for this batch, building it on a miss.
    ///
    /// Only successful builds are cached; a failed build propagates its
    /// error and leaves the cache untouched, so the next call retries.
    pub fn get_or_compute(
        &self,
        batch_token: u64,
        frames: &[Frame],
        build: impl FnOnce() -> Result<EpochGrid<V>, GridError>,
    ) -> Result<Arc<EpochGrid<V>>, GridError> {
        let key = CacheKey::new(batch_token, frames);
        {
            let mut inner = self.inner.lock().expect("grid cache lock");
            if let Some(hit) = inner.map.get(&key).cloned() {
                inner.touch(key);
                return Ok(hit);
            }
        }

        let computed = Arc::new(build()?);
        let mut inner = self.inner.lock().expect("grid cache lock");
        if let Some(hit) = inner.map.get(&key).cloned() {
            inner.touch(key);
            return Ok(hit);
        }
        inner.insert(key, Arc::clone(&computed));
        Ok(computed)
    }
}

impl<V> Default for GridCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
    batch_token: u64,
    frame_count: usize,
    field_count: usize,
    row_count: usize,
}

impl CacheKey {
    fn new(batch_token: u64, frames: &[Frame]) -> Self {
        let first = frames.first();
        Self {
            batch_token,
            frame_count: frames.len(),
            field_count: first.map(|frame| frame.fields.len()).unwrap_or(0),
            row_count: first
                .and_then(|frame| frame.fields.first())
                .map(|field| field.values.len())
                .unwrap_or(0),
        }
    }
}

struct CacheInner<V> {
    map: HashMap<CacheKey, Arc<EpochGrid<V>>>,
    order: VecDeque<CacheKey>,
}

impl<V> CacheInner<V> {
    fn new() -> Self {
        Self {
            map: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    fn touch(&mut self, key: CacheKey) {
        self.order.retain(|existing| existing != &key);
        self.order.push_back(key);
    }

    fn insert(&mut self, key: CacheKey, value: Arc<EpochGrid<V>>) {
        self.map.insert(key, value);
        self.touch(key);
        self.evict();
    }

    fn evict(&mut self) {
        while self.map.len() > MAX_ENTRIES {
            let Some(key) = self.order.pop_front() else {
                break;
            };
            self.map.remove(&key);
        }
    }
}
