//! Memoised cell layouts for columns with repetitive content.
//!
//! A [`RenderCache`] maps a [`CellLayout`] plus the hash of the cell text to
//! the laid-out block. The text itself is stored next to the block and
//! compared on every lookup, so a hash collision degrades to a miss and never
//! returns another cell's lines.
//!
//! The key does not describe the frame, which is why a cache must not outlive
//! the render call that created it.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::rc::Rc;

use lru::LruCache;

use crate::layout::CellLayout;

/// Entries kept when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    layout: CellLayout,
    text_hash: u64,
}

impl CacheKey {
    fn new(layout: &CellLayout, text: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        Self {
            layout: *layout,
            text_hash: hasher.finish(),
        }
    }
}

struct CacheEntry {
    text: Box<str>,
    lines: Rc<[String]>,
}

/// Snapshot of cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to lay the cell out.
    pub misses: u64,
    /// Entries currently held.
    pub size: usize,
    /// Maximum number of entries.
    pub capacity: usize,
}

impl CacheStats {
    /// Fraction of lookups that hit, `0.0` before the first lookup.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hits, {} misses, {}/{} entries",
            self.hits, self.misses, self.size, self.capacity
        )
    }
}

/// LRU memo of laid-out cell blocks.
pub struct RenderCache {
    entries: LruCache<CacheKey, CacheEntry>,
    hits: u64,
    misses: u64,
}

impl RenderCache {
    /// Cache holding up to [`DEFAULT_CAPACITY`] blocks.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Cache holding up to `capacity` blocks (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Lay `text` out with `layout`, reusing an identical earlier result.
    pub fn lay_out(&mut self, layout: &CellLayout, text: &str) -> Rc<[String]> {
        let key = CacheKey::new(layout, text);
        if let Some(entry) = self.entries.get(&key) {
            if &*entry.text == text {
                self.hits += 1;
                log::trace!(
                    target: "framegrid::cache",
                    "hit width={} hash={:#x}",
                    layout.width,
                    key.text_hash
                );
                return Rc::clone(&entry.lines);
            }
            log::trace!(target: "framegrid::cache", "hash collision at {:#x}", key.text_hash);
        }

        self.misses += 1;
        let lines: Rc<[String]> = layout.lay_out(text).into();
        self.entries.put(
            key,
            CacheEntry {
                text: text.into(),
                lines: Rc::clone(&lines),
            },
        );
        lines
    }

    /// Current counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
            capacity: self.entries.cap().get(),
        }
    }
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RenderCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderCache").field("stats", &self.stats()).finish()
    }
}
