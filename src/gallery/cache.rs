// SPDX-License-Identifier: MPL-2.0
//! Decoded-image cache for instant re-navigation.
//!
//! Keeps the most recently viewed decodes in memory so stepping back to a
//! neighbour does not re-read and re-decode the file. Bounded by entry
//! count and by total RGBA bytes; least recently used entries go first.

use crate::gallery::loader::LoadedImage;
use lru::LruCache;
use std::fmt;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Maximum number of decoded images kept around.
const CACHE_CAPACITY: usize = 8;

/// Total byte budget (64 MB, roughly eight full-HD decodes).
const MAX_CACHE_BYTES: usize = 64 * 1024 * 1024;

/// Cached decode plus its memory footprint.
struct CacheEntry {
    image: LoadedImage,
    /// Width * height * 4 bytes per RGBA pixel.
    size_bytes: usize,
}

impl CacheEntry {
    fn new(image: LoadedImage) -> Self {
        let size_bytes = (image.width as usize) * (image.height as usize) * 4;
        Self { image, size_bytes }
    }
}

/// LRU cache mapping file paths to decoded images.
pub struct ImageCache {
    entries: LruCache<PathBuf, CacheEntry>,
    current_bytes: usize,
}

impl ImageCache {
    /// # Panics
    ///
    /// Panics if `CACHE_CAPACITY` is zero, which would indicate a build
    /// configuration error.
    #[must_use]
    pub fn new() -> Self {
        let capacity =
            NonZeroUsize::new(CACHE_CAPACITY).expect("CACHE_CAPACITY must be non-zero");
        Self {
            entries: LruCache::new(capacity),
            current_bytes: 0,
        }
    }

    /// Looks up a decode by path, refreshing its recency on a hit.
    ///
    /// The returned clone is cheap; the pixel buffer inside the handle is
    /// reference-counted.
    pub fn get(&mut self, path: &Path) -> Option<LoadedImage> {
        self.entries.get(path).map(|entry| entry.image.clone())
    }

    /// Inserts a decode, evicting older entries until both limits hold.
    ///
    /// Returns `false` when the image alone would dominate the byte budget;
    /// such images are cheaper to re-decode than to let them flush the rest
    /// of the cache.
    pub fn insert(&mut self, path: PathBuf, image: LoadedImage) -> bool {
        let entry = CacheEntry::new(image);
        if entry.size_bytes > MAX_CACHE_BYTES / 2 {
            return false;
        }

        // Reinserting a path replaces its entry instead of duplicating it.
        if let Some(existing) = self.entries.pop(&path) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        while !self.entries.is_empty()
            && (self.entries.len() == CACHE_CAPACITY
                || self.current_bytes + entry.size_bytes > MAX_CACHE_BYTES)
        {
            if let Some((_, evicted)) = self.entries.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
            }
        }

        self.current_bytes += entry.size_bytes;
        self.entries.put(path, entry);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageCache")
            .field("images", &self.entries.len())
            .field("bytes", &self.current_bytes)
            .finish()
    }
}
