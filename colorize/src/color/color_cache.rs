// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Deduplicates [`Color`] values so that repeated requests for the same channels hand
//! back the same shared [`Arc`].
//!
//! ## Concurrency
//!
//! The map sits behind a [`RwLock`]. Lookups take the read lock. A miss builds the
//! value outside of any lock and then inserts it with [`Entry::or_insert`] under the
//! write lock, so two threads racing on the first insert of the same key both end up
//! with whichever instance got stored first. An entry is only ever visible once it is
//! fully constructed.
//!
//! Entries are never evicted, there are at most 2^32 distinct keys and in practice a
//! CLI program uses a handful of colors.
//!
//! [`Entry::or_insert`]: std::collections::hash_map::Entry::or_insert

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use rustc_hash::FxHashMap;

use crate::{Color, HexColorParseError, parse_hex_color};

/// Composite cache key, the exact `(red, green, blue, alpha)` tuple.
pub type ColorCacheKey = (u8, u8, u8, u8);

/// Process wide instance used by [`Color::from_rgb`] and friends.
static COLOR_CACHE_GLOBAL: LazyLock<ColorCache> = LazyLock::new(ColorCache::new);

/// A thread safe registry of shared [`Color`] instances.
///
/// Most code uses [`ColorCache::global()`] (via [`Color::from_rgb`]). Create your own
/// with [`ColorCache::new()`] when you need an isolated instance, eg: in tests that
/// count entries.
#[derive(Debug, Default)]
pub struct ColorCache {
    map: RwLock<FxHashMap<ColorCacheKey, Arc<Color>>>,
}

impl ColorCache {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn global() -> &'static ColorCache { &COLOR_CACHE_GLOBAL }

    /// Returns the shared instance for these channels, creating it on first use.
    pub fn lookup_rgba(&self, red: u8, green: u8, blue: u8, alpha: u8) -> Arc<Color> {
        let key: ColorCacheKey = (red, green, blue, alpha);

        // Colors are plain values, a panic while holding the lock can't leave the map
        // in a half written state, so poisoning is ignored.
        if let Some(hit) = self
            .map
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            tracing::trace!(message = "color cache hit", key = ?key);
            return Arc::clone(hit);
        }

        let color = Arc::new(Color::new(red, green, blue, alpha));
        let mut map = self.map.write().unwrap_or_else(PoisonError::into_inner);
        let stored = Arc::clone(map.entry(key).or_insert(color));
        tracing::trace!(message = "color cache miss", key = ?key, size = map.len());
        stored
    }

    /// Shorthand for [`Self::lookup_rgba`] with a zero alpha.
    pub fn lookup_rgb(&self, red: u8, green: u8, blue: u8) -> Arc<Color> {
        self.lookup_rgba(red, green, blue, 0)
    }

    /// Parse `#RGB` or `#RRGGBB` and return the shared instance for the result.
    ///
    /// # Errors
    ///
    /// Returns a [`HexColorParseError`] if `input` isn't a well formed hex color. Nothing
    /// is inserted into the cache in that case.
    pub fn lookup_hex(&self, input: &str) -> Result<Arc<Color>, HexColorParseError> {
        let (red, green, blue) = parse_hex_color(input)?;
        Ok(self.lookup_rgb(red, green, blue))
    }

    /// Number of distinct colors created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_same_key_same_instance() {
        let cache = ColorCache::new();
        let first = cache.lookup_rgb(1, 2, 3);
        let second = cache.lookup_rgb(1, 2, 3);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq2!(cache.len(), 1);
    }

    #[test]
    fn test_miss_stores_and_returns_new_instance() {
        let cache = ColorCache::new();
        let created = cache.lookup_rgba(10, 20, 30, 40);
        assert_eq2!(*created, Color::new(10, 20, 30, 40));
        assert_eq2!(cache.len(), 1);
        // The map holds one clone, the caller holds the other.
        assert_eq2!(Arc::strong_count(&created), 2);
    }

    #[test]
    fn test_different_keys() {
        let cache = ColorCache::new();
        assert!(cache.is_empty());
        cache.lookup_rgb(1, 2, 3);
        cache.lookup_rgb(3, 2, 1);
        cache.lookup_rgba(1, 2, 3, 4);
        assert_eq2!(cache.len(), 3);
    }

    #[test]
    fn test_caches_are_isolated() {
        let one = ColorCache::new();
        let two = ColorCache::new();
        let a = one.lookup_rgb(9, 9, 9);
        let b = two.lookup_rgb(9, 9, 9);
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq2!(*a, *b);
    }

    #[test]
    fn test_lookup_hex() {
        let cache = ColorCache::new();
        let from_hex = cache.lookup_hex("#e88388").unwrap();
        let from_rgb = cache.lookup_rgb(232, 131, 136);
        assert!(Arc::ptr_eq(&from_hex, &from_rgb));
    }

    #[test]
    fn test_lookup_hex_error_inserts_nothing() {
        let cache = ColorCache::new();
        assert!(cache.lookup_hex("#XYZ").is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_lookups_converge() {
        let cache = Arc::new(ColorCache::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    (0..=255_u8)
                        .map(|it| cache.lookup_rgb(it, it, it))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let results: Vec<Vec<Arc<Color>>> =
            handles.into_iter().map(|it| it.join().unwrap()).collect();

        assert_eq2!(cache.len(), 256);
        for other in &results[1..] {
            for (lhs, rhs) in results[0].iter().zip(other) {
                assert_eq2!(**lhs, **rhs);
            }
        }
        // After the dust settles every key resolves to one stored instance.
        for it in 0..=255_u8 {
            let stored = cache.lookup_rgb(it, it, it);
            assert!(Arc::ptr_eq(&stored, &cache.lookup_rgb(it, it, it)));
        }
    }
}
