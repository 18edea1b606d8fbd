//! `Translate`: a provider wrapper that memoizes language lists.
//!
//! Supported-language lists rarely change during a session, so the facade
//! keeps the first successful answer for each code. Detection and translation
//! are passed straight through.

use crate::error::Result;
use crate::translator::{Direction, Language, Translation, Translator};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Cache counters for one facade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CacheCounters {
    hits: usize,
    misses: usize,
    uncacheable: usize,
}

/// Snapshot of a facade's language cache.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: usize,

    /// Lookups for a non-empty code that went to the provider
    pub misses: usize,

    /// Lookups that bypass the cache: an empty code, or any code on a
    /// facade built with `Translate::uncached`
    pub uncacheable: usize,

    /// Number of codes currently cached
    pub cached_codes: usize,

    /// Percentage of cacheable lookups answered from the cache
    pub hit_rate: f64,
}

/// Memoizing wrapper around a resolved provider.
///
/// Every operation takes `&mut self`; share a facade between threads only
/// behind a lock, or give each thread its own.
pub struct Translate<T = Box<dyn Translator>> {
    inner: T,
    langs: HashMap<String, Arc<[Language]>>,
    caching: bool,
    counters: CacheCounters,
}

impl<T: Translator> Translate<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            langs: HashMap::new(),
            caching: true,
            counters: CacheCounters::default(),
        }
    }

    /// Facade that always asks the provider.
    pub fn uncached(inner: T) -> Self {
        Self {
            caching: false,
            ..Self::new(inner)
        }
    }

    /// Languages supported by the provider, reported in `code`.
    ///
    /// A successful answer for a non-empty code is kept for the lifetime of
    /// the facade and the same list is returned on every later call. An
    /// empty code has no stable cache key and always reaches the provider.
    /// Errors are never cached.
    pub fn get_langs(&mut self, code: &str) -> Result<Arc<[Language]>> {
        if code.is_empty() || !self.caching {
            self.counters.uncacheable += 1;
            return self.inner.get_langs(code).map(Arc::from);
        }

        if let Some(langs) = self.langs.get(code) {
            self.counters.hits += 1;
            debug!("{}: language list for '{}' served from cache", self.inner.name(), code);
            return Ok(Arc::clone(langs));
        }

        self.counters.misses += 1;
        let langs: Arc<[Language]> = self.inner.get_langs(code)?.into();
        debug!(
            "{}: cached {} languages for '{}'",
            self.inner.name(),
            langs.len(),
            code
        );
        self.langs.insert(code.to_string(), Arc::clone(&langs));
        Ok(langs)
    }

    pub fn detect(&mut self, text: &str) -> Result<Language> {
        self.inner.detect(text)
    }

    pub fn translate(&mut self, text: &str, direction: &Direction) -> Result<Translation> {
        self.inner.translate(text, direction)
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Codes with a cached language list, sorted.
    pub fn cached_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.langs.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    pub fn stats(&self) -> CacheStats {
        let CacheCounters {
            hits,
            misses,
            uncacheable,
        } = self.counters;
        let total = hits + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        CacheStats {
            hits,
            misses,
            uncacheable,
            cached_codes: self.langs.len(),
            hit_rate,
        }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Unwrap the provider, dropping the cache.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Translator> std::fmt::Debug for Translate<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translate")
            .field("provider", &self.inner.name())
            .field("caching", &self.caching)
            .field("cached_codes", &self.cached_codes())
            .finish()
    }
}
