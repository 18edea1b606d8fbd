//! Direction graph: which languages each source language translates into.

use crate::translator::{Direction, Language};
use std::collections::HashMap;

/// Maps a source language to the languages it can be translated into.
///
/// Each target list keeps first-seen order and never holds two languages with
/// the same code. The graph only grows. Population takes `&mut self`; share it
/// behind a lock if it has to be filled from several threads.
#[derive(Debug, Clone, Default)]
pub struct Targets {
    sources: HashMap<Language, Vec<Language>>,
}

impl Targets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `targets` to the list of `source`, skipping languages already
    /// present. Appending the same pair again is a no-op.
    pub fn append<I>(&mut self, source: Language, targets: I)
    where
        I: IntoIterator<Item = Language>,
    {
        let list = self.sources.entry(source).or_default();
        for target in targets {
            if !list.contains(&target) {
                list.push(target);
            }
        }
    }

    /// Targets reachable from `source`, in insertion order.
    pub fn get(&self, source: &Language) -> Option<&[Language]> {
        self.sources.get(source).map(Vec::as_slice)
    }

    /// True if `direction.to` is a known target of `direction.from`.
    pub fn supports(&self, direction: &Direction) -> bool {
        self.get(&direction.from)
            .map(|list| list.contains(&direction.to))
            .unwrap_or(false)
    }

    /// Source languages, sorted by code.
    pub fn sources(&self) -> Vec<&Language> {
        let mut sources: Vec<_> = self.sources.keys().collect();
        sources.sort();
        sources
    }

    /// Every known direction, grouped by source (sorted by code) and then in
    /// target insertion order.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.sources().into_iter().flat_map(move |source| {
            self.sources[source]
                .iter()
                .map(move |target| Direction::new(source.clone(), target.clone()))
        })
    }

    /// Number of source languages.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
