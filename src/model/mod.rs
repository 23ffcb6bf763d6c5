// Copyright 2025 the Symbol Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Symbol data model and the storage seam

pub mod symbol;

pub use symbol::{
    Attributes, CapStyle, FillRule, JoinStyle, PathStyle, Symbol, SymbolIndex, UNSAVED,
};

use std::collections::BTreeMap;

/// Storage collaborator that holds saved symbols by library index
pub trait SymbolStore {
    /// Fetch a saved symbol
    fn load(&self, index: SymbolIndex) -> Option<Symbol>;

    /// Save a symbol, returning the index it was stored under
    ///
    /// Index [`UNSAVED`] allocates a new slot.
    fn save(&mut self, index: SymbolIndex, symbol: Symbol) -> SymbolIndex;
}

/// In-memory symbol store, ordered by index
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    symbols: BTreeMap<SymbolIndex, Symbol>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate over `(index, symbol)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (SymbolIndex, &Symbol)> {
        self.symbols.iter().map(|(index, symbol)| (*index, symbol))
    }

    fn next_index(&self) -> SymbolIndex {
        self.symbols
            .keys()
            .next_back()
            .map_or(1, |last| last.saturating_add(1))
    }
}

impl SymbolStore for MemoryStore {
    fn load(&self, index: SymbolIndex) -> Option<Symbol> {
        self.symbols.get(&index).cloned()
    }

    fn save(&mut self, index: SymbolIndex, symbol: Symbol) -> SymbolIndex {
        let index = if index == UNSAVED { self.next_index() } else { index };
        self.symbols.insert(index, symbol);
        tracing::debug!("Stored symbol at index {}", index);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsaved_symbols_get_new_slots() {
        let mut store = MemoryStore::new();
        assert_eq!(store.save(UNSAVED, Symbol::default()), 1);
        assert_eq!(store.save(UNSAVED, Symbol::default()), 2);
        assert_eq!(store.save(7, Symbol::default()), 7);
        assert_eq!(store.save(UNSAVED, Symbol::default()), 8);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn saving_existing_index_overwrites() {
        let mut store = MemoryStore::new();
        let index = store.save(UNSAVED, Symbol::default());
        let mut replacement = Symbol::default();
        replacement.attributes.filled = false;
        assert_eq!(store.save(index, replacement.clone()), index);
        assert_eq!(store.load(index), Some(replacement));
        assert_eq!(store.len(), 1);
        assert!(store.load(99).is_none());
    }
}
