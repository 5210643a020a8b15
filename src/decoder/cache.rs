// SPDX-FileCopyrightText: 2025 ruzu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build-once caching of decode tables, keyed by visitor type.
//!
//! A table is deterministic, immutable, and moderately expensive to build
//! (O(2^k * N)), so it is constructed at most once per visitor type and
//! shared for the life of the cache. The process-wide instance used by the
//! A64 front end lives for the whole run and is never invalidated; tests
//! that need a fresh table construct their own `DecodeTableCache`.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::table::{DecodeTable, DecodeTableError};
use super::Visitor;

/// Type-keyed cache of built decode tables.
#[derive(Default)]
pub struct DecodeTableCache {
    tables: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl DecodeTableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached table for visitor type `V`, building it with
    /// `build` if this is the first request.
    ///
    /// Initialization is exactly-once: concurrent first-time callers
    /// serialize on the write lock and all receive the same published
    /// table. A build error is returned to the caller and nothing is
    /// published.
    pub fn get_or_build<V, F>(&self, build: F) -> Result<Arc<DecodeTable<V>>, DecodeTableError>
    where
        V: Visitor + 'static,
        F: FnOnce() -> Result<DecodeTable<V>, DecodeTableError>,
    {
        let key = TypeId::of::<V>();

        if let Some(table) = self.tables.read().get(&key).and_then(downcast::<V>) {
            return Ok(table);
        }

        let mut tables = self.tables.write();
        if let Some(table) = tables.get(&key).and_then(downcast::<V>) {
            // Another thread built it between our read and write locks;
            // its table is the published one.
            return Ok(table);
        }

        let table = Arc::new(build()?);
        tables.insert(key, table.clone());
        Ok(table)
    }
}

fn downcast<V: Visitor + 'static>(
    entry: &Arc<dyn Any + Send + Sync>,
) -> Option<Arc<DecodeTable<V>>> {
    entry.clone().downcast::<DecodeTable<V>>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::matcher::FieldValues;
    use crate::decoder::table::{CatalogEntry, IndexProjection, OverrideSet};

    struct VisitorA;
    struct VisitorB;

    impl Visitor for VisitorA {
        type Output = ();
    }

    impl Visitor for VisitorB {
        type Output = ();
    }

    fn top_nibble(word: u32) -> u32 {
        word >> 28
    }

    const TOP_NIBBLE: IndexProjection = IndexProjection {
        bits: 4,
        project: top_nibble,
    };

    fn build_for<V: Visitor<Output = ()>>() -> Result<DecodeTable<V>, DecodeTableError> {
        fn handler<V: Visitor<Output = ()>>(_: &mut V, _: &FieldValues) {}
        let catalog = vec![CatalogEntry::new(
            "Only",
            "1111----------------------------",
            0,
            handler::<V>,
        )];
        DecodeTable::build(catalog, &OverrideSet::empty(), TOP_NIBBLE)
    }

    #[test]
    fn test_same_table_returned_for_same_visitor() {
        let cache = DecodeTableCache::new();
        let first = cache.get_or_build(build_for::<VisitorA>).unwrap();
        let second = cache.get_or_build(build_for::<VisitorA>).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_distinct_visitor_types_get_distinct_tables() {
        let cache = DecodeTableCache::new();
        let a = cache.get_or_build(build_for::<VisitorA>).unwrap();
        let b = cache.get_or_build(build_for::<VisitorB>).unwrap();
        assert_eq!(a.matchers().len(), b.matchers().len());
        // Different TypeId keys: building B must not disturb A's entry.
        let a_again = cache.get_or_build(build_for::<VisitorA>).unwrap();
        assert!(Arc::ptr_eq(&a, &a_again));
    }

    #[test]
    fn test_build_error_is_not_cached() {
        let cache = DecodeTableCache::new();
        let err = cache.get_or_build::<VisitorA, _>(|| {
            Err(DecodeTableError::CatalogTooLarge(1_000_000))
        });
        assert!(err.is_err());
        // A later successful build still goes through.
        assert!(cache.get_or_build(build_for::<VisitorA>).is_ok());
    }

    #[test]
    fn test_concurrent_first_use_publishes_one_table() {
        let cache = Arc::new(DecodeTableCache::new());
        let tables: Vec<_> = std::thread::scope(|scope| {
            (0..8)
                .map(|_| {
                    let cache = Arc::clone(&cache);
                    scope.spawn(move || cache.get_or_build(build_for::<VisitorA>).unwrap())
                })
                .collect::<Vec<_>>()
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });
        for table in &tables[1..] {
            assert!(Arc::ptr_eq(&tables[0], table));
        }
    }
}
