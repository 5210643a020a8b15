// SPDX-FileCopyrightText: 2025 ruzu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The A64 front end: the instruction catalog and a cached decoder over it.

pub mod catalog;
pub mod visitor;

use std::sync::Arc;
use std::sync::OnceLock;

use crate::decoder::{DecodeTable, DecodeTableCache, DecodeTableError, Matcher};

pub use visitor::A64Visitor;

fn global_cache() -> &'static DecodeTableCache {
    static TABLES: OnceLock<DecodeTableCache> = OnceLock::new();
    TABLES.get_or_init(DecodeTableCache::new)
}

/// An A64 instruction decoder specialized to one visitor type.
///
/// Construction resolves the decode table for `V` from a process-wide
/// cache, building it on first use; constructing further decoders for the
/// same visitor type is cheap and shares the table.
pub struct A64Decoder<V: A64Visitor + 'static> {
    table: Arc<DecodeTable<V>>,
}

impl<V: A64Visitor + 'static> A64Decoder<V> {
    pub fn new() -> Result<Self, DecodeTableError> {
        let table = global_cache().get_or_build(|| {
            DecodeTable::build(
                catalog::catalog::<V>(),
                &catalog::overrides(),
                catalog::A64_PROJECTION,
            )
        })?;
        Ok(Self { table })
    }

    /// Resolve one instruction word to its matcher, or `None` for an
    /// undefined encoding. Dispatch is the caller's move so that it can
    /// handle undefined encodings by its own policy first.
    #[inline]
    pub fn decode(&self, word: u32) -> Option<&Matcher<V>> {
        self.table.lookup(word)
    }

    /// The underlying decode table.
    pub fn table(&self) -> &DecodeTable<V> {
        &self.table
    }
}
