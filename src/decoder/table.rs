// SPDX-FileCopyrightText: 2025 ruzu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Construction of the fast-dispatch table and the decode query.
//!
//! The catalog of matchers is ordered by specificity (more fixed bits
//! first), a small hand-curated override list is partitioned to the front,
//! and every matcher is projected through a reduced k-bit index into the
//! buckets it could match in. Construction runs once per visitor type; the
//! resulting table is immutable and decode is a projection plus an
//! in-order scan of one bucket.

use thiserror::Error;

use super::bit_pattern::{BitPattern, PatternError};
use super::matcher::{Handler, Matcher};
use super::Visitor;

/// Errors from compiling a catalog into a decode table. These are defects
/// in static configuration, reported once at construction; decode itself
/// cannot fail.
#[derive(Debug, Error)]
pub enum DecodeTableError {
    #[error("catalog entry {name:?}: {source}")]
    Pattern {
        name: &'static str,
        #[source]
        source: PatternError,
    },

    #[error(
        "catalog entry {name:?}: handler takes {arity} fields but pattern {bitstring:?} \
         defines {fields}"
    )]
    HandlerArity {
        name: &'static str,
        bitstring: &'static str,
        arity: usize,
        fields: usize,
    },

    #[error("catalog has {0} entries, more than a decode table supports")]
    CatalogTooLarge(usize),
}

/// One uncompiled catalog entry: everything needed to produce a matcher.
pub struct CatalogEntry<V: Visitor> {
    name: &'static str,
    bitstring: &'static str,
    arity: usize,
    handler: Handler<V>,
}

impl<V: Visitor> CatalogEntry<V> {
    /// `arity` is the number of field arguments the handler forwards; it is
    /// checked against the compiled pattern at table construction.
    pub fn new(
        name: &'static str,
        bitstring: &'static str,
        arity: usize,
        handler: Handler<V>,
    ) -> Self {
        Self {
            name,
            bitstring,
            arity,
            handler,
        }
    }
}

/// Matcher names that are promoted ahead of everything else in every bucket
/// they appear in, regardless of specificity.
///
/// Raw specificity is not always the correct precedence signal: a pattern
/// group's catch-all can be a bit-subset of unrelated, more specific
/// patterns that must not claim its words. Membership is exact-string
/// match on the display name.
#[derive(Debug, Clone, Default)]
pub struct OverrideSet {
    names: Vec<&'static str>,
}

impl OverrideSet {
    pub fn new(names: &[&'static str]) -> Self {
        Self {
            names: names.to_vec(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|&n| n == name)
    }
}

/// A fixed reduction of a 32-bit word to a k-bit bucket index.
///
/// `project` must select a fixed subset of bit positions (shift/or of
/// disjoint ranges) so that it can be applied to masks and expected values
/// as well as to instruction words, and must yield values below
/// `1 << bits`.
#[derive(Clone, Copy)]
pub struct IndexProjection {
    pub bits: u32,
    pub project: fn(u32) -> u32,
}

/// The immutable fast-dispatch table: `2^k` buckets of matcher indices in
/// decode-precedence order.
///
/// Buckets store indices into one shared matcher list rather than matcher
/// copies. Once built the table is never mutated; lookups are pure reads
/// and need no synchronization.
pub struct DecodeTable<V: Visitor> {
    matchers: Vec<Matcher<V>>,
    buckets: Vec<Vec<u16>>,
    projection: IndexProjection,
}

impl<V: Visitor> std::fmt::Debug for DecodeTable<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodeTable")
            .field("matchers", &self.matchers.len())
            .field("buckets", &self.buckets.len())
            .finish_non_exhaustive()
    }
}

impl<V: Visitor> DecodeTable<V> {
    /// Compile and order the catalog, then fill the buckets.
    pub fn build(
        catalog: Vec<CatalogEntry<V>>,
        overrides: &OverrideSet,
        projection: IndexProjection,
    ) -> Result<Self, DecodeTableError> {
        let mut matchers = Vec::with_capacity(catalog.len());
        for entry in catalog {
            let pattern =
                BitPattern::parse(entry.bitstring).map_err(|source| DecodeTableError::Pattern {
                    name: entry.name,
                    source,
                })?;
            if pattern.fields().len() != entry.arity {
                return Err(DecodeTableError::HandlerArity {
                    name: entry.name,
                    bitstring: entry.bitstring,
                    arity: entry.arity,
                    fields: pattern.fields().len(),
                });
            }
            matchers.push(Matcher::new(entry.name, pattern, entry.handler));
        }

        if matchers.len() > usize::from(u16::MAX) {
            return Err(DecodeTableError::CatalogTooLarge(matchers.len()));
        }

        // A matcher with more fixed bits is more specific, so it must be
        // tried before broader patterns that also match the same word.
        // Catalog order breaks ties (sort_by is stable).
        matchers.sort_by(|a, b| b.mask().count_ones().cmp(&a.mask().count_ones()));

        // Exceptions to the above rule of thumb.
        let (mut ordered, rest): (Vec<_>, Vec<_>) = matchers
            .into_iter()
            .partition(|m| overrides.contains(m.name()));
        ordered.extend(rest);

        let size = 1usize << projection.bits;
        let mut buckets: Vec<Vec<u16>> = vec![Vec::new(); size];
        for (index, matcher) in ordered.iter().enumerate() {
            let mask = (projection.project)(matcher.mask());
            let expected = (projection.project)(matcher.expected());
            for (slot, bucket) in buckets.iter_mut().enumerate() {
                if (slot as u32 & mask) == expected {
                    bucket.push(index as u16);
                }
            }
        }

        let longest = buckets.iter().map(Vec::len).max().unwrap_or(0);
        log::debug!(
            "decode table built: {} matchers, {} buckets, longest bucket {}",
            ordered.len(),
            size,
            longest
        );

        Ok(Self {
            matchers: ordered,
            buckets,
            projection,
        })
    }

    /// Resolve one instruction word.
    ///
    /// Returns the highest-precedence matcher whose pattern matches, or
    /// `None` if the word is an undefined/unallocated encoding. The latter
    /// is an expected outcome, not a fault; policy for it belongs to the
    /// caller.
    #[inline]
    pub fn lookup(&self, word: u32) -> Option<&Matcher<V>> {
        let bucket = &self.buckets[(self.projection.project)(word) as usize];
        bucket
            .iter()
            .map(|&index| &self.matchers[index as usize])
            .find(|m| m.matches(word))
    }

    /// All matchers in decode-precedence order (overrides first, then by
    /// descending specificity). Useful for diagnostics and exhaustive
    /// cross-checks in tests.
    pub fn matchers(&self) -> &[Matcher<V>] {
        &self.matchers
    }
}
