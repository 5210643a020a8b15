// SPDX-FileCopyrightText: 2025 ruzu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Instruction-set-independent decode machinery.
//!
//! A decoder for a concrete ISA front end is assembled from three parts:
//! bit patterns compiled from declarative pattern strings
//! ([`BitPattern`]), matchers binding a pattern to a visitor method
//! ([`Matcher`]), and the fast-dispatch table built once from the full
//! catalog ([`DecodeTable`]).

pub mod bit_pattern;
pub mod cache;
pub mod matcher;
pub mod table;

pub use bit_pattern::{BitPattern, Field, PatternError, WORD_BITS};
pub use cache::DecodeTableCache;
pub use matcher::{FieldValues, Handler, Matcher, MAX_FIELDS};
pub use table::{CatalogEntry, DecodeTable, DecodeTableError, IndexProjection, OverrideSet};

/// A consumer of decoded instructions.
///
/// Concrete ISA visitor traits (e.g. [`crate::A64Visitor`]) extend this with
/// one method per instruction mnemonic. `Output` is whatever the visitor
/// produces per instruction: emitted IR, a disassembly string, an
/// interpreter result.
pub trait Visitor {
    type Output;
}
