// SPDX-FileCopyrightText: 2025 ruzu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoder front end of the ruzu ARM64 recompiler.
//!
//! Instruction encodings are described by declarative 32-character bit
//! patterns and bound to methods on a visitor trait ([`A64Visitor`]). At
//! first use the full catalog is compiled into an immutable fast-dispatch
//! table: matchers are ordered by specificity (with a short hand-curated
//! override list), projected onto a 12-bit index, and grouped into buckets
//! so that a decode is one projection plus a short linear scan.
//!
//! ```no_run
//! use rdynarmic::{A64Decoder, A64Visitor, Visitor};
//!
//! struct Disasm;
//!
//! impl Visitor for Disasm {
//!     type Output = String;
//! }
//!
//! impl A64Visitor for Disasm {
//!     fn unimplemented_instruction(&mut self, name: &'static str) -> String {
//!         name.to_owned()
//!     }
//!
//!     fn ret(&mut self, rn: u32) -> String {
//!         format!("RET X{rn}")
//!     }
//! }
//!
//! let decoder = A64Decoder::<Disasm>::new().unwrap();
//! let mut visitor = Disasm;
//! if let Some(matcher) = decoder.decode(0xD65F03C0) {
//!     assert_eq!(matcher.dispatch(&mut visitor, 0xD65F03C0), "RET X30");
//! }
//! ```
//!
//! The JIT backend, CPU state container, and run loop live elsewhere; this
//! crate only resolves instruction words to handlers.

pub mod a64;
pub mod decoder;

pub use a64::{A64Decoder, A64Visitor};
pub use decoder::{
    BitPattern, CatalogEntry, DecodeTable, DecodeTableCache, DecodeTableError, FieldValues,
    IndexProjection, Matcher, OverrideSet, PatternError, Visitor,
};
