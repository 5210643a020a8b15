// SPDX-FileCopyrightText: 2025 ruzu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! A matcher binds one compiled bit pattern to a display name and a
//! handler. Matching is a mask/compare; dispatch extracts the pattern's
//! named fields and hands them to the bound visitor method.

use super::bit_pattern::BitPattern;
use super::Visitor;

/// Most named fields a single pattern may declare.
pub const MAX_FIELDS: usize = 10;

/// Extracted operand field values, in field-declaration order.
///
/// Fixed capacity so that dispatch never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValues {
    values: [u32; MAX_FIELDS],
    len: usize,
}

impl FieldValues {
    pub(crate) fn new() -> Self {
        Self {
            values: [0; MAX_FIELDS],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, value: u32) {
        if self.len < MAX_FIELDS {
            self.values[self.len] = value;
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.values[..self.len]
    }

    /// Copy the values into a fixed-size array (zero-padded). Used by the
    /// catalog macro to destructure into positional handler arguments; the
    /// table builder has already checked that `N` equals the field count.
    pub fn array<const N: usize>(&self) -> [u32; N] {
        let mut out = [0u32; N];
        for (slot, value) in out.iter_mut().zip(self.as_slice()) {
            *slot = *value;
        }
        out
    }
}

/// A handler thunk: forwards extracted field values to one visitor method.
pub type Handler<V> = fn(&mut V, &FieldValues) -> <V as Visitor>::Output;

/// An immutable instruction matcher: compiled pattern, display name, and
/// the visitor method it dispatches to.
pub struct Matcher<V: Visitor> {
    name: &'static str,
    pattern: BitPattern,
    handler: Handler<V>,
}

impl<V: Visitor> Matcher<V> {
    pub(crate) fn new(name: &'static str, pattern: BitPattern, handler: Handler<V>) -> Self {
        Self {
            name,
            pattern,
            handler,
        }
    }

    /// Display name, used for diagnostics and priority overrides.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fixed-bit mask of the underlying pattern.
    #[inline]
    pub fn mask(&self) -> u32 {
        self.pattern.mask()
    }

    /// Required values of the fixed bits.
    #[inline]
    pub fn expected(&self) -> u32 {
        self.pattern.expected()
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &BitPattern {
        &self.pattern
    }

    /// Does `word` agree with every fixed bit of this pattern?
    #[inline]
    pub fn matches(&self, word: u32) -> bool {
        (word & self.pattern.mask()) == self.pattern.expected()
    }

    /// Extract the named fields from `word` and invoke the bound visitor
    /// method with them as positional arguments.
    ///
    /// Callers are expected to have established `matches(word)`; dispatching
    /// a non-matching word extracts whatever bits happen to be there.
    pub fn dispatch(&self, visitor: &mut V, word: u32) -> V::Output {
        let mut values = FieldValues::new();
        for field in self.pattern.fields() {
            values.push(field.extract(word));
        }
        (self.handler)(visitor, &values)
    }
}

impl<V: Visitor> std::fmt::Debug for Matcher<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("name", &self.name)
            .field("mask", &format_args!("{:#010X}", self.mask()))
            .field("expected", &format_args!("{:#010X}", self.expected()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        fields: Vec<u32>,
    }

    impl Visitor for Recorder {
        type Output = ();
    }

    fn record(v: &mut Recorder, f: &FieldValues) {
        v.fields = f.as_slice().to_vec();
    }

    #[test]
    fn test_matches() {
        let pattern = BitPattern::parse("1101011001011111000000nnnnn00000").unwrap();
        let m: Matcher<Recorder> = Matcher::new("RET", pattern, record);
        assert!(m.matches(0xD65F03C0));
        assert!(!m.matches(0xD65F03C1));
        assert!(!m.matches(0x00000000));
    }

    #[test]
    fn test_dispatch_extracts_in_declared_order() {
        let pattern = BitPattern::parse("aaa-----bbbbbbbb----------cccccc").unwrap();
        let m: Matcher<Recorder> = Matcher::new("test", pattern, record);
        let word = (0b101 << 29) | (0xA5 << 16) | 0b110001;
        let mut visitor = Recorder { fields: Vec::new() };
        m.dispatch(&mut visitor, word);
        assert_eq!(visitor.fields, vec![0b101, 0xA5, 0b110001]);
    }

    #[test]
    fn test_field_values_array_padding() {
        let mut values = FieldValues::new();
        values.push(7);
        values.push(9);
        assert_eq!(values.array::<2>(), [7, 9]);
        assert_eq!(values.array::<4>(), [7, 9, 0, 0]);
    }
}
