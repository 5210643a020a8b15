// SPDX-FileCopyrightText: 2025 ruzu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Compilation of declarative pattern strings into matchable bit patterns.
//!
//! A pattern string has one character per bit of the 32-bit instruction
//! word, most significant bit first:
//!
//! - `'0'` / `'1'`: the bit must have exactly this value,
//! - `'-'`: don't care,
//! - any ASCII letter: part of a named operand field. A maximal run of the
//!   same letter is one field spanning those bit positions.
//!
//! So `"z0S100010hiiiiiiiiiiiinnnnnddddd"` fixes the opcode bits `100010`
//! and declares the fields `z`, `S`, `h`, `i`, `n`, `d` in that order.
//!
//! Pattern strings are static configuration; all errors here are catalog
//! defects reported at table-construction time, never during decode.

use thiserror::Error;

use super::matcher::MAX_FIELDS;

/// Width of an instruction word in bits.
pub const WORD_BITS: usize = 32;

/// Errors from compiling a pattern string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern {bitstring:?} is {len} characters, expected {WORD_BITS}")]
    WrongLength { bitstring: String, len: usize },

    #[error("pattern {bitstring:?} contains invalid character {ch:?}")]
    InvalidChar { bitstring: String, ch: char },

    #[error("pattern {bitstring:?} reuses field character {ch:?} non-contiguously")]
    NonContiguousField { bitstring: String, ch: char },

    #[error("pattern {bitstring:?} declares {count} fields, at most {MAX_FIELDS} supported")]
    TooManyFields { bitstring: String, count: usize },
}

/// One named operand field: a contiguous run of bit positions, most
/// significant first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: char,
    positions: Vec<u32>,
}

impl Field {
    /// The pattern character naming this field.
    pub fn name(&self) -> char {
        self.name
    }

    /// Width of the field in bits.
    pub fn width(&self) -> usize {
        self.positions.len()
    }

    /// Extract this field's bits from `word`, reassembled in declared order
    /// into an unsigned integer.
    #[inline]
    pub fn extract(&self, word: u32) -> u32 {
        self.positions
            .iter()
            .fold(0, |acc, &bit| (acc << 1) | ((word >> bit) & 1))
    }
}

/// A compiled bit pattern: which bits are fixed, what values they must
/// take, and where the named operand fields live.
///
/// Invariant: `mask & expected == expected`, and every bit position belongs
/// to exactly one of {fixed, wildcard, a single field}.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitPattern {
    mask: u32,
    expected: u32,
    fields: Vec<Field>,
}

impl BitPattern {
    /// Compile a pattern string.
    pub fn parse(bitstring: &str) -> Result<Self, PatternError> {
        if bitstring.len() != WORD_BITS {
            return Err(PatternError::WrongLength {
                bitstring: bitstring.to_owned(),
                len: bitstring.len(),
            });
        }

        let mut mask = 0u32;
        let mut expected = 0u32;
        let mut fields: Vec<Field> = Vec::new();

        for (i, &byte) in bitstring.as_bytes().iter().enumerate() {
            let bit = (WORD_BITS - 1 - i) as u32;
            match byte {
                b'0' => mask |= 1 << bit,
                b'1' => {
                    mask |= 1 << bit;
                    expected |= 1 << bit;
                }
                b'-' => {}
                ch if ch.is_ascii_alphabetic() => {
                    let name = ch as char;
                    if let Some(last) = fields.last_mut() {
                        if last.name == name {
                            // Still in the same run only if the previous
                            // character was this field too.
                            if last.positions.last().copied() == Some(bit + 1) {
                                last.positions.push(bit);
                                continue;
                            }
                            return Err(PatternError::NonContiguousField {
                                bitstring: bitstring.to_owned(),
                                ch: name,
                            });
                        }
                    }
                    if fields.iter().any(|f| f.name == name) {
                        return Err(PatternError::NonContiguousField {
                            bitstring: bitstring.to_owned(),
                            ch: name,
                        });
                    }
                    fields.push(Field {
                        name,
                        positions: vec![bit],
                    });
                }
                ch => {
                    return Err(PatternError::InvalidChar {
                        bitstring: bitstring.to_owned(),
                        ch: ch as char,
                    });
                }
            }
        }

        if fields.len() > MAX_FIELDS {
            return Err(PatternError::TooManyFields {
                bitstring: bitstring.to_owned(),
                count: fields.len(),
            });
        }

        Ok(Self {
            mask,
            expected,
            fields,
        })
    }

    /// Bits that are fixed to a specific value.
    #[inline]
    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// Required values of the fixed bits.
    #[inline]
    pub fn expected(&self) -> u32 {
        self.expected
    }

    /// Named operand fields, in order of first appearance (MSB first).
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_bits() {
        let p = BitPattern::parse("10------------------------------").unwrap();
        assert_eq!(p.mask(), 0xC000_0000);
        assert_eq!(p.expected(), 0x8000_0000);
        assert!(p.fields().is_empty());
    }

    #[test]
    fn test_mask_covers_expected() {
        let p = BitPattern::parse("1101011001011111000000nnnnn00000").unwrap();
        assert_eq!(p.mask() & p.expected(), p.expected());
    }

    #[test]
    fn test_field_declaration_order() {
        let p = BitPattern::parse("z0S100010hiiiiiiiiiiiinnnnnddddd").unwrap();
        let names: Vec<char> = p.fields().iter().map(Field::name).collect();
        assert_eq!(names, vec!['z', 'S', 'h', 'i', 'n', 'd']);
        assert_eq!(p.fields()[3].width(), 12);
    }

    #[test]
    fn test_field_extraction_msb_first() {
        // Field n occupies bits [9:5]; 0b10110 there must read back as 22.
        let p = BitPattern::parse("----------------------nnnnn-----").unwrap();
        assert_eq!(p.fields()[0].extract(0b10110 << 5), 22);
        assert_eq!(p.fields()[0].extract(0xFFFF_FC1F), 0);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = BitPattern::parse("10").unwrap_err();
        assert!(matches!(err, PatternError::WrongLength { len: 2, .. }));
    }

    #[test]
    fn test_invalid_char_rejected() {
        let err = BitPattern::parse("10?-----------------------------").unwrap_err();
        assert!(matches!(err, PatternError::InvalidChar { ch: '?', .. }));
    }

    #[test]
    fn test_non_contiguous_field_rejected() {
        let err = BitPattern::parse("aa0aa---------------------------").unwrap_err();
        assert!(matches!(
            err,
            PatternError::NonContiguousField { ch: 'a', .. }
        ));

        let err = BitPattern::parse("aabbaa--------------------------").unwrap_err();
        assert!(matches!(
            err,
            PatternError::NonContiguousField { ch: 'a', .. }
        ));
    }

    #[test]
    fn test_too_many_fields_rejected() {
        let err = BitPattern::parse("abcdefghijk---------------------").unwrap_err();
        assert!(matches!(
            err,
            PatternError::TooManyFields { count: 11, .. }
        ));
    }
}
