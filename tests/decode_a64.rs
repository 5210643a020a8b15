// SPDX-FileCopyrightText: 2025 ruzu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end decoding through the public API only.

use rdynarmic::{A64Decoder, A64Visitor, Visitor};

/// Visitor that reports which handler ran.
struct Namer;

impl Visitor for Namer {
    type Output = &'static str;
}

impl A64Visitor for Namer {
    fn unimplemented_instruction(&mut self, name: &'static str) -> &'static str {
        name
    }
}

fn decode_name(decoder: &A64Decoder<Namer>, word: u32) -> Option<&'static str> {
    let matcher = decoder.decode(word)?;
    Some(matcher.dispatch(&mut Namer, word))
}

#[test]
fn decodes_a_function_prologue_and_epilogue() {
    let decoder = A64Decoder::new().unwrap();
    // stp x29, x30, [sp, #-16]! / mov x29, sp / ... / ldp / ret
    let program = [
        (0xA9BF7BFDu32, "Load/store register pair"),
        (0x910003FD, "ADD/SUB (immediate)"),
        (0xF9400020, "Load/store register (unsigned immediate)"),
        (0x8B010000, "ADD/SUB (shifted register)"),
        (0xA8C17BFD, "Load/store register pair"),
        (0xD65F03C0, "RET"),
    ];
    for (word, expected) in program {
        assert_eq!(decode_name(&decoder, word), Some(expected), "{word:#010X}");
    }
}

#[test]
fn decodes_branch_and_system_encodings() {
    let decoder = A64Decoder::new().unwrap();
    let cases = [
        (0x14000001u32, "B"),
        (0x94000002, "BL"),
        (0x54000020, "B.cond"),
        (0xB4000041, "CBZ"),
        (0x36180062, "TBZ"),
        (0xD4000001, "SVC"),
        (0xD4200000, "BRK"),
        (0xD503201F, "NOP"),
        (0xD5033FDF, "ISB"),
        (0xD5033BBF, "DMB"),
        (0xD61F0000, "BR"),
        (0xD63F0020, "BLR"),
    ];
    for (word, expected) in cases {
        assert_eq!(decode_name(&decoder, word), Some(expected), "{word:#010X}");
    }
}

#[test]
fn simd_modified_immediate_takes_priority() {
    let decoder = A64Decoder::new().unwrap();
    // movi v1.4s, #33 sits in bit space shared with shift-by-immediate.
    assert_eq!(
        decode_name(&decoder, 0x4F00E421),
        Some("MOVI, MVNI, ORR, BIC (vector, immediate)")
    );
    assert_eq!(
        decode_name(&decoder, 0x4F00F401),
        Some("FMOV (vector, immediate)")
    );
    assert_eq!(
        decode_name(&decoder, 0x0F000C00),
        Some("Unallocated SIMD modified immediate")
    );
}

#[test]
fn undefined_words_decode_to_none() {
    let decoder = A64Decoder::<Namer>::new().unwrap();
    assert!(decoder.decode(0x00000000).is_none());
    assert!(decoder.decode(0xFFFFFFFF).is_none());
}

#[test]
fn handler_receives_operand_fields() {
    struct MovzProbe {
        seen: Option<(u32, u32, u32, u32)>,
    }

    impl Visitor for MovzProbe {
        type Output = ();
    }

    impl A64Visitor for MovzProbe {
        fn unimplemented_instruction(&mut self, name: &'static str) {
            panic!("unexpected dispatch to {name}");
        }

        fn movz(&mut self, sf: u32, hw: u32, imm16: u32, rd: u32) {
            self.seen = Some((sf, hw, imm16, rd));
        }
    }

    let decoder = A64Decoder::<MovzProbe>::new().unwrap();
    // movz x3, #0x2a, lsl #16
    let word = 0xD2A00543;
    let mut probe = MovzProbe { seen: None };
    decoder.decode(word).unwrap().dispatch(&mut probe, word);
    assert_eq!(probe.seen, Some((1, 1, 0x2A, 3)));
}

#[test]
fn bucketed_lookup_agrees_with_full_scan() {
    let decoder = A64Decoder::<Namer>::new().unwrap();
    let table = decoder.table();
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    for _ in 0..100_000 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let word = state as u32;
        let by_table = table.lookup(word).map(|m| m.name());
        let by_scan = table
            .matchers()
            .iter()
            .find(|m| m.matches(word))
            .map(|m| m.name());
        assert_eq!(by_table, by_scan, "word {word:#010X}");
    }
}

#[test]
fn concurrent_decoders_agree() {
    let decoder = A64Decoder::<Namer>::new().unwrap();
    let expected: Vec<Option<&str>> = (0..4096u32)
        .map(|i| decode_name(&decoder, i.wrapping_mul(0x0010_0421)))
        .collect();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            let expected = &expected;
            scope.spawn(move || {
                let decoder = A64Decoder::new().unwrap();
                for (i, want) in expected.iter().enumerate() {
                    let word = (i as u32).wrapping_mul(0x0010_0421);
                    assert_eq!(decode_name(&decoder, word), *want);
                }
            });
        }
    });
}
