// SPDX-FileCopyrightText: 2025 ruzu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The A64 instruction catalog: pattern strings bound to visitor methods.
//!
//! Entries are grouped by encoding class, in the order the architecture
//! reference presents them. Declaration order only matters as a tie break;
//! the table builder reorders by specificity and applies [`overrides`].

use crate::decoder::{CatalogEntry, FieldValues, IndexProjection, OverrideSet};

use super::visitor::A64Visitor;

/// Project a word to its 12-bit bucket index: instruction bits [13:10] into
/// index bits [3:0] and bits [25:18] into index bits [11:4]. Those bit
/// ranges carry the densest encoding-class information in A64.
fn to_fast_lookup_index(word: u32) -> u32 {
    ((word >> 10) & 0x00F) | ((word >> 18) & 0xFF0)
}

/// The bucket projection used by the A64 decode table.
pub(crate) const A64_PROJECTION: IndexProjection = IndexProjection {
    bits: 12,
    project: to_fast_lookup_index,
};

/// Matchers that take precedence over specificity ordering.
///
/// The SIMD modified-immediate group encodes MOVI/MVNI/ORR/BIC, the FMOV
/// special case, and an unallocated hole in bit ranges that overlap other,
/// more specific SIMD patterns; within the group the cmode/op bits must be
/// interpreted first.
pub(crate) fn overrides() -> OverrideSet {
    OverrideSet::new(&[
        "MOVI, MVNI, ORR, BIC (vector, immediate)",
        "FMOV (vector, immediate)",
        "Unallocated SIMD modified immediate",
    ])
}

/// Bind a pattern string to a visitor method.
///
/// The field list names the handler's positional arguments; its length is
/// recorded so the table builder can check it against the compiled pattern.
macro_rules! inst {
    (@arity) => { 0usize };
    (@arity $head:ident $($rest:ident)*) => { 1usize + inst!(@arity $($rest)*) };
    ($method:ident ( $($field:ident),* ), $name:expr, $bits:expr) => {{
        const ARITY: usize = inst!(@arity $($field)*);
        CatalogEntry::new($name, $bits, ARITY, |v: &mut V, f: &FieldValues| {
            let [$($field),*] = f.array();
            v.$method($($field),*)
        })
    }};
}

/// The full catalog for visitor type `V`.
#[rustfmt::skip]
pub(crate) fn catalog<V: A64Visitor>() -> Vec<CatalogEntry<V>> {
    vec![
        // -- Data processing (immediate) ------------------------------------
        inst!(add_sub_imm(sf, op, s, sh, imm12, rn, rd), "ADD/SUB (immediate)", "zoS100010hiiiiiiiiiiiinnnnnddddd"),
        inst!(adr(immlo, immhi, rd), "ADR", "0ll10000iiiiiiiiiiiiiiiiiiiddddd"),
        inst!(adrp(immlo, immhi, rd), "ADRP", "1ll10000iiiiiiiiiiiiiiiiiiiddddd"),
        inst!(logical_imm(sf, opc, n, immr, imms, rn, rd), "Logical (immediate)", "zoo100100Nrrrrrrssssssnnnnnddddd"),
        inst!(movn(sf, hw, imm16, rd), "MOVN", "z00100101hhiiiiiiiiiiiiiiiiddddd"),
        inst!(movz(sf, hw, imm16, rd), "MOVZ", "z10100101hhiiiiiiiiiiiiiiiiddddd"),
        inst!(movk(sf, hw, imm16, rd), "MOVK", "z11100101hhiiiiiiiiiiiiiiiiddddd"),
        inst!(bitfield(sf, opc, n, immr, imms, rn, rd), "Bitfield", "zoo100110Nrrrrrrssssssnnnnnddddd"),
        inst!(extr(sf, n, rm, imms, rn, rd), "EXTR", "z00100111N0mmmmmssssssnnnnnddddd"),

        // -- Branches, exception generation, system -------------------------
        inst!(b_uncond(imm26), "B", "000101iiiiiiiiiiiiiiiiiiiiiiiiii"),
        inst!(bl(imm26), "BL", "100101iiiiiiiiiiiiiiiiiiiiiiiiii"),
        inst!(cbz(sf, imm19, rt), "CBZ", "z0110100iiiiiiiiiiiiiiiiiiittttt"),
        inst!(cbnz(sf, imm19, rt), "CBNZ", "z0110101iiiiiiiiiiiiiiiiiiittttt"),
        inst!(tbz(b5, b40, imm14, rt), "TBZ", "b0110110ccccciiiiiiiiiiiiiittttt"),
        inst!(tbnz(b5, b40, imm14, rt), "TBNZ", "b0110111ccccciiiiiiiiiiiiiittttt"),
        inst!(b_cond(imm19, cond), "B.cond", "01010100iiiiiiiiiiiiiiiiiii0cccc"),
        inst!(svc(imm16), "SVC", "11010100000iiiiiiiiiiiiiiii00001"),
        inst!(brk(imm16), "BRK", "11010100001iiiiiiiiiiiiiiii00000"),
        inst!(br(rn), "BR", "1101011000011111000000nnnnn00000"),
        inst!(blr(rn), "BLR", "1101011000111111000000nnnnn00000"),
        inst!(ret(rn), "RET", "1101011001011111000000nnnnn00000"),
        inst!(nop(), "NOP", "11010101000000110010000000011111"),
        inst!(hint(crm, op2), "Hint", "11010101000000110010mmmmooo11111"),
        inst!(clrex(crm), "CLREX", "11010101000000110011mmmm01011111"),
        inst!(dsb(crm), "DSB", "11010101000000110011mmmm10011111"),
        inst!(dmb(crm), "DMB", "11010101000000110011mmmm10111111"),
        inst!(isb(crm), "ISB", "11010101000000110011mmmm11011111"),
        inst!(sys(op1, crn, crm, op2, rt), "SYS", "1101010100001pppnnnnmmmmqqqttttt"),
        inst!(msr_reg(o0, op1, crn, crm, op2, rt), "MSR (register)", "110101010001opppnnnnmmmmqqqttttt"),
        inst!(mrs(o0, op1, crn, crm, op2, rt), "MRS", "110101010011opppnnnnmmmmqqqttttt"),

        // -- Data processing (register) -------------------------------------
        inst!(logical_shifted(sf, opc, shift, n, rm, imm6, rn, rd), "Logical (shifted register)", "zoo01010hhNmmmmmiiiiiinnnnnddddd"),
        inst!(add_sub_shifted(sf, op, s, shift, rm, imm6, rn, rd), "ADD/SUB (shifted register)", "zoS01011hh0mmmmmiiiiiinnnnnddddd"),
        inst!(add_sub_extended(sf, op, s, opt, rm, option, imm3, rn, rd), "ADD/SUB (extended register)", "zoS01011hh1mmmmmeeeiiinnnnnddddd"),
        inst!(adc_sbc(sf, op, s, rm, rn, rd), "ADC/SBC", "zoS11010000mmmmm000000nnnnnddddd"),
        inst!(ccmp_reg(sf, op, rm, cond, rn, nzcv), "CCMN/CCMP (register)", "zo111010010mmmmmcccc00nnnnn0ffff"),
        inst!(ccmp_imm(sf, op, imm5, cond, rn, nzcv), "CCMN/CCMP (immediate)", "zo111010010iiiiicccc10nnnnn0ffff"),
        inst!(csel(sf, op, s, rm, cond, op2, rn, rd), "Conditional select", "zoS11010100mmmmmccccppnnnnnddddd"),
        inst!(crc32(sf, rm, c, sz, rn, rd), "CRC32", "z0011010110mmmmm010Cssnnnnnddddd"),
        inst!(dp_2_source(sf, s, rm, opcode, rn, rd), "Data-processing (2 source)", "z0S11010110mmmmmoooooonnnnnddddd"),
        inst!(dp_1_source(sf, opcode, rn, rd), "Data-processing (1 source)", "z101101011000000oooooonnnnnddddd"),
        inst!(dp_3_source(sf, op54, op31, rm, o0, ra, rn, rd), "Data-processing (3 source)", "zpp11011qqqmmmmmoaaaaannnnnddddd"),

        // -- Loads and stores ------------------------------------------------
        inst!(simd_ldst_multi(q, l, opcode, size, rn, rt), "Load/store multiple structures", "0q0011000L000000oooossnnnnnttttt"),
        inst!(simd_ldst_multi_post(q, l, rm, opcode, size, rn, rt), "Load/store multiple structures (post-indexed)", "0q0011001L0mmmmmoooossnnnnnttttt"),
        inst!(simd_ldst_single(q, l, r, opc, s, size, rn, rt), "Load/store single structure", "0q0011010LR00000oooSssnnnnnttttt"),
        inst!(simd_ldst_single_post(q, l, r, rm, opc, s, size, rn, rt), "Load/store single structure (post-indexed)", "0q0011011LRmmmmmoooSssnnnnnttttt"),
        inst!(ldst_pair_gp(opc, mode, l, imm7, rt2, rn, rt), "Load/store register pair", "oo10100wwLiiiiiiieeeeennnnnttttt"),
        inst!(ldst_pair_simd(opc, mode, l, imm7, rt2, rn, rt), "Load/store register pair (SIMD&FP)", "oo10110wwLiiiiiiieeeeennnnnttttt"),
        inst!(ldr_lit_gp(opc, imm19, rt), "Load register (literal)", "oo011000iiiiiiiiiiiiiiiiiiittttt"),
        inst!(ldr_lit_simd(opc, imm19, rt), "Load register (literal, SIMD&FP)", "oo011100iiiiiiiiiiiiiiiiiiittttt"),
        inst!(ldst_exclusive(size, o2, l, o1, rs, o0, rt2, rn, rt), "Load/store exclusive", "ss001000aLbqqqqqceeeeennnnnttttt"),
        inst!(ldst_reg_uimm_gp(size, opc, imm12, rn, rt), "Load/store register (unsigned immediate)", "ss111001ooiiiiiiiiiiiinnnnnttttt"),
        inst!(ldst_reg_post_gp(size, opc, imm9, rn, rt), "Load/store register (immediate post-indexed)", "ss111000oo0iiiiiiiii01nnnnnttttt"),
        inst!(ldst_reg_pre_gp(size, opc, imm9, rn, rt), "Load/store register (immediate pre-indexed)", "ss111000oo0iiiiiiiii11nnnnnttttt"),
        inst!(ldst_reg_unscaled_gp(size, opc, imm9, rn, rt), "Load/store register (unscaled immediate)", "ss111000oo0iiiiiiiii00nnnnnttttt"),
        inst!(ldst_reg_reg_gp(size, opc, rm, option, s, rn, rt), "Load/store register (register offset)", "ss111000oo1mmmmmeeeS10nnnnnttttt"),
        inst!(atomic_mem(size, a, r, rs, o3, opc, rn, rt), "Atomic memory operations", "ss111000AR1qqqqqBppp00nnnnnttttt"),
        inst!(ldst_reg_uimm_simd(size, opc, imm12, rn, rt), "Load/store register (unsigned immediate, SIMD&FP)", "ss111101ooiiiiiiiiiiiinnnnnttttt"),
        inst!(ldst_reg_post_simd(size, opc, imm9, rn, rt), "Load/store register (immediate post-indexed, SIMD&FP)", "ss111100oo0iiiiiiiii01nnnnnttttt"),
        inst!(ldst_reg_pre_simd(size, opc, imm9, rn, rt), "Load/store register (immediate pre-indexed, SIMD&FP)", "ss111100oo0iiiiiiiii11nnnnnttttt"),
        inst!(prfm_lit(imm19, rt), "PRFM (literal)", "11011000iiiiiiiiiiiiiiiiiiittttt"),
        inst!(prfm_imm(imm12, rn, rt), "PRFM (immediate)", "1111100110iiiiiiiiiiiinnnnnttttt"),
        inst!(prfm_reg(rm, option, s, rn, rt), "PRFM (register)", "11111000101mmmmmeeeS10nnnnnttttt"),

        // -- Scalar floating point ------------------------------------------
        inst!(fp_data_1(ftype, opcode, rn, rd), "Floating-point data-processing (1 source)", "00011110yy1oooooo10000nnnnnddddd"),
        inst!(fp_data_2(ftype, rm, opcode, rn, rd), "Floating-point data-processing (2 source)", "00011110yy1mmmmmoooo10nnnnnddddd"),
        inst!(fcmp(ftype, rm, rn, opc), "FCMP, FCMPE", "00011110yy1mmmmm001000nnnnnoo000"),
        inst!(fccmp(ftype, rm, cond, rn, nzcv), "FCCMP, FCCMPE", "00011110yy1mmmmmcccc01nnnnn0ffff"),
        inst!(fcsel(ftype, rm, cond, rn, rd), "FCSEL", "00011110yy1mmmmmcccc11nnnnnddddd"),
        inst!(fp_int_conv(sf, ftype, rmode, opcode, rn, rd), "Conversion between floating-point and integer", "z0011110yy1wwooo000000nnnnnddddd"),
        inst!(fp_fixed_conv(sf, ftype, rmode, opcode, scale, rn, rd), "Conversion between floating-point and fixed-point", "z0011110yy0wwooossssssnnnnnddddd"),
        inst!(fmov_imm(ftype, imm8, rd), "FMOV (scalar, immediate)", "00011110yy1iiiiiiii10000000ddddd"),
        inst!(fp_data_3(ftype, o1, rm, o0, ra, rn, rd), "Floating-point data-processing (3 source)", "00011111yyommmmmpaaaaannnnnddddd"),

        // -- SIMD (vector) ---------------------------------------------------
        inst!(simd_three_same(q, u, size, rm, opcode, rn, rd), "SIMD three same", "0qu01110ss1mmmmmooooo1nnnnnddddd"),
        inst!(simd_three_diff(q, u, size, rm, opcode, rn, rd), "SIMD three different", "0qu01110ss1mmmmmoooo00nnnnnddddd"),
        inst!(crypto_aes(opcode, rn, rd), "Crypto AES", "010011100010100ooooo10nnnnnddddd"),
        inst!(simd_two_reg_misc(q, u, size, opcode, rn, rd), "SIMD two-register misc", "0qu01110ss10000ooooo10nnnnnddddd"),
        inst!(simd_across_lanes(q, u, size, opcode, rn, rd), "SIMD across lanes", "0qu01110ss11000ooooo10nnnnnddddd"),
        inst!(simd_extract(q, rm, imm4, rn, rd), "EXT", "0q101110000mmmmm0iiii0nnnnnddddd"),
        inst!(simd_tbl(q, rm, len, op, rn, rd), "TBL, TBX", "0q001110000mmmmm0llp00nnnnnddddd"),
        inst!(simd_copy(q, op, imm5, imm4, rn, rd), "SIMD copy", "0qo01110000iiiii0jjjj1nnnnnddddd"),
        inst!(simd_permute(q, size, rm, opcode, rn, rd), "SIMD permute", "0q001110ss0mmmmm0ooo10nnnnnddddd"),
        inst!(fmov_vec_imm(q, op, abc, defgh, rd), "FMOV (vector, immediate)", "0qo0111100000aaa111101bbbbbddddd"),
        inst!(movi(q, op, abc, cmode, defgh, rd), "MOVI, MVNI, ORR, BIC (vector, immediate)", "0qo0111100000aaammmm01bbbbbddddd"),
        inst!(unallocated_encoding(), "Unallocated SIMD modified immediate", "0--0111100000-------11----------"),
        inst!(simd_shift_imm(q, u, immh, immb, opcode, rn, rd), "SIMD shift by immediate", "0qu011110hhhhbbbooooo1nnnnnddddd"),
        inst!(simd_vec_indexed(q, u, size, l, m, rm, opcode, h, rn, rd), "SIMD vector x indexed element", "0qu01111ssLMwwwwooooH0nnnnnddddd"),

        // -- SIMD (scalar) and crypto ---------------------------------------
        inst!(simd_scalar_three_same(u, size, rm, opcode, rn, rd), "SIMD scalar three same", "01u11110ss1mmmmmooooo1nnnnnddddd"),
        inst!(simd_scalar_two_reg_misc(u, size, opcode, rn, rd), "SIMD scalar two-register misc", "01u11110ss10000ooooo10nnnnnddddd"),
        inst!(simd_scalar_pairwise(u, size, opcode, rn, rd), "SIMD scalar pairwise", "01u11110ss11000ooooo10nnnnnddddd"),
        inst!(crypto_sha_three(rm, opcode, rn, rd), "Crypto three-register SHA", "01011110000mmmmm0ooo00nnnnnddddd"),
        inst!(crypto_sha_two(opcode, rn, rd), "Crypto two-register SHA", "010111100010100ooooo10nnnnnddddd"),
        inst!(simd_scalar_shift_imm(u, immh, immb, opcode, rn, rd), "SIMD scalar shift by immediate", "01u111110hhhhbbbooooo1nnnnnddddd"),
        inst!(simd_scalar_indexed(u, size, l, m, rm, opcode, h, rn, rd), "SIMD scalar x indexed element", "01u11111ssLMwwwwooooH0nnnnnddddd"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::{DecodeTable, Visitor};

    struct Probe;

    impl Visitor for Probe {
        type Output = ();
    }

    impl A64Visitor for Probe {
        fn unimplemented_instruction(&mut self, _name: &'static str) {}
    }

    fn table() -> DecodeTable<Probe> {
        DecodeTable::build(catalog(), &overrides(), A64_PROJECTION).unwrap()
    }

    fn name_of(table: &DecodeTable<Probe>, word: u32) -> &'static str {
        table
            .lookup(word)
            .unwrap_or_else(|| panic!("no matcher for {word:#010X}"))
            .name()
    }

    #[test]
    fn test_catalog_compiles() {
        let table = table();
        assert!(table.matchers().len() >= 90);
    }

    #[test]
    fn test_known_encodings() {
        let t = table();
        assert_eq!(name_of(&t, 0xD503201F), "NOP");
        assert_eq!(name_of(&t, 0xD65F03C0), "RET");
        assert_eq!(name_of(&t, 0x91000401), "ADD/SUB (immediate)");
        assert_eq!(name_of(&t, 0xD2800540), "MOVZ");
        assert_eq!(name_of(&t, 0x54000020), "B.cond");
        assert_eq!(name_of(&t, 0xA9BF7BFD), "Load/store register pair");
        assert_eq!(name_of(&t, 0x14000001), "B");
        assert_eq!(name_of(&t, 0x94000002), "BL");
        assert_eq!(name_of(&t, 0xAA020020), "Logical (shifted register)");
        assert_eq!(name_of(&t, 0x9B027C20), "Data-processing (3 source)");
        assert_eq!(name_of(&t, 0x1E222020), "FCMP, FCMPE");
        assert_eq!(name_of(&t, 0xF9400020), "Load/store register (unsigned immediate)");
        assert_eq!(name_of(&t, 0x1AC20820), "Data-processing (2 source)");
        assert_eq!(name_of(&t, 0xD4200540), "BRK");
        assert_eq!(name_of(&t, 0xD4000001), "SVC");
    }

    #[test]
    fn test_simd_modified_immediate_overrides() {
        let t = table();
        assert_eq!(
            name_of(&t, 0x4F00E421),
            "MOVI, MVNI, ORR, BIC (vector, immediate)"
        );
        assert_eq!(name_of(&t, 0x4F00F401), "FMOV (vector, immediate)");
        assert_eq!(name_of(&t, 0x0F000C00), "Unallocated SIMD modified immediate");
    }

    #[test]
    fn test_dispatch_extracts_register_field() {
        struct BrProbe {
            rn: Option<u32>,
        }

        impl Visitor for BrProbe {
            type Output = ();
        }

        impl A64Visitor for BrProbe {
            fn unimplemented_instruction(&mut self, name: &'static str) {
                panic!("unexpected dispatch to {name}");
            }

            fn br(&mut self, rn: u32) {
                self.rn = Some(rn);
            }
        }

        let table: DecodeTable<BrProbe> =
            DecodeTable::build(catalog(), &overrides(), A64_PROJECTION).unwrap();
        let word = 0xD61F02C0; // BR x22
        let matcher = table.lookup(word).unwrap();
        let mut probe = BrProbe { rn: None };
        matcher.dispatch(&mut probe, word);
        assert_eq!(probe.rn, Some(22));
    }

    #[test]
    fn test_projection_matches_full_scan() {
        let t = table();
        let mut state = 0x0123_4567_89AB_CDEFu64;
        for _ in 0..50_000 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let word = state as u32;
            let by_table = t.lookup(word).map(|m| m.name());
            let by_scan = t
                .matchers()
                .iter()
                .find(|m| m.matches(word))
                .map(|m| m.name());
            assert_eq!(by_table, by_scan, "word {word:#010X}");
        }
    }
}
