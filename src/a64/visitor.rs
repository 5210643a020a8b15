// SPDX-FileCopyrightText: 2025 ruzu contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The A64 capability interface: one method per instruction encoding.
//!
//! The decode table is generic over any implementation of this trait, so
//! the same table machinery drives an IR-emitting translator, an
//! interpreter, or a disassembler. Arguments are the pattern's named
//! operand fields, in declaration order (MSB first), as raw unsigned
//! values; no semantic interpretation happens before the visitor.
//!
//! Every method defaults to [`A64Visitor::unimplemented_instruction`] so a
//! visitor only overrides what it covers.

use crate::decoder::Visitor;

#[allow(unused_variables)]
pub trait A64Visitor: Visitor {
    /// Fallback for instructions the visitor does not cover. `name` is the
    /// catalog display name of the matched encoding.
    fn unimplemented_instruction(&mut self, name: &'static str) -> Self::Output;

    /// An encoding that is architecturally unallocated but explicitly
    /// claimed by the catalog so broader patterns cannot swallow it.
    fn unallocated_encoding(&mut self) -> Self::Output {
        self.unimplemented_instruction("Unallocated SIMD modified immediate")
    }

    // -- Data processing (immediate) ----------------------------------------

    fn add_sub_imm(
        &mut self,
        sf: u32,
        op: u32,
        s: u32,
        sh: u32,
        imm12: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("ADD/SUB (immediate)")
    }

    fn adr(&mut self, immlo: u32, immhi: u32, rd: u32) -> Self::Output {
        self.unimplemented_instruction("ADR")
    }

    fn adrp(&mut self, immlo: u32, immhi: u32, rd: u32) -> Self::Output {
        self.unimplemented_instruction("ADRP")
    }

    fn logical_imm(
        &mut self,
        sf: u32,
        opc: u32,
        n: u32,
        immr: u32,
        imms: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Logical (immediate)")
    }

    fn movn(&mut self, sf: u32, hw: u32, imm16: u32, rd: u32) -> Self::Output {
        self.unimplemented_instruction("MOVN")
    }

    fn movz(&mut self, sf: u32, hw: u32, imm16: u32, rd: u32) -> Self::Output {
        self.unimplemented_instruction("MOVZ")
    }

    fn movk(&mut self, sf: u32, hw: u32, imm16: u32, rd: u32) -> Self::Output {
        self.unimplemented_instruction("MOVK")
    }

    fn bitfield(
        &mut self,
        sf: u32,
        opc: u32,
        n: u32,
        immr: u32,
        imms: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Bitfield")
    }

    fn extr(&mut self, sf: u32, n: u32, rm: u32, imms: u32, rn: u32, rd: u32) -> Self::Output {
        self.unimplemented_instruction("EXTR")
    }

    // -- Branches -----------------------------------------------------------

    fn b_uncond(&mut self, imm26: u32) -> Self::Output {
        self.unimplemented_instruction("B")
    }

    fn bl(&mut self, imm26: u32) -> Self::Output {
        self.unimplemented_instruction("BL")
    }

    fn cbz(&mut self, sf: u32, imm19: u32, rt: u32) -> Self::Output {
        self.unimplemented_instruction("CBZ")
    }

    fn cbnz(&mut self, sf: u32, imm19: u32, rt: u32) -> Self::Output {
        self.unimplemented_instruction("CBNZ")
    }

    fn tbz(&mut self, b5: u32, b40: u32, imm14: u32, rt: u32) -> Self::Output {
        self.unimplemented_instruction("TBZ")
    }

    fn tbnz(&mut self, b5: u32, b40: u32, imm14: u32, rt: u32) -> Self::Output {
        self.unimplemented_instruction("TBNZ")
    }

    fn b_cond(&mut self, imm19: u32, cond: u32) -> Self::Output {
        self.unimplemented_instruction("B.cond")
    }

    fn svc(&mut self, imm16: u32) -> Self::Output {
        self.unimplemented_instruction("SVC")
    }

    fn brk(&mut self, imm16: u32) -> Self::Output {
        self.unimplemented_instruction("BRK")
    }

    fn br(&mut self, rn: u32) -> Self::Output {
        self.unimplemented_instruction("BR")
    }

    fn blr(&mut self, rn: u32) -> Self::Output {
        self.unimplemented_instruction("BLR")
    }

    fn ret(&mut self, rn: u32) -> Self::Output {
        self.unimplemented_instruction("RET")
    }

    // -- System -------------------------------------------------------------

    fn nop(&mut self) -> Self::Output {
        self.unimplemented_instruction("NOP")
    }

    fn hint(&mut self, crm: u32, op2: u32) -> Self::Output {
        self.unimplemented_instruction("Hint")
    }

    fn clrex(&mut self, crm: u32) -> Self::Output {
        self.unimplemented_instruction("CLREX")
    }

    fn dsb(&mut self, crm: u32) -> Self::Output {
        self.unimplemented_instruction("DSB")
    }

    fn dmb(&mut self, crm: u32) -> Self::Output {
        self.unimplemented_instruction("DMB")
    }

    fn isb(&mut self, crm: u32) -> Self::Output {
        self.unimplemented_instruction("ISB")
    }

    fn sys(&mut self, op1: u32, crn: u32, crm: u32, op2: u32, rt: u32) -> Self::Output {
        self.unimplemented_instruction("SYS")
    }

    fn msr_reg(
        &mut self,
        o0: u32,
        op1: u32,
        crn: u32,
        crm: u32,
        op2: u32,
        rt: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("MSR (register)")
    }

    fn mrs(&mut self, o0: u32, op1: u32, crn: u32, crm: u32, op2: u32, rt: u32) -> Self::Output {
        self.unimplemented_instruction("MRS")
    }

    // -- Data processing (register) -----------------------------------------

    fn logical_shifted(
        &mut self,
        sf: u32,
        opc: u32,
        shift: u32,
        n: u32,
        rm: u32,
        imm6: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Logical (shifted register)")
    }

    fn add_sub_shifted(
        &mut self,
        sf: u32,
        op: u32,
        s: u32,
        shift: u32,
        rm: u32,
        imm6: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("ADD/SUB (shifted register)")
    }

    #[allow(clippy::too_many_arguments)]
    fn add_sub_extended(
        &mut self,
        sf: u32,
        op: u32,
        s: u32,
        opt: u32,
        rm: u32,
        option: u32,
        imm3: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("ADD/SUB (extended register)")
    }

    fn adc_sbc(&mut self, sf: u32, op: u32, s: u32, rm: u32, rn: u32, rd: u32) -> Self::Output {
        self.unimplemented_instruction("ADC/SBC")
    }

    fn ccmp_reg(
        &mut self,
        sf: u32,
        op: u32,
        rm: u32,
        cond: u32,
        rn: u32,
        nzcv: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("CCMN/CCMP (register)")
    }

    fn ccmp_imm(
        &mut self,
        sf: u32,
        op: u32,
        imm5: u32,
        cond: u32,
        rn: u32,
        nzcv: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("CCMN/CCMP (immediate)")
    }

    fn csel(
        &mut self,
        sf: u32,
        op: u32,
        s: u32,
        rm: u32,
        cond: u32,
        op2: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Conditional select")
    }

    fn crc32(&mut self, sf: u32, rm: u32, c: u32, sz: u32, rn: u32, rd: u32) -> Self::Output {
        self.unimplemented_instruction("CRC32")
    }

    fn dp_2_source(
        &mut self,
        sf: u32,
        s: u32,
        rm: u32,
        opcode: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Data-processing (2 source)")
    }

    fn dp_1_source(&mut self, sf: u32, opcode: u32, rn: u32, rd: u32) -> Self::Output {
        self.unimplemented_instruction("Data-processing (1 source)")
    }

    fn dp_3_source(
        &mut self,
        sf: u32,
        op54: u32,
        op31: u32,
        rm: u32,
        o0: u32,
        ra: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Data-processing (3 source)")
    }

    // -- Loads and stores ---------------------------------------------------

    fn simd_ldst_multi(
        &mut self,
        q: u32,
        l: u32,
        opcode: u32,
        size: u32,
        rn: u32,
        rt: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Load/store multiple structures")
    }

    fn simd_ldst_multi_post(
        &mut self,
        q: u32,
        l: u32,
        rm: u32,
        opcode: u32,
        size: u32,
        rn: u32,
        rt: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Load/store multiple structures (post-indexed)")
    }

    fn simd_ldst_single(
        &mut self,
        q: u32,
        l: u32,
        r: u32,
        opc: u32,
        s: u32,
        size: u32,
        rn: u32,
        rt: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Load/store single structure")
    }

    #[allow(clippy::too_many_arguments)]
    fn simd_ldst_single_post(
        &mut self,
        q: u32,
        l: u32,
        r: u32,
        rm: u32,
        opc: u32,
        s: u32,
        size: u32,
        rn: u32,
        rt: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Load/store single structure (post-indexed)")
    }

    fn ldst_pair_gp(
        &mut self,
        opc: u32,
        mode: u32,
        l: u32,
        imm7: u32,
        rt2: u32,
        rn: u32,
        rt: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Load/store register pair")
    }

    fn ldst_pair_simd(
        &mut self,
        opc: u32,
        mode: u32,
        l: u32,
        imm7: u32,
        rt2: u32,
        rn: u32,
        rt: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Load/store register pair (SIMD&FP)")
    }

    fn ldr_lit_gp(&mut self, opc: u32, imm19: u32, rt: u32) -> Self::Output {
        self.unimplemented_instruction("Load register (literal)")
    }

    fn ldr_lit_simd(&mut self, opc: u32, imm19: u32, rt: u32) -> Self::Output {
        self.unimplemented_instruction("Load register (literal, SIMD&FP)")
    }

    #[allow(clippy::too_many_arguments)]
    fn ldst_exclusive(
        &mut self,
        size: u32,
        o2: u32,
        l: u32,
        o1: u32,
        rs: u32,
        o0: u32,
        rt2: u32,
        rn: u32,
        rt: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Load/store exclusive")
    }

    fn ldst_reg_uimm_gp(
        &mut self,
        size: u32,
        opc: u32,
        imm12: u32,
        rn: u32,
        rt: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Load/store register (unsigned immediate)")
    }

    fn ldst_reg_post_gp(
        &mut self,
        size: u32,
        opc: u32,
        imm9: u32,
        rn: u32,
        rt: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Load/store register (immediate post-indexed)")
    }

    fn ldst_reg_pre_gp(
        &mut self,
        size: u32,
        opc: u32,
        imm9: u32,
        rn: u32,
        rt: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Load/store register (immediate pre-indexed)")
    }

    fn ldst_reg_unscaled_gp(
        &mut self,
        size: u32,
        opc: u32,
        imm9: u32,
        rn: u32,
        rt: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Load/store register (unscaled immediate)")
    }

    fn ldst_reg_reg_gp(
        &mut self,
        size: u32,
        opc: u32,
        rm: u32,
        option: u32,
        s: u32,
        rn: u32,
        rt: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Load/store register (register offset)")
    }

    fn atomic_mem(
        &mut self,
        size: u32,
        a: u32,
        r: u32,
        rs: u32,
        o3: u32,
        opc: u32,
        rn: u32,
        rt: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Atomic memory operations")
    }

    fn ldst_reg_uimm_simd(
        &mut self,
        size: u32,
        opc: u32,
        imm12: u32,
        rn: u32,
        rt: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Load/store register (unsigned immediate, SIMD&FP)")
    }

    fn ldst_reg_post_simd(
        &mut self,
        size: u32,
        opc: u32,
        imm9: u32,
        rn: u32,
        rt: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Load/store register (immediate post-indexed, SIMD&FP)")
    }

    fn ldst_reg_pre_simd(
        &mut self,
        size: u32,
        opc: u32,
        imm9: u32,
        rn: u32,
        rt: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Load/store register (immediate pre-indexed, SIMD&FP)")
    }

    fn prfm_lit(&mut self, imm19: u32, rt: u32) -> Self::Output {
        self.unimplemented_instruction("PRFM (literal)")
    }

    fn prfm_imm(&mut self, imm12: u32, rn: u32, rt: u32) -> Self::Output {
        self.unimplemented_instruction("PRFM (immediate)")
    }

    fn prfm_reg(&mut self, rm: u32, option: u32, s: u32, rn: u32, rt: u32) -> Self::Output {
        self.unimplemented_instruction("PRFM (register)")
    }

    // -- Scalar floating point ----------------------------------------------

    fn fp_data_1(&mut self, ftype: u32, opcode: u32, rn: u32, rd: u32) -> Self::Output {
        self.unimplemented_instruction("Floating-point data-processing (1 source)")
    }

    fn fp_data_2(&mut self, ftype: u32, rm: u32, opcode: u32, rn: u32, rd: u32) -> Self::Output {
        self.unimplemented_instruction("Floating-point data-processing (2 source)")
    }

    fn fcmp(&mut self, ftype: u32, rm: u32, rn: u32, opc: u32) -> Self::Output {
        self.unimplemented_instruction("FCMP, FCMPE")
    }

    fn fccmp(&mut self, ftype: u32, rm: u32, cond: u32, rn: u32, nzcv: u32) -> Self::Output {
        self.unimplemented_instruction("FCCMP, FCCMPE")
    }

    fn fcsel(&mut self, ftype: u32, rm: u32, cond: u32, rn: u32, rd: u32) -> Self::Output {
        self.unimplemented_instruction("FCSEL")
    }

    fn fp_int_conv(
        &mut self,
        sf: u32,
        ftype: u32,
        rmode: u32,
        opcode: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Conversion between floating-point and integer")
    }

    fn fp_fixed_conv(
        &mut self,
        sf: u32,
        ftype: u32,
        rmode: u32,
        opcode: u32,
        scale: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Conversion between floating-point and fixed-point")
    }

    fn fmov_imm(&mut self, ftype: u32, imm8: u32, rd: u32) -> Self::Output {
        self.unimplemented_instruction("FMOV (scalar, immediate)")
    }

    fn fp_data_3(
        &mut self,
        ftype: u32,
        o1: u32,
        rm: u32,
        o0: u32,
        ra: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("Floating-point data-processing (3 source)")
    }

    // -- SIMD (vector) ------------------------------------------------------

    fn simd_three_same(
        &mut self,
        q: u32,
        u: u32,
        size: u32,
        rm: u32,
        opcode: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("SIMD three same")
    }

    fn simd_three_diff(
        &mut self,
        q: u32,
        u: u32,
        size: u32,
        rm: u32,
        opcode: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("SIMD three different")
    }

    fn crypto_aes(&mut self, opcode: u32, rn: u32, rd: u32) -> Self::Output {
        self.unimplemented_instruction("Crypto AES")
    }

    fn simd_two_reg_misc(
        &mut self,
        q: u32,
        u: u32,
        size: u32,
        opcode: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("SIMD two-register misc")
    }

    fn simd_across_lanes(
        &mut self,
        q: u32,
        u: u32,
        size: u32,
        opcode: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("SIMD across lanes")
    }

    fn simd_extract(&mut self, q: u32, rm: u32, imm4: u32, rn: u32, rd: u32) -> Self::Output {
        self.unimplemented_instruction("EXT")
    }

    fn simd_tbl(&mut self, q: u32, rm: u32, len: u32, op: u32, rn: u32, rd: u32) -> Self::Output {
        self.unimplemented_instruction("TBL, TBX")
    }

    fn simd_copy(
        &mut self,
        q: u32,
        op: u32,
        imm5: u32,
        imm4: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("SIMD copy")
    }

    fn simd_permute(
        &mut self,
        q: u32,
        size: u32,
        rm: u32,
        opcode: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("SIMD permute")
    }

    fn movi(
        &mut self,
        q: u32,
        op: u32,
        abc: u32,
        cmode: u32,
        defgh: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("MOVI, MVNI, ORR, BIC (vector, immediate)")
    }

    fn fmov_vec_imm(&mut self, q: u32, op: u32, abc: u32, defgh: u32, rd: u32) -> Self::Output {
        self.unimplemented_instruction("FMOV (vector, immediate)")
    }

    fn simd_shift_imm(
        &mut self,
        q: u32,
        u: u32,
        immh: u32,
        immb: u32,
        opcode: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("SIMD shift by immediate")
    }

    #[allow(clippy::too_many_arguments)]
    fn simd_vec_indexed(
        &mut self,
        q: u32,
        u: u32,
        size: u32,
        l: u32,
        m: u32,
        rm: u32,
        opcode: u32,
        h: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("SIMD vector x indexed element")
    }

    // -- SIMD (scalar) ------------------------------------------------------

    fn simd_scalar_three_same(
        &mut self,
        u: u32,
        size: u32,
        rm: u32,
        opcode: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("SIMD scalar three same")
    }

    fn simd_scalar_two_reg_misc(
        &mut self,
        u: u32,
        size: u32,
        opcode: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("SIMD scalar two-register misc")
    }

    fn simd_scalar_pairwise(
        &mut self,
        u: u32,
        size: u32,
        opcode: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("SIMD scalar pairwise")
    }

    fn crypto_sha_three(&mut self, rm: u32, opcode: u32, rn: u32, rd: u32) -> Self::Output {
        self.unimplemented_instruction("Crypto three-register SHA")
    }

    fn crypto_sha_two(&mut self, opcode: u32, rn: u32, rd: u32) -> Self::Output {
        self.unimplemented_instruction("Crypto two-register SHA")
    }

    fn simd_scalar_shift_imm(
        &mut self,
        u: u32,
        immh: u32,
        immb: u32,
        opcode: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("SIMD scalar shift by immediate")
    }

    #[allow(clippy::too_many_arguments)]
    fn simd_scalar_indexed(
        &mut self,
        u: u32,
        size: u32,
        l: u32,
        m: u32,
        rm: u32,
        opcode: u32,
        h: u32,
        rn: u32,
        rd: u32,
    ) -> Self::Output {
        self.unimplemented_instruction("SIMD scalar x indexed element")
    }
}
