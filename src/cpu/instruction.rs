//! The opcode dispatch table: a dense, 256-entry array indexed directly by
//! the fetched opcode byte (design note 9's recommendation over a hash-map
//! lookup). Unimplemented slots carry `execute: None` and resolve to
//! `CpuError::UnimplementedOpcode` in `Cpu::step`.

use super::{Cpu, CpuResult};
use crate::memory_bus::MemoryBus;
use lazy_static::lazy_static;

pub type Handler = fn(&mut Cpu, &mut MemoryBus) -> CpuResult<u16>;

#[derive(Clone, Copy)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub length: u8,
    /// Base M-cycle cost (spec.md's literal table; the "not taken" cost
    /// for conditional branches). `execute` returns any additional
    /// M-cycles on top of this for a taken branch.
    pub cycles: u8,
    pub execute: Option<Handler>,
}

impl Instruction {
    const fn invalid() -> Self {
        Instruction {
            mnemonic: "??",
            length: 1,
            cycles: 1,
            execute: None,
        }
    }

    const fn new(mnemonic: &'static str, length: u8, cycles: u8, execute: Handler) -> Self {
        Instruction {
            mnemonic,
            length,
            cycles,
            execute: Some(execute),
        }
    }
}

fn build_table() -> [Instruction; 256] {
    let mut table = [Instruction::invalid(); 256];

    table[0x00] = Instruction::new("NOP", 1, 1, Cpu::op_nop);
    table[0x01] = Instruction::new("LD BC,d16", 3, 3, Cpu::op_ld_bc_d16);
    table[0x02] = Instruction::new("LD (BC),A", 1, 2, Cpu::op_ld_bcp_a);
    table[0x03] = Instruction::new("INC BC", 1, 2, Cpu::op_inc_bc);
    table[0x04] = Instruction::new("INC B", 1, 1, Cpu::op_inc_b);
    table[0x05] = Instruction::new("DEC B", 1, 1, Cpu::op_dec_b);
    table[0x06] = Instruction::new("LD B,d8", 2, 2, Cpu::op_ld_b_d8);
    table[0x07] = Instruction::new("RLCA", 1, 1, Cpu::op_rlca);
    table[0x08] = Instruction::new("LD (a16),SP", 3, 5, Cpu::op_ld_a16p_sp);
    table[0x09] = Instruction::new("ADD HL,BC", 1, 2, Cpu::op_add_hl_bc);
    table[0x0A] = Instruction::new("LD A,(BC)", 1, 2, Cpu::op_ld_a_bcp);
    table[0x0B] = Instruction::new("DEC BC", 1, 2, Cpu::op_dec_bc);
    table[0x0C] = Instruction::new("INC C", 1, 1, Cpu::op_inc_c);
    table[0x0D] = Instruction::new("DEC C", 1, 1, Cpu::op_dec_c);
    table[0x0E] = Instruction::new("LD C,d8", 2, 2, Cpu::op_ld_c_d8);
    table[0x0F] = Instruction::new("RRCA", 1, 1, Cpu::op_rrca);

    table[0x10] = Instruction::new("STOP", 2, 1, Cpu::op_stop);
    table[0x11] = Instruction::new("LD DE,d16", 3, 3, Cpu::op_ld_de_d16);
    table[0x12] = Instruction::new("LD (DE),A", 1, 2, Cpu::op_ld_dep_a);
    table[0x13] = Instruction::new("INC DE", 1, 2, Cpu::op_inc_de);
    table[0x14] = Instruction::new("INC D", 1, 1, Cpu::op_inc_d);
    table[0x15] = Instruction::new("DEC D", 1, 1, Cpu::op_dec_d);
    table[0x16] = Instruction::new("LD D,d8", 2, 2, Cpu::op_ld_d_d8);
    table[0x17] = Instruction::new("RLA", 1, 1, Cpu::op_rla);
    table[0x18] = Instruction::new("JR r8", 2, 3, Cpu::op_jr_r8);
    table[0x19] = Instruction::new("ADD HL,DE", 1, 2, Cpu::op_add_hl_de);
    table[0x1A] = Instruction::new("LD A,(DE)", 1, 2, Cpu::op_ld_a_dep);
    table[0x1B] = Instruction::new("DEC DE", 1, 2, Cpu::op_dec_de);
    table[0x1C] = Instruction::new("INC E", 1, 1, Cpu::op_inc_e);
    table[0x1D] = Instruction::new("DEC E", 1, 1, Cpu::op_dec_e);
    table[0x1E] = Instruction::new("LD E,d8", 2, 2, Cpu::op_ld_e_d8);
    table[0x1F] = Instruction::new("RRA", 1, 1, Cpu::op_rra);

    table[0x20] = Instruction::new("JR NZ,r8", 2, 2, Cpu::op_jr_nz_r8);
    table[0x21] = Instruction::new("LD HL,d16", 3, 3, Cpu::op_ld_hl_d16);
    table[0x22] = Instruction::new("LD (HL+),A", 1, 2, Cpu::op_ld_hlip_a);
    table[0x23] = Instruction::new("INC HL", 1, 2, Cpu::op_inc_hl);
    table[0x24] = Instruction::new("INC H", 1, 1, Cpu::op_inc_h);
    table[0x25] = Instruction::new("DEC H", 1, 1, Cpu::op_dec_h);
    table[0x26] = Instruction::new("LD H,d8", 2, 2, Cpu::op_ld_h_d8);
    table[0x27] = Instruction::new("DAA", 1, 1, Cpu::op_daa);
    table[0x28] = Instruction::new("JR Z,r8", 2, 2, Cpu::op_jr_z_r8);
    table[0x29] = Instruction::new("ADD HL,HL", 1, 2, Cpu::op_add_hl_hl);
    table[0x2A] = Instruction::new("LD A,(HL+)", 1, 2, Cpu::op_ld_a_hlip);
    table[0x2B] = Instruction::new("DEC HL", 1, 2, Cpu::op_dec_hl);
    table[0x2C] = Instruction::new("INC L", 1, 1, Cpu::op_inc_l);
    table[0x2D] = Instruction::new("DEC L", 1, 1, Cpu::op_dec_l);
    table[0x2E] = Instruction::new("LD L,d8", 2, 2, Cpu::op_ld_l_d8);
    table[0x2F] = Instruction::new("CPL", 1, 1, Cpu::op_cpl);

    table[0x30] = Instruction::new("JR NC,r8", 2, 2, Cpu::op_jr_nc_r8);
    table[0x31] = Instruction::new("LD SP,d16", 3, 3, Cpu::op_ld_sp_d16);
    table[0x32] = Instruction::new("LD (HL-),A", 1, 2, Cpu::op_ld_hldp_a);
    table[0x33] = Instruction::new("INC SP", 1, 2, Cpu::op_inc_sp);
    table[0x34] = Instruction::new("INC (HL)", 1, 3, Cpu::op_inc_hlp);
    table[0x35] = Instruction::new("DEC (HL)", 1, 3, Cpu::op_dec_hlp);
    table[0x36] = Instruction::new("LD (HL),d8", 2, 3, Cpu::op_ld_hlp_d8);
    table[0x37] = Instruction::new("SCF", 1, 1, Cpu::op_scf);
    table[0x38] = Instruction::new("JR C,r8", 2, 2, Cpu::op_jr_c_r8);
    table[0x39] = Instruction::new("ADD HL,SP", 1, 2, Cpu::op_add_hl_sp);
    table[0x3A] = Instruction::new("LD A,(HL-)", 1, 2, Cpu::op_ld_a_hldp);
    table[0x3B] = Instruction::new("DEC SP", 1, 2, Cpu::op_dec_sp);
    table[0x3C] = Instruction::new("INC A", 1, 1, Cpu::op_inc_a);
    table[0x3D] = Instruction::new("DEC A", 1, 1, Cpu::op_dec_a);
    table[0x3E] = Instruction::new("LD A,d8", 2, 2, Cpu::op_ld_a_d8);
    table[0x3F] = Instruction::new("CCF", 1, 1, Cpu::op_ccf);

    // 0x40-0x7F: the 8-bit register-to-register LD grid, minus 0x76 (HALT).
    table[0x40] = Instruction::new("LD B,B", 1, 1, Cpu::op_ld_b_b);
    table[0x41] = Instruction::new("LD B,C", 1, 1, Cpu::op_ld_b_c);
    table[0x42] = Instruction::new("LD B,D", 1, 1, Cpu::op_ld_b_d);
    table[0x43] = Instruction::new("LD B,E", 1, 1, Cpu::op_ld_b_e);
    table[0x44] = Instruction::new("LD B,H", 1, 1, Cpu::op_ld_b_h);
    table[0x45] = Instruction::new("LD B,L", 1, 1, Cpu::op_ld_b_l);
    table[0x46] = Instruction::new("LD B,(HL)", 1, 2, Cpu::op_ld_b_hlp);
    table[0x47] = Instruction::new("LD B,A", 1, 1, Cpu::op_ld_b_a);
    table[0x48] = Instruction::new("LD C,B", 1, 1, Cpu::op_ld_c_b);
    table[0x49] = Instruction::new("LD C,C", 1, 1, Cpu::op_ld_c_c);
    table[0x4A] = Instruction::new("LD C,D", 1, 1, Cpu::op_ld_c_d);
    table[0x4B] = Instruction::new("LD C,E", 1, 1, Cpu::op_ld_c_e);
    table[0x4C] = Instruction::new("LD C,H", 1, 1, Cpu::op_ld_c_h);
    table[0x4D] = Instruction::new("LD C,L", 1, 1, Cpu::op_ld_c_l);
    table[0x4E] = Instruction::new("LD C,(HL)", 1, 2, Cpu::op_ld_c_hlp);
    table[0x4F] = Instruction::new("LD C,A", 1, 1, Cpu::op_ld_c_a);

    table[0x50] = Instruction::new("LD D,B", 1, 1, Cpu::op_ld_d_b);
    table[0x51] = Instruction::new("LD D,C", 1, 1, Cpu::op_ld_d_c);
    table[0x52] = Instruction::new("LD D,D", 1, 1, Cpu::op_ld_d_d);
    table[0x53] = Instruction::new("LD D,E", 1, 1, Cpu::op_ld_d_e);
    table[0x54] = Instruction::new("LD D,H", 1, 1, Cpu::op_ld_d_h);
    table[0x55] = Instruction::new("LD D,L", 1, 1, Cpu::op_ld_d_l);
    table[0x56] = Instruction::new("LD D,(HL)", 1, 2, Cpu::op_ld_d_hlp);
    table[0x57] = Instruction::new("LD D,A", 1, 1, Cpu::op_ld_d_a);
    table[0x58] = Instruction::new("LD E,B", 1, 1, Cpu::op_ld_e_b);
    table[0x59] = Instruction::new("LD E,C", 1, 1, Cpu::op_ld_e_c);
    table[0x5A] = Instruction::new("LD E,D", 1, 1, Cpu::op_ld_e_d);
    table[0x5B] = Instruction::new("LD E,E", 1, 1, Cpu::op_ld_e_e);
    table[0x5C] = Instruction::new("LD E,H", 1, 1, Cpu::op_ld_e_h);
    table[0x5D] = Instruction::new("LD E,L", 1, 1, Cpu::op_ld_e_l);
    table[0x5E] = Instruction::new("LD E,(HL)", 1, 2, Cpu::op_ld_e_hlp);
    table[0x5F] = Instruction::new("LD E,A", 1, 1, Cpu::op_ld_e_a);

    table[0x60] = Instruction::new("LD H,B", 1, 1, Cpu::op_ld_h_b);
    table[0x61] = Instruction::new("LD H,C", 1, 1, Cpu::op_ld_h_c);
    table[0x62] = Instruction::new("LD H,D", 1, 1, Cpu::op_ld_h_d);
    table[0x63] = Instruction::new("LD H,E", 1, 1, Cpu::op_ld_h_e);
    table[0x64] = Instruction::new("LD H,H", 1, 1, Cpu::op_ld_h_h);
    table[0x65] = Instruction::new("LD H,L", 1, 1, Cpu::op_ld_h_l);
    table[0x66] = Instruction::new("LD H,(HL)", 1, 2, Cpu::op_ld_h_hlp);
    table[0x67] = Instruction::new("LD H,A", 1, 1, Cpu::op_ld_h_a);
    table[0x68] = Instruction::new("LD L,B", 1, 1, Cpu::op_ld_l_b);
    table[0x69] = Instruction::new("LD L,C", 1, 1, Cpu::op_ld_l_c);
    table[0x6A] = Instruction::new("LD L,D", 1, 1, Cpu::op_ld_l_d);
    table[0x6B] = Instruction::new("LD L,E", 1, 1, Cpu::op_ld_l_e);
    table[0x6C] = Instruction::new("LD L,H", 1, 1, Cpu::op_ld_l_h);
    table[0x6D] = Instruction::new("LD L,L", 1, 1, Cpu::op_ld_l_l);
    table[0x6E] = Instruction::new("LD L,(HL)", 1, 2, Cpu::op_ld_l_hlp);
    table[0x6F] = Instruction::new("LD L,A", 1, 1, Cpu::op_ld_l_a);

    table[0x70] = Instruction::new("LD (HL),B", 1, 2, Cpu::op_ld_hlp_b);
    table[0x71] = Instruction::new("LD (HL),C", 1, 2, Cpu::op_ld_hlp_c);
    table[0x72] = Instruction::new("LD (HL),D", 1, 2, Cpu::op_ld_hlp_d);
    table[0x73] = Instruction::new("LD (HL),E", 1, 2, Cpu::op_ld_hlp_e);
    table[0x74] = Instruction::new("LD (HL),H", 1, 2, Cpu::op_ld_hlp_h);
    table[0x75] = Instruction::new("LD (HL),L", 1, 2, Cpu::op_ld_hlp_l);
    table[0x76] = Instruction::new("HALT", 1, 1, Cpu::op_halt);
    table[0x77] = Instruction::new("LD (HL),A", 1, 2, Cpu::op_ld_hlp_a);
    table[0x78] = Instruction::new("LD A,B", 1, 1, Cpu::op_ld_a_b);
    table[0x79] = Instruction::new("LD A,C", 1, 1, Cpu::op_ld_a_c);
    table[0x7A] = Instruction::new("LD A,D", 1, 1, Cpu::op_ld_a_d);
    table[0x7B] = Instruction::new("LD A,E", 1, 1, Cpu::op_ld_a_e);
    table[0x7C] = Instruction::new("LD A,H", 1, 1, Cpu::op_ld_a_h);
    table[0x7D] = Instruction::new("LD A,L", 1, 1, Cpu::op_ld_a_l);
    table[0x7E] = Instruction::new("LD A,(HL)", 1, 2, Cpu::op_ld_a_hlp);
    table[0x7F] = Instruction::new("LD A,A", 1, 1, Cpu::op_ld_a_a);

    // 0x80-0xBF: the ALU grid against B,C,D,E,H,L,(HL),A.
    table[0x80] = Instruction::new("ADD A,B", 1, 1, Cpu::op_add_a_b);
    table[0x81] = Instruction::new("ADD A,C", 1, 1, Cpu::op_add_a_c);
    table[0x82] = Instruction::new("ADD A,D", 1, 1, Cpu::op_add_a_d);
    table[0x83] = Instruction::new("ADD A,E", 1, 1, Cpu::op_add_a_e);
    table[0x84] = Instruction::new("ADD A,H", 1, 1, Cpu::op_add_a_h);
    table[0x85] = Instruction::new("ADD A,L", 1, 1, Cpu::op_add_a_l);
    table[0x86] = Instruction::new("ADD A,(HL)", 1, 2, Cpu::op_add_a_hlp);
    table[0x87] = Instruction::new("ADD A,A", 1, 1, Cpu::op_add_a_a);
    table[0x88] = Instruction::new("ADC A,B", 1, 1, Cpu::op_adc_a_b);
    table[0x89] = Instruction::new("ADC A,C", 1, 1, Cpu::op_adc_a_c);
    table[0x8A] = Instruction::new("ADC A,D", 1, 1, Cpu::op_adc_a_d);
    table[0x8B] = Instruction::new("ADC A,E", 1, 1, Cpu::op_adc_a_e);
    table[0x8C] = Instruction::new("ADC A,H", 1, 1, Cpu::op_adc_a_h);
    table[0x8D] = Instruction::new("ADC A,L", 1, 1, Cpu::op_adc_a_l);
    table[0x8E] = Instruction::new("ADC A,(HL)", 1, 2, Cpu::op_adc_a_hlp);
    table[0x8F] = Instruction::new("ADC A,A", 1, 1, Cpu::op_adc_a_a);

    table[0x90] = Instruction::new("SUB B", 1, 1, Cpu::op_sub_a_b);
    table[0x91] = Instruction::new("SUB C", 1, 1, Cpu::op_sub_a_c);
    table[0x92] = Instruction::new("SUB D", 1, 1, Cpu::op_sub_a_d);
    table[0x93] = Instruction::new("SUB E", 1, 1, Cpu::op_sub_a_e);
    table[0x94] = Instruction::new("SUB H", 1, 1, Cpu::op_sub_a_h);
    table[0x95] = Instruction::new("SUB L", 1, 1, Cpu::op_sub_a_l);
    table[0x96] = Instruction::new("SUB (HL)", 1, 2, Cpu::op_sub_a_hlp);
    table[0x97] = Instruction::new("SUB A", 1, 1, Cpu::op_sub_a_a);
    table[0x98] = Instruction::new("SBC A,B", 1, 1, Cpu::op_sbc_a_b);
    table[0x99] = Instruction::new("SBC A,C", 1, 1, Cpu::op_sbc_a_c);
    table[0x9A] = Instruction::new("SBC A,D", 1, 1, Cpu::op_sbc_a_d);
    table[0x9B] = Instruction::new("SBC A,E", 1, 1, Cpu::op_sbc_a_e);
    table[0x9C] = Instruction::new("SBC A,H", 1, 1, Cpu::op_sbc_a_h);
    table[0x9D] = Instruction::new("SBC A,L", 1, 1, Cpu::op_sbc_a_l);
    table[0x9E] = Instruction::new("SBC A,(HL)", 1, 2, Cpu::op_sbc_a_hlp);
    table[0x9F] = Instruction::new("SBC A,A", 1, 1, Cpu::op_sbc_a_a);

    table[0xA0] = Instruction::new("AND B", 1, 1, Cpu::op_and_a_b);
    table[0xA1] = Instruction::new("AND C", 1, 1, Cpu::op_and_a_c);
    table[0xA2] = Instruction::new("AND D", 1, 1, Cpu::op_and_a_d);
    table[0xA3] = Instruction::new("AND E", 1, 1, Cpu::op_and_a_e);
    table[0xA4] = Instruction::new("AND H", 1, 1, Cpu::op_and_a_h);
    table[0xA5] = Instruction::new("AND L", 1, 1, Cpu::op_and_a_l);
    table[0xA6] = Instruction::new("AND (HL)", 1, 2, Cpu::op_and_a_hlp);
    table[0xA7] = Instruction::new("AND A", 1, 1, Cpu::op_and_a_a);
    table[0xA8] = Instruction::new("XOR B", 1, 1, Cpu::op_xor_a_b);
    table[0xA9] = Instruction::new("XOR C", 1, 1, Cpu::op_xor_a_c);
    table[0xAA] = Instruction::new("XOR D", 1, 1, Cpu::op_xor_a_d);
    table[0xAB] = Instruction::new("XOR E", 1, 1, Cpu::op_xor_a_e);
    table[0xAC] = Instruction::new("XOR H", 1, 1, Cpu::op_xor_a_h);
    table[0xAD] = Instruction::new("XOR L", 1, 1, Cpu::op_xor_a_l);
    table[0xAE] = Instruction::new("XOR (HL)", 1, 2, Cpu::op_xor_a_hlp);
    table[0xAF] = Instruction::new("XOR A", 1, 1, Cpu::op_xor_a_a);

    table[0xB0] = Instruction::new("OR B", 1, 1, Cpu::op_or_a_b);
    table[0xB1] = Instruction::new("OR C", 1, 1, Cpu::op_or_a_c);
    table[0xB2] = Instruction::new("OR D", 1, 1, Cpu::op_or_a_d);
    table[0xB3] = Instruction::new("OR E", 1, 1, Cpu::op_or_a_e);
    table[0xB4] = Instruction::new("OR H", 1, 1, Cpu::op_or_a_h);
    table[0xB5] = Instruction::new("OR L", 1, 1, Cpu::op_or_a_l);
    table[0xB6] = Instruction::new("OR (HL)", 1, 2, Cpu::op_or_a_hlp);
    table[0xB7] = Instruction::new("OR A", 1, 1, Cpu::op_or_a_a);
    table[0xB8] = Instruction::new("CP B", 1, 1, Cpu::op_cp_a_b);
    table[0xB9] = Instruction::new("CP C", 1, 1, Cpu::op_cp_a_c);
    table[0xBA] = Instruction::new("CP D", 1, 1, Cpu::op_cp_a_d);
    table[0xBB] = Instruction::new("CP E", 1, 1, Cpu::op_cp_a_e);
    table[0xBC] = Instruction::new("CP H", 1, 1, Cpu::op_cp_a_h);
    table[0xBD] = Instruction::new("CP L", 1, 1, Cpu::op_cp_a_l);
    table[0xBE] = Instruction::new("CP (HL)", 1, 2, Cpu::op_cp_a_hlp);
    table[0xBF] = Instruction::new("CP A", 1, 1, Cpu::op_cp_a_a);

    table[0xC0] = Instruction::new("RET NZ", 1, 2, Cpu::op_ret_nz);
    table[0xC1] = Instruction::new("POP BC", 1, 3, Cpu::op_pop_bc);
    table[0xC2] = Instruction::new("JP NZ,a16", 3, 3, Cpu::op_jp_nz_a16);
    table[0xC3] = Instruction::new("JP a16", 3, 4, Cpu::op_jp_a16);
    table[0xC4] = Instruction::new("CALL NZ,a16", 3, 3, Cpu::op_call_nz_a16);
    table[0xC5] = Instruction::new("PUSH BC", 1, 4, Cpu::op_push_bc);
    table[0xC6] = Instruction::new("ADD A,d8", 2, 2, Cpu::op_add_a_d8);
    table[0xC7] = Instruction::new("RST 00H", 1, 4, Cpu::op_rst_00h);
    table[0xC8] = Instruction::new("RET Z", 1, 2, Cpu::op_ret_z);
    table[0xC9] = Instruction::new("RET", 1, 4, Cpu::op_ret);
    table[0xCA] = Instruction::new("JP Z,a16", 3, 3, Cpu::op_jp_z_a16);
    // 0xCB (CB prefix) deliberately has no handler: the CB-prefixed table
    // is out of this core's scope, and this demonstrates the same
    // UnimplementedOpcode failure path as any other undefined byte.
    table[0xCC] = Instruction::new("CALL Z,a16", 3, 3, Cpu::op_call_z_a16);
    table[0xCD] = Instruction::new("CALL a16", 3, 6, Cpu::op_call_a16);
    table[0xCE] = Instruction::new("ADC A,d8", 2, 2, Cpu::op_adc_a_d8);
    table[0xCF] = Instruction::new("RST 08H", 1, 4, Cpu::op_rst_08h);

    table[0xD0] = Instruction::new("RET NC", 1, 2, Cpu::op_ret_nc);
    table[0xD1] = Instruction::new("POP DE", 1, 3, Cpu::op_pop_de);
    table[0xD2] = Instruction::new("JP NC,a16", 3, 3, Cpu::op_jp_nc_a16);
    table[0xD4] = Instruction::new("CALL NC,a16", 3, 3, Cpu::op_call_nc_a16);
    table[0xD5] = Instruction::new("PUSH DE", 1, 4, Cpu::op_push_de);
    table[0xD6] = Instruction::new("SUB d8", 2, 2, Cpu::op_sub_a_d8);
    table[0xD7] = Instruction::new("RST 10H", 1, 4, Cpu::op_rst_10h);
    table[0xD8] = Instruction::new("RET C", 1, 2, Cpu::op_ret_c);
    table[0xD9] = Instruction::new("RETI", 1, 4, Cpu::op_reti);
    table[0xDA] = Instruction::new("JP C,a16", 3, 3, Cpu::op_jp_c_a16);
    table[0xDC] = Instruction::new("CALL C,a16", 3, 3, Cpu::op_call_c_a16);
    table[0xDE] = Instruction::new("SBC A,d8", 2, 2, Cpu::op_sbc_a_d8);
    table[0xDF] = Instruction::new("RST 18H", 1, 4, Cpu::op_rst_18h);

    table[0xE0] = Instruction::new("LDH (a8),A", 2, 3, Cpu::op_ldh_a8p_a);
    table[0xE1] = Instruction::new("POP HL", 1, 3, Cpu::op_pop_hl);
    table[0xE2] = Instruction::new("LD (C),A", 1, 2, Cpu::op_ld_cp_a);
    table[0xE5] = Instruction::new("PUSH HL", 1, 4, Cpu::op_push_hl);
    table[0xE6] = Instruction::new("AND d8", 2, 2, Cpu::op_and_a_d8);
    table[0xE7] = Instruction::new("RST 20H", 1, 4, Cpu::op_rst_20h);
    table[0xE8] = Instruction::new("ADD SP,r8", 2, 4, Cpu::op_add_sp_r8);
    table[0xE9] = Instruction::new("JP HL", 1, 1, Cpu::op_jp_hl);
    table[0xEA] = Instruction::new("LD (a16),A", 3, 4, Cpu::op_ld_a16p_a);
    table[0xEE] = Instruction::new("XOR d8", 2, 2, Cpu::op_xor_a_d8);
    table[0xEF] = Instruction::new("RST 28H", 1, 4, Cpu::op_rst_28h);

    table[0xF0] = Instruction::new("LDH A,(a8)", 2, 3, Cpu::op_ldh_a_a8p);
    table[0xF1] = Instruction::new("POP AF", 1, 3, Cpu::op_pop_af);
    table[0xF2] = Instruction::new("LD A,(C)", 1, 2, Cpu::op_ld_a_cp);
    table[0xF3] = Instruction::new("DI", 1, 1, Cpu::op_di);
    table[0xF5] = Instruction::new("PUSH AF", 1, 4, Cpu::op_push_af);
    table[0xF6] = Instruction::new("OR d8", 2, 2, Cpu::op_or_a_d8);
    table[0xF7] = Instruction::new("RST 30H", 1, 4, Cpu::op_rst_30h);
    table[0xF8] = Instruction::new("LD HL,SP+r8", 2, 3, Cpu::op_ld_hl_sp_r8);
    table[0xF9] = Instruction::new("LD SP,HL", 1, 2, Cpu::op_ld_sp_hl);
    table[0xFA] = Instruction::new("LD A,(a16)", 3, 4, Cpu::op_ld_a_a16p);
    table[0xFB] = Instruction::new("EI", 1, 1, Cpu::op_ei);
    table[0xFE] = Instruction::new("CP d8", 2, 2, Cpu::op_cp_a_d8);
    table[0xFF] = Instruction::new("RST 38H", 1, 4, Cpu::op_rst_38h);

    table
}

lazy_static! {
    pub static ref INSTRUCTIONS: [Instruction; 256] = build_table();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cb_prefix_and_undefined_bytes_are_unimplemented() {
        for opcode in [0xCBu8, 0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD] {
            assert!(
                INSTRUCTIONS[opcode as usize].execute.is_none(),
                "opcode {:#04X} should be unimplemented",
                opcode
            );
        }
    }

    #[test]
    fn jp_a16_is_wired_with_declared_length_and_cycles() {
        let instr = &INSTRUCTIONS[0xC3];
        assert_eq!(instr.mnemonic, "JP a16");
        assert_eq!(instr.length, 3);
        assert_eq!(instr.cycles, 4);
        assert!(instr.execute.is_some());
    }
}
