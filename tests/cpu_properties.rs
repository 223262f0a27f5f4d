//! Invariant-style properties that must hold regardless of which specific
//! opcode produced them: the F low nibble, register-pair aliasing, and the
//! round-trip behaviors spec.md calls out explicitly.

#[cfg(test)]
mod tests {
    use sm83_core::{Cpu, MemoryBus};

    fn bus(program: &[u8]) -> MemoryBus {
        let mut rom = vec![0u8; 0x8000];
        rom[0x0100..0x0100 + program.len()].copy_from_slice(program);
        MemoryBus::new(rom).unwrap()
    }

    #[test]
    fn f_low_nibble_is_always_zero_after_every_alu_op() {
        let mut cpu = Cpu::new();
        // LD A,0x0F ; ADD A,0x01 ; DAA ; OR A,A
        let mut bus = bus(&[0x3E, 0x0F, 0xC6, 0x01, 0x27, 0xB7]);
        for _ in 0..4 {
            cpu.step(&mut bus).unwrap();
            assert_eq!(cpu.registers().1 & 0x0F, 0);
        }
    }

    #[test]
    fn bc_de_hl_are_views_over_their_8bit_halves() {
        let mut cpu = Cpu::new();
        // LD BC,0x1234 ; LD DE,0x5678 ; LD HL,0x9ABC
        let mut bus = bus(&[0x01, 0x34, 0x12, 0x11, 0x78, 0x56, 0x21, 0xBC, 0x9A]);
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.bc(), 0x1234);
        assert_eq!(cpu.de(), 0x5678);
        assert_eq!(cpu.hl(), 0x9ABC);
        let (_, _, b, c, d, e, h, l) = cpu.registers();
        assert_eq!(((b as u16) << 8) | c as u16, 0x1234);
        assert_eq!(((d as u16) << 8) | e as u16, 0x5678);
        assert_eq!(((h as u16) << 8) | l as u16, 0x9ABC);
    }

    #[test]
    fn jr_round_trips_for_arbitrary_forward_and_backward_offsets() {
        for offset in [-2i8, -1, 0, 1, 10] {
            let mut cpu = Cpu::new();
            let mut bus = bus(&[0x18, offset as u8]);
            cpu.step(&mut bus).unwrap();
            let expected = (0x0100u16).wrapping_add(2).wrapping_add(offset as i16 as u16);
            assert_eq!(cpu.pc(), expected);
        }
    }

    #[test]
    fn rlca_then_rrca_is_the_identity() {
        let mut cpu = Cpu::new();
        let mut bus = bus(&[0x3E, 0x81, 0x07, 0x0F]); // LD A,0x81 ; RLCA ; RRCA
        cpu.step(&mut bus).unwrap();
        let original = cpu.registers().0;
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.registers().0, original);
    }

    #[test]
    fn rrca_then_rlca_is_the_identity() {
        let mut cpu = Cpu::new();
        let mut bus = bus(&[0x3E, 0x81, 0x0F, 0x07]); // LD A,0x81 ; RRCA ; RLCA
        cpu.step(&mut bus).unwrap();
        let original = cpu.registers().0;
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.registers().0, original);
    }

    #[test]
    fn inc_dec_never_touch_the_carry_flag() {
        let mut cpu = Cpu::new();
        // SCF (set carry) ; INC B ; DEC B
        let mut bus = bus(&[0x37, 0x04, 0x05]);
        cpu.step(&mut bus).unwrap();
        assert!(cpu.registers().1 & 0x10 != 0); // C set by SCF
        cpu.step(&mut bus).unwrap();
        assert!(cpu.registers().1 & 0x10 != 0); // untouched by INC
        cpu.step(&mut bus).unwrap();
        assert!(cpu.registers().1 & 0x10 != 0); // untouched by DEC
    }

    #[test]
    fn push_pop_round_trips_every_register_pair() {
        let mut cpu = Cpu::new();
        // LD BC,0xBEEF ; PUSH BC ; POP DE
        let mut bus = bus(&[0x01, 0xEF, 0xBE, 0xC5, 0xD1]);
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.de(), 0xBEEF);
        assert_eq!(cpu.sp(), 0xFFFE); // balanced push/pop restores SP
    }

    #[test]
    fn pop_af_masks_the_low_nibble_of_f() {
        let mut cpu = Cpu::new();
        // LD BC,0x12FF ; PUSH BC ; POP AF
        let mut bus = bus(&[0x01, 0xFF, 0x12, 0xC5, 0xF1]);
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.registers().1, 0xF0); // low nibble of 0xFF forced to 0
    }
}
