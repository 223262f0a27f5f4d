use super::{Cpu, CpuResult, constants::*};
use crate::memory_bus::MemoryBus;

// --- Rotate/Shift Implementations (non-CB prefixed) ---
impl Cpu {
    // RLCA
    pub fn op_rlca(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = self.rlc(self.a);
        self.set_flag(FLAG_Z, false); // Special case: Z flag is always cleared
        Ok(0)
    }
    // RLA
    pub fn op_rla(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = self.rl(self.a);
        self.set_flag(FLAG_Z, false);
        Ok(0)
    }
    // RRCA
    pub fn op_rrca(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = self.rrc(self.a);
        self.set_flag(FLAG_Z, false);
        Ok(0)
    }
    // RRA
    pub fn op_rra(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = self.rr(self.a);
        self.set_flag(FLAG_Z, false);
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_bus() -> MemoryBus {
        MemoryBus::new(vec![0u8; 0x8000]).unwrap()
    }

    #[test]
    fn rlca_then_rrca_round_trips() {
        let mut cpu = Cpu::new();
        cpu.a = 0xB4;
        let original = cpu.a;
        cpu.op_rlca(&mut dummy_bus()).unwrap();
        cpu.op_rrca(&mut dummy_bus()).unwrap();
        assert_eq!(cpu.a, original);
    }

    #[test]
    fn rrca_then_rlca_round_trips() {
        let mut cpu = Cpu::new();
        cpu.a = 0x5A;
        let original = cpu.a;
        cpu.op_rrca(&mut dummy_bus()).unwrap();
        cpu.op_rlca(&mut dummy_bus()).unwrap();
        assert_eq!(cpu.a, original);
    }
}
