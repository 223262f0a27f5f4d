//! The Game Boy memory bus: address decoding across ROM (via the mapper),
//! VRAM, external RAM, work RAM, OAM, I/O, HRAM, and the IE register.

use crate::error::{AccessKind, BusError};
use crate::mapper::Mapper;
use crate::memory_map::*;

/// Routes reads and writes across the Game Boy's 16-bit address space.
///
/// Owns the mapper and every flat backing buffer; nothing outside this
/// struct holds RAM. I/O (0xFF00-0xFF7F) and HRAM are plain storage here —
/// per-register side effects belong to collaborators (PPU, timer, joypad,
/// serial) that intercept specific addresses externally.
#[derive(Debug, Clone)]
pub struct MemoryBus {
    mapper: Mapper,
    vram: [u8; VRAM_SIZE],
    ext_ram: [u8; EXT_RAM_SIZE],
    wram: [u8; WRAM_SIZE],
    oam: [u8; OAM_SIZE],
    io: [u8; IO_REGISTERS_SIZE],
    hram: [u8; HRAM_SIZE],
    interrupt_enable: u8,
}

impl MemoryBus {
    /// Constructs a bus around a pre-loaded ROM blob, detecting the mapper
    /// from the cartridge header. Fails if the header names an unsupported
    /// mapper type. All RAM buffers are zero-initialized.
    pub fn new(rom: Vec<u8>) -> Result<Self, BusError> {
        let mapper = Mapper::detect(rom)?;
        log::debug!("memory bus constructed with mapper {:?}", mapper);
        Ok(MemoryBus {
            mapper,
            vram: [0; VRAM_SIZE],
            ext_ram: [0; EXT_RAM_SIZE],
            wram: [0; WRAM_SIZE],
            oam: [0; OAM_SIZE],
            io: [0; IO_REGISTERS_SIZE],
            hram: [0; HRAM_SIZE],
            interrupt_enable: 0,
        })
    }

    pub fn read(&self, address: u16) -> Result<u8, BusError> {
        if address <= ROM_END {
            Ok(self.mapper.read(address))
        } else if (VRAM_START..=VRAM_END).contains(&address) {
            Ok(self.vram[(address - VRAM_START) as usize])
        } else if (EXT_RAM_START..=EXT_RAM_END).contains(&address) {
            Ok(self.ext_ram[(address - EXT_RAM_START) as usize])
        } else if (WRAM_BANK_0_START..=WRAM_BANK_0_END).contains(&address) {
            Ok(self.wram[(address - WRAM_BANK_0_START) as usize])
        } else if (WRAM_BANK_N_START..=WRAM_BANK_N_END).contains(&address) {
            Ok(self.wram[0x1000 + (address - WRAM_BANK_N_START) as usize])
        } else if (ECHO_RAM_START..=ECHO_RAM_END).contains(&address) {
            self.read(address - ECHO_RAM_OFFSET)
        } else if (OAM_START..=OAM_END).contains(&address) {
            Ok(self.oam[(address - OAM_START) as usize])
        } else if (NOT_USABLE_START..=NOT_USABLE_END).contains(&address) {
            Ok(0x00)
        } else if (IO_REGISTERS_START..=IO_REGISTERS_END).contains(&address) {
            Ok(self.io[(address - IO_REGISTERS_START) as usize])
        } else if (HRAM_START..=HRAM_END).contains(&address) {
            Ok(self.hram[(address - HRAM_START) as usize])
        } else if address == INTERRUPT_ENABLE_REGISTER {
            Ok(self.interrupt_enable)
        } else {
            Err(BusError::InvalidAddress {
                address,
                access: AccessKind::Read,
            })
        }
    }

    pub fn write(&mut self, address: u16, value: u8) -> Result<(), BusError> {
        let value = value & 0xFF;
        if address <= ROM_END {
            self.mapper.write(address, value);
            Ok(())
        } else if (VRAM_START..=VRAM_END).contains(&address) {
            self.vram[(address - VRAM_START) as usize] = value;
            Ok(())
        } else if (EXT_RAM_START..=EXT_RAM_END).contains(&address) {
            self.ext_ram[(address - EXT_RAM_START) as usize] = value;
            Ok(())
        } else if (WRAM_BANK_0_START..=WRAM_BANK_0_END).contains(&address) {
            self.wram[(address - WRAM_BANK_0_START) as usize] = value;
            Ok(())
        } else if (WRAM_BANK_N_START..=WRAM_BANK_N_END).contains(&address) {
            self.wram[0x1000 + (address - WRAM_BANK_N_START) as usize] = value;
            Ok(())
        } else if (ECHO_RAM_START..=ECHO_RAM_END).contains(&address) {
            self.write(address - ECHO_RAM_OFFSET, value)
        } else if (OAM_START..=OAM_END).contains(&address) {
            self.oam[(address - OAM_START) as usize] = value;
            Ok(())
        } else if (NOT_USABLE_START..=NOT_USABLE_END).contains(&address) {
            log::warn!("prohibited write to {:#06X}", address);
            Err(BusError::ProhibitedWrite { address })
        } else if (IO_REGISTERS_START..=IO_REGISTERS_END).contains(&address) {
            self.io[(address - IO_REGISTERS_START) as usize] = value;
            Ok(())
        } else if (HRAM_START..=HRAM_END).contains(&address) {
            self.hram[(address - HRAM_START) as usize] = value;
            Ok(())
        } else if address == INTERRUPT_ENABLE_REGISTER {
            self.interrupt_enable = value;
            Ok(())
        } else {
            log::warn!("invalid memory write at {:#06X}", address);
            Err(BusError::InvalidAddress {
                address,
                access: AccessKind::Write,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bus_with_rom(size: usize) -> MemoryBus {
        let mut rom = vec![0u8; size];
        rom[CARTRIDGE_TYPE_ADDR] = 0x00;
        MemoryBus::new(rom).unwrap()
    }

    #[test]
    fn echo_ram_mirrors_work_ram_both_ways() {
        let mut bus = bus_with_rom(0x8000);
        bus.write(0xE000, 0x84).unwrap();
        assert_eq!(bus.read(0xC000).unwrap(), 0x84);

        bus.write(0xC010, 0x11).unwrap();
        assert_eq!(bus.read(0xE010).unwrap(), 0x11);
    }

    #[test]
    fn prohibited_region_reads_zero_and_rejects_writes() {
        let mut bus = bus_with_rom(0x8000);
        assert_eq!(bus.read(0xFEA0).unwrap(), 0x00);
        assert_eq!(
            bus.write(0xFEA0, 0x01).unwrap_err(),
            BusError::ProhibitedWrite { address: 0xFEA0 }
        );
    }

    #[test]
    fn hram_and_ie_round_trip() {
        let mut bus = bus_with_rom(0x8000);
        bus.write(0xFF80, 0x77).unwrap();
        assert_eq!(bus.read(0xFF80).unwrap(), 0x77);
        bus.write(0xFFFF, 0x1F).unwrap();
        assert_eq!(bus.read(0xFFFF).unwrap(), 0x1F);
    }

    #[test]
    fn wram_banks_are_independently_addressable() {
        let mut bus = bus_with_rom(0x8000);
        bus.write(0xC000, 0xAA).unwrap();
        bus.write(0xD000, 0xBB).unwrap();
        assert_eq!(bus.read(0xC000).unwrap(), 0xAA);
        assert_eq!(bus.read(0xD000).unwrap(), 0xBB);
    }

    #[test]
    fn mapper_construction_fails_for_unsupported_type() {
        let mut rom = vec![0u8; 0x8000];
        rom[CARTRIDGE_TYPE_ADDR] = 0x19;
        let err = MemoryBus::new(rom).unwrap_err();
        assert_eq!(err, BusError::UnsupportedMapper { code: 0x19 });
    }

    #[test]
    fn write_masks_to_eight_bits() {
        let mut bus = bus_with_rom(0x8000);
        bus.write(0x8000, 0x1FF as u16 as u8).unwrap();
        assert_eq!(bus.read(0x8000).unwrap(), 0xFF);
    }
}
