//! Cartridge memory bank controllers (MBCs).
//!
//! A tagged enum over mapper kinds, dispatched by exhaustive `match` (design
//! note 9's recommendation) rather than the teacher's runtime polymorphism.
//! Unsupported-mapper detection happens once, at construction.

use crate::error::BusError;
use crate::memory_map::{CARTRIDGE_TYPE_ADDR, ROM_BANK_0_END};

const ROM_BANK_SIZE: usize = 0x4000; // 16 KiB

/// A cartridge's memory bank controller and the ROM it multiplexes.
#[derive(Debug, Clone)]
pub enum Mapper {
    /// Cartridge type 0x00: no banking, the ROM is read straight through.
    NoMbc { rom: Vec<u8> },
    /// Cartridge types 0x01-0x03: MBC1 with the lower-5-bit ROM bank
    /// register this core models (RAM banking mode is not implemented).
    Mbc1 { rom: Vec<u8>, rom_bank: u8 },
}

impl Mapper {
    /// Detects the mapper kind from the cartridge header byte at 0x0147
    /// and constructs the matching mapper around `rom`.
    pub fn detect(rom: Vec<u8>) -> Result<Self, BusError> {
        let code = rom.get(CARTRIDGE_TYPE_ADDR).copied().unwrap_or(0);
        match code {
            0x00 => Ok(Mapper::NoMbc { rom }),
            0x01 | 0x02 | 0x03 => Ok(Mapper::Mbc1 { rom, rom_bank: 1 }),
            _ => Err(BusError::UnsupportedMapper { code }),
        }
    }

    pub fn read(&self, address: u16) -> u8 {
        match self {
            Mapper::NoMbc { rom } => rom.get(address as usize).copied().unwrap_or(0xFF),
            Mapper::Mbc1 { rom, rom_bank } => {
                let offset = if address <= ROM_BANK_0_END {
                    address as usize
                } else {
                    (address as usize - ROM_BANK_SIZE) + (*rom_bank as usize) * ROM_BANK_SIZE
                };
                rom.get(offset).copied().unwrap_or(0xFF)
            }
        }
    }

    /// Writes into the ROM address range. On NoMBC this is a silent no-op;
    /// on MBC1, writes to 0x2000-0x3FFF select the lower 5 bits of the ROM
    /// bank register (0 is forced to 1). All other addresses are ignored.
    pub fn write(&mut self, address: u16, value: u8) {
        if let Mapper::Mbc1 { rom_bank, .. } = self {
            if (0x2000..=0x3FFF).contains(&address) {
                let selected = value & 0x1F;
                *rom_bank = if selected == 0 { 1 } else { selected };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rom_with_header(code: u8, size: usize) -> Vec<u8> {
        let mut rom = vec![0u8; size];
        rom[CARTRIDGE_TYPE_ADDR] = code;
        rom
    }

    #[test]
    fn detects_no_mbc() {
        let rom = rom_with_header(0x00, 0x8000);
        assert!(matches!(Mapper::detect(rom).unwrap(), Mapper::NoMbc { .. }));
    }

    #[test]
    fn detects_mbc1_variants() {
        for code in [0x01u8, 0x02, 0x03] {
            let rom = rom_with_header(code, 0x8000);
            assert!(matches!(Mapper::detect(rom).unwrap(), Mapper::Mbc1 { .. }));
        }
    }

    #[test]
    fn rejects_unsupported_mapper() {
        let rom = rom_with_header(0x05, 0x8000);
        let err = Mapper::detect(rom).unwrap_err();
        assert_eq!(err, BusError::UnsupportedMapper { code: 0x05 });
    }

    #[test]
    fn mbc1_bank_zero_becomes_one() {
        let rom = rom_with_header(0x01, 0x8000);
        let mut mapper = Mapper::detect(rom).unwrap();
        mapper.write(0x2000, 0x00);
        match mapper {
            Mapper::Mbc1 { rom_bank, .. } => assert_eq!(rom_bank, 1),
            _ => unreachable!(),
        }
    }

    #[test]
    fn mbc1_selects_lower_five_bits() {
        let rom = rom_with_header(0x01, 0x8000);
        let mut mapper = Mapper::detect(rom).unwrap();
        mapper.write(0x2000, 0xFF);
        match mapper {
            Mapper::Mbc1 { rom_bank, .. } => assert_eq!(rom_bank, 0x1F),
            _ => unreachable!(),
        }
    }

    #[test]
    fn mbc1_banked_read_offsets_into_rom() {
        let mut rom = rom_with_header(0x01, ROM_BANK_SIZE * 3);
        rom[ROM_BANK_SIZE * 2] = 0x42; // first byte of bank 2
        let mut mapper = Mapper::detect(rom).unwrap();
        mapper.write(0x2000, 0x02);
        assert_eq!(mapper.read(0x4000), 0x42);
    }

    #[test]
    fn no_mbc_write_is_silent_noop() {
        let rom = rom_with_header(0x00, 0x8000);
        let mut mapper = Mapper::detect(rom).unwrap();
        mapper.write(0x2000, 0xFF); // must not panic or alter reads
        assert_eq!(mapper.read(0x2000), 0x00);
    }
}
