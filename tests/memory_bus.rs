//! Address-decode coverage for every region of the 16-bit bus, exercised
//! through the public crate API rather than the unit tests colocated with
//! `memory_bus.rs`/`mapper.rs`.

#[cfg(test)]
mod tests {
    use sm83_core::{AccessKind, BusError, MemoryBus};

    const ROM_BANK_SIZE: usize = 0x4000;
    const CARTRIDGE_TYPE_ADDR: usize = 0x0147;

    fn rom(code: u8, size: usize) -> Vec<u8> {
        let mut rom = vec![0u8; size];
        rom[CARTRIDGE_TYPE_ADDR] = code;
        rom
    }

    #[test]
    fn no_mbc_rom_reads_straight_through_and_ignores_writes() {
        let mut data = rom(0x00, 0x8000);
        data[0x1234] = 0xAB;
        let mut bus = MemoryBus::new(data).unwrap();
        assert_eq!(bus.read(0x1234).unwrap(), 0xAB);
        bus.write(0x1234, 0xFF).unwrap(); // ROM writes are a silent no-op
        assert_eq!(bus.read(0x1234).unwrap(), 0xAB);
    }

    #[test]
    fn mbc1_bank_switch_changes_the_upper_rom_window() {
        let mut data = rom(0x01, ROM_BANK_SIZE * 4);
        data[ROM_BANK_SIZE * 2] = 0x42; // first byte of bank 2
        data[ROM_BANK_SIZE * 3] = 0x99; // first byte of bank 3
        let mut bus = MemoryBus::new(data).unwrap();

        bus.write(0x2000, 0x02); // select bank 2
        assert_eq!(bus.read(0x4000).unwrap(), 0x42);

        bus.write(0x2000, 0x03); // select bank 3
        assert_eq!(bus.read(0x4000).unwrap(), 0x99);
    }

    #[test]
    fn vram_and_external_ram_are_independently_addressable() {
        let mut bus = MemoryBus::new(rom(0x00, 0x8000)).unwrap();
        bus.write(0x8000, 0x11).unwrap();
        bus.write(0xA000, 0x22).unwrap();
        assert_eq!(bus.read(0x8000).unwrap(), 0x11);
        assert_eq!(bus.read(0xA000).unwrap(), 0x22);
        // writing one must not bleed into the other
        assert_ne!(bus.read(0x8000).unwrap(), bus.read(0xA000).unwrap());
    }

    #[test]
    fn oam_round_trips() {
        let mut bus = MemoryBus::new(rom(0x00, 0x8000)).unwrap();
        bus.write(0xFE00, 0x55).unwrap();
        bus.write(0xFE9F, 0xAA).unwrap();
        assert_eq!(bus.read(0xFE00).unwrap(), 0x55);
        assert_eq!(bus.read(0xFE9F).unwrap(), 0xAA);
    }

    #[test]
    fn io_registers_are_flat_storage() {
        let mut bus = MemoryBus::new(rom(0x00, 0x8000)).unwrap();
        bus.write(0xFF40, 0x91).unwrap(); // LCDC address, but just a byte here
        assert_eq!(bus.read(0xFF40).unwrap(), 0x91);
    }

    #[test]
    fn echo_ram_end_boundary_mirrors_wram_bank_1() {
        let mut bus = MemoryBus::new(rom(0x00, 0x8000)).unwrap();
        bus.write(0xDDFF, 0x77).unwrap();
        assert_eq!(bus.read(0xFDFF).unwrap(), 0x77);
    }

    #[test]
    fn reading_unsupported_cartridge_type_rejects_construction() {
        let err = MemoryBus::new(rom(0xFF, 0x8000)).unwrap_err();
        assert_eq!(err, BusError::UnsupportedMapper { code: 0xFF });
    }

    #[test]
    fn invalid_address_is_unreachable_within_the_documented_map() {
        // Every address 0x0000-0xFFFF in the Game Boy map is accounted for
        // by some region; InvalidAddress exists for defensive completeness
        // and is exercised directly against the error type instead.
        let err = BusError::InvalidAddress {
            address: 0x0000,
            access: AccessKind::Read,
        };
        assert_eq!(err.to_string(), "invalid memory address 0x0000 (read)");
    }
}
