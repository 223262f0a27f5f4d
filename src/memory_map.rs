#![allow(dead_code)] // Allow unused constants, as they define the complete map

// --- Memory Map Constants ---
// The I/O block (0xFF00-0xFF7F) is flat backing storage as far as this
// core is concerned; per-register addresses (LCDC, DIV, NRxx, ...) belong
// to PPU/APU/timer/joypad collaborators that are out of scope here and are
// not named.
pub const ROM_START: u16 = 0x0000;
pub const ROM_END: u16 = 0x7FFF;
pub const ROM_BANK_0_END: u16 = 0x3FFF;

pub const VRAM_START: u16 = 0x8000;
pub const VRAM_END: u16 = 0x9FFF;
pub const VRAM_SIZE: usize = (VRAM_END - VRAM_START + 1) as usize; // 8 KiB

pub const EXT_RAM_START: u16 = 0xA000;
pub const EXT_RAM_END: u16 = 0xBFFF;
pub const EXT_RAM_SIZE: usize = (EXT_RAM_END - EXT_RAM_START + 1) as usize; // 8 KiB

pub const WRAM_BANK_0_START: u16 = 0xC000;
pub const WRAM_BANK_0_END: u16 = 0xCFFF;
pub const WRAM_BANK_N_START: u16 = 0xD000;
pub const WRAM_BANK_N_END: u16 = 0xDFFF;
pub const WRAM_SIZE: usize = 2 * ((WRAM_BANK_0_END - WRAM_BANK_0_START + 1) as usize); // 8 KiB, banks 0+1

pub const ECHO_RAM_START: u16 = 0xE000;
pub const ECHO_RAM_END: u16 = 0xFDFF;
pub const ECHO_RAM_OFFSET: u16 = 0x2000; // mirrors C000-DDFF

pub const OAM_START: u16 = 0xFE00;
pub const OAM_END: u16 = 0xFE9F;
pub const OAM_SIZE: usize = (OAM_END - OAM_START + 1) as usize; // 160 bytes

pub const NOT_USABLE_START: u16 = 0xFEA0;
pub const NOT_USABLE_END: u16 = 0xFEFF;

pub const IO_REGISTERS_START: u16 = 0xFF00;
pub const IO_REGISTERS_END: u16 = 0xFF7F;
pub const IO_REGISTERS_SIZE: usize = (IO_REGISTERS_END - IO_REGISTERS_START + 1) as usize; // 128 bytes

pub const HRAM_START: u16 = 0xFF80;
pub const HRAM_END: u16 = 0xFFFE;
pub const HRAM_SIZE: usize = (HRAM_END - HRAM_START + 1) as usize; // 127 bytes

pub const INTERRUPT_ENABLE_REGISTER: u16 = 0xFFFF;

/// ROM header offset carrying the cartridge (mapper) type byte.
pub const CARTRIDGE_TYPE_ADDR: usize = 0x0147;
