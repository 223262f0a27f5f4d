//! Error taxonomy for the bus and CPU core.
//!
//! Every fallible operation in this crate is fatal to the caller: there is
//! no retry path anywhere. The enums below exist so a driver can match on
//! *kind* rather than parse a string, and so diagnostics always render
//! addresses/opcodes in hexadecimal.

use std::fmt;

/// Which direction an address decode failure occurred on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    Read,
    Write,
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessKind::Read => write!(f, "read"),
            AccessKind::Write => write!(f, "write"),
        }
    }
}

/// Faults raised by the memory bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// A read or write targeted an address with no defined region.
    InvalidAddress { address: u16, access: AccessKind },
    /// A write targeted the prohibited 0xFEA0-0xFEFF region.
    ProhibitedWrite { address: u16 },
    /// The ROM header named a mapper this core does not model.
    UnsupportedMapper { code: u8 },
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusError::InvalidAddress { address, access } => {
                write!(f, "invalid memory address {address:#06X} ({access})")
            }
            BusError::ProhibitedWrite { address } => {
                write!(f, "prohibited write to {address:#06X}")
            }
            BusError::UnsupportedMapper { code } => {
                write!(f, "unsupported mapper type {code:#04X}")
            }
        }
    }
}

impl std::error::Error for BusError {}

/// Faults raised by the CPU core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// `step` dispatched an opcode with no handler installed.
    UnimplementedOpcode { opcode: u8, pc: u16 },
    /// A handler's bus access failed.
    Bus(BusError),
}

impl fmt::Display for CpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuError::UnimplementedOpcode { opcode, pc } => write!(
                f,
                "unimplemented opcode {opcode:#04X} fetched at PC={pc:#06X}"
            ),
            CpuError::Bus(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CpuError {}

impl From<BusError> for CpuError {
    fn from(e: BusError) -> Self {
        CpuError::Bus(e)
    }
}
