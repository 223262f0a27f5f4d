//! Sharp SM83 CPU core: fetch/decode/execute loop, register/flag model,
//! and memory-bus address decoding with mapper bank-switching.

pub mod cpu;
pub mod error;
pub mod mapper;
pub mod memory_bus;
pub mod memory_map;

pub use cpu::Cpu;
pub use error::{AccessKind, BusError, CpuError};
pub use mapper::Mapper;
pub use memory_bus::MemoryBus;
