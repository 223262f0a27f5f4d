use std::env;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use sm83_core::{Cpu, MemoryBus};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <rom_path>", args[0]);
        return ExitCode::FAILURE;
    }
    let rom_path = Path::new(&args[1]);

    let rom = match fs::read(rom_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("failed to read ROM {}: {}", rom_path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut bus = match MemoryBus::new(rom) {
        Ok(bus) => bus,
        Err(e) => {
            eprintln!("failed to construct memory bus: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut cpu = Cpu::new();

    log::info!("starting emulation at PC={:#06X}", cpu.pc());
    loop {
        match cpu.step(&mut bus) {
            Ok(_) => {
                if cpu.halted() {
                    log::info!("CPU halted at PC={:#06X}", cpu.pc());
                    break;
                }
            }
            Err(e) => {
                eprintln!("emulation stopped: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
