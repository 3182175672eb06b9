mod config;
mod cpu;
mod error;
mod host;
mod instruction;
mod loader;
mod memory;
mod registers;
mod sign_extend;
mod trap_vector;
mod traps;

pub use crate::config::Config;
pub use crate::cpu::Cpu;
pub use crate::error::{Result, VmError};
pub use crate::host::{HostIo, TerminalIo};

/// Loads the object file named by `config` and runs it to completion on a real terminal.
///
/// Returns once the program HALTs; returns an error on an image-load failure or a fatal
/// reserved/illegal opcode.
pub fn run(config: Config) -> Result<()> {
    let mut cpu = Cpu::new();
    let origin = loader::load_file(&config.program, &mut cpu.mem)?;
    cpu.regs.pc = origin;

    let mut host = TerminalIo::new()
        .map_err(|e| VmError::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string())))?;
    cpu.run(&mut host)
}
