use thiserror::Error;

/// Errors that can surface while loading an image or running the fetch-decode-execute loop.
#[derive(Debug, Error)]
pub enum VmError {
    /// The opcode at `pc` decoded to RTI or RES, both reserved in user mode.
    #[error("illegal instruction {opcode:#06b} at pc {pc:#06x}")]
    IllegalOpcode { opcode: u8, pc: u16 },

    /// The object file could not be read, or ended before a full origin word.
    #[error("failed to load image: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VmError>;
