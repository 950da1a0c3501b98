//! Error taxonomy for the emulator core.

use thiserror::Error;

/// Failure while parsing an Intel HEX file into [`crate::hex::Chunk`]s.
#[derive(Debug, Error)]
pub enum HexError {
    #[error("line {line}: record is missing the leading ':'")]
    MissingColon { line: usize },

    #[error("line {line}: record has an odd number of hex digits")]
    OddLength { line: usize },

    #[error("line {line}: non-hex character in record")]
    InvalidHexDigit { line: usize },

    #[error("line {line}: record shorter than the minimum 4 payload bytes")]
    ShortRecord { line: usize },

    #[error("line {line}: checksum mismatch")]
    ChecksumMismatch { line: usize },

    #[error("could not read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Failure while uploading chunks into [`crate::flash::Flash`] or
/// otherwise initializing an [`crate::emulator::Emulator`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("program image is empty, nothing to load")]
    Empty,

    #[error("program image ends at 0x{end:06X}, past FLASHEND (0x{flashend:06X})")]
    TooLarge { end: u32, flashend: u32 },

    #[error("unknown MCU device '{0}'")]
    UnknownDevice(String),

    #[error(".elf input is recognized but not supported")]
    UnsupportedElf,

    #[error(transparent)]
    Hex(#[from] HexError),
}

/// A runtime exception raised while executing a single instruction.
/// The run loop treats any of these as terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exception {
    /// Decoded instruction was `UNDEF`.
    Crash,
    /// A load/store address computed from registers exceeded RAMEND.
    Segfault,
}

impl std::fmt::Display for Exception {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Exception::Crash => write!(f, "undefined instruction"),
            Exception::Segfault => write!(f, "segmentation fault"),
        }
    }
}
