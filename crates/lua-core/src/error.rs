//! LUA Error Types
//!
//! Defines the error conditions produced around the configuration word format.
//! The four instruction builders never fail; errors come from strict address
//! checks, program parsing, image decoding and the byte sink.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LuaError {
    // Addressing errors
    #[error("grid address out of range: col={col}, row={row}")]
    AddressOutOfRange { col: i64, row: i64 },

    // Image errors
    #[error("image length {0} is not a multiple of the 2-byte word size")]
    OddImageLength(usize),
    #[error("word {index} (0x{raw:04X}) has reserved bits set")]
    ReservedBitsSet { index: usize, raw: u16 },

    // Program errors
    #[error("malformed program: {0}")]
    ProgramFormat(String),

    // IO boundary
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl From<serde_json::Error> for LuaError {
    fn from(err: serde_json::Error) -> Self {
        LuaError::ProgramFormat(err.to_string())
    }
}

pub type LuaResult<T> = Result<T, LuaError>;
