//! Image crate: byte-sink integration for LUA sequences
//!
//! This crate writes finished instruction sequences to storage. It performs
//! no interpretation of the words; the image is their flat little-endian
//! concatenation with no header, length prefix or checksum.

pub use lua_core::{InstructionSequence, InstructionWord, LuaResult};

pub mod sink;

use std::fs;
use std::path::Path;

use log::info;
use lua_core::ImageDecoder;

pub use sink::{FileSink, ImageSink, WriterSink};

/// Write `seq` to `path`, creating or truncating the file.
pub fn save_to_file(seq: &InstructionSequence, path: impl AsRef<Path>) -> LuaResult<()> {
    let path = path.as_ref();
    let mut sink = FileSink::create(path)?;
    sink.write_words(seq.words())?;
    sink.finish()?;
    info!("wrote {} instructions ({} bytes) to {}", seq.len(), seq.byte_len(), path.display());
    Ok(())
}

/// Read an image back into a sequence.
pub fn load_from_file(path: impl AsRef<Path>) -> LuaResult<InstructionSequence> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let words = ImageDecoder::decode(&bytes)?;
    info!("read {} instructions from {}", words.len(), path.display());
    Ok(words.into_iter().collect())
}
