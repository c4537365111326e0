use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use lua_core::{InstructionWord, LuaResult};

/// Destination for an ordered word stream.
///
/// Implementations write each word verbatim, in order, as two little-endian
/// bytes. They do not parse, retry or recover partial writes.
pub trait ImageSink {
    fn write_words(&mut self, words: &[InstructionWord]) -> LuaResult<()>;

    /// Flush whatever the sink buffered
    fn finish(&mut self) -> LuaResult<()> {
        Ok(())
    }
}

/// Sink over any `std::io::Write`
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        WriterSink { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ImageSink for WriterSink<W> {
    fn write_words(&mut self, words: &[InstructionWord]) -> LuaResult<()> {
        for word in words {
            self.inner.write_all(&word.to_le_bytes())?;
        }
        Ok(())
    }

    fn finish(&mut self) -> LuaResult<()> {
        self.inner.flush()?;
        Ok(())
    }
}

/// Buffered file sink; the file is created or truncated on open
pub struct FileSink {
    writer: WriterSink<BufWriter<File>>,
}

impl FileSink {
    pub fn create(path: &Path) -> LuaResult<Self> {
        let file = File::create(path)?;
        Ok(FileSink {
            writer: WriterSink::new(BufWriter::new(file)),
        })
    }
}

impl ImageSink for FileSink {
    fn write_words(&mut self, words: &[InstructionWord]) -> LuaResult<()> {
        self.writer.write_words(words)
    }

    fn finish(&mut self) -> LuaResult<()> {
        self.writer.finish()
    }
}
