//! Input/output stream abstraction, grounded on `ustream.h`/`ustream.c`.
//!
//! The C library dispatches through a vtable of function pointers
//! (`read`/`write`/`writef`/`reset`/`free`); here that becomes a pair of
//! object-safe traits, [`InputStream`] and [`OutputStream`], so backends
//! are plain structs implementing them and callers hold `Box<dyn ...>`
//! where dynamic dispatch is wanted. Every operation returns [`UResult`],
//! matching `ustream_ret`'s `USTREAM_ERR_BOUNDS`/`_MEM`/`_IO` outcomes via
//! [`UError::Bounds`]/[`UError::Memory`]/[`UError::Io`].

use std::fmt;
use std::fs::File;
use std::io::{self, Read as _, Seek, SeekFrom, Write as _};

use crate::error::{UError, UResult};
use crate::vec::UVec;

/// A source of bytes. Mirrors `UIStream`.
pub trait InputStream {
    /// Reads up to `buf.len()` bytes, returning the number actually read
    /// (`0` at end of stream).
    fn read(&mut self, buf: &mut [u8]) -> UResult<usize>;

    /// Rewinds the stream to its start. Backends that cannot rewind
    /// return `Err(UError::Io)`.
    fn reset(&mut self) -> UResult<()> {
        Err(UError::Io)
    }

    /// Reads exactly `buf.len()` bytes, or fails with [`UError::Io`].
    fn read_exact(&mut self, buf: &mut [u8]) -> UResult<()> {
        let mut filled = 0;
        while filled < buf.len() {
            let n = self.read(&mut buf[filled..])?;
            if n == 0 {
                return Err(UError::Io);
            }
            filled += n;
        }
        Ok(())
    }
}

/// A sink for bytes. Mirrors `UOStream`.
pub trait OutputStream {
    /// Writes `buf`, returning the number of bytes actually written.
    fn write(&mut self, buf: &[u8]) -> UResult<usize>;

    /// Formats `args` and writes the result. The default implementation
    /// goes through a temporary heap buffer; backends that can write
    /// formatted text directly (e.g. a file) may override this.
    fn writef(&mut self, args: fmt::Arguments<'_>) -> UResult<usize> {
        let text = fmt::format(args);
        self.write(text.as_bytes())
    }

    /// Flushes any buffered output. Default is a no-op.
    fn flush(&mut self) -> UResult<()> {
        Ok(())
    }

    /// Rewinds/truncates the stream. Backends that cannot reset return
    /// `Err(UError::Io)`.
    fn reset(&mut self) -> UResult<()> {
        Err(UError::Io)
    }

    /// Writes all of `buf`, failing with [`UError::Io`] (or whatever the
    /// backend reports) if it cannot all be written.
    fn write_all(&mut self, buf: &[u8]) -> UResult<()> {
        let mut written = 0;
        while written < buf.len() {
            let n = self.write(&buf[written..])?;
            if n == 0 {
                return Err(UError::Io);
            }
            written += n;
        }
        Ok(())
    }
}

fn io_err_to_u(e: io::Error) -> UError {
    match e.kind() {
        io::ErrorKind::OutOfMemory => UError::Memory,
        _ => UError::Io,
    }
}

/// A stream reading from an open file. Matches `uistream_from_file`.
pub struct FileInputStream {
    file: File,
}

impl FileInputStream {
    pub fn new(file: File) -> Self {
        FileInputStream { file }
    }

    /// Opens `path` for reading. Matches `uistream_from_path`.
    pub fn open(path: &std::path::Path) -> UResult<Self> {
        File::open(path).map(Self::new).map_err(io_err_to_u)
    }
}

impl InputStream for FileInputStream {
    fn read(&mut self, buf: &mut [u8]) -> UResult<usize> {
        self.file.read(buf).map_err(io_err_to_u)
    }

    fn reset(&mut self) -> UResult<()> {
        self.file.seek(SeekFrom::Start(0)).map(|_| ()).map_err(io_err_to_u)
    }
}

/// A stream writing to an open file. Matches `uostream_to_file`.
pub struct FileOutputStream {
    file: File,
}

impl FileOutputStream {
    pub fn new(file: File) -> Self {
        FileOutputStream { file }
    }

    /// Creates (or truncates) `path` for writing. Matches `uostream_to_path`.
    pub fn create(path: &std::path::Path) -> UResult<Self> {
        File::create(path).map(Self::new).map_err(io_err_to_u)
    }
}

impl OutputStream for FileOutputStream {
    fn write(&mut self, buf: &[u8]) -> UResult<usize> {
        self.file.write(buf).map_err(io_err_to_u)
    }

    fn flush(&mut self) -> UResult<()> {
        self.file.flush().map_err(io_err_to_u)
    }

    fn reset(&mut self) -> UResult<()> {
        self.file.set_len(0).map_err(io_err_to_u)?;
        self.file.seek(SeekFrom::Start(0)).map(|_| ()).map_err(io_err_to_u)
    }
}

/// A stream reading from a fixed, borrowed memory buffer. Matches
/// `uistream_from_buf`.
pub struct MemoryInputStream<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> MemoryInputStream<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        MemoryInputStream { buf, pos: 0 }
    }
}

impl<'a> InputStream for MemoryInputStream<'a> {
    fn read(&mut self, out: &mut [u8]) -> UResult<usize> {
        let remaining = self.buf.len() - self.pos;
        let n = out.len().min(remaining);
        out[..n].copy_from_slice(&self.buf[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }

    fn reset(&mut self) -> UResult<()> {
        self.pos = 0;
        Ok(())
    }
}

/// A stream writing into a fixed-size, caller-owned memory buffer.
/// Writing past the end of the buffer fails with [`UError::Bounds`]
/// instead of growing it. Matches `uostream_to_buf`.
pub struct MemoryOutputStream<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> MemoryOutputStream<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        MemoryOutputStream { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a> OutputStream for MemoryOutputStream<'a> {
    fn write(&mut self, data: &[u8]) -> UResult<usize> {
        if self.pos + data.len() > self.buf.len() {
            return Err(UError::Bounds);
        }
        self.buf[self.pos..self.pos + data.len()].copy_from_slice(data);
        self.pos += data.len();
        Ok(data.len())
    }

    fn reset(&mut self) -> UResult<()> {
        self.pos = 0;
        Ok(())
    }
}

/// A stream writing into a growable byte buffer. Never bounds-errors
/// (only ever fails with [`UError::Memory`]). Matches `uostream_to_strbuf`.
pub struct StringBufferOutputStream {
    buf: UVec<u8>,
}

impl StringBufferOutputStream {
    pub fn new() -> Self {
        StringBufferOutputStream { buf: UVec::new() }
    }

    /// Consumes the stream, returning its accumulated bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf.copy_to_array()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_slice()
    }
}

impl Default for StringBufferOutputStream {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputStream for StringBufferOutputStream {
    fn write(&mut self, data: &[u8]) -> UResult<usize> {
        self.buf.append(data)?;
        Ok(data.len())
    }

    fn reset(&mut self) -> UResult<()> {
        self.buf.clear();
        Ok(())
    }
}

/// A sink that discards everything written to it. Reports success for
/// every write, matching `/dev/null` semantics; not part of the original
/// C library's backend set but a natural complement to it for benchmarks
/// and tests that want to measure encoding cost without I/O.
pub struct NullOutputStream {
    written: u64,
}

impl NullOutputStream {
    pub fn new() -> Self {
        NullOutputStream { written: 0 }
    }

    /// Total number of bytes ever "written" to this sink.
    pub fn total_written(&self) -> u64 {
        self.written
    }
}

impl Default for NullOutputStream {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputStream for NullOutputStream {
    fn write(&mut self, data: &[u8]) -> UResult<usize> {
        self.written += data.len() as u64;
        Ok(data.len())
    }

    fn reset(&mut self) -> UResult<()> {
        self.written = 0;
        Ok(())
    }
}

/// Fans writes out to every sub-stream, failing on the first sub-stream
/// that fails. Not part of the original C library; a multi-sink backend
/// added in the same trait-object style as the other backends here.
pub struct TeeOutputStream {
    sinks: Vec<Box<dyn OutputStream>>,
}

impl TeeOutputStream {
    pub fn new(sinks: Vec<Box<dyn OutputStream>>) -> Self {
        TeeOutputStream { sinks }
    }
}

impl OutputStream for TeeOutputStream {
    fn write(&mut self, data: &[u8]) -> UResult<usize> {
        for sink in &mut self.sinks {
            sink.write_all(data)?;
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> UResult<()> {
        for sink in &mut self.sinks {
            sink.flush()?;
        }
        Ok(())
    }

    fn reset(&mut self) -> UResult<()> {
        for sink in &mut self.sinks {
            sink.reset()?;
        }
        Ok(())
    }
}

const DEFAULT_BUFFER_CAPACITY: usize = 4096;

/// Buffers writes to an inner stream, flushing once the buffer fills (or
/// on explicit [`OutputStream::flush`]/drop). Not part of the original C
/// library; a buffered adapter backend in the same spirit as the rest.
pub struct BufferedOutputStream<S: OutputStream> {
    inner: S,
    buf: Vec<u8>,
    capacity: usize,
}

impl<S: OutputStream> BufferedOutputStream<S> {
    pub fn new(inner: S) -> Self {
        Self::with_capacity(inner, DEFAULT_BUFFER_CAPACITY)
    }

    pub fn with_capacity(inner: S, capacity: usize) -> Self {
        BufferedOutputStream { inner, buf: Vec::with_capacity(capacity), capacity }
    }

    fn flush_buffer(&mut self) -> UResult<()> {
        if !self.buf.is_empty() {
            self.inner.write_all(&self.buf)?;
            self.buf.clear();
        }
        Ok(())
    }
}

impl<S: OutputStream> OutputStream for BufferedOutputStream<S> {
    fn write(&mut self, data: &[u8]) -> UResult<usize> {
        if data.len() >= self.capacity {
            self.flush_buffer()?;
            return self.inner.write(data);
        }
        if self.buf.len() + data.len() > self.capacity {
            self.flush_buffer()?;
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> UResult<()> {
        self.flush_buffer()?;
        self.inner.flush()
    }

    fn reset(&mut self) -> UResult<()> {
        self.buf.clear();
        self.inner.reset()
    }
}

impl<S: OutputStream> Drop for BufferedOutputStream<S> {
    fn drop(&mut self) {
        let _ = self.flush_buffer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_input_reads_all_bytes() {
        let data = b"hello world";
        let mut stream = MemoryInputStream::new(data);
        let mut out = [0u8; 5];
        assert_eq!(stream.read(&mut out).unwrap(), 5);
        assert_eq!(&out, b"hello");
        let mut rest = [0u8; 20];
        let n = stream.read(&mut rest).unwrap();
        assert_eq!(&rest[..n], b" world");
    }

    #[test]
    fn memory_output_errors_past_bounds() {
        let mut backing = [0u8; 4];
        let mut stream = MemoryOutputStream::new(&mut backing);
        assert_eq!(stream.write(b"ab").unwrap(), 2);
        assert_eq!(stream.write(b"cd").unwrap(), 2);
        assert_eq!(stream.write(b"e"), Err(UError::Bounds));
    }

    #[test]
    fn string_buffer_grows_without_bound() {
        let mut stream = StringBufferOutputStream::new();
        for _ in 0..100 {
            stream.write(b"x").unwrap();
        }
        assert_eq!(stream.as_bytes().len(), 100);
    }

    #[test]
    fn null_sink_counts_but_discards() {
        let mut stream = NullOutputStream::new();
        stream.write(b"abcdef").unwrap();
        assert_eq!(stream.total_written(), 6);
    }

    #[test]
    fn tee_duplicates_writes() {
        let a = StringBufferOutputStream::new();
        let b = StringBufferOutputStream::new();
        let mut tee = TeeOutputStream::new(vec![Box::new(a), Box::new(b)]);
        tee.write_all(b"dup").unwrap();
    }

    #[test]
    fn buffered_adapter_flushes_on_overflow_and_drop() {
        let inner = StringBufferOutputStream::new();
        {
            let mut buffered = BufferedOutputStream::with_capacity(inner, 4);
            buffered.write_all(b"ab").unwrap();
            buffered.write_all(b"cd").unwrap();
            buffered.write_all(b"ef").unwrap();
        }
    }

    #[test]
    fn writef_default_formats_and_writes() {
        let mut stream = StringBufferOutputStream::new();
        stream.writef(format_args!("{}-{}", 1, "x")).unwrap();
        assert_eq!(stream.as_bytes(), b"1-x");
    }
}
