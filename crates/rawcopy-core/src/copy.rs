//! Chunked byte copy from an input source to an output sink.

use crate::error::CopyError;
use std::io::{ErrorKind, Read, Write};

/// Default chunk size: one kilobyte per read.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Outcome of a completed copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyReport {
    pub bytes: u64,
    pub chunks: u64,
}

/// Copy everything from `reader` to `writer` in chunks of at most
/// `chunk_size` bytes, then flush the writer.
///
/// Interrupted reads are retried. Any other read failure is returned as
/// `CopyError::Read`, any write or flush failure as `CopyError::Write`; the
/// bytes already written stay in the sink.
pub fn copy_stream<R, W>(
    reader: &mut R,
    writer: &mut W,
    chunk_size: usize,
) -> Result<CopyReport, CopyError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut report = CopyReport::default();
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(CopyError::Read(e)),
        };
        writer.write_all(&buf[..n]).map_err(CopyError::Write)?;
        report.bytes += n as u64;
        report.chunks += 1;
    }
    writer.flush().map_err(CopyError::Write)?;
    tracing::debug!(bytes = report.bytes, chunks = report.chunks, "copy finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    /// Reader that yields its data, then fails with `kind`.
    struct FailingReader {
        data: Cursor<Vec<u8>>,
        kind: ErrorKind,
        interrupts: usize,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.interrupts > 0 {
                self.interrupts -= 1;
                return Err(io::Error::new(ErrorKind::Interrupted, "signal"));
            }
            match self.data.read(buf)? {
                0 => Err(io::Error::new(self.kind, "device error")),
                n => Ok(n),
            }
        }
    }

    /// Writer that accepts `capacity` bytes, then fails.
    struct FullDisk {
        written: Vec<u8>,
        capacity: usize,
    }

    impl Write for FullDisk {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.capacity - self.written.len();
            if room == 0 {
                return Err(io::Error::new(ErrorKind::Other, "no space left on device"));
            }
            let n = room.min(buf.len());
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn copies_bytes_exactly() {
        let data: Vec<u8> = (0u8..=255).cycle().take(5000).collect();
        let mut out = Vec::new();
        let report = copy_stream(&mut Cursor::new(&data), &mut out, DEFAULT_CHUNK_SIZE).unwrap();
        assert_eq!(out, data);
        assert_eq!(report.bytes, 5000);
        assert_eq!(report.chunks, 5);
    }

    #[test]
    fn exact_multiple_of_chunk_size() {
        let data = vec![0xAB; 2048];
        let mut out = Vec::new();
        let report = copy_stream(&mut Cursor::new(&data), &mut out, 1024).unwrap();
        assert_eq!(out, data);
        assert_eq!(report.chunks, 2);
    }

    #[test]
    fn empty_input_copies_nothing() {
        let mut out = Vec::new();
        let report = copy_stream(&mut io::empty(), &mut out, DEFAULT_CHUNK_SIZE).unwrap();
        assert!(out.is_empty());
        assert_eq!(report, CopyReport::default());
    }

    #[test]
    fn zero_chunk_size_still_progresses() {
        let mut out = Vec::new();
        let report = copy_stream(&mut Cursor::new(b"abc"), &mut out, 0).unwrap();
        assert_eq!(out, b"abc");
        assert_eq!(report.bytes, 3);
    }

    #[test]
    fn interrupted_reads_are_retried() {
        let mut reader = FailingReader {
            data: Cursor::new(b"payload".to_vec()),
            kind: ErrorKind::UnexpectedEof,
            interrupts: 3,
        };
        let mut out = Vec::new();
        // The reader fails after its data runs out, so this ends in a read error,
        // but only after the interrupts were skipped and the payload was copied.
        let err = copy_stream(&mut reader, &mut out, 4).unwrap_err();
        assert!(matches!(err, CopyError::Read(_)));
        assert_eq!(out, b"payload");
    }

    #[test]
    fn read_failure_is_reported() {
        let mut reader = FailingReader {
            data: Cursor::new(vec![1, 2, 3]),
            kind: ErrorKind::Other,
            interrupts: 0,
        };
        let mut out = Vec::new();
        match copy_stream(&mut reader, &mut out, DEFAULT_CHUNK_SIZE) {
            Err(CopyError::Read(e)) => assert_eq!(e.kind(), ErrorKind::Other),
            other => panic!("expected read error, got {:?}", other),
        }
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn write_failure_is_reported() {
        let data = vec![7u8; 3000];
        let mut sink = FullDisk {
            written: Vec::new(),
            capacity: 1500,
        };
        let err = copy_stream(&mut Cursor::new(&data), &mut sink, DEFAULT_CHUNK_SIZE).unwrap_err();
        assert!(matches!(err, CopyError::Write(_)));
        assert_eq!(sink.written.len(), 1500);
    }
}
