//! Input source and output sink handles.
//!
//! Both close their file on drop, so every exit path of a session releases
//! them without explicit cleanup.

use crate::error::SessionError;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Where the bytes to copy come from.
pub enum InputSource<'a> {
    /// Console input. Borrows the prompt reader so bytes it already buffered
    /// are copied too.
    Console(&'a mut dyn Read),
    /// An opened input file.
    File { file: File, path: PathBuf },
}

impl<'a> InputSource<'a> {
    /// Open `path` for reading.
    pub fn open_file(path: &Path) -> Result<Self, SessionError> {
        let file = File::open(path).map_err(|source| SessionError::OpenInput {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(InputSource::File {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn is_console(&self) -> bool {
        matches!(self, InputSource::Console(_))
    }

    /// Path of the input file; `None` for console input.
    pub fn path(&self) -> Option<&Path> {
        match self {
            InputSource::Console(_) => None,
            InputSource::File { path, .. } => Some(path),
        }
    }
}

impl Read for InputSource<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            InputSource::Console(r) => r.read(buf),
            InputSource::File { file, .. } => file.read(buf),
        }
    }
}

/// Output file, created or truncated on open.
pub struct OutputSink {
    file: File,
    path: PathBuf,
}

impl OutputSink {
    pub fn create(path: &Path) -> Result<Self, SessionError> {
        let file = File::create(path).map_err(|source| SessionError::OpenOutput {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(OutputSink {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Sync file data to disk.
    pub fn sync(&self) -> Result<(), SessionError> {
        self.file.sync_all().map_err(|source| SessionError::Sync {
            path: self.path.clone(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
