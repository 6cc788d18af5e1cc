//! Interactive prompts for the input source and file names.
//!
//! The prompter owns the console reader and writer, so a session can run
//! against real stdin/stdout or against in-memory buffers. Bad answers are
//! reported and asked again; only end of console input is fatal.

use crate::error::SessionError;
use crate::file_name::{FileExtension, FileName};
use std::fmt;
use std::io::{BufRead, ErrorKind, Write};
use std::path::Path;

/// Answer to the first prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceChoice {
    Console,
    File,
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Console reader, for copying console input once prompting is done.
    pub fn console(&mut self) -> &mut R {
        &mut self.input
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write a message and flush, so prompts without a newline show up.
    pub fn say(&mut self, args: fmt::Arguments<'_>) -> Result<(), SessionError> {
        self.output
            .write_fmt(args)
            .and_then(|()| self.output.flush())
            .map_err(SessionError::Console)
    }

    /// Next line of console input without its line ending; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut raw = Vec::new();
        let n = self
            .input
            .read_until(b'\n', &mut raw)
            .map_err(SessionError::Console)?;
        if n == 0 {
            return Ok(None);
        }
        while matches!(raw.last(), Some(b'\n' | b'\r')) {
            raw.pop();
        }
        // Invalid UTF-8 decodes to U+FFFD, which `FileName::parse` rejects.
        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }

    /// Ask for console (`0`) or file (`1`) input until one is chosen.
    ///
    /// Only the first character of the first word counts, so `1 please`
    /// selects file input.
    pub fn choose_source(&mut self) -> Result<SourceChoice, SessionError> {
        loop {
            self.say(format_args!(
                "Enter 0 to read from console (standard input) or 1 to provide input file name:\n"
            ))?;
            let Some(line) = self.read_line()? else {
                return Err(SessionError::NoSelection);
            };
            let first = line.split_whitespace().next().and_then(|w| w.chars().next());
            match first {
                Some('0') => return Ok(SourceChoice::Console),
                Some('1') => return Ok(SourceChoice::File),
                _ => {
                    tracing::debug!(answer = %line, "invalid source choice");
                    self.say(format_args!("Invalid input! "))?;
                }
            }
        }
    }

    fn ask_file_name(
        &mut self,
        role: &'static str,
        max_len: usize,
    ) -> Result<String, SessionError> {
        self.say(format_args!(
            "Please enter a valid '{}' file name (max {} bytes): ",
            role, max_len
        ))?;
        self.read_line()?.ok_or(SessionError::MissingFileName { role })
    }

    /// Prompt until the name of an existing regular file in `dir` is given.
    pub fn input_file_name(
        &mut self,
        dir: &Path,
        max_len: usize,
    ) -> Result<FileName, SessionError> {
        loop {
            let raw = self.ask_file_name("Input", max_len)?;
            let name = match FileName::parse(&raw, max_len) {
                Ok(name) => name,
                Err(e) => {
                    tracing::debug!(name = %raw, "rejected input file name: {}", e);
                    self.say(format_args!("{} ", e))?;
                    continue;
                }
            };
            let path = name.resolve(dir);
            match path.metadata() {
                Ok(meta) if meta.is_dir() => {
                    self.say(format_args!("'{}' is a directory, not a file. ", name))?;
                }
                Ok(_) => {
                    self.say(format_args!("File '{}' exists\n", name))?;
                    return Ok(name);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "input file not found");
                    self.say(format_args!("File not found! "))?;
                }
                Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                    tracing::debug!(path = %path.display(), "input file not accessible: {}", e);
                    self.say(format_args!("Permission denied for '{}'. ", name))?;
                }
                Err(e) => {
                    tracing::debug!(path = %path.display(), "input file unusable: {}", e);
                    self.say(format_args!("Cannot use '{}': {}. ", name, e))?;
                }
            }
        }
    }

    /// Prompt until a valid output name is given that does not refer to the
    /// input file. When `warn_mismatch` is set and the extension differs from
    /// the input's, a warning is printed but the name is still accepted.
    pub fn output_file_name(
        &mut self,
        dir: &Path,
        input: Option<&FileName>,
        max_len: usize,
        warn_mismatch: bool,
    ) -> Result<FileName, SessionError> {
        let name = loop {
            let raw = self.ask_file_name("Output", max_len)?;
            let name = match FileName::parse(&raw, max_len) {
                Ok(name) => name,
                Err(e) => {
                    tracing::debug!(name = %raw, "rejected output file name: {}", e);
                    self.say(format_args!("{} ", e))?;
                    continue;
                }
            };
            match input {
                Some(input) if same_file(dir, input, &name) => {
                    self.say(format_args!(
                        "Output file must differ from input file '{}'. ",
                        input
                    ))?;
                }
                _ => break name,
            }
        };

        if let Some(input) = input.filter(|_| warn_mismatch) {
            let input_ext = input.extension();
            let output_ext = name.extension();
            if input_ext != output_ext {
                self.warn_extension_mismatch(&output_ext, &input_ext)?;
            }
        }
        Ok(name)
    }

    fn warn_extension_mismatch(
        &mut self,
        output_ext: &FileExtension,
        input_ext: &FileExtension,
    ) -> Result<(), SessionError> {
        tracing::warn!(
            input_ext = %input_ext,
            output_ext = %output_ext,
            "output extension does not match input extension"
        );
        self.say(format_args!(
            "Warning: Output file might become unusable as output file extension '{}' \
             does not match input file extension '{}'\n",
            output_ext, input_ext
        ))
    }
}

/// True when both names refer to the same file in `dir`, through a symlink
/// or a hard link. A name that does not exist yet cannot alias the input.
fn same_file(dir: &Path, a: &FileName, b: &FileName) -> bool {
    if a == b {
        return true;
    }
    let (Ok(meta_a), Ok(meta_b)) = (
        std::fs::metadata(a.resolve(dir)),
        std::fs::metadata(b.resolve(dir)),
    ) else {
        return false;
    };
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        (meta_a.dev(), meta_a.ino()) == (meta_b.dev(), meta_b.ino())
    }
    #[cfg(not(unix))]
    {
        let _ = (meta_a, meta_b);
        match (a.resolve(dir).canonicalize(), b.resolve(dir).canonicalize()) {
            (Ok(pa), Ok(pb)) => pa == pb,
            _ => false,
        }
    }
}
