//! File name validation and extension extraction.
//!
//! Names are plain components resolved against the working directory, so
//! path separators are rejected along with the rest of the Windows-reserved
//! set. Validation never touches the filesystem; existence checks belong to
//! the prompt loop.

mod error;
mod extension;

pub use error::FileNameError;
pub use extension::{extension_of, FileExtension};

use std::fmt;
use std::path::{Path, PathBuf};

/// Characters that may not appear anywhere in a file name.
pub const FORBIDDEN_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Linux NAME_MAX: longest file name component in bytes.
pub const NAME_MAX: usize = 255;

/// A trimmed, validated file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileName(String);

impl FileName {
    /// Trims surrounding whitespace from `raw` and validates what remains.
    ///
    /// Rejects empty names, names longer than `max_len` bytes, names with a
    /// forbidden character, names with embedded whitespace or control
    /// characters, and names that carry U+FFFD from lossy console decoding.
    pub fn parse(raw: &str, max_len: usize) -> Result<Self, FileNameError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(FileNameError::Empty);
        }
        if name.contains(char::REPLACEMENT_CHARACTER) {
            return Err(FileNameError::Encoding);
        }
        if let Some(c) = name.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
            return Err(FileNameError::ForbiddenChar(c));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(FileNameError::Whitespace);
        }
        if name.chars().any(char::is_control) {
            return Err(FileNameError::Control);
        }
        if name.len() > max_len {
            return Err(FileNameError::TooLong {
                len: name.len(),
                max: max_len,
            });
        }
        Ok(FileName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn extension(&self) -> FileExtension {
        extension_of(&self.0)
    }

    /// Path of this name inside `dir`.
    pub fn resolve(&self, dir: &Path) -> PathBuf {
        dir.join(&self.0)
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
