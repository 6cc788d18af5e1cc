//! File extension extraction.

use std::fmt;

/// Extension of a file name, without the leading dot. Empty when the name
/// has none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FileExtension(String);

impl FileExtension {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the text after the last `.` when every character following it is
/// ASCII alphanumeric; otherwise the empty extension.
///
/// `"archive.tar.gz"` gives `"gz"`, `"noext"` and `"a.b-c"` give `""`.
pub fn extension_of(name: &str) -> FileExtension {
    match name.rfind('.') {
        Some(dot) => {
            let suffix = &name[dot + 1..];
            if suffix.chars().all(|c| c.is_ascii_alphanumeric()) {
                FileExtension(suffix.to_string())
            } else {
                FileExtension::default()
            }
        }
        None => FileExtension::default(),
    }
}
