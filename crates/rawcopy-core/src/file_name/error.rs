//! Why a file name was rejected. Every variant is recoverable: the caller
//! reports it and prompts again.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileNameError {
    #[error("File name is empty.")]
    Empty,
    #[error("File name is {len} bytes long; at most {max} bytes are allowed.")]
    TooLong { len: usize, max: usize },
    #[error("Characters <>:\"/\\|?* are not allowed in file name (found '{0}').")]
    ForbiddenChar(char),
    #[error("Whitespace is not allowed inside a file name.")]
    Whitespace,
    #[error("Control characters are not allowed in file name.")]
    Control,
    #[error("File name is not valid UTF-8.")]
    Encoding,
}
