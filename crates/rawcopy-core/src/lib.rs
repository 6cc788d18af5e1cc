pub mod config;
pub mod logging;

pub mod copy;
pub mod error;
pub mod file_name;
pub mod prompt;
pub mod session;
pub mod stream;
