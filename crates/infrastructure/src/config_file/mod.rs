//! On-disk document handling: reader, writer, and early-read accessors.

pub mod reader;
pub mod writer;

pub use reader::{load, read_blocking_mode, read_log_file_path, read_verbosity};
pub use writer::{save, TomlConfigStore};
