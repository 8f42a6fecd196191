pub mod config_io;
pub mod document;
pub mod watcher;

pub use document::{Document, DocumentError};
