//! Record discovery and loading.
//!
//! Files are matched with glob patterns inside a single folder, ordered by the
//! last integer in their name (or by an explicit ranking) and read whole into
//! memory one at a time.

mod discovery;
mod loader;

pub use discovery::{
    Category, container_subfolder, file_index, find_files, order_files, project_data_folder,
};
pub use loader::{RawRecord, load_record};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid file pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },
    #[error("cannot list {path}: {message}")]
    Glob { path: String, message: String },
    #[error("explicit order has {given} entries for {files} files")]
    OrderMismatch { given: usize, files: usize },
}
