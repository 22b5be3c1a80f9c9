//! # Storage Layer
//!
//! This module defines the storage abstraction for recfile. The
//! [`LineStore`] trait allows the application to work with different
//! storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep command logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage. Every record file
//!   is a plain UTF-8 text file under a base directory fixed at
//!   construction, one record per line.
//! - [`memory::InMemoryStore`]: In-memory storage for testing. A missing
//!   map entry models a missing file, which is a distinct state from an
//!   empty one.
//!
//! ## File Model
//!
//! ```text
//! <base-dir>/
//! ├── notes.txt       # any record file named by the user
//! ├── users.txt       # credential registry (one JSON object per line)
//! └── config.json     # configuration
//! ```
//!
//! `load` distinguishes a missing file (`None`) from an empty one
//! (`Some(vec![])`). `save` rewrites the whole file; `append` exists only
//! for the credential registration path.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for line-file storage.
///
/// File names are relative to the store's root; implementations must
/// preserve line order and the missing-vs-empty distinction.
pub trait LineStore {
    /// Load a file as ordered lines. `None` if the file does not exist;
    /// an existing file whose content is blank loads as an empty vector.
    fn load(&self, name: &str) -> Result<Option<Vec<String>>>;

    /// Replace the file's content with the given lines, joined by `\n`
    /// with no trailing separator. Creates the file if absent.
    fn save(&mut self, name: &str, lines: &[String]) -> Result<()>;

    /// Append one line (plus a trailing `\n`) to the file, creating it
    /// if absent. Used by credential registration only.
    fn append(&mut self, name: &str, line: &str) -> Result<()>;
}
