//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all recfile operations regardless of the UI in front
//! of it.
//!
//! The facade dispatches to command modules and returns structured
//! `Result<CmdResult>` values. It holds no business logic, performs no
//! I/O formatting, and never touches stdout or stderr.
//!
//! ## Generic Over LineStore
//!
//! `RecfileApi<S: LineStore>` is generic over the storage backend:
//! - Production: `RecfileApi<FileStore>`
//! - Testing: `RecfileApi<InMemoryStore>`
//!
//! This enables exercising the full command surface without a filesystem.

use crate::commands;
use crate::config::RecfileConfig;
use crate::error::Result;
use crate::store::LineStore;

/// The main API facade for recfile operations.
///
/// Generic over `LineStore` to allow different storage backends. All UI
/// clients should interact through this API.
pub struct RecfileApi<S: LineStore> {
    store: S,
    config: RecfileConfig,
}

impl<S: LineStore> RecfileApi<S> {
    pub fn new(store: S, config: RecfileConfig) -> Self {
        Self { store, config }
    }

    pub fn read(&self, file: &str) -> Result<commands::CmdResult> {
        commands::read::run(&self.store, file)
    }

    pub fn list(&self, file: &str) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, file)
    }

    pub fn create(&mut self, file: &str, text: String) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, file, text)
    }

    pub fn update(&mut self, file: &str, index: &str, text: String) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, file, index, text)
    }

    pub fn delete(&mut self, file: &str, index: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, file, index)
    }

    pub fn register(&mut self, email: &str, password: &str) -> Result<commands::CmdResult> {
        let users_file = self.config.users_file().to_string();
        commands::register::run(&mut self.store, &users_file, email, password)
    }

    pub fn login(&self, email: &str, password: &str) -> Result<commands::CmdResult> {
        commands::login::run(&self.store, self.config.users_file(), email, password)
    }

    pub fn config(&self) -> &RecfileConfig {
        &self.config
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
