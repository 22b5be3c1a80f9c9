//! # Recfile Architecture
//!
//! Recfile is a **UI-agnostic record-file library** with a CLI client in
//! front of it. The binary is thin wiring; everything with behavior lives
//! in the library.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, formats output, owns exit codes        │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure record CRUD + credential logic                      │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract LineStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, never writes to stdout or stderr, and never calls
//! `std::process::exit`. Exit-code policy — record commands always exit 0,
//! register/login signal failure with exit 1 — lives entirely in `main.rs`.
//!
//! ## The Index System
//!
//! Record indexes are 1-based positions derived from line order on every
//! load; they are never stored. Deleting record `i` shifts everything
//! after it down by one.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Logic for each command, unit-tested against the
//!   in-memory store
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Record`, `Credential`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types and the exit-code split between auth
//!   failures and fatal faults

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
