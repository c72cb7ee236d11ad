//! # Userstore Architecture
//!
//! Userstore keeps a list of user records (`id`, `email`, `age`) in one JSON
//! file and exposes four operations over it: `add`, `list`, `findById` and
//! `remove`. Every invocation is a short transaction:
//!
//! ```text
//! Open → Load → Validate & Mutate → Persist → Close
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses flags, installs logging, bootstraps users.json    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Validates the request, opens the store, dispatches       │
//! │  - Writes messages and JSON payloads to a given writer      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns `CmdResult`            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `DataStore` trait: load all / persist all                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency
//!
//! Both mutating operations truncate the backing file and rewrite the whole
//! collection from offset 0. Ids are not required to be unique: adding a
//! duplicate is reported and kept, and lookups and removals act on the
//! earliest match. There is no locking between processes.
//!
//! ## Module Overview
//!
//! - [`api`]: Dispatcher and the `perform` entry point
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `User` and `Operation`
//! - [`config`]: Configuration management
//! - [`logging`]: Tracing subscriber setup for the binary
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
