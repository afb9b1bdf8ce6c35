//! # Droplet Architecture
//!
//! Droplet turns a set of SFTP connection options into a desktop launcher:
//! double-clicking the launcher uploads the dropped file to a preconfigured
//! server. The crate is a library with a thin CLI client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + main.rs, binary only)                 │
//! │  - Parses flags, prints messages, owns exit codes           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Action → schema + handler dispatch                       │
//! │  - Resolution of supplied options before any handler runs   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - shortcut, upload, interactive handlers                   │
//! │  - No stdout/stderr, returns structured CmdResult           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Seams (store/, transfer.rs, wizard.rs)                     │
//! │  - LauncherStore: .desktop persistence (fs or in-memory)    │
//! │  - Transfer: SFTP via ssh2 (or a recording test double)     │
//! │  - Prompter: terminal input (or scripted answers)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The option pipeline
//!
//! Every run flows through the same three steps, in order:
//!
//! 1. [`schema`]: the action declares its fields, each `Required` or
//!    carrying a default.
//! 2. [`resolve`]: supplied values are merged with the schema, fail-fast
//!    on the first problem.
//! 3. [`validate`]: each field's rule normalizes and checks the raw value
//!    (ports parse to `u16`, remote paths gain a trailing `/`, the
//!    password sentinel becomes a [`model::SecretSpec`]).
//!
//! Handlers only ever see a fully validated [`resolve::ResolvedOptions`].
//! The interactive wizard runs the same validator per prompt instead of in
//! one pass, re-asking until each field passes.
//!
//! ## Module Overview
//!
//! - [`api`]: the dispatch facade, entry point for all operations
//! - [`commands`]: business logic for each action
//! - [`schema`] / [`resolve`] / [`validate`]: the option pipeline
//! - [`model`]: core types (`Action`, `Field`, `SecretSpec`, ...)
//! - [`store`]: launcher persistence behind a trait
//! - [`transfer`]: SFTP behind a trait
//! - [`wizard`]: prompting behind a trait
//! - [`config`]: user configuration (launcher dir, key file)
//! - [`notify`]: best-effort desktop notification
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod notify;
pub mod resolve;
pub mod schema;
pub mod store;
pub mod transfer;
pub mod validate;
pub mod wizard;
