//! # Jotter Architecture
//!
//! Jotter is a small interactive shell for plain-text notes. Each note is one
//! file in a save directory; the shell creates, appends to, overwrites, lists
//! and deletes them.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, args.rs)                                  │
//! │  - Flags, config resolution, logging bootstrap, exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (shell/, editor.rs)                                  │
//! │  - Reads lines, parses commands, runs editor sessions       │
//! │  - The ONLY place that talks to a Console                   │
//! │  - Turns every command error into a printed message         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Note lifecycle rules (no shadowing on create, etc.)      │
//! │  - Returns `Result<Note>` or `CmdResult`, never prints      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `NoteStore` trait                                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership of a note
//!
//! A [`model::Note`] is a plain value. The shell creates or loads it, moves it
//! into an [`editor::EditorSession`], which saves it and hands it back. Nothing
//! else holds it in the meantime.
//!
//! ## Testing Strategy
//!
//! - Commands and stores: unit tests against `InMemoryStore` and temp dirs
//! - Shell and editor: unit tests through `test_utils::ScriptedConsole`
//! - Binary: end-to-end tests in `tests/` feeding stdin via `assert_cmd`
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Note`, head format, timestamps
//! - [`validation`]: Note name rules
//! - [`shell`]: Command parsing and the dispatch loop
//! - [`editor`]: The line-collecting editor session
//! - [`console`]: Terminal abstraction
//! - [`config`]: Configuration
//! - [`init`]: Startup wiring
//! - [`logging`]: Logger bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod console;
pub mod editor;
pub mod error;
pub mod init;
pub mod logging;
pub mod model;
pub mod shell;
pub mod store;
pub mod validation;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
