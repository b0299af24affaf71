//! # Bookshelf Architecture
//!
//! Bookshelf is a **UI-agnostic reading-list library** with one client, the
//! `shelf` command-line tool. The library knows nothing about terminals; the
//! same core could sit behind a web page or a desktop window.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders cards, prompts for confirmation│
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, parses ids and raw fields     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation each, returns CmdResult                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs)                                       │
//! │  - Owns repository, form, event bus and store               │
//! │  - mutate → render signal → save → persisted signal         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns
//! `Result<CmdResult>`, and never writes to stdout/stderr. Confirmation
//! prompts come in through the [`repository::Confirm`] trait and redraws go
//! out through [`events::Observer`]s, so the client decides how both look.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`session`]: Explicit per-run state and the commit sequence
//! - [`repository`]: The ordered in-memory collection
//! - [`form`]: The shared create/edit form
//! - [`events`]: Render and persist signals
//! - [`view`]: Card projections for the two shelves and search results
//! - [`store`]: Key-value storage and the JSON blob codec
//! - [`model`]: `Book`, `BookId`, drafts and id generation
//! - [`config`]: Configuration file
//! - [`init`]: Data directory resolution and wiring
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod form;
pub mod init;
pub mod model;
pub mod repository;
pub mod session;
pub mod store;
pub mod view;
