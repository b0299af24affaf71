//! # CLI Layer
//!
//! One possible UI client for the shelf, and the only code in the crate that
//! touches stdout, stderr, stdin or exit codes.
//!
//! - `setup`: clap argument definitions
//! - `commands`: context setup, logging, dispatch to `ShelfApi`, prompts
//! - `render`: terminal rendering of shelves, search results and messages
//! - `styles` / `templates`: the theme and the minijinja templates

mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
