//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every shelf operation, whatever the UI.
//!
//! It dispatches to `commands/*.rs`, normalizes inputs (string ids into
//! [`BookId`]s, raw field text into a [`BookDraft`]) and returns structured
//! `Result<CmdResult>` values. It never prints and holds no business logic.
//!
//! `ShelfApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::events::Observer;
use crate::model::{BookDraft, BookId};
use crate::repository::Confirm;
use crate::session::Session;
use crate::store::DataStore;

pub struct ShelfApi<S: DataStore> {
    session: Session<S>,
    paths: commands::ShelfPaths,
}

impl<S: DataStore> ShelfApi<S> {
    pub fn new(session: Session<S>, paths: commands::ShelfPaths) -> Self {
        Self { session, paths }
    }

    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        year: &str,
        is_completed: bool,
    ) -> Result<commands::CmdResult> {
        let draft = BookDraft::new(title, author, year, is_completed);
        commands::add::run(&mut self.session, draft)
    }

    pub fn edit_book(&mut self, id: &str, edit: BookEdit) -> Result<commands::CmdResult> {
        let id: BookId = id.parse()?;
        commands::edit::run(&mut self.session, id, edit)
    }

    pub fn toggle_book(&mut self, id: &str) -> Result<commands::CmdResult> {
        let id: BookId = id.parse()?;
        commands::toggle::run(&mut self.session, id)
    }

    pub fn delete_book(
        &mut self,
        id: &str,
        confirm: &mut impl Confirm,
    ) -> Result<commands::CmdResult> {
        let id: BookId = id.parse()?;
        commands::delete::run(&mut self.session, id, confirm)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.session)
    }

    pub fn search_books<I: AsRef<str>>(&self, terms: &[I]) -> Result<commands::CmdResult> {
        let query = terms
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");
        commands::search::run(&self.session, &query)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    /// Registers an observer for render and persist signals.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.session.subscribe(observer);
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{BookEdit, CmdMessage, CmdResult, MessageLevel, ShelfPaths};
