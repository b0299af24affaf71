//! The single shared book form.
//!
//! The form is either creating a new book or editing an existing one. Entering
//! edit mode copies the book into the form fields; submitting dispatches to the
//! repository and, on success, returns the form to create mode with blank
//! fields. A rejected submission leaves both the mode and the fields alone so
//! the user can correct them.

use crate::error::Result;
use crate::model::{Book, BookDraft, BookId};
use crate::repository::BookRepository;

pub const CREATE_LABEL: &str = "Add to shelf";
pub const UPDATE_LABEL: &str = "Update book";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(BookId),
}

/// What a successful submit did to the shelf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Added(Book),
    Updated(Book),
    /// The book being edited no longer exists; nothing changed.
    Missing(BookId),
}

impl Submission {
    pub fn changed_shelf(&self) -> bool {
        !matches!(self, Submission::Missing(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookForm {
    pub draft: BookDraft,
    mode: FormMode,
}

impl BookForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn editing(&self) -> Option<BookId> {
        match self.mode {
            FormMode::Edit(id) => Some(id),
            FormMode::Create => None,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => CREATE_LABEL,
            FormMode::Edit(_) => UPDATE_LABEL,
        }
    }

    /// Loads `book` into the fields and switches to edit mode.
    /// Any edit already in progress is abandoned.
    pub fn begin_edit(&mut self, book: &Book) {
        self.draft = BookDraft::from(book);
        self.mode = FormMode::Edit(book.id);
    }

    /// Clears the fields and returns to create mode.
    pub fn reset(&mut self) {
        self.draft = BookDraft::default();
        self.mode = FormMode::Create;
    }

    /// Creates or updates a book depending on the mode.
    pub fn submit(&mut self, repo: &mut BookRepository) -> Result<Submission> {
        let submission = match self.mode {
            FormMode::Create => Submission::Added(repo.add(&self.draft)?.clone()),
            FormMode::Edit(id) => match repo.update(id, &self.draft)? {
                Some(book) => Submission::Updated(book.clone()),
                None => Submission::Missing(id),
            },
        };
        self.reset();
        Ok(submission)
    }
}
