//! Display projections of the shelf.
//!
//! These are plain data: one card per book, with every label already decided,
//! so a UI client only has to lay them out. Both projections are rebuilt from
//! scratch on every render.

use crate::model::Book;
use serde::Serialize;

pub const AUTHOR_PREFIX: &str = "Author: ";
pub const YEAR_PREFIX: &str = "Year: ";
pub const MARK_READ_LABEL: &str = "Mark as read";
pub const MARK_UNREAD_LABEL: &str = "Mark as unread";
pub const EDIT_LABEL: &str = "Edit book";
pub const DELETE_LABEL: &str = "Delete book";
pub const NOT_FOUND_MESSAGE: &str = "No books found.";

/// Visual weight of the toggle action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleStyle {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookCard {
    pub id: String,
    pub title: String,
    pub author_line: String,
    pub year_line: String,
    pub is_completed: bool,
    pub toggle_label: &'static str,
    pub toggle_style: ToggleStyle,
    pub edit_label: &'static str,
    pub delete_label: &'static str,
}

impl BookCard {
    pub fn new(book: &Book) -> Self {
        let (toggle_label, toggle_style) = if book.is_completed {
            (MARK_UNREAD_LABEL, ToggleStyle::Warning)
        } else {
            (MARK_READ_LABEL, ToggleStyle::Success)
        };

        Self {
            id: book.id.to_string(),
            title: book.title.clone(),
            author_line: format!("{}{}", AUTHOR_PREFIX, book.author),
            year_line: format!("{}{}", YEAR_PREFIX, book.year),
            is_completed: book.is_completed,
            toggle_label,
            toggle_style,
            edit_label: EDIT_LABEL,
            delete_label: DELETE_LABEL,
        }
    }
}

/// The two shelves: books still to read and books already read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShelfView {
    pub incomplete: Vec<BookCard>,
    pub complete: Vec<BookCard>,
}

impl ShelfView {
    pub fn from_books(books: &[Book]) -> Self {
        let (complete, incomplete): (Vec<&Book>, Vec<&Book>) =
            books.iter().partition(|b| b.is_completed);
        Self {
            incomplete: incomplete.into_iter().map(BookCard::new).collect(),
            complete: complete.into_iter().map(BookCard::new).collect(),
        }
    }

    pub fn contains(&self, title: &str) -> (bool, bool) {
        (
            self.incomplete.iter().any(|c| c.title == title),
            self.complete.iter().any(|c| c.title == title),
        )
    }
}

/// Cards for the search overlay, or a placeholder when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub cards: Vec<BookCard>,
    pub placeholder: Option<&'static str>,
}

impl SearchResults {
    pub fn new<'a>(query: &str, matches: impl IntoIterator<Item = &'a Book>) -> Self {
        let cards: Vec<BookCard> = matches.into_iter().map(BookCard::new).collect();
        let placeholder = cards.is_empty().then_some(NOT_FOUND_MESSAGE);
        Self {
            query: query.trim().to_string(),
            cards,
            placeholder,
        }
    }
}
