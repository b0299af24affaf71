//! The in-memory shelf: an ordered list of books plus the id generator.
//!
//! Every operation is a linear scan. Insertion order is preserved; removal is
//! the only thing that changes the relative order of the remaining books.

use crate::error::Result;
use crate::model::{Book, BookDraft, BookId, IdGenerator};

/// Asks the user to approve a destructive action.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Outcome of [`BookRepository::remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    Removed(Book),
    Declined,
    NotFound,
}

#[derive(Debug, Default)]
pub struct BookRepository {
    books: Vec<Book>,
    ids: IdGenerator,
}

impl BookRepository {
    pub fn new(books: Vec<Book>) -> Self {
        let ids = IdGenerator::seeded(&books);
        Self { books, ids }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn find(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    /// Validates the draft and appends a new book to the end of the shelf.
    pub fn add(&mut self, draft: &BookDraft) -> Result<&Book> {
        let fields = draft.validate()?;
        let id = self.ids.next_id()?;
        self.books.push(Book::new(id, fields));
        let last = self.books.len() - 1;
        Ok(&self.books[last])
    }

    /// Overwrites every field of the book except its id.
    ///
    /// The draft is held to the same rules as [`add`](Self::add). An unknown
    /// id is not an error: `Ok(None)` and nothing changes.
    pub fn update(&mut self, id: BookId, draft: &BookDraft) -> Result<Option<&Book>> {
        let fields = draft.validate()?;
        let Some(pos) = self.position(id) else {
            return Ok(None);
        };
        self.books[pos].apply(fields);
        Ok(Some(&self.books[pos]))
    }

    /// Removes the book once the user confirms.
    pub fn remove(&mut self, id: BookId, confirm: &mut impl Confirm) -> Removal {
        let Some(book) = self.find(id) else {
            return Removal::NotFound;
        };

        let prompt = format!("Remove \"{}\" from the shelf?", book.title);
        if !confirm.confirm(&prompt) {
            return Removal::Declined;
        }

        match self.position(id) {
            Some(pos) => Removal::Removed(self.books.remove(pos)),
            None => Removal::NotFound,
        }
    }

    /// Flips the completion flag. `None` for an unknown id.
    pub fn toggle_complete(&mut self, id: BookId) -> Option<&Book> {
        let pos = self.position(id)?;
        let book = &mut self.books[pos];
        book.is_completed = !book.is_completed;
        Some(&*book)
    }

    /// Case-insensitive substring match on the title, in shelf order.
    /// A blank query matches everything.
    pub fn find_by_title(&self, query: &str) -> Vec<&Book> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.books.iter().collect();
        }
        self.books
            .iter()
            .filter(|b| b.title.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;

    fn draft(title: &str) -> BookDraft {
        BookDraft::new(title, "Some Author", "1999", false)
    }

    fn shelf(titles: &[&str]) -> BookRepository {
        let mut repo = BookRepository::default();
        for t in titles {
            repo.add(&draft(t)).unwrap();
        }
        repo
    }

    #[test]
    fn add_appends_book_with_input_fields() {
        let mut repo = shelf(&["First"]);
        let book = repo
            .add(&BookDraft::new("Atomic Habits", "J. Clear", "2018", false))
            .unwrap()
            .clone();

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.books()[1], book);
        assert_eq!(book.title, "Atomic Habits");
        assert_eq!(book.author, "J. Clear");
        assert_eq!(book.year, 2018);
        assert!(!book.is_completed);
    }

    #[test]
    fn add_rejects_empty_fields() {
        let mut repo = shelf(&["First"]);
        let result = repo.add(&BookDraft::new("Title", " ", "2000", false));
        assert!(matches!(result, Err(ShelfError::Validation(_))));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn rapid_adds_get_distinct_ids() {
        let repo = shelf(&["A", "B", "C", "D", "E"]);
        let mut ids: Vec<_> = repo.books().iter().map(|b| b.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn update_overwrites_everything_but_id() {
        let mut repo = shelf(&["Old"]);
        let id = repo.books()[0].id;

        let updated = repo
            .update(id, &BookDraft::new("New", "Other", "2020", true))
            .unwrap()
            .unwrap()
            .clone();

        assert_eq!(updated.id, id);
        assert_eq!(updated.title, "New");
        assert_eq!(updated.author, "Other");
        assert_eq!(updated.year, 2020);
        assert!(updated.is_completed);
    }

    #[test]
    fn update_unknown_id_changes_nothing() {
        let mut repo = shelf(&["A", "B"]);
        let before = repo.books().to_vec();
        let result = repo.update(BookId(1), &draft("Z")).unwrap();
        assert!(result.is_none());
        assert_eq!(repo.books(), &before[..]);
    }

    #[test]
    fn update_rejects_empty_fields() {
        let mut repo = shelf(&["A"]);
        let id = repo.books()[0].id;
        let result = repo.update(id, &BookDraft::new("", "X", "1", false));
        assert!(matches!(result, Err(ShelfError::Validation(_))));
        assert_eq!(repo.books()[0].title, "A");
    }

    #[test]
    fn toggle_twice_restores_flag() {
        let mut repo = shelf(&["A"]);
        let id = repo.books()[0].id;
        assert!(repo.toggle_complete(id).unwrap().is_completed);
        assert!(!repo.toggle_complete(id).unwrap().is_completed);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut repo = shelf(&["A"]);
        assert!(repo.toggle_complete(BookId(3)).is_none());
        assert!(!repo.books()[0].is_completed);
    }

    #[test]
    fn confirmed_remove_drops_only_that_book() {
        let mut repo = shelf(&["A", "B", "C"]);
        let id = repo.books()[1].id;

        let removal = repo.remove(id, &mut |_: &str| true);

        assert!(matches!(removal, Removal::Removed(ref b) if b.title == "B"));
        let titles: Vec<_> = repo.books().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn declined_remove_keeps_book() {
        let mut repo = shelf(&["A", "B"]);
        let id = repo.books()[0].id;
        let mut asked = Vec::new();

        let removal = repo.remove(id, &mut |p: &str| {
            asked.push(p.to_string());
            false
        });

        assert_eq!(removal, Removal::Declined);
        assert_eq!(repo.len(), 2);
        assert_eq!(asked, vec!["Remove \"A\" from the shelf?".to_string()]);
    }

    #[test]
    fn remove_unknown_id_does_not_prompt() {
        let mut repo = shelf(&["A"]);
        let removal = repo.remove(BookId(9), &mut |_: &str| -> bool { panic!("should not ask") });
        assert_eq!(removal, Removal::NotFound);
    }

    #[test]
    fn blank_query_returns_everything_in_order() {
        let repo = shelf(&["C", "A", "B"]);
        let all: Vec<_> = repo.find_by_title("   ").into_iter().cloned().collect();
        assert_eq!(all, repo.books());
        assert_eq!(repo.find_by_title("").len(), 3);
    }

    #[test]
    fn query_matches_title_case_insensitively() {
        let repo = shelf(&["The Hobbit", "Dune", "the silmarillion", "Hobbes"]);
        let titles: Vec<_> = repo
            .find_by_title("THE ")
            .into_iter()
            .map(|b| b.title.as_str())
            .collect();
        // query is trimmed before matching
        assert_eq!(titles, vec!["The Hobbit", "the silmarillion"]);

        let hob: Vec<_> = repo
            .find_by_title("hob")
            .into_iter()
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(hob, vec!["The Hobbit", "Hobbes"]);
    }
}
