use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookId;
use crate::repository::{Confirm, Removal};
use crate::session::Session;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    session: &mut Session<S>,
    id: BookId,
    confirm: &mut impl Confirm,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match session.remove(id, confirm)? {
        Removal::Removed(book) => {
            result.add_message(CmdMessage::success(format!(
                "Book deleted ({}): {}",
                book.id, book.title
            )));
            Ok(result.with_affected_books(vec![book]))
        }
        Removal::Declined => {
            result.add_message(CmdMessage::info("Operation cancelled."));
            Ok(result)
        }
        Removal::NotFound => {
            result.add_message(CmdMessage::info(format!("No book with id {}", id)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::{load_books, DEFAULT_STORAGE_KEY};

    fn session() -> Session<crate::store::memory::InMemoryStore> {
        let fixture = StoreFixture::new()
            .with_book(1, "A", "X", 2000)
            .with_book(2, "B", "Y", 2001)
            .with_book(3, "C", "Z", 2002);
        Session::open(fixture.store, DEFAULT_STORAGE_KEY)
    }

    #[test]
    fn confirmed_delete_removes_exactly_one() {
        let mut session = session();

        let result = run(&mut session, BookId(2), &mut |_: &str| true).unwrap();

        assert_eq!(result.affected_books[0].title, "B");
        let ids: Vec<_> = load_books(session.store(), DEFAULT_STORAGE_KEY)
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec![BookId(1), BookId(3)]);
    }

    #[test]
    fn declined_delete_keeps_everything() {
        let mut session = session();

        let result = run(&mut session, BookId(2), &mut |_: &str| false).unwrap();

        assert!(result.affected_books.is_empty());
        assert_eq!(result.messages[0].content, "Operation cancelled.");
        assert_eq!(session.books().len(), 3);
    }
}
