use super::DataStore;
use crate::error::{Result, ShelfError};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, for exercising error paths.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl DataStore for InMemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(ShelfError::Store(format!("write to {} refused", key)));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Book, BookId};
    use crate::store::{save_books, DEFAULT_STORAGE_KEY};

    pub struct StoreFixture {
        pub store: InMemoryStore,
        books: Vec<Book>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                books: Vec::new(),
            }
        }

        pub fn with_book(mut self, id: u64, title: &str, author: &str, year: i32) -> Self {
            self.books.push(Book {
                id: BookId(id),
                title: title.to_string(),
                author: author.to_string(),
                year,
                is_completed: false,
            });
            self.flush()
        }

        pub fn with_completed_book(mut self, id: u64, title: &str, author: &str, year: i32) -> Self {
            self.books.push(Book {
                id: BookId(id),
                title: title.to_string(),
                author: author.to_string(),
                year,
                is_completed: true,
            });
            self.flush()
        }

        fn flush(mut self) -> Self {
            save_books(&mut self.store, DEFAULT_STORAGE_KEY, &self.books).unwrap();
            self
        }
    }
}
