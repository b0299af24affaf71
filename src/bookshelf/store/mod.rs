//! # Storage Layer
//!
//! The shelf persists through a tiny key-value abstraction, [`DataStore`]: one
//! key holds the whole collection as a JSON array. Nothing else is stored under
//! that key, there is no version tag, and every save replaces the prior value.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one `<key>.json` file per key
//!   inside the data directory
//! - [`memory::InMemoryStore`]: for tests, no persistence
//!
//! ## Storage Format
//!
//! ```text
//! ~/.local/share/bookshelf/
//! ├── MyBOOK.json    # [{"id":..,"title":..,"author":..,"year":..,"isCompleted":..}]
//! └── config.json    # ShelfConfig
//! ```
//!
//! Reading is soft: a missing, unreadable or corrupt blob loads as an empty
//! shelf, and a single bad record is skipped. Writing propagates errors.

use crate::error::Result;
use crate::model::Book;
use tracing::warn;

pub mod fs;
pub mod memory;

/// Default key the collection is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "MyBOOK";

/// Abstract key-value storage for the shelf.
pub trait DataStore {
    /// Read the raw value stored under `key`, `None` if absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Loads the collection stored under `key`.
///
/// Never fails: absent, unreadable or unparsable data yields an empty shelf,
/// and a record that cannot be decoded is dropped without its neighbours.
pub fn load_books<S: DataStore>(store: &S, key: &str) -> Vec<Book> {
    let raw = match store.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key, error = %e, "could not read stored books, starting empty");
            return Vec::new();
        }
    };

    let records = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
        Ok(records) => records,
        Err(e) => {
            warn!(key, error = %e, "stored books are not valid, starting empty");
            return Vec::new();
        }
    };

    // One bad record costs only itself.
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Book>(record) {
            Ok(book) => Some(book),
            Err(e) => {
                warn!(key, index, error = %e, "skipping unreadable stored book");
                None
            }
        })
        .collect()
}

/// Serializes the whole collection and writes it under `key`.
///
/// Returns the raw text that was stored.
pub fn save_books<S: DataStore>(store: &mut S, key: &str, books: &[Book]) -> Result<String> {
    let raw = serde_json::to_string(books)?;
    store.write(key, &raw)?;
    Ok(raw)
}
