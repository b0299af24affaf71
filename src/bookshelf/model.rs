use crate::error::{Result, ShelfError};
use chrono::Utc;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Stable identifier of a book. Serialized as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(BookId)
            .map_err(|_| ShelfError::InvalidId(s.to_string()))
    }
}

/// A single record on the shelf.
///
/// Field order matters: it is the order the fields appear in the stored blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredBook")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

impl Book {
    pub fn new(id: BookId, fields: BookFields) -> Self {
        Self {
            id,
            title: fields.title,
            author: fields.author,
            year: fields.year,
            is_completed: fields.is_completed,
        }
    }

    /// Overwrites every field except the id.
    pub fn apply(&mut self, fields: BookFields) {
        self.title = fields.title;
        self.author = fields.author;
        self.year = fields.year;
        self.is_completed = fields.is_completed;
    }
}

/// Year given to stored books whose year cannot be read.
pub const UNKNOWN_YEAR: i32 = 0;

/// On-disk shape accepted when reading. Older blobs spell the flag
/// `isComplete` (sometimes next to `isCompleted`, which wins) and carry the
/// year as the raw form text after an edit, possibly blank or not a number.
#[derive(Deserialize)]
struct StoredBook {
    id: BookId,
    title: String,
    author: String,
    #[serde(deserialize_with = "deserialize_year")]
    year: i32,
    #[serde(rename = "isCompleted", default)]
    is_completed: Option<bool>,
    #[serde(rename = "isComplete", default)]
    legacy_is_complete: Option<bool>,
}

impl From<StoredBook> for Book {
    fn from(stored: StoredBook) -> Self {
        Self {
            id: stored.id,
            title: stored.title,
            author: stored.author,
            year: stored.year,
            is_completed: stored
                .is_completed
                .or(stored.legacy_is_complete)
                .unwrap_or(false),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearRepr {
    Number(i64),
    Text(String),
}

fn deserialize_year<'de, D>(deserializer: D) -> std::result::Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let year = match YearRepr::deserialize(deserializer)? {
        YearRepr::Number(n) => {
            i32::try_from(n).unwrap_or_else(|_| unreadable_year(&n.to_string()))
        }
        YearRepr::Text(s) => s.trim().parse().unwrap_or_else(|_| unreadable_year(&s)),
    };
    Ok(year)
}

fn unreadable_year(raw: &str) -> i32 {
    warn!(year = raw, "stored year is not a number, using {}", UNKNOWN_YEAR);
    UNKNOWN_YEAR
}

/// Validated field values for creating or overwriting a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub is_completed: bool,
}

/// Raw, unvalidated input as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: String,
    pub is_completed: bool,
}

impl BookDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        is_completed: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            is_completed,
        }
    }

    /// Trims every text field and rejects the draft if a required one is empty.
    pub fn validate(&self) -> Result<BookFields> {
        let title = self.title.trim();
        let author = self.author.trim();
        let year = self.year.trim();

        if title.is_empty() || author.is_empty() || year.is_empty() {
            return Err(ShelfError::Validation(
                "Title, author, and year are required".to_string(),
            ));
        }

        let year: i32 = year
            .parse()
            .map_err(|_| ShelfError::Validation(format!("Year must be a number: {}", year)))?;

        Ok(BookFields {
            title: title.to_string(),
            author: author.to_string(),
            year,
            is_completed: self.is_completed,
        })
    }
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year.to_string(),
            is_completed: book.is_completed,
        }
    }
}

/// Hands out ids derived from the millisecond clock, bumped so they are
/// strictly increasing even when two books are created in the same millisecond.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the generator past every id already on the shelf.
    pub fn seeded(books: &[Book]) -> Self {
        let last = books.iter().map(|b| b.id.0).max().unwrap_or(0);
        Self { last }
    }

    pub fn next_id(&mut self) -> Result<BookId> {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_at(now)
    }

    fn next_at(&mut self, now_ms: u64) -> Result<BookId> {
        let floor = self
            .last
            .checked_add(1)
            .ok_or(ShelfError::IdsExhausted(self.last))?;
        let id = now_ms.max(floor);
        self.last = id;
        Ok(BookId(id))
    }
}
