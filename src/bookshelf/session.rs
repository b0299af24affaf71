//! # Session
//!
//! The session owns everything the shelf needs while it is open: the storage
//! backend, the in-memory collection, the shared form, and the event bus.
//! Nothing is global; UI clients hold a `Session` (usually through
//! [`ShelfApi`](crate::api::ShelfApi)) and pass it by reference.
//!
//! Every successful mutation runs the same commit sequence:
//!
//! ```text
//! mutate repository → RenderRequested(books) → save → DataPersisted(raw)
//! ```

use crate::error::{Result, ShelfError};
use crate::events::{EventBus, Observer, Signal, TraceObserver};
use crate::form::{BookForm, Submission};
use crate::model::{Book, BookId};
use crate::repository::{BookRepository, Confirm, Removal};
use crate::store::{load_books, save_books, DataStore};

pub struct Session<S: DataStore> {
    store: S,
    key: String,
    repo: BookRepository,
    form: BookForm,
    events: EventBus,
}

impl<S: DataStore> Session<S> {
    /// Opens the shelf stored under `key`, starting empty if nothing usable is there.
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let books = load_books(&store, &key);
        let mut events = EventBus::new();
        events.subscribe(TraceObserver);

        Self {
            store,
            key,
            repo: BookRepository::new(books),
            form: BookForm::new(),
            events,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn books(&self) -> &[Book] {
        self.repo.books()
    }

    pub fn find(&self, id: BookId) -> Option<&Book> {
        self.repo.find(id)
    }

    pub fn form(&self) -> &BookForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookForm {
        &mut self.form
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.events.subscribe(observer);
    }

    fn commit(&mut self) -> Result<()> {
        self.events.emit(Signal::RenderRequested(self.repo.books()));
        let raw = save_books(&mut self.store, &self.key, self.repo.books())?;
        self.events.emit(Signal::DataPersisted(&raw));
        Ok(())
    }

    /// Loads the book into the form and switches it to edit mode.
    pub fn begin_edit(&mut self, id: BookId) -> Result<&BookForm> {
        let book = self
            .repo
            .find(id)
            .ok_or_else(|| ShelfError::Api(format!("No book with id {}", id)))?;
        self.form.begin_edit(book);
        Ok(&self.form)
    }

    /// Submits the shared form: adds in create mode, updates in edit mode.
    pub fn submit(&mut self) -> Result<Submission> {
        let submission = self.form.submit(&mut self.repo)?;
        if submission.changed_shelf() {
            self.commit()?;
        }
        Ok(submission)
    }

    pub fn toggle_complete(&mut self, id: BookId) -> Result<Option<Book>> {
        let toggled = self.repo.toggle_complete(id).cloned();
        if toggled.is_some() {
            self.commit()?;
        }
        Ok(toggled)
    }

    pub fn remove(&mut self, id: BookId, confirm: &mut impl Confirm) -> Result<Removal> {
        let removal = self.repo.remove(id, confirm);
        if let Removal::Removed(_) = removal {
            if self.form.editing() == Some(id) {
                self.form.reset();
            }
            self.commit()?;
        }
        Ok(removal)
    }

    pub fn search(&self, query: &str) -> Vec<&Book> {
        self.repo.find_by_title(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormMode;
    use crate::model::BookDraft;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::store::DEFAULT_STORAGE_KEY;
    use crate::view::ShelfView;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn open_empty() -> Session<InMemoryStore> {
        Session::open(InMemoryStore::new(), DEFAULT_STORAGE_KEY)
    }

    fn record_signals(session: &mut Session<InMemoryStore>) -> Rc<RefCell<Vec<String>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        session.subscribe(move |signal: &Signal<'_>| {
            let entry = match signal {
                Signal::RenderRequested(books) => format!("render:{}", books.len()),
                Signal::DataPersisted(raw) => format!("persisted:{}", raw.len()),
            };
            sink.borrow_mut().push(entry);
        });
        log
    }

    fn add(session: &mut Session<InMemoryStore>, title: &str, author: &str, year: &str) -> Book {
        session.form_mut().draft = BookDraft::new(title, author, year, false);
        match session.submit().unwrap() {
            Submission::Added(book) => book,
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn opens_stored_books() {
        let fixture = StoreFixture::new()
            .with_book(1, "A", "X", 2000)
            .with_completed_book(2, "B", "Y", 2001);
        let session = Session::open(fixture.store, DEFAULT_STORAGE_KEY);
        assert_eq!(session.books().len(), 2);
        assert!(session.books()[1].is_completed);
    }

    #[test]
    fn mutation_renders_then_persists() {
        let mut session = open_empty();
        let log = record_signals(&mut session);

        add(&mut session, "A", "X", "2000");

        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], "render:1");
        assert!(log[1].starts_with("persisted:"));
    }

    #[test]
    fn rejected_add_emits_nothing() {
        let mut session = open_empty();
        let log = record_signals(&mut session);
        session.form_mut().draft = BookDraft::new("", "X", "2000", false);

        assert!(matches!(session.submit(), Err(ShelfError::Validation(_))));
        assert!(session.books().is_empty());
        assert!(log.borrow().is_empty());
        assert_eq!(session.store().read(DEFAULT_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn unknown_toggle_is_silent() {
        let mut session = open_empty();
        add(&mut session, "A", "X", "2000");
        let log = record_signals(&mut session);

        assert_eq!(session.toggle_complete(BookId(1)).unwrap(), None);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn declined_remove_does_not_persist() {
        let mut session = open_empty();
        let book = add(&mut session, "A", "X", "2000");
        let log = record_signals(&mut session);

        let removal = session.remove(book.id, &mut |_: &str| false).unwrap();

        assert_eq!(removal, Removal::Declined);
        assert_eq!(session.books().len(), 1);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn removing_the_book_under_edit_resets_the_form() {
        let mut session = open_empty();
        let book = add(&mut session, "A", "X", "2000");
        session.begin_edit(book.id).unwrap();

        session.remove(book.id, &mut |_: &str| true).unwrap();

        assert_eq!(session.form().mode(), FormMode::Create);
        assert!(session.books().is_empty());
    }

    #[test]
    fn begin_edit_unknown_id_errors() {
        let mut session = open_empty();
        assert!(matches!(session.begin_edit(BookId(4)), Err(ShelfError::Api(_))));
    }

    #[test]
    fn write_failure_surfaces() {
        let mut store = InMemoryStore::new();
        store.set_fail_writes(true);
        let mut session = Session::open(store, DEFAULT_STORAGE_KEY);
        session.form_mut().draft = BookDraft::new("A", "X", "2000", false);
        assert!(matches!(session.submit(), Err(ShelfError::Store(_))));
    }

    #[test]
    fn blank_legacy_year_survives_the_next_save() {
        let mut store = InMemoryStore::new();
        store
            .write(
                DEFAULT_STORAGE_KEY,
                r#"[{"id":1,"title":"Keep","author":"A","year":2000,"isCompleted":false},{"id":2,"title":"Edited","author":"B","year":"","isCompleted":false}]"#,
            )
            .unwrap();
        let mut session = Session::open(store, DEFAULT_STORAGE_KEY);
        assert_eq!(session.books().len(), 2);

        add(&mut session, "New", "C", "2020");

        let stored = session.store().read(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        assert!(stored.contains(r#""title":"Keep""#));
        assert!(stored.contains(r#""title":"Edited","author":"B","year":0"#));
        assert!(stored.contains(r#""title":"New""#));
    }

    #[test]
    fn add_after_max_id_fails_without_touching_storage() {
        let fixture = StoreFixture::new().with_book(u64::MAX, "Last", "X", 2000);
        let mut session = Session::open(fixture.store, DEFAULT_STORAGE_KEY);
        let before = session.store().read(DEFAULT_STORAGE_KEY).unwrap();
        session.form_mut().draft = BookDraft::new("New", "Y", "2001", false);

        assert!(matches!(session.submit(), Err(ShelfError::IdsExhausted(_))));
        assert_eq!(session.books().len(), 1);
        assert_eq!(session.store().read(DEFAULT_STORAGE_KEY).unwrap(), before);
    }

    #[test]
    fn save_then_reload_round_trips() {
        let mut session = open_empty();
        add(&mut session, "A", "X", "2000");
        let b = add(&mut session, "B", "Y", "2001");
        session.toggle_complete(b.id).unwrap();
        let before = session.books().to_vec();

        let Session { store, .. } = session;
        let reopened = Session::open(store, DEFAULT_STORAGE_KEY);
        assert_eq!(reopened.books(), &before[..]);
    }

    #[test]
    fn atomic_habits_moves_to_complete_shelf_and_survives_reload() {
        let mut session = open_empty();
        let book = add(&mut session, "Atomic Habits", "J. Clear", "2018");
        assert_eq!(session.books().len(), 1);
        assert_eq!(
            ShelfView::from_books(session.books()).contains("Atomic Habits"),
            (true, false)
        );

        session.toggle_complete(book.id).unwrap();
        assert_eq!(
            ShelfView::from_books(session.books()).contains("Atomic Habits"),
            (false, true)
        );

        let Session { store, .. } = session;
        let reopened = Session::open(store, DEFAULT_STORAGE_KEY);
        assert_eq!(reopened.books().len(), 1);
        let reloaded = &reopened.books()[0];
        assert_eq!(reloaded.id, book.id);
        assert_eq!(reloaded.title, "Atomic Habits");
        assert_eq!(reloaded.author, "J. Clear");
        assert_eq!(reloaded.year, 2018);
        assert!(reloaded.is_completed);
        assert_eq!(
            ShelfView::from_books(reopened.books()).contains("Atomic Habits"),
            (false, true)
        );
    }
}
