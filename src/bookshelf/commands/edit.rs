use crate::commands::{BookEdit, CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::form::Submission;
use crate::model::BookId;
use crate::session::Session;
use crate::store::DataStore;

/// Loads the book into the form, applies the overrides, and submits.
pub fn run<S: DataStore>(session: &mut Session<S>, id: BookId, edit: BookEdit) -> Result<CmdResult> {
    if edit.is_empty() {
        let book = session
            .find(id)
            .ok_or_else(|| ShelfError::Api(format!("No book with id {}", id)))?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!(
            "Nothing to change ({}): {}",
            book.id, book.title
        )));
        return Ok(result);
    }

    let title = session.begin_edit(id)?.draft.title.clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Editing ({}): {}", id, title)));

    let draft = &mut session.form_mut().draft;
    if let Some(title) = edit.title {
        draft.title = title;
    }
    if let Some(author) = edit.author {
        draft.author = author;
    }
    if let Some(year) = edit.year {
        draft.year = year;
    }
    if let Some(done) = edit.is_completed {
        draft.is_completed = done;
    }

    let submitted = session.submit();
    if submitted.is_err() {
        session.form_mut().reset();
    }

    match submitted? {
        Submission::Updated(book) => {
            result.add_message(CmdMessage::success(format!(
                "Book updated ({}): {}",
                book.id, book.title
            )));
            Ok(result.with_affected_books(vec![book]))
        }
        Submission::Missing(id) => {
            result.add_message(CmdMessage::info(format!("No book with id {}", id)));
            Ok(result)
        }
        Submission::Added(book) => Err(ShelfError::Api(format!(
            "Form was not in edit mode, added {}",
            book.id
        ))),
    }
}
