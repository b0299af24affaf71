use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::form::Submission;
use crate::model::BookDraft;
use crate::session::Session;
use crate::store::DataStore;

pub fn run<S: DataStore>(session: &mut Session<S>, draft: BookDraft) -> Result<CmdResult> {
    let form = session.form_mut();
    form.reset();
    form.draft = draft;

    match session.submit()? {
        Submission::Added(book) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!(
                "Book added ({}): {}",
                book.id, book.title
            )));
            Ok(result.with_affected_books(vec![book]))
        }
        other => Err(ShelfError::Api(format!(
            "Form was not in create mode: {:?}",
            other
        ))),
    }
}
