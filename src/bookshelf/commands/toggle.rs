use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookId;
use crate::session::Session;
use crate::store::DataStore;

pub fn run<S: DataStore>(session: &mut Session<S>, id: BookId) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match session.toggle_complete(id)? {
        Some(book) => {
            let status = if book.is_completed { "read" } else { "unread" };
            result.add_message(CmdMessage::success(format!(
                "Marked as {} ({}): {}",
                status, book.id, book.title
            )));
            Ok(result.with_affected_books(vec![book]))
        }
        None => {
            result.add_message(CmdMessage::info(format!("No book with id {}", id)));
            Ok(result)
        }
    }
}
