use crate::commands::CmdResult;
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;
use crate::view::ShelfView;

pub fn run<S: DataStore>(session: &Session<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_shelf(ShelfView::from_books(session.books())))
}
