use crate::commands::CmdResult;
use crate::error::Result;
use crate::session::Session;
use crate::store::DataStore;
use crate::view::SearchResults;

pub fn run<S: DataStore>(session: &Session<S>, query: &str) -> Result<CmdResult> {
    let matches = session.search(query);
    Ok(CmdResult::default().with_search(SearchResults::new(query, matches)))
}
