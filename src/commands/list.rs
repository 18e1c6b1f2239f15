use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_visible;
use crate::store::PostStore;

/// The current visible view: the full collection narrowed by the search
/// text, with canonical display indexes.
pub fn run(store: &PostStore) -> Result<CmdResult> {
    let listed = index_visible(store.posts(), store.search_text());
    Ok(CmdResult::default().with_listed_posts(listed))
}
