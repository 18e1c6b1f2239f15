use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_visible;
use crate::store::PostStore;

/// Replace the search text and return the resulting visible view.
///
/// The term is stored verbatim; matching is case-sensitive. An empty term
/// clears the search and the view widens back to the full collection.
pub fn run(store: &mut PostStore, term: &str) -> Result<CmdResult> {
    store.set_search_text(term);
    let listed = index_visible(store.posts(), store.search_text());
    Ok(CmdResult::default().with_listed_posts(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Post;

    fn store() -> PostStore {
        PostStore::seeded(vec![
            Post::new("neural feed", "reboot the bus"),
            Post::new("optical card", "parse the feed"),
            Post::new("primary alarm", "bypass the panel"),
        ])
    }

    #[test]
    fn test_search_narrows_the_view() {
        let mut store = store();
        let result = run(&mut store, "feed").unwrap();

        assert_eq!(store.search_text(), "feed");
        assert_eq!(result.listed_posts.len(), 2);
        // Collection itself is untouched.
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_empty_term_restores_full_view() {
        let mut store = store();
        run(&mut store, "feed").unwrap();
        let result = run(&mut store, "").unwrap();

        assert_eq!(store.search_text(), "");
        assert_eq!(result.listed_posts.len(), 3);
    }
}
