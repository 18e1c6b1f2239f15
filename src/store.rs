//! # Post Store
//!
//! [`PostStore`] is the single owner of the post collection and the current
//! search text. Every other part of the application reads through a shared
//! handle and mutates only via the operations here; nothing else writes.
//!
//! The collection only grows through [`PostStore::add_post`] (new entries
//! are prepended, newest-first) and only shrinks through
//! [`PostStore::clear_posts`] (to empty). There is no update-in-place and
//! no delete-by-id. All operations are total: the store cannot fail.

use crate::model::Post;

#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
    search_text: String,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with `posts`, newest at the front.
    pub fn seeded(posts: Vec<Post>) -> Self {
        Self {
            posts,
            search_text: String::new(),
        }
    }

    /// Prepend a post. The most recent add is always at index 0.
    pub fn add_post(&mut self, post: Post) {
        self.posts.insert(0, post);
    }

    pub fn clear_posts(&mut self) {
        self.posts.clear();
    }

    /// Replace the search text verbatim. No normalization: matching is
    /// case-sensitive and delegated to [`crate::filter`].
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_prepends() {
        let mut store = PostStore::new();
        store.add_post(Post::new("First", "a"));
        store.add_post(Post::new("Second", "b"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.posts()[0].title, "Second");
        assert_eq!(store.posts()[1].title, "First");
    }

    #[test]
    fn test_length_tracks_adds() {
        let mut store = PostStore::new();
        for i in 0..10 {
            store.add_post(Post::new(format!("Post {i}"), "body"));
        }
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn test_clear_empties_regardless_of_prior_state() {
        let mut store = PostStore::seeded(crate::fake::random_posts(5));
        store.set_search_text("query");
        store.clear_posts();

        assert!(store.is_empty());
        assert_eq!(store.posts().len(), 0);
        // Search text is independent state and survives a clear.
        assert_eq!(store.search_text(), "query");
    }

    #[test]
    fn test_search_text_does_not_touch_posts() {
        let mut store = PostStore::seeded(crate::fake::random_posts(3));
        store.set_search_text("driver");
        assert_eq!(store.len(), 3);
        store.set_search_text("");
        assert_eq!(store.search_text(), "");
        assert_eq!(store.len(), 3);
    }
}
