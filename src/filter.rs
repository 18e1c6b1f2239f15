//! # View Filter
//!
//! Derives the visible subset of posts from the full collection and the
//! current search text. Pure: no side effects, stable for identical
//! inputs. The store is never mutated by searching; only the derived view
//! narrows.
//!
//! Matching is a case-sensitive substring check over title or body. An
//! empty search text matches everything.

use crate::model::Post;

pub fn matches(post: &Post, search_text: &str) -> bool {
    search_text.is_empty() || post.title.contains(search_text) || post.body.contains(search_text)
}

/// The posts visible under `search_text`, preserving collection order.
pub fn visible_posts<'a>(posts: &'a [Post], search_text: &str) -> Vec<&'a Post> {
    posts.iter().filter(|p| matches(p, search_text)).collect()
}
