//! # Display Indexes
//!
//! Posts carry UUIDs internally, but the shell is a text interface and
//! users refer to entries by small numbers. Display indexes are assigned
//! over the full, unfiltered collection (newest = 1) and only then
//! narrowed by the view filter, so the number shown next to a post under a
//! search is the same number it has in the full list.

use crate::filter;
use crate::model::Post;

/// A post paired with its 1-based display index.
#[derive(Debug, Clone)]
pub struct DisplayPost {
    pub post: Post,
    pub index: usize,
}

/// Assign canonical display indexes to the whole collection.
pub fn index_posts(posts: &[Post]) -> Vec<DisplayPost> {
    posts
        .iter()
        .enumerate()
        .map(|(i, post)| DisplayPost {
            post: post.clone(),
            index: i + 1,
        })
        .collect()
}

/// Index the whole collection, then keep only the entries visible under
/// `search_text`. Indexes are not renumbered by filtering.
pub fn index_visible(posts: &[Post], search_text: &str) -> Vec<DisplayPost> {
    index_posts(posts)
        .into_iter()
        .filter(|dp| filter::matches(&dp.post, search_text))
        .collect()
}
