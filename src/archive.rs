//! # Post Archive
//!
//! A separate, read-mostly pool of candidate posts, generated once when
//! the session starts and fixed for its lifetime. The panel is a two-state
//! machine (hidden, the initial state, or shown) flipped by a single user
//! action. Entries can be promoted into the main list any number of
//! times; promotion never removes them from the pool.

use crate::error::{BlogError, Result};
use crate::fake;
use crate::model::Post;

/// Sizing and initial visibility for the archive pool.
///
/// The two historical variants of the app differed only here (a 100-entry
/// pool versus a 3000-entry one with the panel pre-hidden), so the pool is
/// configured rather than duplicated.
#[derive(Debug, Clone, Copy)]
pub struct ArchiveOptions {
    pub size: usize,
    pub visible: bool,
}

impl Default for ArchiveOptions {
    fn default() -> Self {
        Self {
            size: 100,
            visible: false,
        }
    }
}

#[derive(Debug)]
pub struct Archive {
    entries: Vec<Post>,
    visible: bool,
}

impl Archive {
    pub fn new(options: ArchiveOptions) -> Self {
        Self {
            entries: fake::random_posts(options.size),
            visible: options.visible,
        }
    }

    /// Flip between hidden and shown; returns the new visibility.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn entries(&self) -> &[Post] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by 1-based display index.
    pub fn entry(&self, index: usize) -> Result<&Post> {
        index
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .ok_or(BlogError::ArchiveIndex(index))
    }
}
