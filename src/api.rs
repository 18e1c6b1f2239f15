//! # API Facade
//!
//! [`BlogApi`] owns the whole session state (post store, archive pool,
//! add-post draft, display mode flag) and is the single shared access
//! point the presentation layer talks to. It dispatches to the command
//! layer and returns structured results; it never prints.
//!
//! Ownership is deliberate: the store is the only writer of its own
//! collection, and consumers reach it exclusively through this handle.
//! Nothing in the crate holds ambient global mutable state.

use crate::archive::{Archive, ArchiveOptions};
use crate::commands;
use crate::draft::PostDraft;
use crate::error::Result;
use crate::fake;
use crate::store::PostStore;
use crate::theme::Theme;

/// Startup configuration for a session.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Number of synthetic posts the main list starts with.
    pub seed_posts: usize,
    pub archive: ArchiveOptions,
    pub theme: Theme,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            seed_posts: 30,
            archive: ArchiveOptions::default(),
            theme: Theme::Light,
        }
    }
}

pub struct BlogApi {
    store: PostStore,
    archive: Archive,
    draft: PostDraft,
    theme: Theme,
}

impl BlogApi {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            store: PostStore::seeded(fake::random_posts(options.seed_posts)),
            archive: Archive::new(options.archive),
            draft: PostDraft::new(),
            theme: options.theme,
        }
    }

    // --- Post store operations ---

    /// Submit the current draft (silent no-op on a blank field).
    pub fn submit_draft(&mut self) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, &mut self.draft)
    }

    pub fn clear_posts(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store)
    }

    pub fn search(&mut self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&mut self.store, term)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn export(&self) -> Result<commands::CmdResult> {
        commands::export::run(&self.store)
    }

    // --- Draft buffers ---

    pub fn set_draft_title(&mut self, title: &str) {
        self.draft.set_title(title);
    }

    pub fn set_draft_body(&mut self, body: &str) {
        self.draft.set_body(body);
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    // --- Archive ---

    pub fn toggle_archive(&mut self) -> bool {
        self.archive.toggle()
    }

    pub fn promote(&mut self, indexes: &[usize]) -> Result<commands::CmdResult> {
        commands::promote::run(&mut self.store, &self.archive, indexes)
    }

    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    // --- Display mode ---

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    // --- Reads ---

    pub fn store(&self) -> &PostStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> BlogApi {
        BlogApi::new(SessionOptions {
            seed_posts: 0,
            archive: ArchiveOptions {
                size: 3,
                visible: false,
            },
            theme: Theme::Light,
        })
    }

    #[test]
    fn test_collection_length_tracks_adds() {
        let mut api = api();
        for i in 0..5 {
            api.set_draft_title(&format!("Title {i}"));
            api.set_draft_body("body");
            api.submit_draft().unwrap();
        }
        assert_eq!(api.store().len(), 5);
        assert_eq!(api.store().posts()[0].title, "Title 4");
    }

    #[test]
    fn test_clear_then_read_is_empty() {
        let mut api = BlogApi::new(SessionOptions::default());
        assert_eq!(api.store().len(), 30);
        api.clear_posts().unwrap();
        assert!(api.store().is_empty());
        assert!(api.list().unwrap().listed_posts.is_empty());
    }

    #[test]
    fn test_promote_duplicates_allowed() {
        let mut api = api();
        api.promote(&[2]).unwrap();
        api.promote(&[2]).unwrap();

        let posts = api.store().posts();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, posts[1].title);
        assert_ne!(posts[0].id, posts[1].id);
    }

    #[test]
    fn test_archive_toggle_is_session_state() {
        let mut api = api();
        assert!(!api.archive().is_visible());
        assert!(api.toggle_archive());
        assert!(api.archive().is_visible());
    }

    #[test]
    fn test_theme_round_trip() {
        let mut api = api();
        assert_eq!(api.theme(), Theme::Light);
        api.toggle_theme();
        api.toggle_theme();
        assert_eq!(api.theme(), Theme::Light);
    }

    #[test]
    fn test_discarded_submit_keeps_draft() {
        let mut api = api();
        api.set_draft_title("kept");
        api.submit_draft().unwrap();

        assert!(api.store().is_empty());
        assert_eq!(api.draft().title, "kept");
    }
}
