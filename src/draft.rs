//! # Add-Post Form
//!
//! The form holds two local draft buffers, `title` and `body`, both empty
//! to start. Submission validates that neither is blank; a failed
//! submission is a silent no-op that leaves both buffers exactly as they
//! were. A successful submission yields the new [`Post`] and resets both
//! buffers to empty. No error is surfaced on discard; the caller simply
//! observes that no post was produced.

use crate::model::Post;

#[derive(Debug, Default, Clone)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
}

impl PostDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Submit the draft. `None` means the submission was discarded because
    /// a field was blank; the draft is untouched in that case.
    pub fn submit(&mut self) -> Option<Post> {
        if self.title.trim().is_empty() || self.body.trim().is_empty() {
            return None;
        }
        let post = Post::new(std::mem::take(&mut self.title), std::mem::take(&mut self.body));
        Some(post)
    }
}
