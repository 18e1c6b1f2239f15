//! # Domain Model: Posts
//!
//! A [`Post`] is a title/body pair, the unit of content in the blog.
//! Posts are immutable once created: there is no update-in-place anywhere
//! in the application, only prepend and clear-to-empty.
//!
//! ## Identity
//!
//! Display lists are ordered newest-first and could in principle be keyed
//! by position, but positional keys drift as entries are prepended. Every
//! post therefore gets a synthetic [`Uuid`] at creation time; two posts
//! with identical title and body (the archive permits promoting the same
//! entry twice) are still distinct entries.
//!
//! ## Boundary normalization
//!
//! Titles and bodies arrive from the add-post form as free text. They are
//! trimmed at construction; emptiness checks happen at the form boundary
//! ([`crate::draft`]), not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            title: title.into().trim().to_string(),
            body: body.into().trim().to_string(),
        }
    }

    /// A fresh copy of this post's content under a new identity.
    ///
    /// Used by archive promotion: the promoted entry becomes a separate
    /// post in the main list while the archive keeps the original.
    pub fn duplicate(&self) -> Self {
        Post::new(self.title.clone(), self.body.clone())
    }
}
