//! # Command Layer
//!
//! Core operation logic, one module per operation, in pure functions over
//! the session state. Commands never touch stdout or the terminal; they
//! return a structured [`CmdResult`] and the shell decides how to render
//! it. This is where the bulk of the unit testing lives.

use serde::Serialize;

use crate::index::DisplayPost;

pub mod add;
pub mod clear;
pub mod export;
pub mod list;
pub mod promote;
pub mod search;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Posts created or otherwise modified by the operation.
    pub affected_posts: Vec<DisplayPost>,
    /// Posts to display, already narrowed to the visible view.
    pub listed_posts: Vec<DisplayPost>,
    /// Serialized payload for the export operation.
    pub export_json: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_posts(mut self, posts: Vec<DisplayPost>) -> Self {
        self.affected_posts = posts;
        self
    }

    pub fn with_listed_posts(mut self, posts: Vec<DisplayPost>) -> Self {
        self.listed_posts = posts;
        self
    }
}
