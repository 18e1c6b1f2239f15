//! The Atomic Blog as a terminal session: an in-memory micro-blog seeded
//! with synthetic posts, with search, a promotable archive pool, and a
//! toggleable dark display mode. No persistence; everything lives for the
//! length of the process.
//!
//! The [`api::BlogApi`] facade owns all session state and is the only
//! entry point UIs should use; the shell in the binary is one such UI.

pub mod api;
pub mod archive;
pub mod commands;
pub mod draft;
pub mod error;
pub mod fake;
pub mod filter;
pub mod index;
pub mod model;
pub mod store;
pub mod theme;
