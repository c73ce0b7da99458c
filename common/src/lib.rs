//! Platform-independent core of the chat message composer.
//!
//! The browser component in `frontend` owns a [`model::composer::Composer`]
//! and forwards every DOM event to it. Nothing in this crate touches the DOM,
//! so the draft and attachment rules can be exercised with plain `cargo test`.

pub mod config;
pub mod error;
pub mod model;
