//! Chat message rows with asynchronously loaded avatars.
//!
//! This module re-exports the core components for testing and embedding.

pub mod app;
pub mod config;
pub mod error;
pub mod feed;
pub mod list;
pub mod loader;
pub mod message;
pub mod protocol;
pub mod row;
pub mod session;
pub mod timestamp;
pub mod ui;
