//! Demo application hosting the message list
//!
//! - `core`: ChatRowApp struct and initialization
//! - `events`: draining loader events into rows
//! - `update`: eframe update loop and panels

pub mod core;
pub mod events;
pub mod update;

pub use core::ChatRowApp;
