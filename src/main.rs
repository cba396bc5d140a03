//! chat-row - a scrolling chat message list with async avatars
//!
//! Architecture:
//! - Main thread: runs the egui UI and owns every row
//! - Loader thread: runs a Tokio runtime that fetches and decodes avatars
//! - Communication via crossbeam channels

use std::path::PathBuf;
use std::process::ExitCode;

use eframe::egui;
use tracing::error;
use tracing_subscriber::EnvFilter;

use chat_row::app::ChatRowApp;
use chat_row::config::load_settings;
use chat_row::feed::{demo_feed, load_feed};
use chat_row::loader::{HttpFetcher, LoaderHandle};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chat_row=info")),
        )
        .init();

    let messages = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match load_feed(&path) {
            Ok(messages) => messages,
            Err(e) => {
                error!("{}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => demo_feed(),
    };

    let settings = load_settings();
    let fetcher = match HttpFetcher::new(&settings.user_agent, settings.max_avatar_bytes) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let (loader, event_rx) = LoaderHandle::spawn(fetcher);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 720.0])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "chat-row",
        options,
        Box::new(move |cc| {
            Ok(Box::new(ChatRowApp::new(
                cc, settings, messages, loader, event_rx,
            )))
        }),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("UI error: {}", e);
            ExitCode::FAILURE
        }
    }
}
