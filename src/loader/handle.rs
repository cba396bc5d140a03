//! UI-side handle to the loader thread.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::warn;

use super::fetch::Fetch;
use super::main_loop::run_loader;
use crate::protocol::{LoaderAction, LoaderEvent};
use crate::session::{SessionHandle, SessionToken};

/// Cheap to clone; every row gets the same handle
#[derive(Debug, Clone)]
pub struct LoaderHandle {
    action_tx: Sender<LoaderAction>,
}

impl LoaderHandle {
    pub fn new(action_tx: Sender<LoaderAction>) -> Self {
        Self { action_tx }
    }

    /// Spawn the loader thread and return the handle plus the event receiver
    /// the UI drains every frame.
    pub fn spawn<F: Fetch>(fetcher: F) -> (Self, Receiver<LoaderEvent>) {
        let (action_tx, action_rx) = unbounded::<LoaderAction>();
        let (event_tx, event_rx) = unbounded::<LoaderEvent>();

        thread::spawn(move || {
            run_loader(action_rx, event_tx, fetcher);
        });

        (Self::new(action_tx), event_rx)
    }

    /// Queue a load for `uri` and hand back the session that owns it.
    /// Returns `None` when the loader thread is gone; the row keeps its
    /// placeholder with no session.
    pub fn start(&self, token: SessionToken, uri: &str) -> Option<SessionHandle> {
        let cancelled = Arc::new(AtomicBool::new(false));
        let action = LoaderAction::Load {
            token,
            uri: uri.to_string(),
            cancelled: Arc::clone(&cancelled),
        };
        if self.action_tx.send(action).is_err() {
            warn!(?token, "image loader is not running, avatar not requested");
            return None;
        }
        Some(SessionHandle::new(token, cancelled, self.action_tx.clone()))
    }

    pub fn shutdown(&self) {
        let _ = self.action_tx.send(LoaderAction::Shutdown);
    }
}
