//! Per-row image load sessions.
//!
//! A row owns at most one [`SessionHandle`]. Every session carries a
//! [`SessionToken`] made of the row id and a generation counter that the row
//! bumps whenever it starts a new session. Results are applied only when their
//! token still matches the row's current handle and the handle was never
//! cancelled.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossbeam_channel::Sender;

use crate::protocol::LoaderAction;

/// Identifies one slot in the host list
pub type RowId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken {
    pub row: RowId,
    pub generation: u64,
}

impl SessionToken {
    pub fn new(row: RowId, generation: u64) -> Self {
        Self { row, generation }
    }
}

/// Handle to an in-flight load, owned by the row that started it
#[derive(Debug)]
pub struct SessionHandle {
    token: SessionToken,
    cancelled: Arc<AtomicBool>,
    action_tx: Sender<LoaderAction>,
}

impl SessionHandle {
    pub(crate) fn new(
        token: SessionToken,
        cancelled: Arc<AtomicBool>,
        action_tx: Sender<LoaderAction>,
    ) -> Self {
        Self {
            token,
            cancelled,
            action_tx,
        }
    }

    pub fn token(&self) -> SessionToken {
        self.token
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// True when `token` belongs to this session and it is still live
    pub fn accepts(&self, token: SessionToken) -> bool {
        self.token == token && !self.is_cancelled()
    }

    /// Suppress delivery and ask the loader to abort the transfer.
    /// Calling this more than once is harmless.
    pub fn cancel(&self) {
        if self.cancelled.swap(true, Ordering::AcqRel) {
            return;
        }
        // If the loader thread is gone there is nothing left to abort
        let _ = self.action_tx.send(LoaderAction::Cancel(self.token));
    }
}
