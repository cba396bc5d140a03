//! Loader thread event loop.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;
use tracing::{error, info, trace};

use super::decode::{decode_image, DecodedImage};
use super::fetch::Fetch;
use crate::error::LoadError;
use crate::protocol::{LoaderAction, LoaderEvent};
use crate::session::SessionToken;

/// Run the loader on a tokio runtime until `Shutdown` arrives or the UI
/// drops its sender. Blocks the calling thread.
pub fn run_loader<F: Fetch>(
    action_rx: Receiver<LoaderAction>,
    event_tx: Sender<LoaderEvent>,
    fetcher: F,
) {
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            // Rows keep their placeholders
            error!("Failed to create Tokio runtime for image loader: {}", e);
            return;
        }
    };

    let fetcher = Arc::new(fetcher);
    let mut in_flight: HashMap<SessionToken, JoinHandle<()>> = HashMap::new();
    info!("image loader started");

    while let Ok(action) = action_rx.recv() {
        in_flight.retain(|_, task| !task.is_finished());

        match action {
            LoaderAction::Load {
                token,
                uri,
                cancelled,
            } => {
                let task = rt.spawn(run_session(
                    Arc::clone(&fetcher),
                    token,
                    uri,
                    cancelled,
                    event_tx.clone(),
                ));
                in_flight.insert(token, task);
            }
            LoaderAction::Cancel(token) => {
                if let Some(task) = in_flight.remove(&token) {
                    trace!(?token, "aborting avatar load");
                    task.abort();
                }
            }
            LoaderAction::Shutdown => break,
        }
    }

    for (_, task) in in_flight.drain() {
        task.abort();
    }
    rt.shutdown_background();
    info!("image loader stopped");
}

/// Fetch then decode `uri`. Decoding runs on the blocking pool.
pub async fn load<F: Fetch>(fetcher: &F, uri: &str) -> Result<Arc<DecodedImage>, LoadError> {
    let bytes = fetcher.fetch(uri).await?;
    decode_blocking(bytes).await
}

async fn decode_blocking(bytes: Vec<u8>) -> Result<Arc<DecodedImage>, LoadError> {
    tokio::task::spawn_blocking(move || decode_image(&bytes))
        .await
        .map_err(|e| LoadError::Decode(format!("decode task failed: {}", e)))?
        .map(Arc::new)
}

async fn run_session<F: Fetch>(
    fetcher: Arc<F>,
    token: SessionToken,
    uri: String,
    cancelled: Arc<AtomicBool>,
    event_tx: Sender<LoaderEvent>,
) {
    let result = load(fetcher.as_ref(), &uri).await;

    if cancelled.load(Ordering::Acquire) {
        trace!(?token, "dropping result of cancelled session");
        return;
    }

    // UI gone means nobody is left to show the avatar
    let _ = event_tx.send(LoaderEvent::Finished { token, result });
}
