use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::error::LoadError;
use crate::loader::DecodedImage;
use crate::session::SessionToken;

/// Actions sent from the UI to the Loader
#[derive(Debug, Clone)]
pub enum LoaderAction {
    /// Fetch and decode the image at `uri` for a row session
    Load {
        token: SessionToken,
        uri: String,
        /// Set by the UI when the session is cancelled
        cancelled: Arc<AtomicBool>,
    },
    /// Abort the in-flight load for a session (best effort)
    Cancel(SessionToken),
    /// Stop the loader thread
    Shutdown,
}

/// Events sent from the Loader to the UI
#[derive(Debug, Clone)]
pub enum LoaderEvent {
    /// A load finished, successfully or not
    Finished {
        token: SessionToken,
        result: Result<Arc<DecodedImage>, LoadError>,
    },
}
