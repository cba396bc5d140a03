//! A reusable message row: bound text plus an avatar slot.
//!
//! The host list calls [`MessageRow::reset`] when a row is recycled and
//! [`MessageRow::bind`] to show a new message. Avatar results from the loader
//! arrive through [`MessageRow::deliver`] on the UI thread.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::LoadError;
use crate::loader::{DecodedImage, LoaderHandle};
use crate::message::Message;
use crate::session::{RowId, SessionHandle, SessionToken};
use crate::timestamp::format_timestamp;

/// What the avatar slot currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Avatar {
    #[default]
    Placeholder,
    Image(Arc<DecodedImage>),
}

impl Avatar {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Avatar::Placeholder)
    }
}

/// Mutable state owned by exactly one row
#[derive(Debug, Default)]
pub struct RowState {
    pub avatar: Avatar,
    session: Option<SessionHandle>,
}

impl RowState {
    pub fn session(&self) -> Option<&SessionHandle> {
        self.session.as_ref()
    }

    fn cancel_session(&mut self) {
        if let Some(session) = self.session.take() {
            session.cancel();
        }
    }
}

/// One list row
pub struct MessageRow {
    id: RowId,
    generation: u64,
    message: Option<Message>,
    pub author: String,
    pub body: String,
    pub timestamp: String,
    pub state: RowState,
    /// Uploaded avatar texture, rebuilt after every successful load
    pub(crate) texture: Option<eframe::egui::TextureHandle>,
}

impl MessageRow {
    pub fn new(id: RowId) -> Self {
        Self {
            id,
            generation: 0,
            message: None,
            author: String::new(),
            body: String::new(),
            timestamp: String::new(),
            state: RowState::default(),
            texture: None,
        }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn avatar(&self) -> &Avatar {
        &self.state.avatar
    }

    /// Show `message` in this row, starting an avatar load if it has a photo URL
    pub fn bind(&mut self, message: &Message, loader: &LoaderHandle) {
        // Prior session must be dead before anything else changes
        self.state.cancel_session();

        self.author = message.author.name.clone();
        self.body = message.body.clone();
        self.timestamp = format_timestamp(message.timestamp);
        self.state.avatar = Avatar::Placeholder;
        self.texture = None;
        self.message = Some(message.clone());

        if let Some(uri) = message.photo_url() {
            self.generation += 1;
            let token = SessionToken::new(self.id, self.generation);
            self.state.session = loader.start(token, uri);
        }
    }

    /// Prepare for reuse. Idempotent.
    pub fn reset(&mut self) {
        self.state.cancel_session();
        self.state.avatar = Avatar::Placeholder;
        self.texture = None;
        self.message = None;
        self.author.clear();
        self.body.clear();
        self.timestamp.clear();
    }

    /// Apply a loader result. Returns true if the row changed.
    pub fn deliver(
        &mut self,
        token: SessionToken,
        result: Result<Arc<DecodedImage>, LoadError>,
    ) -> bool {
        let current = self
            .state
            .session
            .as_ref()
            .is_some_and(|session| session.accepts(token));
        if !current {
            trace!(?token, row = self.id, "ignoring stale avatar result");
            return false;
        }

        // The session is over either way
        self.state.session = None;

        match result {
            Ok(image) => {
                self.state.avatar = Avatar::Image(image);
                self.texture = None;
                true
            }
            Err(e) => {
                debug!(row = self.id, "avatar load failed: {}", e);
                false
            }
        }
    }
}

impl Drop for MessageRow {
    fn drop(&mut self) {
        self.state.cancel_session();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::LoaderAction;
    use crossbeam_channel::{unbounded, Receiver};

    fn loader() -> (LoaderHandle, Receiver<LoaderAction>) {
        let (tx, rx) = unbounded();
        (LoaderHandle::new(tx), rx)
    }

    fn image() -> Arc<DecodedImage> {
        Arc::new(DecodedImage {
            width: 1,
            height: 1,
            rgba: vec![255, 0, 0, 255],
        })
    }

    fn loaded_token(rx: &Receiver<LoaderAction>) -> SessionToken {
        match rx.try_recv() {
            Ok(LoaderAction::Load { token, .. }) => token,
            other => panic!("Expected Load action, got {:?}", other),
        }
    }

    #[test]
    fn test_bind_without_photo_issues_no_fetch() {
        let (loader, rx) = loader();
        let mut row = MessageRow::new(0);

        row.bind(&Message::new("alice", "hello", 1_704_467_040_000), &loader);

        assert_eq!(row.author, "alice");
        assert_eq!(row.body, "hello");
        assert!(!row.timestamp.is_empty());
        assert!(row.avatar().is_placeholder());
        assert!(row.state.session().is_none());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dead_loader_leaves_no_session() {
        let (loader, rx) = loader();
        drop(rx);
        let mut row = MessageRow::new(0);

        row.bind(
            &Message::new("zoe", "offline", 0).with_photo("https://example.com/z.png"),
            &loader,
        );

        assert_eq!(row.author, "zoe");
        assert!(row.avatar().is_placeholder());
        assert!(row.state.session().is_none());
    }

    #[test]
    fn test_successful_delivery_applies_once() {
        let (loader, rx) = loader();
        let mut row = MessageRow::new(4);
        row.bind(
            &Message::new("bob", "hi", 0).with_photo("https://example.com/bob.png"),
            &loader,
        );
        let token = loaded_token(&rx);
        assert_eq!(token.row, 4);

        let img = image();
        assert!(row.deliver(token, Ok(Arc::clone(&img))));
        assert_eq!(row.avatar(), &Avatar::Image(img));
        assert!(row.state.session().is_none());

        // Duplicate delivery is ignored
        assert!(!row.deliver(token, Ok(image())));
    }

    #[test]
    fn test_reset_suppresses_late_result() {
        let (loader, rx) = loader();
        let mut row = MessageRow::new(0);
        row.bind(
            &Message::new("carol", "yo", 0).with_photo("https://example.com/c.png"),
            &loader,
        );
        let token = loaded_token(&rx);

        row.reset();
        assert!(matches!(rx.try_recv(), Ok(LoaderAction::Cancel(t)) if t == token));

        assert!(!row.deliver(token, Ok(image())));
        assert!(row.avatar().is_placeholder());
        assert!(row.author.is_empty());
        assert!(row.message().is_none());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let (loader, rx) = loader();
        let mut row = MessageRow::new(0);
        row.bind(
            &Message::new("dave", "x", 0).with_photo("https://example.com/d.png"),
            &loader,
        );
        let _ = loaded_token(&rx);

        row.reset();
        row.reset();

        assert!(matches!(rx.try_recv(), Ok(LoaderAction::Cancel(_))));
        assert!(rx.try_recv().is_err());
        assert!(row.avatar().is_placeholder());
    }

    #[test]
    fn test_rebind_never_shows_previous_avatar() {
        let (loader, rx) = loader();
        let mut row = MessageRow::new(1);

        row.bind(
            &Message::new("a", "first", 0).with_photo("https://example.com/a.png"),
            &loader,
        );
        let token_a = loaded_token(&rx);

        row.bind(
            &Message::new("b", "second", 0).with_photo("https://example.com/b.png"),
            &loader,
        );
        assert!(matches!(rx.try_recv(), Ok(LoaderAction::Cancel(t)) if t == token_a));
        let token_b = loaded_token(&rx);
        assert_ne!(token_a, token_b);

        assert!(!row.deliver(token_a, Ok(image())));
        assert!(row.avatar().is_placeholder());
        assert_eq!(row.author, "b");
        assert_eq!(row.body, "second");

        let img_b = image();
        assert!(row.deliver(token_b, Ok(Arc::clone(&img_b))));
        assert_eq!(row.avatar(), &Avatar::Image(img_b));
    }

    #[test]
    fn test_rebind_without_photo_clears_loaded_avatar() {
        let (loader, rx) = loader();
        let mut row = MessageRow::new(0);
        row.bind(
            &Message::new("a", "one", 0).with_photo("https://example.com/a.png"),
            &loader,
        );
        let token = loaded_token(&rx);
        row.deliver(token, Ok(image()));

        row.bind(&Message::new("b", "two", 0), &loader);
        assert!(row.avatar().is_placeholder());
        assert_eq!(row.author, "b");
    }

    #[test]
    fn test_load_error_keeps_placeholder() {
        let (loader, rx) = loader();
        let mut row = MessageRow::new(0);
        row.bind(
            &Message::new("eve", "boom", 0).with_photo("https://example.com/e.png"),
            &loader,
        );
        let token = loaded_token(&rx);

        assert!(!row.deliver(token, Err(LoadError::Decode("bad bytes".into()))));
        assert!(row.avatar().is_placeholder());
        assert!(row.state.session().is_none());
    }
}
