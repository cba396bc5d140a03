//! Host list that recycles a small pool of rows across the message feed.

use crate::loader::LoaderHandle;
use crate::message::Message;
use crate::protocol::LoaderEvent;
use crate::row::MessageRow;

/// Rows kept alive even when fewer are visible
const MIN_POOL_SIZE: usize = 8;

pub struct MessageList {
    messages: Vec<Message>,
    rows: Vec<MessageRow>,
    /// Message index each pooled row currently shows
    bound: Vec<Option<usize>>,
    loader: LoaderHandle,
}

impl MessageList {
    pub fn new(messages: Vec<Message>, loader: LoaderHandle) -> Self {
        let mut list = Self {
            messages,
            rows: Vec::new(),
            bound: Vec::new(),
            loader,
        };
        list.ensure_pool(MIN_POOL_SIZE);
        list
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn pool_size(&self) -> usize {
        self.rows.len()
    }

    /// Make sure `visible` consecutive messages map to distinct rows
    pub fn ensure_pool(&mut self, visible: usize) {
        let wanted = visible.max(MIN_POOL_SIZE).next_power_of_two();
        while self.rows.len() < wanted {
            self.rows.push(MessageRow::new(self.rows.len()));
            self.bound.push(None);
        }
    }

    /// Row showing message `index`, rebinding a recycled row if needed
    pub fn row_for(&mut self, index: usize) -> Option<&mut MessageRow> {
        let message = self.messages.get(index)?;
        let slot = index % self.rows.len();
        let row = &mut self.rows[slot];

        if self.bound[slot] != Some(index) {
            row.reset();
            row.bind(message, &self.loader);
            self.bound[slot] = Some(index);
        }
        Some(row)
    }

    /// Route a loader event to the row that started the session.
    /// Returns true if a row changed.
    pub fn handle_event(&mut self, event: LoaderEvent) -> bool {
        match event {
            LoaderEvent::Finished { token, result } => match self.rows.get_mut(token.row) {
                Some(row) => row.deliver(token, result),
                None => false,
            },
        }
    }
}
