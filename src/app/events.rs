//! Event processing from the loader

use super::ChatRowApp;

impl ChatRowApp {
    /// Hand every finished load to its row. Returns true if anything changed.
    pub fn process_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.event_rx.try_recv() {
            changed |= self.list.handle_event(event);
        }
        changed
    }
}
