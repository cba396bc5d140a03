//! Core ChatRowApp struct definition and initialization

use crossbeam_channel::Receiver;

use crate::config::{save_settings, Settings};
use crate::list::MessageList;
use crate::loader::LoaderHandle;
use crate::message::Message;
use crate::protocol::LoaderEvent;
use crate::ui::theme::{self, RowTheme};

pub struct ChatRowApp {
    pub list: MessageList,

    // Loader thread handle and its result channel
    pub loader: LoaderHandle,
    pub event_rx: Receiver<LoaderEvent>,

    pub settings: Settings,
    pub theme: RowTheme,
}

impl ChatRowApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        messages: Vec<Message>,
        loader: LoaderHandle,
        event_rx: Receiver<LoaderEvent>,
    ) -> Self {
        let theme = RowTheme::by_name(&settings.theme);
        theme::apply_style(&cc.egui_ctx, &theme);

        Self {
            list: MessageList::new(messages, loader.clone()),
            loader,
            event_rx,
            settings,
            theme,
        }
    }

    pub(super) fn toggle_theme(&mut self, ctx: &eframe::egui::Context) {
        self.settings.theme = if self.theme.is_dark() { "light" } else { "dark" }.to_string();
        self.theme = RowTheme::by_name(&self.settings.theme);
        theme::apply_style(ctx, &self.theme);
    }
}

impl Drop for ChatRowApp {
    fn drop(&mut self) {
        self.loader.shutdown();
        if let Err(e) = save_settings(&self.settings) {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }
}
