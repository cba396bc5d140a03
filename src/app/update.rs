//! Main update loop

use eframe::egui;
use std::time::Duration;

use super::ChatRowApp;
use crate::ui::row_view::render_row;

/// Header line, bubble padding and status dots around the avatar
const ROW_CHROME_HEIGHT: f32 = 40.0;

impl eframe::App for ChatRowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Loader results land on this thread only
        if self.process_events() {
            ctx.request_repaint();
        }

        // Keep polling for avatar results
        ctx.request_repaint_after(Duration::from_millis(100));

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Messages");
                ui.label(
                    egui::RichText::new(format!("{} messages", self.list.len()))
                        .color(self.theme.text_muted),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if self.theme.is_dark() { "Light" } else { "Dark" };
                    if ui.button(label).clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let row_height = self.settings.avatar_size + ROW_CHROME_HEIGHT;
            let total = self.list.len();

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .stick_to_bottom(true)
                .show_rows(ui, row_height, total, |ui, range| {
                    self.list.ensure_pool(range.len());
                    for index in range {
                        if let Some(row) = self.list.row_for(index) {
                            render_row(ui, row, self.settings.avatar_size, &self.theme);
                        }
                    }
                });
        });
    }
}
