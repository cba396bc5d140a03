//! Painting a bound `MessageRow`.

use eframe::egui::{self, Color32};

use crate::loader::DecodedImage;
use crate::row::{Avatar, MessageRow};

use super::body::render_body_text;
use super::theme::{self, RowTheme};

fn to_color_image(image: &DecodedImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [image.width as usize, image.height as usize],
        &image.rgba,
    )
}

/// Upload the row's decoded avatar once and reuse the texture afterwards
fn avatar_texture(ctx: &egui::Context, row: &mut MessageRow) -> Option<egui::TextureHandle> {
    let Avatar::Image(image) = &row.state.avatar else {
        return None;
    };
    if row.texture.is_none() {
        row.texture = Some(ctx.load_texture(
            format!("avatar-row-{}", row.id()),
            to_color_image(image),
            egui::TextureOptions::LINEAR,
        ));
    }
    row.texture.clone()
}

fn render_avatar(ui: &mut egui::Ui, row: &mut MessageRow, size: f32, theme: &RowTheme) {
    let loading = row.state.session().is_some();

    ui.vertical(|ui| {
        match avatar_texture(ui.ctx(), row) {
            Some(texture) => {
                ui.add(
                    egui::Image::from_texture(&texture)
                        .fit_to_exact_size(egui::vec2(size, size))
                        .corner_radius(size / 2.0),
                );
            }
            None => {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
                theme::paint_placeholder_avatar(ui.painter(), rect, &row.author);
            }
        }

        let (dots, _) = ui.allocate_exact_size(egui::vec2(size, 8.0), egui::Sense::hover());
        theme::paint_status_dots(ui.painter(), dots.center(), loading, theme);
    });
}

/// Render one row: avatar, author + timestamp header, body bubble
pub fn render_row(ui: &mut egui::Ui, row: &mut MessageRow, avatar_size: f32, theme: &RowTheme) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.add_space(12.0);
        render_avatar(ui, row, avatar_size, theme);
        ui.add_space(12.0);

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&row.author)
                        .size(14.0)
                        .strong()
                        .color(theme::author_color(&row.author)),
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(&row.timestamp)
                        .size(11.0)
                        .color(theme.text_muted),
                );
            });

            ui.add_space(2.0);

            let bubble = egui::Frame::new()
                .fill(theme.bubble)
                .stroke(egui::Stroke::new(1.0, theme.bubble_border))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 6))
                .show(ui, |ui| {
                    ui.set_max_width(ui.available_width() - 24.0);
                    render_body_text(ui, &row.body, theme);
                });
            theme::paint_bubble_tail(ui.painter(), bubble.response.rect, theme);
        });
    });

    // Hairline separator between rows
    let rect = ui.available_rect_before_wrap();
    ui.painter().hline(
        rect.x_range(),
        rect.top() + 3.0,
        egui::Stroke::new(1.0, Color32::from_white_alpha(6)),
    );
    ui.add_space(6.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_image_dimensions() {
        let image = DecodedImage {
            width: 2,
            height: 1,
            rgba: vec![255, 0, 0, 255, 0, 255, 0, 255],
        };
        let color = to_color_image(&image);
        assert_eq!(color.size, [2, 1]);
        assert_eq!(color.pixels[1], Color32::from_rgb(0, 255, 0));
    }
}
