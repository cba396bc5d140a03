//! Colours and small painted shapes for message rows.

use eframe::egui::{self, Color32};

#[derive(Clone, Debug)]
pub struct RowTheme {
    pub background: Color32,
    pub bubble: Color32,
    pub bubble_border: Color32,
    pub accent: Color32,
    pub link: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
}

impl RowTheme {
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(19, 19, 26),
            bubble: Color32::from_rgb(37, 37, 50),
            bubble_border: Color32::from_rgb(56, 56, 74),
            accent: Color32::from_rgb(88, 101, 242),
            link: Color32::from_rgb(0, 175, 244),
            text_primary: Color32::WHITE,
            text_muted: Color32::from_rgb(142, 146, 151),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(250, 250, 252),
            bubble: Color32::from_rgb(235, 237, 242),
            bubble_border: Color32::from_rgb(214, 217, 224),
            accent: Color32::from_rgb(88, 101, 242),
            link: Color32::from_rgb(0, 120, 212),
            text_primary: Color32::from_rgb(32, 34, 37),
            text_muted: Color32::from_rgb(116, 127, 141),
        }
    }

    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.background.r() < 128
    }
}

const AUTHOR_COLORS: [Color32; 12] = [
    Color32::from_rgb(231, 76, 60),
    Color32::from_rgb(46, 204, 113),
    Color32::from_rgb(52, 152, 219),
    Color32::from_rgb(155, 89, 182),
    Color32::from_rgb(241, 196, 15),
    Color32::from_rgb(230, 126, 34),
    Color32::from_rgb(26, 188, 156),
    Color32::from_rgb(236, 100, 166),
    Color32::from_rgb(41, 128, 185),
    Color32::from_rgb(39, 174, 96),
    Color32::from_rgb(211, 84, 0),
    Color32::from_rgb(102, 178, 255),
];

/// Stable colour for an author name (FNV-1a over the bytes)
pub fn author_color(name: &str) -> Color32 {
    let mut hash: u64 = 1469598103934665603u64;
    for b in name.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(1099511628211u64);
    }
    AUTHOR_COLORS[(hash as usize) % AUTHOR_COLORS.len()]
}

/// First letter of the name, uppercased, or `?`
pub fn initials(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// Placeholder avatar: coloured disc with the author's initial
pub fn paint_placeholder_avatar(painter: &egui::Painter, rect: egui::Rect, name: &str) {
    let radius = rect.width().min(rect.height()) / 2.0;

    painter.circle_filled(
        rect.center() + egui::vec2(0.0, 1.5),
        radius,
        Color32::from_black_alpha(30),
    );
    painter.circle_filled(rect.center(), radius, author_color(name));
    painter.circle_stroke(
        rect.center(),
        radius,
        egui::Stroke::new(1.5, Color32::from_white_alpha(15)),
    );
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials(name),
        egui::FontId::new(radius * 0.9, egui::FontFamily::Proportional),
        Color32::WHITE,
    );
}

/// Small triangle joining the bubble to the avatar side
pub fn paint_bubble_tail(painter: &egui::Painter, bubble: egui::Rect, theme: &RowTheme) {
    let top = bubble.left_top() + egui::vec2(0.0, 10.0);
    let points = vec![
        top,
        top + egui::vec2(-7.0, 5.0),
        top + egui::vec2(0.0, 10.0),
    ];
    painter.add(egui::Shape::convex_polygon(
        points,
        theme.bubble,
        egui::Stroke::NONE,
    ));
}

/// Three dots under the avatar: filled while the avatar is still loading
pub fn paint_status_dots(painter: &egui::Painter, center: egui::Pos2, loading: bool, theme: &RowTheme) {
    for i in -1..=1 {
        let pos = center + egui::vec2(i as f32 * 6.0, 0.0);
        if loading {
            painter.circle_filled(pos, 2.0, theme.accent);
        } else {
            painter.circle_stroke(pos, 2.0, egui::Stroke::new(1.0, theme.text_muted));
        }
    }
}

/// Apply the palette to egui visuals
pub fn apply_style(ctx: &egui::Context, theme: &RowTheme) {
    let mut visuals = if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.panel_fill = theme.background;
    visuals.hyperlink_color = theme.link;
    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_color_is_stable() {
        assert_eq!(author_color("alice"), author_color("alice"));
        let distinct: std::collections::HashSet<_> = ["alice", "bob", "carol", "dave", "eve"]
            .iter()
            .map(|n| author_color(n))
            .collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("alice"), "A");
        assert_eq!(initials("  émile"), "É");
        assert_eq!(initials(""), "?");
    }

    #[test]
    fn test_theme_by_name() {
        assert!(RowTheme::by_name("dark").is_dark());
        assert!(!RowTheme::by_name("light").is_dark());
        assert!(RowTheme::by_name("unknown").is_dark());
    }
}
