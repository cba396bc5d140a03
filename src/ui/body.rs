//! Message body text with clickable links.

use eframe::egui;
use once_cell::sync::Lazy;
use regex::Regex;

use super::theme::RowTheme;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s]+").expect("URL regex pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BodySpan<'a> {
    Text(&'a str),
    Link(&'a str),
}

/// Split body text into plain runs and URLs. Trailing sentence punctuation is
/// left out of the link.
pub(crate) fn split_links(text: &str) -> Vec<BodySpan<'_>> {
    let mut spans = Vec::new();
    let mut last = 0;

    for m in URL_RE.find_iter(text) {
        let url = m.as_str().trim_end_matches(['.', ',', ')', '!', '?', ';', ':']);
        if url.ends_with("://") {
            continue;
        }
        if m.start() > last {
            spans.push(BodySpan::Text(&text[last..m.start()]));
        }
        spans.push(BodySpan::Link(url));
        last = m.start() + url.len();
    }

    if last < text.len() {
        spans.push(BodySpan::Text(&text[last..]));
    }
    spans
}

pub(crate) fn render_body_text(ui: &mut egui::Ui, text: &str, theme: &RowTheme) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;

        for span in split_links(text) {
            match span {
                BodySpan::Text(t) => {
                    ui.label(egui::RichText::new(t).size(14.0).color(theme.text_primary));
                }
                BodySpan::Link(url) => {
                    ui.hyperlink_to(egui::RichText::new(url).size(14.0).color(theme.link), url);
                }
            }
        }
    });
}
