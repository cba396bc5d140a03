//! egui rendering for message rows.
//!
//! - `row_view`: avatar, header and bubble for one bound row
//! - `body`: message text with link detection
//! - `theme`: palettes and the small painted shapes rows use

mod body;
pub mod row_view;
pub mod theme;

pub use row_view::render_row;
pub use theme::RowTheme;
