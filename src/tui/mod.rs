//! Terminal front end
//!
//! Widgets that turn a [`Session`](crate::Session) into lines of text. They
//! hold no terminal handle; the interactive loop in the CLI draws what they
//! render.
//!
//! - `GridAdapter` - display text and column widths over a session's visible rows
//! - `GridViewer` - scrollable grid with row and column cursor
//! - `SummaryPanel` - per-type summary table
//!
//! # Example
//!
//! ```
//! use drillgrid::tui::GridViewer;
//! use drillgrid::{Record, Session, Theme, Value, ViewMode};
//!
//! let rows: Vec<Value> = vec![
//!     Record::new("Host").with_property("Name", "alpha").into(),
//!     Record::new("Host").with_property("Name", "beta").into(),
//! ];
//! let mut session = Session::for_value(rows.into(), "Hosts", Theme::dark(), ViewMode::Default);
//! session.set_filter("bet");
//!
//! let viewer = GridViewer::new(&session);
//! for line in viewer.render_lines(&session) {
//!     println!("{line}");
//! }
//! ```

mod adapter;
mod format;
mod scroll;
mod summary_panel;
mod viewer;

pub use adapter::{GridAdapter, MAX_COLUMN_WIDTH, MIN_COLUMN_WIDTH};
pub use format::{display_width, drill_label, fit_to_width, format_cell, truncate_string, DRILL_MARKER};
pub use scroll::ScrollState;
pub use summary_panel::SummaryPanel;
pub use viewer::GridViewer;

#[cfg(feature = "cli")]
impl From<crate::theme::Rgb> for crossterm::style::Color {
    fn from(rgb: crate::theme::Rgb) -> Self {
        Self::Rgb {
            r: rgb.0,
            g: rgb.1,
            b: rgb.2,
        }
    }
}
