//! Session adapter for TUI rendering
//!
//! [`GridAdapter`] gives widgets uniform, read-only access to a
//! [`Session`]'s visible rows as display text. Positions passed to it are
//! visible-row positions; the adapter maps them back to dataset rows.

use unicode_width::UnicodeWidthStr;

use crate::project::Dataset;
use crate::session::Session;

use super::format::format_cell;

/// Widest a column may grow before truncation
pub const MAX_COLUMN_WIDTH: u16 = 50;
/// Narrowest column width
pub const MIN_COLUMN_WIDTH: u16 = 3;

/// Read-only view of a session's filtered grid
#[derive(Debug, Clone, Copy)]
pub struct GridAdapter<'a> {
    session: &'a Session,
}

impl<'a> GridAdapter<'a> {
    /// Wrap a session
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Underlying session
    #[inline]
    pub fn session(&self) -> &'a Session {
        self.session
    }

    #[inline]
    fn dataset(&self) -> &'a Dataset {
        self.session.dataset()
    }

    /// Number of rows passing the filter
    #[inline]
    pub fn row_count(&self) -> usize {
        self.session.visible_rows().len()
    }

    /// Number of columns
    #[inline]
    pub fn column_count(&self) -> usize {
        self.dataset().column_count()
    }

    /// Check if no rows pass the filter
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Column names in display order
    pub fn headers(&self) -> Vec<&'a str> {
        self.dataset().column_names()
    }

    /// Check if a column renders drill-down affordances
    pub fn is_drill_down(&self, col: usize) -> bool {
        self.dataset()
            .column(col)
            .is_some_and(|column| column.is_drill_down())
    }

    /// Dataset row behind a visible position
    #[inline]
    pub fn dataset_row(&self, visible_row: usize) -> Option<usize> {
        self.session.visible_rows().get(visible_row).copied()
    }

    /// Display text of a cell
    ///
    /// Returns `None` when the position is out of range.
    pub fn cell_text(&self, visible_row: usize, col: usize) -> Option<String> {
        let row = self.dataset_row(visible_row)?;
        self.dataset().cell(row, col).ok().map(format_cell)
    }

    /// Display text of every cell in a visible row
    pub fn row_texts(&self, visible_row: usize) -> Vec<String> {
        (0..self.column_count())
            .map(|col| self.cell_text(visible_row, col).unwrap_or_default())
            .collect()
    }

    /// Compute column widths that fit in `max_width`
    ///
    /// Headers and up to `sample_rows` visible rows are measured; widths are
    /// scaled down proportionally when they do not fit, never below
    /// [`MIN_COLUMN_WIDTH`].
    pub fn calculate_column_widths(&self, max_width: u16, sample_rows: usize) -> Vec<u16> {
        let column_count = self.column_count();
        if column_count == 0 {
            return Vec::new();
        }

        let mut widths: Vec<u16> = self.headers().into_iter().map(clamped_width).collect();

        for row in 0..sample_rows.min(self.row_count()) {
            for (col, text) in self.row_texts(row).iter().enumerate() {
                if let Some(w) = widths.get_mut(col) {
                    *w = (*w).max(clamped_width(text));
                }
            }
        }

        for w in &mut widths {
            *w = (*w).max(MIN_COLUMN_WIDTH);
        }

        let separators = u16::try_from(column_count - 1).unwrap_or(u16::MAX);
        let available = max_width.saturating_sub(separators);
        let total: u32 = widths.iter().map(|&w| u32::from(w)).sum();
        if total > u32::from(available) && available > 0 {
            let scale = f64::from(available) / f64::from(total);
            for w in &mut widths {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let scaled = (f64::from(*w) * scale) as u16;
                *w = scaled.max(MIN_COLUMN_WIDTH);
            }
        }

        widths
    }
}

fn clamped_width(text: &str) -> u16 {
    let width = UnicodeWidthStr::width(text).min(usize::from(MAX_COLUMN_WIDTH));
    u16::try_from(width).unwrap_or(MAX_COLUMN_WIDTH)
}
