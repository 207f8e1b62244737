//! Grid viewer widget for TUI display
//!
//! Provides a scrollable, filter-aware table view of a [`Session`] with a
//! row and column cursor. The viewer holds only cursor and layout state; the
//! session is passed in on every call so filter changes are always seen.

use crate::session::Session;

use super::adapter::GridAdapter;
use super::format::fit_to_width;
use super::scroll::ScrollState;

/// Rows measured when sizing columns
const WIDTH_SAMPLE_ROWS: usize = 50;
/// Separator between columns
const COLUMN_SEPARATOR: &str = " ";

/// A scrollable table view over a session
///
/// # Example
///
/// ```
/// use drillgrid::tui::GridViewer;
/// use drillgrid::{Session, Theme, Value, ViewMode};
///
/// let ports = Value::from(vec![1, 2, 3]);
/// let session = Session::for_value(ports, "Ports", Theme::dark(), ViewMode::Default);
/// let mut viewer = GridViewer::with_dimensions(&session, 40, 10);
/// viewer.select_next();
///
/// let lines = viewer.render_lines(&session);
/// assert!(lines[0].starts_with("Index"));
/// assert_eq!(viewer.selected_cell(&session), Some((1, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct GridViewer {
    scroll: ScrollState,
    column: usize,
    column_widths: Vec<u16>,
    display_width: u16,
    visible_rows: u16,
}

impl GridViewer {
    /// Create a viewer with default dimensions
    pub fn new(session: &Session) -> Self {
        Self::with_dimensions(session, 80, 24)
    }

    /// Create a viewer with specific dimensions
    ///
    /// `height` includes the header line.
    pub fn with_dimensions(session: &Session, width: u16, height: u16) -> Self {
        let adapter = GridAdapter::new(session);
        let visible_rows = height.saturating_sub(1);
        Self {
            scroll: ScrollState::new(adapter.row_count(), usize::from(visible_rows)),
            column: 0,
            column_widths: adapter.calculate_column_widths(width, WIDTH_SAMPLE_ROWS),
            display_width: width,
            visible_rows,
        }
    }

    /// Update display dimensions
    pub fn set_dimensions(&mut self, session: &Session, width: u16, height: u16) {
        self.display_width = width;
        self.visible_rows = height.saturating_sub(1);
        self.scroll.set_visible_rows(usize::from(self.visible_rows));
        self.column_widths =
            GridAdapter::new(session).calculate_column_widths(width, WIDTH_SAMPLE_ROWS);
    }

    /// Re-read row count and column widths after the session's filter changed
    pub fn sync(&mut self, session: &Session) {
        let adapter = GridAdapter::new(session);
        self.scroll.set_total_rows(adapter.row_count());
        self.column_widths = adapter.calculate_column_widths(self.display_width, WIDTH_SAMPLE_ROWS);
        self.column = self.column.min(adapter.column_count().saturating_sub(1));
    }

    /// Scroll offset into the visible rows
    #[inline]
    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset()
    }

    /// Viewport height in data rows
    #[inline]
    pub fn visible_row_count(&self) -> u16 {
        self.visible_rows
    }

    /// Number of rows passing the filter
    #[inline]
    pub fn row_count(&self) -> usize {
        self.scroll.total_rows()
    }

    /// Selected visible row
    #[inline]
    pub fn selected_row(&self) -> Option<usize> {
        self.scroll.selected()
    }

    /// Selected column
    #[inline]
    pub fn selected_column(&self) -> usize {
        self.column
    }

    /// Column widths in terminal columns
    #[inline]
    pub fn column_widths(&self) -> &[u16] {
        &self.column_widths
    }

    /// Select next row
    pub fn select_next(&mut self) {
        self.scroll.select_next();
    }

    /// Select previous row
    pub fn select_prev(&mut self) {
        self.scroll.select_prev();
    }

    /// Move one page down
    pub fn page_down(&mut self) {
        self.scroll.page_down();
    }

    /// Move one page up
    pub fn page_up(&mut self) {
        self.scroll.page_up();
    }

    /// Jump to the first row
    pub fn home(&mut self) {
        self.scroll.home();
    }

    /// Jump to the last row
    pub fn end(&mut self) {
        self.scroll.end();
    }

    /// Move the column cursor right
    pub fn next_column(&mut self) {
        if self.column + 1 < self.column_widths.len() {
            self.column += 1;
        }
    }

    /// Move the column cursor left
    pub fn prev_column(&mut self) {
        self.column = self.column.saturating_sub(1);
    }

    /// Dataset coordinates of the selected cell, as `(row, column)`
    pub fn selected_cell(&self, session: &Session) -> Option<(usize, usize)> {
        let adapter = GridAdapter::new(session);
        let row = adapter.dataset_row(self.scroll.selected()?)?;
        (self.column < adapter.column_count()).then_some((row, self.column))
    }

    /// Line index (header is 0) of the selected row within [`render_lines`]
    ///
    /// [`render_lines`]: Self::render_lines
    pub fn selected_line(&self) -> Option<usize> {
        let selected = self.scroll.selected()?;
        self.scroll
            .visible_range()
            .contains(&selected)
            .then(|| selected - self.scroll.offset() + 1)
    }

    /// Display-column span `(start, width)` of a column within a rendered line
    pub fn column_span(&self, col: usize) -> Option<(usize, usize)> {
        let width = usize::from(*self.column_widths.get(col)?);
        let start: usize = self.column_widths[..col]
            .iter()
            .map(|&w| usize::from(w) + COLUMN_SEPARATOR.len())
            .sum();
        Some((start, width))
    }

    /// Header line
    pub fn render_header_line(&self, session: &Session) -> String {
        let headers = GridAdapter::new(session).headers();
        self.join_cells(headers.iter().copied())
    }

    /// A data line for a visible row
    pub fn render_row_line(&self, session: &Session, visible_row: usize) -> Option<String> {
        let adapter = GridAdapter::new(session);
        adapter.dataset_row(visible_row)?;
        let texts = adapter.row_texts(visible_row);
        Some(self.join_cells(texts.iter().map(String::as_str)))
    }

    fn join_cells<'s>(&self, cells: impl Iterator<Item = &'s str>) -> String {
        cells
            .zip(&self.column_widths)
            .map(|(text, &width)| fit_to_width(text, usize::from(width)))
            .collect::<Vec<_>>()
            .join(COLUMN_SEPARATOR)
    }

    /// Header followed by the rows inside the viewport
    pub fn render_lines(&self, session: &Session) -> Vec<String> {
        let mut lines = Vec::with_capacity(usize::from(self.visible_rows) + 1);
        lines.push(self.render_header_line(session));
        lines.extend(
            self.scroll
                .visible_range()
                .filter_map(|row| self.render_row_line(session, row)),
        );
        lines
    }
}
