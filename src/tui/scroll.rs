//! Scroll state management for TUI widgets
//!
//! Provides bounded scroll handling with page-based navigation. Row
//! positions are indices into the visible (filtered) row list, not into the
//! dataset.

/// Scroll and selection state over a list of rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// First visible row
    offset: usize,
    /// Total number of rows
    total_rows: usize,
    /// Number of rows in the viewport
    visible_rows: usize,
    /// Selected row
    selected: Option<usize>,
}

impl ScrollState {
    /// Create a scroll state, selecting the first row if there is one
    pub fn new(total_rows: usize, visible_rows: usize) -> Self {
        Self {
            offset: 0,
            total_rows,
            visible_rows,
            selected: (total_rows > 0).then_some(0),
        }
    }

    /// Current scroll offset
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Set scroll offset with bounds clamping
    pub fn set_offset(&mut self, offset: usize) {
        self.offset = self.clamp_offset(offset);
    }

    /// Total row count
    #[inline]
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Update total row count, e.g. after the filter changed
    pub fn set_total_rows(&mut self, total: usize) {
        self.total_rows = total;
        self.offset = self.clamp_offset(self.offset);
        self.selected = match self.selected {
            _ if total == 0 => None,
            Some(sel) if sel >= total => Some(total - 1),
            None => Some(0),
            other => other,
        };
        if let Some(sel) = self.selected {
            self.ensure_visible(sel);
        }
    }

    /// Viewport height in rows
    #[inline]
    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// Update viewport height
    pub fn set_visible_rows(&mut self, visible: usize) {
        self.visible_rows = visible;
        self.offset = self.clamp_offset(self.offset);
        if let Some(sel) = self.selected {
            self.ensure_visible(sel);
        }
    }

    /// Selected row
    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select a row, clamped to the last row
    pub fn set_selected(&mut self, row: Option<usize>) {
        self.selected = match row {
            Some(r) if r >= self.total_rows => self.total_rows.checked_sub(1),
            other => other,
        };
        if let Some(sel) = self.selected {
            self.ensure_visible(sel);
        }
    }

    /// Select the next row
    pub fn select_next(&mut self) {
        let next = match self.selected {
            Some(sel) => Some((sel + 1).min(self.total_rows.saturating_sub(1))),
            None => (self.total_rows > 0).then_some(0),
        };
        self.set_selected(next);
    }

    /// Select the previous row
    pub fn select_prev(&mut self) {
        let prev = match self.selected {
            Some(sel) => Some(sel.saturating_sub(1)),
            None => (self.total_rows > 0).then_some(0),
        };
        self.set_selected(prev);
    }

    /// Move the selection down one page
    pub fn page_down(&mut self) {
        let page = self.visible_rows.max(1);
        let target = self.selected.unwrap_or(0).saturating_add(page);
        self.offset = self.clamp_offset(self.offset.saturating_add(page));
        self.set_selected(Some(target));
    }

    /// Move the selection up one page
    pub fn page_up(&mut self) {
        let page = self.visible_rows.max(1);
        let target = self.selected.unwrap_or(0).saturating_sub(page);
        self.offset = self.offset.saturating_sub(page);
        self.set_selected(Some(target));
    }

    /// Jump to the first row
    pub fn home(&mut self) {
        self.offset = 0;
        self.set_selected(Some(0));
    }

    /// Jump to the last row
    pub fn end(&mut self) {
        self.offset = self.max_offset();
        self.set_selected(self.total_rows.checked_sub(1));
    }

    /// Scroll so that `row` is inside the viewport
    pub fn ensure_visible(&mut self, row: usize) {
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + self.visible_rows {
            self.offset = row.saturating_sub(self.visible_rows.saturating_sub(1));
        }
        self.offset = self.clamp_offset(self.offset);
    }

    /// Check if content exceeds the viewport
    pub fn needs_scrollbar(&self) -> bool {
        self.total_rows > self.visible_rows
    }

    /// Range of rows inside the viewport
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let end = (self.offset + self.visible_rows).min(self.total_rows);
        self.offset.min(end)..end
    }

    fn max_offset(&self) -> usize {
        self.total_rows.saturating_sub(self.visible_rows)
    }

    fn clamp_offset(&self, offset: usize) -> usize {
        offset.min(self.max_offset())
    }
}
