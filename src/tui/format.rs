//! Cell formatting utilities for TUI display
//!
//! Widths are measured in terminal columns with `unicode-width`, so CJK and
//! other wide characters line up.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::project::Cell;
use crate::value::Value;

/// Marker drawn after drill-down affordances
pub const DRILL_MARKER: &str = "\u{25b8}";

/// Format a cell as display text.
///
/// Text cells render the stringified scalar, drill-down cells render
/// [`drill_label`], empty cells render nothing.
pub fn format_cell(cell: Cell<'_>) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Text(value) => value.to_string(),
        Cell::DrillDown(value) => drill_label(value),
    }
}

/// Label for a drill-down affordance
///
/// # Example
/// ```
/// use drillgrid::tui::drill_label;
/// use drillgrid::Value;
///
/// assert_eq!(drill_label(&Value::from(vec![1, 2, 3])), "[3 items] \u{25b8}");
/// ```
pub fn drill_label(value: &Value) -> String {
    match value {
        Value::List(items) => format!("[{}] {DRILL_MARKER}", plural(items.len(), "item")),
        Value::Map(map) => format!("{{{}}} {DRILL_MARKER}", plural(map.len(), "key")),
        Value::Record(record) => format!("<{}> {DRILL_MARKER}", record.type_name()),
        // scalars can share a drill-down column with complex values
        other => other.to_string(),
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Truncate a string to fit within `max_width` columns
///
/// Adds ".." when truncated and there is room for it.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width < 3 {
        return take_width(s, max_width);
    }

    let mut result = take_width(s, max_width - 2);
    result.push_str("..");
    result
}

fn take_width(s: &str, max_width: usize) -> String {
    let mut used = 0;
    s.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= max_width
        })
        .collect()
}

/// Display width of a string in terminal columns
#[inline]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate or right-pad a string to exactly `width` columns
pub fn fit_to_width(s: &str, width: usize) -> String {
    let mut out = truncate_string(s, width);
    let used = display_width(&out);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    out
}
