//! Live text filtering
//!
//! Case-insensitive substring search across every stringified property value
//! of a row. The visible set is always recomputed from scratch.

use crate::project::Dataset;
use crate::value::{Properties, Value};

/// Check whether `row` contains `needle`.
///
/// `needle` must already be lowercase. Mapping rows search their values
/// (never their keys), record rows search every property, not only the
/// displayed columns. A bare scalar row is compared by its own text and a
/// list row by its elements. Null values never match.
pub fn row_matches(row: &Value, needle: &str) -> bool {
    match row {
        Value::Null => false,
        Value::Record(_) | Value::Map(_) => row
            .property_values()
            .into_iter()
            .any(|value| value_matches(value, needle)),
        Value::List(items) => items.iter().any(|value| value_matches(value, needle)),
        scalar => value_matches(scalar, needle),
    }
}

fn value_matches(value: &Value, needle: &str) -> bool {
    if value.is_null() {
        return false;
    }
    value.to_string().to_lowercase().contains(needle)
}

/// Indices of the rows of `dataset` matching `pattern`.
///
/// An empty pattern matches every row.
pub fn filter_rows(dataset: &Dataset, pattern: &str) -> Vec<usize> {
    if pattern.is_empty() {
        return (0..dataset.row_count()).collect();
    }
    let needle = pattern.to_lowercase();

    dataset
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| row_matches(row, &needle))
        .map(|(i, _)| i)
        .collect()
}

/// Current filter pattern and the rows it leaves visible
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pattern: String,
    visible: Vec<usize>,
    total: usize,
}

impl FilterState {
    /// Unfiltered state showing every row of `dataset`
    pub fn new(dataset: &Dataset) -> Self {
        Self {
            pattern: String::new(),
            visible: (0..dataset.row_count()).collect(),
            total: dataset.row_count(),
        }
    }

    /// Replace the pattern and recompute the visible rows
    pub fn apply(&mut self, dataset: &Dataset, pattern: &str) -> &[usize] {
        self.pattern = pattern.to_string();
        self.visible = filter_rows(dataset, pattern);
        self.total = dataset.row_count();
        &self.visible
    }

    /// Clear the pattern, making every row visible
    pub fn clear(&mut self, dataset: &Dataset) -> &[usize] {
        self.apply(dataset, "")
    }

    /// Active pattern, empty when cleared
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Check if a non-empty pattern is active
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.pattern.is_empty()
    }

    /// Visible row indices, in dataset order
    #[inline]
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    /// Number of visible rows
    #[inline]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Status line for the results counter
    pub fn status(&self) -> String {
        if self.is_active() {
            format!("Showing {} of {}", self.visible.len(), self.total)
        } else {
            format!("Total Items: {}", self.total)
        }
    }
}
