//! Rendering session
//!
//! A [`Session`] is the explicit context for one grid: its dataset, theme,
//! filter state, results counter and optional summary. Nothing is shared
//! between sessions.

use tracing::{info, warn};

use crate::classify::ValueKind;
use crate::columns::ViewMode;
use crate::config::ViewOptions;
use crate::error::{Error, Result};
use crate::filter::FilterState;
use crate::project::{Cell, Dataset};
use crate::summary::{summarize, Summary};
use crate::theme::{resolve_theme, Theme};
use crate::value::Value;

/// One independent grid: dataset, title, theme and filter state
#[derive(Debug, Clone)]
pub struct Session {
    title: String,
    theme: Theme,
    dataset: Dataset,
    filter: FilterState,
    summary: Option<Summary>,
    status: String,
}

impl Session {
    /// Open the top-level session for `values`.
    ///
    /// The theme is resolved first; an unknown name aborts with an error.
    /// Empty input is not a failure: an advisory is logged and `Ok(None)`
    /// returned. `source` is the invocation echo appended to the title.
    pub fn open(
        values: Vec<Value>,
        options: &ViewOptions,
        source: Option<&str>,
    ) -> Result<Option<Self>> {
        let theme = resolve_theme(&options.theme)?;

        if values.is_empty() {
            warn!("no input values, nothing to display");
            return Ok(None);
        }

        let title = options.window_title(source);
        Ok(Some(Self::new(
            Dataset::project(values, options.view_mode),
            title,
            theme,
        )))
    }

    /// Open a session over a single value, unrolling lists
    pub fn for_value(value: Value, title: impl Into<String>, theme: Theme, mode: ViewMode) -> Self {
        Self::new(Dataset::project_value(value, mode), title, theme)
    }

    /// Wrap an already projected dataset
    pub fn new(dataset: Dataset, title: impl Into<String>, theme: Theme) -> Self {
        let filter = FilterState::new(&dataset);
        let status = filter.status();
        let title = title.into();

        info!(
            title = %title,
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            "session opened"
        );

        Self {
            title,
            theme,
            dataset,
            filter,
            summary: None,
            status,
        }
    }

    /// Session title
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Session theme
    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Projected dataset
    #[inline]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Filter state
    #[inline]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Results counter text
    #[inline]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Visible row indices under the current filter
    #[inline]
    pub fn visible_rows(&self) -> &[usize] {
        self.filter.visible()
    }

    /// Apply a filter pattern.
    ///
    /// Recomputes the visible rows and the status line, and refreshes the
    /// attached summary, which always covers the full dataset.
    pub fn set_filter(&mut self, pattern: &str) -> &[usize] {
        self.filter.apply(&self.dataset, pattern);
        self.status = self.filter.status();
        if self.summary.is_some() {
            self.summary = Some(self.compute_summary());
        }
        self.filter.visible()
    }

    /// Clear the filter
    pub fn clear_filter(&mut self) -> &[usize] {
        self.set_filter("")
    }

    /// Attach a summary view and compute it
    pub fn attach_summary(&mut self) -> &Summary {
        let summary = self.compute_summary();
        self.summary.insert(summary)
    }

    /// Detach the summary view
    pub fn detach_summary(&mut self) {
        self.summary = None;
    }

    /// Attached summary, if any
    #[inline]
    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    fn compute_summary(&self) -> Summary {
        summarize(self.dataset.source_values())
    }

    /// The raw value behind a drill-down cell.
    ///
    /// `row` indexes the dataset, not the visible subset. Returns `Ok(None)`
    /// for text columns, for empty cells and for scalars that landed in a
    /// drill-down column.
    pub fn drill_value(&self, row: usize, col: usize) -> Result<Option<&Value>> {
        match self.dataset.cell(row, col)? {
            Cell::DrillDown(value) if value.kind() == ValueKind::Complex => Ok(Some(value)),
            Cell::DrillDown(_) | Cell::Text(_) | Cell::Empty => Ok(None),
        }
    }

    /// Name of a column, for titling drill-down sessions
    pub fn column_name(&self, col: usize) -> Result<&str> {
        self.dataset
            .column(col)
            .map(|c| c.name())
            .ok_or(Error::ColumnOutOfBounds {
                index: col,
                total: self.dataset.column_count(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Record;

    fn machines() -> Vec<Value> {
        vec![
            Record::new("Server")
                .with_property("Name", "web01")
                .with_property("Disks", vec!["sda", "sdb"])
                .into(),
            Record::new("Server")
                .with_property("Name", "web02")
                .with_property("Disks", Value::Null)
                .into(),
            Record::new("Service")
                .with_property("Name", "nginx")
                .with_property("Disks", Value::Null)
                .into(),
        ]
    }

    fn open() -> Session {
        Session::open(machines(), &ViewOptions::default(), Some("machines.json"))
            .unwrap()
            .unwrap()
    }

    #[test]
    fn f001_open_titles_with_source() {
        assert_eq!(open().title(), "drillgrid - machines.json");
    }

    #[test]
    fn f002_empty_input_is_advisory() {
        let session = Session::open(Vec::new(), &ViewOptions::default(), None).unwrap();
        assert!(session.is_none(), "FALSIFIED: empty input opens nothing");
    }

    #[test]
    fn f003_unknown_theme_aborts() {
        let options = ViewOptions {
            theme: "Neon".to_string(),
            ..ViewOptions::default()
        };
        let result = Session::open(machines(), &options, None);
        assert!(matches!(result, Err(Error::UnknownTheme { .. })));
    }

    #[test]
    fn f004_unknown_theme_aborts_even_when_empty() {
        let options = ViewOptions {
            theme: "Neon".to_string(),
            ..ViewOptions::default()
        };
        assert!(Session::open(Vec::new(), &options, None).is_err());
    }

    #[test]
    fn f005_filter_updates_status() {
        let mut session = open();
        assert_eq!(session.status(), "Total Items: 3");
        assert_eq!(session.set_filter("WEB"), &[0, 1]);
        assert_eq!(session.status(), "Showing 2 of 3");
        session.clear_filter();
        assert_eq!(session.status(), "Total Items: 3");
    }

    #[test]
    fn f006_summary_ignores_filter() {
        let mut session = open();
        session.attach_summary();
        session.set_filter("nginx");
        let summary = session.summary().unwrap();
        assert_eq!(summary.total(), 3, "FALSIFIED: summary covers full dataset");
        assert_eq!(summary.get("Server").unwrap().count, 2);
    }

    #[test]
    fn f007_summary_detached_by_default() {
        let mut session = open();
        assert!(session.summary().is_none());
        session.set_filter("x");
        assert!(session.summary().is_none());
        session.attach_summary();
        session.detach_summary();
        assert!(session.summary().is_none());
    }

    #[test]
    fn f008_drill_value() {
        let session = open();
        let disks = session.dataset().column_index("Disks").unwrap();
        assert_eq!(
            session.drill_value(0, disks).unwrap(),
            Some(&Value::from(vec!["sda", "sdb"]))
        );
        assert_eq!(session.drill_value(1, disks).unwrap(), None);
        assert_eq!(session.drill_value(0, 0).unwrap(), None);
        assert!(session.drill_value(10, 0).is_err());
    }

    #[test]
    fn f009_drill_value_skips_inline_scalar() {
        let rows: Vec<Value> = vec![
            Record::new("App").with_property("Config", vec![1, 2]).into(),
            Record::new("App").with_property("Config", "inline").into(),
        ];
        let session = Session::for_value(rows.into(), "Apps", Theme::dark(), ViewMode::Default);
        assert!(session.dataset().column(0).unwrap().is_drill_down());
        assert!(session.drill_value(0, 0).unwrap().is_some());
        assert_eq!(
            session.drill_value(1, 0).unwrap(),
            None,
            "FALSIFIED: a scalar in a drill-down column opened a session"
        );
    }

    #[test]
    fn f010_column_name() {
        let session = open();
        assert_eq!(session.column_name(0).unwrap(), "Name");
        assert!(session.column_name(9).is_err());
    }
}
