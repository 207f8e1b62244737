//! Summary panel widget
//!
//! Displays a [`Summary`] as a Type / Count / Percent table.

use crate::summary::Summary;

use super::format::{display_width, fit_to_width, truncate_string};

/// Summary panel widget for displaying per-type counts
///
/// # Example
///
/// ```
/// use drillgrid::tui::SummaryPanel;
/// use drillgrid::{summarize, Value};
///
/// let rows = vec![Value::from("a"), Value::from(1), Value::from("b")];
/// let summary = summarize(&rows);
/// let panel = SummaryPanel::new(&summary);
///
/// let lines = panel.render_lines();
/// assert!(lines[2].starts_with("String"));
/// assert_eq!(lines.last().map(String::as_str), Some("Total: 3"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SummaryPanel<'a> {
    summary: &'a Summary,
    display_width: u16,
}

impl<'a> SummaryPanel<'a> {
    /// Create a panel with the default width
    pub fn new(summary: &'a Summary) -> Self {
        Self::with_width(summary, 80)
    }

    /// Create a panel with a specific width
    pub fn with_width(summary: &'a Summary, width: u16) -> Self {
        Self {
            summary,
            display_width: width,
        }
    }

    /// The summarized data
    #[inline]
    pub fn summary(&self) -> &'a Summary {
        self.summary
    }

    /// Display width
    #[inline]
    pub fn display_width(&self) -> u16 {
        self.display_width
    }

    /// Number of type entries
    pub fn entry_count(&self) -> usize {
        self.summary.entries().len()
    }

    /// Render the panel as lines
    pub fn render_lines(&self) -> Vec<String> {
        let entries = self.summary.entries();
        let mut lines = Vec::with_capacity(entries.len() + 3);

        let count_width = entries
            .iter()
            .map(|e| e.count.to_string().len())
            .max()
            .unwrap_or(0)
            .max("Count".len());
        let percent_width = "Percent".len();
        // the type column takes whatever the numbers leave over
        let budget = usize::from(self.display_width)
            .saturating_sub(count_width + percent_width + 4)
            .max(4);
        let type_width = entries
            .iter()
            .map(|e| display_width(&e.type_name))
            .max()
            .unwrap_or(0)
            .max("Type".len())
            .min(budget);

        lines.push(format!(
            "{}  {:>count_width$}  {:>percent_width$}",
            fit_to_width("Type", type_width),
            "Count",
            "Percent",
        ));
        lines.push(format!(
            "{:-<type_width$}  {:-<count_width$}  {:-<percent_width$}",
            "", "", ""
        ));

        for entry in entries {
            lines.push(format!(
                "{}  {:>count_width$}  {:>percent_width$}",
                fit_to_width(&truncate_string(&entry.type_name, type_width), type_width),
                entry.count,
                format!("{:.1}%", entry.percentage),
            ));
        }

        lines.push(format!("Total: {}", self.summary.total()));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::summarize;
    use crate::value::{Record, Value};

    fn rows() -> Vec<Value> {
        vec![
            Record::new("Server").into(),
            Record::new("Server").into(),
            Record::new("Service").into(),
        ]
    }

    #[test]
    fn f001_render_layout() {
        let rows = rows();
        let summary = summarize(&rows);
        let lines = SummaryPanel::new(&summary).render_lines();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Type"));
        assert!(lines[1].starts_with("-------"));
        assert!(lines[2].starts_with("Server"));
        assert!(lines[2].ends_with("66.7%"), "FALSIFIED: got {:?}", lines[2]);
        assert!(lines[3].ends_with("33.3%"));
        assert_eq!(lines[4], "Total: 3");
    }

    #[test]
    fn f002_columns_align() {
        let rows = rows();
        let summary = summarize(&rows);
        let lines = SummaryPanel::new(&summary).render_lines();
        let widths: Vec<usize> = lines[..4].iter().map(|l| display_width(l)).collect();
        assert!(
            widths.windows(2).all(|w| w[0] == w[1]),
            "FALSIFIED: table rows differ in width: {widths:?}"
        );
    }

    #[test]
    fn f003_empty_summary() {
        let summary = summarize(&Vec::<Value>::new());
        let panel = SummaryPanel::new(&summary);
        assert_eq!(panel.entry_count(), 0);
        let lines = panel.render_lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "Total: 0");
    }

    #[test]
    fn f004_long_type_names_truncated() {
        let rows: Vec<Value> = vec![Record::new("A".repeat(200)).into()];
        let summary = summarize(&rows);
        let lines = SummaryPanel::with_width(&summary, 40).render_lines();
        assert!(display_width(&lines[2]) <= 40);
        assert!(lines[2].contains(".."));
    }
}
