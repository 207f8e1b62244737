//! Column inference
//!
//! Derives the ordered column names for a collection of rows, either from
//! each row's reduced default display set or from every property it carries.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::error::Error;
use crate::value::{Properties, Value};

/// Which properties become columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ViewMode {
    /// Reduced default display set per row
    #[default]
    Default,
    /// Every property of every row
    Full,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Full => f.write_str("Full"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "full" => Ok(Self::Full),
            other => Err(Error::invalid_config(format!(
                "unknown view mode '{other}' (expected Default or Full)"
            ))),
        }
    }
}

/// Infer the ordered column names for `rows`.
///
/// - `Full`: union of every property of every row, first-seen order.
/// - `Default` with a mapping first row: that mapping's keys.
/// - `Default` with records: union of each record's default display set.
///   A record that declares no display set contributes all of its
///   properties.
///
/// Scalars and lists contribute no columns. Empty input yields no columns.
pub fn infer_columns(rows: &[Value], mode: ViewMode) -> Vec<String> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };

    let mut columns = ColumnSet::default();

    match mode {
        ViewMode::Full => {
            for row in rows {
                columns.extend(row.list_properties());
            }
        }
        ViewMode::Default => {
            if let Value::Map(mapping) = first {
                columns.extend(mapping.keys());
                return columns.into_names();
            }

            for (index, row) in rows.iter().enumerate() {
                let Value::Record(record) = row else {
                    continue;
                };
                if let Some(display) = record.default_display_properties() {
                    columns.extend(display.iter().map(String::as_str));
                } else {
                    debug!(
                        row = index,
                        type_name = record.type_name(),
                        "record declares no default display set, using all properties"
                    );
                    columns.extend(record.list_properties());
                }
            }
        }
    }

    columns.into_names()
}

/// Recover the header tokens of a rendered text table.
///
/// The header is the first non-blank line directly followed by a rule line
/// made only of dashes and whitespace. Returns `None` when no such pair
/// exists, e.g. for list-formatted output.
pub fn parse_table_header(text: &str) -> Option<Vec<String>> {
    let lines: Vec<&str> = text.lines().collect();

    lines.windows(2).find_map(|pair| {
        let (header, rule) = (pair[0], pair[1]);
        if header.trim().is_empty() || !is_rule_line(rule) {
            return None;
        }
        Some(header.split_whitespace().map(str::to_string).collect())
    })
}

fn is_rule_line(line: &str) -> bool {
    line.contains('-') && line.chars().all(|c| c == '-' || c.is_whitespace())
}

/// Ordered, duplicate-free column name accumulator
#[derive(Debug, Default)]
struct ColumnSet {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl ColumnSet {
    fn extend<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            if self.seen.insert(name.to_string()) {
                self.names.push(name.to_string());
            }
        }
    }

    fn into_names(self) -> Vec<String> {
        self.names
    }
}
