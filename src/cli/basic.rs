//! Non-interactive commands: tables, columns and summaries.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::load::load_path;
use crate::navigation::Navigator;
use crate::project::ColumnKind;
use crate::session::Session;
use crate::tui::{display_width, fit_to_width, GridViewer, SummaryPanel};

use super::{DisplayArgs, InputArgs};

/// Column reference in a drill step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRef {
    /// Zero-based column position
    Index(usize),
    /// Column name
    Name(String),
}

/// One drill-down step, written `ROW:COLUMN`
///
/// `ROW` is a zero-based dataset row; `COLUMN` is a zero-based position or a
/// column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillStep {
    /// Dataset row
    pub row: usize,
    /// Column to drill into
    pub column: ColumnRef,
}

impl FromStr for DrillStep {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (row, column) = s
            .split_once(':')
            .ok_or_else(|| Error::invalid_config(format!("drill step '{s}' is not ROW:COLUMN")))?;
        let row = row
            .trim()
            .parse()
            .map_err(|_| Error::invalid_config(format!("invalid drill row '{row}'")))?;
        let column = column.trim();
        if column.is_empty() {
            return Err(Error::invalid_config(format!("drill step '{s}' has no column")));
        }
        let column = match column.parse() {
            Ok(index) => ColumnRef::Index(index),
            Err(_) => ColumnRef::Name(column.to_string()),
        };
        Ok(Self { row, column })
    }
}

impl fmt::Display for DrillStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.column {
            ColumnRef::Index(index) => write!(f, "{}:{}", self.row, index),
            ColumnRef::Name(name) => write!(f, "{}:{}", self.row, name),
        }
    }
}

/// Load input and open the root session, then follow `drill`.
///
/// Returns `Ok(None)` for empty input.
pub(crate) fn open_navigator(
    input: &InputArgs,
    display: &DisplayArgs,
    drill: &[DrillStep],
) -> Result<Option<Navigator>> {
    let options = display.view_options()?;
    let values = load_path(&input.path, input.load_options())?;
    let source = input.source();
    let Some(mut nav) = Navigator::open(values, &options, Some(&source))? else {
        return Ok(None);
    };

    for step in drill {
        follow_step(&mut nav, step)?;
    }

    if let (Some(pattern), Some(session)) = (&display.filter, nav.current_mut()) {
        session.set_filter(pattern);
    }
    Ok(Some(nav))
}

fn follow_step(nav: &mut Navigator, step: &DrillStep) -> Result<()> {
    let session = nav
        .current()
        .ok_or_else(|| Error::invalid_config("no open session"))?;
    let col = resolve_column(session, &step.column)?;
    debug!(%step, col, "following drill step");

    if nav.drill(step.row, col)?.is_none() {
        return Err(Error::invalid_config(format!(
            "cell {step} is not a drill-down cell"
        )));
    }
    Ok(())
}

fn resolve_column(session: &Session, column: &ColumnRef) -> Result<usize> {
    let dataset = session.dataset();
    match column {
        ColumnRef::Index(index) if *index < dataset.column_count() => Ok(*index),
        ColumnRef::Index(index) => Err(Error::ColumnOutOfBounds {
            index: *index,
            total: dataset.column_count(),
        }),
        ColumnRef::Name(name) => dataset
            .column_index(name)
            .ok_or_else(|| Error::invalid_config(format!("no column named '{name}'"))),
    }
}

fn current(nav: &Navigator) -> Result<&Session> {
    nav.current()
        .ok_or_else(|| Error::invalid_config("no open session"))
}

/// Print the current grid as a table.
pub(crate) fn cmd_table(
    input: &InputArgs,
    display: &DisplayArgs,
    drill: &[DrillStep],
    limit: Option<usize>,
    width: u16,
) -> Result<()> {
    let Some(nav) = open_navigator(input, display, drill)? else {
        return Ok(());
    };
    let session = current(&nav)?;

    let rows = limit.unwrap_or(usize::MAX).min(session.visible_rows().len());
    let height = u16::try_from(rows.saturating_add(1)).unwrap_or(u16::MAX);
    let viewer = GridViewer::with_dimensions(session, width, height);

    println!("{}", nav.breadcrumbs().join(" > "));
    println!();
    for line in viewer.render_lines(session) {
        println!("{}", line.trim_end());
    }
    println!();
    println!("{}", session.status());

    Ok(())
}

/// Print the inferred columns and their kinds.
pub(crate) fn cmd_columns(
    input: &InputArgs,
    display: &DisplayArgs,
    drill: &[DrillStep],
) -> Result<()> {
    let Some(nav) = open_navigator(input, display, drill)? else {
        return Ok(());
    };
    let session = current(&nav)?;
    let dataset = session.dataset();

    let name_width = dataset
        .column_names()
        .iter()
        .map(|name| display_width(name))
        .max()
        .unwrap_or(0)
        .max("Column".len());

    println!("Columns for {} ({} mode):", session.title(), dataset.mode());
    println!();
    println!("  {}  Kind", fit_to_width("Column", name_width));
    for column in dataset.columns() {
        let kind = match column.kind() {
            ColumnKind::Text => "Text",
            ColumnKind::DrillDown => "DrillDown",
        };
        println!("  {}  {}", fit_to_width(column.name(), name_width), kind);
    }

    Ok(())
}

/// Print the per-type summary of the current session.
pub(crate) fn cmd_summary(
    input: &InputArgs,
    display: &DisplayArgs,
    drill: &[DrillStep],
) -> Result<()> {
    let Some(mut nav) = open_navigator(input, display, drill)? else {
        return Ok(());
    };
    let session = nav
        .current_mut()
        .ok_or_else(|| Error::invalid_config("no open session"))?;

    let summary = session.attach_summary().clone();
    println!("Summary for {}:", session.title());
    println!();
    for line in SummaryPanel::new(&summary).render_lines() {
        println!("{}", line.trim_end());
    }

    Ok(())
}
