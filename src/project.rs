//! Tabular projection
//!
//! Turns an arbitrary collection of values into a [`Dataset`]: ordered rows,
//! ordered typed columns and the view mode they were derived under.

use tracing::debug;

use crate::classify::ValueKind;
use crate::columns::{infer_columns, ViewMode};
use crate::error::{Error, Result};
use crate::value::{Properties, Record, Value};

/// Number of leading rows sampled when deciding a column's kind.
///
/// Rows past the window never influence the kind, so a complex value that
/// first appears at row 11 leaves its column as [`ColumnKind::Text`].
pub const SAMPLE_WINDOW: usize = 10;

/// Column name used for the position of a scalar-array element
pub const INDEX_COLUMN: &str = "Index";
/// Column name used for the element of a scalar array
pub const VALUE_COLUMN: &str = "Value";
/// Runtime type name of the rows synthesized for scalar arrays
pub const INDEXED_TYPE: &str = "IndexedValue";

static NULL: Value = Value::Null;

/// How a column renders its cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Stringified scalar
    Text,
    /// Activation affordance bound to the raw complex value
    DrillDown,
}

/// A named, typed projection over rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    kind: ColumnKind,
}

/// A rendered cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    /// Property absent or null
    Empty,
    /// Scalar value in a text column
    Text(&'a Value),
    /// Raw value behind a drill-down affordance
    DrillDown(&'a Value),
}

impl Column {
    /// Create a column
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Column name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column kind
    #[inline]
    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    /// Check if this column renders drill-down affordances
    #[inline]
    pub fn is_drill_down(&self) -> bool {
        self.kind == ColumnKind::DrillDown
    }

    /// Project a row onto this column
    pub fn project<'a>(&self, row: &'a Value) -> Option<&'a Value> {
        row.get_property(&self.name)
    }

    /// Render a row's cell for this column
    pub fn cell<'a>(&self, row: &'a Value) -> Cell<'a> {
        match self.project(row) {
            None | Some(Value::Null) => Cell::Empty,
            Some(value) => match self.kind {
                ColumnKind::Text => Cell::Text(value),
                ColumnKind::DrillDown => Cell::DrillDown(value),
            },
        }
    }
}

/// Rows plus the columns derived from them
///
/// Columns are computed once at projection time and stay fixed for the life
/// of the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    rows: Vec<Value>,
    columns: Vec<Column>,
    mode: ViewMode,
    indexed: bool,
}

impl Dataset {
    /// Project a collection of values.
    ///
    /// A collection whose first element is scalar becomes an `Index`/`Value`
    /// table with one synthesized row per element. Anything else goes
    /// through column inference and per-column kind sampling. Rows are moved
    /// in, never copied.
    pub fn project(values: Vec<Value>, mode: ViewMode) -> Self {
        if values.first().is_some_and(Value::is_scalar) {
            return Self::project_indexed(values, mode);
        }

        let columns: Vec<Column> = infer_columns(&values, mode)
            .into_iter()
            .map(|name| {
                let kind = sample_column_kind(&values, &name);
                Column::new(name, kind)
            })
            .collect();

        debug!(
            rows = values.len(),
            columns = columns.len(),
            drill_down = columns.iter().filter(|c| c.is_drill_down()).count(),
            %mode,
            "projected dataset"
        );

        Self {
            rows: values,
            columns,
            mode,
            indexed: false,
        }
    }

    /// Project a single value.
    ///
    /// A list is unrolled into its elements; any other value becomes a
    /// one-row collection.
    pub fn project_value(value: Value, mode: ViewMode) -> Self {
        match value {
            Value::List(items) => Self::project(items, mode),
            other => Self::project(vec![other], mode),
        }
    }

    fn project_indexed(values: Vec<Value>, mode: ViewMode) -> Self {
        let rows: Vec<Value> = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                Record::new(INDEXED_TYPE)
                    .with_property(
                        INDEX_COLUMN,
                        Value::Int64(i64::try_from(index).unwrap_or(i64::MAX)),
                    )
                    .with_property(VALUE_COLUMN, value)
                    .into()
            })
            .collect();

        debug!(rows = rows.len(), "projected scalar array as Index/Value");

        Self {
            rows,
            columns: vec![
                Column::new(INDEX_COLUMN, ColumnKind::Text),
                Column::new(VALUE_COLUMN, ColumnKind::Text),
            ],
            mode,
            indexed: true,
        }
    }

    /// Copy of this dataset restricted to `indices`, keeping the columns.
    ///
    /// Out-of-range indices are ignored.
    pub fn subset(&self, indices: &[usize]) -> Self {
        Self {
            rows: indices
                .iter()
                .filter_map(|&i| self.rows.get(i).cloned())
                .collect(),
            columns: self.columns.clone(),
            mode: self.mode,
            indexed: self.indexed,
        }
    }

    /// Rows in input order
    #[inline]
    pub fn rows(&self) -> &[Value] {
        &self.rows
    }

    /// Columns in display order
    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in display order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Row by index
    pub fn row(&self, index: usize) -> Option<&Value> {
        self.rows.get(index)
    }

    /// Column by index
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Index of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    /// Total row count
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column count
    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no rows
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// View mode the columns were derived under
    #[inline]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Check if rows were synthesized from a scalar array
    #[inline]
    pub fn is_indexed(&self) -> bool {
        self.indexed
    }

    /// The values the dataset was projected from.
    ///
    /// For scalar arrays this yields the original elements rather than the
    /// synthesized `Index`/`Value` rows.
    pub fn source_values(&self) -> impl Iterator<Item = &Value> {
        let indexed = self.indexed;
        self.rows.iter().map(move |row| {
            if indexed {
                row.get_property(VALUE_COLUMN).unwrap_or(&NULL)
            } else {
                row
            }
        })
    }

    /// Cell at (`row`, `col`)
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell<'_>> {
        let value = self.rows.get(row).ok_or(Error::RowOutOfBounds {
            index: row,
            total: self.rows.len(),
        })?;
        let column = self.columns.get(col).ok_or(Error::ColumnOutOfBounds {
            index: col,
            total: self.columns.len(),
        })?;
        Ok(column.cell(value))
    }
}

/// Decide a column's kind from the first [`SAMPLE_WINDOW`] rows.
fn sample_column_kind(rows: &[Value], name: &str) -> ColumnKind {
    let complex = rows
        .iter()
        .take(SAMPLE_WINDOW)
        .filter_map(|row| row.get_property(name))
        .any(|value| value.kind() == ValueKind::Complex);

    if complex {
        ColumnKind::DrillDown
    } else {
        ColumnKind::Text
    }
}
