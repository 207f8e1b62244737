//! drillgrid - Schema-less tabular viewer for nested runtime values
//!
//! Renders arbitrary, heterogeneous, recursively nested values as a
//! filterable table with drill-down navigation into nested values.
//!
//! # Design Principles
//!
//! 1. **No reflection** - values expose their contents through the
//!    [`Properties`] capability trait
//! 2. **Explicit context** - every grid is a [`Session`]; nested grids live on
//!    a [`Navigator`] stack, nothing is global
//! 3. **Columns fixed at projection** - inferred once, from a bounded sample
//!
//! # Quick Start
//!
//! ```
//! use drillgrid::{Navigator, Record, Value, ViewOptions};
//!
//! let config = Record::new("Config").with_property("Port", 443);
//! let app = Record::new("App")
//!     .with_property("Name", "api")
//!     .with_property("Config", config);
//!
//! let options = ViewOptions::default();
//! let mut nav = Navigator::open(vec![Value::from(app)], &options, None)?
//!     .ok_or("nothing to show")?;
//!
//! let root = nav.current().ok_or("no session")?;
//! assert_eq!(root.dataset().column_names(), vec!["Name", "Config"]);
//!
//! // drill into the Config cell of the first row
//! let child = nav.drill(0, 1)?.ok_or("not a drill-down cell")?;
//! assert_eq!(child.title(), "Config");
//! assert_eq!(child.dataset().column_names(), vec!["Port"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::redundant_clone,
        clippy::float_cmp,
        clippy::similar_names
    )
)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

pub mod classify;
/// CLI module for command-line interface
#[cfg(feature = "cli")]
pub mod cli;
pub mod columns;
pub mod config;
pub mod error;
pub mod filter;
pub mod load;
pub mod navigation;
pub mod project;
pub mod session;
pub mod summary;
pub mod theme;
/// Terminal front end
pub mod tui;
pub mod value;

// Re-exports for convenience
pub use classify::{classify, ValueKind};
pub use columns::{infer_columns, ViewMode};
pub use config::ViewOptions;
pub use error::{Error, Result};
pub use filter::{filter_rows, FilterState};
pub use load::{load_path, load_str, InputFormat, LoadOptions, ObjectStyle};
pub use navigation::{Navigator, DEFAULT_MAX_DEPTH};
pub use project::{Cell, Column, ColumnKind, Dataset, SAMPLE_WINDOW};
pub use session::Session;
pub use summary::{summarize, Summary, TypeCount};
pub use theme::{resolve_theme, Rgb, Theme, ThemeName};
pub use value::{Mapping, Properties, Record, Value};
