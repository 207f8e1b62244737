//! drillgrid CLI - Schema-less tabular viewer for nested data
//!
//! Command-line interface for drillgrid operations.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::process::ExitCode;

fn main() -> ExitCode {
    drillgrid::cli::run()
}
