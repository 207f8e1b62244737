//! drillgrid CLI
//!
//! Command-line interface: the interactive viewer plus non-interactive
//! table, column and summary printing.

use std::{path::PathBuf, process::ExitCode};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::{
    columns::ViewMode,
    config::ViewOptions,
    load::{InputFormat, LoadOptions, ObjectStyle},
};

mod basic;
mod view;

pub use basic::{ColumnRef, DrillStep};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "DRILLGRID_LOG";

/// Width used for non-interactive output
const DEFAULT_PRINT_WIDTH: u16 = 120;

/// drillgrid - Schema-less tabular viewer for nested data
#[derive(Parser)]
#[command(name = "drillgrid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr (overrides DRILLGRID_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive grid viewer with filtering and drill-down
    View {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Print the grid as a text table
    Table {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        display: DisplayArgs,
        #[command(flatten)]
        target: TargetArgs,
        /// Maximum number of rows to print
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Output width in terminal columns
        #[arg(long, default_value_t = DEFAULT_PRINT_WIDTH)]
        width: u16,
    },
    /// Print the inferred columns and their kinds
    Columns {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        display: DisplayArgs,
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Print the per-type summary
    Summary {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        display: DisplayArgs,
        #[command(flatten)]
        target: TargetArgs,
    },
}

/// Where values come from
#[derive(Args, Debug, Clone)]
pub(crate) struct InputArgs {
    /// Input file (JSON, JSON Lines or YAML); `-` reads stdin
    pub path: PathBuf,
    /// Input format, detected from the extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<InputFormat>,
    /// How objects are represented
    #[arg(long, value_enum, default_value_t = ObjectStyle::Record)]
    pub objects: ObjectStyle,
}

impl InputArgs {
    pub(crate) fn load_options(&self) -> LoadOptions {
        LoadOptions {
            format: self.format,
            objects: self.objects,
        }
    }

    /// Invocation echo appended to the window title
    pub(crate) fn source(&self) -> String {
        self.path.display().to_string()
    }
}

/// Display options; flags override the `--config` file
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct DisplayArgs {
    /// Window title
    #[arg(long)]
    pub title: Option<String>,
    /// Do not append the input path to the title
    #[arg(long)]
    pub no_title_suffix: bool,
    /// Column selection mode
    #[arg(long, value_enum)]
    pub mode: Option<ViewMode>,
    /// Theme name (Dark or Light)
    #[arg(long)]
    pub theme: Option<String>,
    /// Maximum drill-down depth
    #[arg(long)]
    pub max_depth: Option<usize>,
    /// Initial filter pattern
    #[arg(long)]
    pub filter: Option<String>,
    /// YAML options file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl DisplayArgs {
    /// Merge flags over the options file, or over the defaults
    pub(crate) fn view_options(&self) -> crate::Result<ViewOptions> {
        let mut options = match &self.config {
            Some(path) => ViewOptions::from_yaml_file(path)?,
            None => ViewOptions::default(),
        };
        if let Some(title) = &self.title {
            options.title = Some(title.clone());
        }
        if self.no_title_suffix {
            options.remove_title_suffix = true;
        }
        if let Some(mode) = self.mode {
            options.view_mode = mode;
        }
        if let Some(theme) = &self.theme {
            options.theme = theme.clone();
        }
        if let Some(max_depth) = self.max_depth {
            options.max_depth = max_depth;
        }
        options.validate()?;
        Ok(options)
    }
}

/// Drill-down path for non-interactive commands
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct TargetArgs {
    /// Drill into a cell before printing, as ROW:COLUMN (repeatable)
    #[arg(long = "drill", value_name = "ROW:COLUMN")]
    pub drill: Vec<DrillStep>,
}

/// Install the stderr log subscriber
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("drillgrid=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    // a subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run the drillgrid CLI.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::View { input, display } => view::cmd_view(&input, &display),
        Commands::Table {
            input,
            display,
            target,
            limit,
            width,
        } => basic::cmd_table(&input, &display, &target.drill, limit, width),
        Commands::Columns {
            input,
            display,
            target,
        } => basic::cmd_columns(&input, &display, &target.drill),
        Commands::Summary {
            input,
            display,
            target,
        } => basic::cmd_summary(&input, &display, &target.drill),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
