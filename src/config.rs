//! Viewer options
//!
//! Options can come from a YAML file, from CLI flags, or both; flags given
//! on the command line override file values.

use std::path::Path;

use serde::Deserialize;

use crate::columns::ViewMode;
use crate::error::{Error, Result};
use crate::navigation::DEFAULT_MAX_DEPTH;

/// Default window title
pub const DEFAULT_TITLE: &str = "drillgrid";

/// Options recognized by the viewer entry point
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct ViewOptions {
    /// Window caption
    pub title: Option<String>,
    /// Suppress the invocation echo appended to the caption
    pub remove_title_suffix: bool,
    /// Column selection mode
    pub view_mode: ViewMode,
    /// Theme name, resolved when a session opens
    pub theme: String,
    /// Maximum drill-down depth
    pub max_depth: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            title: None,
            remove_title_suffix: false,
            view_mode: ViewMode::Default,
            theme: "Dark".to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ViewOptions {
    /// Parse options from YAML text
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let options: Self = serde_yaml::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(e, path))?;
        Self::from_yaml_str(&text)
    }

    /// Check option invariants
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::invalid_config("max_depth must be at least 1"));
        }
        Ok(())
    }

    /// Window caption, with the invocation echo unless suppressed
    pub fn window_title(&self, source: Option<&str>) -> String {
        let title = self.title.as_deref().unwrap_or(DEFAULT_TITLE);
        match source {
            Some(source) if !self.remove_title_suffix && !source.is_empty() => {
                format!("{title} - {source}")
            }
            _ => title.to_string(),
        }
    }
}
