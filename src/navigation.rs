//! Drill-down navigation
//!
//! [`Navigator`] is an explicit stack of [`Session`]s. Activating a
//! drill-down cell pushes a new, independent session seeded with a copy of
//! the cell's value; closing pops it. Only the top session is interactive,
//! which gives the modal behaviour of nested windows without any shared
//! state.

use tracing::info;

use crate::columns::ViewMode;
use crate::config::ViewOptions;
use crate::error::{Error, Result};
use crate::session::Session;
use crate::theme::Theme;
use crate::value::Value;

/// Default limit on nested drill-down sessions
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Stack of open sessions, root first
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Session>,
    mode: ViewMode,
    max_depth: usize,
}

impl Navigator {
    /// Open the root session.
    ///
    /// Returns `Ok(None)` when there is nothing to display.
    pub fn open(
        values: Vec<Value>,
        options: &ViewOptions,
        source: Option<&str>,
    ) -> Result<Option<Self>> {
        options.validate()?;
        let root = Session::open(values, options, source)?;
        Ok(root.map(|session| Self::with_root(session, options.view_mode, options.max_depth)))
    }

    /// Start navigation from an existing session
    pub fn with_root(root: Session, mode: ViewMode, max_depth: usize) -> Self {
        Self {
            stack: vec![root],
            mode,
            max_depth,
        }
    }

    /// Open a nested session over `value`, titled after `property_name`.
    ///
    /// A null value is a silent no-op returning `Ok(None)`. Fails with
    /// [`Error::NavigationDepth`] once `max_depth` nested sessions are open.
    pub fn activate(
        &mut self,
        value: &Value,
        property_name: &str,
        theme: &Theme,
    ) -> Result<Option<&Session>> {
        if value.is_null() {
            return Ok(None);
        }
        if self.depth() >= self.max_depth {
            return Err(Error::NavigationDepth {
                limit: self.max_depth,
            });
        }

        let session = Session::for_value(value.clone(), property_name, theme.clone(), self.mode);
        self.stack.push(session);
        info!(depth = self.depth(), property = property_name, "drilled down");
        Ok(self.stack.last())
    }

    /// Drill into the cell at (`row`, `col`) of the current session.
    ///
    /// `row` indexes the dataset. Text and empty cells are a no-op.
    pub fn drill(&mut self, row: usize, col: usize) -> Result<Option<&Session>> {
        let Some(current) = self.stack.last() else {
            return Ok(None);
        };
        let Some(value) = current.drill_value(row, col)?.cloned() else {
            return Ok(None);
        };
        let name = current.column_name(col)?.to_string();
        let theme = current.theme().clone();
        self.activate(&value, &name, &theme)
    }

    /// Close the top session, returning it.
    ///
    /// Closing the root leaves the navigator empty.
    pub fn close(&mut self) -> Option<Session> {
        let closed = self.stack.pop();
        if let Some(session) = &closed {
            info!(title = session.title(), depth = self.stack.len(), "session closed");
        }
        closed
    }

    /// The interactive (top) session
    #[inline]
    pub fn current(&self) -> Option<&Session> {
        self.stack.last()
    }

    /// Mutable access to the interactive session
    #[inline]
    pub fn current_mut(&mut self) -> Option<&mut Session> {
        self.stack.last_mut()
    }

    /// Number of nested sessions above the root
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    /// Check if every session has been closed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Configured depth limit
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Titles from the root to the current session
    pub fn breadcrumbs(&self) -> Vec<&str> {
        self.stack.iter().map(Session::title).collect()
    }
}
