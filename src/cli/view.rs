//! Interactive grid viewer.
//!
//! One [`GridViewer`] is kept per open session, in step with the
//! [`Navigator`] stack. Only the top session receives input.

use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use tracing::debug;

use crate::error::{Error, Result};
use crate::navigation::Navigator;
use crate::session::Session;
use crate::theme::Theme;
use crate::tui::{fit_to_width, GridViewer, SummaryPanel};

use super::basic::open_navigator;
use super::{DisplayArgs, InputArgs};

/// Lines taken by the title bar and status bar
const CHROME_LINES: u16 = 2;

/// Interactive viewer over the loaded input.
pub(crate) fn cmd_view(input: &InputArgs, display: &DisplayArgs) -> Result<()> {
    let Some(nav) = open_navigator(input, display, &[])? else {
        return Ok(());
    };

    terminal::enable_raw_mode().map_err(Error::terminal)?;
    let mut out = stdout();
    execute!(out, terminal::EnterAlternateScreen, cursor::Hide).map_err(Error::terminal)?;

    let mut app = ViewerApp::new(nav);
    let result = app.run(&mut out);

    // restore the terminal even when the loop failed
    let _ = execute!(out, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

/// What a key press asks the loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Continue,
    Quit,
}

/// Interactive state: the session stack plus one viewer per session
struct ViewerApp {
    nav: Navigator,
    viewers: Vec<GridViewer>,
    /// Pattern being typed, while the filter prompt is open
    prompt: Option<String>,
    /// One-shot message shown in the status bar
    message: Option<String>,
    width: u16,
    height: u16,
}

impl ViewerApp {
    fn new(nav: Navigator) -> Self {
        let (width, height) = terminal::size().unwrap_or((80, 24));
        let mut app = Self {
            nav,
            viewers: Vec::new(),
            prompt: None,
            message: None,
            width,
            height,
        };
        if let Some(session) = app.nav.current() {
            let viewer = GridViewer::with_dimensions(session, width, app.grid_height(session));
            app.viewers.push(viewer);
        }
        app
    }

    /// Lines available to the grid, header included
    fn grid_height(&self, session: &Session) -> u16 {
        let summary_lines = session
            .summary()
            .map(|s| u16::try_from(s.entries().len() + 4).unwrap_or(u16::MAX))
            .unwrap_or(0);
        self.height
            .saturating_sub(CHROME_LINES)
            .saturating_sub(summary_lines)
            .max(2)
    }

    fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        loop {
            if self.nav.is_empty() {
                return Ok(());
            }
            self.draw(out)?;

            if !event::poll(Duration::from_millis(100)).map_err(Error::terminal)? {
                continue;
            }
            match event::read().map_err(Error::terminal)? {
                Event::Key(key) => {
                    if self.handle_key(key) == Action::Quit {
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => self.resize(width, height),
                _ => {}
            }
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.relayout();
    }

    /// Recompute the top viewer after its session changed shape
    fn relayout(&mut self) {
        let Some(session) = self.nav.current() else {
            return;
        };
        let grid_height = self.grid_height(session);
        if let Some(viewer) = self.viewers.last_mut() {
            viewer.set_dimensions(session, self.width, grid_height);
            viewer.sync(session);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::Continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        if self.prompt.is_some() {
            self.handle_prompt_key(key.code);
            return Action::Continue;
        }
        self.message = None;

        let Some(viewer) = self.viewers.last_mut() else {
            return Action::Quit;
        };
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.close_session(),
            KeyCode::Down | KeyCode::Char('j') => viewer.select_next(),
            KeyCode::Up | KeyCode::Char('k') => viewer.select_prev(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => viewer.next_column(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => viewer.prev_column(),
            KeyCode::PageDown | KeyCode::Char(' ') => viewer.page_down(),
            KeyCode::PageUp => viewer.page_up(),
            KeyCode::Home | KeyCode::Char('g') => viewer.home(),
            KeyCode::End | KeyCode::Char('G') => viewer.end(),
            KeyCode::Char('/') => {
                let pattern = self
                    .nav
                    .current()
                    .map(|s| s.filter().pattern().to_string())
                    .unwrap_or_default();
                self.prompt = Some(pattern);
            }
            KeyCode::Char('s') => self.toggle_summary(),
            KeyCode::Enter => self.drill(),
            _ => {}
        }

        if self.nav.is_empty() {
            Action::Quit
        } else {
            Action::Continue
        }
    }

    /// Live filter: every keystroke re-filters the top session
    fn handle_prompt_key(&mut self, code: KeyCode) {
        let Some(mut pattern) = self.prompt.take() else {
            return;
        };
        match code {
            KeyCode::Enter => {}
            KeyCode::Esc => self.apply_filter(""),
            KeyCode::Backspace => {
                pattern.pop();
                self.apply_filter(&pattern);
                self.prompt = Some(pattern);
            }
            KeyCode::Char(c) => {
                pattern.push(c);
                self.apply_filter(&pattern);
                self.prompt = Some(pattern);
            }
            _ => self.prompt = Some(pattern),
        }
    }

    fn apply_filter(&mut self, pattern: &str) {
        if let Some(session) = self.nav.current_mut() {
            session.set_filter(pattern);
        }
        self.relayout();
    }

    fn toggle_summary(&mut self) {
        if let Some(session) = self.nav.current_mut() {
            if session.summary().is_some() {
                session.detach_summary();
            } else {
                session.attach_summary();
            }
        }
        self.relayout();
    }

    fn drill(&mut self) {
        let Some(session) = self.nav.current() else {
            return;
        };
        let Some((row, col)) = self.viewers.last().and_then(|v| v.selected_cell(session)) else {
            return;
        };

        match self.nav.drill(row, col).map(|child| child.is_some()) {
            Ok(true) => {
                if let Some(child) = self.nav.current() {
                    let height = self.grid_height(child);
                    let viewer = GridViewer::with_dimensions(child, self.width, height);
                    self.viewers.push(viewer);
                }
            }
            Ok(false) => {}
            Err(e) => {
                debug!(error = %e, "drill-down refused");
                self.message = Some(e.to_string());
            }
        }
    }

    fn close_session(&mut self) {
        if self.nav.close().is_some() {
            self.viewers.pop();
        }
        self.relayout();
    }

    fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        let (Some(session), Some(viewer)) = (self.nav.current(), self.viewers.last()) else {
            return Ok(());
        };
        let theme = session.theme();
        let width = usize::from(self.width);

        queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0)).map_err(Error::terminal)?;

        let title = format!(" {}", self.nav.breadcrumbs().join(" > "));
        draw_line(out, &title, width, theme.header_foreground, theme.header_background, true)?;

        let lines = viewer.render_lines(session);
        let selected_line = viewer.selected_line();
        for (i, line) in lines.iter().enumerate() {
            queue!(out, Print("\r\n")).map_err(Error::terminal)?;
            if i == 0 {
                draw_line(out, line, width, theme.header_foreground, theme.header_background, true)?;
            } else if Some(i) == selected_line {
                draw_line(
                    out,
                    line,
                    width,
                    theme.selection_foreground,
                    theme.selection_background,
                    false,
                )?;
                self.draw_cursor_cell(out, line, i, theme)?;
            } else {
                draw_line(out, line, width, theme.foreground, theme.background, false)?;
            }
        }

        if let Some(summary) = session.summary() {
            queue!(out, Print("\r\n")).map_err(Error::terminal)?;
            for line in SummaryPanel::with_width(summary, self.width).render_lines() {
                queue!(out, Print("\r\n")).map_err(Error::terminal)?;
                draw_line(out, &line, width, theme.muted, theme.background, false)?;
            }
        }

        let status = self.status_text(session);
        queue!(out, cursor::MoveTo(0, self.height.saturating_sub(1))).map_err(Error::terminal)?;
        draw_line(out, &status, width, theme.header_foreground, theme.header_background, false)?;

        queue!(out, ResetColor).map_err(Error::terminal)?;
        out.flush().map_err(Error::terminal)
    }

    /// Highlight the selected cell of the selected row
    fn draw_cursor_cell<W: Write>(
        &self,
        out: &mut W,
        line: &str,
        line_index: usize,
        theme: &Theme,
    ) -> Result<()> {
        let Some(viewer) = self.viewers.last() else {
            return Ok(());
        };
        let Some((start, cell_width)) = viewer.column_span(viewer.selected_column()) else {
            return Ok(());
        };
        let cell: String = skip_columns(line, start);
        let x = u16::try_from(start).unwrap_or(u16::MAX);
        let y = u16::try_from(line_index + 1).unwrap_or(u16::MAX);
        queue!(
            out,
            cursor::MoveTo(x, y),
            SetForegroundColor(theme.selection_foreground.into()),
            SetBackgroundColor(theme.accent.into()),
            SetAttribute(Attribute::Bold),
            Print(fit_to_width(&cell, cell_width)),
            SetAttribute(Attribute::Reset),
        )
        .map_err(Error::terminal)
    }

    fn status_text(&self, session: &Session) -> String {
        if let Some(pattern) = &self.prompt {
            return format!(" Filter: {pattern}_  ({})", session.status());
        }
        if let Some(message) = &self.message {
            return format!(" {message}");
        }
        format!(
            " {} | \u{2191}\u{2193}\u{2190}\u{2192} move | Enter drill | / filter | s summary | q close ",
            session.status()
        )
    }
}

/// Text of `line` starting at display column `start`
fn skip_columns(line: &str, start: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut used = 0;
    line.chars()
        .skip_while(|c| {
            let skip = used < start;
            used += c.width().unwrap_or(0);
            skip
        })
        .collect()
}

fn draw_line<W: Write>(
    out: &mut W,
    text: &str,
    width: usize,
    fg: crate::theme::Rgb,
    bg: crate::theme::Rgb,
    bold: bool,
) -> Result<()> {
    queue!(out, SetForegroundColor(fg.into()), SetBackgroundColor(bg.into()))
        .map_err(Error::terminal)?;
    if bold {
        queue!(out, SetAttribute(Attribute::Bold)).map_err(Error::terminal)?;
    }
    queue!(
        out,
        Print(fit_to_width(text, width)),
        SetAttribute(Attribute::Reset),
        ResetColor
    )
    .map_err(Error::terminal)
}
