#![allow(clippy::unwrap_used)] // Tests can use unwrap() for simplicity
//! TUI Snapshot Tests
//!
//! Tests for TUI rendering using plain-text snapshots.
//! These tests capture the rendered lines and verify they match expectations.

use drillgrid::tui::{GridViewer, ScrollState, SummaryPanel, DRILL_MARKER};
use drillgrid::{summarize, Record, Session, Theme, Value, ViewMode};

// ============================================================================
// Test Helpers
// ============================================================================

fn create_hosts(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            Record::new("Host")
                .with_property("Name", format!("host_{i}"))
                .with_property("Role", if i % 2 == 0 { "web" } else { "db" })
                .with_property("Cores", (i * 2) as i32)
                .with_property("Disks", vec![format!("sd{i}"), "sdz".to_string()])
                .with_default_display(["Name", "Role", "Disks"])
                .into()
        })
        .collect()
}

fn create_test_session(rows: usize) -> Session {
    Session::for_value(
        create_hosts(rows).into(),
        "Hosts",
        Theme::dark(),
        ViewMode::Default,
    )
}

// ============================================================================
// GridViewer Snapshot Tests
// ============================================================================

#[test]
fn test_viewer_render_header() {
    let session = create_test_session(10);
    let viewer = GridViewer::with_dimensions(&session, 80, 10);

    let header = viewer.render_header_line(&session);

    assert!(header.starts_with("Name"));
    assert!(header.contains("Role"));
    assert!(header.contains("Disks"));
    // Cores is not in the display set
    assert!(!header.contains("Cores"));
}

#[test]
fn test_viewer_render_first_row() {
    let session = create_test_session(10);
    let viewer = GridViewer::with_dimensions(&session, 80, 10);

    let row = viewer.render_row_line(&session, 0).unwrap();
    assert!(row.contains("host_0"));
    assert!(row.contains("web"));
    assert!(row.contains("[2 items]"));
    assert!(row.contains(DRILL_MARKER));
}

#[test]
fn test_viewer_render_lines_count() {
    let session = create_test_session(5);
    let viewer = GridViewer::with_dimensions(&session, 80, 10);

    let lines = viewer.render_lines(&session);

    // header + 5 data rows
    assert_eq!(lines.len(), 6);
}

#[test]
fn test_viewer_render_lines_capped_by_height() {
    let session = create_test_session(50);
    let viewer = GridViewer::with_dimensions(&session, 80, 10);

    let lines = viewer.render_lines(&session);

    // header + height - 1 rows
    assert_eq!(lines.len(), 10);
}

#[test]
fn test_viewer_lines_fit_width() {
    let session = create_test_session(20);
    let viewer = GridViewer::with_dimensions(&session, 20, 10);

    for line in viewer.render_lines(&session) {
        assert!(
            drillgrid::tui::display_width(&line) <= 20,
            "FALSIFIED: line wider than viewport: {line:?}"
        );
    }
}

#[test]
fn test_viewer_scroll_operations() {
    let session = create_test_session(50);
    let mut viewer = GridViewer::with_dimensions(&session, 80, 10);

    assert_eq!(viewer.scroll_offset(), 0);

    viewer.page_down();
    assert!(viewer.scroll_offset() > 0);

    let offset_after_page = viewer.scroll_offset();
    viewer.page_up();
    assert!(viewer.scroll_offset() < offset_after_page);

    viewer.end();
    assert_eq!(viewer.selected_row(), Some(49));
    assert!(viewer.scroll_offset() > 0);

    viewer.home();
    assert_eq!(viewer.scroll_offset(), 0);
    assert_eq!(viewer.selected_row(), Some(0));
}

#[test]
fn test_viewer_selection_operations() {
    let session = create_test_session(20);
    let mut viewer = GridViewer::with_dimensions(&session, 80, 10);

    assert_eq!(viewer.selected_row(), Some(0));

    viewer.select_next();
    viewer.select_next();
    assert_eq!(viewer.selected_row(), Some(2));
    assert_eq!(viewer.selected_line(), Some(3));

    viewer.select_prev();
    assert_eq!(viewer.selected_row(), Some(1));

    viewer.next_column();
    viewer.next_column();
    assert_eq!(viewer.selected_column(), 2);
    viewer.next_column();
    assert_eq!(viewer.selected_column(), 2, "FALSIFIED: cursor left the grid");

    viewer.prev_column();
    assert_eq!(viewer.selected_column(), 1);
}

#[test]
fn test_viewer_follows_filter() {
    let mut session = create_test_session(20);
    let mut viewer = GridViewer::with_dimensions(&session, 80, 10);
    viewer.end();

    session.set_filter("host_1");
    viewer.sync(&session);

    // host_1 and host_10..host_19
    assert_eq!(viewer.row_count(), 11);
    assert!(viewer.selected_row().unwrap() < 11);

    let lines = viewer.render_lines(&session);
    assert!(lines[1].contains("host_1"));
    assert!(lines.iter().skip(1).all(|l| l.contains("host_1")));

    // the selected cell points back into the full dataset
    viewer.home();
    assert_eq!(viewer.selected_cell(&session), Some((1, 0)));
}

#[test]
fn test_viewer_filter_to_nothing() {
    let mut session = create_test_session(5);
    let mut viewer = GridViewer::with_dimensions(&session, 80, 10);

    session.set_filter("no such host");
    viewer.sync(&session);

    assert_eq!(viewer.row_count(), 0);
    assert_eq!(viewer.selected_row(), None);
    assert_eq!(viewer.selected_cell(&session), None);
    assert_eq!(viewer.render_lines(&session).len(), 1);
    assert_eq!(session.status(), "Showing 0 of 5");
}

#[test]
fn test_viewer_column_span_matches_render() {
    let session = create_test_session(3);
    let viewer = GridViewer::with_dimensions(&session, 80, 10);

    let header = viewer.render_header_line(&session);
    let (start, width) = viewer.column_span(1).unwrap();
    assert_eq!(header[start..start + width].trim_end(), "Role");
    assert!(viewer.column_span(3).is_none());
}

#[test]
fn test_viewer_scalar_list() {
    let ports = Value::from(vec![80, 443, 8080]);
    let session = Session::for_value(ports, "Ports", Theme::dark(), ViewMode::Default);
    let viewer = GridViewer::with_dimensions(&session, 40, 10);

    let lines = viewer.render_lines(&session);
    assert!(lines[0].starts_with("Index"));
    assert!(lines[0].contains("Value"));
    assert!(lines[3].starts_with('2'));
    assert!(lines[3].contains("8080"));
}

// ============================================================================
// ScrollState Tests
// ============================================================================

#[test]
fn test_scroll_state_empty() {
    let state = ScrollState::new(0, 10);
    assert_eq!(state.selected(), None);
    assert!(!state.needs_scrollbar());
    assert_eq!(state.visible_range(), 0..0);
}

#[test]
fn test_scroll_state_keeps_selection_visible() {
    let mut state = ScrollState::new(100, 10);
    state.set_selected(Some(55));
    assert!(state.visible_range().contains(&55));
    state.set_visible_rows(5);
    assert!(state.visible_range().contains(&55));
}

// ============================================================================
// SummaryPanel Snapshot Tests
// ============================================================================

#[test]
fn test_summary_panel_snapshot() {
    let mut rows = create_hosts(3);
    rows.push(Record::new("Service").with_property("Name", "sshd").into());
    rows.push("loose".into());
    let summary = summarize(&rows);
    let panel = SummaryPanel::new(&summary);

    let lines = panel.render_lines();

    assert_eq!(
        lines,
        vec![
            "Type     Count  Percent".to_string(),
            "-------  -----  -------".to_string(),
            "Host         3    60.0%".to_string(),
            "Service      1    20.0%".to_string(),
            "String       1    20.0%".to_string(),
            "Total: 5".to_string(),
        ]
    );
}

#[test]
fn test_summary_panel_empty() {
    let summary = summarize(&Vec::<Value>::new());
    let panel = SummaryPanel::new(&summary);
    assert_eq!(panel.entry_count(), 0);

    let lines = panel.render_lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines.last().unwrap(), "Total: 0");
}

#[test]
fn test_summary_panel_truncates_long_types() {
    let rows: Vec<Value> = vec![Record::new("A".repeat(60)).into()];
    let summary = summarize(&rows);
    let panel = SummaryPanel::with_width(&summary, 30);

    for line in panel.render_lines() {
        assert!(
            drillgrid::tui::display_width(&line) <= 30,
            "FALSIFIED: summary line wider than panel: {line:?}"
        );
    }
}
