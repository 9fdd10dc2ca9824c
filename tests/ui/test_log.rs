//! Snapshot tests for Log View
//!
//! Uses insta + ratatui TestBackend for visual regression testing.

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use vew::keys::Key;
use vew::ui::views::LogView;

use crate::helpers::new_terminal;

const SAMPLE_LOG: &str = "\
commit 3f2a9c1d0b4e5f60718293a4b5c6d7e8f9012345
Author: Test User <test@example.com>

    First change

commit 9e8d7c6b5a4f3e2d1c0b9a8f7e6d5c4b3a291807
Author: Test User <test@example.com>

    Second change
";

fn render(view: &mut LogView, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = new_terminal(width, height);
    terminal
        .draw(|frame| view.render(frame, frame.area()))
        .unwrap();
    terminal
}

#[test]
fn test_log_view_idle() {
    let mut view = LogView::from_output(SAMPLE_LOG);
    let terminal = render(&mut view, 80, 12);

    assert_snapshot!(terminal.backend(), @r#"
    " Enter: select a commit | h: compare with HEAD                                  "
    "┌──────────────────────────── Vew - Log [9 lines] ─────────────────────────────┐"
    "│ commit 3f2a9c1d0b4e5f60718293a4b5c6d7e8f9012345                              │"
    "│ Author: Test User <test@example.com>                                         │"
    "│                                                                              │"
    "│     First change                                                             │"
    "│                                                                              │"
    "│ commit 9e8d7c6b5a4f3e2d1c0b9a8f7e6d5c4b3a291807                              │"
    "│ Author: Test User <test@example.com>                                         │"
    "│                                                                              │"
    "│     Second change                                                            │"
    "└──────────────────────────────────────────────────────────────────────────────┘"
    "#);
}

#[test]
fn test_log_view_armed_commit_fits_80_columns() {
    let mut view = LogView::from_output(SAMPLE_LOG);
    view.handle_key(Key::Select);
    let terminal = render(&mut view, 80, 12);

    // Prompt names the armed commit and every line it owns is marked
    assert_snapshot!(terminal.backend(), @r#"
    " Commit 3f2a9c1d armed: Enter on another commit, or here again for HEAD         "
    "┌──────────────────────────── Vew - Log [9 lines] ─────────────────────────────┐"
    "│▌commit 3f2a9c1d0b4e5f60718293a4b5c6d7e8f9012345                              │"
    "│▌Author: Test User <test@example.com>                                         │"
    "│▌                                                                             │"
    "│▌    First change                                                             │"
    "│▌                                                                             │"
    "│ commit 9e8d7c6b5a4f3e2d1c0b9a8f7e6d5c4b3a291807                              │"
    "│ Author: Test User <test@example.com>                                         │"
    "│                                                                              │"
    "│     Second change                                                            │"
    "└──────────────────────────────────────────────────────────────────────────────┘"
    "#);
}

#[test]
fn test_log_view_empty() {
    let mut view = LogView::from_output("");
    let terminal = render(&mut view, 80, 8);

    assert_snapshot!(terminal.backend(), @r#"
    " Enter: select a commit | h: compare with HEAD                                  "
    "┌──────────────────────────── Vew - Log [0 lines] ─────────────────────────────┐"
    "│                                                                              │"
    "│                               No commits found.                              │"
    "│                                                                              │"
    "│           Hint: is this a git repository with at least one commit?           │"
    "│                                                                              │"
    "└──────────────────────────────────────────────────────────────────────────────┘"
    "#);
}

#[test]
fn test_log_view_scrolls_to_keep_focus_visible() {
    let log: String = (0..50).map(|i| format!("commit c{i:03}\n")).collect();
    let mut view = LogView::from_output(&log);
    view.handle_key(Key::Bottom);

    // 1 prompt row + 2 border rows leave 7 visible lines
    let terminal = render(&mut view, 60, 10);

    assert_eq!(view.list.scroll_offset(), 43);
    assert_snapshot!(terminal.backend(), @r#"
    " Enter: select a commit | h: compare with HEAD              "
    "┌────────────────── Vew - Log [50 lines] ──────────────────┐"
    "│ commit c043                                              │"
    "│ commit c044                                              │"
    "│ commit c045                                              │"
    "│ commit c046                                              │"
    "│ commit c047                                              │"
    "│ commit c048                                              │"
    "│ commit c049                                              │"
    "└──────────────────────────────────────────────────────────┘"
    "#);
}
