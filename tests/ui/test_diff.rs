//! Snapshot tests for Diff View

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use vew::keys::Key;
use vew::model::{CommitId, DiffRange};
use vew::ui::views::DiffView;

use crate::helpers::new_terminal;

const SAMPLE_DIFF: &str = "\
diff --git a/src/main.rs b/src/main.rs
index 1111111..2222222 100644
--- a/src/main.rs
+++ b/src/main.rs
@@ -1,3 +1,3 @@
 fn main() {
-    println!(\"old\");
+    println!(\"new\");
 }
";

fn render(view: &mut DiffView, height: u16) -> Terminal<TestBackend> {
    let mut terminal = new_terminal(80, height);
    terminal
        .draw(|frame| view.render(frame, frame.area()))
        .unwrap();
    terminal
}

#[test]
fn test_diff_view_with_changes() {
    let range = DiffRange::new(CommitId::from("aaa1111"), CommitId::from("bbb2222"));
    let mut view = DiffView::from_output(range, SAMPLE_DIFF);
    let terminal = render(&mut view, 12);

    assert_snapshot!(terminal.backend(), @r#"
    "┌─────────────────────── Vew - Diff [aaa1111..bbb2222] ────────────────────────┐"
    "│diff --git a/src/main.rs b/src/main.rs                                        │"
    "│index 1111111..2222222 100644                                                 │"
    "│--- a/src/main.rs                                                             │"
    "│+++ b/src/main.rs                                                             │"
    "│@@ -1,3 +1,3 @@                                                               │"
    "│ fn main() {                                                                  │"
    "│-    println!("old");                                                         │"
    "│+    println!("new");                                                         │"
    "│ }                                                                            │"
    "│                                                                              │"
    "└──────────────────────────────────────────────────────────────────────────────┘"
    "#);
}

#[test]
fn test_diff_view_empty() {
    let range = DiffRange::against_head(CommitId::from("aaa"));
    let mut view = DiffView::from_output(range, "");
    let terminal = render(&mut view, 8);

    assert_snapshot!(terminal.backend(), @r#"
    "┌─────────────────────────── Vew - Diff [aaa..HEAD] ───────────────────────────┐"
    "│                                                                              │"
    "│                                No differences.                               │"
    "│                                                                              │"
    "│                              Press q to go back                              │"
    "│                                                                              │"
    "│                                                                              │"
    "└──────────────────────────────────────────────────────────────────────────────┘"
    "#);
}

#[test]
fn test_diff_view_against_head_title_uses_short_id() {
    let range = DiffRange::against_head(CommitId::from("0123456789abcdef"));
    let mut view = DiffView::from_output(range, SAMPLE_DIFF);
    let terminal = render(&mut view, 12);

    assert!(terminal.backend().to_string().contains("[01234567..HEAD]"));
}

#[test]
fn test_diff_view_renders_after_navigation() {
    let range = DiffRange::against_head(CommitId::from("aaa"));
    let mut view = DiffView::from_output(range, SAMPLE_DIFF);
    view.handle_key(Key::Bottom);
    let terminal = render(&mut view, 8);

    // 6 visible rows; the last diff line stays on screen
    assert_eq!(view.list.focus_index(), 8);
    assert_eq!(view.list.scroll_offset(), 3);
    assert!(terminal.backend().to_string().contains("│ }"));
}
