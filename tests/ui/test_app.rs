//! Render tests for the whole App (views + status bar + error banner)

use ratatui::{Terminal, backend::TestBackend};

use vew::app::App;
use vew::git::{Backend, GitError};
use vew::keys::Key;
use vew::model::CommitId;

use crate::helpers::new_terminal;

/// Backend with canned output; `diff: None` makes every diff request fail
struct CannedBackend {
    log: String,
    diff: Option<String>,
}

impl Backend for CannedBackend {
    fn fetch_log(&self, _path: Option<&str>) -> Result<String, GitError> {
        Ok(self.log.clone())
    }

    fn fetch_diff(
        &self,
        _from: &CommitId,
        _to: &CommitId,
        _path: Option<&str>,
    ) -> Result<String, GitError> {
        self.diff.clone().ok_or(GitError::CommandFailed {
            stderr: "fatal: bad revision".to_string(),
            exit_code: 128,
        })
    }
}

fn create_app(diff: Option<&str>) -> App {
    let log: String = (0..40)
        .map(|i| format!("commit c{i:03}\nAuthor: x\n\n"))
        .collect();
    App::with_backend(
        Box::new(CannedBackend {
            log,
            diff: diff.map(String::from),
        }),
        None,
    )
}

fn render(app: &mut App) -> Terminal<TestBackend> {
    let mut terminal = new_terminal(100, 20);
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
}

#[test]
fn test_app_renders_log_with_status_bar() {
    let mut app = create_app(Some("diff --git a b\n"));
    let terminal = render(&mut app);
    let screen = terminal.backend().to_string();

    let status = screen.lines().last().unwrap();
    assert!(status.contains("c000"));
    assert!(status.contains("[Enter] Select"));
    assert!(status.contains("[q] Quit"));
}

#[test]
fn test_app_renders_diff_after_shortcut() {
    let mut app = create_app(Some("diff --git a/x b/x\n-old\n+new\n"));
    app.on_key(Key::Shortcut);

    let text = render(&mut app).backend().to_string();

    assert!(text.contains("c000..HEAD"));
    assert!(text.contains("+new"));
    assert!(text.contains("[q] Back"));
}

#[test]
fn test_app_shows_error_banner_on_backend_failure() {
    let mut app = create_app(None);
    app.on_key(Key::Shortcut);

    let text = render(&mut app).backend().to_string();
    assert!(text.contains("Error:"));
    assert!(text.contains("Failed to load diff"));
    assert!(text.contains("No differences."));
}

#[test]
fn test_popped_log_view_keeps_scroll_position() {
    let mut app = create_app(Some("diff --git a b\n"));
    for _ in 0..60 {
        app.on_key(Key::Down);
    }
    let before = render(&mut app).backend().to_string();

    app.on_key(Key::Shortcut);
    render(&mut app);
    app.on_key(Key::Close);

    let after = render(&mut app).backend().to_string();
    assert_eq!(before, after);
    assert!(after.contains("commit c020"));
}
