//! View navigation (opening views with data loading)

use tracing::{error, info, warn};

use crate::model::DiffRange;
use crate::ui::views::{DiffView, View};

use super::state::App;

impl App {
    /// Fetch the diff for `range` and push a diff view
    ///
    /// Backend failures degrade to an empty diff view with an error banner.
    pub(crate) fn open_diff(&mut self, range: DiffRange) {
        info!(from = %range.from, to = %range.to, "opening diff");

        let output = match self.backend.fetch_diff(
            &range.from,
            &range.to,
            self.path_filter.as_deref(),
        ) {
            Ok(output) => output,
            Err(e) => {
                warn!(error = %e, "failed to load diff, showing empty view");
                self.error_message = Some(format!("Failed to load diff: {}", e));
                String::new()
            }
        };

        self.views.push(View::Diff(DiffView::from_output(range, &output)));
    }

    /// Return to the previous view
    pub(crate) fn close_view(&mut self) {
        if let Err(e) = self.views.pop() {
            error!(error = %e, "close requested on the root view");
            self.error_message = Some(e.to_string());
        }
    }
}
