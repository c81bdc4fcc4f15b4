use super::App;
use crate::tui_event::BackendEvent;

impl App {
    /// Process a backend event and update model state.
    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::DatesLoaded(Ok(dates)) => {
                let default = dates.default_date().map(str::to_string);
                tracing::info!(count = dates.len(), "date index loaded");
                self.session.set_dates(dates);

                // Keep the current date on a refresh of the index.
                let keep = self
                    .session
                    .selected_date()
                    .is_some_and(|d| self.session.dates().contains(d));
                if !keep && let Some(date) = default {
                    self.start_load(&date);
                }
            }
            BackendEvent::DatesLoaded(Err(err)) => {
                self.session.fail_dates(&err);
            }
            BackendEvent::PapersLoaded { ticket, result } => {
                if self.session.complete_load(&ticket, result) {
                    self.cursor = 0;
                    self.list_offset = 0;
                    self.detail_scroll = 0;
                    self.clamp_cursor();
                }
            }
        }
    }
}
